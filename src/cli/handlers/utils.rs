use std::io::Write;

use anyhow::{Context, Result};

use crate::graphql::TutorialSchema;

use super::CommandContext;

/// Writes the banner, runs `query` and writes the JSON result to `out`.
///
/// With `--print-schema` only the SDL is written. On failure nothing follows
/// the banner.
pub fn run_query<F, W>(ctx: &CommandContext, build: F, query: &str, out: &mut W) -> Result<()>
where
    F: FnOnce() -> crate::error::Result<TutorialSchema>,
    W: Write,
{
    if ctx.print_schema {
        let schema = build().context("Failed to create new GraphQL schema")?;
        write!(out, "{}", schema.sdl())?;
        return Ok(());
    }

    writeln!(out, "{}", ctx.config.output.banner)?;

    let schema = build().context("Failed to create new GraphQL schema")?;
    let executed = schema
        .execute(query)
        .context("Failed to execute GraphQL operation")?;

    let json = if ctx.config.output.pretty {
        executed.to_json_pretty()?
    } else {
        executed.to_json()?
    };
    writeln!(out, "{}", json)?;
    Ok(())
}
