use std::io;

use anyhow::Result;

use crate::graphql::{HELLO_QUERY, build_hello_schema};

use super::CommandContext;
use super::utils::run_query;

pub fn handle_hello(ctx: &CommandContext) -> Result<()> {
    run_query(
        ctx,
        build_hello_schema,
        HELLO_QUERY,
        &mut io::stdout().lock(),
    )
}
