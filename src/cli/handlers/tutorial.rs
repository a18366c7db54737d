use std::io;
use std::sync::Arc;

use anyhow::Result;

use crate::graphql::{LIST_QUERY, build_tutorial_schema};
use crate::storage::TutorialRepository;

use super::CommandContext;
use super::utils::run_query;

pub fn handle_tutorial(ctx: &CommandContext) -> Result<()> {
    let repo = Arc::new(TutorialRepository::sample());
    run_query(
        ctx,
        || build_tutorial_schema(repo),
        LIST_QUERY,
        &mut io::stdout().lock(),
    )
}
