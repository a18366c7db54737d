//! GraphQL schema, resolvers and execution.
//!
//! Types are described declaratively with [`ObjectDef`] and [`FieldDef`],
//! entry-point fields are bound to [`Resolver`] objects, and the whole graph is
//! checked by [`SchemaDefinition::validate`] before async-graphql's dynamic
//! engine executes anything.
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use graphql_tutorial::graphql::{LIST_QUERY, build_tutorial_schema};
//! use graphql_tutorial::storage::TutorialRepository;
//!
//! let repo = Arc::new(TutorialRepository::sample());
//! let schema = build_tutorial_schema(repo)?;
//! println!("{}", schema.execute(LIST_QUERY)?.to_json()?);
//! # Ok::<(), graphql_tutorial::error::TutorialError>(())
//! ```
//!
//! ## Schema
//!
//! - **Greeting**: `hello`
//! - **Tutorial**: `tutorial(id: Int)`, `list`

mod definition;
mod executor;
mod resolvers;
mod schema;
mod types;

pub use definition::{
    Arguments, BUILTIN_SCALARS, FieldDef, InputDef, IntoFieldValue, ObjectDef, TypeDef,
};
pub use executor::{Executed, HELLO_QUERY, LIST_QUERY};
pub use resolvers::{GREETING, HelloResolver, ListResolver, Resolver, TutorialResolver};
pub use schema::{SchemaDefinition, TutorialSchema, build_hello_schema, build_tutorial_schema};
pub use types::{
    QUERY_TYPE_NAME, author_type, comment_type, hello_query, tutorial_query, tutorial_type,
};
