//! Type definitions for the greeting and tutorial examples.

use std::sync::Arc;

use async_graphql::Value;
use async_graphql::dynamic::FieldValue;

use crate::model::{Author, Comment, Tutorial};
use crate::storage::TutorialRepository;

use super::definition::{FieldDef, InputDef, IntoFieldValue, ObjectDef, TypeDef};
use super::resolvers::{HelloResolver, ListResolver, TutorialResolver};

pub const QUERY_TYPE_NAME: &str = "RootQuery";

impl IntoFieldValue for Tutorial {
    fn into_field_value<'a>(self) -> FieldValue<'a> {
        FieldValue::owned_any(self)
    }
}

pub fn comment_type() -> ObjectDef {
    ObjectDef::new("Comment").field(FieldDef::scalar("body", TypeDef::String, |c: &Comment| {
        Value::String(c.body.clone())
    }))
}

/// Author fields keep their capitalised names (`Name`, `Tutorials`); queries
/// must use the same case.
pub fn author_type() -> ObjectDef {
    ObjectDef::new("Author")
        .field(FieldDef::scalar("Name", TypeDef::String, |a: &Author| {
            Value::String(a.name.clone())
        }))
        .field(FieldDef::scalar_list(
            "Tutorials",
            TypeDef::list(TypeDef::Int),
            |a: &Author| a.tutorials.iter().map(|id| Value::from(*id)).collect(),
        ))
}

pub fn tutorial_type() -> ObjectDef {
    let author = author_type();
    let comment = comment_type();

    ObjectDef::new("Tutorial")
        .field(FieldDef::scalar("id", TypeDef::Int, |t: &Tutorial| {
            Value::from(t.id)
        }))
        .field(FieldDef::scalar("title", TypeDef::String, |t: &Tutorial| {
            Value::String(t.title.clone())
        }))
        .field(FieldDef::object(
            "author",
            TypeDef::object(&author),
            |t: &Tutorial| &t.author,
        ))
        .field(FieldDef::list(
            "comments",
            TypeDef::list(TypeDef::object(&comment)),
            |t: &Tutorial| t.comments.as_slice(),
        ))
}

pub fn hello_query() -> ObjectDef {
    ObjectDef::new(QUERY_TYPE_NAME).field(FieldDef::resolver(
        "hello",
        TypeDef::String,
        Arc::new(HelloResolver),
    ))
}

pub fn tutorial_query(repo: Arc<TutorialRepository>) -> ObjectDef {
    let tutorial = tutorial_type();

    ObjectDef::new(QUERY_TYPE_NAME)
        .field(
            FieldDef::resolver(
                "tutorial",
                TypeDef::object(&tutorial),
                Arc::new(TutorialResolver::new(repo.clone())),
            )
            .description("Get Tutorial By ID")
            .argument(InputDef::new("id", TypeDef::Int).description("Tutorial id")),
        )
        .field(
            FieldDef::resolver(
                "list",
                TypeDef::list(TypeDef::object(&tutorial)),
                Arc::new(ListResolver::new(repo)),
            )
            .description("Get Tutorial List"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_field_case() {
        let names: Vec<_> = author_type().field_names().map(str::to_string).collect();
        assert_eq!(names, ["Name", "Tutorials"]);
    }

    #[test]
    fn test_tutorial_embeds_author_and_comments() {
        let tutorial = tutorial_type();
        let author = tutorial.field_named("author").unwrap();
        let comments = tutorial.field_named("comments").unwrap();

        assert_eq!(author.ty().to_string(), "Author");
        assert_eq!(comments.ty().to_string(), "[Comment]");
        assert!(comments.ty().embedded_object().is_some());
    }

    #[test]
    fn test_tutorial_query_arguments() {
        let query = tutorial_query(Arc::new(TutorialRepository::sample()));
        let field = query.field_named("tutorial").unwrap();

        assert_eq!(field.arguments().len(), 1);
        assert_eq!(field.arguments()[0].name, "id");
        assert_eq!(
            field.arguments()[0].description.as_deref(),
            Some("Tutorial id")
        );
        assert!(query.field_named("list").unwrap().arguments().is_empty());
    }
}
