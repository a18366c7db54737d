use std::sync::Arc;

use async_graphql::Value;
use graphql_tutorial::error::TutorialError;
use graphql_tutorial::graphql::{
    FieldDef, HELLO_QUERY, LIST_QUERY, ObjectDef, SchemaDefinition, TypeDef, author_type,
    build_hello_schema, build_tutorial_schema, comment_type,
};
use graphql_tutorial::model::{Author, Comment, Tutorial};
use graphql_tutorial::storage::TutorialRepository;
use serde_json::json;

fn sample_schema() -> graphql_tutorial::graphql::TutorialSchema {
    build_tutorial_schema(Arc::new(TutorialRepository::sample())).unwrap()
}

fn run(query: &str) -> serde_json::Value {
    let executed = sample_schema().execute(query).unwrap();
    serde_json::from_str(&executed.to_json().unwrap()).unwrap()
}

// =============================================================================
// Greeting example
// =============================================================================

#[test]
fn test_hello_output() {
    let schema = build_hello_schema().unwrap();
    let json = schema.execute(HELLO_QUERY).unwrap().to_json().unwrap();
    assert_eq!(json, r#"{"data":{"hello":"World"}}"#);
}

// =============================================================================
// Tutorial example
// =============================================================================

#[test]
fn test_list_query_output() {
    assert_eq!(
        run(LIST_QUERY),
        json!({
            "data": {
                "list": [{
                    "id": 1,
                    "title": "Go Graphql Tutorial",
                    "author": { "Name": "osi", "Tutorials": [1] },
                    "comments": [
                        { "body": "First comment" },
                        { "body": "Second comment" }
                    ]
                }]
            }
        })
    );
}

#[test]
fn test_list_query_exact_bytes() {
    let json = sample_schema().execute(LIST_QUERY).unwrap().to_json().unwrap();
    assert_eq!(
        json,
        r#"{"data":{"list":[{"id":1,"title":"Go Graphql Tutorial","author":{"Name":"osi","Tutorials":[1]},"comments":[{"body":"First comment"},{"body":"Second comment"}]}]}}"#
    );
}

#[test]
fn test_tutorial_by_id_matches_list_element() {
    let fields = "id title author { Name Tutorials } comments { body }";
    let by_id = run(&format!("{{ tutorial(id: 1) {{ {fields} }} }}"));
    let list = run(&format!("{{ list {{ {fields} }} }}"));

    assert_eq!(by_id["data"]["tutorial"], list["data"]["list"][0]);
}

#[test]
fn test_tutorial_unknown_id_is_null() {
    assert_eq!(
        run("{ tutorial(id: 2) { id title } }"),
        json!({ "data": { "tutorial": null } })
    );
}

#[test]
fn test_tutorial_without_id_is_null() {
    assert_eq!(
        run("{ tutorial { id } }"),
        json!({ "data": { "tutorial": null } })
    );
}

#[test]
fn test_tutorial_null_id_is_null() {
    assert_eq!(
        run("{ tutorial(id: null) { id } }"),
        json!({ "data": { "tutorial": null } })
    );
}

#[test]
fn test_tutorial_id_from_variable() {
    let schema = sample_schema();
    let request = async_graphql::Request::new("query($id: Int) { tutorial(id: $id) { title } }")
        .variables(async_graphql::Variables::from_json(json!({ "id": 1 })));
    let response = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(schema.execute_request(request));

    assert!(response.errors.is_empty());
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "tutorial": { "title": "Go Graphql Tutorial" } })
    );
}

#[test]
fn test_lowercase_author_fields_are_rejected() {
    let err = sample_schema()
        .execute("{ list { author { name } } }")
        .unwrap_err();
    assert!(matches!(err, TutorialError::Execution(_)));
}

#[test]
fn test_repeated_execution_is_identical() {
    let schema = sample_schema();
    let first = schema.execute(LIST_QUERY).unwrap().to_json().unwrap();
    let second = schema.execute(LIST_QUERY).unwrap().to_json().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_ids_return_first_match() {
    let author = Author::new("osi").with_tutorials(vec![1]);
    let repo = TutorialRepository::new(vec![
        Tutorial::new(1, "first", author.clone()),
        Tutorial::new(1, "shadowed", author),
    ]);
    let schema = build_tutorial_schema(Arc::new(repo)).unwrap();

    let executed = schema.execute("{ tutorial(id: 1) { title } }").unwrap();
    assert_eq!(
        executed.data().clone().into_json().unwrap(),
        json!({ "tutorial": { "title": "first" } })
    );
}

#[test]
fn test_comment_order_preserved() {
    let repo = TutorialRepository::new(vec![
        Tutorial::new(9, "ordered", Author::new("x"))
            .with_comment(Comment::new("z"))
            .with_comment(Comment::new("a"))
            .with_comment(Comment::new("m")),
    ]);
    let schema = build_tutorial_schema(Arc::new(repo)).unwrap();
    let executed = schema.execute("{ list { comments { body } } }").unwrap();

    assert_eq!(
        executed.data().clone().into_json().unwrap(),
        json!({ "list": [{ "comments": [
            { "body": "z" }, { "body": "a" }, { "body": "m" }
        ] }] })
    );
}

#[test]
fn test_empty_store_lists_nothing() {
    let schema = build_tutorial_schema(Arc::new(TutorialRepository::default())).unwrap();
    let executed = schema.execute("{ list { id } }").unwrap();
    assert_eq!(
        executed.data().clone().into_json().unwrap(),
        json!({ "list": [] })
    );
}

// =============================================================================
// Schema construction failures
// =============================================================================

#[test]
fn test_duplicate_field_fails_construction() {
    let author = author_type().field(FieldDef::scalar("Name", TypeDef::String, |a: &Author| {
        Value::String(a.name.clone())
    }));
    let query = ObjectDef::new("RootQuery").field(FieldDef::object(
        "author",
        TypeDef::object(&author),
        |t: &Tutorial| &t.author,
    ));

    let err = SchemaDefinition::new(query).validate().err().unwrap();
    assert!(err.to_string().contains("Name"));
    assert!(matches!(err, TutorialError::DuplicateField { .. }));
}

#[test]
fn test_unresolvable_type_fails_construction() {
    let query = ObjectDef::new("RootQuery").field(FieldDef::list(
        "comments",
        TypeDef::list(TypeDef::named("Remark")),
        |t: &Tutorial| t.comments.as_slice(),
    ));

    let err = SchemaDefinition::new(query).validate().err().unwrap();
    assert!(matches!(err, TutorialError::UnknownType { .. }));
}

#[test]
fn test_named_reference_resolves_when_defined() {
    let comment = comment_type();
    let query = ObjectDef::new("RootQuery")
        .field(FieldDef::list(
            "comments",
            TypeDef::list(TypeDef::object(&comment)),
            |t: &Tutorial| t.comments.as_slice(),
        ))
        .field(FieldDef::list(
            "again",
            TypeDef::list(TypeDef::named("Comment")),
            |t: &Tutorial| t.comments.as_slice(),
        ));

    assert!(SchemaDefinition::new(query).validate().is_ok());
}
