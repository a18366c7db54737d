use std::collections::{HashMap, HashSet};
use std::collections::hash_map::Entry;
use std::sync::Arc;

use async_graphql::dynamic::{Field, FieldFuture, InputValue, Object, ObjectAccessor, Schema};
use tracing::{debug, info};

use crate::error::{Result, TutorialError};
use crate::storage::TutorialRepository;

use super::definition::{Arguments, BUILTIN_SCALARS, FieldDef, ObjectDef};
use super::types::{hello_query, tutorial_query};

/// A root query assembled from type definitions, not yet checked.
#[derive(Debug, Clone)]
pub struct SchemaDefinition {
    query: ObjectDef,
}

/// A schema that passed validation and is ready to execute queries.
pub struct TutorialSchema {
    pub(crate) schema: Schema,
}

pub fn build_hello_schema() -> Result<TutorialSchema> {
    SchemaDefinition::new(hello_query()).validate()
}

pub fn build_tutorial_schema(repo: Arc<TutorialRepository>) -> Result<TutorialSchema> {
    SchemaDefinition::new(tutorial_query(repo)).validate()
}

impl SchemaDefinition {
    pub fn new(query: ObjectDef) -> Self {
        Self { query }
    }

    pub fn query(&self) -> &ObjectDef {
        &self.query
    }

    /// Checks the type graph and builds the executable schema.
    ///
    /// Rejects objects without fields, repeated field names within an object,
    /// two different objects sharing a name and references to types that are
    /// never defined.
    pub fn validate(self) -> Result<TutorialSchema> {
        let objects = collect_objects(&self.query)?;

        for object in &objects {
            check_fields(object)?;
        }
        check_references(&objects)?;

        let mut builder = Schema::build(self.query.name(), None, None);
        for object in &objects {
            builder = builder.register(to_dynamic_object(object));
        }
        let schema = builder.finish()?;

        info!(
            query = self.query.name(),
            types = objects.len(),
            "Schema validated"
        );
        Ok(TutorialSchema { schema })
    }
}

impl TutorialSchema {
    /// The schema rendered in SDL.
    pub fn sdl(&self) -> String {
        self.schema.sdl()
    }
}

/// Every object reachable from `root`, root first, each name once.
fn collect_objects(root: &ObjectDef) -> Result<Vec<&ObjectDef>> {
    let mut seen = HashMap::new();
    let mut order = Vec::new();
    visit(root, &mut seen, &mut order)?;
    Ok(order)
}

fn visit<'a>(
    object: &'a ObjectDef,
    seen: &mut HashMap<&'a str, &'a ObjectDef>,
    order: &mut Vec<&'a ObjectDef>,
) -> Result<()> {
    match seen.entry(object.name()) {
        Entry::Occupied(existing) => {
            if !same_shape(existing.get(), object) {
                return Err(TutorialError::DuplicateType(object.name().to_string()));
            }
        }
        Entry::Vacant(slot) => {
            slot.insert(object);
            order.push(object);
        }
    }

    // Repeated definitions are walked too: their nested objects must match.
    for field in object.fields() {
        if let Some(nested) = field.ty().embedded_object() {
            visit(nested, seen, order)?;
        }
    }
    Ok(())
}

/// Whether two objects expose the same fields with the same types and arguments.
fn same_shape(a: &ObjectDef, b: &ObjectDef) -> bool {
    fn signature(field: &FieldDef) -> (String, String, Vec<(String, String)>) {
        let arguments = field
            .arguments()
            .iter()
            .map(|input| (input.name.clone(), input.ty.to_string()))
            .collect();
        (field.name().to_string(), field.ty().to_string(), arguments)
    }

    a.fields().iter().map(signature).eq(b.fields().iter().map(signature))
}

fn check_fields(object: &ObjectDef) -> Result<()> {
    if object.fields().is_empty() {
        return Err(TutorialError::EmptyObject(object.name().to_string()));
    }

    let mut names = HashSet::new();
    for field in object.fields() {
        if !names.insert(field.name()) {
            return Err(TutorialError::DuplicateField {
                type_name: object.name().to_string(),
                field: field.name().to_string(),
            });
        }
    }
    Ok(())
}

fn check_references(objects: &[&ObjectDef]) -> Result<()> {
    let known = |name: &str| {
        BUILTIN_SCALARS.contains(&name) || objects.iter().any(|o| o.name() == name)
    };

    for object in objects {
        for field in object.fields() {
            let referenced = std::iter::once(field.ty())
                .chain(field.arguments().iter().map(|a| &a.ty))
                .map(|ty| ty.base_name());

            for name in referenced {
                if !known(name) {
                    return Err(TutorialError::UnknownType {
                        type_name: object.name().to_string(),
                        field: field.name().to_string(),
                        referenced: name.to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}

fn to_dynamic_object(def: &ObjectDef) -> Object {
    let mut object = Object::new(def.name());
    if let Some(description) = def.description_text() {
        object = object.description(description);
    }
    for field in def.fields() {
        object = object.field(to_dynamic_field(field));
    }
    object
}

fn to_dynamic_field(def: &FieldDef) -> Field {
    let resolve = def.resolve_fn();
    let arg_names: Vec<String> = def.arguments().iter().map(|a| a.name.clone()).collect();
    let field_name = def.name().to_string();

    let mut field = Field::new(def.name(), def.ty().to_type_ref(), move |ctx| {
        let resolve = resolve.clone();
        let args = collect_arguments(&ctx.args, &arg_names);
        let parent = ctx.parent_value;
        debug!(field = %field_name, args = args.len(), "Resolving field");
        FieldFuture::new(async move { resolve(parent, &args) })
    });

    for input in def.arguments() {
        let mut value = InputValue::new(input.name.as_str(), input.ty.to_type_ref());
        if let Some(description) = &input.description {
            value = value.description(description.as_str());
        }
        field = field.argument(value);
    }
    if let Some(description) = def.description_text() {
        field = field.description(description);
    }
    field
}

fn collect_arguments(accessor: &ObjectAccessor<'_>, names: &[String]) -> Arguments {
    names
        .iter()
        .filter_map(|name| {
            accessor
                .get(name)
                .map(|value| (name.clone(), value.as_value().clone()))
        })
        .collect()
}
