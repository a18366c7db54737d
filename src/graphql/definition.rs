//! Declarative type definitions.
//!
//! An [`ObjectDef`] names a GraphQL object and lists its [`FieldDef`]s. Each
//! field carries its exposed [`TypeDef`] and the function that produces its
//! value. Nothing here talks to the executor directly; the schema module
//! validates a graph of definitions and translates it into a dynamic schema.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_graphql::Value;
use async_graphql::dynamic::{FieldValue, TypeRef};

use super::resolvers::Resolver;

/// Built-in scalar names a [`TypeDef::Named`] may refer to.
pub const BUILTIN_SCALARS: &[&str] = &[
    TypeRef::INT,
    TypeRef::FLOAT,
    TypeRef::STRING,
    TypeRef::BOOLEAN,
    TypeRef::ID,
];

pub(crate) type ResolveFn = Arc<
    dyn for<'a> Fn(&'a FieldValue<'a>, &Arguments) -> async_graphql::Result<Option<FieldValue<'a>>>
        + Send
        + Sync,
>;

fn resolve_fn<F>(f: F) -> ResolveFn
where
    F: for<'a> Fn(&'a FieldValue<'a>, &Arguments) -> async_graphql::Result<Option<FieldValue<'a>>>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// Exposed type of a field or argument.
#[derive(Debug, Clone)]
pub enum TypeDef {
    Int,
    String,
    /// An object defined earlier, embedded by value.
    Object(Arc<ObjectDef>),
    /// A type referenced only by name. Must resolve when the schema is validated.
    Named(String),
    List(Box<TypeDef>),
    NonNull(Box<TypeDef>),
}

impl TypeDef {
    pub fn object(def: &ObjectDef) -> Self {
        TypeDef::Object(Arc::new(def.clone()))
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeDef::Named(name.into())
    }

    pub fn list(inner: TypeDef) -> Self {
        TypeDef::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeDef) -> Self {
        TypeDef::NonNull(Box::new(inner))
    }

    /// Name of the innermost type, with list and non-null wrappers removed.
    pub fn base_name(&self) -> &str {
        match self {
            TypeDef::Int => TypeRef::INT,
            TypeDef::String => TypeRef::STRING,
            TypeDef::Object(def) => def.name(),
            TypeDef::Named(name) => name.as_str(),
            TypeDef::List(inner) | TypeDef::NonNull(inner) => inner.base_name(),
        }
    }

    /// The embedded object definition, if the innermost type is one.
    pub fn embedded_object(&self) -> Option<&ObjectDef> {
        match self {
            TypeDef::Object(def) => Some(def.as_ref()),
            TypeDef::List(inner) | TypeDef::NonNull(inner) => inner.embedded_object(),
            _ => None,
        }
    }

    pub(crate) fn to_type_ref(&self) -> TypeRef {
        match self {
            TypeDef::List(inner) => TypeRef::List(Box::new(inner.to_type_ref())),
            TypeDef::NonNull(inner) => TypeRef::NonNull(Box::new(inner.to_type_ref())),
            other => TypeRef::named(other.base_name().to_string()),
        }
    }
}

impl fmt::Display for TypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDef::List(inner) => write!(f, "[{}]", inner),
            TypeDef::NonNull(inner) => write!(f, "{}!", inner),
            other => write!(f, "{}", other.base_name()),
        }
    }
}

/// A declared field argument.
#[derive(Debug, Clone)]
pub struct InputDef {
    pub name: String,
    pub ty: TypeDef,
    pub description: Option<String>,
}

impl InputDef {
    pub fn new(name: impl Into<String>, ty: TypeDef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Argument values handed to a resolver, keyed by argument name.
///
/// Only arguments present in the query appear here. Values keep whatever
/// shape the caller sent, so accessors return `None` rather than failing
/// when a value has the wrong type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments(BTreeMap<String, Value>);

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// The named argument as an `i32`, or `None` if it is missing, not an
    /// integer, or out of range.
    pub fn i32(&self, name: &str) -> Option<i32> {
        match self.get(name)? {
            Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(String, Value)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Conversion from a resolver's output into an executor value.
pub trait IntoFieldValue {
    fn into_field_value<'a>(self) -> FieldValue<'a>;
}

impl IntoFieldValue for &'static str {
    fn into_field_value<'a>(self) -> FieldValue<'a> {
        FieldValue::value(Value::String(self.to_string()))
    }
}

impl IntoFieldValue for String {
    fn into_field_value<'a>(self) -> FieldValue<'a> {
        FieldValue::value(Value::String(self))
    }
}

impl IntoFieldValue for Value {
    fn into_field_value<'a>(self) -> FieldValue<'a> {
        FieldValue::value(self)
    }
}

impl<T: IntoFieldValue> IntoFieldValue for Vec<T> {
    fn into_field_value<'a>(self) -> FieldValue<'a> {
        FieldValue::list(self.into_iter().map(|item| item.into_field_value()))
    }
}

/// A single field of an object type.
#[derive(Clone)]
pub struct FieldDef {
    name: String,
    ty: TypeDef,
    arguments: Vec<InputDef>,
    description: Option<String>,
    resolve: ResolveFn,
}

impl FieldDef {
    /// Field whose value is a scalar read from the parent record `P`.
    pub fn scalar<P, F>(name: impl Into<String>, ty: TypeDef, read: F) -> Self
    where
        P: Any + Send + Sync,
        F: Fn(&P) -> Value + Send + Sync + 'static,
    {
        let resolve = resolve_fn(move |parent, _args| {
            let record = parent.try_downcast_ref::<P>()?;
            Ok(Some(FieldValue::value(read(record))))
        });
        Self::with_resolve(name, ty, resolve)
    }

    /// Field whose value is a list of scalars read from the parent record `P`.
    pub fn scalar_list<P, F>(name: impl Into<String>, ty: TypeDef, read: F) -> Self
    where
        P: Any + Send + Sync,
        F: Fn(&P) -> Vec<Value> + Send + Sync + 'static,
    {
        let resolve = resolve_fn(move |parent, _args| {
            let record = parent.try_downcast_ref::<P>()?;
            Ok(Some(FieldValue::list(
                read(record).into_iter().map(FieldValue::value),
            )))
        });
        Self::with_resolve(name, ty, resolve)
    }

    /// Field exposing an object embedded in the parent record `P`.
    pub fn object<P, C, F>(name: impl Into<String>, ty: TypeDef, read: F) -> Self
    where
        P: Any + Send + Sync,
        C: Any + Send + Sync,
        F: for<'r> Fn(&'r P) -> &'r C + Send + Sync + 'static,
    {
        let resolve = resolve_fn(move |parent, _args| {
            let record = parent.try_downcast_ref::<P>()?;
            Ok(Some(FieldValue::borrowed_any(read(record))))
        });
        Self::with_resolve(name, ty, resolve)
    }

    /// Field exposing an ordered list of objects embedded in the parent record `P`.
    pub fn list<P, C, F>(name: impl Into<String>, ty: TypeDef, read: F) -> Self
    where
        P: Any + Send + Sync,
        C: Any + Send + Sync,
        F: for<'r> Fn(&'r P) -> &'r [C] + Send + Sync + 'static,
    {
        let resolve = resolve_fn(move |parent, _args| {
            let record = parent.try_downcast_ref::<P>()?;
            let items = read(record)
                .iter()
                .map(|item| FieldValue::borrowed_any(item));
            Ok(Some(FieldValue::list(items)))
        });
        Self::with_resolve(name, ty, resolve)
    }

    /// Entry-point field backed by a resolver object. A `None` from the
    /// resolver becomes `null` in the result.
    pub fn resolver<R>(name: impl Into<String>, ty: TypeDef, resolver: Arc<R>) -> Self
    where
        R: Resolver + 'static,
        R::Output: IntoFieldValue,
    {
        let resolve = resolve_fn(move |_parent, args| {
            Ok(resolver.resolve(args).map(|output| output.into_field_value()))
        });
        Self::with_resolve(name, ty, resolve)
    }

    fn with_resolve(name: impl Into<String>, ty: TypeDef, resolve: ResolveFn) -> Self {
        Self {
            name: name.into(),
            ty,
            arguments: Vec::new(),
            description: None,
            resolve,
        }
    }

    pub fn argument(mut self, input: InputDef) -> Self {
        self.arguments.push(input);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeDef {
        &self.ty
    }

    pub fn arguments(&self) -> &[InputDef] {
        &self.arguments
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn resolve_fn(&self) -> ResolveFn {
        self.resolve.clone()
    }
}

impl fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("ty", &self.ty.to_string())
            .field("arguments", &self.arguments)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// An object type: a name plus an ordered list of fields.
///
/// Duplicate field names are accepted here and rejected when the schema is
/// validated.
#[derive(Debug, Clone)]
pub struct ObjectDef {
    name: String,
    description: Option<String>,
    fields: Vec<FieldDef>,
}

impl ObjectDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field_named(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        x: i32,
    }

    fn point_type() -> ObjectDef {
        ObjectDef::new("Point").field(FieldDef::scalar("x", TypeDef::Int, |p: &Point| {
            Value::from(p.x)
        }))
    }

    #[test]
    fn test_type_display() {
        let point = point_type();
        let ty = TypeDef::non_null(TypeDef::list(TypeDef::object(&point)));
        assert_eq!(ty.to_string(), "[Point]!");
        assert_eq!(TypeDef::list(TypeDef::Int).to_string(), "[Int]");
        assert_eq!(TypeDef::named("Missing").to_string(), "Missing");
    }

    #[test]
    fn test_embedded_object_through_wrappers() {
        let point = point_type();
        let ty = TypeDef::list(TypeDef::non_null(TypeDef::object(&point)));
        assert_eq!(ty.embedded_object().map(|o| o.name()), Some("Point"));
        assert_eq!(ty.base_name(), "Point");
        assert!(TypeDef::String.embedded_object().is_none());
    }

    #[test]
    fn test_scalar_field_reads_parent() {
        let point = point_type();
        let field = point.field_named("x").unwrap();
        let parent = FieldValue::owned_any(Point { x: 42 });

        let value = (field.resolve_fn())(&parent, &Arguments::new()).unwrap();
        assert_eq!(value.and_then(|v| v.as_value().cloned()), Some(Value::from(42_i32)));
    }

    #[test]
    fn test_scalar_field_wrong_parent_is_error() {
        let point = point_type();
        let field = point.field_named("x").unwrap();
        let parent = FieldValue::owned_any("not a point".to_string());

        assert!((field.resolve_fn())(&parent, &Arguments::new()).is_err());
    }

    #[test]
    fn test_arguments_i32() {
        let args = Arguments::new()
            .with("small", 7_i32)
            .with("big", i64::from(i32::MAX) + 1)
            .with("text", Value::String("7".to_string()))
            .with("float", Value::Number(async_graphql::Number::from_f64(1.5).unwrap()))
            .with("null", Value::Null);

        assert_eq!(args.i32("small"), Some(7));
        assert_eq!(args.i32("big"), None);
        assert_eq!(args.i32("text"), None);
        assert_eq!(args.i32("float"), None);
        assert_eq!(args.i32("null"), None);
        assert_eq!(args.i32("absent"), None);
        assert_eq!(args.len(), 5);
    }

    #[test]
    fn test_object_keeps_duplicate_fields_until_validation() {
        let point = point_type().field(FieldDef::scalar("x", TypeDef::Int, |p: &Point| {
            Value::from(p.x)
        }));
        assert_eq!(point.field_names().collect::<Vec<_>>(), ["x", "x"]);
    }
}
