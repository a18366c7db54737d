use thiserror::Error;

#[derive(Error, Debug)]
pub enum TutorialError {
    #[error("Type '{type_name}' defines field '{field}' more than once")]
    DuplicateField { type_name: String, field: String },

    #[error("Type '{0}' has conflicting definitions")]
    DuplicateType(String),

    #[error("Field '{type_name}.{field}' references unknown type '{referenced}'")]
    UnknownType {
        type_name: String,
        field: String,
        referenced: String,
    },

    #[error("Type '{0}' must define at least one field")]
    EmptyObject(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Query execution failed: {}", .0.join("; "))]
    Execution(Vec<String>),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<async_graphql::dynamic::SchemaError> for TutorialError {
    fn from(err: async_graphql::dynamic::SchemaError) -> Self {
        TutorialError::Schema(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TutorialError>;
