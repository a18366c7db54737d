use async_graphql::{Request, Response, Value};
use tracing::{debug, warn};

use crate::error::{Result, TutorialError};

use super::schema::TutorialSchema;

/// Query run by the greeting example.
pub const HELLO_QUERY: &str = "{ hello }";

/// Query run by the tutorial example.
pub const LIST_QUERY: &str = "{ list { id title author { Name Tutorials } comments { body } } }";

/// The result of a query that completed without errors.
#[derive(Debug)]
pub struct Executed {
    response: Response,
}

impl Executed {
    /// The result tree, shaped like the query.
    pub fn data(&self) -> &Value {
        &self.response.data
    }

    /// Compact JSON: `{"data":{...}}`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.response)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.response)?)
    }
}

impl TutorialSchema {
    /// Runs `request` and returns the raw response, errors included.
    pub async fn execute_request(&self, request: Request) -> Response {
        self.schema.execute(request).await
    }

    pub async fn execute_async(&self, query: &str) -> Response {
        self.execute_request(Request::new(query)).await
    }

    /// Runs `query` to completion on a single-threaded runtime and returns the
    /// raw response, which may carry partial data alongside errors.
    pub fn execute_response(&self, query: &str) -> Result<Response> {
        let runtime = tokio::runtime::Builder::new_current_thread().build()?;
        Ok(runtime.block_on(self.execute_async(query)))
    }

    /// Runs `query` and fails if the executor reported any error. Partial
    /// data is never returned.
    pub fn execute(&self, query: &str) -> Result<Executed> {
        debug!(query, "Executing query");
        let response = self.execute_response(query)?;

        if !response.errors.is_empty() {
            let messages: Vec<String> = response.errors.iter().map(|e| e.message.clone()).collect();
            warn!(errors = messages.len(), "Query returned errors");
            return Err(TutorialError::Execution(messages));
        }
        Ok(Executed { response })
    }
}
