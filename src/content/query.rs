//! Content queries.
//!
//! A content source answers a query the way a content-graph layer does: with
//! whatever data it could produce plus a list of in-band errors. Nothing
//! downstream may look at the data until [`QueryResult::into_result`] has
//! turned those errors into a failure.

use super::ContentNode;
use serde::Serialize;
use std::fmt;

/// Something that can produce the full set of content nodes for one build.
pub trait ContentSource {
    fn query(&self) -> QueryResult<Vec<ContentNode>>;
}

#[cfg(test)]
impl ContentSource for Vec<ContentNode> {
    fn query(&self) -> QueryResult<Vec<ContentNode>> {
        QueryResult::ok(self.clone())
    }
}

/// One problem reported by a content source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryError {
    /// Source path or node id the error is about, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub message: String,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            origin: None,
            message: message.into(),
        }
    }

    pub fn at(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            origin: Some(origin.into()),
            message: message.into(),
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            Some(origin) => write!(f, "{origin}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// All in-band errors of a failed query.
#[derive(Debug)]
pub struct QueryFailure(pub Vec<QueryError>);

impl fmt::Display for QueryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "content query failed with {} error(s):", self.0.len())?;
        for error in &self.0 {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for QueryFailure {}

/// Query response carrying data and in-band errors side by side.
#[derive(Debug, Clone)]
pub struct QueryResult<T> {
    pub data: Option<T>,
    pub errors: Vec<QueryError>,
}

impl<T> QueryResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn failed(errors: Vec<QueryError>) -> Self {
        Self { data: None, errors }
    }

    /// Escalate in-band errors.
    ///
    /// Any reported error fails the whole query, even if partial data is
    /// present. A result with neither data nor errors is also a failure.
    pub fn into_result(self) -> Result<T, QueryFailure> {
        if !self.errors.is_empty() {
            return Err(QueryFailure(self.errors));
        }
        self.data
            .ok_or_else(|| QueryFailure(vec![QueryError::new("query returned no data")]))
    }
}
