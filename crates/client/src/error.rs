use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("graphql error: {0}")]
    GraphQL(GraphQLErrors),

    #[error("response carried neither data nor errors")]
    MissingData,

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("auth error: {0}")]
    Auth(#[from] jsonwebtoken::errors::Error),

    #[error("websocket error: {0}")]
    WebSocket(String),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl ClientError {
    /// Hasura error code of a GraphQL failure, if any.
    pub fn hasura_code(&self) -> Option<HasuraErrorCode> {
        match self {
            ClientError::GraphQL(errors) => errors.code(),
            _ => None,
        }
    }
}

impl From<graphql_ws_client::Error> for ClientError {
    fn from(err: graphql_ws_client::Error) -> Self {
        ClientError::WebSocket(err.to_string())
    }
}

impl From<async_tungstenite::tungstenite::Error> for ClientError {
    fn from(err: async_tungstenite::tungstenite::Error) -> Self {
        ClientError::WebSocket(err.to_string())
    }
}

/// `extensions.code` values Hasura attaches to errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HasuraErrorCode {
    ConstraintViolation,
    ValidationFailed,
    AccessDenied,
    PermissionError,
    InvalidJwt,
    InvalidHeaders,
    DataException,
    ParseFailed,
    PostgresError,
    Unexpected,
    Other(String),
}

impl HasuraErrorCode {
    pub fn from_code(code: &str) -> Self {
        match code {
            "constraint-violation" => HasuraErrorCode::ConstraintViolation,
            "validation-failed" => HasuraErrorCode::ValidationFailed,
            "access-denied" => HasuraErrorCode::AccessDenied,
            "permission-error" => HasuraErrorCode::PermissionError,
            "invalid-jwt" => HasuraErrorCode::InvalidJwt,
            "invalid-headers" => HasuraErrorCode::InvalidHeaders,
            "data-exception" => HasuraErrorCode::DataException,
            "parse-failed" => HasuraErrorCode::ParseFailed,
            "postgres-error" => HasuraErrorCode::PostgresError,
            "unexpected" => HasuraErrorCode::Unexpected,
            other => HasuraErrorCode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            HasuraErrorCode::ConstraintViolation => "constraint-violation",
            HasuraErrorCode::ValidationFailed => "validation-failed",
            HasuraErrorCode::AccessDenied => "access-denied",
            HasuraErrorCode::PermissionError => "permission-error",
            HasuraErrorCode::InvalidJwt => "invalid-jwt",
            HasuraErrorCode::InvalidHeaders => "invalid-headers",
            HasuraErrorCode::DataException => "data-exception",
            HasuraErrorCode::ParseFailed => "parse-failed",
            HasuraErrorCode::PostgresError => "postgres-error",
            HasuraErrorCode::Unexpected => "unexpected",
            HasuraErrorCode::Other(code) => code,
        }
    }

    /// Errors caused by credentials or Hasura permissions rather than the request.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            HasuraErrorCode::AccessDenied
                | HasuraErrorCode::PermissionError
                | HasuraErrorCode::InvalidJwt
                | HasuraErrorCode::InvalidHeaders
        )
    }
}

impl fmt::Display for HasuraErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `errors` array of a GraphQL response.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrors(pub Vec<graphql_client::Error>);

impl GraphQLErrors {
    pub fn errors(&self) -> &[graphql_client::Error] {
        &self.0
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.message.as_str())
    }

    /// Code of the first error that carries one.
    pub fn code(&self) -> Option<HasuraErrorCode> {
        self.0.iter().find_map(|e| {
            e.extensions
                .as_ref()
                .and_then(|ext| ext.get("code"))
                .and_then(|code| code.as_str())
                .map(HasuraErrorCode::from_code)
        })
    }

    /// Name of the violated constraint, e.g. `only_one_current_version_per_family`.
    pub fn constraint(&self) -> Option<&str> {
        self.0.iter().find_map(|e| constraint_name(&e.message))
    }

    pub fn is_constraint_violation(&self, constraint: &str) -> bool {
        self.constraint() == Some(constraint)
    }
}

impl fmt::Display for GraphQLErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(&error.message)?;
        }
        Ok(())
    }
}

// Postgres messages name the constraint as `... constraint "name"`.
fn constraint_name(message: &str) -> Option<&str> {
    let marker = "constraint \"";
    let start = message.find(marker)? + marker.len();
    let rest = &message[start..];
    let end = rest.find('"')?;
    Some(&rest[..end]).filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn error(message: &str, code: Option<&str>) -> graphql_client::Error {
        graphql_client::Error {
            message: message.to_string(),
            locations: None,
            path: None,
            extensions: code.map(|c| {
                let mut ext = HashMap::new();
                ext.insert("code".to_string(), serde_json::Value::from(c));
                ext
            }),
        }
    }

    #[test]
    fn decodes_constraint_violation() {
        let errors = GraphQLErrors(vec![error(
            "Uniqueness violation. duplicate key value violates unique constraint \"only_one_current_version_per_family\"",
            Some("constraint-violation"),
        )]);

        assert_eq!(errors.code(), Some(HasuraErrorCode::ConstraintViolation));
        assert_eq!(errors.constraint(), Some("only_one_current_version_per_family"));
        assert!(errors.is_constraint_violation("only_one_current_version_per_family"));
    }

    #[test]
    fn first_coded_error_wins() {
        let errors = GraphQLErrors(vec![
            error("something odd", None),
            error("field 'salary' not found in type: 'users'", Some("validation-failed")),
            error("denied", Some("access-denied")),
        ]);
        assert_eq!(errors.code(), Some(HasuraErrorCode::ValidationFailed));
        assert_eq!(errors.constraint(), None);
        assert_eq!(
            errors.to_string(),
            "something odd; field 'salary' not found in type: 'users'; denied"
        );
    }

    #[test]
    fn unknown_codes_are_kept() {
        let code = HasuraErrorCode::from_code("not-supported");
        assert_eq!(code, HasuraErrorCode::Other("not-supported".into()));
        assert_eq!(code.as_str(), "not-supported");
        assert!(HasuraErrorCode::InvalidJwt.is_auth_failure());
        assert!(!HasuraErrorCode::DataException.is_auth_failure());
    }

    #[test]
    fn constraint_name_parsing() {
        assert_eq!(
            constraint_name("Foreign key violation. insert or update on table \"payrolls\" violates foreign key constraint \"payrolls_client_id_fkey\""),
            Some("payrolls_client_id_fkey")
        );
        assert_eq!(constraint_name("constraint \"\""), None);
        assert_eq!(constraint_name("no constraint here"), None);
    }
}
