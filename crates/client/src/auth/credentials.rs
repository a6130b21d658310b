use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::auth::JwtService;
use crate::error::ClientError;

pub const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";
pub const ROLE_HEADER: &str = "x-hasura-role";
const AUTHORIZATION_HEADER: &str = "authorization";

/// How requests authenticate against Hasura.
#[derive(Clone, Default)]
pub enum Credentials {
    #[default]
    Anonymous,
    AdminSecret(String),
    Bearer(String),
    /// HS256 token minted locally for `user_id`.
    ServiceToken { jwt: JwtService, user_id: Uuid },
}

impl Credentials {
    pub fn kind(&self) -> &'static str {
        match self {
            Credentials::Anonymous => "anonymous",
            Credentials::AdminSecret(_) => "admin-secret",
            Credentials::Bearer(_) => "bearer",
            Credentials::ServiceToken { .. } => "service-token",
        }
    }

    /// Header pairs for one request. Service tokens are minted fresh each call.
    pub fn headers(&self, role: Option<&str>) -> Result<Vec<(&'static str, String)>, ClientError> {
        let mut headers = Vec::with_capacity(2);
        match self {
            Credentials::Anonymous => {}
            Credentials::AdminSecret(secret) => {
                headers.push((ADMIN_SECRET_HEADER, secret.clone()));
            }
            Credentials::Bearer(token) => {
                headers.push((AUTHORIZATION_HEADER, format!("Bearer {token}")));
            }
            Credentials::ServiceToken { jwt, user_id } => {
                let token = jwt.create_token(*user_id, role)?;
                headers.push((AUTHORIZATION_HEADER, format!("Bearer {token}")));
            }
        }
        if let Some(role) = role {
            headers.push((ROLE_HEADER, role.to_string()));
        }
        Ok(headers)
    }

    pub fn header_map(&self, role: Option<&str>) -> Result<HeaderMap, ClientError> {
        let mut map = HeaderMap::new();
        for (name, value) in self.headers(role)? {
            map.insert(HeaderName::from_static(name), HeaderValue::from_str(&value)?);
        }
        Ok(map)
    }

    /// `connection_init` payload for graphql-transport-ws. Hasura reads the
    /// same headers it would read from an HTTP request.
    pub fn init_payload(&self, role: Option<&str>) -> Result<Value, ClientError> {
        let headers: Map<String, Value> = self
            .headers(role)?
            .into_iter()
            .map(|(name, value)| (name.to_string(), Value::String(value)))
            .collect();
        Ok(json!({ "headers": headers }))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::ServiceToken { user_id, .. } => f
                .debug_struct("ServiceToken")
                .field("user_id", user_id)
                .finish_non_exhaustive(),
            other => f.write_str(other.kind()),
        }
    }
}
