use std::env;
use std::time::Duration;

use url::Url;
use uuid::Uuid;

use crate::auth::{Credentials, JwtService};
use crate::error::ClientError;

/// Settings for locally minted service tokens.
#[derive(Clone, Debug)]
pub struct ServiceTokenConfig {
    pub secret: String,
    pub user_id: Option<Uuid>,
    pub default_role: String,
    pub allowed_roles: Vec<String>,
    pub expiration_minutes: u64,
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub endpoint: Url,
    pub ws_endpoint: Url,
    pub credentials: Credentials,
    /// Sent as `x-hasura-role` on every request.
    pub role: Option<String>,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Config for `endpoint` with no credentials and default timeouts.
    pub fn new(endpoint: Url) -> Result<Self, ClientError> {
        let ws_endpoint = ws_endpoint_for(&endpoint)?;
        Ok(Self {
            endpoint,
            ws_endpoint,
            credentials: Credentials::Anonymous,
            role: None,
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
        })
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn from_env() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let endpoint = var("HASURA_GRAPHQL_ENDPOINT")
            .ok_or_else(|| ClientError::Config("HASURA_GRAPHQL_ENDPOINT must be set".into()))?;
        let endpoint = parse_url("HASURA_GRAPHQL_ENDPOINT", &endpoint)?;

        let ws_endpoint = match var("HASURA_GRAPHQL_WS_ENDPOINT") {
            Some(ws) => parse_url("HASURA_GRAPHQL_WS_ENDPOINT", &ws)?,
            None => ws_endpoint_for(&endpoint)?,
        };

        let credentials = if let Some(secret) = var("HASURA_GRAPHQL_ADMIN_SECRET") {
            Credentials::AdminSecret(secret)
        } else if let Some(secret) = var("HASURA_JWT_SECRET") {
            let user_id = var("HASURA_JWT_USER_ID")
                .ok_or_else(|| {
                    ClientError::Config("HASURA_JWT_USER_ID must be set with HASURA_JWT_SECRET".into())
                })?
                .parse::<Uuid>()
                .map_err(|e| ClientError::Config(format!("HASURA_JWT_USER_ID: {e}")))?;
            let config = service_token_config(&var, secret, Some(user_id));
            Credentials::ServiceToken {
                jwt: JwtService::new(&config),
                user_id,
            }
        } else if let Some(token) = var("HASURA_BEARER_TOKEN") {
            Credentials::Bearer(token)
        } else {
            Credentials::Anonymous
        };

        Ok(Self {
            endpoint,
            ws_endpoint,
            credentials,
            role: var("HASURA_ROLE"),
            request_timeout: Duration::from_secs(
                var("GRAPHQL_REQUEST_TIMEOUT_SECS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(30),
            ),
            connect_timeout: Duration::from_secs(
                var("GRAPHQL_CONNECT_TIMEOUT_SECS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            ),
        })
    }
}

impl ServiceTokenConfig {
    /// Token settings without requiring an endpoint, used by `payroll-gql token`.
    pub fn from_env() -> Result<Self, ClientError> {
        dotenvy::dotenv().ok();
        let var = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());
        let secret = var("HASURA_JWT_SECRET")
            .ok_or_else(|| ClientError::Config("HASURA_JWT_SECRET must be set".into()))?;
        let user_id = var("HASURA_JWT_USER_ID").and_then(|v| v.parse().ok());
        Ok(service_token_config(&var, secret, user_id))
    }
}

fn service_token_config<F>(var: &F, secret: String, user_id: Option<Uuid>) -> ServiceTokenConfig
where
    F: Fn(&str) -> Option<String>,
{
    let default_role = var("HASURA_JWT_DEFAULT_ROLE").unwrap_or_else(|| "consultant".to_string());
    let allowed_roles = var("HASURA_JWT_ALLOWED_ROLES")
        .map(|roles| {
            roles
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_else(|| vec![default_role.clone()]);

    ServiceTokenConfig {
        secret,
        user_id,
        default_role,
        allowed_roles,
        expiration_minutes: var("HASURA_JWT_EXPIRATION_MINUTES")
            .and_then(|v| v.parse().ok())
            .unwrap_or(15),
    }
}

fn parse_url(key: &str, value: &str) -> Result<Url, ClientError> {
    Url::parse(value).map_err(|e| ClientError::Config(format!("{key}: {e}")))
}

/// `http` becomes `ws` and `https` becomes `wss`; the path is kept.
pub fn ws_endpoint_for(endpoint: &Url) -> Result<Url, ClientError> {
    let scheme = match endpoint.scheme() {
        "http" | "ws" => "ws",
        "https" | "wss" => "wss",
        other => {
            return Err(ClientError::Config(format!(
                "unsupported endpoint scheme: {other}"
            )))
        }
    };
    let mut ws = endpoint.clone();
    ws.set_scheme(scheme)
        .map_err(|_| ClientError::Config(format!("cannot derive websocket url from {endpoint}")))?;
    Ok(ws)
}
