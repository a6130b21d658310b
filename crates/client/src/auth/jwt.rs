use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ServiceTokenConfig;
use crate::error::ClientError;

pub const HASURA_CLAIMS_NAMESPACE: &str = "https://hasura.io/jwt/claims";

/// Session variables Hasura reads from the claims namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HasuraClaimSet {
    #[serde(rename = "x-hasura-allowed-roles")]
    pub allowed_roles: Vec<String>,
    #[serde(rename = "x-hasura-default-role")]
    pub default_role: String,
    #[serde(rename = "x-hasura-user-id")]
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HasuraClaims {
    pub sub: String, // Subject (user ID)
    pub iat: i64,
    pub exp: i64,
    #[serde(rename = "https://hasura.io/jwt/claims")]
    pub hasura: HasuraClaimSet,
}

impl HasuraClaims {
    pub fn new(
        user_id: Uuid,
        default_role: String,
        mut allowed_roles: Vec<String>,
        expiration_minutes: u64,
    ) -> Result<Self, ClientError> {
        let now = Utc::now();
        let exp = i64::try_from(expiration_minutes)
            .ok()
            .and_then(Duration::try_minutes)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                ClientError::Config(format!(
                    "HASURA_JWT_EXPIRATION_MINUTES is out of range: {expiration_minutes}"
                ))
            })?;

        // Hasura rejects a default role that is not also allowed.
        if !allowed_roles.contains(&default_role) {
            allowed_roles.push(default_role.clone());
        }

        Ok(Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            hasura: HasuraClaimSet {
                allowed_roles,
                default_role,
                user_id: user_id.to_string(),
            },
        })
    }
}

/// Mints and checks HS256 service tokens for Hasura's JWT mode.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    default_role: String,
    allowed_roles: Vec<String>,
    expiration_minutes: u64,
}

impl JwtService {
    pub fn new(config: &ServiceTokenConfig) -> Self {
        let secret = config.secret.as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            default_role: config.default_role.clone(),
            allowed_roles: config.allowed_roles.clone(),
            expiration_minutes: config.expiration_minutes,
        }
    }

    /// Token for `user_id`, defaulting to `role` when given.
    ///
    /// A requested role must be one of the configured allowed roles or the
    /// configured default role.
    pub fn create_token(&self, user_id: Uuid, role: Option<&str>) -> Result<String, ClientError> {
        let default_role = match role {
            Some(role) if role != self.default_role && !self.allowed_roles.iter().any(|r| r == role) => {
                return Err(ClientError::Config(format!(
                    "role {role} is not in HASURA_JWT_ALLOWED_ROLES"
                )));
            }
            Some(role) => role.to_string(),
            None => self.default_role.clone(),
        };
        let claims = HasuraClaims::new(
            user_id,
            default_role,
            self.allowed_roles.clone(),
            self.expiration_minutes,
        )?;
        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    pub fn verify_token(&self, token: &str) -> Result<HasuraClaims, ClientError> {
        let token_data = decode::<HasuraClaims>(token, &self.decoding_key, &Validation::default())?;
        Ok(token_data.claims)
    }
}
