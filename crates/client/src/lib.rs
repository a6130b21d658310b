//! Typed client for the payroll Hasura API.
//!
//! Queries and mutations go through [`HasuraClient`] over HTTP; subscriptions
//! through [`SubscriptionClient`] over graphql-transport-ws. Operations live in
//! [`ops`], one module per domain.

pub mod auth;
pub mod client;
pub mod config;
pub mod documents;
pub mod error;
pub mod operation;
pub mod ops;
pub mod pagination;
pub mod subscriptions;
pub mod validation;
pub mod workload;

pub use auth::Credentials;
pub use client::HasuraClient;
pub use config::{ClientConfig, ServiceTokenConfig};
pub use error::{ClientError, GraphQLErrors, HasuraErrorCode};
pub use operation::{NoVariables, Operation, OperationKind};
pub use pagination::{Page, PageRequest};
pub use subscriptions::SubscriptionClient;

pub use payroll_schema as schema;
