//! Typed bindings for the documents under `graphql/operations`.
//!
//! Each operation is a unit struct implementing [`graphql_client::GraphQLQuery`]
//! and [`crate::Operation`], next to a snake_case module holding its
//! `Variables` and `ResponseData`, the layout `graphql_client` codegen uses.
//! Row types come from `payroll_schema` and are embedded with
//! `#[serde(flatten)]` where a selection adds relationships to a fragment.

use payroll_schema::UserRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod audit;
pub mod billing;
pub mod clients;
pub mod dashboard;
pub mod holidays;
pub mod leave;
pub mod notes;
pub mod payroll_dates;
pub mod payrolls;
pub mod permissions;
pub mod users;
pub mod work_schedule;

/// The `UserSummary` fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// `client { id name }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRef {
    pub id: Uuid,
    pub name: String,
}
