//! Argument inputs for Postgres functions tracked by Hasura. Hasura keeps the
//! `p_` prefix of the SQL parameter names and camel-cases the rest.

use serde::{Deserialize, Serialize};

use crate::scalars::{Date, Uuid};

/// `create_payroll_version(...)`. Supersedes the current version of a payroll
/// family as of `go_live_date` and returns the new version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayrollVersionArgs {
    pub p_original_payroll_id: Uuid,
    pub p_go_live_date: Date,
    pub p_version_reason: String,
    pub p_created_by_user_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_employee_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_primary_consultant_user_id: Option<Uuid>,
}

impl CreatePayrollVersionArgs {
    pub fn new(
        original_payroll_id: Uuid,
        go_live_date: Date,
        reason: impl Into<String>,
        created_by: Uuid,
    ) -> Self {
        Self {
            p_original_payroll_id: original_payroll_id,
            p_go_live_date: go_live_date,
            p_version_reason: reason.into(),
            p_created_by_user_id: created_by,
            p_name: None,
            p_employee_count: None,
            p_primary_consultant_user_id: None,
        }
    }
}

/// `generate_payroll_dates(...)`. Omitted bounds fall back to the server
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePayrollDatesArgs {
    pub p_payroll_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_start_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_end_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_max_dates: Option<i32>,
}

impl GeneratePayrollDatesArgs {
    pub fn new(payroll_id: Uuid) -> Self {
        Self {
            p_payroll_id: payroll_id,
            p_start_date: None,
            p_end_date: None,
            p_max_dates: None,
        }
    }
}
