use serde::{Deserialize, Serialize};

use crate::enums::PayrollStatus;
use crate::expressions::{
    ComparisonExp, DateComparisonExp, IntComparisonExp, OrderBy, StringComparisonExp,
    TimestamptzComparisonExp, UuidComparisonExp,
};
use crate::mutation::OnConflict;
use crate::scalars::{Date, Timestamptz, Uuid};
use crate::tables::clients::{ClientsBoolExp, ClientsOrderBy};
use crate::tables::users::UsersBoolExp;

/// A `payrolls` row as selected by the `PayrollFields` fragment.
///
/// Payrolls are versioned: every version of a payroll shares a family rooted at
/// the original row (`parent_payroll_id` is `None` on the root). The current
/// version is the one without a `superseded_date`, and Postgres enforces that
/// there is only one of those per family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    pub id: Uuid,
    pub name: String,
    pub client_id: Uuid,
    pub cycle_id: Uuid,
    pub date_type_id: Uuid,
    pub date_value: Option<i32>,
    pub primary_consultant_user_id: Option<Uuid>,
    pub backup_consultant_user_id: Option<Uuid>,
    pub manager_user_id: Option<Uuid>,
    pub processing_days_before_eft: i32,
    pub status: PayrollStatus,
    pub employee_count: Option<i32>,
    pub version_number: i32,
    pub parent_payroll_id: Option<Uuid>,
    pub superseded_date: Option<Date>,
    pub go_live_date: Option<Date>,
    pub version_reason: Option<String>,
    pub created_at: Timestamptz,
    pub updated_at: Timestamptz,
}

impl Payroll {
    pub fn is_current(&self) -> bool {
        self.superseded_date.is_none()
    }

    /// Id of the original version, shared by every version in the family.
    pub fn family_id(&self) -> Uuid {
        self.parent_payroll_id.unwrap_or(self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollsBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<PayrollsBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<PayrollsBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<PayrollsBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_type_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_consultant_user_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_consultant_user_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_user_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ComparisonExp<PayrollStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<IntComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<IntComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_payroll_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superseded_date: Option<DateComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_live_date: Option<DateComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<TimestamptzComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<Box<ClientsBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_consultant: Option<Box<UsersBoolExp>>,
}

crate::impl_bool_exp!(PayrollsBoolExp);

impl PayrollsBoolExp {
    /// Only the current version of each payroll family.
    pub fn current() -> Self {
        Self {
            superseded_date: Some(DateComparisonExp::is_null(true)),
            ..Default::default()
        }
    }

    pub fn for_client(client_id: Uuid) -> Self {
        Self {
            client_id: Some(UuidComparisonExp::eq(client_id)),
            ..Default::default()
        }
    }

    pub fn with_status(status: PayrollStatus) -> Self {
        Self {
            status: Some(ComparisonExp::eq(status)),
            ..Default::default()
        }
    }

    /// Payrolls where the user is primary consultant, backup consultant or manager.
    pub fn staffed_by(user_id: Uuid) -> Self {
        use crate::expressions::BoolExp;

        Self::any([
            Self {
                primary_consultant_user_id: Some(UuidComparisonExp::eq(user_id)),
                ..Default::default()
            },
            Self {
                backup_consultant_user_id: Some(UuidComparisonExp::eq(user_id)),
                ..Default::default()
            },
            Self {
                manager_user_id: Some(UuidComparisonExp::eq(user_id)),
                ..Default::default()
            },
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollsOrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_live_date: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<Box<ClientsOrderBy>>,
}

impl PayrollsOrderBy {
    pub fn name(direction: OrderBy) -> Self {
        Self {
            name: Some(direction),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollsInsertInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_type_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_consultant_user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_consultant_user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_days_before_eft: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayrollStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_live_date: Option<Date>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollsSetInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cycle_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_type_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_consultant_user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_consultant_user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_days_before_eft: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayrollStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_live_date: Option<Date>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollsConstraint {
    PayrollsPkey,
    OnlyOneCurrentVersionPerFamily,
}

impl PayrollsConstraint {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayrollsConstraint::PayrollsPkey => "payrolls_pkey",
            PayrollsConstraint::OnlyOneCurrentVersionPerFamily => {
                "only_one_current_version_per_family"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PayrollsUpdateColumn {
    Name,
    CycleId,
    DateTypeId,
    DateValue,
    PrimaryConsultantUserId,
    BackupConsultantUserId,
    ManagerUserId,
    ProcessingDaysBeforeEft,
    Status,
    EmployeeCount,
    GoLiveDate,
    SupersededDate,
    VersionReason,
    UpdatedAt,
}

pub type PayrollsOnConflict =
    OnConflict<PayrollsConstraint, PayrollsUpdateColumn, PayrollsBoolExp>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expressions::BoolExp;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn payroll(parent: Option<Uuid>, superseded: Option<Date>) -> Payroll {
        let ts = "2024-05-01T00:00:00Z".parse().unwrap();
        Payroll {
            id: Uuid::new_v4(),
            name: "Weekly staff".into(),
            client_id: Uuid::new_v4(),
            cycle_id: Uuid::new_v4(),
            date_type_id: Uuid::new_v4(),
            date_value: None,
            primary_consultant_user_id: None,
            backup_consultant_user_id: None,
            manager_user_id: None,
            processing_days_before_eft: 2,
            status: PayrollStatus::Active,
            employee_count: Some(40),
            version_number: 1,
            parent_payroll_id: parent,
            superseded_date: superseded,
            go_live_date: None,
            version_reason: None,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn family_id_points_at_root_version() {
        let root = payroll(None, None);
        assert_eq!(root.family_id(), root.id);

        let parent = Uuid::new_v4();
        let child = payroll(Some(parent), None);
        assert_eq!(child.family_id(), parent);
    }

    #[test]
    fn superseded_versions_are_not_current() {
        let superseded = payroll(None, Some(Date::from_ymd_opt(2024, 6, 1).unwrap()));
        assert!(!superseded.is_current());
        assert!(payroll(None, None).is_current());
    }

    #[test]
    fn current_active_filter() {
        let exp = PayrollsBoolExp::current().and(PayrollsBoolExp::with_status(PayrollStatus::Active));
        assert_eq!(
            serde_json::to_value(&exp).unwrap(),
            json!({"_and": [
                {"supersededDate": {"_isNull": true}},
                {"status": {"_eq": "Active"}}
            ]})
        );
    }

    #[test]
    fn versioning_constraint_name() {
        let name = serde_json::to_value(PayrollsConstraint::OnlyOneCurrentVersionPerFamily).unwrap();
        assert_eq!(name, json!("only_one_current_version_per_family"));
        assert_eq!(
            PayrollsConstraint::OnlyOneCurrentVersionPerFamily.as_str(),
            "only_one_current_version_per_family"
        );
    }
}
