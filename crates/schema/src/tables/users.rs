use serde::{Deserialize, Serialize};

use crate::enums::UserRole;
use crate::expressions::{
    BooleanComparisonExp, ComparisonExp, OrderBy, StringComparisonExp, TimestamptzComparisonExp,
    UuidComparisonExp,
};
use crate::scalars::{Timestamptz, Uuid};
use crate::tables::payrolls::PayrollsBoolExp;
use crate::tables::work_schedule::WorkScheduleBoolExp;

/// A `users` row as selected by the `UserFields` fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub username: Option<String>,
    pub image: Option<String>,
    pub role: UserRole,
    pub is_staff: bool,
    pub is_active: bool,
    pub manager_id: Option<Uuid>,
    pub created_at: Timestamptz,
    pub updated_at: Timestamptz,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<UsersBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<UsersBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<UsersBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ComparisonExp<UserRole>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<BooleanComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<BooleanComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<TimestamptzComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<TimestamptzComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<Box<UsersBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_schedules: Option<Box<WorkScheduleBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payrolls_by_primary_consultant_user_id: Option<Box<PayrollsBoolExp>>,
}

crate::impl_bool_exp!(UsersBoolExp);

impl UsersBoolExp {
    pub fn active() -> Self {
        Self {
            is_active: Some(BooleanComparisonExp::eq(true)),
            ..Default::default()
        }
    }

    pub fn with_roles(roles: impl IntoIterator<Item = UserRole>) -> Self {
        Self {
            role: Some(ComparisonExp::in_list(roles)),
            ..Default::default()
        }
    }

    /// Case-insensitive match on name or email.
    pub fn search(term: &str) -> Self {
        use crate::expressions::BoolExp;

        Self::any([
            Self {
                name: Some(StringComparisonExp::contains_ci(term)),
                ..Default::default()
            },
            Self {
                email: Some(StringComparisonExp::contains_ci(term)),
                ..Default::default()
            },
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersOrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<Box<UsersOrderBy>>,
}

impl UsersOrderBy {
    pub fn name(direction: OrderBy) -> Self {
        Self {
            name: Some(direction),
            ..Default::default()
        }
    }
}

/// `UsersSetInput`. Users are provisioned by the auth backend, so there is no
/// insert input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersSetInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserializes_user_fields_fragment() {
        let user: User = serde_json::from_value(json!({
            "id": "6f1c1d2e-2f7b-4c0d-9b44-3f1d0c1a2b3c",
            "name": "Alex Chen",
            "email": "alex@example.com",
            "username": null,
            "image": null,
            "role": "consultant",
            "isStaff": true,
            "isActive": true,
            "managerId": null,
            "createdAt": "2024-01-02T03:04:05+00:00",
            "updatedAt": "2024-01-02T03:04:05+00:00"
        }))
        .unwrap();

        assert_eq!(user.role, UserRole::Consultant);
        assert!(user.manager_id.is_none());
    }

    #[test]
    fn search_matches_name_or_email() {
        let exp = UsersBoolExp::search("chen");
        assert_eq!(
            serde_json::to_value(&exp).unwrap(),
            json!({"_or": [
                {"name": {"_ilike": "%chen%"}},
                {"email": {"_ilike": "%chen%"}}
            ]})
        );
    }

    #[test]
    fn role_filter_uses_postgres_labels() {
        let exp = UsersBoolExp::with_roles([UserRole::Consultant, UserRole::Manager]);
        assert_eq!(
            serde_json::to_value(&exp).unwrap(),
            json!({"role": {"_in": ["consultant", "manager"]}})
        );
    }
}
