//! `roles`, `permissions` and the `role_permissions` join table.

use serde::{Deserialize, Serialize};

use crate::expressions::{
    BooleanComparisonExp, IntComparisonExp, OrderBy, StringComparisonExp, UuidComparisonExp,
};
use crate::scalars::{Jsonb, Uuid};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    /// Higher wins when a user holds several roles.
    pub priority: i32,
    pub is_system_role: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub id: Uuid,
    pub resource: String,
    pub action: String,
    pub description: Option<String>,
}

impl Permission {
    /// `resource:action`, the form used in permission checks.
    pub fn key(&self) -> String {
        format!("{}:{}", self.resource, self.action)
    }
}

/// A `role_permissions` row. `conditions` holds the row filter Hasura applies
/// when the grant is conditional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermission {
    pub id: Uuid,
    pub role_id: Uuid,
    pub permission_id: Uuid,
    pub conditions: Option<Jsonb>,
}

impl RolePermission {
    pub fn is_conditional(&self) -> bool {
        self.conditions
            .as_ref()
            .is_some_and(|c| !c.is_null() && c.as_object().map_or(true, |o| !o.is_empty()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolesBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<RolesBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<RolesBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<RolesBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<IntComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_system_role: Option<BooleanComparisonExp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<PermissionsBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<PermissionsBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<PermissionsBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<StringComparisonExp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermissionsBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<RolePermissionsBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<RolePermissionsBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<RolePermissionsBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Box<RolesBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<Box<PermissionsBoolExp>>,
}

crate::impl_bool_exp!(RolesBoolExp, PermissionsBoolExp, RolePermissionsBoolExp);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolesOrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<OrderBy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsOrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<OrderBy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_key() {
        let permission = Permission {
            id: Uuid::nil(),
            resource: "payrolls".into(),
            action: "update".into(),
            description: None,
        };
        assert_eq!(permission.key(), "payrolls:update");
    }

    #[test]
    fn empty_conditions_are_unconditional() {
        let mut grant = RolePermission {
            id: Uuid::nil(),
            role_id: Uuid::nil(),
            permission_id: Uuid::nil(),
            conditions: Some(serde_json::json!({})),
        };
        assert!(!grant.is_conditional());

        grant.conditions = Some(serde_json::json!({"managerId": {"_eq": "X-Hasura-User-Id"}}));
        assert!(grant.is_conditional());
    }
}
