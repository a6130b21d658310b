use std::collections::BTreeSet;

use payroll_schema::tables::{Permission, Role, RolePermission};
use serde::{Deserialize, Serialize};

use crate::operation::{operation, NoVariables};

operation!(
    /// Every role with its grants, highest priority first.
    GetRolesWithPermissions,
    Query,
    get_roles_with_permissions,
    include_str!("../../graphql/operations/permissions/get_roles_with_permissions.graphql"),
);

operation!(
    GetRolePermissions,
    Query,
    get_role_permissions,
    include_str!("../../graphql/operations/permissions/get_role_permissions.graphql"),
);

/// A `role_permissions` row with its permission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grant {
    #[serde(flatten)]
    pub grant: RolePermission,
    pub permission: Permission,
}

/// `resource:action` keys of `grants`, sorted and deduplicated.
pub fn permission_keys<'a>(grants: impl IntoIterator<Item = &'a Grant>) -> BTreeSet<String> {
    grants.into_iter().map(|g| g.permission.key()).collect()
}

pub mod get_roles_with_permissions {
    use super::*;

    pub type Variables = NoVariables;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ResponseData {
        pub roles: Vec<RoleWithGrants>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RoleWithGrants {
        #[serde(flatten)]
        pub role: Role,
        pub role_permissions: Vec<Grant>,
    }

    impl RoleWithGrants {
        pub fn allows(&self, resource: &str, action: &str) -> bool {
            self.role_permissions
                .iter()
                .any(|g| g.permission.resource == resource && g.permission.action == action)
        }
    }
}

pub mod get_role_permissions {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub role_name: String,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub role_permissions: Vec<Grant>,
    }
}
