//! `audit.audit_log`, exposed by Hasura as `auditAuditLog`.

use serde::{Deserialize, Serialize};

use crate::expressions::{
    OrderBy, StringComparisonExp, TimestamptzComparisonExp, UuidComparisonExp,
};
use crate::scalars::{Jsonb, Timestamptz, Uuid};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub user_email: Option<String>,
    pub user_role: Option<String>,
    pub action: String,
    pub resource_type: String,
    pub resource_id: Option<String>,
    pub old_values: Option<Jsonb>,
    pub new_values: Option<Jsonb>,
    pub ip_address: Option<String>,
    pub event_time: Timestamptz,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditAuditLogBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<AuditAuditLogBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<AuditAuditLogBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<AuditAuditLogBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<TimestamptzComparisonExp>,
}

crate::impl_bool_exp!(AuditAuditLogBoolExp);

impl AuditAuditLogBoolExp {
    pub fn for_resource(resource_type: &str, resource_id: Option<&str>) -> Self {
        Self {
            resource_type: Some(StringComparisonExp::eq(resource_type)),
            resource_id: resource_id.map(|id| StringComparisonExp::eq(id)),
            ..Default::default()
        }
    }

    pub fn by_user(user_id: Uuid) -> Self {
        Self {
            user_id: Some(UuidComparisonExp::eq(user_id)),
            ..Default::default()
        }
    }

    pub fn since(from: Timestamptz) -> Self {
        Self {
            event_time: Some(TimestamptzComparisonExp::default().gte(from)),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditAuditLogOrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<OrderBy>,
}

impl AuditAuditLogOrderBy {
    pub fn newest_first() -> Self {
        Self {
            event_time: Some(OrderBy::Desc),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditAuditLogInsertInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_values: Option<Jsonb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_values: Option<Jsonb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resource_filter_skips_missing_id() {
        let exp = AuditAuditLogBoolExp::for_resource("payroll", None);
        assert_eq!(
            serde_json::to_value(&exp).unwrap(),
            json!({"resourceType": {"_eq": "payroll"}})
        );
    }
}
