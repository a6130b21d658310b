use payroll_schema::scalars::Timestamptz;
use payroll_schema::tables::{AuditAuditLogBoolExp, AuditAuditLogInsertInput, AuditLog};
use payroll_schema::{Aggregate, CountAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::operation::operation;
use crate::pagination::{Page, PageRequest};

operation!(
    /// Audit entries, newest first.
    GetAuditLogs,
    Query,
    get_audit_logs,
    concat!(
        include_str!("../../graphql/operations/audit/get_audit_logs.graphql"),
        include_str!("../../graphql/fragments/audit_log_fields.graphql"),
    ),
);

operation!(
    InsertAuditLog,
    Mutation,
    insert_audit_log,
    include_str!("../../graphql/operations/audit/insert_audit_log.graphql"),
);

operation!(
    /// The latest `limit` audit entries, re-sent whenever they change.
    RecentActivity,
    Subscription,
    recent_activity,
    concat!(
        include_str!("../../graphql/operations/audit/recent_activity.graphql"),
        include_str!("../../graphql/fragments/audit_log_fields.graphql"),
    ),
);

pub mod get_audit_logs {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
        pub filter: Option<AuditAuditLogBoolExp>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub limit: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub offset: Option<i32>,
    }

    impl Variables {
        pub fn page(filter: AuditAuditLogBoolExp, page: PageRequest) -> Self {
            Self {
                filter: Some(filter),
                limit: Some(page.limit),
                offset: Some(page.offset),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub audit_audit_log: Vec<AuditLog>,
        pub audit_audit_log_aggregate: Aggregate<CountAggregate>,
    }

    impl ResponseData {
        pub fn into_page(self, offset: i32) -> Page<AuditLog> {
            Page::new(self.audit_audit_log, &self.audit_audit_log_aggregate, offset)
        }
    }
}

pub mod insert_audit_log {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub object: AuditAuditLogInsertInput,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub insert_audit_audit_log_one: Option<InsertedAuditLog>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct InsertedAuditLog {
        pub id: Uuid,
        pub event_time: Timestamptz,
    }
}

pub mod recent_activity {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub limit: i32,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub audit_audit_log: Vec<AuditLog>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn audit_filter_by_resource() {
        let vars = get_audit_logs::Variables::page(
            AuditAuditLogBoolExp::for_resource("payrolls", Some("42")),
            PageRequest::new(10, 0),
        );
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({
                "where": {"resourceType": {"_eq": "payrolls"}, "resourceId": {"_eq": "42"}},
                "limit": 10,
                "offset": 0
            })
        );
    }

    #[test]
    fn recent_activity_decodes_entries() {
        let data: recent_activity::ResponseData = serde_json::from_value(json!({
            "auditAuditLog": [{
                "id": "6f1c2b1e-7a0d-4c57-9d7a-3b0f1e2d4c5b",
                "userId": null,
                "userEmail": "ava@example.com",
                "userRole": "manager",
                "action": "UPDATE",
                "resourceType": "payrolls",
                "resourceId": "42",
                "oldValues": {"status": "Implementation"},
                "newValues": {"status": "Active"},
                "ipAddress": null,
                "eventTime": "2024-05-01T10:00:00+00:00"
            }]
        }))
        .unwrap();
        assert_eq!(data.audit_audit_log[0].new_values, Some(json!({"status": "Active"})));
    }
}
