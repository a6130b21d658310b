use payroll_schema::tables::{
    Client, Payroll, PayrollCycle, PayrollDateType, PayrollsBoolExp, PayrollsInsertInput,
    PayrollsOrderBy, PayrollsSetInput,
};
use payroll_schema::{Aggregate, CountAggregate, CreatePayrollVersionArgs};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ClientRef, UserSummary};
use crate::operation::{operation, NoVariables};
use crate::pagination::{Page, PageRequest};

operation!(
    /// Payroll list with client, consultant and schedule labels.
    GetPayrolls,
    Query,
    get_payrolls,
    concat!(
        include_str!("../../graphql/operations/payrolls/get_payrolls.graphql"),
        include_str!("../../graphql/fragments/payroll_fields.graphql"),
        include_str!("../../graphql/fragments/user_summary.graphql"),
    ),
);

operation!(
    GetPayrollById,
    Query,
    get_payroll_by_id,
    concat!(
        include_str!("../../graphql/operations/payrolls/get_payroll_by_id.graphql"),
        include_str!("../../graphql/fragments/payroll_fields.graphql"),
        include_str!("../../graphql/fragments/client_fields.graphql"),
        include_str!("../../graphql/fragments/user_summary.graphql"),
    ),
);

operation!(
    /// Every version of a payroll family, oldest first.
    GetPayrollFamily,
    Query,
    get_payroll_family,
    concat!(
        include_str!("../../graphql/operations/payrolls/get_payroll_family.graphql"),
        include_str!("../../graphql/fragments/payroll_fields.graphql"),
    ),
);

operation!(
    CreatePayroll,
    Mutation,
    create_payroll,
    concat!(
        include_str!("../../graphql/operations/payrolls/create_payroll.graphql"),
        include_str!("../../graphql/fragments/payroll_fields.graphql"),
    ),
);

operation!(
    UpdatePayroll,
    Mutation,
    update_payroll,
    concat!(
        include_str!("../../graphql/operations/payrolls/update_payroll.graphql"),
        include_str!("../../graphql/fragments/payroll_fields.graphql"),
    ),
);

operation!(
    /// Calls `create_payroll_version`. A second current version in the same
    /// family fails with `only_one_current_version_per_family`.
    CreatePayrollVersion,
    Mutation,
    create_payroll_version,
    concat!(
        include_str!("../../graphql/operations/payrolls/create_payroll_version.graphql"),
        include_str!("../../graphql/fragments/payroll_fields.graphql"),
    ),
);

operation!(
    /// Payroll cycles and date types for pickers.
    GetPayrollReferenceData,
    Query,
    get_payroll_reference_data,
    include_str!("../../graphql/operations/payrolls/get_payroll_reference_data.graphql"),
);

pub mod get_payrolls {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
        pub filter: Option<PayrollsBoolExp>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub order_by: Option<Vec<PayrollsOrderBy>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub limit: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub offset: Option<i32>,
    }

    impl Variables {
        pub fn page(filter: PayrollsBoolExp, order_by: Vec<PayrollsOrderBy>, page: PageRequest) -> Self {
            Self {
                filter: Some(filter),
                order_by: (!order_by.is_empty()).then_some(order_by),
                limit: Some(page.limit),
                offset: Some(page.offset),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub payrolls: Vec<PayrollListItem>,
        pub payrolls_aggregate: Aggregate<CountAggregate>,
    }

    impl ResponseData {
        pub fn into_page(self, offset: i32) -> Page<PayrollListItem> {
            Page::new(self.payrolls, &self.payrolls_aggregate, offset)
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PayrollListItem {
        #[serde(flatten)]
        pub payroll: Payroll,
        pub client: ClientRef,
        pub primary_consultant: Option<UserSummary>,
        pub payroll_cycle: PayrollCycle,
        pub payroll_date_type: PayrollDateType,
    }
}

pub mod get_payroll_by_id {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub id: Uuid,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub payrolls_by_pk: Option<PayrollDetail>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PayrollDetail {
        #[serde(flatten)]
        pub payroll: Payroll,
        pub client: Client,
        pub primary_consultant: Option<UserSummary>,
        pub backup_consultant: Option<UserSummary>,
        pub manager: Option<UserSummary>,
        pub payroll_cycle: PayrollCycle,
        pub payroll_date_type: PayrollDateType,
        pub payroll_dates_aggregate: Aggregate<CountAggregate>,
    }
}

pub mod get_payroll_family {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub family_id: Uuid,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ResponseData {
        pub payrolls: Vec<Payroll>,
    }

    impl ResponseData {
        /// The version without a superseded date.
        pub fn current(&self) -> Option<&Payroll> {
            self.payrolls.iter().find(|p| p.is_current())
        }

        pub fn latest(&self) -> Option<&Payroll> {
            self.payrolls.iter().max_by_key(|p| p.version_number)
        }
    }
}

pub mod create_payroll {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub object: PayrollsInsertInput,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub insert_payrolls_one: Option<Payroll>,
    }
}

pub mod update_payroll {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub id: Uuid,
        pub set: PayrollsSetInput,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub update_payrolls_by_pk: Option<Payroll>,
    }
}

pub mod create_payroll_version {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub args: CreatePayrollVersionArgs,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub create_payroll_version: Vec<Payroll>,
    }

    impl ResponseData {
        /// The function returns the new version as a single-row set.
        pub fn new_version(self) -> Option<Payroll> {
            self.create_payroll_version.into_iter().next()
        }
    }
}

pub mod get_payroll_reference_data {
    use super::*;

    pub type Variables = NoVariables;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub payroll_cycles: Vec<PayrollCycle>,
        pub payroll_date_types: Vec<PayrollDateType>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use payroll_schema::{PayrollCycleType, PayrollStatus};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn payroll_row(id: &str, version: i32, parent: Option<&str>, superseded: Option<&str>) -> Value {
        json!({
            "id": id,
            "name": "Acme Weekly",
            "clientId": "0b7d0c39-9a38-4c1a-9b2e-5b8f7f0d1a22",
            "cycleId": "1d0a1c9e-2b35-4e5f-8a7b-9c0d1e2f3a4b",
            "dateTypeId": "2e1b2d0f-3c46-4f60-9b8c-0d1e2f3a4b5c",
            "dateValue": null,
            "primaryConsultantUserId": null,
            "backupConsultantUserId": null,
            "managerUserId": null,
            "processingDaysBeforeEft": 2,
            "status": "Active",
            "employeeCount": 120,
            "versionNumber": version,
            "parentPayrollId": parent,
            "supersededDate": superseded,
            "goLiveDate": null,
            "versionReason": null,
            "createdAt": "2024-01-02T03:04:05+00:00",
            "updatedAt": "2024-01-02T03:04:05+00:00"
        })
    }

    #[test]
    fn family_picks_current_and_latest() {
        let root = "6f1c2b1e-7a0d-4c57-9d7a-3b0f1e2d4c5b";
        let data: get_payroll_family::ResponseData = serde_json::from_value(json!({
            "payrolls": [
                payroll_row(root, 1, None, Some("2024-06-30")),
                payroll_row("7a2d3c2f-8b1e-4d68-8e8b-4c1f2e3d5d6c", 2, Some(root), None),
            ]
        }))
        .unwrap();

        let current = data.current().unwrap();
        assert_eq!(current.version_number, 2);
        assert_eq!(current.family_id().to_string(), root);
        assert_eq!(data.latest().unwrap().version_number, 2);
    }

    #[test]
    fn list_item_keeps_relationships() {
        let mut row = payroll_row("6f1c2b1e-7a0d-4c57-9d7a-3b0f1e2d4c5b", 1, None, None);
        let extra = json!({
            "client": {"id": "0b7d0c39-9a38-4c1a-9b2e-5b8f7f0d1a22", "name": "Acme Pty Ltd"},
            "primaryConsultant": null,
            "payrollCycle": {"id": "1d0a1c9e-2b35-4e5f-8a7b-9c0d1e2f3a4b", "name": "weekly", "description": null},
            "payrollDateType": {"id": "2e1b2d0f-3c46-4f60-9b8c-0d1e2f3a4b5c", "name": "dow", "description": "Day of week"}
        });
        if let (Some(row), Some(extra)) = (row.as_object_mut(), extra.as_object()) {
            row.extend(extra.clone());
        }

        let item: get_payrolls::PayrollListItem = serde_json::from_value(row).unwrap();
        assert_eq!(item.payroll.status, PayrollStatus::Active);
        assert_eq!(item.client.name, "Acme Pty Ltd");
        assert_eq!(item.payroll_cycle.name, PayrollCycleType::Weekly);
        assert!(item.primary_consultant.is_none());
    }

    #[test]
    fn version_args_are_wrapped() {
        let go_live = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let vars = create_payroll_version::Variables {
            args: CreatePayrollVersionArgs::new(Uuid::nil(), go_live, "Headcount change", Uuid::nil()),
        };
        let value = serde_json::to_value(&vars).unwrap();
        assert_eq!(value["args"]["pGoLiveDate"], "2024-07-01");
        assert_eq!(value["args"]["pVersionReason"], "Headcount change");
    }
}
