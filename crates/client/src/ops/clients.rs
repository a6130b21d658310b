use payroll_schema::tables::{
    Client, ClientsBoolExp, ClientsInsertInput, ClientsOrderBy, ClientsSetInput, Payroll,
};
use payroll_schema::{Aggregate, CountAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::operation::operation;
use crate::pagination::{Page, PageRequest};

operation!(
    /// Clients with their current payroll counts.
    GetClients,
    Query,
    get_clients,
    concat!(
        include_str!("../../graphql/operations/clients/get_clients.graphql"),
        include_str!("../../graphql/fragments/client_fields.graphql"),
    ),
);

operation!(
    /// A client and its current payrolls.
    GetClientById,
    Query,
    get_client_by_id,
    concat!(
        include_str!("../../graphql/operations/clients/get_client_by_id.graphql"),
        include_str!("../../graphql/fragments/client_fields.graphql"),
        include_str!("../../graphql/fragments/payroll_fields.graphql"),
    ),
);

operation!(
    CreateClient,
    Mutation,
    create_client,
    concat!(
        include_str!("../../graphql/operations/clients/create_client.graphql"),
        include_str!("../../graphql/fragments/client_fields.graphql"),
    ),
);

operation!(
    UpdateClient,
    Mutation,
    update_client,
    concat!(
        include_str!("../../graphql/operations/clients/update_client.graphql"),
        include_str!("../../graphql/fragments/client_fields.graphql"),
    ),
);

pub mod get_clients {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
        pub filter: Option<ClientsBoolExp>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub order_by: Option<Vec<ClientsOrderBy>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub limit: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub offset: Option<i32>,
    }

    impl Variables {
        pub fn page(filter: ClientsBoolExp, order_by: Vec<ClientsOrderBy>, page: PageRequest) -> Self {
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
        pub clients: Vec<ClientWithPayrollCount>,
        pub clients_aggregate: Aggregate<CountAggregate>,
    }

    impl ResponseData {
        pub fn into_page(self, offset: i32) -> Page<ClientWithPayrollCount> {
            Page::new(self.clients, &self.clients_aggregate, offset)
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ClientWithPayrollCount {
        #[serde(flatten)]
        pub client: Client,
        pub payrolls_aggregate: Aggregate<CountAggregate>,
    }

    impl ClientWithPayrollCount {
        pub fn current_payrolls(&self) -> i64 {
            self.payrolls_aggregate.count()
        }
    }
}

pub mod get_client_by_id {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub id: Uuid,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub clients_by_pk: Option<ClientWithPayrolls>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ClientWithPayrolls {
        #[serde(flatten)]
        pub client: Client,
        pub payrolls: Vec<Payroll>,
    }
}

pub mod create_client {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub object: ClientsInsertInput,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub insert_clients_one: Option<Client>,
    }
}

pub mod update_client {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub id: Uuid,
        pub set: ClientsSetInput,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub update_clients_by_pk: Option<Client>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn client_list_decodes_nested_aggregate() {
        let data: get_clients::ResponseData = serde_json::from_value(json!({
            "clients": [{
                "id": "0b7d0c39-9a38-4c1a-9b2e-5b8f7f0d1a22",
                "name": "Acme Pty Ltd",
                "contactPerson": "Jo Smith",
                "contactEmail": null,
                "contactPhone": null,
                "active": true,
                "createdAt": "2024-01-02T03:04:05+00:00",
                "updatedAt": "2024-01-02T03:04:05+00:00",
                "payrollsAggregate": {"aggregate": {"count": 3}}
            }],
            "clientsAggregate": {"aggregate": {"count": 41}}
        }))
        .unwrap();

        let page = data.into_page(0);
        assert_eq!(page.total_count, 41);
        assert!(page.has_next_page);
        assert_eq!(page.items[0].current_payrolls(), 3);
        assert_eq!(page.items[0].client.name, "Acme Pty Ltd");
    }

    #[test]
    fn update_sends_only_set_columns() {
        let vars = update_client::Variables {
            id: Uuid::nil(),
            set: ClientsSetInput {
                active: Some(false),
                ..Default::default()
            },
        };
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({"id": "00000000-0000-0000-0000-000000000000", "set": {"active": false}})
        );
    }
}
