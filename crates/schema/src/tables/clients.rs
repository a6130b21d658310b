use serde::{Deserialize, Serialize};

use crate::expressions::{
    BooleanComparisonExp, OrderBy, StringComparisonExp, TimestamptzComparisonExp,
    UuidComparisonExp,
};
use crate::mutation::OnConflict;
use crate::scalars::{Timestamptz, Uuid};
use crate::tables::payrolls::PayrollsBoolExp;

/// A `clients` row as selected by the `ClientFields` fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub contact_person: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub active: bool,
    pub created_at: Timestamptz,
    pub updated_at: Timestamptz,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientsBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<ClientsBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<ClientsBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<ClientsBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<BooleanComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<TimestamptzComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payrolls: Option<Box<PayrollsBoolExp>>,
}

crate::impl_bool_exp!(ClientsBoolExp);

impl ClientsBoolExp {
    pub fn active(active: bool) -> Self {
        Self {
            active: Some(BooleanComparisonExp::eq(active)),
            ..Default::default()
        }
    }

    pub fn name_contains(term: &str) -> Self {
        Self {
            name: Some(StringComparisonExp::contains_ci(term)),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientsOrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<OrderBy>,
}

impl ClientsOrderBy {
    pub fn name(direction: OrderBy) -> Self {
        Self {
            name: Some(direction),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientsInsertInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientsSetInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientsConstraint {
    ClientsPkey,
    ClientsNameKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClientsUpdateColumn {
    Name,
    ContactPerson,
    ContactEmail,
    ContactPhone,
    Active,
    UpdatedAt,
}

pub type ClientsOnConflict = OnConflict<ClientsConstraint, ClientsUpdateColumn, ClientsBoolExp>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_omits_unset_columns() {
        let input = ClientsInsertInput {
            name: Some("Acme Pty Ltd".into()),
            active: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({"name": "Acme Pty Ltd", "active": true})
        );
    }

    #[test]
    fn constraint_names_match_postgres() {
        assert_eq!(
            serde_json::to_value(ClientsConstraint::ClientsNameKey).unwrap(),
            json!("clients_name_key")
        );
        assert_eq!(
            serde_json::to_value(ClientsUpdateColumn::ContactEmail).unwrap(),
            json!("contactEmail")
        );
    }
}
