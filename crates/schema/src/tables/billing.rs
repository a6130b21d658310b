//! `billing_invoice` and `billing_items`.

use serde::{Deserialize, Serialize};

use crate::enums::InvoiceStatus;
use crate::expressions::{
    ComparisonExp, DateComparisonExp, NumericComparisonExp, OrderBy, TimestamptzComparisonExp,
    UuidComparisonExp,
};
use crate::mutation::{ArrRelInsertInput, OnConflict};
use crate::scalars::{Date, Numeric, Timestamptz, Uuid};
use crate::tables::clients::{ClientsBoolExp, ClientsOrderBy};

/// A `billing_invoice` row as selected by the `BillingInvoiceFields` fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInvoice {
    pub id: Uuid,
    pub client_id: Uuid,
    pub billing_period_start: Date,
    pub billing_period_end: Date,
    pub total_amount: Numeric,
    pub currency: String,
    pub status: InvoiceStatus,
    pub issued_date: Option<Date>,
    pub due_date: Option<Date>,
    pub notes: Option<String>,
    pub created_at: Option<Timestamptz>,
    pub updated_at: Option<Timestamptz>,
}

impl BillingInvoice {
    /// Sent and unpaid after the due date.
    pub fn is_overdue(&self, today: Date) -> bool {
        self.status == InvoiceStatus::Sent && self.due_date.is_some_and(|due| due < today)
    }
}

/// A `billing_items` row as selected by the `BillingItemFields` fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingItem {
    pub id: Uuid,
    pub invoice_id: Option<Uuid>,
    pub payroll_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub description: String,
    pub quantity: i32,
    pub unit_price: Numeric,
    /// Generated column: `quantity * unit_price`.
    pub amount: Numeric,
    pub created_at: Option<Timestamptz>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInvoiceBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<BillingInvoiceBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<BillingInvoiceBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<BillingInvoiceBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_period_start: Option<DateComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_period_end: Option<DateComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<NumericComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ComparisonExp<InvoiceStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<DateComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<TimestamptzComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<Box<ClientsBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_items: Option<Box<BillingItemsBoolExp>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingItemsBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<BillingItemsBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<BillingItemsBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<BillingItemsBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payroll_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<NumericComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<TimestamptzComparisonExp>,
}

crate::impl_bool_exp!(BillingInvoiceBoolExp, BillingItemsBoolExp);

impl BillingInvoiceBoolExp {
    pub fn for_client(client_id: Uuid) -> Self {
        Self {
            client_id: Some(UuidComparisonExp::eq(client_id)),
            ..Default::default()
        }
    }

    pub fn with_status(statuses: impl IntoIterator<Item = InvoiceStatus>) -> Self {
        Self {
            status: Some(ComparisonExp::in_list(statuses)),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInvoiceOrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_period_start: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<Box<ClientsOrderBy>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingItemsInsertInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payroll_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Numeric>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingItemsConstraint {
    BillingItemsPkey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BillingItemsUpdateColumn {
    Description,
    Quantity,
    UnitPrice,
}

pub type BillingItemsOnConflict =
    OnConflict<BillingItemsConstraint, BillingItemsUpdateColumn, BillingItemsBoolExp>;

pub type BillingItemsArrRelInsertInput =
    ArrRelInsertInput<BillingItemsInsertInput, BillingItemsOnConflict>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInvoiceInsertInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_period_start: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_period_end: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_items: Option<BillingItemsArrRelInsertInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingInvoiceSetInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingInvoiceConstraint {
    BillingInvoicePkey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BillingInvoiceUpdateColumn {
    Status,
    TotalAmount,
    IssuedDate,
    DueDate,
    Notes,
    UpdatedAt,
}

pub type BillingInvoiceOnConflict =
    OnConflict<BillingInvoiceConstraint, BillingInvoiceUpdateColumn, BillingInvoiceBoolExp>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn nested_items_insert() {
        let input = BillingInvoiceInsertInput {
            client_id: Some(Uuid::nil()),
            currency: Some("AUD".into()),
            billing_items: Some(BillingItemsArrRelInsertInput::new(vec![BillingItemsInsertInput {
                description: Some("Payroll processing".into()),
                quantity: Some(2),
                unit_price: Some(Numeric::new(12_500, 2)),
                ..Default::default()
            }])),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "clientId": "00000000-0000-0000-0000-000000000000",
                "currency": "AUD",
                "billingItems": {"data": [{
                    "description": "Payroll processing",
                    "quantity": 2,
                    "unitPrice": "125.00"
                }]}
            })
        );
    }

    #[test]
    fn overdue_only_when_sent() {
        let today = Date::from_ymd_opt(2024, 7, 1).unwrap();
        let mut invoice = BillingInvoice {
            id: Uuid::nil(),
            client_id: Uuid::nil(),
            billing_period_start: Date::from_ymd_opt(2024, 5, 1).unwrap(),
            billing_period_end: Date::from_ymd_opt(2024, 5, 31).unwrap(),
            total_amount: Numeric::from(250),
            currency: "AUD".into(),
            status: InvoiceStatus::Sent,
            issued_date: None,
            due_date: Date::from_ymd_opt(2024, 6, 14),
            notes: None,
            created_at: None,
            updated_at: None,
        };
        assert!(invoice.is_overdue(today));

        invoice.status = InvoiceStatus::Paid;
        assert!(!invoice.is_overdue(today));
    }
}
