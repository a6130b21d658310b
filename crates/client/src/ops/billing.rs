use payroll_schema::scalars::Numeric;
use payroll_schema::tables::{
    BillingInvoice, BillingInvoiceBoolExp, BillingInvoiceInsertInput, BillingInvoiceOrderBy,
    BillingItem,
};
use payroll_schema::{Aggregate, CountAndSum, InvoiceStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ClientRef;
use crate::operation::operation;
use crate::pagination::{Page, PageRequest};

operation!(
    /// Invoice page with line items and the summed total of all matches.
    GetBillingInvoices,
    Query,
    get_billing_invoices,
    concat!(
        include_str!("../../graphql/operations/billing/get_billing_invoices.graphql"),
        include_str!("../../graphql/fragments/billing_invoice_fields.graphql"),
        include_str!("../../graphql/fragments/billing_item_fields.graphql"),
    ),
);

operation!(
    /// Inserts an invoice together with its line items.
    CreateBillingInvoice,
    Mutation,
    create_billing_invoice,
    concat!(
        include_str!("../../graphql/operations/billing/create_billing_invoice.graphql"),
        include_str!("../../graphql/fragments/billing_invoice_fields.graphql"),
        include_str!("../../graphql/fragments/billing_item_fields.graphql"),
    ),
);

operation!(
    UpdateBillingInvoiceStatus,
    Mutation,
    update_billing_invoice_status,
    concat!(
        include_str!("../../graphql/operations/billing/update_billing_invoice_status.graphql"),
        include_str!("../../graphql/fragments/billing_invoice_fields.graphql"),
    ),
);

operation!(
    GetClientBillingStats,
    Query,
    get_client_billing_stats,
    include_str!("../../graphql/operations/billing/get_client_billing_stats.graphql"),
);

/// `sum { totalAmount }` of `billingInvoiceAggregate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalAmountSum {
    pub total_amount: Option<Numeric>,
}

/// `sum { amount }` of `billingItemsAggregate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountSum {
    pub amount: Option<Numeric>,
}

fn invoice_total(aggregate: &Aggregate<CountAndSum<TotalAmountSum>>) -> Numeric {
    aggregate
        .sum()
        .and_then(|s| s.total_amount)
        .unwrap_or_default()
}

pub mod get_billing_invoices {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
        pub filter: Option<BillingInvoiceBoolExp>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub order_by: Option<Vec<BillingInvoiceOrderBy>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub limit: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub offset: Option<i32>,
    }

    impl Variables {
        pub fn page(
            filter: BillingInvoiceBoolExp,
            order_by: Vec<BillingInvoiceOrderBy>,
            page: PageRequest,
        ) -> Self {
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
        pub billing_invoice: Vec<InvoiceWithItems>,
        pub billing_invoice_aggregate: Aggregate<CountAndSum<TotalAmountSum>>,
    }

    impl ResponseData {
        /// Sum of `totalAmount` over every matching invoice, not just this page.
        pub fn total_amount(&self) -> Numeric {
            invoice_total(&self.billing_invoice_aggregate)
        }

        pub fn into_page(self, offset: i32) -> Page<InvoiceWithItems> {
            let total = Aggregate {
                aggregate: self
                    .billing_invoice_aggregate
                    .aggregate
                    .map(|a| payroll_schema::CountAggregate { count: a.count }),
            };
            Page::new(self.billing_invoice, &total, offset)
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct InvoiceWithItems {
        #[serde(flatten)]
        pub invoice: BillingInvoice,
        pub client: ClientRef,
        pub billing_items: Vec<BillingItem>,
    }

    impl InvoiceWithItems {
        pub fn items_total(&self) -> Numeric {
            self.billing_items.iter().map(|i| i.amount).sum()
        }
    }
}

pub mod create_billing_invoice {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub object: BillingInvoiceInsertInput,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub insert_billing_invoice_one: Option<CreatedInvoice>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CreatedInvoice {
        #[serde(flatten)]
        pub invoice: BillingInvoice,
        pub billing_items: Vec<BillingItem>,
    }
}

pub mod update_billing_invoice_status {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub id: Uuid,
        pub status: InvoiceStatus,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub update_billing_invoice_by_pk: Option<BillingInvoice>,
    }
}

pub mod get_client_billing_stats {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub client_id: Uuid,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub invoices: Aggregate<CountAndSum<TotalAmountSum>>,
        pub outstanding: Aggregate<CountAndSum<TotalAmountSum>>,
        pub paid: Aggregate<CountAndSum<TotalAmountSum>>,
        pub unbilled_items: Aggregate<CountAndSum<AmountSum>>,
    }

    impl ResponseData {
        pub fn summary(&self) -> ClientBillingSummary {
            ClientBillingSummary {
                invoice_count: self.invoices.count(),
                invoiced_total: invoice_total(&self.invoices),
                outstanding_count: self.outstanding.count(),
                outstanding_total: invoice_total(&self.outstanding),
                paid_total: invoice_total(&self.paid),
                unbilled_item_count: self.unbilled_items.count(),
                unbilled_total: self
                    .unbilled_items
                    .sum()
                    .and_then(|s| s.amount)
                    .unwrap_or_default(),
            }
        }
    }

    /// Aggregates with absent sums read as zero.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct ClientBillingSummary {
        pub invoice_count: i64,
        pub invoiced_total: Numeric,
        pub outstanding_count: i64,
        pub outstanding_total: Numeric,
        pub paid_total: Numeric,
        pub unbilled_item_count: i64,
        pub unbilled_total: Numeric,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn billing_stats_summary_treats_missing_sums_as_zero() {
        let data: get_client_billing_stats::ResponseData = serde_json::from_value(json!({
            "invoices": {"aggregate": {"count": 4, "sum": {"totalAmount": 5200.50}}},
            "outstanding": {"aggregate": {"count": 1, "sum": {"totalAmount": "1200.00"}}},
            "paid": {"aggregate": {"count": 0, "sum": {"totalAmount": null}}},
            "unbilledItems": {"aggregate": {"count": 2, "sum": {"amount": 310}}}
        }))
        .unwrap();

        let summary = data.summary();
        assert_eq!(summary.invoice_count, 4);
        assert_eq!(summary.invoiced_total, Numeric::from_str("5200.50").unwrap());
        assert_eq!(summary.outstanding_total, Numeric::from_str("1200").unwrap());
        assert_eq!(summary.paid_total, Numeric::ZERO);
        assert_eq!(summary.unbilled_total, Numeric::from(310));
    }

    #[test]
    fn status_update_sends_enum_label() {
        let vars = update_billing_invoice_status::Variables {
            id: Uuid::nil(),
            status: InvoiceStatus::Paid,
        };
        assert_eq!(serde_json::to_value(&vars).unwrap()["status"], "paid");
    }
}
