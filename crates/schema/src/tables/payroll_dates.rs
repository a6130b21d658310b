use serde::{Deserialize, Serialize};

use crate::expressions::{
    DateComparisonExp, OrderBy, StringComparisonExp, TimestamptzComparisonExp, UuidComparisonExp,
};
use crate::scalars::{Date, Timestamptz, Uuid};
use crate::tables::payrolls::{PayrollsBoolExp, PayrollsOrderBy};

/// A `payroll_dates` row as selected by the `PayrollDateFields` fragment.
///
/// Rows are produced server-side by `generate_payroll_dates`; the adjusted EFT
/// date differs from the original when the original falls on a weekend or
/// public holiday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollDate {
    pub id: Uuid,
    pub payroll_id: Uuid,
    pub original_eft_date: Date,
    pub adjusted_eft_date: Date,
    pub processing_date: Date,
    pub notes: Option<String>,
    pub created_at: Option<Timestamptz>,
    pub updated_at: Option<Timestamptz>,
}

impl PayrollDate {
    pub fn is_adjusted(&self) -> bool {
        self.original_eft_date != self.adjusted_eft_date
    }

    /// Calendar days between processing and EFT.
    pub fn lead_days(&self) -> i64 {
        (self.adjusted_eft_date - self.processing_date).num_days()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollDatesBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<PayrollDatesBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<PayrollDatesBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<PayrollDatesBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payroll_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_eft_date: Option<DateComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_eft_date: Option<DateComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_date: Option<DateComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<TimestamptzComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payroll: Option<Box<PayrollsBoolExp>>,
}

crate::impl_bool_exp!(PayrollDatesBoolExp);

impl PayrollDatesBoolExp {
    pub fn for_payroll(payroll_id: Uuid) -> Self {
        Self {
            payroll_id: Some(UuidComparisonExp::eq(payroll_id)),
            ..Default::default()
        }
    }

    /// Adjusted EFT date within `[from, to]`; either bound may be open.
    pub fn eft_between(from: Option<Date>, to: Option<Date>) -> Self {
        Self {
            adjusted_eft_date: Some(DateComparisonExp::between(from, to)),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollDatesOrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_eft_date: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_eft_date: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_date: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payroll: Option<Box<PayrollsOrderBy>>,
}

impl PayrollDatesOrderBy {
    pub fn adjusted_eft_date(direction: OrderBy) -> Self {
        Self {
            adjusted_eft_date: Some(direction),
            ..Default::default()
        }
    }
}

/// Manual overrides on a generated date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollDatesSetInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_eft_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
