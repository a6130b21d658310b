//! Reference tables: `payroll_cycles` and `payroll_date_types`.

use serde::{Deserialize, Serialize};

use crate::enums::{PayrollCycleType, PayrollDateTypeName};
use crate::expressions::{ComparisonExp, OrderBy, UuidComparisonExp};
use crate::scalars::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollCycle {
    pub id: Uuid,
    pub name: PayrollCycleType,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollDateType {
    pub id: Uuid,
    pub name: PayrollDateTypeName,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollCyclesBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<PayrollCyclesBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<PayrollCyclesBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<PayrollCyclesBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<ComparisonExp<PayrollCycleType>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollDateTypesBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<PayrollDateTypesBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<PayrollDateTypesBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<PayrollDateTypesBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<ComparisonExp<PayrollDateTypeName>>,
}

crate::impl_bool_exp!(PayrollCyclesBoolExp, PayrollDateTypesBoolExp);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollCyclesOrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<OrderBy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayrollDateTypesOrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<OrderBy>,
}
