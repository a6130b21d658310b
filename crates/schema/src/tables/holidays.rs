use serde::{Deserialize, Serialize};

use crate::expressions::{DateComparisonExp, OrderBy, StringComparisonExp, UuidComparisonExp};
use crate::scalars::{Date, Timestamptz, Uuid};

/// A `holidays` row as selected by the `HolidayFields` fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub id: Uuid,
    pub date: Date,
    pub local_name: String,
    pub name: String,
    pub country_code: String,
    /// Subdivisions the holiday applies to; `None` means nationwide.
    pub region: Option<Vec<String>>,
    pub created_at: Option<Timestamptz>,
}

impl Holiday {
    pub fn is_national(&self) -> bool {
        self.region.as_ref().map_or(true, |r| r.is_empty())
    }

    pub fn applies_to(&self, region: &str) -> bool {
        self.region
            .as_ref()
            .map_or(true, |r| r.is_empty() || r.iter().any(|code| code == region))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidaysBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<HolidaysBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<HolidaysBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<HolidaysBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<StringComparisonExp>,
}

crate::impl_bool_exp!(HolidaysBoolExp);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidaysOrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<OrderBy>,
}
