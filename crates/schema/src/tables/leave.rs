use serde::{Deserialize, Serialize};

use crate::enums::LeaveStatus;
use crate::expressions::{
    ComparisonExp, DateComparisonExp, OrderBy, StringComparisonExp, UuidComparisonExp,
};
use crate::scalars::{Date, Timestamptz, Uuid};
use crate::tables::users::UsersBoolExp;

/// A `leave` row as selected by the `LeaveFields` fragment. Both dates are
/// inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    pub id: Uuid,
    pub user_id: Uuid,
    pub start_date: Date,
    pub end_date: Date,
    pub leave_type: String,
    pub reason: Option<String>,
    pub status: LeaveStatus,
    pub created_at: Option<Timestamptz>,
}

impl Leave {
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn covers(&self, day: Date) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    pub fn overlaps(&self, from: Date, to: Date) -> bool {
        self.start_date <= to && from <= self.end_date
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<LeaveBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<LeaveBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<LeaveBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ComparisonExp<LeaveStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Box<UsersBoolExp>>,
}

crate::impl_bool_exp!(LeaveBoolExp);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveOrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderBy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveInsertInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeaveStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSetInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeaveStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leave(start: (i32, u32, u32), end: (i32, u32, u32)) -> Leave {
        Leave {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            start_date: Date::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: Date::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            leave_type: "Annual".into(),
            reason: None,
            status: LeaveStatus::Approved,
            created_at: None,
        }
    }

    #[test]
    fn inclusive_day_count() {
        assert_eq!(leave((2024, 3, 4), (2024, 3, 8)).days(), 5);
        assert_eq!(leave((2024, 3, 4), (2024, 3, 4)).days(), 1);
    }

    #[test]
    fn overlap_and_cover() {
        let l = leave((2024, 3, 4), (2024, 3, 8));
        let d = |m, d| Date::from_ymd_opt(2024, m, d).unwrap();
        assert!(l.covers(d(3, 8)));
        assert!(!l.covers(d(3, 9)));
        assert!(l.overlaps(d(3, 8), d(3, 20)));
        assert!(!l.overlaps(d(3, 9), d(3, 20)));
    }
}
