use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::expressions::{
    NumericComparisonExp, OrderBy, StringComparisonExp, TimestamptzComparisonExp,
    UuidComparisonExp,
};
use crate::mutation::OnConflict;
use crate::scalars::{Numeric, Timestamptz, Uuid};
use crate::tables::users::{UsersBoolExp, UsersOrderBy};

/// A `work_schedule` row as selected by the `WorkScheduleFields` fragment.
/// One row per user and weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSchedule {
    pub id: Uuid,
    pub user_id: Uuid,
    pub work_day: String,
    pub work_hours: Numeric,
    pub admin_time_hours: Numeric,
    /// Generated column: `work_hours - admin_time_hours`.
    pub payroll_capacity_hours: Option<Numeric>,
    pub created_at: Option<Timestamptz>,
    pub updated_at: Option<Timestamptz>,
}

impl WorkSchedule {
    /// Payroll hours for the day, falling back to the column definition when the
    /// generated value was not returned.
    pub fn capacity_hours(&self) -> Numeric {
        self.payroll_capacity_hours
            .unwrap_or(self.work_hours - self.admin_time_hours)
    }

    pub fn weekday(&self) -> Option<Weekday> {
        parse_work_day(&self.work_day)
    }
}

/// `work_day` labels as stored in Postgres.
pub fn work_day_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn parse_work_day(label: &str) -> Option<Weekday> {
    match label {
        "Monday" => Some(Weekday::Mon),
        "Tuesday" => Some(Weekday::Tue),
        "Wednesday" => Some(Weekday::Wed),
        "Thursday" => Some(Weekday::Thu),
        "Friday" => Some(Weekday::Fri),
        "Saturday" => Some(Weekday::Sat),
        "Sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkScheduleBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<WorkScheduleBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<WorkScheduleBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<WorkScheduleBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_day: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_hours: Option<NumericComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_time_hours: Option<NumericComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payroll_capacity_hours: Option<NumericComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<TimestamptzComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Box<UsersBoolExp>>,
}

crate::impl_bool_exp!(WorkScheduleBoolExp);

impl WorkScheduleBoolExp {
    pub fn for_users(user_ids: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            user_id: Some(UuidComparisonExp::in_list(user_ids)),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkScheduleOrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_day: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_hours: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payroll_capacity_hours: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Box<UsersOrderBy>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkScheduleInsertInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_hours: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_time_hours: Option<Numeric>,
}

impl WorkScheduleInsertInput {
    pub fn day(user_id: Uuid, day: Weekday, work_hours: Numeric, admin_time_hours: Numeric) -> Self {
        Self {
            id: None,
            user_id: Some(user_id),
            work_day: Some(work_day_label(day).to_string()),
            work_hours: Some(work_hours),
            admin_time_hours: Some(admin_time_hours),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkScheduleSetInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_hours: Option<Numeric>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_time_hours: Option<Numeric>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkScheduleConstraint {
    WorkSchedulePkey,
    WorkScheduleUserIdWorkDayKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkScheduleUpdateColumn {
    UserId,
    WorkDay,
    WorkHours,
    AdminTimeHours,
    UpdatedAt,
}

pub type WorkScheduleOnConflict =
    OnConflict<WorkScheduleConstraint, WorkScheduleUpdateColumn, WorkScheduleBoolExp>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn capacity_falls_back_to_column_definition() {
        let row: WorkSchedule = serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000001",
            "userId": "00000000-0000-0000-0000-000000000002",
            "workDay": "Tuesday",
            "workHours": 7.6,
            "adminTimeHours": 1.6,
            "payrollCapacityHours": null,
            "createdAt": null,
            "updatedAt": null
        }))
        .unwrap();

        assert_eq!(row.capacity_hours(), Numeric::from_str("6.0").unwrap());
        assert_eq!(row.weekday(), Some(Weekday::Tue));
    }

    #[test]
    fn insert_for_weekday_uses_postgres_label() {
        let input = WorkScheduleInsertInput::day(
            Uuid::nil(),
            Weekday::Fri,
            Numeric::from(8),
            Numeric::from(1),
        );
        assert_eq!(input.work_day.as_deref(), Some("Friday"));
    }

    #[test]
    fn labels_round_trip() {
        for day in [Weekday::Mon, Weekday::Wed, Weekday::Sun] {
            assert_eq!(parse_work_day(work_day_label(day)), Some(day));
        }
        assert_eq!(parse_work_day("Funday"), None);
    }
}
