use payroll_schema::scalars::Date;
use payroll_schema::tables::{Leave, LeaveInsertInput};
use payroll_schema::LeaveStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::operation::operation;

operation!(
    /// Leave of one user overlapping `[from, to]`.
    GetUserLeave,
    Query,
    get_user_leave,
    concat!(
        include_str!("../../graphql/operations/leave/get_user_leave.graphql"),
        include_str!("../../graphql/fragments/leave_fields.graphql"),
    ),
);

operation!(
    CreateLeave,
    Mutation,
    create_leave,
    concat!(
        include_str!("../../graphql/operations/leave/create_leave.graphql"),
        include_str!("../../graphql/fragments/leave_fields.graphql"),
    ),
);

operation!(
    UpdateLeaveStatus,
    Mutation,
    update_leave_status,
    concat!(
        include_str!("../../graphql/operations/leave/update_leave_status.graphql"),
        include_str!("../../graphql/fragments/leave_fields.graphql"),
    ),
);

pub mod get_user_leave {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub user_id: Uuid,
        pub from: Date,
        pub to: Date,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ResponseData {
        pub leave: Vec<Leave>,
    }

    impl ResponseData {
        /// Approved leave days inside `[from, to]`.
        pub fn approved_days_within(&self, from: Date, to: Date) -> i64 {
            self.leave
                .iter()
                .filter(|l| l.status == LeaveStatus::Approved)
                .map(|l| {
                    let start = l.start_date.max(from);
                    let end = l.end_date.min(to);
                    if end < start {
                        0
                    } else {
                        (end - start).num_days() + 1
                    }
                })
                .sum()
        }
    }
}

pub mod create_leave {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub object: LeaveInsertInput,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub insert_leave_one: Option<Leave>,
    }
}

pub mod update_leave_status {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub id: Uuid,
        pub status: LeaveStatus,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub update_leave_by_pk: Option<Leave>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn date(d: u32) -> Date {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    #[test]
    fn approved_days_are_clipped_to_range() {
        let data: get_user_leave::ResponseData = serde_json::from_value(json!({
            "leave": [
                {
                    "id": "6f1c2b1e-7a0d-4c57-9d7a-3b0f1e2d4c5b",
                    "userId": "0b7d0c39-9a38-4c1a-9b2e-5b8f7f0d1a22",
                    "startDate": "2024-06-28",
                    "endDate": "2024-07-03",
                    "leaveType": "Annual",
                    "reason": null,
                    "status": "Approved",
                    "createdAt": null
                },
                {
                    "id": "7a2d3c2f-8b1e-4d68-8e8b-4c1f2e3d5d6c",
                    "userId": "0b7d0c39-9a38-4c1a-9b2e-5b8f7f0d1a22",
                    "startDate": "2024-07-10",
                    "endDate": "2024-07-12",
                    "leaveType": "Sick",
                    "reason": null,
                    "status": "Pending",
                    "createdAt": null
                }
            ]
        }))
        .unwrap();

        assert_eq!(data.approved_days_within(date(1), date(31)), 3);
    }

    #[test]
    fn status_variable_uses_label() {
        let vars = update_leave_status::Variables {
            id: Uuid::nil(),
            status: LeaveStatus::Rejected,
        };
        assert_eq!(serde_json::to_value(&vars).unwrap()["status"], "Rejected");
    }
}
