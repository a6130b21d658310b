use payroll_schema::scalars::Numeric;
use payroll_schema::tables::{WorkSchedule, WorkScheduleInsertInput, WorkScheduleSetInput};
use payroll_schema::{Aggregate, CountAggregate, CountAndSum, MutationResponse, PayrollStatus, UserRole};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::operation::operation;

operation!(
    GetUserWorkSchedule,
    Query,
    get_user_work_schedule,
    concat!(
        include_str!("../../graphql/operations/work_schedule/get_user_work_schedule.graphql"),
        include_str!("../../graphql/fragments/work_schedule_fields.graphql"),
    ),
);

operation!(
    /// Schedules and current payroll load of every active user in `roles`,
    /// fetched in one round trip.
    GetTeamWorkloadOptimized,
    Query,
    get_team_workload_optimized,
    include_str!("../../graphql/operations/work_schedule/get_team_workload_optimized.graphql"),
);

operation!(
    CreateWorkSchedule,
    Mutation,
    create_work_schedule,
    concat!(
        include_str!("../../graphql/operations/work_schedule/create_work_schedule.graphql"),
        include_str!("../../graphql/fragments/work_schedule_fields.graphql"),
    ),
);

operation!(
    UpdateWorkSchedule,
    Mutation,
    update_work_schedule,
    concat!(
        include_str!("../../graphql/operations/work_schedule/update_work_schedule.graphql"),
        include_str!("../../graphql/fragments/work_schedule_fields.graphql"),
    ),
);

operation!(
    DeleteWorkSchedule,
    Mutation,
    delete_work_schedule,
    include_str!("../../graphql/operations/work_schedule/delete_work_schedule.graphql"),
);

operation!(
    /// Upserts one row per user and day on `work_schedule_user_id_work_day_key`,
    /// overwriting the hour columns of existing rows.
    BulkUpdateWorkSchedule,
    Mutation,
    bulk_update_work_schedule,
    concat!(
        include_str!("../../graphql/operations/work_schedule/bulk_update_work_schedule.graphql"),
        include_str!("../../graphql/fragments/work_schedule_fields.graphql"),
    ),
);

operation!(
    /// Live view of the schedules of `userIds`, most recently changed first.
    WorkScheduleUpdates,
    Subscription,
    work_schedule_updates,
    concat!(
        include_str!("../../graphql/operations/work_schedule/work_schedule_updates.graphql"),
        include_str!("../../graphql/fragments/work_schedule_fields.graphql"),
    ),
);

pub mod get_user_work_schedule {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub user_id: Uuid,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub work_schedule: Vec<WorkSchedule>,
    }
}

pub mod get_team_workload_optimized {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub roles: Vec<UserRole>,
    }

    impl Default for Variables {
        fn default() -> Self {
            Self {
                roles: vec![UserRole::Consultant, UserRole::Manager],
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ResponseData {
        pub users: Vec<TeamMember>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TeamMember {
        pub id: Uuid,
        pub name: String,
        pub email: String,
        pub role: UserRole,
        pub work_schedules: Vec<ScheduleHours>,
        pub primary_payrolls: Vec<AssignedPayroll>,
        pub primary_payrolls_aggregate: Aggregate<CountAndSum<EmployeeCountSum>>,
        pub backup_payrolls_aggregate: Aggregate<CountAggregate>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ScheduleHours {
        pub work_day: String,
        pub work_hours: Numeric,
        pub admin_time_hours: Numeric,
        pub payroll_capacity_hours: Option<Numeric>,
    }

    impl ScheduleHours {
        pub fn capacity_hours(&self) -> Numeric {
            self.payroll_capacity_hours
                .unwrap_or(self.work_hours - self.admin_time_hours)
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AssignedPayroll {
        pub id: Uuid,
        pub name: String,
        pub status: PayrollStatus,
        pub employee_count: Option<i32>,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct EmployeeCountSum {
        pub employee_count: Option<i64>,
    }
}

pub mod create_work_schedule {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub object: WorkScheduleInsertInput,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub insert_work_schedule_one: Option<WorkSchedule>,
    }
}

pub mod update_work_schedule {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub id: Uuid,
        pub set: WorkScheduleSetInput,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub update_work_schedule_by_pk: Option<WorkSchedule>,
    }
}

pub mod delete_work_schedule {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub id: Uuid,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub delete_work_schedule_by_pk: Option<DeletedWorkSchedule>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct DeletedWorkSchedule {
        pub id: Uuid,
        pub user_id: Uuid,
        pub work_day: String,
    }
}

pub mod bulk_update_work_schedule {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub objects: Vec<WorkScheduleInsertInput>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub insert_work_schedule: Option<MutationResponse<WorkSchedule>>,
    }

    impl ResponseData {
        pub fn affected_rows(&self) -> i64 {
            self.insert_work_schedule
                .as_ref()
                .map(|r| r.affected_rows)
                .unwrap_or(0)
        }
    }
}

pub mod work_schedule_updates {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub user_ids: Vec<Uuid>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub work_schedule: Vec<WorkSchedule>,
    }
}
