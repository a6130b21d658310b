//! Per-consultant load derived from `GetTeamWorkloadOptimized`.

use payroll_schema::enums::UserRole;
use payroll_schema::scalars::Numeric;
use serde::Serialize;
use uuid::Uuid;

use crate::ops::work_schedule::get_team_workload_optimized::{ResponseData, TeamMember};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberWorkload {
    pub user_id: Uuid,
    pub name: String,
    pub role: UserRole,
    /// Weekly hours left for payroll work after admin time.
    pub capacity_hours: Numeric,
    pub primary_payrolls: i64,
    pub backup_payrolls: i64,
    pub employees: i64,
    /// Employees per capacity hour; `None` without any capacity.
    pub employees_per_hour: Option<Numeric>,
}

impl From<&TeamMember> for MemberWorkload {
    fn from(member: &TeamMember) -> Self {
        let capacity_hours: Numeric = member
            .work_schedules
            .iter()
            .map(|day| day.capacity_hours())
            .sum();
        let employees = member
            .primary_payrolls_aggregate
            .sum()
            .and_then(|sum| sum.employee_count)
            .unwrap_or(0);
        let employees_per_hour = (capacity_hours > Numeric::ZERO)
            .then(|| (Numeric::from(employees) / capacity_hours).round_dp(2));

        Self {
            user_id: member.id,
            name: member.name.clone(),
            role: member.role,
            capacity_hours,
            primary_payrolls: member.primary_payrolls_aggregate.count(),
            backup_payrolls: member.backup_payrolls_aggregate.count(),
            employees,
            employees_per_hour,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamWorkload {
    pub members: Vec<MemberWorkload>,
    pub total_capacity_hours: Numeric,
    pub total_primary_payrolls: i64,
}

impl TeamWorkload {
    pub fn new(data: &ResponseData) -> Self {
        let members: Vec<MemberWorkload> = data.users.iter().map(MemberWorkload::from).collect();
        Self {
            total_capacity_hours: members.iter().map(|m| m.capacity_hours).sum(),
            total_primary_payrolls: members.iter().map(|m| m.primary_payrolls).sum(),
            members,
        }
    }

    /// Members ordered by load, heaviest first. Members without capacity but
    /// with payrolls come before everyone else.
    pub fn busiest(&self) -> Vec<&MemberWorkload> {
        let mut members: Vec<&MemberWorkload> = self.members.iter().collect();
        members.sort_by(|a, b| {
            let overloaded = |m: &MemberWorkload| m.employees_per_hour.is_none() && m.primary_payrolls > 0;
            overloaded(b)
                .cmp(&overloaded(a))
                .then_with(|| b.employees_per_hour.cmp(&a.employees_per_hour))
                .then_with(|| a.name.cmp(&b.name))
        });
        members
    }
}
