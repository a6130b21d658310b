use payroll_schema::scalars::{Date, Numeric};
use payroll_schema::{Aggregate, CountAggregate, CountAndSum};
use serde::{Deserialize, Serialize};

use super::billing::TotalAmountSum;
use super::work_schedule::get_team_workload_optimized::EmployeeCountSum;
use crate::operation::operation;

operation!(
    /// Headline counts for the dashboard in a single request.
    GetDashboardStats,
    Query,
    get_dashboard_stats,
    include_str!("../../graphql/operations/dashboard/get_dashboard_stats.graphql"),
);

pub mod get_dashboard_stats {
    use super::*;

    /// `horizon` closes the window of upcoming EFT dates opened by `today`.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub today: Date,
        pub horizon: Date,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub active_clients: Aggregate<CountAggregate>,
        pub active_payrolls: Aggregate<CountAndSum<EmployeeCountSum>>,
        pub upcoming_dates: Aggregate<CountAggregate>,
        pub payroll_staff: Aggregate<CountAggregate>,
        pub outstanding_invoices: Aggregate<CountAndSum<TotalAmountSum>>,
    }

    impl ResponseData {
        pub fn stats(&self) -> DashboardStats {
            DashboardStats {
                active_clients: self.active_clients.count(),
                active_payrolls: self.active_payrolls.count(),
                employees_paid: self
                    .active_payrolls
                    .sum()
                    .and_then(|s| s.employee_count)
                    .unwrap_or(0),
                upcoming_dates: self.upcoming_dates.count(),
                payroll_staff: self.payroll_staff.count(),
                outstanding_invoices: self.outstanding_invoices.count(),
                outstanding_amount: self
                    .outstanding_invoices
                    .sum()
                    .and_then(|s| s.total_amount)
                    .unwrap_or_default(),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct DashboardStats {
        pub active_clients: i64,
        pub active_payrolls: i64,
        pub employees_paid: i64,
        pub upcoming_dates: i64,
        pub payroll_staff: i64,
        pub outstanding_invoices: i64,
        pub outstanding_amount: Numeric,
    }
}
