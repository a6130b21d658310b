//! Registry of every operation document the client ships.

use crate::operation::{Operation, OperationKind};
use crate::ops::{
    audit, billing, clients, dashboard, holidays, leave, notes, payroll_dates, payrolls,
    permissions, users, work_schedule,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentInfo {
    pub name: &'static str,
    pub kind: OperationKind,
    pub document: &'static str,
}

macro_rules! registry {
    ($($op:ty),* $(,)?) => {
        &[$(DocumentInfo {
            name: <$op as Operation>::NAME,
            kind: <$op as Operation>::KIND,
            document: <$op as Operation>::DOCUMENT,
        }),*]
    };
}

static REGISTRY: &[DocumentInfo] = registry![
    users::GetUsers,
    users::GetUserById,
    users::GetConsultants,
    users::UpdateUser,
    clients::GetClients,
    clients::GetClientById,
    clients::CreateClient,
    clients::UpdateClient,
    payrolls::GetPayrolls,
    payrolls::GetPayrollById,
    payrolls::GetPayrollFamily,
    payrolls::CreatePayroll,
    payrolls::UpdatePayroll,
    payrolls::CreatePayrollVersion,
    payrolls::GetPayrollReferenceData,
    payroll_dates::GetPayrollDates,
    payroll_dates::GetUpcomingPayrollDates,
    payroll_dates::GeneratePayrollDates,
    payroll_dates::UpdatePayrollDate,
    work_schedule::GetUserWorkSchedule,
    work_schedule::GetTeamWorkloadOptimized,
    work_schedule::CreateWorkSchedule,
    work_schedule::UpdateWorkSchedule,
    work_schedule::DeleteWorkSchedule,
    work_schedule::BulkUpdateWorkSchedule,
    work_schedule::WorkScheduleUpdates,
    billing::GetBillingInvoices,
    billing::CreateBillingInvoice,
    billing::UpdateBillingInvoiceStatus,
    billing::GetClientBillingStats,
    audit::GetAuditLogs,
    audit::InsertAuditLog,
    audit::RecentActivity,
    permissions::GetRolesWithPermissions,
    permissions::GetRolePermissions,
    leave::GetUserLeave,
    leave::CreateLeave,
    leave::UpdateLeaveStatus,
    holidays::GetHolidays,
    notes::GetNotes,
    notes::AddNote,
    notes::UpdateNote,
    dashboard::GetDashboardStats,
];

pub fn registry() -> &'static [DocumentInfo] {
    REGISTRY
}

pub fn find(name: &str) -> Option<&'static DocumentInfo> {
    REGISTRY.iter().find(|doc| doc.name == name)
}

pub fn of_kind(kind: OperationKind) -> impl Iterator<Item = &'static DocumentInfo> {
    REGISTRY.iter().filter(move |doc| doc.kind == kind)
}
