//! Responses built from a document's selection and the schema, one value per
//! leaf and one element per list. Every operation's `ResponseData` must decode
//! the response its own document describes.

use async_graphql_parser::types::{BaseType, ExecutableDocument, OperationType, Selection, SelectionSet, Type};
use payroll_schema::{
    InvoiceStatus, LeaveStatus, PayrollCycleType, PayrollDateTypeName, PayrollStatus, UserRole,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};

use super::{Schema, TypeDef};
use crate::documents;
use crate::operation::Operation;
use crate::ops::{
    audit, billing, clients, dashboard, holidays, leave, notes, payroll_dates, payrolls,
    permissions, users, work_schedule,
};

fn scalar(name: &str) -> Value {
    match name {
        "Int" => json!(1),
        "Float" => json!(1.5),
        "Boolean" => json!(true),
        "String" | "ID" => json!("text"),
        "Uuid" => json!("5b4a8c1e-0d3f-4e7a-9c2b-1f6e8d7a3b90"),
        "Date" => json!("2024-05-01"),
        "Timestamptz" => json!("2024-05-01T10:00:00+00:00"),
        "Numeric" => json!("7.5"),
        "Jsonb" => json!({"source": "sample"}),
        "UserRole" => json!(UserRole::ALL[0].as_str()),
        "PayrollStatus" => json!(PayrollStatus::ALL[0].as_str()),
        "PayrollCycleType" => json!(PayrollCycleType::ALL[0].as_str()),
        "PayrollDateType" => json!(PayrollDateTypeName::ALL[0].as_str()),
        "LeaveStatusEnum" => json!(LeaveStatus::ALL[0].as_str()),
        "InvoiceStatus" => json!(InvoiceStatus::ALL[0].as_str()),
        other => panic!("no sample value for {other}"),
    }
}

impl Schema {
    fn sample_response(&self, document: &str) -> Value {
        let document = async_graphql_parser::parse_query(document).unwrap();
        let (_, operation) = document.operations.iter().next().unwrap();
        let root = match operation.node.ty {
            OperationType::Query => self.query.as_deref(),
            OperationType::Mutation => self.mutation.as_deref(),
            OperationType::Subscription => self.subscription.as_deref(),
        }
        .unwrap();

        let mut data = Map::new();
        self.fill(&document, root, &operation.node.selection_set.node, &mut data);
        Value::Object(data)
    }

    fn sample(&self, document: &ExecutableDocument, ty: &Type, selection_set: &SelectionSet) -> Value {
        match &ty.base {
            BaseType::List(inner) => Value::Array(vec![self.sample(document, inner, selection_set)]),
            BaseType::Named(name) => match self.types.get(name.as_str()) {
                Some(TypeDef::Object { .. } | TypeDef::Interface(_)) => {
                    let mut object = Map::new();
                    self.fill(document, name.as_str(), selection_set, &mut object);
                    Value::Object(object)
                }
                _ => scalar(name.as_str()),
            },
        }
    }

    fn fill(
        &self,
        document: &ExecutableDocument,
        parent: &str,
        selection_set: &SelectionSet,
        out: &mut Map<String, Value>,
    ) {
        for item in &selection_set.items {
            match &item.node {
                Selection::Field(field) => {
                    let field = &field.node;
                    let key = field.response_key().node.to_string();
                    let name = field.name.node.as_str();
                    if name == "__typename" {
                        out.insert(key, json!(parent));
                        continue;
                    }
                    let def = &self.fields(parent).unwrap()[name];
                    out.insert(key, self.sample(document, &def.ty, &field.selection_set.node));
                }
                Selection::FragmentSpread(spread) => {
                    let fragment = &document.fragments[&spread.node.fragment_name.node];
                    self.fill(document, parent, &fragment.node.selection_set.node, out);
                }
                Selection::InlineFragment(inline) => {
                    self.fill(document, parent, &inline.node.selection_set.node, out);
                }
            }
        }
    }
}

fn decode<O: Operation>(schema: &Schema) -> O::ResponseData {
    let data = schema.sample_response(O::DOCUMENT);
    match serde_json::from_value(data.clone()) {
        Ok(decoded) => decoded,
        Err(err) => panic!("{} does not decode {data}: {err}", O::NAME),
    }
}

macro_rules! decode_each {
    ($schema:expr, $($op:ty),+ $(,)?) => {{
        $(decode::<$op>($schema);)+
        vec![$(<$op as Operation>::NAME),+]
    }};
}

#[test]
fn every_response_type_decodes_its_document_shape() {
    let schema = Schema::bundled().unwrap();
    let mut decoded = decode_each!(
        &schema,
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
    );

    let mut registered: Vec<&str> = documents::registry().iter().map(|doc| doc.name).collect();
    decoded.sort_unstable();
    registered.sort_unstable();
    assert_eq!(decoded, registered);
}

#[test]
fn flattened_rows_keep_their_relationships() {
    let schema = Schema::bundled().unwrap();

    let invoices = decode::<billing::GetBillingInvoices>(&schema);
    let invoice = &invoices.billing_invoice[0];
    assert_eq!(invoice.client.name, "text");
    assert_eq!(invoice.billing_items.len(), 1);
    assert_eq!(invoice.invoice.currency, "text");

    let team = decode::<work_schedule::GetTeamWorkloadOptimized>(&schema);
    let member = &team.users[0];
    assert_eq!(member.work_schedules[0].capacity_hours().to_string(), "7.5");
    assert_eq!(member.primary_payrolls_aggregate.count(), 1);
}
