//! Rust mirror of the payroll Hasura schema.
//!
//! Row types deserialize the `…Fields` fragments used by the operation
//! documents. Filter, ordering and mutation inputs serialize to the names the
//! graphql-default naming convention generates.

pub mod aggregate;
pub mod enums;
pub mod expressions;
pub mod functions;
pub mod mutation;
pub mod scalars;
pub mod tables;

pub use aggregate::{Aggregate, CountAggregate, CountAndSum};
pub use enums::{
    InvoiceStatus, LeaveStatus, PayrollCycleType, PayrollDateTypeName, PayrollStatus,
    UnknownLabel, UserRole,
};
pub use expressions::{
    BoolExp, ComparisonExp, JsonbComparisonExp, OrderBy, StringComparisonExp,
};
pub use functions::{CreatePayrollVersionArgs, GeneratePayrollDatesArgs};
pub use mutation::{ArrRelInsertInput, MutationResponse, OnConflict, PkColumnsInput};
