use payroll_schema::scalars::Date;
use payroll_schema::tables::{PayrollDate, PayrollDatesBoolExp, PayrollDatesSetInput};
use payroll_schema::GeneratePayrollDatesArgs;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ClientRef;
use crate::operation::operation;

operation!(
    GetPayrollDates,
    Query,
    get_payroll_dates,
    concat!(
        include_str!("../../graphql/operations/payroll_dates/get_payroll_dates.graphql"),
        include_str!("../../graphql/fragments/payroll_date_fields.graphql"),
    ),
);

operation!(
    /// EFT dates from `from` onwards across current, active payrolls.
    GetUpcomingPayrollDates,
    Query,
    get_upcoming_payroll_dates,
    concat!(
        include_str!("../../graphql/operations/payroll_dates/get_upcoming_payroll_dates.graphql"),
        include_str!("../../graphql/fragments/payroll_date_fields.graphql"),
    ),
);

operation!(
    /// Calls `generate_payroll_dates`, which replaces the payroll's future dates.
    GeneratePayrollDates,
    Mutation,
    generate_payroll_dates,
    concat!(
        include_str!("../../graphql/operations/payroll_dates/generate_payroll_dates.graphql"),
        include_str!("../../graphql/fragments/payroll_date_fields.graphql"),
    ),
);

operation!(
    UpdatePayrollDate,
    Mutation,
    update_payroll_date,
    concat!(
        include_str!("../../graphql/operations/payroll_dates/update_payroll_date.graphql"),
        include_str!("../../graphql/fragments/payroll_date_fields.graphql"),
    ),
);

pub mod get_payroll_dates {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        #[serde(rename = "where")]
        pub filter: PayrollDatesBoolExp,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub limit: Option<i32>,
    }

    impl Variables {
        /// Dates of one payroll with the EFT date inside the optional bounds.
        pub fn for_payroll(payroll_id: Uuid, from: Option<Date>, to: Option<Date>) -> Self {
            use payroll_schema::BoolExp;

            let mut filters = vec![PayrollDatesBoolExp::for_payroll(payroll_id)];
            if from.is_some() || to.is_some() {
                filters.push(PayrollDatesBoolExp::eft_between(from, to));
            }
            Self {
                filter: PayrollDatesBoolExp::all(filters),
                limit: None,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub payroll_dates: Vec<PayrollDate>,
    }
}

pub mod get_upcoming_payroll_dates {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub from: Date,
        pub limit: i32,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub payroll_dates: Vec<UpcomingPayrollDate>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct UpcomingPayrollDate {
        #[serde(flatten)]
        pub date: PayrollDate,
        pub payroll: UpcomingPayroll,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct UpcomingPayroll {
        pub id: Uuid,
        pub name: String,
        pub client: ClientRef,
    }
}

pub mod generate_payroll_dates {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub args: GeneratePayrollDatesArgs,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub generate_payroll_dates: Vec<PayrollDate>,
    }
}

pub mod update_payroll_date {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub id: Uuid,
        pub set: PayrollDatesSetInput,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub update_payroll_dates_by_pk: Option<PayrollDate>,
    }
}
