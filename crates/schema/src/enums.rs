//! Postgres enum types. Hasura exposes these as scalars whose values are the raw
//! Postgres labels, so each variant maps to exactly one label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Returned when a label does not belong to the enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel {
    pub type_name: &'static str,
    pub label: String,
}

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} value: {}", self.type_name, self.label)
    }
}

impl std::error::Error for UnknownLabel {}

macro_rules! pg_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $pg:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err(UnknownLabel {
                        type_name: $pg,
                        label: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pg_enum! {
    /// `user_role`. Ordered from most to least privileged.
    UserRole as "user_role" {
        Developer => "developer",
        OrgAdmin => "org_admin",
        Manager => "manager",
        Consultant => "consultant",
        Viewer => "viewer",
    }
}

impl UserRole {
    /// Roles that carry payroll assignments.
    pub fn is_payroll_staff(&self) -> bool {
        matches!(self, UserRole::Manager | UserRole::Consultant)
    }
}

pg_enum! {
    PayrollStatus as "payroll_status" {
        Implementation => "Implementation",
        Active => "Active",
        Inactive => "Inactive",
    }
}

pg_enum! {
    PayrollCycleType as "payroll_cycle_type" {
        Weekly => "weekly",
        Fortnightly => "fortnightly",
        BiMonthly => "bi_monthly",
        Monthly => "monthly",
        Quarterly => "quarterly",
    }
}

pg_enum! {
    /// `payroll_date_type`: how the EFT date is anchored within a cycle.
    PayrollDateTypeName as "payroll_date_type" {
        EndOfMonth => "eom",
        StartOfMonth => "som",
        FixedDate => "fixed_date",
        WeekA => "week_a",
        WeekB => "week_b",
        DayOfWeek => "dow",
    }
}

pg_enum! {
    LeaveStatus as "leave_status_enum" {
        Pending => "Pending",
        Approved => "Approved",
        Rejected => "Rejected",
    }
}

pg_enum! {
    InvoiceStatus as "invoice_status" {
        Draft => "draft",
        Sent => "sent",
        Paid => "paid",
        Void => "void",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for role in UserRole::ALL {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), *role);
        }
        for status in PayrollStatus::ALL {
            assert_eq!(status.to_string().parse::<PayrollStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "superuser".parse::<UserRole>().unwrap_err();
        assert_eq!(err.type_name, "user_role");
        assert_eq!(err.to_string(), "unknown user_role value: superuser");
    }

    #[test]
    fn serializes_as_postgres_label() {
        assert_eq!(serde_json::to_value(UserRole::OrgAdmin).unwrap(), "org_admin");
        assert_eq!(serde_json::to_value(PayrollStatus::Active).unwrap(), "Active");
        let parsed: PayrollDateTypeName = serde_json::from_value("eom".into()).unwrap();
        assert_eq!(parsed, PayrollDateTypeName::EndOfMonth);
    }

    #[test]
    fn payroll_staff_roles() {
        assert!(UserRole::Consultant.is_payroll_staff());
        assert!(UserRole::Manager.is_payroll_staff());
        assert!(!UserRole::Viewer.is_payroll_staff());
    }
}
