//! One module per Hasura-tracked table.

pub mod audit;
pub mod billing;
pub mod clients;
pub mod holidays;
pub mod leave;
pub mod notes;
pub mod payroll_cycles;
pub mod payroll_dates;
pub mod payrolls;
pub mod permissions;
pub mod users;
pub mod work_schedule;

pub use audit::*;
pub use billing::*;
pub use clients::*;
pub use holidays::*;
pub use leave::*;
pub use notes::*;
pub use payroll_cycles::*;
pub use payroll_dates::*;
pub use payrolls::*;
pub use permissions::*;
pub use users::*;
pub use work_schedule::*;
