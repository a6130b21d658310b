//! Hasura custom scalars, named the way the graphql-default naming convention
//! exposes them.

use chrono::{NaiveDate, Utc};

pub type Uuid = uuid::Uuid;

/// Postgres `date`, sent as `YYYY-MM-DD`.
pub type Date = NaiveDate;

/// Postgres `timestamptz`. Hasura emits RFC 3339 with an explicit offset.
pub type Timestamptz = chrono::DateTime<Utc>;

/// Postgres `numeric`. Hasura returns JSON numbers unless numeric stringification
/// is enabled; both forms deserialize.
pub type Numeric = rust_decimal::Decimal;

pub type Jsonb = serde_json::Value;
