//! Shapes shared by Hasura's insert/update/delete root fields.

use serde::{Deserialize, Serialize};

use crate::scalars::Uuid;

/// `<Table>MutationResponse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse<T> {
    pub affected_rows: i64,
    pub returning: Vec<T>,
}

/// `<Table>OnConflict`: turns an insert into an upsert on `constraint`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnConflict<C, U, B> {
    pub constraint: C,
    pub update_columns: Vec<U>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    pub filter: Option<B>,
}

impl<C, U, B> OnConflict<C, U, B> {
    pub fn update(constraint: C, update_columns: impl IntoIterator<Item = U>) -> Self {
        Self {
            constraint,
            update_columns: update_columns.into_iter().collect(),
            filter: None,
        }
    }

    /// Conflicting rows are left untouched.
    pub fn ignore(constraint: C) -> Self {
        Self {
            constraint,
            update_columns: Vec::new(),
            filter: None,
        }
    }
}

/// `<Table>PkColumnsInput`. Every table in this schema is keyed by a uuid `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkColumnsInput {
    pub id: Uuid,
}

impl From<Uuid> for PkColumnsInput {
    fn from(id: Uuid) -> Self {
        Self { id }
    }
}

/// `<Table>ArrRelInsertInput`: nested rows inserted with their parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrRelInsertInput<I, O> {
    pub data: Vec<I>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_conflict: Option<O>,
}

impl<I, O> ArrRelInsertInput<I, O> {
    pub fn new(data: Vec<I>) -> Self {
        Self {
            data,
            on_conflict: None,
        }
    }
}
