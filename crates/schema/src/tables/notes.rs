use serde::{Deserialize, Serialize};

use crate::expressions::{
    BooleanComparisonExp, OrderBy, StringComparisonExp, TimestamptzComparisonExp,
    UuidComparisonExp,
};
use crate::scalars::{Timestamptz, Uuid};

/// A `notes` row as selected by the `NoteFields` fragment. Notes attach to any
/// entity through `(entity_type, entity_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub entity_type: String,
    pub entity_id: Uuid,
    pub user_id: Option<Uuid>,
    pub content: String,
    pub is_important: bool,
    pub created_at: Timestamptz,
    pub updated_at: Option<Timestamptz>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesBoolExp {
    #[serde(rename = "_and", skip_serializing_if = "Option::is_none")]
    pub and: Option<Vec<NotesBoolExp>>,
    #[serde(rename = "_or", skip_serializing_if = "Option::is_none")]
    pub or: Option<Vec<NotesBoolExp>>,
    #[serde(rename = "_not", skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<NotesBoolExp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<StringComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UuidComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_important: Option<BooleanComparisonExp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<TimestamptzComparisonExp>,
}

crate::impl_bool_exp!(NotesBoolExp);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesOrderBy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_important: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<OrderBy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesInsertInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_important: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesSetInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_important: Option<bool>,
}
