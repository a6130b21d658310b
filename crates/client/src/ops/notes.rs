use payroll_schema::tables::{Note, NotesInsertInput, NotesSetInput};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserSummary;
use crate::operation::operation;

operation!(
    /// Notes attached to one entity, important ones first.
    GetNotes,
    Query,
    get_notes,
    concat!(
        include_str!("../../graphql/operations/notes/get_notes.graphql"),
        include_str!("../../graphql/fragments/note_fields.graphql"),
        include_str!("../../graphql/fragments/user_summary.graphql"),
    ),
);

operation!(
    AddNote,
    Mutation,
    add_note,
    concat!(
        include_str!("../../graphql/operations/notes/add_note.graphql"),
        include_str!("../../graphql/fragments/note_fields.graphql"),
    ),
);

operation!(
    UpdateNote,
    Mutation,
    update_note,
    concat!(
        include_str!("../../graphql/operations/notes/update_note.graphql"),
        include_str!("../../graphql/fragments/note_fields.graphql"),
    ),
);

pub mod get_notes {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub entity_type: String,
        pub entity_id: Uuid,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ResponseData {
        pub notes: Vec<NoteWithAuthor>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct NoteWithAuthor {
        #[serde(flatten)]
        pub note: Note,
        pub user: Option<UserSummary>,
    }
}

pub mod add_note {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub object: NotesInsertInput,
    }

    impl Variables {
        pub fn new(entity_type: &str, entity_id: Uuid, content: impl Into<String>) -> Self {
            Self {
                object: NotesInsertInput {
                    entity_type: Some(entity_type.to_string()),
                    entity_id: Some(entity_id),
                    content: Some(content.into()),
                    ..Default::default()
                },
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub insert_notes_one: Option<Note>,
    }
}

pub mod update_note {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub id: Uuid,
        pub set: NotesSetInput,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub update_notes_by_pk: Option<Note>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn add_note_leaves_server_defaults_out() {
        let vars = add_note::Variables::new("payroll", Uuid::nil(), "Client moved EFT to Thursday");
        assert_eq!(
            serde_json::to_value(&vars).unwrap(),
            json!({"object": {
                "entityType": "payroll",
                "entityId": "00000000-0000-0000-0000-000000000000",
                "content": "Client moved EFT to Thursday"
            }})
        );
    }
}
