use payroll_schema::tables::{User, UsersBoolExp, UsersOrderBy, UsersSetInput};
use payroll_schema::{Aggregate, CountAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserSummary;
use crate::operation::{operation, NoVariables};
use crate::pagination::{Page, PageRequest};

operation!(
    /// Filtered page of users with the matching total.
    GetUsers,
    Query,
    get_users,
    concat!(
        include_str!("../../graphql/operations/users/get_users.graphql"),
        include_str!("../../graphql/fragments/user_fields.graphql"),
    ),
);

operation!(
    /// One user with their manager.
    GetUserById,
    Query,
    get_user_by_id,
    concat!(
        include_str!("../../graphql/operations/users/get_user_by_id.graphql"),
        include_str!("../../graphql/fragments/user_fields.graphql"),
        include_str!("../../graphql/fragments/user_summary.graphql"),
    ),
);

operation!(
    /// Active consultants and managers, by name.
    GetConsultants,
    Query,
    get_consultants,
    concat!(
        include_str!("../../graphql/operations/users/get_consultants.graphql"),
        include_str!("../../graphql/fragments/user_summary.graphql"),
    ),
);

operation!(
    UpdateUser,
    Mutation,
    update_user,
    concat!(
        include_str!("../../graphql/operations/users/update_user.graphql"),
        include_str!("../../graphql/fragments/user_fields.graphql"),
    ),
);

pub mod get_users {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
        pub filter: Option<UsersBoolExp>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub order_by: Option<Vec<UsersOrderBy>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub limit: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub offset: Option<i32>,
    }

    impl Variables {
        pub fn page(filter: UsersBoolExp, order_by: Vec<UsersOrderBy>, page: PageRequest) -> Self {
            Self {
                filter: Some(filter),
                order_by: (!order_by.is_empty()).then_some(order_by),
                limit: Some(page.limit),
                offset: Some(page.offset),
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub users: Vec<User>,
        pub users_aggregate: Aggregate<CountAggregate>,
    }

    impl ResponseData {
        pub fn into_page(self, offset: i32) -> Page<User> {
            Page::new(self.users, &self.users_aggregate, offset)
        }
    }
}

pub mod get_user_by_id {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub id: Uuid,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub users_by_pk: Option<UserWithManager>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct UserWithManager {
        #[serde(flatten)]
        pub user: User,
        pub manager: Option<UserSummary>,
    }
}

pub mod get_consultants {
    use super::*;

    pub type Variables = NoVariables;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ResponseData {
        pub users: Vec<UserSummary>,
    }
}

pub mod update_user {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Variables {
        pub id: Uuid,
        pub set: UsersSetInput,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ResponseData {
        pub update_users_by_pk: Option<User>,
    }
}
