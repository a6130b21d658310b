use std::fmt;

use graphql_client::GraphQLQuery;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// Keyword that opens the operation in a document.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named GraphQL document bound to its variable and response types.
///
/// `DOCUMENT` holds exactly one operation called `NAME` followed by every
/// fragment that operation spreads.
pub trait Operation: GraphQLQuery {
    const NAME: &'static str;
    const KIND: OperationKind;
    const DOCUMENT: &'static str;
}

/// Variables of operations that declare none. Serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NoVariables {}

/// Declares the unit struct for an operation and binds it to the
/// `Variables` and `ResponseData` of the module named alongside it.
macro_rules! operation {
    ($(#[$meta:meta])* $name:ident, $kind:ident, $module:ident, $document:expr $(,)?) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl graphql_client::GraphQLQuery for $name {
            type Variables = $module::Variables;
            type ResponseData = $module::ResponseData;

            fn build_query(variables: Self::Variables) -> graphql_client::QueryBody<Self::Variables> {
                graphql_client::QueryBody {
                    variables,
                    query: <$name as $crate::operation::Operation>::DOCUMENT,
                    operation_name: <$name as $crate::operation::Operation>::NAME,
                }
            }
        }

        impl $crate::operation::Operation for $name {
            const NAME: &'static str = stringify!($name);
            const KIND: $crate::operation::OperationKind = $crate::operation::OperationKind::$kind;
            const DOCUMENT: &'static str = $document;
        }
    };
}

pub(crate) use operation;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::users::{get_users, GetUsers};

    #[test]
    fn build_query_carries_name_and_document() {
        let body = GetUsers::build_query(get_users::Variables::default());
        assert_eq!(body.operation_name, "GetUsers");
        assert_eq!(body.query, GetUsers::DOCUMENT);
        assert!(body.query.starts_with("query GetUsers("));
    }

    #[test]
    fn empty_variables_serialize_as_object() {
        assert_eq!(serde_json::to_value(NoVariables {}).unwrap(), serde_json::json!({}));
        assert_eq!(OperationKind::Subscription.to_string(), "subscription");
    }
}
