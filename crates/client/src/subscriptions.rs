use std::marker::PhantomData;

use async_tungstenite::tungstenite::client::IntoClientRequest;
use async_tungstenite::tungstenite::http::header::SEC_WEBSOCKET_PROTOCOL;
use async_tungstenite::tungstenite::http::HeaderValue;
use futures_util::{Stream, StreamExt};
use graphql_client::{GraphQLQuery, QueryBody, Response};
use serde::{Serialize, Serializer};

use crate::config::ClientConfig;
use crate::error::{ClientError, GraphQLErrors};
use crate::operation::Operation;

const SUBPROTOCOL: &str = "graphql-transport-ws";

/// Opens graphql-transport-ws subscriptions against Hasura.
#[derive(Clone, Debug)]
pub struct SubscriptionClient {
    config: ClientConfig,
}

impl SubscriptionClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    /// Opens one connection for `O` and yields every `next` payload, decoded.
    ///
    /// The stream drives the connection. Dropping it completes the
    /// subscription and closes the socket.
    pub async fn subscribe<O>(
        &self,
        variables: O::Variables,
    ) -> Result<impl Stream<Item = Result<O::ResponseData, ClientError>>, ClientError>
    where
        O: Operation + 'static,
        O::Variables: Send + Unpin + 'static,
        O::ResponseData: Send + 'static,
    {
        let mut request = self.config.ws_endpoint.as_str().into_client_request()?;
        request
            .headers_mut()
            .insert(SEC_WEBSOCKET_PROTOCOL, HeaderValue::from_static(SUBPROTOCOL));

        let init = self
            .config
            .credentials
            .init_payload(self.config.role.as_deref())?;

        let (connection, _) = async_tungstenite::tokio::connect_async(request)
            .await
            .map_err(|e| {
                tracing::error!(endpoint = %self.config.ws_endpoint, "WebSocket connect failed: {e}");
                ClientError::from(e)
            })?;
        tracing::info!(
            operation = O::NAME,
            endpoint = %self.config.ws_endpoint,
            "Subscription connection opened"
        );

        let subscription = graphql_ws_client::Client::build(connection)
            .payload(init)?
            .subscribe(SubscriptionRequest::<O>::new(variables))
            .await?;

        Ok(subscription.map(|item| {
            tracing::debug!(operation = O::NAME, "Subscription event");
            item.map_err(ClientError::from).and_then(into_data)
        }))
    }
}

fn into_data<T>(response: Response<T>) -> Result<T, ClientError> {
    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        return Err(ClientError::GraphQL(GraphQLErrors(errors)));
    }
    response.data.ok_or(ClientError::MissingData)
}

/// The `subscribe` payload for `O`: `{query, variables, operationName}`.
struct SubscriptionRequest<O: Operation> {
    body: QueryBody<O::Variables>,
    _operation: PhantomData<fn() -> O>,
}

impl<O: Operation> SubscriptionRequest<O> {
    fn new(variables: O::Variables) -> Self {
        Self {
            body: O::build_query(variables),
            _operation: PhantomData,
        }
    }
}

impl<O: Operation> Serialize for SubscriptionRequest<O> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.body.serialize(serializer)
    }
}

impl<O: Operation> graphql_ws_client::graphql::GraphqlOperation for SubscriptionRequest<O> {
    type Response = Response<O::ResponseData>;
    type Error = serde_json::Error;

    fn decode(&self, data: serde_json::Value) -> Result<Self::Response, Self::Error> {
        serde_json::from_value(data)
    }
}
