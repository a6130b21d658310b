use graphql_client::{GraphQLQuery, Response};
use reqwest::header::HeaderMap;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, GraphQLErrors};
use crate::operation::Operation;

/// HTTP client for queries and mutations. Clones share one connection pool.
#[derive(Clone, Debug)]
pub struct HasuraClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HasuraClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn endpoint(&self) -> &Url {
        &self.config.endpoint
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Runs `O` and returns its data. Any `errors` entry fails the call,
    /// even when partial data came back.
    pub async fn execute<O: Operation>(
        &self,
        variables: O::Variables,
    ) -> Result<O::ResponseData, ClientError> {
        let response = self.execute_raw::<O>(variables).await?;

        if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
            let errors = GraphQLErrors(errors);
            let code = errors.code().map(|c| c.to_string()).unwrap_or_default();
            tracing::warn!(
                operation = O::NAME,
                code = %code,
                "GraphQL errors: {errors}"
            );
            return Err(ClientError::GraphQL(errors));
        }

        response.data.ok_or(ClientError::MissingData)
    }

    /// Runs `O` and hands back the whole response, errors and partial data included.
    pub async fn execute_raw<O: Operation>(
        &self,
        variables: O::Variables,
    ) -> Result<Response<O::ResponseData>, ClientError> {
        tracing::debug!(operation = O::NAME, kind = %O::KIND, "Executing operation");

        let body = O::build_query(variables);
        let headers = self.headers()?;

        let response = self
            .http
            .post(self.config.endpoint.clone())
            .headers(headers)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(operation = O::NAME, "Request to Hasura failed: {e}");
                ClientError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(operation = O::NAME, status = status.as_u16(), "Hasura returned {status}");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn headers(&self) -> Result<HeaderMap, ClientError> {
        self.config
            .credentials
            .header_map(self.config.role.as_deref())
    }
}
