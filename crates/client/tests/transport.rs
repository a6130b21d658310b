mod common;

use axum::http::StatusCode;
use common::{MockHasura, Reply};
use payroll_client::auth::{JwtService, ADMIN_SECRET_HEADER, ROLE_HEADER};
use payroll_client::ops::users::{
    get_consultants, get_users, update_user, GetConsultants, GetUsers, UpdateUser,
};
use payroll_client::schema::tables::UsersSetInput;
use payroll_client::schema::UserRole;
use payroll_client::{
    ClientError, Credentials, HasuraClient, HasuraErrorCode, NoVariables, Operation, PageRequest,
    ServiceTokenConfig,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;

fn consultants() -> serde_json::Value {
    json!({
        "data": {
            "users": [{
                "id": "6f1c2b1e-7a0d-4c57-9d7a-3b0f1e2d4c5b",
                "name": "Ava Stone",
                "email": "ava@example.com",
                "role": "consultant"
            }]
        }
    })
}

#[tokio::test]
async fn sends_document_name_and_variables() {
    let mock = MockHasura::start(Reply::ok(json!({
        "data": {"users": [], "usersAggregate": {"aggregate": {"count": 0}}}
    })))
    .await;
    let client = HasuraClient::new(mock.config()).unwrap();

    let data = tokio_test::assert_ok!(
        client
            .execute::<GetUsers>(get_users::Variables::page(
                Default::default(),
                Vec::new(),
                PageRequest::new(10, 20),
            ))
            .await
    );
    let page = data.into_page(20);
    assert_eq!(page.total_count, 0);
    assert!(!page.has_next_page);

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let body = &requests[0].body;
    assert_eq!(body["operationName"], "GetUsers");
    assert_eq!(body["query"], GetUsers::DOCUMENT);
    assert_eq!(body["variables"], json!({"where": {}, "limit": 10, "offset": 20}));
    assert_eq!(
        requests[0].headers.get("content-type").unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn admin_secret_and_role_headers() {
    let mock = MockHasura::start(Reply::ok(consultants())).await;
    let config = mock
        .config()
        .with_credentials(Credentials::AdminSecret("s3cret".into()))
        .with_role("manager");
    let client = HasuraClient::new(config).unwrap();

    let data: get_consultants::ResponseData = client.execute::<GetConsultants>(NoVariables {}).await.unwrap();
    assert_eq!(data.users[0].role, UserRole::Consultant);

    let request = &mock.requests()[0];
    assert_eq!(request.headers.get(ADMIN_SECRET_HEADER).unwrap(), "s3cret");
    assert_eq!(request.headers.get(ROLE_HEADER).unwrap(), "manager");
    assert!(request.headers.get("authorization").is_none());
    assert_eq!(request.body["variables"], json!({}));
}

#[tokio::test]
async fn service_token_is_minted_per_request() {
    let mock = MockHasura::start(Reply::ok(consultants())).await;
    let jwt = JwtService::new(&ServiceTokenConfig {
        secret: "0123456789abcdef0123456789abcdef".into(),
        user_id: None,
        default_role: "consultant".into(),
        allowed_roles: vec!["consultant".into(), "manager".into()],
        expiration_minutes: 15,
    });
    let user_id = Uuid::new_v4();
    let config = mock
        .config()
        .with_credentials(Credentials::ServiceToken {
            jwt: jwt.clone(),
            user_id,
        })
        .with_role("manager");
    let client = HasuraClient::new(config).unwrap();

    client.execute::<GetConsultants>(NoVariables {}).await.unwrap();

    let request = &mock.requests()[0];
    let header = request.headers.get("authorization").unwrap().to_str().unwrap();
    let token = header.strip_prefix("Bearer ").unwrap();
    let claims = jwt.verify_token(token).unwrap();
    assert_eq!(claims.hasura.user_id, user_id.to_string());
    assert_eq!(claims.hasura.default_role, "manager");
    assert_eq!(request.headers.get(ROLE_HEADER).unwrap(), "manager");
}

#[tokio::test]
async fn graphql_errors_fail_the_call() {
    let mock = MockHasura::start(Reply::ok(json!({
        "data": null,
        "errors": [{
            "message": "Uniqueness violation. duplicate key value violates unique constraint \"users_email_key\"",
            "extensions": {"path": "$.selectionSet.updateUsersByPk", "code": "constraint-violation"}
        }]
    })))
    .await;
    let client = HasuraClient::new(mock.config()).unwrap();

    let err = client
        .execute::<UpdateUser>(update_user::Variables {
            id: Uuid::new_v4(),
            set: UsersSetInput {
                email: Some("taken@example.com".into()),
                ..Default::default()
            },
        })
        .await
        .unwrap_err();

    assert_eq!(err.hasura_code(), Some(HasuraErrorCode::ConstraintViolation));
    let ClientError::GraphQL(errors) = err else {
        panic!("expected graphql error");
    };
    assert!(errors.is_constraint_violation("users_email_key"));

    let body = &mock.requests()[0].body;
    assert_eq!(body["variables"]["set"], json!({"email": "taken@example.com"}));
}

#[tokio::test]
async fn partial_data_is_kept_by_execute_raw() {
    let mut reply = consultants();
    reply["errors"] = json!([{"message": "field 'salary' not found in type: 'users'"}]);
    let mock = MockHasura::start(Reply::ok(reply)).await;
    let client = HasuraClient::new(mock.config()).unwrap();

    let response = client.execute_raw::<GetConsultants>(NoVariables {}).await.unwrap();
    assert_eq!(response.data.unwrap().users.len(), 1);
    assert_eq!(response.errors.unwrap().len(), 1);

    assert!(matches!(
        client.execute::<GetConsultants>(NoVariables {}).await,
        Err(ClientError::GraphQL(_))
    ));
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let mock = MockHasura::start(Reply::status(
        StatusCode::BAD_GATEWAY,
        json!({"error": "upstream unavailable"}),
    ))
    .await;
    let client = HasuraClient::new(mock.config()).unwrap();

    let err = client.execute::<GetConsultants>(NoVariables {}).await.unwrap_err();
    let ClientError::Status { status, body } = err else {
        panic!("expected status error");
    };
    assert_eq!(status, 502);
    assert!(body.contains("upstream unavailable"));
}

#[tokio::test]
async fn empty_response_is_missing_data() {
    let mock = MockHasura::start(Reply::ok(json!({}))).await;
    let client = HasuraClient::new(mock.config()).unwrap();

    let err = client.execute::<GetConsultants>(NoVariables {}).await.unwrap_err();
    assert!(matches!(err, ClientError::MissingData));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let config = payroll_client::ClientConfig::new("http://127.0.0.1:9/v1/graphql".parse().unwrap()).unwrap();
    let client = HasuraClient::new(config).unwrap();

    let err = client.execute::<GetConsultants>(NoVariables {}).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
