use std::sync::{Arc, Mutex};

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use payroll_client::ClientConfig;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use url::Url;

/// A request received by the mock over HTTP.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub headers: HeaderMap,
    pub body: Value,
}

/// What the mock answers with.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: Value,
    /// `next` payloads sent to every websocket subscription, then `complete`.
    pub events: Vec<Value>,
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
            events: Vec::new(),
        }
    }

    #[allow(dead_code)]
    pub fn status(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body,
            events: Vec::new(),
        }
    }

    #[allow(dead_code)]
    pub fn events(events: Vec<Value>) -> Self {
        Self {
            status: StatusCode::OK,
            body: json!({}),
            events,
        }
    }
}

#[derive(Clone)]
struct MockState {
    reply: Arc<Reply>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    init_payloads: Arc<Mutex<Vec<Value>>>,
    subscriptions: Arc<Mutex<Vec<Value>>>,
}

/// Plays Hasura at `/v1/graphql` on a random local port.
pub struct MockHasura {
    pub endpoint: Url,
    state: MockState,
}

#[allow(dead_code)]
impl MockHasura {
    pub async fn start(reply: Reply) -> Self {
        let state = MockState {
            reply: Arc::new(reply),
            requests: Arc::default(),
            init_payloads: Arc::default(),
            subscriptions: Arc::default(),
        };

        let app = Router::new()
            .route("/v1/graphql", get(subscriptions).post(graphql))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let endpoint = format!("http://{}/v1/graphql", listener.local_addr().unwrap())
            .parse()
            .unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await });

        Self { endpoint, state }
    }

    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(self.endpoint.clone()).unwrap()
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn init_payloads(&self) -> Vec<Value> {
        self.state.init_payloads.lock().unwrap().clone()
    }

    pub fn subscriptions(&self) -> Vec<Value> {
        self.state.subscriptions.lock().unwrap().clone()
    }
}

async fn graphql(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state
        .requests
        .lock()
        .unwrap()
        .push(CapturedRequest { headers, body });
    (state.reply.status, Json(state.reply.body.clone()))
}

async fn subscriptions(ws: WebSocketUpgrade, State(state): State<MockState>) -> Response {
    ws.protocols(["graphql-transport-ws"])
        .on_upgrade(move |socket| serve_socket(socket, state))
}

async fn serve_socket(mut socket: WebSocket, state: MockState) {
    while let Some(Ok(message)) = socket.recv().await {
        let Message::Text(text) = message else {
            continue;
        };
        let message: Value = serde_json::from_str(text.as_str()).unwrap();

        match message["type"].as_str() {
            Some("connection_init") => {
                state
                    .init_payloads
                    .lock()
                    .unwrap()
                    .push(message["payload"].clone());
                send(&mut socket, json!({"type": "connection_ack"})).await;
            }
            Some("subscribe") => {
                let id = message["id"].clone();
                state
                    .subscriptions
                    .lock()
                    .unwrap()
                    .push(message["payload"].clone());
                for payload in &state.reply.events {
                    send(&mut socket, json!({"id": id, "type": "next", "payload": payload})).await;
                }
                send(&mut socket, json!({"id": id, "type": "complete"})).await;
            }
            Some("ping") => send(&mut socket, json!({"type": "pong"})).await,
            _ => {}
        }
    }
}

async fn send(socket: &mut WebSocket, message: Value) {
    socket
        .send(Message::Text(message.to_string().into()))
        .await
        .unwrap();
}
