//! Shared harness for integration tests: a real server on a loopback
//! port with an isolated in-memory database per test.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::broadcast;

use contact_book::config::AppConfig;
use contact_book::contacts::{ContactService, ContactStore};
use contact_book::http::HttpServer;

pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    // Kept alive so the server's shutdown receiver stays open.
    _shutdown: broadcast::Sender<()>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

pub async fn spawn_app() -> TestApp {
    let mut config = AppConfig::default();
    config.server.bind_address = "127.0.0.1:0".to_string();
    config.database.url = "sqlite::memory:".to_string();
    config.database.max_connections = 1;

    let store = ContactStore::connect(&config.database)
        .await
        .expect("store connects");
    let service = ContactService::new(store);

    let listener = TcpListener::bind(&config.server.bind_address)
        .await
        .expect("listener binds");
    let addr = listener.local_addr().expect("local addr");

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    let server = HttpServer::new(config, service);
    tokio::spawn(async move {
        let _ = server.run(listener, shutdown_rx).await;
    });

    let client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client builds");

    TestApp {
        addr,
        client,
        _shutdown: shutdown_tx,
    }
}

/// Minimal create payload.
pub fn contact(name: &str, phone: &str) -> serde_json::Value {
    serde_json::json!({ "name": name, "phone": phone })
}

/// POST a contact and return the envelope, asserting success.
pub async fn create_contact(app: &TestApp, body: &serde_json::Value) -> serde_json::Value {
    let res = app
        .client
        .post(app.url("/api/contacts"))
        .json(body)
        .send()
        .await
        .expect("request sends");
    assert_eq!(res.status(), 201, "create should succeed");
    let envelope: serde_json::Value = res.json().await.expect("json body");
    assert_eq!(envelope["success"], true);
    envelope
}
