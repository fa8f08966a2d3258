#![allow(dead_code)]

use std::sync::Arc;

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_client::ApiClient;
use folio_core::project::{ProjectCategory, ProjectInput, ProjectStatus};
use folio_db::store::MemoryStore;

fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        app_env: "test".to_string(),
        db_connect_timeout_secs: 5,
        db_max_connections: 10,
    }
}

/// Serve the real router over an in-memory store on an ephemeral port.
pub async fn spawn_server() -> (Arc<MemoryStore>, ApiClient) {
    let store = Arc::new(MemoryStore::new());
    let config = test_config();
    let state = AppState::new(config.clone(), Arc::clone(&store));
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (store, ApiClient::new(format!("http://{addr}")))
}

/// A client pointed at a port nothing listens on.
pub async fn unreachable_client() -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    ApiClient::new(format!("http://{addr}"))
}

pub fn project_input(title: &str, category: ProjectCategory, status: ProjectStatus) -> ProjectInput {
    ProjectInput {
        title: title.to_string(),
        description: "Short summary".to_string(),
        full_description: "A longer description of the project".to_string(),
        technologies: vec!["Rust".to_string(), "axum".to_string()],
        github: "https://github.com/someone/repo".to_string(),
        demo: None,
        category,
        status,
        year: 2024,
        icon: "mdi-web".to_string(),
        featured: false,
    }
}
