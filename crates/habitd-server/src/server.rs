use std::sync::Arc;

use axum::extract::ws::{WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::Router;
use chrono::NaiveTime;
use tower_http::cors::CorsLayer;

use habitd_store::HabitStore;

use crate::client::{self, ClientRegistry};
use crate::handlers;
use crate::scheduler;

/// Server configuration.
pub struct ServerConfig {
    pub port: u16,
    pub max_send_queue: usize,
    /// Local wall-clock time of the daily reminder broadcast.
    pub reminder_time: NaiveTime,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            max_send_queue: 256,
            reminder_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
        }
    }
}

/// Shared application state passed to Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: HabitStore,
    pub registry: Arc<ClientRegistry>,
}

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/habits", post(handlers::create_habit).get(handlers::list_habits))
        .route("/habits/report", get(handlers::report))
        .route("/habits/{id}", put(handlers::complete_habit))
        .route("/ws", get(ws_handler))
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Create and start the server plus its background tasks.
pub async fn start(config: ServerConfig, store: HabitStore) -> Result<ServerHandle, std::io::Error> {
    let registry = Arc::new(ClientRegistry::new(config.max_send_queue));

    // Dead-subscriber cleanup (every 60s)
    let cleanup = client::start_cleanup_task(
        Arc::clone(&registry),
        std::time::Duration::from_secs(60),
    );

    // Daily reminder trigger
    let sched = scheduler::start(store.clone(), Arc::clone(&registry), config.reminder_time);

    let state = AppState {
        store,
        registry: Arc::clone(&registry),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(port = local_addr.port(), "habitd server started");

    let server = tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    Ok(ServerHandle {
        port: local_addr.port(),
        registry,
        _server: server,
        _scheduler: sched,
        _cleanup: cleanup,
    })
}

/// Handle returned by `start()` — keeps background tasks alive.
pub struct ServerHandle {
    pub port: u16,
    pub registry: Arc<ClientRegistry>,
    _server: tokio::task::JoinHandle<()>,
    _scheduler: tokio::task::JoinHandle<()>,
    _cleanup: tokio::task::JoinHandle<()>,
}

/// WebSocket upgrade handler for reminder subscriptions.
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (client_id, rx) = state.registry.register();
    tracing::info!(client_id = %client_id, "reminder subscriber connected");

    client::handle_ws_connection(socket, client_id, rx, state.registry).await;
}
