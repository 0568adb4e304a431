//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::domain::RoomRegistry;
use crate::usecase::{
    ConnectParticipantUseCase, DisconnectParticipantUseCase, InvokeAssistantUseCase,
    RelayMessageUseCase,
};

use super::{
    handler::{
        http::{get_rooms, health_check},
        websocket::websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Project channel server
///
/// Encapsulates the wired usecases and runs the Axum application.
pub struct Server {
    connect_participant_usecase: Arc<ConnectParticipantUseCase>,
    disconnect_participant_usecase: Arc<DisconnectParticipantUseCase>,
    relay_message_usecase: Arc<RelayMessageUseCase>,
    invoke_assistant_usecase: Arc<InvokeAssistantUseCase>,
    registry: Arc<dyn RoomRegistry>,
}

impl Server {
    pub fn new(
        connect_participant_usecase: Arc<ConnectParticipantUseCase>,
        disconnect_participant_usecase: Arc<DisconnectParticipantUseCase>,
        relay_message_usecase: Arc<RelayMessageUseCase>,
        invoke_assistant_usecase: Arc<InvokeAssistantUseCase>,
        registry: Arc<dyn RoomRegistry>,
    ) -> Self {
        Self {
            connect_participant_usecase,
            disconnect_participant_usecase,
            relay_message_usecase,
            invoke_assistant_usecase,
            registry,
        }
    }

    /// Run the project channel server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address
    /// or if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app_state = Arc::new(AppState {
            connect_participant_usecase: self.connect_participant_usecase,
            disconnect_participant_usecase: self.disconnect_participant_usecase,
            relay_message_usecase: self.relay_message_usecase,
            invoke_assistant_usecase: self.invoke_assistant_usecase,
            registry: self.registry,
        });

        // Define handlers
        let app = Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/rooms", get(get_rooms))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state);

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!(
            "Project channel server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/ws?projectId=<id>&token=<jwt>", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
