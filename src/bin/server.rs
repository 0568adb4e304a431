//! Real-time project channel server.
//!
//! Authenticates WebSocket connections against a project and a JWT, relays
//! chat among the project's room and answers `@ai` requests through an
//! external generation backend.
//!
//! Run with:
//! ```not_rust
//! JWT_SECRET=... GOOGLE_API_KEY=... cargo run --bin server
//! JWT_SECRET=... GOOGLE_API_KEY=... cargo run --bin server -- --host 0.0.0.0 --port 3000
//! ```

use std::{collections::HashMap, sync::Arc};

use clap::Parser;
use kobo::{
    common::{config::ServerConfig, logger::setup_logger},
    domain::{Project, ProjectIdFactory},
    infrastructure::{
        auth::JwtTokenVerifier,
        generation::HttpGenerationClient,
        message_pusher::WebSocketMessagePusher,
        repository::{InMemoryProjectStore, InMemoryRoomRegistry},
    },
    ui::Server,
    usecase::{
        ConnectParticipantUseCase, DisconnectParticipantUseCase, InvokeAssistantUseCase,
        RelayMessageUseCase,
    },
};
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Real-time project channel server with AI assistant", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize dependencies in order:
    // 1. Registry, MessagePusher, ProjectStore
    // 2. TokenVerifier, GenerationService
    // 3. UseCases
    // 4. Server

    // 1. Membership bookkeeping and outbound channels
    let registry = Arc::new(InMemoryRoomRegistry::new());
    let message_pusher = Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
        HashMap::new(),
    ))));

    let project_store = Arc::new(InMemoryProjectStore::new());
    // Seed a demo project so the channel is usable without the platform's
    // CRUD surface
    let demo_id = match ProjectIdFactory::generate() {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to generate project id: {}", e);
            std::process::exit(1);
        }
    };
    project_store
        .insert(Project::new(demo_id.clone(), "demo".to_string(), vec![]))
        .await;
    tracing::info!("Seeded demo project '{}'", demo_id.as_str());

    // 2. External collaborators
    let token_verifier = Arc::new(JwtTokenVerifier::new(&config.jwt_secret));
    let generation_service = Arc::new(HttpGenerationClient::new(config.generation.clone()));

    // 3. UseCases
    let connect_participant_usecase = Arc::new(ConnectParticipantUseCase::new(
        registry.clone(),
        message_pusher.clone(),
        project_store.clone(),
        token_verifier.clone(),
    ));
    let disconnect_participant_usecase = Arc::new(DisconnectParticipantUseCase::new(
        registry.clone(),
        message_pusher.clone(),
    ));
    let relay_message_usecase = Arc::new(RelayMessageUseCase::new(
        registry.clone(),
        message_pusher.clone(),
    ));
    let invoke_assistant_usecase = Arc::new(InvokeAssistantUseCase::new(
        generation_service,
        registry.clone(),
        message_pusher.clone(),
    ));

    // 4. Create and run the server
    let server = Server::new(
        connect_participant_usecase,
        disconnect_participant_usecase,
        relay_message_usecase,
        invoke_assistant_usecase,
        registry,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
