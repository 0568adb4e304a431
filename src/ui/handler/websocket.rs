//! WebSocket connection handlers.
//!
//! The handshake runs the full authentication pipeline before the upgrade is
//! accepted: a rejected connection never joins a room and never receives an
//! event. After admission each connection gets a receive loop for inbound
//! frames and a pusher loop draining its outbound channel.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::{
    domain::{ClientId, Sender, entity::ChatMessage, trigger},
    infrastructure::dto::websocket::{ClientProjectMessage, ServerProjectMessage},
    usecase::{ConnectError, Connection, HandshakeParams},
};

use super::super::state::AppState;

/// Query parameters for WebSocket connection
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    #[serde(rename = "projectId")]
    pub project_id: Option<String>,
    pub token: Option<String>,
}

/// Extract a bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StatusCode> {
    // Token comes from the `token` query parameter or the Authorization header
    let params = HandshakeParams {
        project_id: query.project_id,
        token: query.token.or_else(|| bearer_token(&headers)),
    };

    let client_id = ClientId::generate();

    // Create a channel for this client to receive messages
    let (tx, rx) = mpsc::unbounded_channel();

    // The connecting party waits for the handshake outcome; no message
    // traffic is accepted before admission
    match state
        .connect_participant_usecase
        .execute(client_id, params, tx)
        .await
    {
        Ok(connection) => {
            tracing::info!(
                "Client '{}' ({}) connected to room '{}'",
                connection.client_id.as_str(),
                connection.claims.email,
                connection.room_id.as_str()
            );
            Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, connection, rx)))
        }
        Err(e @ ConnectError::InvalidProjectId(_)) => {
            tracing::warn!("Rejecting connection: {}", e);
            Err(StatusCode::BAD_REQUEST)
        }
        Err(e @ ConnectError::ProjectNotFound(_)) => {
            tracing::warn!("Rejecting connection: {}", e);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e @ ConnectError::Authentication(_)) => {
            tracing::warn!("Rejecting connection: {}", e);
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

/// Spawns a task that receives messages from the rx channel and pushes them
/// to the WebSocket sender.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            // Send the message to this client
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    connection: Connection,
    rx: mpsc::UnboundedReceiver<String>,
) {
    let (sender, mut receiver) = socket.split();

    let mut send_task = pusher_loop(rx, sender);

    let conn = connection.clone();
    let state_clone = state.clone();

    // Receive loop for inbound frames from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_project_message(&state_clone, &conn, &text).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!(
                        "Client '{}' requested close",
                        conn.client_id.as_str()
                    );
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other. The in-flight
    // assistant invocations are spawned separately and are NOT aborted: the
    // result is still broadcast to the remaining room members.
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state
        .disconnect_participant_usecase
        .execute(&connection.room_id, &connection.client_id)
        .await;
    tracing::info!(
        "Client '{}' disconnected from room '{}'",
        connection.client_id.as_str(),
        connection.room_id.as_str()
    );
}

/// Handle one inbound `project-message` frame: relay it to the rest of the
/// room and, when the AI trigger is present, kick off exactly one assistant
/// invocation.
async fn handle_project_message(state: &Arc<AppState>, connection: &Connection, text: &str) {
    // Parse the incoming message; non-JSON frames are tolerated and treated
    // as the message body itself
    let message_text = match serde_json::from_str::<ClientProjectMessage>(text) {
        Ok(msg) => msg.message,
        Err(e) => {
            tracing::warn!("Failed to parse message as JSON: {}", e);
            text.to_string()
        }
    };

    // Relay to the other room members, tagged with the sender's identity.
    // This happens unconditionally, before any AI handling.
    let human_message = ChatMessage::new(
        Sender::new(
            connection.claims.id.clone(),
            connection.claims.email.clone(),
        ),
        message_text.clone(),
    );
    let relay_json =
        serde_json::to_string(&ServerProjectMessage::from(human_message)).unwrap();
    if let Err(e) = state
        .relay_message_usecase
        .execute(&connection.room_id, &connection.client_id, &relay_json)
        .await
    {
        tracing::warn!("Failed to relay message: {}", e);
    }

    // At most one generation invocation per inbound message
    if let Some(prompt) = trigger::detect(&message_text) {
        let state = state.clone();
        let room_id = connection.room_id.clone();
        tokio::spawn(async move {
            let result = state.invoke_assistant_usecase.execute(&prompt).await;
            let ai_message = ChatMessage::from_generation(&result);
            let ai_json =
                serde_json::to_string(&ServerProjectMessage::from(ai_message)).unwrap();
            if let Err(e) = state
                .invoke_assistant_usecase
                .broadcast_to_room(&room_id, &ai_json)
                .await
            {
                tracing::warn!("Failed to broadcast AI response: {}", e);
            }
        });
    }
}
