//! Room registry and message pusher traits.
//!
//! ドメイン層が必要とするインターフェースをドメイン層自身が定義し、
//! Infrastructure 層が具体的な実装を提供します（依存性の逆転）。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::error::MessagePushError;
use super::value_object::{ClientId, RoomId};

/// Channel used to push serialized messages to one connection.
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Membership bookkeeping: which connections belong to which room.
///
/// Rooms are created lazily on the first `join` and discarded once empty;
/// membership is a relation, the registry never owns a connection.
#[async_trait]
pub trait RoomRegistry: Send + Sync {
    /// Add a connection to a room. Idempotent.
    async fn join(&self, room_id: RoomId, client_id: ClientId);

    /// Remove a connection from a room. Idempotent.
    async fn leave(&self, room_id: &RoomId, client_id: &ClientId);

    /// Current members of a room, in unspecified order.
    async fn members(&self, room_id: &RoomId) -> Vec<ClientId>;

    /// All live rooms with their member counts.
    async fn rooms(&self) -> Vec<(RoomId, usize)>;
}

/// Delivery of serialized messages to connected clients.
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// Register a connection's outbound channel.
    async fn register_client(&self, client_id: ClientId, sender: PusherChannel);

    /// Remove a connection's outbound channel.
    async fn unregister_client(&self, client_id: &ClientId);

    /// Push a message to each of `targets`, tolerating individual failures.
    /// Each target receives the message at most once per call.
    async fn broadcast(
        &self,
        targets: Vec<ClientId>,
        content: &str,
    ) -> Result<(), MessagePushError>;
}
