//! InMemory Room Registry 実装
//!
//! ドメイン層が定義する RoomRegistry trait の具体的な実装。
//! `HashMap<RoomId, HashSet<ClientId>>` をメンバーシップ台帳として使用し、
//! Room は最初の join で遅延生成、空になった時点で破棄されます。
//! 台帳は永続化されない純粋な帳簿であり、接続そのものは保持しません。

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ClientId, RoomId, RoomRegistry};

/// インメモリ Room Registry 実装
///
/// 全ての変更は単一の Mutex の臨界区リージョン内で行われるため、
/// join/leave/broadcast の間でメンバーシップが壊れることはありません。
pub struct InMemoryRoomRegistry {
    rooms: Mutex<HashMap<RoomId, HashSet<ClientId>>>,
}

impl InMemoryRoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryRoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomRegistry for InMemoryRoomRegistry {
    async fn join(&self, room_id: RoomId, client_id: ClientId) {
        let mut rooms = self.rooms.lock().await;
        let members = rooms.entry(room_id.clone()).or_default();
        if members.insert(client_id.clone()) {
            tracing::debug!(
                "Client '{}' joined room '{}'",
                client_id.as_str(),
                room_id.as_str()
            );
        }
    }

    async fn leave(&self, room_id: &RoomId, client_id: &ClientId) {
        let mut rooms = self.rooms.lock().await;
        if let Some(members) = rooms.get_mut(room_id) {
            if members.remove(client_id) {
                tracing::debug!(
                    "Client '{}' left room '{}'",
                    client_id.as_str(),
                    room_id.as_str()
                );
            }
            if members.is_empty() {
                rooms.remove(room_id);
                tracing::debug!("Room '{}' is empty and was discarded", room_id.as_str());
            }
        }
    }

    async fn members(&self, room_id: &RoomId) -> Vec<ClientId> {
        let rooms = self.rooms.lock().await;
        rooms
            .get(room_id)
            .map(|members| members.iter().cloned().collect())
            .unwrap_or_default()
    }

    async fn rooms(&self) -> Vec<(RoomId, usize)> {
        let rooms = self.rooms.lock().await;
        rooms
            .iter()
            .map(|(room_id, members)| (room_id.clone(), members.len()))
            .collect()
    }
}
