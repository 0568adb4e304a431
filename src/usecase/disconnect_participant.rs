//! UseCase: 参加者切断処理
//!
//! Room からの離脱と送信チャンネルの登録解除。切断は何度実行しても
//! 安全（冪等）です。進行中の AI 生成はキャンセルされません。

use std::sync::Arc;

use crate::domain::{ClientId, MessagePusher, RoomId, RoomRegistry};

/// 参加者切断のユースケース
pub struct DisconnectParticipantUseCase {
    registry: Arc<dyn RoomRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectParticipantUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// 切断を実行する
    pub async fn execute(&self, room_id: &RoomId, client_id: &ClientId) {
        self.registry.leave(room_id, client_id).await;
        self.message_pusher.unregister_client(client_id).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ProjectId, RoomId},
        infrastructure::{
            message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRegistry,
        },
    };
    use std::{collections::HashMap, sync::Arc};
    use tokio::sync::Mutex;

    fn test_room_id() -> RoomId {
        RoomId::from(&ProjectId::new("507f1f77bcf86cd799439011".to_string()).unwrap())
    }

    fn create_usecase() -> (Arc<InMemoryRoomRegistry>, DisconnectParticipantUseCase) {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let pusher = Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
            HashMap::new(),
        ))));
        let usecase = DisconnectParticipantUseCase::new(registry.clone(), pusher);
        (registry, usecase)
    }

    #[tokio::test]
    async fn test_disconnect_removes_member() {
        // テスト項目: 切断すると Room のメンバーから削除される
        // given (前提条件):
        let (registry, usecase) = create_usecase();
        let room_id = test_room_id();
        let alice = ClientId::generate();
        let bob = ClientId::generate();
        registry.join(room_id.clone(), alice.clone()).await;
        registry.join(room_id.clone(), bob.clone()).await;

        // when (操作):
        usecase.execute(&room_id, &alice).await;

        // then (期待する結果):
        let members = registry.members(&room_id).await;
        assert_eq!(members, vec![bob]);
    }

    #[tokio::test]
    async fn test_disconnect_is_idempotent() {
        // テスト項目: 同じ接続を複数回切断してもエラーにならない
        // given (前提条件):
        let (registry, usecase) = create_usecase();
        let room_id = test_room_id();
        let alice = ClientId::generate();
        registry.join(room_id.clone(), alice.clone()).await;

        // when (操作):
        usecase.execute(&room_id, &alice).await;
        usecase.execute(&room_id, &alice).await;

        // then (期待する結果): 空になった Room は破棄される
        assert!(registry.rooms().await.is_empty());
    }
}
