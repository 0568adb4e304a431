//! UseCase: メッセージ中継処理
//!
//! 受信したメッセージを送信者以外の Room メンバー全員へブロードキャスト
//! します。AI トリガーの有無とは無関係に、人間のメッセージは常に即座に
//! 中継されます。

use std::sync::Arc;

use crate::domain::{ClientId, MessagePusher, RoomId, RoomRegistry};

use super::error::RelayError;

/// メッセージ中継のユースケース
pub struct RelayMessageUseCase {
    registry: Arc<dyn RoomRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl RelayMessageUseCase {
    pub fn new(registry: Arc<dyn RoomRegistry>, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            registry,
            message_pusher,
        }
    }

    /// メッセージ中継を実行する
    ///
    /// # Arguments
    ///
    /// * `room_id` - 送信者が join している Room
    /// * `from_client_id` - 送信者の接続 ID（ブロードキャストから除外される）
    /// * `json_message` - 送信する JSON メッセージ（DTO 層で生成されたもの）
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ClientId>)` - ブロードキャスト対象となった接続 ID リスト
    /// * `Err(RelayError)` - 中継失敗
    pub async fn execute(
        &self,
        room_id: &RoomId,
        from_client_id: &ClientId,
        json_message: &str,
    ) -> Result<Vec<ClientId>, RelayError> {
        let targets: Vec<ClientId> = self
            .registry
            .members(room_id)
            .await
            .into_iter()
            .filter(|id| id != from_client_id)
            .collect();

        self.message_pusher
            .broadcast(targets.clone(), json_message)
            .await
            .map_err(|e| RelayError::BroadcastFailed(e.to_string()))?;

        Ok(targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ProjectId, PusherChannel, RoomId},
        infrastructure::{
            message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRegistry,
        },
    };
    use std::{collections::HashMap, sync::Arc};
    use tokio::sync::{Mutex, mpsc};

    fn room(id: &str) -> RoomId {
        RoomId::from(&ProjectId::new(id.to_string()).unwrap())
    }

    struct Fixture {
        registry: Arc<InMemoryRoomRegistry>,
        clients: Arc<Mutex<HashMap<String, PusherChannel>>>,
        usecase: RelayMessageUseCase,
    }

    fn create_usecase() -> Fixture {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let clients = Arc::new(Mutex::new(HashMap::new()));
        let pusher = Arc::new(WebSocketMessagePusher::new(clients.clone()));
        let usecase = RelayMessageUseCase::new(registry.clone(), pusher);
        Fixture {
            registry,
            clients,
            usecase,
        }
    }

    async fn connect(
        fixture: &Fixture,
        room_id: &RoomId,
    ) -> (ClientId, mpsc::UnboundedReceiver<String>) {
        let client_id = ClientId::generate();
        let (tx, rx) = mpsc::unbounded_channel();
        fixture
            .registry
            .join(room_id.clone(), client_id.clone())
            .await;
        fixture
            .clients
            .lock()
            .await
            .insert(client_id.as_str().to_string(), tx);
        (client_id, rx)
    }

    #[tokio::test]
    async fn test_relay_excludes_sender() {
        // テスト項目: 送信者以外の全メンバーが受信し、送信者自身は受信しない
        // given (前提条件):
        let fixture = create_usecase();
        let room_id = room("507f1f77bcf86cd799439011");
        let (alice, mut alice_rx) = connect(&fixture, &room_id).await;
        let (bob, mut bob_rx) = connect(&fixture, &room_id).await;
        let (charlie, mut charlie_rx) = connect(&fixture, &room_id).await;

        // when (操作): alice がメッセージを送信
        let result = fixture
            .usecase
            .execute(&room_id, &alice, r#"{"type":"project-message","message":"hello"}"#)
            .await;

        // then (期待する結果):
        let targets = result.unwrap();
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&bob));
        assert!(targets.contains(&charlie));
        assert!(!targets.contains(&alice));

        assert!(bob_rx.try_recv().is_ok());
        assert!(charlie_rx.try_recv().is_ok());
        assert!(alice_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_relay_no_cross_room_leakage() {
        // テスト項目: 別の Room のメンバーにはメッセージが届かない
        // given (前提条件): alice と bob は別々の Room に join している
        let fixture = create_usecase();
        let room_a = room("507f1f77bcf86cd799439011");
        let room_b = room("507f1f77bcf86cd799439022");
        let (alice, _alice_rx) = connect(&fixture, &room_a).await;
        let (_bob, mut bob_rx) = connect(&fixture, &room_b).await;

        // when (操作): alice が room_a にメッセージを送信
        let result = fixture
            .usecase
            .execute(&room_a, &alice, r#"{"message":"hello"}"#)
            .await;

        // then (期待する結果):
        assert_eq!(result.unwrap().len(), 0);
        assert!(bob_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_relay_single_member_room() {
        // テスト項目: 送信者のみの Room ではブロードキャスト対象が空になる
        // given (前提条件):
        let fixture = create_usecase();
        let room_id = room("507f1f77bcf86cd799439011");
        let (alice, _alice_rx) = connect(&fixture, &room_id).await;

        // when (操作):
        let result = fixture
            .usecase
            .execute(&room_id, &alice, r#"{"message":"hello"}"#)
            .await;

        // then (期待する結果):
        assert_eq!(result.unwrap().len(), 0);
    }
}
