//! UseCase: AI アシスタント呼び出し処理
//!
//! トリガーされたプロンプトを生成バックエンドへ送り、返ってきたテキストを
//! sanitizer/parser で構造化します。生成呼び出し自体の失敗もパース失敗も
//! `GenerationResult::Failure` に変換されるため、このユースケースが
//! チャンネルを停止させることはありません。結果は送信者を含む Room の
//! 全メンバーへブロードキャストされます。

use std::sync::Arc;

use crate::domain::{
    ClientId, GenerationResult, GenerationService, MessagePusher, RoomId, RoomRegistry,
    parse_generation_text,
};

use super::error::RelayError;

/// AI アシスタント呼び出しのユースケース
pub struct InvokeAssistantUseCase {
    generation_service: Arc<dyn GenerationService>,
    registry: Arc<dyn RoomRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl InvokeAssistantUseCase {
    pub fn new(
        generation_service: Arc<dyn GenerationService>,
        registry: Arc<dyn RoomRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            generation_service,
            registry,
            message_pusher,
        }
    }

    /// 生成を 1 回だけ呼び出し、結果を構造化して返す
    ///
    /// 戻り値は常に Assistant payload か Failure のどちらかであり、
    /// エラーが伝播することはありません。
    pub async fn execute(&self, prompt: &str) -> GenerationResult {
        match self.generation_service.generate(prompt).await {
            Ok(raw_text) => parse_generation_text(&raw_text),
            Err(e) => {
                tracing::error!("Generation call failed: {}", e);
                GenerationResult::generation_failure()
            }
        }
    }

    /// 結果メッセージを Room の全メンバーへブロードキャストする
    ///
    /// 人間のメッセージ中継と異なり、トリガーした送信者も含めて全員に
    /// 届けます（除外なし）。
    pub async fn broadcast_to_room(
        &self,
        room_id: &RoomId,
        json_message: &str,
    ) -> Result<Vec<ClientId>, RelayError> {
        let targets = self.registry.members(room_id).await;

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
        domain::{
            FailureKind, GenerationError, ProjectId, PusherChannel,
            generation::{GENERATION_FAILURE_MESSAGE, PARSE_FAILURE_MESSAGE},
            service::MockGenerationService,
        },
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
        usecase: InvokeAssistantUseCase,
    }

    fn create_usecase(generation_service: MockGenerationService) -> Fixture {
        let registry = Arc::new(InMemoryRoomRegistry::new());
        let clients = Arc::new(Mutex::new(HashMap::new()));
        let pusher = Arc::new(WebSocketMessagePusher::new(clients.clone()));
        let usecase = InvokeAssistantUseCase::new(
            Arc::new(generation_service),
            registry.clone(),
            pusher,
        );
        Fixture {
            registry,
            clients,
            usecase,
        }
    }

    #[tokio::test]
    async fn test_execute_parses_generated_text() {
        // テスト項目: 生成されたテキストが Assistant payload として構造化される
        // given (前提条件):
        let mut generation_service = MockGenerationService::new();
        generation_service
            .expect_generate()
            .times(1)
            .returning(|_| Ok("```json\n{\"text\":\"hi\"}\n```".to_string()));
        let fixture = create_usecase(generation_service);

        // when (操作):
        let result = fixture.usecase.execute("write a hello world").await;

        // then (期待する結果):
        let GenerationResult::Assistant(payload) = result else {
            panic!("expected assistant payload");
        };
        assert_eq!(payload.text, "hi");
    }

    #[tokio::test]
    async fn test_execute_turns_parse_failure_into_failure_result() {
        // テスト項目: パースできない出力は Parse の Failure になる
        // given (前提条件):
        let mut generation_service = MockGenerationService::new();
        generation_service
            .expect_generate()
            .returning(|_| Ok("not json at all".to_string()));
        let fixture = create_usecase(generation_service);

        // when (操作):
        let result = fixture.usecase.execute("anything").await;

        // then (期待する結果):
        assert_eq!(
            result,
            GenerationResult::Failure {
                kind: FailureKind::Parse,
                message: PARSE_FAILURE_MESSAGE.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_execute_turns_generation_error_into_failure_result() {
        // テスト項目: 生成呼び出し自体の失敗も Failure になり、伝播しない
        // given (前提条件):
        let mut generation_service = MockGenerationService::new();
        generation_service
            .expect_generate()
            .returning(|_| Err(GenerationError::Status(503)));
        let fixture = create_usecase(generation_service);

        // when (操作):
        let result = fixture.usecase.execute("anything").await;

        // then (期待する結果):
        assert_eq!(
            result,
            GenerationResult::Failure {
                kind: FailureKind::Generation,
                message: GENERATION_FAILURE_MESSAGE.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_broadcast_includes_every_member() {
        // テスト項目: AI の応答はトリガーした送信者を含む全員に届く
        // given (前提条件):
        let fixture = create_usecase(MockGenerationService::new());
        let room_id = room("507f1f77bcf86cd799439011");
        let mut receivers = Vec::new();
        for _ in 0..3 {
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
            receivers.push(rx);
        }

        // when (操作):
        let result = fixture
            .usecase
            .broadcast_to_room(&room_id, r#"{"message":"hi","sender":{"id":"ai","email":"AI"}}"#)
            .await;

        // then (期待する結果):
        assert_eq!(result.unwrap().len(), 3);
        for rx in receivers.iter_mut() {
            assert!(rx.try_recv().is_ok());
        }
    }
}
