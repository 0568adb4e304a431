//! UseCase: 接続ハンドシェイク処理
//!
//! WebSocket ハンドシェイク中に実行される認証・認可のオーケストレーション。
//! 以下の順に検証し、最初の失敗で短絡します（リトライなし・単一パス）：
//!
//! 1. projectId の形式検証（24桁の16進数識別子）
//! 2. Project の解決（存在しない場合は拒否）
//! 3. token の存在確認
//! 4. token の署名・有効期限の検証
//!
//! 全て成功した場合のみ Room に join します。部分的な許可は存在しません。

use std::sync::Arc;

use crate::domain::{
    Claims, ClientId, MessagePusher, Project, ProjectId, ProjectStore, PusherChannel, RoomId,
    RoomRegistry, TokenVerifier, error::AuthError,
};

use super::error::ConnectError;

/// Raw handshake parameters as extracted from the connection request.
#[derive(Debug, Clone, Default)]
pub struct HandshakeParams {
    /// `projectId` query parameter
    pub project_id: Option<String>,
    /// Bearer token from the `token` query parameter or Authorization header
    pub token: Option<String>,
}

/// An admitted connection, bound to a resolved project.
#[derive(Debug, Clone)]
pub struct Connection {
    pub client_id: ClientId,
    pub claims: Claims,
    pub project: Project,
    /// Stable for the connection's lifetime; equals the project's id
    pub room_id: RoomId,
}

/// 接続ハンドシェイクのユースケース
pub struct ConnectParticipantUseCase {
    registry: Arc<dyn RoomRegistry>,
    message_pusher: Arc<dyn MessagePusher>,
    project_store: Arc<dyn ProjectStore>,
    token_verifier: Arc<dyn TokenVerifier>,
}

impl ConnectParticipantUseCase {
    pub fn new(
        registry: Arc<dyn RoomRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
        project_store: Arc<dyn ProjectStore>,
        token_verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        Self {
            registry,
            message_pusher,
            project_store,
            token_verifier,
        }
    }

    /// ハンドシェイクを実行し、成功時に Room へ join する
    ///
    /// # Arguments
    ///
    /// * `client_id` - サーバーが採番した接続 ID
    /// * `params` - ハンドシェイクパラメータ（projectId, token）
    /// * `sender` - クライアントへのメッセージ送信用チャンネル
    ///
    /// # Returns
    ///
    /// * `Ok(Connection)` - 許可された接続（検証済み claims と解決済み project 付き）
    /// * `Err(ConnectError)` - 拒否理由
    pub async fn execute(
        &self,
        client_id: ClientId,
        params: HandshakeParams,
        sender: PusherChannel,
    ) -> Result<Connection, ConnectError> {
        // 1. projectId の形式検証
        let raw_project_id = params.project_id.unwrap_or_default();
        let project_id = ProjectId::new(raw_project_id.clone())
            .map_err(|_| ConnectError::InvalidProjectId(raw_project_id))?;

        // 2. Project の解決（存在しない projectId は拒否）
        let project = self
            .project_store
            .resolve(&project_id)
            .await
            .ok_or_else(|| ConnectError::ProjectNotFound(project_id.as_str().to_string()))?;

        // 3. token の存在確認
        let token = params.token.ok_or(AuthError::MissingToken)?;

        // 4. token の検証
        let claims = self.token_verifier.verify(&token)?;

        // 5. Room へ join（検証がすべて成功した後でのみ実行される）
        let room_id = RoomId::from(&project.id);
        self.registry.join(room_id.clone(), client_id.clone()).await;
        self.message_pusher
            .register_client(client_id.clone(), sender)
            .await;

        Ok(Connection {
            client_id,
            claims,
            project,
            room_id,
        })
    }
}
