//! Server state shared across handlers.

use std::sync::Arc;

use crate::domain::RoomRegistry;
use crate::usecase::{
    ConnectParticipantUseCase, DisconnectParticipantUseCase, InvokeAssistantUseCase,
    RelayMessageUseCase,
};

/// Shared application state
pub struct AppState {
    /// ConnectParticipantUseCase（接続ハンドシェイクのユースケース）
    pub connect_participant_usecase: Arc<ConnectParticipantUseCase>,
    /// DisconnectParticipantUseCase（参加者切断のユースケース）
    pub disconnect_participant_usecase: Arc<DisconnectParticipantUseCase>,
    /// RelayMessageUseCase（メッセージ中継のユースケース）
    pub relay_message_usecase: Arc<RelayMessageUseCase>,
    /// InvokeAssistantUseCase（AI アシスタント呼び出しのユースケース）
    pub invoke_assistant_usecase: Arc<InvokeAssistantUseCase>,
    /// RoomRegistry（観測用エンドポイントから参照）
    pub registry: Arc<dyn RoomRegistry>,
}
