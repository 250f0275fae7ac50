use thiserror::Error;

use crate::engine::EngineError;
use crate::infra::persistence::StoreError;

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (неизвестное действие, нет суммы и т.п.).
    #[error("некорректный запрос: {0}")]
    BadRequest(String),

    /// Ошибка движка (ставки, действия, улицы).
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Ошибка хранилища истории.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Короткий машинный код для клиента.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Engine(EngineError::InvalidTurn { .. }) => "not_your_turn",
            ApiError::Engine(EngineError::NoActiveHand) => "no_active_hand",
            ApiError::Engine(_) => "engine_error",
            ApiError::Store(StoreError::NotFound(_)) => "not_found",
            ApiError::Store(_) => "store_error",
        }
    }
}
