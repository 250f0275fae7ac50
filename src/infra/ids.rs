use uuid::Uuid;

use crate::domain::HandId;

/// Новый уникальный ID раздачи (UUID v4).
#[inline]
pub fn new_hand_id() -> HandId {
    Uuid::new_v4()
}

/// Разобрать ID раздачи из строки (как его отдаёт API).
pub fn parse_hand_id(raw: &str) -> Result<HandId, uuid::Error> {
    Uuid::parse_str(raw.trim())
}
