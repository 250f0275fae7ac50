//! Внешний API движка.
//!
//! Здесь описываются:
//! - команды (commands.rs) - всё, что меняет состояние (старт раздачи, улицы, действие игрока);
//! - запросы (queries.rs) - только чтение;
//! - DTO (dto.rs) - удобные структуры для фронта;
//! - ошибки (errors.rs) - то, что видит клиент;
//! - `TableService` (service.rs) - исполнитель команд для одного стола.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;
pub mod service;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
pub use service::*;
