//! Инфраструктурный слой вокруг движка:
//! - генерация ID раздач;
//! - RNG-реализации для движка;
//! - хранилище истории раздач;
//! - маппинг состояния движка в записи хранилища.

pub mod ids;
pub mod mapping;
pub mod persistence;
pub mod rng;

pub use ids::*;
pub use mapping::*;
pub use persistence::*;
pub use rng::*;
