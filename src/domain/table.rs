use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::chips::Chips;

/// Стейки стола (SB/BB).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableStakes {
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl TableStakes {
    pub fn new(sb: Chips, bb: Chips) -> Self {
        Self {
            small_blind: sb,
            big_blind: bb,
        }
    }
}

impl Default for TableStakes {
    fn default() -> Self {
        Self::new(Chips(20), Chips(40))
    }
}

/// Конфиг стола: блайнды и допустимое число игроков в раздаче.
///
/// Можно загрузить из JSON, недостающие поля берутся из `Default`:
/// `{"stakes": {"small_blind": 50, "big_blind": 100}}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    pub stakes: TableStakes,
    pub min_players: usize,
    pub max_players: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            stakes: TableStakes::default(),
            min_players: 2,
            max_players: 6,
        }
    }
}

/// Ошибки конфигурации стола.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("big blind должен быть больше нуля")]
    ZeroBigBlind,
    #[error("small blind ({sb}) больше big blind ({bb})")]
    SmallBlindAboveBigBlind { sb: Chips, bb: Chips },
    #[error("некорректные границы числа игроков: {min}..={max}")]
    PlayerBounds { min: usize, max: usize },
    #[error("не удалось разобрать конфиг: {0}")]
    Parse(String),
}

impl TableConfig {
    pub fn with_blinds(sb: u64, bb: u64) -> Self {
        Self {
            stakes: TableStakes::new(Chips(sb), Chips(bb)),
            ..Self::default()
        }
    }

    pub fn small_blind(&self) -> Chips {
        self.stakes.small_blind
    }

    pub fn big_blind(&self) -> Chips {
        self.stakes.big_blind
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let TableStakes {
            small_blind: sb,
            big_blind: bb,
        } = self.stakes;
        if bb.is_zero() {
            return Err(ConfigError::ZeroBigBlind);
        }
        if sb > bb {
            return Err(ConfigError::SmallBlindAboveBigBlind { sb, bb });
        }
        if self.min_players < 2 || self.max_players < self.min_players {
            return Err(ConfigError::PlayerBounds {
                min: self.min_players,
                max: self.max_players,
            });
        }
        Ok(())
    }

    /// Разобрать и провалидировать конфиг из JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TableConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
