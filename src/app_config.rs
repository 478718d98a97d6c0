//! Runtime configuration: board size and piece display names.
//!
//! The configuration is an explicit value handed to the board factory and
//! the renderer. The rule engine never reads it.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::STANDARD_BOARD_SIZE;
use crate::game_state::chess_types::PieceKind;
use crate::utils::algebraic::MAX_COLUMNS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board_size: usize,
    pub name_mappings: BTreeMap<PieceKind, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board_size: STANDARD_BOARD_SIZE,
            name_mappings: default_name_mappings(),
        }
    }
}

fn default_name_mappings() -> BTreeMap<PieceKind, String> {
    PieceKind::ALL
        .iter()
        .map(|kind| (*kind, default_name(*kind).to_owned()))
        .collect()
}

fn default_name(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::Pawn => "P",
        PieceKind::Knight => "N",
        PieceKind::Bishop => "B",
        PieceKind::Rook => "R",
        PieceKind::Queen => "Q",
        PieceKind::King => "K",
    }
}

impl AppConfig {
    /// Parse a JSON configuration. Missing fields, and missing entries of
    /// `name_mappings`, keep their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ChessErrors> {
        let mut config: AppConfig = serde_json::from_str(text)?;
        for kind in PieceKind::ALL {
            config
                .name_mappings
                .entry(kind)
                .or_insert_with(|| default_name(kind).to_owned());
        }
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChessErrors> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ChessErrors::ConfigUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            board_size = config.board_size,
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ChessErrors> {
        if !(1..=MAX_COLUMNS).contains(&self.board_size) {
            return Err(ChessErrors::InvalidConfig(format!(
                "board_size must be between 1 and {MAX_COLUMNS}, got {}",
                self.board_size
            )));
        }
        if let Some((kind, _)) = self
            .name_mappings
            .iter()
            .find(|(_, name)| name.trim().is_empty())
        {
            return Err(ChessErrors::InvalidConfig(format!(
                "empty display name for {}",
                kind.name()
            )));
        }
        Ok(())
    }

    /// Display name for a kind, falling back to its default letter.
    pub fn name_for(&self, kind: PieceKind) -> &str {
        self.name_mappings
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| default_name(kind))
    }
}
