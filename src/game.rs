//! Immutable game-information records.
//!
//! A [`Game`] is only ever produced by the reader functions after validation
//! succeeds, and is never mutated afterwards. Fields the minimal reader does
//! not extract are `None`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stone color, also naming the winner of a finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Outcome of a finished game, decoded from a result string like `W+12.5`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Color,
    /// Winning margin in points. Zero when the result string carries no
    /// numeric margin (resignation, win on time).
    pub amount: f64,
}

/// Game information extracted from an SGF record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Application that produced the file.
    pub app: Option<String>,
    /// Board dimension (19 for an even game). Validated non-zero.
    pub board_size: u32,
    pub player_black: Option<String>,
    pub player_white: Option<String>,
    pub black_rank: Option<String>,
    pub white_rank: Option<String>,
    /// Compensation points for White.
    pub komi: Option<f64>,
    pub result: Option<GameResult>,
    /// Date as written in the record, not validated.
    pub date: Option<String>,
    /// Main time in seconds.
    pub time: Option<u32>,
}

/// File-level metadata: producing application and board size.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Metadata<'a> {
    pub app: Option<&'a str>,
    pub board_size: u32,
}

/// Player names and ranks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlayerData<'a> {
    pub player_black: Option<&'a str>,
    pub player_white: Option<&'a str>,
    pub black_rank: Option<&'a str>,
    pub white_rank: Option<&'a str>,
}

impl Game {
    /// The file-level metadata view.
    pub fn metadata(&self) -> Metadata<'_> {
        Metadata {
            app: self.app.as_deref(),
            board_size: self.board_size,
        }
    }

    /// The player view: names and ranks of both sides.
    pub fn player_data(&self) -> PlayerData<'_> {
        PlayerData {
            player_black: self.player_black.as_deref(),
            player_white: self.player_white.as_deref(),
            black_rank: self.black_rank.as_deref(),
            white_rank: self.white_rank.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game() -> Game {
        Game {
            app: Some("SGFC:1.13b".to_string()),
            board_size: 19,
            player_black: Some("troy".to_string()),
            player_white: Some("john".to_string()),
            black_rank: Some("12k*".to_string()),
            white_rank: Some("11k*".to_string()),
            komi: Some(0.5),
            result: Some(GameResult {
                winner: Color::White,
                amount: 12.5,
            }),
            date: Some("1998-06-15".to_string()),
            time: Some(600),
        }
    }

    #[test]
    fn test_metadata_view() {
        let game = sample_game();
        assert_eq!(
            game.metadata(),
            Metadata {
                app: Some("SGFC:1.13b"),
                board_size: 19,
            }
        );
    }

    #[test]
    fn test_player_data_view() {
        let game = sample_game();
        assert_eq!(
            game.player_data(),
            PlayerData {
                player_black: Some("troy"),
                player_white: Some("john"),
                black_rank: Some("12k*"),
                white_rank: Some("11k*"),
            }
        );
    }

    #[test]
    fn test_color_displays_lowercase() {
        assert_eq!(Color::Black.to_string(), "black");
        assert_eq!(Color::White.to_string(), "white");
    }

    #[test]
    fn test_game_serializes_winner_lowercase() {
        let json = serde_json::to_value(sample_game()).unwrap();
        assert_eq!(json["result"]["winner"], "white");
        assert_eq!(json["board_size"], 19);
    }
}
