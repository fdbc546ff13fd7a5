//! SGF game-info reading and validation.
//!
//! Two entry points share one pipeline:
//!
//! - [`read_game`] requires every recognized game-info property up front and
//!   extracts all of them.
//! - [`read_sgf`] validates only the game type and board size and extracts
//!   the application, player, and rank fields.
//!
//! Both accept only Go records (`GM[1]`) and fail on anything else. Every
//! failure is terminal: no partially-populated [`Game`] is ever returned.

use thiserror::Error;
use tracing::{debug, trace};

use crate::game::{Color, Game, GameResult};
use crate::scan::{RootProperties, root_properties};
use crate::tags;

/// Why an SGF string could not be read as a Go game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SgfError {
    /// A property the strict reader insists on is absent from the root node.
    #[error("Required property '{0}' is missing")]
    MissingProperty(&'static str),
    /// No `GM` property at all.
    #[error("SGF string cannot be identified as a GO game.")]
    NoGameType,
    /// `GM` present but its value is not `1`.
    #[error("SGF string is not a Go game.")]
    NotAGoGame,
    /// `SZ` absent, unparseable, or zero.
    #[error("No board size property in SGF string")]
    NoBoardSize,
}

/// How much of the game-info node a read validates and extracts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mode {
    /// All tags in [`tags::REQUIRED_TAGS`] must be present; all are extracted.
    Strict,
    /// Only game type and board size are validated; komi, result, date, and
    /// time are not extracted.
    Lenient,
}

/// Read full game information from an SGF string.
///
/// Fails on the first required property missing (in [`tags::REQUIRED_TAGS`]
/// order), on a record that is not a Go game, and on a missing or zero board
/// size.
pub fn read_game(sgf: &str) -> Result<Game, SgfError> {
    read(sgf, Mode::Strict)
}

/// Read minimal game information: application, board size, players, ranks.
///
/// Tolerates missing player and application properties; still fails on a
/// non-Go game type or a missing board size.
pub fn read_sgf(sgf: &str) -> Result<Game, SgfError> {
    read(sgf, Mode::Lenient)
}

fn read(sgf: &str, mode: Mode) -> Result<Game, SgfError> {
    debug!(?mode, len = sgf.len(), "reading SGF game info");
    let props = root_properties(sgf);

    if mode == Mode::Strict {
        check_required(&props)?;
    }
    validate_game_type(&props)?;
    let board_size = validate_board_size(&props)?;

    let extract = |tag: &'static str| {
        let value = props.get(tag);
        trace!(tag, ?value, "extracted property");
        value.map(str::to_owned)
    };

    let mut game = Game {
        app: extract(tags::APPLICATION),
        board_size,
        player_black: extract(tags::PLAYER_BLACK),
        player_white: extract(tags::PLAYER_WHITE),
        black_rank: extract(tags::BLACK_RANK),
        white_rank: extract(tags::WHITE_RANK),
        komi: None,
        result: None,
        date: None,
        time: None,
    };

    if mode == Mode::Strict {
        game.komi = props.get(tags::KOMI).and_then(|v| v.parse().ok());
        game.result = props.get(tags::RESULT).map(parse_result);
        game.date = extract(tags::DATE);
        game.time = props.get(tags::TIME).and_then(|v| v.parse().ok());
    }

    Ok(game)
}

/// Fail on the first required tag the root node is missing.
fn check_required(props: &RootProperties<'_>) -> Result<(), SgfError> {
    for tag in tags::REQUIRED_TAGS {
        if !props.contains(tag) {
            return Err(SgfError::MissingProperty(tag));
        }
    }
    Ok(())
}

fn validate_game_type(props: &RootProperties<'_>) -> Result<(), SgfError> {
    match props.get(tags::GAME_TYPE) {
        None => Err(SgfError::NoGameType),
        Some(value) if value == tags::GO_GAME_TYPE => Ok(()),
        Some(_) => Err(SgfError::NotAGoGame),
    }
}

/// Board size, with absent, unparseable, and zero all treated as missing.
fn validate_board_size(props: &RootProperties<'_>) -> Result<u32, SgfError> {
    let size = props
        .get(tags::BOARD_SIZE)
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(0);
    if size == 0 {
        return Err(SgfError::NoBoardSize);
    }
    Ok(size)
}

/// Decode a result string of the form `W+12.5` or `B+3.5`.
///
/// The winner is White exactly when the string starts with `W`, Black
/// otherwise. The margin is whatever follows the first two characters; a
/// non-numeric margin (`W+R`, `W+T`) reads as zero.
fn parse_result(value: &str) -> GameResult {
    let winner = if value.as_bytes().first() == Some(&b'W') {
        Color::White
    } else {
        Color::Black
    };
    let amount = value
        .get(2..)
        .and_then(|margin| margin.parse().ok())
        .unwrap_or(0.0);
    GameResult { winner, amount }
}
