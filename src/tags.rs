//! SGF game-info property tags.
//!
//! SGF names properties with short uppercase identifiers (`PB[troy]`,
//! `SZ[19]`). This module fixes the tags the reader understands and the
//! canonical order in which the strict reader checks for them.

// =============================================================================
// Game-Info Property Tags
// =============================================================================

/// Application that produced the file (`AP[SGFC:1.13b]`).
pub const APPLICATION: &str = "AP";

/// Game type (`GM[1]` is Go).
pub const GAME_TYPE: &str = "GM";

/// Board size (`SZ[19]`).
pub const BOARD_SIZE: &str = "SZ";

/// Black player name.
pub const PLAYER_BLACK: &str = "PB";

/// White player name.
pub const PLAYER_WHITE: &str = "PW";

/// Black player rank (`BR[12k*]`).
pub const BLACK_RANK: &str = "BR";

/// White player rank (`WR[11k*]`).
pub const WHITE_RANK: &str = "WR";

/// Komi, the compensation points for White (`KM[0.5]`).
pub const KOMI: &str = "KM";

/// Game result (`RE[W+12.5]`).
pub const RESULT: &str = "RE";

/// Date the game was played (`DT[1998-06-15]`).
pub const DATE: &str = "DT";

/// Main time in seconds (`TM[600]`).
pub const TIME: &str = "TM";

// =============================================================================
// Tag Sets and Expected Values
// =============================================================================

/// The `GM` value identifying a Go record.
pub const GO_GAME_TYPE: &str = "1";

/// Tags the strict reader requires, in the order they are checked.
/// The first missing tag is the one reported to the caller.
pub const REQUIRED_TAGS: [&str; 11] = [
    APPLICATION,
    GAME_TYPE,
    BOARD_SIZE,
    PLAYER_BLACK,
    PLAYER_WHITE,
    BLACK_RANK,
    WHITE_RANK,
    KOMI,
    RESULT,
    DATE,
    TIME,
];
