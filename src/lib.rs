//! Sgf-Meta: game-information extraction from SGF records.
//!
//! This crate reads the game-info properties of an SGF (Smart Game Format)
//! string describing a Go game (application, board size, players, ranks,
//! komi, result, date, and main time) without parsing the move tree.
//!
//! ## Modules
//!
//! - [`tags`] - Property-tag constants and the required-tag order
//! - [`scan`] - Single-pass scanner for root-node properties
//! - [`game`] - The immutable [`game::Game`] record and its grouped views
//! - [`reader`] - Validation and extraction entry points
//!
//! ## Example
//!
//! ```
//! use sgf_meta::reader::read_game;
//!
//! let sgf = "(;FF[4]GM[1]SZ[19]AP[SGFC:1.13b]PB[troy]BR[12k*]PW[john]\
//!            WR[11k*]KM[0.5]RE[W+12.5]DT[1998-06-15]TM[600])";
//! let game = read_game(sgf).unwrap();
//!
//! assert_eq!(game.board_size, 19);
//! assert_eq!(game.player_black.as_deref(), Some("troy"));
//! assert_eq!(game.komi, Some(0.5));
//! ```

pub mod game;
pub mod reader;
pub mod scan;
pub mod tags;
