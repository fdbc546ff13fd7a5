//! Minimal-variant reading of SGF game information.
//!
//! `read_sgf` validates only the game type and board size, extracts the
//! application, player, and rank fields, and exposes them through the grouped
//! [`Metadata`] and [`PlayerData`] views.

use sgf_meta::game::{Metadata, PlayerData};
use sgf_meta::reader::{SgfError, read_sgf};

const SAMPLE_SGF: &str = r"(;FF[4]GM[1]SZ[19]AP[SGFC:1.13b]

PB[troy]BR[12k*]
PW[john]WR[11k*]
KM[0.5]RE[W+12.5]
DT[1998-06-15]
TM[600]

;B[pd];W[dp];B[pq];W[dd];B[qk];W[jd];B[fq];W[dj];B[jp];W[jj]
;B[cn]LB[dn:A][po:B]C[dada: other ideas are 'A' (d6) or 'B' (q5)]
;W[eo](;B[dl]C[dada: hm - looks troublesome.Usually B plays the 3,3 invasion - see variation];W[qo];B[qp]
;W[sr];B[sk];W[sg];B[pa];W[gc];B[pi];W[ph];B[de];W[ed];B[kn]
;W[dh];B[eh];W[se];B[sd];W[af];B[ie];W[id];B[hf];W[hd];B[if]
;W[fp];B[gq];W[qj];B[sj];W[rh];B[sn];W[so];B[sm];W[ep];B[mn])

(;W[dq]N[wrong direction];B[qo];W[qp]))";

#[test]
fn test_reads_a_bare_go_record() {
    let game = read_sgf("(;FF[4]GM[1]SZ[19])").unwrap();
    assert_eq!(
        game.metadata(),
        Metadata {
            app: None,
            board_size: 19,
        }
    );
    assert_eq!(
        game.player_data(),
        PlayerData {
            player_black: None,
            player_white: None,
            black_rank: None,
            white_rank: None,
        }
    );
}

#[test]
fn test_missing_game_type_is_rejected() {
    let err = read_sgf("(;FF[4]SZ[19])").unwrap_err();
    assert_eq!(err, SgfError::NoGameType);
    assert_eq!(
        err.to_string(),
        "SGF string cannot be identified as a GO game."
    );
}

#[test]
fn test_non_go_game_is_rejected() {
    assert_eq!(
        read_sgf("(;FF[4]GM[2]SZ[19])").unwrap_err(),
        SgfError::NotAGoGame
    );
}

#[test]
fn test_missing_board_size_is_rejected() {
    let err = read_sgf("(;FF[4]GM[1])").unwrap_err();
    assert_eq!(err, SgfError::NoBoardSize);
    assert_eq!(err.to_string(), "No board size property in SGF string");
}

#[test]
fn test_gets_the_metadata() {
    let game = read_sgf(SAMPLE_SGF).unwrap();
    assert_eq!(game.metadata().app, Some("SGFC:1.13b"));
    assert_eq!(game.metadata().board_size, 19);
}

#[test]
fn test_gets_player_names_and_rankings() {
    let game = read_sgf(SAMPLE_SGF).unwrap();
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
fn test_full_only_fields_are_not_extracted() {
    let game = read_sgf(SAMPLE_SGF).unwrap();
    assert_eq!(game.komi, None);
    assert_eq!(game.result, None);
    assert_eq!(game.date, None);
    assert_eq!(game.time, None);
}

#[test]
fn test_reading_twice_yields_equal_games() {
    assert_eq!(read_sgf(SAMPLE_SGF).unwrap(), read_sgf(SAMPLE_SGF).unwrap());
}
