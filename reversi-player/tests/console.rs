//! Scripted games through the console front end.

use reversi_core::persist::{load_game, save_game};
use reversi_core::{Board, Cell, GameState, Location, Player, PlayerName};
use reversi_player::{AppConfig, Console, PlayError};
use std::path::Path;

fn config_with_save(path: &Path) -> AppConfig {
    AppConfig {
        save_path: path.to_path_buf(),
        ..AppConfig::default()
    }
}

fn run_script(script: &str, config: AppConfig) -> (Result<GameState, PlayError>, String) {
    let mut console = Console::new(script.as_bytes(), Vec::new(), config);
    let result = console.run();
    let output = String::from_utf8(console.into_output()).unwrap();
    (result, output)
}

fn loc(row: u8, col: u8) -> Location {
    Location::from_coords(row, col).unwrap()
}

#[test]
fn computers_play_to_the_end() {
    let (result, output) = run_script("c\na\n", AppConfig::default());
    let game = result.unwrap();

    assert!(game.is_finished());
    assert_eq!(game.player1.as_str(), "C");
    assert_eq!(game.player2.as_str(), "A");
    assert!(output.contains("Comp 1 chose to go d3"));
    assert!(output.contains(&format!("The end score is: {}", game.score())));

    let verdict = match game.winner() {
        Some(Player::One) => "Player 1 has won.",
        Some(Player::Two) => "Player 2 has won.",
        None => "Draw",
    };
    assert!(output.trim_end().ends_with(verdict));
}

#[test]
fn computer_games_are_deterministic() {
    let (first, _) = run_script("C\nA\n", AppConfig::default());
    let (second, _) = run_script("C\nA\n", AppConfig::default());
    assert_eq!(first.unwrap().board, second.unwrap().board);
}

#[test]
fn human_against_greedy() {
    let (result, output) = run_script("ann\nC\na1\nzz\n3d\n", AppConfig::default());

    // The script runs out on the human's second turn.
    assert!(matches!(result, Err(PlayError::InputClosed)));
    assert!(output.contains("Ann to move."));
    assert!(output.contains("Valid moves are: [d3, c4, f5, e6]"));
    assert!(output.contains("You inputted: a1\nNot valid move, try again."));
    assert!(output.contains("You inputted: zz"));
    assert!(output.contains("Comp 2 chose to go c3"));
}

#[test]
fn human_can_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");

    let (result, output) = run_script("Ann\nBob\nd3\nsave\n", config_with_save(&path));
    assert!(matches!(result, Err(PlayError::InputClosed)));
    assert!(output.contains("Game saved to"));

    let saved = load_game(&path).unwrap();
    assert_eq!(saved.player1.as_str(), "Ann");
    assert_eq!(saved.player2.as_str(), "Bob");
    assert_eq!(saved.mover, Player::Two);
    assert_eq!(saved.board, Board::new().make_move(Player::One, loc(2, 3)));
}

#[test]
fn load_and_finish_saved_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");

    let mut saved = GameState::new(PlayerName::new("C").unwrap(), PlayerName::new("A").unwrap());
    saved.apply_move(loc(2, 3)).unwrap();
    save_game(&path, &saved).unwrap();

    let (result, output) = run_script("l\n", config_with_save(&path));
    let game = result.unwrap();
    assert!(game.is_finished());
    assert!(output.contains("Loaded C vs A"));
    assert!(output.contains("Comp 2 is thinking..."));
}

#[test]
fn human_without_moves_passes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game.txt");

    // Ann (player 1) cannot move; the greedy computer captures b1 from c1.
    let mut board = Board::empty();
    board.set(loc(0, 0), Cell::Player2);
    board.set(loc(0, 1), Cell::Player1);
    let saved = GameState::from_parts(
        PlayerName::new("Ann").unwrap(),
        PlayerName::new("C").unwrap(),
        Player::One,
        board,
    );
    save_game(&path, &saved).unwrap();

    let mut console = Console::new(&b""[..], Vec::new(), config_with_save(&path));
    let game = console.resume().unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();

    assert!(output.contains("Ann skipping go, no valid moves."));
    assert!(output.contains("Comp 2 chose to go c1"));
    assert!(output.contains("The end score is: -3"));
    assert!(output.contains("Player 2 has won."));
    assert_eq!(game.board.count(Player::Two), 3);
}

#[test]
fn resume_without_save_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut console = Console::new(
        &b""[..],
        Vec::new(),
        config_with_save(&dir.path().join("missing.txt")),
    );
    assert!(matches!(console.resume(), Err(PlayError::Load { .. })));
}
