//! Play a full game in a text console.
//!
//! [`Console`] is generic over its input and output so whole games can be scripted.

use crate::config::AppConfig;
use crate::strategy::Controller;
use derive_more::{Display, Error};
use reversi_core::persist::{self, LoadGameError};
use reversi_core::{GameState, IllegalMoveError, Location, Player, PlayerName};
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// Entering this as player 1's name resumes the saved game.
pub const LOAD_TAG: &str = "L";

/// Entering this instead of a move saves the game.
pub const SAVE_COMMAND: &str = "save";

#[derive(Debug, Display, Error)]
pub enum PlayError {
    #[display(fmt = "console I/O failed: {}", source)]
    Io { source: io::Error },
    #[display(fmt = "cannot load saved game: {}", source)]
    Load { source: LoadGameError },
    #[display(fmt = "computer player chose badly: {}", source)]
    IllegalMove { source: IllegalMoveError },
    #[display(fmt = "input closed before the game finished")]
    InputClosed,
}

impl From<io::Error> for PlayError {
    fn from(source: io::Error) -> Self {
        PlayError::Io { source }
    }
}

impl From<LoadGameError> for PlayError {
    fn from(source: LoadGameError) -> Self {
        PlayError::Load { source }
    }
}

impl From<IllegalMoveError> for PlayError {
    fn from(source: IllegalMoveError) -> Self {
        PlayError::IllegalMove { source }
    }
}

/// What was entered at the player 1 name prompt.
enum NameChoice {
    Name(PlayerName),
    Load,
}

/// Upper-case the first letter of a name, as names are shown on the scoreboard.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    config: AppConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: AppConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Give back the output, e.g. to inspect a scripted game.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for players (or a saved game) and play until the game ends.
    pub fn run(&mut self) -> Result<GameState, PlayError> {
        let game = self.setup()?;
        self.play(game)
    }

    /// Load the saved game and play until it ends.
    pub fn resume(&mut self) -> Result<GameState, PlayError> {
        let game = self.load()?;
        self.play(game)
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PlayError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PlayError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Greet the players and ask for their names.
    pub fn setup(&mut self) -> Result<GameState, PlayError> {
        writeln!(self.output, "{}", "*".repeat(55))?;
        writeln!(self.output, "***{:^49}***", "WELCOME TO OTHELLO!")?;
        writeln!(self.output, "{}\n", "*".repeat(55))?;
        writeln!(
            self.output,
            "Enter the players' names, or type 'C' or 'A' for a computer, or 'L' to load.\n"
        )?;

        let player1 = match self.prompt_name(Player::One)? {
            NameChoice::Load => return self.load(),
            NameChoice::Name(name) => name,
        };
        let player2 = loop {
            if let NameChoice::Name(name) = self.prompt_name(Player::Two)? {
                break name;
            }
        };

        Ok(GameState::new(player1, player2))
    }

    fn prompt_name(&mut self, player: Player) -> Result<NameChoice, PlayError> {
        loop {
            let entered = self.read_line(&format!("Please input Player {}'s name: ", player))?;
            if entered.is_empty() {
                continue;
            }

            let name = capitalize(&entered);
            if player == Player::One && name == LOAD_TAG {
                return Ok(NameChoice::Load);
            }

            match PlayerName::new(name) {
                Ok(name) => return Ok(NameChoice::Name(name)),
                Err(err) => writeln!(self.output, "Error: {}.", err)?,
            }
        }
    }

    fn load(&mut self) -> Result<GameState, PlayError> {
        let path = self.config.save_path.clone();
        let game = persist::load_game(&path)?;
        info!(path = %path.display(), "loaded saved game");
        writeln!(
            self.output,
            "Loaded {} vs {} from {}.",
            game.player1,
            game.player2,
            path.display()
        )?;
        Ok(game)
    }

    fn save(&mut self, game: &GameState) -> Result<(), PlayError> {
        let path = &self.config.save_path;
        match persist::save_game(path, game) {
            Ok(()) => {
                info!(path = %path.display(), "saved game");
                writeln!(self.output, "Game saved to {}.", path.display())?;
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not save game");
                writeln!(self.output, "Error: could not save game: {}.", err)?;
            }
        }
        Ok(())
    }

    /// Play `game` from its current position until neither player can move.
    pub fn play(&mut self, mut game: GameState) -> Result<GameState, PlayError> {
        let weights = self.config.weights;
        let controllers = [
            Controller::for_name(&game.player1, weights),
            Controller::for_name(&game.player2, weights),
        ];

        while !game.is_finished() {
            writeln!(self.output, "\n{}\n", game.board)?;

            let mover = game.mover;
            let controller = match mover {
                Player::One => &controllers[0],
                Player::Two => &controllers[1],
            };

            match controller {
                Controller::Computer(strategy) => {
                    writeln!(self.output, "Comp {} is thinking...", mover)?;
                    match strategy.suggest(&game.board, mover) {
                        Some(mv) => {
                            game.apply_move(mv)?;
                            info!(player = %mover, strategy = strategy.name(), %mv, "computer moved");
                            writeln!(self.output, "Comp {} chose to go {}", mover, mv)?;
                        }
                        None => {
                            game.pass();
                            writeln!(self.output, "Comp {} skipping go, no valid moves.", mover)?;
                        }
                    }
                }
                Controller::Human => self.human_turn(&mut game)?,
            }
        }

        self.report(&game)?;
        Ok(game)
    }

    fn human_turn(&mut self, game: &mut GameState) -> Result<(), PlayError> {
        let moves = game.get_moves();
        let name = game.name(game.mover).clone();

        if moves.is_empty() {
            writeln!(self.output, "{} skipping go, no valid moves.", name)?;
            game.pass();
            return Ok(());
        }

        writeln!(self.output, "{} to move.", name)?;
        loop {
            writeln!(self.output, "Valid moves are: {}", moves)?;
            let entered = self.read_line("Please enter a valid move: ")?;

            if entered.eq_ignore_ascii_case(SAVE_COMMAND) {
                self.save(game)?;
                continue;
            }

            match entered.parse::<Location>() {
                Ok(mv) if moves.contains(&mv) => {
                    game.apply_move(mv)?;
                    return Ok(());
                }
                Ok(_) => {
                    writeln!(self.output, "You inputted: {}", entered)?;
                    writeln!(self.output, "Not valid move, try again.")?;
                }
                Err(err) => {
                    writeln!(self.output, "You inputted: {}", entered)?;
                    writeln!(self.output, "Not valid move ({}), try again.", err)?;
                }
            }
        }
    }

    fn report(&mut self, game: &GameState) -> Result<(), PlayError> {
        writeln!(self.output, "\n{}\n", game.board)?;
        writeln!(self.output, "The end score is: {}", game.score())?;
        match game.winner() {
            Some(Player::One) => writeln!(self.output, "Player 1 has won.")?,
            Some(Player::Two) => writeln!(self.output, "Player 2 has won.")?,
            None => writeln!(self.output, "Draw")?,
        }
        Ok(())
    }
}
