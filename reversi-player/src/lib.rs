//! Computer players and console play for `reversi-core`.
//!
//! Both computer players are greedy, single-ply evaluators:
//!
//!  - [`Greedy`] picks the move that most improves the score right away.
//!  - [`Weighted`] ranks moves by position: corners and sides are good,
//!    handing the opponent corners and sides is bad.
//!
//! [`Console`] runs a full game over any reader and writer.

pub mod config;
pub mod console;
pub mod strategy;

mod greedy;
mod weighted;

pub use config::{AppConfig, ConfigError};
pub use console::{Console, PlayError};
pub use greedy::{suggest_greedy, Greedy};
pub use strategy::{Controller, Strategy};
pub use weighted::{suggest_weighted, Weighted, Weights};
