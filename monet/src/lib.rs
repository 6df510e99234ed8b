//! A die with a stylized bias model and a Monte Carlo engine for a
//! ten-throw "keep it or roll again" game.

pub mod error;
pub mod prelude;
pub mod rules;
pub mod simulation;
pub mod statistics;
