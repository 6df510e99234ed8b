pub mod dice;
pub mod strategy;
