pub mod game;
pub mod integration;
