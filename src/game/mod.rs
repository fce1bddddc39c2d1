pub mod board;
pub mod deal;
pub mod hand;
pub mod history;
pub mod match_game;
pub mod player;
pub mod round;
pub mod tile;
