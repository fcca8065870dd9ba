pub mod app;
pub mod event;
pub mod game;
pub mod scores;
pub mod ui;
