//! Library entry for launchgrid exposing the launcher engine for integration tests.

pub mod app;
pub mod args;
pub mod changelog;
pub mod errors;
pub mod events;
pub mod logic;
pub mod sources;
pub mod state;
pub mod storage;
pub mod theme;
pub mod util;
