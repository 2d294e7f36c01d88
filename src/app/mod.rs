//! Console front end: command grammar, scoreboard and the session loop

pub mod command;
pub mod scoreboard;
pub mod session;

pub use session::Session;
