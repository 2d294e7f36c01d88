//! Small shared helpers

pub mod ratio;
pub mod time;
