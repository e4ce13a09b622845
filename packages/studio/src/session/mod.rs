//! Operator session: explicit state plus the actions that mutate it.

mod state;
mod studio;

pub use state::Session;
pub use studio::Studio;
