//! Text input widget state.

mod events;
mod state;

pub use events::InputEvent;
pub use state::{Input, InputId};
