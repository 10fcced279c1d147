mod chat;
mod ranges;
mod state;

pub use chat::{AssistantStatus, ChatUpdate};
pub(crate) use state::Confirm;
pub use state::{AppState, EntryPurpose, InputAction, Notice, Scene, TextEntry};
