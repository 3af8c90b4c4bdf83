mod confirm;
mod errors;
mod event;
mod notice;
mod opentelemetry;
mod params;
mod session;
mod state;
mod types;

pub use confirm::{AlwaysConfirm, ConfirmGuard, ConfirmPrompt};
pub use errors::ChatError;
pub use event::Event;
pub use notice::{Channel, Notice, Severity};
pub use params::ChatSessionParams;
pub use session::ChatSession;
pub use state::ChatState;
pub use types::*;
