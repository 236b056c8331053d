pub mod board;
pub mod error;
pub mod filter;
pub mod http;
pub mod orchestrator;
pub mod registry;
pub mod state;

pub use board::{CategoryLists, ModelBoard, PLACEHOLDER_UID};
pub use error::ConsoleError;
pub use http::{auth, ApiClient};
pub use orchestrator::{LaunchOptions, LaunchOutcome, LogOpener, Orchestrator, UiOpener};
pub use state::ConsoleState;
