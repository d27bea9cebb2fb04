//! Client library and terminal front end for the Terraria Helper chat service.
//!
//! [`ChatClient`] speaks the service's HTTP contract and holds the session
//! token; [`chat::ChatSession`] keeps the conversation log on top of any
//! [`ChatService`].

// Public modules
pub mod chat;
pub mod client;
pub mod client_logger;
pub mod error;
pub mod observability;
pub mod types;
pub mod utils;

// Re-exports
pub use client::{ChatClient, ChatService};
pub use client_logger::ClientLogger;
pub use error::{Error, Result};
pub use observability::register_biometrics;
pub use types::*;
