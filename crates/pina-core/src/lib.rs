//! Domain layer for the Pina app: the LPNM pineapple storefront core.
//!
//! Everything here is pure and synchronous: the screen router, the
//! role-gated menu, the session model, the chat log, and the Pine-Bot
//! keyword responder. Live data enters only through the adapter contracts in
//! [`feed`]; no module in this crate performs I/O.

pub mod bot;
pub mod chat;
pub mod config;
pub mod error;
pub mod feed;
pub mod gate;
pub mod navigation;
pub mod screen;
pub mod session;

// Re-export common error type
pub use error::{PinaError, Result};
pub use navigation::{NavigationAction, Router, SaleIntent, transition};
pub use screen::Screen;
pub use session::{Role, Session};
