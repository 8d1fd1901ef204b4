//! Filedrop - Core Library
//!
//! Record types, state containers and the file-manager controller
//! shared between frontends of the filedrop client.

pub mod controller;
pub mod error;
pub mod format;
pub mod state;
pub mod store;
pub mod types;

pub use controller::*;
pub use error::*;
pub use format::*;
pub use state::*;
pub use store::*;
pub use types::*;
