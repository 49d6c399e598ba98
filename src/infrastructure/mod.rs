//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like
//! preference persistence, the contact submission transport, CSV export,
//! and the system clipboard.

pub mod persistence;
pub mod transport;
pub mod export;
pub mod clipboard;

pub use persistence::*;
pub use transport::*;
pub use export::*;
pub use clipboard::*;
