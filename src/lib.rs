//! FOLIO - Terminal Portfolio Library
//!
//! A terminal-based personal portfolio application, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
