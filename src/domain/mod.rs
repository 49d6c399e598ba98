pub mod models;
pub mod carousel;
pub mod typewriter;
pub mod contact;
pub mod share;
pub mod errors;

pub use models::*;
pub use carousel::*;
pub use typewriter::*;
pub use contact::*;
pub use share::*;
pub use errors::*;
