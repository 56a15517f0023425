//! Host-facing authentication attribute model and domain identifiers.

pub mod id;
pub mod result;
pub mod secret;

pub use id::*;
pub use result::*;
pub use secret::*;
