//! Softpipe core: error type, entity ids, and shared traits.

pub mod error;
pub mod id;
pub mod traits;

pub use error::{Result, SoftpipeError};
pub use id::EntityId;
pub use traits::Validate;
