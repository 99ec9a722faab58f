use crate::error::Result;

/// Validate structural integrity of scene data before it reaches the renderer.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
