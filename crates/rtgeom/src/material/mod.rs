//! Materials are owned by the scene and only referenced here, through [MaterialId].
//!
//! Shading is done elsewhere, a hit record only carries the handle along.

use derive_more::Display;

/// Index of a material in the scene material table.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display("material#{_0}")]
pub struct MaterialId(pub usize);

#[derive(Debug, Clone, Default)]
pub struct MaterialDescriptor {
    pub label: Option<String>,
}
