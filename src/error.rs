//! Error types for catalog construction and icon lookup.

use thiserror::Error;

/// A defect in the compiled-in glyph catalog.
///
/// These are raised while an [`IconRegistry`](crate::IconRegistry) is being
/// built. There is no partial catalog: any of these aborts construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Two glyphs share the same catalog key.
    #[error("duplicate catalog key `{key}`")]
    DuplicateKey { key: String },

    /// A glyph was registered with an empty key.
    #[error("glyph registered with an empty catalog key")]
    EmptyKey,

    /// The glyph's native canvas has a zero, negative or non-finite dimension.
    #[error("glyph `{key}` has an invalid canvas {width}x{height}")]
    InvalidCanvas { key: String, width: f32, height: f32 },

    /// The glyph has no drawing primitives at all.
    #[error("glyph `{key}` has no geometry")]
    MissingGeometry { key: String },

    /// One of the glyph's primitives is empty or degenerate.
    #[error("glyph `{key}` primitive #{index} is invalid: {reason}")]
    InvalidPrimitive {
        key: String,
        index: usize,
        reason: &'static str,
    },
}

/// A recoverable failure at lookup time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The key is not part of the catalog and the registry is in strict mode.
    #[error("no icon registered under `{key}`")]
    NotFound { key: String },
}
