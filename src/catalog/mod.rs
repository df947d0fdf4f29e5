//! The compiled-in glyph catalog.
//!
//! Every glyph is a `static` in [`glyphs`] and can be imported directly.
//! [`CATALOG`] lists all of them in publication order and is what the
//! built-in [`IconRegistry`](crate::IconRegistry) is assembled from.
//! [`PLACEHOLDER`] is deliberately not part of the catalog: it is the glyph
//! the registry falls back to for unknown keys.

/// Declares glyph statics and the `CATALOG` slice listing them.
///
/// Keys are checked for uniqueness when the registry is built, not here.
macro_rules! catalog {
    (
        $(
            $(#[$meta:meta])*
            $ident:ident = $key:literal, $canvas:expr, [ $($primitive:expr),+ $(,)? ];
        )+
    ) => {
        $(
            $(#[$meta])*
            pub static $ident: Glyph = Glyph {
                key: $key,
                canvas: $canvas,
                primitives: &[$($primitive),+],
            };
        )+

        /// Every published glyph, in publication order.
        pub static CATALOG: &[&Glyph] = &[$(&$ident),+];
    };
}

pub mod glyphs;

pub use glyphs::{CATALOG, PLACEHOLDER};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_glyph_is_valid() {
        for glyph in CATALOG {
            assert_eq!(glyph.validate(), Ok(()), "{}", glyph.key);
        }
        assert_eq!(PLACEHOLDER.validate(), Ok(()));
    }

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for glyph in CATALOG {
            assert!(seen.insert(glyph.key), "duplicate key {}", glyph.key);
        }
    }

    #[test]
    fn placeholder_is_not_published() {
        assert!(CATALOG.iter().all(|glyph| glyph.key != PLACEHOLDER.key));
    }

    #[test]
    fn canvases_are_the_usual_sizes() {
        for glyph in CATALOG {
            let canvas = glyph.canvas;
            let known = [(128.0, 128.0), (32.0, 32.0), (32.0, 33.0)];
            assert!(
                known.contains(&(canvas.width, canvas.height)),
                "{} uses an unexpected canvas {:?}",
                glyph.key,
                canvas
            );
        }
    }
}
