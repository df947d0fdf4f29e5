//! Bitmap output using resvg/usvg.
//!
//! The core hands SVG markup to the host's drawing surface. Hosts without an
//! SVG-capable surface can rasterize a [`Drawing`] here instead. Failures
//! belong to the surface, so they are reported as `None` rather than as
//! crate errors.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use super::Drawing;

/// Rasterizes a drawing so that its larger dimension is `size` pixels.
///
/// The drawing's own width/height only matter for their ratio; the viewBox
/// is scaled to fit. Color-bearing parts rendered with the inherit sentinel
/// come out black, since there is no surrounding context to inherit from.
///
/// Returns `None` if the markup cannot be parsed or `size` is zero.
pub fn rasterize(drawing: &Drawing, size: u32) -> Option<RgbaImage> {
    let markup = drawing.to_string();
    let tree = match Tree::from_str(&markup, &Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::debug!(error = %err, "drawing surface rejected markup");
            return None;
        }
    };

    let svg_size = tree.size();
    let scale = size as f32 / svg_size.width().max(svg_size.height());
    let width = (svg_size.width() * scale).ceil() as u32;
    let height = (svg_size.height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(width, height)?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    Some(pixmap_to_rgba_image(&pixmap))
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    RgbaImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
        let Some(pixel) = pixmap.pixel(x, y) else {
            return Rgba([0, 0, 0, 0]);
        };
        // tiny_skia stores premultiplied alpha
        let color = pixel.demultiply();
        Rgba([color.red(), color.green(), color.blue(), color.alpha()])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::glyphs;
    use crate::config::IconConfig;

    #[test]
    fn rasterizes_at_requested_size() {
        let drawing = glyphs::CABINET.renderer().render(&IconConfig::new().with_color("#0000ff"));
        let img = rasterize(&drawing, 64).unwrap();
        assert_eq!(img.dimensions(), (64, 64));
        assert!(
            img.pixels().any(|p| p[2] > 200 && p[3] > 0),
            "expected blue pixels"
        );
    }

    #[test]
    fn non_square_output_keeps_ratio() {
        let drawing = glyphs::THERMOSTAT.renderer().render(&IconConfig::new());
        let img = rasterize(&drawing, 66).unwrap();
        assert_eq!(img.height(), 66);
        assert_eq!(img.width(), 64);
    }

    #[test]
    fn malformed_attribute_names_still_rasterize() {
        let config = IconConfig::new()
            .with_attribute(r#"data-x="1" viewBox"#, "0 0 1 1")
            .with_attribute("data x", "1");
        let drawing = glyphs::CABINET.renderer().render(&config);
        let img = rasterize(&drawing, 32).unwrap();
        assert_eq!(img.dimensions(), (32, 32));
    }

    #[test]
    fn zero_size_yields_nothing() {
        let drawing = glyphs::CABINET.renderer().render(&IconConfig::new());
        assert!(rasterize(&drawing, 0).is_none());
    }
}
