//! Glyph geometry types.
//!
//! A [`Glyph`] is plain, immutable drawing data: a native canvas and a list of
//! primitives. Every constructor here is a `const fn` so the whole catalog can
//! live in `static` items and be compiled into the binary.

use crate::error::CatalogError;
use crate::render::IconRenderer;

/// The native logical canvas of a glyph (its viewBox size).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    /// Creates a canvas with the given logical dimensions.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a square canvas.
    pub const fn square(side: f32) -> Self {
        Self { width: side, height: side }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Height divided by width.
    ///
    /// Rendered output keeps this ratio regardless of the requested size.
    pub fn aspect_ratio(&self) -> f64 {
        self.height as f64 / self.width as f64
    }

    /// The `viewBox` attribute value for this canvas.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    fn is_valid(&self) -> bool {
        positive(self.width) && positive(self.height)
    }
}

/// How a fill or stroke is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// Not painted.
    None,
    /// Painted with the configured icon color.
    Current,
    /// Painted with a color baked into the glyph.
    Fixed(&'static str),
}

/// Fixed presentation attributes of a single primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Paint,
    pub stroke: Paint,
    pub stroke_width: Option<f32>,
    pub fill_opacity: Option<f32>,
    /// Emits round line caps and joins.
    pub round: bool,
}

impl Style {
    /// Solid fill in the icon color, no stroke.
    pub const FILLED: Self = Self {
        fill: Paint::Current,
        stroke: Paint::None,
        stroke_width: None,
        fill_opacity: None,
        round: false,
    };
}

/// The shape of a drawing primitive, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Path {
        d: &'static str,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rx: Option<f32>,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
    },
    Ellipse {
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
    },
}

impl Shape {
    /// The SVG element name for this shape.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Path { .. } => "path",
            Self::Rect { .. } => "rect",
            Self::Circle { .. } => "circle",
            Self::Ellipse { .. } => "ellipse",
        }
    }

    fn defect(&self) -> Option<&'static str> {
        match *self {
            Self::Path { d } if d.trim().is_empty() => Some("empty path data"),
            Self::Rect { width, height, .. } if !positive(width) || !positive(height) => {
                Some("rectangle without area")
            }
            Self::Circle { r, .. } if !positive(r) => Some("circle without radius"),
            Self::Ellipse { rx, ry, .. } if !positive(rx) || !positive(ry) => {
                Some("ellipse without radius")
            }
            _ => None,
        }
    }
}

/// A single shape together with its fixed style.
///
/// Primitives are built with the `const` constructors and then refined:
///
/// ```
/// use facility_icons::{Paint, Primitive};
///
/// let bell = Primitive::path("M10 10h20").stroked(4.0);
/// assert_eq!(bell.style.stroke, Paint::Current);
/// assert_eq!(bell.style.stroke_width, Some(4.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub style: Style,
}

impl Primitive {
    pub const fn path(d: &'static str) -> Self {
        Self::filled(Shape::Path { d })
    }

    pub const fn rect(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::filled(Shape::Rect { x, y, width, height, rx: None })
    }

    pub const fn circle(cx: f32, cy: f32, r: f32) -> Self {
        Self::filled(Shape::Circle { cx, cy, r })
    }

    pub const fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32) -> Self {
        Self::filled(Shape::Ellipse { cx, cy, rx, ry })
    }

    const fn filled(shape: Shape) -> Self {
        Self { shape, style: Style::FILLED }
    }

    /// Outline only: no fill, stroked in the icon color with a fixed width.
    pub const fn stroked(self, width: f32) -> Self {
        Self {
            style: Style {
                fill: Paint::None,
                stroke: Paint::Current,
                stroke_width: Some(width),
                ..self.style
            },
            ..self
        }
    }

    /// Keeps the current fill and adds a stroke in the icon color.
    pub const fn with_outline(self, width: f32) -> Self {
        Self {
            style: Style {
                stroke: Paint::Current,
                stroke_width: Some(width),
                ..self.style
            },
            ..self
        }
    }

    /// Round line caps and joins.
    pub const fn round(self) -> Self {
        Self {
            style: Style { round: true, ..self.style },
            ..self
        }
    }

    pub const fn opacity(self, fill_opacity: f32) -> Self {
        Self {
            style: Style {
                fill_opacity: Some(fill_opacity),
                ..self.style
            },
            ..self
        }
    }

    /// Fills with a color that does not follow the icon color.
    pub const fn fixed_fill(self, color: &'static str) -> Self {
        Self {
            style: Style {
                fill: Paint::Fixed(color),
                ..self.style
            },
            ..self
        }
    }

    /// Strokes with a color that does not follow the icon color.
    pub const fn fixed_stroke(self, color: &'static str) -> Self {
        Self {
            style: Style {
                stroke: Paint::Fixed(color),
                ..self.style
            },
            ..self
        }
    }

    /// Sets the corner radius. Only meaningful for rectangles.
    pub const fn rounded(self, radius: f32) -> Self {
        let shape = match self.shape {
            Shape::Rect { x, y, width, height, .. } => Shape::Rect {
                x,
                y,
                width,
                height,
                rx: Some(radius),
            },
            other => other,
        };
        Self { shape, ..self }
    }
}

/// One named glyph: catalog key, native canvas and drawing primitives.
#[derive(Debug, PartialEq)]
pub struct Glyph {
    pub key: &'static str,
    pub canvas: Canvas,
    pub primitives: &'static [Primitive],
}

impl Glyph {
    pub const fn new(key: &'static str, canvas: Canvas, primitives: &'static [Primitive]) -> Self {
        Self { key, canvas, primitives }
    }

    /// Returns a renderer for this glyph.
    ///
    /// This is the direct-import path for callers that know the glyph at
    /// compile time and do not need the registry.
    pub const fn renderer(&'static self) -> IconRenderer {
        IconRenderer::new(self)
    }

    /// Checks that the glyph carries usable geometry.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.key.is_empty() {
            return Err(CatalogError::EmptyKey);
        }
        if !self.canvas.is_valid() {
            return Err(CatalogError::InvalidCanvas {
                key: self.key.to_string(),
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        if self.primitives.is_empty() {
            return Err(CatalogError::MissingGeometry { key: self.key.to_string() });
        }
        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(reason) = primitive.shape.defect() {
                return Err(CatalogError::InvalidPrimitive {
                    key: self.key.to_string(),
                    index,
                    reason,
                });
            }
        }
        Ok(())
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    static GOOD: Glyph = Glyph {
        key: "Good",
        canvas: Canvas::square(32.0),
        primitives: &[Primitive::rect(4.0, 4.0, 24.0, 24.0).rounded(2.0).stroked(2.0)],
    };

    static BROKEN: Glyph = Glyph {
        key: "Broken",
        canvas: Canvas::square(32.0),
        primitives: &[Primitive::circle(1.0, 1.0, 2.0), Primitive::path("  ")],
    };

    #[test]
    fn canvas_aspect_ratio() {
        assert!(Canvas::square(128.0).is_square());
        let tall = Canvas::new(32.0, 33.0);
        assert!(!tall.is_square());
        assert_eq!(tall.aspect_ratio(), 33.0 / 32.0);
        assert_eq!(tall.view_box(), "0 0 32 33");
    }

    #[test]
    fn builders_compose() {
        let p = Primitive::rect(0.0, 0.0, 10.0, 5.0).rounded(1.5).opacity(0.4);
        assert_eq!(
            p.shape,
            Shape::Rect { x: 0.0, y: 0.0, width: 10.0, height: 5.0, rx: Some(1.5) }
        );
        assert_eq!(p.style.fill, Paint::Current);
        assert_eq!(p.style.fill_opacity, Some(0.4));

        // rounding a circle is a no-op
        let c = Primitive::circle(1.0, 1.0, 1.0).rounded(3.0);
        assert_eq!(c.shape, Shape::Circle { cx: 1.0, cy: 1.0, r: 1.0 });
    }

    #[test]
    fn valid_glyph_passes() {
        assert_eq!(GOOD.validate(), Ok(()));
    }

    #[test]
    fn missing_geometry_is_rejected() {
        let glyph = Glyph::new("Empty", Canvas::square(32.0), &[]);
        assert_eq!(
            glyph.validate(),
            Err(CatalogError::MissingGeometry { key: "Empty".into() })
        );
    }

    #[test]
    fn degenerate_primitives_are_rejected() {
        assert_eq!(
            BROKEN.validate(),
            Err(CatalogError::InvalidPrimitive {
                key: "Broken".into(),
                index: 1,
                reason: "empty path data",
            })
        );
    }

    #[test]
    fn bad_canvas_and_key_are_rejected() {
        let glyph = Glyph::new("Flat", Canvas::new(32.0, 0.0), GOOD.primitives);
        assert!(matches!(glyph.validate(), Err(CatalogError::InvalidCanvas { .. })));

        let glyph = Glyph::new("", Canvas::square(32.0), GOOD.primitives);
        assert_eq!(glyph.validate(), Err(CatalogError::EmptyKey));
    }
}
