//! Generic glyph rendering.
//!
//! One [`IconRenderer`] implementation serves every glyph in the catalog. It
//! interprets a [`Glyph`] record under an [`IconConfig`] and produces a
//! [`Drawing`], an owned SVG element tree that can be inspected, compared, or
//! serialized to markup with `to_string()`.
//!
//! # Output Shape
//!
//! ```text
//! <svg xmlns viewBox="0 0 W H" width height fill="none" ...extra attributes>
//!     <path|rect|circle|ellipse ...fixed geometry, color-bearing paints/>
//!     ...
//! </svg>
//! ```
//!
//! The viewBox comes from the glyph and never depends on the configuration.
//! Extra attributes are merged onto the root, except for the structural ones
//! listed in [`STRUCTURAL_ATTRIBUTES`], which always keep their computed value.

pub mod raster;

use std::fmt;

use crate::config::{IconConfig, IconColor};
use crate::geometry::{Canvas, Glyph, Paint, Primitive, Shape};

/// SVG namespace emitted on every root element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Root attributes caller-supplied attributes can never override.
pub const STRUCTURAL_ATTRIBUTES: [&str; 4] = ["xmlns", "viewBox", "width", "height"];

// ============================================================================
// Element
// ============================================================================

/// A single SVG element with ordered attributes and child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: &'static str,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Creates an element with no attributes or children.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The element's tag name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Looks up an attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the attributes in emission order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Sets an attribute, replacing an existing value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    fn with(mut self, name: &str, value: impl ToString) -> Self {
        self.set(name, value.to_string());
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape_attribute(value))?;
        }
        if self.children.is_empty() {
            return f.write_str("/>");
        }
        f.write_str(">")?;
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.name)
    }
}

/// Whether `name` can be written as an attribute name without breaking the tag.
fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '=' | '<' | '>' | '/' | '&'))
}

/// Escapes a value for use inside a double-quoted XML attribute.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ============================================================================
// Drawing
// ============================================================================

/// The output of a renderer: a complete `<svg>` tree for one glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawing {
    root: Element,
}

impl Drawing {
    /// The outer `<svg>` container.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Shorthand for an attribute on the outer container.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.root.attribute(name)
    }

    /// The drawing primitives, in authored order.
    pub fn primitives(&self) -> &[Element] {
        self.root.children()
    }

    pub fn view_box(&self) -> Option<&str> {
        self.attribute("viewBox")
    }

    pub fn width(&self) -> Option<&str> {
        self.attribute("width")
    }

    pub fn height(&self) -> Option<&str> {
        self.attribute("height")
    }
}

impl fmt::Display for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}

// ============================================================================
// IconRenderer
// ============================================================================

/// Renders one specific glyph.
///
/// Renderers are cheap `Copy` handles to static glyph data. They come from
/// the [`IconRegistry`](crate::IconRegistry) or directly from a glyph:
///
/// ```
/// use facility_icons::{IconConfig, catalog::glyphs};
///
/// let drawing = glyphs::FIRE_ALARM.renderer().render(&IconConfig::new().with_size(64.0));
/// assert_eq!(drawing.width(), Some("64"));
/// assert_eq!(drawing.view_box(), Some("0 0 128 128"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconRenderer {
    glyph: &'static Glyph,
}

impl IconRenderer {
    pub const fn new(glyph: &'static Glyph) -> Self {
        Self { glyph }
    }

    /// The catalog key of the glyph this renderer draws.
    pub fn key(&self) -> &'static str {
        self.glyph.key
    }

    pub fn glyph(&self) -> &'static Glyph {
        self.glyph
    }

    pub fn canvas(&self) -> Canvas {
        self.glyph.canvas
    }

    /// Renders the glyph with the given configuration.
    ///
    /// Pure and deterministic: equal configurations yield equal drawings.
    pub fn render(&self, config: &IconConfig) -> Drawing {
        let canvas = self.glyph.canvas;
        let (width, height) = config.size.dimensions(canvas.aspect_ratio());

        let mut root = Element::new("svg")
            .with("xmlns", SVG_NAMESPACE)
            .with("viewBox", canvas.view_box())
            .with("width", width);
        if let Some(height) = height {
            root.set("height", height);
        }
        root.set("fill", "none");

        for (name, value) in &config.extra_attributes {
            if STRUCTURAL_ATTRIBUTES.contains(&name.as_str()) {
                tracing::debug!(
                    glyph = self.glyph.key,
                    attribute = name.as_str(),
                    "ignoring structural attribute override"
                );
                continue;
            }
            if !is_attribute_name(name) {
                tracing::debug!(
                    glyph = self.glyph.key,
                    attribute = name.as_str(),
                    "ignoring malformed attribute name"
                );
                continue;
            }
            root.set(name.clone(), value.clone());
        }

        for primitive in self.glyph.primitives {
            root.push(render_primitive(primitive, &config.color));
        }

        Drawing { root }
    }

    /// Renders the glyph straight to SVG markup.
    pub fn render_svg(&self, config: &IconConfig) -> String {
        self.render(config).to_string()
    }
}

fn render_primitive(primitive: &Primitive, color: &IconColor) -> Element {
    let element = Element::new(primitive.shape.tag());
    let mut element = match primitive.shape {
        Shape::Path { d } => element.with("d", d),
        Shape::Rect { x, y, width, height, rx } => {
            let mut element = element
                .with("x", x)
                .with("y", y)
                .with("width", width)
                .with("height", height);
            if let Some(rx) = rx {
                element.set("rx", rx.to_string());
            }
            element
        }
        Shape::Circle { cx, cy, r } => element.with("cx", cx).with("cy", cy).with("r", r),
        Shape::Ellipse { cx, cy, rx, ry } => element
            .with("cx", cx)
            .with("cy", cy)
            .with("rx", rx)
            .with("ry", ry),
    };

    let style = primitive.style;
    element.set("fill", paint_value(style.fill, color));
    if style.stroke != Paint::None {
        element.set("stroke", paint_value(style.stroke, color));
    }
    if let Some(width) = style.stroke_width {
        element.set("stroke-width", width.to_string());
    }
    if let Some(opacity) = style.fill_opacity {
        element.set("fill-opacity", opacity.to_string());
    }
    if style.round {
        element.set("stroke-linecap", "round");
        element.set("stroke-linejoin", "round");
    }
    element
}

fn paint_value(paint: Paint, color: &IconColor) -> String {
    match paint {
        Paint::None => "none".to_string(),
        Paint::Current => color.as_paint().to_string(),
        Paint::Fixed(fixed) => fixed.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::glyphs;
    use pretty_assertions::assert_eq;

    static TALL: Glyph = Glyph {
        key: "Tall",
        canvas: Canvas::new(32.0, 33.0),
        primitives: &[
            Primitive::rect(4.0, 2.0, 24.0, 29.0).rounded(3.0).stroked(2.0),
            Primitive::circle(16.0, 12.0, 4.0),
            Primitive::ellipse(16.0, 24.0, 6.0, 2.0).fixed_fill("#d33").opacity(0.5),
        ],
    };

    #[test]
    fn root_carries_structural_attributes() {
        let drawing = TALL.renderer().render(&IconConfig::new());
        assert_eq!(drawing.root().name(), "svg");
        assert_eq!(drawing.attribute("xmlns"), Some(SVG_NAMESPACE));
        assert_eq!(drawing.view_box(), Some("0 0 32 33"));
        assert_eq!(drawing.primitives().len(), 3);
    }

    #[test]
    fn default_config_equals_explicit_defaults() {
        let implicit = TALL.renderer().render(&IconConfig::new());
        let explicit = TALL
            .renderer()
            .render(&IconConfig::new().with_color(IconColor::Inherit).with_size(32.0));
        assert_eq!(implicit, explicit);
        assert_eq!(implicit.width(), Some("32"));
    }

    #[test]
    fn non_square_glyph_keeps_its_ratio() {
        let drawing = TALL.renderer().render(&IconConfig::new().with_size(64.0));
        assert_eq!(drawing.width(), Some("64"));
        assert_eq!(drawing.height(), Some("66"));
        assert_eq!(drawing.view_box(), Some("0 0 32 33"));
    }

    #[test]
    fn unreadable_length_on_non_square_glyph_omits_height() {
        let drawing = TALL.renderer().render(&IconConfig::new().with_size("min(10vw, 3em)"));
        assert_eq!(drawing.width(), Some("min(10vw, 3em)"));
        assert_eq!(drawing.height(), None);
    }

    #[test]
    fn color_reaches_only_color_bearing_paints() {
        let drawing = TALL.renderer().render(&IconConfig::new().with_color("#00ff00"));
        let [frame, dot, shadow] = drawing.primitives() else {
            panic!("expected three primitives");
        };

        assert_eq!(frame.attribute("fill"), Some("none"));
        assert_eq!(frame.attribute("stroke"), Some("#00ff00"));
        assert_eq!(frame.attribute("stroke-width"), Some("2"));
        assert_eq!(frame.attribute("rx"), Some("3"));

        assert_eq!(dot.attribute("fill"), Some("#00ff00"));
        assert_eq!(dot.attribute("stroke"), None);

        assert_eq!(shadow.attribute("fill"), Some("#d33"));
        assert_eq!(shadow.attribute("fill-opacity"), Some("0.5"));
    }

    #[test]
    fn inherit_renders_current_color() {
        let drawing = TALL.renderer().render(&IconConfig::new());
        assert_eq!(drawing.primitives()[1].attribute("fill"), Some("currentColor"));
    }

    #[test]
    fn extra_attributes_pass_through() {
        let config = IconConfig::new()
            .with_attribute("data-testid", "tall-icon")
            .with_attribute("onclick", "select('Tall')")
            .with_attribute("fill", "red");
        let drawing = TALL.renderer().render(&config);

        assert_eq!(drawing.attribute("data-testid"), Some("tall-icon"));
        assert_eq!(drawing.attribute("onclick"), Some("select('Tall')"));
        // cosmetic root attributes may be overridden
        assert_eq!(drawing.attribute("fill"), Some("red"));
    }

    #[test]
    fn structural_attributes_cannot_be_overridden() {
        let config = IconConfig::new()
            .with_size(48.0)
            .with_attribute("viewBox", "0 0 1 1")
            .with_attribute("width", "1")
            .with_attribute("xmlns", "urn:bogus");
        let drawing = TALL.renderer().render(&config);

        assert_eq!(drawing.view_box(), Some("0 0 32 33"));
        assert_eq!(drawing.width(), Some("48"));
        assert_eq!(drawing.height(), Some("49.5"));
        assert_eq!(drawing.attribute("xmlns"), Some(SVG_NAMESPACE));
        assert_eq!(drawing.root().attributes().filter(|(n, _)| *n == "viewBox").count(), 1);
    }

    #[test]
    fn malformed_attribute_names_are_dropped() {
        let config = IconConfig::new()
            .with_attribute(r#"data-x="1" viewBox"#, "0 0 1 1")
            .with_attribute("data x", "1")
            .with_attribute("", "1")
            .with_attribute("data-ok", "1");
        let drawing = glyphs::CABINET.renderer().render(&config);
        let svg = drawing.to_string();

        assert_eq!(svg.matches("viewBox=").count(), 1);
        assert!(svg.contains(r#"viewBox="0 0 128 128""#));
        assert_eq!(drawing.attribute("data-ok"), Some("1"));
        assert_eq!(drawing.attribute("data x"), None);
        assert_eq!(drawing.root().attributes().count(), 6);
    }

    #[test]
    fn rendering_is_deterministic() {
        let config = IconConfig::new().with_color("teal").with_size("3em");
        assert_eq!(TALL.renderer().render(&config), TALL.renderer().render(&config.clone()));
    }

    #[test]
    fn serializes_to_markup() {
        let svg = TALL
            .renderer()
            .render_svg(&IconConfig::new().with_attribute("aria-label", "a \"tall\" <icon>"));
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 33" width="32" height="33" fill="none""#
        ));
        assert!(svg.contains(r#"aria-label="a &quot;tall&quot; &lt;icon&gt;""#));
        assert!(svg.contains(
            r#"<rect x="4" y="2" width="24" height="29" rx="3" fill="none" stroke="currentColor" stroke-width="2"/>"#
        ));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn fire_alarm_scenario() {
        let drawing = glyphs::FIRE_ALARM
            .renderer()
            .render(&IconConfig::new().with_color("#ff0000").with_size(64.0));

        assert_eq!(drawing.width(), Some("64"));
        assert_eq!(drawing.height(), Some("64"));

        let bell = &drawing.primitives()[0];
        assert_eq!(bell.attribute("stroke"), Some("#ff0000"));
        assert_eq!(bell.attribute("stroke-width"), Some("4"));

        for element in drawing.primitives() {
            let painted = [element.attribute("fill"), element.attribute("stroke")];
            assert!(painted.contains(&Some("#ff0000")), "{element} ignores the icon color");
        }
    }
}
