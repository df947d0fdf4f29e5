//! facility-icons: a compiled-in catalog of facility and equipment icons
//!
//! This crate provides a fixed set of named vector glyphs (cabinets, fire
//! alarms, pumps, servers, ...) and a registry that maps a catalog key to a
//! renderer. Hosts ask for an icon by name and render it at any size and
//! color without knowing anything about its geometry.
//!
//! # Example
//!
//! ```
//! use facility_icons::{IconConfig, registry};
//!
//! let alarm = registry::global().lookup("FireAlarm").unwrap();
//!
//! let drawing = alarm.render(&IconConfig::new().with_color("#ff0000").with_size(64.0));
//! assert_eq!(drawing.width(), Some("64"));
//! assert_eq!(drawing.height(), Some("64"));
//!
//! // Serialize to SVG markup for the host's drawing surface
//! let svg = drawing.to_string();
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! # Direct Import
//!
//! Callers that know the glyph at compile time can skip the registry:
//!
//! ```
//! use facility_icons::{IconConfig, catalog::glyphs};
//!
//! let svg = glyphs::THERMOSTAT.renderer().render_svg(&IconConfig::new().with_size(64.0));
//! assert!(svg.contains(r#"width="64" height="66""#));
//! ```
//!
//! # Palettes
//!
//! [`IconRegistry::entries`] walks the whole catalog, e.g. to build a picker:
//!
//! ```
//! use facility_icons::{IconConfig, registry};
//!
//! let config = IconConfig::new().with_size(24.0).with_attribute("class", "picker-item");
//! let palette: Vec<(&str, String)> = registry::global()
//!     .entries()
//!     .map(|(key, renderer)| (key, renderer.render_svg(&config)))
//!     .collect();
//!
//! assert_eq!(palette.len(), registry::global().len());
//! ```

mod config;
mod error;
mod geometry;

pub mod catalog;
pub mod registry;
pub mod render;

#[cfg(feature = "tsify")]
mod wasm;

pub use config::{Attributes, DEFAULT_SIZE, IconColor, IconConfig, IconSize};
pub use error::{CatalogError, RegistryError};
pub use geometry::{Canvas, Glyph, Paint, Primitive, Shape, Style};
pub use registry::{Entries, IconRegistry, MissPolicy, RegistryOptions};
pub use render::raster::rasterize;
pub use render::{Drawing, Element, IconRenderer, STRUCTURAL_ATTRIBUTES, SVG_NAMESPACE};

#[cfg(feature = "tsify")]
pub use wasm::{icon_keys, render_icon};
