//! The icon registry: a validated, frozen mapping from catalog key to renderer.
//!
//! Construction checks every glyph and rejects duplicate keys, so a registry
//! that exists is always consistent. After construction there is no way to
//! add or remove entries.
//!
//! # Lookup Misses
//!
//! What [`IconRegistry::lookup`] does for an unknown key is decided by the
//! registry's [`MissPolicy`]:
//!
//! - [`MissPolicy::Fallback`] (default) returns the fallback renderer, the
//!   [`PLACEHOLDER`](crate::catalog::PLACEHOLDER) glyph unless another one was
//!   supplied, so a missing icon degrades to a visible placeholder.
//! - [`MissPolicy::Strict`] returns [`RegistryError::NotFound`].
//!
//! Neither policy ever hands back an unrelated catalog glyph.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::catalog::{CATALOG, PLACEHOLDER};
use crate::error::{CatalogError, RegistryError};
use crate::geometry::Glyph;
use crate::render::IconRenderer;

// ============================================================================
// Options
// ============================================================================

/// What a lookup does when the key is not in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum MissPolicy {
    /// Return the fallback renderer.
    #[default]
    Fallback,
    /// Return [`RegistryError::NotFound`].
    Strict,
}

/// Serializable registry settings.
///
/// ```
/// use facility_icons::{MissPolicy, RegistryOptions};
///
/// let options = RegistryOptions::from_json(r#"{ "missPolicy": "strict" }"#).unwrap();
/// assert_eq!(options.miss_policy, MissPolicy::Strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct RegistryOptions {
    pub miss_policy: MissPolicy,
}

impl RegistryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_miss_policy(mut self, policy: MissPolicy) -> Self {
        self.miss_policy = policy;
        self
    }

    /// Deserializes options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes options to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ============================================================================
// IconRegistry
// ============================================================================

/// Read-only lookup table from catalog key to [`IconRenderer`].
///
/// # Example
///
/// ```
/// use facility_icons::{IconConfig, IconRegistry};
///
/// let registry = IconRegistry::builtin().unwrap();
/// let alarm = registry.lookup("FireAlarm").unwrap();
/// let svg = alarm.render_svg(&IconConfig::new().with_color("#ff0000").with_size(64.0));
/// assert!(svg.contains(r#"width="64""#));
///
/// // unknown keys degrade to the placeholder glyph
/// let missing = registry.lookup("doesNotExist").unwrap();
/// assert_eq!(missing.key(), "Placeholder");
/// ```
#[derive(Debug, Clone)]
pub struct IconRegistry {
    /// Renderers in catalog order.
    renderers: Vec<IconRenderer>,
    /// Key to index into `renderers`.
    index: HashMap<&'static str, usize>,
    fallback: IconRenderer,
    options: RegistryOptions,
}

impl IconRegistry {
    /// Builds a registry from the given glyphs.
    ///
    /// Fails on the first glyph that does not validate or whose key was
    /// already taken.
    pub fn new(glyphs: &[&'static Glyph], options: RegistryOptions) -> Result<Self, CatalogError> {
        Self::with_fallback(glyphs, &PLACEHOLDER, options)
    }

    /// Builds a registry that falls back to `fallback` for unknown keys.
    pub fn with_fallback(
        glyphs: &[&'static Glyph],
        fallback: &'static Glyph,
        options: RegistryOptions,
    ) -> Result<Self, CatalogError> {
        fallback.validate()?;

        let mut renderers = Vec::with_capacity(glyphs.len());
        let mut index = HashMap::with_capacity(glyphs.len());
        for glyph in glyphs {
            glyph.validate()?;
            if index.insert(glyph.key, renderers.len()).is_some() {
                return Err(CatalogError::DuplicateKey { key: glyph.key.to_string() });
            }
            renderers.push(glyph.renderer());
        }

        tracing::debug!(
            glyphs = renderers.len(),
            fallback = fallback.key,
            policy = ?options.miss_policy,
            "icon registry built"
        );

        Ok(Self {
            renderers,
            index,
            fallback: fallback.renderer(),
            options,
        })
    }

    /// Builds a registry from the compiled-in [`CATALOG`] with default options.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(CATALOG, RegistryOptions::default())
    }

    /// Returns the renderer registered for `key`, applying the miss policy
    /// when there is none.
    pub fn lookup(&self, key: &str) -> Result<IconRenderer, RegistryError> {
        if let Some(renderer) = self.get(key) {
            return Ok(renderer);
        }
        match self.options.miss_policy {
            MissPolicy::Fallback => {
                tracing::warn!(key, fallback = self.fallback.key(), "unknown icon key");
                Ok(self.fallback)
            }
            MissPolicy::Strict => Err(RegistryError::NotFound { key: key.to_string() }),
        }
    }

    /// Returns the renderer registered for `key`, ignoring the miss policy.
    pub fn get(&self, key: &str) -> Option<IconRenderer> {
        self.index.get(key).map(|&i| self.renderers[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Every catalog key, in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.renderers.iter().map(|renderer| renderer.key())
    }

    /// Every `(key, renderer)` pair, in catalog order.
    ///
    /// Each call starts a fresh traversal.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.renderers.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// The renderer returned for unknown keys under [`MissPolicy::Fallback`].
    pub fn fallback(&self) -> IconRenderer {
        self.fallback
    }

    pub fn policy(&self) -> MissPolicy {
        self.options.miss_policy
    }

    pub fn options(&self) -> RegistryOptions {
        self.options
    }
}

impl<'a> IntoIterator for &'a IconRegistry {
    type Item = (&'static str, IconRenderer);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Iterator returned by [`IconRegistry::entries`].
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: std::slice::Iter<'a, IconRenderer>,
}

impl Iterator for Entries<'_> {
    type Item = (&'static str, IconRenderer);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|renderer| (renderer.key(), *renderer))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}

// ============================================================================
// Process-wide registry
// ============================================================================

static GLOBAL: OnceLock<Result<IconRegistry, CatalogError>> = OnceLock::new();

/// The process-wide registry over the compiled-in catalog.
///
/// Built on first access, shared by every caller afterwards.
pub fn try_global() -> Result<&'static IconRegistry, CatalogError> {
    GLOBAL.get_or_init(IconRegistry::builtin).as_ref().map_err(Clone::clone)
}

/// Like [`try_global`], but treats an invalid compiled-in catalog as fatal.
///
/// # Panics
///
/// Panics if the compiled-in catalog fails validation. The catalog is fixed
/// at build time, so this only happens in a defective build.
pub fn global() -> &'static IconRegistry {
    match try_global() {
        Ok(registry) => registry,
        Err(err) => panic!("compiled-in icon catalog is invalid: {err}"),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::glyphs;
    use crate::config::IconConfig;
    use crate::geometry::{Canvas, Primitive};
    use std::collections::HashSet;

    static CABINET_AGAIN: Glyph = Glyph {
        key: "Cabinet",
        canvas: Canvas::square(32.0),
        primitives: &[Primitive::rect(2.0, 2.0, 28.0, 28.0)],
    };

    static HOLLOW: Glyph = Glyph {
        key: "Hollow",
        canvas: Canvas::square(32.0),
        primitives: &[],
    };

    fn strict() -> IconRegistry {
        IconRegistry::new(CATALOG, RegistryOptions::new().with_miss_policy(MissPolicy::Strict))
            .unwrap()
    }

    #[test]
    fn builtin_registry_covers_the_catalog() {
        let registry = IconRegistry::builtin().unwrap();
        assert_eq!(registry.len(), CATALOG.len());
        assert!(!registry.is_empty());
        assert!(registry.contains("Cabinet"));
        assert!(registry.contains("FireAlarm"));
        assert!(!registry.contains("fireAlarm"), "keys are case-sensitive");
    }

    #[test]
    fn every_key_resolves_to_its_own_renderer() {
        let registry = strict();
        for key in registry.keys() {
            let renderer = registry.lookup(key).unwrap();
            assert_eq!(renderer.key(), key);
        }
    }

    #[test]
    fn keys_are_unique() {
        let registry = IconRegistry::builtin().unwrap();
        let keys: Vec<_> = registry.keys().collect();
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(keys.len(), unique.len());
    }

    #[test]
    fn duplicate_keys_abort_construction() {
        let glyphs: [&'static Glyph; 3] = [&glyphs::CABINET, &glyphs::DOOR, &CABINET_AGAIN];
        let err = IconRegistry::new(&glyphs, RegistryOptions::default()).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateKey { key: "Cabinet".into() });
    }

    #[test]
    fn missing_geometry_aborts_construction() {
        let glyphs: [&'static Glyph; 2] = [&glyphs::DOOR, &HOLLOW];
        let err = IconRegistry::new(&glyphs, RegistryOptions::default()).unwrap_err();
        assert_eq!(err, CatalogError::MissingGeometry { key: "Hollow".into() });
    }

    #[test]
    fn invalid_fallback_aborts_construction() {
        let err = IconRegistry::with_fallback(CATALOG, &HOLLOW, RegistryOptions::default())
            .unwrap_err();
        assert_eq!(err, CatalogError::MissingGeometry { key: "Hollow".into() });
    }

    #[test]
    fn unknown_key_falls_back_to_placeholder() {
        let registry = IconRegistry::builtin().unwrap();
        assert_eq!(registry.policy(), MissPolicy::Fallback);

        let renderer = registry.lookup("doesNotExist").unwrap();
        assert_eq!(renderer.key(), PLACEHOLDER.key);
        assert_eq!(renderer, registry.fallback());
        assert!(registry.get("doesNotExist").is_none());
    }

    #[test]
    fn custom_fallback_is_used() {
        let registry =
            IconRegistry::with_fallback(CATALOG, &glyphs::FIRST_AID, RegistryOptions::default())
                .unwrap();
        assert_eq!(registry.lookup("Unknown").unwrap().key(), "FirstAid");
    }

    #[test]
    fn strict_registry_reports_not_found() {
        let registry = strict();
        assert_eq!(
            registry.lookup("doesNotExist"),
            Err(RegistryError::NotFound { key: "doesNotExist".into() })
        );
        assert!(registry.lookup("Cabinet").is_ok());
    }

    #[test]
    fn entries_are_restartable() {
        let registry = IconRegistry::builtin().unwrap();
        let first: Vec<_> = registry.entries().map(|(key, _)| key).collect();
        let second: Vec<_> = registry.entries().map(|(key, _)| key).collect();
        assert_eq!(first, second);
        assert_eq!(registry.entries().len(), registry.len());

        for (key, renderer) in &registry {
            assert_eq!(renderer.key(), key);
        }
    }

    #[test]
    fn entries_render_a_full_palette() {
        let registry = IconRegistry::builtin().unwrap();
        let config = IconConfig::new().with_size(24.0);
        for (key, renderer) in registry.entries() {
            let drawing = renderer.render(&config);
            assert_eq!(drawing.width(), Some("24"), "{key}");
            assert!(!drawing.primitives().is_empty(), "{key}");
        }
    }

    #[test]
    fn fire_alarm_lookup_scenario() {
        let renderer = global().lookup("FireAlarm").unwrap();
        let drawing = renderer.render(&IconConfig::new().with_color("#ff0000").with_size(64.0));
        assert_eq!(drawing.width(), Some("64"));
        assert_eq!(drawing.height(), Some("64"));
        assert_eq!(drawing.primitives()[0].attribute("stroke-width"), Some("4"));
    }

    #[test]
    fn global_registry_is_shared() {
        let a = global();
        let b = try_global().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn concurrent_lookups() {
        let handles: Vec<_> = ["Cabinet", "Fan", "Server", "nope"]
            .into_iter()
            .map(|key| std::thread::spawn(move || global().lookup(key).map(|r| r.key())))
            .collect();
        let keys: Vec<_> = handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect();
        assert_eq!(keys, ["Cabinet", "Fan", "Server", "Placeholder"]);
    }

    #[test]
    fn options_json() {
        assert_eq!(RegistryOptions::new().to_json().unwrap(), r#"{"missPolicy":"fallback"}"#);
        assert_eq!(RegistryOptions::from_json("{}").unwrap(), RegistryOptions::default());
    }
}
