// src/registry.rs

//! Name resolution for color maps.
//!
//! The sampler never reaches for a global registry; it is handed a
//! [`ColorMapResolver`]. [`BuiltinRegistry`] is the production implementation, tests
//! pass small fakes.

use std::collections::HashMap;
use std::sync::Arc;

use log::trace;
use once_cell::sync::Lazy;

use crate::colormap::data::BUILTINS;
use crate::colormap::{ColorMap, Source};
use crate::error::{Error, Result};

/// Suffix selecting the reversed variant of a builtin color map.
pub const REVERSED_SUFFIX: &str = "_r";

/// Resolves a color map name to something that can be evaluated.
pub trait ColorMapResolver {
    /// Fails with [`Error::UnknownColorMap`] when `name` is not known.
    fn resolve(&self, name: &str) -> Result<Arc<dyn ColorMap>>;
}

impl<R: ColorMapResolver + ?Sized> ColorMapResolver for &R {
    fn resolve(&self, name: &str) -> Result<Arc<dyn ColorMap>> {
        (**self).resolve(name)
    }
}

/// A fixed set of named color maps, handy for tests and for callers that assemble
/// their own gradients.
impl ColorMapResolver for HashMap<String, Arc<dyn ColorMap>> {
    fn resolve(&self, name: &str) -> Result<Arc<dyn ColorMap>> {
        self.get(name).cloned().ok_or_else(|| Error::UnknownColorMap {
            name: name.to_string(),
        })
    }
}

static INDEX: Lazy<HashMap<&'static str, Source>> =
    Lazy::new(|| BUILTINS.iter().map(|(name, source)| (*name, *source)).collect());

/// The builtin matplotlib-style color maps.
///
/// Tables are built on every call to [`resolve`](ColorMapResolver::resolve); a name
/// ending in `_r` resolves to the reversed table of its base map.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinRegistry;

impl BuiltinRegistry {
    pub fn new() -> Self {
        BuiltinRegistry
    }

    /// Names of every builtin map in listing order, without reversed variants.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        BUILTINS.iter().map(|(name, _)| *name)
    }

    pub fn contains(&self, name: &str) -> bool {
        INDEX.contains_key(name)
            || name
                .strip_suffix(REVERSED_SUFFIX)
                .is_some_and(|base| INDEX.contains_key(base))
    }
}

impl ColorMapResolver for BuiltinRegistry {
    fn resolve(&self, name: &str) -> Result<Arc<dyn ColorMap>> {
        if let Some(source) = INDEX.get(name) {
            trace!("building lookup table for {}", name);
            return Ok(Arc::new(source.build()?));
        }
        if let Some(source) = name
            .strip_suffix(REVERSED_SUFFIX)
            .and_then(|base| INDEX.get(base))
        {
            trace!("building reversed lookup table for {}", name);
            return Ok(Arc::new(source.build()?.reversed()));
        }
        Err(Error::UnknownColorMap {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn builtin_names_are_unique() {
        let registry = BuiltinRegistry::new();
        assert_eq!(registry.names().count(), INDEX.len());
    }

    #[test]
    fn every_builtin_resolves() {
        let registry = BuiltinRegistry::new();
        for name in registry.names() {
            let map = registry
                .resolve(name)
                .unwrap_or_else(|e| panic!("{name}: {e}"));
            for c in map.at(0.5).components() {
                assert!((0.0..=1.0).contains(&c), "{name}: component {c} out of range");
            }
        }
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = BuiltinRegistry::new()
            .resolve("not_a_real_colormap")
            .err()
            .expect("lookup should fail");
        assert!(matches!(err, Error::UnknownColorMap { ref name } if name == "not_a_real_colormap"));
    }

    #[test]
    fn reversed_suffix_flips_the_table() {
        let registry = BuiltinRegistry::new();
        let gray = registry.resolve("gray").unwrap();
        let gray_r = registry.resolve("gray_r").unwrap();
        assert_eq!(gray.at(0.0), gray_r.at(1.0));
        assert_eq!(gray.at(1.0), gray_r.at(0.0));
        assert_eq!(gray_r.at(0.0), Color::Rgb(1.0, 1.0, 1.0));
        assert!(registry.contains("gray_r"));
        assert!(!registry.contains("nope_r"));
    }

    #[test]
    fn names_are_case_sensitive() {
        let registry = BuiltinRegistry::new();
        assert!(registry.contains("Blues"));
        assert!(!registry.contains("blues"));
    }

    #[test]
    fn map_of_closures_resolves() {
        let mut fake: HashMap<String, Arc<dyn ColorMap>> = HashMap::new();
        fake.insert("ramp".into(), Arc::new(|x: f64| Color::Rgb(x, x, x)));
        assert_eq!(fake.resolve("ramp").unwrap().at(0.25), Color::Rgb(0.25, 0.25, 0.25));
        assert!(fake.resolve("other").is_err());
    }
}
