// src/sampler.rs

//! Evenly spaced sampling of a named color map.

use log::debug;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::registry::ColorMapResolver;

/// Number of steps between the first and last sample.
pub const DEFAULT_RESOLUTION: usize = 25;

/// One color drawn from a color map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub position: f64,
    pub color: Color,
}

/// The samples of one color map, ordered by position.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub name: String,
    pub samples: Vec<Sample>,
}

impl SampleSet {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Same samples, ignoring the name.
    pub fn same_samples(&self, other: &SampleSet) -> bool {
        self.samples == other.samples
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Samples `name` at positions `0/n, 1/n, ..., n/n`.
///
/// Colors are kept exactly as the color map reports them, with or without alpha.
pub fn sample_color_map<R>(resolver: &R, name: &str, resolution: usize) -> Result<SampleSet>
where
    R: ColorMapResolver + ?Sized,
{
    if resolution == 0 {
        return Err(Error::InvalidResolution(resolution));
    }
    let map = resolver.resolve(name)?;
    let samples = (0..=resolution)
        .map(|i| {
            let position = i as f64 / resolution as f64;
            Sample {
                position,
                color: map.at(position),
            }
        })
        .collect();
    debug!("sampled {} at {} steps", name, resolution);
    Ok(SampleSet {
        name: name.to_string(),
        samples,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use super::*;
    use crate::colormap::ColorMap;
    use crate::registry::BuiltinRegistry;

    fn fake() -> HashMap<String, Arc<dyn ColorMap>> {
        let mut maps: HashMap<String, Arc<dyn ColorMap>> = HashMap::new();
        maps.insert("ramp".into(), Arc::new(|x: f64| Color::Rgb(x, 1.0 - x, 0.5)));
        maps.insert("fade".into(), Arc::new(|x: f64| Color::Rgba(0.0, 0.0, 1.0, x)));
        maps
    }

    #[test_log::test]
    fn produces_resolution_plus_one_samples() {
        let set = sample_color_map(&fake(), "ramp", DEFAULT_RESOLUTION).unwrap();
        assert_eq!(set.len(), DEFAULT_RESOLUTION + 1);
        assert_eq!(set.name, "ramp");
    }

    #[test_log::test]
    fn positions_are_evenly_spaced_and_closed() {
        let set = sample_color_map(&fake(), "ramp", DEFAULT_RESOLUTION).unwrap();
        for (i, sample) in set.iter().enumerate() {
            assert_eq!(sample.position, i as f64 / DEFAULT_RESOLUTION as f64);
        }
        assert_eq!(set.samples[0].position, 0.0);
        assert_eq!(set.samples[DEFAULT_RESOLUTION].position, 1.0);
        assert!(set.samples.windows(2).all(|w| w[0].position < w[1].position));
    }

    #[test_log::test]
    fn arity_is_passed_through() {
        let rgb = sample_color_map(&fake(), "ramp", 4).unwrap();
        let rgba = sample_color_map(&fake(), "fade", 4).unwrap();
        assert!(rgb.iter().all(|s| !s.color.has_alpha()));
        assert!(rgba.iter().all(|s| s.color.has_alpha()));
        assert_eq!(rgba.samples[2].color, Color::Rgba(0.0, 0.0, 1.0, 0.5));
    }

    #[test_log::test]
    fn zero_resolution_is_rejected() {
        let err = sample_color_map(&fake(), "ramp", 0).unwrap_err();
        assert!(matches!(err, Error::InvalidResolution(0)));
    }

    #[test_log::test]
    fn unknown_name_fails() {
        let err = sample_color_map(&fake(), "not_a_real_colormap", 25).unwrap_err();
        assert!(matches!(err, Error::UnknownColorMap { .. }));
    }

    #[test_log::test]
    fn builtin_samples_stay_in_unit_range() {
        let registry = BuiltinRegistry::new();
        for name in registry.names() {
            let set = sample_color_map(&registry, name, DEFAULT_RESOLUTION).unwrap();
            assert_eq!(set.len(), DEFAULT_RESOLUTION + 1, "{name}");
            for sample in &set {
                for c in sample.color.components() {
                    assert!((0.0..=1.0).contains(&c), "{name}: {c}");
                }
            }
        }
    }

    #[test_log::test]
    fn sampling_twice_is_identical() {
        let registry = BuiltinRegistry::new();
        let a = sample_color_map(&registry, "viridis", DEFAULT_RESOLUTION).unwrap();
        let b = sample_color_map(&registry, "viridis", DEFAULT_RESOLUTION).unwrap();
        assert_eq!(a, b);
    }
}
