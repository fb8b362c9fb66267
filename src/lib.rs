// src/lib.rs

//! Build-time generators for sampled color map tables.
//!
//! A fixed list of named color maps is sampled at `resolution + 1` evenly spaced
//! positions. The samples are emitted either as a NumPy `.npz` archive
//! ([`archive`]) or as literal array declarations on standard output ([`source`]).

pub mod archive;
pub mod color;
pub mod colormap;
pub mod config;
pub mod error;
pub mod names;
pub mod registry;
pub mod sampler;
pub mod source;

pub use archive::Archive;
pub use color::Color;
pub use colormap::ColorMap;
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use names::NameEntry;
pub use registry::{BuiltinRegistry, ColorMapResolver};
pub use sampler::{sample_color_map, Sample, SampleSet};
