// src/archive.rs

//! The binary archive: one `f64` array per color map, in NumPy's `.npz` layout.
//!
//! Each array has one row per sample and five columns, `[position, r, g, b, a]`; alpha
//! is 1.0 for maps that report none. Entries are stored uncompressed as `<name>.npy`
//! with a fixed timestamp, so the same input always yields the same bytes.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Seek, Write};
use std::path::Path;

use log::{debug, info};
use ndarray::Array2;
use ndarray_npy::{NpzReader, NpzWriter};
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::registry::ColorMapResolver;
use crate::sampler::{sample_color_map, Sample, SampleSet};

/// Columns of an archived array: position followed by RGBA.
pub const COLUMNS: usize = 5;

const NPY_SUFFIX: &str = ".npy";

/// Sample sets keyed by color map name, in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Archive {
    sets: Vec<SampleSet>,
}

impl Archive {
    /// Samples every name. Nothing is written; a failure leaves no archive behind.
    pub fn build<R>(resolver: &R, names: &[&str], resolution: usize) -> Result<Self>
    where
        R: ColorMapResolver + ?Sized,
    {
        let sets = names
            .iter()
            .map(|name| sample_color_map(resolver, name, resolution))
            .collect::<Result<Vec<_>>>()?;
        info!("sampled {} color maps", sets.len());
        Ok(Archive { sets })
    }

    pub fn from_sets(sets: Vec<SampleSet>) -> Self {
        Archive { sets }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|set| set.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&SampleSet> {
        self.sets.iter().find(|set| set.name == name)
    }

    pub fn sets(&self) -> &[SampleSet] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Writes the archive to `path`, replacing any existing file.
    ///
    /// The data goes to a temporary file next to `path` first and is renamed into place
    /// once complete. The file ends up with the permissions of a freshly created one.
    pub fn write(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let tmp = temp_file_in(dir)?;
        {
            let writer = self.write_to(BufWriter::new(tmp.as_file()))?;
            writer.into_inner().map_err(|e| e.into_error())?;
        }
        tmp.persist(path).map_err(|e| e.error)?;
        info!("wrote {} arrays to {}", self.sets.len(), path.display());
        Ok(())
    }

    /// Encodes the archive into `writer` and hands it back.
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<W> {
        let mut npz = NpzWriter::new_with_options(writer, entry_options());
        for set in &self.sets {
            debug!("adding {}{}", set.name, NPY_SUFFIX);
            npz.add_array(set.name.as_str(), &to_array(set))?;
        }
        Ok(npz.finish()?)
    }

    /// Reads an archive back. Four-column arrays decode to RGB, five-column ones to RGBA.
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mut npz = NpzReader::new(BufReader::new(file))?;
        let names = npz.names()?;
        let mut sets = Vec::with_capacity(names.len());
        for (index, raw) in names.iter().enumerate() {
            let array: Array2<f64> = npz.by_index(index)?;
            let name = raw.strip_suffix(NPY_SUFFIX).unwrap_or(raw);
            sets.push(from_array(name, &array)?);
        }
        debug!("read {} arrays from {}", sets.len(), path.display());
        Ok(Archive { sets })
    }
}

// Temporary files default to owner-only access; ask for 0o666 so the umask decides.
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .last_modified_time(DateTime::default())
}

/// Lays a sample set out as an `(n, 5)` array.
pub fn to_array(set: &SampleSet) -> Array2<f64> {
    Array2::from_shape_fn((set.len(), COLUMNS), |(row, column)| {
        let sample = &set.samples[row];
        match column {
            0 => sample.position,
            c => sample.color.rgba()[c - 1],
        }
    })
}

fn from_array(name: &str, array: &Array2<f64>) -> Result<SampleSet> {
    let columns = array.ncols();
    if columns != 4 && columns != COLUMNS {
        return Err(Error::MalformedArray {
            name: name.to_string(),
            shape: array.shape().to_vec(),
        });
    }
    let samples = array
        .rows()
        .into_iter()
        .map(|row| {
            let color = if columns == COLUMNS {
                Color::Rgba(row[1], row[2], row[3], row[4])
            } else {
                Color::Rgb(row[1], row[2], row[3])
            };
            Sample {
                position: row[0],
                color,
            }
        })
        .collect();
    Ok(SampleSet {
        name: name.to_string(),
        samples,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use ndarray::array;

    use super::*;

    fn set(name: &str, colors: &[Color]) -> SampleSet {
        let last = (colors.len() - 1) as f64;
        SampleSet {
            name: name.to_string(),
            samples: colors
                .iter()
                .enumerate()
                .map(|(i, &color)| Sample {
                    position: i as f64 / last,
                    color,
                })
                .collect(),
        }
    }

    #[test]
    fn arrays_carry_position_and_rgba() {
        let s = set(
            "mix",
            &[Color::Rgb(0.0, 0.1, 0.2), Color::Rgba(0.3, 0.4, 0.5, 0.6)],
        );
        assert_eq!(
            to_array(&s),
            array![[0.0, 0.0, 0.1, 0.2, 1.0], [1.0, 0.3, 0.4, 0.5, 0.6]]
        );
    }

    #[test]
    fn four_column_arrays_decode_as_rgb() {
        let decoded = from_array("old", &array![[0.0, 0.1, 0.2, 0.3], [1.0, 0.4, 0.5, 0.6]]).unwrap();
        assert_eq!(decoded.samples[1].color, Color::Rgb(0.4, 0.5, 0.6));
        assert_eq!(decoded.samples[1].position, 1.0);
    }

    #[test]
    fn unexpected_shapes_are_rejected() {
        let err = from_array("bad", &array![[0.0, 1.0], [1.0, 0.0]]).unwrap_err();
        assert!(matches!(err, Error::MalformedArray { ref shape, .. } if shape == &vec![2, 2]));
    }

    #[test]
    fn encoding_is_deterministic() {
        let archive = Archive::from_sets(vec![
            set("a", &[Color::Rgb(0.0, 0.0, 0.0), Color::Rgb(1.0, 1.0, 1.0)]),
            set("b", &[Color::Rgba(1.0, 0.0, 0.0, 0.5), Color::Rgba(0.0, 0.0, 1.0, 1.0)]),
        ]);
        let first = archive.write_to(Cursor::new(Vec::new())).unwrap().into_inner();
        let second = archive.write_to(Cursor::new(Vec::new())).unwrap().into_inner();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn lookup_by_name() {
        let archive = Archive::from_sets(vec![set("a", &[Color::Rgb(0.0, 0.0, 0.0); 2])]);
        assert!(archive.get("a").is_some());
        assert!(archive.get("b").is_none());
        assert_eq!(archive.names().collect::<Vec<_>>(), vec!["a"]);
    }
}
