// src/names.rs

//! The configured name list and how each emitter walks it.
//!
//! An entry is either a single color map or a group of aliases that share one emitted
//! block. The archive emitter flattens groups so every alias gets its own key; the
//! source emitter keeps a group together and emits one multi-target declaration.

use std::collections::HashSet;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::registry::ColorMapResolver;
use crate::sampler::{sample_color_map, SampleSet};

/// One entry of the name list. In JSON, a string or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameEntry {
    Single(String),
    AliasGroup(Vec<String>),
}

impl NameEntry {
    pub fn names(&self) -> &[String] {
        match self {
            NameEntry::Single(name) => std::slice::from_ref(name),
            NameEntry::AliasGroup(names) => names,
        }
    }

    /// Assignment targets of the emitted declaration, e.g. `gray = grey`.
    pub fn targets(&self) -> String {
        self.names().join(" = ")
    }
}

impl From<&str> for NameEntry {
    fn from(name: &str) -> Self {
        NameEntry::Single(name.to_string())
    }
}

/// Every name of every entry, in order, with alias groups flattened.
pub fn archive_names(entries: &[NameEntry]) -> Vec<&str> {
    entries
        .iter()
        .flat_map(|entry| entry.names().iter().map(String::as_str))
        .collect()
}

/// Rejects empty alias groups and names listed more than once.
pub fn validate(entries: &[NameEntry]) -> Result<()> {
    let mut seen = HashSet::new();
    for (position, entry) in entries.iter().enumerate() {
        if entry.names().is_empty() {
            return Err(Error::EmptyAliasGroup(position));
        }
        for name in entry.names() {
            if !seen.insert(name.as_str()) {
                return Err(Error::DuplicateName(name.clone()));
            }
        }
    }
    Ok(())
}

/// A block of the generated source: the entry's targets and the samples they share.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionUnit {
    pub targets: String,
    pub samples: SampleSet,
}

/// Samples one entry for the source emitter.
///
/// Aliases are sampled in order and the last one wins. Aliases are assumed to name
/// interchangeable maps; a mismatch is logged, not corrected. `position` is the entry's
/// index in the name list and is reported when the entry is an empty group.
pub fn sample_entry<R>(
    resolver: &R,
    position: usize,
    entry: &NameEntry,
    resolution: usize,
) -> Result<EmissionUnit>
where
    R: ColorMapResolver + ?Sized,
{
    let mut kept: Option<SampleSet> = None;
    for name in entry.names() {
        let current = sample_color_map(resolver, name, resolution)?;
        if let Some(previous) = &kept {
            if !previous.same_samples(&current) {
                warn!(
                    "aliases {} and {} produce different samples; keeping {}",
                    previous.name, current.name, current.name
                );
            }
        }
        kept = Some(current);
    }
    let samples = kept.ok_or(Error::EmptyAliasGroup(position))?;
    Ok(EmissionUnit {
        targets: entry.targets(),
        samples,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use super::*;
    use crate::color::Color;
    use crate::colormap::ColorMap;

    fn fake() -> HashMap<String, Arc<dyn ColorMap>> {
        let mut maps: HashMap<String, Arc<dyn ColorMap>> = HashMap::new();
        maps.insert("gray".into(), Arc::new(|x: f64| Color::Rgb(x, x, x)));
        maps.insert("grey".into(), Arc::new(|x: f64| Color::Rgb(x, x, x)));
        maps.insert("red".into(), Arc::new(|x: f64| Color::Rgb(x, 0.0, 0.0)));
        maps
    }

    #[test]
    fn entries_deserialize_from_strings_and_arrays() {
        let entries: Vec<NameEntry> = serde_json::from_str(r#"["jet", ["gray", "grey"]]"#).unwrap();
        assert_eq!(
            entries,
            vec![
                NameEntry::Single("jet".into()),
                NameEntry::AliasGroup(vec!["gray".into(), "grey".into()]),
            ]
        );
    }

    #[test]
    fn archive_names_flatten_groups_in_order() {
        let entries = vec![
            NameEntry::from("jet"),
            NameEntry::AliasGroup(vec!["gray".into(), "grey".into()]),
            NameEntry::from("hot"),
        ];
        assert_eq!(archive_names(&entries), vec!["jet", "gray", "grey", "hot"]);
    }

    #[test]
    fn targets_join_aliases() {
        let group = NameEntry::AliasGroup(vec!["gray".into(), "grey".into()]);
        assert_eq!(group.targets(), "gray = grey");
        assert_eq!(NameEntry::from("jet").targets(), "jet");
    }

    #[test]
    fn validate_rejects_empty_groups_and_duplicates() {
        let empty = vec![NameEntry::from("jet"), NameEntry::AliasGroup(vec![])];
        assert!(matches!(validate(&empty), Err(Error::EmptyAliasGroup(1))));

        let duplicate = vec![
            NameEntry::from("gray"),
            NameEntry::AliasGroup(vec!["grey".into(), "gray".into()]),
        ];
        assert!(matches!(validate(&duplicate), Err(Error::DuplicateName(ref n)) if n == "gray"));

        assert!(validate(&[NameEntry::from("jet"), NameEntry::from("hot")]).is_ok());
    }

    #[test_log::test]
    fn alias_group_keeps_the_last_samples() {
        let group = NameEntry::AliasGroup(vec!["red".into(), "gray".into()]);
        let unit = sample_entry(&fake(), 0, &group, 4).unwrap();
        assert_eq!(unit.targets, "red = gray");
        assert_eq!(unit.samples.name, "gray");
        assert_eq!(unit.samples.samples[4].color, Color::Rgb(1.0, 1.0, 1.0));
    }

    #[test_log::test]
    fn alias_group_fails_on_any_unknown_name() {
        let group = NameEntry::AliasGroup(vec!["gray".into(), "nope".into(), "grey".into()]);
        let err = sample_entry(&fake(), 0, &group, 4).unwrap_err();
        assert!(matches!(err, Error::UnknownColorMap { ref name } if name == "nope"));
    }

    #[test_log::test]
    fn empty_group_is_an_error() {
        let err = sample_entry(&fake(), 3, &NameEntry::AliasGroup(vec![]), 4).unwrap_err();
        assert!(matches!(err, Error::EmptyAliasGroup(3)));
    }
}
