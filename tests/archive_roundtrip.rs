//! End-to-end checks of the archive generator against the builtin registry.

use std::collections::HashMap;
use std::fs;
use std::sync::Arc;

use cmapgen::{Archive, BuiltinRegistry, Color, ColorMap, Error, GeneratorConfig};

#[test_log::test]
fn archive_round_trip_matches_configuration() {
    let config = GeneratorConfig::load().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matplotlib_color_maps.npz");

    let archive = Archive::build(&BuiltinRegistry::new(), &config.archive_names(), config.resolution)
        .unwrap();
    archive.write(&path).unwrap();

    let read = Archive::read(&path).unwrap();
    assert_eq!(read.names().collect::<Vec<_>>(), config.archive_names());
    for set in read.sets() {
        assert_eq!(set.len(), config.resolution + 1, "{}", set.name);
        assert!(set.iter().all(|s| s.color.has_alpha()), "{}", set.name);
    }
    assert_eq!(read, archive_with_alpha(&archive));
}

// Archived colors always carry alpha, so compare against the RGBA view.
fn archive_with_alpha(archive: &Archive) -> Archive {
    let sets = archive
        .sets()
        .iter()
        .cloned()
        .map(|mut set| {
            for sample in &mut set.samples {
                let [r, g, b, a] = sample.color.rgba();
                sample.color = Color::Rgba(r, g, b, a);
            }
            set
        })
        .collect();
    Archive::from_sets(sets)
}

#[test_log::test]
fn writing_twice_is_byte_identical() {
    let config = GeneratorConfig::load().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.npz");
    let second = dir.path().join("second.npz");

    let registry = BuiltinRegistry::new();
    for path in [&first, &second] {
        Archive::build(&registry, &config.archive_names(), config.resolution)
            .unwrap()
            .write(path)
            .unwrap();
    }

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test_log::test]
fn existing_file_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("maps.npz");
    fs::write(&path, b"stale").unwrap();

    Archive::build(&BuiltinRegistry::new(), &["viridis", "jet"], 25)
        .unwrap()
        .write(&path)
        .unwrap();

    let read = Archive::read(&path).unwrap();
    assert_eq!(read.names().collect::<Vec<_>>(), vec!["viridis", "jet"]);
}

#[cfg(unix)]
#[test_log::test]
fn written_archive_has_regular_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("maps.npz");
    let reference = dir.path().join("reference");
    fs::write(&reference, b"").unwrap();

    Archive::build(&BuiltinRegistry::new(), &["gray"], 25)
        .unwrap()
        .write(&path)
        .unwrap();

    let mode = |p: &std::path::Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode(&path), mode(&reference));
}

#[test_log::test]
fn unknown_name_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("maps.npz");

    let err = Archive::build(&BuiltinRegistry::new(), &["viridis", "not_a_real_colormap"], 25)
        .and_then(|archive| archive.write(&path))
        .unwrap_err();

    assert!(matches!(err, Error::UnknownColorMap { ref name } if name == "not_a_real_colormap"));
    assert!(!path.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test_log::test]
fn unwritable_destination_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("maps.npz");

    let err = Archive::build(&BuiltinRegistry::new(), &["gray"], 25)
        .unwrap()
        .write(&path)
        .unwrap_err();

    assert!(matches!(err, Error::Io(_)));
}

#[test_log::test]
fn fake_registry_with_mixed_arity() {
    let mut maps: HashMap<String, Arc<dyn ColorMap>> = HashMap::new();
    maps.insert("ramp".into(), Arc::new(|x: f64| Color::Rgb(x, x, x)));
    maps.insert("fade".into(), Arc::new(|x: f64| Color::Rgba(1.0, 0.0, 0.0, x)));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.npz");
    Archive::build(&maps, &["ramp", "fade"], 4).unwrap().write(&path).unwrap();

    let read = Archive::read(&path).unwrap();
    let ramp = read.get("ramp").unwrap();
    assert_eq!(ramp.samples[2].color, Color::Rgba(0.5, 0.5, 0.5, 1.0));
    let fade = read.get("fade").unwrap();
    assert_eq!(fade.samples[1].color, Color::Rgba(1.0, 0.0, 0.0, 0.25));
    assert_eq!(fade.samples[4].position, 1.0);
}
