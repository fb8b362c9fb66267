//! End-to-end checks of the source generator against the builtin registry.

use cmapgen::{sample_color_map, source, BuiltinRegistry, Error, GeneratorConfig, NameEntry};

fn render(entries: &[NameEntry], resolution: usize) -> cmapgen::Result<String> {
    let mut out = Vec::new();
    source::emit(&BuiltinRegistry::new(), entries, resolution, &mut out)?;
    Ok(String::from_utf8(out).expect("emitter writes UTF-8"))
}

fn block<'a>(text: &'a str, targets: &str) -> Vec<&'a str> {
    let opening = format!("{targets} = [");
    text.lines()
        .skip_while(|line| *line != opening)
        .skip(1)
        .take_while(|line| *line != "]")
        .collect()
}

#[test_log::test]
fn viridis_block_matches_sampler() {
    let text = render(&[NameEntry::from("viridis")], 25).unwrap();
    let lines = block(&text, "viridis");
    assert_eq!(lines.len(), 26);

    let set = sample_color_map(&BuiltinRegistry::new(), "viridis", 25).unwrap();
    let [r0, g0, b0] = set.samples[0].color.rgb();
    let [r25, g25, b25] = set.samples[25].color.rgb();
    assert_eq!(lines[0], format!("   0.0000, {r0:.4}, {g0:.4}, {b0:.4},"));
    assert_eq!(lines[25], format!("   1.0000, {r25:.4}, {g25:.4}, {b25:.4},"));

    // matplotlib's viridis endpoints, as shown in the module docs.
    assert_eq!(lines[0], "   0.0000, 0.2670, 0.0049, 0.3294,");
    assert_eq!(lines[25], "   1.0000, 0.9932, 0.9062, 0.1439,");
}

#[test_log::test]
fn full_configuration_emits_every_entry() {
    let config = GeneratorConfig::load().unwrap();
    let text = render(&config.names, config.resolution).unwrap();

    assert!(text.starts_with("\"\"\"\nGenerated by gen_color_maps_source\n\"\"\"\n\n"));
    for entry in &config.names {
        let lines = block(&text, &entry.targets());
        assert_eq!(lines.len(), config.resolution + 1, "{}", entry.targets());
        for line in lines {
            let numbers: Vec<&str> = line.trim().trim_end_matches(',').split(", ").collect();
            assert_eq!(numbers.len(), 4, "{line}");
            for n in numbers {
                let (_, decimals) = n.split_once('.').unwrap();
                assert_eq!(decimals.len(), 4, "{line}");
                let value: f64 = n.parse().unwrap();
                assert!((0.0..=1.0).contains(&value), "{line}");
            }
        }
    }
}

#[test_log::test]
fn emitting_twice_is_byte_identical() {
    let config = GeneratorConfig::load().unwrap();
    let first = render(&config.names, config.resolution).unwrap();
    let second = render(&config.names, config.resolution).unwrap();
    assert_eq!(first, second);
}

#[test_log::test]
fn reversed_names_are_emitted() {
    let text = render(&[NameEntry::from("gray_r")], 25).unwrap();
    let lines = block(&text, "gray_r");
    assert_eq!(lines[0], "   0.0000, 1.0000, 1.0000, 1.0000,");
    assert_eq!(lines[25], "   1.0000, 0.0000, 0.0000, 0.0000,");
}

#[test_log::test]
fn unknown_name_produces_no_output() {
    let mut out = Vec::new();
    let entries = [NameEntry::from("jet"), NameEntry::from("not_a_real_colormap")];
    let err = source::emit(&BuiltinRegistry::new(), &entries, 25, &mut out).unwrap_err();
    assert!(matches!(err, Error::UnknownColorMap { .. }));
    assert!(out.is_empty());
}
