// src/source.rs

//! Text emitter: sample sets as literal array declarations.
//!
//! ```text
//! """
//! Generated by gen_color_maps_source
//! """
//!
//! viridis = [
//!    0.0000, 0.2670, 0.0049, 0.3294,
//!    ...
//! ]
//!
//! ```
//!
//! Every number has exactly four digits after the decimal point. Only position, red,
//! green and blue are printed; alpha is dropped.

use std::io::Write;

use log::info;

use crate::error::Result;
use crate::names::{sample_entry, EmissionUnit, NameEntry};
use crate::registry::ColorMapResolver;
use crate::sampler::Sample;

/// Generation notice printed above the declarations.
pub const HEADER: &str = "\"\"\"\nGenerated by gen_color_maps_source\n\"\"\"\n";

/// Samples every entry. Nothing is written until this succeeds.
pub fn build_units<R>(resolver: &R, entries: &[NameEntry], resolution: usize) -> Result<Vec<EmissionUnit>>
where
    R: ColorMapResolver + ?Sized,
{
    let units = entries
        .iter()
        .enumerate()
        .map(|(position, entry)| sample_entry(resolver, position, entry, resolution))
        .collect::<Result<Vec<_>>>()?;
    info!("sampled {} declarations", units.len());
    Ok(units)
}

/// Formats one sample line, including indentation and the trailing comma.
pub fn format_sample(sample: &Sample) -> String {
    let [r, g, b] = sample.color.rgb();
    format!(
        "   {:.4}, {:.4}, {:.4}, {:.4},",
        sample.position, r, g, b
    )
}

/// Writes the header and one block per unit.
pub fn write_units<W: Write>(out: &mut W, units: &[EmissionUnit]) -> Result<()> {
    writeln!(out, "{}", HEADER)?;
    for unit in units {
        writeln!(out, "{} = [", unit.targets)?;
        for sample in &unit.samples {
            writeln!(out, "{}", format_sample(sample))?;
        }
        writeln!(out, "]")?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Samples `entries` and writes them to `out`. On failure `out` is left untouched.
pub fn emit<R, W>(resolver: &R, entries: &[NameEntry], resolution: usize, out: &mut W) -> Result<()>
where
    R: ColorMapResolver + ?Sized,
    W: Write,
{
    let units = build_units(resolver, entries, resolution)?;
    write_units(out, &units)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use super::*;
    use crate::color::Color;
    use crate::colormap::ColorMap;
    use crate::error::Error;

    fn fake() -> HashMap<String, Arc<dyn ColorMap>> {
        let mut maps: HashMap<String, Arc<dyn ColorMap>> = HashMap::new();
        maps.insert("gray".into(), Arc::new(|x: f64| Color::Rgb(x, x, x)));
        maps.insert("grey".into(), Arc::new(|x: f64| Color::Rgb(x, x, x)));
        maps.insert(
            "fade".into(),
            Arc::new(|x: f64| Color::Rgba(1.0, 0.0, 0.0, 1.0 - x)),
        );
        maps
    }

    fn render(entries: &[NameEntry], resolution: usize) -> Result<String> {
        let mut out = Vec::new();
        emit(&fake(), entries, resolution, &mut out)?;
        Ok(String::from_utf8(out).expect("emitter writes UTF-8"))
    }

    #[test_log::test]
    fn single_entry_block() {
        let text = render(&[NameEntry::from("gray")], 4).unwrap();
        let expected = "\
\"\"\"
Generated by gen_color_maps_source
\"\"\"

gray = [
   0.0000, 0.0000, 0.0000, 0.0000,
   0.2500, 0.2500, 0.2500, 0.2500,
   0.5000, 0.5000, 0.5000, 0.5000,
   0.7500, 0.7500, 0.7500, 0.7500,
   1.0000, 1.0000, 1.0000, 1.0000,
]

";
        assert_eq!(text, expected);
    }

    #[test_log::test]
    fn alias_group_shares_one_block() {
        let group = NameEntry::AliasGroup(vec!["gray".into(), "grey".into()]);
        let text = render(&[group], 2).unwrap();
        assert!(text.contains("gray = grey = [\n   0.0000, 0.0000, 0.0000, 0.0000,\n"));
        assert_eq!(text.matches(" = [").count(), 1);
    }

    #[test_log::test]
    fn alpha_is_dropped() {
        let text = render(&[NameEntry::from("fade")], 1).unwrap();
        assert!(text.contains("   0.0000, 1.0000, 0.0000, 0.0000,\n"));
        assert!(text.contains("   1.0000, 1.0000, 0.0000, 0.0000,\n"));
    }

    #[test]
    fn numbers_use_four_fixed_decimals() {
        let sample = Sample {
            position: 0.04,
            color: Color::Rgb(0.123456, 1.0, 0.00001),
        };
        assert_eq!(format_sample(&sample), "   0.0400, 0.1235, 1.0000, 0.0000,");
    }

    #[test_log::test]
    fn blocks_follow_entry_order() {
        let text = render(&[NameEntry::from("grey"), NameEntry::from("gray")], 1).unwrap();
        let grey = text.find("grey = [").unwrap();
        let gray = text.find("gray = [").unwrap();
        assert!(grey < gray);
    }

    #[test_log::test]
    fn failure_writes_nothing() {
        let mut out = Vec::new();
        let entries = [NameEntry::from("gray"), NameEntry::from("not_a_real_colormap")];
        let err = emit(&fake(), &entries, 25, &mut out).unwrap_err();
        assert!(matches!(err, Error::UnknownColorMap { .. }));
        assert!(out.is_empty());
    }

    #[test_log::test]
    fn empty_group_reports_its_position() {
        let mut out = Vec::new();
        let entries = [
            NameEntry::from("gray"),
            NameEntry::from("grey"),
            NameEntry::AliasGroup(vec![]),
        ];
        let err = emit(&fake(), &entries, 4, &mut out).unwrap_err();
        assert!(matches!(err, Error::EmptyAliasGroup(2)));
        assert!(out.is_empty());
    }
}
