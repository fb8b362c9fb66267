// src/colormap/tests.rs

use super::data::BUILTINS;
use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn builtin(name: &str) -> Lut {
    BUILTINS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, source)| source.build().unwrap())
        .unwrap_or_else(|| panic!("no builtin named {name}"))
}

// --- lookup_table ---

#[test]
fn lookup_table_interpolates_linearly() {
    let table = lookup_table(5, &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)]);
    assert_eq!(table, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn lookup_table_endpoints_use_outer_sides() {
    // First entry takes y1 of the first stop, last entry y0 of the last stop.
    let table = lookup_table(3, &[(0.0, 0.9, 0.2), (1.0, 0.6, 0.1)]);
    assert!(close(table[0], 0.2));
    assert!(close(table[1], 0.4));
    assert!(close(table[2], 0.6));
}

#[test]
fn lookup_table_honours_discontinuities() {
    // Jump from 0.0 to 1.0 at x = 0.5.
    let stops = [(0.0, 0.0, 0.0), (0.5, 0.0, 1.0), (1.0, 1.0, 1.0)];
    let table = lookup_table(11, &stops);
    assert!(close(table[4], 0.0));
    assert!(close(table[5], 0.0));
    assert!(close(table[6], 1.0));
}

#[test]
fn lookup_table_clips() {
    let table = lookup_table(3, &[(0.0, -1.0, -1.0), (1.0, 2.0, 2.0)]);
    assert_eq!(table, vec![0.0, 0.5, 1.0]);
}

#[test]
fn lookup_table_without_stops_is_black() {
    assert_eq!(lookup_table(4, &[]), vec![0.0; 4]);
}

// --- Lut indexing ---

#[test]
fn lut_index_follows_floor_of_scaled_position() {
    let lut = Lut::from_colors(vec![
        Color::Rgb(0.0, 0.0, 0.0),
        Color::Rgb(0.5, 0.5, 0.5),
        Color::Rgb(1.0, 1.0, 1.0),
    ]);
    assert_eq!(lut.at(0.0), Color::Rgb(0.0, 0.0, 0.0));
    assert_eq!(lut.at(0.33), Color::Rgb(0.0, 0.0, 0.0));
    assert_eq!(lut.at(0.34), Color::Rgb(0.5, 0.5, 0.5));
    assert_eq!(lut.at(0.99), Color::Rgb(1.0, 1.0, 1.0));
    assert_eq!(lut.at(1.0), Color::Rgb(1.0, 1.0, 1.0));
}

#[test]
fn lut_clamps_out_of_range_positions() {
    let lut = Lut::from_fn(8, |x| Color::Rgb(x, x, x));
    assert_eq!(lut.at(-3.0), lut.at(0.0));
    assert_eq!(lut.at(7.0), lut.at(1.0));
}

#[test]
fn lut_nan_is_the_bad_color() {
    let lut = Lut::from_fn(8, |x| Color::Rgb(x, x, x));
    assert_eq!(lut.at(f64::NAN), BAD_COLOR);
    assert_eq!(Lut::from_colors(Vec::new()).at(0.5), BAD_COLOR);
}

#[test]
fn reversed_and_rolled() {
    let lut = Lut::from_colors(vec![
        Color::Rgb(0.0, 0.0, 0.0),
        Color::Rgb(0.1, 0.1, 0.1),
        Color::Rgb(0.2, 0.2, 0.2),
        Color::Rgb(0.3, 0.3, 0.3),
    ]);
    let rolled = lut.clone().rolled(2);
    assert_eq!(rolled.colors()[0], Color::Rgb(0.2, 0.2, 0.2));
    let reversed = lut.reversed();
    assert_eq!(reversed.colors()[0], Color::Rgb(0.3, 0.3, 0.3));
}

// --- gnuplot formulas ---

#[test]
fn gfunc_formulas() {
    assert!(close(gfunc(3, 0.3), 0.3));
    assert!(close(gfunc(7, 0.25), 0.5));
    assert!(close(gfunc(13, 0.5), 1.0));
    assert!(close(gfunc(32, 0.1), 0.4));
    assert!(close(gfunc(32, 0.5), 0.84));
    assert!(close(gfunc(36, 0.75), 0.5));
}

// --- builtins ---

#[test]
fn continuous_builtins_have_full_tables() {
    for name in ["viridis", "jet", "hot", "cubehelix", "terrain", "Wistia", "pink"] {
        assert_eq!(builtin(name).len(), LUT_SIZE, "{name}");
    }
}

#[test]
fn listed_builtins_keep_their_color_count() {
    assert_eq!(builtin("tab10").len(), 10);
    assert_eq!(builtin("tab20c").len(), 20);
    assert_eq!(builtin("Set3").len(), 12);
    assert_eq!(builtin("Accent").len(), 8);
}

#[test]
fn listed_builtins_pick_nearest_lower_color() {
    let tab10 = builtin("tab10");
    let blue = Color::Rgb(0x1f as f64 / 255.0, 0x77 as f64 / 255.0, 0xb4 as f64 / 255.0);
    let first = tab10.at(0.05).rgb();
    for (a, b) in first.iter().zip(blue.rgb()) {
        assert!((a - b).abs() < 1e-6);
    }
    assert_eq!(tab10.at(1.0), tab10.colors()[9]);
}

#[test]
fn gray_runs_black_to_white() {
    let gray = builtin("gray");
    assert_eq!(gray.at(0.0), Color::Rgb(0.0, 0.0, 0.0));
    assert_eq!(gray.at(1.0), Color::Rgb(1.0, 1.0, 1.0));
}

#[test]
fn jet_starts_dark_blue_and_ends_dark_red() {
    let jet = builtin("jet");
    assert_eq!(jet.at(0.0), Color::Rgb(0.0, 0.0, 0.5));
    assert_eq!(jet.at(1.0), Color::Rgb(0.5, 0.0, 0.0));
}

#[test]
fn builtins_report_rgb() {
    for name in ["viridis", "Blues", "RdBu", "jet", "coolwarm", "tab10"] {
        assert!(!builtin(name).at(0.5).has_alpha(), "{name}");
    }
}

// --- matplotlib reference values ---

fn assert_rgb(name: &str, x: f64, expected: [f64; 3]) {
    let actual = builtin(name).at(x).rgb();
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (a - e).abs() < 1e-4,
            "{name} at {x}: got {actual:?}, want {expected:?}"
        );
    }
}

#[test]
fn perceptual_maps_match_matplotlib() {
    let xs = [-0.2, 0.0, 0.2, 0.4, 0.6, 0.8, 1.0, 100.0];
    // matplotlib's colormap(xs) for each map.
    let expected: [(&str, [[f64; 3]; 8]); 4] = [
        (
            "viridis",
            [
                [0.267004, 0.004874, 0.329415],
                [0.267004, 0.004874, 0.329415],
                [0.253935, 0.265254, 0.529983],
                [0.163625, 0.471133, 0.558148],
                [0.134692, 0.658636, 0.517649],
                [0.477504, 0.821444, 0.318195],
                [0.993248, 0.906157, 0.143936],
                [0.993248, 0.906157, 0.143936],
            ],
        ),
        (
            "magma",
            [
                [0.001462, 0.000466, 0.013866],
                [0.001462, 0.000466, 0.013866],
                [0.232077, 0.059889, 0.437695],
                [0.550287, 0.161158, 0.505719],
                [0.868793, 0.287728, 0.409303],
                [0.994738, 0.624350, 0.427397],
                [0.987053, 0.991438, 0.749504],
                [0.987053, 0.991438, 0.749504],
            ],
        ),
        (
            "inferno",
            [
                [0.001462, 0.000466, 0.013866],
                [0.001462, 0.000466, 0.013866],
                [0.258234, 0.038571, 0.406485],
                [0.578304, 0.148039, 0.404411],
                [0.865006, 0.316822, 0.226055],
                [0.987622, 0.645320, 0.039886],
                [0.988362, 0.998364, 0.644924],
                [0.988362, 0.998364, 0.644924],
            ],
        ),
        (
            "plasma",
            [
                [0.050383, 0.029803, 0.527975],
                [0.050383, 0.029803, 0.527975],
                [0.417642, 0.000564, 0.658390],
                [0.692840, 0.165141, 0.564522],
                [0.881443, 0.392529, 0.383229],
                [0.988260, 0.652325, 0.211364],
                [0.940015, 0.975158, 0.131326],
                [0.940015, 0.975158, 0.131326],
            ],
        ),
    ];
    for (name, rows) in expected {
        for (x, rgb) in xs.iter().zip(rows) {
            assert_rgb(name, *x, rgb);
        }
    }
}

#[test]
fn cividis_and_turbo_match_matplotlib() {
    assert_rgb("cividis", 0.0, [0.0, 0.135112, 0.304751]);
    assert_rgb("cividis", 1.0, [0.995737, 0.909344, 0.217772]);
    assert_rgb("cividis", 0.6, [0.582087, 0.558670, 0.468118]);
    assert_rgb("turbo", 0.0, [0.18995, 0.07176, 0.23217]);
    assert_rgb("turbo", 0.6, [0.88331, 0.86553, 0.21719]);
    assert_rgb("turbo", 1.0, [0.4796, 0.01583, 0.01055]);
}

#[test]
fn listed_tables_have_one_row_per_entry() {
    for rows in [
        listed::VIRIDIS,
        listed::MAGMA,
        listed::INFERNO,
        listed::PLASMA,
        listed::CIVIDIS,
        listed::TURBO,
    ] {
        assert_eq!(rows.len(), LUT_SIZE);
    }
}
#[test]
fn twilight_is_cyclic() {
    let twilight = builtin("twilight");
    assert_eq!(twilight.at(0.0), twilight.at(1.0));
    let shifted = builtin("twilight_shifted");
    // Shifted variant starts near the dark middle.
    let [r, g, b] = shifted.at(0.0).rgb();
    assert!(r + g + b < 1.0);
}

#[test]
fn pink_is_lighter_than_hot_at_the_dark_end() {
    let [r, g, b] = builtin("pink").at(0.1).rgb();
    assert!(r > 0.2 && g > 0.1 && b > 0.1);
}

#[test]
fn colorbrewer_maps_interpolate_their_classes() {
    // Entry 128 sits at 128/255, just past the fifth of nine Blues classes at 0.5.
    let hex = |v: u8| v as f64 / 255.0;
    let t = (128.0 / 255.0 - 0.5) / 0.125;
    let lerp = |a: u8, b: u8| hex(a) + t * (hex(b) - hex(a));
    assert_rgb("Blues", 0.5, [lerp(0x6b, 0x42), lerp(0xae, 0x92), lerp(0xd6, 0xc6)]);
    assert_rgb("Blues", 0.0, [hex(0xf7), hex(0xfb), hex(0xff)]);
    assert_rgb("Blues", 1.0, [hex(0x08), hex(0x30), hex(0x6b)]);
    // Diverging maps have eleven classes with the neutral one in the middle.
    assert_rgb("RdBu", 0.0, [hex(0x67), hex(0x00), hex(0x1f)]);
    assert_rgb("RdBu", 1.0, [hex(0x05), hex(0x30), hex(0x61)]);
    assert_rgb("Spectral", 1.0, [hex(0x5e), hex(0x4f), hex(0xa2)]);
}

#[test]
fn segment_maps_match_matplotlib_endpoints() {
    assert_rgb("coolwarm", 0.0, [0.2298057, 0.298717966, 0.753683153]);
    assert_rgb("coolwarm", 1.0, [0.705673158, 0.01555616, 0.150232812]);
    assert_rgb("gist_earth", 0.0, [0.0, 0.0, 0.0]);
    assert_rgb("gist_earth", 1.0, [0.9922, 0.9843, 0.9843]);
    assert_rgb("gist_ncar", 0.0, [0.0, 0.0, 0.502]);
    assert_rgb("gist_ncar", 1.0, [0.9961, 0.9725, 0.9961]);
}

#[test]
fn coolwarm_middle_is_interpolated_between_segment_stops() {
    // Entry 128 falls between the stops at 16/32 and 17/32.
    let t = (128.0 / 255.0 - 0.5) / (1.0 / 32.0);
    let lerp = |a: f64, b: f64| a + t * (b - a);
    assert_rgb(
        "coolwarm",
        0.5,
        [
            lerp(0.865395197, 0.897787179),
            lerp(0.86541021, 0.848937047),
            lerp(0.865395561, 0.820880546),
        ],
    );
}

#[test]
fn twilight_middle_is_its_darkest_point() {
    let twilight = builtin("twilight");
    let lightness = |x: f64| twilight.at(x).rgb().iter().sum::<f64>();
    for x in [0.0, 0.25, 0.4, 0.6, 0.75, 1.0] {
        assert!(lightness(0.5) < lightness(x), "{x}");
    }
    let shifted = builtin("twilight_shifted");
    assert_eq!(shifted.len(), twilight.len());
}
