// src/colormap/data.rs

//! Builtin color map definitions, keyed by their matplotlib names.
//!
//! ColorBrewer maps spread their 9 or 11 class colors evenly over `[0, 1]`. The
//! perceptually uniform maps use the listed tables in [`super::listed`], except
//! `twilight`, which is an anchor curve through its 510-entry table.

use std::f64::consts::PI;

use super::listed::{CIVIDIS, INFERNO, MAGMA, PLASMA, TURBO, VIRIDIS};
use super::{Lut, Segments, Source, LUT_SIZE};
use crate::color::Color;

// --- Segment data ---

static AUTUMN: Segments = Segments {
    red: &[(0.0, 1.0, 1.0), (1.0, 1.0, 1.0)],
    green: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    blue: &[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)],
};

static BINARY: Segments = Segments {
    red: &[(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)],
    green: &[(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)],
    blue: &[(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)],
};

static BONE: Segments = Segments {
    red: &[
        (0.0, 0.0, 0.0),
        (0.746032, 0.652778, 0.652778),
        (1.0, 1.0, 1.0),
    ],
    green: &[
        (0.0, 0.0, 0.0),
        (0.365079, 0.319444, 0.319444),
        (0.746032, 0.777778, 0.777778),
        (1.0, 1.0, 1.0),
    ],
    blue: &[
        (0.0, 0.0, 0.0),
        (0.365079, 0.444444, 0.444444),
        (1.0, 1.0, 1.0),
    ],
};

static CMRMAP: Segments = Segments {
    red: &[
        (0.000, 0.00, 0.00),
        (0.125, 0.15, 0.15),
        (0.250, 0.30, 0.30),
        (0.375, 0.60, 0.60),
        (0.500, 1.00, 1.00),
        (0.625, 0.90, 0.90),
        (0.750, 0.90, 0.90),
        (0.875, 0.90, 0.90),
        (1.000, 1.00, 1.00),
    ],
    green: &[
        (0.000, 0.00, 0.00),
        (0.125, 0.15, 0.15),
        (0.250, 0.15, 0.15),
        (0.375, 0.20, 0.20),
        (0.500, 0.25, 0.25),
        (0.625, 0.50, 0.50),
        (0.750, 0.75, 0.75),
        (0.875, 0.90, 0.90),
        (1.000, 1.00, 1.00),
    ],
    blue: &[
        (0.000, 0.00, 0.00),
        (0.125, 0.50, 0.50),
        (0.250, 0.75, 0.75),
        (0.375, 0.50, 0.50),
        (0.500, 0.15, 0.15),
        (0.625, 0.00, 0.00),
        (0.750, 0.10, 0.10),
        (0.875, 0.50, 0.50),
        (1.000, 1.00, 1.00),
    ],
};

static COOL: Segments = Segments {
    red: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    green: &[(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)],
    blue: &[(0.0, 1.0, 1.0), (1.0, 1.0, 1.0)],
};

static COPPER: Segments = Segments {
    red: &[(0.0, 0.0, 0.0), (0.809524, 1.0, 1.0), (1.0, 1.0, 1.0)],
    green: &[(0.0, 0.0, 0.0), (1.0, 0.7812, 0.7812)],
    blue: &[(0.0, 0.0, 0.0), (1.0, 0.4975, 0.4975)],
};

static COOLWARM: Segments = Segments {
    red: &[
        (0.0, 0.2298057, 0.2298057),
        (0.03125, 0.26623388, 0.26623388),
        (0.0625, 0.30386891, 0.30386891),
        (0.09375, 0.342804478, 0.342804478),
        (0.125, 0.38301334, 0.38301334),
        (0.15625, 0.424369608, 0.424369608),
        (0.1875, 0.46666708, 0.46666708),
        (0.21875, 0.509635204, 0.509635204),
        (0.25, 0.552953156, 0.552953156),
        (0.28125, 0.596262162, 0.596262162),
        (0.3125, 0.639176211, 0.639176211),
        (0.34375, 0.681291281, 0.681291281),
        (0.375, 0.722193294, 0.722193294),
        (0.40625, 0.761464949, 0.761464949),
        (0.4375, 0.798691636, 0.798691636),
        (0.46875, 0.833466556, 0.833466556),
        (0.5, 0.865395197, 0.865395197),
        (0.53125, 0.897787179, 0.897787179),
        (0.5625, 0.924127593, 0.924127593),
        (0.59375, 0.944468518, 0.944468518),
        (0.625, 0.958852946, 0.958852946),
        (0.65625, 0.96732803, 0.96732803),
        (0.6875, 0.969954137, 0.969954137),
        (0.71875, 0.966811177, 0.966811177),
        (0.75, 0.958003065, 0.958003065),
        (0.78125, 0.943660866, 0.943660866),
        (0.8125, 0.923944917, 0.923944917),
        (0.84375, 0.89904617, 0.89904617),
        (0.875, 0.869186849, 0.869186849),
        (0.90625, 0.834620542, 0.834620542),
        (0.9375, 0.795631745, 0.795631745),
        (0.96875, 0.752534934, 0.752534934),
        (1.0, 0.705673158, 0.705673158),
    ],
    green: &[
        (0.0, 0.298717966, 0.298717966),
        (0.03125, 0.353094838, 0.353094838),
        (0.0625, 0.406535296, 0.406535296),
        (0.09375, 0.458757618, 0.458757618),
        (0.125, 0.50941904, 0.50941904),
        (0.15625, 0.558148092, 0.558148092),
        (0.1875, 0.604562568, 0.604562568),
        (0.21875, 0.648280772, 0.648280772),
        (0.25, 0.688929332, 0.688929332),
        (0.28125, 0.726149107, 0.726149107),
        (0.3125, 0.759599947, 0.759599947),
        (0.34375, 0.788964712, 0.788964712),
        (0.375, 0.813952739, 0.813952739),
        (0.40625, 0.834302879, 0.834302879),
        (0.4375, 0.849786142, 0.849786142),
        (0.46875, 0.860207984, 0.860207984),
        (0.5, 0.86541021, 0.86541021),
        (0.53125, 0.848937047, 0.848937047),
        (0.5625, 0.827384882, 0.827384882),
        (0.59375, 0.800927443, 0.800927443),
        (0.625, 0.769767752, 0.769767752),
        (0.65625, 0.734132809, 0.734132809),
        (0.6875, 0.694266682, 0.694266682),
        (0.71875, 0.650421156, 0.650421156),
        (0.75, 0.602842431, 0.602842431),
        (0.78125, 0.551750968, 0.551750968),
        (0.8125, 0.49730856, 0.49730856),
        (0.84375, 0.439559467, 0.439559467),
        (0.875, 0.378313092, 0.378313092),
        (0.90625, 0.312874446, 0.312874446),
        (0.9375, 0.24128379, 0.24128379),
        (0.96875, 0.157246067, 0.157246067),
        (1.0, 0.01555616, 0.01555616),
    ],
    blue: &[
        (0.0, 0.753683153, 0.753683153),
        (0.03125, 0.801466763, 0.801466763),
        (0.0625, 0.84495867, 0.84495867),
        (0.09375, 0.883725899, 0.883725899),
        (0.125, 0.917387822, 0.917387822),
        (0.15625, 0.945619588, 0.945619588),
        (0.1875, 0.968154911, 0.968154911),
        (0.21875, 0.98478814, 0.98478814),
        (0.25, 0.995375608, 0.995375608),
        (0.28125, 0.999836203, 0.999836203),
        (0.3125, 0.998151185, 0.998151185),
        (0.34375, 0.990363227, 0.990363227),
        (0.375, 0.976574709, 0.976574709),
        (0.40625, 0.956945269, 0.956945269),
        (0.4375, 0.931688648, 0.931688648),
        (0.46875, 0.901068838, 0.901068838),
        (0.5, 0.865395561, 0.865395561),
        (0.53125, 0.820880546, 0.820880546),
        (0.5625, 0.774508472, 0.774508472),
        (0.59375, 0.726736146, 0.726736146),
        (0.625, 0.678007945, 0.678007945),
        (0.65625, 0.628751763, 0.628751763),
        (0.6875, 0.579375448, 0.579375448),
        (0.71875, 0.530263762, 0.530263762),
        (0.75, 0.481775914, 0.481775914),
        (0.78125, 0.434243684, 0.434243684),
        (0.8125, 0.387970225, 0.387970225),
        (0.84375, 0.343229596, 0.343229596),
        (0.875, 0.300267182, 0.300267182),
        (0.90625, 0.259301199, 0.259301199),
        (0.9375, 0.220525627, 0.220525627),
        (0.96875, 0.184115123, 0.184115123),
        (1.0, 0.150232812, 0.150232812),
    ],
};

static GIST_EARTH: Segments = Segments {
    red: &[
        (0.0, 0.0, 0.0),
        (0.2824, 0.1882, 0.1882),
        (0.4588, 0.2714, 0.2714),
        (0.549, 0.4719, 0.4719),
        (0.698, 0.7176, 0.7176),
        (0.7882, 0.7553, 0.7553),
        (1.0, 0.9922, 0.9922),
    ],
    green: &[
        (0.0, 0.0, 0.0),
        (0.0275, 0.0, 0.0),
        (0.1098, 0.1893, 0.1893),
        (0.1647, 0.3035, 0.3035),
        (0.2078, 0.3841, 0.3841),
        (0.2824, 0.502, 0.502),
        (0.5216, 0.6397, 0.6397),
        (0.698, 0.7171, 0.7171),
        (0.7882, 0.6392, 0.6392),
        (0.7922, 0.6413, 0.6413),
        (0.8, 0.6447, 0.6447),
        (0.8078, 0.6481, 0.6481),
        (0.8157, 0.6549, 0.6549),
        (0.8667, 0.6991, 0.6991),
        (0.8745, 0.7103, 0.7103),
        (0.8824, 0.7216, 0.7216),
        (0.8902, 0.7323, 0.7323),
        (0.898, 0.743, 0.743),
        (0.9412, 0.8275, 0.8275),
        (0.9569, 0.8635, 0.8635),
        (0.9647, 0.8816, 0.8816),
        (0.9961, 0.9733, 0.9733),
        (1.0, 0.9843, 0.9843),
    ],
    blue: &[
        (0.0, 0.0, 0.0),
        (0.0039, 0.1684, 0.1684),
        (0.0078, 0.2212, 0.2212),
        (0.0275, 0.4329, 0.4329),
        (0.0314, 0.4549, 0.4549),
        (0.2824, 0.5004, 0.5004),
        (0.4667, 0.2748, 0.2748),
        (0.5451, 0.3205, 0.3205),
        (0.7843, 0.3961, 0.3961),
        (0.8941, 0.6651, 0.6651),
        (1.0, 0.9843, 0.9843),
    ],
};

static GIST_NCAR: Segments = Segments {
    red: &[
        (0.0, 0.0, 0.0),
        (0.3098, 0.0, 0.0),
        (0.3725, 0.3993, 0.3993),
        (0.4235, 0.5003, 0.5003),
        (0.5333, 1.0, 1.0),
        (0.7922, 1.0, 1.0),
        (0.8471, 0.6218, 0.6218),
        (0.898, 0.9235, 0.9235),
        (1.0, 0.9961, 0.9961),
    ],
    green: &[
        (0.0, 0.0, 0.0),
        (0.051, 0.3722, 0.3722),
        (0.1059, 0.0, 0.0),
        (0.1569, 0.7202, 0.7202),
        (0.1608, 0.7537, 0.7537),
        (0.1647, 0.7752, 0.7752),
        (0.2157, 1.0, 1.0),
        (0.2588, 0.9804, 0.9804),
        (0.2706, 0.9804, 0.9804),
        (0.3176, 1.0, 1.0),
        (0.3686, 0.8081, 0.8081),
        (0.4275, 1.0, 1.0),
        (0.5216, 1.0, 1.0),
        (0.6314, 0.7292, 0.7292),
        (0.6863, 0.2796, 0.2796),
        (0.7451, 0.0, 0.0),
        (0.7922, 0.0, 0.0),
        (0.8431, 0.1753, 0.1753),
        (0.898, 0.5, 0.5),
        (1.0, 0.9725, 0.9725),
    ],
    blue: &[
        (0.0, 0.502, 0.502),
        (0.051, 0.0222, 0.0222),
        (0.1098, 1.0, 1.0),
        (0.2039, 1.0, 1.0),
        (0.2627, 0.6145, 0.6145),
        (0.3216, 0.0, 0.0),
        (0.4157, 0.0, 0.0),
        (0.4745, 0.2342, 0.2342),
        (0.5333, 0.0, 0.0),
        (0.5804, 0.0, 0.0),
        (0.6314, 0.0549, 0.0549),
        (0.6902, 0.0, 0.0),
        (0.7373, 0.0, 0.0),
        (0.7922, 0.9738, 0.9738),
        (0.8, 1.0, 1.0),
        (0.8431, 1.0, 1.0),
        (0.898, 0.9341, 0.9341),
        (1.0, 0.9961, 0.9961),
    ],
};

// Red jumps at 0.0547 and again at 0.25.
static GIST_STERN: Segments = Segments {
    red: &[
        (0.0, 0.0, 0.0),
        (0.0547, 1.0, 1.0),
        (0.250, 0.027, 0.250),
        (1.0, 1.0, 1.0),
    ],
    green: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    blue: &[
        (0.0, 0.0, 0.0),
        (0.5, 1.0, 1.0),
        (0.735, 0.0, 0.0),
        (1.0, 0.0, 0.0),
    ],
};

static GRAY: Segments = Segments {
    red: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    green: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    blue: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
};

static HOT: Segments = Segments {
    red: &[(0.0, 0.0416, 0.0416), (0.365079, 1.0, 1.0), (1.0, 1.0, 1.0)],
    green: &[
        (0.0, 0.0, 0.0),
        (0.365079, 0.0, 0.0),
        (0.746032, 1.0, 1.0),
        (1.0, 1.0, 1.0),
    ],
    blue: &[(0.0, 0.0, 0.0), (0.746032, 0.0, 0.0), (1.0, 1.0, 1.0)],
};

static HSV: Segments = Segments {
    red: &[
        (0.0, 1.0, 1.0),
        (0.158730, 1.0, 1.0),
        (0.174603, 0.968750, 0.968750),
        (0.333333, 0.031250, 0.031250),
        (0.349206, 0.0, 0.0),
        (0.666667, 0.0, 0.0),
        (0.682540, 0.031250, 0.031250),
        (0.841270, 0.968750, 0.968750),
        (0.857143, 1.0, 1.0),
        (1.0, 1.0, 1.0),
    ],
    green: &[
        (0.0, 0.0, 0.0),
        (0.158730, 0.937500, 0.937500),
        (0.174603, 1.0, 1.0),
        (0.507937, 1.0, 1.0),
        (0.666667, 0.062500, 0.062500),
        (0.682540, 0.0, 0.0),
        (1.0, 0.0, 0.0),
    ],
    blue: &[
        (0.0, 0.0, 0.0),
        (0.333333, 0.0, 0.0),
        (0.349206, 0.062500, 0.062500),
        (0.507937, 1.0, 1.0),
        (0.841270, 1.0, 1.0),
        (0.857143, 0.937500, 0.937500),
        (1.0, 0.09375, 0.09375),
    ],
};

static JET: Segments = Segments {
    red: &[
        (0.0, 0.0, 0.0),
        (0.35, 0.0, 0.0),
        (0.66, 1.0, 1.0),
        (0.89, 1.0, 1.0),
        (1.0, 0.5, 0.5),
    ],
    green: &[
        (0.0, 0.0, 0.0),
        (0.125, 0.0, 0.0),
        (0.375, 1.0, 1.0),
        (0.64, 1.0, 1.0),
        (0.91, 0.0, 0.0),
        (1.0, 0.0, 0.0),
    ],
    blue: &[
        (0.0, 0.5, 0.5),
        (0.11, 1.0, 1.0),
        (0.34, 1.0, 1.0),
        (0.65, 0.0, 0.0),
        (1.0, 0.0, 0.0),
    ],
};

static SPRING: Segments = Segments {
    red: &[(0.0, 1.0, 1.0), (1.0, 1.0, 1.0)],
    green: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    blue: &[(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)],
};

static SUMMER: Segments = Segments {
    red: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    green: &[(0.0, 0.5, 0.5), (1.0, 1.0, 1.0)],
    blue: &[(0.0, 0.4, 0.4), (1.0, 0.4, 0.4)],
};

static WINTER: Segments = Segments {
    red: &[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)],
    green: &[(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)],
    blue: &[(0.0, 1.0, 1.0), (1.0, 0.5, 0.5)],
};

// --- Anchor lists ---

const BRG: &[(f64, [f64; 3])] = &[
    (0.0, [0.0, 0.0, 1.0]),
    (0.5, [1.0, 0.0, 0.0]),
    (1.0, [0.0, 1.0, 0.0]),
];

const BWR: &[(f64, [f64; 3])] = &[
    (0.0, [0.0, 0.0, 1.0]),
    (0.5, [1.0, 1.0, 1.0]),
    (1.0, [1.0, 0.0, 0.0]),
];

const GIST_RAINBOW: &[(f64, [f64; 3])] = &[
    (0.000, [1.00, 0.00, 0.16]),
    (0.030, [1.00, 0.00, 0.00]),
    (0.215, [1.00, 1.00, 0.00]),
    (0.400, [0.00, 1.00, 0.00]),
    (0.586, [0.00, 1.00, 1.00]),
    (0.770, [0.00, 0.00, 1.00]),
    (0.954, [1.00, 0.00, 1.00]),
    (1.000, [1.00, 0.00, 0.75]),
];

const NIPY_SPECTRAL: &[(f64, [f64; 3])] = &[
    (0.00, [0.0000, 0.0000, 0.0000]),
    (0.05, [0.4667, 0.0000, 0.5333]),
    (0.10, [0.5333, 0.0000, 0.6000]),
    (0.15, [0.0000, 0.0000, 0.6667]),
    (0.20, [0.0000, 0.0000, 0.8667]),
    (0.25, [0.0000, 0.4667, 0.8667]),
    (0.30, [0.0000, 0.6000, 0.8667]),
    (0.35, [0.0000, 0.6667, 0.6667]),
    (0.40, [0.0000, 0.6667, 0.5333]),
    (0.45, [0.0000, 0.6000, 0.0000]),
    (0.50, [0.0000, 0.7333, 0.0000]),
    (0.55, [0.0000, 0.8667, 0.0000]),
    (0.60, [0.0000, 1.0000, 0.0000]),
    (0.65, [0.7333, 1.0000, 0.0000]),
    (0.70, [0.9333, 0.9333, 0.0000]),
    (0.75, [1.0000, 0.8000, 0.0000]),
    (0.80, [1.0000, 0.6000, 0.0000]),
    (0.85, [1.0000, 0.0000, 0.0000]),
    (0.90, [0.8667, 0.0000, 0.0000]),
    (0.95, [0.8000, 0.0000, 0.0000]),
    (1.00, [0.8000, 0.8000, 0.8000]),
];

const SEISMIC: &[(f64, [f64; 3])] = &[
    (0.00, [0.0, 0.0, 0.3]),
    (0.25, [0.0, 0.0, 1.0]),
    (0.50, [1.0, 1.0, 1.0]),
    (0.75, [1.0, 0.0, 0.0]),
    (1.00, [0.5, 0.0, 0.0]),
];

const TERRAIN: &[(f64, [f64; 3])] = &[
    (0.00, [0.2, 0.2, 0.6]),
    (0.15, [0.0, 0.6, 1.0]),
    (0.25, [0.0, 0.8, 0.4]),
    (0.50, [1.0, 1.0, 0.6]),
    (0.75, [0.5, 0.36, 0.33]),
    (1.00, [1.0, 1.0, 1.0]),
];

// Cyclic: both ends meet at the same light gray.
// TODO: replace with the full 510-row table as a `listed` entry.
const TWILIGHT: &[(f64, [f64; 3])] = &[
    (0.000, [0.886, 0.851, 0.886]),
    (0.125, [0.591, 0.690, 0.790]),
    (0.250, [0.371, 0.468, 0.761]),
    (0.375, [0.307, 0.222, 0.620]),
    (0.500, [0.186, 0.068, 0.231]),
    (0.625, [0.487, 0.154, 0.377]),
    (0.750, [0.707, 0.382, 0.354]),
    (0.875, [0.802, 0.641, 0.578]),
    (1.000, [0.886, 0.851, 0.886]),
];

const WISTIA: &[&str] = &["#e4ff7a", "#ffe81a", "#ffbd00", "#ffa000", "#fc7f00"];

// --- ColorBrewer classes ---

const BLUES: &[&str] = &[
    "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#08519c",
    "#08306b",
];

const BRBG: &[&str] = &[
    "#543005", "#8c510a", "#bf812d", "#dfc27d", "#f6e8c3", "#f5f5f5", "#c7eae5", "#80cdc1",
    "#35978f", "#01665e", "#003c30",
];

const BUGN: &[&str] = &[
    "#f7fcfd", "#e5f5f9", "#ccece6", "#99d8c9", "#66c2a4", "#41ae76", "#238b45", "#006d2c",
    "#00441b",
];

const BUPU: &[&str] = &[
    "#f7fcfd", "#e0ecf4", "#bfd3e6", "#9ebcda", "#8c96c6", "#8c6bb1", "#88419d", "#810f7c",
    "#4d004b",
];

const GNBU: &[&str] = &[
    "#f7fcf0", "#e0f3db", "#ccebc5", "#a8ddb5", "#7bccc4", "#4eb3d3", "#2b8cbe", "#0868ac",
    "#084081",
];

const GREENS: &[&str] = &[
    "#f7fcf5", "#e5f5e0", "#c7e9c0", "#a1d99b", "#74c476", "#41ab5d", "#238b45", "#006d2c",
    "#00441b",
];

const GREYS: &[&str] = &[
    "#ffffff", "#f0f0f0", "#d9d9d9", "#bdbdbd", "#969696", "#737373", "#525252", "#252525",
    "#000000",
];

const ORANGES: &[&str] = &[
    "#fff5eb", "#fee6ce", "#fdd0a2", "#fdae6b", "#fd8d3c", "#f16913", "#d94801", "#a63603",
    "#7f2704",
];

const ORRD: &[&str] = &[
    "#fff7ec", "#fee8c8", "#fdd49e", "#fdbb84", "#fc8d59", "#ef6548", "#d7301f", "#b30000",
    "#7f0000",
];

const PIYG: &[&str] = &[
    "#8e0152", "#c51b7d", "#de77ae", "#f1b6da", "#fde0ef", "#f7f7f7", "#e6f5d0", "#b8e186",
    "#7fbc41", "#4d9221", "#276419",
];

const PRGN: &[&str] = &[
    "#40004b", "#762a83", "#9970ab", "#c2a5cf", "#e7d4e8", "#f7f7f7", "#d9f0d3", "#a6dba0",
    "#5aae61", "#1b7837", "#00441b",
];

const PUBU: &[&str] = &[
    "#fff7fb", "#ece7f2", "#d0d1e6", "#a6bddb", "#74a9cf", "#3690c0", "#0570b0", "#045a8d",
    "#023858",
];

const PUBUGN: &[&str] = &[
    "#fff7fb", "#ece2f0", "#d0d1e6", "#a6bddb", "#67a9cf", "#3690c0", "#02818a", "#016c59",
    "#014636",
];

const PUOR: &[&str] = &[
    "#7f3b08", "#b35806", "#e08214", "#fdb863", "#fee0b6", "#f7f7f7", "#d8daeb", "#b2abd2",
    "#8073ac", "#542788", "#2d004b",
];

const PURD: &[&str] = &[
    "#f7f4f9", "#e7e1ef", "#d4b9da", "#c994c7", "#df65b0", "#e7298a", "#ce1256", "#980043",
    "#67001f",
];

const PURPLES: &[&str] = &[
    "#fcfbfd", "#efedf5", "#dadaeb", "#bcbddc", "#9e9ac8", "#807dba", "#6a51a3", "#54278f",
    "#3f007d",
];

const RDBU: &[&str] = &[
    "#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#f7f7f7", "#d1e5f0", "#92c5de",
    "#4393c3", "#2166ac", "#053061",
];

const RDGY: &[&str] = &[
    "#67001f", "#b2182b", "#d6604d", "#f4a582", "#fddbc7", "#ffffff", "#e0e0e0", "#bababa",
    "#878787", "#4d4d4d", "#1a1a1a",
];

const RDPU: &[&str] = &[
    "#fff7f3", "#fde0dd", "#fcc5c0", "#fa9fb5", "#f768a1", "#dd3497", "#ae017e", "#7a0177",
    "#49006a",
];

const RDYLBU: &[&str] = &[
    "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee090", "#ffffbf", "#e0f3f8", "#abd9e9",
    "#74add1", "#4575b4", "#313695",
];

const RDYLGN: &[&str] = &[
    "#a50026", "#d73027", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#d9ef8b", "#a6d96a",
    "#66bd63", "#1a9850", "#006837",
];

const REDS: &[&str] = &[
    "#fff5f0", "#fee0d2", "#fcbba1", "#fc9272", "#fb6a4a", "#ef3b2c", "#cb181d", "#a50f15",
    "#67000d",
];

const SPECTRAL: &[&str] = &[
    "#9e0142", "#d53e4f", "#f46d43", "#fdae61", "#fee08b", "#ffffbf", "#e6f598", "#abdda4",
    "#66c2a5", "#3288bd", "#5e4fa2",
];

const YLGN: &[&str] = &[
    "#ffffe5", "#f7fcb9", "#d9f0a3", "#addd8e", "#78c679", "#41ab5d", "#238443", "#006837",
    "#004529",
];

const YLGNBU: &[&str] = &[
    "#ffffd9", "#edf8b1", "#c7e9b4", "#7fcdbb", "#41b6c4", "#1d91c0", "#225ea8", "#253494",
    "#081d58",
];

const YLORBR: &[&str] = &[
    "#ffffe5", "#fff7bc", "#fee391", "#fec44f", "#fe9929", "#ec7014", "#cc4c02", "#993404",
    "#662506",
];

const YLORRD: &[&str] = &[
    "#ffffcc", "#ffeda0", "#fed976", "#feb24c", "#fd8d3c", "#fc4e2a", "#e31a1c", "#bd0026",
    "#800026",
];

// --- Qualitative tables ---

const ACCENT: &[&str] = &[
    "#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0", "#f0027f", "#bf5b17", "#666666",
];

const DARK2: &[&str] = &[
    "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e", "#e6ab02", "#a6761d", "#666666",
];

const PAIRED: &[&str] = &[
    "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f", "#ff7f00",
    "#cab2d6", "#6a3d9a", "#ffff99", "#b15928",
];

const PASTEL1: &[&str] = &[
    "#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4", "#fed9a6", "#ffffcc", "#e5d8bd", "#fddaec",
    "#f2f2f2",
];

const PASTEL2: &[&str] = &[
    "#b3e2cd", "#fdcdac", "#cbd5e8", "#f4cae4", "#e6f5c9", "#fff2ae", "#f1e2cc", "#cccccc",
];

const SET1: &[&str] = &[
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628", "#f781bf",
    "#999999",
];

const SET2: &[&str] = &[
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
];

const SET3: &[&str] = &[
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
    "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
];

const TAB10: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

const TAB20: &[&str] = &[
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
    "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
    "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

const TAB20B: &[&str] = &[
    "#393b79", "#5254a3", "#6b6ecf", "#9c9ede", "#637939", "#8ca252", "#b5cf6b", "#cedb9c",
    "#8c6d31", "#bd9e39", "#e7ba52", "#e7cb94", "#843c39", "#ad494a", "#d6616b", "#e7969c",
    "#7b4173", "#a55194", "#ce6dbd", "#de9ed6",
];

const TAB20C: &[&str] = &[
    "#3182bd", "#6baed6", "#9ecae1", "#c6dbef", "#e6550d", "#fd8d3c", "#fdae6b", "#fdd0a2",
    "#31a354", "#74c476", "#a1d99b", "#c7e9c0", "#756bb1", "#9e9ac8", "#bcbddc", "#dadaeb",
    "#636363", "#969696", "#bdbdbd", "#d9d9d9",
];

// --- Functions ---

fn flag_red(x: f64) -> f64 {
    0.75 * ((x * 31.5 + 0.25) * PI).sin() + 0.5
}

fn flag_green(x: f64) -> f64 {
    (x * 31.5 * PI).sin()
}

fn flag_blue(x: f64) -> f64 {
    0.75 * ((x * 31.5 - 0.25) * PI).sin() + 0.5
}

fn prism_red(x: f64) -> f64 {
    0.75 * ((x * 20.9 + 0.25) * PI).sin() + 0.67
}

fn prism_green(x: f64) -> f64 {
    0.75 * ((x * 20.9 - 0.25) * PI).sin() + 0.33
}

fn prism_blue(x: f64) -> f64 {
    -1.1 * (x * 20.9 * PI).sin()
}

fn gist_heat_red(x: f64) -> f64 {
    1.5 * x
}

fn gist_heat_green(x: f64) -> f64 {
    2.0 * x - 1.0
}

fn gist_heat_blue(x: f64) -> f64 {
    4.0 * x - 3.0
}

/// Green's cubehelix with start 0.5, rotations -1.5, hue 1.0 and gamma 1.0.
fn cubehelix(p0: f64, p1: f64, x: f64) -> f64 {
    let amplitude = x * (1.0 - x) / 2.0;
    let phi = 2.0 * PI * (0.5 / 3.0 - 1.5 * x);
    x + amplitude * (p0 * phi.cos() + p1 * phi.sin())
}

fn cubehelix_red(x: f64) -> f64 {
    cubehelix(-0.14861, 1.78277, x)
}

fn cubehelix_green(x: f64) -> f64 {
    cubehelix(-0.29227, -0.90649, x)
}

fn cubehelix_blue(x: f64) -> f64 {
    cubehelix(1.97294, 0.0, x)
}

// --- Derived tables ---

/// `sqrt((2 * gray + hot) / 3)`, channel by channel.
fn pink() -> Lut {
    let hot = Lut::from_segments(LUT_SIZE, &HOT);
    let last = (hot.len().max(2) - 1) as f64;
    let colors = hot
        .colors()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let gray = i as f64 / last;
            let [r, g, b] = c.rgb();
            let mix = |h: f64| ((2.0 * gray + h) / 3.0).sqrt();
            Color::Rgb(mix(r), mix(g), mix(b))
        })
        .collect();
    Lut::from_colors(colors)
}

/// Twilight starting from its dark middle, running backwards.
fn twilight_shifted() -> Lut {
    let twilight = Lut::from_anchors(LUT_SIZE, TWILIGHT);
    let half = twilight.len() / 2;
    twilight.rolled(half).reversed()
}

/// Every builtin color map, in matplotlib's alphabetical listing order.
pub static BUILTINS: &[(&str, Source)] = &[
    ("Accent", Source::Listed(ACCENT)),
    ("afmhot", Source::Gnuplot([34, 35, 36])),
    ("autumn", Source::Segments(&AUTUMN)),
    ("binary", Source::Segments(&BINARY)),
    ("Blues", Source::EvenHex(BLUES)),
    ("bone", Source::Segments(&BONE)),
    ("BrBG", Source::EvenHex(BRBG)),
    ("brg", Source::Anchors(BRG)),
    ("BuGn", Source::EvenHex(BUGN)),
    ("BuPu", Source::EvenHex(BUPU)),
    ("bwr", Source::Anchors(BWR)),
    ("CMRmap", Source::Segments(&CMRMAP)),
    ("cividis", Source::Table(CIVIDIS)),
    ("cool", Source::Segments(&COOL)),
    ("coolwarm", Source::Segments(&COOLWARM)),
    ("copper", Source::Segments(&COPPER)),
    (
        "cubehelix",
        Source::Functions([cubehelix_red, cubehelix_green, cubehelix_blue]),
    ),
    ("Dark2", Source::Listed(DARK2)),
    ("flag", Source::Functions([flag_red, flag_green, flag_blue])),
    ("gist_earth", Source::Segments(&GIST_EARTH)),
    ("gist_gray", Source::Segments(&GRAY)),
    (
        "gist_heat",
        Source::Functions([gist_heat_red, gist_heat_green, gist_heat_blue]),
    ),
    ("gist_ncar", Source::Segments(&GIST_NCAR)),
    ("gist_rainbow", Source::Anchors(GIST_RAINBOW)),
    ("gist_stern", Source::Segments(&GIST_STERN)),
    ("gist_yarg", Source::Segments(&BINARY)),
    ("GnBu", Source::EvenHex(GNBU)),
    ("gnuplot", Source::Gnuplot([7, 5, 15])),
    ("gnuplot2", Source::Gnuplot([30, 31, 32])),
    ("gray", Source::Segments(&GRAY)),
    ("Greens", Source::EvenHex(GREENS)),
    ("Greys", Source::EvenHex(GREYS)),
    ("hot", Source::Segments(&HOT)),
    ("hsv", Source::Segments(&HSV)),
    ("inferno", Source::Table(INFERNO)),
    ("jet", Source::Segments(&JET)),
    ("magma", Source::Table(MAGMA)),
    ("nipy_spectral", Source::Anchors(NIPY_SPECTRAL)),
    ("ocean", Source::Gnuplot([23, 28, 3])),
    ("OrRd", Source::EvenHex(ORRD)),
    ("Oranges", Source::EvenHex(ORANGES)),
    ("PRGn", Source::EvenHex(PRGN)),
    ("Paired", Source::Listed(PAIRED)),
    ("Pastel1", Source::Listed(PASTEL1)),
    ("Pastel2", Source::Listed(PASTEL2)),
    ("PiYG", Source::EvenHex(PIYG)),
    ("pink", Source::Custom(pink)),
    ("plasma", Source::Table(PLASMA)),
    ("prism", Source::Functions([prism_red, prism_green, prism_blue])),
    ("PuBu", Source::EvenHex(PUBU)),
    ("PuBuGn", Source::EvenHex(PUBUGN)),
    ("PuOr", Source::EvenHex(PUOR)),
    ("PuRd", Source::EvenHex(PURD)),
    ("Purples", Source::EvenHex(PURPLES)),
    ("rainbow", Source::Gnuplot([33, 13, 10])),
    ("RdBu", Source::EvenHex(RDBU)),
    ("RdGy", Source::EvenHex(RDGY)),
    ("RdPu", Source::EvenHex(RDPU)),
    ("RdYlBu", Source::EvenHex(RDYLBU)),
    ("RdYlGn", Source::EvenHex(RDYLGN)),
    ("Reds", Source::EvenHex(REDS)),
    ("seismic", Source::Anchors(SEISMIC)),
    ("Set1", Source::Listed(SET1)),
    ("Set2", Source::Listed(SET2)),
    ("Set3", Source::Listed(SET3)),
    ("Spectral", Source::EvenHex(SPECTRAL)),
    ("spring", Source::Segments(&SPRING)),
    ("summer", Source::Segments(&SUMMER)),
    ("tab10", Source::Listed(TAB10)),
    ("tab20", Source::Listed(TAB20)),
    ("tab20b", Source::Listed(TAB20B)),
    ("tab20c", Source::Listed(TAB20C)),
    ("terrain", Source::Anchors(TERRAIN)),
    ("turbo", Source::Table(TURBO)),
    ("twilight", Source::Anchors(TWILIGHT)),
    ("twilight_shifted", Source::Custom(twilight_shifted)),
    ("viridis", Source::Table(VIRIDIS)),
    ("winter", Source::Segments(&WINTER)),
    ("Wistia", Source::EvenHex(WISTIA)),
    ("YlGn", Source::EvenHex(YLGN)),
    ("YlGnBu", Source::EvenHex(YLGNBU)),
    ("YlOrBr", Source::EvenHex(YLORBR)),
    ("YlOrRd", Source::EvenHex(YLORRD)),
];
