//! Static color tables.

/// Okabe & Ito (2008), the most widely recommended colorblind-safe set.
pub const OKABE_ITO: &[&str] = &[
    "#E69F00", "#56B4E9", "#009E73", "#F0E442", "#0072B2", "#D55E00", "#CC79A7", "#000000",
];

pub const OKABE_ITO_NAMED: &[(&str, &str)] = &[
    ("orange", "#E69F00"),
    ("sky_blue", "#56B4E9"),
    ("bluish_green", "#009E73"),
    ("yellow", "#F0E442"),
    ("blue", "#0072B2"),
    ("vermillion", "#D55E00"),
    ("reddish_purple", "#CC79A7"),
    ("black", "#000000"),
];

/// Wong (Nature Methods, 2011): Okabe-Ito with black first.
pub const WONG: &[&str] = &[
    "#000000", "#E69F00", "#56B4E9", "#009E73", "#F0E442", "#0072B2", "#D55E00", "#CC79A7",
];

// Paul Tol, https://personal.sron.nl/~pault/
pub const TOL_BRIGHT: &[&str] = &[
    "#4477AA", "#EE6677", "#228833", "#CCBB44", "#66CCEE", "#AA3377", "#BBBBBB",
];

pub const TOL_MUTED: &[&str] = &[
    "#332288", "#88CCEE", "#44AA99", "#117733", "#999933", "#DDCC77", "#CC6677", "#882255",
    "#AA4499",
];

pub const TOL_LIGHT: &[&str] = &[
    "#77AADD", "#EE8866", "#EEDD88", "#FFAABB", "#99DDFF", "#44BB99", "#BBCC33", "#AAAA00",
    "#DDDDDD",
];

pub const TOL_HIGH_CONTRAST: &[&str] = &["#004488", "#DDAA33", "#BB5566"];

/// Perceptually ordered maps for continuous data.
pub const SEQUENTIAL_COLORMAPS: &[&str] = &[
    "viridis", "plasma", "inferno", "magma", "cividis", "YlOrRd", "YlGnBu", "Blues", "Greens",
    "Purples",
];

/// Diverging maps without a red-green axis.
pub const DIVERGING_COLORMAPS_SAFE: &[&str] = &["RdYlBu", "RdBu", "PuOr", "BrBG", "PRGn", "PiYG"];

/// Red-green diverging maps.
pub const DIVERGING_COLORMAPS_AVOID: &[&str] = &["RdGn", "RdYlGn"];

/// Conventional fluorophore colors; green/red pairs are hard to separate.
pub const FLUOROPHORES_TRADITIONAL: &[(&str, &str)] = &[
    ("DAPI", "#0000FF"),
    ("GFP", "#00FF00"),
    ("RFP", "#FF0000"),
    ("Cy5", "#FF00FF"),
    ("YFP", "#FFFF00"),
];

pub const FLUOROPHORES_ACCESSIBLE: &[(&str, &str)] = &[
    ("Channel1", "#0072B2"),
    ("Channel2", "#E69F00"),
    ("Channel3", "#D55E00"),
    ("Channel4", "#CC79A7"),
    ("Channel5", "#F0E442"),
];

pub const DNA_BASES: &[(&str, &str)] = &[
    ("A", "#00CC00"),
    ("C", "#0000CC"),
    ("G", "#FFB300"),
    ("T", "#CC0000"),
];

pub const DNA_BASES_ACCESSIBLE: &[(&str, &str)] = &[
    ("A", "#009E73"),
    ("C", "#0072B2"),
    ("G", "#E69F00"),
    ("T", "#D55E00"),
];
