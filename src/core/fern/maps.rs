/// `(x, y) -> (a·x + b·y + e, c·x + d·y + f)`, picked with probability
/// `weight`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMap {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub weight: f64,
}

impl AffineMap {
    #[inline]
    #[must_use]
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.b * y + self.e,
            self.c * x + self.d * y + self.f,
        )
    }
}

/// Stem, successive leaflets, left frond, right frond.
pub const BARNSLEY_MAPS: [AffineMap; 4] = [
    AffineMap {
        a: 0.0,
        b: 0.0,
        c: 0.0,
        d: 0.16,
        e: 0.0,
        f: 0.0,
        weight: 0.01,
    },
    AffineMap {
        a: 0.85,
        b: 0.04,
        c: -0.04,
        d: 0.85,
        e: 0.0,
        f: 1.6,
        weight: 0.85,
    },
    AffineMap {
        a: 0.2,
        b: -0.26,
        c: 0.23,
        d: 0.22,
        e: 0.0,
        f: 1.6,
        weight: 0.07,
    },
    AffineMap {
        a: -0.15,
        b: 0.28,
        c: 0.26,
        d: 0.24,
        e: 0.0,
        f: 0.44,
        weight: 0.07,
    },
];

/// Index of the leaflet map whose shear breathes.
pub const BREATHING_MAP: usize = 1;

/// The Barnsley maps with the leaflet map's shear offset by `shear`.
#[must_use]
pub fn breathing_maps(shear: f64) -> [AffineMap; 4] {
    let mut maps = BARNSLEY_MAPS;
    maps[BREATHING_MAP].b += shear;
    maps[BREATHING_MAP].c -= shear;
    maps
}

/// Picks a map for a uniform draw in `[0, 1)`.
#[must_use]
pub fn choose_map(maps: &[AffineMap; 4], draw: f64) -> &AffineMap {
    let mut cumulative = 0.0;

    for map in maps {
        cumulative += map.weight;
        if draw < cumulative {
            return map;
        }
    }

    &maps[maps.len() - 1]
}
