//! Standard gem tables (DMG pp. 25-26).

/// One kind of gem.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GemKind {
    pub name: &'static str,
    /// Appearance, including colour words the lore tables read.
    pub color: &'static str,
    pub base_gp: f64,
}

/// A category of gems, selected on d100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GemCategory {
    pub name: &'static str,
    /// Highest d100 roll that selects this category.
    pub max_roll: u32,
    pub gems: &'static [GemKind],
}

const fn gem(name: &'static str, color: &'static str, base_gp: f64) -> GemKind {
    GemKind { name, color, base_gp }
}

const ORNAMENTAL: &[GemKind] = &[
    gem("Azurite", "opaque, deep blue", 10.0),
    gem("Banded Agate", "translucent, striped multicolor", 10.0),
    gem("Blue Quartz", "transparent, pale blue", 10.0),
    gem("Eye Agate", "translucent, brown/green with concentric circles", 10.0),
    gem("Hematite", "opaque, black/gray metallic", 10.0),
    gem("Lapis Lazuli", "opaque, light and dark blue with yellow flecks", 10.0),
    gem("Malachite", "opaque, striated light and dark green", 10.0),
    gem("Moss Agate", "transparent, pink or yellow-white with grayish or greenish moss markings", 10.0),
    gem("Obsidian", "opaque, black", 10.0),
    gem("Rhodochrosite", "opaque, light pink", 10.0),
    gem("Tiger Eye", "translucent, rich brown with golden center under-hue", 10.0),
    gem("Turquoise", "opaque, light blue-green", 10.0),
];

const SEMI_PRECIOUS: &[GemKind] = &[
    gem("Bloodstone", "opaque, dark grey with red flecks", 50.0),
    gem("Carnelian", "opaque, orange to reddish brown", 50.0),
    gem("Chalcedony", "opaque, white", 50.0),
    gem("Chrysoprase", "translucent, apple green to emerald green", 50.0),
    gem("Citrine", "transparent, pale yellow", 50.0),
    gem("Jasper", "blue-black to brown", 50.0),
    gem("Moonstone", "translucent, milky with blue sheen", 50.0),
    gem("Onyx", "opaque, bands of black and white or pure black or white", 50.0),
    gem("Rock Crystal", "transparent, clear", 50.0),
    gem("Sardonyx", "opaque, bands of red and onyx", 50.0),
    gem("Smoky Quartz", "transparent, gray, yellow, or blue, all light", 50.0),
    gem("Star Rose Quartz", "transparent, translucent rosy stone with a white 'star' center", 50.0),
    gem("Zircon", "transparent, clear pale blue-green", 50.0),
];

const FANCY: &[GemKind] = &[
    gem("Amber", "transparent, watery gold to rich gold", 100.0),
    gem("Alexandrite", "transparent dark green", 100.0),
    gem("Amethyst", "transparent, deep purple", 100.0),
    gem("Chrysoberyl", "transparent, yellow green to green", 100.0),
    gem("Coral", "opaque, crimson", 100.0),
    gem("Garnet", "transparent red, brown-green", 100.0),
    gem("Jade", "translucent, light green, deep green, green and white, white", 100.0),
    gem("Jet", "opaque, deep black", 100.0),
    gem("Pearl", "opaque, lustrous white, yellowish, pinkish, etc", 100.0),
    gem("Spinel", "transparent, red, or brown", 100.0),
    gem("Tourmaline", "transparent, pale green, brown pale, or reddish pale", 100.0),
];

const FANCY_PRECIOUS: &[GemKind] = &[
    gem("Aquamarine", "transparent, pale blue-green", 500.0),
    gem("Violet Garnet", "transparent violet", 500.0),
    gem("Black Pearl", "opaque, black", 500.0),
    gem("Blue Spinel", "transparent, blue", 500.0),
    gem("Peridot", "rich olive green", 500.0),
    gem("Topaz", "transparent golden brown", 500.0),
];

const GEM_STONES: &[GemKind] = &[
    gem("Black Opal", "transparent, dark green with black mottling and golden flecks", 1000.0),
    gem("Emerald", "transparent, vivid green", 1000.0),
    gem("Fire Opal", "transparent, fiery red", 1000.0),
    gem("Opal", "translucent, pale blue with green and golden mottling", 1000.0),
    gem("Oriental Amethyst", "transparent, rich purple", 1000.0),
    gem("Star Ruby", "translucent, clear ruby with 'white' star center", 1000.0),
    gem("Star Sapphire", "translucent, clear sapphire with 'white' star center", 1000.0),
];

const JEWELS: &[GemKind] = &[
    gem("Black Sapphire", "transparent, lustrous black with glowing highlights", 5000.0),
    gem("Diamond", "transparent, blue-white", 5000.0),
    gem("Jacinth", "fiery orange", 5000.0),
    gem("Oriental Emerald", "transparent, clear bright green", 5000.0),
    gem("Ruby", "transparent, deep red", 5000.0),
    gem("Sapphire", "transparent, clear blue", 5000.0),
];

/// All categories in d100 order.
pub const CATEGORIES: &[GemCategory] = &[
    GemCategory {
        name: "(01-25) Ornamental Stones: Base Value 10gp",
        max_roll: 25,
        gems: ORNAMENTAL,
    },
    GemCategory {
        name: "(26-50) Semi-Precious Stones: Base Value 50gp",
        max_roll: 50,
        gems: SEMI_PRECIOUS,
    },
    GemCategory {
        name: "(51-70) Fancy Stones: Base Value 100 gp",
        max_roll: 70,
        gems: FANCY,
    },
    GemCategory {
        name: "(71-90) Fancy Stones (Precious): Base Value 500 gp",
        max_roll: 90,
        gems: FANCY_PRECIOUS,
    },
    GemCategory {
        name: "(91-99) Gem Stones: Base Value 1,000gp",
        max_roll: 99,
        gems: GEM_STONES,
    },
    GemCategory {
        name: "(00) Gem Stones (Jewels) 5,000 gp",
        max_roll: 100,
        gems: JEWELS,
    },
];

/// Size classes and their value multipliers, smallest first.
pub const SIZES: &[(&str, f64)] = &[
    ("Very Small", 0.5),
    ("Small", 0.75),
    ("Average", 1.0),
    ("Large", 1.25),
    ("Very Large", 1.5),
    ("Huge", 2.0),
];
