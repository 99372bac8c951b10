//! Gem lore: reputed magical properties and colour meanings.
//!
//! Pure lookups. The batch pipeline annotates appraised gems through the
//! [`GemLore`] trait so a campaign can swap in its own tables.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Shown when no entry matches a gem's name.
pub const NO_KNOWN_PROPERTY: &str = "No known magical properties";

/// Lookup tables consulted when a gem is appraised.
pub trait GemLore {
    /// Reputed magical property of a gem, by name.
    fn magical_property(&self, gem_name: &str) -> String;

    /// Colour notes implied by a gem's colour description, in canonical order.
    fn color_properties(&self, description: &str) -> Vec<(ColorNote, String)>;
}

/// Canonical colours with a reputed meaning. Ordering is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColorNote {
    Black,
    Blue,
    Clear,
    Green,
    Red,
    White,
    Yellow,
}

impl ColorNote {
    #[must_use]
    pub const fn meaning(self) -> &'static str {
        match self {
            ColorNote::Black => "The Earth — darkness — negation",
            ColorNote::Blue => "The Heavens — truth — spirituality",
            ColorNote::Clear => "The Sun — luck",
            ColorNote::Green => "Venus — reproduction — sight — resurrection",
            ColorNote::Red => "Hemorrhage control — heat",
            ColorNote::White => "The Moon — enigmatic",
            ColorNote::Yellow => "Secrecy — homeopathy — jaundice",
        }
    }
}

impl fmt::Display for ColorNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

const MAGICAL_PROPERTIES: &[(&str, &str)] = &[
    ("Agate", "Restful and safe sleep"),
    ("Alexandrite", "Good omens"),
    ("Amber", "Wards off diseases"),
    ("Amethyst", "Prevents drunkenness or drugging"),
    ("Beryl", "Wards off foes"),
    ("Bloodstone", "Weather control"),
    ("Carbuncle", "Powers of dragon's sight"),
    ("Carnelian", "Protection from evil"),
    ("Cats' eye agate", "Protection from spirits"),
    ("Chalcedony", "Wards off undead"),
    ("Chrysoberyl", "Protection from possession"),
    ("Chrysolite", "Wards off spells"),
    ("Chrysoprase", "Invisibility"),
    ("Coral", "Calms weather, safety in river crossing, cures madness, stanches bleeding"),
    ("Diamond", "Invulnerability vs. undead"),
    ("Hematite", "Aids fighters, heals wounds"),
    ("Jacinth", "Luck traveling, wards off plague, protection from fire"),
    ("Jade", "Skill at music and musical instruments"),
    ("Jasper", "Protection from venom"),
    ("Jet", "Soul object material"),
    ("Lapis Lazuli", "Raises morale, courage"),
    ("Malachite", "Protection from falling"),
    ("Malachite & Sunstone", "Wards off spells, evil spirits, and poisons"),
    ("Moonstone", "Cures lycanthropy"),
    ("Olivine", "Protection from spells"),
    ("Onyx", "Causes discord amongst enemies"),
    ("Peridot", "Wards off enchantments"),
    ("Ruby", "Gives good luck"),
    ("Sapphire", "Aids understanding of problems, kills spiders, boosts magical abilities"),
    ("Star Sapphire", "Protection from magic"),
    ("Sard", "Benefits wisdom"),
    ("Serpentine", "Adds to wile and cunning"),
    ("Topaz", "Wards off evil spells"),
    ("Turquoise", "Aids horses in all ways (but shatters when it operates)"),
];

/// Gem names that share another gem's lore entry.
const NAME_ALIASES: &[(&str, &str)] = &[
    ("sardonyx", "Onyx"),
    ("oriental amethyst", "Amethyst"),
    ("star ruby", "Ruby"),
    ("star sapphire", "Star Sapphire"),
];

/// Colour words and the canonical colour they imply.
const COLOR_WORDS: &[(&str, ColorNote)] = &[
    ("black", ColorNote::Black),
    ("blue", ColorNote::Blue),
    ("green", ColorNote::Green),
    ("red", ColorNote::Red),
    ("white", ColorNote::White),
    ("clear", ColorNote::Clear),
    ("yellow", ColorNote::Yellow),
    ("bluish", ColorNote::Blue),
    ("blueish", ColorNote::Blue),
    ("greenish", ColorNote::Green),
    ("reddish", ColorNote::Red),
    ("whitish", ColorNote::White),
    ("blackish", ColorNote::Black),
    ("yellowish", ColorNote::Yellow),
    ("pinkish", ColorNote::Red),
    ("purplish", ColorNote::Blue),
    ("violet", ColorNote::Blue),
    ("azure", ColorNote::Blue),
    ("cerulean", ColorNote::Blue),
    ("cobalt", ColorNote::Blue),
    ("indigo", ColorNote::Blue),
    ("navy", ColorNote::Blue),
    ("sapphire", ColorNote::Blue),
    ("turquoise", ColorNote::Blue),
    ("emerald", ColorNote::Green),
    ("olive", ColorNote::Green),
    ("teal", ColorNote::Green),
    ("verdant", ColorNote::Green),
    ("crimson", ColorNote::Red),
    ("scarlet", ColorNote::Red),
    ("ruby", ColorNote::Red),
    ("magenta", ColorNote::Red),
    ("rose", ColorNote::Red),
    ("rosy", ColorNote::Red),
    ("pink", ColorNote::Red),
    ("milky", ColorNote::White),
    ("ivory", ColorNote::White),
    ("snow", ColorNote::White),
    ("snowy", ColorNote::White),
    ("colorless", ColorNote::Clear),
    ("gold", ColorNote::Yellow),
    ("golden", ColorNote::Yellow),
    ("lemon", ColorNote::Yellow),
    ("saffron", ColorNote::Yellow),
    ("amber", ColorNote::Yellow),
    ("honey", ColorNote::Yellow),
];

/// The standard DMG lore tables.
#[derive(Clone, Debug)]
pub struct StandardLore {
    properties: FxHashMap<&'static str, &'static str>,
    aliases: FxHashMap<&'static str, &'static str>,
}

impl Default for StandardLore {
    fn default() -> Self {
        Self {
            properties: MAGICAL_PROPERTIES.iter().copied().collect(),
            aliases: NAME_ALIASES.iter().copied().collect(),
        }
    }
}

impl StandardLore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Key a gem name into the property table.
    ///
    /// Every agate shares one entry except cat's-eye agate; a few named
    /// varieties borrow the entry of their parent stone.
    #[must_use]
    pub fn normalize<'a>(&self, name: &'a str) -> &'a str {
        let lowered = name.trim().to_lowercase();
        if lowered.contains("agate") {
            return if lowered.contains("cat") { "Cats' eye agate" } else { "Agate" };
        }
        self.aliases.get(lowered.as_str()).copied().unwrap_or(name)
    }
}

impl GemLore for StandardLore {
    fn magical_property(&self, gem_name: &str) -> String {
        let key = self.normalize(gem_name);
        self.properties
            .get(key)
            .copied()
            .unwrap_or(NO_KNOWN_PROPERTY)
            .to_string()
    }

    fn color_properties(&self, description: &str) -> Vec<(ColorNote, String)> {
        let lowered = description.to_lowercase();
        let mut found: Vec<ColorNote> = COLOR_WORDS
            .iter()
            .filter(|(word, _)| lowered.contains(word))
            .map(|&(_, color)| color)
            .collect();
        found.sort();
        found.dedup();
        found
            .into_iter()
            .map(|c| (c, c.meaning().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_property() {
        let lore = StandardLore::new();
        assert_eq!(lore.magical_property("Jade"), "Skill at music and musical instruments");
    }

    #[test]
    fn test_agate_variants() {
        let lore = StandardLore::new();
        assert_eq!(lore.magical_property("Moss Agate"), "Restful and safe sleep");
        assert_eq!(lore.magical_property("Banded Agate"), "Restful and safe sleep");
        assert_eq!(lore.magical_property("Cat's Eye Agate"), "Protection from spirits");
    }

    #[test]
    fn test_aliases() {
        let lore = StandardLore::new();
        assert_eq!(lore.magical_property("Sardonyx"), "Causes discord amongst enemies");
        assert_eq!(lore.magical_property("Star Ruby"), "Gives good luck");
        assert_eq!(lore.magical_property("Oriental Amethyst"), "Prevents drunkenness or drugging");
        assert_eq!(lore.magical_property("star sapphire"), "Protection from magic");
    }

    #[test]
    fn test_unknown_gem() {
        let lore = StandardLore::new();
        assert_eq!(lore.magical_property("Black Sapphire"), NO_KNOWN_PROPERTY);
    }

    #[test]
    fn test_colors_in_canonical_order() {
        let lore = StandardLore::new();
        let notes = lore.color_properties("opaque, light and dark blue with yellow flecks");
        let colors: Vec<_> = notes.iter().map(|(c, _)| *c).collect();
        assert_eq!(colors, vec![ColorNote::Blue, ColorNote::Yellow]);
        assert_eq!(notes[0].1, ColorNote::Blue.meaning());
    }

    #[test]
    fn test_colors_from_synonyms() {
        let lore = StandardLore::new();
        let colors: Vec<_> = lore
            .color_properties("opaque, crimson")
            .into_iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(colors, vec![ColorNote::Red]);

        // "reddish" also contains "red": still one Red entry
        let colors: Vec<_> = lore
            .color_properties("transparent, pale green, brown pale, or reddish pale")
            .into_iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(colors, vec![ColorNote::Green, ColorNote::Red]);
    }

    #[test]
    fn test_no_colors() {
        let lore = StandardLore::new();
        assert!(lore.color_properties("fiery orange").is_empty());
    }
}
