//! Gem catalog: categories, gems, sizes and batch selection.
//!
//! Static data plus the table rolls used to pick gems at random. The
//! engines never read these tables directly; a caller turns picks into
//! [`GemPlan`](crate::batch::GemPlan)s.

pub mod gems;
pub mod lore;

pub use gems::{GemCategory, GemKind, CATEGORIES, SIZES};
pub use lore::{ColorNote, GemLore, StandardLore, NO_KNOWN_PROPERTY};

use crate::core::{AppraisalError, DiceSource, EngineConfig, Result};

/// Look up a category by its exact name.
pub fn category(name: &str) -> Result<&'static GemCategory> {
    CATEGORIES
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| AppraisalError::UnknownCategory(name.to_string()))
}

/// Look up a gem within a category, ignoring case.
pub fn find_gem(category: &'static GemCategory, name: &str) -> Result<&'static GemKind> {
    category
        .gems
        .iter()
        .find(|g| g.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| AppraisalError::UnknownGem {
            category: category.name.to_string(),
            name: name.to_string(),
        })
}

/// Roll d100 for a category. Returns the category and the roll.
pub fn roll_for_category(rng: &mut dyn DiceSource) -> (&'static GemCategory, u32) {
    let roll = rng.percentile();
    let category = CATEGORIES
        .iter()
        .find(|c| roll <= c.max_roll)
        .unwrap_or(&CATEGORIES[CATEGORIES.len() - 1]);
    (category, roll)
}

/// Roll uniformly for a gem within a category. Returns the gem and the roll.
pub fn roll_for_gem(category: &'static GemCategory, rng: &mut dyn DiceSource) -> (&'static GemKind, u32) {
    let count = category.gems.len() as u32;
    let roll = rng.roll(count);
    (&category.gems[(roll.max(1) - 1) as usize], roll)
}

/// Resolve a batch-size menu choice: 1, 5, 10, or a custom count.
pub fn select_batch_count(choice: u32, custom: Option<u32>, config: &EngineConfig) -> Result<u32> {
    match choice {
        1 => Ok(1),
        2 => Ok(5),
        3 => Ok(10),
        4 => {
            let count = custom.ok_or(AppraisalError::MissingBatchCount)?;
            if count < 1 || count > config.max_custom_batch {
                return Err(AppraisalError::InvalidBatchCount {
                    count,
                    max: config.max_custom_batch,
                });
            }
            Ok(count)
        }
        other => Err(AppraisalError::InvalidBatchChoice(other)),
    }
}

/// Size class by 1-based menu index: label and value multiplier.
pub fn choose_size(index: usize) -> Result<(&'static str, f64)> {
    index
        .checked_sub(1)
        .and_then(|i| SIZES.get(i))
        .copied()
        .ok_or(AppraisalError::InvalidSizeIndex(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDice;

    #[test]
    fn test_category_rolls() {
        let cases = [(1, 0), (25, 0), (26, 1), (50, 1), (51, 2), (70, 2), (71, 3), (90, 3), (91, 4), (99, 4), (100, 5)];
        for (roll, expected) in cases {
            let mut dice = ScriptedDice::new([roll]);
            let (category, rolled) = roll_for_category(&mut dice);
            assert_eq!(rolled, roll);
            assert_eq!(category.name, CATEGORIES[expected].name, "roll {}", roll);
        }
    }

    #[test]
    fn test_roll_for_gem() {
        let jewels = &CATEGORIES[5];
        let mut dice = ScriptedDice::new([2]);
        let (gem, roll) = roll_for_gem(jewels, &mut dice);
        assert_eq!(roll, 2);
        assert_eq!(gem.name, "Diamond");
        assert_eq!(gem.base_gp, 5000.0);
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(category(CATEGORIES[2].name).unwrap().gems.len(), 11);
        assert!(matches!(category("Bogus"), Err(AppraisalError::UnknownCategory(_))));
    }

    #[test]
    fn test_find_gem() {
        let jewels = &CATEGORIES[5];
        assert_eq!(find_gem(jewels, "diamond").unwrap().base_gp, 5000.0);
        assert!(matches!(
            find_gem(jewels, "Azurite"),
            Err(AppraisalError::UnknownGem { .. })
        ));
    }

    #[test]
    fn test_batch_counts() {
        let config = EngineConfig::default();
        assert_eq!(select_batch_count(1, None, &config).unwrap(), 1);
        assert_eq!(select_batch_count(2, None, &config).unwrap(), 5);
        assert_eq!(select_batch_count(3, None, &config).unwrap(), 10);
        assert_eq!(select_batch_count(4, Some(37), &config).unwrap(), 37);
    }

    #[test]
    fn test_batch_count_errors() {
        let config = EngineConfig::default();
        assert!(matches!(
            select_batch_count(4, None, &config),
            Err(AppraisalError::MissingBatchCount)
        ));
        assert!(matches!(
            select_batch_count(4, Some(0), &config),
            Err(AppraisalError::InvalidBatchCount { count: 0, .. })
        ));
        assert!(matches!(
            select_batch_count(4, Some(1000), &config),
            Err(AppraisalError::InvalidBatchCount { count: 1000, .. })
        ));
        assert!(matches!(
            select_batch_count(5, None, &config),
            Err(AppraisalError::InvalidBatchChoice(5))
        ));
    }

    #[test]
    fn test_sizes() {
        assert_eq!(choose_size(1).unwrap(), ("Very Small", 0.5));
        assert_eq!(choose_size(3).unwrap(), ("Average", 1.0));
        assert_eq!(choose_size(6).unwrap(), ("Huge", 2.0));
        assert!(matches!(choose_size(0), Err(AppraisalError::InvalidSizeIndex(0))));
        assert!(matches!(choose_size(7), Err(AppraisalError::InvalidSizeIndex(7))));
    }

    #[test]
    fn test_every_category_has_gems() {
        assert_eq!(CATEGORIES.len(), 6);
        assert!(CATEGORIES.windows(2).all(|w| w[0].max_roll < w[1].max_roll));
        for category in CATEGORIES {
            assert!(!category.gems.is_empty());
        }
    }
}
