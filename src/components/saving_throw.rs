use std::{
    collections::{HashMap, HashSet},
    fmt::{self, Display},
};

use hecs::Entity;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use uom::si::{f32::Time, time::second};

use crate::components::{cue::Cue, id::SpellId};

/// Which of the three saves a defender rolls. Spell content may introduce
/// categories the cue table doesn't know about; those are carried as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveCategory {
    Fortitude,
    Reflex,
    Will,
    Other(u16),
}

impl Display for SaveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveCategory::Fortitude => write!(f, "Fortitude"),
            SaveCategory::Reflex => write!(f, "Reflex"),
            SaveCategory::Will => write!(f, "Will"),
            SaveCategory::Other(code) => write!(f, "Other({})", code),
        }
    }
}

/// What the save is against. Only `Death` changes cue selection; the rest are
/// passed through to the roll, where they decide immunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveQualifier {
    #[default]
    All,
    MindSpells,
    Poison,
    Disease,
    Fear,
    Sonic,
    Acid,
    Fire,
    Electricity,
    Positive,
    Negative,
    Death,
    Cold,
    Divine,
    Trap,
    Spell,
    Good,
    Evil,
    Law,
    Chaos,
    Other(u16),
}

impl SaveQualifier {
    pub fn is_death(&self) -> bool {
        matches!(self, SaveQualifier::Death)
    }
}

impl Display for SaveQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveQualifier::Other(code) => write!(f, "Other({})", code),
            other => write!(f, "{:?}", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveVerdict {
    Failed,
    Succeeded,
    /// The defender is immune to the qualifier. Reported as-is to the caller,
    /// but the resolver's boolean treats it as a failure.
    Immune,
}

impl SaveVerdict {
    pub fn is_failed(&self) -> bool {
        matches!(self, SaveVerdict::Failed)
    }
}

impl Display for SaveVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub static SAVE_DIFFICULTY_MIN: u8 = 1;
pub static SAVE_DIFFICULTY_MAX: u8 = 255;

/// Difficulty class of a save, always within `[1, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32")]
pub struct SaveDifficulty(u8);

impl SaveDifficulty {
    pub fn new(raw: i32) -> Self {
        Self(raw.clamp(SAVE_DIFFICULTY_MIN as i32, SAVE_DIFFICULTY_MAX as i32) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<i32> for SaveDifficulty {
    fn from(raw: i32) -> Self {
        Self::new(raw)
    }
}

impl Display for SaveDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DC {}", self.0)
    }
}

/// Flat bonus per save category, read by the default d20 roller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavingThrowBonuses {
    bonuses: HashMap<SaveCategory, i32>,
}

impl SavingThrowBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: SaveCategory, bonus: i32) -> Self {
        self.set(category, bonus);
        self
    }

    pub fn set(&mut self, category: SaveCategory, bonus: i32) {
        self.bonuses.insert(category, bonus);
    }

    pub fn get(&self, category: &SaveCategory) -> i32 {
        self.bonuses.get(category).copied().unwrap_or(0)
    }
}

/// Qualifiers a defender is immune to, e.g. poison or death effects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveImmunities(pub HashSet<SaveQualifier>);

impl SaveImmunities {
    pub fn new(qualifiers: impl IntoIterator<Item = SaveQualifier>) -> Self {
        Self(qualifiers.into_iter().collect())
    }

    pub fn contains(&self, qualifier: &SaveQualifier) -> bool {
        self.0.contains(qualifier)
    }
}

/// Caller-facing request to the saving throw resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub defender: Entity,
    pub category: SaveCategory,
    /// Taken as-is from the caller and clamped by the resolver.
    pub difficulty: i32,
    pub qualifier: SaveQualifier,
    pub opponent: Option<Entity>,
    pub spell: Option<SpellId>,
    pub delay: Time,
}

impl SaveRequest {
    pub fn new(defender: Entity, category: SaveCategory, difficulty: i32) -> Self {
        Self {
            defender,
            category,
            difficulty,
            qualifier: SaveQualifier::All,
            opponent: None,
            spell: None,
            delay: Time::new::<second>(0.0),
        }
    }

    pub fn with_qualifier(mut self, qualifier: SaveQualifier) -> Self {
        self.qualifier = qualifier;
        self
    }

    pub fn with_opponent(mut self, opponent: Entity) -> Self {
        self.opponent = Some(opponent);
        self
    }

    pub fn with_spell(mut self, spell: SpellId) -> Self {
        self.spell = Some(spell);
        self
    }

    pub fn with_delay(mut self, delay: Time) -> Self {
        self.delay = delay;
        self
    }
}

/// What the roll capability receives once the resolver has normalised the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveRoll {
    pub defender: Entity,
    pub category: SaveCategory,
    pub difficulty: SaveDifficulty,
    pub qualifier: SaveQualifier,
    pub opponent: Entity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveResolution {
    /// True only for `SaveVerdict::Succeeded`.
    pub succeeded: bool,
    pub verdict: SaveVerdict,
    pub cue: Option<Cue>,
    pub difficulty: SaveDifficulty,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 1)]
    #[case(-40, 1)]
    #[case(1, 1)]
    #[case(130, 130)]
    #[case(255, 255)]
    #[case(256, 255)]
    #[case(i32::MAX, 255)]
    #[case(i32::MIN, 1)]
    fn difficulty_is_clamped(#[case] raw: i32, #[case] expected: u8) {
        assert_eq!(SaveDifficulty::new(raw).value(), expected);
    }

    #[rstest]
    #[case("0", 1)]
    #[case("300", 255)]
    #[case("-5", 1)]
    #[case("17", 17)]
    fn deserialized_difficulty_is_clamped(#[case] json: &str, #[case] expected: u8) {
        let difficulty: SaveDifficulty = serde_json::from_str(json).unwrap();
        assert_eq!(difficulty.value(), expected);
    }

    #[test]
    fn missing_bonus_defaults_to_zero() {
        let bonuses = SavingThrowBonuses::new().with(SaveCategory::Reflex, 4);
        assert_eq!(bonuses.get(&SaveCategory::Reflex), 4);
        assert_eq!(bonuses.get(&SaveCategory::Will), 0);
        assert_eq!(bonuses.get(&SaveCategory::Other(7)), 0);
    }

    #[test]
    fn category_display() {
        assert_eq!(SaveCategory::Will.to_string(), "Will");
        assert_eq!(SaveCategory::Other(9).to_string(), "Other(9)");
        assert_eq!(SaveQualifier::MindSpells.to_string(), "MindSpells");
    }
}
