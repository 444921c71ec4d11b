//! Generated records for names missing from the static table.

use rand::Rng;

use super::syllables::phonetic_pronunciation;
use crate::models::NameRecord;

/// Origins assigned at random to generated records.
pub const FALLBACK_ORIGINS: [&str; 8] = [
    "English", "Hebrew", "Greek", "Latin", "Germanic", "Celtic", "Arabic", "Sanskrit",
];

/// Prefix applied to every generated origin.
pub const ORIGIN_PREFIX: &str = "Possibly ";

const VOWEL_INITIALS: &str = "aeiou";
const WISE_INITIALS: &str = "bcdfg";
const BRAVE_INITIALS: &str = "hjklm";

/// Meaning bucket chosen from the first character of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeaningClass {
    StrongLeader,
    WiseIntelligent,
    BraveCourageous,
    BlessedFortunate,
}

impl MeaningClass {
    /// Classify by the lower-cased first character.
    ///
    /// Classes are checked in order and the first match wins. Initials outside
    /// the three explicit sets (including `n`) land in `BlessedFortunate`.
    /// The lowered initial is tested as a substring of each set, so an empty
    /// name classifies as `StrongLeader`.
    pub fn of(name: &str) -> Self {
        let initial: String = name
            .chars()
            .next()
            .map(|c| c.to_lowercase().collect())
            .unwrap_or_default();

        if VOWEL_INITIALS.contains(initial.as_str()) {
            MeaningClass::StrongLeader
        } else if WISE_INITIALS.contains(initial.as_str()) {
            MeaningClass::WiseIntelligent
        } else if BRAVE_INITIALS.contains(initial.as_str()) {
            MeaningClass::BraveCourageous
        } else {
            MeaningClass::BlessedFortunate
        }
    }

    pub fn describe(&self, name: &str) -> String {
        match self {
            MeaningClass::StrongLeader => format!(
                "{name} is a name that likely means \"strong\" or \"leader\". Names starting with vowels often have roots in ancient languages and carry positive connotations."
            ),
            MeaningClass::WiseIntelligent => format!(
                "{name} possibly means \"wise\" or \"intelligent\". This name may have origins in multiple cultures, each with their own interpretation."
            ),
            MeaningClass::BraveCourageous => format!(
                "{name} likely means \"brave\" or \"courageous\". This name has been used across different cultures throughout history."
            ),
            MeaningClass::BlessedFortunate => format!(
                "{name} may mean \"blessed\" or \"fortunate\". While not as common as some other names, it has a beautiful meaning and cultural significance."
            ),
        }
    }
}

/// Pick a generated origin, already prefixed.
pub fn random_origin<R: Rng>(rng: &mut R) -> String {
    let origin = FALLBACK_ORIGINS[rng.gen_range(0..FALLBACK_ORIGINS.len())];
    format!("{ORIGIN_PREFIX}{origin}")
}

fn history(name: &str) -> String {
    format!(
        "{name} has been used in various cultures throughout history. While not as documented as some more common names, it carries unique cultural significance and personal meaning to those who bear it."
    )
}

/// Build a plausible record for `name`, keeping the input exactly as given.
pub fn generate<R: Rng>(name: &str, rng: &mut R) -> NameRecord {
    NameRecord {
        name: name.to_string(),
        meaning: MeaningClass::of(name).describe(name),
        origin: random_origin(rng),
        phonetic_pronunciation: phonetic_pronunciation(name),
        pronunciation: None,
        history: Some(history(name)),
        variants: Vec::new(),
        famous_people: Vec::new(),
    }
}
