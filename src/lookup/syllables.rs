//! Vowel-boundary chunking used for generated pronunciations.

const VOWELS: &str = "aeiouy";

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Split a name into pseudo-syllables.
///
/// A chunk closes on a vowel that is either the last character or followed
/// by a non-vowel; whatever remains after the scan becomes the final chunk.
/// This is a greedy heuristic, not real syllabification.
pub fn split_syllables(name: &str) -> Vec<String> {
    let lower = name.to_lowercase();
    let chars: Vec<char> = lower.chars().collect();

    let mut syllables = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        current.push(c);

        let next_is_vowel = chars.get(i + 1).is_some_and(|&n| is_vowel(n));
        if is_vowel(c) && !next_is_vowel {
            syllables.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        syllables.push(current);
    }

    if syllables.is_empty() {
        vec![lower]
    } else {
        syllables
    }
}

/// Hyphen-joined pronunciation built from [`split_syllables`].
pub fn phonetic_pronunciation(name: &str) -> String {
    split_syllables(name).join("-")
}
