//! Static table of documented names.

use crate::models::NameRecord;

/// A documented name, stored as borrowed constants.
pub struct KnownName {
    /// Lower-cased lookup key
    pub key: &'static str,
    pub name: &'static str,
    pub meaning: &'static str,
    pub origin: &'static str,
    pub phonetic_pronunciation: &'static str,
    pub pronunciation: Option<&'static str>,
    pub history: &'static str,
    pub variants: &'static [&'static str],
    pub famous_people: &'static [&'static str],
}

impl KnownName {
    pub fn to_record(&self) -> NameRecord {
        NameRecord {
            name: self.name.to_string(),
            meaning: self.meaning.to_string(),
            origin: self.origin.to_string(),
            phonetic_pronunciation: self.phonetic_pronunciation.to_string(),
            pronunciation: self.pronunciation.map(str::to_string),
            history: Some(self.history.to_string()),
            variants: self.variants.iter().map(|v| v.to_string()).collect(),
            famous_people: self.famous_people.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Key of the name highlighted on the client's About screen.
pub const FEATURED_KEY: &str = "muzamil";

pub static KNOWN_NAMES: &[KnownName] = &[
    KnownName {
        key: "muzamil",
        name: "Muzamil",
        meaning: "Muzamil is an Arabic name meaning \"wrapped\" or \"swaddled in cloth\". It has religious significance in Islam, as it refers to someone who is covered or wrapped in garments.",
        origin: "Arabic",
        phonetic_pronunciation: "moo-zam-mil",
        pronunciation: Some("Muzamil is pronounced as \"moo-ZAM-mil\", with the stress on the second syllable."),
        history: "The name Muzamil appears in the Quran, where it is used as a title for Prophet Muhammad in Surah Al-Muzzammil, meaning \"The Wrapped One\" or \"The Enshrouded One\". The name represents spiritual protection and guidance.",
        variants: &["Muzzammil", "Muzammil", "Muzzamil"],
        famous_people: &[
            "Muzzamil Desai, Indian film director",
            "Muzammil Ibrahim, Indian model and actor",
            "Muzammil Siddiqui, American Islamic scholar",
        ],
    },
    KnownName {
        key: "john",
        name: "John",
        meaning: "John is a name that means \"God is gracious\" or \"Yahweh has been gracious\".",
        origin: "Hebrew",
        phonetic_pronunciation: "jon",
        pronunciation: None,
        history: "The name John originated from the Hebrew name Yochanan, which was Latinized to Johannes and later shortened to John in English. It has been one of the most popular names throughout Christian history, largely due to its biblical significance.",
        variants: &["Jon", "Jonathan", "Johannes", "Juan", "Ivan", "Sean", "Evan"],
        famous_people: &[
            "John F. Kennedy, 35th U.S. President",
            "John Lennon, English musician and member of The Beatles",
            "John Legend, American singer and songwriter",
        ],
    },
    KnownName {
        key: "sarah",
        name: "Sarah",
        meaning: "Sarah means \"princess\" or \"noblewoman\".",
        origin: "Hebrew",
        phonetic_pronunciation: "sair-uh",
        pronunciation: None,
        history: "In the Bible, Sarah was the wife of Abraham and mother of Isaac. The name has been popular across cultures and throughout history for its elegant meaning and biblical significance.",
        variants: &["Sara", "Sarai", "Sarina", "Sariah"],
        famous_people: &[
            "Sarah Jessica Parker, American actress",
            "Sarah Michelle Gellar, American actress",
            "Sarah Paulson, American actress",
        ],
    },
    KnownName {
        key: "maria",
        name: "Maria",
        meaning: "Maria means \"bitter\" or \"beloved\".",
        origin: "Latin, derived from Hebrew",
        phonetic_pronunciation: "muh-ree-uh",
        pronunciation: None,
        history: "Maria is the Latin form of Mary, which comes from the Hebrew name Miriam. It has been widely used throughout Christian countries due to its association with the Virgin Mary in the Bible.",
        variants: &["Mary", "Miriam", "Marie", "Maryam", "Mariam"],
        famous_people: &[
            "Maria Sharapova, Russian tennis player",
            "Maria Callas, Greek-American opera singer",
            "Maria Montessori, Italian physician and educator",
        ],
    },
    KnownName {
        key: "david",
        name: "David",
        meaning: "David means \"beloved\" or \"friend\".",
        origin: "Hebrew",
        phonetic_pronunciation: "day-vid",
        pronunciation: None,
        history: "In the Bible, David was the second king of Israel who, as a young shepherd, defeated the giant Goliath. The name has been consistently popular throughout Western history.",
        variants: &["Dave", "Davey", "Davi", "Davide", "Dawid"],
        famous_people: &[
            "David Beckham, English footballer",
            "David Bowie, English musician",
            "David Copperfield, American magician",
        ],
    },
    KnownName {
        key: "sophia",
        name: "Sophia",
        meaning: "Sophia means \"wisdom\".",
        origin: "Greek",
        phonetic_pronunciation: "so-fee-uh",
        pronunciation: None,
        history: "The name Sophia comes from the Greek word for wisdom. In Greek Orthodox and Catholic traditions, Saint Sophia was the mother of three daughters named Faith, Hope, and Love.",
        variants: &["Sofia", "Sophie", "Sonya", "Sonia"],
        famous_people: &[
            "Sophia Loren, Italian actress",
            "Sofia Vergara, Colombian-American actress",
            "Sophie Turner, English actress",
        ],
    },
];

/// Find a table entry by its already lower-cased key.
pub fn find(key: &str) -> Option<&'static KnownName> {
    KNOWN_NAMES.iter().find(|known| known.key == key)
}
