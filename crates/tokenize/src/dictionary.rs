use std::collections::HashMap;
use std::sync::LazyLock;

/// Numeric identifier assigned to a token.
pub type TokenId = u64;

/// Dynamically generated IDs start here; every static ID is below it.
pub const DYNAMIC_ID_OFFSET: TokenId = 1000;

/// Built-in entries: words, punctuation marks and whitespace variants.
const ENTRIES: &[(&str, TokenId)] = &[
    // articles
    ("the", 1),
    ("a", 2),
    ("an", 3),
    // pronouns
    ("I", 4),
    ("you", 5),
    ("he", 6),
    ("she", 7),
    ("it", 8),
    ("we", 9),
    ("they", 10),
    ("me", 11),
    ("him", 12),
    ("her", 13),
    ("us", 14),
    ("them", 15),
    ("this", 16),
    ("that", 17),
    ("these", 18),
    ("those", 19),
    // verbs
    ("is", 20),
    ("am", 21),
    ("are", 22),
    ("was", 23),
    ("were", 24),
    ("be", 25),
    ("been", 26),
    ("have", 27),
    ("has", 28),
    ("had", 29),
    ("do", 30),
    ("does", 31),
    ("did", 32),
    ("will", 33),
    ("would", 34),
    ("could", 35),
    ("should", 36),
    ("can", 37),
    ("may", 38),
    ("go", 39),
    ("get", 40),
    ("make", 41),
    ("see", 42),
    ("know", 43),
    ("take", 44),
    ("come", 45),
    ("give", 46),
    ("say", 47),
    ("tell", 48),
    ("think", 49),
    ("look", 50),
    // common words
    ("hello", 51),
    ("hi", 52),
    ("hii", 53),
    ("world", 54),
    ("and", 55),
    ("or", 56),
    ("but", 57),
    ("if", 58),
    ("when", 59),
    ("where", 60),
    ("why", 61),
    ("how", 62),
    ("what", 63),
    ("who", 64),
    ("which", 65),
    ("with", 66),
    ("without", 67),
    ("for", 68),
    ("from", 69),
    ("to", 70),
    ("of", 71),
    ("in", 72),
    ("on", 73),
    ("at", 74),
    ("by", 75),
    // adjectives
    ("good", 76),
    ("bad", 77),
    ("big", 78),
    ("small", 79),
    ("new", 80),
    ("old", 81),
    ("hot", 82),
    ("cold", 83),
    ("fast", 84),
    ("slow", 85),
    ("high", 86),
    ("low", 87),
    // numbers
    ("one", 88),
    ("two", 89),
    ("three", 90),
    ("four", 91),
    ("five", 92),
    ("six", 93),
    ("seven", 94),
    ("eight", 95),
    ("nine", 96),
    ("ten", 97),
    // punctuation
    (".", 100),
    (",", 101),
    ("!", 102),
    ("?", 103),
    (";", 104),
    (":", 105),
    ("(", 106),
    (")", 107),
    ("\"", 108),
    ("'", 109),
    ("-", 110),
    // whitespace
    (" ", 200),
    ("  ", 201),
    ("\n", 202),
    ("\t", 203),
];

static DICTIONARY: LazyLock<StaticDictionary> =
    LazyLock::new(|| StaticDictionary::from_entries(ENTRIES));

/// Immutable word -> ID table shared by every codec in the process.
#[derive(Debug)]
pub struct StaticDictionary {
    by_text: HashMap<&'static str, TokenId>,
}

impl StaticDictionary {
    /// The process-wide dictionary, built on first access.
    pub fn global() -> &'static StaticDictionary {
        &DICTIONARY
    }

    fn from_entries(entries: &'static [(&'static str, TokenId)]) -> Self {
        Self {
            by_text: entries.iter().copied().collect(),
        }
    }

    /// Exact-match lookup.
    pub fn get(&self, text: &str) -> Option<TokenId> {
        self.by_text.get(text).copied()
    }

    /// Exact match first, then the lowercase form when `case_fold` is set.
    pub fn get_folded(&self, text: &str, case_fold: bool) -> Option<TokenId> {
        self.get(text)
            .or_else(|| if case_fold { self.get(&text.to_lowercase()) } else { None })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.by_text.len()
    }

    /// True when the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.by_text.is_empty()
    }

    /// Iterate `(text, id)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TokenId)> + '_ {
        self.by_text.iter().map(|(text, id)| (*text, *id))
    }
}
