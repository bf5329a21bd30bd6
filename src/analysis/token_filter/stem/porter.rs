//! Porter stemming algorithm implementation.
//!
//! The stemmer applies the five rule groups of the original Porter algorithm:
//! 1. Plurals, -ed/-ing suffixes and terminal y
//! 2. Double suffixes such as -ational → -ate, -tional → -tion
//! 3. -icate → -ic, -ative → "", -ness → "", etc.
//! 4. Removal of -al, -ance, -ence, -ement, etc. in longer stems
//! 5. Removal of a final -e and reduction of a final -ll
//!
//! Words that are not plain ASCII, or that are two characters or shorter, are
//! returned lowercased but otherwise unchanged.
//!
//! # Examples
//!
//! ```
//! use talentscout::analysis::token_filter::stem::Stemmer;
//! use talentscout::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("engineering"), "engin");
//! assert_eq!(stemmer.stem("developers"), "develop");
//! assert_eq!(stemmer.stem("relational"), "relat");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

// Longer suffixes precede the suffixes they end with ("ement" > "ment" > "ent").
const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Check if the byte at `pos` acts as a consonant.
    ///
    /// `y` is a consonant at the start of a word or after a vowel.
    fn is_consonant(word: &[u8], pos: usize) -> bool {
        match word[pos] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => pos == 0 || !Self::is_consonant(word, pos - 1),
            _ => true,
        }
    }

    /// Calculate the measure of a stem: the number of VC sequences in
    /// `[C](VC){m}[V]`.
    fn measure(stem: &[u8]) -> usize {
        let n = stem.len();
        let mut i = 0;
        while i < n && Self::is_consonant(stem, i) {
            i += 1;
        }

        let mut m = 0;
        loop {
            while i < n && !Self::is_consonant(stem, i) {
                i += 1;
            }
            if i >= n {
                return m;
            }
            while i < n && Self::is_consonant(stem, i) {
                i += 1;
            }
            m += 1;
        }
    }

    fn contains_vowel(stem: &[u8]) -> bool {
        (0..stem.len()).any(|i| !Self::is_consonant(stem, i))
    }

    fn ends_with_double_consonant(word: &[u8]) -> bool {
        let n = word.len();
        n >= 2 && word[n - 1] == word[n - 2] && Self::is_consonant(word, n - 1)
    }

    /// Consonant-vowel-consonant ending where the last consonant is not w, x or y.
    fn ends_cvc(word: &[u8]) -> bool {
        let n = word.len();
        n >= 3
            && Self::is_consonant(word, n - 3)
            && !Self::is_consonant(word, n - 2)
            && Self::is_consonant(word, n - 1)
            && !matches!(word[n - 1], b'w' | b'x' | b'y')
    }

    /// Replace `suffix` with `replacement` when the remaining stem has a
    /// measure above `min_measure`.
    fn replace_if_measure(
        word: &mut Vec<u8>,
        suffix: &str,
        replacement: &str,
        min_measure: usize,
    ) {
        let stem_len = word.len() - suffix.len();
        if Self::measure(&word[..stem_len]) > min_measure {
            word.truncate(stem_len);
            word.extend_from_slice(replacement.as_bytes());
        }
    }

    fn step1a(word: &mut Vec<u8>) {
        if word.ends_with(b"sses") || word.ends_with(b"ies") {
            word.truncate(word.len() - 2);
        } else if word.ends_with(b"ss") {
            // unchanged
        } else if word.ends_with(b"s") {
            word.pop();
        }
    }

    fn step1b(word: &mut Vec<u8>) {
        if word.ends_with(b"eed") {
            Self::replace_if_measure(word, "eed", "ee", 0);
            return;
        }

        let suffix_len = if word.ends_with(b"ed") {
            2
        } else if word.ends_with(b"ing") {
            3
        } else {
            return;
        };

        let stem_len = word.len() - suffix_len;
        if !Self::contains_vowel(&word[..stem_len]) {
            return;
        }
        word.truncate(stem_len);

        if word.ends_with(b"at") || word.ends_with(b"bl") || word.ends_with(b"iz") {
            word.push(b'e');
        } else if Self::ends_with_double_consonant(word)
            && !matches!(word.last(), Some(b'l' | b's' | b'z'))
        {
            word.pop();
        } else if Self::measure(word) == 1 && Self::ends_cvc(word) {
            word.push(b'e');
        }
    }

    fn step1c(word: &mut [u8]) {
        let n = word.len();
        if word.ends_with(b"y") && Self::contains_vowel(&word[..n - 1]) {
            word[n - 1] = b'i';
        }
    }

    /// Apply the first rule whose suffix matches; later rules are not tried
    /// even when the measure condition fails.
    fn apply_rules(word: &mut Vec<u8>, rules: &[(&str, &str)]) {
        if let Some((suffix, replacement)) = rules
            .iter()
            .find(|(suffix, _)| word.ends_with(suffix.as_bytes()))
        {
            Self::replace_if_measure(word, suffix, replacement, 0);
        }
    }

    fn step4(word: &mut Vec<u8>) {
        let Some(suffix) = STEP4_SUFFIXES
            .iter()
            .find(|suffix| word.ends_with(suffix.as_bytes()))
        else {
            return;
        };

        let stem_len = word.len() - suffix.len();
        let stem = &word[..stem_len];
        if *suffix == "ion" && !matches!(stem.last(), Some(b's' | b't')) {
            return;
        }
        if Self::measure(stem) > 1 {
            word.truncate(stem_len);
        }
    }

    fn step5(word: &mut Vec<u8>) {
        if word.ends_with(b"e") {
            let stem = &word[..word.len() - 1];
            let m = Self::measure(stem);
            if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                word.pop();
            }
        }

        if word.ends_with(b"ll") && Self::measure(word) > 1 {
            word.pop();
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if lower.len() <= 2 || !lower.is_ascii() {
            return lower;
        }

        let mut bytes = lower.into_bytes();
        Self::step1a(&mut bytes);
        Self::step1b(&mut bytes);
        Self::step1c(&mut bytes);
        Self::apply_rules(&mut bytes, STEP2_RULES);
        Self::apply_rules(&mut bytes, STEP3_RULES);
        Self::step4(&mut bytes);
        Self::step5(&mut bytes);

        // Only ASCII bytes were removed or appended.
        String::from_utf8(bytes).unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
