//! Unicode script classification
//!
//! Each alphabet is a script family with a static codepoint range table.
//! Lookups are allocation-free; the derived script-to-language maps are
//! computed once from the language catalog.

use crate::language::Language;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A Unicode script family used by at least one supported language
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Alphabet {
    Arabic,
    Armenian,
    Bengali,
    Cyrillic,
    Devanagari,
    Georgian,
    Greek,
    Gujarati,
    Gurmukhi,
    Han,
    Hangul,
    Hebrew,
    Hiragana,
    Katakana,
    Latin,
    Tamil,
    Telugu,
    Thai,
}

impl Alphabet {
    /// Every supported script, in filter precedence order
    pub const ALL: [Alphabet; 18] = [
        Alphabet::Arabic,
        Alphabet::Armenian,
        Alphabet::Bengali,
        Alphabet::Cyrillic,
        Alphabet::Devanagari,
        Alphabet::Georgian,
        Alphabet::Greek,
        Alphabet::Gujarati,
        Alphabet::Gurmukhi,
        Alphabet::Han,
        Alphabet::Hangul,
        Alphabet::Hebrew,
        Alphabet::Hiragana,
        Alphabet::Katakana,
        Alphabet::Latin,
        Alphabet::Tamil,
        Alphabet::Telugu,
        Alphabet::Thai,
    ];

    /// Inclusive codepoint ranges belonging to this script
    fn ranges(self) -> &'static [(u32, u32)] {
        match self {
            Alphabet::Arabic => &[
                (0x0600, 0x06FF),
                (0x0750, 0x077F),
                (0x08A0, 0x08FF),
                (0xFB50, 0xFDFF),
                (0xFE70, 0xFEFF),
            ],
            Alphabet::Armenian => &[(0x0530, 0x058F), (0xFB13, 0xFB17)],
            Alphabet::Bengali => &[(0x0980, 0x09FF)],
            Alphabet::Cyrillic => &[
                (0x0400, 0x04FF),
                (0x0500, 0x052F),
                (0x1C80, 0x1C8F),
                (0x2DE0, 0x2DFF),
                (0xA640, 0xA69F),
            ],
            Alphabet::Devanagari => &[(0x0900, 0x097F), (0xA8E0, 0xA8FF)],
            Alphabet::Georgian => &[(0x10A0, 0x10FF), (0x1C90, 0x1CBF), (0x2D00, 0x2D2F)],
            Alphabet::Greek => &[(0x0370, 0x03FF), (0x1F00, 0x1FFF)],
            Alphabet::Gujarati => &[(0x0A80, 0x0AFF)],
            Alphabet::Gurmukhi => &[(0x0A00, 0x0A7F)],
            Alphabet::Han => &[
                (0x2E80, 0x2EFF),
                (0x3400, 0x4DBF),
                (0x4E00, 0x9FFF),
                (0xF900, 0xFAFF),
                (0x20000, 0x2A6DF),
                (0x2A700, 0x2EBEF),
                (0x2F800, 0x2FA1F),
            ],
            Alphabet::Hangul => &[
                (0x1100, 0x11FF),
                (0x3130, 0x318F),
                (0xA960, 0xA97F),
                (0xAC00, 0xD7AF),
                (0xD7B0, 0xD7FF),
            ],
            Alphabet::Hebrew => &[(0x0590, 0x05FF), (0xFB1D, 0xFB4F)],
            Alphabet::Hiragana => &[(0x3040, 0x309F)],
            Alphabet::Katakana => &[(0x30A0, 0x30FF), (0x31F0, 0x31FF), (0xFF66, 0xFF9D)],
            Alphabet::Latin => &[
                (0x0041, 0x005A),
                (0x0061, 0x007A),
                (0x00AA, 0x00AA),
                (0x00BA, 0x00BA),
                (0x00C0, 0x00D6),
                (0x00D8, 0x00F6),
                (0x00F8, 0x02AF),
                (0x1E00, 0x1EFF),
                (0x2C60, 0x2C7F),
                (0xA720, 0xA7FF),
            ],
            Alphabet::Tamil => &[(0x0B80, 0x0BFF)],
            Alphabet::Telugu => &[(0x0C00, 0x0C7F)],
            Alphabet::Thai => &[(0x0E00, 0x0E7F)],
        }
    }

    /// True if the character belongs to this script
    pub fn matches_char(self, ch: char) -> bool {
        let code = ch as u32;
        self.ranges()
            .iter()
            .any(|&(start, end)| (start..=end).contains(&code))
    }

    /// True if every character of the word belongs to this script
    pub fn matches(self, word: &str) -> bool {
        !word.is_empty() && word.chars().all(|ch| self.matches_char(ch))
    }

    /// Scripts that are used by exactly one supported language, with that
    /// language
    pub fn all_supporting_exactly_one_language() -> &'static [(Alphabet, Language)] {
        static SINGLE: LazyLock<Vec<(Alphabet, Language)>> = LazyLock::new(|| {
            let mut users: HashMap<Alphabet, Vec<Language>> = HashMap::new();
            for language in Language::ALL {
                for &alphabet in language.alphabets() {
                    users.entry(alphabet).or_default().push(language);
                }
            }
            let mut single: Vec<(Alphabet, Language)> = users
                .into_iter()
                .filter(|(_, languages)| languages.len() == 1)
                .map(|(alphabet, languages)| (alphabet, languages[0]))
                .collect();
            single.sort_unstable();
            single
        });
        &SINGLE
    }
}

/// Scripts belonging to languages whose writing systems contain logograms
static LOGOGRAM_SCRIPTS: LazyLock<Vec<Alphabet>> = LazyLock::new(|| {
    let mut scripts: Vec<Alphabet> = Language::ALL
        .iter()
        .filter(|language| language.supports_logograms())
        .flat_map(|language| language.alphabets().iter().copied())
        .collect();
    scripts.sort_unstable();
    scripts.dedup();
    scripts
});

/// True if the character is written in a logogram-bearing script.
///
/// Such characters form standalone words during word splitting, regardless
/// of surrounding characters.
pub fn is_logogram(ch: char) -> bool {
    !ch.is_whitespace()
        && LOGOGRAM_SCRIPTS
            .iter()
            .any(|alphabet| alphabet.matches_char(ch))
}

/// True if the character belongs to a script used only for Japanese
pub fn is_japanese_script(ch: char) -> bool {
    Alphabet::Hiragana.matches_char(ch) || Alphabet::Katakana.matches_char(ch)
}
