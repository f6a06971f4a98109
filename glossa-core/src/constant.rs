//! Static tables shared by the rule engine and text cleanup

use crate::language::Language;
use regex::Regex;
use std::sync::LazyLock;

use crate::language::Language::*;

/// Diacritics and ligatures mapped to the set of languages known to use
/// them. Every key is a string of single characters; a word containing any
/// of them up-weights all listed languages during rule-based filtering.
pub const CHARS_TO_LANGUAGES: &[(&str, &[Language])] = &[
    ("Ãã", &[Portuguese, Vietnamese]),
    ("ĄąĘę", &[Lithuanian, Polish]),
    ("Żż", &[Polish, Romanian]),
    ("Îî", &[French, Romanian]),
    ("Ññ", &[Basque, Spanish]),
    ("ŇňŤť", &[Czech, Slovak]),
    ("Ăă", &[Romanian, Vietnamese]),
    ("İıĞğ", &[Azerbaijani, Turkish]),
    ("ЈјЉљЊњ", &[Macedonian, Serbian]),
    ("ĀāĒēĪī", &[Latvian, Maori, Yoruba]),
    ("Şş", &[Azerbaijani, Romanian, Turkish]),
    ("Ďď", &[Czech, Romanian, Slovak]),
    ("Ćć", &[Bosnian, Croatian, Polish]),
    ("Đđ", &[Bosnian, Croatian, Vietnamese]),
    ("Іі", &[Belarusian, Kazakh, Ukrainian]),
    ("Ìì", &[Italian, Vietnamese, Yoruba]),
    ("Øø", &[Bokmal, Danish, Nynorsk]),
    ("Ūū", &[Latvian, Lithuanian, Maori, Yoruba]),
    ("Ëë", &[Afrikaans, Albanian, Dutch, French]),
    ("ÈèÙù", &[French, Italian, Vietnamese, Yoruba]),
    ("Êê", &[Afrikaans, French, Portuguese, Vietnamese]),
    ("Õõ", &[Estonian, Hungarian, Portuguese, Vietnamese]),
    ("Ôô", &[French, Portuguese, Slovak, Vietnamese]),
    ("ЁёЫыЭэ", &[Belarusian, Kazakh, Mongolian, Russian]),
    ("ЩщЪъ", &[Bulgarian, Kazakh, Mongolian, Russian]),
    ("Òò", &[Catalan, Italian, Vietnamese, Yoruba]),
    ("Ææ", &[Bokmal, Danish, Icelandic, Nynorsk]),
    ("Åå", &[Bokmal, Danish, Nynorsk, Swedish]),
    ("Ýý", &[Czech, Icelandic, Slovak, Turkish, Vietnamese]),
    ("Ää", &[Estonian, Finnish, German, Slovak, Swedish]),
    ("Àà", &[Catalan, French, Italian, Portuguese, Vietnamese]),
    ("Ââ", &[French, Portuguese, Romanian, Turkish, Vietnamese]),
    (
        "Üü",
        &[
            Azerbaijani, Catalan, Estonian, German, Hungarian, Spanish, Turkish,
        ],
    ),
    (
        "ČčŠšŽž",
        &[
            Bosnian, Croatian, Czech, Latvian, Lithuanian, Slovak, Slovene,
        ],
    ),
    (
        "Çç",
        &[
            Albanian, Azerbaijani, Basque, Catalan, French, Portuguese, Turkish,
        ],
    ),
    (
        "Öö",
        &[
            Azerbaijani, Estonian, Finnish, German, Hungarian, Icelandic, Swedish, Turkish,
        ],
    ),
    (
        "Óó",
        &[
            Catalan, Hungarian, Icelandic, Irish, Polish, Portuguese, Slovak, Spanish, Vietnamese,
            Yoruba,
        ],
    ),
    (
        "ÁáÍíÚú",
        &[
            Catalan, Czech, Hungarian, Icelandic, Irish, Portuguese, Slovak, Spanish, Vietnamese,
            Yoruba,
        ],
    ),
    (
        "Éé",
        &[
            Catalan, Czech, French, Hungarian, Icelandic, Irish, Italian, Portuguese, Slovak,
            Spanish, Vietnamese, Yoruba,
        ],
    ),
];

/// Unicode punctuation class, stripped during input cleanup
pub static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{P}").expect("punctuation class compiles"));

/// Unicode number class, stripped during input cleanup
pub static NUMBERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{N}").expect("number class compiles"));

/// Runs of whitespace, collapsed to a single space during input cleanup
pub static MULTIPLE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace class compiles"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_sets_are_sorted_and_duplicate_free() {
        for (characters, languages) in CHARS_TO_LANGUAGES {
            assert!(!characters.is_empty());
            assert!(
                languages.windows(2).all(|pair| pair[0] < pair[1]),
                "languages for {characters} are not strictly ascending"
            );
        }
    }

    #[test]
    fn classes_match_expected_characters() {
        assert!(PUNCTUATION.is_match("¿"));
        assert!(PUNCTUATION.is_match(","));
        assert!(NUMBERS.is_match("٣"));
        assert!(NUMBERS.is_match("7"));
        assert!(MULTIPLE_WHITESPACE.is_match("\t \n"));
        assert!(!PUNCTUATION.is_match("a"));
        assert!(!NUMBERS.is_match("a"));
    }
}
