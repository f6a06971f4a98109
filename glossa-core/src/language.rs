//! The catalog of supported languages
//!
//! One entry per detectable language plus the [`Language::Unknown`]
//! sentinel. Every attribute is static data: ISO codes, the scripts a
//! language is written in, and the characters that occur in no other
//! supported language.

use crate::alphabet::Alphabet;
use std::fmt;

/// A detectable language, or the sentinel for "no confident decision"
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Language {
    Afrikaans,
    Albanian,
    Arabic,
    Armenian,
    Azerbaijani,
    Basque,
    Belarusian,
    Bengali,
    Bokmal,
    Bosnian,
    Bulgarian,
    Catalan,
    Chinese,
    Croatian,
    Czech,
    Danish,
    Dutch,
    English,
    Esperanto,
    Estonian,
    Finnish,
    French,
    Ganda,
    Georgian,
    German,
    Greek,
    Gujarati,
    Hebrew,
    Hindi,
    Hungarian,
    Icelandic,
    Indonesian,
    Irish,
    Italian,
    Japanese,
    Kazakh,
    Korean,
    Latin,
    Latvian,
    Lithuanian,
    Macedonian,
    Malay,
    Maori,
    Marathi,
    Mongolian,
    Nynorsk,
    Persian,
    Polish,
    Portuguese,
    Punjabi,
    Romanian,
    Russian,
    Serbian,
    Shona,
    Slovak,
    Slovene,
    Somali,
    Sotho,
    Spanish,
    Swahili,
    Swedish,
    Tagalog,
    Tamil,
    Telugu,
    Thai,
    Tsonga,
    Tswana,
    Turkish,
    Ukrainian,
    Urdu,
    Vietnamese,
    Welsh,
    Xhosa,
    Yoruba,
    Zulu,
    /// Returned when detection cannot make a confident decision.
    /// Carries no ISO codes and no alphabets, and is never a member of a
    /// detector's active language set.
    Unknown,
}

struct LanguageEntry {
    iso_639_1: &'static str,
    iso_639_3: &'static str,
    alphabets: &'static [Alphabet],
    unique_characters: Option<&'static str>,
}

use crate::alphabet::Alphabet::{
    Arabic as ArabicScript, Armenian as ArmenianScript, Bengali as BengaliScript, Cyrillic,
    Devanagari, Georgian as GeorgianScript, Greek as GreekScript, Gujarati as GujaratiScript,
    Gurmukhi, Han, Hangul, Hebrew as HebrewScript, Hiragana, Katakana, Latin as LatinScript,
    Tamil as TamilScript, Telugu as TeluguScript, Thai as ThaiScript,
};

macro_rules! entry {
    ($iso1:literal, $iso3:literal, $alphabets:expr) => {
        entry!($iso1, $iso3, $alphabets, None)
    };
    ($iso1:literal, $iso3:literal, $alphabets:expr, $unique:expr) => {
        LanguageEntry {
            iso_639_1: $iso1,
            iso_639_3: $iso3,
            alphabets: $alphabets,
            unique_characters: $unique,
        }
    };
}

impl Language {
    /// Every detectable language; excludes [`Language::Unknown`]
    pub const ALL: [Language; 75] = [
        Language::Afrikaans,
        Language::Albanian,
        Language::Arabic,
        Language::Armenian,
        Language::Azerbaijani,
        Language::Basque,
        Language::Belarusian,
        Language::Bengali,
        Language::Bokmal,
        Language::Bosnian,
        Language::Bulgarian,
        Language::Catalan,
        Language::Chinese,
        Language::Croatian,
        Language::Czech,
        Language::Danish,
        Language::Dutch,
        Language::English,
        Language::Esperanto,
        Language::Estonian,
        Language::Finnish,
        Language::French,
        Language::Ganda,
        Language::Georgian,
        Language::German,
        Language::Greek,
        Language::Gujarati,
        Language::Hebrew,
        Language::Hindi,
        Language::Hungarian,
        Language::Icelandic,
        Language::Indonesian,
        Language::Irish,
        Language::Italian,
        Language::Japanese,
        Language::Kazakh,
        Language::Korean,
        Language::Latin,
        Language::Latvian,
        Language::Lithuanian,
        Language::Macedonian,
        Language::Malay,
        Language::Maori,
        Language::Marathi,
        Language::Mongolian,
        Language::Nynorsk,
        Language::Persian,
        Language::Polish,
        Language::Portuguese,
        Language::Punjabi,
        Language::Romanian,
        Language::Russian,
        Language::Serbian,
        Language::Shona,
        Language::Slovak,
        Language::Slovene,
        Language::Somali,
        Language::Sotho,
        Language::Spanish,
        Language::Swahili,
        Language::Swedish,
        Language::Tagalog,
        Language::Tamil,
        Language::Telugu,
        Language::Thai,
        Language::Tsonga,
        Language::Tswana,
        Language::Turkish,
        Language::Ukrainian,
        Language::Urdu,
        Language::Vietnamese,
        Language::Welsh,
        Language::Xhosa,
        Language::Yoruba,
        Language::Zulu,
    ];

    fn entry(self) -> LanguageEntry {
        match self {
            Language::Afrikaans => entry!("af", "afr", &[LatinScript]),
            Language::Albanian => entry!("sq", "sqi", &[LatinScript]),
            Language::Arabic => entry!("ar", "ara", &[ArabicScript]),
            Language::Armenian => entry!("hy", "hye", &[ArmenianScript]),
            Language::Azerbaijani => entry!("az", "aze", &[LatinScript], Some("Əə")),
            Language::Basque => entry!("eu", "eus", &[LatinScript]),
            Language::Belarusian => entry!("be", "bel", &[Cyrillic]),
            Language::Bengali => entry!("bn", "ben", &[BengaliScript]),
            Language::Bokmal => entry!("nb", "nob", &[LatinScript]),
            Language::Bosnian => entry!("bs", "bos", &[LatinScript]),
            Language::Bulgarian => entry!("bg", "bul", &[Cyrillic]),
            Language::Catalan => entry!("ca", "cat", &[LatinScript], Some("Ïï")),
            Language::Chinese => entry!("zh", "zho", &[Han]),
            Language::Croatian => entry!("hr", "hrv", &[LatinScript]),
            Language::Czech => entry!("cs", "ces", &[LatinScript], Some("ĚěŘřŮů")),
            Language::Danish => entry!("da", "dan", &[LatinScript]),
            Language::Dutch => entry!("nl", "nld", &[LatinScript]),
            Language::English => entry!("en", "eng", &[LatinScript]),
            Language::Esperanto => entry!("eo", "epo", &[LatinScript], Some("ĈĉĜĝĤĥĴĵŜŝŬŭ")),
            Language::Estonian => entry!("et", "est", &[LatinScript]),
            Language::Finnish => entry!("fi", "fin", &[LatinScript]),
            Language::French => entry!("fr", "fra", &[LatinScript]),
            Language::Ganda => entry!("lg", "lug", &[LatinScript]),
            Language::Georgian => entry!("ka", "kat", &[GeorgianScript]),
            Language::German => entry!("de", "deu", &[LatinScript], Some("ß")),
            Language::Greek => entry!("el", "ell", &[GreekScript]),
            Language::Gujarati => entry!("gu", "guj", &[GujaratiScript]),
            Language::Hebrew => entry!("he", "heb", &[HebrewScript]),
            Language::Hindi => entry!("hi", "hin", &[Devanagari]),
            Language::Hungarian => entry!("hu", "hun", &[LatinScript], Some("ŐőŰű")),
            Language::Icelandic => entry!("is", "isl", &[LatinScript]),
            Language::Indonesian => entry!("id", "ind", &[LatinScript]),
            Language::Irish => entry!("ga", "gle", &[LatinScript]),
            Language::Italian => entry!("it", "ita", &[LatinScript]),
            Language::Japanese => entry!("ja", "jpn", &[Hiragana, Katakana, Han]),
            Language::Kazakh => entry!("kk", "kaz", &[Cyrillic], Some("ӘәҒғҚқҢңҰұ")),
            Language::Korean => entry!("ko", "kor", &[Hangul]),
            Language::Latin => entry!("la", "lat", &[LatinScript]),
            Language::Latvian => entry!("lv", "lav", &[LatinScript], Some("ĢģĶķĻļŅņ")),
            Language::Lithuanian => entry!("lt", "lit", &[LatinScript], Some("ĖėĮįŲų")),
            Language::Macedonian => entry!("mk", "mkd", &[Cyrillic], Some("ЃѓЅѕЌќЏџ")),
            Language::Malay => entry!("ms", "msa", &[LatinScript]),
            Language::Maori => entry!("mi", "mri", &[LatinScript]),
            Language::Marathi => entry!("mr", "mar", &[Devanagari], Some("ळ")),
            Language::Mongolian => entry!("mn", "mon", &[Cyrillic]),
            Language::Nynorsk => entry!("nn", "nno", &[LatinScript]),
            Language::Persian => entry!("fa", "fas", &[ArabicScript]),
            Language::Polish => entry!("pl", "pol", &[LatinScript], Some("ŁłŃńŚśŹź")),
            Language::Portuguese => entry!("pt", "por", &[LatinScript]),
            Language::Punjabi => entry!("pa", "pan", &[Gurmukhi]),
            Language::Romanian => entry!("ro", "ron", &[LatinScript], Some("Țț")),
            Language::Russian => entry!("ru", "rus", &[Cyrillic]),
            Language::Serbian => entry!("sr", "srp", &[Cyrillic], Some("ЂђЋћ")),
            Language::Shona => entry!("sn", "sna", &[LatinScript]),
            Language::Slovak => entry!("sk", "slk", &[LatinScript], Some("ĹĺĽľŔŕ")),
            Language::Slovene => entry!("sl", "slv", &[LatinScript]),
            Language::Somali => entry!("so", "som", &[LatinScript]),
            Language::Sotho => entry!("st", "sot", &[LatinScript]),
            Language::Spanish => entry!("es", "spa", &[LatinScript], Some("¿¡")),
            Language::Swahili => entry!("sw", "swa", &[LatinScript]),
            Language::Swedish => entry!("sv", "swe", &[LatinScript]),
            Language::Tagalog => entry!("tl", "tgl", &[LatinScript]),
            Language::Tamil => entry!("ta", "tam", &[TamilScript]),
            Language::Telugu => entry!("te", "tel", &[TeluguScript]),
            Language::Thai => entry!("th", "tha", &[ThaiScript]),
            Language::Tsonga => entry!("ts", "tso", &[LatinScript]),
            Language::Tswana => entry!("tn", "tsn", &[LatinScript]),
            Language::Turkish => entry!("tr", "tur", &[LatinScript]),
            Language::Ukrainian => entry!("uk", "ukr", &[Cyrillic], Some("ҐґЄєЇї")),
            Language::Urdu => entry!("ur", "urd", &[ArabicScript]),
            Language::Vietnamese => entry!(
                "vi",
                "vie",
                &[LatinScript],
                Some(
                    "ẰằẦầẲẳẨẩẴẵẪẫẮắẤấẠạẶặẬậỀềẺẻỂểẼẽỄễẾếỆệỈỉĨĩỊịƠơỒồỜờỎỏỔổỞởÕõỖỗỠỡỐốỚớỌọỘộỢợ\
                     ỪừỦủỬửŨũỮữỨứỤụỰựỲỳỶỷỸỹỴỵ"
                )
            ),
            Language::Welsh => entry!("cy", "cym", &[LatinScript]),
            Language::Xhosa => entry!("xh", "xho", &[LatinScript]),
            Language::Yoruba => entry!("yo", "yor", &[LatinScript], Some("Ṣṣ")),
            Language::Zulu => entry!("zu", "zul", &[LatinScript]),
            Language::Unknown => entry!("", "", &[]),
        }
    }

    /// The two-letter ISO 639-1 code; `None` for [`Language::Unknown`]
    pub fn iso_code_639_1(self) -> Option<&'static str> {
        let code = self.entry().iso_639_1;
        (!code.is_empty()).then_some(code)
    }

    /// The three-letter ISO 639-3 code; `None` for [`Language::Unknown`]
    pub fn iso_code_639_3(self) -> Option<&'static str> {
        let code = self.entry().iso_639_3;
        (!code.is_empty()).then_some(code)
    }

    /// The scripts this language is written in
    pub fn alphabets(self) -> &'static [Alphabet] {
        self.entry().alphabets
    }

    /// Characters that occur in no other supported language
    pub fn unique_characters(self) -> Option<&'static str> {
        self.entry().unique_characters
    }

    /// False only for extinct languages and the sentinel
    pub fn is_spoken(self) -> bool {
        !matches!(self, Language::Latin | Language::Unknown)
    }

    /// True for languages whose writing systems contain logograms
    pub fn supports_logograms(self) -> bool {
        matches!(
            self,
            Language::Chinese | Language::Japanese | Language::Korean
        )
    }

    /// Every detectable language
    pub fn all() -> Vec<Language> {
        Self::ALL.to_vec()
    }

    /// Every detectable language that is still spoken
    pub fn all_spoken() -> Vec<Language> {
        Self::ALL
            .into_iter()
            .filter(|language| language.is_spoken())
            .collect()
    }

    /// Every language written in Arabic script
    pub fn all_with_arabic_script() -> Vec<Language> {
        Self::all_with_script(Alphabet::Arabic)
    }

    /// Every language written in Cyrillic script
    pub fn all_with_cyrillic_script() -> Vec<Language> {
        Self::all_with_script(Alphabet::Cyrillic)
    }

    /// Every language written in Devanagari script
    pub fn all_with_devanagari_script() -> Vec<Language> {
        Self::all_with_script(Alphabet::Devanagari)
    }

    /// Every language written in Latin script
    pub fn all_with_latin_script() -> Vec<Language> {
        Self::all_with_script(Alphabet::Latin)
    }

    fn all_with_script(alphabet: Alphabet) -> Vec<Language> {
        Self::ALL
            .into_iter()
            .filter(|language| language.alphabets().contains(&alphabet))
            .collect()
    }

    /// Looks a language up by its ISO 639-1 code, case-insensitively
    pub fn from_iso_code_639_1(code: &str) -> Option<Language> {
        Self::ALL
            .into_iter()
            .find(|language| language.entry().iso_639_1.eq_ignore_ascii_case(code))
    }

    /// Looks a language up by its ISO 639-3 code, case-insensitively
    pub fn from_iso_code_639_3(code: &str) -> Option<Language> {
        Self::ALL
            .into_iter()
            .find(|language| language.entry().iso_639_3.eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
