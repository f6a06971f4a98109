//! The on-disk model format

use crate::fraction::Fraction;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One serialized language model for a single n-gram order.
///
/// Probabilities are stored exactly: each key is a reduced fraction and its
/// value lists every n-gram sharing that relative frequency, separated by
/// single spaces. The decimal value is only computed when the model is
/// loaded for detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonLanguageModel {
    /// ISO 639-1 code of the modeled language
    pub language: String,
    /// Reduced fraction → space-separated n-grams with that probability
    pub ngrams: BTreeMap<Fraction, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let model = JsonLanguageModel {
            language: "en".to_string(),
            ngrams: BTreeMap::from([
                (Fraction::new(1, 4), "eh fk".to_string()),
                (Fraction::new(3, 4), "th".to_string()),
            ]),
        };
        let json = serde_json::to_string(&model).unwrap();
        let back: JsonLanguageModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }

    #[test]
    fn parses_the_wire_format() {
        let json = r#"{"language":"de","ngrams":{"3/10":"sch ich","1/5":"der"}}"#;
        let model: JsonLanguageModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.language, "de");
        assert_eq!(model.ngrams[&Fraction::new(3, 10)], "sch ich");
        assert_eq!(model.ngrams[&Fraction::new(1, 5)], "der");
    }

    #[test]
    fn rejects_malformed_fraction_keys() {
        let json = r#"{"language":"de","ngrams":{"0.3":"sch"}}"#;
        assert!(serde_json::from_str::<JsonLanguageModel>(json).is_err());
    }
}
