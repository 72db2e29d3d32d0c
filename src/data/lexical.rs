// ============================================================
// Layer 4 — Lexical Feature Extractor
// ============================================================
// Token-level features that need nothing but the token itself and
// a lookup oracle. Unlike the context passes, these have no
// ordering constraints among themselves — each touches its own
// feature name and reads only `token`.
//
// The oracles come in from Layer 6 through the Lexicon trait, so
// this module never knows whether a word list lives in memory, on
// disk, or inside a test double.
//
// Reference: Bird, Klein & Loper, "Natural Language Processing
//            with Python" (the NLTK book), ch. 6

use anyhow::{Context, Result};

use crate::domain::record::{keys, FeatureRecord, FeatureValue};
use crate::domain::traits::Lexicon;

/// The lookup oracles the lexical pass draws on, borrowed for the
/// duration of a corpus run so both corpora share one set of stores.
pub struct LexicalOracles<'a> {
    /// English stopwords — exact, case-sensitive membership
    pub stopwords: &'a dyn Lexicon,
    /// City and country names
    pub gazetteer: &'a dyn Lexicon,
    /// Personal first names — case-insensitive membership
    pub names: &'a dyn Lexicon,
}

/// Apply the standard token-level features to one record:
/// case, last_char, nltk_stopword, is_geo_place.
pub fn token_features(
    record: FeatureRecord,
    oracles: &LexicalOracles<'_>,
) -> Result<FeatureRecord> {
    let record = add_case(record)?;
    let record = add_last_char(record)?;
    let record = add_stopword(record, oracles.stopwords)?;
    add_geo_place(record, oracles.gazetteer)
}

/// case — "lower" when the token equals its own lowercasing, else
/// "upper". Tokens with no letters at all ("1996", "--") compare
/// equal to themselves and land in "lower".
pub fn add_case(record: FeatureRecord) -> Result<FeatureRecord> {
    let case = {
        let token = record.str_value(keys::TOKEN)?;
        if token == token.to_lowercase() {
            "lower"
        } else {
            "upper"
        }
    };
    Ok(record.with(keys::CASE, FeatureValue::str(case)))
}

/// last_char — the final character of the token, a cheap stand-in
/// for suffix morphology. Well-formed corpora never produce an
/// empty token, but one reaching this pass is still an error
/// rather than a panic.
pub fn add_last_char(record: FeatureRecord) -> Result<FeatureRecord> {
    let last = {
        let token = record.str_value(keys::TOKEN)?;
        token
            .chars()
            .last()
            .context("Empty token has no last character")?
    };
    Ok(record.with(keys::LAST_CHAR, FeatureValue::Str(last.to_string())))
}

/// nltk_stopword — membership in the English stopword list. The
/// lookup is exact: "the" is a stopword, sentence-initial "The"
/// is not, which in effect folds capitalisation into the feature.
pub fn add_stopword(record: FeatureRecord, stopwords: &dyn Lexicon) -> Result<FeatureRecord> {
    let hit = stopwords.contains(record.str_value(keys::TOKEN)?);
    Ok(record.with(keys::STOPWORD, FeatureValue::Bool(hit)))
}

/// is_geo_place — membership in the city/country gazetteer.
pub fn add_geo_place(record: FeatureRecord, gazetteer: &dyn Lexicon) -> Result<FeatureRecord> {
    let hit = gazetteer.contains(record.str_value(keys::TOKEN)?);
    Ok(record.with(keys::GEO_PLACE, FeatureValue::Bool(hit)))
}

/// is_nltk_name — membership in the personal-name list. Available
/// but not part of the standard `token_features` set; the name
/// oracle is carried through `LexicalOracles` for runs that want
/// to switch it on.
pub fn add_person_name(record: FeatureRecord, names: &dyn Lexicon) -> Result<FeatureRecord> {
    let hit = names.contains(record.str_value(keys::TOKEN)?);
    Ok(record.with(keys::PERSON_NAME, FeatureValue::Bool(hit)))
}
