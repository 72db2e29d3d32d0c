// ============================================================
// Layer 6 — Gazetteer Store
// ============================================================
// Place-name lookup backed by two bundled lists:
//
//   cities.txt    — major world cities
//   countries.txt — country names
//
// A token counts as a geographic place when it matches either
// list exactly. The lists hold single-token names in their usual
// capitalised spelling, so lowercase "london" misses — running
// text writes place names capitalised, and the miss on lowercase
// homographs ("china" the porcelain) is the behaviour we want.
//
// Reference: Rust Book §8 (HashSet)

use std::collections::HashSet;

use crate::domain::traits::Lexicon;
use crate::infra::lexicon_store::parse_word_list;

const CITIES: &str = include_str!("data/cities.txt");
const COUNTRIES: &str = include_str!("data/countries.txt");

/// City and country membership with exact, case-sensitive lookups.
pub struct GazetteerStore {
    cities:    HashSet<String>,
    countries: HashSet<String>,
}

impl GazetteerStore {
    pub fn new() -> Self {
        let cities = parse_word_list(CITIES);
        let countries = parse_word_list(COUNTRIES);
        tracing::debug!(
            "Gazetteer ready: {} cities, {} countries",
            cities.len(),
            countries.len()
        );
        Self { cities, countries }
    }

    pub fn is_city(&self, token: &str) -> bool {
        self.cities.contains(token)
    }

    pub fn is_country(&self, token: &str) -> bool {
        self.countries.contains(token)
    }

    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }
}

impl Default for GazetteerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon for GazetteerStore {
    /// A place is a city OR a country
    fn contains(&self, token: &str) -> bool {
        self.is_city(token) || self.is_country(token)
    }
}
