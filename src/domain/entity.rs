//! Entities as delivered by the external fetch collaborators.
//!
//! Numeric-looking fields stay strings: the upstream API serves them
//! unparsed ("unknown" is a legal height or population) and nothing in
//! the reduction path does arithmetic on them.

/// A character returned by the search and detail services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub birth_year: String,
    pub height_cm: String,
    pub url: String,
}

/// Resource URLs for a character's per-field sub-fetches.
///
/// The detail service resolves a character into this bundle, then the
/// planet/film/specie services are asked for each URL independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDetail {
    pub film_urls: Vec<String>,
    pub planet_url: String,
    pub specie_urls: Vec<String>,
    pub url: String,
}

/// Home planet of a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub name: String,
    pub population: String,
}

/// A film a character appeared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Film {
    pub title: String,
    pub opening_crawl: String,
    pub release_date: String,
}

/// A species a character belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specie {
    pub name: String,
    pub language: String,
}
