//! Display-ready presentation models.
//!
//! Subscribers render these directly. Reducers produce them from domain
//! entities through the mapper collaborators, so the presentation shape
//! can drift from the upstream API without touching reduction logic.

/// Character profile as rendered on both screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterModel {
    pub name: String,
    pub birth_year: String,
    pub height_cm: String,
    pub url: String,
}

/// Home-planet panel of the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetModel {
    pub name: String,
    pub population: String,
}

/// One row of the films panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmModel {
    pub title: String,
    pub opening_crawl: String,
    pub release_date: String,
}

/// One row of the species panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecieModel {
    pub name: String,
    pub language: String,
}
