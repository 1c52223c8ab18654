//! Shared fixtures and spy helpers for integration tests.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use parking_lot::Mutex;

use starsearch::domain::{Character, CharacterDetail, FetchError, Film, Planet, Specie};
use starsearch::model::CharacterModel;

pub type SliceLog<T> = Arc<Mutex<Vec<T>>>;

pub const QUERY: &str = "Luke";
pub const ERROR_MSG: &str = "Read timed out";

/// Fresh shared log for recording published slice values.
pub fn slice_log<T>() -> SliceLog<T> {
    Arc::new(Mutex::new(Vec::new()))
}

/// Subscriber that appends every published value to `log`.
pub fn spy<T: Clone + Send + 'static>(log: &SliceLog<T>) -> impl FnMut(&T) + Send + 'static {
    let log = Arc::clone(log);
    move |slice: &T| log.lock().push(slice.clone())
}

// -- Domain fixtures ----------------------------------------------------------

pub fn character() -> Character {
    Character {
        name: "Many men".to_string(),
        birth_year: "34.BBY".to_string(),
        height_cm: "143".to_string(),
        url: "https://swapi.dev/people/21".to_string(),
    }
}

pub fn character_model() -> CharacterModel {
    CharacterModel {
        name: "Many men".to_string(),
        birth_year: "34.BBY".to_string(),
        height_cm: "143".to_string(),
        url: "https://swapi.dev/people/21".to_string(),
    }
}

pub fn character_list() -> Vec<Character> {
    vec![character()]
}

pub fn character_detail() -> CharacterDetail {
    CharacterDetail {
        film_urls: vec!["www.url.com".to_string()],
        planet_url: "http://swapi.dev/planet".to_string(),
        specie_urls: vec!["https://swapi.dev.people".to_string()],
        url: "https://swapi.dev/people/12/".to_string(),
    }
}

pub fn planet() -> Planet {
    Planet {
        name: "Alderaan".to_string(),
        population: "2000000000".to_string(),
    }
}

pub fn films() -> Vec<Film> {
    vec![Film {
        title: "A New Hope".to_string(),
        opening_crawl: "It is a period of civil war.".to_string(),
        release_date: "1977-05-25".to_string(),
    }]
}

pub fn species() -> Vec<Specie> {
    vec![Specie {
        name: "Human".to_string(),
        language: "Galactic Basic".to_string(),
    }]
}

pub fn timeout_error() -> FetchError {
    FetchError::Network {
        reason: ERROR_MSG.to_string(),
    }
}
