//! Scripted demo scenario, loaded from TOML.
//!
//! The demo binary replays a fixed search + detail flow; this module
//! describes that flow (query, delays, which fetches fail) so it can be
//! tweaked without recompiling. Missing file means built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Character, CharacterDetail, FetchError, Film, Planet, Specie};

/// Largest delay a scenario step may ask for, in milliseconds.
const MAX_STEP_DELAY_MS: u64 = 60_000;

/// Errors that can occur when loading a scenario file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scenario file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Scenario validation failed: {message}")]
    ValidationError { message: String },
}

/// Root scenario container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub search: SearchStep,
    #[serde(default)]
    pub detail: DetailStep,
    #[serde(default)]
    pub planet: SubFetchStep,
    #[serde(default)]
    pub films: SubFetchStep,
    #[serde(default)]
    pub species: SubFetchStep,
}

/// The search the demo performs first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchStep {
    /// Query typed into the search box.
    #[serde(default = "default_query")]
    pub query: String,
    /// Simulated network latency in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// When set, the search fails with this error instead of returning results.
    #[serde(default)]
    pub fail: Option<FailureKind>,
}

/// The character whose detail screen the demo opens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailStep {
    /// Name of the character to open.
    #[serde(default = "default_name")]
    pub name: String,
    /// Simulated network latency in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// When true, the first detail fetch fails and is retried once.
    #[serde(default)]
    pub retry: bool,
}

/// One of the three follow-up fetches on the detail screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubFetchStep {
    /// Simulated network latency in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// When set, this fetch fails with the given error.
    #[serde(default)]
    pub fail: Option<FailureKind>,
}

/// Which error a failing step produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Network,
    NotFound,
    Unknown,
}

impl FailureKind {
    /// Concrete error for a step failing over `resource`.
    pub fn to_error(self, resource: &str) -> FetchError {
        match self {
            FailureKind::Network => FetchError::Network {
                reason: "simulated timeout".to_string(),
            },
            FailureKind::NotFound => FetchError::NotFound {
                resource: resource.to_string(),
            },
            FailureKind::Unknown => FetchError::Unknown,
        }
    }
}

fn default_query() -> String {
    "luke".to_string()
}

fn default_name() -> String {
    "Luke Skywalker".to_string()
}

fn default_delay_ms() -> u64 {
    150
}

impl Default for SearchStep {
    fn default() -> Self {
        Self {
            query: default_query(),
            delay_ms: default_delay_ms(),
            fail: None,
        }
    }
}

impl Default for DetailStep {
    fn default() -> Self {
        Self {
            name: default_name(),
            delay_ms: default_delay_ms(),
            retry: false,
        }
    }
}

impl Default for SubFetchStep {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            fail: None,
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            search: SearchStep::default(),
            detail: DetailStep::default(),
            planet: SubFetchStep::default(),
            films: SubFetchStep::default(),
            species: SubFetchStep::default(),
        }
    }
}

impl Scenario {
    /// Returns the path to the default scenario file.
    ///
    /// Uses `~/.config/starsearch/scenario.toml` on Unix/macOS, or
    /// equivalent on other platforms via `dirs::config_dir()`. Falls back
    /// to the current directory if config_dir is unavailable.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("starsearch").join("scenario.toml")
    }

    /// Loads a scenario.
    ///
    /// - With an explicit `path`, the file must exist and parse.
    /// - With `None`, reads the default path if present, otherwise
    ///   returns `Scenario::default()`.
    pub fn load(path: Option<&Path>) -> Result<Self, ScenarioError> {
        let path = match path {
            Some(explicit) => explicit.to_path_buf(),
            None => {
                let fallback = Self::default_path();
                if !fallback.exists() {
                    return Ok(Scenario::default());
                }
                fallback
            }
        };

        let content = fs::read_to_string(&path).map_err(|e| ScenarioError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let scenario: Scenario = toml::from_str(&content).map_err(|e| ScenarioError::ParseError {
            path: path.clone(),
            source: e,
        })?;

        scenario.validate()?;
        Ok(scenario)
    }

    /// Validates the scenario.
    ///
    /// Checks:
    /// - Query and character name are non-empty
    /// - No step delay exceeds [`MAX_STEP_DELAY_MS`]
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.search.query.trim().is_empty() {
            return Err(ScenarioError::ValidationError {
                message: "Search query must not be empty".to_string(),
            });
        }

        if self.detail.name.trim().is_empty() {
            return Err(ScenarioError::ValidationError {
                message: "Character name must not be empty".to_string(),
            });
        }

        let delays = [
            ("search", self.search.delay_ms),
            ("detail", self.detail.delay_ms),
            ("planet", self.planet.delay_ms),
            ("films", self.films.delay_ms),
            ("species", self.species.delay_ms),
        ];
        for (step, delay_ms) in delays {
            if delay_ms > MAX_STEP_DELAY_MS {
                return Err(ScenarioError::ValidationError {
                    message: format!(
                        "Step '{}' delay {}ms exceeds maximum {}ms",
                        step, delay_ms, MAX_STEP_DELAY_MS
                    ),
                });
            }
        }

        Ok(())
    }

    /// The character the detail screen will show.
    pub fn character(&self) -> Character {
        Character {
            name: self.detail.name.clone(),
            birth_year: "19BBY".to_string(),
            height_cm: "172".to_string(),
            url: "https://swapi.dev/api/people/1/".to_string(),
        }
    }

    /// Characters returned by a successful search.
    pub fn search_results(&self) -> Vec<Character> {
        vec![
            self.character(),
            Character {
                name: "Leia Organa".to_string(),
                birth_year: "19BBY".to_string(),
                height_cm: "150".to_string(),
                url: "https://swapi.dev/api/people/5/".to_string(),
            },
        ]
    }

    /// Resource URLs the detail fetch resolves before the follow-up fetches.
    pub fn detail_urls(&self) -> CharacterDetail {
        CharacterDetail {
            film_urls: vec![
                "https://swapi.dev/api/films/1/".to_string(),
                "https://swapi.dev/api/films/2/".to_string(),
            ],
            planet_url: "https://swapi.dev/api/planets/1/".to_string(),
            specie_urls: vec!["https://swapi.dev/api/species/1/".to_string()],
            url: "https://swapi.dev/api/people/1/".to_string(),
        }
    }

    /// Homeworld returned by a successful planet fetch.
    pub fn planet(&self) -> Planet {
        Planet {
            name: "Tatooine".to_string(),
            population: "200000".to_string(),
        }
    }

    /// Films returned by a successful film fetch.
    pub fn films(&self) -> Vec<Film> {
        vec![
            Film {
                title: "A New Hope".to_string(),
                opening_crawl: "It is a period of civil war.".to_string(),
                release_date: "1977-05-25".to_string(),
            },
            Film {
                title: "The Empire Strikes Back".to_string(),
                opening_crawl: "It is a dark time for the Rebellion.".to_string(),
                release_date: "1980-05-21".to_string(),
            },
        ]
    }

    /// Species returned by a successful specie fetch.
    pub fn species(&self) -> Vec<Specie> {
        vec![Specie {
            name: "Human".to_string(),
            language: "Galactic Basic".to_string(),
        }]
    }
}
