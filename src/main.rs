//! Demo binary: replays a scripted search and character detail flow
//! through the reducer stack, logging every slice change it causes.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use starsearch::detail::{
    DetailSessionState, DetailViewResult, DetailViewState, DetailViewStateReducer,
};
use starsearch::mapper::{
    CharacterModelMapper, DisplayErrorMessages, FilmModelMapper, PlanetModelMapper,
    SpecieModelMapper,
};
use starsearch::model::{CharacterModel, FilmModel, PlanetModel, SpecieModel};
use starsearch::mvi::{FetchOutcome, SliceState};
use starsearch::scenario::Scenario;
use starsearch::search::{SearchViewResult, SearchViewState, SearchViewStateReducer};
use starsearch::store::{ScreenSession, StateMachine};

#[derive(Parser)]
#[command(
    name = "starsearch",
    about = "Replays a scripted character search through the view-state reducers"
)]
struct Cli {
    /// Path to a scenario TOML file (default: built-in scenario).
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Override the scenario's search query.
    #[arg(long)]
    query: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut scenario =
        Scenario::load(cli.scenario.as_deref()).context("Failed to load scenario")?;
    if let Some(query) = cli.query {
        scenario.search.query = query;
        scenario
            .validate()
            .context("Scenario rejected after query override")?;
    }

    tracing::info!(query = %scenario.search.query, "Starting search flow");
    let selected = run_search_screen(&scenario).await?;

    let Some(selected) = selected else {
        tracing::warn!("No search results, stopping before the detail screen");
        return Ok(());
    };

    tracing::info!(name = %selected.name, "Opening character detail");
    let final_state = run_detail_screen(&scenario).await?;

    tracing::info!(
        profile = final_state.profile.is_success(),
        planet = final_state.planet.is_success(),
        films = final_state.films.is_success(),
        species = final_state.species.is_success(),
        "Detail flow finished"
    );
    Ok(())
}

/// Runs the search screen and returns the match the demo "taps".
async fn run_search_screen(scenario: &Scenario) -> Result<Option<CharacterModel>> {
    let machine = StateMachine::new(SearchViewStateReducer::new(
        CharacterModelMapper,
        DisplayErrorMessages,
    ));

    machine.subscribe(
        |state: &SearchViewState| state.results.clone(),
        |slice: &SliceState<Vec<CharacterModel>>| match slice {
            SliceState::Initial => {}
            SliceState::Loading => tracing::info!("Searching..."),
            SliceState::Success(models) => {
                tracing::info!(count = models.len(), "Search results arrived")
            }
            SliceState::Error(message) => tracing::warn!(message = %message, "Search failed"),
        },
    );
    machine.subscribe(
        |state: &SearchViewState| state.history.clone(),
        |slice: &SliceState<Vec<CharacterModel>>| {
            if let SliceState::Success(models) = slice {
                tracing::info!(count = models.len(), "Search history updated");
            }
        },
    );

    let session = ScreenSession::spawn(machine);

    let results = session.sender();
    let step = scenario.search.clone();
    let payload = scenario.search_results();
    let producer = tokio::spawn(async move {
        let _ = results.send(SearchViewResult::HistoryLoaded(Vec::new()));
        let _ = results.send(SearchViewResult::Searching);
        tokio::time::sleep(Duration::from_millis(step.delay_ms)).await;
        match step.fail {
            Some(kind) => {
                let _ = results.send(SearchViewResult::SearchError(kind.to_error(&step.query)));
            }
            None => {
                let viewed = payload.first().cloned();
                let _ = results.send(SearchViewResult::SearchSuccess(payload));
                // The demo taps the first match, which lands it in history.
                if let Some(viewed) = viewed {
                    let _ = results.send(SearchViewResult::HistoryLoaded(vec![viewed]));
                }
            }
        }
    });
    producer.await.context("Search producer failed")?;

    let final_state = session.drain().await;
    Ok(final_state
        .results
        .success()
        .and_then(|models| models.first().cloned()))
}

/// Runs the detail screen to completion and returns its final state.
async fn run_detail_screen(scenario: &Scenario) -> Result<DetailViewState> {
    let machine = StateMachine::new(DetailViewStateReducer::new(
        PlanetModelMapper,
        SpecieModelMapper,
        FilmModelMapper,
        CharacterModelMapper,
        DisplayErrorMessages,
    ));

    machine.subscribe(
        |state: &DetailViewState| state.session.clone(),
        |slice: &DetailSessionState| match slice {
            DetailSessionState::Idle => {}
            DetailSessionState::Retrying => tracing::info!("Retrying character fetch"),
            DetailSessionState::FetchError { name, message } => {
                tracing::warn!(name = %name, message = %message, "Character fetch failed")
            }
        },
    );
    machine.subscribe(
        |state: &DetailViewState| state.profile.clone(),
        |slice: &SliceState<CharacterModel>| {
            if let SliceState::Success(profile) = slice {
                tracing::info!(
                    name = %profile.name,
                    birth_year = %profile.birth_year,
                    height_cm = %profile.height_cm,
                    "Profile loaded"
                );
            }
        },
    );
    machine.subscribe(
        |state: &DetailViewState| state.planet.clone(),
        |slice: &SliceState<PlanetModel>| match slice {
            SliceState::Initial => {}
            SliceState::Loading => tracing::info!("Loading homeworld..."),
            SliceState::Success(planet) => {
                tracing::info!(name = %planet.name, population = %planet.population, "Homeworld loaded")
            }
            SliceState::Error(message) => {
                tracing::warn!(message = %message, "Homeworld fetch failed")
            }
        },
    );
    machine.subscribe(
        |state: &DetailViewState| state.films.clone(),
        |slice: &SliceState<Vec<FilmModel>>| match slice {
            SliceState::Initial => {}
            SliceState::Loading => tracing::info!("Loading films..."),
            SliceState::Success(films) => tracing::info!(count = films.len(), "Films loaded"),
            SliceState::Error(message) => tracing::warn!(message = %message, "Film fetch failed"),
        },
    );
    machine.subscribe(
        |state: &DetailViewState| state.species.clone(),
        |slice: &SliceState<Vec<SpecieModel>>| match slice {
            SliceState::Initial => {}
            SliceState::Loading => tracing::info!("Loading species..."),
            SliceState::Success(species) => {
                tracing::info!(count = species.len(), "Species loaded")
            }
            SliceState::Error(message) => {
                tracing::warn!(message = %message, "Specie fetch failed")
            }
        },
    );

    let session = ScreenSession::spawn(machine);

    // Character fetch first; the follow-up fetches need its resource URLs.
    let results = session.sender();
    let step = scenario.detail.clone();
    let character = scenario.character();
    let producer = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(step.delay_ms)).await;
        if step.retry {
            let _ = results.send(DetailViewResult::FetchCharacterDetailError {
                name: step.name.clone(),
                error: starsearch::domain::FetchError::Network {
                    reason: "simulated timeout".to_string(),
                },
            });
            let _ = results.send(DetailViewResult::Retrying);
            tokio::time::sleep(Duration::from_millis(step.delay_ms)).await;
        }
        let _ = results.send(DetailViewResult::CharacterDetail(character));
    });
    producer.await.context("Character producer failed")?;

    let urls = scenario.detail_urls();
    tracing::info!(
        planet = %urls.planet_url,
        films = urls.film_urls.len(),
        species = urls.specie_urls.len(),
        "Resolved follow-up fetches"
    );

    // The three follow-up fetches race each other like real requests would.
    let planet_tx = session.sender();
    let planet_step = scenario.planet.clone();
    let planet_payload = scenario.planet();
    let planet_task = tokio::spawn(async move {
        let _ = planet_tx.send(DetailViewResult::Planet(FetchOutcome::Loading));
        tokio::time::sleep(Duration::from_millis(planet_step.delay_ms)).await;
        let outcome = match planet_step.fail {
            Some(kind) => FetchOutcome::Error(kind.to_error("homeworld")),
            None => FetchOutcome::Success(planet_payload),
        };
        let _ = planet_tx.send(DetailViewResult::Planet(outcome));
    });

    let films_tx = session.sender();
    let films_step = scenario.films.clone();
    let films_payload = scenario.films();
    let films_task = tokio::spawn(async move {
        let _ = films_tx.send(DetailViewResult::Films(FetchOutcome::Loading));
        tokio::time::sleep(Duration::from_millis(films_step.delay_ms)).await;
        let outcome = match films_step.fail {
            Some(kind) => FetchOutcome::Error(kind.to_error("films")),
            None => FetchOutcome::Success(films_payload),
        };
        let _ = films_tx.send(DetailViewResult::Films(outcome));
    });

    let species_tx = session.sender();
    let species_step = scenario.species.clone();
    let species_payload = scenario.species();
    let species_task = tokio::spawn(async move {
        let _ = species_tx.send(DetailViewResult::Species(FetchOutcome::Loading));
        tokio::time::sleep(Duration::from_millis(species_step.delay_ms)).await;
        let outcome = match species_step.fail {
            Some(kind) => FetchOutcome::Error(kind.to_error("species")),
            None => FetchOutcome::Success(species_payload),
        };
        let _ = species_tx.send(DetailViewResult::Species(outcome));
    });

    let (planet, films, species) = tokio::join!(planet_task, films_task, species_task);
    planet.context("Planet producer failed")?;
    films.context("Film producer failed")?;
    species.context("Specie producer failed")?;

    Ok(session.drain().await)
}
