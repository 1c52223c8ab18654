//! Reducer tests for the character-detail screen.

mod common;

use common::{character, films, planet, species, timeout_error};

use starsearch::detail::{
    DetailSessionState, DetailViewResult, DetailViewState, DetailViewStateReducer,
};
use starsearch::mapper::{
    CharacterModelMapper, DisplayErrorMessages, ErrorMessageMapper, FilmModelMapper, ModelMapper,
    PlanetModelMapper, SpecieModelMapper,
};
use starsearch::mvi::{FetchOutcome, Reducer, SliceState};

fn make_reducer() -> DetailViewStateReducer {
    DetailViewStateReducer::new(
        PlanetModelMapper,
        SpecieModelMapper,
        FilmModelMapper,
        CharacterModelMapper,
        DisplayErrorMessages,
    )
}

// -- Character fetch ----------------------------------------------------------

#[test]
fn character_detail_result_loads_profile() {
    let reducer = make_reducer();
    let state = reducer.reduce(
        DetailViewState::default(),
        DetailViewResult::CharacterDetail(character()),
    );

    let expected = DetailViewState {
        profile: SliceState::Success(CharacterModelMapper.map(&character())),
        ..DetailViewState::default()
    };
    assert_eq!(state, expected);
}

#[test]
fn retrying_result_marks_session() {
    let reducer = make_reducer();
    let state = reducer.reduce(DetailViewState::default(), DetailViewResult::Retrying);

    let expected = DetailViewState {
        session: DetailSessionState::Retrying,
        ..DetailViewState::default()
    };
    assert_eq!(state, expected);
    assert!(state.is_retrying());
}

#[test]
fn fetch_error_result_sets_root_error() {
    let reducer = make_reducer();
    let name = character().name;
    let state = reducer.reduce(
        DetailViewState::default(),
        DetailViewResult::FetchCharacterDetailError {
            name: name.clone(),
            error: timeout_error(),
        },
    );

    let message = DisplayErrorMessages.message(&timeout_error());
    assert_eq!(state.fetch_error(), Some((name.as_str(), message.as_str())));
}

#[test]
fn retrying_replaces_previous_fetch_error() {
    let reducer = make_reducer();
    let state = reducer.reduce(
        DetailViewState::default(),
        DetailViewResult::FetchCharacterDetailError {
            name: character().name,
            error: timeout_error(),
        },
    );
    let state = reducer.reduce(state, DetailViewResult::Retrying);

    assert!(state.is_retrying());
    assert_eq!(state.fetch_error(), None);
}

#[test]
fn retrying_leaves_loaded_slices_untouched() {
    let reducer = make_reducer();
    let state = reducer.reduce(
        DetailViewState::default(),
        DetailViewResult::Planet(FetchOutcome::Success(planet())),
    );
    let state = reducer.reduce(state, DetailViewResult::Retrying);

    assert!(state.is_retrying());
    assert_eq!(
        state.planet,
        SliceState::Success(PlanetModelMapper.map(&planet()))
    );
}

#[test]
fn character_detail_ends_retry_episode() {
    let reducer = make_reducer();
    let state = reducer.reduce(DetailViewState::default(), DetailViewResult::Retrying);
    let state = reducer.reduce(state, DetailViewResult::CharacterDetail(character()));

    assert_eq!(state.session, DetailSessionState::Idle);
    assert_eq!(
        state.profile,
        SliceState::Success(CharacterModelMapper.map(&character()))
    );
}

// -- Planet sub-fetch ---------------------------------------------------------

#[test]
fn planet_success_fills_planet_slice() {
    let reducer = make_reducer();
    let state = reducer.reduce(
        DetailViewState::default(),
        DetailViewResult::Planet(FetchOutcome::Success(planet())),
    );

    let expected = DetailViewState {
        planet: SliceState::Success(PlanetModelMapper.map(&planet())),
        ..DetailViewState::default()
    };
    assert_eq!(state, expected);
}

#[test]
fn planet_loading_marks_planet_slice() {
    let reducer = make_reducer();
    let state = reducer.reduce(
        DetailViewState::default(),
        DetailViewResult::Planet(FetchOutcome::Loading),
    );

    let expected = DetailViewState {
        planet: SliceState::Loading,
        ..DetailViewState::default()
    };
    assert_eq!(state, expected);
}

#[test]
fn planet_error_maps_display_message() {
    let reducer = make_reducer();
    let state = reducer.reduce(
        DetailViewState::default(),
        DetailViewResult::Planet(FetchOutcome::Error(timeout_error())),
    );

    let expected = DetailViewState {
        planet: SliceState::Error(DisplayErrorMessages.message(&timeout_error())),
        ..DetailViewState::default()
    };
    assert_eq!(state, expected);
}

// -- Films sub-fetch ----------------------------------------------------------

#[test]
fn films_success_fills_films_slice() {
    let reducer = make_reducer();
    let state = reducer.reduce(
        DetailViewState::default(),
        DetailViewResult::Films(FetchOutcome::Success(films())),
    );

    let expected = DetailViewState {
        films: SliceState::Success(FilmModelMapper.map_list(&films())),
        ..DetailViewState::default()
    };
    assert_eq!(state, expected);
}

#[test]
fn films_loading_marks_films_slice() {
    let reducer = make_reducer();
    let state = reducer.reduce(
        DetailViewState::default(),
        DetailViewResult::Films(FetchOutcome::Loading),
    );

    let expected = DetailViewState {
        films: SliceState::Loading,
        ..DetailViewState::default()
    };
    assert_eq!(state, expected);
}

#[test]
fn films_error_maps_display_message() {
    let reducer = make_reducer();
    let state = reducer.reduce(
        DetailViewState::default(),
        DetailViewResult::Films(FetchOutcome::Error(timeout_error())),
    );

    let expected = DetailViewState {
        films: SliceState::Error(DisplayErrorMessages.message(&timeout_error())),
        ..DetailViewState::default()
    };
    assert_eq!(state, expected);
}

// -- Species sub-fetch --------------------------------------------------------

#[test]
fn species_success_fills_species_slice() {
    let reducer = make_reducer();
    let state = reducer.reduce(
        DetailViewState::default(),
        DetailViewResult::Species(FetchOutcome::Success(species())),
    );

    let expected = DetailViewState {
        species: SliceState::Success(SpecieModelMapper.map_list(&species())),
        ..DetailViewState::default()
    };
    assert_eq!(state, expected);
}

#[test]
fn species_loading_marks_species_slice() {
    let reducer = make_reducer();
    let state = reducer.reduce(
        DetailViewState::default(),
        DetailViewResult::Species(FetchOutcome::Loading),
    );

    let expected = DetailViewState {
        species: SliceState::Loading,
        ..DetailViewState::default()
    };
    assert_eq!(state, expected);
}

#[test]
fn species_error_maps_display_message() {
    let reducer = make_reducer();
    let state = reducer.reduce(
        DetailViewState::default(),
        DetailViewResult::Species(FetchOutcome::Error(timeout_error())),
    );

    let expected = DetailViewState {
        species: SliceState::Error(DisplayErrorMessages.message(&timeout_error())),
        ..DetailViewState::default()
    };
    assert_eq!(state, expected);
}

// -- Cross-slice properties ---------------------------------------------------

#[test]
fn sub_fetch_touches_only_its_own_slice() {
    let reducer = make_reducer();
    let state = reducer.reduce(
        DetailViewState::default(),
        DetailViewResult::Films(FetchOutcome::Success(films())),
    );
    let state = reducer.reduce(
        state,
        DetailViewResult::Planet(FetchOutcome::Success(planet())),
    );

    // The earlier films result must survive the planet reduction.
    assert_eq!(
        state.films,
        SliceState::Success(FilmModelMapper.map_list(&films()))
    );
    assert_eq!(
        state.planet,
        SliceState::Success(PlanetModelMapper.map(&planet()))
    );
    assert!(state.species.is_initial());
}

#[test]
fn loading_then_success_overwrites_slice() {
    let reducer = make_reducer();
    let state = reducer.reduce(
        DetailViewState::default(),
        DetailViewResult::Planet(FetchOutcome::Loading),
    );
    assert!(state.planet.is_loading());

    let state = reducer.reduce(
        state,
        DetailViewResult::Planet(FetchOutcome::Success(planet())),
    );
    assert_eq!(
        state.planet,
        SliceState::Success(PlanetModelMapper.map(&planet()))
    );
}

#[test]
fn reduce_is_pure() {
    let reducer = make_reducer();
    let result = DetailViewResult::Films(FetchOutcome::Success(films()));

    let first = reducer.reduce(DetailViewState::default(), result.clone());
    let second = reducer.reduce(DetailViewState::default(), result);

    assert_eq!(first, second);
}

#[test]
fn interleaved_results_accumulate_into_full_tree() {
    let reducer = make_reducer();
    let mut state = DetailViewState::default();

    for result in [
        DetailViewResult::CharacterDetail(character()),
        DetailViewResult::Planet(FetchOutcome::Loading),
        DetailViewResult::Films(FetchOutcome::Loading),
        DetailViewResult::Planet(FetchOutcome::Success(planet())),
        DetailViewResult::Species(FetchOutcome::Loading),
        DetailViewResult::Films(FetchOutcome::Success(films())),
        DetailViewResult::Species(FetchOutcome::Success(species())),
    ] {
        state = reducer.reduce(state, result);
    }

    assert_eq!(state.session, DetailSessionState::Idle);
    assert!(state.profile.is_success());
    assert!(state.planet.is_success());
    assert!(state.films.is_success());
    assert!(state.species.is_success());
}
