//! Domain-to-presentation model mappers.

use crate::domain::{Character, Film, Planet, Specie};
use crate::model::{CharacterModel, FilmModel, PlanetModel, SpecieModel};

/// Maps one domain entity into its display-ready model.
///
/// Mappers are pure and stateless. Reducers apply them inside `Success`
/// folds only; loading and error variants never touch a mapper.
pub trait ModelMapper {
    type Domain;
    type Model;

    fn map(&self, domain: &Self::Domain) -> Self::Model;

    /// Map a batch, preserving order.
    fn map_list(&self, domain: &[Self::Domain]) -> Vec<Self::Model> {
        domain.iter().map(|item| self.map(item)).collect()
    }
}

/// `Character` → `CharacterModel`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharacterModelMapper;

impl ModelMapper for CharacterModelMapper {
    type Domain = Character;
    type Model = CharacterModel;

    fn map(&self, character: &Character) -> CharacterModel {
        CharacterModel {
            name: character.name.clone(),
            birth_year: character.birth_year.clone(),
            height_cm: character.height_cm.clone(),
            url: character.url.clone(),
        }
    }
}

/// `Planet` → `PlanetModel`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlanetModelMapper;

impl ModelMapper for PlanetModelMapper {
    type Domain = Planet;
    type Model = PlanetModel;

    fn map(&self, planet: &Planet) -> PlanetModel {
        PlanetModel {
            name: planet.name.clone(),
            population: planet.population.clone(),
        }
    }
}

/// `Film` → `FilmModel`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilmModelMapper;

impl ModelMapper for FilmModelMapper {
    type Domain = Film;
    type Model = FilmModel;

    fn map(&self, film: &Film) -> FilmModel {
        FilmModel {
            title: film.title.clone(),
            opening_crawl: film.opening_crawl.clone(),
            release_date: film.release_date.clone(),
        }
    }
}

/// `Specie` → `SpecieModel`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpecieModelMapper;

impl ModelMapper for SpecieModelMapper {
    type Domain = Specie;
    type Model = SpecieModel;

    fn map(&self, specie: &Specie) -> SpecieModel {
        SpecieModel {
            name: specie.name.clone(),
            language: specie.language.clone(),
        }
    }
}
