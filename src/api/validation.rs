use super::ApiError;
use crate::models::actor::{ActorPatch, NewActor};
use crate::models::film::{FilmPatch, NewFilm};

const MAX_TITLE_LEN: usize = 255;
const MAX_NAME_LEN: usize = 45;
const MIN_RELEASE_YEAR: i32 = 1888;
const MAX_RELEASE_YEAR: i32 = 2155;

/// Parses a path segment as a record id. Only plain non-negative decimal
/// integers that fit the store's integer key are accepted.
pub fn parse_id(resource: &str, raw: &str) -> Result<i32, ApiError> {
    Some(raw)
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|s| s.parse::<u32>().ok())
        .and_then(|id| i32::try_from(id).ok())
        .ok_or_else(|| {
            ApiError::validation(format!(
                "Invalid {} ID: '{}'. ID must be a non-negative integer",
                resource, raw
            ))
        })
}

/// Rejects negative ids in a JSON id list.
pub fn validate_ids(resource: &str, ids: &[i32]) -> Result<(), ApiError> {
    match ids.iter().find(|id| **id < 0) {
        Some(id) => Err(ApiError::validation(format!(
            "Invalid {} ID: {}. ID must be a non-negative integer",
            resource, id
        ))),
        None => Ok(()),
    }
}

pub fn validate_title(title: &str) -> Result<&str, ApiError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("Film title cannot be empty"));
    }

    if trimmed.chars().count() > MAX_TITLE_LEN {
        return Err(ApiError::validation(format!(
            "Film title must be {} characters or less",
            MAX_TITLE_LEN
        )));
    }

    Ok(trimmed)
}

pub fn validate_person_name<'a>(field: &str, name: &'a str) -> Result<&'a str, ApiError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{} cannot be empty", field)));
    }

    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ApiError::validation(format!(
            "{} must be {} characters or less",
            field, MAX_NAME_LEN
        )));
    }

    Ok(trimmed)
}

fn validate_release_year(year: Option<i32>) -> Result<(), ApiError> {
    match year {
        Some(year) if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) => {
            Err(ApiError::validation(format!(
                "Invalid release year: {}. Year must be between {} and {}",
                year, MIN_RELEASE_YEAR, MAX_RELEASE_YEAR
            )))
        }
        _ => Ok(()),
    }
}

fn validate_money(field: &str, value: Option<f64>) -> Result<(), ApiError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(ApiError::validation(format!(
            "{} must be a non-negative number",
            field
        ))),
        _ => Ok(()),
    }
}

fn validate_positive(field: &str, value: Option<i32>) -> Result<(), ApiError> {
    match value {
        Some(v) if v <= 0 => Err(ApiError::validation(format!(
            "{} must be a positive integer",
            field
        ))),
        _ => Ok(()),
    }
}

fn validate_film_numbers(
    release_year: Option<i32>,
    rental_duration: Option<i32>,
    rental_rate: Option<f64>,
    length: Option<i32>,
    replacement_cost: Option<f64>,
) -> Result<(), ApiError> {
    validate_release_year(release_year)?;
    validate_positive("rental_duration", rental_duration)?;
    validate_money("rental_rate", rental_rate)?;
    validate_positive("length", length)?;
    validate_money("replacement_cost", replacement_cost)
}

pub fn validate_new_film(film: &NewFilm) -> Result<(), ApiError> {
    validate_title(&film.title)?;
    validate_film_numbers(
        film.release_year,
        film.rental_duration,
        film.rental_rate,
        film.length,
        film.replacement_cost,
    )
}

pub fn validate_film_patch(patch: &FilmPatch) -> Result<(), ApiError> {
    if let Some(title) = &patch.title {
        validate_title(title)?;
    }
    validate_film_numbers(
        patch.release_year,
        patch.rental_duration,
        patch.rental_rate,
        patch.length,
        patch.replacement_cost,
    )
}

pub fn validate_new_actor(actor: &NewActor) -> Result<(), ApiError> {
    validate_person_name("first_name", &actor.first_name)?;
    validate_person_name("last_name", &actor.last_name)?;
    Ok(())
}

pub fn validate_actor_patch(patch: &ActorPatch) -> Result<(), ApiError> {
    if let Some(first) = &patch.first_name {
        validate_person_name("first_name", first)?;
    }
    if let Some(last) = &patch.last_name {
        validate_person_name("last_name", last)?;
    }
    Ok(())
}
