use sea_orm::{entity::prelude::*, sea_query::StringLen};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::actor::Actor;

/// MPAA rating as stored in the `film.rating` column.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(5))")]
pub enum Rating {
    #[default]
    #[sea_orm(string_value = "G")]
    #[serde(rename = "G")]
    G,
    #[sea_orm(string_value = "PG")]
    #[serde(rename = "PG")]
    Pg,
    #[sea_orm(string_value = "PG-13")]
    #[serde(rename = "PG-13")]
    Pg13,
    #[sea_orm(string_value = "R")]
    #[serde(rename = "R")]
    R,
    #[sea_orm(string_value = "NC-17")]
    #[serde(rename = "NC-17")]
    Nc17,
}

impl Rating {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::G => "G",
            Self::Pg => "PG",
            Self::Pg13 => "PG-13",
            Self::R => "R",
            Self::Nc17 => "NC-17",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "G" => Ok(Self::G),
            "PG" => Ok(Self::Pg),
            "PG-13" | "PG13" => Ok(Self::Pg13),
            "R" => Ok(Self::R),
            "NC-17" | "NC17" => Ok(Self::Nc17),
            other => Err(format!(
                "Unknown rating '{other}'. Expected one of G, PG, PG-13, R, NC-17"
            )),
        }
    }
}

pub const DEFAULT_RENTAL_DURATION: i32 = 3;
pub const DEFAULT_RENTAL_RATE: f64 = 4.99;
pub const DEFAULT_REPLACEMENT_COST: f64 = 19.99;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub film_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub rental_duration: i32,
    pub rental_rate: f64,
    pub length: Option<i32>,
    pub replacement_cost: f64,
    pub rating: Rating,
    pub special_features: Option<String>,
    pub last_update: String,
}

/// A film together with the actors linked to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmDetail {
    #[serde(flatten)]
    pub film: Film,
    pub actors: Vec<Actor>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewFilm {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub rental_duration: Option<i32>,
    #[serde(default)]
    pub rental_rate: Option<f64>,
    #[serde(default)]
    pub length: Option<i32>,
    #[serde(default)]
    pub replacement_cost: Option<f64>,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub special_features: Option<String>,
}

/// Partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilmPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_features: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FilmFilter {
    /// Substring the title must contain.
    pub title: Option<String>,
}
