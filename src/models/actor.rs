use serde::{Deserialize, Serialize};

use super::film::Film;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub actor_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub last_update: String,
}

impl Actor {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An actor together with the films they appear in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorDetail {
    #[serde(flatten)]
    pub actor: Actor,
    pub films: Vec<Film>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActor {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActorPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}
