//! Strongly typed identifiers for catalog entities.
//!
//! Film, actor and category keys are all plain integers in the store. The
//! newtypes keep them from being swapped at service boundaries, which matters
//! for the association operations where both appear side by side.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn value(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self::new(id)
            }
        }
    };
}

entity_id!(
    /// Primary key of a row in `film`.
    ///
    /// ```rust
    /// use cinecat::domain::FilmId;
    ///
    /// let id = FilmId::new(3);
    /// assert_eq!(id.value(), 3);
    /// assert_eq!(id.to_string(), "3");
    /// ```
    FilmId
);

entity_id!(
    /// Primary key of a row in `actor`.
    ActorId
);

entity_id!(
    /// Primary key of a row in `category`.
    CategoryId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip_through_i32() {
        let film = FilmId::from(9);
        let raw: i32 = film.into();
        assert_eq!(raw, 9);
        assert_eq!(ActorId::new(7).value(), 7);
    }

    #[test]
    fn test_ids_serialize_as_plain_integers() {
        assert_eq!(serde_json::to_string(&CategoryId::new(4)).unwrap(), "4");
        let id: ActorId = serde_json::from_str("12").unwrap();
        assert_eq!(id, ActorId::new(12));
    }
}
