//! Domain values returned by the API.
//!
//! Every value is a thin projection over [`Entity`]: typed accessors cover
//! the fields callers rely on, and everything else stays reachable by name
//! through `Deref<Target = Entity>`.

macro_rules! projection {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(crate::types::Entity);

        impl $name {
            pub fn as_entity(&self) -> &crate::types::Entity {
                &self.0
            }

            pub fn into_entity(self) -> crate::types::Entity {
                self.0
            }
        }

        impl From<crate::types::Entity> for $name {
            fn from(entity: crate::types::Entity) -> Self {
                Self(entity)
            }
        }

        impl std::ops::Deref for $name {
            type Target = crate::types::Entity;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }
    };
}

mod entity;
pub use self::entity::Entity;

mod competition;
pub use self::competition::{Area, Competition, Season};

mod team;
pub use self::team::Team;

mod fixture;
pub use self::fixture::{Match, Score, ScoreLine};
