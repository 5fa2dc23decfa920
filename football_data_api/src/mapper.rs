//! Shapes a successful JSON body into the value an operation returns.

use serde_json::Value;

use crate::types::Entity;

/// What the caller expects from a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The body itself is the entity.
    Single,
    /// The entities are in the array under this top-level field.
    List(&'static str),
    /// The body untouched.
    Raw,
}

/// A mapped body.
#[derive(Debug, Clone, PartialEq)]
pub enum Mapped {
    Single(Option<Entity>),
    List(Vec<Entity>),
    Raw(Value),
}

impl Mapped {
    pub fn into_single<T: From<Entity>>(self) -> Option<T> {
        match self {
            Mapped::Single(entity) => entity.map(T::from),
            _ => None,
        }
    }

    pub fn into_list<T: From<Entity>>(self) -> Vec<T> {
        match self {
            Mapped::List(entities) => entities.into_iter().map(T::from).collect(),
            _ => Vec::new(),
        }
    }

    pub fn into_raw(self) -> Option<Value> {
        match self {
            Mapped::Raw(value) => Some(value),
            _ => None,
        }
    }
}

/// Maps `body` according to `shape`.
///
/// A missing list field maps to an empty list. Array items that are not
/// objects are skipped.
pub fn map(shape: Shape, body: Value) -> Mapped {
    match shape {
        Shape::Single => Mapped::Single(Entity::from_value(body)),
        Shape::List(field) => {
            let items = match body {
                Value::Object(mut map) => match map.remove(field) {
                    Some(Value::Array(items)) => items,
                    Some(other) => {
                        tracing::warn!("Expected an array under '{}', got {}", field, other);
                        Vec::new()
                    }
                    None => Vec::new(),
                },
                _ => Vec::new(),
            };
            let total = items.len();
            let entities: Vec<Entity> = items.into_iter().filter_map(Entity::from_value).collect();
            if entities.len() != total {
                tracing::warn!(
                    "Skipped {} non-object items under '{}'",
                    total - entities.len(),
                    field
                );
            }
            Mapped::List(entities)
        }
        Shape::Raw => Mapped::Raw(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Competition, Match};
    use serde_json::json;

    #[test]
    fn list_under_field() {
        let body = json!({"count": 2, "matches": [{"id": 1}, {"id": 2}]});
        let matches: Vec<Match> = map(Shape::List("matches"), body).into_list();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[1].id(), Some(2));
    }

    #[test]
    fn missing_list_field_is_empty() {
        let body = json!({"count": 0, "filters": {}});
        assert_eq!(map(Shape::List("teams"), body), Mapped::List(Vec::new()));
    }

    #[test]
    fn non_array_list_field_is_empty() {
        let body = json!({"teams": {"id": 1}});
        assert!(map(Shape::List("teams"), body).into_list::<Entity>().is_empty());
    }

    #[test]
    fn non_object_items_skipped_but_kept_in_raw() {
        let body = json!({"teams": [{"id": 1}, 7, null, {"id": 2}]});
        let teams = map(Shape::List("teams"), body.clone()).into_list::<Entity>();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[1].u64_field("id"), Some(2));

        let raw = map(Shape::Raw, body).into_raw().unwrap();
        assert_eq!(raw["teams"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn single_entity() {
        let body = json!({"id": 2001, "name": "UEFA Champions League", "code": "CL"});
        let comp: Competition = map(Shape::Single, body).into_single().unwrap();
        assert_eq!(comp.code(), Some("CL"));
    }

    #[test]
    fn single_non_object_is_absent() {
        assert!(map(Shape::Single, json!([1])).into_single::<Entity>().is_none());
    }

    #[test]
    fn raw_passthrough() {
        let body = json!({"anything": [1, {"x": null}]});
        assert_eq!(map(Shape::Raw, body.clone()).into_raw(), Some(body));
    }

    #[test]
    fn wrong_shape_conversion_is_empty() {
        let mapped = map(Shape::Raw, json!({"matches": []}));
        assert!(mapped.clone().into_list::<Match>().is_empty());
        assert!(mapped.into_single::<Match>().is_none());
    }
}
