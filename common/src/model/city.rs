//! # City Model
//!
//! Records of the `cities` collection and the payloads used to create and
//! modify them.
//!
//! - `City`: a persisted row, as returned by the store and serialized to clients.
//! - `NewCity`: the fields a client supplies when creating a record.
//! - `InsertPayload`: a single record or an ordered batch handed to the store.
//! - `CityChanges` / `CityPatch`: merge-update input; absent fields keep their value.

use serde::{Deserialize, Serialize};

/// A stored city. `id`, `name` and `country` are always present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Client-supplied fields for a new city. Timestamps are assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCity {
    pub name: String,
    pub country: String,
}

impl NewCity {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
        }
    }
}

/// Input accepted by an insert: one record or an ordered batch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InsertPayload {
    Single(NewCity),
    Batch(Vec<NewCity>),
}

impl InsertPayload {
    /// Records in insertion order.
    pub fn records(&self) -> &[NewCity] {
        match self {
            InsertPayload::Single(city) => std::slice::from_ref(city),
            InsertPayload::Batch(cities) => cities,
        }
    }
}

impl From<NewCity> for InsertPayload {
    fn from(city: NewCity) -> Self {
        InsertPayload::Single(city)
    }
}

impl From<Vec<NewCity>> for InsertPayload {
    fn from(cities: Vec<NewCity>) -> Self {
        InsertPayload::Batch(cities)
    }
}

/// Body of a partial update request. The target id comes from the URL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// A merge-update keyed by `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityPatch {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl CityPatch {
    pub fn new(id: i64, changes: CityChanges) -> Self {
        Self {
            id,
            name: changes.name,
            country: changes.country,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_payload_accepts_object_or_array() {
        let single: InsertPayload =
            serde_json::from_value(json!({ "name": "Lyon", "country": "France" })).unwrap();
        assert_eq!(single.records(), &[NewCity::new("Lyon", "France")]);

        let batch: InsertPayload = serde_json::from_value(json!([
            { "name": "Lyon", "country": "France" },
            { "name": "Porto", "country": "Portugal" }
        ]))
        .unwrap();
        assert_eq!(batch.records().len(), 2);
        assert_eq!(batch.records()[1].name, "Porto");
    }

    #[test]
    fn city_omits_missing_timestamps() {
        let city = City {
            id: 1,
            name: "Lyon".into(),
            country: "France".into(),
            created_at: None,
            updated_at: None,
        };
        assert_eq!(
            serde_json::to_value(&city).unwrap(),
            json!({ "id": 1, "name": "Lyon", "country": "France" })
        );
    }

    #[test]
    fn patch_takes_id_from_caller() {
        let changes = CityChanges {
            name: Some("Nice".into()),
            country: None,
        };
        let patch = CityPatch::new(7, changes);
        assert_eq!(patch.id, 7);
        assert_eq!(patch.name.as_deref(), Some("Nice"));
        assert!(patch.country.is_none());
    }
}
