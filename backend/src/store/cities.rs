use super::{CityStore, StoreError, StoreResult};
use common::model::city::{City, CityPatch, InsertPayload};
use log::{debug, info};
use rusqlite::{params, OptionalExtension, Row};
use serde_json::Value;

/// Page size used when the caller gives no usable `limit`.
const DEFAULT_LIMIT: i64 = 10;

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS cities (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    country TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

const CITY_SELECT_SQL: &str = "SELECT id, name, country, created_at, updated_at FROM cities";

/// Applies the paging defaults: a missing or non-positive `limit` becomes
/// `DEFAULT_LIMIT`, a missing or negative `offset` becomes 0.
fn normalize_page(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT);
    let offset = offset.filter(|o| *o > 0).unwrap_or(0);
    (limit, offset)
}

/// Turns an untyped JSON document into an insert payload.
///
/// Only objects and arrays are accepted; `null` and primitives are rejected
/// before their fields are looked at.
pub fn parse_insert_payload(value: Value) -> StoreResult<InsertPayload> {
    let payload = match value {
        Value::Object(_) => serde_json::from_value(value).map(InsertPayload::Single),
        Value::Array(_) => serde_json::from_value(value).map(InsertPayload::Batch),
        _ => {
            return Err(StoreError::validation(
                "inserted data must be object or array",
            ))
        }
    };
    payload.map_err(|e| StoreError::validation(e.to_string()))
}

fn require_text(field: &str, value: &str) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

fn city_from_row(row: &Row<'_>) -> rusqlite::Result<City> {
    Ok(City {
        id: row.get(0)?,
        name: row.get(1)?,
        country: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

impl CityStore {
    /// Creates the `cities` table if it does not exist yet.
    pub async fn create_schema(&self) -> StoreResult<()> {
        self.run(|conn| {
            conn.execute_batch(CREATE_TABLE_SQL)?;
            Ok(())
        })
        .await?;
        info!("cities schema ready at {}", self.path().display());
        Ok(())
    }

    /// Drops the `cities` table. Missing tables are not an error.
    pub async fn drop_schema(&self) -> StoreResult<()> {
        self.run(|conn| {
            conn.execute_batch("DROP TABLE IF EXISTS cities")?;
            Ok(())
        })
        .await?;
        info!("cities schema dropped at {}", self.path().display());
        Ok(())
    }

    /// Persists every record of `payload` in one transaction and returns the
    /// assigned ids in input order.
    pub async fn insert(&self, payload: InsertPayload) -> StoreResult<Vec<i64>> {
        let records = payload.records().to_vec();
        if records.is_empty() {
            return Err(StoreError::validation(
                "inserted data must contain at least one record",
            ));
        }
        for city in &records {
            require_text("name", &city.name)?;
            require_text("country", &city.country)?;
        }

        let ids = self
            .run(move |conn| {
                let tx = conn.transaction()?;
                let mut ids = Vec::with_capacity(records.len());
                {
                    let mut stmt = tx.prepare("INSERT INTO cities (name, country) VALUES (?1, ?2)")?;
                    for city in &records {
                        ids.push(stmt.insert(params![city.name, city.country])?);
                    }
                }
                tx.commit()?;
                Ok(ids)
            })
            .await?;
        debug!("inserted {} cities", ids.len());
        Ok(ids)
    }

    /// Deletes the city with `id` and returns the affected count (0 or 1).
    pub async fn delete_by_id(&self, id: i64) -> StoreResult<usize> {
        let affected: usize = self
            .run(move |conn| Ok(conn.execute("DELETE FROM cities WHERE id = ?1", params![id])?))
            .await?;
        debug!("delete city id={} affected={}", id, affected);
        Ok(affected)
    }

    /// Returns one page of cities in ascending id order.
    pub async fn list(&self, limit: Option<i64>, offset: Option<i64>) -> StoreResult<Vec<City>> {
        let (limit, offset) = normalize_page(limit, offset);
        self.run(move |conn| {
            let mut stmt =
                conn.prepare(&format!("{CITY_SELECT_SQL} ORDER BY id ASC LIMIT ?1 OFFSET ?2"))?;
            let cities = stmt
                .query_map(params![limit, offset], city_from_row)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(cities)
        })
        .await
    }

    /// Looks up a city. Absence is `Ok(None)`, not an error.
    pub async fn get_by_id(&self, id: i64) -> StoreResult<Option<City>> {
        self.run(move |conn| {
            let city = conn
                .query_row(
                    &format!("{CITY_SELECT_SQL} WHERE id = ?1"),
                    params![id],
                    city_from_row,
                )
                .optional()?;
            Ok(city)
        })
        .await
    }

    /// Merge-update: only the fields present in `patch` are written.
    /// Returns the affected count, 0 when no city has `patch.id`.
    pub async fn update(&self, patch: CityPatch) -> StoreResult<usize> {
        if let Some(name) = &patch.name {
            require_text("name", name)?;
        }
        if let Some(country) = &patch.country {
            require_text("country", country)?;
        }

        let id = patch.id;
        let affected: usize = self
            .run(move |conn| {
                Ok(conn.execute(
                    "UPDATE cities
                     SET name = COALESCE(?1, name),
                         country = COALESCE(?2, country),
                         updated_at = CURRENT_TIMESTAMP
                     WHERE id = ?3",
                    params![patch.name, patch.country, patch.id],
                )?)
            })
            .await?;
        debug!("update city id={} affected={}", id, affected);
        Ok(affected)
    }

    /// Number of stored cities.
    pub async fn count(&self) -> StoreResult<i64> {
        self.run(|conn| {
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM cities", [], |row| row.get(0))?;
            Ok(count)
        })
        .await
    }
}
