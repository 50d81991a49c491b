//! Deterministic city data for tests.

use common::model::city::NewCity;

const NAMES: [&str; 10] = [
    "Lakeview", "Port Ellis", "Northbrook", "Carverton", "Willowmere",
    "Ashford", "Greyhaven", "Sunfield", "Marlow", "Eastwick",
];

const COUNTRIES: [&str; 7] = [
    "Norway", "Chile", "Kenya", "Portugal", "Canada", "Vietnam", "Peru",
];

/// Builds `n` cities (at least one). Names carry the index so every record is distinct.
pub fn cities(n: i64) -> Vec<NewCity> {
    let count = if n > 0 { n as usize } else { 1 };
    (0..count)
        .map(|i| {
            NewCity::new(
                format!("{} {}", NAMES[i % NAMES.len()], i),
                COUNTRIES[i % COUNTRIES.len()],
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::cities;

    #[test]
    fn non_positive_count_yields_one_city() {
        assert_eq!(cities(0).len(), 1);
        assert_eq!(cities(-5).len(), 1);
        assert_eq!(cities(25).len(), 25);
    }
}
