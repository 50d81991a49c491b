use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
/// Raw query string of `GET /cities`.
/// Values stay unparsed so the handler can report which parameter is invalid.
pub struct ListCitiesQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}
