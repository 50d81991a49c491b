//! Wire and data model shared by the cities service.

pub mod model;
pub mod requests;
pub mod responses;
