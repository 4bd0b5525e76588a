//! Data transfer objects exposed by the API layer.

pub mod harmony;
