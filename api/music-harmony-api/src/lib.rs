//! Public API surface for higher-level HTTP/CLI layers.

#![deny(missing_docs)]

/// Data transfer objects exposed by the API layer.
pub mod models;

pub use models::harmony::{
    CheckErrorsRequest, CheckErrorsResponse, CounterpointRequest, CounterpointResponse,
    CounterpointVoicingDto, ErrorEntryDto, HarmonizeMelodyRequest, HarmonizeMelodyResponse,
    HarmonizeRequest, HarmonizeResponse, PartialVoicingDto, VoicingDto,
};
