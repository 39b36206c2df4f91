//! Purpose: Tri-state optional JSON fields with deferred decoding.
//! Exports: `api` (container, codec, errors) plus root re-exports of the same.
//! Role: Library crate; embed `OptionalStruct` as a field in serde documents.
//! Invariants: Absent and `null` fields both decode to an unset container.
//! Invariants: Set containers keep the field's JSON text verbatim until `get`.
pub mod api;
pub(crate) mod core;
pub(crate) mod json;

pub use api::{Codec, Error, ErrorKind, JsonCodec, JsonCodecOptions, OptionalStruct};
