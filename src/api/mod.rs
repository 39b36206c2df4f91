//! Purpose: Define the stable public Rust API boundary for nullabye.
//! Exports: Container, codec, and error types needed by embedding documents.
//! Role: Public, additive-only surface; hides internal parse helpers.
//! Invariants: This module is the only public path to core types.
//! Invariants: Internal modules remain private and are not directly exposed.

pub use crate::core::codec::{Codec, JsonCodec, JsonCodecOptions};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::optional::OptionalStruct;
