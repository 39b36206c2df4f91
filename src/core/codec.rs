//! Purpose: Pluggable encode/decode strategy used by `OptionalStruct`.
//! Exports: `Codec`, `JsonCodec`, `JsonCodecOptions`.
//! Role: Seam between the container and the structured-data codec; tests swap it.
//! Invariants: Codecs hold no mutable state and are passed explicitly.
//! Invariants: Encoders return well-formed JSON text; decoders never see `null` from unset containers.
use crate::core::error::{Error, ErrorKind};
use crate::json::parse;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

pub trait Codec {
    /// Encodes `value` into JSON text held as a raw value.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Box<RawValue>, Error>;

    /// Decodes `raw` into `target`, populating it in place.
    ///
    /// On failure `target` is left in whatever state the decoder reached.
    fn decode_into<T: DeserializeOwned>(&self, raw: &RawValue, target: &mut T) -> Result<(), Error>;
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct JsonCodecOptions {
    pub pretty: bool,
}

impl JsonCodecOptions {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Default codec backed by serde_json.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct JsonCodec {
    options: JsonCodecOptions,
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::with_options(JsonCodecOptions::new())
    }

    pub fn with_options(options: JsonCodecOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> JsonCodecOptions {
        self.options
    }
}

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Box<RawValue>, Error> {
        let encoded = if self.options.pretty {
            serde_json::to_string_pretty(value).and_then(RawValue::from_string)
        } else {
            serde_json::value::to_raw_value(value)
        };
        encoded.map_err(|err| {
            Error::new(ErrorKind::Encode)
                .with_message(err.to_string())
                .with_source(err)
        })
    }

    fn decode_into<T: DeserializeOwned>(
        &self,
        raw: &RawValue,
        target: &mut T,
    ) -> Result<(), Error> {
        parse::from_str_in_place(raw.get(), target).map_err(|err| {
            Error::new(ErrorKind::Decode)
                .with_message(err.to_string())
                .with_hint(parse::hint_for_error(&err, std::any::type_name::<T>()))
                .with_source(err)
        })
    }
}
