//! Purpose: Tri-state optional field that defers decoding of its JSON payload.
//! Exports: `OptionalStruct`.
//! Role: Embedded as a serde field; records presence and keeps the raw JSON text.
//! Invariants: Absent fields and the `null` literal both decode to unset.
//! Invariants: A set payload is re-emitted byte-for-byte; only `get` decodes it.
//! Notes: The payload is retained through serde_json's raw value support, so the
//! surrounding document must be (de)serialized with serde_json directly. Documents
//! routed through `serde_json::Value` or `#[serde(flatten)]` cannot carry raw values.
use crate::core::codec::{Codec, JsonCodec};
use crate::core::error::Error;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use tracing::trace;

/// A JSON field that is either set (raw payload retained) or unset (null or absent).
///
/// Decoding a document only records whether the field carried a value; the
/// value itself is decoded later by [`OptionalStruct::get`] into whatever
/// shape the caller asks for.
///
/// ```
/// use nullabye::OptionalStruct;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Request {
///     optional_thing: OptionalStruct,
/// }
///
/// #[derive(Debug, Default, Deserialize, PartialEq)]
/// struct Thing {
///     id: i64,
/// }
///
/// let request: Request = serde_json::from_str(r#"{"optional_thing": {"id": 1}}"#).unwrap();
/// let mut thing = Thing::default();
/// request.optional_thing.get(&mut thing).unwrap();
/// assert!(request.optional_thing.is_set());
/// assert_eq!(thing, Thing { id: 1 });
///
/// let request: Request = serde_json::from_str("{}").unwrap();
/// assert!(!request.optional_thing.is_set());
/// ```
#[derive(Clone, Debug, Default)]
pub struct OptionalStruct {
    raw: Option<Box<RawValue>>,
}

impl OptionalStruct {
    /// Encodes `value` with the default [`JsonCodec`].
    pub fn new<T: Serialize + ?Sized>(value: &T) -> Result<Self, Error> {
        Self::new_with(&JsonCodec::new(), value)
    }

    pub fn new_with<C: Codec, T: Serialize + ?Sized>(codec: &C, value: &T) -> Result<Self, Error> {
        let raw = codec.encode(value)?;
        trace!(len = raw.get().len(), "constructed optional value");
        Ok(Self { raw: Some(raw) })
    }

    /// Like [`OptionalStruct::new`], but panics on encode failure.
    ///
    /// Only for callers that treat a failed encode as a bug.
    #[track_caller]
    pub fn new_or_panic<T: Serialize + ?Sized>(value: &T) -> Self {
        match Self::new(value) {
            Ok(optional) => optional,
            Err(err) => panic!("failed to construct optional value: {err}"),
        }
    }

    /// An unset container; encodes as `null`.
    pub fn null() -> Self {
        Self { raw: None }
    }

    pub fn is_set(&self) -> bool {
        self.raw.is_some()
    }

    pub fn raw_json(&self) -> Option<&str> {
        self.raw.as_deref().map(RawValue::get)
    }

    /// Decodes the payload into `target` with the default [`JsonCodec`].
    ///
    /// When unset, `target` is returned untouched and no error is reported;
    /// use [`OptionalStruct::is_set`] to tell an absent value from a default one.
    /// On decode failure `target` may be partially populated.
    pub fn get<'t, T: DeserializeOwned>(&self, target: &'t mut T) -> Result<&'t mut T, Error> {
        self.get_with(&JsonCodec::new(), target)
    }

    pub fn get_with<'t, C: Codec, T: DeserializeOwned>(
        &self,
        codec: &C,
        target: &'t mut T,
    ) -> Result<&'t mut T, Error> {
        let Some(raw) = &self.raw else {
            return Ok(target);
        };
        codec.decode_into(raw, target)?;
        Ok(target)
    }

    /// Like [`OptionalStruct::get`], but panics on decode failure.
    #[track_caller]
    pub fn get_or_panic<'t, T: DeserializeOwned>(&self, target: &'t mut T) -> &'t mut T {
        match self.get(target) {
            Ok(target) => target,
            Err(err) => panic!("failed to decode optional value: {err}"),
        }
    }

    /// Decodes into a fresh `T`, returning `None` when unset.
    pub fn decode<T: DeserializeOwned + Default>(&self) -> Result<Option<T>, Error> {
        if !self.is_set() {
            return Ok(None);
        }
        let mut target = T::default();
        self.get(&mut target)?;
        Ok(Some(target))
    }
}

impl PartialEq for OptionalStruct {
    fn eq(&self, other: &Self) -> bool {
        self.raw_json() == other.raw_json()
    }
}

impl Eq for OptionalStruct {}

impl Serialize for OptionalStruct {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.raw {
            Some(raw) => raw.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for OptionalStruct {
    // Goes through `deserialize_option`, which serde's derive also uses for
    // missing fields, so an omitted key lands here as `None`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Box<RawValue>>::deserialize(deserializer)?;
        trace!(
            set = raw.is_some(),
            len = raw.as_deref().map_or(0, |raw| raw.get().len()),
            "decoded optional field"
        );
        Ok(Self { raw })
    }
}
