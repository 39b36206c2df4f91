//! Purpose: Provide the internal runtime JSON decode entrypoints.
//! Exports: `from_str_in_place`, `ParseFailureCategory`, `categorize_error`, `hint_for_error`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: In-place decoding keeps the deserializer's partial-population behavior.
//! Invariants: Trailing non-whitespace after the value is rejected.
//! Notes: Error mapping is done by callsites so domain context stays explicit.

use serde::de::DeserializeOwned;
use serde_json::error::Category;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParseFailureCategory {
    Syntax,
    Data,
    Eof,
    Io,
}

impl ParseFailureCategory {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Data => "data",
            ParseFailureCategory::Eof => "eof",
            ParseFailureCategory::Io => "io",
        }
    }
}

pub(crate) fn from_str_in_place<T: DeserializeOwned>(
    input: &str,
    place: &mut T,
) -> Result<(), serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(input);
    T::deserialize_in_place(&mut deserializer, place)?;
    deserializer.end()
}

pub(crate) fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        Category::Syntax => ParseFailureCategory::Syntax,
        Category::Data => ParseFailureCategory::Data,
        Category::Eof => ParseFailureCategory::Eof,
        Category::Io => ParseFailureCategory::Io,
    }
}

pub(crate) fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    let category = categorize_error(err);
    format!(
        "parse category: {}; line {}, column {}; context: {context}",
        category.label(),
        err.line(),
        err.column()
    )
}
