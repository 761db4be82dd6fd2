//! Flowsheet document errors.
//!
//! Only a document that cannot be read at all is an error; malformed
//! individual objects are skipped with a diagnostic instead.

use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Malformed attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("Text encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    #[error("Invalid UTF-8 in element name: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Unexpected document structure: {0}")]
    Structure(String),
}
