//! Line codec for the history file.
//!
//! One record per line, `id|pinned|base64(content)`. The content is base64
//! encoded so it can contain neither the `|` delimiter nor a newline, which
//! keeps the format unambiguous without quoting rules.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

use crate::models::ClipboardItem;

/// Why a persisted record could not be parsed. Each variant maps to one
/// malformed-line class; the loader warns and skips, never aborts.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("expected 3 '|'-separated fields")]
    FieldCount,
    #[error("invalid item id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),
    #[error("invalid pinned flag: {0}")]
    InvalidPinned(#[from] std::str::ParseBoolError),
    #[error("invalid base64 content: {0}")]
    InvalidContent(#[from] base64::DecodeError),
    #[error("decoded content is not valid UTF-8")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}

pub fn encode_line(item: &ClipboardItem) -> String {
    format!("{}|{}|{}", item.id, item.pinned, BASE64.encode(&item.content))
}

pub fn parse_line(line: &str) -> Result<ClipboardItem, RecordError> {
    let mut fields = line.splitn(3, '|');
    let (Some(id), Some(pinned), Some(content)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(RecordError::FieldCount);
    };

    Ok(ClipboardItem {
        id: id.parse()?,
        pinned: pinned.parse()?,
        content: String::from_utf8(BASE64.decode(content)?)?,
    })
}
