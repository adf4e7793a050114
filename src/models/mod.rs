//! Domain and wire types for clipstash.
//!
//! A [`ClipboardItem`] is the only persistent entity: a unique id, the stored
//! text, and a pin flag. The remaining types are the JSON request/response
//! shapes of the HTTP API.

mod item;

pub use item::*;
