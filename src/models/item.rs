use serde::{Deserialize, Serialize};

/// A single clipboard history entry.
///
/// Ids are assigned monotonically and never reused, even after the item is
/// deleted. The store keeps at most one item per distinct `content` value;
/// equality is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardItem {
    pub id: u64,
    pub content: String,
    pub pinned: bool,
}

/// Input for submitting new clipboard text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemInput {
    pub content: String,
}

/// Input addressing an existing item by id (delete, toggle-pin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemIdInput {
    pub id: u64,
}

/// Response for an add request.
///
/// `existed` is true when the content was already present: the stored item is
/// returned (promoted to the front unless pinned) instead of a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemResponse {
    pub id: u64,
    pub content: String,
    pub pinned: bool,
    pub existed: bool,
}

/// Success envelope for delete and toggle-pin. `success` is false when the
/// given id is not in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
}
