use axum::{extract::State, response::IntoResponse, Json};

use crate::models::*;
use crate::store::ItemStore;

// ============================================================
// Persistence
// ============================================================

/// Flush the store to disk after a mutation. A failed write is logged and
/// the request still succeeds: the in-memory store stays authoritative for
/// the running process, the file only matters for restart recovery.
fn persist(store: &ItemStore) {
    if let Err(e) = store.save() {
        tracing::error!("Failed to persist clipboard history: {:#}", e);
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Items
// ============================================================

pub async fn list_items(State(store): State<ItemStore>) -> Json<Vec<ClipboardItem>> {
    Json(store.get_items())
}

pub async fn add_item(
    State(store): State<ItemStore>,
    Json(input): Json<AddItemInput>,
) -> Json<AddItemResponse> {
    let (item, existed) = store.add_item(input.content);
    persist(&store);

    Json(AddItemResponse {
        id: item.id,
        content: item.content,
        pinned: item.pinned,
        existed,
    })
}

pub async fn delete_item(
    State(store): State<ItemStore>,
    Json(input): Json<ItemIdInput>,
) -> Json<ActionResponse> {
    let success = store.delete_item(input.id);
    if success {
        persist(&store);
    }
    Json(ActionResponse { success })
}

pub async fn toggle_pin(
    State(store): State<ItemStore>,
    Json(input): Json<ItemIdInput>,
) -> Json<ActionResponse> {
    let success = store.toggle_pin(input.id);
    if success {
        persist(&store);
    }
    Json(ActionResponse { success })
}
