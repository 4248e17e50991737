use uuid::Uuid;

/// Generate a globally unique identifier for a new document.
///
/// Ids are random v4 UUIDs rendered as strings, matching the persisted
/// `id` field format. Never fails, never repeats.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
