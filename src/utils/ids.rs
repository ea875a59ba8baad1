use uuid::Uuid;

/// Fresh random identifier for palettes, palette entries and themes.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
