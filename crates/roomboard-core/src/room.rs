//! Room identifier extraction.

/// Literal prefix the booking export puts in front of room names.
pub const ROOM_PREFIX: &str = "Room: ";

/// Returns the room identifier shown in the dropdown for a room cell's text.
///
/// The text is trimmed first, then [`ROOM_PREFIX`] is removed if present.
/// The table itself keeps the original text.
pub fn room_id(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed.strip_prefix(ROOM_PREFIX).unwrap_or(trimmed)
}
