//! Switch identifiers of a single-press keypad.
//!
//! A keypad reading is the id of the one switch currently pressed, or no
//! switch at all. In Rust the reading is an `Option<u8>`. Integrations that
//! carry the reading as a plain byte use [`SWITCH_NONE`] for "no switch",
//! which is larger than every real id.

/// Raw byte meaning "no switch pressed"
pub const SWITCH_NONE: u8 = u8::MAX;

/// Decode a raw keypad byte, mapping [`SWITCH_NONE`] to `None`.
pub const fn switch_from_raw(raw: u8) -> Option<u8> {
    if raw == SWITCH_NONE { None } else { Some(raw) }
}

/// Encode a keypad reading as a raw byte, mapping `None` to [`SWITCH_NONE`].
pub const fn switch_to_raw(switch: Option<u8>) -> u8 {
    match switch {
        Some(id) => id,
        None => SWITCH_NONE,
    }
}
