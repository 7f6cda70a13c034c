//! Spinner and idle chatter for the bite wait.

use std::time::{SystemTime, UNIX_EPOCH};

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

const WAITING_MESSAGES: [&str; 8] = [
    "Waiting for a bite...",
    "The bobber sways...",
    "Ripples on the water...",
    "Something circles below...",
    "Patience...",
    "A shadow passes...",
    "The line twitches...",
    "Quiet water...",
];

/// Advances every 100ms.
pub fn spinner_char() -> char {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    SPINNER[((millis / 100) % SPINNER.len() as u128) as usize]
}

/// Stable for a given seed.
pub fn waiting_message(seed: u64) -> &'static str {
    WAITING_MESSAGES[(seed.wrapping_mul(7) as usize) % WAITING_MESSAGES.len()]
}
