// src/serial/settings.rs
//
// Fixed port settings for a mapping upload. Framing is always 8-N-1.

use std::time::Duration;

/// Baud rate the controller firmware listens at.
pub const BAUD_RATE: u32 = 115_200;
/// Total time allowed for the response read.
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);
/// Upper bound on the response collected after a write.
pub const MAX_RESPONSE_LEN: usize = 2000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortSettings {
    pub baud_rate: u32,
    pub timeout: Duration,
    pub max_response_len: usize,
}

impl Default for PortSettings {
    fn default() -> Self {
        Self {
            baud_rate: BAUD_RATE,
            timeout: READ_TIMEOUT,
            max_response_len: MAX_RESPONSE_LEN,
        }
    }
}
