// src/serial/mod.rs
//
// Serial transport for mapping uploads.
// A session is one open, write, read, close cycle; nothing is kept between runs.

pub mod settings;
pub mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use settings::PortSettings;
pub use transport::{
    exchange, send_mapping, SerialConnector, SerialLink, SystemSerial, RESPONSE_LABEL,
};
