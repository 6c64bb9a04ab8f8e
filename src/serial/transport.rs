// src/serial/transport.rs
//
// One serial session: open the port, write the mapping, collect the reply,
// print it. The port is owned by the session and closed when it drops.

use std::io::{self, Read, Write};
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::settings::PortSettings;
use crate::error::TransportError;

/// Label line printed ahead of the device response.
pub const RESPONSE_LABEL: &str = "response:";

/// An open serial port: a byte stream whose read timeout can be adjusted.
pub trait SerialLink: Read + Write {
    fn set_read_timeout(&mut self, timeout: Duration) -> io::Result<()>;
}

impl SerialLink for Box<dyn serialport::SerialPort> {
    fn set_read_timeout(&mut self, timeout: Duration) -> io::Result<()> {
        (**self).set_timeout(timeout).map_err(io::Error::from)
    }
}

/// Opens serial ports. Closing is left to the port's `Drop`.
pub trait SerialConnector {
    type Port: SerialLink;

    fn open(&self, port: &str, settings: &PortSettings) -> Result<Self::Port, serialport::Error>;
}

/// Connector backed by the OS serial driver. Always 8-N-1, no flow control.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemSerial;

impl SerialConnector for SystemSerial {
    type Port = Box<dyn serialport::SerialPort>;

    fn open(&self, port: &str, settings: &PortSettings) -> Result<Self::Port, serialport::Error> {
        serialport::new(port, settings.baud_rate)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .flow_control(serialport::FlowControl::None)
            .timeout(settings.timeout)
            .open()
    }
}

/// Send `payload` to `port_name` and print the reply to `out` under
/// [`RESPONSE_LABEL`]. Returns the decoded reply.
pub fn send_mapping<C, W>(
    connector: &C,
    port_name: &str,
    payload: &str,
    settings: &PortSettings,
    out: &mut W,
) -> Result<String, TransportError>
where
    C: SerialConnector,
    W: Write,
{
    let mut port = connector
        .open(port_name, settings)
        .map_err(|source| TransportError::Open {
            port: port_name.to_string(),
            source,
        })?;

    info!("[serial] Opened {} at {} baud (8-N-1)", port_name, settings.baud_rate);

    let received = exchange(&mut port, port_name, payload.as_bytes(), settings);
    drop(port);
    debug!("[serial] Closed {}", port_name);
    let received = received?;

    let response = String::from_utf8(received).map_err(|source| TransportError::Decode {
        port: port_name.to_string(),
        source,
    })?;

    writeln!(out, "{}", RESPONSE_LABEL)
        .and_then(|_| out.write_all(response.as_bytes()))
        .and_then(|_| out.flush())
        .map_err(TransportError::Output)?;

    Ok(response)
}

/// Write `payload` in full, then read until `max_response_len` bytes have
/// arrived, the port runs dry, or `settings.timeout` elapses. Each read is
/// bounded by the time left, so the whole read never outlasts the timeout.
pub fn exchange<P>(
    port: &mut P,
    port_name: &str,
    payload: &[u8],
    settings: &PortSettings,
) -> Result<Vec<u8>, TransportError>
where
    P: SerialLink + ?Sized,
{
    port.write_all(payload)
        .and_then(|_| port.flush())
        .map_err(|source| TransportError::Write {
            port: port_name.to_string(),
            source,
        })?;
    debug!("[serial] Wrote {} bytes to {}", payload.len(), port_name);

    let mut buf = vec![0u8; settings.max_response_len];
    let mut filled = 0;
    let deadline = Instant::now() + settings.timeout;

    while filled < buf.len() {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            break;
        }
        let read = port
            .set_read_timeout(remaining)
            .and_then(|_| port.read(&mut buf[filled..]));
        match read {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if is_timeout(&e) => break,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(TransportError::Read {
                    port: port_name.to_string(),
                    source,
                })
            }
        }
    }

    if filled == 0 {
        warn!("[serial] No response from {} within {:?}", port_name, settings.timeout);
    }
    buf.truncate(filled);
    debug!("[serial] Received {} bytes from {}", filled, port_name);
    Ok(buf)
}

fn is_timeout(e: &io::Error) -> bool {
    matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}

// ============================================================================
// Tests
// ============================================================================
