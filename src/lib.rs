pub mod cli;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod serial;

use std::io::Write;

use tracing::info;

pub use cli::Args;
pub use error::{Error, MappingError, TransportError};
pub use mapping::{clean_mapping, MappingLoader};
pub use serial::{send_mapping, PortSettings, SerialConnector, SystemSerial};

/// Load the requested mapping from `loader` and send it, unmodified, over
/// `connector`, printing the device's reply to `out`. The mapping is read
/// before any port is opened.
pub fn run<C, W>(
    args: &Args,
    loader: &MappingLoader,
    connector: &C,
    out: &mut W,
) -> Result<(), Error>
where
    C: SerialConnector,
    W: Write,
{
    let payload = loader.load(&args.mapping_name)?;

    info!(
        "[sendmapping] Sending '{}' ({} bytes) to {}",
        args.mapping_name,
        payload.len(),
        args.serial_port
    );

    send_mapping(connector, &args.serial_port, &payload, &PortSettings::default(), out)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
