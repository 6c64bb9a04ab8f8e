// src/cli.rs
//
// Command-line arguments and usage text.

use std::ffi::OsString;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

pub const BIN_NAME: &str = "sendmapping";

/// Number of arguments after the program name.
pub const ARG_COUNT: usize = 2;

/// Send a mapping file to a serial-attached controller and print its reply.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = BIN_NAME, disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Serial port the controller is attached to, e.g. COM8 or /dev/ttyACM0.
    #[arg(value_name = "SERIALPORT", value_parser = NonEmptyStringValueParser::new())]
    pub serial_port: String,

    /// Mapping name. `.txt` is appended when missing.
    #[arg(value_name = "MAPPINGNAME", value_parser = NonEmptyStringValueParser::new())]
    pub mapping_name: String,
}

/// Parse a full argv, program name included. `None` means a usage error.
///
/// The argument count is checked before clap sees anything, so a stray
/// `--help` or any other extra token counts as a wrong argument count.
pub fn parse_args<I, T>(argv: I) -> Option<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    if argv.len() != ARG_COUNT + 1 {
        return None;
    }
    Args::try_parse_from(argv).ok()
}

/// Usage text printed to stderr on a malformed invocation.
pub fn usage() -> String {
    format!(
        "USAGE: {bin} <serialport> <mappingname>\n\n   e.g. {bin} COM8 hydra0",
        bin = BIN_NAME
    )
}

// ============================================================================
// Tests
// ============================================================================
