//! Compile-time configuration.
//!
//! The firmware has no runtime configuration surface. Everything tunable
//! lives here and is baked into the image.

use crate::directory::Encryption;

/// Baud rate of the UART0 serial console.
pub const SERIAL_BAUD: u32 = 115_200;

/// Settling delay after the console is configured, in milliseconds.
pub const SETTLE_DELAY_MS: u64 = 100;

/// Pause between the end of one report and the next scan, in milliseconds.
pub const SCAN_INTERVAL_MS: u64 = 3000;

/// Upper bound on the number of networks requested from the radio and
/// accepted by the ranking.
pub const MAX_NETWORKS: usize = 127;

/// Classification that counts as "no credential needed".
pub const OPEN_ENCRYPTION: Encryption = Encryption::Open;

/// Trailing marker printed for networks that require a credential.
pub const PROTECTED_MARKER: &str = "*";

/// Trailing marker printed for open networks.
pub const OPEN_MARKER: &str = " ";
