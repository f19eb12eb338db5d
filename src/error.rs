//! Failures while bringing up the console and the radio.

use core::fmt;

/// Initialization step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum ScannerError {
    /// UART console configuration was rejected.
    Console,
    /// The radio controller could not be initialized.
    RadioInit,
    /// The Wi-Fi controller could not be created.
    Controller,
    /// Station mode could not be configured.
    Configure,
    /// The Wi-Fi controller failed to start.
    Start,
    /// The scan task could not be spawned.
    Spawn,
}

impl fmt::Display for ScannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ScannerError::Console => "failed to configure serial console",
            ScannerError::RadioInit => "failed to initialize radio controller",
            ScannerError::Controller => "failed to create Wi-Fi controller",
            ScannerError::Configure => "failed to set Wi-Fi mode",
            ScannerError::Start => "failed to start Wi-Fi controller",
            ScannerError::Spawn => "failed to spawn Wi-Fi scan task",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ScannerError {}
