//! Serial console on UART0.

use esp_hal::Blocking;
use esp_hal::peripherals::{GPIO1, UART0};
use esp_hal::uart::{Config, Uart};
use esp_println::println;

use crate::config::SERIAL_BAUD;
use crate::error::ScannerError;

/// Blocking UART used for all report output.
pub type Console = Uart<'static, Blocking>;

/// Configures UART0 at [`SERIAL_BAUD`] with TX on GPIO1.
///
/// # Errors
///
/// Returns [`ScannerError::Console`] if the UART rejects the configuration.
pub fn init_console(uart: UART0<'static>, tx: GPIO1<'static>) -> Result<Console, ScannerError> {
    let config = Config::default().with_baudrate(SERIAL_BAUD);
    let console = Uart::new(uart, config)
        .map_err(|e| {
            println!("Failed to configure serial console: {:?}", e);
            ScannerError::Console
        })?
        .with_tx(tx);
    Ok(console)
}
