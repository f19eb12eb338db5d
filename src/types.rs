//! Static storage for the radio and the Wi-Fi controller.
//!
//! Embassy tasks need `'static` borrows, so both live in [`StaticCell`]s that
//! are initialized exactly once by [`crate::scanner::wifi_scanner`].

use esp_radio::wifi::WifiController;
use static_cell::StaticCell;

/// Wi-Fi controller driven by the scan task.
pub static WIFI_CONTROLLER: StaticCell<WifiController<'static>> = StaticCell::new();

/// Radio controller the Wi-Fi controller borrows from.
pub static RADIO_INIT: StaticCell<esp_radio::Controller<'static>> = StaticCell::new();
