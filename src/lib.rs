//! Periodic Wi-Fi scanner for the ESP32 that lists discovered networks by
//! descending signal strength on the serial console.
//!
//! The ranking and formatting code is independent of the radio: it works on
//! any [`directory::NetworkDirectory`] and writes to any
//! [`core::fmt::Write`] sink. [`scanner`] wires it to `esp-radio` and the
//! UART console.
//!
//! ## Example
//!
//! ```ignore
//! use scan_sorted::{allocator, console, scanner};
//! use embassy_executor::Spawner;
//!
//! #[esp_rtos::main]
//! async fn main(spawner: Spawner) -> ! {
//!     allocator::init_heap();
//!     // ... (see bin/main.rs for complete example)
//! }
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

/// Memory allocation configuration
pub mod allocator;

/// Compile-time constants
pub mod config;

/// UART console setup
pub mod console;

/// Scan result access
pub mod directory;

/// Initialization errors
pub mod error;

/// Signal-strength ordering
pub mod ranking;

/// Console report formatting
pub mod report;

/// WiFi driver and scanning tasks
pub mod scanner;

/// Global static storage for WiFi components
pub mod types;
