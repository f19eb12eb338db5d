//! WiFi driver bring-up and the periodic scan task.

use core::fmt::Write;

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_hal::peripherals::WIFI;
use esp_println::println;
use esp_radio::wifi::{ClientConfig, ModeConfig, ScanConfig, WifiController};

use crate::config::{MAX_NETWORKS, SCAN_INTERVAL_MS};
use crate::console::Console;
use crate::error::ScannerError;
use crate::report::{report_scan, write_scan_started};
use crate::types::{RADIO_INIT, WIFI_CONTROLLER};

/// Embassy task that scans forever and prints each result set ranked by
/// signal strength.
///
/// A failed scan is reported on the console and retried on the next cycle.
#[embassy_executor::task]
pub async fn wifi_scan_task(
    wifi_controller: &'static mut WifiController<'static>,
    mut console: Console,
) {
    loop {
        if write_scan_started(&mut console).is_err() {
            defmt::warn!("console write failed");
        }

        let scan_config = ScanConfig::default().with_max(MAX_NETWORKS);
        match wifi_controller.scan_with_config_async(scan_config).await {
            Ok(scan_results) => {
                defmt::info!("scan returned {} networks", scan_results.len());
                if report_scan(&mut console, scan_results.as_slice()).is_err() {
                    defmt::warn!("console write failed");
                }
            }
            Err(e) => {
                defmt::warn!("wifi scan failed: {:?}", e);
                if writeln!(console, "Scan failed: {}", e).is_err() {
                    defmt::warn!("console write failed");
                }
            }
        }

        Timer::after(Duration::from_millis(SCAN_INTERVAL_MS)).await;
    }
}

/// Initializes the radio in station mode and spawns [`wifi_scan_task`],
/// handing it the console.
///
/// # Errors
///
/// Returns the [`ScannerError`] variant of the first step that fails:
/// radio initialization, controller creation, mode configuration,
/// controller start, or task spawn.
pub async fn wifi_scanner(
    spawner: Spawner,
    device: WIFI<'static>,
    console: Console,
) -> Result<(), ScannerError> {
    let radio_init = esp_radio::init().map_err(|e| {
        println!("Failed to initialize radio controller: {}", e);
        ScannerError::RadioInit
    })?;
    let radio_init = RADIO_INIT.init(radio_init);

    println!("Radio initialized!");

    println!("Creating WiFi controller...");
    let (wifi_controller, _interfaces) =
        esp_radio::wifi::new(radio_init, device, Default::default()).map_err(|e| {
            println!("Failed to create WiFi controller: {}", e);
            ScannerError::Controller
        })?;
    println!("WiFi controller created!");

    let wifi_controller = WIFI_CONTROLLER.init(wifi_controller);

    let mode_config = ModeConfig::Client(ClientConfig::default());
    wifi_controller.set_config(&mode_config).map_err(|e| {
        println!("Failed to set Wi-Fi mode: {}", e);
        ScannerError::Configure
    })?;

    println!("Starting WiFi controller...");
    wifi_controller.start_async().await.map_err(|e| {
        println!("Failed to start Wi-Fi controller: {}", e);
        ScannerError::Start
    })?;
    println!("WiFi controller started!");

    // Give WiFi some time to initialize
    Timer::after(Duration::from_millis(500)).await;

    spawner
        .spawn(wifi_scan_task(wifi_controller, console))
        .map_err(|e| {
            println!("Failed to spawn WiFi scan task: {:?}", e);
            ScannerError::Spawn
        })?;

    Ok(())
}
