#![no_std]
#![no_main]
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
#![deny(clippy::large_stack_frames)]

use core::fmt::Write;

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use esp_println::println;
use panic_rtt_target as _;
use scan_sorted::config::{SERIAL_BAUD, SETTLE_DELAY_MS};
use scan_sorted::{allocator, console, scanner};

esp_bootloader_esp_idf::esp_app_desc!();

#[allow(
    clippy::large_stack_frames,
    reason = "it's not unusual to allocate larger buffers etc. in main"
)]
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    rtt_target::rtt_init_defmt!();

    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    allocator::init_heap();
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    println!("Embassy initialized!");

    match console::init_console(peripherals.UART0, peripherals.GPIO1) {
        Ok(mut console) => {
            Timer::after(Duration::from_millis(SETTLE_DELAY_MS)).await;
            if writeln!(console, "Setup done").is_err() {
                defmt::warn!("console write failed");
            }
            defmt::info!("console ready at {} baud", SERIAL_BAUD);

            if let Err(e) = scanner::wifi_scanner(spawner, peripherals.WIFI, console).await {
                defmt::error!("wifi scanner setup failed: {}", e);
            }
        }
        Err(e) => defmt::error!("console setup failed: {}", e),
    }

    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
