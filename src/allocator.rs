//! Heap setup.
//!
//! The radio driver allocates its buffers on the heap, and each report
//! allocates its index permutation there too.

/// RAM reclaimed from the bootloader, handed to the heap.
const RECLAIMED_HEAP_SIZE: usize = 98768;

/// Additional heap for radio buffers and scan results.
const MAIN_HEAP_SIZE: usize = 128 * 1024;

/// Registers both heap regions with `esp-alloc`.
///
/// Must run once, before the radio is initialized.
pub fn init_heap() {
    esp_alloc::heap_allocator!(#[esp_hal::ram(reclaimed)] size: RECLAIMED_HEAP_SIZE);
    esp_alloc::heap_allocator!(size: MAIN_HEAP_SIZE);
}
