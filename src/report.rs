//! Console formatting of a scan cycle.
//!
//! Everything here writes to a [`core::fmt::Write`] sink so the same code
//! drives the UART console on the board and a `String` in tests.

use core::fmt::{self, Write};

use crate::config::{OPEN_ENCRYPTION, OPEN_MARKER, PROTECTED_MARKER};
use crate::directory::{Encryption, NetworkDirectory};
use crate::ranking::rank_by_signal;

/// Printed instead of a report when the scan comes back empty.
pub const NO_NETWORKS: &str = "No networks found";

/// Header of the ranked list.
pub const RANKING_BANNER: &str = "------ Networks by descending RSSI ------";

/// Written before each scan.
pub const SCAN_STARTED: &str = "---- Scan started ----";

/// Written after a non-empty scan, before the ranked list.
pub const SCAN_FINISHED: &str = "---- Scan finished ----";

/// Marker shown after the network name.
pub fn encryption_marker(encryption: Encryption) -> &'static str {
    if encryption == OPEN_ENCRYPTION {
        OPEN_MARKER
    } else {
        PROTECTED_MARKER
    }
}

/// Writes the line for network `index`: strength, name, encryption marker.
pub fn write_network<W, D>(out: &mut W, directory: &D, index: usize) -> fmt::Result
where
    W: Write,
    D: NetworkDirectory + ?Sized,
{
    writeln!(
        out,
        "\t{}: {}{}",
        directory.signal_strength(index),
        directory.name(index),
        encryption_marker(directory.encryption(index))
    )
}

/// Sorts the first `n` networks by descending signal strength and lists them
/// under a banner.
pub fn sort_display_networks<W, D>(out: &mut W, directory: &D, n: usize) -> fmt::Result
where
    W: Write,
    D: NetworkDirectory + ?Sized,
{
    let order = rank_by_signal(directory, n);

    writeln!(out, "{}", RANKING_BANNER)?;
    writeln!(out)?;

    for index in order {
        write_network(out, directory, index)?;
    }
    Ok(())
}

/// Start-of-cycle banner.
pub fn write_scan_started<W: Write>(out: &mut W) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", SCAN_STARTED)
}

/// Reports a completed scan: the "no networks" message when it is empty,
/// otherwise the count followed by the ranked list.
pub fn report_scan<W, D>(out: &mut W, directory: &D) -> fmt::Result
where
    W: Write,
    D: NetworkDirectory + ?Sized,
{
    let n = directory.len();
    if n == 0 {
        return writeln!(out, "{}", NO_NETWORKS);
    }

    writeln!(out, "{} networks found", n)?;
    writeln!(out, "{}", SCAN_FINISHED)?;
    writeln!(out)?;

    sort_display_networks(out, directory, n)
}
