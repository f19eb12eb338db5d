//! Per-index access to the results of the most recent scan.

use esp_radio::wifi::{AccessPointInfo, AuthMethod};

/// Encryption classification of a discovered network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Encryption {
    /// No credential required.
    Open,
    /// WEP.
    Wep,
    /// WPA personal.
    Wpa,
    /// WPA2 personal, or mixed WPA/WPA2.
    Wpa2,
    /// WPA3 personal, or mixed WPA2/WPA3.
    Wpa3,
    /// WPA2 enterprise.
    Enterprise,
    /// WAPI personal.
    Wapi,
    /// The driver did not report an auth method.
    Unknown,
}

impl From<Option<AuthMethod>> for Encryption {
    fn from(auth: Option<AuthMethod>) -> Self {
        match auth {
            Some(AuthMethod::None) => Encryption::Open,
            Some(AuthMethod::Wep) => Encryption::Wep,
            Some(AuthMethod::Wpa) => Encryption::Wpa,
            Some(AuthMethod::Wpa2Personal | AuthMethod::WpaWpa2Personal) => Encryption::Wpa2,
            Some(AuthMethod::Wpa3Personal | AuthMethod::Wpa2Wpa3Personal) => Encryption::Wpa3,
            Some(AuthMethod::Wpa2Enterprise) => Encryption::Enterprise,
            Some(AuthMethod::WapiPersonal) => Encryption::Wapi,
            #[allow(unreachable_patterns)]
            Some(_) | None => Encryption::Unknown,
        }
    }
}

/// Read-only view over a completed scan.
///
/// Indices run from `0` to `len() - 1` in the order the radio discovered
/// the networks. Callers must only pass indices below [`len`](Self::len).
pub trait NetworkDirectory {
    /// Number of networks held.
    fn len(&self) -> usize;

    /// Whether the scan found nothing.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Signal strength in dBm. Higher (less negative) is stronger.
    fn signal_strength(&self, index: usize) -> i8;

    /// Network name (SSID).
    fn name(&self, index: usize) -> &str;

    /// Encryption classification.
    fn encryption(&self, index: usize) -> Encryption;
}

impl NetworkDirectory for [AccessPointInfo] {
    fn len(&self) -> usize {
        <[AccessPointInfo]>::len(self)
    }

    fn signal_strength(&self, index: usize) -> i8 {
        self[index].signal_strength
    }

    fn name(&self, index: usize) -> &str {
        self[index].ssid.as_str()
    }

    fn encryption(&self, index: usize) -> Encryption {
        self[index].auth_method.into()
    }
}
