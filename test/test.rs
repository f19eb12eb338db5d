#![no_std]
#![no_main]

extern crate alloc;

use scan_sorted::directory::{Encryption, NetworkDirectory};

/// In-memory scan result: `(rssi, ssid, encryption)` per network.
struct FakeDirectory<'a>(&'a [(i8, &'a str, Encryption)]);

impl NetworkDirectory for FakeDirectory<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn signal_strength(&self, index: usize) -> i8 {
        self.0[index].0
    }

    fn name(&self, index: usize) -> &str {
        self.0[index].1
    }

    fn encryption(&self, index: usize) -> Encryption {
        self.0[index].2
    }
}

/// Directory with `n` networks whose strengths come from a fixed LCG.
struct GeneratedDirectory {
    strengths: alloc::vec::Vec<i8>,
}

impl GeneratedDirectory {
    fn new(n: usize, seed: u32) -> Self {
        let mut state = seed;
        let strengths = (0..n)
            .map(|_| {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                // -100..=-21 dBm, narrow enough to produce ties
                -(((state >> 24) % 80) as i8) - 21
            })
            .collect();
        Self { strengths }
    }
}

impl NetworkDirectory for GeneratedDirectory {
    fn len(&self) -> usize {
        self.strengths.len()
    }

    fn signal_strength(&self, index: usize) -> i8 {
        self.strengths[index]
    }

    fn name(&self, _index: usize) -> &str {
        "net"
    }

    fn encryption(&self, _index: usize) -> Encryption {
        Encryption::Wpa2
    }
}

#[cfg(test)]
#[embedded_test::tests(default_timeout = 10, executor = esp_rtos::embassy::Executor::new())]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use esp_hal::timer::timg::TimerGroup;
    use esp_radio::wifi::AuthMethod;
    use scan_sorted::config::MAX_NETWORKS;
    use scan_sorted::directory::{Encryption, NetworkDirectory};
    use scan_sorted::ranking::{clamp_count, rank_by_signal};
    use scan_sorted::report::{
        NO_NETWORKS, RANKING_BANNER, SCAN_STARTED, encryption_marker, report_scan,
        sort_display_networks, write_scan_started,
    };

    use super::{FakeDirectory, GeneratedDirectory};

    fn strengths_in_order(directory: &impl NetworkDirectory, order: &[usize]) -> Vec<i8> {
        order
            .iter()
            .map(|&index| directory.signal_strength(index))
            .collect()
    }

    #[init]
    fn init() {
        let peripherals = esp_hal::init(esp_hal::Config::default());
        scan_sorted::allocator::init_heap();

        let timg0 = TimerGroup::new(peripherals.TIMG0);
        esp_rtos::start(timg0.timer0);

        rtt_target::rtt_init_defmt!();
    }

    #[test]
    fn strongest_network_is_listed_first() {
        let entries = [
            (-80, "far", Encryption::Wpa2),
            (-40, "near", Encryption::Wpa2),
            (-60, "middle", Encryption::Wpa2),
        ];
        let directory = FakeDirectory(&entries);

        let order = rank_by_signal(&directory, directory.len());

        assert_eq!(strengths_in_order(&directory, &order), vec![-40, -60, -80]);
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn ranked_list_is_printed_under_banner() {
        let entries = [
            (-80, "far", Encryption::Wpa2),
            (-40, "near", Encryption::Open),
            (-60, "middle", Encryption::Wep),
        ];
        let directory = FakeDirectory(&entries);
        let mut out = String::new();

        sort_display_networks(&mut out, &directory, 3).unwrap();

        let expected = "------ Networks by descending RSSI ------\n\
                        \n\
                        \t-40: near \n\
                        \t-60: middle*\n\
                        \t-80: far*\n";
        assert_eq!(out, expected);
    }

    #[test]
    fn open_network_has_blank_marker() {
        let entries = [(-55, "cafe", Encryption::Open)];
        let directory = FakeDirectory(&entries);
        let mut out = String::new();

        sort_display_networks(&mut out, &directory, 1).unwrap();

        let line = out.lines().last().unwrap();
        assert_eq!(line, "\t-55: cafe ");
    }

    #[test]
    fn only_open_classification_gets_blank_marker() {
        let all = [
            Encryption::Open,
            Encryption::Wep,
            Encryption::Wpa,
            Encryption::Wpa2,
            Encryption::Wpa3,
            Encryption::Enterprise,
            Encryption::Wapi,
            Encryption::Unknown,
        ];
        for encryption in all {
            let expected = if encryption == Encryption::Open { " " } else { "*" };
            assert_eq!(encryption_marker(encryption), expected);
        }
    }

    #[test]
    fn empty_scan_prints_only_no_networks_message() {
        let directory = FakeDirectory(&[]);
        let mut out = String::new();

        report_scan(&mut out, &directory).unwrap();

        assert_eq!(out, "No networks found\n");
        assert!(!out.contains(RANKING_BANNER));
        assert_eq!(out.trim_end(), NO_NETWORKS);
    }

    #[test]
    fn non_empty_scan_prints_count_then_ranking() {
        let entries = [
            (-70, "a", Encryption::Wpa2),
            (-30, "b", Encryption::Open),
        ];
        let directory = FakeDirectory(&entries);
        let mut out = String::new();

        write_scan_started(&mut out).unwrap();
        report_scan(&mut out, &directory).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "",
                SCAN_STARTED,
                "2 networks found",
                "---- Scan finished ----",
                "",
                RANKING_BANNER,
                "",
                "\t-30: b ",
                "\t-70: a*",
            ]
        );
    }

    #[test]
    fn tied_strengths_each_appear_once_in_discovery_order() {
        let entries = [
            (-50, "first", Encryption::Wpa2),
            (-70, "weak", Encryption::Wpa2),
            (-50, "second", Encryption::Wpa2),
        ];
        let directory = FakeDirectory(&entries);

        let order = rank_by_signal(&directory, directory.len());

        assert_eq!(order, vec![0, 2, 1]);
    }

    #[test]
    fn ranking_is_sorted_permutation_for_every_size() {
        for n in 0..=MAX_NETWORKS {
            let directory = GeneratedDirectory::new(n, n as u32 + 7);

            let order = rank_by_signal(&directory, n);

            assert_eq!(order.len(), n);
            let mut seen = vec![false; n];
            for &index in &order {
                assert!(index < n);
                assert!(!seen[index], "index {} listed twice", index);
                seen[index] = true;
            }

            let strengths = strengths_in_order(&directory, &order);
            assert!(strengths.windows(2).all(|pair| pair[0] >= pair[1]));
        }
    }

    #[test]
    fn count_is_clamped_to_capacity() {
        let directory = GeneratedDirectory::new(MAX_NETWORKS + 3, 42);

        let order = rank_by_signal(&directory, directory.len());

        assert_eq!(order.len(), MAX_NETWORKS);
        assert!(order.iter().all(|&index| index < MAX_NETWORKS));
    }

    #[test]
    fn count_is_clamped_to_directory_length() {
        let entries = [(-60, "only", Encryption::Wpa2)];
        let directory = FakeDirectory(&entries);

        assert_eq!(clamp_count(&directory, 5), 1);
        assert_eq!(rank_by_signal(&directory, 5), vec![0]);
    }

    #[test]
    fn auth_methods_map_to_encryption() {
        assert_eq!(Encryption::from(Some(AuthMethod::None)), Encryption::Open);
        assert_eq!(Encryption::from(Some(AuthMethod::Wep)), Encryption::Wep);
        assert_eq!(
            Encryption::from(Some(AuthMethod::WpaWpa2Personal)),
            Encryption::Wpa2
        );
        assert_eq!(
            Encryption::from(Some(AuthMethod::Wpa2Wpa3Personal)),
            Encryption::Wpa3
        );
        assert_eq!(
            Encryption::from(Some(AuthMethod::Wpa2Enterprise)),
            Encryption::Enterprise
        );
        assert_eq!(Encryption::from(None), Encryption::Unknown);
    }
}
