#![allow(dead_code)]

use quantedge_smi::{Ohlcv, Price, SmiSeries, Timestamp};
use serde::{Deserialize, de::DeserializeOwned};

/// OHLC bar parsed from the hourly fixture CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RefBar {
    pub open_time: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Ohlcv for RefBar {
    fn open(&self) -> Price {
        self.open
    }

    fn high(&self) -> Price {
        self.high
    }

    fn low(&self) -> Price {
        self.low
    }

    fn close(&self) -> Price {
        self.close
    }

    fn open_time(&self) -> Timestamp {
        self.open_time
    }
}

/// Reference SMI row. `signal` is empty in the CSV until the signal
/// line is seeded.
#[derive(Debug, Deserialize)]
pub struct RefSmiValue {
    pub open_time: u64,
    pub oscillator: f64,
    pub signal: Option<f64>,
}

const OHLC_PATH: &str = "tests/fixtures/data/ohlc-1h.csv";

/// Load reference OHLC bars.
pub fn load_reference_ohlcs() -> Vec<RefBar> {
    load_records(OHLC_PATH, "invalid OHLC record")
}

/// Load reference SMI rows.
pub fn load_smi_ref(path: &str) -> Vec<RefSmiValue> {
    load_records(path, "invalid SMI reference record")
}

/// Assert two f64 values are within tolerance.
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}

/// Assert a computed series matches reference rows point by point.
pub fn assert_series_matches(
    name: &str,
    actual: &SmiSeries,
    reference: &[RefSmiValue],
    tolerance: f64,
) {
    assert_eq!(
        actual.len(),
        reference.len(),
        "{name}: length mismatch: {}/{}",
        actual.len(),
        reference.len()
    );

    for (i, (point, expected)) in actual.points().iter().zip(reference).enumerate() {
        let context = format!("{name} at point {i} (t={})", expected.open_time);

        assert_eq!(point.timestamp(), expected.open_time, "{context}: timestamp");
        assert_near(point.oscillator(), expected.oscillator, tolerance, &context);

        match (point.signal(), expected.signal) {
            (None, None) => {}
            (Some(a), Some(e)) => assert_near(a, e, tolerance, &format!("{context} signal")),
            (a, e) => panic!("{context}: signal presence mismatch: got {a:?}, expected {e:?}"),
        }
    }
}

/// Generate a reference match test for an SMI configuration.
///
/// Usage: `reference_test!(smi_5_3, 5, 3, "tests/fixtures/data/smi-5-3.csv", 1e-9);`
#[allow(unused_macros)]
macro_rules! reference_test {
    ($name:ident, $k:expr, $d:expr, $ref_path:expr, $tolerance:expr) => {
        mod $name {
            use super::fixtures::*;
            use quantedge_smi::*;
            use std::num::NonZero;

            fn nz(n: usize) -> NonZero<usize> {
                NonZero::new(n).unwrap()
            }

            #[test]
            fn matches_reference() {
                let bars = load_reference_ohlcs();
                let reference = load_smi_ref($ref_path);

                let smi = Smi::new(SmiConfig::new(nz($k), nz($d)));
                let out = smi
                    .compute(&bars)
                    .unwrap_or_else(|e| panic!("{} not computable: {e}", stringify!($name)));

                assert_series_matches(stringify!($name), &out, &reference, $tolerance);
            }

            #[test]
            fn prefix_matches_full_history() {
                // Recomputing on a shorter history reproduces the same
                // leading points: nothing depends on future bars.
                let bars = load_reference_ohlcs();
                let reference = load_smi_ref($ref_path);

                let smi = Smi::new(SmiConfig::new(nz($k), nz($d)));
                let cut = bars.len() / 2;
                let out = smi.compute(&bars[..cut]).unwrap();

                assert_series_matches(
                    stringify!($name),
                    &out,
                    &reference[..out.len()],
                    $tolerance,
                );
                assert_eq!(out.len(), cut - smi.config().first_oscillator_index());
            }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use reference_test;

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize().map(|r| r.expect(expect_msg)).collect()
}
