//! SCORE2 / SCORE2-OP risk chart for the low-risk region (Denmark).
//!
//! The chart is a nested JSON object: gender → smoking status → LDL band
//! → age band → systolic blood pressure band → 10-year risk in percent.
//! Band keys are `"<low>-<high>"` strings and are part of the data
//! contract; they are never renamed.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::error::CalculatorError;

type Bands<V> = BTreeMap<String, V>;

/// gender → smoking status → LDL → age → systolic BP → percent.
pub type Score2Chart = BTreeMap<String, BTreeMap<String, Bands<Bands<Bands<i32>>>>>;

pub const GENDER_MALE: &str = "Mand";
pub const GENDER_FEMALE: &str = "Kvinde";
pub const NON_SMOKER: &str = "Ikke-ryger";
pub const SMOKER: &str = "Ryger";

static CHART: LazyLock<Result<Score2Chart, serde_json::Error>> =
    LazyLock::new(|| serde_json::from_str(include_str!("../../data/score2_table.json")));

/// The embedded chart.
pub fn chart() -> Result<&'static Score2Chart, CalculatorError> {
    CHART
        .as_ref()
        .map_err(|e| CalculatorError::Table(e.to_string()))
}

/// Input to a chart lookup.
#[derive(Debug, Clone, Copy)]
pub struct Score2Query<'a> {
    pub gender: &'a str,
    pub smoking_status: &'a str,
    pub ldl: f64,
    pub age: f64,
    pub systolic: f64,
}

/// Look up the 10-year risk. `None` when any value falls outside the chart.
pub fn lookup(chart: &Score2Chart, query: &Score2Query<'_>) -> Option<i32> {
    let ldl_bands = chart.get(query.gender)?.get(query.smoking_status)?;
    let age_bands = find_band(ldl_bands, query.ldl)?;
    let bp_bands = find_band(age_bands, query.age)?;
    find_band(bp_bands, query.systolic).copied()
}

/// Parse a `"<low>-<high>"` band key.
fn parse_band(key: &str) -> Option<(f64, f64)> {
    let (low, high) = key.split_once('-')?;
    Some((low.trim().parse().ok()?, high.trim().parse().ok()?))
}

/// Find the band containing `value`.
///
/// Bands are contiguous: a band covers `[low, next band's low)`, and the
/// last band covers `[low, high]`. Values between a printed upper bound
/// and the next band's lower bound (e.g. LDL 3.15) therefore still match.
fn find_band<V>(bands: &Bands<V>, value: f64) -> Option<&V> {
    let mut parsed: Vec<((f64, f64), &V)> = bands
        .iter()
        .filter_map(|(key, v)| parse_band(key).map(|bounds| (bounds, v)))
        .collect();
    parsed.sort_by(|a, b| a.0.0.total_cmp(&b.0.0));

    for (i, ((low, high), v)) in parsed.iter().enumerate() {
        let upper_ok = match parsed.get(i + 1) {
            Some(((next_low, _), _)) => value < *next_low,
            None => value <= *high,
        };
        if value >= *low && upper_ok {
            return Some(*v);
        }
    }
    None
}
