//! Per-season three-point shooting accuracy
//!
//! Aggregates makes and attempts per season for one player. Seasons with no
//! attempts carry no accuracy and are excluded from the numeric series; they
//! still appear in the printed report as `N/A`.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::loader::Record;

/// Aggregated three-point line for one season
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonLine {
    pub season: String,
    pub made: u32,
    pub attempted: u32,
    /// `100 * made / attempted`, or `None` when the player took no threes
    /// that season
    pub accuracy: Option<f64>,
}

/// Sum makes/attempts per season for `player`, seasons in ascending
/// lexicographic order of the raw season label
pub fn season_accuracy(records: &[Record], player: &str) -> Vec<SeasonLine> {
    let mut totals: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    for record in records.iter().filter(|r| r.player == player) {
        let entry = totals.entry(&record.season).or_insert((0, 0));
        entry.0 += record.three_pm;
        entry.1 += record.three_pa;
    }

    totals
        .into_iter()
        .map(|(season, (made, attempted))| SeasonLine {
            season: season.to_string(),
            made,
            attempted,
            accuracy: if attempted > 0 {
                Some(100.0 * f64::from(made) / f64::from(attempted))
            } else {
                None
            },
        })
        .collect()
}

/// Extract the (year, accuracy) series for fitting and interpolation
///
/// Seasons without a defined accuracy are skipped. The year is the integer
/// parse of the season label's first four characters.
pub fn accuracy_series(lines: &[SeasonLine]) -> Result<(Vec<i32>, Vec<f64>)> {
    let mut years = Vec::new();
    let mut accuracies = Vec::new();
    for line in lines {
        if let Some(accuracy) = line.accuracy {
            let year = line
                .season
                .get(..4)
                .and_then(|y| y.parse::<i32>().ok())
                .ok_or_else(|| crate::error::StatError::SeasonYear {
                    season: line.season.clone(),
                })?;
            years.push(year);
            accuracies.push(accuracy);
        }
    }
    Ok((years, accuracies))
}
