//! Aggregate `summary.csv` (§6.3) — header `algorithm` then one column per
//! house; each row an algorithm name then its scores across houses.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::OutputResult;

/// `{house_name -> {algorithm_name -> score}}`, kept as nested `BTreeMap`s so
/// header/row order is deterministic without a separate sort step — a
/// stronger guarantee than `original_source`'s insertion-ordered `std::map`
/// table, but compatible with it.
#[derive(Default, Clone, Debug)]
pub struct RunSummary {
    scores: BTreeMap<String, BTreeMap<String, u32>>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, house_name: &str, algorithm_name: &str, score: u32) {
        self.scores
            .entry(house_name.to_string())
            .or_default()
            .insert(algorithm_name.to_string(), score);
    }

    /// Write the pivoted CSV: header `algorithm` then one column per house
    /// (houses and algorithms both in `BTreeMap`/`BTreeSet` order), then one
    /// row per algorithm. A `(house, algorithm)` pair with no recorded score
    /// (e.g. that simulation failed before publishing one) is left blank.
    pub fn write_csv(&self, path: &Path) -> OutputResult<()> {
        let houses: Vec<&String> = self.scores.keys().collect();

        let mut algorithms: BTreeSet<&String> = BTreeSet::new();
        for per_house in self.scores.values() {
            algorithms.extend(per_house.keys());
        }

        let mut writer = csv::Writer::from_path(path)?;

        let mut header = vec!["algorithm".to_string()];
        header.extend(houses.iter().map(|h| h.to_string()));
        writer.write_record(&header)?;

        for algorithm in &algorithms {
            let mut row = vec![(*algorithm).clone()];
            for house in &houses {
                let cell = self.scores[*house].get(*algorithm).map(|s| s.to_string()).unwrap_or_default();
                row.push(cell);
            }
            writer.write_record(&row)?;
        }

        writer.flush()?;
        log::info!("wrote summary CSV {}", path.display());
        Ok(())
    }
}
