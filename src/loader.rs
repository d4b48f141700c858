//! TSV loading and stage filtering
//!
//! Parses the tab-separated stats dump into typed [`Record`]s and keeps only
//! regular-season rows. Records are read-only after load; every later stage
//! consumes progressively smaller slices of this table.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StatError};

/// Stage literal selecting the rows the whole analysis runs on
pub const REGULAR_SEASON: &str = "Regular_Season";

/// One row of the input table
///
/// Extra columns in the file are ignored; the named ones must be present or
/// deserialization fails with a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    #[serde(rename = "Player")]
    pub player: String,
    /// Season label, e.g. `2015-16`. The first four characters encode the
    /// start year.
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "Stage")]
    pub stage: String,
    #[serde(rename = "3PM")]
    pub three_pm: u32,
    #[serde(rename = "3PA")]
    pub three_pa: u32,
    #[serde(rename = "FGM")]
    pub fgm: u32,
    #[serde(rename = "FGA")]
    pub fga: u32,
}

impl Record {
    /// Integer start year parsed from the first four characters of the
    /// season label
    pub fn start_year(&self) -> Result<i32> {
        self.season
            .get(..4)
            .and_then(|y| y.parse::<i32>().ok())
            .ok_or_else(|| StatError::SeasonYear {
                season: self.season.clone(),
            })
    }
}

/// Load all records from a tab-separated file with a header row
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|source| StatError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(file);

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: Record = row?;
        records.push(record);
    }

    tracing::debug!(rows = records.len(), "loaded input table");
    Ok(records)
}

/// Keep only rows whose stage is [`REGULAR_SEASON`]
pub fn regular_season(records: Vec<Record>) -> Vec<Record> {
    let filtered: Vec<Record> = records
        .into_iter()
        .filter(|r| r.stage == REGULAR_SEASON)
        .collect();
    tracing::debug!(rows = filtered.len(), "applied stage filter");
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "Player\tSeason\tStage\t3PM\t3PA\tFGM\tFGA\n";

    fn write_tsv(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(HEADER.as_bytes()).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_parses_typed_fields() {
        let file = write_tsv("Ray Allen\t2005-06\tRegular_Season\t269\t653\t585\t1286\n");
        let records = load_records(file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].player, "Ray Allen");
        assert_eq!(records[0].three_pm, 269);
        assert_eq!(records[0].three_pa, 653);
        assert_eq!(records[0].fgm, 585);
        assert_eq!(records[0].fga, 1286);
    }

    #[test]
    fn test_load_ignores_extra_columns() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Player\tSeason\tStage\tTeam\t3PM\t3PA\tFGM\tFGA\n")
            .unwrap();
        file.write_all(b"Ray Allen\t2005-06\tRegular_Season\tSEA\t269\t653\t585\t1286\n")
            .unwrap();
        file.flush().unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records[0].three_pa, 653);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = load_records(Path::new("/nonexistent/stats.tsv")).unwrap_err();
        assert!(matches!(err, StatError::Read { .. }));
    }

    #[test]
    fn test_load_missing_column_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Player\tSeason\tStage\n").unwrap();
        file.write_all(b"Ray Allen\t2005-06\tRegular_Season\n")
            .unwrap();
        file.flush().unwrap();

        let err = load_records(file.path()).unwrap_err();
        assert!(matches!(err, StatError::Parse(_)));
    }

    #[test]
    fn test_load_non_numeric_count_is_parse_error() {
        let file = write_tsv("Ray Allen\t2005-06\tRegular_Season\tmany\t653\t585\t1286\n");
        let err = load_records(file.path()).unwrap_err();
        assert!(matches!(err, StatError::Parse(_)));
    }

    #[test]
    fn test_stage_filter_drops_playoffs() {
        let file = write_tsv(
            "Ray Allen\t2005-06\tRegular_Season\t269\t653\t585\t1286\n\
             Ray Allen\t2005-06\tPlayoffs\t27\t65\t58\t128\n",
        );
        let records = regular_season(load_records(file.path()).unwrap());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].stage, REGULAR_SEASON);
    }

    #[test]
    fn test_start_year() {
        let file = write_tsv("Ray Allen\t2005-06\tRegular_Season\t269\t653\t585\t1286\n");
        let records = load_records(file.path()).unwrap();
        assert_eq!(records[0].start_year().unwrap(), 2005);
    }

    #[test]
    fn test_start_year_rejects_non_numeric_prefix() {
        let file = write_tsv("Ray Allen\tlockout\tRegular_Season\t269\t653\t585\t1286\n");
        let records = load_records(file.path()).unwrap();
        assert!(matches!(
            records[0].start_year(),
            Err(StatError::SeasonYear { .. })
        ));
    }
}
