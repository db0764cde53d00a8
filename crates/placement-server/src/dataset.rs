//! Summary statistics computed from a `cgpa,iq,placement` CSV file.

use std::io::Read;
use std::path::{Path, PathBuf};

use placement_core::StatsSummary;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("dataset {} has no rows", path.display())]
    Empty { path: PathBuf },
}

/// Extra columns (row index, names) are ignored.
#[derive(Debug, Deserialize)]
struct StudentRecord {
    cgpa: f64,
    iq: f64,
    placement: u8,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `Ok(None)` for a file with a header but no rows.
pub fn stats_from_reader<R: Read>(reader: R, data_source: &str) -> Result<Option<StatsSummary>, csv::Error> {
    let mut total = 0_u64;
    let mut placed = 0_u64;
    let mut cgpa_sum = 0.0;
    let mut iq_sum = 0.0;

    for record in csv::Reader::from_reader(reader).deserialize::<StudentRecord>() {
        let record = record?;
        total += 1;
        placed += u64::from(record.placement);
        cgpa_sum += record.cgpa;
        iq_sum += record.iq;
    }

    if total == 0 {
        return Ok(None);
    }
    let count = total as f64;
    Ok(Some(StatsSummary {
        success: true,
        total_students: total,
        placed_students: placed,
        placement_rate: Some(round2(placed as f64 * 100.0 / count)),
        avg_cgpa: round2(cgpa_sum / count),
        avg_iq: round2(iq_sum / count),
        data_source: Some(data_source.to_string()),
    }))
}

pub fn load_stats(path: &Path) -> Result<StatsSummary, DatasetError> {
    let read_error = |source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::open(path).map_err(|error| read_error(csv::Error::from(error)))?;
    let data_source = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
    stats_from_reader(file, &data_source)
        .map_err(read_error)?
        .ok_or_else(|| DatasetError::Empty {
            path: path.to_path_buf(),
        })
}

/// Dataset figures when `path` loads, demo figures otherwise.
pub fn resolve_stats(path: Option<&Path>) -> StatsSummary {
    let Some(path) = path else {
        return StatsSummary::demo();
    };
    match load_stats(path) {
        Ok(stats) => {
            tracing::info!(
                target: "placement_server",
                path = %path.display(),
                records = stats.total_students,
                "dataset loaded"
            );
            stats
        }
        Err(error) => {
            tracing::warn!(target: "placement_server", %error, "dataset unavailable; serving demo stats");
            StatsSummary::demo()
        }
    }
}
