//! Serializes computed slice values to the text report and JSON sidecar.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::AnalyzeError;
use crate::intensity::IntensityVector;

/// One report line per slice, in the fixed historical format. The labels stay
/// Cyan/Magenta/Yellow/Black regardless of channel mode; see DESIGN.md.
pub fn format_report(values: &[IntensityVector]) -> String {
    let mut out = String::new();
    for (i, v) in values.iter().enumerate() {
        let [c, m, y, k] = v.0;
        out.push_str(&format!(
            "Slice {}: Cyan={c}, Magenta={m}, Yellow={y}, Black={k}\n",
            i + 1
        ));
    }
    out
}

/// Overwrites `path` with the formatted report. Writes a sibling `.tmp` file
/// first and renames it into place so a crash cannot leave a truncated report.
pub fn write_report(path: &Path, values: &[IntensityVector]) -> Result<(), AnalyzeError> {
    write_atomic(path, format_report(values).as_bytes())
}

#[derive(Debug, Serialize)]
struct SliceRecord {
    slice: u32,
    cyan: u8,
    magenta: u8,
    yellow: u8,
    black: u8,
}

/// Machine-readable variant of the report, one record per slice.
pub fn write_json_report(path: &Path, values: &[IntensityVector]) -> Result<(), AnalyzeError> {
    let records: Vec<SliceRecord> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let [c, m, y, k] = v.0;
            SliceRecord {
                slice: i as u32 + 1,
                cyan: c,
                magenta: m,
                yellow: y,
                black: k,
            }
        })
        .collect();
    let json = serde_json::to_string_pretty(&records)?;
    write_atomic(path, json.as_bytes())
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), AnalyzeError> {
    let tmp = tmp_sibling(path);
    let map_err = |source| AnalyzeError::FileWrite {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&tmp, contents).map_err(map_err)?;
    fs::rename(&tmp, path).map_err(map_err)
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
