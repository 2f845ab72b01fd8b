use log::warn;

use crate::error::{ExtractError, Result};
use crate::filter::AcceptedEntry;

/// Accepted entry with its parsed frequency.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub line: u64,
    pub ortho: String,
    pub phon: String,
    pub frequency: f64,
}

/// Parse a frequency field. Absent or blank text is `0.0`; anything else must
/// be a finite, non-negative number.
pub fn parse_frequency(raw: Option<&str>) -> std::result::Result<f64, String> {
    let text = match raw.map(str::trim) {
        None | Some("") => return Ok(0.0),
        Some(t) => t,
    };
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Ok(v) => Err(format!("frequency {v} is not a non-negative number")),
        Err(_) => Err(format!("frequency '{text}' is not a number")),
    }
}

/// Order `accepted` by descending frequency. The sort is stable, so entries
/// with equal frequency keep their input order.
///
/// Returns the ranked entries and the number of entries skipped for a bad
/// frequency (always zero unless `lenient`).
pub fn rank(accepted: Vec<AcceptedEntry>, lenient: bool) -> Result<(Vec<RankedEntry>, usize)> {
    let mut ranked = Vec::with_capacity(accepted.len());
    let mut skipped = 0;
    for entry in accepted {
        let frequency = match parse_frequency(entry.frequency.as_deref()) {
            Ok(f) => f,
            Err(reason) if lenient => {
                warn!("skipping '{}' at line {}: {reason}", entry.ortho, entry.line);
                skipped += 1;
                continue;
            }
            Err(reason) => {
                return Err(ExtractError::MalformedRecord {
                    line: entry.line,
                    reason,
                })
            }
        };
        ranked.push(RankedEntry {
            line: entry.line,
            ortho: entry.ortho,
            phon: entry.phon,
            frequency,
        });
    }
    ranked.sort_by(|a, b| b.frequency.total_cmp(&a.frequency));
    Ok((ranked, skipped))
}
