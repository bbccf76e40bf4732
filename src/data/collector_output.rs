//! Parser for the line-oriented text the data collectors print.
//!
//! Candles:   `2025-08-29T12:00:00Z | O: 50000.0 | H: 50200.0 | L: 49900.0 | C: 50100.0 | Volume: 1000`
//! Prices:    `2025-08-29T12:00:00Z | Price: 108000.5 | Volume: 12.3`
//! Dominance: `2025-08-29T12:00:00Z | Dominance: 57.3%`
//!        or  `2025-08-29T12:00:00Z | Open: 48.5%, High: 49.0%, Low: 48.0%, Close: 48.8%`
//!
//! Lines that do not start with a timestamp (banners, debug prints) are skipped.

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::Candle;
use crate::errors::EngineError;
use crate::models::{Sample, SampleSeries};
use crate::utils::time_utils::parse_collector_timestamp;

enum ParsedLine {
    Candle(Candle),
    Point(Sample),
}

impl ParsedLine {
    fn into_sample(self) -> Sample {
        match self {
            ParsedLine::Candle(candle) => candle.to_sample(),
            ParsedLine::Point(sample) => sample,
        }
    }
}

/// Parse collector output into a series of closes / dominance readings.
pub fn parse_collector_output(text: &str) -> Result<SampleSeries, EngineError> {
    let mut samples = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        match parse_line(line) {
            None => continue,
            Some(Ok(parsed)) => samples.push(parsed.into_sample()),
            Some(Err(reason)) => {
                return Err(EngineError::Parse {
                    line: idx + 1,
                    reason,
                });
            }
        }
    }

    Ok(SampleSeries::new(samples))
}

pub fn load_collector_file(path: &Path) -> Result<SampleSeries> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read collector output: {}", path.display()))?;
    let series = parse_collector_output(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    log::info!("Parsed {} samples from {}", series.len(), path.display());
    Ok(series)
}

// None = not a data line
fn parse_line(line: &str) -> Option<Result<ParsedLine, String>> {
    let mut parts = line.split('|').map(str::trim);
    let timestamp_ms = parse_collector_timestamp(parts.next()?)?;

    let fields: Vec<&str> = parts
        .flat_map(|part| part.split(','))
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();

    Some(parse_fields(timestamp_ms, &fields))
}

fn parse_fields(timestamp_ms: i64, fields: &[&str]) -> Result<ParsedLine, String> {
    let value_of = |key: &str| fields.iter().find_map(|f| f.strip_prefix(key));

    if let (Some(o), Some(h), Some(l), Some(c)) =
        (value_of("O:"), value_of("H:"), value_of("L:"), value_of("C:"))
    {
        let volume = match value_of("Volume:") {
            Some(v) => parse_number(v)?,
            None => 0.0,
        };
        let candle = Candle::new(
            timestamp_ms,
            parse_number(o)?,
            parse_number(h)?,
            parse_number(l)?,
            parse_number(c)?,
            volume,
        );
        candle.check_consistency()?;
        return Ok(ParsedLine::Candle(candle));
    }

    match value_of("Close:")
        .or_else(|| value_of("Price:"))
        .or_else(|| value_of("Dominance:"))
    {
        Some(raw) => Ok(ParsedLine::Point(Sample::new(timestamp_ms, parse_number(raw)?))),
        None => Err(format!(
            "no close, price or dominance value in [{}]",
            fields.join(" | ")
        )),
    }
}

fn parse_number(raw: &str) -> Result<f64, String> {
    let cleaned = raw.trim().trim_end_matches('%').trim();
    cleaned
        .parse::<f64>()
        .map_err(|e| format!("bad number '{}': {e}", raw.trim()))
}
