//! Output formatting for CSV, JSON, and text formats.

use crate::compute::CheckResult;
use crate::data::{OutputFormat, Parameters};
use crate::error::CliError;
use fieldcheck::MapRegion;
use serde_json::json;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

const CSV_HEADER: &str = "latitude,longitude,latitudeValid,longitudeValid,move,centerLatitude,centerLongitude,latitudeDelta,longitudeDelta\n";

const TABLE_COLUMNS: [(&str, usize); 5] = [
    ("Line", 6),
    ("Latitude", 14),
    ("Longitude", 14),
    ("Move", 9),
    ("Center", 0),
];

type ResultStream = Box<dyn Iterator<Item = Result<CheckResult, String>>>;

pub fn dispatch_output(
    results: ResultStream,
    params: &Parameters,
    single: bool,
    flush_each: bool,
) -> Result<usize, CliError> {
    let stdout = std::io::stdout().lock();
    let mut writer = std::io::BufWriter::new(stdout);
    let mut count = 0;

    for chunk in format_stream(results, params, single) {
        let chunk = match chunk {
            Ok(text) => text,
            Err(err) => {
                writer.flush()?;
                return Err(err.into());
            }
        };
        writer.write_all(chunk.as_bytes())?;
        count += 1;
        if flush_each {
            writer.flush()?;
        }
    }

    writer.flush()?;
    Ok(count)
}

pub fn format_stream(
    results: ResultStream,
    params: &Parameters,
    single: bool,
) -> Box<dyn Iterator<Item = Result<String, String>>> {
    let format = params.output.format;
    let headers = params.output.headers;

    if format == OutputFormat::Text && !single {
        return format_text_table(results);
    }

    Box::new(results.enumerate().map(move |(index, result)| {
        let result = result?;
        let first = index == 0;
        Ok(match format {
            OutputFormat::Csv => format_csv(&result, headers, first),
            OutputFormat::Json => format!("{}\n", format_json(&result)),
            OutputFormat::Text => format_text(&result),
        })
    }))
}

fn format_csv(result: &CheckResult, headers: bool, first: bool) -> String {
    let mut output = String::new();
    if first && headers {
        output.push_str(CSV_HEADER);
    }

    let region = match &result.region {
        Some(r) => format!(
            "{:.5},{:.5},{:.5},{:.5}",
            r.latitude, r.longitude, r.latitude_delta, r.longitude_delta
        ),
        None => ",,,".to_string(),
    };

    output.push_str(&format!(
        "{},{},{},{},{},{}\n",
        csv_field(result.latitude.as_deref()),
        csv_field(result.longitude.as_deref()),
        result.latitude_valid,
        result.longitude_valid,
        move_label(result.enabled),
        region
    ));
    output
}

fn csv_field(value: Option<&str>) -> String {
    match value {
        None => String::new(),
        Some(v) if v.contains([',', '"', '\n', '\r']) => format!("\"{}\"", v.replace('"', "\"\"")),
        Some(v) => v.to_string(),
    }
}

fn format_json(result: &CheckResult) -> String {
    let region = result.region.map(|r| {
        json!({
            "latitude": r.latitude,
            "longitude": r.longitude,
            "latitudeDelta": r.latitude_delta,
            "longitudeDelta": r.longitude_delta,
        })
    });

    json!({
        "latitude": result.latitude,
        "longitude": result.longitude,
        "latitudeValid": result.latitude_valid,
        "longitudeValid": result.longitude_valid,
        "move": result.enabled,
        "region": region,
    })
    .to_string()
}

fn format_text(result: &CheckResult) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "  Latitude:    {} ({})\n",
        display_raw(result.latitude.as_deref()),
        validity_label(result.latitude_valid)
    ));
    output.push_str(&format!(
        "  Longitude:   {} ({})\n",
        display_raw(result.longitude.as_deref()),
        validity_label(result.longitude_valid)
    ));
    output.push_str(&format!("  Move:        {}\n", move_label(result.enabled)));
    if let Some(region) = &result.region {
        output.push_str(&format!("  Center:      {}\n", format_center(region)));
        output.push_str(&format!(
            "  Span:        {:.5}° x {:.5}°\n",
            region.latitude_delta, region.longitude_delta
        ));
    }
    output
}

fn format_text_table(results: ResultStream) -> Box<dyn Iterator<Item = Result<String, String>>> {
    let header_line = TABLE_COLUMNS
        .iter()
        .map(|(name, width)| pad(name, *width))
        .collect::<String>();
    let header = format!("{}\n{}\n", header_line.trim_end(), "─".repeat(64));

    Box::new(results.enumerate().map(move |(index, result)| {
        let result = result?;
        let lat = mark(result.latitude.as_deref(), result.latitude_valid);
        let lon = mark(result.longitude.as_deref(), result.longitude_valid);
        let center = result
            .region
            .as_ref()
            .map(format_center)
            .unwrap_or_default();
        let cells = [
            result.line.to_string(),
            lat,
            lon,
            move_label(result.enabled).to_string(),
            center,
        ];
        let row = cells
            .iter()
            .zip(TABLE_COLUMNS.iter())
            .map(|(cell, (_, width))| pad(cell, *width))
            .collect::<String>();
        let prefix = if index == 0 { header.as_str() } else { "" };
        Ok(format!("{}{}\n", prefix, row.trim_end()))
    }))
}

fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    let fill = width.saturating_sub(used).max(usize::from(width > 0 && used >= width));
    format!("{}{}", text, " ".repeat(fill))
}

fn mark(raw: Option<&str>, valid: bool) -> String {
    let flag = if valid { "" } else { " ✗" };
    format!("{}{}", display_raw(raw), flag)
}

fn display_raw(raw: Option<&str>) -> String {
    match raw {
        None => "(none)".to_string(),
        Some("") => "\"\"".to_string(),
        Some(text) => text.to_string(),
    }
}

fn format_center(region: &MapRegion) -> String {
    format!("{:.5}°, {:.5}°", region.latitude, region.longitude)
}

fn validity_label(valid: bool) -> &'static str {
    if valid { "valid" } else { "invalid" }
}

fn move_label(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}
