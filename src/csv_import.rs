//! Spreadsheet CSV export import
//!
//! Maps each row of the published spreadsheet CSV to one [`CourseRecord`]
//! via a fixed column-name mapping and groups rows into a catalog by
//! location. Rows with missing columns substitute empty strings; no row is
//! rejected for missing data.

use crate::models::{CourseCatalog, CourseRecord};
use crate::{CursosError, Result};
use csv::StringRecord;
use std::time::Duration;
use tracing::{debug, info, warn};

// Column names of the published spreadsheet export
const COL_LOCATION: &str = "POLO";
const COL_COURSE: &str = "CURSO";
const COL_LABEL: &str = "NOMENCLATURA";
// Older exports label the class by its instrument instead
const COL_INSTRUMENT: &str = "INSTRUMENTO";
const COL_ENROLLED: &str = "MATRICULADOS";
const COL_START_DATE: &str = "DATA INÍCIO";
const COL_END_DATE: &str = "DATA FIM";
const COL_WEEKDAY: &str = "DIA";
const COL_TIME_RANGE: &str = "HORÁRIO";
const COL_PENDING: &str = "LANÇAMENTO PENDENTE";
const COL_IRREGULAR: &str = "LANÇAMENTO INVÁLIDO";

/// Fetch the CSV export from `url` and parse it into a catalog
pub async fn fetch_csv(url: &str, timeout: Duration) -> Result<CourseCatalog> {
    debug!("Fetching CSV export from {url}");
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| CursosError::transport(format!("Failed to build HTTP client: {err}")))?;

    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CursosError::http_status(status.as_u16()));
    }

    let body = response.text().await?;
    parse_csv(&body)
}

/// Parse a CSV document into a catalog, grouping rows by location
pub fn parse_csv(data: &str) -> Result<CourseCatalog> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(data.as_bytes());
    let headers = reader.headers()?.clone();

    let mut catalog = CourseCatalog::new();
    let mut rows = 0usize;
    for row in reader.records() {
        let row = row?;
        let record = record_from_row(&headers, &row);
        if record.location.is_empty() {
            warn!("CSV row {} has no location, keeping under empty key", rows + 1);
        }
        catalog
            .entry(record.location.clone())
            .or_default()
            .push(record);
        rows += 1;
    }

    info!("Parsed {} CSV rows into {} locations", rows, catalog.len());
    Ok(catalog)
}

fn record_from_row(headers: &StringRecord, row: &StringRecord) -> CourseRecord {
    let location = column(headers, row, COL_LOCATION);
    let mut label = column(headers, row, COL_LABEL);
    if label.is_empty() {
        label = column(headers, row, COL_INSTRUMENT);
    }
    CourseRecord {
        location: location.to_string(),
        course: column(headers, row, COL_COURSE).to_string(),
        label: label.to_string(),
        enrolled: column(headers, row, COL_ENROLLED).parse().unwrap_or(0),
        start_date: column(headers, row, COL_START_DATE).to_string(),
        end_date: column(headers, row, COL_END_DATE).to_string(),
        weekday: column(headers, row, COL_WEEKDAY).to_string(),
        time_range: column(headers, row, COL_TIME_RANGE).to_string(),
        pending: split_markers(column(headers, row, COL_PENDING)),
        irregular: split_markers(column(headers, row, COL_IRREGULAR)),
    }
}

/// Cell lookup by header name; missing columns substitute empty strings
fn column<'a>(headers: &StringRecord, row: &'a StringRecord, name: &str) -> &'a str {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .and_then(|index| row.get(index))
        .unwrap_or("")
        .trim()
}

/// Split a marker cell ("28-mar, 25-abr, ...") into ordered date labels
fn split_markers(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(ToString::to_string)
        .collect()
}
