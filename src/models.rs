//! Course catalog data model
//!
//! Rust field names are English; the wire format (Apps Script endpoint and
//! the generated `experiences.js` module) keeps the Portuguese keys of the
//! upstream spreadsheet, mapped via serde renames.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full set of course offerings grouped by location name.
///
/// `BTreeMap` keeps generator output deterministic; consumers aggregate by
/// flattening all values, so key order is otherwise irrelevant.
pub type CourseCatalog = BTreeMap<String, Vec<CourseRecord>>;

/// One scheduled class offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Location (polo) this class belongs to
    #[serde(rename = "localidade", default)]
    pub location: String,
    /// Course name (e.g., "TEORIA MUSICAL")
    #[serde(rename = "curso", default)]
    pub course: String,
    /// Class label / descriptive nomenclature
    #[serde(rename = "nomenclatura", default)]
    pub label: String,
    /// Enrolled student count
    #[serde(rename = "matriculados", default)]
    pub enrolled: u32,
    /// Start date, locale-formatted (e.g., "11/08/2023")
    #[serde(rename = "inicio", default)]
    pub start_date: String,
    /// End date, locale-formatted
    #[serde(rename = "termino", default)]
    pub end_date: String,
    /// Weekday code (e.g., "SEX")
    #[serde(rename = "dia", default)]
    pub weekday: String,
    /// Time range (e.g., "20:00 ÀS 21:00")
    #[serde(rename = "hora", default)]
    pub time_range: String,
    /// Date labels of lessons awaiting administrative processing
    #[serde(rename = "pendente", default)]
    pub pending: Vec<String>,
    /// Date labels of lessons flagged as irregular
    #[serde(rename = "irregular", default)]
    pub irregular: Vec<String>,
}

impl CourseRecord {
    /// Whether this record has pending or irregular lessons
    #[must_use]
    pub fn has_outstanding_issues(&self) -> bool {
        !self.pending.is_empty() || !self.irregular.is_empty()
    }
}

/// Sum of enrolled students across all records in all locations
#[must_use]
pub fn total_enrolled(catalog: &CourseCatalog) -> u32 {
    catalog
        .values()
        .flatten()
        .map(|record| record.enrolled)
        .sum()
}

/// Count of course records across all locations
#[must_use]
pub fn total_course_count(catalog: &CourseCatalog) -> usize {
    catalog.values().map(Vec::len).sum()
}

/// Records with a non-empty pending or irregular lesson list
#[must_use]
pub fn courses_with_outstanding_issues(catalog: &CourseCatalog) -> Vec<CourseRecord> {
    catalog
        .values()
        .flatten()
        .filter(|record| record.has_outstanding_issues())
        .cloned()
        .collect()
}
