//! Integration tests for the catalog accessor public API
//!
//! Uses a stub `CatalogSource` implemented against the public trait, the way
//! a downstream consumer would for its own tests.

use async_trait::async_trait;
use cursos_data::{CatalogAccessor, CatalogSource, CourseCatalog, CourseRecord, CursosError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

struct FixedSource {
    catalog: CourseCatalog,
    fetches: Arc<AtomicUsize>,
}

#[async_trait]
impl CatalogSource for FixedSource {
    async fn fetch(&self) -> cursos_data::Result<CourseCatalog> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.catalog.clone())
    }
}

struct FailingSource;

#[async_trait]
impl CatalogSource for FailingSource {
    async fn fetch(&self) -> cursos_data::Result<CourseCatalog> {
        Err(CursosError::http_status(500))
    }
}

fn jardim_aline_catalog() -> CourseCatalog {
    let markers: Vec<String> = ["28-mar", "25-abr", "23-mai", "30-mai", "06-jun"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let mut catalog = CourseCatalog::new();
    catalog.insert(
        "Jardim Aline".to_string(),
        vec![CourseRecord {
            location: "Jardim Aline".to_string(),
            course: "TEORIA MUSICAL".to_string(),
            label: "TURMA 02 - TEORIA E SOLFEJO MSA".to_string(),
            enrolled: 4,
            start_date: "11/08/2023".to_string(),
            end_date: "11/08/2026".to_string(),
            weekday: "SEX".to_string(),
            time_range: "20:00 ÀS 21:00".to_string(),
            pending: markers.clone(),
            irregular: markers,
        }],
    );
    catalog
}

#[tokio::test]
async fn test_jardim_aline_scenario() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let accessor = CatalogAccessor::new(
        Box::new(FixedSource {
            catalog: jardim_aline_catalog(),
            fetches: Arc::clone(&fetches),
        }),
        Duration::from_secs(300),
    );

    accessor.get_catalog(false).await.unwrap();

    assert_eq!(accessor.total_enrolled(), 4);
    assert_eq!(accessor.total_course_count(), 1);
    assert_eq!(accessor.list_locations(), vec!["Jardim Aline".to_string()]);

    let flagged = accessor.courses_with_outstanding_issues();
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].pending.len(), 5);
    assert_eq!(flagged[0].irregular.len(), 5);

    // Unknown location never fails
    assert!(accessor.courses_for("Centro").is_empty());
    assert_eq!(accessor.courses_for("Jardim Aline").len(), 1);
}

#[tokio::test]
async fn test_repeated_reads_within_window_fetch_once() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let accessor = CatalogAccessor::new(
        Box::new(FixedSource {
            catalog: jardim_aline_catalog(),
            fetches: Arc::clone(&fetches),
        }),
        Duration::from_secs(300),
    );

    for _ in 0..5 {
        accessor.get_catalog(false).await.unwrap();
    }
    assert_eq!(fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_all_fetches_failing_leaves_catalog_empty() {
    let accessor = CatalogAccessor::new(Box::new(FailingSource), Duration::from_secs(300));

    let err = accessor.get_catalog(false).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert!(err.user_message().contains("Unable to reach"));

    assert_eq!(accessor.total_enrolled(), 0);
    assert_eq!(accessor.total_course_count(), 0);
    assert!(accessor.list_locations().is_empty());
}
