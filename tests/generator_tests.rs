//! Integration tests for the static data module generator

use cursos_data::generator::{parse_cursos_data, write_module, CatalogSummary};
use cursos_data::fallback::fallback_catalog;
use cursos_data::{CourseCatalog, CourseRecord};
use std::fs;
use tempfile::TempDir;

fn single_course_catalog() -> CourseCatalog {
    let mut catalog = CourseCatalog::new();
    catalog.insert(
        "Jardim Aline".to_string(),
        vec![CourseRecord {
            location: "Jardim Aline".to_string(),
            course: "TEORIA MUSICAL".to_string(),
            label: "TURMA 02".to_string(),
            enrolled: 4,
            start_date: "11/08/2023".to_string(),
            end_date: "11/08/2026".to_string(),
            weekday: "SEX".to_string(),
            time_range: "20:00 ÀS 21:00".to_string(),
            pending: vec!["28-mar".to_string()],
            irregular: vec![],
        }],
    );
    catalog
}

#[test]
fn test_write_module_creates_intermediate_directories() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("src").join("constants").join("experiences.js");

    let summary = write_module(&single_course_catalog(), &output).unwrap();

    assert!(output.exists());
    assert_eq!(
        summary,
        CatalogSummary {
            locations: 1,
            courses: 1,
            enrolled: 4
        }
    );
}

#[test]
fn test_written_module_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("experiences.js");
    let catalog = fallback_catalog();

    write_module(&catalog, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("export const experiences = ["));
    assert!(content.contains("\"localidade\": \"Jardim Aline\""));
    assert!(content.contains("totalMatriculados: 5"));

    let reparsed = parse_cursos_data(&content).unwrap();
    assert_eq!(reparsed, catalog);
}

#[test]
fn test_write_module_overwrites_previous_artifact() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("experiences.js");

    write_module(&fallback_catalog(), &output).unwrap();
    write_module(&CourseCatalog::new(), &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("export const cursosData = {};"));
    assert!(content.contains("totalCursos: 0"));
}

#[test]
fn test_write_module_fails_on_unwritable_path() {
    let temp_dir = TempDir::new().unwrap();
    // A file where a directory is expected
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let output = blocker.join("experiences.js");

    let result = write_module(&fallback_catalog(), &output);
    assert!(result.is_err());
}
