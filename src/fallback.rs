//! Hardcoded fallback catalog
//!
//! Snapshot of the two sample locations from the upstream spreadsheet, used
//! by the generator when it runs with the `static` source so builds stay
//! reproducible offline.

use crate::models::{CourseCatalog, CourseRecord};

/// Static catalog snapshot used when no CSV fetch is performed
#[must_use]
pub fn fallback_catalog() -> CourseCatalog {
    let mut catalog = CourseCatalog::new();

    catalog.insert(
        "Jardim Aline".to_string(),
        vec![CourseRecord {
            location: "Jardim Aline".to_string(),
            course: "TEORIA MUSICAL".to_string(),
            label: "TURMA 02 - TEORIA E SOLFEJO MSA - INSTRUTOR RESPONSÁVEL: ELIEZER VIEIRA"
                .to_string(),
            enrolled: 4,
            start_date: "11/08/2023".to_string(),
            end_date: "11/08/2026".to_string(),
            weekday: "SEX".to_string(),
            time_range: "20:00 ÀS 21:00".to_string(),
            pending: labels(&["28-mar", "25-abr", "23-mai", "30-mai", "06-jun"]),
            irregular: labels(&["28-mar", "25-abr", "23-mai", "30-mai", "06-jun"]),
        }],
    );

    catalog.insert(
        "Jardim Amanda I".to_string(),
        vec![CourseRecord {
            location: "Jardim Amanda I".to_string(),
            course: "TUBA".to_string(),
            label:
                "TURMA 03 - TEORIA E SOLFEJO MSA - INSTRUTOR RESPONSÁVEL: AYRTON ALBERTO & JOSE CARLOS ALEIXO"
                    .to_string(),
            enrolled: 1,
            start_date: "01/07/2024".to_string(),
            end_date: "31/12/2025".to_string(),
            weekday: "QUA".to_string(),
            time_range: "19:30 ÀS 21:00".to_string(),
            pending: labels(&[
                "05-fev", "12-fev", "19-fev", "26-fev", "05-mar", "12-mar", "19-mar", "26-mar",
                "02-abr", "09-abr", "16-abr", "23-abr", "30-abr", "14-mai", "21-mai", "28-mai",
                "04-jun",
            ]),
            irregular: labels(&[
                "05-fev", "12-fev", "19-fev", "26-fev", "05-mar", "12-mar", "19-mar", "26-mar",
                "02-abr", "09-abr", "16-abr", "23-abr", "30-abr", "14-mai", "21-mai", "28-mai",
                "04-jun",
            ]),
        }],
    );

    catalog
}

fn labels(dates: &[&str]) -> Vec<String> {
    dates.iter().map(ToString::to_string).collect()
}
