//! Static data module generator
//!
//! Serializes a course catalog, the static résumé-entry list and derived
//! metadata into the `experiences.js` module consumed by the front-end, and
//! writes it to the configured output path before the site is built.

use crate::models::{self, CourseCatalog};
use crate::{CursosError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs;
use std::path::Path;
use tracing::info;

const GENERATED_HEADER: &str = "\
// Este arquivo é gerado automaticamente
// Não edite manualmente - será sobrescrito no próximo build
";

// Static résumé entries, emitted verbatim. Icon names are resolved by the
// front-end's index.js.
const EXPERIENCES_JS: &str = r##"export const experiences = [
  {
    title: "AI/ML Intern",
    company_name: "EduSkill Foundation | AWS Academy | AICTE",
    icon: "eduskill", // Importado no index.js
    iconBg: "#161329",
    date: "Sep 2023 - Nov 2023",
    points: [
      "VerificaSAM",
      "also gaining a solid foundation in Machine Learning, covering topics like algorithms, data analysis, and model building.",
    ],
  },
  {
    title: "Mathwork Ai Virtual Intern",
    company_name: "Mathwork | AICTE",
    icon: "mathwork", // Importado no index.js
    iconBg: "#161329",
    date: "May 2023 - Sep 2023",
    points: [
      "Completed virtual internship, gaining a strong foundation in MATLAB, including data analysis and processing.",
      "Acquired practical skills in image and signal processing, including segmentation, batch processing, and spectral analysis.",
      "Developed expertise in machine learning models for clustering, classification, and regression, and customized deep learning techniques for image classification.",
    ],
  },
  {
    title: "Artificial Intelligence Intern",
    company_name: "Edunet Foundation | IBM SkillsBuild | AICTE",
    icon: "edunet", // Importado no index.js
    iconBg: "#161329",
    date: "June 2023 - July 2023",
    points: [
      "Engineered a comprehensive Mental Health Fitness Tracker ML model utilizing Python and scikit-learn.",
      "Maximized the model's performance by refining model parameters and employing ensemble methods, yielding an outstanding accuracy percentage of 98.50%.",
      "Leveraged 12 regression algorithms to attain precise outcomes in analyzing and predicting mental fitness levels across 150+ countries.",
    ],
  },
];"##;

/// Derived counts over a catalog, reported after generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub locations: usize,
    pub courses: usize,
    pub enrolled: u32,
}

impl CatalogSummary {
    /// Compute the summary of a catalog
    #[must_use]
    pub fn of(catalog: &CourseCatalog) -> Self {
        Self {
            locations: catalog.len(),
            courses: models::total_course_count(catalog),
            enrolled: models::total_enrolled(catalog),
        }
    }
}

/// Render the complete data module for a catalog and generation timestamp
pub fn render_module(catalog: &CourseCatalog, generated_at: DateTime<Utc>) -> Result<String> {
    let cursos_json = serde_json::to_string_pretty(catalog)?;
    let summary = CatalogSummary::of(catalog);
    let timestamp = generated_at.to_rfc3339_opts(SecondsFormat::Millis, true);

    Ok(format!(
        "{GENERATED_HEADER}\n{EXPERIENCES_JS}\n\n\
         // Dados dos cursos (atualizados dinamicamente)\n\
         export const cursosData = {cursos_json};\n\n\
         // Metadados dos cursos\n\
         export const cursosMetadata = {{\n\
         \x20 lastGenerated: \"{timestamp}\",\n\
         \x20 totalLocalidades: {},\n\
         \x20 totalCursos: {},\n\
         \x20 totalMatriculados: {}\n\
         }};\n",
        summary.locations, summary.courses, summary.enrolled,
    ))
}

/// Render the module for `catalog` and write it to `path`, creating
/// intermediate directories as needed
pub fn write_module(catalog: &CourseCatalog, path: &Path) -> Result<CatalogSummary> {
    let content = render_module(catalog, Utc::now())?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;

    let summary = CatalogSummary::of(catalog);
    info!("Generated data module at {}", path.display());
    info!(
        "Processed {} courses across {} locations ({} enrolled)",
        summary.courses, summary.locations, summary.enrolled
    );
    Ok(summary)
}

/// Re-parse the `cursosData` literal out of a generated module.
///
/// Round-trip counterpart of [`render_module`], used to verify a generated
/// artifact matches its input catalog.
pub fn parse_cursos_data(module: &str) -> Result<CourseCatalog> {
    const MARKER: &str = "export const cursosData = ";
    let start = module
        .find(MARKER)
        .ok_or_else(|| CursosError::parse("cursosData export not found"))?;
    let rest = &module[start + MARKER.len()..];
    // Read exactly one JSON value; the trailing ";" and the metadata export
    // that follow are not part of the literal.
    let mut stream = serde_json::Deserializer::from_str(rest).into_iter::<CourseCatalog>();
    match stream.next() {
        Some(parsed) => Ok(parsed?),
        None => Err(CursosError::parse("cursosData literal is not terminated")),
    }
}
