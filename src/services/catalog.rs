use crate::models::{CareerRecord, CourseRecord};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid catalog data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

/// Static career and course catalog
///
/// Loaded once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    careers: Vec<CareerRecord>,
    courses: HashMap<String, Vec<CourseRecord>>,
}

impl Catalog {
    pub fn new(careers: Vec<CareerRecord>, courses: HashMap<String, Vec<CourseRecord>>) -> Self {
        Self { careers, courses }
    }

    /// Load both datasets from JSON files
    ///
    /// Either both files load or an error is returned; there is no partial
    /// catalog.
    pub fn load<P, Q>(careers_path: P, courses_path: Q) -> Result<Self, CatalogError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let careers: Vec<CareerRecord> = read_json(careers_path.as_ref())?;
        let courses: HashMap<String, Vec<CourseRecord>> = read_json(courses_path.as_ref())?;

        let catalog = Self::new(careers, courses);

        tracing::info!(
            "Catalog loaded: {} careers, {} skills with courses",
            catalog.careers.len(),
            catalog.courses.len()
        );

        Ok(catalog)
    }

    /// Build a catalog from in-memory JSON documents
    pub fn from_json(careers_json: &str, courses_json: &str) -> Result<Self, CatalogError> {
        let careers = serde_json::from_str(careers_json)?;
        let courses = serde_json::from_str(courses_json)?;
        Ok(Self::new(careers, courses))
    }

    /// Careers in source order
    pub fn careers(&self) -> &[CareerRecord] {
        &self.careers
    }

    /// Courses stored for a skill, in source order; empty for unknown skills
    pub fn courses_for(&self, skill: &str) -> &[CourseRecord] {
        self.courses.get(skill).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of skills that have at least one course entry
    pub fn skill_count(&self) -> usize {
        self.courses.len()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
