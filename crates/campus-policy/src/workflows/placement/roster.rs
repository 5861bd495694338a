use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{DisciplinaryFlag, RollNumber, StudentProfile};

/// Errors raised while reading a roster export.
#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    roll_no: String,
    name: String,
    cgpa: f64,
    #[serde(rename = "attendance")]
    attendance_pct: u8,
    #[serde(rename = "credits")]
    earned_credits: u16,
    #[serde(default)]
    disciplinary: Option<DisciplinaryFlag>,
}

impl From<RosterRow> for StudentProfile {
    fn from(row: RosterRow) -> Self {
        StudentProfile {
            roll_no: RollNumber(row.roll_no.trim().to_string()),
            name: row.name.trim().to_string(),
            cgpa: row.cgpa,
            attendance_pct: row.attendance_pct,
            earned_credits: row.earned_credits,
            disciplinary: row.disciplinary.unwrap_or_default(),
        }
    }
}

/// Reads `roll_no,name,cgpa,attendance,credits,disciplinary` exports.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<StudentProfile>, RosterImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<StudentProfile>, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut profiles = Vec::new();
        for row in csv_reader.deserialize::<RosterRow>() {
            profiles.push(StudentProfile::from(row?));
        }

        Ok(profiles)
    }
}
