use std::{collections::HashSet, fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

use crate::error::ClinicError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub max_patients: u32,
}

impl Doctor {
    pub fn new(id: u32, name: impl Into<String>, max_patients: u32) -> Self {
        Doctor {
            id,
            name: name.into(),
            max_patients,
        }
    }
}

/// Read-only set of doctors, kept in load order.
#[derive(Debug, Clone)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    /// Builds a directory, rejecting duplicate ids and zero capacity.
    pub fn new(doctors: Vec<Doctor>) -> Result<Self> {
        let mut seen = HashSet::new();
        for doctor in &doctors {
            if !seen.insert(doctor.id) {
                bail!("duplicate doctor id {}", doctor.id);
            }
            if doctor.max_patients == 0 {
                bail!("doctor {} has max_patients of 0", doctor.id);
            }
        }

        Ok(DoctorDirectory { doctors })
    }

    pub fn list(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn get(&self, id: u32) -> Result<&Doctor, ClinicError> {
        self.doctors
            .iter()
            .find(|doctor| doctor.id == id)
            .ok_or(ClinicError::DoctorNotFound(i64::from(id)))
    }

    /// Looks up a client-supplied id; anything outside the `u32` range is unknown.
    pub fn resolve(&self, raw_id: i64) -> Result<&Doctor, ClinicError> {
        let id = u32::try_from(raw_id).map_err(|_| ClinicError::DoctorNotFound(raw_id))?;
        self.get(id)
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }
}

impl Default for DoctorDirectory {
    fn default() -> Self {
        DoctorDirectory {
            doctors: vec![
                Doctor::new(1, "Dr. John Doe", 5),
                Doctor::new(2, "Dr. Jane Smith", 7),
            ],
        }
    }
}

/// Loads a directory from a CSV file with an `id,name,max_patients` header.
pub fn load_doctor_directory(path: &Path) -> Result<DoctorDirectory> {
    let file = File::open(path)
        .with_context(|| format!("failed to open doctors file {}", path.display()))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let mut doctors = Vec::new();
    for (line, record) in reader.deserialize::<Doctor>().enumerate() {
        // +2 for the header row and 1-based numbering
        let doctor = record
            .with_context(|| format!("invalid doctor record at line {}", line + 2))?;
        doctors.push(doctor);
    }

    DoctorDirectory::new(doctors)
        .with_context(|| format!("invalid doctors file {}", path.display()))
}
