/// Order dataset model and read-only accessors
///
/// The dataset is a single JSON document describing factors, the doctors,
/// examinations and contraindications they reference, and the general lists
/// shared by every report. It is loaded once at startup and never mutated.
use crate::key::compare_factor_keys;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A numbered hazard factor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    /// Dotted key, e.g. "14.3". Taken from the map key of `factors`.
    #[serde(skip_deserializing, default)]
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub doctors: Vec<String>,
    #[serde(default)]
    pub examinations: Vec<String>,
    #[serde(default)]
    pub contraindications: Vec<String>,
}

impl Factor {
    /// Option label shown in lists and searched against: "<key>. <name>"
    pub fn label(&self) -> String {
        format!("{}. {}", self.key, self.name)
    }

    /// Referenced ids for one category
    pub fn ids(&self, category: Category) -> &[String] {
        match category {
            Category::Doctors => &self.doctors,
            Category::Examinations => &self.examinations,
            Category::Contraindications => &self.contraindications,
        }
    }
}

/// Id-to-text maps a factor can reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Doctors,
    Examinations,
    Contraindications,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Doctors, Category::Examinations, Category::Contraindications];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Doctors => "doctors",
            Category::Examinations => "examinations",
            Category::Contraindications => "contraindications",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which general contraindication list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContraindicationKind {
    /// Applies to every factor
    Absolute,
    /// Applies only to factors 1 through 22
    From1To22,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralContraindications {
    #[serde(default)]
    pub absolute: Vec<String>,
    #[serde(default, rename = "from1to22")]
    pub from_1_to_22: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct General {
    #[serde(default)]
    pub doctors: Vec<String>,
    #[serde(default)]
    pub examinations: Vec<String>,
    #[serde(default)]
    pub contraindications: GeneralContraindications,
}

/// The whole order document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub factors: HashMap<String, Factor>,
    #[serde(default)]
    pub doctors: HashMap<String, String>,
    #[serde(default)]
    pub examinations: HashMap<String, String>,
    #[serde(default)]
    pub contraindications: HashMap<String, String>,
    #[serde(default)]
    pub general: General,
}

/// A referenced id is missing from its category map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    NotFound { category: Category, id: String },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::NotFound { category, id } => write!(f, "id '{}' not found in {}", id, category),
        }
    }
}

impl std::error::Error for LookupError {}

impl Dataset {
    /// Parse a dataset from JSON text
    ///
    /// Factor keys are copied from the `factors` map into each record.
    pub fn from_json(text: &str) -> Result<Self, String> {
        let mut dataset: Dataset =
            serde_json::from_str(text).map_err(|e| format!("Failed to parse order data: {}", e))?;

        for (key, factor) in dataset.factors.iter_mut() {
            factor.key = key.clone();
        }

        debug!(
            "parsed order data: {} factors, {} doctors, {} examinations, {} contraindications",
            dataset.factors.len(),
            dataset.doctors.len(),
            dataset.examinations.len(),
            dataset.contraindications.len()
        );

        Ok(dataset)
    }

    /// Check that every id referenced by a factor resolves
    pub fn validate(&self) -> Result<(), String> {
        let mut missing = Vec::new();
        for factor in self.list_factors() {
            for category in Category::ALL {
                for id in factor.ids(category) {
                    if let Err(e) = self.lookup(category, id) {
                        missing.push(format!("factor {}: {}", factor.key, e));
                    }
                }
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("Order data is inconsistent:\n  {}", missing.join("\n  ")))
        }
    }

    /// All factors ordered by key
    pub fn list_factors(&self) -> Vec<&Factor> {
        let mut factors: Vec<&Factor> = self.factors.values().collect();
        factors.sort_by(|a, b| compare_factor_keys(&a.key, &b.key));
        factors
    }

    #[cfg(test)]
    pub fn factor(&self, key: &str) -> Option<&Factor> {
        self.factors.get(key)
    }

    /// Display text for an id of the given category
    pub fn lookup(&self, category: Category, id: &str) -> Result<&str, LookupError> {
        let map = match category {
            Category::Doctors => &self.doctors,
            Category::Examinations => &self.examinations,
            Category::Contraindications => &self.contraindications,
        };
        map.get(id).map(|s| s.as_str()).ok_or_else(|| LookupError::NotFound { category, id: id.to_string() })
    }

    pub fn general_doctors(&self) -> &[String] {
        &self.general.doctors
    }

    pub fn general_examinations(&self) -> &[String] {
        &self.general.examinations
    }

    pub fn general_contraindications(&self, kind: ContraindicationKind) -> &[String] {
        match kind {
            ContraindicationKind::Absolute => &self.general.contraindications.absolute,
            ContraindicationKind::From1To22 => &self.general.contraindications.from_1_to_22,
        }
    }
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;
