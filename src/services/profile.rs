// src/services/profile.rs
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Static data the mock replies are built from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub skills: Vec<String>,
    pub projects: Vec<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Kachi Nwadiogu".to_string(),
            role: "Information Technology student".to_string(),
            skills: ["HTML", "CSS", "JavaScript", "Node/Express", "AI APIs"]
                .map(String::from)
                .to_vec(),
            projects: [
                "AI Portfolio Website",
                "Employee Management System",
                "SpaceX API Viewer",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl Profile {
    /// Loads a profile from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ProfileRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::ProfileParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Built-in profile unless a path is given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
