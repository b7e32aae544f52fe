//! core::component
//!
//! Component declaration documents under `.lodetime/components/`.
//!
//! Each component is one YAML mapping in `<id>.yaml`. Documents are read
//! on demand and never cached.

use std::fs;

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::core::paths::ProjectPaths;

/// Errors from loading a component document.
#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("Invalid component id: '{0}'")]
    InvalidId(String),

    #[error("Component not found: {0}")]
    NotFound(String),

    #[error("Error parsing component '{id}': {message}")]
    Parse { id: String, message: String },
}

/// A loaded component declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    id: String,
    document: Mapping,
}

impl Component {
    /// Load the component `id` from a project.
    ///
    /// # Errors
    ///
    /// - [`ComponentError::InvalidId`] if `id` is empty or names a path
    ///   outside the components directory
    /// - [`ComponentError::NotFound`] if the document cannot be read
    /// - [`ComponentError::Parse`] if it is not a YAML mapping
    pub fn load(paths: &ProjectPaths, id: &str) -> Result<Self, ComponentError> {
        if !is_valid_id(id) {
            return Err(ComponentError::InvalidId(id.to_string()));
        }

        let contents = fs::read_to_string(paths.component_path(id))
            .map_err(|_| ComponentError::NotFound(id.to_string()))?;

        let parse_err = |message: String| ComponentError::Parse {
            id: id.to_string(),
            message,
        };
        let document = match serde_yaml::from_str::<Value>(&contents)
            .map_err(|e| parse_err(e.to_string()))?
        {
            Value::Null => Mapping::new(),
            Value::Mapping(document) => document,
            _ => return Err(parse_err("expected a mapping at the top level".to_string())),
        };

        Ok(Self {
            id: id.to_string(),
            document,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn document(&self) -> &Mapping {
        &self.document
    }

    /// Re-serialize the document as YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.document)
    }
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\'])
}
