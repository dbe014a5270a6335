//! `project.yaml` loader
//!
//! Fails fast: either a fully valid descriptor comes back or nothing does.
//! The working directory default is not filled in here.

use std::fs;
use std::path::Path;

use serde_yaml_ng::Value;

use crate::domain::entities::ProjectDescriptor;
use crate::error::{ShepherdError, ShepherdResult};

/// Top-level keys scaffolding reads; everything else is left to other tools
pub const KNOWN_KEYS: &[&str] = &["name", "working_directory"];

const NAME_REQUIRED: &str = "must contain at least a 'name' field";

/// Read and validate a descriptor file
pub fn load_descriptor(path: &Path) -> ShepherdResult<ProjectDescriptor> {
    let content = fs::read_to_string(path).map_err(|e| ShepherdError::filesystem(path, e))?;
    parse_descriptor(&content, path)
}

/// Validate descriptor text; `file` is only used in error messages
pub fn parse_descriptor(content: &str, file: &Path) -> ShepherdResult<ProjectDescriptor> {
    let value: Value =
        serde_yaml_ng::from_str(content).map_err(|e| ShepherdError::DescriptorParse {
            file: file.to_path_buf(),
            message: e.to_string(),
        })?;

    let shape_error = |reason: &str| ShepherdError::DescriptorShape {
        file: file.to_path_buf(),
        reason: reason.to_string(),
    };
    let name_error = |detail: &str| shape_error(&format!("{NAME_REQUIRED} ({detail})"));

    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Err(name_error("document is empty")),
        Value::Sequence(_) => return Err(name_error("document is a list, not a mapping")),
        _ => return Err(name_error("document is a scalar, not a mapping")),
    };

    let name = match mapping.get("name") {
        None => return Err(name_error("'name' is missing")),
        Some(Value::String(name)) if name.trim().is_empty() => {
            return Err(name_error("'name' is empty"))
        }
        Some(Value::String(name)) => name.clone(),
        Some(_) => return Err(name_error("'name' must be a string")),
    };

    let mut descriptor = ProjectDescriptor::new(name);
    match mapping.get("working_directory") {
        None | Some(Value::Null) => {}
        Some(Value::String(dir)) if dir.trim().is_empty() => {
            return Err(shape_error("'working_directory' is empty"))
        }
        Some(Value::String(dir)) => descriptor = descriptor.with_working_directory(dir.clone()),
        Some(_) => return Err(shape_error("'working_directory' must be a string")),
    }

    let ignored = mapping
        .keys()
        .filter_map(Value::as_str)
        .filter(|key| !KNOWN_KEYS.contains(key))
        .map(str::to_string)
        .collect();

    Ok(descriptor.with_ignored_keys(ignored))
}
