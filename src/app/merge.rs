//! Splicing cargo sources into the target module
//!
//! The target module keeps only its local sources (by default those with
//! `"type": "dir"`), followed by every generated cargo source in document
//! order. Only the first module with the target name is touched.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::app::document::json_type_name;
use crate::constants::manifest;
use crate::errors::{ManifestError, ManifestResult};

/// Options controlling which module is rewritten and what it keeps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Exact, case-sensitive module name to rewrite
    pub target_module: String,
    /// Source types retained from the module's original sources
    pub keep_source_types: Vec<String>,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            target_module: manifest::TARGET_MODULE.to_string(),
            keep_source_types: vec![manifest::DIR_SOURCE_TYPE.to_string()],
        }
    }
}

impl MergeOptions {
    /// Options targeting a specific module with the default kept types
    pub fn for_module(target_module: impl Into<String>) -> Self {
        Self {
            target_module: target_module.into(),
            ..Self::default()
        }
    }

    /// Whether a source entry survives the merge
    pub fn keeps(&self, source: &Value) -> bool {
        source
            .get(manifest::TYPE_KEY)
            .and_then(Value::as_str)
            .map(|kind| self.keep_source_types.iter().any(|keep| keep == kind))
            .unwrap_or(false)
    }
}

/// Outcome of a merge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Position of the rewritten module in `modules`, if one matched
    pub module_index: Option<usize>,
    /// Original sources kept on the target module
    pub kept: usize,
    /// Original sources dropped from the target module
    pub dropped: usize,
    /// Cargo sources appended
    pub appended: usize,
    /// Later modules sharing the target name, left untouched
    pub duplicates: usize,
}

impl MergeReport {
    /// Whether the target module was found and rewritten
    pub fn target_found(&self) -> bool {
        self.module_index.is_some()
    }

    /// Length of the target module's new source list
    pub fn total_sources(&self) -> usize {
        self.kept + self.appended
    }
}

/// Replace the target module's sources with its kept sources plus `sources`
///
/// Modules are scanned in order and scanning stops at the first match. When
/// no module matches the manifest is left as it was and the report's
/// `module_index` is `None`.
///
/// # Errors
///
/// Returns `ManifestError::InvalidStructure` when the manifest is not an
/// object with a `modules` array, when a module scanned before the match
/// lacks a string `name`, or when the target's `sources` is not an array.
pub fn merge_sources(
    base: &mut Value,
    sources: Vec<Value>,
    options: &MergeOptions,
) -> ManifestResult<MergeReport> {
    let modules = modules_mut(base)?;
    let mut report = MergeReport::default();

    for (index, module) in modules.iter_mut().enumerate() {
        let kind = json_type_name(module);
        let module = module.as_object_mut().ok_or_else(|| {
            ManifestError::invalid_structure(format!(
                "module {} is {}, expected an object",
                index, kind
            ))
        })?;

        if module_name(module, index)? != options.target_module {
            continue;
        }

        let original = take_sources(module, &options.target_module)?;
        let original_count = original.len();

        let mut merged: Vec<Value> = original
            .into_iter()
            .filter(|source| options.keeps(source))
            .collect();
        report.kept = merged.len();
        report.dropped = original_count - report.kept;
        report.appended = sources.len();

        merged.extend(sources);
        module.insert(manifest::SOURCES_KEY.to_string(), Value::Array(merged));

        report.module_index = Some(index);
        debug!(
            "Rewrote sources of module '{}' at index {}",
            options.target_module, index
        );
        break;
    }

    if let Some(index) = report.module_index {
        report.duplicates = modules[index + 1..]
            .iter()
            .filter(|module| {
                module.get(manifest::NAME_KEY).and_then(Value::as_str)
                    == Some(options.target_module.as_str())
            })
            .count();

        if report.duplicates > 0 {
            warn!(
                "Found {} more module(s) named '{}'; only the first was updated",
                report.duplicates, options.target_module
            );
        }
    }

    Ok(report)
}

fn modules_mut(base: &mut Value) -> ManifestResult<&mut Vec<Value>> {
    let kind = json_type_name(base);
    let root = base.as_object_mut().ok_or_else(|| {
        ManifestError::invalid_structure(format!("manifest is {}, expected an object", kind))
    })?;

    match root.get_mut(manifest::MODULES_KEY) {
        Some(Value::Array(modules)) => Ok(modules),
        Some(other) => Err(ManifestError::invalid_structure(format!(
            "'{}' is {}, expected an array",
            manifest::MODULES_KEY,
            json_type_name(other)
        ))),
        None => Err(ManifestError::invalid_structure(format!(
            "manifest has no '{}' field",
            manifest::MODULES_KEY
        ))),
    }
}

fn module_name(module: &Map<String, Value>, index: usize) -> ManifestResult<&str> {
    module
        .get(manifest::NAME_KEY)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ManifestError::invalid_structure(format!("module {} has no string 'name'", index))
        })
}

fn take_sources(module: &mut Map<String, Value>, name: &str) -> ManifestResult<Vec<Value>> {
    match module.get_mut(manifest::SOURCES_KEY) {
        None => Ok(Vec::new()),
        Some(Value::Array(sources)) => Ok(std::mem::take(sources)),
        Some(other) => Err(ManifestError::invalid_structure(format!(
            "sources of module '{}' is {}, expected an array",
            name,
            json_type_name(other)
        ))),
    }
}
