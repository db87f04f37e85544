//! Reading and writing manifest documents
//!
//! The base manifest is JSON that may carry a single `//` comment line at the
//! top (Flatpak tooling tolerates it, strict JSON does not). The sources
//! document is a plain JSON array produced by the cargo sources generator.
//! Output is strict, 2-space indented JSON written atomically.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::constants::{files, manifest};
use crate::errors::{ManifestError, ManifestResult};

/// Drop the first line when the text starts with the comment marker
///
/// Everything after the first newline is returned verbatim. A comment with no
/// newline after it leaves nothing to parse.
pub fn strip_leading_comment(content: &str) -> &str {
    if !content.starts_with(manifest::COMMENT_MARKER) {
        return content;
    }

    match content.find('\n') {
        Some(index) => &content[index + 1..],
        None => "",
    }
}

/// Read and parse the base manifest
pub fn read_base_manifest(path: &Path) -> ManifestResult<Value> {
    let content = read_text(path)?;
    let json = strip_leading_comment(&content);

    if json.len() != content.len() {
        debug!(
            "Stripped leading comment line from {} ({} bytes)",
            path.display(),
            content.len() - json.len()
        );
    }

    let manifest: Value = serde_json::from_str(json).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Parsed base manifest: {}", path.display());
    Ok(manifest)
}

/// Read and parse the cargo sources document
///
/// The entries are opaque to this tool and passed through unchanged.
pub fn read_sources(path: &Path) -> ManifestResult<Vec<Value>> {
    let content = read_text(path)?;

    let document: Value =
        serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    match document {
        Value::Array(sources) => {
            debug!("Parsed {} sources from {}", sources.len(), path.display());
            Ok(sources)
        }
        other => Err(ManifestError::SourcesNotArray {
            path: path.to_path_buf(),
            found: json_type_name(&other),
        }),
    }
}

/// Render a manifest as 2-space indented JSON
pub fn render_manifest(manifest: &Value) -> ManifestResult<Vec<u8>> {
    serde_json::to_vec_pretty(manifest).map_err(ManifestError::Serialize)
}

/// Write the manifest, replacing any existing file
///
/// Content goes to a temporary file next to the destination and is renamed
/// into place, so the destination is never left half written. A symlinked
/// destination is written through to its target, and an existing file keeps
/// its permissions.
pub fn write_manifest(path: &Path, manifest: &Value) -> ManifestResult<()> {
    let content = render_manifest(manifest)?;
    let target = resolve_output_path(path);
    let temp_path = temp_path_for(&target);

    let write_error = |source: std::io::Error| ManifestError::Write {
        path: path.to_path_buf(),
        source,
    };

    fs::write(&temp_path, &content).map_err(write_error)?;

    let replaced = copy_permissions(&target, &temp_path)
        .and_then(|_| fs::rename(&temp_path, &target));
    if let Err(e) = replaced {
        let _ = fs::remove_file(&temp_path);
        return Err(write_error(e));
    }

    debug!("Wrote {} bytes to {}", content.len(), target.display());
    Ok(())
}

/// Name of a JSON value's type, for diagnostics
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn read_text(path: &Path) -> ManifestResult<String> {
    fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Follow symlinks on an existing destination; new paths are used as given
fn resolve_output_path(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

fn copy_permissions(from: &Path, to: &Path) -> std::io::Result<()> {
    match fs::metadata(from) {
        Ok(meta) => fs::set_permissions(to, meta.permissions()),
        Err(_) => Ok(()),
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(files::TEMP_FILE_SUFFIX);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_strip_leading_comment() {
        assert_eq!(
            strip_leading_comment("// generated, do not edit\n{\"a\": 1}\n"),
            "{\"a\": 1}\n"
        );
        assert_eq!(strip_leading_comment("{\"a\": 1}"), "{\"a\": 1}");
        assert_eq!(strip_leading_comment("// only a comment"), "");

        // Only the first line is a candidate
        assert_eq!(
            strip_leading_comment("{}\n// not stripped"),
            "{}\n// not stripped"
        );

        // Lines after the comment keep their original breaks
        assert_eq!(strip_leading_comment("//x\r\n{\n}\n"), "{\n}\n");
    }

    #[test]
    fn test_commented_manifest_parses_like_plain() {
        let temp_dir = TempDir::new().unwrap();
        let body = "{\n  \"app-id\": \"com.example.App\",\n  \"modules\": []\n}\n";

        let plain = temp_dir.path().join("plain.json");
        let commented = temp_dir.path().join("commented.json");
        fs::write(&plain, body).unwrap();
        fs::write(&commented, format!("// generated, do not edit\n{}", body)).unwrap();

        assert_eq!(
            read_base_manifest(&plain).unwrap(),
            read_base_manifest(&commented).unwrap()
        );
    }

    #[test]
    fn test_read_base_manifest_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("base.json");
        fs::write(&path, "{ \"modules\": [ }").unwrap();

        let err = read_base_manifest(&path).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn test_read_sources() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cargo-sources.json");
        fs::write(
            &path,
            r#"[{"type": "archive", "url": "https://static.crates.io/a.crate"}, {"type": "inline", "contents": "x"}]"#,
        )
        .unwrap();

        let sources = read_sources(&path).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0]["type"], "archive");
        assert_eq!(sources[1]["type"], "inline");
    }

    #[test]
    fn test_read_sources_rejects_non_array() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cargo-sources.json");
        fs::write(&path, r#"{"type": "git"}"#).unwrap();

        match read_sources(&path).unwrap_err() {
            ManifestError::SourcesNotArray { found, .. } => assert_eq!(found, "an object"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_render_uses_two_space_indent_and_keeps_key_order() {
        let manifest: Value =
            serde_json::from_str(r#"{"id": "app", "command": "run", "modules": [{"name": "m"}]}"#)
                .unwrap();
        let rendered = String::from_utf8(render_manifest(&manifest).unwrap()).unwrap();

        assert_eq!(
            rendered,
            "{\n  \"id\": \"app\",\n  \"command\": \"run\",\n  \"modules\": [\n    {\n      \"name\": \"m\"\n    }\n  ]\n}"
        );
    }

    #[test]
    fn test_write_manifest_overwrites_and_cleans_temp() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        fs::write(&path, "stale").unwrap();

        write_manifest(&path, &json!({"modules": []})).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n  \"modules\": []\n}"
        );
        assert!(!temp_dir.path().join("out.json.tmp").exists());
    }

    #[test]
    fn test_write_manifest_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.json");

        let err = write_manifest(&path, &json!({})).unwrap_err();
        assert!(matches!(err, ManifestError::Write { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_manifest_follows_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&real, "stale").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_manifest(&link, &json!({"modules": []})).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(
            fs::read_to_string(&real).unwrap(),
            "{\n  \"modules\": []\n}"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_write_manifest_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        fs::write(&path, "stale").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_manifest(&path, &json!({})).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[test]
    fn test_large_integers_pass_through_unchanged() {
        let manifest: Value = serde_json::from_str(
            r#"{"x": 123456789012345678901234567890, "ratio": 0.10000000000000000555, "modules": []}"#,
        )
        .unwrap();
        let rendered = String::from_utf8(render_manifest(&manifest).unwrap()).unwrap();

        assert!(rendered.contains("\"x\": 123456789012345678901234567890"));
        assert!(rendered.contains("\"ratio\": 0.10000000000000000555"));
    }

    #[test]
    fn test_temp_path_for() {
        let temp = temp_path_for(Path::new("build/app.json"));
        assert_eq!(temp, PathBuf::from("build/app.json.tmp"));
    }
}
