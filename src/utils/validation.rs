use crate::utils::error::{ReplaceError, Result};
use std::path::{Component, Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or(ReplaceError::MissingInputArgument)
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();

    if raw.is_empty() {
        return Err(ReplaceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(ReplaceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Resolves `path` the way the file system would, without requiring it to exist.
///
/// Existing prefixes are canonicalized (symlinks followed) before each `..` is
/// applied, and the missing tail is appended to the nearest existing ancestor.
pub fn resolve_path(path: &Path) -> PathBuf {
    if let Ok(real) = path.canonicalize() {
        return real;
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if let Ok(real) = resolved.canonicalize() {
                    resolved = real;
                }
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }

    for ancestor in resolved.ancestors() {
        if let (Ok(real), Ok(rest)) = (ancestor.canonicalize(), resolved.strip_prefix(ancestor)) {
            return real.join(rest);
        }
    }
    resolved
}

/// 輸出檔不可覆蓋輸入檔（比較解析後的實際路徑）
pub fn validate_distinct_paths(field_name: &str, input: &Path, output: &Path) -> Result<()> {
    if input == output || resolve_path(input) == resolve_path(output) {
        return Err(ReplaceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: output.display().to_string(),
            reason: "Output path must differ from the input path".to_string(),
        });
    }
    Ok(())
}
