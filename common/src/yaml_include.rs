use std::fs;
use std::path::{Path, PathBuf};
use yaml_rust2::{Yaml, YamlLoader, yaml::Hash};

use crate::config::ConfigError;

const INCLUDE_DIRECTIVE: &str = "!include";

/// Reads a YAML file and merges every `!include <relative path>` line into it.
///
/// Included documents are merged in order, then the including file's own
/// content is laid over them, so the includer always wins on conflicts. A file
/// that includes itself, directly or through other files, is rejected.
pub fn load_yaml_with_includes(path: &Path) -> Result<Yaml, ConfigError> {
    let mut ancestors = vec![canonical_path(path)?];
    let res = process_includes_recursive(path, &mut ancestors)?;
    tracing::trace!(path = %path.display(), "Processed config includes");
    Ok(res)
}

fn canonical_path(path: &Path) -> Result<PathBuf, ConfigError> {
    fs::canonicalize(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// `ancestors` holds the canonical paths of the files currently being
/// expanded, so the same file may still be included from sibling branches.
fn process_includes_recursive(
    path: &Path,
    ancestors: &mut Vec<PathBuf>,
) -> Result<Yaml, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let base_path = path.parent().unwrap_or(Path::new(""));

    let (includes, rest): (Vec<&str>, Vec<&str>) = contents
        .lines()
        .partition(|&line| line.trim().starts_with(INCLUDE_DIRECTIVE));

    let mut processed_includes = Vec::with_capacity(includes.len());
    for line in includes {
        let include_path = line.trim()[INCLUDE_DIRECTIVE.len()..].trim();
        let include_error = || ConfigError::Include {
            path: path.display().to_string(),
            include: line.trim().to_string(),
        };
        if include_path.is_empty() {
            return Err(include_error());
        }

        let target = base_path.join(include_path);
        let canonical = canonical_path(&target)?;
        if ancestors.contains(&canonical) {
            return Err(include_error());
        }

        ancestors.push(canonical);
        processed_includes.push(process_includes_recursive(&target, ancestors)?);
        ancestors.pop();
    }

    let rest_yamls =
        YamlLoader::load_from_str(&rest.join("\n")).map_err(|e| ConfigError::Yaml {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let merged_rest = rest_yamls
        .into_iter()
        .reduce(|acc, next| merge_yaml(&acc, &next))
        .unwrap_or_else(|| Yaml::Hash(Hash::new()));

    match processed_includes
        .into_iter()
        .reduce(|acc, include| merge_yaml(&acc, &include))
    {
        Some(merged_includes) => Ok(merge_yaml(&merged_includes, &merged_rest)),
        None => Ok(merged_rest),
    }
}

fn merge_yaml(base: &Yaml, override_yaml: &Yaml) -> Yaml {
    match (base, override_yaml) {
        (Yaml::Hash(base_hash), Yaml::Hash(override_hash)) => {
            let mut result = base_hash.clone();
            for (key, value) in override_hash {
                match base_hash.get(key) {
                    Some(base_value) => {
                        result.insert(key.clone(), merge_yaml(base_value, value));
                    }
                    None => {
                        result.insert(key.clone(), value.clone());
                    }
                }
            }
            Yaml::Hash(result)
        }
        (base_value, Yaml::Null) => base_value.clone(),
        (_, override_value) => override_value.clone(),
    }
}
