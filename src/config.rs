use crate::error::{RepocheckError, Result};
use crate::types::config::RepocheckConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "repocheck.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".repocheck/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/repocheck/config.toml";

/// Loads the layered configuration: global, then `repocheck.toml` (or the
/// explicit file), then the local override. Missing layers are skipped and
/// an absent configuration yields the defaults.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<RepocheckConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<RepocheckConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(RepocheckError::PathNotFound(path.display().to_string()));
        }
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    let repo_path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.join(DEFAULT_CONFIG_FILE));
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: RepocheckConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| RepocheckError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| RepocheckError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert_eq!(cfg, RepocheckConfig::default());
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[rubric]
min_files = 50
min_commits = 20

[search]
max_results = 25
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[rubric]
min_files = 40
pass_threshold = 80
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".repocheck")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[rubric]
pass_threshold = 70
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), None, Some(&global_path))
            .expect("load should succeed");

        assert_eq!(cfg.rubric.min_files, 40);
        assert_eq!(cfg.rubric.min_commits, 20);
        assert_eq!(cfg.rubric.pass_threshold, 70);
        assert_eq!(cfg.rubric.min_contributors, 3);
        assert_eq!(cfg.search.max_results, 25);
    }

    #[test]
    fn load_config_uses_explicit_file_instead_of_repo_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[rubric]\nmin_files = 99\n",
        )
        .expect("repo config should write");
        let explicit = root.path().join("strict.toml");
        fs::write(&explicit, "[rubric]\nmin_directories = 12\n").expect("explicit should write");

        let cfg = load_config_with_global(root.path(), Some(&explicit), None)
            .expect("load should succeed");
        assert_eq!(cfg.rubric.min_files, 30);
        assert_eq!(cfg.rubric.min_directories, 12);
    }

    #[test]
    fn load_config_rejects_missing_explicit_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        let result =
            load_config_with_global(root.path(), Some(&root.path().join("nope.toml")), None);
        assert!(matches!(result, Err(RepocheckError::PathNotFound(_))));
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[rubric]\nquality_threshold = 2.0\n",
        )
        .expect("repo config should write");

        let result = load_config_with_global(root.path(), None, None);
        assert!(matches!(result, Err(RepocheckError::ConfigParse(_))));
    }

    #[test]
    fn load_config_rejects_malformed_toml() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[rubric\n").expect("write");

        let result = load_config_with_global(root.path(), None, None);
        assert!(matches!(
            result,
            Err(RepocheckError::ConfigParse(msg)) if msg.contains(DEFAULT_CONFIG_FILE)
        ));
    }
}
