use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use directories::ProjectDirs;

use crate::error::{GuessError, Result};
use crate::models::difficulty::Difficulty;

const APP_NAME: &str = "monster-guess";
const APP_AUTHOR: &str = "monster-guess";
const APP_QUALIFIER: &str = "com";

const CONFIG_FILE_NAME: &str = "runtime_data.json";

const LAST_DIFFICULTY_KEY: &str = "last_difficulty";

pub struct Context {
    pub data: Arc<RwLock<HashMap<String, String>>>,
    config_file_path: PathBuf,
}

pub fn create_context() -> Result<Context> {
    let project_dirs = ProjectDirs::from(APP_QUALIFIER, APP_AUTHOR, APP_NAME)
        .ok_or_else(|| GuessError::Config("unable to resolve the data directory".to_string()))?;

    let runtime_dir = project_dirs.data_local_dir();
    fs::create_dir_all(runtime_dir)?;

    load_data_from_file(&runtime_dir.join(CONFIG_FILE_NAME))
}

pub fn load_data_from_file(config_file_path: &Path) -> Result<Context> {
    let data = if config_file_path.exists() {
        let contents = fs::read_to_string(config_file_path)?;
        if contents.trim().is_empty() {
            HashMap::new()
        } else {
            serde_json::from_str::<HashMap<String, String>>(&contents)?
        }
    } else {
        HashMap::new()
    };

    Ok(Context {
        data: Arc::new(RwLock::new(data)),
        config_file_path: config_file_path.to_path_buf(),
    })
}

impl Context {
    pub fn read_data(&self, key: &str) -> Option<String> {
        let data_read = self.data.read().unwrap_or_else(PoisonError::into_inner);
        data_read.get(key).cloned()
    }

    pub fn write_data(&self, key: &str, value: &str) -> Result<()> {
        let mut data_write = self.data.write().unwrap_or_else(PoisonError::into_inner);
        data_write.insert(key.to_string(), value.to_string());
        save_data(&self.config_file_path, &data_write)
    }

    pub fn last_difficulty(&self) -> Difficulty {
        self.read_data(LAST_DIFFICULTY_KEY)
            .map(|s| Difficulty::parse_or_default(&s))
            .unwrap_or_default()
    }

    pub fn set_last_difficulty(&self, difficulty: Difficulty) -> Result<()> {
        self.write_data(LAST_DIFFICULTY_KEY, &difficulty.to_string())
    }
}

fn save_data(config_file_path: &Path, data: &HashMap<String, String>) -> Result<()> {
    let content = serde_json::to_string(data)?;
    fs::write(config_file_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_file_path(dir: &TempDir) -> PathBuf {
        dir.path().join(CONFIG_FILE_NAME)
    }

    #[test]
    fn test_read_write_data() {
        let dir = tempfile::tempdir().unwrap();
        let runtime_data = load_data_from_file(&create_temp_file_path(&dir)).unwrap();

        assert_eq!(runtime_data.read_data("key"), None);

        runtime_data.write_data("key", "value").unwrap();
        assert_eq!(runtime_data.read_data("key"), Some("value".to_string()));
    }

    #[test]
    fn test_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let config_file_path = create_temp_file_path(&dir);

        {
            let runtime_data = load_data_from_file(&config_file_path).unwrap();
            runtime_data.set_last_difficulty(Difficulty::Hard).unwrap();
        }

        {
            let runtime_data = load_data_from_file(&config_file_path).unwrap();
            assert_eq!(runtime_data.last_difficulty(), Difficulty::Hard);
        }
    }

    #[test]
    fn test_default_difficulty() {
        let dir = tempfile::tempdir().unwrap();
        let runtime_data = load_data_from_file(&create_temp_file_path(&dir)).unwrap();

        assert_eq!(runtime_data.last_difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config_file_path = create_temp_file_path(&dir);
        fs::write(&config_file_path, "{not json").unwrap();

        assert!(matches!(
            load_data_from_file(&config_file_path),
            Err(GuessError::Json(_))
        ));
    }
}
