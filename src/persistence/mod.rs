use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::Result;

const APP_NAME: &str = "ragozo";

/// Resolves the data directory. Nothing is created here; `save_json_in` creates it on write.
pub fn get_app_data_dir() -> PathBuf {
    app_data_dir_under(dirs::data_local_dir())
}

fn app_data_dir_under(base: Option<PathBuf>) -> PathBuf {
    match base {
        Some(data_dir) => data_dir.join(APP_NAME),
        None => PathBuf::from("."),
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<()> {
    save_json_in(&get_app_data_dir(), data, filename)
}

pub fn save_json_in<T: Serialize>(dir: &Path, data: &T, filename: &str) -> Result<()> {
    fs::create_dir_all(dir)?;
    let file_path = dir.join(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    tracing::info!(path = %file_path.display(), "Data saved");
    Ok(())
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> Result<T> {
    load_json_in(&get_app_data_dir(), filename)
}

/// Missing files load as `T::default()`.
pub fn load_json_in<T: for<'de> Deserialize<'de> + Default>(dir: &Path, filename: &str) -> Result<T> {
    let file_path = dir.join(filename);

    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)?;
    let data: T = serde_json::from_str(&json)?;
    tracing::info!(path = %file_path.display(), "Data loaded");
    Ok(data)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    load_json_or_default_in(&get_app_data_dir(), filename)
}

pub fn load_json_or_default_in<T: for<'de> Deserialize<'de> + Default>(dir: &Path, filename: &str) -> T {
    match load_json_in::<T>(dir, filename) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(file = filename, error = %e, "Failed to load, using defaults");
            T::default()
        }
    }
}

pub fn delete_data_file(filename: &str) -> Result<()> {
    delete_data_file_in(&get_app_data_dir(), filename)
}

pub fn delete_data_file_in(dir: &Path, filename: &str) -> Result<()> {
    let file_path = dir.join(filename);
    if file_path.exists() {
        fs::remove_file(&file_path)?;
        tracing::info!(path = %file_path.display(), "Deleted");
    }
    Ok(())
}

pub fn data_file_exists(filename: &str) -> bool {
    get_data_file_path(filename).exists()
}

pub fn data_file_exists_in(dir: &Path, filename: &str) -> bool {
    dir.join(filename).exists()
}
