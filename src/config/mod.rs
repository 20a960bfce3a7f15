use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Rotation frequencies the CLI accepts for the persisted setting.
/// The scheduler itself takes any frequency ≥ 1; the config knob is the
/// small enumerated set the settings screen always offered.
pub const ALLOWED_FREQUENCIES: [u32; 3] = [1, 2, 3];

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_cleaning_frequency")]
    pub cleaning_frequency: u32,
    #[serde(default = "default_duty_points")]
    pub duty_points: i64,
    #[serde(default = "default_fine_amount")]
    pub fine_amount: i64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_cleaning_frequency() -> u32 {
    2
}
fn default_duty_points() -> i64 {
    20
}
fn default_fine_amount() -> i64 {
    50
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            cleaning_frequency: default_cleaning_frequency(),
            duty_points: default_duty_points(),
            fine_amount: default_fine_amount(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rchorelog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rchorelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rchorelog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rchorelog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Persist the configuration back to disk.
    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Validate and persist a new rotation frequency.
    ///
    /// Only the enumerated set is accepted here; recorded calendar events
    /// are never recomputed when the value changes.
    pub fn set_cleaning_frequency(&mut self, freq: u32, persist: bool) -> AppResult<()> {
        if !ALLOWED_FREQUENCIES.contains(&freq) {
            return Err(AppError::InvalidFrequency(format!(
                "{} (allowed: 1, 2 or 3)",
                freq
            )));
        }

        self.cleaning_frequency = freq;

        if persist {
            self.save()?;
        }
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize error: {}", e)))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
