use crate::error::ConfigError;
use crate::fishing::{default_catch_table, CatchBag, CatchTable, RodConfig};
use crate::minigame::MinigameConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";
const BAG_FILE: &str = "bag.json";

/// Everything tunable from the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub minigame: MinigameConfig,
    pub rod: RodConfig,
    pub water: CatchTable,
    /// Start a practice reel as soon as the host launches.
    pub auto_activate: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            minigame: MinigameConfig::default(),
            rod: RodConfig::default(),
            water: default_catch_table(),
            auto_activate: false,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.minigame.validate()?;
        self.rod.validate()
    }
}

/// Reads and writes the settings file and the catch bag
pub struct SettingsManager {
    settings_path: PathBuf,
    bag_path: PathBuf,
}

impl SettingsManager {
    /// Uses the platform config directory from the `directories` crate.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "reel").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;
        Self::in_dir(project_dirs.config_dir())
    }

    /// Keeps both files in `dir`, creating it if needed.
    pub fn in_dir(dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            settings_path: dir.join(SETTINGS_FILE),
            bag_path: dir.join(BAG_FILE),
        })
    }

    /// Uses an explicit settings file; the bag lives next to it.
    pub fn with_settings_file(path: &Path) -> io::Result<Self> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;
        Ok(Self {
            settings_path: path.to_path_buf(),
            bag_path: dir.join(BAG_FILE),
        })
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    pub fn settings_exist(&self) -> bool {
        self.settings_path.exists()
    }

    /// Loads and validates the settings file.
    pub fn load(&self) -> io::Result<Settings> {
        let text = fs::read_to_string(&self.settings_path)?;
        let settings: Settings = serde_json::from_str(&text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads the settings, writing the defaults first if there is no file.
    pub fn load_or_init(&self) -> io::Result<Settings> {
        if !self.settings_exist() {
            let settings = Settings::default();
            self.save(&settings)?;
            log::info!("Wrote default settings to {}", self.settings_path.display());
            return Ok(settings);
        }
        self.load()
    }

    pub fn save(&self, settings: &Settings) -> io::Result<()> {
        settings.validate()?;
        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.settings_path, json)
    }

    /// Loads the saved bag; a missing file is an empty bag.
    pub fn load_bag(&self) -> io::Result<CatchBag> {
        if !self.bag_path.exists() {
            return Ok(CatchBag::new());
        }
        let text = fs::read_to_string(&self.bag_path)?;
        serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn save_bag(&self, bag: &CatchBag) -> io::Result<()> {
        let json = serde_json::to_string_pretty(bag)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.bag_path, json)
    }
}
