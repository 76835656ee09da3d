use crate::errors::{AppError, AppResult};
use crate::models::schedule::{DayType, LocationAlias, ShiftSchedule, ShiftWindow};
use crate::utils::time::ClockTime;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Runtime configuration, loaded once per run and passed into the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Full names whose rows are dropped without a lookup.
    #[serde(default)]
    pub ignore_list: Vec<String>,
    #[serde(default)]
    pub correction: CorrectionSettings,
}

/// Everything the anomaly corrector needs to build a clock-out suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionSettings {
    /// Value written by the timeclock when it forces an end-of-day logout.
    #[serde(default = "default_auto_clock_out")]
    pub auto_clock_out: ClockTime,
    #[serde(default = "default_fallback_clock_out")]
    pub fallback_clock_out: ClockTime,
    #[serde(default = "default_location_key")]
    pub default_location_key: String,
    #[serde(default = "default_location_aliases")]
    pub location_aliases: Vec<LocationAlias>,
    #[serde(default = "default_shift_schedule")]
    pub shift_schedule: ShiftSchedule,
}

fn default_auto_clock_out() -> ClockTime {
    ClockTime::hm(4, 0)
}
fn default_fallback_clock_out() -> ClockTime {
    ClockTime::hm(18, 0)
}
fn default_location_key() -> String {
    "default".to_string()
}
fn default_location_aliases() -> Vec<LocationAlias> {
    vec![LocationAlias {
        contains: "polk".to_string(),
        key: "polk".to_string(),
    }]
}

fn default_shift_schedule() -> ShiftSchedule {
    let shift = |a: (u16, u16), b: (u16, u16)| {
        ShiftWindow::new(ClockTime::hm(a.0, a.1), ClockTime::hm(b.0, b.1))
    };

    ShiftSchedule::new()
        .with_shifts(
            "default",
            DayType::MonFri,
            vec![shift((6, 0), (14, 30)), shift((14, 30), (18, 0))],
        )
        .with_shifts("default", DayType::SatSun, vec![shift((7, 0), (15, 0))])
        .with_shifts(
            "polk",
            DayType::MonFri,
            vec![shift((6, 0), (14, 0)), shift((14, 0), (17, 30))],
        )
        .with_shifts(
            "polk",
            DayType::SatSun,
            vec![shift((8, 0), (12, 0)), shift((12, 0), (16, 0))],
        )
}

impl Default for CorrectionSettings {
    fn default() -> Self {
        Self {
            auto_clock_out: default_auto_clock_out(),
            fallback_clock_out: default_fallback_clock_out(),
            default_location_key: default_location_key(),
            location_aliases: default_location_aliases(),
            shift_schedule: default_shift_schedule(),
        }
    }
}

impl CorrectionSettings {
    /// Schedule key for a free-text location; first matching alias wins.
    pub fn location_key(&self, location: Option<&str>) -> &str {
        let Some(location) = location else {
            return &self.default_location_key;
        };
        let haystack = location.to_lowercase();

        self.location_aliases
            .iter()
            .find(|a| haystack.contains(&a.contains.to_lowercase()))
            .map(|a| a.key.as_str())
            .unwrap_or(&self.default_location_key)
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimeclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimeclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.conf")
    }

    /// Load configuration from `path` (or the standard file), falling back
    /// to defaults when the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Write a default configuration file, unless running in test mode.
    /// Returns the path the configuration lives at.
    pub fn init_all(custom_path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let path = custom_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !is_test {
            Self::default().save(&path)?;
        }

        Ok(path)
    }

    /// Consistency problems a loaded file may have that serde cannot catch.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let c = &self.correction;

        if !c.shift_schedule.contains_key(&c.default_location_key) {
            problems.push(format!(
                "default_location_key '{}' has no entry in shift_schedule",
                c.default_location_key
            ));
        }

        for alias in &c.location_aliases {
            if alias.contains.trim().is_empty() {
                problems.push(format!(
                    "location alias for key '{}' has an empty pattern",
                    alias.key
                ));
            }
            if !c.shift_schedule.contains_key(&alias.key) {
                problems.push(format!(
                    "location alias '{}' points to unknown schedule key '{}'",
                    alias.contains, alias.key
                ));
            }
        }

        for key in c.shift_schedule.keys() {
            for day_type in [DayType::MonFri, DayType::SatSun] {
                if c.shift_schedule.last_out(key, day_type).is_none() {
                    problems.push(format!("schedule '{key}' defines no {day_type} shifts"));
                }
            }
        }

        for name in &self.ignore_list {
            if name.trim() != name || name.is_empty() {
                problems.push(format!(
                    "ignore_list entry '{name}' is empty or has surrounding whitespace"
                ));
            }
        }

        problems
    }
}
