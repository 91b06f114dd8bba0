//! Configuration management for the takt application.
//!
//! The preference store is a JSON file in the platform data directory,
//! holding the per-kind break settings, the active hours window, and the
//! preferred notification placement. `Config::init` drives the interactive
//! setup wizard used by `takt init`.

use crate::libs::data_storage::DataStorage;
use crate::libs::error::ConfigError;
use crate::libs::messages::Message;
use crate::libs::wall_clock::WallClock;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// The three break tiers. Declaration order is the tie-break priority when
/// several breaks are due in the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BreakKind {
    Short,
    Stretch,
    Day,
}

impl BreakKind {
    /// All kinds in scheduling priority order.
    pub const ALL: [BreakKind; 3] = [BreakKind::Short, BreakKind::Stretch, BreakKind::Day];
}

impl fmt::Display for BreakKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BreakKind::Short => "short",
            BreakKind::Stretch => "stretch",
            BreakKind::Day => "end-of-day",
        };
        write!(f, "{}", name)
    }
}

/// Optional commands to run around a break or an active hours violation.
///
/// `on_start` fires when a break countdown begins (or when a violation is
/// detected before the window opens); `on_end` fires when the countdown
/// completes (or for violations past the window end).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct HookConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_end: Option<String>,
}

/// Settings for one break kind.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BreakConfig {
    pub kind: BreakKind,

    /// Work time between two breaks of this kind.
    pub work_duration: WallClock,

    /// Length of the break countdown. Absent exactly for the end-of-day
    /// break, which has no countdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_duration: Option<WallClock>,

    /// Default postpone distance when the user defers the break.
    pub postpone_duration: WallClock,

    pub enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hooks: Option<HookConfig>,
}

impl BreakConfig {
    /// The stock settings for a kind, used by `Config::default` and as
    /// wizard defaults.
    pub fn default_for(kind: BreakKind) -> Self {
        match kind {
            BreakKind::Short => BreakConfig {
                kind,
                work_duration: WallClock::from_minutes(20),
                break_duration: Some(WallClock::new(0, 0, 30)),
                postpone_duration: WallClock::from_minutes(5),
                enabled: true,
                hooks: None,
            },
            BreakKind::Stretch => BreakConfig {
                kind,
                work_duration: WallClock::from_minutes(50),
                break_duration: Some(WallClock::from_minutes(5)),
                postpone_duration: WallClock::from_minutes(10),
                enabled: true,
                hooks: None,
            },
            BreakKind::Day => BreakConfig {
                kind,
                work_duration: WallClock::new(8, 0, 0),
                break_duration: None,
                postpone_duration: WallClock::from_minutes(15),
                enabled: false,
                hooks: None,
            },
        }
    }

    /// Checks the kind/duration/hook consistency rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.kind {
            BreakKind::Day => {
                if self.break_duration.is_some() {
                    return Err(ConfigError::DayBreakWithDuration);
                }
                if self.hooks.as_ref().and_then(|h| h.on_end.as_ref()).is_some() {
                    return Err(ConfigError::DayBreakWithEndHook);
                }
            }
            _ => {
                if self.break_duration.is_none() {
                    return Err(ConfigError::MissingBreakDuration(self.kind));
                }
            }
        }
        Ok(())
    }
}

/// The daily window during which work is expected. `start` and `end` are
/// times of day, not elapsed durations.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ActiveHoursConfig {
    pub start: WallClock,
    pub end: WallClock,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hooks: Option<HookConfig>,
}

impl Default for ActiveHoursConfig {
    fn default() -> Self {
        ActiveHoursConfig {
            start: WallClock::new(9, 0, 0),
            end: WallClock::new(18, 0, 0),
            enabled: false,
            hooks: None,
        }
    }
}

impl ActiveHoursConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start.total_seconds() > self.end.total_seconds() {
            return Err(ConfigError::InvertedActiveHours);
        }
        Ok(())
    }
}

/// Where GUI collaborators should place break notifications. The core only
/// stores and hands this out.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPlacement {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl fmt::Display for NotificationPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NotificationPlacement::TopLeft => "top-left",
            NotificationPlacement::TopRight => "top-right",
            NotificationPlacement::BottomLeft => "bottom-left",
            NotificationPlacement::BottomRight => "bottom-right",
        };
        write!(f, "{}", name)
    }
}

/// Root configuration container persisted as `config.json`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    pub breaks: Vec<BreakConfig>,
    pub active_hours: ActiveHoursConfig,
    pub placement: NotificationPlacement,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            breaks: BreakKind::ALL.iter().map(|kind| BreakConfig::default_for(*kind)).collect(),
            active_hours: ActiveHoursConfig::default(),
            placement: NotificationPlacement::BottomRight,
        }
    }
}

impl Config {
    /// Reads the configuration file, falling back to defaults when no file
    /// exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Validates every break config and the active hours window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for break_config in &self.breaks {
            break_config.validate()?;
        }
        self.active_hours.validate()
    }

    /// Returns the break config for `kind`, falling back to the stock
    /// settings when the stored list has no entry for it.
    pub fn break_config(&self, kind: BreakKind) -> BreakConfig {
        self.breaks
            .iter()
            .find(|c| c.kind == kind)
            .cloned()
            .unwrap_or_else(|| BreakConfig::default_for(kind))
    }

    /// Replaces the stored entry for the config's kind.
    pub fn set_break_config(&mut self, config: BreakConfig) {
        if let Some(existing) = self.breaks.iter_mut().find(|c| c.kind == config.kind) {
            *existing = config;
        } else {
            self.breaks.push(config);
        }
    }

    /// Runs the interactive configuration wizard.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [Message::ConfigModuleBreaks, Message::ConfigModuleActiveHours, Message::ConfigModulePlacement];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|m| m.to_string()).collect::<Vec<_>>())
            .interact()?;

        for index in selected {
            match index {
                0 => {
                    msg_print!(Message::ConfigModuleBreaks);
                    let mut breaks = Vec::with_capacity(BreakKind::ALL.len());
                    for kind in BreakKind::ALL {
                        breaks.push(Self::init_break(kind, config.break_config(kind))?);
                    }
                    config.breaks = breaks;
                }
                1 => {
                    msg_print!(Message::ConfigModuleActiveHours);
                    config.active_hours = Self::init_active_hours(config.active_hours.clone())?;
                }
                2 => {
                    let placements = [
                        NotificationPlacement::TopLeft,
                        NotificationPlacement::TopRight,
                        NotificationPlacement::BottomLeft,
                        NotificationPlacement::BottomRight,
                    ];
                    let choice = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptPlacement.to_string())
                        .items(&placements.iter().map(|p| p.to_string()).collect::<Vec<_>>())
                        .default(3)
                        .interact()?;
                    config.placement = placements[choice];
                }
                _ => {}
            }
        }

        Ok(config)
    }

    fn init_break(kind: BreakKind, default: BreakConfig) -> Result<BreakConfig> {
        let enabled = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptBreakEnabled(kind.to_string()).to_string())
            .default(default.enabled)
            .interact()?;

        let work_minutes: i64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptWorkDuration(kind.to_string()).to_string())
            .default(default.work_duration.total_seconds() / 60)
            .interact_text()?;

        let break_duration = match kind {
            BreakKind::Day => None,
            _ => {
                let default_minutes = default.break_duration.map(|d| d.total_seconds() / 60).unwrap_or(1);
                let minutes: i64 = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptBreakDuration(kind.to_string()).to_string())
                    .default(default_minutes.max(1))
                    .interact_text()?;
                Some(WallClock::from_minutes(minutes))
            }
        };

        let postpone_minutes: i64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPostponeDuration(kind.to_string()).to_string())
            .default(default.postpone_duration.total_seconds() / 60)
            .interact_text()?;

        let on_start: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHookOnStart(kind.to_string()).to_string())
            .default(default.hooks.as_ref().and_then(|h| h.on_start.clone()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let on_end: String = match kind {
            BreakKind::Day => String::new(),
            _ => Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptHookOnEnd(kind.to_string()).to_string())
                .default(default.hooks.as_ref().and_then(|h| h.on_end.clone()).unwrap_or_default())
                .allow_empty(true)
                .interact_text()?,
        };

        let hooks = if on_start.is_empty() && on_end.is_empty() {
            None
        } else {
            Some(HookConfig {
                on_start: (!on_start.is_empty()).then_some(on_start),
                on_end: (!on_end.is_empty()).then_some(on_end),
            })
        };

        Ok(BreakConfig {
            kind,
            work_duration: WallClock::from_minutes(work_minutes),
            break_duration,
            postpone_duration: WallClock::from_minutes(postpone_minutes),
            enabled,
            hooks,
        })
    }

    fn init_active_hours(default: ActiveHoursConfig) -> Result<ActiveHoursConfig> {
        let enabled = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHoursEnabled.to_string())
            .default(default.enabled)
            .interact()?;

        let start_str: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHoursStart.to_string())
            .default(format!("{:02}:{:02}", default.start.hours, default.start.minutes))
            .interact_text()?;
        let end_str: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHoursEnd.to_string())
            .default(format!("{:02}:{:02}", default.end.hours, default.end.minutes))
            .interact_text()?;

        Ok(ActiveHoursConfig {
            start: parse_time_of_day(&start_str)?,
            end: parse_time_of_day(&end_str)?,
            enabled,
            hooks: default.hooks,
        })
    }
}

/// Parses an `HH:MM` time-of-day string into a `WallClock`.
pub fn parse_time_of_day(input: &str) -> Result<WallClock> {
    let mut parts = input.trim().splitn(2, ':');
    let hours: i64 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| msg_error_anyhow!(Message::InvalidTimeOfDay(input.to_string())))?;
    let minutes: i64 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| msg_error_anyhow!(Message::InvalidTimeOfDay(input.to_string())))?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(msg_error_anyhow!(Message::InvalidTimeOfDay(input.to_string())));
    }
    Ok(WallClock::new(hours, minutes, 0))
}
