use std::path::PathBuf;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("{0} directory cannot be empty")]
    EmptyDirectory(&'static str),
    #[error("title cannot be empty")]
    EmptyTitle,
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

/// How long each timed step of the presentation lasts.
///
/// These are tuned to the animations they accompany.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimingSettings {
    pub intro_auto_advance: Duration,
    pub intro_skip_reveal: Duration,
    pub typing_start_delay: Duration,
    pub typing_interval: Duration,
    pub popup_display: Duration,
    pub quiz_result_display: Duration,
    pub slide_duration: Duration,
    pub counter_tick: Duration,
}

impl Default for TimingSettings {
    fn default() -> Self {
        Self {
            intro_auto_advance: Duration::from_secs(19),
            intro_skip_reveal: Duration::from_secs(5),
            typing_start_delay: Duration::from_millis(500),
            typing_interval: Duration::from_millis(80),
            popup_display: Duration::from_secs(2),
            quiz_result_display: Duration::from_secs(5),
            slide_duration: Duration::from_secs(6),
            counter_tick: Duration::from_secs(1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresentationSettings {
    pictures_dir: PathBuf,
    music_dir: PathBuf,
    title: String,
    relationship_start: NaiveDateTime,
    clicks_to_proposal: u32,
    max_image_width: u32,
    mosaic_image_width: u32,
    mosaic_tiles: usize,
    timing: TimingSettings,
}

#[derive(Clone, Debug, Default)]
pub struct PresentationSettingsDraft {
    pub pictures_dir: Option<PathBuf>,
    pub music_dir: Option<PathBuf>,
    pub title: Option<String>,
    pub relationship_start: Option<NaiveDateTime>,
    pub clicks_to_proposal: Option<u32>,
    pub max_image_width: Option<u32>,
    pub mosaic_image_width: Option<u32>,
    pub mosaic_tiles: Option<usize>,
    pub timing: Option<TimingSettings>,
}

pub const DEFAULT_TITLE: &str = "Uma história de amor";

/// 2021-05-29, midnight.
#[must_use]
pub fn default_relationship_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 5, 29)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

impl PresentationSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill defaults and validate.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` for empty directories or title, and for zero
    /// widths, tile counts, click counts, slide duration or typing interval.
    pub fn validate(self) -> Result<PresentationSettings, SettingsError> {
        let pictures_dir = self.pictures_dir.unwrap_or_else(|| PathBuf::from("pictures"));
        let music_dir = self.music_dir.unwrap_or_else(|| PathBuf::from("music"));
        if pictures_dir.as_os_str().is_empty() {
            return Err(SettingsError::EmptyDirectory("pictures"));
        }
        if music_dir.as_os_str().is_empty() {
            return Err(SettingsError::EmptyDirectory("music"));
        }

        let title = self
            .title
            .map(|value| value.trim().to_string())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        if title.is_empty() {
            return Err(SettingsError::EmptyTitle);
        }

        let clicks_to_proposal =
            non_zero(self.clicks_to_proposal.unwrap_or(2), "clicks_to_proposal")?;
        let max_image_width = non_zero(self.max_image_width.unwrap_or(1920), "max_image_width")?;
        let mosaic_image_width =
            non_zero(self.mosaic_image_width.unwrap_or(800), "mosaic_image_width")?;
        let mosaic_tiles = self.mosaic_tiles.unwrap_or(16);
        if mosaic_tiles == 0 {
            return Err(SettingsError::Zero("mosaic_tiles"));
        }

        let timing = self.timing.unwrap_or_default();
        if timing.slide_duration.is_zero() {
            return Err(SettingsError::Zero("slide_duration"));
        }
        if timing.typing_interval.is_zero() {
            return Err(SettingsError::Zero("typing_interval"));
        }

        Ok(PresentationSettings {
            pictures_dir,
            music_dir,
            title,
            relationship_start: self
                .relationship_start
                .unwrap_or_else(default_relationship_start),
            clicks_to_proposal,
            max_image_width,
            mosaic_image_width,
            mosaic_tiles,
            timing,
        })
    }
}

fn non_zero(value: u32, name: &'static str) -> Result<u32, SettingsError> {
    if value == 0 {
        Err(SettingsError::Zero(name))
    } else {
        Ok(value)
    }
}

impl PresentationSettings {
    #[must_use]
    pub fn pictures_dir(&self) -> &std::path::Path {
        &self.pictures_dir
    }

    #[must_use]
    pub fn music_dir(&self) -> &std::path::Path {
        &self.music_dir
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn relationship_start(&self) -> NaiveDateTime {
        self.relationship_start
    }

    #[must_use]
    pub fn clicks_to_proposal(&self) -> u32 {
        self.clicks_to_proposal
    }

    #[must_use]
    pub fn max_image_width(&self) -> u32 {
        self.max_image_width
    }

    #[must_use]
    pub fn mosaic_image_width(&self) -> u32 {
        self.mosaic_image_width
    }

    #[must_use]
    pub fn mosaic_tiles(&self) -> usize {
        self.mosaic_tiles
    }

    #[must_use]
    pub fn timing(&self) -> &TimingSettings {
        &self.timing
    }
}

impl Default for PresentationSettings {
    fn default() -> Self {
        Self {
            pictures_dir: PathBuf::from("pictures"),
            music_dir: PathBuf::from("music"),
            title: DEFAULT_TITLE.to_string(),
            relationship_start: default_relationship_start(),
            clicks_to_proposal: 2,
            max_image_width: 1920,
            mosaic_image_width: 800,
            mosaic_tiles: 16,
            timing: TimingSettings::default(),
        }
    }
}
