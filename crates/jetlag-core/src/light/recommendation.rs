use serde::{Deserialize, Serialize};
use std::fmt;

/// What the traveler should do with light at a given time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightAction {
    SeekLight,
    AvoidLight,
    BrightLight,
    DimLight,
}

impl LightAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            LightAction::SeekLight => "seek_light",
            LightAction::AvoidLight => "avoid_light",
            LightAction::BrightLight => "bright_light",
            LightAction::DimLight => "dim_light",
        }
    }

    /// Whether this action asks for light rather than darkness.
    pub fn is_light_seeking(&self) -> bool {
        matches!(self, LightAction::SeekLight | LightAction::BrightLight)
    }
}

impl fmt::Display for LightAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single timed light-exposure instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightExposureRecommendation {
    /// "HH:MM" or a phase label such as "During flight"
    pub time: String,
    pub action: LightAction,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
}

impl LightExposureRecommendation {
    pub fn new(time: impl Into<String>, action: LightAction, description: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            action,
            description: description.into(),
            intensity: None,
        }
    }

    /// Attach an intensity qualifier. Only meaningful for light-seeking actions.
    pub fn with_intensity(mut self, intensity: impl Into<String>) -> Self {
        debug_assert!(self.action.is_light_seeking());
        self.intensity = Some(intensity.into());
        self
    }
}
