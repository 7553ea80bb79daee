//! Scheduler configuration read from `data-*` attributes on the canvas.
//!
//! ```html
//! <canvas id="c" data-fps="60" data-elapsed="tick"></canvas>
//! <canvas id="c" data-fps-input="fps" data-start="deferred"></canvas>
//! ```

use crate::cadence::{parse_fps, Cadence};
use crate::error::ConfigError;
use crate::scheduler::Options;

pub const ATTR_FPS: &str = "data-fps";
pub const ATTR_FPS_INPUT: &str = "data-fps-input";
pub const ATTR_ELAPSED: &str = "data-elapsed";
pub const ATTR_START: &str = "data-start";
pub const ATTR_SYNC_SURFACE: &str = "data-sync-surface";

#[derive(Debug, Clone, PartialEq)]
pub enum CadenceConfig {
    Fixed(Cadence),
    /// Re-read from the input element with this id on every cycle.
    Input(String),
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self::Fixed(Cadence::default())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchedulerConfig {
    pub cadence: CadenceConfig,
    pub options: Options,
}

impl SchedulerConfig {
    /// Builds a config from an attribute lookup; absent attributes keep
    /// their defaults.
    pub fn from_attributes<F>(attr: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(id) = attr(ATTR_FPS_INPUT).filter(|id| !id.trim().is_empty()) {
            config.cadence = CadenceConfig::Input(id.trim().to_owned());
        } else if let Some(raw) = attr(ATTR_FPS) {
            let cadence = parse_fps(&raw)
                .and_then(Cadence::from_fps)
                .ok_or(ConfigError::InvalidFps(raw))?;
            config.cadence = CadenceConfig::Fixed(cadence);
        }

        if let Some(raw) = attr(ATTR_ELAPSED) {
            config.options.elapsed = raw.parse()?;
        }
        if let Some(raw) = attr(ATTR_START) {
            config.options.start = raw.parse()?;
        }
        if let Some(raw) = attr(ATTR_SYNC_SURFACE) {
            config.options.sync_surface = parse_flag(ATTR_SYNC_SURFACE, &raw)?;
        }

        Ok(config)
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim() {
        // a bare attribute (`<canvas data-sync-surface>`) reads as ""
        "" | "true" | "on" | "1" => Ok(true),
        "false" | "off" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: raw.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{ElapsedPolicy, StartPolicy};
    use std::collections::HashMap;

    fn read(pairs: &[(&str, &str)]) -> Result<SchedulerConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SchedulerConfig::from_attributes(|name| map.get(name).cloned())
    }

    #[test]
    fn empty_canvas_uses_defaults() {
        assert_eq!(read(&[]).unwrap(), SchedulerConfig::default());
    }

    #[test]
    fn reads_every_attribute() {
        let config = read(&[
            ("data-fps", "60"),
            ("data-elapsed", "start"),
            ("data-start", "deferred"),
            ("data-sync-surface", "false"),
        ])
        .unwrap();
        assert_eq!(config.cadence, CadenceConfig::Fixed(Cadence::from_fps(60.0).unwrap()));
        assert_eq!(config.options.elapsed, ElapsedPolicy::SinceStart);
        assert_eq!(config.options.start, StartPolicy::AfterCadence);
        assert!(!config.options.sync_surface);
    }

    #[test]
    fn input_wins_over_fixed_rate() {
        let config = read(&[("data-fps", "60"), ("data-fps-input", " fps ")]).unwrap();
        assert_eq!(config.cadence, CadenceConfig::Input("fps".into()));
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(read(&[("data-fps", "0")]), Err(ConfigError::InvalidFps("0".into())));
        assert_eq!(read(&[("data-fps", "lots")]), Err(ConfigError::InvalidFps("lots".into())));
        assert!(matches!(
            read(&[("data-sync-surface", "maybe")]),
            Err(ConfigError::InvalidFlag { name: ATTR_SYNC_SURFACE, .. })
        ));
        assert!(read(&[("data-elapsed", "frame")]).is_err());
    }
}
