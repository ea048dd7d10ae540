//! Construction-time style attributes and indicator presets.

use std::fmt;
use std::str::FromStr;

use pluto_core::SliderError;

pub const AUTO_CYCLE_KEY: &str = "auto_cycle";
pub const INDICATOR_VISIBILITY_KEY: &str = "indicator_visibility";

/// Style attributes read when a slider is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderAttributes {
    /// Start cycling as soon as the slider is created.
    pub auto_cycle: bool,
    pub indicator_visible: bool,
}

impl Default for SliderAttributes {
    fn default() -> Self {
        Self {
            auto_cycle: true,
            indicator_visible: false,
        }
    }
}

impl SliderAttributes {
    /// Read attributes from a flat style map.
    ///
    /// Missing keys keep their defaults and unknown keys are skipped. A value
    /// that is not `true` or `false` is rejected.
    pub fn parse<I, K, V>(pairs: I) -> Result<Self, SliderError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut attributes = Self::default();
        for (key, value) in pairs {
            let key = key.as_ref().trim();
            let slot = match key {
                AUTO_CYCLE_KEY => &mut attributes.auto_cycle,
                INDICATOR_VISIBILITY_KEY => &mut attributes.indicator_visible,
                _ => {
                    log::debug!("ignoring unknown slider attribute `{key}`");
                    continue;
                }
            };
            *slot = parse_flag(value.as_ref())?;
        }
        Ok(attributes)
    }
}

fn parse_flag(value: &str) -> Result<bool, SliderError> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(SliderError::InvalidArgument {
            reason: "boolean attribute must be `true` or `false`",
        }),
    }
}

/// Built-in indicator placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorPosition {
    CenterBottom,
    RightBottom,
    LeftBottom,
    CenterTop,
    RightTop,
    LeftTop,
}

impl IndicatorPosition {
    pub const ALL: [IndicatorPosition; 6] = [
        IndicatorPosition::CenterBottom,
        IndicatorPosition::RightBottom,
        IndicatorPosition::LeftBottom,
        IndicatorPosition::CenterTop,
        IndicatorPosition::RightTop,
        IndicatorPosition::LeftTop,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IndicatorPosition::CenterBottom => "CENTER_BOTTOM",
            IndicatorPosition::RightBottom => "RIGHT_BOTTOM",
            IndicatorPosition::LeftBottom => "LEFT_BOTTOM",
            IndicatorPosition::CenterTop => "CENTER_TOP",
            IndicatorPosition::RightTop => "RIGHT_TOP",
            IndicatorPosition::LeftTop => "LEFT_TOP",
        }
    }
}

impl fmt::Display for IndicatorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IndicatorPosition {
    type Err = SliderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|position| position.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(SliderError::InvalidArgument {
                reason: "unknown indicator position",
            })
    }
}

#[cfg(test)]
#[path = "tests/attributes_tests.rs"]
mod tests;
