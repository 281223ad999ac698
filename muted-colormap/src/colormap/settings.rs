use rand::Rng;

use crate::{Channel, ColormapError};

/// Half open interval `[low, high)` a HSV channel is sampled from
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ChannelRange {
    pub low: f32,
    pub high: f32,
}

impl ChannelRange {
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    fn validate(&self, channel: Channel) -> Result<(), ColormapError> {
        // Written as a positive check so NaN bounds are rejected as well
        if 0.0 <= self.low && self.low < self.high && self.high <= 1.0 {
            Ok(())
        } else {
            Err(ColormapError::InvalidRange {
                channel,
                low: self.low,
                high: self.high,
            })
        }
    }

    fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<f32> {
        (0..count)
            .map(|_| rng.random_range(self.low..self.high))
            .collect()
    }
}

/// Ranges the random colors are drawn from.
///
/// The defaults keep saturation low enough to avoid harsh colors and value high enough
/// to stay readable on dark backgrounds.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColormapSettings {
    pub hue: ChannelRange,
    pub saturation: ChannelRange,
    pub value: ChannelRange,
}

impl Default for ColormapSettings {
    fn default() -> Self {
        Self {
            hue: ChannelRange::new(0.0, 1.0),
            saturation: ChannelRange::new(0.2, 0.7),
            value: ChannelRange::new(0.5, 1.0),
        }
    }
}

impl ColormapSettings {
    pub fn validate(&self) -> Result<(), ColormapError> {
        self.hue.validate(Channel::Hue)?;
        self.saturation.validate(Channel::Saturation)?;
        self.value.validate(Channel::Value)
    }

    /// Draws `count` hues, then `count` saturations, then `count` values.
    pub(super) fn sample<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> [Vec<f32>; 3] {
        let hue = self.hue.sample(count, rng);
        let saturation = self.saturation.sample(count, rng);
        let value = self.value.sample(count, rng);
        [hue, saturation, value]
    }
}
