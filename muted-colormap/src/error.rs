use std::fmt;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ColormapError {
    #[error("Colormap needs at least one color, got {0}")]
    InvalidColorCount(usize),
    #[error("Invalid {channel} range {low}..{high}, expected 0 <= low < high <= 1")]
    InvalidRange { channel: Channel, low: f32, high: f32 },
}

/// HSV channel a sampling range belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Hue,
    Saturation,
    Value,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Value => "value",
        })
    }
}
