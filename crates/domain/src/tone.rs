//! Display tones shared by badges, tiles and chips.
//!
//! The domain decides *which* tone a value deserves; adapters decide what a
//! tone looks like.

/// Coarse colour family for a displayed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Green.
    Success,
    /// Yellow.
    Warning,
    /// Red.
    Danger,
    /// Gray.
    Neutral,
}

impl Tone {
    /// Stable lowercase name, usable as a CSS modifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Neutral => "neutral",
        }
    }
}
