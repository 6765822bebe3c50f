//! Kind-tagged feedback banners shown under each panel.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

/// Delay between dismissing a banner and clearing it from its owner.
pub const DISMISS_FADE_MS: u64 = 300;

/// Banner kind, selecting icon and color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
    #[default]
    Info,
}

impl BannerKind {
    /// BEM modifier applied to the banner body.
    pub fn class_modifier(self) -> &'static str {
        match self {
            Self::Success => "response-box--success",
            Self::Error => "response-box--error",
            Self::Info => "response-box--info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✔",
            Self::Error => "✖",
            Self::Info => "ℹ",
        }
    }
}

/// One action's outcome message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: BannerKind::Error, message: message.into() }
    }

    /// Empty messages render nothing.
    pub fn is_displayable(&self) -> bool {
        !self.message.is_empty()
    }
}
