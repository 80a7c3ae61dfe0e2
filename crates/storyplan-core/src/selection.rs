use crate::catalog::{self, Pacing, Platform, Theme, Tone};
use crate::error::{Result, StoryplanError};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The user's current form state: one key per option category. This is
/// also the `POST /api/ideas` request body; fields missing from the
/// body deserialize to the documented defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default = "default_theme_key")]
    pub theme: String,
    #[serde(default = "default_platform_key")]
    pub platform: String,
    #[serde(default = "default_tone_key")]
    pub tone: String,
    #[serde(default = "default_pacing_key")]
    pub pacing: String,
}

fn default_theme_key() -> String {
    catalog::DEFAULT_THEME.to_string()
}

fn default_platform_key() -> String {
    catalog::DEFAULT_PLATFORM.to_string()
}

fn default_tone_key() -> String {
    catalog::DEFAULT_TONE.to_string()
}

fn default_pacing_key() -> String {
    catalog::DEFAULT_PACING.to_string()
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            theme: default_theme_key(),
            platform: default_platform_key(),
            tone: default_tone_key(),
            pacing: default_pacing_key(),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// A selection resolved against the catalog.
#[derive(Debug, Clone, Copy)]
pub struct Resolved {
    pub theme: &'static Theme,
    pub platform: &'static Platform,
    pub tone: &'static Tone,
    pub pacing: &'static Pacing,
}

impl Selection {
    /// Strict resolution: every key must exist in the catalog. Used by
    /// the server, which rejects unknown options with 400.
    pub fn resolve(&self) -> Result<Resolved> {
        Ok(Resolved {
            theme: catalog::theme(&self.theme)
                .ok_or_else(|| StoryplanError::UnknownTheme(self.theme.clone()))?,
            platform: catalog::platform(&self.platform)
                .ok_or_else(|| StoryplanError::UnknownPlatform(self.platform.clone()))?,
            tone: catalog::tone(&self.tone)
                .ok_or_else(|| StoryplanError::UnknownTone(self.tone.clone()))?,
            pacing: catalog::pacing(&self.pacing)
                .ok_or_else(|| StoryplanError::UnknownPacing(self.pacing.clone()))?,
        })
    }

    /// Lenient resolution: each unrecognized key independently falls
    /// back to its default catalog entry. Used by local sample-mode
    /// synthesis, which must never fail.
    pub fn resolve_or_default(&self) -> Resolved {
        Resolved {
            theme: catalog::theme(&self.theme).unwrap_or_else(catalog::default_theme),
            platform: catalog::platform(&self.platform).unwrap_or_else(catalog::default_platform),
            tone: catalog::tone(&self.tone).unwrap_or_else(catalog::default_tone),
            pacing: catalog::pacing(&self.pacing).unwrap_or_else(catalog::default_pacing),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
