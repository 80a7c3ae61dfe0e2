use crate::client::ApiClient;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;
use storyplan_core::catalog;
use storyplan_core::idea::Idea;
use storyplan_core::options::Options;
use storyplan_core::selection::Selection;
use storyplan_core::synth;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Where options and ideas come from. A session starts `Live` when the
/// backend answers the options fetch, and drops to `Sample` on the
/// first failure of any remote call. The transition is one-way for the
/// life of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Live,
    Sample,
}

impl Mode {
    pub fn is_sample(self) -> bool {
        matches!(self, Mode::Sample)
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Per-invocation application state: the active option set and the
/// live/sample mode. Owned by the command that created it; there is no
/// global state.
pub struct Session {
    options: Options,
    mode: Mode,
}

impl Session {
    /// Load options remote-first. Single attempt, no retries: any
    /// failure means a sample-mode session backed by the catalog.
    pub async fn load(client: &ApiClient) -> Self {
        match client.fetch_options().await {
            Ok(options) => {
                tracing::debug!("loaded live options from {}", client.base_url());
                Self {
                    options,
                    mode: Mode::Live,
                }
            }
            Err(e) => {
                tracing::warn!("options fetch failed, using sample catalog: {e}");
                Self::sample()
            }
        }
    }

    /// A session that never touches the network.
    pub fn sample() -> Self {
        Self {
            options: Options::from_catalog(),
            mode: Mode::Sample,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Generate an idea for the selection. In live mode the remote
    /// synthesizer is tried first; any failure switches the session to
    /// sample mode permanently and synthesizes locally. Never fails.
    pub async fn generate(
        &mut self,
        client: &ApiClient,
        selection: &Selection,
        rng: &mut impl Rng,
    ) -> Idea {
        if self.mode == Mode::Live {
            match client.generate(selection).await {
                Ok(idea) => return idea,
                Err(e) => {
                    tracing::warn!("remote generation failed, switching to sample data: {e}");
                    self.mode = Mode::Sample;
                }
            }
        }
        synth::local_idea(selection, rng)
    }

    /// Build a random selection from the active option set (the "demo"
    /// flow). Empty categories fall back to the default keys.
    pub fn random_selection(&self, rng: &mut impl Rng) -> Selection {
        Selection {
            theme: pick_key(&self.options.themes, catalog::DEFAULT_THEME, rng),
            platform: pick_key(&self.options.platforms, catalog::DEFAULT_PLATFORM, rng),
            tone: pick_key(&self.options.tones, catalog::DEFAULT_TONE, rng),
            pacing: pick_key(&self.options.pacings, catalog::DEFAULT_PACING, rng),
        }
    }
}

fn pick_key<R: Rng>(map: &BTreeMap<String, String>, fallback: &str, rng: &mut R) -> String {
    let keys: Vec<&String> = map.keys().collect();
    keys.choose(rng)
        .map(|k| (*k).clone())
        .unwrap_or_else(|| fallback.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
