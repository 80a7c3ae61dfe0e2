//! Local idea synthesis: deterministic shape, random hook and call to
//! action. This is the sample-mode stand-in for the remote generation
//! endpoint and must never fail.

use crate::catalog;
use crate::idea::{Idea, OutlineStep, PlatformInfo};
use crate::selection::{Resolved, Selection};
use chrono::Utc;
use rand::Rng;

/// Synthesize an idea from an already-resolved selection. The RNG is
/// injected so callers (and tests) control reproducibility.
pub fn synthesize(resolved: &Resolved, rng: &mut impl Rng) -> Idea {
    let Resolved {
        theme,
        platform,
        tone,
        pacing,
    } = *resolved;

    let hook = theme.hooks[rng.gen_range(0..theme.hooks.len())];
    let call = catalog::CALLS_TO_ACTION[rng.gen_range(0..catalog::CALLS_TO_ACTION.len())];

    let outline = theme
        .beats
        .iter()
        .enumerate()
        .map(|(index, beat)| {
            let seconds = estimate_seconds(beat.split(' ').count());
            OutlineStep {
                step: index as u32 + 1,
                description: beat.to_string(),
                estimated_time: format!("{seconds}s of the {} runtime", platform.duration),
            }
        })
        .collect();

    let summary = format!(
        "Craft a {} piece anchored by the hook “{hook}”. Target a {} audience: {} {} \
         Keep the runtime around {} and close with: {call}.",
        platform.name, tone.key, tone.hint, pacing.copy, platform.duration,
    );

    Idea {
        title: title_from_hook(hook),
        hook: hook.to_string(),
        platform: PlatformInfo {
            name: platform.name.to_string(),
            duration: platform.duration.to_string(),
            cta: platform.cta.to_string(),
        },
        tone: tone.hint.to_string(),
        pacing: pacing.label.to_string(),
        summary,
        outline,
        visuals: theme.visuals.iter().map(|s| s.to_string()).collect(),
        audio: theme.audio.iter().map(|s| s.to_string()).collect(),
        call_to_action: call.to_string(),
        generated_at: Utc::now(),
    }
}

/// Synthesize from a raw selection, substituting catalog defaults for
/// unrecognized keys. Always returns a fully populated idea.
pub fn local_idea(selection: &Selection, rng: &mut impl Rng) -> Idea {
    synthesize(&selection.resolve_or_default(), rng)
}

/// Cosmetic per-beat time estimate: roughly 3.5 words per second,
/// doubled, floored at 8. Not a scheduling algorithm.
fn estimate_seconds(word_count: usize) -> u32 {
    ((word_count as f64 / 3.5).round() as u32 * 2).max(8)
}

/// Titles reuse the hook, with the first question mark (if any) turned
/// into an exclamation mark.
fn title_from_hook(hook: &str) -> String {
    hook.replacen('?', "!", 1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
