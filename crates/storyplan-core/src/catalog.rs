//! Static content catalog: the bundled themes, platforms, tones, and
//! pacing descriptors used for sample-mode option lists and local idea
//! synthesis. Pure data, loaded at compile time, never mutated.

// ---------------------------------------------------------------------------
// Entry types
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Theme {
    pub key: &'static str,
    pub hooks: &'static [&'static str],
    pub beats: &'static [&'static str],
    pub visuals: &'static [&'static str],
    pub audio: &'static [&'static str],
}

#[derive(Debug)]
pub struct Platform {
    pub key: &'static str,
    pub name: &'static str,
    pub duration: &'static str,
    pub cta: &'static str,
}

#[derive(Debug)]
pub struct Tone {
    pub key: &'static str,
    pub hint: &'static str,
}

#[derive(Debug)]
pub struct Pacing {
    pub key: &'static str,
    pub label: &'static str,
    pub copy: &'static str,
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

// Substituted when a selection key is missing or unrecognized. Each is
// the first entry of its table; `default_*()` relies on that.
pub const DEFAULT_THEME: &str = "education";
pub const DEFAULT_PLATFORM: &str = "youtube";
pub const DEFAULT_TONE: &str = "beginner";
pub const DEFAULT_PACING: &str = "steady";

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

pub static THEMES: &[Theme] = &[
    Theme {
        key: "education",
        hooks: &[
            "What if learning your next skill only took five minutes?",
            "3 lessons your teacher never told you about",
            "This micro-class might change your career overnight",
        ],
        beats: &[
            "Relatable challenge learners face today",
            "Break down the topic into a visual, snackable metaphor",
            "Provide one practical exercise viewers can try immediately",
            "Wrap with a reflection question to drive comments",
        ],
        visuals: &[
            "Clean infographics with animated callouts",
            "Split-screen expert demo with captioned steps",
            "Lightweight motion graphics highlighting stats",
        ],
        audio: &[
            "Calm, upbeat background track at -18 LUFS",
            "Soft whoosh and sparkle sound design on transitions",
            "Tight voiceover pacing with 0.3s pauses between sections",
        ],
    },
    Theme {
        key: "entertainment",
        hooks: &[
            "3 binge-worthy releases you can't miss this weekend",
            "What happens when a fan theory actually comes true?",
            "The behind-the-scenes twist everyone is talking about",
        ],
        beats: &[
            "Open with a trending headline or clip that sparks curiosity",
            "Break down the plot or performance highlights with punchy lower-thirds",
            "Drop a behind-the-scenes fact or quote to surprise viewers",
            "Wrap with a watchlist recommendation and invite hot takes in comments",
        ],
        visuals: &[
            "Rapid montage of posters or stills with neon overlays",
            "Picture-in-picture reaction shots synced to key moments",
            "Animated ticker for cast names, release dates, and streaming platforms",
        ],
        audio: &[
            "Upbeat pop or synth track that hits on scene transitions",
            "Subtle crowd or studio ambience layered beneath commentary",
            "Voiceover with energetic emphasis and playful pauses for effect",
        ],
    },
    Theme {
        key: "travel",
        hooks: &[
            "This hidden gem is only two hours from the city",
            "Stop scrolling and imagine waking up here tomorrow",
            "A weekend escape that feels like crossing continents",
        ],
        beats: &[
            "Show the travel problem you're solving (budget, time, experience)",
            "Reveal location with cinematic b-roll and map overlays",
            "Break down top three experiences with estimated costs",
            "Finish with packing or booking pro-tip viewers can screenshot",
        ],
        visuals: &[
            "Drone-inspired establishing shots with parallax text",
            "POV walking footage layered with playful stickers",
            "Texture-rich food close-ups with shallow depth-of-field",
        ],
        audio: &[
            "Rhythmic travel beat with percussion hits on cuts",
            "Nature ambience stem to fill quiet transitions",
            "Voiceover with smiley tone and crisp consonants",
        ],
    },
    Theme {
        key: "gaming",
        hooks: &[
            "Can you beat this boss without taking any damage?",
            "The speedrun trick pros won't tell you about",
            "Build the ultimate loadout using this underrated combo",
        ],
        beats: &[
            "Kick off with an on-screen challenge countdown",
            "Reveal the strategy while replaying highlight moments",
            "Add split-second overlays for button inputs or gear stats",
            "Close with a viewer challenge and call for stitched duos",
        ],
        visuals: &[
            "HUD-inspired frames with neon accent lighting",
            "Slow-motion replays with motion blur and chromatic aberration",
            "Stylized glitch transitions between clips",
        ],
        audio: &[
            "Trap or drum-and-bass loop side-chained to commentary",
            "Layered controller clicks subtly mixed underneath",
            "Energetic delivery with emphasis on hype phrases",
        ],
    },
    Theme {
        key: "wellness",
        hooks: &[
            "Take a 60-second reset with me",
            "Breathe in for 4, hold for 4, out for 4—ready?",
            "You only need the space beside your desk for this routine",
        ],
        beats: &[
            "Invite the viewer to pause and mirror your breathing",
            "Guide through a grounded routine with soft lower-thirds",
            "Share one science-backed insight to build credibility",
            "Encourage journaling or hydration as a follow-up micro-habit",
        ],
        visuals: &[
            "Soft gradients with floating particle animations",
            "Close-up of calm facial expressions and hand movements",
            "Minimalist typography with high legibility",
        ],
        audio: &[
            "Lo-fi piano textures with warm vinyl noise",
            "ASMR-inspired foley for tactile movements",
            "Gentle voiceover with deliberate pacing and whispered sibilants",
        ],
    },
];

pub static PLATFORMS: &[Platform] = &[
    Platform {
        key: "youtube",
        name: "YouTube",
        duration: "6-8 minutes",
        cta: "Invite viewers to subscribe and drop their own twists in the comments",
    },
    Platform {
        key: "shorts",
        name: "YouTube Shorts",
        duration: "45-60 seconds",
        cta: "Ask for a double-tap and encourage sharing the short with a friend",
    },
    Platform {
        key: "tiktok",
        name: "TikTok",
        duration: "35-50 seconds",
        cta: "Prompt viewers to stitch their attempt and follow for part two",
    },
    Platform {
        key: "reels",
        name: "Instagram Reels",
        duration: "50-75 seconds",
        cta: "Encourage a save for later and a DM to someone who needs the reminder",
    },
];

pub static TONES: &[Tone] = &[
    Tone {
        key: "beginner",
        hint: "Keep explanations crystal clear and friendly for first-time viewers.",
    },
    Tone {
        key: "intermediate",
        hint: "Balance insights with jargon—they already know the basics.",
    },
    Tone {
        key: "expert",
        hint: "Deliver fast-paced breakdowns with data or references to stand out.",
    },
];

pub static PACINGS: &[Pacing] = &[
    Pacing {
        key: "steady",
        label: "Balanced",
        copy: "Use mid-tempo editing—clean cuts every 3–4 seconds to keep a conversational feel.",
    },
    Pacing {
        key: "fast",
        label: "Fast-paced",
        copy: "Accelerate the pacing with snappy jump cuts and kinetic text for each keyword.",
    },
    Pacing {
        key: "calm",
        label: "Calming",
        copy: "Lean into longer holds and cross-dissolves so viewers can breathe between beats.",
    },
];

/// Calls to action shared by every theme; the synthesizer picks one at
/// random per generated idea.
pub static CALLS_TO_ACTION: &[&str] = &[
    "Drop a comment with the next problem you want solved",
    "Tag a friend who needs to try this",
    "Download the free checklist linked in bio",
    "Screenshot the breakdown and build along with me",
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn theme(key: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.key == key)
}

pub fn platform(key: &str) -> Option<&'static Platform> {
    PLATFORMS.iter().find(|p| p.key == key)
}

pub fn tone(key: &str) -> Option<&'static Tone> {
    TONES.iter().find(|t| t.key == key)
}

pub fn pacing(key: &str) -> Option<&'static Pacing> {
    PACINGS.iter().find(|p| p.key == key)
}

pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

pub fn default_platform() -> &'static Platform {
    &PLATFORMS[0]
}

pub fn default_tone() -> &'static Tone {
    &TONES[0]
}

pub fn default_pacing() -> &'static Pacing {
    &PACINGS[0]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
