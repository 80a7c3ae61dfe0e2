use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform descriptor embedded in a generated idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformInfo {
    pub name: String,
    pub duration: String,
    pub cta: String,
}

impl PlatformInfo {
    /// Render as the `"{name} • {duration}"` tag shown next to the title.
    pub fn descriptor(&self) -> String {
        format!("{} • {}", self.name, self.duration)
    }
}

/// One outline step: 1-based position, beat description, and a cosmetic
/// time estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineStep {
    pub step: u32,
    pub description: String,
    pub estimated_time: String,
}

/// A fully synthesized storyboard idea. Created fresh per generation
/// request and never mutated afterwards; wire format matches the
/// `POST /api/ideas` response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idea {
    pub title: String,
    pub hook: String,
    pub platform: PlatformInfo,
    pub tone: String,
    pub pacing: String,
    pub summary: String,
    pub outline: Vec<OutlineStep>,
    pub visuals: Vec<String>,
    pub audio: Vec<String>,
    pub call_to_action: String,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_descriptor_format() {
        let p = PlatformInfo {
            name: "TikTok".into(),
            duration: "35-50 seconds".into(),
            cta: "Prompt viewers to stitch their attempt".into(),
        };
        assert_eq!(p.descriptor(), "TikTok • 35-50 seconds");
    }

    #[test]
    fn idea_wire_format_uses_snake_case() {
        let idea = Idea {
            title: "T".into(),
            hook: "H".into(),
            platform: PlatformInfo {
                name: "YouTube".into(),
                duration: "6-8 minutes".into(),
                cta: "c".into(),
            },
            tone: "t".into(),
            pacing: "Balanced".into(),
            summary: "s".into(),
            outline: vec![OutlineStep {
                step: 1,
                description: "d".into(),
                estimated_time: "8s".into(),
            }],
            visuals: vec!["v".into()],
            audio: vec!["a".into()],
            call_to_action: "cta".into(),
            generated_at: Utc::now(),
        };
        let json = serde_json::to_value(&idea).unwrap();
        assert!(json.get("call_to_action").is_some());
        assert!(json.get("generated_at").is_some());
        assert_eq!(json["outline"][0]["estimated_time"], "8s");
    }
}
