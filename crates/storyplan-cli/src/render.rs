use crate::session::Mode;
use storyplan_core::idea::Idea;

/// Human-readable storyboard rendering. Sample-mode runs get a
/// "sample data" note on the status line; the note comes from the
/// session mode, so it can never be appended twice.
pub fn render_idea(idea: &Idea, mode: Mode) {
    println!("{}", idea.title);
    println!("{} · Pacing: {}", idea.platform.descriptor(), idea.pacing);
    println!();
    println!("{}", idea.summary);
    println!();

    println!("Outline:");
    for step in &idea.outline {
        println!("  {}. {} ({})", step.step, step.description, step.estimated_time);
    }

    println!("Visual suggestions:");
    for visual in &idea.visuals {
        println!("  - {visual}");
    }

    println!("Audio suggestions:");
    for audio in &idea.audio {
        println!("  - {audio}");
    }

    println!("Call to action: {}", idea.call_to_action);

    let suffix = if mode.is_sample() { " · sample data" } else { "" };
    println!();
    println!(
        "Generated {} · {}{suffix}",
        idea.generated_at.to_rfc3339(),
        idea.tone
    );
}
