use crate::client::ApiClient;
use crate::output::print_json;
use crate::render::render_idea;
use crate::session::{Mode, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use storyplan_core::idea::Idea;
use storyplan_core::selection::Selection;

/// Roll a random selection from the active option set, then generate —
/// the "surprise me" flow.
pub async fn run(api_url: &str, json: bool) -> anyhow::Result<()> {
    let client = ApiClient::new(api_url);
    let mut session = Session::load(&client).await;

    let mut rng = StdRng::from_entropy();
    let selection = session.random_selection(&mut rng);
    let idea = session.generate(&client, &selection, &mut rng).await;

    if json {
        #[derive(serde::Serialize)]
        struct DemoOutput<'a> {
            mode: Mode,
            selection: &'a Selection,
            idea: &'a Idea,
        }
        return print_json(&DemoOutput {
            mode: session.mode(),
            selection: &selection,
            idea: &idea,
        });
    }

    println!(
        "Rolled: theme={} platform={} tone={} pacing={}",
        selection.theme, selection.platform, selection.tone, selection.pacing
    );
    println!();
    render_idea(&idea, session.mode());
    Ok(())
}
