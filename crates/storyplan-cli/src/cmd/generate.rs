use crate::client::ApiClient;
use crate::output::print_json;
use crate::render::render_idea;
use crate::session::{Mode, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use storyplan_core::idea::Idea;
use storyplan_core::selection::Selection;

pub async fn run(api_url: &str, selection: Selection, json: bool) -> anyhow::Result<()> {
    let client = ApiClient::new(api_url);
    let mut session = Session::load(&client).await;

    let mut rng = StdRng::from_entropy();
    let idea = session.generate(&client, &selection, &mut rng).await;

    if json {
        #[derive(serde::Serialize)]
        struct GenerateOutput<'a> {
            mode: Mode,
            idea: &'a Idea,
        }
        return print_json(&GenerateOutput {
            mode: session.mode(),
            idea: &idea,
        });
    }

    render_idea(&idea, session.mode());
    Ok(())
}
