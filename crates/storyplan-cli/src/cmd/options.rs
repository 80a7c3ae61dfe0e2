use crate::client::ApiClient;
use crate::output::{print_json, print_pairs};
use crate::session::{Mode, Session};
use storyplan_core::options::Options;

pub async fn run(api_url: &str, json: bool) -> anyhow::Result<()> {
    let client = ApiClient::new(api_url);
    let session = Session::load(&client).await;

    if json {
        #[derive(serde::Serialize)]
        struct OptionsOutput<'a> {
            mode: Mode,
            options: &'a Options,
        }
        return print_json(&OptionsOutput {
            mode: session.mode(),
            options: session.options(),
        });
    }

    let options = session.options();
    let categories = [
        ("Themes", &options.themes),
        ("Platforms", &options.platforms),
        ("Tones", &options.tones),
        ("Pacings", &options.pacings),
    ];
    for (title, map) in categories {
        println!("{title}");
        let rows: Vec<(String, String)> = map
            .iter()
            .map(|(key, label)| (key.clone(), label.clone()))
            .collect();
        print_pairs(("KEY", "LABEL"), &rows);
        println!();
    }

    match session.mode() {
        Mode::Live => println!("Using live options from {api_url}."),
        Mode::Sample => {
            println!("Running in sample mode – start the backend for live generation.")
        }
    }
    Ok(())
}
