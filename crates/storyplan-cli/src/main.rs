use clap::{Parser, Subcommand};
use storyplan_cli::cmd;
use storyplan_core::catalog;
use storyplan_core::selection::Selection;

#[derive(Parser)]
#[command(
    name = "storyplan",
    about = "Short-video storyboard planner — generate ideas from a theme, platform, tone, and pacing",
    version,
    propagate_version = true
)]
struct Cli {
    /// Base URL of the idea generation API
    #[arg(
        long,
        global = true,
        env = "STORYPLAN_API_URL",
        default_value = "http://localhost:5000"
    )]
    api_url: String,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the selectable themes, platforms, tones, and pacings
    Options,

    /// Generate a storyboard idea for the given selection
    Generate {
        /// Content theme key
        #[arg(long, default_value = catalog::DEFAULT_THEME)]
        theme: String,

        /// Target platform key
        #[arg(long, default_value = catalog::DEFAULT_PLATFORM)]
        platform: String,

        /// Audience tone key
        #[arg(long, default_value = catalog::DEFAULT_TONE)]
        tone: String,

        /// Editing pacing key
        #[arg(long, default_value = catalog::DEFAULT_PACING)]
        pacing: String,
    },

    /// Generate an idea from a random selection
    Demo,

    /// Run the idea generation API server
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "5000")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Options => rt.block_on(cmd::options::run(&cli.api_url, cli.json)),
        Commands::Generate {
            theme,
            platform,
            tone,
            pacing,
        } => {
            let selection = Selection {
                theme,
                platform,
                tone,
                pacing,
            };
            rt.block_on(cmd::generate::run(&cli.api_url, selection, cli.json))
        }
        Commands::Demo => rt.block_on(cmd::demo::run(&cli.api_url, cli.json)),
        Commands::Serve { port } => rt.block_on(cmd::serve::run(port)),
    }
}
