use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use show_finder::catalog::{DEFAULT_BASE_URL, DEFAULT_IMAGE_URL};
use show_finder::{Config, Controller, RacePolicy, ShowFinderError, TvMazeClient, connect, view};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Search the TVMaze show catalog and browse the episodes of a show
#[derive(Debug, Parser)]
#[command(name = "show_finder", version, about)]
struct Cli {
    /// Root of the catalog API
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Image URL used for shows without artwork
    #[arg(long, global = true, default_value = DEFAULT_IMAGE_URL)]
    default_image: String,

    /// How overlapping responses are resolved
    #[arg(long, global = true, value_enum, default_value_t = RacePolicyArg::LatestIssued)]
    race_policy: RacePolicyArg,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search for shows matching a term
    Search {
        term: String,
        /// Print the HTML fragment instead of plain text
        #[arg(long)]
        html: bool,
    },
    /// List the episodes of a show
    Episodes {
        show_id: u64,
        /// Print the HTML fragment instead of plain text
        #[arg(long)]
        html: bool,
    },
    /// Search and browse episodes interactively
    Interactive,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RacePolicyArg {
    LatestIssued,
    LastCompleted,
}

impl From<RacePolicyArg> for RacePolicy {
    fn from(arg: RacePolicyArg) -> Self {
        match arg {
            RacePolicyArg::LatestIssued => RacePolicy::LatestIssued,
            RacePolicyArg::LastCompleted => RacePolicy::LastCompleted,
        }
    }
}

fn print_view(controller: &Controller<TvMazeClient>, html: bool) -> Result<(), ShowFinderError> {
    let view = controller.view();
    if html {
        print!("{}", view::html::render(&view)?);
    } else {
        print!("{}", view::text::render(&view));
    }
    Ok(())
}

/// Runs the prompt loop: a search box followed by a choice of shows whose
/// episodes to display
fn interactive(controller: &Controller<TvMazeClient>) -> Result<(), ShowFinderError> {
    let theme = ColorfulTheme::default();

    loop {
        let term: String = Input::with_theme(&theme)
            .with_prompt("Search shows")
            .allow_empty(true)
            .interact_text()?;

        if let Err(e) = controller.search(&term) {
            eprintln!("Error: {}", e);
            continue;
        }

        loop {
            let current = controller.view();
            print!("\n{}\n", view::text::render(&current));

            let mut items: Vec<String> = current
                .shows()
                .iter()
                .map(|show| format!("Episodes of {}", show.name))
                .collect();
            items.push("New search".to_string());
            items.push("Quit".to_string());

            let choice = Select::with_theme(&theme)
                .with_prompt("Choose")
                .items(&items)
                .default(0)
                .interact()?;

            let show_count = current.shows().len();
            if choice == show_count {
                break;
            }
            if choice > show_count {
                return Ok(());
            }

            if let Err(e) = controller.show_episodes_at(choice) {
                eprintln!("Error: {}", e);
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), ShowFinderError> {
    let config = Config {
        base_url: cli.base_url,
        default_image: cli.default_image,
        race_policy: cli.race_policy.into(),
    };
    let controller = connect(config);

    match cli.command {
        Command::Search { term, html } => {
            controller.search(&term)?;
            print_view(&controller, html)?;
        }
        Command::Episodes { show_id, html } => {
            controller.show_episodes(show_id)?;
            print_view(&controller, html)?;
        }
        Command::Interactive => interactive(&controller)?,
    }

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("\nError: {}", e);
        process::exit(1);
    }
}
