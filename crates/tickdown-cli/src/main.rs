use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tickdown-cli", version, about = "Tickdown CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a live countdown in the terminal
    Run {
        /// Duration, e.g. "10:00", "01:30:00", "25m", "90s" or "3661"
        duration: String,
        /// Print one JSON event per line instead of the in-place display
        #[arg(long)]
        json: bool,
    },
    /// Parse a duration and print it as zero-padded HH:MM:SS
    Fmt {
        /// Duration in any accepted form
        duration: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run { duration, json } => commands::run::run(&duration, json),
        Commands::Fmt { duration } => commands::fmt::run(&duration),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
