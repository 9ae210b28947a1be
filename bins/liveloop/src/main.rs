//! liveloop: turn a portrait photo into an animated video or looping GIF.

mod commands;

use clap::{Parser, Subcommand};
use liveloop_cli::output::Status;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "liveloop")]
#[command(about = "Animated portrait generator and GIF converter")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that an image is a usable portrait
    Validate {
        /// Path to a JPEG or PNG portrait
        path: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate an animated video from a portrait
    Generate {
        /// Path to a JPEG or PNG portrait
        path: PathBuf,
        /// Also convert the result to a looping GIF
        #[arg(long)]
        gif: bool,
        /// Output path for the video (defaults next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Skip saving results to the gallery
        #[arg(long)]
        no_save: bool,
    },
    /// Convert an MP4 video to a looping GIF
    Convert {
        /// Path to an MP4 file
        path: PathBuf,
        /// Output path (defaults next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Manage saved results
    Gallery {
        #[command(subcommand)]
        command: GalleryCommands,
    },
}

#[derive(Subcommand)]
enum GalleryCommands {
    /// List saved results, most recent first
    List {
        /// Operate on the GIF store instead of videos
        #[arg(long)]
        gifs: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a saved result
    Delete {
        /// Entry id (from `gallery list`)
        id: u64,
        /// Operate on the GIF store instead of videos
        #[arg(long)]
        gifs: bool,
    },
    /// Export a saved result to a file
    Export {
        /// Entry id (from `gallery list`)
        id: u64,
        /// Destination path
        dest: PathBuf,
        /// Operate on the GIF store instead of videos
        #[arg(long)]
        gifs: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| "liveloop=debug".into()),
            )
            .init();
    }

    let result = match cli.command {
        Commands::Validate { path, json } => commands::validate::run(&path, json),

        Commands::Generate {
            path,
            gif,
            output,
            no_save,
        } => commands::generate::run(&path, gif, output, no_save).await,

        Commands::Convert { path, output } => commands::convert::run(&path, output),

        Commands::Gallery { command } => match command {
            GalleryCommands::List { gifs, json } => commands::gallery::list(gifs, json),
            GalleryCommands::Delete { id, gifs } => commands::gallery::delete(id, gifs),
            GalleryCommands::Export { id, dest, gifs } => commands::gallery::export(id, &dest, gifs),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Status::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
