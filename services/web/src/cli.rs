use crate::preview::{run_listings_preview, run_logo_lookup, ListingsArgs, LogoArgs};
use crate::server;
use apprentice_watch::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ApprenticeWatch",
    about = "Serve and inspect the ApprenticeWatch apprenticeship listings site",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP site (default command)
    Serve(ServeArgs),
    /// Resolve the logo URL the site would show for an employer
    Logo(LogoArgs),
    /// Print listing card summaries from the configured catalog
    Listings(ListingsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Logo(args) => run_logo_lookup(args),
        Command::Listings(args) => run_listings_preview(args),
    }
}
