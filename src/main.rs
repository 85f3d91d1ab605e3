//! sdsgroup - declarative management of a Datadog Sensitive Data Scanner group

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod provider;
mod state;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `--debug` forces debug output; otherwise RUST_LOG applies, defaulting to warnings
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("sdsgroup version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Schema => cli::schema::run(&opts),
        Commands::Create { file, dry_run } => cli::group::create(&opts, &file, dry_run).await,
        Commands::Read => cli::group::read(&opts).await,
        Commands::Update { file, dry_run } => cli::group::update(&opts, &file, dry_run).await,
        Commands::Delete {
            version,
            yes,
            dry_run,
        } => cli::group::delete(&opts, version, yes, dry_run).await,
        Commands::Import { id } => cli::group::import(&opts, &id).await,
        Commands::Completion { shell } => cli::completions::run(shell),
    }
}
