use clap::{Parser, Subcommand};
use polup::app::status;
use polup::{AppError, InstallConfig, InstallOutcome, SyncConfig};

#[derive(Parser)]
#[command(name = "polup")]
#[command(version)]
#[command(
    about = "Install the pol-apps portal and sync workflow template files",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download the portal and install it under the fixed install root
    #[clap(visible_alias = "i")]
    Install,
    /// Fetch missing workflow template files into this working tree
    #[clap(visible_alias = "s")]
    Sync,
    /// Check host prerequisites without touching anything
    #[clap(visible_alias = "d")]
    Doctor,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Install => run_install(),
        Commands::Sync => run_sync(),
        Commands::Doctor => run_doctor(),
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run_install() -> i32 {
    let config = InstallConfig::default();
    match polup::install(&config) {
        Ok(InstallOutcome::Cancelled) => 0,
        Ok(InstallOutcome::Completed(report)) => report.exit_code(),
        Err(err) => fail_with(err),
    }
}

fn run_sync() -> i32 {
    match SyncConfig::for_current_dir().and_then(|config| polup::sync(&config)) {
        Ok(report) => report.exit_code(),
        Err(err) => fail_with(err),
    }
}

fn run_doctor() -> i32 {
    if polup::doctor().healthy() { 0 } else { 3 }
}

fn fail_with(err: AppError) -> i32 {
    status::fail(&err);
    err.exit_code()
}
