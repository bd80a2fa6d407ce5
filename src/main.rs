use anyhow::{Context, Result};
use clap::Parser;

use macos_release_tracker::auth::GithubAppCredentials;
use macos_release_tracker::cli::{RunOptions, RunOutcome, Tracker};
use macos_release_tracker::config::Config;
use macos_release_tracker::github::GithubIssueClient;
use macos_release_tracker::release::WikipediaReleaseNotes;
use macos_release_tracker::ui;

#[derive(clap::Parser)]
#[command(
    name = "macos-release-tracker",
    version,
    about = "Open a GitHub issue when a new macOS release appears",
    long_about = None,
    after_help = "Configuration comes from environment variables: REPO_NAME, ISSUE_TITLE_FORMAT, \
                  ISSUE_LABELS, APP_ID, INSTALLATION_ID, APP_PRIVATE_KEY (or APP_PRIVATE_KEY_PATH), \
                  GITHUB_API_URL."
)]
struct Args {
    #[arg(long, help = "Check and print the issue that would be created without creating it")]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    let source = WikipediaReleaseNotes::new()?;
    let credentials = GithubAppCredentials::new(
        config.api_base.as_str(),
        config.app_id.as_str(),
        config.installation_id.as_str(),
        config.private_key_pem.as_str(),
    )?;
    let issues = GithubIssueClient::new(config.api_base.as_str(), config.repo_name.as_str())?;

    let tracker = Tracker::new(&source, &credentials, &issues, config.title_format.clone())
        .with_labels(config.labels.clone());

    let options = RunOptions {
        dry_run: args.dry_run,
    };

    match tracker.run(&options).context("Release check failed")? {
        RunOutcome::AlreadyTracked { .. } => {}
        RunOutcome::Created { title, .. } => {
            ui::display_success(&format!("Reported {} in {}", title, config.repo_name));
        }
        RunOutcome::DryRun { .. } => {
            ui::display_status("Dry run: no issue created");
        }
    }

    Ok(())
}
