mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod workflow;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use crate::cmd::changed_files::{self, StepStatus};
use crate::config::{ActionArgs, AppConfig};
use crate::context::AppContext;
use crate::domain::event::EventContext;
use crate::error::AppResult;
use crate::infra::github::GithubClient;
use crate::infra::runner::RunnerOutputs;

#[derive(Parser)]
#[command(
    name = "changed-files",
    author,
    version,
    about = "Expose the files changed by a pull request or push as step outputs"
)]
struct Cli {
    #[command(flatten)]
    action: ActionArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.action.debug_enabled());

    match run(cli.action).await {
        Ok(StepStatus::Succeeded) => ExitCode::SUCCESS,
        Ok(StepStatus::Failed) => ExitCode::FAILURE,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: ActionArgs) -> AppResult<StepStatus> {
    let config = AppConfig::load(&args)?;
    let event = EventContext::load(&args.event_name, args.event_path.as_deref())?;

    let github = Arc::new(GithubClient::new(
        config.api_url.clone(),
        config.token.clone(),
    ));
    let mut outputs = RunnerOutputs::new(config.output_file.clone());

    let context = AppContext::new(config, event, github);
    changed_files::run(&context, &mut outputs).await
}
