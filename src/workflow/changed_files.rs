use crate::context::AppContext;
use crate::domain::change::FileChangeRecord;
use crate::domain::classify::{SPACE_IN_FILENAME, classify};
use crate::domain::event::{CommitRange, EventContext};
use crate::domain::failure::FailureLog;
use crate::domain::format::{FormattedOutputs, OutputFormat};
use crate::error::{AppError, AppResult};
use crate::services::StepOutputSink;
use crate::workflow::report;

pub struct ChangedFilesOutcome {
    pub range: CommitRange,
    pub outputs: FormattedOutputs,
}

/// Compares the event's commits and publishes the changed files as step outputs.
///
/// Problems that still leave something to report go to `failures` and the run
/// continues. Returns an error only when there is nothing left to report.
pub async fn detect_changed_files(
    ctx: &AppContext,
    sink: &mut dyn StepOutputSink,
    failures: &mut FailureLog,
) -> AppResult<ChangedFilesOutcome> {
    let format = match ctx.config.format.parse::<OutputFormat>() {
        Ok(format) => Some(format),
        Err(message) => {
            failures.record(message);
            None
        }
    };

    log::debug!("Payload keys: {}", ctx.event.payload_keys().join(","));

    let range = resolve_commit_range(&ctx.event, failures);
    let files = compare_range(ctx, &range, failures).await?;
    let classification = classify(&files, format, failures);

    let format = format.ok_or_else(|| {
        AppError::Configuration(format!(
            "cannot render outputs in unknown format '{}'",
            ctx.config.format
        ))
    })?;

    if format == OutputFormat::SpaceDelimited {
        for filename in &classification.all {
            if filename.contains(' ') {
                failures.record(SPACE_IN_FILENAME);
            }
        }
    }

    let outputs = FormattedOutputs::render(&classification, format)?;
    report::publish(&outputs, sink)?;

    Ok(ChangedFilesOutcome { range, outputs })
}

/// Picks base and head commits out of the event payload.
///
/// Missing commits are reported and replaced by empty strings, so the compare
/// call still runs with a `...` range.
pub fn resolve_commit_range(event: &EventContext, failures: &mut FailureLog) -> CommitRange {
    let event_name = event.kind.as_str();
    let (base, head) = match event.commit_ids() {
        Some(ids) => ids,
        None => {
            failures.record(format!(
                "This action only supports pull requests and pushes, {event_name} events are not supported."
            ));
            (None, None)
        }
    };

    log::info!("Base commit: {}", base.as_deref().unwrap_or("<missing>"));
    log::info!("Head commit: {}", head.as_deref().unwrap_or("<missing>"));

    match (base, head) {
        (Some(base), Some(head)) => CommitRange { base, head },
        _ => {
            failures.record(format!(
                "The base and head commits are missing from the payload for this {event_name} event."
            ));
            CommitRange {
                base: String::new(),
                head: String::new(),
            }
        }
    }
}

async fn compare_range(
    ctx: &AppContext,
    range: &CommitRange,
    failures: &mut FailureLog,
) -> AppResult<Vec<FileChangeRecord>> {
    let event_name = ctx.event.kind.as_str();
    let basehead = range.basehead();
    let repository = &ctx.config.repository;

    log::info!("Comparing {basehead} in {}/{}", repository.owner, repository.repo);
    let comparison = ctx
        .comparison
        .compare(&repository.owner, &repository.repo, &basehead)
        .await?;
    log::info!("Received compare response with status {}", comparison.http_status);

    if comparison.http_status != 200 {
        failures.record(format!(
            "The GitHub API for comparing the base and head commits for this {event_name} event returned {}, expected 200.",
            comparison.http_status
        ));
    }

    if !comparison.is_ahead() {
        failures.record(format!(
            "The head commit for this {event_name} event is not ahead of the base commit."
        ));
    }

    comparison.files.ok_or(AppError::MissingFileList)
}
