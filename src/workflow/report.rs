use crate::domain::format::FormattedOutputs;
use crate::error::AppResult;
use crate::services::StepOutputSink;

/// Logs every rendered value, then publishes it under its output name.
///
/// `deleted` repeats `removed` for workflows written against older releases.
pub fn publish(outputs: &FormattedOutputs, sink: &mut dyn StepOutputSink) -> AppResult<()> {
    log::info!("All: {}", outputs.all);
    log::info!("Added: {}", outputs.added);
    log::info!("Modified: {}", outputs.modified);
    log::info!("Removed: {}", outputs.removed);
    log::info!("Renamed: {}", outputs.renamed);
    log::info!("Added or modified: {}", outputs.added_modified);
    log::info!("Renamed from: {}", outputs.renamed_from);
    log::info!("Full output: {}", outputs.full_output);
    log::info!("JSON combined: {}", outputs.json_combined);

    let entries = [
        ("all", &outputs.all),
        ("added", &outputs.added),
        ("modified", &outputs.modified),
        ("removed", &outputs.removed),
        ("renamed", &outputs.renamed),
        ("added_modified", &outputs.added_modified),
        ("renamedFrom", &outputs.renamed_from),
        ("fullOutput", &outputs.full_output),
        ("jsonCombined", &outputs.json_combined),
        ("deleted", &outputs.removed),
    ];
    for (name, value) in entries {
        sink.set_output(name, value)?;
    }
    Ok(())
}
