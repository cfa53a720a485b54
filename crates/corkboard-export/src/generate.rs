//! The `generate` subcommand: validate, bucket, write.

use anyhow::Result;

use crate::bucket::bucket_events;
use crate::cli::GenerateArgs;
use crate::dataset;
use crate::output::write_artifacts;
use crate::validate::{validate_events, validate_locations};

/// Runs the full pipeline. Validation failures abort before anything is
/// written; output failures can leave a partial artifact set behind.
///
/// ## Errors
/// Returns the first load, validation, or write failure.
#[tracing::instrument(skip(args))]
pub fn run(args: &GenerateArgs) -> Result<()> {
    let locations = dataset::load_locations(&args.dataset.locations)?;
    validate_locations(&locations)?;

    let events = dataset::load_events(&args.dataset.events)?;
    validate_events(&events)?;

    let buckets = bucket_events(&events);
    tracing::info!(
        events = events.len(),
        locations = locations.len(),
        months = buckets.len(),
        "Dataset validated, writing artifacts"
    );

    write_artifacts(&args.out, &locations, &buckets)?;
    Ok(())
}
