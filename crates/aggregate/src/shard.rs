//! Sharded, parallel aggregation over a record slice.

use rayon::prelude::*;
use tracing::{debug, info};

use rainstat_record::YearRecord;

use crate::budget::{ErrorBudget, ErrorCollector};
use crate::config::AggregateConfig;
use crate::error::AggregateError;
use crate::partial::partial_aggregate;
use crate::reduce::GroupedReducer;
use crate::result::Reduced;

/// Aggregates records into per-year, per-season and global groups.
///
/// Records are split into contiguous shards of `config.shard_size()`. Each
/// shard is expanded and reduced on the rayon pool into its own
/// [`GroupedReducer`]; shard reducers are then merged. Tie-breaks use the
/// input record position, so the result is identical for every shard
/// size and thread count.
///
/// # Errors
///
/// - [`AggregateError::InvalidConfig`] if `config` fails validation.
/// - [`AggregateError::ErrorBudgetExceeded`] if more than
///   `config.max_malformed()` records have no month values.
/// - [`AggregateError::Stats`] on sum overflow.
pub fn aggregate(
    records: &[YearRecord],
    config: &AggregateConfig,
) -> Result<Reduced, AggregateError> {
    config.validate()?;
    let shard_size = config.shard_size();
    let budget = ErrorBudget::new(config.max_malformed());

    info!(
        n_records = records.len(),
        shard_size,
        n_shards = records.len().div_ceil(shard_size),
        "aggregating records"
    );

    let reducer = records
        .par_chunks(shard_size)
        .enumerate()
        .map(|(shard, chunk)| reduce_shard(shard, shard * shard_size, chunk, &budget))
        .try_reduce(GroupedReducer::new, GroupedReducer::merge)?;

    let reduced = reducer.finish();
    info!(
        n_years = reduced.yearly().len(),
        n_seasons = reduced.seasonal().len(),
        n_malformed = reduced.malformed().len(),
        "aggregation complete"
    );
    Ok(reduced)
}

fn reduce_shard(
    shard: usize,
    offset: usize,
    chunk: &[YearRecord],
    budget: &ErrorBudget,
) -> Result<GroupedReducer, AggregateError> {
    // Another shard already blew the budget; the run is failing anyway.
    if budget.is_exhausted() {
        return Err(AggregateError::ErrorBudgetExceeded {
            limit: budget_limit(budget),
            seen: budget.seen(),
        });
    }

    let mut errors = ErrorCollector::new(budget);
    let contributions = partial_aggregate(chunk, offset, &mut errors)?;

    let mut reducer = GroupedReducer::new();
    reducer.accept_all(contributions)?;
    reducer.count_records(chunk.len());
    debug!(
        shard,
        offset,
        n_records = chunk.len(),
        n_malformed = errors.len(),
        "shard reduced"
    );
    reducer.absorb_malformed(errors.into_records());
    Ok(reducer)
}

fn budget_limit(budget: &ErrorBudget) -> usize {
    budget.limit().unwrap_or(usize::MAX)
}
