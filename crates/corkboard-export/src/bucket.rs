//! Month bucketing for the static export.

use std::collections::BTreeMap;

use corkboard_core::month::MonthKey;

use crate::dataset::DatasetEvent;

/// ## Summary
/// Partitions events into calendar-month buckets. An event appears,
/// unmodified, under every month its date span touches, December rolling
/// into January of the next year. Bucket keys iterate in calendar order;
/// within a bucket, events keep their dataset order.
#[must_use]
pub fn bucket_events(events: &[DatasetEvent]) -> BTreeMap<MonthKey, Vec<DatasetEvent>> {
    let mut buckets: BTreeMap<MonthKey, Vec<DatasetEvent>> = BTreeMap::new();
    for event in events {
        for month in MonthKey::span(event.start_date, event.end_date) {
            buckets.entry(month).or_default().push(event.clone());
        }
    }
    buckets
}
