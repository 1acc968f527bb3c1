//! Partitioning of records into ordered buckets.
//!
//! Buckets keep records in the order they were given and keys in the order
//! they were first seen. Nothing is sorted here except weekly groups, which
//! come out most recent week first.

use super::calendar::{day_key_of, week_end};
use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use std::hash::Hash;

/// Records sharing a key, with an optional aggregate.
///
/// `A = ()` stands for "no aggregate".
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket<T, A = ()> {
    /// In input order
    pub items: Vec<T>,
    pub aggregate: A,
}

/// Buckets in first-seen key order.
pub type Groups<K, T, A = ()> = IndexMap<K, Bucket<T, A>>;

/// Records of one Monday-to-Sunday week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket<T, V> {
    /// ISO week number (weeks start on Monday, week 1 holds January 4th).
    pub week: u32,

    /// Monday
    pub start: NaiveDate,

    /// Sunday
    pub end: NaiveDate,
    pub items: Vec<T>,

    /// Computed once over `items`
    pub total: V,
}

/// Week buckets keyed by their Monday, most recent first.
pub type WeeklyGroups<T, V> = IndexMap<String, WeekBucket<T, V>>;

/// Partitions records by `key_of` without aggregating.
///
/// Every record lands in exactly one bucket and concatenating the buckets in
/// key order gives back the input in its original order.
pub fn group<T, K, F>(records: impl IntoIterator<Item = T>, key_of: F) -> Groups<K, T>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    group_with(records, key_of, |_| ())
}

/// Groups records and attaches `aggregate(bucket_items)` to every bucket.
pub fn group_with<T, K, A, F, G>(records: impl IntoIterator<Item = T>, key_of: F, aggregate: G) -> Groups<K, T, A>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
    G: Fn(&[T]) -> A,
{
    partition(records, key_of)
        .into_iter()
        .map(|(key, items)| {
            let aggregate = aggregate(&items);
            (key, Bucket { items, aggregate })
        })
        .collect()
}

/// Groups records by the Monday returned by `week_start_of` and totals each week.
///
/// Keys are `YYYY-MM-DD` of that Monday. Weeks are ordered most recent first
/// whatever the input order.
pub fn group_by_weeks<T, F, G, V>(records: impl IntoIterator<Item = T>, week_start_of: F, total: G) -> WeeklyGroups<T, V>
where
    F: Fn(&T) -> NaiveDate,
    G: Fn(&[T]) -> V,
{
    let mut weeks: Vec<(NaiveDate, Vec<T>)> = partition(records, week_start_of).into_iter().collect();
    weeks.sort_by(|(a, _), (b, _)| b.cmp(a));

    weeks
        .into_iter()
        .map(|(start, items)| {
            let bucket = WeekBucket {
                week: start.iso_week().week(),
                start,
                end: week_end(start),
                total: total(&items),
                items,
            };
            (day_key_of(start), bucket)
        })
        .collect()
}

fn partition<T, K, F>(records: impl IntoIterator<Item = T>, key_of: F) -> IndexMap<K, Vec<T>>
where
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut grouped: IndexMap<K, Vec<T>> = IndexMap::new();
    for record in records {
        grouped.entry(key_of(&record)).or_default().push(record);
    }
    grouped
}
