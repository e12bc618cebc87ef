//! Per allele-pair and per-sample mutation statistics over ICGC mutation tables.
pub mod error;
pub mod io;
pub mod logging;
pub mod table;

pub use error::{Error, Result};
pub use table::MutationTable;

use std::collections::{HashMap, HashSet};
use table::{ICGC_MUTATION_ID, ICGC_SAMPLE_ID, MUTATED_FROM_ALLELE, MUTATED_TO_ALLELE};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PairCount {
    pub mutated_from_allele: String,
    pub mutated_to_allele: String,
    pub count_unique_icgc_mutation_ids: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SampleCount {
    pub icgc_sample_id: String,
    pub uniq_icgc_mutation_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ExtremumResult {
    pub icgc_sample_id: String,
    pub mutation_count: usize,
}

impl From<&SampleCount> for ExtremumResult {
    fn from(count: &SampleCount) -> Self {
        Self {
            icgc_sample_id: count.icgc_sample_id.clone(),
            mutation_count: count.uniq_icgc_mutation_count,
        }
    }
}

/// Number of distinct mutation ids for each (mutated_from_allele, mutated_to_allele) pair.
/// The output is sorted by pair, but callers should not rely on any order.
pub fn count_unique_icgc_mutations(table: &MutationTable) -> Result<Vec<PairCount>> {
    let from = table.column(MUTATED_FROM_ALLELE)?;
    let to = table.column(MUTATED_TO_ALLELE)?;
    let mutations = table.column(ICGC_MUTATION_ID)?;
    let mut groups: HashMap<_, HashSet<&str>> = HashMap::new();
    for ((from, to), mutation) in from.zip(to).zip(mutations) {
        groups.entry((from, to)).or_default().insert(mutation);
    }
    debug!("{} allele pairs in {} records", groups.len(), table.len());
    let mut counts: Vec<_> = groups
        .into_iter()
        .map(|((from, to), ids)| PairCount {
            mutated_from_allele: from.to_string(),
            mutated_to_allele: to.to_string(),
            count_unique_icgc_mutation_ids: ids.len(),
        })
        .collect();
    counts.sort_unstable_by(|a, b| {
        (&a.mutated_from_allele, &a.mutated_to_allele)
            .cmp(&(&b.mutated_from_allele, &b.mutated_to_allele))
    });
    Ok(counts)
}

/// Number of distinct mutation ids for each sample, highest count first.
/// Samples with equal counts are ordered by ascending sample id.
pub fn get_sorted_mutation_count(table: &MutationTable) -> Result<Vec<SampleCount>> {
    let samples = table.column(ICGC_SAMPLE_ID)?;
    let mutations = table.column(ICGC_MUTATION_ID)?;
    let mut groups: HashMap<_, HashSet<&str>> = HashMap::new();
    for (sample, mutation) in samples.zip(mutations) {
        groups.entry(sample).or_default().insert(mutation);
    }
    debug!("{} samples in {} records", groups.len(), table.len());
    let mut counts: Vec<_> = groups
        .into_iter()
        .map(|(sample, ids)| SampleCount {
            icgc_sample_id: sample.to_string(),
            uniq_icgc_mutation_count: ids.len(),
        })
        .collect();
    // Sample ids are unique, so this is a total order.
    counts.sort_unstable_by(|a, b| {
        b.uniq_icgc_mutation_count
            .cmp(&a.uniq_icgc_mutation_count)
            .then_with(|| a.icgc_sample_id.cmp(&b.icgc_sample_id))
    });
    Ok(counts)
}

/// Samples with the most and the fewest distinct mutations, as `(max, min)`.
///
/// Ties on either side go to the alphanumerically first sample id: the max is the head of
/// [`get_sorted_mutation_count`], the min is the first ranked sample carrying the
/// count of the tail.
pub fn get_max_and_min_icgc_mutation_count(
    table: &MutationTable,
) -> Result<(ExtremumResult, ExtremumResult)> {
    let ranked = get_sorted_mutation_count(table)?;
    let (head, tail) = match (ranked.first(), ranked.last()) {
        (Some(head), Some(tail)) => (head, tail),
        _ => return Err(Error::EmptyInput),
    };
    let min_count = tail.uniq_icgc_mutation_count;
    let min = ranked
        .iter()
        .find(|count| count.uniq_icgc_mutation_count == min_count)
        .unwrap_or(tail);
    Ok((ExtremumResult::from(head), ExtremumResult::from(min)))
}
