//! Identifier sequence discovery
//!
//! Devices of one type are usually numbered consecutively within a series.
//! Grouping codes by series and device and sorting their identifiers shows
//! which units are missing from a batch and which were recorded twice.

use crate::types::SyncCode;
use alloc::string::String;
use alloc::vec::Vec;
use hashbrown::HashMap;
use serde::Serialize;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// A hole in an identifier run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdentifierGap {
    /// Last identifier seen before the gap
    pub before: u16,

    /// First identifier seen after the gap
    pub after: u16,
}

impl IdentifierGap {
    /// Number of identifiers missing between `before` and `after`
    ///
    /// Zero when `after` does not lie beyond `before + 1`.
    pub fn missing(&self) -> u16 {
        self.after.saturating_sub(self.before).saturating_sub(1)
    }

    /// The missing identifiers themselves
    pub fn missing_identifiers(&self) -> impl Iterator<Item = u16> {
        self.before.saturating_add(1)..self.after
    }
}

/// All codes sharing one series and device
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceGroup {
    /// Series letter
    pub series: char,

    /// Device token
    pub device: String,

    /// Distinct identifiers, ascending
    pub identifiers: Vec<u16>,

    /// Identifiers seen more than once, ascending
    pub duplicates: Vec<u16>,

    /// Holes between consecutive identifiers
    pub gaps: Vec<IdentifierGap>,
}

impl SequenceGroup {
    /// Series and device, e.g. `ABTU`
    pub fn prefix(&self) -> String {
        let mut prefix = String::with_capacity(1 + self.device.len());
        prefix.push(self.series);
        prefix.push_str(&self.device);
        prefix
    }

    /// Lowest identifier in the group
    pub fn first(&self) -> Option<u16> {
        self.identifiers.first().copied()
    }

    /// Highest identifier in the group
    pub fn last(&self) -> Option<u16> {
        self.identifiers.last().copied()
    }

    /// Total identifiers missing across all gaps
    pub fn missing(&self) -> usize {
        self.gaps.iter().map(|g| usize::from(g.missing())).sum()
    }

    /// Whether the identifiers form one unbroken run
    pub fn is_contiguous(&self) -> bool {
        self.gaps.is_empty()
    }
}

/// Sequence analysis over a set of codes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SequenceReport {
    /// Groups in order of first appearance
    pub groups: Vec<SequenceGroup>,
}

/// Sequence statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SequenceStats {
    /// Number of series+device groups
    pub groups: usize,

    /// Distinct codes
    pub unique_codes: usize,

    /// Identifiers recorded more than once
    pub duplicates: usize,

    /// Number of gaps
    pub gaps: usize,

    /// Total identifiers missing across all gaps
    pub missing: usize,

    /// Percentage of each run's span that is present
    pub continuity: f64,
}

impl SequenceReport {
    /// Look up a group by series and device
    pub fn group(&self, series: char, device: &str) -> Option<&SequenceGroup> {
        self.groups
            .iter()
            .find(|g| g.series == series && g.device == device)
    }

    /// Summarize the report
    pub fn stats(&self) -> SequenceStats {
        let unique_codes: usize = self.groups.iter().map(|g| g.identifiers.len()).sum();
        let missing: usize = self.groups.iter().map(SequenceGroup::missing).sum();

        let continuity = if unique_codes == 0 {
            0.0
        } else {
            (unique_codes as f64 / (unique_codes + missing) as f64) * 100.0
        };

        SequenceStats {
            groups: self.groups.len(),
            unique_codes,
            duplicates: self.groups.iter().map(|g| g.duplicates.len()).sum(),
            gaps: self.groups.iter().map(|g| g.gaps.len()).sum(),
            missing,
            continuity,
        }
    }
}

/// Group codes by series and device and find gaps in each identifier run
///
/// This function:
/// 1. Buckets codes by `(series, device)`, keeping first-appearance order
/// 2. Sorts each bucket's identifiers numerically
/// 3. Separates out identifiers recorded more than once
/// 4. Reports every hole between consecutive identifiers
pub fn discover_sequences<'a, I>(codes: I) -> SequenceReport
where
    I: IntoIterator<Item = &'a SyncCode>,
{
    let mut order: Vec<(char, &'a str)> = Vec::new();
    let mut buckets: HashMap<(char, &'a str), Vec<u16>> = HashMap::new();

    for code in codes {
        let key = (code.series(), code.device());
        buckets
            .entry(key)
            .or_insert_with(|| {
                order.push(key);
                Vec::new()
            })
            .push(code.identifier_number());
    }

    #[cfg(feature = "logging")]
    debug!("Discovering sequences across {} groups", order.len());

    let groups = order
        .into_iter()
        .filter_map(|key| {
            let identifiers = buckets.remove(&key)?;
            Some(build_group(key.0, key.1, identifiers))
        })
        .collect();

    SequenceReport { groups }
}

fn build_group(series: char, device: &str, mut identifiers: Vec<u16>) -> SequenceGroup {
    identifiers.sort_unstable();

    let mut duplicates = Vec::new();
    identifiers.dedup_by(|next, kept| {
        let repeated = *next == *kept;
        if repeated && duplicates.last() != Some(&*kept) {
            duplicates.push(*kept);
        }
        repeated
    });

    let gaps: Vec<IdentifierGap> = identifiers
        .windows(2)
        .filter(|w| w[1] != w[0] + 1)
        .map(|w| IdentifierGap {
            before: w[0],
            after: w[1],
        })
        .collect();

    #[cfg(feature = "logging")]
    if !gaps.is_empty() || !duplicates.is_empty() {
        warn!(
            "{}{}: {} gaps, {} duplicated identifiers",
            series,
            device,
            gaps.len(),
            duplicates.len()
        );
    }

    SequenceGroup {
        series,
        device: String::from(device),
        identifiers,
        duplicates,
        gaps,
    }
}
