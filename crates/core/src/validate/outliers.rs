// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Set difference shared by every check

use std::collections::BTreeSet;

/// Items of `candidates` that do not appear in `available`.
///
/// The result is sorted and free of duplicates.
pub fn outliers<T, A, C>(available: A, candidates: C) -> Vec<T>
where
    T: Ord,
    A: IntoIterator<Item = T>,
    C: IntoIterator<Item = T>,
{
    let available: BTreeSet<T> = available.into_iter().collect();
    candidates
        .into_iter()
        .filter(|candidate| !available.contains(candidate))
        .collect::<BTreeSet<T>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
#[path = "outliers_tests.rs"]
mod tests;
