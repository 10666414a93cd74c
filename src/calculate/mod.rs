//! Aggregation of match records into the country summary.
//!
//! Counts each country separately in the winner and runner-up columns, then
//! outer-joins the two count series on country name:
//! - winners come first, most wins first
//! - countries that only ever finished second follow, most runner-ups first
//! - ties keep the order in which the country first appears

use std::collections::{HashMap, HashSet};

use crate::models::{CountryStats, CountrySummary, MatchRecord};

/// Count occurrences of each name, most frequent first.
///
/// The sort is stable, so equal counts stay in first-appearance order.
pub fn value_counts<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<(&'a str, u32)> {
    let mut counts: Vec<(&str, u32)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for name in names {
        match index.get(name) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(name, counts.len());
                counts.push((name, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Outer-join win and runner-up counts, filling missing sides with zero.
pub fn outer_join(wins: &[(&str, u32)], runner_ups: &[(&str, u32)]) -> CountrySummary {
    let runner_up_by_country: HashMap<&str, u32> = runner_ups.iter().copied().collect();

    let mut rows: Vec<CountryStats> = wins
        .iter()
        .map(|&(country, w)| {
            let r = runner_up_by_country.get(country).copied().unwrap_or(0);
            CountryStats::new(country, w, r)
        })
        .collect();

    let winners: HashSet<&str> = wins.iter().map(|&(c, _)| c).collect();
    rows.extend(
        runner_ups
            .iter()
            .filter(|(country, _)| !winners.contains(country))
            .map(|&(country, r)| CountryStats::new(country, 0, r)),
    );

    CountrySummary::from_rows(rows)
}

/// Build the country summary for a set of finals.
pub fn summarize(records: &[MatchRecord]) -> CountrySummary {
    let wins = value_counts(records.iter().map(|r| r.winner.as_str()));
    let runner_ups = value_counts(records.iter().map(|r| r.runner_up.as_str()));
    outer_join(&wins, &runner_ups)
}

/// Highest win count among `rows`, zero when empty.
pub fn max_wins(rows: &[CountryStats]) -> u32 {
    rows.iter().map(|r| r.wins).max().unwrap_or(0)
}
