//! Seasons-per-player reduction
//!
//! Finds the player with the most distinct regular seasons. Players are
//! scanned in ascending sorted order and the winner only changes on a
//! strictly greater count, so ties go to the lexicographically first player.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Result, StatError};
use crate::loader::Record;

/// Select the player with the most distinct seasons
///
/// Returns the player id and the season count. Fails with `EmptyData` when
/// the filtered table has no rows.
pub fn player_with_most_seasons(records: &[Record]) -> Result<(String, usize)> {
    let mut seasons_by_player: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for record in records {
        seasons_by_player
            .entry(&record.player)
            .or_default()
            .insert(&record.season);
    }

    let mut best: Option<(&str, usize)> = None;
    for (player, seasons) in &seasons_by_player {
        // Strictly greater: first player in ascending order wins ties.
        if best.map_or(true, |(_, count)| seasons.len() > count) {
            best = Some((player, seasons.len()));
        }
    }

    match best {
        Some((player, count)) => {
            tracing::debug!(player, count, "selected player with most seasons");
            Ok((player.to_string(), count))
        }
        None => Err(StatError::EmptyData("no players after stage filter")),
    }
}
