//! Structure-ranked window selection for PAM-free (Cas13-family) systems.
//!
//! RNA-targeting systems have no PAM to anchor on; targeting efficiency
//! instead favors regions with little secondary structure. Every window is
//! scored and the least-structured ones win.

use crate::dna::{hairpin_penalty, reverse_complement};
use crate::error::Result;
use crate::nuclease::{Guide, NucleaseSystem};

/// Score every stride-1 window of `spacer_length` across the target, rank
/// ascending by hairpin penalty (ties keep sequence order), and assemble the
/// first `count` windows.
///
/// Each selected window is reverse-complemented before assembly: the assay
/// targets the strand complementary to the scored window. A `count` past the
/// window total returns every window, ranked.
pub fn rank_by_structure(
    system: &NucleaseSystem,
    target: &str,
    count: usize,
) -> Result<Vec<Guide>> {
    let spacer_len = system.spacer_length;
    let Some(last) = target.len().checked_sub(spacer_len) else {
        return Ok(Vec::new());
    };

    let mut scored: Vec<(usize, u64)> = Vec::with_capacity(last + 1);
    for start in 0..=last {
        let penalty = hairpin_penalty(&target[start..start + spacer_len])?;
        scored.push((start, penalty));
    }
    // Stable sort: equally scored windows stay in left-to-right order.
    scored.sort_by_key(|&(_, penalty)| penalty);
    scored.truncate(count);

    scored
        .into_iter()
        .map(|(start, _)| {
            let spacer = reverse_complement(&target[start..start + spacer_len])?;
            Ok(system.assemble(&spacer))
        })
        .collect()
}
