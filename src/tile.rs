//! Systematic tiling for screen-style designs.
//!
//! Tiling walks the whole target at a fixed stride with no PAM filtering and
//! no overlap policy: screens want coverage, not cut-site validity, so
//! overlapping and PAM-absent windows are emitted on purpose.

use crate::nuclease::{Guide, NucleaseSystem};

/// Emit one guide per window at offsets `0, spacing, 2*spacing, ..` while a
/// full window of `spacer_length` still fits.
///
/// Assembly follows [`NucleaseSystem::assemble_tiled`]: Cas9-family tiles
/// read window-then-scaffold, everything else reads
/// scaffold-then-window-then-poly-T.
///
/// # Panics
/// Panics if `spacing` is zero; a stride of zero is a caller contract
/// violation, and the CLI rejects it before the core runs.
pub fn tile(system: &NucleaseSystem, target: &str, spacing: usize) -> Vec<Guide> {
    assert!(spacing > 0, "tile spacing must be positive");
    let spacer_len = system.spacer_length;
    let mut guides = Vec::new();
    let mut i = 0;
    while i + spacer_len <= target.len() {
        guides.push(system.assemble_tiled(&target[i..i + spacer_len]));
        i += spacing;
    }
    guides
}
