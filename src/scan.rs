//! Strand-aware PAM scanning for Cas9- and Cas12a-family systems.
//!
//! The scan is a single left-to-right pass with two acceptance rules that
//! together guarantee non-overlapping spacers:
//! - a candidate is kept only when its recorded start exceeds the previously
//!   recorded one by more than `spacer_length` (signed comparison, seeded at
//!   0, so candidates recorded at or before `spacer_length` are skipped at
//!   the start of a scan);
//! - every acceptance advances the scan index an extra `spacer_length`.
//!
//! The recorded start is bookkeeping for the spacing comparison only. For
//! five-prime (Cas12a-family) systems it deliberately keeps the opposite
//! branch's formula, matching the behavior the primer sheets downstream were
//! validated against.

use crate::dna::reverse_complement;
use crate::error::Result;
use crate::nuclease::{Guide, NucleaseSystem, PamSpec};

/// Per-position outcome of the scan loop.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ScanState {
    /// Keep sliding one position at a time.
    Scanning,
    /// A spacer was accepted at this position; jump past it.
    Accepted,
}

/// Enumerate up to `count` non-overlapping spacer candidates for a
/// PAM-bearing system and assemble each into a guide.
///
/// Returns fewer than `count` guides when the sequence runs out of eligible
/// sites; that is a valid outcome, not an error. PAM-free systems have no
/// sites to scan and yield an empty list.
///
/// `target` must be validated uppercase ACGT (see
/// [`crate::dna::validate_target`]); the design layer enforces this before
/// calling in.
pub fn scan(system: &NucleaseSystem, target: &str, count: usize) -> Result<Vec<Guide>> {
    let (motifs, gap, five_prime) = match system.pam {
        PamSpec::ThreePrime { motifs, gap } => (motifs, gap, false),
        PamSpec::FivePrime { motifs, gap } => (motifs, gap, true),
        PamSpec::PamFree => return Ok(Vec::new()),
    };
    let rc_motifs = motifs
        .iter()
        .map(|m| reverse_complement(m))
        .collect::<Result<Vec<_>>>()?;
    let pam_len = system.pam.pam_length();
    let spacer_len = system.spacer_length;
    let len = target.len();

    let mut guides = Vec::new();
    // Signed: recorded starts go negative for five-prime forward matches
    // near the sequence head.
    let mut prev_start: i64 = 0;
    let mut current_start: i64 = 0;
    let mut i = 0usize;

    while i + pam_len < len {
        if guides.len() == count {
            return Ok(guides);
        }
        let pam = &target[i..i + pam_len];
        let forward = motifs.iter().any(|m| *m == pam);
        let reverse = rc_motifs.iter().any(|m| m == pam);

        let mut spacer: Option<&str> = None;
        if five_prime {
            // Forward motif: spacer downstream of the PAM.
            if forward && i + pam_len + gap + spacer_len <= len {
                spacer = Some(&target[i + pam_len + gap..i + pam_len + gap + spacer_len]);
                current_start = i as i64 - gap as i64 - spacer_len as i64;
            }
            // Reverse-complemented motif: spacer upstream.
            if spacer.is_none() && reverse && i >= spacer_len + gap {
                spacer = Some(&target[i - gap - spacer_len..i - gap]);
                current_start = (i + pam_len + gap) as i64;
            }
        } else {
            // Forward motif: spacer upstream of the PAM.
            if forward && i >= spacer_len + gap {
                spacer = Some(&target[i - gap - spacer_len..i - gap]);
                current_start = (i - gap - spacer_len) as i64;
            }
            // Reverse-complemented motif: spacer downstream.
            if spacer.is_none() && reverse && i + pam_len + gap + spacer_len <= len {
                spacer = Some(&target[i + pam_len + gap..i + pam_len + gap + spacer_len]);
                current_start = (i + pam_len + gap) as i64;
            }
        }
        i += 1;

        let state = match spacer {
            Some(s) if current_start - prev_start > spacer_len as i64 => {
                guides.push(system.assemble(s));
                ScanState::Accepted
            }
            _ => ScanState::Scanning,
        };
        if state == ScanState::Accepted {
            prev_start = current_start;
            i += spacer_len;
        }
    }
    Ok(guides)
}
