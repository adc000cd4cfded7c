//! PCR primer and amplicon synthesis for finished guides.
//!
//! Both primers pair an 11-nt restriction-site tail with a 15-nt anchor
//! taken from one end of the guide; the amplicon splices the primers around
//! the guide interior with an asymmetric 15/14 trim that accounts for the
//! scaffold's fixed internal length. The trim arithmetic must be preserved
//! exactly for the amplified product to recircularize into the vector.

use crate::data::scaffolds::{BACKBONE_FWD, BACKBONE_REV, FWD_TAIL, REV_TAIL};
use crate::dna::reverse_complement;
use crate::error::{Error, Result};

/// Minimum guide length admitting the 15/14 interior trim.
pub const MIN_GUIDE_LEN: usize = 29;

/// A forward/reverse primer pair amplifying one guide.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimerPair {
    /// `FWD_TAIL` + the guide's first 15 nt.
    pub forward: String,
    /// `REV_TAIL` + the first 15 nt of the guide's reverse complement.
    pub reverse: String,
}

/// Derive the fixed-tail primer pair for a finished guide.
///
/// Fails with [`Error::SequenceTooShort`] when the guide is under 29 nt,
/// the floor for a non-empty anchor on both ends plus interior trimming.
pub fn primer_pair(guide: &str) -> Result<PrimerPair> {
    if guide.len() < MIN_GUIDE_LEN {
        return Err(Error::SequenceTooShort {
            len: guide.len(),
            min: MIN_GUIDE_LEN,
        });
    }
    let forward = format!("{FWD_TAIL}{}", &guide[..15]);
    let reverse = format!("{REV_TAIL}{}", &reverse_complement(guide)?[..15]);
    Ok(PrimerPair { forward, reverse })
}

/// PCR product for a guide and its primer pair: forward primer, guide
/// interior (15 nt trimmed from the 5' end, 14 from the 3' end), reverse
/// primer.
pub fn amplicon(guide: &str, primers: &PrimerPair) -> Result<String> {
    if guide.len() < MIN_GUIDE_LEN {
        return Err(Error::SequenceTooShort {
            len: guide.len(),
            min: MIN_GUIDE_LEN,
        });
    }
    Ok(format!(
        "{}{}{}",
        primers.forward,
        &guide[15..guide.len() - 14],
        primers.reverse
    ))
}

/// The fixed backbone vector primers seeded into every order sheet ahead of
/// the per-guide pairs.
pub fn backbone_primers() -> PrimerPair {
    PrimerPair {
        forward: BACKBONE_FWD.to_owned(),
        reverse: BACKBONE_REV.to_owned(),
    }
}
