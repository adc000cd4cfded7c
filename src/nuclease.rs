//! Core types for **nuclease systems** and **assembled guides**.
//!
//! This module holds the data model used across the crate. Parameter records
//! are `const`-constructible so the whole catalog lives in the binary as
//! static data.
//!
//! PAM geometry is an explicit tagged variant ([`PamSpec`]): Cas9-family
//! systems read their motif 3' of the protospacer, Cas12a-family systems 5'
//! of it, and Cas13-family systems have no PAM at all. Code dispatches by
//! exhaustive match on the variant, never by inspecting system names.

use core::fmt;

use crate::data::scaffolds::POLY_T_TERMINATOR;

/// Identifier for a supported nuclease system.
///
/// Discriminants follow the menu numbering of the original ordering
/// workflow (`1` = SpCas9 .. `6` = LwCas13a).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SystemId {
    SpCas9,
    SaCas9,
    FnCas12a,
    LbCas12a,
    LshCas13a,
    LwCas13a,
}

impl SystemId {
    /// All supported systems, in registry order.
    pub const ALL: [SystemId; 6] = [
        SystemId::SpCas9,
        SystemId::SaCas9,
        SystemId::FnCas12a,
        SystemId::LbCas12a,
        SystemId::LshCas13a,
        SystemId::LwCas13a,
    ];

    /// One-based menu number (`1`..`6`) accepted by [`crate::systems::lookup`].
    pub fn menu_number(self) -> u8 {
        self as u8 + 1
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::systems::by_id(*self).name)
    }
}

/// PAM recognition geometry of a system.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PamSpec {
    /// PAM sits 3' of the protospacer (Cas9 family). A forward-strand motif
    /// match yields the spacer upstream of it, separated by `gap` N bases.
    ThreePrime {
        motifs: &'static [&'static str],
        gap: usize,
    },
    /// PAM sits 5' of the protospacer (Cas12a family). A forward-strand
    /// motif match yields the spacer downstream of it.
    FivePrime {
        motifs: &'static [&'static str],
        gap: usize,
    },
    /// No PAM requirement (Cas13 family, RNA-targeting). Candidates are
    /// ranked by secondary-structure penalty instead.
    PamFree,
}

impl PamSpec {
    /// Forward-strand motif set; empty for [`PamSpec::PamFree`].
    pub fn motifs(&self) -> &'static [&'static str] {
        match self {
            PamSpec::ThreePrime { motifs, .. } | PamSpec::FivePrime { motifs, .. } => motifs,
            PamSpec::PamFree => &[],
        }
    }

    /// Motif length in nucleotides. All motifs of a system share one
    /// length, so this is derived rather than stored.
    pub fn pam_length(&self) -> usize {
        self.motifs().first().map_or(0, |m| m.len())
    }

    /// Intervening N bases between spacer and motif.
    pub fn gap(&self) -> usize {
        match self {
            PamSpec::ThreePrime { gap, .. } | PamSpec::FivePrime { gap, .. } => *gap,
            PamSpec::PamFree => 0,
        }
    }
}

/// Literature source for a system's scaffold sequence.
#[derive(Clone, Copy, Debug)]
pub struct Provenance {
    /// Citation the scaffold was transcribed from.
    pub citation: &'static str,
    /// Any helpful notes (PAM consensus, spacer-length rationale).
    pub notes: &'static str,
}

/// Immutable parameter record for one nuclease system.
#[derive(Clone, Copy, Debug)]
pub struct NucleaseSystem {
    /// Registry identifier.
    pub id: SystemId,
    /// Display name, e.g. `"SpCas9"`.
    pub name: &'static str,
    /// PAM geometry and motifs.
    pub pam: PamSpec,
    /// Spacer length in nucleotides.
    pub spacer_length: usize,
    /// Scaffold fused to every spacer.
    pub scaffold: &'static str,
    /// Terminator appended after the spacer; empty unless the system
    /// carries one (the Cas12a family does).
    pub terminator: &'static str,
    /// Where the scaffold sequence comes from.
    pub provenance: Provenance,
}

impl NucleaseSystem {
    /// Assemble a knockout-mode guide from a spacer.
    ///
    /// Cas9-family guides read spacer-then-scaffold; Cas12a-family guides
    /// read scaffold-then-spacer with the poly-T terminator; Cas13-family
    /// guides read scaffold-then-spacer with no tail.
    pub fn assemble(&self, spacer: &str) -> Guide {
        let sequence = match self.pam {
            PamSpec::ThreePrime { .. } => format!("{spacer}{}", self.scaffold),
            PamSpec::FivePrime { .. } => {
                format!("{}{spacer}{}", self.scaffold, self.terminator)
            }
            PamSpec::PamFree => format!("{}{spacer}", self.scaffold),
        };
        Guide {
            spacer: spacer.to_owned(),
            sequence,
        }
    }

    /// Assemble a tiled-mode guide from a window.
    ///
    /// Every system outside the Cas9 family takes the poly-T tail here —
    /// including Cas13 systems, whose knockout guides carry none.
    pub fn assemble_tiled(&self, window: &str) -> Guide {
        let sequence = match self.pam {
            PamSpec::ThreePrime { .. } => format!("{window}{}", self.scaffold),
            PamSpec::FivePrime { .. } | PamSpec::PamFree => {
                format!("{}{window}{POLY_T_TERMINATOR}", self.scaffold)
            }
        };
        Guide {
            spacer: window.to_owned(),
            sequence,
        }
    }
}

/// An assembled guide oligo: the target-matching spacer plus the system's
/// scaffold (and terminator where applicable). Immutable once built.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Guide {
    /// Target-matching portion as it appears in the final oligo.
    pub spacer: String,
    /// Full ready-to-order sequence.
    pub sequence: String,
}

impl fmt::Display for Guide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sequence)
    }
}
