#![forbid(unsafe_code)]
//! # guidechop
//!
//! CRISPR guide-RNA design engine: given a target DNA sequence, a nuclease
//! system and a requested count, find valid cut-site candidates and emit
//! ready-to-order oligos with the system's scaffold attached, plus matching
//! PCR primers and the amplified product.
//!
//! ## Highlights
//! - 🧬 **Six systems**: SpCas9, SaCas9, FnCas12a, LbCas12a, LshCas13a,
//!   LwCas13a, with per-system PAM geometry, spacer length, scaffold and
//!   terminator embedded as `&'static` data.
//! - 🧭 **Three generators**: strand-aware PAM scanning with a non-overlap
//!   guarantee, secondary-structure ranking for PAM-free systems, and
//!   fixed-stride tiling for screens.
//! - 🔁 **Deterministic**: every call is a pure computation over in-memory
//!   strings; batches parallelize one worker per target.
//!
//! ## Examples
//! ```rust
//! // Discover systems:
//! for s in guidechop::list_supported_systems() {
//!     println!("{} — {} nt spacer", s.name, s.spacer_length);
//! }
//! // Design knockout guides for a validated target:
//! let sys = guidechop::get_system("SpCas9").unwrap();
//! let target = "ATATATATATATATATATATATATATACTGACTGACTGACTGACTGAGGATATATATAT";
//! let guides = guidechop::design::guides_for(
//!     sys,
//!     target,
//!     guidechop::DesignMode::Knockout { count: 3 },
//! )
//! .unwrap();
//! assert_eq!(guides.len(), 1);
//! assert!(guides[0].sequence.starts_with("ACTGACTGACTGACTGACTG"));
//! // Order sheet reagents for a finished guide:
//! let primers = guidechop::primer_pair(&guides[0].sequence).unwrap();
//! assert!(primers.forward.starts_with("CCATAACTAGT"));
//! ```

pub mod data {
    pub mod scaffolds;
}
pub mod design;
pub mod dna;
pub mod error;
pub mod nuclease;
pub mod primer;
pub mod scan;
pub mod select;
pub mod systems;
pub mod tile;

pub use design::{design_batch, design_target, DesignMode, GuideDesign, TargetDesign, TargetSpec};
pub use error::Error;
pub use nuclease::{Guide, NucleaseSystem, PamSpec, SystemId};
pub use primer::{backbone_primers, primer_pair, PrimerPair};

/// Return the static registry of supported nuclease systems.
pub fn list_supported_systems() -> &'static [NucleaseSystem] {
    systems::SYSTEMS
}

/// Retrieve the full parameter record for a system name (case-insensitive)
/// or menu number `"1"`..`"6"`.
///
/// # Examples
/// ```rust
/// let k = guidechop::get_system("LbCas12a").unwrap();
/// assert_eq!(k.spacer_length, 23);
/// assert!(guidechop::get_system("MadCas7").is_err());
/// ```
pub fn get_system(identifier: &str) -> Result<&'static NucleaseSystem, Error> {
    systems::lookup(identifier)
}

/// Crate version string (from `CARGO_PKG_VERSION`).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod end_to_end_tests {
    use super::*;
    use crate::data::scaffolds::SPCAS9_SCAFFOLD;

    #[test]
    fn spcas9_single_site_full_design() {
        // One scannable NGG site deep enough in the target to clear the
        // spacing seed.
        let sys = get_system("SpCas9").unwrap();
        let target = TargetSpec {
            name: "demo".to_owned(),
            sequence: "ATATATATATATATATATATATATATACTGACTGACTGACTGACTGAGGATATATATAT".to_owned(),
        };
        let design = design_target(sys, &target, DesignMode::Knockout { count: 1 }).unwrap();
        assert_eq!(design.guides.len(), 1);
        let d = &design.guides[0];
        assert_eq!(
            d.guide.sequence,
            format!("ACTGACTGACTGACTGACTG{SPCAS9_SCAFFOLD}")
        );
        assert_eq!(d.primers.forward, "CCATAACTAGTACTGACTGACTGACT");
        assert_eq!(d.primers.reverse, "CTCAGGAATTCAAAAAAAGCACCGAC");
        assert_eq!(
            d.amplicon,
            "CCATAACTAGTACTGACTGACTGACTGACTGGTTTTAGAGCTAGAAATAGCAAGTTAAAATAAGGCTAGTCC\
             GTTATCAACTTGAAAAAGTGGCACCGAGCTCAGGAATTCAAAAAAAGCACCGAC"
        );
    }

    #[test]
    fn cas13_knockout_and_tiled_assemblies_differ() {
        let sys = get_system("LshCas13a").unwrap();
        let target = "A".repeat(40);
        let knockout =
            design::guides_for(sys, &target, DesignMode::Knockout { count: 1 }).unwrap();
        let tiled = design::guides_for(sys, &target, DesignMode::Tiled { spacing: 40 }).unwrap();
        // Knockout: scaffold + reverse-complemented window, no tail.
        assert_eq!(
            knockout[0].sequence,
            format!("{}{}", sys.scaffold, "T".repeat(24))
        );
        // Tiled: scaffold + forward window + poly-T tail.
        assert_eq!(
            tiled[0].sequence,
            format!("{}{}TTTTTT", sys.scaffold, "A".repeat(24))
        );
    }
}
