//! Per-target orchestration: validate the sequence, generate candidate
//! guides for the requested mode, then synthesize a primer pair and amplicon
//! for each guide.
//!
//! Every call is stateless and side-effect-free over read-only catalog data,
//! so batches fan out one worker per target with no shared mutable state.

use rayon::prelude::*;

use crate::dna::validate_target;
use crate::error::Result;
use crate::nuclease::{Guide, NucleaseSystem, PamSpec};
use crate::primer::{amplicon, primer_pair, PrimerPair};
use crate::{scan, select, tile};

/// Experiment mode, mapping the `(mode, parameter)` pair of the public
/// contract.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DesignMode {
    /// Up to `count` knockout guides: PAM scan for PAM-bearing systems,
    /// structure ranking for PAM-free ones.
    Knockout { count: usize },
    /// Systematic tiles every `spacing` nt across the target.
    Tiled { spacing: usize },
}

/// A named input sequence.
#[derive(Clone, Debug)]
pub struct TargetSpec {
    /// Label carried into primer names (`{name}_gRNA{x}_fwd`).
    pub name: String,
    /// Uppercase ACGT target, at least 30 nt.
    pub sequence: String,
}

/// One guide with its synthesized reagents.
#[derive(Clone, Debug)]
pub struct GuideDesign {
    pub guide: Guide,
    pub primers: PrimerPair,
    pub amplicon: String,
}

/// All designs for one target, in generation order.
#[derive(Clone, Debug)]
pub struct TargetDesign {
    pub name: String,
    pub guides: Vec<GuideDesign>,
}

/// Generate raw guides for one system/mode combination.
///
/// Validates the target, then dispatches on the system's PAM geometry and
/// the mode. Fewer guides than requested is a valid outcome.
pub fn guides_for(system: &NucleaseSystem, target: &str, mode: DesignMode) -> Result<Vec<Guide>> {
    validate_target(target)?;
    match mode {
        DesignMode::Knockout { count } => match system.pam {
            PamSpec::PamFree => select::rank_by_structure(system, target, count),
            PamSpec::ThreePrime { .. } | PamSpec::FivePrime { .. } => {
                scan::scan(system, target, count)
            }
        },
        DesignMode::Tiled { spacing } => Ok(tile::tile(system, target, spacing)),
    }
}

/// Design one target end to end: guides, then primers and amplicon per
/// guide.
pub fn design_target(
    system: &NucleaseSystem,
    target: &TargetSpec,
    mode: DesignMode,
) -> Result<TargetDesign> {
    let guides = guides_for(system, &target.sequence, mode)?;
    let mut designs = Vec::with_capacity(guides.len());
    for guide in guides {
        let primers = primer_pair(&guide.sequence)?;
        let amplicon = amplicon(&guide.sequence, &primers)?;
        designs.push(GuideDesign {
            guide,
            primers,
            amplicon,
        });
    }
    Ok(TargetDesign {
        name: target.name.clone(),
        guides: designs,
    })
}

/// Design many targets in parallel. `threads = None` uses all logical
/// cores; results come back in input order.
///
/// A dedicated pool keeps the batch from contending with any global pool
/// the caller runs; if one cannot be built the batch falls back to the
/// default pool.
pub fn design_batch(
    system: &NucleaseSystem,
    targets: &[TargetSpec],
    mode: DesignMode,
    threads: Option<usize>,
) -> Result<Vec<TargetDesign>> {
    let n = threads.unwrap_or_else(num_cpus::get).max(1);
    let run = || {
        targets
            .par_iter()
            .map(|t| design_target(system, t, mode))
            .collect::<Result<Vec<_>>>()
    };
    match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
        Ok(pool) => pool.install(run),
        Err(_) => run(),
    }
}

#[cfg(test)]
mod design_tests {
    use super::*;
    use crate::systems::by_id;
    use crate::SystemId;

    const KNOCKOUT_TARGET: &str =
        "ATATATATATATATATATATATATATACTGACTGACTGACTGACTGAGGATATATATAT";

    #[test]
    fn knockout_design_yields_guides_with_reagents() {
        let sys = by_id(SystemId::SpCas9);
        let target = TargetSpec {
            name: "tp53".to_owned(),
            sequence: KNOCKOUT_TARGET.to_owned(),
        };
        let design = design_target(sys, &target, DesignMode::Knockout { count: 4 }).unwrap();
        assert_eq!(design.name, "tp53");
        assert_eq!(design.guides.len(), 1);
        let d = &design.guides[0];
        assert_eq!(d.guide.spacer, "ACTGACTGACTGACTGACTG");
        assert_eq!(d.primers.forward, "CCATAACTAGTACTGACTGACTGACT");
        // Amplicon = forward + interior + reverse.
        let interior = &d.guide.sequence[15..d.guide.sequence.len() - 14];
        assert_eq!(
            d.amplicon,
            format!("{}{}{}", d.primers.forward, interior, d.primers.reverse)
        );
    }

    #[test]
    fn pam_free_knockout_routes_through_the_selector() {
        let sys = by_id(SystemId::LshCas13a);
        let target = format!("GCGCGCAAAATTTT{}", "A".repeat(26));
        let guides = guides_for(sys, &target, DesignMode::Knockout { count: 1 }).unwrap();
        assert_eq!(guides.len(), 1);
        assert_eq!(guides[0].spacer, "TTTTTTTTTTTTTTTTTTTAAAAT");
    }

    #[test]
    fn tiled_design_walks_the_target() {
        let sys = by_id(SystemId::SpCas9);
        let target = TargetSpec {
            name: "screen".to_owned(),
            sequence: "ACGT".repeat(15),
        };
        let design = design_target(sys, &target, DesignMode::Tiled { spacing: 20 }).unwrap();
        // floor((60 - 20) / 20) + 1 = 3 tiles.
        assert_eq!(design.guides.len(), 3);
    }

    #[test]
    fn invalid_targets_are_rejected_before_any_work() {
        let sys = by_id(SystemId::SpCas9);
        assert_eq!(
            guides_for(sys, &"acgt".repeat(10), DesignMode::Knockout { count: 1 }).unwrap_err(),
            crate::Error::InvalidBase('a')
        );
        assert_eq!(
            guides_for(sys, "ACGTACGT", DesignMode::Knockout { count: 1 }).unwrap_err(),
            crate::Error::SequenceTooShort { len: 8, min: 30 }
        );
    }

    #[test]
    fn batch_results_keep_input_order_and_match_sequential() {
        let sys = by_id(SystemId::SpCas9);
        let targets: Vec<TargetSpec> = (0..6)
            .map(|k| TargetSpec {
                name: format!("gene{k}"),
                sequence: KNOCKOUT_TARGET.to_owned(),
            })
            .collect();
        let mode = DesignMode::Knockout { count: 2 };
        let batch = design_batch(sys, &targets, mode, Some(2)).unwrap();
        assert_eq!(batch.len(), 6);
        for (k, design) in batch.iter().enumerate() {
            let solo = design_target(sys, &targets[k], mode).unwrap();
            assert_eq!(design.name, format!("gene{k}"));
            assert_eq!(design.guides.len(), solo.guides.len());
            assert_eq!(design.guides[0].amplicon, solo.guides[0].amplicon);
        }
    }
}
