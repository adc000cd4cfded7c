//! Registry mapping system identifiers to their parameter records.
//!
//! One record per supported system; the table is process-wide, read-only and
//! safe for unsynchronized concurrent reads.

use crate::data::scaffolds::{
    FNCAS12A_SCAFFOLD, LBCAS12A_SCAFFOLD, LSHCAS13A_SCAFFOLD, LWCAS13A_SCAFFOLD, POLY_T_TERMINATOR,
    SACAS9_SCAFFOLD, SPCAS9_SCAFFOLD,
};
use crate::error::Error;
use crate::nuclease::{NucleaseSystem, PamSpec, Provenance, SystemId};

/// The six supported systems, ordered by menu number.
pub const SYSTEMS: &[NucleaseSystem] = &[
    NucleaseSystem {
        id: SystemId::SpCas9,
        name: "SpCas9",
        pam: PamSpec::ThreePrime {
            motifs: &["GG"],
            gap: 1,
        },
        spacer_length: 20,
        scaffold: SPCAS9_SCAFFOLD,
        terminator: "",
        provenance: Provenance {
            citation: "Hsu et al., Nat Biotechnol 2013",
            notes: "5'-NGG PAM; 20-nt spacer immediately upstream of the PAM.",
        },
    },
    NucleaseSystem {
        id: SystemId::SaCas9,
        name: "SaCas9",
        pam: PamSpec::ThreePrime {
            motifs: &["GAA", "GAG", "GGA", "GGG"],
            gap: 2,
        },
        spacer_length: 22,
        scaffold: SACAS9_SCAFFOLD,
        terminator: "",
        provenance: Provenance {
            citation: "Ran et al., Nature 2015",
            notes: "5'-NNGRR PAM (R = A/G); 22-nt spacer, midpoint of the efficient 21-23 range.",
        },
    },
    NucleaseSystem {
        id: SystemId::FnCas12a,
        name: "FnCas12a",
        pam: PamSpec::FivePrime {
            motifs: &["TT"],
            gap: 1,
        },
        spacer_length: 18,
        scaffold: FNCAS12A_SCAFFOLD,
        terminator: POLY_T_TERMINATOR,
        provenance: Provenance {
            citation: "Zetsche et al., Cell 2015",
            notes: "5'-TTN PAM upstream of the protospacer; 18 nt is the in-vitro cleavage minimum.",
        },
    },
    NucleaseSystem {
        id: SystemId::LbCas12a,
        name: "LbCas12a",
        pam: PamSpec::FivePrime {
            motifs: &["TTTA", "TTTC", "TTTG"],
            gap: 0,
        },
        spacer_length: 23,
        scaffold: LBCAS12A_SCAFFOLD,
        terminator: POLY_T_TERMINATOR,
        provenance: Provenance {
            citation: "Vu et al., Front Plant Sci 2021",
            notes: "TTTV PAM (V = A/C/G) directly upstream of the protospacer; 23-nt spacer.",
        },
    },
    NucleaseSystem {
        id: SystemId::LshCas13a,
        name: "LshCas13a",
        pam: PamSpec::PamFree,
        spacer_length: 24,
        scaffold: LSHCAS13A_SCAFFOLD,
        terminator: "",
        provenance: Provenance {
            citation: "Bandaru et al., Sci Rep 2020",
            notes: "RNA-targeting, no PAM; 24-nt spacer, midpoint of the efficient 20-28 range.",
        },
    },
    NucleaseSystem {
        id: SystemId::LwCas13a,
        name: "LwCas13a",
        pam: PamSpec::PamFree,
        spacer_length: 28,
        scaffold: LWCAS13A_SCAFFOLD,
        terminator: "",
        provenance: Provenance {
            citation: "Gootenberg et al., Science 2017",
            notes: "RNA-targeting, no PAM; 28-nt spacer.",
        },
    },
];

/// Fetch a system record by enum id. Infallible: the registry covers every
/// [`SystemId`] in discriminant order.
pub fn by_id(id: SystemId) -> &'static NucleaseSystem {
    &SYSTEMS[id as usize]
}

/// Resolve a system identifier: a registry name (case-insensitive) or a
/// menu number `"1"`..`"6"`.
///
/// # Examples
/// ```
/// assert_eq!(guidechop::systems::lookup("spcas9").unwrap().name, "SpCas9");
/// assert_eq!(guidechop::systems::lookup("4").unwrap().name, "LbCas12a");
/// assert!(guidechop::systems::lookup("Cas14").is_err());
/// ```
pub fn lookup(identifier: &str) -> Result<&'static NucleaseSystem, Error> {
    if let Ok(n) = identifier.parse::<usize>() {
        return match n {
            1..=6 => Ok(&SYSTEMS[n - 1]),
            _ => Err(Error::UnknownSystem(identifier.to_owned())),
        };
    }
    SYSTEMS
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(identifier))
        .ok_or_else(|| Error::UnknownSystem(identifier.to_owned()))
}

#[cfg(test)]
mod registry_tests {
    use super::*;
    use crate::data::scaffolds::*;

    #[test]
    fn registry_order_matches_discriminants() {
        for (i, sys) in SYSTEMS.iter().enumerate() {
            assert_eq!(sys.id as usize, i);
            assert_eq!(by_id(sys.id).name, sys.name);
        }
    }

    #[test]
    fn parameter_table_is_exact() {
        let sp = by_id(SystemId::SpCas9);
        assert_eq!(sp.pam.motifs(), &["GG"]);
        assert_eq!((sp.pam.pam_length(), sp.pam.gap(), sp.spacer_length), (2, 1, 20));
        assert_eq!(sp.scaffold, SPCAS9_SCAFFOLD);
        assert_eq!(sp.terminator, "");

        let sa = by_id(SystemId::SaCas9);
        assert_eq!(sa.pam.motifs(), &["GAA", "GAG", "GGA", "GGG"]);
        assert_eq!((sa.pam.pam_length(), sa.pam.gap(), sa.spacer_length), (3, 2, 22));
        assert_eq!(sa.scaffold, SACAS9_SCAFFOLD);

        let fncas = by_id(SystemId::FnCas12a);
        assert_eq!(fncas.pam.motifs(), &["TT"]);
        assert_eq!((fncas.pam.pam_length(), fncas.pam.gap(), fncas.spacer_length), (2, 1, 18));
        assert_eq!(fncas.terminator, "TTTTTT");

        let lb = by_id(SystemId::LbCas12a);
        assert_eq!(lb.pam.motifs(), &["TTTA", "TTTC", "TTTG"]);
        assert_eq!((lb.pam.pam_length(), lb.pam.gap(), lb.spacer_length), (4, 0, 23));
        assert_eq!(lb.terminator, "TTTTTT");

        let lsh = by_id(SystemId::LshCas13a);
        assert_eq!(lsh.pam, PamSpec::PamFree);
        assert_eq!(lsh.spacer_length, 24);
        assert_eq!(lsh.terminator, "");

        let lw = by_id(SystemId::LwCas13a);
        assert_eq!(lw.pam, PamSpec::PamFree);
        assert_eq!(lw.spacer_length, 28);
    }

    #[test]
    fn every_motif_shares_its_system_pam_length() {
        for sys in SYSTEMS {
            for motif in sys.pam.motifs() {
                assert_eq!(motif.len(), sys.pam.pam_length(), "{}", sys.name);
                assert!(motif.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T')));
            }
        }
    }

    #[test]
    fn lookup_accepts_names_and_menu_numbers() {
        assert_eq!(lookup("SpCas9").unwrap().id, SystemId::SpCas9);
        assert_eq!(lookup("lshcas13a").unwrap().id, SystemId::LshCas13a);
        assert_eq!(lookup("1").unwrap().id, SystemId::SpCas9);
        assert_eq!(lookup("6").unwrap().id, SystemId::LwCas13a);
    }

    #[test]
    fn lookup_rejects_unknown_identifiers() {
        for bad in ["0", "7", "Cas9", "SpCas", ""] {
            assert_eq!(lookup(bad).unwrap_err(), Error::UnknownSystem(bad.to_owned()));
        }
    }
}
