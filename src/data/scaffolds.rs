//! Scaffold, terminator and primer-tail sequences for the supported systems.
//!
//! Sequences are uppercase DNA, embedded as `&'static str` constants and
//! transcribed verbatim from the cited publications. The Cas13 scaffolds are
//! given in the DNA alphabet of the ordering template (T, not U).

/// SpCas9 sgRNA scaffold. Hsu et al., *Nat Biotechnol* 2013.
pub const SPCAS9_SCAFFOLD: &str =
    "GTTTTAGAGCTAGAAATAGCAAGTTAAAATAAGGCTAGTCCGTTATCAACTTGAAAAAGTGGCACCGAGTCGGTGCTTTTTTT";

/// SaCas9 sgRNA scaffold. Ran et al., *Nature* 2015.
pub const SACAS9_SCAFFOLD: &str =
    "GTTTTAGAGCTAGAAATAGCAAGTTAAAATAAGGCTAGTCCGTTATCAACTTGAAAAAGTGGCACCGAGTCGGTGCTTTT";

/// FnCas12a crRNA scaffold. Zetsche et al., *Cell* 2015.
pub const FNCAS12A_SCAFFOLD: &str = "AATTTCTACTGTTGTAGAT";

/// LbCas12a crRNA scaffold. Vu et al., *Front Plant Sci* 2021.
pub const LBCAS12A_SCAFFOLD: &str = "TAATTTCTACTAAGTGTAGAT";

/// LshCas13a 5' scaffold. Bandaru et al., *Sci Rep* 2020.
pub const LSHCAS13A_SCAFFOLD: &str =
    "GTTTTAGAGCTAGAAATAGCAAGTTAAAATAAGGCTAGTCCGTTATCAACTTGAAAAAGTGGCACCGAGTCGGTG";

/// LwCas13a 5' scaffold. Gootenberg et al., *Science* 2017.
pub const LWCAS13A_SCAFFOLD: &str = "GGGGATTTAGACTACCCCAAAAACGAAGGGGACTAAAAC";

/// Poly-T terminator carried by Cas12a-family guides, and by every tiled
/// guide outside the Cas9 family.
pub const POLY_T_TERMINATOR: &str = "TTTTTT";

/// Forward primer tail: 5' hang plus SpeI recognition site.
pub const FWD_TAIL: &str = "CCATAACTAGT";

/// Reverse primer tail: 5' hang plus EcoRI recognition site.
pub const REV_TAIL: &str = "CTCAGGAATTC";

/// Backbone vector forward primer, seeded into every primer order sheet
/// ahead of the per-guide pairs.
pub const BACKBONE_FWD: &str = "TTTTTGAATTCTCTAGAGTCGACCTGCAGA";

/// Backbone vector reverse primer.
pub const BACKBONE_REV: &str = "CGATGACTAGTATTATACCTAGGACT";

#[cfg(test)]
mod alphabet_tests {
    use super::*;

    fn is_dna(s: &str) -> bool {
        s.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T'))
    }

    #[test]
    fn all_constants_are_uppercase_dna() {
        for s in [
            SPCAS9_SCAFFOLD,
            SACAS9_SCAFFOLD,
            FNCAS12A_SCAFFOLD,
            LBCAS12A_SCAFFOLD,
            LSHCAS13A_SCAFFOLD,
            LWCAS13A_SCAFFOLD,
            POLY_T_TERMINATOR,
            FWD_TAIL,
            REV_TAIL,
            BACKBONE_FWD,
            BACKBONE_REV,
        ] {
            assert!(is_dna(s), "non-DNA character in {s}");
        }
    }

    #[test]
    fn scaffold_lengths_match_published_sequences() {
        assert_eq!(SPCAS9_SCAFFOLD.len(), 83);
        assert_eq!(SACAS9_SCAFFOLD.len(), 80);
        assert_eq!(FNCAS12A_SCAFFOLD.len(), 19);
        assert_eq!(LBCAS12A_SCAFFOLD.len(), 21);
        assert_eq!(LSHCAS13A_SCAFFOLD.len(), 75);
        assert_eq!(LWCAS13A_SCAFFOLD.len(), 39);
    }

    #[test]
    fn primer_tails_are_eleven_nt() {
        assert_eq!(FWD_TAIL.len(), 11);
        assert_eq!(REV_TAIL.len(), 11);
    }
}
