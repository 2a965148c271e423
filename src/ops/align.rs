//! Residue-offset mapping between a canonical sequence and the as-modeled
//! structure sequence.
//!
//! Structures are frequently modeled from constructs whose numbering drifts from
//! the canonical sequence (truncations, point mutations, cloning artifacts). A
//! global pairwise alignment identifies the positions where the two sequences
//! disagree, keyed by the residue number in the modeled sequence's own
//! numbering so the result can be applied directly to structure residue ids.

use bio::alignment::pairwise::Aligner;
use bio::alignment::AlignmentOperation;
use std::collections::BTreeMap;

const GAP_OPEN: i32 = -5;
const GAP_EXTEND: i32 = -1;

/// A single disagreement between the canonical and modeled sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Expected residue at this position in the canonical sequence.
    pub from: char,
    /// Residue actually observed in the modeled sequence.
    pub to: char,
}

/// Aligns the two sequences globally and returns the mismatch map.
///
/// Keys are 1-based positions in the modeled sequence's original (pre-alignment)
/// numbering. Positions where either side is a gap are never recorded:
/// insertions and deletions are not mismatches under this contract. Identical
/// sequences produce an empty map.
pub fn diff(canonical: &str, modeled: &str) -> BTreeMap<usize, Mismatch> {
    let alignment = align(canonical, modeled);

    let canonical = canonical.as_bytes();
    let modeled = modeled.as_bytes();

    let mut mismatches = BTreeMap::new();
    let mut ci = 0usize;
    let mut mi = 0usize;

    for op in &alignment.operations {
        match op {
            AlignmentOperation::Match => {
                ci += 1;
                mi += 1;
            }
            AlignmentOperation::Subst => {
                mismatches.insert(
                    mi + 1,
                    Mismatch {
                        from: canonical[ci] as char,
                        to: modeled[mi] as char,
                    },
                );
                ci += 1;
                mi += 1;
            }
            // Gap in the modeled sequence: only the canonical side advances.
            AlignmentOperation::Ins => ci += 1,
            // Gap in the canonical sequence: only the modeled side advances.
            AlignmentOperation::Del => mi += 1,
            _ => {}
        }
    }

    mismatches
}

/// Returns the two gap-padded aligned strings (canonical first).
pub fn aligned_strings(canonical: &str, modeled: &str) -> (String, String) {
    let alignment = align(canonical, modeled);

    let canonical = canonical.as_bytes();
    let modeled = modeled.as_bytes();

    let mut aligned_c = String::new();
    let mut aligned_m = String::new();
    let mut ci = 0usize;
    let mut mi = 0usize;

    for op in &alignment.operations {
        match op {
            AlignmentOperation::Match | AlignmentOperation::Subst => {
                aligned_c.push(canonical[ci] as char);
                aligned_m.push(modeled[mi] as char);
                ci += 1;
                mi += 1;
            }
            AlignmentOperation::Ins => {
                aligned_c.push(canonical[ci] as char);
                aligned_m.push('-');
                ci += 1;
            }
            AlignmentOperation::Del => {
                aligned_c.push('-');
                aligned_m.push(modeled[mi] as char);
                mi += 1;
            }
            _ => {}
        }
    }

    (aligned_c, aligned_m)
}

fn align(canonical: &str, modeled: &str) -> bio::alignment::Alignment {
    let score = |a: u8, b: u8| if a == b { 1i32 } else { -1i32 };
    let mut aligner =
        Aligner::with_capacity(canonical.len(), modeled.len(), GAP_OPEN, GAP_EXTEND, &score);
    aligner.global(canonical.as_bytes(), modeled.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_identical_sequences_is_empty() {
        assert!(diff("MKVLLT", "MKVLLT").is_empty());
        assert!(diff("", "").is_empty());
        assert!(diff("A", "A").is_empty());
    }

    #[test]
    fn diff_single_trailing_mismatch_is_one_based() {
        let mismatches = diff("MKV", "MKA");

        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[&3], Mismatch { from: 'V', to: 'A' });
    }

    #[test]
    fn diff_internal_mismatch_reports_correct_position() {
        let mismatches = diff("MKVLT", "MAVLT");

        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[&2], Mismatch { from: 'K', to: 'A' });
    }

    #[test]
    fn diff_never_records_gap_positions() {
        // Modeled sequence is the canonical one with an internal deletion;
        // the alignment inserts a gap, which must not appear as a mismatch.
        let mismatches = diff("MKVLTEG", "MKVTEG");

        assert!(mismatches.is_empty());
    }

    #[test]
    fn diff_positions_use_modeled_numbering_after_gap() {
        // Canonical MKVLTEG vs modeled MKVTEA: L deleted, final G observed as A.
        // The mismatch sits at modeled position 6, not canonical position 7.
        let mismatches = diff("MKVLTEG", "MKVTEA");

        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[&6], Mismatch { from: 'G', to: 'A' });
    }

    #[test]
    fn diff_handles_modeled_insertion() {
        // Modeled carries an extra residue the canonical lacks; the insertion
        // itself is not a mismatch and downstream positions stay modeled-based.
        let mismatches = diff("MKVTE", "MKVLTE");

        assert!(mismatches.is_empty());
    }

    #[test]
    fn diff_multiple_mismatches_in_order() {
        let mismatches = diff("AAAA", "ATAT");

        let keys: Vec<_> = mismatches.keys().copied().collect();
        assert_eq!(keys, vec![2, 4]);
        assert_eq!(mismatches[&2], Mismatch { from: 'A', to: 'T' });
        assert_eq!(mismatches[&4], Mismatch { from: 'A', to: 'T' });
    }

    #[test]
    fn aligned_strings_are_equal_length() {
        let (c, m) = aligned_strings("MKVLTEG", "MKVTEG");

        assert_eq!(c.len(), m.len());
        assert_eq!(c, "MKVLTEG");
        assert_eq!(m, "MKV-TEG");
    }

    #[test]
    fn aligned_strings_identity_has_no_gaps() {
        let (c, m) = aligned_strings("MKV", "MKV");

        assert_eq!(c, "MKV");
        assert_eq!(m, "MKV");
    }
}
