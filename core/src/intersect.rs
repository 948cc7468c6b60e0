use crate::index::DocId;

/// Intersection of two ascending, duplicate-free doc-id lists.
///
/// Two advancing cursors, O(|a| + |b|): advance whichever cursor sees the
/// smaller value, emit and advance both on equality. The output is again
/// ascending and duplicate-free. Sortedness of the inputs is a
/// precondition; the result is unspecified for unsorted input.
pub fn intersect(a: &[DocId], b: &[DocId]) -> Vec<DocId> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            i += 1;
        } else if b[j] < a[i] {
            j += 1;
        } else {
            out.push(a[i]);
            i += 1;
            j += 1;
        }
    }
    out
}

/// Pairwise left-to-right intersection of any number of lists.
///
/// Short-circuits once an intermediate result is empty, since an empty
/// intersection can never grow back. Zero lists intersect to the empty
/// result, not to "all documents".
pub fn intersect_all(lists: &[&[DocId]]) -> Vec<DocId> {
    let Some((first, rest)) = lists.split_first() else {
        return Vec::new();
    };
    let mut acc = first.to_vec();
    for list in rest {
        if acc.is_empty() {
            break;
        }
        acc = intersect(&acc, list);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_lists() {
        assert_eq!(intersect(&[10, 20, 30], &[20, 30, 40]), vec![20, 30]);
    }

    #[test]
    fn commutative() {
        let a = [1, 3, 5, 7, 9];
        let b = [2, 3, 4, 7, 8];
        assert_eq!(intersect(&a, &b), intersect(&b, &a));
    }

    #[test]
    fn self_intersection_is_identity() {
        let a = [2, 4, 6, 8];
        assert_eq!(intersect(&a, &a), a.to_vec());
    }

    #[test]
    fn empty_operand_yields_empty() {
        assert_eq!(intersect(&[1, 2, 3], &[]), Vec::<DocId>::new());
        assert_eq!(intersect(&[], &[1, 2, 3]), Vec::<DocId>::new());
    }

    #[test]
    fn disjoint_lists() {
        assert_eq!(intersect(&[1, 3, 5], &[2, 4, 6]), Vec::<DocId>::new());
    }

    #[test]
    fn output_stays_sorted_and_unique() {
        let out = intersect(&[1, 2, 3, 50, 90, 100], &[2, 3, 40, 90, 100]);
        assert!(out.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn multiway_matches_pairwise() {
        let (a, b, c) = ([1u64, 2, 3, 4], [2u64, 3, 4, 5], [3u64, 4, 5, 6]);
        let pairwise = intersect(&intersect(&a, &b), &c);
        assert_eq!(intersect_all(&[&a, &b, &c]), pairwise);
        assert_eq!(pairwise, vec![3, 4]);
    }

    #[test]
    fn multiway_short_circuit_same_result() {
        // An empty middle list empties the result whether or not the
        // remaining lists get visited.
        let (a, c) = ([1u64, 2], [1u64, 2]);
        let b: [u64; 0] = [];
        assert_eq!(intersect_all(&[&a, &b, &c]), Vec::<DocId>::new());
    }

    #[test]
    fn zero_lists_is_empty_not_all_docs() {
        assert_eq!(intersect_all(&[]), Vec::<DocId>::new());
    }

    #[test]
    fn single_list_passes_through() {
        assert_eq!(intersect_all(&[&[10, 20, 30]]), vec![10, 20, 30]);
    }
}
