//! Enumeration of all set partitions of {0,..,n-1} in restricted growth
//! string order.

/// Calls `visit` once for every partition of the index set {0,..,n-1},
/// encoded as an assignment of a block number to each index, starting from
/// the all-zero (single block) partition. Visits exactly Bell(n) partitions.
///
/// If `visit` returns false the enumeration stops immediately and false is
/// returned; exhausting all partitions returns true. The slice passed to
/// `visit` is a reused buffer, only valid for the duration of the call.
pub fn enumerate_set_partitions<F>(n: usize, mut visit: F) -> bool
where
    F: FnMut(&[usize]) -> bool,
{
    // s[i] is the block of item i, m[i] the largest block among s[i..]
    let mut s = vec![0usize; n];
    let mut m = vec![0usize; n];

    if !visit(&s) {
        return false;
    }
    if n == 0 {
        return true;
    }

    loop {
        // advance s, carrying whenever a digit exceeds its running maximum
        let mut i = 0;
        s[0] += 1;
        while i < n - 1 && s[i] > m[i + 1] + 1 {
            s[i] = 0;
            i += 1;
            s[i] += 1;
        }

        // a carry into the last digit means every partition has been seen
        if i == n - 1 {
            break;
        }

        if s[i] > m[i] {
            m[i] = s[i];
        }
        for j in 0..i {
            m[j] = m[i];
        }

        if !visit(&s) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;

    const BELL: [usize; 10] = [1, 1, 2, 5, 15, 52, 203, 877, 4140, 21147];

    #[test]
    fn test_visits_bell_n_partitions() {
        for (n, &bell) in BELL.iter().enumerate() {
            let mut count = 0;
            assert!(enumerate_set_partitions(n, |_| {
                count += 1;
                true
            }));
            assert_eq!(count, bell, "wrong partition count for n = {}", n);
        }
    }

    #[test]
    fn test_partitions_are_distinct_and_well_formed() {
        for n in 0..=7 {
            let mut seen = HashSet::new();
            enumerate_set_partitions(n, |blocks| {
                // each digit exceeds the maximum of the later digits by at
                // most one, and the last digit is always zero
                let mut max_after = 0;
                for i in (0..n).rev() {
                    if i == n - 1 {
                        assert_eq!(blocks[i], 0);
                    } else {
                        assert!(blocks[i] <= max_after + 1);
                    }
                    max_after = max_after.max(blocks[i]);
                }
                assert!(seen.insert(blocks.to_vec()), "duplicate partition");
                true
            });
            assert_eq!(seen.len(), BELL[n]);
            // the single-block and all-singleton partitions each show up
            assert!(seen.contains(&vec![0; n]));
            assert!(seen.contains(&(0..n).rev().collect::<Vec<_>>()));
        }
    }

    #[test]
    fn test_early_abort_stops_enumeration() {
        let mut count = 0;
        let finished = enumerate_set_partitions(5, |_| {
            count += 1;
            count < 3
        });
        assert!(!finished);
        assert_eq!(count, 3);
    }

    #[test]
    fn test_first_partition_is_single_block() {
        let mut first = None;
        enumerate_set_partitions(4, |blocks| {
            first.get_or_insert_with(|| blocks.to_vec());
            false
        });
        assert_eq!(first, Some(vec![0, 0, 0, 0]));
    }
}
