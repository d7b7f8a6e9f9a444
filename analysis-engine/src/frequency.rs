use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences and returns the `top_n` most frequent values.
///
/// Ties keep the order in which values were first seen.
pub fn rank_by_frequency<I, T>(values: I, top_n: usize) -> Vec<(T, usize)>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut positions: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match positions.get(&value) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // sort_by is stable, so first-seen order survives among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(top_n);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_descending_by_count() {
        let ranked = rank_by_frequency(["a", "b", "b", "c", "b", "c"], 10);
        assert_eq!(ranked, vec![("b", 3), ("c", 2), ("a", 1)]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let ranked = rank_by_frequency(["zeta", "alpha", "mid", "alpha", "zeta", "mid"], 10);
        assert_eq!(ranked, vec![("zeta", 2), ("alpha", 2), ("mid", 2)]);
    }

    #[test]
    fn test_truncates_to_top_n() {
        let ranked = rank_by_frequency(["a", "b", "c", "d"], 2);
        assert_eq!(ranked, vec![("a", 1), ("b", 1)]);
        assert!(rank_by_frequency(Vec::<&str>::new(), 5).is_empty());
    }
}
