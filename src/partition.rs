use crate::{
    util::{debug, debug_assertions::test_partition, invariant},
    Predicate,
};

/// Partitions the whole slice so that `pred` holds for `v[..k]` and fails for `v[k..]`, and
/// returns `k`.
///
/// Single forward scan that swaps every matching element to the front. The matching elements
/// keep their relative order, the others do not: a swap moves the element at `k` behind
/// elements it used to precede.
pub fn partition<T, P>(v: &mut [T], pred: P) -> usize
where
    P: Predicate<T>,
{
    let mut k = 0;
    for i in 0..v.len() {
        invariant!(test_partition(v, k, i, &pred));
        if pred(&v[i]) {
            v.swap(k, i);
            k += 1;
        }
    }
    invariant!(test_partition(v, k, v.len(), &pred));
    debug!(len = v.len(), k, "partition");
    k
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::partition;

    fn is_even(x: &i32) -> bool {
        x % 2 == 0
    }

    #[test]
    fn evens_to_front() {
        let mut v = [4, 2, 4, 1, 3];
        let k = partition(&mut v, is_even);
        assert_eq!(k, 3);
        let mut prefix = v[..k].to_vec();
        prefix.sort();
        assert_eq!(prefix, [2, 4, 4]);
        let mut suffix = v[k..].to_vec();
        suffix.sort();
        assert_eq!(suffix, [1, 3]);
    }

    #[test]
    fn empty_and_uniform() {
        let mut empty: [i32; 0] = [];
        assert_eq!(partition(&mut empty, is_even), 0);

        let mut all = [2, 4, 6];
        assert_eq!(partition(&mut all, is_even), 3);
        assert_eq!(all, [2, 4, 6]);

        let mut none = [1, 3, 5];
        assert_eq!(partition(&mut none, is_even), 0);
        assert_eq!(none, [1, 3, 5]);
    }

    #[test]
    fn matching_elements_keep_their_order() {
        let mut v = [1, 8, 3, 6, 5, 4, 2];
        let k = partition(&mut v, is_even);
        assert_eq!(&v[..k], [8, 6, 4, 2]);
    }

    // The other elements are shuffled by the swaps: 1 and 3 come out as 3, 1.
    #[test]
    fn other_elements_may_be_reordered() {
        let mut v = [1, 3, 2];
        let k = partition(&mut v, is_even);
        assert_eq!(k, 1);
        assert_eq!(v, [2, 3, 1]);
    }

    #[test]
    fn random_inputs() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            let len = rng.gen_range(0..300);
            let input: Vec<i32> = (0..len).map(|_| rng.gen_range(1..=100)).collect();
            let mut v = input.clone();
            let k = partition(&mut v, is_even);

            assert_eq!(k, input.iter().filter(|x| is_even(x)).count());
            assert!(v[..k].iter().all(is_even));
            assert!(!v[k..].iter().any(is_even));

            let expected_front: Vec<i32> = input.iter().copied().filter(is_even).collect();
            assert_eq!(v[..k], expected_front[..]);

            let mut permutation = v.clone();
            permutation.sort();
            let mut sorted_input = input.clone();
            sorted_input.sort();
            assert_eq!(permutation, sorted_input);
        }
    }
}
