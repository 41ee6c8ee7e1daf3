/// Top-down merge sort. Ties keep the element from the left half first, so the sort is stable.
pub fn merge_sort<T: PartialOrd + Clone>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }
    let mid = items.len() / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        merge_sort(left);
        merge_sort(right);
    }
    merge_halves(items, mid);
}

/// Sorted copy of `items`; the input is left untouched.
pub fn merge_sorted<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    merge_sort(&mut sorted);
    sorted
}

// Both halves of `items` around `mid` are already sorted.
fn merge_halves<T: PartialOrd + Clone>(items: &mut [T], mid: usize) {
    let mut merged = Vec::with_capacity(items.len());
    {
        let (left, right) = items.split_at(mid);
        let (mut i, mut j) = (0, 0);

        while i < left.len() && j < right.len() {
            if left[i] <= right[j] {
                merged.push(left[i].clone());
                i += 1;
            } else {
                merged.push(right[j].clone());
                j += 1;
            }
        }
        merged.extend_from_slice(&left[i..]);
        merged.extend_from_slice(&right[j..]);
    }
    items.clone_from_slice(&merged);
}

/// Every ordering of `items`: fix each element as head in index order, then permute the rest.
///
/// n distinct elements give n! results. An empty input gives no permutations.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return if items.is_empty() { Vec::new() } else { vec![items.to_vec()] };
    }

    let mut result = Vec::new();
    for i in 0..items.len() {
        let head = &items[i];
        let rest: Vec<T> = items[..i].iter()
            .chain(&items[i + 1..])
            .cloned()
            .collect();

        for tail in permutations(&rest) {
            let mut perm = Vec::with_capacity(items.len());
            perm.push(head.clone());
            perm.extend(tail);
            result.push(perm);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_halves_prefers_left_on_ties() {
        // (key, origin) pairs compared on key only
        #[derive(Clone, Debug, PartialEq)]
        struct Keyed(i32, char);
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let mut items = vec![Keyed(1, 'l'), Keyed(2, 'l'), Keyed(1, 'r'), Keyed(2, 'r')];
        merge_halves(&mut items, 2);
        let origins: Vec<char> = items.iter().map(|k| k.1).collect();
        assert_eq!(origins, vec!['l', 'r', 'l', 'r']);
    }
}
