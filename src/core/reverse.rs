/// Reverses `items` in place with a two-pointer swap.
///
/// Position `i` is exchanged with `len - 1 - i` for every `i < len / 2`, so
/// the middle element of an odd-length slice is never touched and slices of
/// length 0 or 1 are left as they are.
pub fn reverse_in_place<T>(items: &mut [T]) {
    let len = items.len();
    for i in 0..len / 2 {
        items.swap(i, len - 1 - i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_default_array() {
        let mut arr = [1, 2, 3, 4, 5];
        reverse_in_place(&mut arr);
        assert_eq!(arr, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_even_length() {
        let mut arr = [10, -20, 30, -40];
        reverse_in_place(&mut arr);
        assert_eq!(arr, [-40, 30, -20, 10]);
    }

    #[test]
    fn test_reverse_empty_and_single_are_identity() {
        let mut empty: [i32; 0] = [];
        reverse_in_place(&mut empty);
        assert!(empty.is_empty());

        let mut single = [42];
        reverse_in_place(&mut single);
        assert_eq!(single, [42]);
    }

    #[test]
    fn test_reverse_is_an_involution() {
        for len in 0..12 {
            let original: Vec<i32> = (0..len).map(|x| x * 3 - 7).collect();
            let mut items = original.clone();
            reverse_in_place(&mut items);
            reverse_in_place(&mut items);
            assert_eq!(items, original, "len {}", len);
        }
    }

    #[test]
    fn test_reverse_mirrors_indices() {
        for len in 0..12usize {
            let original: Vec<usize> = (0..len).map(|x| x * x).collect();
            let mut items = original.clone();
            reverse_in_place(&mut items);
            for i in 0..len {
                assert_eq!(items[i], original[len - 1 - i]);
            }
        }
    }

    #[test]
    fn test_reverse_odd_length_keeps_middle() {
        let mut words = ["a", "b", "mid", "d", "e"];
        reverse_in_place(&mut words);
        assert_eq!(words[2], "mid");
        assert_eq!(words, ["e", "d", "mid", "b", "a"]);
    }
}
