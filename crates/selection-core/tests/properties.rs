use pretty_assertions::assert_eq;
use proptest::prelude::*;
use selection_core::domino::{apply, join_tiles, parse_tiles, DominoOp, DominoStore, Tile};
use selection_core::letters::{LetterCounts, ALPHABET_LEN};
use selection_core::paragraph::diff;

fn tile_strategy() -> impl Strategy<Value = Tile> {
    (0u32..13, 0u32..13).prop_map(|(top, bottom)| Tile::new(top, bottom))
}

fn op_strategy() -> impl Strategy<Value = DominoOp> {
    prop_oneof![
        Just(DominoOp::SortAscending),
        Just(DominoOp::SortDescending),
        Just(DominoOp::Flip),
        Just(DominoOp::RemoveDuplicates),
        Just(DominoOp::Reset),
        (0u32..7, 0u32..7).prop_map(|(a, b)| DominoOp::RemoveByValue(format!("{a}-{b}"))),
    ]
}

proptest! {
    #[test]
    fn prop_counts_cover_alphabet(inputs in proptest::collection::vec(".{0,40}", 0..10)) {
        let counts = LetterCounts::count(&inputs);
        let expected: usize = inputs
            .iter()
            .map(|s| s.chars().filter(char::is_ascii_uppercase).count())
            .sum();

        prop_assert_eq!(counts.iter().count(), ALPHABET_LEN);
        prop_assert_eq!(counts.total(), expected as u64);
    }

    #[test]
    fn prop_diff_length_and_count(input in ".{0,30}", reference in ".{0,30}") {
        let result = diff(&input, &reference);
        let a: Vec<char> = input.chars().collect();
        let b: Vec<char> = reference.chars().collect();
        let len = a.len().max(b.len());
        let differing = (0..len).filter(|&i| a.get(i) != b.get(i)).count();

        prop_assert_eq!(result.len(), len);
        prop_assert_eq!(result.mismatches(), differing);
    }

    #[test]
    fn prop_diff_self_has_no_mismatch(s in ".{0,60}") {
        prop_assert_eq!(diff(&s, &s).mismatches(), 0);
    }

    #[test]
    fn prop_flip_is_involution(tiles in proptest::collection::vec(tile_strategy(), 0..20)) {
        let once = apply(&tiles, &[], &DominoOp::Flip);
        let twice = apply(&once, &[], &DominoOp::Flip);
        prop_assert_eq!(twice, tiles);
    }

    #[test]
    fn prop_reset_restores_original(
        tiles in proptest::collection::vec(tile_strategy(), 0..20),
        ops in proptest::collection::vec(op_strategy(), 0..12),
    ) {
        let mut store = DominoStore::loaded(tiles.clone());
        for op in &ops {
            store.apply(op);
        }
        store.apply(&DominoOp::Reset);
        prop_assert_eq!(store.current(), tiles.as_slice());
    }

    #[test]
    fn prop_sorts_are_ordered_permutations(tiles in proptest::collection::vec(tile_strategy(), 0..20)) {
        let asc = apply(&tiles, &[], &DominoOp::SortAscending);
        let desc = apply(&tiles, &[], &DominoOp::SortDescending);

        prop_assert!(asc.windows(2).all(|w| w[0].pip_sum() <= w[1].pip_sum()));
        prop_assert!(desc.windows(2).all(|w| w[0].pip_sum() >= w[1].pip_sum()));

        let mut sorted_in: Vec<String> = tiles.iter().map(ToString::to_string).collect();
        let mut sorted_out: Vec<String> = asc.iter().map(ToString::to_string).collect();
        sorted_in.sort();
        sorted_out.sort();
        prop_assert_eq!(sorted_in, sorted_out);
    }

    #[test]
    fn prop_wire_format_reparses(tiles in proptest::collection::vec(tile_strategy(), 0..20)) {
        let parsed = parse_tiles(&join_tiles(&tiles)).unwrap();
        prop_assert_eq!(parsed, tiles);
    }
}

#[test]
fn test_dedupe_example() {
    let tiles = parse_tiles("4-5, 5-4, 4-5, 2-2").unwrap();
    let out = apply(&tiles, &[], &DominoOp::RemoveDuplicates);
    assert_eq!(join_tiles(&out), "4-5, 5-4, 2-2");
}

#[test]
fn test_sort_ascending_example() {
    let tiles = parse_tiles("6-6, 1-2, 3-1").unwrap();
    let out = apply(&tiles, &[], &DominoOp::SortAscending);
    assert_eq!(join_tiles(&out), "1-2, 3-1, 6-6");
}

#[test]
fn test_flip_after_dedupe_can_reintroduce_pairs() {
    // Dedupe is by exact text, so a flip may produce a tile equal to a neighbour.
    let tiles = parse_tiles("4-5, 5-4, 4-5").unwrap();
    let deduped = apply(&tiles, &[], &DominoOp::RemoveDuplicates);
    let flipped = apply(&deduped, &[], &DominoOp::Flip);
    assert_eq!(join_tiles(&flipped), "5-4, 4-5");
    let again = apply(&flipped, &[], &DominoOp::RemoveDuplicates);
    assert_eq!(again.len(), 2);
}
