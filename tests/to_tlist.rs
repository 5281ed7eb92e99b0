//! Conversion of Foldables of type tokens into type lists.
//!
//! Every source goes through `unpack`, so the same checks run for a bare
//! Foldable (`Seq`), an HList and a tuple.

#![cfg(feature = "testing")]

use tola_concepts::prelude::*;
use tola_concepts::ext::to_tlist;
use tola_concepts::seq;

// =============================================================================
// From a plain Foldable
// =============================================================================

#[test]
fn test_empty() {
    let list = to::<TListTag, _>(seq![]);
    expect_type::<TList![], _>(&list);
    assert!(equal(list, <TList![]>::default()));
}

#[test]
fn test_one_type() {
    let list = to::<TListTag, _>(seq![type_c::<u8>()]);
    expect_type::<TList![u8], _>(&list);
}

#[test]
fn test_two_types() {
    let list = to::<TListTag, _>(seq![type_c::<u8>(), type_c::<char>()]);
    expect_type::<TList![u8, char], _>(&list);
}

#[test]
fn test_three_types() {
    let list = to::<TListTag, _>(seq![type_c::<u8>(), type_c::<char>(), type_c::<()>()]);
    expect_type::<TList![u8, char, ()], _>(&list);
}

#[test]
fn test_repeated_types_keep_order() {
    let list = to_tlist(seq![
        type_c::<i64>(),
        type_c::<bool>(),
        type_c::<i64>(),
        type_c::<&'static str>(),
    ]);
    expect_type::<TList![i64, bool, i64, &'static str], _>(&list);
    assert_eq!(format!("{list:?}"), "[i64, bool, i64, &str]");
}

// =============================================================================
// From sequences
// =============================================================================

#[test]
fn test_from_hlist_and_tuple_agree() {
    let from_hlist = to_tlist(hlist![type_c::<u16>(), type_c::<String>()]);
    let from_tuple = to_tlist((type_c::<u16>(), type_c::<String>()));
    assert!(equal(from_hlist, from_tuple));
}

#[test]
fn test_equal_distinguishes_order() {
    let forward = to_tlist((type_c::<u8>(), type_c::<char>()));
    let backward = to_tlist((type_c::<char>(), type_c::<u8>()));
    assert!(!equal(forward, backward));
    assert!(not_equal(forward, backward));
}

#[test]
fn test_round_trip_through_tuple() {
    let list = <TList![u8, bool]>::default();
    let tokens = to::<TupleTag, _>(list);
    assert_eq!(tokens, (type_c::<u8>(), type_c::<bool>()));
    let back = to::<TListTag, _>(tokens);
    assert!(equal(back, list));
}
