//! Foldable and Sequence across the built-in containers and derived structs.

use tola_concepts::concepts::foldable::Visit;
use tola_concepts::prelude::*;

// =============================================================================
// Derived Structs
// =============================================================================

#[derive(Foldable, Debug, Clone, Copy, PartialEq)]
struct Point {
    x: i32,
    y: i32,
    z: i32,
}

#[derive(Foldable)]
struct Labelled(&'static str, u8);

#[derive(Foldable)]
struct Marker;

#[derive(Foldable)]
struct Wrapper<T> {
    inner: T,
}

#[test]
fn test_derive_named_fields() {
    let p = Point { x: 1, y: -2, z: 5 };
    assert_eq!(unpack(p), hlist![1, -2, 5]);
    assert_eq!(length(&p), 3);
    assert_eq!(sum::<IntegerTag<i32>, _>(p), 4);
    assert_eq!(product::<IntegerTag<i32>, _>(p), -10);
}

#[test]
fn test_derive_tuple_and_unit() {
    assert_eq!(unpack(Labelled("id", 7)), hlist!["id", 7u8]);
    assert!(is_empty(&Marker));
    assert_eq!(unpack(Marker), HNil);
}

#[test]
fn test_derive_generic() {
    let w = Wrapper { inner: 'q' };
    assert_eq!(at::<D0, _>(w), 'q');
    assert!(models!(Wrapper<String>: Foldable));
    assert!(!models!(Wrapper<String>: Sequence));
}

#[test]
fn test_struct_to_sequence() {
    let p = Point { x: 3, y: 4, z: 5 };
    assert_eq!(to::<TupleTag, _>(p), (3, 4, 5));
    assert_eq!(to::<HListTag, _>(p), hlist![3, 4, 5]);
}

// =============================================================================
// fold_left and for_each
// =============================================================================

#[test]
fn test_fold_left_order() {
    let digits = (1u64, 2u64, 3u64);
    let number = fold_left(digits, 0u64, |acc: u64, d: u64| acc * 10 + d);
    assert_eq!(number, 123);
}

#[test]
fn test_fold_left_over_mixed_types() {
    struct Describe;

    impl<T: core::fmt::Debug> tola_concepts::primitives::Folder<String, T> for Describe {
        type Output = String;

        fn call(&mut self, mut acc: String, x: T) -> String {
            if !acc.is_empty() {
                acc.push(' ');
            }
            acc.push_str(&format!("{x:?}"));
            acc
        }
    }

    let text = fold_left(hlist![1u8, 'c', "s", true], String::new(), Describe);
    assert_eq!(text, "1 'c' \"s\" true");
}

#[test]
fn test_for_each_visits_in_order() {
    #[derive(Default)]
    struct Collect(Vec<String>);

    impl<T: core::fmt::Display> Visit<T> for Collect {
        fn visit(&mut self, x: T) {
            self.0.push(x.to_string());
        }
    }

    let seen = for_each((1i8, 'x', 2.5f64), Collect::default());
    assert_eq!(seen.0, ["1", "x", "2.5"]);
}

#[test]
fn test_for_each_with_closure() {
    let mut total = 0;
    let _visitor = for_each(hlist![1u32, 2u32, 3u32], |x: u32| total += x);
    assert_eq!(total, 6);
}

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn test_make_and_at() {
    let t = make::<TupleTag, _>(hlist![1u8, "two", 3.0f32]);
    assert_eq!(t, (1u8, "two", 3.0f32));
    assert_eq!(at::<D1, _>(t), "two");
    assert_eq!(at::<D2, _>(hlist!['a', 'b', 'c']), 'c');
}

#[test]
fn test_empty_sequences() {
    assert!(is_empty(&()));
    assert!(is_empty(&HNil));
    let () = to::<TupleTag, _>(HNil);
    assert_eq!(to::<HListTag, _>(()), HNil);
}

#[test]
fn test_tuple_hlist_round_trip() {
    let t = (5u8, 'k', "str", -1i64);
    assert_eq!(to::<TupleTag, _>(to::<HListTag, _>(t)), t);
    assert_eq!(length(&t), 4);
}
