//! Storage engine: moving values between bindings lists.

#![recursion_limit = "256"]

use shared_resources::{type_set, Cons, IntoList, Merge, Nil, Pluck, Sculpt, Select};

type Target = type_set![i32, char, u8];

#[test]
fn sculpt_from_arguments_in_any_order() {
    let (bindings, rest) = Sculpt::<Target>::sculpt((7u8, 'q', -3i32).into_list());
    assert_eq!(bindings, Cons::new(-3, Cons::new('q', Cons::new(7u8, Nil))));
    assert_eq!(rest, Nil);
}

#[test]
fn sculpt_from_superset_returns_leftovers_in_order() {
    let source = (true, 7u8, 'q', 1.5f64, -3i32).into_list();
    let (bindings, rest) = Sculpt::<Target>::sculpt(source);
    assert_eq!(bindings, Cons::new(-3, Cons::new('q', Cons::new(7u8, Nil))));
    assert_eq!(rest, Cons::new(true, Cons::new(1.5f64, Nil)));
}

#[test]
fn pluck_moves_non_copy_values() {
    let source = (String::from("name"), vec![1i32, 2, 3], 4u8).into_list();
    let (names, rest) = Pluck::<Vec<i32>>::pluck(source);
    assert_eq!(names, [1, 2, 3]);
    assert_eq!(rest, Cons::new(String::from("name"), Cons::new(4u8, Nil)));
}

#[test]
fn select_finds_each_binding() {
    let mut list = (1i32, 'a', 2u8).into_list();
    assert_eq!(*Select::<i32>::select(&list), 1);
    assert_eq!(*Select::<char>::select(&list), 'a');
    *Select::<u8>::select_mut(&mut list) = 9;
    assert_eq!(*Select::<u8>::select(&list), 9);
}

mod merge {
    use super::*;

    #[test]
    fn base_wins_over_extras() {
        let base = ('b', 10i32).into_list();
        let extras = (20i32, 3u8).into_list();
        let merged: Target = Merge::merge(base, extras);
        assert_eq!(merged, Cons::new(10, Cons::new('b', Cons::new(3u8, Nil))));
    }

    #[test]
    fn extras_fill_gaps_and_unused_values_drop() {
        let base = (String::from("unused"), 'b').into_list();
        let extras = (3u8, 1i32, false).into_list();
        let merged: Target = Merge::merge(base, extras);
        assert_eq!(merged, Cons::new(1, Cons::new('b', Cons::new(3u8, Nil))));
    }

    #[test]
    fn empty_target_takes_nothing() {
        let merged: Nil = Merge::merge((1i32,).into_list(), ('a',).into_list());
        assert_eq!(merged, Nil);
    }
}
