//! Owning container: construction, extension, conversion, narrowing, lookup.
//!
//! The fixtures mirror a layered program: `i32` and `char` are plain values,
//! `IntPtr` and `CharPtr` are shared cells standing in for pointers into
//! state owned elsewhere.

#![recursion_limit = "256"]

use std::cell::Cell;
use std::rc::Rc;

use shared_resources::{type_set, SharedResources};

type IntPtr = Rc<Cell<i32>>;
type CharPtr = Rc<Cell<char>>;

type All = type_set![i32, char, IntPtr, CharPtr];
type Shuffled = type_set![CharPtr, i32, char, IntPtr];
type Extra = type_set![i32, CharPtr, Rc<CharPtr>, IntPtr, char];

struct Fixture {
    a: i32,
    b: char,
    c: IntPtr,
    d: CharPtr,
}

fn fixture() -> Fixture {
    Fixture { a: 1, b: 'a', c: Rc::new(Cell::new(2)), d: Rc::new(Cell::new('b')) }
}

// ============================================================================
// Construction and lookup
// ============================================================================

#[test]
fn get_returns_each_value_and_pointer() {
    let Fixture { a, b, c, d } = fixture();
    let int_resources: SharedResources<All, type_set![i32]> =
        SharedResources::new((c.clone(), b, d.clone()));
    let resources: SharedResources<All> = SharedResources::extend(int_resources.clone(), (a,));

    assert_eq!(*resources.get::<i32>(), 1);
    assert_eq!(*resources.get::<char>(), 'a');
    assert!(Rc::ptr_eq(resources.get::<IntPtr>(), &c));
    assert!(Rc::ptr_eq(resources.get::<CharPtr>(), &d));
    assert_eq!(resources.get::<IntPtr>().get(), 2);
    assert_eq!(resources.get::<CharPtr>().get(), 'b');

    assert_eq!(*int_resources.get::<char>(), 'a');
    assert!(Rc::ptr_eq(int_resources.get::<IntPtr>(), &c));
}

#[test]
fn argument_order_does_not_matter() {
    let Fixture { a, b, c, d } = fixture();
    let forward: SharedResources<All> = SharedResources::new((a, b, c.clone(), d.clone()));
    let backward: SharedResources<All> = SharedResources::new((d, c, b, a));
    assert_eq!(forward, backward);
}

#[test]
fn length_follows_exclusions() {
    assert_eq!(SharedResources::<All>::LEN, 4);
    assert_eq!(SharedResources::<All, type_set![i32]>::LEN, 3);
    assert_eq!(SharedResources::<All, Shuffled>::LEN, 0);
    assert_eq!(SharedResources::<Extra, type_set![Rc<CharPtr>, u64]>::LEN, 4);
}

#[test]
fn empty_effective_set_builds_from_nothing() {
    let empty: SharedResources<All, All> = SharedResources::new(());
    let full: SharedResources<All> = SharedResources::extend(empty, (1i32, 'z', fixture().c, fixture().d));
    assert_eq!(*full.get::<char>(), 'z');
}

// ============================================================================
// Extension and conversion
// ============================================================================

#[test]
fn convert_and_extend_across_declarations() {
    let Fixture { a, b, c, d } = fixture();
    let int_resources: SharedResources<All, type_set![i32]> =
        SharedResources::new((c.clone(), b, d.clone()));

    {
        let resources: SharedResources<All> = SharedResources::extend(int_resources.clone(), (a,));
        assert_eq!(*resources.get::<i32>(), 1);
        assert_eq!(*resources.get::<char>(), 'a');
        assert!(Rc::ptr_eq(resources.get::<IntPtr>(), &c));
        assert!(Rc::ptr_eq(resources.get::<CharPtr>(), &d));
    }

    {
        let charp: SharedResources<All, type_set![CharPtr]> =
            SharedResources::extend(int_resources.clone(), (a,));
        assert_eq!(*charp.get::<i32>(), 1);
        assert_eq!(*charp.get::<char>(), 'a');
        assert!(Rc::ptr_eq(charp.get::<IntPtr>(), &c));
    }

    {
        let shuffled: SharedResources<Shuffled> = SharedResources::extend(int_resources.clone(), (a,));
        assert_eq!(*shuffled.get::<i32>(), 1);
        assert!(Rc::ptr_eq(shuffled.get::<CharPtr>(), &d));
    }

    {
        let extra_int: SharedResources<Extra, type_set![Rc<CharPtr>, i32]> =
            SharedResources::convert(int_resources.clone());
        assert_eq!(*extra_int.get::<char>(), 'a');
        assert!(Rc::ptr_eq(extra_int.get::<IntPtr>(), &c));
        assert!(Rc::ptr_eq(extra_int.get::<CharPtr>(), &d));
    }

    {
        let extra: SharedResources<Extra, type_set![Rc<CharPtr>]> =
            SharedResources::extend(int_resources, (a,));
        assert_eq!(*extra.get::<i32>(), 1);
        assert_eq!(*extra.get::<char>(), 'a');
        assert!(Rc::ptr_eq(extra.get::<CharPtr>(), &d));
    }
}

#[test]
fn base_wins_when_extras_overlap() {
    let Fixture { a, b, c, d } = fixture();
    let base: SharedResources<All, type_set![IntPtr]> = SharedResources::new((a, b, d));
    let full: SharedResources<All> = SharedResources::extend(base, (c.clone(), 'x'));
    assert_eq!(*full.get::<char>(), 'a');
    assert!(Rc::ptr_eq(full.get::<IntPtr>(), &c));
}

#[test]
fn dropped_extras_release_their_values() {
    let Fixture { a, b, c, d } = fixture();
    let base: SharedResources<All, type_set![IntPtr]> = SharedResources::new((a, b, d.clone()));
    let full: SharedResources<All> = SharedResources::extend(base, (c.clone(), d.clone()));
    assert_eq!(Rc::strong_count(&d), 2);
    drop(full);
    assert_eq!(Rc::strong_count(&d), 1);
    assert_eq!(Rc::strong_count(&c), 1);
}

#[test]
fn narrow_drops_bindings_outside_the_target() {
    let Fixture { a, b, c, d } = fixture();
    let full: SharedResources<All> = SharedResources::new((a, b, c.clone(), d));
    let ints: SharedResources<type_set![IntPtr, i32]> = SharedResources::narrow(full);
    assert_eq!(*ints.get::<i32>(), 1);
    assert_eq!(Rc::strong_count(&c), 2);
    assert_eq!(SharedResources::<type_set![IntPtr, i32]>::LEN, 2);
}

// ============================================================================
// Value semantics
// ============================================================================

#[test]
fn copies_share_pointers_but_not_values() {
    let Fixture { a, b, c, d } = fixture();
    let mut first: SharedResources<All> = SharedResources::new((a, b, c, d));
    let second = first.clone();

    *first.get_mut::<i32>() = 10;
    first.get::<IntPtr>().set(20);

    assert_eq!(*second.get::<i32>(), 1);
    assert_eq!(second.get::<IntPtr>().get(), 20);
}

#[test]
fn debug_lists_bindings_by_type() {
    let r: SharedResources<type_set![u8, bool]> = SharedResources::new((true, 3u8));
    assert_eq!(format!("{r:?}"), "{u8: 3, bool: true}");
}

#[test]
fn bindings_round_trip() {
    let r: SharedResources<type_set![u8, bool]> = SharedResources::new((true, 3u8));
    let chain = r.into_bindings();
    let back: SharedResources<type_set![u8, bool]> = SharedResources::from_bindings(chain);
    assert_eq!(*back.get::<u8>(), 3);
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn end_to_end_scrambled_construction() {
    let Fixture { a, b, c, d } = fixture();
    let resources: SharedResources<All> = SharedResources::new((c.clone(), b, d, a));

    assert_eq!(*resources.get::<i32>(), 1);
    assert_eq!(*resources.get::<char>(), 'a');
    resources.get::<IntPtr>().set(42);
    assert_eq!(c.get(), 42);
}

#[test]
fn extension_keeps_the_base_value() {
    let only_int: SharedResources<All, type_set![char, IntPtr, CharPtr]> = SharedResources::new((5i32,));
    let with_char: SharedResources<All, type_set![IntPtr, CharPtr]> = SharedResources::extend(only_int, ('k',));
    assert_eq!(*with_char.get::<i32>(), *only_int.get::<i32>());
    assert_eq!(*with_char.get::<char>(), 'k');
}

#[test]
fn owned_values_are_independent_of_their_sources() {
    let source = 3i32;
    let mut resources: SharedResources<type_set![i32]> = SharedResources::new((source,));
    *resources.get_mut::<i32>() = 4;
    assert_eq!(source, 3);
    assert_eq!(*resources.get::<i32>(), 4);
}

// ============================================================================
// Standard library types
// ============================================================================

#[test]
fn std_types_are_storable() {
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use std::time::Duration;

    type Std = type_set![
        Duration,
        Result<i32, u8>,
        [u8; 4],
        (i32, char),
        PathBuf,
        BTreeMap<u8, u8>,
        Box<dyn Fn() -> i32>,
    ];

    let offset = 40;
    let resources: SharedResources<Std> = SharedResources::new((
        Box::new(move || offset + 2) as Box<dyn Fn() -> i32>,
        BTreeMap::from([(1u8, 2u8)]),
        PathBuf::from("/srv"),
        (7i32, 'x'),
        [1u8, 2, 3, 4],
        Err::<i32, u8>(9),
        Duration::from_millis(250),
    ));

    assert_eq!(*resources.get::<Duration>(), Duration::from_millis(250));
    assert_eq!(*resources.get::<Result<i32, u8>>(), Err(9));
    assert_eq!(resources.get::<[u8; 4]>()[3], 4);
    assert_eq!(*resources.get::<(i32, char)>(), (7, 'x'));
    assert_eq!(resources.get::<PathBuf>().to_str(), Some("/srv"));
    assert_eq!(resources.get::<BTreeMap<u8, u8>>().get(&1), Some(&2));
    assert_eq!((resources.get::<Box<dyn Fn() -> i32>>())(), 42);
}
