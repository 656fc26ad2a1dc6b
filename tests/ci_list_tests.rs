use ion_ci::{CiList, CiListMut, CiValueMut, Error, OwnList, OwnStruct, OwnValue, Tag, wrap};

fn numbers() -> OwnList {
    OwnList::from_iter([10, 20, 30])
}

// ============ reads ============

#[test]
fn test_get_in_range() {
    let list = numbers();
    let view = CiList::new(&list);
    assert_eq!(view.get(0).unwrap().as_int(), Some(10));
    assert_eq!(view.get(2).unwrap().as_int(), Some(30));
}

#[test]
fn test_get_out_of_range_is_an_error() {
    let list = numbers();
    let view = CiList::new(&list);
    assert_eq!(
        view.get(3).unwrap_err(),
        Error::IndexOutOfRange { index: 3, len: 3 }
    );
    assert_eq!(
        view.get(usize::MAX).unwrap_err(),
        Error::IndexOutOfRange {
            index: usize::MAX,
            len: 3
        }
    );

    let empty = OwnList::new();
    let view = CiList::new(&empty);
    assert!(matches!(
        view.get(0),
        Err(Error::IndexOutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn test_value_get_out_of_range_is_an_error() {
    let sexp = OwnValue::SExp(numbers());
    let view = wrap(&sexp);
    assert!(view.get(3).is_err());
    // A name on a sequence is simply absent.
    assert!(view.get("0").unwrap().is_none());
}

#[test]
fn test_iteration_wraps_and_restarts() {
    let mut inner = OwnStruct::new();
    inner.add("Key", "v");
    let list = OwnList::from_iter([OwnValue::from(inner), OwnValue::from(1)]);
    let view = CiList::with_kind(&list, Tag::SExp);
    assert_eq!(view.kind(), Tag::SExp);

    let mut iter = view.iter();
    assert_eq!(iter.len(), 2);
    let first = iter.next().unwrap();
    assert_eq!(first.get("KEY").unwrap().unwrap().as_text(), Some("v"));
    assert_eq!(iter.next().unwrap().as_int(), Some(1));
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());

    assert_eq!(view.iter().count(), 2);
    assert_eq!(view.iter().rev().next().unwrap().as_int(), Some(1));
    assert_eq!(view.into_iter().count(), 2);
}

#[test]
fn test_order_matches_underlying() {
    let list = numbers();
    let view = CiList::new(&list);
    let decorated: Vec<_> = view.iter().map(|value| value.as_int().unwrap()).collect();
    let raw: Vec<_> = list.iter().map(|value| value.as_int().unwrap()).collect();
    assert_eq!(decorated, raw);
}

// ============ writes ============

#[test]
fn test_mutations_write_through() {
    let mut list = numbers();
    let mut view = CiListMut::new(&mut list);

    view.push(40);
    view.insert(0, 0).unwrap();
    assert_eq!(view.set(1, 11).unwrap(), OwnValue::Int(10));
    assert_eq!(view.remove(2).unwrap(), OwnValue::Int(20));
    assert_eq!(view.len(), 4);

    assert_eq!(
        view.insert(5, 0),
        Err(Error::IndexOutOfRange { index: 5, len: 4 })
    );
    assert!(view.set(4, 0).is_err());
    assert!(view.remove(4).is_err());

    let ints: Vec<_> = list.iter().filter_map(OwnValue::as_int).collect();
    assert_eq!(ints, [0, 11, 30, 40]);
}

#[test]
fn test_get_mut_out_of_range() {
    let mut list = numbers();
    let mut view = CiListMut::new(&mut list);
    assert!(matches!(
        view.get_mut(3),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    ));
    assert!(view.get(3).is_err());
}

#[test]
fn test_nested_struct_through_get_mut() {
    let inner: OwnStruct = [("Count", 1)].into_iter().collect();
    let mut list = OwnList::from_iter([inner]);
    let mut view = CiListMut::new(&mut list);

    match view.get_mut(0).unwrap() {
        CiValueMut::Struct(mut fields) => {
            let name = fields.resolve("count").unwrap().to_owned();
            fields.put(name, 2);
        }
        other => panic!("expected a struct, got {other:?}"),
    }
    assert_eq!(
        list.get(0).and_then(OwnValue::as_struct).and_then(|fields| fields.get("Count")),
        Some(&OwnValue::Int(2))
    );
}

#[test]
fn test_iter_mut_wraps_each_element() {
    let mut list = OwnList::from_iter([1, 2, 3]);
    let mut view = CiListMut::new(&mut list);
    assert_eq!(view.iter_mut().len(), 3);
    for mut value in view.iter_mut() {
        if let Some(OwnValue::Int(int)) = value.as_scalar_mut() {
            *int *= 2;
        }
    }
    assert_eq!(view.iter().filter_map(|value| value.as_int()).sum::<i64>(), 12);
}

#[test]
fn test_clear_and_raw_access() {
    let mut list = numbers();
    let mut view = CiListMut::with_kind(&mut list, Tag::SExp);
    assert_eq!(view.kind(), Tag::SExp);
    assert_eq!(view.as_view().kind(), Tag::SExp);

    view.raw_mut().push(99);
    assert_eq!(view.raw().len(), 4);
    view.clear();
    assert!(view.is_empty());
    assert!(list.is_empty());
}
