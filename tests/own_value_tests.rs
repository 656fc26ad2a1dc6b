use bytes::Bytes;
use ion_ci::{Decimal, Error, OwnList, OwnStruct, OwnValue, Tag};

fn sample_struct() -> OwnStruct {
    let mut fields = OwnStruct::new();
    fields.add("Name", "ada");
    fields.add("age", 36);
    fields.add("Name", "lovelace");
    fields
}

// ============ OwnValue ============

#[test]
fn test_tags_of_every_variant() {
    let cases = [
        (OwnValue::null(), Tag::Null),
        (OwnValue::Null(Tag::Struct), Tag::Struct),
        (OwnValue::from(true), Tag::Bool),
        (OwnValue::from(1i32), Tag::Int),
        (OwnValue::from(1.5), Tag::Float),
        (OwnValue::from(Decimal::new(125, -2)), Tag::Decimal),
        (OwnValue::Timestamp("2024-01-01T".to_owned()), Tag::Timestamp),
        (OwnValue::Symbol("sym".to_owned()), Tag::Symbol),
        (OwnValue::from("text"), Tag::String),
        (OwnValue::Clob(Bytes::from_static(b"c")), Tag::Clob),
        (OwnValue::from(vec![1u8, 2]), Tag::Blob),
        (OwnValue::from(OwnList::new()), Tag::List),
        (OwnValue::SExp(OwnList::new()), Tag::SExp),
        (OwnValue::from(OwnStruct::new()), Tag::Struct),
    ];
    for (value, tag) in cases {
        assert_eq!(value.tag(), tag, "{value:?}");
    }
}

#[test]
fn test_typed_null_is_null() {
    let value = OwnValue::Null(Tag::List);
    assert!(value.is_null());
    assert_eq!(value.tag(), Tag::List);
    assert!(value.as_list().is_none());
    assert_eq!(OwnValue::default(), OwnValue::null());
}

#[test]
fn test_scalar_accessors() {
    assert_eq!(OwnValue::from(7).as_int(), Some(7));
    assert_eq!(OwnValue::from(7).as_float(), None);
    assert_eq!(OwnValue::from(false).as_bool(), Some(false));
    assert_eq!(OwnValue::Symbol("s".to_owned()).as_text(), Some("s"));
    assert_eq!(OwnValue::from("s").as_text(), Some("s"));
    assert_eq!(
        OwnValue::Clob(Bytes::from_static(b"ab")).as_bytes(),
        Some(&b"ab"[..])
    );
    assert_eq!(
        OwnValue::Timestamp("2007T".to_owned()).as_timestamp(),
        Some("2007T")
    );
    assert_eq!(
        OwnValue::from(Decimal::new(1, 2)).as_decimal(),
        Some(Decimal::new(1, 2))
    );
}

#[test]
fn test_from_option() {
    assert_eq!(OwnValue::from(Some(3)), OwnValue::Int(3));
    assert_eq!(OwnValue::from(None::<i64>), OwnValue::null());
}

#[test]
fn test_decimal_display_and_to_f64() {
    let decimal = Decimal::new(125, -2);
    assert_eq!(decimal.to_string(), "125d-2");
    assert!((decimal.to_f64() - 1.25).abs() < 1e-12);
}

#[test]
fn test_get_is_case_sensitive() {
    let value = OwnValue::from(sample_struct());
    assert_eq!(value.get("Name").unwrap().unwrap().as_text(), Some("ada"));
    assert!(value.get("name").unwrap().is_none());
    assert!(value.get(0).unwrap().is_none());
}

#[test]
fn test_get_position_out_of_range() {
    let value = OwnValue::from(OwnList::from_iter([1, 2]));
    assert_eq!(value.get(1).unwrap().unwrap().as_int(), Some(2));
    assert_eq!(
        value.get(2),
        Err(Error::IndexOutOfRange { index: 2, len: 2 })
    );
    assert!(value.get("x").unwrap().is_none());
}

#[test]
fn test_get_mut_writes_through() {
    let mut value = OwnValue::from(sample_struct());
    *value.get_mut("age").unwrap().unwrap() = OwnValue::from(37);
    assert_eq!(value.get("age").unwrap().unwrap().as_int(), Some(37));
}

// ============ OwnList ============

#[test]
fn test_list_mutation() {
    let mut list = OwnList::from_iter([1, 2, 3]);
    list.push(4);
    list.insert(0, 0).unwrap();
    list.insert(5, 5).unwrap();
    assert_eq!(
        list.insert(9, 9),
        Err(Error::IndexOutOfRange { index: 9, len: 6 })
    );
    assert_eq!(list.set(1, 10).unwrap(), OwnValue::Int(1));
    assert_eq!(list.remove(0).unwrap(), OwnValue::Int(0));
    let ints: Vec<_> = list.iter().filter_map(OwnValue::as_int).collect();
    assert_eq!(ints, [10, 2, 3, 4, 5]);

    assert!(list.set(5, 0).is_err());
    assert!(list.remove(5).is_err());

    list.clear();
    assert!(list.is_empty());
}

#[test]
fn test_list_iter_mut() {
    let mut list = OwnList::from_iter([1, 2]);
    for value in &mut list {
        if let OwnValue::Int(int) = value {
            *int *= 10;
        }
    }
    assert_eq!(Vec::from(list), vec![OwnValue::Int(10), OwnValue::Int(20)]);
}

// ============ OwnStruct ============

#[test]
fn test_struct_keeps_duplicates_in_order() {
    let fields = sample_struct();
    assert_eq!(fields.len(), 3);
    assert_eq!(
        fields.field_names().collect::<Vec<_>>(),
        ["Name", "age", "Name"]
    );
    assert_eq!(fields.get("Name").unwrap().as_text(), Some("ada"));
    let all: Vec<_> = fields.get_all("Name").filter_map(OwnValue::as_text).collect();
    assert_eq!(all, ["ada", "lovelace"]);
    assert!(fields.contains_field("age"));
    assert!(!fields.contains_field("AGE"));
}

#[test]
fn test_struct_put_replaces_every_exact_match() {
    let mut fields = sample_struct();
    fields.add("NAME", "other");
    let old = fields.put("Name", "grace");
    assert_eq!(old.unwrap().as_text(), Some("ada"));
    assert_eq!(
        fields.field_names().collect::<Vec<_>>(),
        ["age", "NAME", "Name"]
    );
    assert_eq!(fields.get("Name").unwrap().as_text(), Some("grace"));
}

#[test]
fn test_struct_remove() {
    let mut fields = sample_struct();
    assert_eq!(fields.remove("name"), None);
    assert_eq!(fields.remove("Name").unwrap().as_text(), Some("ada"));
    assert_eq!(fields.field_names().collect::<Vec<_>>(), ["age"]);

    let (name, value) = fields.remove_at(0).unwrap();
    assert_eq!(name, "age");
    assert_eq!(value, OwnValue::Int(36));
    assert_eq!(
        fields.remove_at(0),
        Err(Error::IndexOutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn test_generation_changes_with_names() {
    let mut fields = sample_struct();
    let start = fields.generation();

    *fields.get_mut("age").unwrap() = OwnValue::from(1);
    for (_, value) in fields.iter_mut() {
        *value = OwnValue::null();
    }
    assert_eq!(fields.generation(), start);

    fields.add("x", 1);
    let after_add = fields.generation();
    assert_ne!(after_add, start);

    // Nothing removed, nothing changed.
    fields.remove("missing");
    assert_eq!(fields.generation(), after_add);

    fields.remove("x");
    assert_ne!(fields.generation(), after_add);
}

#[test]
fn test_generation_never_reused() {
    let first = OwnStruct::new();
    let second = OwnStruct::new();
    assert_ne!(first.generation(), second.generation());

    let clone = first.clone();
    assert_eq!(clone.generation(), first.generation());
    assert_eq!(clone, first);
}

#[test]
fn test_struct_equality_ignores_generation() {
    let mut left = OwnStruct::new();
    left.add("a", 1);
    let right: OwnStruct = [("a", 1)].into_iter().collect();
    assert_ne!(left.generation(), right.generation());
    assert_eq!(left, right);
}

#[test]
fn test_struct_iterators() {
    let fields = sample_struct();
    let pairs: Vec<_> = fields.iter().map(|(name, _)| name).collect();
    assert_eq!(pairs, ["Name", "age", "Name"]);
    let reversed: Vec<_> = fields.iter().rev().map(|(name, _)| name).collect();
    assert_eq!(reversed, ["Name", "age", "Name"]);
    assert_eq!(fields.iter().len(), 3);

    let owned: Vec<(String, OwnValue)> = fields.into_iter().collect();
    assert_eq!(owned[1], ("age".to_owned(), OwnValue::Int(36)));
}
