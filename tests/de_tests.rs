use std::collections::BTreeMap;

use ion_ci::{
    Decimal, Deserializer, Error, OwnList, OwnStruct, OwnValue, Tag, from_readable, from_value,
    from_value_ci, wrap,
};
use serde::Deserialize;

#[derive(Deserialize, Debug, PartialEq)]
struct Customer {
    customer_id: i64,
    name: String,
    email: Option<String>,
    orders: Vec<Order>,
}

#[derive(Deserialize, Debug, PartialEq)]
struct Order {
    sku: String,
    qty: u16,
}

#[derive(Deserialize, Debug, PartialEq)]
enum Shape {
    Dot,
    Circle(f64),
    Rect { width: i32, height: i32 },
}

fn order(sku: &str, qty: i64) -> OwnValue {
    let mut fields = OwnStruct::new();
    fields.add("SKU", sku);
    fields.add("Qty", qty);
    OwnValue::from(fields)
}

fn customer() -> OwnValue {
    let mut fields = OwnStruct::new();
    fields.add("CUSTOMER_ID", 42);
    fields.add("Name", "ada");
    fields.add("Orders", vec![order("a-1", 2), order("b-2", 1)]);
    fields.add("Unused", true);
    OwnValue::from(fields)
}

// ============ case-insensitive binding ============

#[test]
fn test_ci_binds_fields_at_every_level() {
    let value = customer();
    let decoded: Customer = from_value_ci(&value).unwrap();
    assert_eq!(
        decoded,
        Customer {
            customer_id: 42,
            name: "ada".to_owned(),
            email: None,
            orders: vec![
                Order {
                    sku: "a-1".to_owned(),
                    qty: 2
                },
                Order {
                    sku: "b-2".to_owned(),
                    qty: 1
                },
            ],
        }
    );
}

#[test]
fn test_exact_binding_misses_other_case() {
    let value = customer();
    match from_value::<Customer>(&value) {
        Err(Error::Message(message)) => assert!(message.contains("customer_id"), "{message}"),
        other => panic!("expected a missing field error, got {other:?}"),
    }
}

#[test]
fn test_from_readable_accepts_either_view() {
    let mut fields = OwnStruct::new();
    fields.add("sku", "x");
    fields.add("qty", 3);
    let value = OwnValue::from(fields);

    let raw: Order = from_readable(&value).unwrap();
    let ci: Order = from_readable(wrap(&value)).unwrap();
    assert_eq!(raw, ci);

    let direct = Order::deserialize(Deserializer::new(wrap(&value))).unwrap();
    assert_eq!(direct, raw);
}

#[test]
fn test_first_wins_on_duplicate_names() {
    let mut fields = OwnStruct::new();
    fields.add("sku", "first");
    fields.add("SKU", "second");
    fields.add("qty", 1);
    let value = OwnValue::from(fields);

    let decoded: Order = from_value_ci(&value).unwrap();
    assert_eq!(decoded.sku, "first");
}

#[test]
fn test_option_field_null_and_present() {
    let mut fields = OwnStruct::new();
    fields.add("customer_id", 1);
    fields.add("NAME", "b");
    fields.add("Email", OwnValue::Null(Tag::String));
    fields.add("orders", OwnList::new());
    let value = OwnValue::from(fields);
    let decoded: Customer = from_value_ci(&value).unwrap();
    assert_eq!(decoded.email, None);

    let mut fields = value.as_struct().unwrap().clone();
    fields.put("Email", "b@example.com");
    let decoded: Customer = from_value_ci(&OwnValue::from(fields)).unwrap();
    assert_eq!(decoded.email.as_deref(), Some("b@example.com"));
}

#[test]
fn test_borrowed_strings() {
    #[derive(Deserialize)]
    struct Borrowed<'a> {
        name: &'a str,
        tags: Vec<&'a str>,
    }

    let mut fields = OwnStruct::new();
    fields.add("NAME", "ada");
    fields.add(
        "Tags",
        OwnValue::SExp(OwnList::from_iter([
            OwnValue::Symbol("x".to_owned()),
            OwnValue::from("y"),
        ])),
    );
    let value = OwnValue::from(fields);

    let decoded: Borrowed = from_value_ci(&value).unwrap();
    assert_eq!(decoded.name, "ada");
    assert_eq!(decoded.tags, ["x", "y"]);
}

#[test]
fn test_map_target_sees_every_field_as_stored() {
    let mut fields = OwnStruct::new();
    fields.add("B", 2);
    fields.add("a", 1);
    let value = OwnValue::from(fields);

    let map: BTreeMap<String, i64> = from_value_ci(&value).unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), ["B", "a"]);
}

// ============ scalars ============

#[test]
fn test_decimal_targets() {
    let value = OwnValue::from(Decimal::new(125, -2));
    let float: f64 = from_value(&value).unwrap();
    assert!((float - 1.25).abs() < 1e-12);
    let float: f32 = from_value(&value).unwrap();
    assert!((float - 1.25).abs() < 1e-6);
    let text: String = from_value(&value).unwrap();
    assert_eq!(text, "125d-2");
}

#[test]
fn test_lobs_and_timestamps() {
    let blob = OwnValue::from(vec![1u8, 2, 3]);
    let bytes: &[u8] = from_value(&blob).unwrap();
    assert_eq!(bytes, [1, 2, 3]);

    let stamp = OwnValue::Timestamp("2024-05-01T".to_owned());
    let text: &str = from_value_ci(&stamp).unwrap();
    assert_eq!(text, "2024-05-01T");
}

#[test]
fn test_tuple_from_sequence() {
    let value = OwnValue::SExp(OwnList::from_iter([OwnValue::from(1), OwnValue::from("a")]));
    let pair: (i32, String) = from_value_ci(&value).unwrap();
    assert_eq!(pair, (1, "a".to_owned()));
}

#[test]
fn test_wrong_scalar_kind_is_an_error() {
    let value = OwnValue::from("not a number");
    assert!(matches!(from_value::<i64>(&value), Err(Error::Message(_))));
    assert!(matches!(from_value::<u8>(&OwnValue::from(300)), Err(Error::Message(_))));
}

// ============ structs and enums ============

#[test]
fn test_struct_from_non_struct_is_a_mismatch() {
    let value = OwnValue::from(OwnList::new());
    assert_eq!(
        from_value_ci::<Order>(&value).unwrap_err(),
        Error::TypeMismatch {
            expected: "struct",
            found: Tag::List
        }
    );

    let null = OwnValue::Null(Tag::Struct);
    assert_eq!(
        from_value_ci::<Order>(&null).unwrap_err(),
        Error::TypeMismatch {
            expected: "struct",
            found: Tag::Struct
        }
    );
}

#[test]
fn test_unit_variant_from_text() {
    let symbol = OwnValue::Symbol("Dot".to_owned());
    assert_eq!(from_value::<Shape>(&symbol).unwrap(), Shape::Dot);
    assert_eq!(from_value_ci::<Shape>(&OwnValue::from("Dot")).unwrap(), Shape::Dot);

    let fields: OwnStruct = [("Dot", OwnValue::null())].into_iter().collect();
    assert_eq!(from_value::<Shape>(&OwnValue::from(fields)).unwrap(), Shape::Dot);
}

#[test]
fn test_data_variants_from_single_field_struct() {
    let circle: OwnStruct = [("Circle", 2.0)].into_iter().collect();
    assert_eq!(
        from_value_ci::<Shape>(&OwnValue::from(circle)).unwrap(),
        Shape::Circle(2.0)
    );

    let size: OwnStruct = [("WIDTH", 3), ("Height", 4)].into_iter().collect();
    let rect: OwnStruct = [("Rect", size)].into_iter().collect();
    assert_eq!(
        from_value_ci::<Shape>(&OwnValue::from(rect)).unwrap(),
        Shape::Rect {
            width: 3,
            height: 4
        }
    );
}

#[test]
fn test_enum_errors() {
    let unknown = OwnValue::Symbol("Hexagon".to_owned());
    assert_eq!(
        from_value::<Shape>(&unknown).unwrap_err(),
        Error::UnknownVariant("Hexagon".to_owned())
    );

    assert_eq!(
        from_value::<Shape>(&OwnValue::from(5)).unwrap_err(),
        Error::TypeMismatch {
            expected: "enum",
            found: Tag::Int
        }
    );

    let two: OwnStruct = [("Dot", 1), ("Circle", 2)].into_iter().collect();
    assert_eq!(
        from_value::<Shape>(&OwnValue::from(two)).unwrap_err(),
        Error::TypeMismatch {
            expected: "enum",
            found: Tag::Struct
        }
    );

    let dot_with_data: OwnStruct = [("Dot", 1)].into_iter().collect();
    assert_eq!(
        from_value::<Shape>(&OwnValue::from(dot_with_data)).unwrap_err(),
        Error::TypeMismatch {
            expected: "null",
            found: Tag::Int
        }
    );
}

// ============ OwnValue as a serde target ============

#[test]
fn test_own_value_from_json_keeps_order_and_duplicates() {
    let value: OwnValue =
        serde_json::from_str(r#"{"Id": 1, "id": [true, null, "x"], "f": 1.5}"#).unwrap();
    let fields = value.as_struct().unwrap();
    assert_eq!(fields.field_names().collect::<Vec<_>>(), ["Id", "id", "f"]);
    assert_eq!(wrap(&value).get("ID").unwrap().unwrap().as_int(), Some(1));
    assert_eq!(
        fields.get("id"),
        Some(&OwnValue::from(vec![
            OwnValue::from(true),
            OwnValue::null(),
            OwnValue::from("x"),
        ]))
    );
    assert_eq!(fields.get("f"), Some(&OwnValue::Float(1.5)));
}

#[test]
fn test_own_value_from_json_rejects_huge_unsigned() {
    assert!(serde_json::from_str::<OwnValue>("18446744073709551615").is_err());
    assert_eq!(
        serde_json::from_str::<OwnValue>("9223372036854775807").unwrap(),
        OwnValue::Int(i64::MAX)
    );
}

#[test]
fn test_own_value_from_own_value() {
    let value = customer();
    let copy: OwnValue = from_value(&value).unwrap();
    assert_eq!(copy, value);
    let copy: OwnValue = from_value_ci(&value).unwrap();
    assert_eq!(copy, value);
}
