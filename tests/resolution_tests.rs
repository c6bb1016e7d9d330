//! Resolution Tests
//!
//! End-to-end behaviour of reference resolution over the public API.

use remcall_schema::{
    resolve, Array, Enum, Field, Interface, Primitive, Record, Resolve, Schema, SchemaError,
    Type, TypeArena, TypeLookup, TypeRef,
};

fn hello() -> Enum {
    Enum::new("Hello", ["Opt1", "Opt2"])
}

fn lookup_with_hello() -> TypeLookup {
    let mut lookup = TypeLookup::new();
    lookup.insert(2, hello());
    lookup
}

// =============================================================================
// Resolver
// =============================================================================

#[test]
fn test_sign_selects_direct_or_array() {
    let mut lookup = TypeLookup::new();
    for (magnitude, primitive) in Primitive::ALL.iter().enumerate().skip(1) {
        lookup.insert(magnitude as u32, *primitive);
    }

    for (magnitude, primitive) in Primitive::ALL.iter().enumerate().skip(1) {
        let m = magnitude as i32;
        assert_eq!(resolve(&lookup, TypeRef::new(m)).unwrap(), Type::primitive(*primitive));
        assert_eq!(
            resolve(&lookup, TypeRef::new(-m)).unwrap(),
            Type::Array(Array::new(*primitive))
        );
    }
}

#[test]
fn test_missing_reference_carries_original_value() {
    let lookup = lookup_with_hello();
    match resolve(&lookup, TypeRef::new(-5)) {
        Err(SchemaError::TypeNotFound { reference }) => assert_eq!(reference.value(), -5),
        other => panic!("Expected TypeNotFound, got {:?}", other),
    }
}

// =============================================================================
// Container resolution
// =============================================================================

#[test]
fn test_concrete_record_is_unchanged() {
    let lookup = lookup_with_hello();
    let mut rec = Record::new(
        "Concrete",
        [
            Field::new("A", hello()),
            Field::new("B", Type::array_of(Primitive::Int16)),
            Field::new("C", Interface::new("Main")),
        ],
    );
    let before = rec.clone();
    rec.resolve(&lookup).unwrap();
    assert_eq!(rec, before);
}

#[test]
fn test_partial_failure_ordering() {
    let mut lookup = lookup_with_hello();
    lookup.insert(3, Primitive::Uint8);

    let mut rec = Record::new(
        "Partial",
        [
            Field::new("F1", Primitive::String),
            Field::new("F2", TypeRef::new(77)),
            Field::new("F3", TypeRef::new(2)),
        ],
    );

    let err = rec.resolve(&lookup).unwrap_err();
    assert_eq!(err.reference(), Some(TypeRef::new(77)));
    assert_eq!(rec.fields[0].ty, Type::primitive(Primitive::String));
    assert_eq!(rec.fields[1].ty, Type::reference(77));
    assert_eq!(rec.fields[2].ty, Type::reference(2));
}

#[test]
fn test_nested_array_stays_unresolved() {
    let lookup = lookup_with_hello();
    let mut ty = Type::array_of(Type::array_of(TypeRef::new(2)));
    ty.resolve(&lookup).unwrap();

    let Type::Array(outer) = &ty else {
        panic!("Expected array, got {:?}", ty);
    };
    let Type::Array(inner) = outer.underlying.as_ref() else {
        panic!("Expected nested array, got {:?}", outer.underlying);
    };
    assert_eq!(*inner.underlying, Type::reference(2));
}

#[test]
#[should_panic(expected = "cannot resolve")]
fn test_bare_reference_is_a_programming_error() {
    let lookup = lookup_with_hello();
    let mut ty = Type::from(TypeRef::new(2));
    let _ = ty.resolve(&lookup);
}

// =============================================================================
// Self-reference
// =============================================================================

#[test]
fn test_self_referential_record() {
    let mut arena = TypeArena::new();
    let hello_ref = arena.declare(hello());
    let rec = arena.declare(Record::new("MyRecord", [Field::new("MyField", hello_ref.clone())]));
    let record = arena.record_mut(rec.id).unwrap().unwrap();
    record.push_field("Self", rec.clone());
    record.push_field("Multiple", Type::array_of(hello_ref.clone()));
    record.push_field("ToResolve", TypeRef::new(2));

    let mut lookup = TypeLookup::new();
    lookup.insert(2, hello_ref.clone());

    arena.resolve(rec.id, &lookup).unwrap();
    let resolved = arena.get(rec.id).unwrap().as_record().unwrap();
    assert_eq!(resolved.fields[3].ty, Type::Declared(hello_ref));
    assert_eq!(
        resolved.to_string(),
        "record MyRecord {\n  Hello MyField,\n  MyRecord Self,\n  Hello[] Multiple,\n  Hello ToResolve,\n}"
    );

    // a second pass has nothing left to do
    let before = arena.clone();
    arena.resolve_all(&lookup).unwrap();
    assert_eq!(arena, before);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_enum_rendering() {
    assert_eq!(hello().to_string(), "enum Hello {\n  Opt1,\n  Opt2,\n}");
    assert_eq!(Type::from(hello()).to_string(), "enum Hello {\n  Opt1,\n  Opt2,\n}");
}

#[test]
fn test_reference_rendering() {
    assert_eq!(Type::reference(-1).to_string(), "<Type reference to -1>");
    assert_eq!(Type::array_of(TypeRef::new(2)).to_string(), "<Type reference to 2>[]");
}

// =============================================================================
// Schema type table
// =============================================================================

#[test]
fn test_schema_table_resolution() {
    let mut schema = Schema::new("shop");
    let item = schema.declare(Record::new("Item", [Field::new("Name", TypeRef::new(12))]));
    let cart = schema.declare(Record::new(
        "Cart",
        [
            Field::new("Items", TypeRef::new(-17)),
            Field::new("Total", TypeRef::new(11)),
        ],
    ));
    schema.declare(Interface::new("Main"));

    // Cart sorts before Item
    assert_eq!(schema.reference_for(&cart.clone().into()), Some(TypeRef::new(16)));
    assert_eq!(schema.reference_for(&item.clone().into()), Some(TypeRef::new(17)));

    schema.resolve().unwrap();
    assert_eq!(
        schema.pretty_print(),
        "record Cart {\n  Item[] Items,\n  float64 Total,\n}\n\n\
         record Item {\n  string Name,\n}\n\n\
         interface Main {\n}"
    );
}

#[test]
fn test_schema_json_round_trip() {
    let mut schema = Schema::new("json");
    let e = schema.declare(hello());
    schema.declare(Record::new("Holder", [Field::new("Value", e), Field::new("Later", TypeRef::new(-16))]));

    let json = serde_json::to_string(&schema).unwrap();
    let back: Schema = serde_json::from_str(&json).unwrap();
    assert_eq!(back, schema);
}
