//! Property-based tests for schema naming.
//!
//! Generates random type descriptors and checks that:
//! 1. Determinism: deriving a key twice gives the same result
//! 2. Override precedence: a pinned name always wins for named kinds
//! 3. Unions never receive a key
//! 4. Idempotent registration: re-registering a type never conflicts

use familiar_schema_names::{derive_key, PrimitiveKind, Schema, SchemaRegistry, TypeDescriptor};
use proptest::prelude::*;
use serde_json::json;

// -- Descriptor Generation Strategies --

fn primitive_strategy() -> impl Strategy<Value = TypeDescriptor> {
    prop_oneof![
        Just(PrimitiveKind::String),
        Just(PrimitiveKind::Number),
        Just(PrimitiveKind::Boolean),
        Just(PrimitiveKind::BigInt),
        Just(PrimitiveKind::Null),
    ]
    .prop_map(TypeDescriptor::primitive)
}

fn type_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-zA-Z0-9]{0,10}").expect("valid regex")
}

fn descriptor_strategy() -> impl Strategy<Value = TypeDescriptor> {
    primitive_strategy().prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (type_name_strategy(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(name, args)| TypeDescriptor::class(name, args)),
            (prop::option::of(type_name_strategy()), prop::collection::vec(inner.clone(), 0..2))
                .prop_map(|(name, args)| TypeDescriptor::object_literal(name.as_deref(), args)),
            inner.clone().prop_map(TypeDescriptor::array),
            prop::collection::vec(inner, 2..4).prop_map(TypeDescriptor::union),
        ]
    })
}

fn named_descriptor_strategy() -> impl Strategy<Value = TypeDescriptor> {
    prop_oneof![
        (type_name_strategy(), prop::collection::vec(descriptor_strategy(), 0..3))
            .prop_map(|(name, args)| TypeDescriptor::class(name, args)),
        (prop::option::of(type_name_strategy()), prop::collection::vec(descriptor_strategy(), 0..2))
            .prop_map(|(name, args)| TypeDescriptor::object_literal(name.as_deref(), args)),
    ]
}

proptest! {
    #[test]
    fn derive_key_is_deterministic(t in descriptor_strategy()) {
        prop_assert_eq!(derive_key(&t), derive_key(&t.clone()));
    }

    #[test]
    fn override_takes_precedence(t in named_descriptor_strategy(), pinned in "[A-Za-z_][A-Za-z0-9_]{0,12}") {
        let pinned_type = t.named(pinned.clone());
        prop_assert_eq!(derive_key(&pinned_type), pinned);
    }

    #[test]
    fn unnameable_kinds_have_no_key(members in prop::collection::vec(descriptor_strategy(), 2..4)) {
        let union = TypeDescriptor::union(members);
        prop_assert_eq!(derive_key(&union), "");
    }

    #[test]
    fn reregistration_never_conflicts(t in descriptor_strategy()) {
        let mut registry = SchemaRegistry::new();
        let mut first = Schema::new(json!({ "n": 1 }));
        let mut second = Schema::new(json!({ "n": 2 }));

        let a = registry.register_type(&t, &mut first);
        let b = registry.register_type(&t, &mut second);
        prop_assert!(a.is_ok());
        prop_assert!(b.is_ok());
        prop_assert_eq!(first.registry_key(), second.registry_key());
    }
}
