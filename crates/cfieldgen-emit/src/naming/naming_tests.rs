#![allow(non_snake_case)]

use super::*;
use cfieldgen_core::{Cardinality, FieldKind, SchemaVersion};

fn field(full_name: &str) -> FieldMetadata {
    FieldMetadata::new(
        full_name,
        1,
        FieldKind::String,
        Cardinality::Optional,
        SchemaVersion::Proto2,
    )
}

// camel_to_lower tests

#[test]
fn camel_to_lower___converts_camel_case() {
    assert_eq!(camel_to_lower("FooBar"), "foo_bar");
    assert_eq!(camel_to_lower("fooBarBaz"), "foo_bar_baz");
}

#[test]
fn camel_to_lower___keeps_capital_runs_together() {
    assert_eq!(camel_to_lower("HTTPRequest"), "httprequest");
    assert_eq!(camel_to_lower("ID"), "id");
}

#[test]
fn camel_to_lower___handles_simple_words() {
    assert_eq!(camel_to_lower("kind"), "kind");
    assert_eq!(camel_to_lower(""), "");
}

#[test]
fn camel_to_lower___digit_before_capital___inserts_underscore() {
    assert_eq!(camel_to_lower("Item2Price"), "item2_price");
}

#[test]
fn camel_to_upper___converts_camel_case() {
    assert_eq!(camel_to_upper("LineItem"), "LINE_ITEM");
}

// to_camel tests

#[test]
fn to_camel___converts_snake_case() {
    assert_eq!(to_camel("line_item"), "LineItem");
    assert_eq!(to_camel("shop"), "Shop");
}

#[test]
fn to_camel___handles_consecutive_underscores() {
    assert_eq!(to_camel("foo__bar"), "FooBar");
    assert_eq!(to_camel("_leading"), "Leading");
    assert_eq!(to_camel(""), "");
}

// full_name tests

#[test]
fn full_name_to_lower___joins_segments_with_double_underscore() {
    assert_eq!(
        full_name_to_lower("shop.v1.Item.label", "shop.v1", None),
        "shop__v1__item__label"
    );
}

#[test]
fn full_name_to_lower___c_package___replaces_package_prefix() {
    assert_eq!(
        full_name_to_lower("shop.v1.Item.label", "shop.v1", Some("acme.store")),
        "acme__store__item__label"
    );
}

#[test]
fn full_name_to_lower___c_package_without_package___prefixes_name() {
    assert_eq!(full_name_to_lower("Item.label", "", Some("acme")), "acme__item__label");
}

#[test]
fn full_name_to_lower___unqualified___returns_lowered_name() {
    assert_eq!(full_name_to_lower("kind", "", None), "kind");
}

#[test]
fn full_name_to_c___camel_cases_each_segment() {
    assert_eq!(full_name_to_c("shop.v1.line_item", "shop.v1", None), "Shop__V1__LineItem");
}

#[test]
fn full_name_to_c___c_package___replaces_package_prefix() {
    assert_eq!(full_name_to_c("shop.Item", "shop", Some("acme")), "Acme__Item");
}

// field helpers

#[test]
fn field_name___lowercases() {
    assert_eq!(field_name("Label"), "label");
}

#[test]
fn field_name___keyword___appends_underscore() {
    assert_eq!(field_name("default"), "default_");
    assert_eq!(field_name("Int"), "int_");
    assert_eq!(field_name("struct"), "struct_");
}

#[test]
fn field_deprecated___deprecated_field___returns_annotation() {
    let f = field("Item.label").deprecated();

    assert_eq!(field_deprecated(&f), " PROTOBUF_C__DEPRECATED");
}

#[test]
fn field_deprecated___active_field___returns_empty() {
    assert_eq!(field_deprecated(&field("Item.label")), "");
}

#[test]
fn default_value_symbol___appends_suffix() {
    let f = field("kind");

    assert_eq!(
        default_value_symbol(&f, &GenerationOptions::default()),
        "kind__default_value"
    );
}

#[test]
fn default_value_symbol___honours_c_package() {
    let f = field("shop.Item.kind").with_package("shop");
    let options = GenerationOptions::default().with_c_package("acme");

    assert_eq!(
        default_value_symbol(&f, &options),
        "acme__item__kind__default_value"
    );
}

#[test]
fn containing_struct_name___uses_message_path() {
    let f = field("shop.line_item.sku").with_package("shop");

    assert_eq!(
        containing_struct_name(&f, &GenerationOptions::default()),
        "Shop__LineItem"
    );
}
