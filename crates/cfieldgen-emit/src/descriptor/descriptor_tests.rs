#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn string_field(cardinality: Cardinality, version: SchemaVersion) -> FieldMetadata {
    FieldMetadata::new("shop.Item.label", 3, FieldKind::String, cardinality, version)
        .with_package("shop")
}

fn row(field: &FieldMetadata, options: &GenerationOptions) -> String {
    generate_descriptor_initializer_generic(field, options, &DescriptorParams::plain("STRING"))
        .unwrap()
}

#[test]
fn generate_descriptor_initializer_generic___required___emits_full_row() {
    let field = string_field(Cardinality::Required, SchemaVersion::Proto2);

    let out = row(&field, &GenerationOptions::default());

    assert_eq!(
        out,
        "{\n\
         \x20 \"label\",\n\
         \x20 3,\n\
         \x20 PROTOBUF_C_LABEL_REQUIRED,\n\
         \x20 PROTOBUF_C_TYPE_STRING,\n\
         \x20 0,   /* quantifier_offset */\n\
         \x20 offsetof(Shop__Item, label),\n\
         \x20 NULL,\n\
         \x20 NULL,\n\
         \x20 0,             /* flags */\n\
         \x20 0,NULL,NULL    /* reserved1,reserved2, etc */\n\
         },\n"
    );
}

#[test_case(Cardinality::Required, SchemaVersion::Proto2, "REQUIRED")]
#[test_case(Cardinality::Optional, SchemaVersion::Proto2, "OPTIONAL")]
#[test_case(Cardinality::Repeated, SchemaVersion::Proto2, "REPEATED")]
#[test_case(Cardinality::Optional, SchemaVersion::Proto3, "NONE")]
#[test_case(Cardinality::Repeated, SchemaVersion::Proto3, "REPEATED")]
fn generate_descriptor_initializer_generic___label___matches_cardinality(
    cardinality: Cardinality,
    version: SchemaVersion,
    label: &str,
) {
    let out = row(&string_field(cardinality, version), &GenerationOptions::default());

    assert!(out.contains(&format!("  PROTOBUF_C_LABEL_{label},\n")));
}

#[test]
fn generate_descriptor_initializer_generic___repeated___uses_count_offset() {
    let field = string_field(Cardinality::Repeated, SchemaVersion::Proto2);

    let out = row(&field, &GenerationOptions::default());

    assert!(out.contains("  offsetof(Shop__Item, n_label),\n"));
}

#[test]
fn generate_descriptor_initializer_generic___optional_with_has___uses_has_offset() {
    let field = string_field(Cardinality::Optional, SchemaVersion::Proto2);
    let params = DescriptorParams {
        optional_uses_has: true,
        type_label: "INT32",
        descriptor_addr: "NULL",
    };

    let out =
        generate_descriptor_initializer_generic(&field, &GenerationOptions::default(), &params)
            .unwrap();

    assert!(out.contains("  offsetof(Shop__Item, has_label),\n"));
}

#[test]
fn generate_descriptor_initializer_generic___proto3_optional___ignores_has() {
    let field = string_field(Cardinality::Optional, SchemaVersion::Proto3);
    let params = DescriptorParams {
        optional_uses_has: true,
        type_label: "INT32",
        descriptor_addr: "NULL",
    };

    let out =
        generate_descriptor_initializer_generic(&field, &GenerationOptions::default(), &params)
            .unwrap();

    assert!(out.contains("  0,   /* quantifier_offset */\n"));
    assert!(!out.contains("has_label"));
}

#[test]
fn generate_descriptor_initializer_generic___oneof___uses_case_offset_and_flag() {
    let field = string_field(Cardinality::Optional, SchemaVersion::Proto2).in_oneof("PickOne");

    let out = row(&field, &GenerationOptions::default());

    assert!(out.contains("  offsetof(Shop__Item, pick_one_case),\n"));
    assert!(out.contains("  0 | PROTOBUF_C_FIELD_FLAG_ONEOF,"));
    assert!(out.contains("  \"label\",\n"));
}

#[test]
fn generate_descriptor_initializer_generic___use_oneof_field_name___names_row_after_oneof() {
    let field = string_field(Cardinality::Optional, SchemaVersion::Proto2).in_oneof("choice");
    let options = GenerationOptions {
        use_oneof_field_name: true,
        ..Default::default()
    };

    let out = row(&field, &options);

    assert!(out.contains("  \"choice\",\n"));
}

#[test]
fn generate_descriptor_initializer_generic___code_size___omits_name() {
    let field = string_field(Cardinality::Required, SchemaVersion::Proto2);
    let options = GenerationOptions {
        optimize_for_code_size: true,
        ..Default::default()
    };

    let out = row(&field, &options);

    assert!(out.contains("  NULL, /* CODE_SIZE */\n"));
    assert!(!out.contains("\"label\""));
}

#[test]
fn generate_descriptor_initializer_generic___explicit_default___points_at_symbol() {
    let field = string_field(Cardinality::Optional, SchemaVersion::Proto2).with_default("x");

    let out = row(&field, &GenerationOptions::default());

    assert!(out.contains("  &shop__item__label__default_value,\n"));
}

#[test]
fn generate_descriptor_initializer_generic___proto3_string___points_at_empty_string() {
    let field = string_field(Cardinality::Required, SchemaVersion::Proto3);

    let out = row(&field, &GenerationOptions::default());

    assert!(out.contains("  &protobuf_c_empty_string,\n"));
}

#[test]
fn generate_descriptor_initializer_generic___proto3_non_string___uses_null_default() {
    let field = FieldMetadata::new(
        "shop.Item.count",
        2,
        FieldKind::Int32,
        Cardinality::Required,
        SchemaVersion::Proto3,
    );

    let out = generate_descriptor_initializer_generic(
        &field,
        &GenerationOptions::default(),
        &DescriptorParams::plain("INT32"),
    )
    .unwrap();

    assert!(out.contains("  NULL,\n  NULL,\n"));
}

#[test]
fn generate_descriptor_initializer_generic___deprecated___sets_flag() {
    let field = string_field(Cardinality::Required, SchemaVersion::Proto2).deprecated();

    let out = row(&field, &GenerationOptions::default());

    assert!(out.contains("  0 | PROTOBUF_C_FIELD_FLAG_DEPRECATED,"));
}

#[test]
fn generate_descriptor_initializer_generic___packed_string___never_sets_packed() {
    let field = string_field(Cardinality::Repeated, SchemaVersion::Proto3).packed();

    let out = row(&field, &GenerationOptions::default());

    assert!(!out.contains("PACKED"));
}

#[test]
fn generate_descriptor_initializer_generic___packed_int___sets_packed() {
    let field = FieldMetadata::new(
        "shop.Item.ids",
        5,
        FieldKind::Uint32,
        Cardinality::Repeated,
        SchemaVersion::Proto2,
    )
    .packed();

    let out = generate_descriptor_initializer_generic(
        &field,
        &GenerationOptions::default(),
        &DescriptorParams::plain("UINT32"),
    )
    .unwrap();

    assert!(out.contains("  0 | PROTOBUF_C_FIELD_FLAG_PACKED,"));
}

#[test]
fn generate_descriptor_initializer_generic___keyword_name___escapes_member_only() {
    let field = FieldMetadata::new(
        "shop.Item.default",
        7,
        FieldKind::String,
        Cardinality::Required,
        SchemaVersion::Proto2,
    )
    .with_package("shop");

    let out = row(&field, &GenerationOptions::default());

    assert!(out.contains("  \"default\",\n"));
    assert!(out.contains("  offsetof(Shop__Item, default_),\n"));
}
