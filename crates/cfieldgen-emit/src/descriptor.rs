//! Field descriptor table rows shared by every field kind

use crate::naming::{
    camel_to_lower, containing_struct_name, default_value_symbol, field_name,
};
use crate::printer::{Printer, Variables};
use crate::sentinels;
use cfieldgen_core::{
    Cardinality, CodegenResult, FieldKind, FieldMetadata, GenerationOptions, SchemaVersion,
};

/// Type-specific inputs a field generator supplies for its descriptor row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptorParams<'a> {
    /// Whether an optional member carries a `has_<name>` presence flag
    pub optional_uses_has: bool,

    /// Suffix of the `PROTOBUF_C_TYPE_*` macro, e.g. `STRING`
    pub type_label: &'a str,

    /// Address of the type's own descriptor, or `NULL`
    pub descriptor_addr: &'a str,
}

impl<'a> DescriptorParams<'a> {
    /// Parameters for a kind without a presence flag or nested descriptor
    pub fn plain(type_label: &'a str) -> Self {
        Self {
            optional_uses_has: false,
            type_label,
            descriptor_addr: sentinels::NULL,
        }
    }
}

/// Emit one `ProtobufCFieldDescriptor` initializer for `field`.
///
/// The row carries the field's schema name, tag, label, and wire type,
/// the struct offsets the runtime uses to find its count and value, a
/// pointer to its default, and its flag bits.
pub fn generate_descriptor_initializer_generic(
    field: &FieldMetadata,
    options: &GenerationOptions,
    params: &DescriptorParams<'_>,
) -> CodegenResult<String> {
    let mut optional_uses_has = params.optional_uses_has;

    let label = if field.schema_version == SchemaVersion::Proto3
        && field.cardinality == Cardinality::Optional
    {
        optional_uses_has = false;
        "NONE"
    } else {
        field.cardinality.label_name()
    };

    let proto_name = match (&field.oneof, options.use_oneof_field_name) {
        (Some(oneof), true) => oneof.as_str(),
        _ => field.name.as_str(),
    };

    let default_value = if field.has_explicit_default() {
        format!("&{}", default_value_symbol(field, options))
    } else if field.schema_version == SchemaVersion::Proto3 && field.kind == FieldKind::String {
        format!("&{}", sentinels::EMPTY_STRING)
    } else {
        sentinels::NULL.to_string()
    };

    let mut flags = String::from("0");
    if field.cardinality == Cardinality::Repeated && field.kind.is_packable() && field.packed {
        flags.push_str(" | PROTOBUF_C_FIELD_FLAG_PACKED");
    }
    if field.deprecated {
        flags.push_str(" | PROTOBUF_C_FIELD_FLAG_DEPRECATED");
    }
    if field.oneof.is_some() {
        flags.push_str(" | PROTOBUF_C_FIELD_FLAG_ONEOF");
    }

    let mut vars = Variables::new()
        .with("TYPE", params.type_label)
        .with("LABEL", label)
        .with("classname", containing_struct_name(field, options))
        .with("name", field_name(&field.name))
        .with("proto_name", proto_name)
        .with("descriptor_addr", params.descriptor_addr)
        .with("value", field.number.to_string())
        .with("default_value", default_value)
        .with("flags", flags);
    if let Some(oneof) = &field.oneof {
        vars.set("oneofname", camel_to_lower(oneof));
    }

    let mut printer = Printer::new();
    printer.write_raw("{\n");
    if options.optimize_for_code_size {
        printer.write_raw("  NULL, /* CODE_SIZE */\n");
    } else {
        printer.print(&vars, "  \"$proto_name$\",\n")?;
    }
    printer.print(
        &vars,
        "  $value$,\n  PROTOBUF_C_LABEL_$LABEL$,\n  PROTOBUF_C_TYPE_$TYPE$,\n",
    )?;

    match field.cardinality {
        Cardinality::Required => printer.write_raw("  0,   /* quantifier_offset */\n"),
        Cardinality::Optional => {
            if field.oneof.is_some() {
                printer.print(&vars, "  offsetof($classname$, $oneofname$_case),\n")?;
            } else if optional_uses_has {
                printer.print(&vars, "  offsetof($classname$, has_$name$),\n")?;
            } else {
                printer.write_raw("  0,   /* quantifier_offset */\n");
            }
        }
        Cardinality::Repeated => {
            printer.print(&vars, "  offsetof($classname$, n_$name$),\n")?;
        }
    }

    printer.print(&vars, "  offsetof($classname$, $name$),\n")?;
    printer.print(&vars, "  $descriptor_addr$,\n")?;
    printer.print(&vars, "  $default_value$,\n")?;
    printer.print(&vars, "  $flags$,             /* flags */\n")?;
    printer.write_raw("  0,NULL,NULL    /* reserved1,reserved2, etc */\n");
    printer.write_raw("},\n");

    tracing::trace!(field = %field.full_name, label, "emitted descriptor row");

    Ok(printer.into_string())
}

#[cfg(test)]
#[path = "descriptor/descriptor_tests.rs"]
mod descriptor_tests;
