//! Message assembly
//!
//! Drives the field generators for every message of a schema file and
//! collects their fragments into a `.pb-c.h` header and a `.pb-c.c` source.

use crate::schema::{MessageDescriptor, SchemaFile};
use cfieldgen_core::{Cardinality, CodegenError, CodegenResult, GenerationOptions};
use cfieldgen_emit::naming::{camel_to_lower, camel_to_upper, full_name_to_c, full_name_to_lower};
use cfieldgen_emit::{Printer, Variables};
use cfieldgen_fields::FieldGenerator;
use tracing::{debug, info};

/// The two files generated for one schema file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// `<stem>.pb-c.h` file name
    pub header_name: String,
    pub header: String,

    /// `<stem>.pb-c.c` file name
    pub source_name: String,
    pub source: String,
}

/// Output streams the field operations append to
#[derive(Debug, Default)]
struct Streams {
    structs: Printer,
    default_decls: Printer,
    default_impls: Printer,
    descriptor_tables: Printer,
}

/// Generate header and source for every message in `schema`.
///
/// Fails without producing output if any field cannot be generated.
pub fn assemble_file(schema: &SchemaFile, stem: &str) -> CodegenResult<GeneratedFile> {
    let options = &schema.options;
    let messages = schema.messages();
    let mut streams = Streams::default();

    info!(stem, messages = messages.len(), "assembling schema file");

    for message in &messages {
        assemble_message(message, &schema.package, options, &mut streams)?;
    }

    let header_name = format!("{stem}.pb-c.h");
    let source_name = format!("{stem}.pb-c.c");

    Ok(GeneratedFile {
        header: render_header(stem, &messages, &schema.package, options, &streams),
        source: render_source(&header_name, &streams),
        header_name,
        source_name,
    })
}

/// Check that every field of `schema` generates cleanly
pub fn check_file(schema: &SchemaFile) -> CodegenResult<usize> {
    let mut streams = Streams::default();
    let mut fields = 0;
    for message in schema.messages() {
        assemble_message(&message, &schema.package, &schema.options, &mut streams)?;
        fields += message.fields.len();
    }
    Ok(fields)
}

/// Fields of one oneof, in declaration order
struct OneofGroup<'g, 'f> {
    name: &'g str,
    members: Vec<&'g FieldGenerator<'f>>,
}

/// Split `generators` into plain members and oneof groups, keeping the
/// order in which each oneof first appears.
fn group_oneofs<'g, 'f>(
    generators: &'g [FieldGenerator<'f>],
) -> CodegenResult<(Vec<&'g FieldGenerator<'f>>, Vec<OneofGroup<'g, 'f>>)> {
    let mut plain = Vec::new();
    let mut groups: Vec<OneofGroup<'g, 'f>> = Vec::new();

    for generator in generators {
        let field = generator.field();
        let Some(oneof) = field.oneof.as_deref() else {
            plain.push(generator);
            continue;
        };
        if field.cardinality != Cardinality::Optional {
            return Err(CodegenError::Config(format!(
                "field '{}' in oneof '{oneof}' must be optional, not {}",
                field.full_name,
                field.cardinality.label_name().to_ascii_lowercase()
            )));
        }
        match groups.iter_mut().find(|group| group.name == oneof) {
            Some(group) => group.members.push(generator),
            None => groups.push(OneofGroup {
                name: oneof,
                members: vec![generator],
            }),
        }
    }

    Ok((plain, groups))
}

fn assemble_message(
    message: &MessageDescriptor,
    package: &str,
    options: &GenerationOptions,
    streams: &mut Streams,
) -> CodegenResult<()> {
    let generators = message
        .fields
        .iter()
        .map(|field| FieldGenerator::for_field(field, options))
        .collect::<CodegenResult<Vec<_>>>()?;
    let (plain, oneofs) = group_oneofs(&generators)?;

    let c_package = options.c_package.as_deref();
    let lower = full_name_to_lower(&message.full_name, package, c_package);
    let vars = Variables::new()
        .with("classname", full_name_to_c(&message.full_name, package, c_package))
        .with("lcclassname", lower.as_str())
        .with("ucclassname", lower.to_ascii_uppercase())
        .with("n_fields", message.fields.len().to_string());

    debug!(
        message = %message.full_name,
        fields = generators.len(),
        oneofs = oneofs.len(),
        "assembling message"
    );

    for generator in &generators {
        let field = generator.field();
        if field.has_explicit_default() {
            streams
                .default_decls
                .write_raw(&generator.generate_default_value_declaration()?);
            streams
                .default_impls
                .write_raw(&generator.generate_default_value_definition()?);
        }
    }

    let structs = &mut streams.structs;
    for oneof in &oneofs {
        let oneof_vars = oneof_variables(&vars, message, oneof.name, package, c_package);
        structs.write_raw("typedef enum {\n");
        structs.indent();
        structs.print(&oneof_vars, "$ucclassname$__$uconeofname$__NOT_SET = 0,\n")?;
        for (i, member) in oneof.members.iter().enumerate() {
            let field = member.field();
            let comma = if i + 1 < oneof.members.len() { "," } else { "" };
            let member_vars = oneof_vars
                .clone()
                .with("ucfieldname", camel_to_upper(&field.name))
                .with("fieldnum", field.number.to_string())
                .with("opt_comma", comma);
            structs.print(
                &member_vars,
                "$ucclassname$__$uconeofname$_$ucfieldname$ = $fieldnum$$opt_comma$\n",
            )?;
        }
        structs.print(
            &oneof_vars,
            "  PROTOBUF_C__FORCE_ENUM_TO_BE_INT_SIZE($ucclassname$__$uconeofname$__CASE)\n",
        )?;
        structs.outdent();
        structs.print(&oneof_vars, "} $foneofname$Case;\n\n")?;
    }

    structs.print(&vars, "struct  $classname$\n{\n")?;
    structs.indent();
    structs.write_raw("ProtobufCMessage base;\n");
    for generator in &plain {
        structs.write_raw(&generator.generate_struct_members(options)?);
    }
    for oneof in &oneofs {
        let oneof_vars = oneof_variables(&vars, message, oneof.name, package, c_package);
        structs.print(&oneof_vars, "$foneofname$Case $oneofname$_case;\n")?;
        structs.write_raw("union {\n");
        structs.indent();
        for member in &oneof.members {
            structs.write_raw(&member.generate_struct_members(options)?);
        }
        structs.outdent();
        structs.write_raw("};\n");
    }
    structs.outdent();
    structs.write_raw("};\n");

    structs.print(
        &vars,
        "#define $ucclassname$__INIT \\\n { PROTOBUF_C_MESSAGE_INIT (&$lcclassname$__descriptor) \\\n    ",
    )?;
    for generator in &plain {
        structs.write_raw(", ");
        structs.write_raw(&generator.generate_static_initializer(options)?);
    }
    for oneof in &oneofs {
        let oneof_vars = oneof_variables(&vars, message, oneof.name, package, c_package);
        structs.print(&oneof_vars, ", $ucclassname$__$uconeofname$__NOT_SET, {0}")?;
    }
    structs.write_raw(" }\n\n");

    if !generators.is_empty() {
        // The runtime binary-searches this table by tag.
        let mut by_number: Vec<&FieldGenerator<'_>> = generators.iter().collect();
        by_number.sort_by_key(|generator| generator.field().number);

        let mut rows = Printer::new();
        rows.indent();
        for generator in by_number {
            rows.write_raw(&generator.generate_descriptor_entry(options)?);
            debug!(field = %generator.field().full_name, "emitted field");
        }

        let tables = &mut streams.descriptor_tables;
        tables.print(
            &vars,
            "static const ProtobufCFieldDescriptor $lcclassname$__field_descriptors[$n_fields$] =\n{\n",
        )?;
        tables.write_raw(rows.as_str());
        tables.write_raw("};\n");
    }

    Ok(())
}

/// Message variables plus the names derived from oneof `name`
fn oneof_variables(
    vars: &Variables,
    message: &MessageDescriptor,
    name: &str,
    package: &str,
    c_package: Option<&str>,
) -> Variables {
    let full_name = format!("{}.{name}", message.full_name);
    vars.clone()
        .with("oneofname", camel_to_lower(name))
        .with("uconeofname", camel_to_upper(name))
        .with("foneofname", full_name_to_c(&full_name, package, c_package))
}

/// Headline for a failed generation run.
///
/// Template errors come from the generators themselves; everything else
/// traces back to the schema description.
pub fn failure_headline(err: &CodegenError) -> &'static str {
    if err.is_internal() {
        "Internal code generator error"
    } else {
        "Code generation failed"
    }
}

fn render_header(
    stem: &str,
    messages: &[MessageDescriptor],
    package: &str,
    options: &GenerationOptions,
    streams: &Streams,
) -> String {
    let guard: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();

    let mut out = String::new();
    out.push_str("/* Generated by cfieldgen.  DO NOT EDIT! */\n\n");
    out.push_str(&format!("#ifndef PROTOBUF_C_{guard}__INCLUDED\n"));
    out.push_str(&format!("#define PROTOBUF_C_{guard}__INCLUDED\n\n"));
    out.push_str("#include <protobuf-c/protobuf-c.h>\n\n");
    out.push_str("PROTOBUF_C__BEGIN_DECLS\n\n");

    for message in messages {
        let c_name = full_name_to_c(&message.full_name, package, options.c_package.as_deref());
        out.push_str(&format!("typedef struct {c_name} {c_name};\n"));
    }
    out.push('\n');

    for message in messages {
        let lower =
            full_name_to_lower(&message.full_name, package, options.c_package.as_deref());
        out.push_str(&format!(
            "extern const ProtobufCMessageDescriptor {lower}__descriptor;\n"
        ));
    }
    out.push('\n');

    out.push_str(streams.structs.as_str());

    if !streams.default_decls.is_empty() {
        out.push_str(streams.default_decls.as_str());
        out.push('\n');
    }

    out.push_str("PROTOBUF_C__END_DECLS\n\n");
    out.push_str(&format!("#endif  /* PROTOBUF_C_{guard}__INCLUDED */\n"));
    out
}

fn render_source(header_name: &str, streams: &Streams) -> String {
    let mut out = String::new();
    out.push_str("/* Generated by cfieldgen.  DO NOT EDIT! */\n\n");
    out.push_str(&format!("#include \"{header_name}\"\n\n"));

    if !streams.default_impls.is_empty() {
        out.push_str(streams.default_impls.as_str());
        out.push('\n');
    }

    out.push_str(streams.descriptor_tables.as_str());
    out
}
