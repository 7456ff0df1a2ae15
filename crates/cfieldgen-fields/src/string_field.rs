//! Generator for `string` fields

use crate::names::ResolvedNames;
use cfieldgen_core::{
    Cardinality, CodegenError, CodegenResult, FieldMetadata, GenerationOptions, SchemaVersion,
};
use cfieldgen_emit::{
    DescriptorParams, Printer, Variables, c_escape, generate_descriptor_initializer_generic,
    sentinels,
};

/// Emits the C fragments for one `string` field.
///
/// Singular fields become a `char *` member that is `NULL` when unset in
/// proto2 and points at the shared empty string in proto3. Repeated
/// fields become an `n_<name>` count plus a `char **` array.
#[derive(Debug, Clone)]
pub struct StringFieldGenerator<'a> {
    field: &'a FieldMetadata,
    names: ResolvedNames,
}

impl<'a> StringFieldGenerator<'a> {
    pub fn new(field: &'a FieldMetadata, options: &GenerationOptions) -> Self {
        let names = ResolvedNames::resolve(field, options);
        tracing::trace!(field = %field.full_name, member = %names.name, "resolved string field");
        Self { field, names }
    }

    pub fn field(&self) -> &FieldMetadata {
        self.field
    }

    pub fn names(&self) -> &ResolvedNames {
        &self.names
    }

    /// Symbol the static initializer uses when an explicit default exists
    pub fn default_value(&self) -> &str {
        &self.names.default
    }

    /// Member declarations inside the message struct
    pub fn generate_struct_members(&self, options: &GenerationOptions) -> CodegenResult<String> {
        let vars = self.names.variables();
        let mut printer = Printer::new();

        match self.field.cardinality {
            Cardinality::Required | Cardinality::Optional => {
                if options.const_strings {
                    printer.write_raw("const ");
                }
                printer.print(&vars, "char *$name$$deprecated$;\n")?;
            }
            Cardinality::Repeated => {
                printer.print(&vars, "size_t n_$name$$deprecated$;\n")?;
                if options.const_strings {
                    printer.write_raw("const ");
                }
                printer.print(&vars, "char **$name$$deprecated$;\n")?;
            }
        }

        Ok(printer.into_string())
    }

    /// `extern` declaration of the default value array.
    ///
    /// Emitted for every cardinality, including repeated fields whose
    /// initializer never refers to it.
    pub fn generate_default_value_declaration(&self) -> CodegenResult<String> {
        let mut printer = Printer::new();
        printer.print(&self.names.variables(), "extern char $default$[];\n")?;
        Ok(printer.into_string())
    }

    /// Definition of the default value array holding the escaped default
    pub fn generate_default_value_definition(&self) -> CodegenResult<String> {
        let raw = self
            .field
            .default_value
            .as_deref()
            .ok_or_else(|| CodegenError::MissingDefault(self.field.full_name.clone()))?;

        let escaped = c_escape(raw).map_err(|err| CodegenError::UnencodableDefault {
            field: self.field.full_name.clone(),
            reason: err.to_string(),
        })?;

        let vars = Variables::new()
            .with("default", self.names.default.as_str())
            .with("escaped", escaped);
        let mut printer = Printer::new();
        printer.print(&vars, "char $default$[] = \"$escaped$\";\n")?;
        Ok(printer.into_string())
    }

    /// Value snippet for this field inside the message's `__INIT` aggregate
    pub fn generate_static_initializer(&self, options: &GenerationOptions) -> CodegenResult<String> {
        let default = if self.field.has_explicit_default() {
            self.default_value()
        } else if self.field.schema_version == SchemaVersion::Proto2 {
            sentinels::NULL
        } else {
            sentinels::empty_string_initializer(options.const_strings)
        };

        let vars = Variables::new().with("default", default);
        let mut printer = Printer::new();
        match self.field.cardinality {
            Cardinality::Required | Cardinality::Optional => {
                printer.print(&vars, "$default$")?;
            }
            Cardinality::Repeated => {
                printer.print(&vars, "0,NULL")?;
            }
        }
        Ok(printer.into_string())
    }

    /// Row of the message's field descriptor table
    pub fn generate_descriptor_entry(&self, options: &GenerationOptions) -> CodegenResult<String> {
        generate_descriptor_initializer_generic(
            self.field,
            options,
            &DescriptorParams::plain("STRING"),
        )
    }
}
