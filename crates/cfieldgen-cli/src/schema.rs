//! Schema description parsing
//!
//! The driver reads an already-parsed description of a schema file (JSON or
//! TOML) rather than `.proto` source.

use anyhow::{Context, Result};
use cfieldgen_core::{Cardinality, FieldKind, FieldMetadata, GenerationOptions, SchemaVersion};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One schema file's messages and options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaFile {
    /// Package the messages are declared in (may be empty)
    #[serde(default)]
    pub package: String,

    /// Schema language generation, `2` or `3`
    pub syntax: SchemaVersion,

    #[serde(default)]
    pub options: GenerationOptions,

    #[serde(default)]
    pub messages: Vec<MessageDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDefinition {
    /// Message name relative to the package; nested messages use `Outer.Inner`
    pub name: String,

    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub number: u32,
    pub kind: FieldKind,

    #[serde(alias = "label")]
    pub cardinality: Cardinality,

    #[serde(default)]
    pub default: Option<String>,

    #[serde(default)]
    pub deprecated: bool,

    #[serde(default)]
    pub oneof: Option<String>,

    #[serde(default)]
    pub packed: bool,
}

/// A message with its fields resolved to full metadata
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDescriptor {
    /// Fully-qualified message name
    pub full_name: String,
    pub fields: Vec<FieldMetadata>,
}

impl SchemaFile {
    /// Load a description, choosing the format from the file extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema: {}", path.display()))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            _ => Self::from_toml(&content),
        }
        .with_context(|| format!("Invalid schema: {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse JSON schema description")
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML schema description")
    }

    /// Validate the description
    pub fn validate(&self) -> Result<()> {
        for message in &self.messages {
            if message.name.is_empty() {
                anyhow::bail!("Message name cannot be empty");
            }

            for field in &message.fields {
                if field.name.is_empty() {
                    anyhow::bail!("Field name cannot be empty in message '{}'", message.name);
                }
                if field.number == 0 {
                    anyhow::bail!(
                        "Field '{}' in message '{}' must have a positive number",
                        field.name,
                        message.name
                    );
                }
                if field.oneof.is_some() && field.cardinality != Cardinality::Optional {
                    anyhow::bail!(
                        "Field '{}' in message '{}' is in a oneof and must be optional",
                        field.name,
                        message.name
                    );
                }
            }

            let mut numbers: Vec<u32> = message.fields.iter().map(|field| field.number).collect();
            numbers.sort_unstable();
            if let Some(pair) = numbers.windows(2).find(|pair| pair[0] == pair[1]) {
                anyhow::bail!(
                    "Field number {} is used twice in message '{}'",
                    pair[0],
                    message.name
                );
            }
        }

        Ok(())
    }

    /// Resolve every message into fully-qualified field metadata
    pub fn messages(&self) -> Vec<MessageDescriptor> {
        self.messages
            .iter()
            .map(|message| {
                let full_name = self.qualify(&message.name);
                let fields = message
                    .fields
                    .iter()
                    .map(|field| FieldMetadata {
                        name: field.name.clone(),
                        full_name: format!("{full_name}.{}", field.name),
                        package: self.package.clone(),
                        number: field.number,
                        kind: field.kind,
                        cardinality: field.cardinality,
                        schema_version: self.syntax,
                        default_value: field.default.clone(),
                        deprecated: field.deprecated,
                        oneof: field.oneof.clone(),
                        packed: field.packed,
                    })
                    .collect();

                MessageDescriptor { full_name, fields }
            })
            .collect()
    }

    fn qualify(&self, name: &str) -> String {
        if self.package.is_empty() {
            name.to_string()
        } else {
            format!("{}.{name}", self.package)
        }
    }
}

/// Load generation options from a standalone JSON or TOML file.
///
/// An empty JSON file yields the default options.
pub fn load_options(path: impl AsRef<Path>) -> Result<GenerationOptions> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read options: {}", path.display()))?;

    let options = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => GenerationOptions::from_json(&bytes)?,
        _ => GenerationOptions::from_toml(&String::from_utf8_lossy(&bytes))?,
    };
    Ok(options)
}
