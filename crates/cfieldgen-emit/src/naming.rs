//! Naming convention utilities for generated C code.
//!
//! Schema names arrive as dotted, mixed-case identifiers; generated C uses
//! lower-case symbols joined with `__` for values and `Camel__Case` for
//! struct types.
//!
//! # Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `FooBar` | [`camel_to_lower`] | `foo_bar` |
//! | `FooBar` | [`camel_to_upper`] | `FOO_BAR` |
//! | `foo_bar` | [`to_camel`] | `FooBar` |
//! | `pkg.Msg.field` | [`full_name_to_lower`] | `pkg__msg__field` |
//! | `pkg.my_msg` | [`full_name_to_c`] | `Pkg__MyMsg` |
//! | `int` | [`field_name`] | `int_` |

use crate::sentinels;
use cfieldgen_core::{FieldMetadata, GenerationOptions};

/// C and C++ keywords that cannot name a struct member
const KEYWORDS: &[&str] = &[
    "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break", "case", "catch", "char",
    "class", "compl", "const", "const_cast", "continue", "default", "delete", "do", "double",
    "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false", "float", "for",
    "friend", "goto", "if", "inline", "int", "long", "mutable", "namespace", "new", "not",
    "not_eq", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "restrict", "return", "short", "signed", "sizeof", "static",
    "static_cast", "struct", "switch", "template", "this", "throw", "true", "try", "typedef",
    "typeid", "typename", "union", "unsigned", "using", "virtual", "void", "volatile",
    "wchar_t", "while", "xor", "xor_eq",
];

/// Convert CamelCase to lower_snake_case.
///
/// An underscore is inserted before each upper-case letter that follows a
/// non-upper-case character, so runs of capitals stay together.
///
/// # Examples
///
/// ```
/// use cfieldgen_emit::naming::camel_to_lower;
///
/// assert_eq!(camel_to_lower("FooBar"), "foo_bar");
/// assert_eq!(camel_to_lower("HTTPRequest"), "httprequest");
/// assert_eq!(camel_to_lower("already_lower"), "already_lower");
/// ```
pub fn camel_to_lower(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut was_upper = true;

    for c in name.chars() {
        let is_upper = c.is_ascii_uppercase();
        if is_upper {
            if !was_upper {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
        was_upper = is_upper;
    }

    result
}

/// Convert CamelCase to UPPER_SNAKE_CASE.
///
/// # Examples
///
/// ```
/// use cfieldgen_emit::naming::camel_to_upper;
///
/// assert_eq!(camel_to_upper("FooBar"), "FOO_BAR");
/// ```
pub fn camel_to_upper(name: &str) -> String {
    camel_to_lower(name).to_ascii_uppercase()
}

/// Convert snake_case to CamelCase with a leading capital.
///
/// # Examples
///
/// ```
/// use cfieldgen_emit::naming::to_camel;
///
/// assert_eq!(to_camel("hello_world"), "HelloWorld");
/// assert_eq!(to_camel("Item"), "Item");
/// ```
pub fn to_camel(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = true;

    for c in name.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Dotted segments of `full_name` after applying the `c_package` option.
fn qualified_segments<'a>(
    full_name: &'a str,
    package: &str,
    c_package: Option<&'a str>,
) -> Vec<&'a str> {
    let Some(c_package) = c_package else {
        return full_name.split('.').filter(|s| !s.is_empty()).collect();
    };

    let local = if package.is_empty() {
        full_name
    } else {
        full_name
            .strip_prefix(package)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(full_name)
    };

    c_package
        .split('.')
        .chain(local.split('.'))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Lower-case C symbol for a fully-qualified schema name.
///
/// # Examples
///
/// ```
/// use cfieldgen_emit::naming::full_name_to_lower;
///
/// assert_eq!(full_name_to_lower("shop.LineItem.sku", "shop", None), "shop__line_item__sku");
/// assert_eq!(full_name_to_lower("shop.Item.sku", "shop", Some("acme")), "acme__item__sku");
/// ```
pub fn full_name_to_lower(full_name: &str, package: &str, c_package: Option<&str>) -> String {
    qualified_segments(full_name, package, c_package)
        .into_iter()
        .map(camel_to_lower)
        .collect::<Vec<_>>()
        .join("__")
}

/// C struct type name for a fully-qualified message name.
///
/// # Examples
///
/// ```
/// use cfieldgen_emit::naming::full_name_to_c;
///
/// assert_eq!(full_name_to_c("shop.line_items.Item", "shop", None), "Shop__LineItems__Item");
/// ```
pub fn full_name_to_c(full_name: &str, package: &str, c_package: Option<&str>) -> String {
    qualified_segments(full_name, package, c_package)
        .into_iter()
        .map(to_camel)
        .collect::<Vec<_>>()
        .join("__")
}

/// Struct member name for a field.
///
/// Lower-cases the schema name and appends `_` when it collides with a C
/// keyword.
pub fn field_name(name: &str) -> String {
    let mut result = name.to_ascii_lowercase();
    if KEYWORDS.contains(&result.as_str()) {
        result.push('_');
    }
    result
}

/// Deprecation annotation placed after a declaration name, or empty.
pub fn field_deprecated(field: &FieldMetadata) -> &'static str {
    if field.deprecated {
        sentinels::DEPRECATED_ANNOTATION
    } else {
        ""
    }
}

/// Global symbol holding a field's default value.
pub fn default_value_symbol(field: &FieldMetadata, options: &GenerationOptions) -> String {
    let mut symbol = full_name_to_lower(
        &field.full_name,
        &field.package,
        options.c_package.as_deref(),
    );
    symbol.push_str(sentinels::DEFAULT_VALUE_SUFFIX);
    symbol
}

/// C struct type of the message declaring `field`.
pub fn containing_struct_name(field: &FieldMetadata, options: &GenerationOptions) -> String {
    full_name_to_c(
        field.containing_type(),
        &field.package,
        options.c_package.as_deref(),
    )
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
