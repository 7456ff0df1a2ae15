//! Process-wide constants referenced by generated code.
//!
//! Every field generator refers to these by name; none is ever redefined
//! per field.

macro_rules! empty_string {
    () => {
        "protobuf_c_empty_string"
    };
}

/// Null pointer sentinel
pub const NULL: &str = "NULL";

/// Shared empty string provided by the runtime library
pub const EMPTY_STRING: &str = empty_string!();

/// Shared empty string typed for a `const char *` member
pub const EMPTY_STRING_CONST: &str = concat!("(const char *)", empty_string!());

/// Shared empty string typed for a `char *` member
pub const EMPTY_STRING_MUT: &str = concat!("(char *)", empty_string!());

/// Annotation appended to deprecated declarations
pub const DEPRECATED_ANNOTATION: &str = " PROTOBUF_C__DEPRECATED";

/// Suffix of per-field default value symbols
pub const DEFAULT_VALUE_SUFFIX: &str = "__default_value";

/// Empty-string initializer matching a member's constness
pub fn empty_string_initializer(const_strings: bool) -> &'static str {
    if const_strings {
        EMPTY_STRING_CONST
    } else {
        EMPTY_STRING_MUT
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn empty_string_initializer___const___casts_to_const_pointer() {
        assert_eq!(
            empty_string_initializer(true),
            "(const char *)protobuf_c_empty_string"
        );
    }

    #[test]
    fn empty_string_initializer___mutable___casts_to_char_pointer() {
        assert_eq!(
            empty_string_initializer(false),
            "(char *)protobuf_c_empty_string"
        );
    }

    #[test]
    fn EMPTY_STRING___is_shared_by_both_casts() {
        assert!(EMPTY_STRING_CONST.ends_with(EMPTY_STRING));
        assert!(EMPTY_STRING_MUT.ends_with(EMPTY_STRING));
    }
}
