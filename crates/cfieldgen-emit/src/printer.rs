//! `$variable$` template rendering

use cfieldgen_core::{CodegenError, CodegenResult};
use std::collections::BTreeMap;

/// Named values substituted into templates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables(BTreeMap<String, String>);

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Builder form of [`Variables::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Substitute every `$name$` in `template` with its value from `vars`.
///
/// `$$` produces a literal `$`. Referencing a variable that is not in
/// `vars`, or leaving a `$` unclosed, is an error.
///
/// # Examples
///
/// ```
/// use cfieldgen_emit::{Variables, render};
///
/// let vars = Variables::new().with("name", "label");
/// assert_eq!(render("char *$name$;", &vars).unwrap(), "char *label;");
/// ```
pub fn render(template: &str, vars: &Variables) -> CodegenResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('$') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find('$')
            .ok_or_else(|| CodegenError::UnterminatedVariable(template.to_string()))?;

        let key = &after[..end];
        if key.is_empty() {
            out.push('$');
        } else {
            let value = vars
                .get(key)
                .ok_or_else(|| CodegenError::UnknownTemplateVariable {
                    variable: key.to_string(),
                    template: template.to_string(),
                })?;
            out.push_str(value);
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Accumulates rendered text, indenting each new line
#[derive(Debug)]
pub struct Printer {
    buf: String,
    indent: usize,
    at_line_start: bool,
}

const INDENT: &str = "  ";

impl Printer {
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            indent: 0,
            at_line_start: true,
        }
    }

    /// Render `template` with `vars` and append the result
    pub fn print(&mut self, vars: &Variables, template: &str) -> CodegenResult<()> {
        let text = render(template, vars)?;
        self.write_raw(&text);
        Ok(())
    }

    /// Append text verbatim apart from indentation
    pub fn write_raw(&mut self, text: &str) {
        for piece in text.split_inclusive('\n') {
            if self.at_line_start && piece != "\n" {
                for _ in 0..self.indent {
                    self.buf.push_str(INDENT);
                }
            }
            self.buf.push_str(piece);
            self.at_line_start = piece.ends_with('\n');
        }
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn outdent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}
