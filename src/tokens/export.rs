//! Token set exporters.

use std::fmt::Write;

use super::TokenSet;
use super::error::TokenError;

impl TokenSet {
    /// Export the token set as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, TokenError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Export the token set as a `:root` block of CSS custom properties.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "/* {} */", self.meta.name);
        out.push_str(":root {\n");

        for (name, value) in &self.palette {
            push_property(&mut out, &format!("palette-{}", css_ident(name)), value);
        }
        for (name, value) in &self.colors {
            push_property(&mut out, &format!("color-{}", css_ident(name)), value);
        }
        for (name, values) in &self.gradients {
            for (i, value) in values.iter().enumerate() {
                push_property(
                    &mut out,
                    &format!("gradient-{}-{i}", css_ident(name)),
                    value,
                );
            }
        }
        for (step, value) in &self.scale {
            push_property(&mut out, &format!("scale-{}", step_ident(*step)), value);
        }
        for (role, value) in &self.fonts {
            push_property(&mut out, &format!("font-{}", css_ident(role)), value);
        }

        out.push_str("}\n");
        out
    }
}

fn push_property(out: &mut String, name: &str, value: &str) {
    let _ = writeln!(out, "  --{name}: {value};");
}

/// Lowercase a token name and replace separators with `-`.
fn css_ident(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '.' | '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Negative steps become `n1`, `n2`, ...
fn step_ident(step: i32) -> String {
    if step < 0 {
        format!("n{}", step.unsigned_abs())
    } else {
        step.to_string()
    }
}
