//! System font stacks.

/// Errors from font stack lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FontStackError {
    #[error("unknown font stack: '{0}' (expected system-ui, sans-serif, serif or monospace)")]
    UnknownStack(String),
}

const SYSTEM_UI: &[&str] = &[
    "system-ui",
    "-apple-system",
    "BlinkMacSystemFont",
    "Segoe UI",
    "Roboto",
    "Oxygen-Sans",
    "Ubuntu",
    "Cantarell",
    "Helvetica Neue",
    "sans-serif",
];

const SERIF: &[&str] = &[
    "Iowan Old Style",
    "Apple Garamond",
    "Baskerville",
    "Times New Roman",
    "Droid Serif",
    "Times",
    "Source Serif Pro",
    "serif",
];

const MONOSPACE: &[&str] = &[
    "ui-monospace",
    "Menlo",
    "Consolas",
    "Monaco",
    "Liberation Mono",
    "Lucida Console",
    "monospace",
];

/// Stack names with their families, most specific first.
pub const STACKS: &[(&str, &[&str])] = &[
    ("system-ui", SYSTEM_UI),
    ("sans-serif", SYSTEM_UI),
    ("serif", SERIF),
    ("monospace", MONOSPACE),
];

/// The families in a stack, looked up case-insensitively.
pub fn families(name: &str) -> Result<&'static [&'static str], FontStackError> {
    let key = name.trim();
    STACKS
        .iter()
        .find(|(stack, _)| stack.eq_ignore_ascii_case(key))
        .map(|(_, families)| *families)
        .ok_or_else(|| FontStackError::UnknownStack(name.to_string()))
}

/// A stack as a CSS `font-family` value. Family names containing spaces are quoted.
pub fn font_stack(name: &str) -> Result<String, FontStackError> {
    let quoted: Vec<String> = families(name)?
        .iter()
        .map(|family| {
            if family.contains(' ') {
                format!("\"{family}\"")
            } else {
                (*family).to_string()
            }
        })
        .collect();
    Ok(quoted.join(", "))
}
