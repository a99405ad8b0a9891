//! Render options from the `[render]` table.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use synops_ir::EntityId;

/// Kind names accepted by `exclude_kinds`.
pub const KIND_NAMES: &[&str] = &[
    "file",
    "include",
    "macro",
    "namespace",
    "namespace_alias",
    "using_directive",
    "using_declaration",
    "alias",
    "enum",
    "enumerator",
    "class",
    "access",
    "variable",
    "field",
    "function",
];

/// Output format of a rendered synopsis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Html,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            other => Err(format!("unknown format '{other}', expected 'text' or 'html'")),
        }
    }
}

/// Indentation as written in a manifest: a width or `"tab"`.
///
/// This is the serialized form only. Loading a manifest does not pull in the
/// code generator, so the renderer converts it to `synops_codegen::Indent`
/// where both crates meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawIndent", into = "RawIndent")]
pub enum IndentSetting {
    Spaces(u8),
    Tab,
}

impl Default for IndentSetting {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawIndent {
    Width(u8),
    Name(String),
}

impl TryFrom<RawIndent> for IndentSetting {
    type Error = String;

    fn try_from(raw: RawIndent) -> Result<Self, Self::Error> {
        match raw {
            RawIndent::Width(n) if n <= 16 => Ok(Self::Spaces(n)),
            RawIndent::Width(n) => Err(format!("indent width {n} is larger than 16")),
            RawIndent::Name(name) if name == "tab" => Ok(Self::Tab),
            RawIndent::Name(name) => Err(format!(
                "invalid indent '{name}', expected a width or \"tab\""
            )),
        }
    }
}

impl From<IndentSetting> for RawIndent {
    fn from(setting: IndentSetting) -> Self {
        match setting {
            IndentSetting::Spaces(n) => Self::Width(n),
            IndentSetting::Tab => Self::Name("tab".to_string()),
        }
    }
}

/// How a manifest's file is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    pub format: Format,
    pub indent: IndentSetting,
    /// Entity ids excluded together with their children.
    pub exclude: Vec<EntityId>,
    /// Entity ids rendered as declarations only.
    pub declarations: Vec<EntityId>,
    /// Entity kinds excluded wholesale.
    pub exclude_kinds: Vec<String>,
}

impl RenderOptions {
    /// Apply another set of options on top of these.
    ///
    /// Scalar settings are replaced when given, lists are appended.
    pub fn merge(
        &mut self,
        format: Option<Format>,
        indent: Option<IndentSetting>,
        exclude: impl IntoIterator<Item = EntityId>,
        declarations: impl IntoIterator<Item = EntityId>,
        exclude_kinds: impl IntoIterator<Item = String>,
    ) {
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(indent) = indent {
            self.indent = indent;
        }
        self.exclude.extend(exclude);
        self.declarations.extend(declarations);
        self.exclude_kinds.extend(exclude_kinds);
    }
}
