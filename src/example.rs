//! Usage examples attached to a definition (`@apiSuccessExample` and friends).

use crate::define::{write_blank, write_row};
use crate::error::{DefineError, Result};
use crate::fragment::{match_kind, single_line, FragmentKind, RE_EXAMPLE_KIND};
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Indentation of example content inside the comment block.
const CONTENT_INDENT: &str = "    ";

/// Indentation used when serializing JSON example bodies.
const JSON_INDENT: &[u8] = b"\t";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExampleKind {
    Header,
    Param,
    Success,
    Error,
}

impl ExampleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ExampleKind::Header => "header",
            ExampleKind::Param => "param",
            ExampleKind::Success => "success",
            ExampleKind::Error => "error",
        }
    }

    /// apidoc tag, e.g. `@apiSuccessExample`.
    pub fn tag(self) -> &'static str {
        match self {
            ExampleKind::Header => "@apiHeaderExample",
            ExampleKind::Param => "@apiParamExample",
            ExampleKind::Success => "@apiSuccessExample",
            ExampleKind::Error => "@apiErrorExample",
        }
    }
}

impl FromStr for ExampleKind {
    type Err = DefineError;

    fn from_str(s: &str) -> Result<Self> {
        match match_kind(&RE_EXAMPLE_KIND, s) {
            Some(FragmentKind::Header) => Ok(ExampleKind::Header),
            Some(FragmentKind::Param) => Ok(ExampleKind::Param),
            Some(FragmentKind::Success) => Ok(ExampleKind::Success),
            Some(FragmentKind::Error) => Ok(ExampleKind::Error),
            None => Err(DefineError::example_kind(s)),
        }
    }
}

impl fmt::Display for ExampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A kind-tagged, pre-formatted example block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    kind: ExampleKind,
    /// Content type shown in braces, e.g. `json`.
    pub type_name: Option<String>,
    pub title: String,
    pub content: String,
}

impl Example {
    pub fn new(kind: ExampleKind, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind,
            type_name: None,
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Serialize `value` as tab-indented JSON and use it as the example body.
    pub fn json<T: Serialize + ?Sized>(
        kind: ExampleKind,
        title: impl Into<String>,
        value: &T,
    ) -> serde_json::Result<Self> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;
        let content = String::from_utf8_lossy(&buf).into_owned();
        Ok(Self::new(kind, title, content).with_type("json"))
    }

    pub fn kind(&self) -> ExampleKind {
        self.kind
    }

    /// Write the example as an indented block:
    ///
    /// ```text
    ///  * @apiSuccessExample {json} Success-Response:
    ///  *     HTTP/1.1 200 OK
    /// ```
    ///
    /// Empty content lines are written as blank commented lines.
    pub fn write_indented<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let mut head = self.kind.tag().to_string();
        if let Some(ref type_name) = self.type_name {
            head.push_str(&format!(" {{{}}}", single_line(type_name)));
        }
        let title = single_line(&self.title);
        if !title.is_empty() {
            head.push(' ');
            head.push_str(&title);
        }
        write_row(out, &head)?;

        for line in self.content.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                write_blank(out)?;
            } else {
                write_row(out, &format!("{}{}", CONTENT_INDENT, line))?;
            }
        }
        Ok(())
    }
}
