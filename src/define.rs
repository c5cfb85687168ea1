//! `@apiDefine` block assembly and rendering.
//!
//! A [`Definition`] collects fragments and examples in insertion order, then
//! writes them out in a fixed section order:
//!
//! ```text
//! /**
//!  * @apiDefine <Name>
//!  *
//!  * <header lines>
//!  *
//!  * <header example>
//!  *
//!  * <param lines>
//!  *
//!  * <param example>
//!  *
//!  * <success lines>
//!  *
//!  * <success examples, back to back>
//!  * <error lines>
//!  *
//!  * <error examples, back to back>
//!  */
//! ```
//!
//! followed by two empty lines. Empty sections are skipped entirely.

use crate::example::{Example, ExampleKind};
use crate::fragment::{single_line, Fragment, FragmentArg, FragmentKind, Line};
use std::fmt;
use std::io::{self, Write};
use tracing::debug;

pub const BLOCK_COMMENT_START: &str = "/**";
pub const BLOCK_COMMENT_PREFIX: &str = " * ";
pub const BLOCK_COMMENT_END: &str = " */";

/// Write one commented line: prefix, text, line break.
pub fn write_row<W: Write + ?Sized>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{}{}", BLOCK_COMMENT_PREFIX, text)
}

/// Write a commented line with no content.
///
/// This is ` *` and a line break, without the prefix's trailing space, so
/// separator lines carry no trailing whitespace. Blocks generated by earlier
/// tools wrote ` * `; apidoc treats both the same.
pub fn write_blank<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BLOCK_COMMENT_PREFIX.trim_end())
}

/// A named `@apiDefine` block under construction.
#[derive(Debug)]
pub struct Definition {
    name: String,
    /// Group label. Not rendered; used to select definitions from a set.
    pub group: Option<String>,
    headers: Vec<Fragment>,
    header_example: Option<Example>,
    params: Vec<Fragment>,
    param_example: Option<Example>,
    success: Vec<Fragment>,
    success_examples: Vec<Example>,
    errors: Vec<Fragment>,
    error_examples: Vec<Example>,
}

impl Definition {
    /// Create an empty definition. Name uniqueness is the caller's concern.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: None,
            headers: Vec::new(),
            header_example: None,
            params: Vec::new(),
            param_example: None,
            success: Vec::new(),
            success_examples: Vec::new(),
            errors: Vec::new(),
            error_examples: Vec::new(),
        }
    }

    /// Create a definition grouped by the first segment of a request path.
    ///
    /// `/users/:id` → group `Users`.
    pub fn for_path(path: &str, name: impl Into<String>) -> Self {
        let mut def = Self::new(name);
        def.group = group_from_path(path);
        def
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn headers(&self) -> &[Fragment] {
        &self.headers
    }

    pub fn params(&self) -> &[Fragment] {
        &self.params
    }

    pub fn success(&self) -> &[Fragment] {
        &self.success
    }

    pub fn errors(&self) -> &[Fragment] {
        &self.errors
    }

    pub fn header_example(&self) -> Option<&Example> {
        self.header_example.as_ref()
    }

    pub fn param_example(&self) -> Option<&Example> {
        self.param_example.as_ref()
    }

    pub fn success_examples(&self) -> &[Example] {
        &self.success_examples
    }

    pub fn error_examples(&self) -> &[Example] {
        &self.error_examples
    }

    /// Append fragments. Each argument is a single fragment or a sequence,
    /// expanded one level; every fragment lands in the section matching its
    /// variant, in argument order.
    pub fn add_fragments<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<FragmentArg>,
    {
        for item in items {
            for fragment in item.into() {
                self.push_fragment(fragment);
            }
        }
        self
    }

    /// Append a single fragment.
    pub fn add_fragment(&mut self, fragment: impl Into<Fragment>) -> &mut Self {
        self.push_fragment(fragment.into());
        self
    }

    pub(crate) fn push_fragment(&mut self, fragment: Fragment) {
        let kind = fragment.kind();
        debug!(define = %self.name, %kind, "add fragment");
        match kind {
            FragmentKind::Header => self.headers.push(fragment),
            FragmentKind::Param => self.params.push(fragment),
            FragmentKind::Success => self.success.push(fragment),
            FragmentKind::Error => self.errors.push(fragment),
        }
    }

    /// Attach an example. Header and param examples replace any previous
    /// one; success and error examples accumulate.
    pub fn add_example(&mut self, example: Example) -> &mut Self {
        let kind = example.kind();
        debug!(define = %self.name, %kind, title = %example.title, "add example");
        match kind {
            ExampleKind::Header => self.header_example = Some(example),
            ExampleKind::Param => self.param_example = Some(example),
            ExampleKind::Success => self.success_examples.push(example),
            ExampleKind::Error => self.error_examples.push(example),
        }
        self
    }

    /// Write the block comment. Only reads state, so repeated calls produce
    /// identical output.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", BLOCK_COMMENT_START)?;
        write_row(out, &format!("@apiDefine {}", single_line(&self.name)))?;
        write_blank(out)?;

        // Header
        write_section(out, &self.headers)?;
        if let Some(ref example) = self.header_example {
            example.write_indented(out)?;
            write_blank(out)?;
        }

        // Param
        write_section(out, &self.params)?;
        if let Some(ref example) = self.param_example {
            example.write_indented(out)?;
            write_blank(out)?;
        }

        // Success
        write_section(out, &self.success)?;
        for example in &self.success_examples {
            example.write_indented(out)?;
        }

        // Errors
        write_section(out, &self.errors)?;
        for example in &self.error_examples {
            example.write_indented(out)?;
        }

        writeln!(out, "{}", BLOCK_COMMENT_END)?;
        writeln!(out)?;
        writeln!(out)
    }

    /// Render the block into a string.
    pub fn to_block(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_block())
    }
}

/// Fragment lines followed by a blank line; nothing when empty.
fn write_section<W: Write + ?Sized>(out: &mut W, fragments: &[Fragment]) -> io::Result<()> {
    if fragments.is_empty() {
        return Ok(());
    }
    for fragment in fragments {
        write_row(out, &fragment.line())?;
    }
    write_blank(out)
}

/// First non-empty path segment with its first letter upper-cased.
fn group_from_path(path: &str) -> Option<String> {
    let segment = path.split('/').find(|s| !s.is_empty())?;
    let mut chars = segment.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars).collect())
}
