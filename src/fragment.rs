//! Fragments — the single-line entries of an `@apiDefine` block.
//!
//! A fragment is anything that can render itself as one line of block content
//! ([`Line`]), tagged with the section it belongs to ([`Fragment`]). The four
//! apidoc field types (`@apiHeader`, `@apiParam`, `@apiSuccess`, `@apiError`)
//! are provided here; callers with pre-rendered lines can wrap any [`Line`].

use crate::error::{DefineError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Bare kinds (`success`) or apidoc field tags (`apiSuccess`, `@apiSuccess`),
/// case-insensitively.
pub(crate) static RE_FRAGMENT_KIND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^@?(?:api)?(header|param|success|error)$").unwrap()
});

/// As [`RE_FRAGMENT_KIND`], also accepting the `Example` tag suffix.
pub(crate) static RE_EXAMPLE_KIND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^@?(?:api)?(header|param|success|error)(?:example)?$").unwrap()
});

/// Collapse whitespace runs (newlines included) to single spaces and break
/// up `*/` so text cannot leave its comment line.
pub(crate) fn single_line(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("*/", "* /")
}

/// Capability to render as a single line of text, without the comment prefix.
pub trait Line: fmt::Debug {
    fn line(&self) -> String;
}

impl Line for String {
    fn line(&self) -> String {
        self.clone()
    }
}

impl Line for &'static str {
    fn line(&self) -> String {
        (*self).to_string()
    }
}

/// Section a fragment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Header,
    Param,
    Success,
    Error,
}

impl FragmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FragmentKind::Header => "header",
            FragmentKind::Param => "param",
            FragmentKind::Success => "success",
            FragmentKind::Error => "error",
        }
    }

    /// apidoc tag for field lines of this kind, e.g. `@apiParam`.
    pub fn tag(self) -> &'static str {
        match self {
            FragmentKind::Header => "@apiHeader",
            FragmentKind::Param => "@apiParam",
            FragmentKind::Success => "@apiSuccess",
            FragmentKind::Error => "@apiError",
        }
    }
}

/// Match a loosely-typed kind name against `re`. Shared with example kinds.
pub(crate) fn match_kind(re: &Regex, s: &str) -> Option<FragmentKind> {
    let caps = re.captures(s.trim())?;
    match caps[1].to_ascii_lowercase().as_str() {
        "header" => Some(FragmentKind::Header),
        "param" => Some(FragmentKind::Param),
        "success" => Some(FragmentKind::Success),
        "error" => Some(FragmentKind::Error),
        _ => None,
    }
}

impl FromStr for FragmentKind {
    type Err = DefineError;

    fn from_str(s: &str) -> Result<Self> {
        match_kind(&RE_FRAGMENT_KIND, s).ok_or_else(|| DefineError::fragment_kind(s))
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -- Field lines --------------------------------------------------------------

/// One apidoc field entry:
/// `@apiX [(group)] [{type}] field|[field]|[field=default] [description]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    pub group: Option<String>,
    pub type_name: Option<String>,
    pub name: String,
    pub default: Option<String>,
    pub optional: bool,
    pub description: Option<String>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Render with the given apidoc tag.
    pub fn render(&self, tag: &str) -> String {
        let mut parts: Vec<String> = vec![tag.to_string()];

        if let Some(ref group) = self.group {
            parts.push(format!("({})", single_line(group)));
        }
        if let Some(ref type_name) = self.type_name {
            parts.push(format!("{{{}}}", single_line(type_name)));
        }

        let name = single_line(&self.name);
        let field = match self.default {
            Some(ref default) => format!("{}={}", name, single_line(default)),
            None => name,
        };
        if self.optional {
            parts.push(format!("[{}]", field));
        } else {
            parts.push(field);
        }

        if let Some(ref desc) = self.description {
            let desc = single_line(desc);
            if !desc.is_empty() {
                parts.push(desc);
            }
        }

        parts.join(" ")
    }
}

/// `@apiHeader` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiHeader(pub Field);

/// `@apiParam` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiParam(pub Field);

/// `@apiSuccess` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSuccess(pub Field);

/// `@apiError` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError(pub Field);

impl Line for ApiHeader {
    fn line(&self) -> String {
        self.0.render(FragmentKind::Header.tag())
    }
}

impl Line for ApiParam {
    fn line(&self) -> String {
        self.0.render(FragmentKind::Param.tag())
    }
}

impl Line for ApiSuccess {
    fn line(&self) -> String {
        self.0.render(FragmentKind::Success.tag())
    }
}

impl Line for ApiError {
    fn line(&self) -> String {
        self.0.render(FragmentKind::Error.tag())
    }
}

// -- Fragment -----------------------------------------------------------------

/// A line tagged with the section of the block it goes in.
#[derive(Debug)]
pub enum Fragment {
    Header(Box<dyn Line>),
    Param(Box<dyn Line>),
    Success(Box<dyn Line>),
    Error(Box<dyn Line>),
}

impl Fragment {
    pub fn header(line: impl Line + 'static) -> Self {
        Fragment::Header(Box::new(line))
    }

    pub fn param(line: impl Line + 'static) -> Self {
        Fragment::Param(Box::new(line))
    }

    pub fn success(line: impl Line + 'static) -> Self {
        Fragment::Success(Box::new(line))
    }

    pub fn error(line: impl Line + 'static) -> Self {
        Fragment::Error(Box::new(line))
    }

    /// Build the apidoc field fragment for `kind`.
    pub fn field(kind: FragmentKind, field: Field) -> Self {
        match kind {
            FragmentKind::Header => ApiHeader(field).into(),
            FragmentKind::Param => ApiParam(field).into(),
            FragmentKind::Success => ApiSuccess(field).into(),
            FragmentKind::Error => ApiError(field).into(),
        }
    }

    pub fn kind(&self) -> FragmentKind {
        match self {
            Fragment::Header(_) => FragmentKind::Header,
            Fragment::Param(_) => FragmentKind::Param,
            Fragment::Success(_) => FragmentKind::Success,
            Fragment::Error(_) => FragmentKind::Error,
        }
    }
}

impl Line for Fragment {
    fn line(&self) -> String {
        match self {
            Fragment::Header(l) | Fragment::Param(l) | Fragment::Success(l) | Fragment::Error(l) => {
                l.line()
            }
        }
    }
}

impl From<ApiHeader> for Fragment {
    fn from(h: ApiHeader) -> Self {
        Fragment::header(h)
    }
}

impl From<ApiParam> for Fragment {
    fn from(p: ApiParam) -> Self {
        Fragment::param(p)
    }
}

impl From<ApiSuccess> for Fragment {
    fn from(s: ApiSuccess) -> Self {
        Fragment::success(s)
    }
}

impl From<ApiError> for Fragment {
    fn from(e: ApiError) -> Self {
        Fragment::error(e)
    }
}

// -- FragmentArg --------------------------------------------------------------

/// One argument to [`Definition::add_fragments`](crate::Definition::add_fragments):
/// a single fragment, or an ordered sequence expanded one level.
#[derive(Debug)]
pub enum FragmentArg {
    One(Fragment),
    Many(Vec<Fragment>),
}

impl IntoIterator for FragmentArg {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            FragmentArg::One(f) => vec![f].into_iter(),
            FragmentArg::Many(fs) => fs.into_iter(),
        }
    }
}

impl From<Fragment> for FragmentArg {
    fn from(f: Fragment) -> Self {
        FragmentArg::One(f)
    }
}

impl From<ApiHeader> for FragmentArg {
    fn from(h: ApiHeader) -> Self {
        FragmentArg::One(h.into())
    }
}

impl From<ApiParam> for FragmentArg {
    fn from(p: ApiParam) -> Self {
        FragmentArg::One(p.into())
    }
}

impl From<ApiSuccess> for FragmentArg {
    fn from(s: ApiSuccess) -> Self {
        FragmentArg::One(s.into())
    }
}

impl From<ApiError> for FragmentArg {
    fn from(e: ApiError) -> Self {
        FragmentArg::One(e.into())
    }
}

impl<T: Into<Fragment>> From<Vec<T>> for FragmentArg {
    fn from(items: Vec<T>) -> Self {
        FragmentArg::Many(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_name_only() {
        let h = ApiHeader(Field::new("Authorization"));
        assert_eq!(h.line(), "@apiHeader Authorization");
    }

    #[test]
    fn field_full() {
        let p = ApiParam(
            Field::new("id")
                .group("Path")
                .type_name("Number")
                .description("Users unique ID."),
        );
        assert_eq!(p.line(), "@apiParam (Path) {Number} id Users unique ID.");
    }

    #[test]
    fn field_optional_with_default() {
        let p = ApiParam(
            Field::new("limit")
                .type_name("Number")
                .default_value("20")
                .optional(),
        );
        assert_eq!(p.line(), "@apiParam {Number} [limit=20]");
    }

    #[test]
    fn field_required_with_default() {
        let s = ApiSuccess(Field::new("status").default_value("\"ok\""));
        assert_eq!(s.line(), "@apiSuccess status=\"ok\"");
    }

    #[test]
    fn field_description_collapses_newlines() {
        let e = ApiError(Field::new("UserNotFound").description("The id of the\n  User was not found."));
        assert_eq!(e.line(), "@apiError UserNotFound The id of the User was not found.");
    }

    #[test]
    fn field_components_stay_on_one_line() {
        let p = ApiParam(
            Field::new("id\n */ x")
                .group("Path\nGroup")
                .type_name("Num\nber")
                .default_value("a\nb"),
        );
        let line = p.line();
        assert!(!line.contains('\n'), "Got: {line}");
        assert!(!line.contains("*/"), "Got: {line}");
        assert_eq!(line, "@apiParam (Path Group) {Num ber} id * / x=a b");
    }

    #[test]
    fn single_line_collapses_and_breaks_comment_end() {
        assert_eq!(single_line("  a\n\tb  "), "a b");
        assert_eq!(single_line("end */ here"), "end * / here");
    }

    #[test]
    fn fragment_kind_follows_variant() {
        assert_eq!(Fragment::from(ApiHeader(Field::new("a"))).kind(), FragmentKind::Header);
        assert_eq!(Fragment::param("x").kind(), FragmentKind::Param);
        assert_eq!(Fragment::field(FragmentKind::Error, Field::new("e")).kind(), FragmentKind::Error);
    }

    #[test]
    fn fragment_delegates_line() {
        assert_eq!(Fragment::success("200 OK").line(), "200 OK");
        assert_eq!(Fragment::header(String::from("Authorization")).line(), "Authorization");
    }

    #[test]
    fn kind_parses_bare_and_tag_names() {
        assert_eq!("success".parse::<FragmentKind>().unwrap(), FragmentKind::Success);
        assert_eq!("Header".parse::<FragmentKind>().unwrap(), FragmentKind::Header);
        assert_eq!("apiParam".parse::<FragmentKind>().unwrap(), FragmentKind::Param);
        assert_eq!("@apiError".parse::<FragmentKind>().unwrap(), FragmentKind::Error);
    }

    #[test]
    fn kind_rejects_example_tags() {
        let err = "apiHeaderExample".parse::<FragmentKind>().unwrap_err();
        assert_eq!(err, DefineError::fragment_kind("apiHeaderExample"));
    }

    #[test]
    fn kind_rejects_unknown() {
        let err = "permission".parse::<FragmentKind>().unwrap_err();
        assert_eq!(err, DefineError::fragment_kind("permission"));
    }

    #[test]
    fn arg_sequence_keeps_order() {
        let arg = FragmentArg::from(vec![
            ApiParam(Field::new("a")),
            ApiParam(Field::new("b")),
        ]);
        let lines: Vec<String> = arg.into_iter().map(|f| f.line()).collect();
        assert_eq!(lines, vec!["@apiParam a", "@apiParam b"]);
    }
}
