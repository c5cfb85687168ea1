//! apidefine — build apidoc `@apiDefine` comment blocks.
//!
//! A [`Definition`] is assembled from header, param, success and error
//! fragments plus their usage examples, then rendered into the block-comment
//! layout the apidoc generator reads:
//!
//! ```
//! use apidefine::{ApiHeader, ApiParam, Definition, Field, FragmentArg};
//!
//! let mut def = Definition::new("User");
//! def.add_fragments([
//!     FragmentArg::from(ApiHeader(Field::new("Authorization").type_name("String"))),
//!     FragmentArg::from(ApiParam(Field::new("id").type_name("Number"))),
//! ]);
//! assert!(def.to_block().starts_with("/**\n * @apiDefine User\n"));
//! ```
//!
//! Loosely-typed input (JSON definition files) goes through [`raw`], which is
//! where unsupported fragment or example kinds are rejected.

pub mod define;
pub mod error;
pub mod example;
pub mod fragment;
pub mod raw;
pub mod set;

pub use define::{write_blank, write_row, Definition};
pub use error::{DefineError, Result};
pub use example::{Example, ExampleKind};
pub use fragment::{
    ApiError, ApiHeader, ApiParam, ApiSuccess, Field, Fragment, FragmentArg, FragmentKind, Line,
};
pub use raw::{RawDefinition, RawDocument, RawExample, RawFragment, RawFragmentArg};
pub use set::DefinitionSet;
