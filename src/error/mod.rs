// Copyright (C) 2024 Pulumi Bridge Contributors
// This file is a part of the schema-codec crate.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//         http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Errors produced while deriving or applying a codec.
mod context;
mod linkedlist;

pub use context::{Context, Location};

use crate::ttype::TType;
use std::fmt;

/// An error produced while encoding or decoding a value against an already
/// derived codec tree. Carries a [`Context`] describing where, in the value
/// being processed, the failure occurred.
#[derive(Debug, Clone)]
pub struct Error {
    context: Context,
    kind: CodecErrorKind,
}

impl std::error::Error for Error {}

impl Error {
    /// Construct a new, context-free error. Callers low in the codec tree
    /// use this; callers higher up add context as the error unwinds.
    pub fn new(kind: CodecErrorKind) -> Error {
        Error { context: Context::new(), kind }
    }
    /// The underlying failure.
    pub fn kind(&self) -> &CodecErrorKind {
        &self.kind
    }
    /// The path at which the failure occurred.
    pub fn context(&self) -> &Context {
        &self.context
    }
    /// Note which attribute the error occurred in, returning a new `Error`.
    pub fn at_field(mut self, field: impl Into<std::borrow::Cow<'static, str>>) -> Self {
        self.context = self.context.at_field(field);
        self
    }
    /// Note which sequence index the error occurred at.
    pub fn at_idx(mut self, idx: usize) -> Self {
        self.context = self.context.at_idx(idx);
        self
    }
    /// Note which tuple position the error occurred at.
    pub fn at_tuple_index(mut self, idx: usize) -> Self {
        self.context = self.context.at_tuple_index(idx);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error at {}: {}", self.context.path(), self.kind)
    }
}

impl From<CodecErrorKind> for Error {
    fn from(kind: CodecErrorKind) -> Error {
        Error::new(kind)
    }
}

/// The underlying nature of an apply-time (encode/decode) failure.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CodecErrorKind {
    /// A leaf codec received a value of an incompatible shape.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// What the codec expected to find.
        expected: &'static str,
        /// A short description of what was actually found.
        found: &'static str,
    },
    /// A string could not be parsed as a number.
    #[error("could not parse {value:?} as a number")]
    NumberParseError {
        /// The string that failed to parse.
        value: String,
    },
    /// A tuple-shaped array had the wrong number of entries.
    #[error("expected a tuple of length {expected_len}, found length {actual_len}")]
    TupleArity {
        /// Length the tuple T-type declares.
        expected_len: usize,
        /// Length actually observed in the value.
        actual_len: usize,
    },
    /// A top-level decode did not produce an object as required.
    #[error("expected the decoded value to be an object")]
    ExpectedObject,
    /// The dynamic codec encountered a shape it cannot handle without a
    /// schema to guide it (asset, archive, resource reference, or secret).
    #[error("{kind} cannot appear in a dynamically-typed position")]
    UnsupportedInDynamic {
        /// A short name for the unsupported P-value shape.
        kind: &'static str,
    },
    /// A custom error, for extension points outside this crate's own
    /// taxonomy.
    #[error("{0}")]
    Custom(String),
}

/// An error produced while deriving a codec tree from a schema and T-type.
/// Unlike [`Error`], derivation errors have no value-level path to report;
/// each variant carries the offending name or type inline instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaError {
    /// The T-type has no corresponding codec (e.g. an unrecognised capsule
    /// shape slipped past the type model).
    #[error("unsupported T-type: {ty:?}")]
    UnsupportedType {
        /// The T-type derivation could not build a codec for.
        ty: TType,
    },
    /// The schema declares a nested attribute that doesn't resolve.
    #[error("schema mismatch: attribute `{attr}` does not exist on the resolved schema")]
    SchemaMismatch {
        /// The attribute name that failed to resolve.
        attr: String,
    },
    /// A schema-context lookup for an attribute name the schema map does
    /// not declare.
    #[error("unknown attribute `{name}`")]
    UnknownAttribute {
        /// The attribute name that was looked up.
        name: String,
    },
    /// [`crate::context::PropertyContext::object`] was called on an
    /// attribute whose element does not resolve to a nested resource.
    #[error("attribute `{attr}` is not an object")]
    NotAnObject {
        /// The attribute name that was not an object.
        attr: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_path_and_kind() {
        let err: Error = CodecErrorKind::TypeMismatch { expected: "bool", found: "string" }.into();
        let err = err.at_field("foo").at_idx(1);
        assert_eq!(err.to_string(), "error at foo[1]: type mismatch: expected bool, found string");
    }
}
