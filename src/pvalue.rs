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

//! The P-value model: a dynamically tagged property value with wrappers
//! for unknown, secret, and composite output values.
use indexmap::IndexMap;

/// A dynamically tagged property value, as produced and consumed by the
/// outer orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum PValue {
    /// The absence of a value.
    Null,
    Bool(bool),
    /// Numbers are always `f64` on the P-value side; see
    /// [`crate::number`] for the T-value side's arbitrary precision.
    Number(f64),
    String(String),
    /// Order-preserving.
    Array(Vec<PValue>),
    /// Insertion-ordered; semantically unordered.
    Object(IndexMap<String, PValue>),
    /// An opaque asset leaf; its contents are outside this codec's concern.
    Asset(Asset),
    /// An opaque archive leaf; its contents are outside this codec's
    /// concern.
    Archive(Archive),
    /// An opaque reference to another resource.
    ResourceRef(ResourceRef),
    /// A sensitive value. May wrap any non-`Secret` `PValue`.
    Secret(Box<PValue>),
    /// A composite value carrying an element plus known/secret/dependency
    /// metadata.
    Output(Output),
    /// A legacy unknown marker, equivalent to `Output { known: false, .. }`.
    Computed,
}

/// Opaque asset payload; carried through unchanged, never encoded or
/// decoded by the schema-typed codecs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset(pub String);

/// Opaque archive payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive(pub String);

/// Opaque reference to another resource, e.g. a URN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef(pub String);

/// A composite P-value carrying an element plus known/secret/dependency
/// metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub element: Box<PValue>,
    pub known: bool,
    pub secret: bool,
    pub dependencies: Vec<String>,
}

impl PValue {
    /// An `Output` with `known: false, secret: true`, as produced when
    /// decoding an unknown value behind a secret attribute.
    pub fn unknown_secret_output() -> PValue {
        PValue::Output(Output {
            element: Box::new(PValue::Null),
            known: false,
            secret: true,
            dependencies: Vec::new(),
        })
    }
    /// Wrap a value as a known, non-secret `Output` with no dependencies.
    pub fn known_output(element: PValue) -> PValue {
        PValue::Output(Output {
            element: Box::new(element),
            known: true,
            secret: false,
            dependencies: Vec::new(),
        })
    }

    /// True for `Computed` or `Output { known: false, .. }` — the two
    /// shapes that denote "not yet computed".
    pub fn is_unknown(&self) -> bool {
        match self {
            PValue::Computed => true,
            PValue::Output(o) => !o.known,
            _ => false,
        }
    }

    /// A short, human-readable name for this value's shape, used in error
    /// messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            PValue::Null => "null",
            PValue::Bool(_) => "bool",
            PValue::Number(_) => "number",
            PValue::String(_) => "string",
            PValue::Array(_) => "array",
            PValue::Object(_) => "object",
            PValue::Asset(_) => "asset",
            PValue::Archive(_) => "archive",
            PValue::ResourceRef(_) => "resource reference",
            PValue::Secret(_) => "secret",
            PValue::Output(_) => "output",
            PValue::Computed => "computed",
        }
    }

    /// Apply the universal unknown/null/output-unwrap rules to determine
    /// what a codec should actually pattern-match against. Every leaf and
    /// composite codec calls this before its shape-specific case analysis.
    pub fn for_encode(&self) -> EncodeInput<'_> {
        match self {
            PValue::Computed => EncodeInput::Unknown,
            PValue::Null => EncodeInput::Null,
            PValue::Output(o) => {
                if !o.known {
                    EncodeInput::Unknown
                } else {
                    // A known secret Output still carries a real element,
                    // so unwrap it the same way rather than leave secret
                    // Outputs unencodable.
                    o.element.for_encode()
                }
            }
            other => EncodeInput::Value(other),
        }
    }
}

/// The result of applying the unknown/null/output-unwrap rules to a
/// `PValue` before a codec's own case analysis runs.
pub enum EncodeInput<'a> {
    /// The value denotes "not yet computed".
    Unknown,
    /// The value denotes "absent".
    Null,
    /// A concrete value a codec can pattern-match against.
    Value(&'a PValue),
}
