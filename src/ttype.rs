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

//! The T-type model: immutable, structural descriptors for statically typed
//! values.
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// A statically typed shape that a [`crate::tvalue::TValue`] is tagged
/// with. Two `TType`s built independently but describing the same shape
/// compare equal; there is no identity beyond structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TType {
    /// A boolean.
    Bool,
    /// An arbitrary-precision number.
    Number,
    /// A string.
    String,
    /// An ordered, homogeneously typed list.
    List(Box<TType>),
    /// An unordered, homogeneously typed set (order-preserving for our
    /// purposes; equality of sets is never computed by this crate).
    Set(Box<TType>),
    /// A string-keyed map, homogeneously typed.
    Map(Box<TType>),
    /// A named-attribute object with a declared optional subset.
    Object(ObjectType),
    /// A fixed-length, positionally typed tuple.
    Tuple(Vec<TType>),
    /// A pseudo-type whose concrete shape is discovered from the value at
    /// runtime.
    Dynamic,
}

impl TType {
    /// Shorthand for `TType::List(Box::new(elem))`.
    pub fn list(elem: TType) -> TType {
        TType::List(Box::new(elem))
    }
    /// Shorthand for `TType::Set(Box::new(elem))`.
    pub fn set(elem: TType) -> TType {
        TType::Set(Box::new(elem))
    }
    /// Shorthand for `TType::Map(Box::new(elem))`.
    pub fn map(elem: TType) -> TType {
        TType::Map(Box::new(elem))
    }
    /// A short, human-readable name for this type's shape, used in error
    /// messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TType::Bool => "bool",
            TType::Number => "number",
            TType::String => "string",
            TType::List(_) => "list",
            TType::Set(_) => "set",
            TType::Map(_) => "map",
            TType::Object(_) => "object",
            TType::Tuple(_) => "tuple",
            TType::Dynamic => "dynamic",
        }
    }
}

/// The T-type of an `Object`: an ordered map of attribute name to its
/// T-type, plus the subset of attribute names that are optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectType {
    attrs: IndexMap<String, TType>,
    optional: BTreeSet<String>,
}

impl ObjectType {
    /// Build an object type from an ordered list of (name, type) pairs and
    /// the set of attribute names that are optional.
    pub fn new(attrs: IndexMap<String, TType>, optional: BTreeSet<String>) -> ObjectType {
        ObjectType { attrs, optional }
    }
    /// The declared attributes, in declaration order.
    pub fn attrs(&self) -> &IndexMap<String, TType> {
        &self.attrs
    }
    /// The T-type of a single declared attribute, if it exists.
    pub fn attr(&self, name: &str) -> Option<&TType> {
        self.attrs.get(name)
    }
    /// Whether the named attribute is declared optional.
    pub fn is_optional(&self, name: &str) -> bool {
        self.optional.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structurally_equal_types_compare_equal() {
        let a = TType::list(TType::Bool);
        let b = TType::list(TType::Bool);
        assert_eq!(a, b);
    }

    #[test]
    fn object_type_reports_attrs_and_optionality() {
        let mut attrs = IndexMap::new();
        attrs.insert("foo".to_string(), TType::String);
        attrs.insert("bar".to_string(), TType::Number);
        let mut optional = BTreeSet::new();
        optional.insert("bar".to_string());
        let obj = ObjectType::new(attrs, optional);

        assert_eq!(obj.attr("foo"), Some(&TType::String));
        assert!(!obj.is_optional("foo"));
        assert!(obj.is_optional("bar"));
        assert_eq!(obj.attr("missing"), None);
    }
}
