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

//! The T-value model: a statically typed value tagged with its [`TType`]
//! and a null/unknown/known state.
use crate::number::Number;
use crate::ttype::TType;
use indexmap::IndexMap;

/// A statically typed value. Every `TValue` carries the [`TType`] it was
/// built against, plus one of three states: null, unknown, or a known
/// payload matching that type.
#[derive(Debug, Clone, PartialEq)]
pub struct TValue {
    ty: TType,
    state: TState,
}

#[derive(Debug, Clone, PartialEq)]
enum TState {
    Null,
    Unknown,
    Known(TPayload),
}

/// The payload carried by a known, non-null `TValue`. Which variant is
/// present is determined entirely by the value's `TType`.
#[derive(Debug, Clone, PartialEq)]
pub enum TPayload {
    Bool(bool),
    Number(Number),
    String(String),
    /// Elements of a `List`, `Set`, or `Tuple`.
    Seq(Vec<TValue>),
    /// Entries of a `Map` or `Object`.
    Map(IndexMap<String, TValue>),
}

impl TValue {
    /// A null value of the given type.
    pub fn null(ty: TType) -> TValue {
        TValue { ty, state: TState::Null }
    }
    /// An unknown value of the given type.
    pub fn unknown(ty: TType) -> TValue {
        TValue { ty, state: TState::Unknown }
    }
    /// A known boolean.
    pub fn bool(b: bool) -> TValue {
        TValue { ty: TType::Bool, state: TState::Known(TPayload::Bool(b)) }
    }
    /// A known number.
    pub fn number(n: Number) -> TValue {
        TValue { ty: TType::Number, state: TState::Known(TPayload::Number(n)) }
    }
    /// A known string.
    pub fn string(s: impl Into<String>) -> TValue {
        TValue { ty: TType::String, state: TState::Known(TPayload::String(s.into())) }
    }
    /// A known list. `ty` must be `TType::List(_)`; `elems` must each have
    /// the declared element type.
    pub fn list(ty: TType, elems: Vec<TValue>) -> TValue {
        TValue { ty, state: TState::Known(TPayload::Seq(elems)) }
    }
    /// A known set. `ty` must be `TType::Set(_)`.
    pub fn set(ty: TType, elems: Vec<TValue>) -> TValue {
        TValue { ty, state: TState::Known(TPayload::Seq(elems)) }
    }
    /// A known tuple. `ty` must be `TType::Tuple(_)`.
    pub fn tuple(ty: TType, elems: Vec<TValue>) -> TValue {
        TValue { ty, state: TState::Known(TPayload::Seq(elems)) }
    }
    /// A known map. `ty` must be `TType::Map(_)`.
    pub fn map(ty: TType, entries: IndexMap<String, TValue>) -> TValue {
        TValue { ty, state: TState::Known(TPayload::Map(entries)) }
    }
    /// A known object. `ty` must be `TType::Object(_)`.
    pub fn object(ty: TType, attrs: IndexMap<String, TValue>) -> TValue {
        TValue { ty, state: TState::Known(TPayload::Map(attrs)) }
    }

    /// The type this value was constructed against.
    pub fn ty(&self) -> &TType {
        &self.ty
    }
    /// True if this value is in the null state.
    pub fn is_null(&self) -> bool {
        matches!(self.state, TState::Null)
    }
    /// True if this value is in the unknown state.
    pub fn is_unknown(&self) -> bool {
        matches!(self.state, TState::Unknown)
    }
    /// True if this value carries a known payload.
    pub fn is_known(&self) -> bool {
        matches!(self.state, TState::Known(_))
    }
    /// The known payload, if any.
    pub fn payload(&self) -> Option<&TPayload> {
        match &self.state {
            TState::Known(p) => Some(p),
            _ => None,
        }
    }
    /// The known boolean, if this is a known bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self.payload() {
            Some(TPayload::Bool(b)) => Some(*b),
            _ => None,
        }
    }
    /// The known number, if this is a known number.
    pub fn as_number(&self) -> Option<&Number> {
        match self.payload() {
            Some(TPayload::Number(n)) => Some(n),
            _ => None,
        }
    }
    /// The known string, if this is a known string.
    pub fn as_str(&self) -> Option<&str> {
        match self.payload() {
            Some(TPayload::String(s)) => Some(s),
            _ => None,
        }
    }
    /// The known sequence (list/set/tuple elements), if this is one of
    /// those shapes.
    pub fn as_seq(&self) -> Option<&[TValue]> {
        match self.payload() {
            Some(TPayload::Seq(s)) => Some(s),
            _ => None,
        }
    }
    /// The known map entries (map/object attributes), if this is one of
    /// those shapes.
    pub fn as_map(&self) -> Option<&IndexMap<String, TValue>> {
        match self.payload() {
            Some(TPayload::Map(m)) => Some(m),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_unknown_are_states_not_payloads() {
        let n = TValue::null(TType::String);
        assert!(n.is_null());
        assert_eq!(n.as_str(), None);

        let u = TValue::unknown(TType::Bool);
        assert!(u.is_unknown());
        assert_eq!(u.as_bool(), None);
    }

    #[test]
    fn known_values_expose_their_payload() {
        let v = TValue::string("hi");
        assert_eq!(v.as_str(), Some("hi"));
        assert!(v.is_known());
    }
}
