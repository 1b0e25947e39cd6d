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

//! The `Encoder` codec tree (P→T) and its application.
pub mod derive;

use crate::codec::adapter::{self, AdapterKind};
use crate::codec::{collection, dynamic, flattened, leaf, object, tuple};
use crate::error::Error;
use crate::pvalue::PValue;
use crate::ttype::{ObjectType, TType};
use crate::tvalue::TValue;
use indexmap::IndexMap;

pub use derive::derive_property_encoder;

/// A node in the derived P→T codec tree. Built once per (schema, T-type)
/// pair by [`derive`], then applied many times. One variant per T-type
/// shape, so applying a tree is a single non-recursive match per node.
#[derive(Debug, Clone)]
pub enum Encoder {
    Bool,
    Number,
    String,
    List(TType, Box<Encoder>),
    Set(TType, Box<Encoder>),
    Map(TType, Box<Encoder>),
    Object(ObjectEncoder),
    Tuple(Vec<TType>, Vec<Encoder>),
    /// MaxItemsOne flattening. `TType` is the outer, unflattened
    /// `List`/`Set` type.
    Flattened(TType, Box<Encoder>),
    Adapter(AdapterKind, Box<Encoder>),
    Dynamic,
}

impl Encoder {
    /// Encode a P-value against this codec node, producing a T-value.
    pub fn encode(&self, p: &PValue) -> Result<TValue, Error> {
        match self {
            Encoder::Bool => leaf::encode_bool(p),
            Encoder::Number => leaf::encode_number(p),
            Encoder::String => leaf::encode_string(p),
            Encoder::List(ty, elem) => collection::encode_sequence(elem, ty, p),
            Encoder::Set(ty, elem) => collection::encode_sequence(elem, ty, p),
            Encoder::Map(ty, elem) => collection::encode_map(elem, ty, p),
            Encoder::Object(obj) => object::encode_object(obj, p),
            Encoder::Tuple(types, encoders) => tuple::encode_tuple(encoders, types, p),
            Encoder::Flattened(outer_ty, elem) => flattened::encode_flattened(elem, outer_ty, p),
            Encoder::Adapter(AdapterKind::IntOverrideString, inner) => {
                inner.encode(&adapter::adapt_int_override_string(p))
            }
            Encoder::Adapter(AdapterKind::StringOverInt, inner) => inner.encode(p),
            Encoder::Dynamic => dynamic::encode_dynamic(p),
        }
    }
}

/// The object encoder: an ordered map of `tf-name -> (pulumi-key,
/// property-encoder)`, plus the object T-type it produces.
#[derive(Debug, Clone)]
pub struct ObjectEncoder {
    pub(crate) ty: ObjectType,
    pub(crate) attrs: IndexMap<String, (String, Encoder)>,
}

impl ObjectEncoder {
    /// Assemble an `ObjectEncoder` from its object type and per-attribute
    /// encoders, keyed by Terraform-side attribute name.
    pub(crate) fn from_parts(
        ty: ObjectType,
        attrs: IndexMap<String, (String, Encoder)>,
    ) -> ObjectEncoder {
        ObjectEncoder { ty, attrs }
    }
    /// The object T-type this encoder produces.
    pub fn object_type(&self) -> &ObjectType {
        &self.ty
    }
    /// Iterate declared attributes in schema order, each paired with its
    /// P-side key and property encoder.
    pub(crate) fn attrs_iter(&self) -> impl Iterator<Item = (&String, &(String, Encoder))> {
        self.attrs.iter()
    }
}
