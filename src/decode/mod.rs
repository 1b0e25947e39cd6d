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

//! The `Decoder` codec tree (T→P) and its application, the
//! mirror image of [`crate::encode`].
pub mod derive;

use crate::codec::adapter::{self, AdapterKind};
use crate::codec::{collection, dynamic, flattened, leaf, object, secret, tuple};
use crate::error::Error;
use crate::pvalue::PValue;
use crate::ttype::{ObjectType, TType};
use crate::tvalue::TValue;
use indexmap::IndexMap;

pub use derive::derive_property_decoder;

/// A node in the derived T→P codec tree.
#[derive(Debug, Clone)]
pub enum Decoder {
    Bool,
    Number,
    String,
    List(Box<Decoder>),
    Set(Box<Decoder>),
    Map(Box<Decoder>),
    Object(ObjectDecoder),
    Tuple(Vec<Decoder>),
    /// MaxItemsOne flattening.
    Flattened(Box<Decoder>),
    Adapter(AdapterKind, Box<Decoder>),
    /// Wraps a child decoder's result as a `PValue::Secret`.
    Secret(Box<Decoder>),
    Dynamic,
}

impl Decoder {
    /// Decode a T-value against this codec node, producing a P-value.
    pub fn decode(&self, t: &TValue) -> Result<PValue, Error> {
        match self {
            Decoder::Bool => leaf::decode_bool(t),
            Decoder::Number => leaf::decode_number(t),
            Decoder::String => leaf::decode_string(t),
            Decoder::List(elem) => collection::decode_sequence(elem, t),
            Decoder::Set(elem) => collection::decode_sequence(elem, t),
            Decoder::Map(elem) => collection::decode_map(elem, t),
            Decoder::Object(obj) => object::decode_object(obj, t),
            Decoder::Tuple(decoders) => tuple::decode_tuple(decoders, t),
            Decoder::Flattened(elem) => flattened::decode_flattened(elem, t),
            Decoder::Adapter(AdapterKind::StringOverInt, inner) => {
                inner.decode(&adapter::adapt_string_over_int(t))
            }
            Decoder::Adapter(AdapterKind::IntOverrideString, inner) => inner.decode(t),
            Decoder::Secret(inner) => secret::decode_secret(inner, t),
            Decoder::Dynamic => dynamic::decode_dynamic(t),
        }
    }
}

/// The object decoder: the mirror image of
/// [`crate::encode::ObjectEncoder`].
#[derive(Debug, Clone)]
pub struct ObjectDecoder {
    pub(crate) ty: ObjectType,
    pub(crate) attrs: IndexMap<String, (String, Decoder)>,
}

impl ObjectDecoder {
    /// Assemble an `ObjectDecoder` from its object type and per-attribute
    /// decoders, keyed by Terraform-side attribute name.
    pub(crate) fn from_parts(
        ty: ObjectType,
        attrs: IndexMap<String, (String, Decoder)>,
    ) -> ObjectDecoder {
        ObjectDecoder { ty, attrs }
    }
    /// The object T-type this decoder expects.
    pub fn object_type(&self) -> &ObjectType {
        &self.ty
    }
    /// Iterate declared attributes in schema order, each paired with its
    /// P-side key and property decoder.
    pub(crate) fn attrs_iter(&self) -> impl Iterator<Item = (&String, &(String, Decoder))> {
        self.attrs.iter()
    }
}
