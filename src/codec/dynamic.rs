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

//! Best-effort dynamic codec: used when no schema is
//! available to guide derivation. The T-type is discovered from the
//! P-value's shape on encode, and the P-value's shape mirrors the T-type on
//! decode.
use crate::error::{CodecErrorKind, Error};
use crate::number::{number_from_f64, number_to_f64};
use crate::pvalue::PValue;
use crate::ttype::{ObjectType, TType};
use crate::tvalue::TValue;
use indexmap::IndexMap;
use std::collections::BTreeSet;

fn empty_object_shell() -> TType {
    TType::Object(ObjectType::new(IndexMap::new(), BTreeSet::new()))
}

fn unsupported(kind: &'static str) -> Error {
    Error::from(CodecErrorKind::UnsupportedInDynamic { kind })
}

/// Encode a P-value with no schema to guide it. Asset, archive, resource
/// reference, and secret values have no dynamically-inferrable T-shape and
/// are rejected; a secret `Output` is rejected the same way rather than
/// silently unwrapped, unlike the broader unwrap [`PValue::for_encode`]
/// performs for ordinary schema-typed codecs.
pub fn encode_dynamic(p: &PValue) -> Result<TValue, Error> {
    match p {
        PValue::Computed => Ok(TValue::unknown(empty_object_shell())),
        PValue::Null => Ok(TValue::null(empty_object_shell())),
        PValue::Output(o) => {
            if !o.known {
                Ok(TValue::unknown(empty_object_shell()))
            } else if o.secret {
                Err(unsupported("secret output"))
            } else {
                encode_dynamic(&o.element)
            }
        }
        PValue::Secret(_) => Err(unsupported("secret")),
        PValue::Asset(_) => Err(unsupported("asset")),
        PValue::Archive(_) => Err(unsupported("archive")),
        PValue::ResourceRef(_) => Err(unsupported("resource reference")),
        PValue::Bool(b) => Ok(TValue::bool(*b)),
        PValue::Number(f) => Ok(TValue::number(number_from_f64(*f))),
        PValue::String(s) => Ok(TValue::string(s.clone())),
        PValue::Array(items) => encode_dynamic_array(items),
        PValue::Object(obj) => encode_dynamic_object(obj),
    }
}

fn encode_dynamic_array(items: &[PValue]) -> Result<TValue, Error> {
    let encoded: Vec<TValue> = items
        .iter()
        .enumerate()
        .map(|(i, item)| encode_dynamic(item).map_err(|e| e.at_idx(i)))
        .collect::<Result<_, _>>()?;
    match encoded.first() {
        None => Ok(TValue::list(TType::list(TType::Dynamic), Vec::new())),
        Some(first) if encoded.iter().all(|v| v.ty() == first.ty()) => {
            let elem_ty = first.ty().clone();
            Ok(TValue::list(TType::list(elem_ty), encoded))
        }
        Some(_) => {
            let types: Vec<TType> = encoded.iter().map(|v| v.ty().clone()).collect();
            Ok(TValue::tuple(TType::Tuple(types), encoded))
        }
    }
}

fn encode_dynamic_object(obj: &IndexMap<String, PValue>) -> Result<TValue, Error> {
    let mut attr_types = IndexMap::new();
    let mut attr_values = IndexMap::new();
    for (k, v) in obj.iter() {
        let tv = encode_dynamic(v).map_err(|e| e.at_field(k.clone()))?;
        attr_types.insert(k.clone(), tv.ty().clone());
        attr_values.insert(k.clone(), tv);
    }
    let ty = TType::Object(ObjectType::new(attr_types, BTreeSet::new()));
    Ok(TValue::object(ty, attr_values))
}

/// Decode a T-value with no schema to guide it, discovering the P-shape
/// from the T-type actually carried by the value: `Tuple` decodes to a
/// plain P-array, not an object.
pub fn decode_dynamic(t: &TValue) -> Result<PValue, Error> {
    if t.is_unknown() {
        return Ok(PValue::Computed);
    }
    if t.is_null() {
        return Ok(PValue::Null);
    }
    match t.ty() {
        TType::Bool => Ok(PValue::Bool(t.as_bool().unwrap_or_default())),
        TType::Number => Ok(PValue::Number(t.as_number().map(number_to_f64).unwrap_or_default())),
        TType::String => Ok(PValue::String(t.as_str().unwrap_or_default().to_string())),
        TType::List(_) | TType::Set(_) | TType::Tuple(_) => {
            let mut out = Vec::new();
            if let Some(items) = t.as_seq() {
                for (i, item) in items.iter().enumerate() {
                    out.push(decode_dynamic(item).map_err(|e| e.at_idx(i))?);
                }
            }
            Ok(PValue::Array(out))
        }
        TType::Map(_) | TType::Object(_) => {
            let mut out = IndexMap::new();
            if let Some(entries) = t.as_map() {
                for (k, v) in entries.iter() {
                    out.insert(k.clone(), decode_dynamic(v).map_err(|e| e.at_field(k.clone()))?);
                }
            }
            Ok(PValue::Object(out))
        }
        TType::Dynamic => Err(unsupported("an unresolved dynamic shape")),
    }
}
