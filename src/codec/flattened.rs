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

//! MaxItemsOne flattening. The T-side shape stays a `List`/`Set`
//! of one; only the P-value boundary collapses the singleton.
use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::Error;
use crate::pvalue::{EncodeInput, PValue};
use crate::ttype::TType;
use crate::tvalue::TValue;

/// Encode a P-value against a flattened collection.
///
/// - If the input is a P-array, encode each element and drop any resulting
///   T-null, emitting a T-collection of the survivors.
/// - Otherwise, encode the input as a single element (this naturally
///   routes P-null through the element encoder's own null handling, which
///   then collapses to an empty T-collection below).
pub fn encode_flattened(elem: &Encoder, outer_ty: &TType, p: &PValue) -> Result<TValue, Error> {
    match p.for_encode() {
        EncodeInput::Unknown => Ok(TValue::unknown(outer_ty.clone())),
        EncodeInput::Null => encode_single(elem, outer_ty, &PValue::Null),
        EncodeInput::Value(PValue::Array(items)) => {
            let mut out = Vec::new();
            for (i, item) in items.iter().enumerate() {
                let v = elem.encode(item).map_err(|e| e.at_idx(i))?;
                if !v.is_null() {
                    out.push(v);
                }
            }
            Ok(build_collection(outer_ty, out))
        }
        EncodeInput::Value(other) => encode_single(elem, outer_ty, other),
    }
}

fn encode_single(elem: &Encoder, outer_ty: &TType, p: &PValue) -> Result<TValue, Error> {
    let v = elem.encode(p)?;
    if v.is_null() {
        Ok(build_collection(outer_ty, Vec::new()))
    } else {
        Ok(build_collection(outer_ty, vec![v]))
    }
}

fn build_collection(outer_ty: &TType, items: Vec<TValue>) -> TValue {
    match outer_ty {
        TType::Set(_) => TValue::set(outer_ty.clone(), items),
        _ => TValue::list(outer_ty.clone(), items),
    }
}

/// Decode a flattened T-collection to a P-value: an unknown collection, or
/// one whose sole element is unknown, decodes to P-unknown; an empty
/// collection decodes to P-null; a one-element collection decodes to its
/// element directly; anything longer decodes as a plain P-array.
pub fn decode_flattened(elem: &Decoder, t: &TValue) -> Result<PValue, Error> {
    if t.is_unknown() {
        return Ok(PValue::Computed);
    }
    if t.is_null() {
        return Ok(PValue::Null);
    }
    let items = t.as_seq().ok_or_else(|| {
        Error::from(crate::error::CodecErrorKind::TypeMismatch {
            expected: "list",
            found: "non-sequence T-value",
        })
    })?;
    match items.len() {
        0 => Ok(PValue::Null),
        1 => {
            if items[0].is_unknown() {
                Ok(PValue::Computed)
            } else {
                elem.decode(&items[0])
            }
        }
        _ => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                out.push(elem.decode(item).map_err(|e| e.at_idx(i))?);
            }
            Ok(PValue::Array(out))
        }
    }
}
