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

//! Object codec: translates between a Terraform-shaped P-object
//! and a declared-attribute T-object, applying per-attribute name
//! translation along the way.
use crate::decode::ObjectDecoder;
use crate::encode::ObjectEncoder;
use crate::error::{CodecErrorKind, Error};
use crate::pvalue::{EncodeInput, PValue};
use crate::ttype::TType;
use crate::tvalue::TValue;
use indexmap::IndexMap;

/// Encode a P-object (or a P-secret wrapping one, tolerated here since the
/// object codec has no symmetric encode-side secret wrapper of its own) to
/// its declared T-object shape.
pub fn encode_object(enc: &ObjectEncoder, p: &PValue) -> Result<TValue, Error> {
    match p.for_encode() {
        EncodeInput::Unknown => Ok(TValue::unknown(TType::Object(enc.object_type().clone()))),
        EncodeInput::Null => Ok(TValue::null(TType::Object(enc.object_type().clone()))),
        EncodeInput::Value(v) => {
            let body = match v {
                PValue::Secret(inner) => inner.as_ref(),
                other => other,
            };
            match body {
                PValue::Object(obj) => {
                    let mut out = IndexMap::new();
                    for (attr_name, (pulumi_key, child)) in enc.attrs_iter() {
                        let input = obj.get(pulumi_key).cloned().unwrap_or(PValue::Null);
                        let tv = child.encode(&input).map_err(|e| e.at_field(attr_name.clone()))?;
                        out.insert(attr_name.clone(), tv);
                    }
                    Ok(TValue::object(TType::Object(enc.object_type().clone()), out))
                }
                other => {
                    Err(Error::from(CodecErrorKind::TypeMismatch { expected: "object", found: other.kind_name() }))
                }
            }
        }
    }
}

/// Decode a T-object to a P-object, translating each declared attribute's
/// name to its P-side key. T-attributes absent from the schema, or
/// vice-versa, are dropped silently rather than treated as an error.
pub fn decode_object(dec: &ObjectDecoder, t: &TValue) -> Result<PValue, Error> {
    if t.is_unknown() {
        return Ok(PValue::Computed);
    }
    if t.is_null() {
        return Ok(PValue::Null);
    }
    let entries = t.as_map().ok_or_else(|| {
        Error::from(CodecErrorKind::TypeMismatch { expected: "object", found: "non-object T-value" })
    })?;
    let mut out = IndexMap::new();
    for (attr_name, (pulumi_key, child)) in dec.attrs_iter() {
        if let Some(tv) = entries.get(attr_name) {
            let pv = child.decode(tv).map_err(|e| e.at_field(attr_name.clone()))?;
            out.insert(pulumi_key.clone(), pv);
        }
    }
    Ok(PValue::Object(out))
}
