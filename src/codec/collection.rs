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

//! List/Set/Map codecs. Lists and sets share an identical wire shape; only
//! the `TType` tag differs, so they share one pair of encode/decode
//! functions.
use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::{CodecErrorKind, Error};
use crate::pvalue::{EncodeInput, PValue};
use crate::ttype::TType;
use crate::tvalue::TValue;
use indexmap::IndexMap;

/// Encode a P-array against a `List` or `Set` T-type. `ty` is the full
/// collection type (e.g. `TType::List(...)`), used to tag `Null`/`Unknown`
/// results and to build the final value.
pub fn encode_sequence(elem: &Encoder, ty: &TType, p: &PValue) -> Result<TValue, Error> {
    match p.for_encode() {
        EncodeInput::Unknown => Ok(TValue::unknown(ty.clone())),
        EncodeInput::Null => Ok(TValue::null(ty.clone())),
        EncodeInput::Value(PValue::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                out.push(elem.encode(item).map_err(|e| e.at_idx(i))?);
            }
            Ok(build_sequence(ty, out))
        }
        EncodeInput::Value(other) => {
            Err(Error::from(CodecErrorKind::TypeMismatch { expected: "array", found: other.kind_name() }))
        }
    }
}

/// Decode a `List`/`Set` T-value to a P-array.
pub fn decode_sequence(elem: &Decoder, t: &TValue) -> Result<PValue, Error> {
    if t.is_unknown() {
        return Ok(PValue::Computed);
    }
    if t.is_null() {
        return Ok(PValue::Null);
    }
    let items = t.as_seq().ok_or_else(|| {
        Error::from(CodecErrorKind::TypeMismatch { expected: "list", found: "non-sequence T-value" })
    })?;
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        out.push(elem.decode(item).map_err(|e| e.at_idx(i))?);
    }
    Ok(PValue::Array(out))
}

fn build_sequence(ty: &TType, items: Vec<TValue>) -> TValue {
    match ty {
        TType::Set(_) => TValue::set(ty.clone(), items),
        _ => TValue::list(ty.clone(), items),
    }
}

/// Encode a P-object against a `Map` T-type.
pub fn encode_map(elem: &Encoder, ty: &TType, p: &PValue) -> Result<TValue, Error> {
    match p.for_encode() {
        EncodeInput::Unknown => Ok(TValue::unknown(ty.clone())),
        EncodeInput::Null => Ok(TValue::null(ty.clone())),
        EncodeInput::Value(PValue::Object(obj)) => {
            let mut out = IndexMap::new();
            for (k, v) in obj.iter() {
                let tv = elem.encode(v).map_err(|e| e.at_field(k.clone()))?;
                out.insert(k.clone(), tv);
            }
            Ok(TValue::map(ty.clone(), out))
        }
        EncodeInput::Value(other) => {
            Err(Error::from(CodecErrorKind::TypeMismatch { expected: "object", found: other.kind_name() }))
        }
    }
}

/// Decode a `Map` T-value to a P-object.
pub fn decode_map(elem: &Decoder, t: &TValue) -> Result<PValue, Error> {
    if t.is_unknown() {
        return Ok(PValue::Computed);
    }
    if t.is_null() {
        return Ok(PValue::Null);
    }
    let entries = t.as_map().ok_or_else(|| {
        Error::from(CodecErrorKind::TypeMismatch { expected: "map", found: "non-map T-value" })
    })?;
    let mut out = IndexMap::new();
    for (k, v) in entries.iter() {
        out.insert(k.clone(), elem.decode(v).map_err(|e| e.at_field(k.clone()))?);
    }
    Ok(PValue::Object(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_sequence_tags_unknown_and_null_with_outer_type() {
        let ty = TType::list(TType::Bool);
        assert_eq!(encode_sequence(&Encoder::Bool, &ty, &PValue::Computed).unwrap().ty(), &ty);
        assert!(encode_sequence(&Encoder::Bool, &ty, &PValue::Null).unwrap().is_null());
    }

    #[test]
    fn encode_sequence_reports_index_in_error_path() {
        let ty = TType::list(TType::Bool);
        let p = PValue::Array(vec![PValue::Bool(true), PValue::String("x".into())]);
        let err = encode_sequence(&Encoder::Bool, &ty, &p).unwrap_err();
        assert_eq!(err.context().path().to_string(), "[1]");
    }

    #[test]
    fn map_round_trips() {
        let ty = TType::map(TType::String);
        let mut obj = IndexMap::new();
        obj.insert("a".to_string(), PValue::String("x".into()));
        let t = encode_map(&Encoder::String, &ty, &PValue::Object(obj)).unwrap();
        let back = decode_map(&Decoder::String, &t).unwrap();
        match back {
            PValue::Object(o) => assert_eq!(o.get("a"), Some(&PValue::String("x".into()))),
            _ => panic!("expected object"),
        }
    }
}
