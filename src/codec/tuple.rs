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

//! Tuple codec: a fixed-length, positionally typed array,
//! with a synthesised-key object form accepted on encode for nested
//! Terraform blocks that aren't naturally array-shaped.
use crate::decode::Decoder;
use crate::encode::Encoder;
use crate::error::{CodecErrorKind, Error};
use crate::pvalue::{EncodeInput, PValue};
use crate::ttype::TType;
use crate::tvalue::TValue;

/// Encode a P-array (or a P-object using synthesised `t0`, `t1`, ... keys)
/// against a `Tuple` T-type.
pub fn encode_tuple(encoders: &[Encoder], types: &[TType], p: &PValue) -> Result<TValue, Error> {
    let ty = TType::Tuple(types.to_vec());
    match p.for_encode() {
        EncodeInput::Unknown => Ok(TValue::unknown(ty)),
        EncodeInput::Null => Ok(TValue::null(ty)),
        EncodeInput::Value(PValue::Array(items)) => {
            if items.len() != encoders.len() {
                return Err(Error::from(CodecErrorKind::TupleArity {
                    expected_len: encoders.len(),
                    actual_len: items.len(),
                }));
            }
            let mut out = Vec::with_capacity(items.len());
            for (i, (enc, item)) in encoders.iter().zip(items.iter()).enumerate() {
                out.push(enc.encode(item).map_err(|e| e.at_tuple_index(i))?);
            }
            Ok(TValue::tuple(ty, out))
        }
        EncodeInput::Value(PValue::Object(obj)) => {
            let mut out = Vec::with_capacity(encoders.len());
            for (i, enc) in encoders.iter().enumerate() {
                let key = format!("t{i}");
                let input = obj.get(&key).cloned().unwrap_or(PValue::Null);
                out.push(enc.encode(&input).map_err(|e| e.at_tuple_index(i))?);
            }
            Ok(TValue::tuple(ty, out))
        }
        EncodeInput::Value(other) => {
            Err(Error::from(CodecErrorKind::TypeMismatch { expected: "tuple", found: other.kind_name() }))
        }
    }
}

/// Decode a `Tuple` T-value to a P-array.
pub fn decode_tuple(decoders: &[Decoder], t: &TValue) -> Result<PValue, Error> {
    if t.is_unknown() {
        return Ok(PValue::Computed);
    }
    if t.is_null() {
        return Ok(PValue::Null);
    }
    let items = t.as_seq().ok_or_else(|| {
        Error::from(CodecErrorKind::TypeMismatch { expected: "tuple", found: "non-sequence T-value" })
    })?;
    if items.len() != decoders.len() {
        return Err(Error::from(CodecErrorKind::TupleArity {
            expected_len: decoders.len(),
            actual_len: items.len(),
        }));
    }
    let mut out = Vec::with_capacity(items.len());
    for (i, (dec, item)) in decoders.iter().zip(items.iter()).enumerate() {
        out.push(dec.decode(item).map_err(|e| e.at_tuple_index(i))?);
    }
    Ok(PValue::Array(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_form_round_trips() {
        let types = vec![TType::Bool, TType::String];
        let encoders = vec![Encoder::Bool, Encoder::String];
        let p = PValue::Array(vec![PValue::Bool(true), PValue::String("x".into())]);
        let t = encode_tuple(&encoders, &types, &p).unwrap();

        let decoders = vec![Decoder::Bool, Decoder::String];
        let back = decode_tuple(&decoders, &t).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn object_form_uses_synthesised_keys_on_encode() {
        let types = vec![TType::Bool, TType::String];
        let encoders = vec![Encoder::Bool, Encoder::String];
        let mut obj = indexmap::IndexMap::new();
        obj.insert("t0".to_string(), PValue::Bool(false));
        obj.insert("t1".to_string(), PValue::String("y".into()));
        let t = encode_tuple(&encoders, &types, &PValue::Object(obj)).unwrap();
        assert_eq!(t.as_seq().unwrap()[0].as_bool(), Some(false));
        assert_eq!(t.as_seq().unwrap()[1].as_str(), Some("y"));
    }

    #[test]
    fn wrong_arity_errors() {
        let types = vec![TType::Bool];
        let encoders = vec![Encoder::Bool];
        let p = PValue::Array(vec![PValue::Bool(true), PValue::Bool(false)]);
        let err = encode_tuple(&encoders, &types, &p).unwrap_err();
        assert!(matches!(err.kind(), CodecErrorKind::TupleArity { expected_len: 1, actual_len: 2 }));
    }
}
