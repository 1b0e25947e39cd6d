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

//! A schema-directed, bidirectional value codec between a dynamically
//! tagged property value (a `PValue`) and a statically typed value (a
//! `TValue`), as used by an infrastructure-as-code bridge to translate
//! provider-shaped values against a declared resource schema.
//!
//! The codec is built once per (schema, T-type) pair via [`build_object_encoder`]
//! / [`build_object_decoder`], then applied many times via
//! [`encode_property_map`] / [`decode_property_map`]. Derivation and
//! application are both pure, synchronous, and free of shared mutable
//! state; the derived [`Encoder`]/[`Decoder`] trees are immutable and safe
//! to share across concurrent callers.
pub mod codec;
pub mod context;
pub mod decode;
pub mod encode;
pub mod error;
mod naming;
pub mod number;
pub mod pvalue;
pub mod schema;
pub mod ttype;
pub mod tvalue;

use context::SchemaMapContext;
use decode::derive::derive_object_decoder;
use decode::Decoder;
use encode::derive::derive_object_encoder;
use encode::Encoder;
use error::{CodecErrorKind, Error, SchemaError};
use pvalue::PValue;
use schema::{ResourceSchema, SchemaElem, SchemaKind, SchemaOverride};
use std::collections::{BTreeSet, HashMap};
use ttype::{ObjectType, TType};
use tvalue::TValue;

/// The inputs needed to derive an object-level [`Encoder`] or [`Decoder`]
///: a resource schema, its optional override tree, and either an
/// explicit object T-type or `None` to have one inferred from the schema.
pub struct ObjectSchema<'a> {
    pub resource: &'a ResourceSchema,
    pub overrides: Option<&'a HashMap<String, SchemaOverride>>,
    pub object_type: Option<ObjectType>,
}

impl<'a> ObjectSchema<'a> {
    /// An object schema with no overrides and an inferred object T-type.
    pub fn new(resource: &'a ResourceSchema) -> ObjectSchema<'a> {
        ObjectSchema { resource, overrides: None, object_type: None }
    }
    /// Builder: attach an override tree.
    pub fn with_overrides(mut self, overrides: &'a HashMap<String, SchemaOverride>) -> Self {
        self.overrides = Some(overrides);
        self
    }
    /// Builder: pin an explicit object T-type instead of inferring one.
    pub fn with_object_type(mut self, ty: ObjectType) -> Self {
        self.object_type = Some(ty);
        self
    }

    fn resolve_object_type(&self) -> Result<ObjectType, SchemaError> {
        match &self.object_type {
            Some(ty) => Ok(ty.clone()),
            None => infer_object_type(self.resource),
        }
    }
}

/// Build an [`Encoder`] for a whole object schema.
pub fn build_object_encoder(schema: &ObjectSchema) -> Result<Encoder, SchemaError> {
    let obj_ty = schema.resolve_object_type()?;
    let smc = SchemaMapContext::new(schema.resource, schema.overrides);
    derive_object_encoder(&obj_ty, &smc).map(Encoder::Object)
}

/// Build a [`Decoder`] for a whole object schema.
pub fn build_object_decoder(schema: &ObjectSchema) -> Result<Decoder, SchemaError> {
    let obj_ty = schema.resolve_object_type()?;
    let smc = SchemaMapContext::new(schema.resource, schema.overrides);
    derive_object_decoder(&obj_ty, &smc).map(Decoder::Object)
}

/// Infer an object T-type from a resource schema when the caller doesn't
/// pin one explicitly: `Bool`→`Bool`, `Int`/`Float`→`Number`,
/// `String`→`String`, collections map their element recursively, and a
/// nested resource element is inferred as `Object`.
pub fn infer_object_type(resource: &ResourceSchema) -> Result<ObjectType, SchemaError> {
    let mut attrs = indexmap::IndexMap::new();
    let mut optional = BTreeSet::new();
    for (name, schema) in resource.attrs.iter() {
        attrs.insert(name.clone(), infer_schema_type(schema)?);
        if schema.optional || schema.computed {
            optional.insert(name.clone());
        }
    }
    Ok(ObjectType::new(attrs, optional))
}

fn infer_schema_type(schema: &schema::Schema) -> Result<TType, SchemaError> {
    match schema.kind {
        SchemaKind::Bool => Ok(TType::Bool),
        SchemaKind::Int | SchemaKind::Float => Ok(TType::Number),
        SchemaKind::String => Ok(TType::String),
        SchemaKind::List => Ok(TType::list(infer_elem_type(schema)?)),
        SchemaKind::Set => Ok(TType::set(infer_elem_type(schema)?)),
        // A map whose elements are a nested resource is inferred as a bare
        // Object, not Map<Object> — the Terraform-side "map of blocks"
        // shape has no natural Map<T> T-type counterpart.
        SchemaKind::Map => match &schema.elem {
            Some(SchemaElem::Resource(r)) => infer_object_type(r).map(TType::Object),
            _ => Ok(TType::map(infer_elem_type(schema)?)),
        },
        SchemaKind::Dynamic => Ok(TType::Dynamic),
        SchemaKind::Invalid => {
            Err(SchemaError::SchemaMismatch { attr: "<invalid schema kind>".to_string() })
        }
    }
}

fn infer_elem_type(schema: &schema::Schema) -> Result<TType, SchemaError> {
    match &schema.elem {
        Some(SchemaElem::Schema(inner)) => infer_schema_type(inner),
        Some(SchemaElem::Resource(r)) => infer_object_type(r).map(TType::Object),
        None => Err(SchemaError::SchemaMismatch { attr: "<element>".to_string() }),
    }
}

/// Encode a P-object against a built [`Encoder`], stripping a top-level
/// `Secret` wrapper first. There is no symmetric `SecretEncoder` — secrecy
/// is only reconstructed on the way back out, in [`decode_property_map`].
pub fn encode_property_map(encoder: &Encoder, p: &PValue) -> Result<TValue, Error> {
    let stripped = match p {
        PValue::Secret(inner) => inner.as_ref(),
        other => other,
    };
    encoder.encode(stripped)
}

/// Decode a T-value against a built [`Decoder`], requiring the result to
/// be a P-object.
pub fn decode_property_map(decoder: &Decoder, t: &TValue) -> Result<PValue, Error> {
    match decoder.decode(t)? {
        PValue::Object(obj) => Ok(PValue::Object(obj)),
        _ => Err(Error::from(CodecErrorKind::ExpectedObject)),
    }
}

/// A T-value paired with the object T-type it was encoded against — the
/// boundary the surrounding system tags onto its own wire framing, which
/// is out of scope here.
#[derive(Debug, Clone)]
pub struct DynamicEnvelope {
    pub object_type: TType,
    pub value: TValue,
}

/// Encode a P-object, then tag the result with the object T-type it was
/// built against.
pub fn encode_property_map_dynamic(
    encoder: &Encoder,
    object_type: &TType,
    p: &PValue,
) -> Result<DynamicEnvelope, Error> {
    let value = encode_property_map(encoder, p)?;
    Ok(DynamicEnvelope { object_type: object_type.clone(), value })
}

/// Decode a tagged envelope, checking that its object T-type matches the
/// one the caller expects before delegating to [`decode_property_map`]
///.
pub fn decode_property_map_dynamic(
    decoder: &Decoder,
    object_type: &TType,
    envelope: &DynamicEnvelope,
) -> Result<PValue, Error> {
    if &envelope.object_type != object_type {
        return Err(Error::from(CodecErrorKind::TypeMismatch {
            expected: "matching object type",
            found: "mismatched object type in envelope",
        }));
    }
    decode_property_map(decoder, &envelope.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    fn trivial_resource() -> ResourceSchema {
        ResourceSchema::new("widget")
            .with_attr("id", Schema::new(SchemaKind::String).computed())
            .with_attr("foo", Schema::new(SchemaKind::String).optional())
    }

    #[test]
    fn map_of_resource_infers_as_bare_object_not_map_of_object() {
        let inner = ResourceSchema::new("tag").with_attr("value", Schema::new(SchemaKind::String));
        let rs = ResourceSchema::new("widget")
            .with_attr("tags", Schema::new(SchemaKind::Map).with_elem_resource(inner));
        let inferred = infer_object_type(&rs).unwrap();
        match inferred.attr("tags").unwrap() {
            TType::Object(_) => {}
            other => panic!("expected bare Object, got {other:?}"),
        }
    }

    #[test]
    fn trivial_resource_round_trips() {
        let rs = trivial_resource();
        let schema = ObjectSchema::new(&rs);
        let encoder = build_object_encoder(&schema).unwrap();
        let decoder = build_object_decoder(&schema).unwrap();

        let mut p = indexmap::IndexMap::new();
        p.insert("foo".to_string(), PValue::String("bar".into()));
        p.insert("id".to_string(), PValue::String("myid".into()));
        let input = PValue::Object(p);

        let t = encode_property_map(&encoder, &input).unwrap();
        let back = decode_property_map(&decoder, &t).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn name_override_renames_on_decode() {
        let rs = ResourceSchema::new("widget").with_attr("foo", Schema::new(SchemaKind::String));
        let mut overrides = HashMap::new();
        overrides.insert("foo".to_string(), SchemaOverride::none().with_rename("renamedFoo"));
        let schema = ObjectSchema::new(&rs).with_overrides(&overrides);
        let decoder = build_object_decoder(&schema).unwrap();

        let mut attrs = indexmap::IndexMap::new();
        attrs.insert("foo".to_string(), TValue::string("bar"));
        let ty = decoder_object_type(&decoder);
        let t = TValue::object(TType::Object(ty), attrs);

        let p = decode_property_map(&decoder, &t).unwrap();
        match p {
            PValue::Object(o) => assert_eq!(o.get("renamedFoo"), Some(&PValue::String("bar".into()))),
            _ => panic!("expected object"),
        }
    }

    fn decoder_object_type(decoder: &Decoder) -> ObjectType {
        match decoder {
            Decoder::Object(obj) => obj.object_type().clone(),
            _ => panic!("expected object decoder"),
        }
    }

    #[test]
    fn secret_attribute_wraps_on_decode() {
        let rs = ResourceSchema::new("widget")
            .with_attr("secret_value", Schema::new(SchemaKind::String).sensitive());
        let schema = ObjectSchema::new(&rs);
        let decoder = build_object_decoder(&schema).unwrap();
        let ty = decoder_object_type(&decoder);

        let mut attrs = indexmap::IndexMap::new();
        attrs.insert("secret_value".to_string(), TValue::string("s"));
        let t = TValue::object(TType::Object(ty.clone()), attrs);
        let p = decode_property_map(&decoder, &t).unwrap();
        match p {
            PValue::Object(o) => {
                assert_eq!(o.get("secretValue"), Some(&PValue::Secret(Box::new(PValue::String("s".into())))))
            }
            _ => panic!("expected object"),
        }

        let mut unknown_attrs = indexmap::IndexMap::new();
        unknown_attrs.insert("secret_value".to_string(), TValue::unknown(TType::String));
        let t_unknown = TValue::object(TType::Object(ty), unknown_attrs);
        let p_unknown = decode_property_map(&decoder, &t_unknown).unwrap();
        match p_unknown {
            PValue::Object(o) => match o.get("secretValue") {
                Some(PValue::Output(out)) => {
                    assert!(!out.known);
                    assert!(out.secret);
                }
                other => panic!("expected unknown secret output, got {other:?}"),
            },
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn decode_rejects_non_object_top_level_result() {
        let t = TValue::string("not an object");
        let decoder = Decoder::String;
        let err = decode_property_map(&decoder, &t).unwrap_err();
        assert!(matches!(err.kind(), CodecErrorKind::ExpectedObject));
    }

    #[test]
    fn encode_dynamic_rejects_mismatched_envelope_type() {
        let rs = trivial_resource();
        let schema = ObjectSchema::new(&rs);
        let encoder = build_object_encoder(&schema).unwrap();
        let decoder = build_object_decoder(&schema).unwrap();

        let mut p = indexmap::IndexMap::new();
        p.insert("foo".to_string(), PValue::String("bar".into()));
        p.insert("id".to_string(), PValue::String("myid".into()));
        let envelope =
            encode_property_map_dynamic(&encoder, &TType::Object(decoder_object_type(&decoder)), &PValue::Object(p))
                .unwrap();

        let wrong_type = TType::String;
        let err = decode_property_map_dynamic(&decoder, &wrong_type, &envelope).unwrap_err();
        assert!(matches!(err.kind(), CodecErrorKind::TypeMismatch { .. }));
    }
}
