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

//! Derives a [`Decoder`] tree, the mirror image of
//! [`crate::encode::derive`].
use super::{Decoder, ObjectDecoder};
use crate::codec::adapter::AdapterKind;
use crate::context::{PropertyContext, SchemaMapContext};
use crate::error::SchemaError;
use crate::ttype::TType;
use indexmap::IndexMap;

/// Derive the decoder for a single property. Wraps the result in
/// [`Decoder::Secret`] when the property is sensitive; this
/// happens at the outermost layer, after any MaxItemsOne flattening, so a
/// sensitive flattened block still yields a single `Secret(...)` rather
/// than a flattened value nested inside one.
pub fn derive_property_decoder(ty: &TType, pc: &PropertyContext) -> Result<Decoder, SchemaError> {
    let dec = derive_property_decoder_inner(ty, pc)?;
    if pc.secret() {
        Ok(Decoder::Secret(Box::new(dec)))
    } else {
        Ok(dec)
    }
}

fn derive_property_decoder_inner(ty: &TType, pc: &PropertyContext) -> Result<Decoder, SchemaError> {
    if let Some(elem_pc) = pc.is_max_items_one(ty) {
        let elem_ty = match ty {
            TType::List(e) | TType::Set(e) => e.as_ref().clone(),
            _ => unreachable!("is_max_items_one only returns Some for List/Set"),
        };
        let elem = derive_property_decoder_inner(&elem_ty, &elem_pc)?;
        return Ok(Decoder::Flattened(Box::new(elem)));
    }
    match ty {
        TType::Bool => Ok(Decoder::Bool),
        TType::Number => {
            if pc.string_encoded() {
                Ok(Decoder::Adapter(AdapterKind::StringOverInt, Box::new(Decoder::Number)))
            } else {
                Ok(Decoder::Number)
            }
        }
        TType::String => Ok(Decoder::String),
        TType::List(elem) => {
            let elem_pc = pc.element()?;
            let elem_dec = derive_property_decoder_inner(elem, &elem_pc)?;
            Ok(Decoder::List(Box::new(elem_dec)))
        }
        TType::Set(elem) => {
            let elem_pc = pc.element()?;
            let elem_dec = derive_property_decoder_inner(elem, &elem_pc)?;
            Ok(Decoder::Set(Box::new(elem_dec)))
        }
        TType::Map(elem) => {
            let elem_pc = pc.element()?;
            let elem_dec = derive_property_decoder_inner(elem, &elem_pc)?;
            Ok(Decoder::Map(Box::new(elem_dec)))
        }
        TType::Object(obj_ty) => {
            let smc = pc.object()?;
            derive_object_decoder(obj_ty, &smc).map(Decoder::Object)
        }
        TType::Tuple(types) => {
            let mut decoders = Vec::with_capacity(types.len());
            for (i, elem_ty) in types.iter().enumerate() {
                let elem_pc = pc.tuple_element(i)?;
                decoders.push(derive_property_decoder_inner(elem_ty, &elem_pc)?);
            }
            Ok(Decoder::Tuple(decoders))
        }
        TType::Dynamic => Ok(Decoder::Dynamic),
    }
}

/// Derive an [`ObjectDecoder`] by walking every attribute the object
/// T-type declares against the schema map context.
pub fn derive_object_decoder(
    obj_ty: &crate::ttype::ObjectType,
    smc: &SchemaMapContext,
) -> Result<ObjectDecoder, SchemaError> {
    let mut attrs = IndexMap::new();
    for (attr_name, attr_ty) in obj_ty.attrs() {
        let pc = smc.attr(attr_name)?;
        let pulumi_key = smc.pulumi_key(attr_name);
        let dec = derive_property_decoder(attr_ty, &pc)?;
        attrs.insert(attr_name.clone(), (pulumi_key, dec));
    }
    Ok(ObjectDecoder::from_parts(obj_ty.clone(), attrs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ResourceSchema, Schema, SchemaKind, SchemaOverride};
    use std::collections::HashMap;

    #[test]
    fn sensitive_attribute_wraps_in_secret_decoder() {
        let rs = ResourceSchema::new("res").with_attr("password", Schema::new(SchemaKind::String).sensitive());
        let smc = SchemaMapContext::new(&rs, None);
        let pc = smc.attr("password").unwrap();
        let dec = derive_property_decoder(&TType::String, &pc).unwrap();
        assert!(matches!(dec, Decoder::Secret(_)));
    }

    #[test]
    fn string_encoded_override_wraps_number_decoder() {
        let rs = ResourceSchema::new("res").with_attr("port", Schema::new(SchemaKind::Int));
        let mut overrides = HashMap::new();
        overrides.insert("port".to_string(), SchemaOverride::none().with_string_encoded(true));
        let smc = SchemaMapContext::new(&rs, Some(&overrides));
        let pc = smc.attr("port").unwrap();
        let dec = derive_property_decoder(&TType::Number, &pc).unwrap();
        assert!(matches!(dec, Decoder::Adapter(AdapterKind::StringOverInt, _)));
    }
}
