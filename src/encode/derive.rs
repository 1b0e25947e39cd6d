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

//! Derives an [`Encoder`] tree from a schema/override zipper and a target
//! T-type: walked once per resource, then reused for every
//! encode call.
use super::{Encoder, ObjectEncoder};
use crate::codec::adapter::AdapterKind;
use crate::context::{PropertyContext, SchemaMapContext};
use crate::error::SchemaError;
use crate::ttype::TType;
use indexmap::IndexMap;

/// Derive the encoder for a single property, given its T-type and its
/// position in the schema/override zipper.
pub fn derive_property_encoder(ty: &TType, pc: &PropertyContext) -> Result<Encoder, SchemaError> {
    if let Some(elem_pc) = pc.is_max_items_one(ty) {
        let elem_ty = match ty {
            TType::List(e) | TType::Set(e) => e.as_ref().clone(),
            _ => unreachable!("is_max_items_one only returns Some for List/Set"),
        };
        let elem = derive_property_encoder(&elem_ty, &elem_pc)?;
        return Ok(Encoder::Flattened(ty.clone(), Box::new(elem)));
    }
    match ty {
        TType::Bool => Ok(Encoder::Bool),
        TType::Number => {
            if pc.string_encoded() {
                Ok(Encoder::Adapter(AdapterKind::IntOverrideString, Box::new(Encoder::Number)))
            } else {
                Ok(Encoder::Number)
            }
        }
        TType::String => Ok(Encoder::String),
        TType::List(elem) => {
            let elem_pc = pc.element()?;
            let elem_enc = derive_property_encoder(elem, &elem_pc)?;
            Ok(Encoder::List(ty.clone(), Box::new(elem_enc)))
        }
        TType::Set(elem) => {
            let elem_pc = pc.element()?;
            let elem_enc = derive_property_encoder(elem, &elem_pc)?;
            Ok(Encoder::Set(ty.clone(), Box::new(elem_enc)))
        }
        TType::Map(elem) => {
            let elem_pc = pc.element()?;
            let elem_enc = derive_property_encoder(elem, &elem_pc)?;
            Ok(Encoder::Map(ty.clone(), Box::new(elem_enc)))
        }
        TType::Object(obj_ty) => {
            let smc = pc.object()?;
            derive_object_encoder(obj_ty, &smc).map(Encoder::Object)
        }
        TType::Tuple(types) => {
            let mut encoders = Vec::with_capacity(types.len());
            for (i, elem_ty) in types.iter().enumerate() {
                let elem_pc = pc.tuple_element(i)?;
                encoders.push(derive_property_encoder(elem_ty, &elem_pc)?);
            }
            Ok(Encoder::Tuple(types.clone(), encoders))
        }
        TType::Dynamic => Ok(Encoder::Dynamic),
    }
}

/// Derive an [`ObjectEncoder`] by walking every attribute the object T-type
/// declares against the schema map context.
pub fn derive_object_encoder(
    obj_ty: &crate::ttype::ObjectType,
    smc: &SchemaMapContext,
) -> Result<ObjectEncoder, SchemaError> {
    let mut attrs = IndexMap::new();
    for (attr_name, attr_ty) in obj_ty.attrs() {
        let pc = smc.attr(attr_name)?;
        let pulumi_key = smc.pulumi_key(attr_name);
        let enc = derive_property_encoder(attr_ty, &pc)?;
        attrs.insert(attr_name.clone(), (pulumi_key, enc));
    }
    Ok(ObjectEncoder::from_parts(obj_ty.clone(), attrs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ResourceSchema, Schema, SchemaKind};
    use crate::ttype::ObjectType;
    use std::collections::BTreeSet;

    #[test]
    fn derives_flattened_encoder_for_max_items_one() {
        let inner = ResourceSchema::new("inner").with_attr("name", Schema::new(SchemaKind::String));
        let attr = Schema::new(SchemaKind::List).with_elem_resource(inner).with_max_items_one();
        let rs = ResourceSchema::new("outer").with_attr("block", attr);
        let smc = SchemaMapContext::new(&rs, None);
        let pc = smc.attr("block").unwrap();

        let mut inner_attrs = IndexMap::new();
        inner_attrs.insert("name".to_string(), TType::String);
        let elem_ty = TType::Object(ObjectType::new(inner_attrs, BTreeSet::new()));
        let ty = TType::list(elem_ty);

        let enc = derive_property_encoder(&ty, &pc).unwrap();
        assert!(matches!(enc, Encoder::Flattened(_, _)));
    }

    #[test]
    fn derives_int_override_string_adapter() {
        use crate::schema::SchemaOverride;
        use std::collections::HashMap;

        let rs = ResourceSchema::new("res").with_attr("port", Schema::new(SchemaKind::Int));
        let mut overrides = HashMap::new();
        overrides.insert("port".to_string(), SchemaOverride::none().with_string_encoded(true));
        let smc = SchemaMapContext::new(&rs, Some(&overrides));
        let pc = smc.attr("port").unwrap();

        let enc = derive_property_encoder(&TType::Number, &pc).unwrap();
        assert!(matches!(enc, Encoder::Adapter(AdapterKind::IntOverrideString, _)));
    }
}
