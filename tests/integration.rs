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

//! End-to-end tests: nested schemas walked from object schema all the way
//! through encode and decode, plus the round-trip and ordering properties
//! that should hold regardless of shape.
use schema_codec::context::SchemaMapContext;
use schema_codec::decode::derive::derive_object_decoder;
use schema_codec::decode::Decoder;
use schema_codec::encode::derive::derive_object_encoder;
use schema_codec::encode::Encoder;
use schema_codec::pvalue::PValue;
use schema_codec::schema::{ResourceSchema, Schema, SchemaKind, SchemaOverride};
use schema_codec::ttype::TType;
use schema_codec::tvalue::TValue;
use schema_codec::{
    build_object_decoder, build_object_encoder, decode_property_map, encode_property_map,
    infer_object_type, ObjectSchema,
};
use std::collections::HashMap;

fn obj(pairs: Vec<(&str, PValue)>) -> PValue {
    let mut m = indexmap::IndexMap::new();
    for (k, v) in pairs {
        m.insert(k.to_string(), v);
    }
    PValue::Object(m)
}

#[test]
fn number_string_coercion() {
    let t = Encoder::Number.encode(&PValue::String("123".into())).unwrap();
    assert_eq!(t.as_number().unwrap().to_string(), "123");

    let err = Encoder::Number.encode(&PValue::String("abc".into())).unwrap_err();
    assert!(matches!(err.kind(), schema_codec::error::CodecErrorKind::NumberParseError { .. }));

    let t_unknown = Encoder::Number.encode(&PValue::Computed).unwrap();
    assert!(t_unknown.is_unknown());
}

#[test]
fn tuple_round_trips() {
    let encoders = vec![Encoder::Bool, Encoder::String];
    let types = vec![TType::Bool, TType::String];
    let p = PValue::Array(vec![PValue::Bool(true), PValue::String("foo".into())]);
    let t = schema_codec::codec::tuple::encode_tuple(&encoders, &types, &p).unwrap();

    let decoders = vec![Decoder::Bool, Decoder::String];
    let back = schema_codec::codec::tuple::decode_tuple(&decoders, &t).unwrap();
    assert_eq!(back, p);
}

#[test]
fn set_decode_preserves_value_order() {
    let ty = TType::set(TType::String);
    let t = TValue::set(ty, vec![TValue::string("world"), TValue::string("hello")]);
    let p = schema_codec::codec::collection::decode_sequence(&Decoder::String, &t).unwrap();
    assert_eq!(p, PValue::Array(vec![PValue::String("world".into()), PValue::String("hello".into())]));
}

fn nested_block_resource() -> ResourceSchema {
    let inner = ResourceSchema::new("network_interface")
        .with_attr("device_index", Schema::new(SchemaKind::Int).required())
        .with_attr("subnet_id", Schema::new(SchemaKind::String).optional());
    let interfaces = Schema::new(SchemaKind::List).with_elem_resource(inner).optional();
    let tags = Schema::new(SchemaKind::Map)
        .with_elem_schema(Schema::new(SchemaKind::String))
        .optional();

    ResourceSchema::new("instance")
        .with_attr("id", Schema::new(SchemaKind::String).computed())
        .with_attr("instance_type", Schema::new(SchemaKind::String).required())
        .with_attr("network_interface", interfaces)
        .with_attr("tags", tags)
}

#[test]
fn nested_list_of_blocks_and_map_round_trip() {
    let rs = nested_block_resource();
    let schema = ObjectSchema::new(&rs);
    let encoder = build_object_encoder(&schema).unwrap();
    let decoder = build_object_decoder(&schema).unwrap();

    let mut tags = indexmap::IndexMap::new();
    tags.insert("env".to_string(), PValue::String("prod".into()));
    let input = obj(vec![
        ("id", PValue::String("i-123".into())),
        ("instanceType", PValue::String("t2.micro".into())),
        (
            "networkInterface",
            PValue::Array(vec![obj(vec![
                ("deviceIndex", PValue::Number(0.0)),
                ("subnetId", PValue::String("subnet-1".into())),
            ])]),
        ),
        ("tags", PValue::Object(tags)),
    ]);

    let t = encode_property_map(&encoder, &input).unwrap();
    let back = decode_property_map(&decoder, &t).unwrap();
    assert_eq!(back, input);
}

#[test]
fn max_items_one_flattens_a_nested_block_to_a_single_object() {
    let inner = ResourceSchema::new("ebs_block")
        .with_attr("volume_size", Schema::new(SchemaKind::Int).optional());
    let block = Schema::new(SchemaKind::List).with_elem_resource(inner).with_max_items_one().optional();
    let rs = ResourceSchema::new("instance").with_attr("root_block_device", block);

    let schema = ObjectSchema::new(&rs);
    let encoder = build_object_encoder(&schema).unwrap();
    let decoder = build_object_decoder(&schema).unwrap();

    let input = obj(vec![("rootBlockDevice", obj(vec![("volumeSize", PValue::Number(8.0))]))]);
    let t = encode_property_map(&encoder, &input).unwrap();

    let attrs = t.as_map().unwrap();
    let flattened = attrs.get("root_block_device").unwrap();
    assert_eq!(flattened.as_seq().unwrap().len(), 1);

    let back = decode_property_map(&decoder, &t).unwrap();
    assert_eq!(back, input);

    let null_input = obj(vec![]);
    let t_null = encode_property_map(&encoder, &null_input).unwrap();
    let flattened_null = t_null.as_map().unwrap().get("root_block_device").unwrap();
    assert_eq!(flattened_null.as_seq().unwrap().len(), 0);
}

#[test]
fn rename_override_applies_through_full_encode_decode() {
    let rs = ResourceSchema::new("instance")
        .with_attr("instance_type", Schema::new(SchemaKind::String).required());
    let mut overrides = HashMap::new();
    overrides.insert("instance_type".to_string(), SchemaOverride::none().with_rename("itype"));
    let schema = ObjectSchema::new(&rs).with_overrides(&overrides);
    let encoder = build_object_encoder(&schema).unwrap();
    let decoder = build_object_decoder(&schema).unwrap();

    let input = obj(vec![("itype", PValue::String("t2.micro".into()))]);
    let t = encode_property_map(&encoder, &input).unwrap();
    let back = decode_property_map(&decoder, &t).unwrap();
    assert_eq!(back, input);
}

#[test]
fn secret_attribute_round_trips_through_wrapper() {
    let rs = ResourceSchema::new("instance")
        .with_attr("password", Schema::new(SchemaKind::String).sensitive().required());
    let schema = ObjectSchema::new(&rs);
    let decoder = build_object_decoder(&schema).unwrap();

    let mut attrs = indexmap::IndexMap::new();
    attrs.insert("password".to_string(), TValue::string("hunter2"));
    let ty = match &decoder {
        Decoder::Object(o) => o.object_type().clone(),
        _ => unreachable!(),
    };
    let t = TValue::object(TType::Object(ty), attrs);
    let p = decode_property_map(&decoder, &t).unwrap();
    match p {
        PValue::Object(o) => {
            assert_eq!(o.get("password"), Some(&PValue::Secret(Box::new(PValue::String("hunter2".into())))))
        }
        _ => panic!("expected object"),
    }
}

#[test]
fn inferred_object_type_maps_nested_resource_to_object() {
    let rs = nested_block_resource();
    let inferred = infer_object_type(&rs).unwrap();
    match inferred.attr("network_interface").unwrap() {
        TType::List(elem) => assert!(matches!(elem.as_ref(), TType::Object(_))),
        other => panic!("expected list, got {other:?}"),
    }
    assert!(inferred.is_optional("id"));
}

#[test]
fn dynamic_codec_round_trips_an_arbitrary_object() {
    let p = obj(vec![
        ("flag", PValue::Bool(true)),
        ("items", PValue::Array(vec![PValue::Number(1.0), PValue::Number(2.0)])),
    ]);
    let t = schema_codec::codec::dynamic::encode_dynamic(&p).unwrap();
    let back = schema_codec::codec::dynamic::decode_dynamic(&t).unwrap();
    assert_eq!(back, p);
}

#[test]
fn derivation_reuses_smc_for_resource_and_overrides() {
    let rs = nested_block_resource();
    let smc = SchemaMapContext::new(&rs, None);
    let obj_ty = infer_object_type(&rs).unwrap();
    let encoder = derive_object_encoder(&obj_ty, &smc).unwrap();
    let decoder = derive_object_decoder(&obj_ty, &smc).unwrap();
    assert_eq!(encoder.object_type(), decoder.object_type());
}

#[test]
fn object_encoder_and_decoder_types_stay_in_sync() {
    let rs = nested_block_resource();
    let schema = ObjectSchema::new(&rs);
    let encoder = build_object_encoder(&schema).unwrap();
    let decoder = build_object_decoder(&schema).unwrap();
    let (enc_ty, dec_ty) = match (&encoder, &decoder) {
        (Encoder::Object(e), Decoder::Object(d)) => (e.object_type(), d.object_type()),
        _ => unreachable!(),
    };
    assert_eq!(enc_ty, dec_ty);
}
