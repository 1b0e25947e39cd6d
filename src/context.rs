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

//! The schema-map context (SMC) and property context (PC): a zipper over
//! the provider schema tree and its parallel override tree.
use crate::error::SchemaError;
use crate::naming::terraform_to_pulumi_name;
use crate::schema::{ResourceSchema, Schema, SchemaElem, SchemaOverride};
use crate::ttype::TType;
use std::collections::HashMap;

/// Pairs a schema map with its (optional) override map. The entry point
/// for resolving a named attribute or translating a name to its P-side
/// key.
#[derive(Clone, Copy)]
pub struct SchemaMapContext<'a> {
    resource: &'a ResourceSchema,
    overrides: Option<&'a HashMap<String, SchemaOverride>>,
}

impl<'a> SchemaMapContext<'a> {
    /// Build an SMC from a resource schema and its attribute-level
    /// override map, if any.
    pub fn new(
        resource: &'a ResourceSchema,
        overrides: Option<&'a HashMap<String, SchemaOverride>>,
    ) -> SchemaMapContext<'a> {
        SchemaMapContext { resource, overrides }
    }
    /// The resource schema this context wraps.
    pub fn resource(&self) -> &'a ResourceSchema {
        self.resource
    }
    /// Resolve a named attribute to a [`PropertyContext`].
    pub fn attr(&self, name: &str) -> Result<PropertyContext<'a>, SchemaError> {
        let schema = self
            .resource
            .attrs
            .get(name)
            .ok_or_else(|| SchemaError::UnknownAttribute { name: name.to_string() })?;
        let over = self.overrides.and_then(|m| m.get(name));
        Ok(PropertyContext { entry: Entry::Schema(schema), over, name: name.to_string() })
    }
    /// Derive the P-side property key for a Terraform-side attribute name:
    /// an override rename wins, otherwise the default naming convention
    /// applies.
    pub fn pulumi_key(&self, tf_name: &str) -> String {
        if let Some(rename) =
            self.overrides.and_then(|m| m.get(tf_name)).and_then(|o| o.rename.as_ref())
        {
            return rename.clone();
        }
        terraform_to_pulumi_name(tf_name)
    }
}

/// One schema entry: either a simply typed `Schema`, or a nested named
/// resource reached by drilling into a collection's element.
#[derive(Clone, Copy)]
enum Entry<'a> {
    Schema(&'a Schema),
    Resource(&'a ResourceSchema),
}

/// Pairs a single schema entry with its override, and remembers the
/// attribute name it was reached through for diagnostics.
#[derive(Clone)]
pub struct PropertyContext<'a> {
    entry: Entry<'a>,
    over: Option<&'a SchemaOverride>,
    name: String,
}

impl<'a> PropertyContext<'a> {
    /// The simply typed `Schema` this context wraps, if it isn't a nested
    /// resource.
    pub fn schema(&self) -> Option<&'a Schema> {
        match self.entry {
            Entry::Schema(s) => Some(s),
            Entry::Resource(_) => None,
        }
    }
    /// Drill into a collection's element type, combining the schema's
    /// `elem` with the override's `elem`.
    pub fn element(&self) -> Result<PropertyContext<'a>, SchemaError> {
        let schema = self.schema().ok_or_else(|| SchemaError::SchemaMismatch {
            attr: format!("{}.<element>", self.name),
        })?;
        let over = self.over.and_then(|o| o.elem.as_deref());
        match &schema.elem {
            Some(SchemaElem::Schema(inner)) => {
                Ok(PropertyContext { entry: Entry::Schema(inner), over, name: format!("{}[]", self.name) })
            }
            Some(SchemaElem::Resource(r)) => {
                Ok(PropertyContext { entry: Entry::Resource(r), over, name: format!("{}[]", self.name) })
            }
            None => Err(SchemaError::SchemaMismatch { attr: format!("{}.<element>", self.name) }),
        }
    }
    /// If this entry (or, typically, the result of [`Self::element`])
    /// resolves to a nested named resource, return its [`SchemaMapContext`].
    /// Fails with [`SchemaError::NotAnObject`] otherwise.
    pub fn object(&self) -> Result<SchemaMapContext<'a>, SchemaError> {
        match self.entry {
            Entry::Resource(r) => {
                Ok(SchemaMapContext::new(r, self.over.and_then(|o| o.fields.as_ref())))
            }
            Entry::Schema(_) => Err(SchemaError::NotAnObject { attr: self.name.clone() }),
        }
    }
    /// Treat a nested resource as a tuple by synthesising attribute names
    /// `t0`, `t1`, ... and drilling in.
    pub fn tuple_element(&self, i: usize) -> Result<PropertyContext<'a>, SchemaError> {
        self.object()?.attr(&format!("t{i}"))
    }
    /// Whether this attribute is sensitive: override wins, otherwise the
    /// schema's sensitive bit (nested resources without a schema of their
    /// own are never implicitly secret).
    pub fn secret(&self) -> bool {
        if let Some(forced) = self.over.and_then(|o| o.secret) {
            return forced;
        }
        self.schema().map(|s| s.sensitive).unwrap_or(false)
    }
    /// Whether this `Number`-typed attribute requests the int-in-string
    /// adapter.
    pub fn string_encoded(&self) -> bool {
        self.over.and_then(|o| o.string_encoded).unwrap_or(false)
    }
    /// If `outer` is a `List`/`Set` T-type and the schema or override
    /// requests MaxItemsOne flattening, returns the element's property
    /// context. Otherwise `None`.
    pub fn is_max_items_one(&self, outer: &TType) -> Option<PropertyContext<'a>> {
        match outer {
            TType::List(_) | TType::Set(_) => {}
            _ => return None,
        }
        let schema = self.schema()?;
        let flatten = self
            .over
            .and_then(|o| o.max_items_one)
            .unwrap_or_else(|| schema.max_items == Some(1));
        if flatten {
            self.element().ok()
        } else {
            None
        }
    }
    /// The attribute name (or synthesised path segment) this context was
    /// reached through, for diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaKind;

    fn string_schema() -> Schema {
        Schema::new(SchemaKind::String).optional()
    }

    #[test]
    fn unknown_attribute_errors() {
        let rs = ResourceSchema::new("res");
        let smc = SchemaMapContext::new(&rs, None);
        assert!(matches!(smc.attr("foo"), Err(SchemaError::UnknownAttribute { .. })));
    }

    #[test]
    fn pulumi_key_uses_rename_override_then_convention() {
        let rs = ResourceSchema::new("res").with_attr("instance_type", string_schema());
        let mut overrides = HashMap::new();
        overrides.insert("instance_type".to_string(), SchemaOverride::none().with_rename("itype"));
        let smc = SchemaMapContext::new(&rs, Some(&overrides));
        assert_eq!(smc.pulumi_key("instance_type"), "itype");

        let smc_no_override = SchemaMapContext::new(&rs, None);
        assert_eq!(smc_no_override.pulumi_key("instance_type"), "instanceType");
    }

    #[test]
    fn secret_override_wins_over_schema_bit() {
        let rs = ResourceSchema::new("res").with_attr("plain", string_schema());
        let mut overrides = HashMap::new();
        overrides.insert("plain".to_string(), SchemaOverride::none().with_secret(true));
        let smc = SchemaMapContext::new(&rs, Some(&overrides));
        let pc = smc.attr("plain").unwrap();
        assert!(pc.secret());
    }

    #[test]
    fn nested_resource_drill_and_tuple_synthesis() {
        let inner = ResourceSchema::new("inner")
            .with_attr("t0", Schema::new(SchemaKind::Bool))
            .with_attr("t1", string_schema());
        let outer_attr = Schema::new(SchemaKind::List).with_elem_resource(inner);
        let rs = ResourceSchema::new("outer").with_attr("pair", outer_attr);
        let smc = SchemaMapContext::new(&rs, None);
        let pc = smc.attr("pair").unwrap();
        let elem_pc = pc.element().unwrap();
        let smc2 = elem_pc.object().unwrap();
        assert!(smc2.attr("t0").is_ok());

        let t1 = pc.tuple_element(1).unwrap();
        assert_eq!(t1.schema().unwrap().kind, SchemaKind::String);
    }

    #[test]
    fn max_items_one_respects_override_and_schema() {
        let inner = ResourceSchema::new("inner").with_attr("x", string_schema());
        let attr = Schema::new(SchemaKind::List).with_elem_resource(inner).with_max_items_one();
        let rs = ResourceSchema::new("outer").with_attr("block", attr);
        let smc = SchemaMapContext::new(&rs, None);
        let pc = smc.attr("block").unwrap();
        let list_ty = TType::list(TType::String);
        assert!(pc.is_max_items_one(&list_ty).is_some());
    }
}
