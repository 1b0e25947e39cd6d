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

//! Provider schema descriptors and the override tree that augments them.
use indexmap::IndexMap;
use std::collections::HashMap;

/// The shape a single schema attribute takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Bool,
    Int,
    Float,
    String,
    List,
    Set,
    Map,
    Dynamic,
    /// A schema the provider declared but that this codec cannot make
    /// sense of; always an error to resolve.
    Invalid,
}

/// What a `List`/`Set`/`Map` schema's elements look like.
#[derive(Debug, Clone)]
pub enum SchemaElem {
    /// Elements are themselves simply typed (e.g. a list of strings).
    Schema(Box<Schema>),
    /// Elements are a nested named resource (e.g. a list of blocks).
    Resource(ResourceSchema),
}

/// A single provider schema attribute.
#[derive(Debug, Clone)]
pub struct Schema {
    pub kind: SchemaKind,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub deprecated: bool,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
    pub elem: Option<SchemaElem>,
}

impl Schema {
    /// A minimal schema of the given kind; all flags false, no element.
    pub fn new(kind: SchemaKind) -> Schema {
        Schema {
            kind,
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            deprecated: false,
            min_items: None,
            max_items: None,
            elem: None,
        }
    }
    /// Builder: mark as optional.
    pub fn optional(mut self) -> Schema {
        self.optional = true;
        self
    }
    /// Builder: mark as required.
    pub fn required(mut self) -> Schema {
        self.required = true;
        self
    }
    /// Builder: mark as computed.
    pub fn computed(mut self) -> Schema {
        self.computed = true;
        self
    }
    /// Builder: mark as sensitive.
    pub fn sensitive(mut self) -> Schema {
        self.sensitive = true;
        self
    }
    /// Builder: attach a simply typed element.
    pub fn with_elem_schema(mut self, elem: Schema) -> Schema {
        self.elem = Some(SchemaElem::Schema(Box::new(elem)));
        self
    }
    /// Builder: attach a nested resource element.
    pub fn with_elem_resource(mut self, elem: ResourceSchema) -> Schema {
        self.elem = Some(SchemaElem::Resource(elem));
        self
    }
    /// Builder: cap `max_items` at 1, the schema-side half of MaxItemsOne.
    pub fn with_max_items_one(mut self) -> Schema {
        self.max_items = Some(1);
        self
    }
}

/// A named, ordered map of attribute name to [`Schema`].
#[derive(Debug, Clone, Default)]
pub struct ResourceSchema {
    pub name: String,
    pub attrs: IndexMap<String, Schema>,
}

impl ResourceSchema {
    /// An empty resource schema with the given name.
    pub fn new(name: impl Into<String>) -> ResourceSchema {
        ResourceSchema { name: name.into(), attrs: IndexMap::new() }
    }
    /// Builder: declare an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, schema: Schema) -> ResourceSchema {
        self.attrs.insert(name.into(), schema);
        self
    }
}

/// Per-attribute override metadata augmenting a [`Schema`]. Forms
/// a tree parallel to the schema it augments.
#[derive(Debug, Clone, Default)]
pub struct SchemaOverride {
    pub rename: Option<String>,
    pub secret: Option<bool>,
    pub max_items_one: Option<bool>,
    /// Forces the int-in-string adapter on a
    /// `Number`-typed attribute.
    pub string_encoded: Option<bool>,
    pub fields: Option<HashMap<String, SchemaOverride>>,
    pub elem: Option<Box<SchemaOverride>>,
}

impl SchemaOverride {
    /// An override with no fields set; walking it is equivalent to having
    /// no override at all.
    pub fn none() -> SchemaOverride {
        SchemaOverride::default()
    }
    /// Builder: rename the attribute on the P-value side.
    pub fn with_rename(mut self, name: impl Into<String>) -> SchemaOverride {
        self.rename = Some(name.into());
        self
    }
    /// Builder: force (or unforce) the secret bit.
    pub fn with_secret(mut self, secret: bool) -> SchemaOverride {
        self.secret = Some(secret);
        self
    }
    /// Builder: force (or unforce) MaxItemsOne flattening.
    pub fn with_max_items_one(mut self, flatten: bool) -> SchemaOverride {
        self.max_items_one = Some(flatten);
        self
    }
    /// Builder: force the int-in-string adapter on or off.
    pub fn with_string_encoded(mut self, enabled: bool) -> SchemaOverride {
        self.string_encoded = Some(enabled);
        self
    }
    /// Builder: attach per-field overrides for a nested resource.
    pub fn with_field(mut self, name: impl Into<String>, over: SchemaOverride) -> SchemaOverride {
        self.fields.get_or_insert_with(HashMap::new).insert(name.into(), over);
        self
    }
    /// Builder: attach an override for a collection's element.
    pub fn with_elem(mut self, over: SchemaOverride) -> SchemaOverride {
        self.elem = Some(Box::new(over));
        self
    }
    /// Look up the override for a named nested field, if any.
    pub fn field(&self, name: &str) -> Option<&SchemaOverride> {
        self.fields.as_ref().and_then(|f| f.get(name))
    }
}
