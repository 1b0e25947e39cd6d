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

//! Tracks the path through a codec tree that led to an error, to aid
//! diagnostics. Appended to as an error unwinds; never consulted to make
//! decisions.
use super::linkedlist::LinkedList;
use std::borrow::Cow;
use std::fmt;

/// A cheaply clonable, append-only path through the attributes, tuple
/// positions and sequence indexes we've traversed while encoding or
/// decoding a value.
#[derive(Clone, Default, Debug)]
pub struct Context {
    path: LinkedList<Location>,
}

impl Context {
    /// An empty context, as held by a freshly constructed error.
    pub fn new() -> Context {
        Default::default()
    }
    /// Return a new context with the given location appended.
    pub fn at(&self, loc: Location) -> Context {
        Context { path: self.path.clone().push(loc) }
    }
    /// Return a new context with a field location appended.
    pub fn at_field(&self, field: impl Into<Cow<'static, str>>) -> Context {
        self.at(Location::field(field))
    }
    /// Return a new context with a sequence index appended.
    pub fn at_idx(&self, i: usize) -> Context {
        self.at(Location::idx(i))
    }
    /// Return a new context with a tuple position appended.
    pub fn at_tuple_index(&self, i: usize) -> Context {
        self.at(Location::tuple_index(i))
    }
    /// Return the current path, for display purposes.
    pub fn path(&self) -> Path<'_> {
        Path(&self.path)
    }
    /// True if no location has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// The current path, most-recent-first internally, rendered oldest-first.
pub struct Path<'a>(&'a LinkedList<Location>);

impl<'a> fmt::Display for Path<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<&Location> = self.0.iter_back().collect();
        if items.is_empty() {
            return f.write_str("<root>");
        }
        for (idx, loc) in items.iter().rev().enumerate() {
            match &loc.inner {
                Loc::Field(name) => {
                    if idx != 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                Loc::Index(i) => write!(f, "[{i}]")?,
                Loc::TupleIndex(i) => write!(f, ".t{i}")?,
            }
        }
        Ok(())
    }
}

/// A single step in the path: a field name, a sequence index, or a tuple
/// position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    inner: Loc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Loc {
    Field(Cow<'static, str>),
    Index(usize),
    TupleIndex(usize),
}

impl Location {
    /// A named attribute of an object.
    pub fn field(name: impl Into<Cow<'static, str>>) -> Self {
        Location { inner: Loc::Field(name.into()) }
    }
    /// An index into a list, set, or array.
    pub fn idx(i: usize) -> Self {
        Location { inner: Loc::Index(i) }
    }
    /// A position within a tuple.
    pub fn tuple_index(i: usize) -> Self {
        Location { inner: Loc::TupleIndex(i) }
    }
}
