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

//! Leaf and composite codecs: the per-shape encode/decode logic applied by
//! the codec tree built in [`crate::encode`] and [`crate::decode`].
pub mod adapter;
pub mod collection;
pub mod dynamic;
pub mod flattened;
pub mod leaf;
pub mod object;
pub mod secret;
pub mod tuple;
