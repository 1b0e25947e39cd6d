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

//! The generic adapter codec: apply a value-level transform,
//! then delegate to an inner codec. Currently instantiated for the
//! int-in-string override on `Number`-typed attributes.
use crate::number::format_canonical;
use crate::pvalue::PValue;
use crate::ttype::TType;
use crate::tvalue::TValue;

/// Which adapter transform an `Encoder`/`Decoder` `Adapter` node applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterKind {
    /// Encode direction: a P-string holding a number parses to a P-number
    /// before delegating to the number leaf encoder.
    IntOverrideString,
    /// Decode direction: a T-number formats to a canonical decimal string
    /// before delegating to the string leaf decoder.
    StringOverInt,
}

/// Apply the int-override-string adapter's transform to a P-value before
/// it reaches the number leaf encoder.
pub fn adapt_int_override_string(p: &PValue) -> PValue {
    match p {
        PValue::String(s) => match s.parse::<f64>() {
            Ok(f) => PValue::Number(f),
            // Leave unparsable strings as-is; the number leaf encoder's
            // own coercion path reports the parse error.
            Err(_) => p.clone(),
        },
        other => other.clone(),
    }
}

/// Apply the string-over-int adapter's transform to a T-value before it
/// reaches the string leaf decoder.
pub fn adapt_string_over_int(t: &TValue) -> TValue {
    if t.is_unknown() {
        return TValue::unknown(TType::String);
    }
    if t.is_null() {
        return TValue::null(TType::String);
    }
    match t.as_number() {
        Some(n) => TValue::string(format_canonical(n)),
        // Not a number; pass through unchanged so the string decoder's
        // own type-mismatch error fires.
        None => t.clone(),
    }
}
