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

//! Arbitrary-precision number support for [`crate::tvalue::TValue`].
//!
//! T-numbers are decimal, not binary float, so that values beyond `f64`'s
//! 53-bit mantissa survive a T→P→T round trip unless they're actually
//! narrowed to an `f64` at the P-value boundary (see
//! [`crate::codec::leaf::decode_number`]).
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// An arbitrary-precision decimal number.
pub type Number = BigDecimal;

/// Parse a string the way the number leaf codec's string coercion does:
/// try a signed 64-bit integer first, then fall back to a general decimal
/// parse. Returns `None` if neither succeeds.
pub fn parse_number_str(s: &str) -> Option<Number> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::from(i));
    }
    Number::from_str(s).ok()
}

/// Narrow a `Number` to `f64`, as happens when a T-number crosses into a
/// P-number. Loses precision beyond 53 bits of mantissa; this is an
/// accepted, one-directional loss.
pub fn number_to_f64(n: &Number) -> f64 {
    // Going through the decimal string representation avoids pulling in
    // `num-traits` just for `ToPrimitive`, and is exact up to the same
    // precision `f64::from_str` itself offers.
    n.to_string().parse::<f64>().unwrap_or(f64::NAN)
}

/// Widen an `f64` into a `Number`. Used when a P-number (which is always
/// `f64`) is encoded into a T-number.
pub fn number_from_f64(f: f64) -> Number {
    Number::from_str(&format!("{f}")).unwrap_or_else(|_| Number::from(0))
}

/// Render a `Number` in canonical decimal form: general format, no
/// trailing zeros. Used by the string-over-int adapter.
pub fn format_canonical(n: &Number) -> String {
    n.normalized().to_string()
}
