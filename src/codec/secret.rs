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

//! The secret decoder: wraps a child decoder's result in
//! `PValue::Secret`, unless that result is itself unknown, in which case it
//! reports an unknown *secret* output directly rather than a plain
//! `Secret(Computed)`.
use crate::decode::Decoder;
use crate::error::Error;
use crate::pvalue::PValue;
use crate::tvalue::TValue;

pub fn decode_secret(child: &Decoder, t: &TValue) -> Result<PValue, Error> {
    let decoded = child.decode(t)?;
    if decoded.is_unknown() {
        Ok(PValue::unknown_secret_output())
    } else {
        Ok(PValue::Secret(Box::new(decoded)))
    }
}
