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

//! The default Terraform↔Pulumi naming convention, applied
//! whenever an attribute has no rename override.

/// Convert a `snake_case` Terraform-side attribute name to the default
/// `camelCase` Pulumi-side property key: split on `_`, lowercase the first
/// word, title-case every subsequent word, concatenate.
pub fn terraform_to_pulumi_name(tf_name: &str) -> String {
    let mut out = String::with_capacity(tf_name.len());
    for (i, word) in tf_name.split('_').filter(|w| !w.is_empty()).enumerate() {
        if i == 0 {
            out.push_str(&word.to_ascii_lowercase());
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(&chars.as_str().to_ascii_lowercase());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_is_lowercased() {
        assert_eq!(terraform_to_pulumi_name("id"), "id");
    }

    #[test]
    fn multi_word_becomes_camel_case() {
        assert_eq!(terraform_to_pulumi_name("instance_type"), "instanceType");
    }

    #[test]
    fn already_mixed_case_words_are_normalized_per_word() {
        assert_eq!(terraform_to_pulumi_name("vpc_ID"), "vpcId");
    }

    #[test]
    fn empty_segments_are_skipped() {
        assert_eq!(terraform_to_pulumi_name("foo__bar"), "fooBar");
    }
}
