// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Presentation helpers for data shown to non-admin visitors.

/// Masks a phone number for public listings.
///
/// Keeps the first character and the last three, replacing everything in
/// between with `*`. The output has the same length as the input except
/// that strings shorter than four characters are returned unchanged.
///
/// Works on characters, not bytes.
#[must_use]
pub fn obfuscate_phone(phone: &str) -> String {
    let length: usize = phone.chars().count();
    if length < 4 {
        return phone.to_string();
    }

    let first: String = phone.chars().take(1).collect();
    let last_three: String = phone.chars().skip(length - 3).collect();
    format!("{first}{}{last_three}", "*".repeat(length - 4))
}
