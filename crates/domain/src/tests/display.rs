// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::obfuscate_phone;

#[test]
fn test_obfuscate_phone_keeps_first_and_last_three() {
    assert_eq!(obfuscate_phone("099123456"), "0*****456");
}

#[test]
fn test_obfuscate_phone_preserves_length() {
    let phone: &str = "091234567";
    assert_eq!(obfuscate_phone(phone).chars().count(), phone.chars().count());
}

#[test]
fn test_obfuscate_phone_short_input_unchanged() {
    assert_eq!(obfuscate_phone("123"), "123");
    assert_eq!(obfuscate_phone(""), "");
}

#[test]
fn test_obfuscate_phone_four_characters_has_no_stars() {
    assert_eq!(obfuscate_phone("1234"), "1234");
    assert_eq!(obfuscate_phone("12345"), "1*345");
}

#[test]
fn test_obfuscate_phone_counts_characters_not_bytes() {
    assert_eq!(obfuscate_phone("ñ12345"), "ñ**345");
}
