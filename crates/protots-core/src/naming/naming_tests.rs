#![allow(non_snake_case)]

use super::*;

#[test]
fn to_camel_case___pascal_case___lowers_first_letter() {
    assert_eq!(to_camel_case("List"), "list");
    assert_eq!(to_camel_case("GetUserById"), "getUserById");
}

#[test]
fn to_camel_case___snake_case___converts() {
    assert_eq!(to_camel_case("get_user"), "getUser");
    assert_eq!(to_camel_case("list_all_items"), "listAllItems");
}

#[test]
fn to_camel_case___already_camel___unchanged() {
    assert_eq!(to_camel_case("getUser"), "getUser");
}

#[test]
fn to_camel_case___empty___returns_empty() {
    assert_eq!(to_camel_case(""), "");
}

#[test]
fn to_camel_case___consecutive_underscores___collapse() {
    assert_eq!(to_camel_case("get__user"), "getUser");
}
