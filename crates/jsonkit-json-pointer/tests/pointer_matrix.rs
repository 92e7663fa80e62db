use jsonkit_json_pointer::{
    find, find_by_pointer, format_json_pointer, get, is_child, parse_json_pointer,
    JsonPointerError, ReferenceKey,
};
use jsonkit_value::Value;
use serde_json::json;

fn doc(v: serde_json::Value) -> Value {
    Value::from(v)
}

#[test]
fn pointer_parse_format_roundtrip_matrix() {
    let cases = ["", "/", "//", "/foo", "/foo/bar", "/a~0b/c~1d", "/arr/0", "/~0/~1", "/ "];
    for pointer in cases {
        let path = parse_json_pointer(pointer).expect("valid pointer");
        assert_eq!(format_json_pointer(&path), pointer);
    }
}

#[test]
fn pointer_invalid_matrix() {
    for pointer in ["foo", "#", "#/foo", "/~", "/~2", "/a~b/c"] {
        assert_eq!(
            parse_json_pointer(pointer),
            Err(JsonPointerError::PointerInvalid),
            "pointer: {pointer:?}"
        );
    }
}

#[test]
fn rfc6901_examples() {
    let doc = doc(json!({
        "foo": ["bar", "baz"],
        "": 0,
        "a/b": 1,
        "c%d": 2,
        "e^f": 3,
        "g|h": 4,
        "i\\j": 5,
        "k\"l": 6,
        " ": 7,
        "m~n": 8
    }));
    let cases: [(&str, Value); 12] = [
        ("", doc.clone()),
        ("/foo", doc.get("foo").cloned().unwrap()),
        ("/foo/0", Value::from("bar")),
        ("/", Value::from(0)),
        ("/a~1b", Value::from(1)),
        ("/c%d", Value::from(2)),
        ("/e^f", Value::from(3)),
        ("/g|h", Value::from(4)),
        ("/i\\j", Value::from(5)),
        ("/k\"l", Value::from(6)),
        ("/ ", Value::from(7)),
        ("/m~0n", Value::from(8)),
    ];
    for (pointer, expected) in cases {
        let path = parse_json_pointer(pointer).unwrap();
        assert_eq!(get(&doc, &path), Ok(&expected), "pointer: {pointer:?}");
    }
}

#[test]
fn pointer_get_error_matrix() {
    let doc = doc(json!({"foo": {"bar": [10, 20, null]}, "n": 1}));
    let cases = [
        ("/missing", JsonPointerError::NotFound),
        ("/foo/baz", JsonPointerError::NotFound),
        ("/foo/bar/3", JsonPointerError::OutOfRange),
        ("/foo/bar/-", JsonPointerError::OutOfRange),
        ("/foo/bar/01", JsonPointerError::InvalidIndex),
        ("/foo/bar/-1", JsonPointerError::InvalidIndex),
        ("/foo/bar/1.0", JsonPointerError::InvalidIndex),
        ("/foo/bar/", JsonPointerError::InvalidIndex),
        ("/n/0", JsonPointerError::TypeMismatch),
        ("/foo/bar/2/x", JsonPointerError::TypeMismatch),
    ];
    for (pointer, expected) in cases {
        let path = parse_json_pointer(pointer).unwrap();
        assert_eq!(get(&doc, &path), Err(expected), "pointer: {pointer:?}");
    }
}

#[test]
fn pointer_get_null_value_is_found() {
    let doc = doc(json!({"foo": {"bar": [10, 20, null]}}));
    let path = parse_json_pointer("/foo/bar/2").unwrap();
    assert_eq!(get(&doc, &path), Ok(&Value::Null));
}

#[test]
fn pointer_find_matrix() {
    let doc = doc(json!({"foo": {"bar": [10, 20, null]}}));

    let r = find_by_pointer("/foo/bar/1", &doc).unwrap();
    assert_eq!(r.val, Some(&Value::from(20)));
    assert_eq!(r.key, Some(ReferenceKey::Index(1)));
    assert!(r.is_array_reference());

    let r = find_by_pointer("/foo/bar/2", &doc).unwrap();
    assert_eq!(r.val, Some(&Value::Null));

    let r = find_by_pointer("/foo/bar/-", &doc).unwrap();
    assert_eq!(r.val, None);
    assert_eq!(r.key, Some(ReferenceKey::Index(3)));
    assert!(r.is_array_end());

    let r = find_by_pointer("/foo/bar/7", &doc).unwrap();
    assert_eq!(r.val, None);
    assert_eq!(r.index(), Some(7));

    let r = find_by_pointer("/foo/new", &doc).unwrap();
    assert_eq!(r.val, None);
    assert_eq!(r.key, Some(ReferenceKey::Key("new".to_string())));

    let r = find(&doc, &[]).unwrap();
    assert_eq!(r.val, Some(&doc));
    assert!(r.obj.is_none());
    assert!(r.key.is_none());

    assert_eq!(
        find_by_pointer("/foo/bar/x", &doc),
        Err(JsonPointerError::InvalidIndex)
    );
    assert_eq!(
        find_by_pointer("/nope/x", &doc),
        Err(JsonPointerError::NotFound)
    );
    assert_eq!(find_by_pointer("nope", &doc), Err(JsonPointerError::PointerInvalid));
}

#[test]
fn pointer_duplicate_keys_resolve_first_match() {
    let doc = jsonkit_value::parse(r#"{"k": 1, "k": 2}"#).unwrap();
    let path = parse_json_pointer("/k").unwrap();
    assert_eq!(get(&doc, &path), Ok(&Value::from(1)));
}

#[test]
fn pointer_is_child_matrix() {
    let p = |s: &str| parse_json_pointer(s).unwrap();
    assert!(is_child(&p(""), &p("/a")));
    assert!(is_child(&p("/a"), &p("/a/b/c")));
    assert!(!is_child(&p("/a"), &p("/a")));
    assert!(!is_child(&p("/a"), &p("/ab")));
    assert!(!is_child(&p("/a/b"), &p("/a")));
}
