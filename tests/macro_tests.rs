use jslit::{escape, js, JsMap, JsValue, Number};

#[test]
fn test_macro_literals() {
    assert_eq!(js!(null), JsValue::Null);
    assert_eq!(js!(undefined), JsValue::Undefined);
    assert_eq!(js!(true), JsValue::Bool(true));
    assert_eq!(js!(42), JsValue::Number(Number::Integer(42)));
    assert_eq!(js!("hi"), JsValue::String("hi".to_string()));
}

#[test]
fn test_macro_nested_structures() {
    let value = js!({
        "user": {
            "name": "Alice",
            "roles": ["admin", "ops"]
        },
        "count": 2,
        "extra": null
    });

    let rendered = escape(&value).unwrap();
    assert_eq!(
        rendered,
        "{\"user\":{\"name\":\"Alice\",\"roles\":[\"admin\",\"ops\"]},\"count\":2,\"extra\":null}"
    );
}

#[test]
fn test_macro_trailing_commas() {
    let value = js!([1, 2, 3,]);
    assert_eq!(value.as_array().unwrap().len(), 3);

    let value = js!({ "a": 1, "b": 2, });
    assert_eq!(value.as_object().unwrap().len(), 2);
}

#[test]
fn test_macro_expression_fallback() {
    let n = 40 + 2;
    assert_eq!(js!(n), JsValue::Number(Number::Integer(42)));

    let name = String::from("dynamic");
    assert_eq!(js!(name), JsValue::String("dynamic".to_string()));
}

#[test]
fn test_macro_empty_collections() {
    assert_eq!(js!([]), JsValue::Array(vec![]));
    assert_eq!(js!({}), JsValue::Object(JsMap::new()));
}
