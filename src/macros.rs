#[macro_export]
macro_rules! js {
    // Handle null
    (null) => {
        $crate::JsValue::Null
    };

    // Handle undefined
    (undefined) => {
        $crate::JsValue::Undefined
    };

    // Handle true
    (true) => {
        $crate::JsValue::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::JsValue::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::JsValue::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::JsValue::Array(vec![$($crate::js!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::JsValue::Object($crate::JsMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsMap::new();
        $(
            object.insert($key.to_string(), $crate::js!($value));
        )*
        $crate::JsValue::Object(object)
    }};

    // Fallback for any other expression
    ($v:expr) => {{
        $crate::to_value(&$v).unwrap_or($crate::JsValue::Null)
    }};
}

#[cfg(test)]
mod tests {
    use crate::{JsMap, JsValue, Number};

    #[test]
    fn test_js_macro_primitives() {
        assert_eq!(js!(null), JsValue::Null);
        assert_eq!(js!(undefined), JsValue::Undefined);
        assert_eq!(js!(true), JsValue::Bool(true));
        assert_eq!(js!(false), JsValue::Bool(false));
        assert_eq!(js!(42), JsValue::Number(Number::Integer(42)));
        assert_eq!(js!(3.5), JsValue::Number(Number::Float(3.5)));
        assert_eq!(js!("hello"), JsValue::String("hello".to_string()));
    }

    #[test]
    fn test_js_macro_arrays() {
        assert_eq!(js!([]), JsValue::Array(vec![]));

        let arr = js!([1, 2, 3]);
        match arr {
            JsValue::Array(vec) => {
                assert_eq!(vec.len(), 3);
                assert_eq!(vec[0], JsValue::Number(Number::Integer(1)));
                assert_eq!(vec[1], JsValue::Number(Number::Integer(2)));
                assert_eq!(vec[2], JsValue::Number(Number::Integer(3)));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_js_macro_objects() {
        assert_eq!(js!({}), JsValue::Object(JsMap::new()));

        let obj = js!({
            "name": "Alice",
            "age": 30
        });

        match obj {
            JsValue::Object(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(
                    map.get("name"),
                    Some(&JsValue::String("Alice".to_string()))
                );
                assert_eq!(map.get("age"), Some(&JsValue::Number(Number::Integer(30))));
            }
            _ => panic!("Expected object"),
        }
    }
}
