//! Your first taste of jslit: escaping strings and composite values.
//!
//! Run with: cargo run --example simple

use jslit::{escape, js, JsValue};

fn main() -> jslit::Result<()> {
    // Non-ASCII characters are escaped so the output survives any encoding.
    let greeting = JsValue::from("Ich ♥ Bücher");
    println!("{}", escape(&greeting)?);
    // => Ich \u2665 B\xFCcher

    // Composite values render as literals, compact by default.
    let config = js!({
        "name": "demo",
        "retries": 3,
        "tags": ["generated", "inline"]
    });
    println!("{}", escape(&config)?);
    // => {"name":"demo","retries":3,"tags":["generated","inline"]}

    // Map and set values use constructor-call notation.
    let lookup = JsValue::Map(vec![
        (JsValue::from("a"), JsValue::from(1)),
        (JsValue::from("b"), JsValue::from(2)),
    ]);
    println!("{}", escape(&lookup)?);
    // => new Map([["a",1],["b",2]])

    Ok(())
}
