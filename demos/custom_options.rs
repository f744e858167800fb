//! Customizing quotes, wrapping, number bases, and indentation.
//!
//! Run with: cargo run --example custom_options

use jslit::{escape_with_options, js, EscapeOptions, JsValue, NumberBase, Quotes};

fn main() -> jslit::Result<()> {
    let text = JsValue::from("It's \"fine\"");

    // Single quotes, wrapped: only the active quote gets escaped.
    let single = EscapeOptions::new().with_quotes(Quotes::Single).with_wrap(true);
    println!("{}", escape_with_options(&text, single)?);
    // => 'It\'s "fine"'

    // Backtick quoting escapes `${` so no template substitution can fire.
    let backtick = EscapeOptions::new()
        .with_quotes(Quotes::Backtick)
        .with_wrap(true);
    println!(
        "{}",
        escape_with_options(&JsValue::from("total: ${amount}"), backtick)?
    );
    // => `total: \${amount}`

    // Number bases apply to integers; hex digit case is configurable.
    let numbers = js!([10, 171, 3.5]);
    let hex = EscapeOptions::new()
        .with_numbers(NumberBase::Hexadecimal)
        .with_lowercase_hex(true);
    println!("{}", escape_with_options(&numbers, hex)?);
    // => [0xa,0xab,3.5]

    // Indented output with a custom indent unit.
    let config = js!({ "servers": ["alpha", "beta"] });
    let indented = EscapeOptions::new().with_compact(false).with_indent("  ");
    println!("{}", escape_with_options(&config, indented)?);

    // JSON mode overrides bases and substitutes null for specials.
    println!(
        "{}",
        escape_with_options(&numbers, EscapeOptions::json().with_numbers(NumberBase::Binary))?
    );
    // => [10,171,3.5]

    Ok(())
}
