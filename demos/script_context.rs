//! Embedding untrusted data inside an HTML `<script>` element.
//!
//! A payload containing `</script>` would terminate the surrounding script
//! element early; script-context mode rewrites the dangerous sequences so
//! the emitted page stays intact.
//!
//! Run with: cargo run --example script_context

use jslit::{escape_with_options, EscapeOptions, JsValue, Quotes};

fn main() -> jslit::Result<()> {
    let payload = JsValue::from("</script><script>alert(1)</script><!--");

    let options = EscapeOptions::new()
        .with_quotes(Quotes::Double)
        .with_wrap(true)
        .with_script_context(true);
    let literal = escape_with_options(&payload, options)?;

    println!("<script>");
    println!("  var data = {literal};");
    println!("</script>");

    // The rendered literal contains no `</script` or `<!--` sequence.
    assert!(!literal.to_lowercase().contains("</script"));
    assert!(!literal.contains("<!--"));

    Ok(())
}
