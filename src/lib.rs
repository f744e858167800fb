//! # jslit
//!
//! Escape arbitrary data as JavaScript source literals.
//!
//! ## What is jslit?
//!
//! jslit turns in-memory values (strings, numbers, arrays, objects, maps,
//! sets, and nested combinations of them) into the text of a JavaScript
//! literal, escaping everything that could break quoting, encoding, or
//! downstream parsing. It is built for code generation: embedding data into
//! generated scripts, inlining payloads into HTML `<script>` elements, or
//! producing strict JSON from the same value tree.
//!
//! ## Key Features
//!
//! - **Safe by default**: every non-printable or quote-sensitive character
//!   is escaped; output never terminates the surrounding string
//! - **Configurable**: quote style, wrapping, compact vs. indented output,
//!   number bases, lowercase hex, `\u{...}` code point escapes
//! - **Script-context hardening**: neutralizes `</script`, `</style` and
//!   `<!--` so output can sit inside an HTML script element
//! - **JSON mode**: one switch produces strictly interoperable JSON,
//!   substituting `null` for values JSON cannot express
//! - **Serde Compatible**: escape any `#[derive(Serialize)]` type directly
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use jslit::{escape, JsValue};
//!
//! let out = escape(&JsValue::from("Ich ♥ Bücher")).unwrap();
//! assert_eq!(out, "Ich \\u2665 B\\xFCcher");
//! ```
//!
//! ### Quoting and wrapping
//!
//! ```rust
//! use jslit::{escape_with_options, EscapeOptions, JsValue, Quotes};
//!
//! let value = JsValue::from("foo 'bar'");
//! let options = EscapeOptions::new().with_quotes(Quotes::Single).with_wrap(true);
//! assert_eq!(
//!     escape_with_options(&value, options).unwrap(),
//!     "'foo \\'bar\\''"
//! );
//! ```
//!
//! ### Composite values
//!
//! ```rust
//! use jslit::{escape, escape_with_options, EscapeOptions, js};
//!
//! let value = js!({ "ids": [1, 2, 3] });
//! assert_eq!(escape(&value).unwrap(), "{\"ids\":[1,2,3]}");
//!
//! let indented = escape_with_options(&value, EscapeOptions::new().with_compact(false)).unwrap();
//! assert_eq!(indented, "{\n\t\"ids\": [\n\t\t1,\n\t\t2,\n\t\t3\n\t]\n}");
//! ```
//!
//! ### Map and set values
//!
//! Map- and set-like values render in constructor-call notation, which is
//! meaningful to a JavaScript runtime but not to strict data formats:
//!
//! ```rust
//! use jslit::{escape, JsValue};
//!
//! let map = JsValue::Map(vec![(JsValue::from("a"), JsValue::from(1))]);
//! assert_eq!(escape(&map).unwrap(), "new Map([[\"a\",1]])");
//!
//! let set = JsValue::Set(vec![JsValue::from(1), JsValue::from(2)]);
//! assert_eq!(escape(&set).unwrap(), "new Set([1,2])");
//! ```
//!
//! ### Serde types
//!
//! ```rust
//! use jslit::{to_js_string_with_options, EscapeOptions};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct User {
//!     name: String,
//!     admin: bool,
//! }
//!
//! let user = User { name: "Alice".to_string(), admin: true };
//! let out = to_js_string_with_options(&user, EscapeOptions::json()).unwrap();
//! assert_eq!(out, "{\"name\":\"Alice\",\"admin\":true}");
//! ```
//!
//! ## Failure modes
//!
//! Escaping never fails for representable input; the one reportable
//! condition is input nested deeper than
//! [`EscapeOptions::max_depth`](crate::EscapeOptions), which surfaces as
//! [`Error::DepthLimit`] instead of exhausting the call stack. Cyclic
//! structures cannot be built from the owned [`JsValue`] tree.
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`simple.rs`** - Escaping strings and composite values
//! - **`custom_options.rs`** - Quote styles, number bases, indentation
//! - **`script_context.rs`** - Embedding data into an HTML script element
//!
//! Run any of them with: `cargo run --example <name>`

pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

mod encode;
mod escape;

pub use error::{Error, Result};
pub use map::JsMap;
pub use options::{EscapeOptions, NumberBase, Quotes};
pub use ser::JsValueSerializer;
pub use value::{JsValue, Number};

use serde::Serialize;
use std::io;

/// The crate's semantic version string.
///
/// ```rust
/// assert!(!jslit::VERSION.is_empty());
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Escapes a value as a JavaScript literal with default options.
///
/// # Examples
///
/// ```rust
/// use jslit::{escape, JsValue};
///
/// let out = escape(&JsValue::from("foo © bar")).unwrap();
/// assert_eq!(out, "foo \\xA9 bar");
/// ```
///
/// # Errors
///
/// Returns [`Error::DepthLimit`] if the value nests deeper than the
/// default depth limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn escape(value: &JsValue) -> Result<String> {
    escape_with_options(value, EscapeOptions::default())
}

/// Escapes a value as a JavaScript literal with custom options.
///
/// # Examples
///
/// ```rust
/// use jslit::{escape_with_options, EscapeOptions, JsValue, NumberBase};
///
/// let value = JsValue::Array(vec![JsValue::from(0x42), JsValue::from(0x1337)]);
/// let options = EscapeOptions::new().with_numbers(NumberBase::Hexadecimal);
/// assert_eq!(escape_with_options(&value, options).unwrap(), "[0x42,0x1337]");
/// ```
///
/// # Errors
///
/// Returns [`Error::DepthLimit`] if the value nests deeper than
/// `options.max_depth`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn escape_with_options(value: &JsValue, options: EscapeOptions) -> Result<String> {
    encode::encode(value, &options, 0)
}

/// Converts any `T: Serialize` to a [`JsValue`].
///
/// Useful for working with values dynamically when the structure isn't
/// known at compile time.
///
/// # Examples
///
/// ```rust
/// use jslit::{to_value, JsValue};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: JsValue = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented (e.g. a map with
/// non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<JsValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(ser::JsValueSerializer)
}

/// Serializes any `T: Serialize` and escapes it with default options.
///
/// # Examples
///
/// ```rust
/// use jslit::to_js_string;
///
/// let out = to_js_string(&vec![1, 2, 3]).unwrap();
/// assert_eq!(out, "[1,2,3]");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or the depth limit is hit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_js_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_js_string_with_options(value, EscapeOptions::default())
}

/// Serializes any `T: Serialize` and escapes it with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or the depth limit is hit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_js_string_with_options<T>(value: &T, options: EscapeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    escape_with_options(&to_value(value)?, options)
}

/// Escapes any `T: Serialize` into a writer with default options.
///
/// # Examples
///
/// ```rust
/// use jslit::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![1, 2, 3]).unwrap();
/// assert_eq!(buffer, b"[1,2,3]");
/// ```
///
/// # Errors
///
/// Returns an error if escaping fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, EscapeOptions::default())
}

/// Escapes any `T: Serialize` into a writer with custom options.
///
/// # Errors
///
/// Returns an error if escaping fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: EscapeOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_js_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::js;

    #[test]
    fn test_escape_defaults() {
        assert_eq!(escape(&JsValue::from("abc")).unwrap(), "abc");
        assert_eq!(escape(&JsValue::from(42)).unwrap(), "42");
        assert_eq!(escape(&JsValue::Bool(true)).unwrap(), "true");
        assert_eq!(escape(&JsValue::Null).unwrap(), "null");
    }

    #[test]
    fn test_determinism() {
        let value = js!({ "a": [1, "two", 3.5], "b": null });
        let first = escape(&value).unwrap();
        let second = escape(&value).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_to_js_string_matches_escape() {
        let direct = escape(&js!([1, 2, 3])).unwrap();
        let bridged = to_js_string(&vec![1, 2, 3]).unwrap();
        assert_eq!(direct, bridged);
    }

    #[test]
    fn test_to_writer_roundtrip() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &"héllo").unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "h\\xE9llo");
    }

    #[test]
    fn test_version_is_semver() {
        let mut parts = VERSION.split('.');
        assert!(parts.next().unwrap().parse::<u32>().is_ok());
        assert!(parts.next().unwrap().parse::<u32>().is_ok());
    }
}
