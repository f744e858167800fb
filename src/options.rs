//! Configuration options for literal output.
//!
//! This module provides the types that customize how values are escaped:
//!
//! - [`EscapeOptions`]: Main configuration struct
//! - [`Quotes`]: Choice of quote character for wrapped strings (single, double, or backtick)
//! - [`NumberBase`]: Base used to render integer literals
//!
//! ## Examples
//!
//! ```rust
//! use jslit::{escape_with_options, EscapeOptions, JsValue, Quotes};
//!
//! let value = JsValue::from("Lorem ipsum \"dolor\" sit amet");
//!
//! // Single-quoted, wrapped output
//! let options = EscapeOptions::new().with_quotes(Quotes::Single).with_wrap(true);
//! let out = escape_with_options(&value, options).unwrap();
//! assert_eq!(out, "'Lorem ipsum \"dolor\" sit amet'");
//!
//! // Strict JSON output
//! let options = EscapeOptions::json();
//! let out = escape_with_options(&value, options).unwrap();
//! assert_eq!(out, "\"Lorem ipsum \\\"dolor\\\" sit amet\"");
//! ```

/// Quote character used when wrapping string output.
///
/// The active quote is the only quote character that gets backslash-escaped
/// inside string content; the other two pass through unescaped.
///
/// # Examples
///
/// ```rust
/// use jslit::Quotes;
///
/// assert_eq!(Quotes::Single.as_char(), '\'');
/// assert_eq!(Quotes::Double.as_char(), '"');
/// assert_eq!(Quotes::Backtick.as_char(), '`');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Quotes {
    Single,
    #[default]
    Double,
    Backtick,
}

impl Quotes {
    /// Returns the quote character itself.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Quotes::Single => '\'',
            Quotes::Double => '"',
            Quotes::Backtick => '`',
        }
    }
}

/// Base used to render integer literals.
///
/// Non-decimal bases produce prefixed literals (`0x2A`, `0b101010`, `0o52`).
/// The base applies to integral values only; floats and the special numeric
/// values always render in their decimal/display form. Ignored entirely in
/// JSON mode, which is restricted to decimal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NumberBase {
    Binary,
    Octal,
    #[default]
    Decimal,
    Hexadecimal,
}

/// Configuration for a single escape call.
///
/// Options are copied, never shared, when recursion into composite values
/// adjusts indentation or wrapping; a callee never mutates its caller's copy.
///
/// # Examples
///
/// ```rust
/// use jslit::{EscapeOptions, NumberBase};
///
/// // Defaults: double quotes, no wrapping, compact, decimal numbers
/// let options = EscapeOptions::new();
///
/// // Indented output with two-space indentation
/// let options = EscapeOptions::new().with_compact(false).with_indent("  ");
///
/// // Hexadecimal integers, lowercase hex digits
/// let options = EscapeOptions::new()
///     .with_numbers(NumberBase::Hexadecimal)
///     .with_lowercase_hex(true);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EscapeOptions {
    /// Escape every character that is not produced by an escape sequence,
    /// bypassing the printable-ASCII whitelist.
    pub escape_everything: bool,
    /// Only emit mandatory escapes; everything except U+2028/U+2029 and the
    /// short named escapes passes through as-is.
    pub minimal: bool,
    /// Neutralize `</script`, `</style` and `<!--` in the output so it can
    /// be embedded inside an HTML `<script>` element.
    pub is_script_context: bool,
    /// The active quote character; see [`Quotes`].
    pub quotes: Quotes,
    /// Surround string output with the active quote character.
    /// `None` defers to the mode: `true` in JSON mode, `false` otherwise.
    pub wrap: Option<bool>,
    /// Combine surrogate pairs into a single `\u{...}` escape instead of
    /// two `\uXXXX` escapes.
    pub es6: bool,
    /// Emit strictly JSON-compatible output. Forces wrapping and decimal
    /// numbers, long-form `\uXXXX` escapes, and `null` for values without
    /// a JSON representation.
    pub json: bool,
    /// Single-line output for composite values.
    pub compact: bool,
    /// Lowercase the digits of hexadecimal escapes and literals.
    pub lowercase_hex: bool,
    /// Base for integer literals; see [`NumberBase`].
    pub numbers: NumberBase,
    /// Indentation unit used when `compact` is off.
    pub indent: String,
    /// Starting indentation depth.
    pub indent_level: usize,
    /// Maximum nesting depth before the encoder reports
    /// [`Error::DepthLimit`](crate::Error::DepthLimit).
    pub max_depth: usize,
    // Internal recursion flags for map-entry formatting. `map_entries`
    // marks an array as a map's entry list; `inline` renders an array on a
    // single line. Set on the child's copy only, never on the caller's.
    pub(crate) map_entries: bool,
    pub(crate) inline: bool,
}

impl Default for EscapeOptions {
    fn default() -> Self {
        EscapeOptions {
            escape_everything: false,
            minimal: false,
            is_script_context: false,
            quotes: Quotes::default(),
            wrap: None,
            es6: false,
            json: false,
            compact: true,
            lowercase_hex: false,
            numbers: NumberBase::default(),
            indent: "\t".to_string(),
            indent_level: 0,
            max_depth: 128,
            map_entries: false,
            inline: false,
        }
    }
}

impl EscapeOptions {
    /// Creates the default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jslit::EscapeOptions;
    ///
    /// let options = EscapeOptions::new();
    /// assert!(options.compact);
    /// assert_eq!(options.indent, "\t");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for strict JSON-compatible output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jslit::EscapeOptions;
    ///
    /// let options = EscapeOptions::json();
    /// assert!(options.json);
    /// ```
    #[must_use]
    pub fn json() -> Self {
        EscapeOptions {
            json: true,
            ..Default::default()
        }
    }

    /// Escapes all characters, including printable ASCII.
    #[must_use]
    pub fn with_escape_everything(mut self, escape_everything: bool) -> Self {
        self.escape_everything = escape_everything;
        self
    }

    /// Restricts escaping to the mandatory minimum.
    #[must_use]
    pub fn with_minimal(mut self, minimal: bool) -> Self {
        self.minimal = minimal;
        self
    }

    /// Enables neutralization of HTML breakout sequences.
    #[must_use]
    pub fn with_script_context(mut self, is_script_context: bool) -> Self {
        self.is_script_context = is_script_context;
        self
    }

    /// Sets the active quote character.
    #[must_use]
    pub fn with_quotes(mut self, quotes: Quotes) -> Self {
        self.quotes = quotes;
        self
    }

    /// Explicitly enables or disables quote wrapping, overriding the
    /// mode-dependent default.
    #[must_use]
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = Some(wrap);
        self
    }

    /// Combines surrogate pairs into `\u{...}` escapes.
    #[must_use]
    pub fn with_es6(mut self, es6: bool) -> Self {
        self.es6 = es6;
        self
    }

    /// Enables or disables JSON-compatible output.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Toggles single-line rendering of composite values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jslit::{escape_with_options, EscapeOptions, JsValue};
    ///
    /// let value = JsValue::Array(vec!["a".into(), "b".into()]);
    /// let options = EscapeOptions::new().with_compact(false);
    /// let out = escape_with_options(&value, options).unwrap();
    /// assert_eq!(out, "[\n\t\"a\",\n\t\"b\"\n]");
    /// ```
    #[must_use]
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Lowercases hexadecimal digits in escapes and literals.
    #[must_use]
    pub fn with_lowercase_hex(mut self, lowercase_hex: bool) -> Self {
        self.lowercase_hex = lowercase_hex;
        self
    }

    /// Sets the base for integer literals.
    #[must_use]
    pub fn with_numbers(mut self, numbers: NumberBase) -> Self {
        self.numbers = numbers;
        self
    }

    /// Sets the indentation unit (default is one tab).
    #[must_use]
    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    /// Sets the starting indentation depth.
    #[must_use]
    pub fn with_indent_level(mut self, indent_level: usize) -> Self {
        self.indent_level = indent_level;
        self
    }

    /// Sets the maximum nesting depth (default 128).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The effective wrapping behavior: an explicit `wrap` wins, otherwise
    /// JSON mode wraps and every other mode does not.
    #[inline]
    #[must_use]
    pub fn should_wrap(&self) -> bool {
        self.wrap.unwrap_or(self.json)
    }

    pub(crate) fn current_indent(&self) -> String {
        self.indent.repeat(self.indent_level)
    }
}
