//! Recursive structural encoder.
//!
//! Dispatches on [`JsValue`] kind, recurses into children with a copied
//! options snapshot, and assembles the literal text. Character-level
//! decisions are delegated to [`crate::escape`]; this module owns
//! indentation, compactness, quoting, and the constructor-call notation
//! for map/set/date values.
//!
//! Recursing into a composite always hands children a fresh copy of the
//! options with `wrap` forced on and the indent level bumped; a child never
//! mutates its parent's copy. The `map_entries`/`inline` flags implement
//! the one formatting special case: a map's entry list renders its
//! two-element pairs on single lines inside the `new Map([...])` call
//! instead of double-indenting them.

use chrono::SecondsFormat;
use num_bigint::{BigInt, Sign};

use crate::escape::{decide, neutralize_script_breakouts, write_escaped};
use crate::options::{EscapeOptions, NumberBase, Quotes};
use crate::value::{JsValue, Number};
use crate::{Error, JsMap, Result};

pub(crate) fn encode(value: &JsValue, opts: &EscapeOptions, depth: usize) -> Result<String> {
    if depth > opts.max_depth {
        return Err(Error::DepthLimit {
            limit: opts.max_depth,
        });
    }
    if let JsValue::WithJson { value, json } = value {
        let chosen = if opts.json { json } else { value };
        return encode(chosen, opts, depth);
    }
    match value {
        JsValue::String(s) => Ok(encode_string(s, opts)),
        JsValue::Array(items) => encode_array(items, opts, depth),
        JsValue::Object(map) => encode_object(map, opts, depth),
        JsValue::Map(entries) => encode_map(entries, opts, depth),
        JsValue::Set(items) => encode_set(items, opts, depth),
        JsValue::Number(n) => Ok(encode_number(n, opts)),
        JsValue::BigInt(i) => Ok(encode_bigint(i, opts)),
        JsValue::Date(dt) => Ok(encode_date(dt, opts)),
        JsValue::Bool(b) => Ok(b.to_string()),
        JsValue::Null => Ok("null".to_string()),
        JsValue::Undefined => Ok(if opts.json { "null" } else { "undefined" }.to_string()),
        JsValue::Unsupported(text) => Ok(if opts.json {
            "null".to_string()
        } else {
            text.clone()
        }),
        JsValue::WithJson { .. } => unreachable!("unwrapped before dispatch"),
    }
}

pub(crate) fn encode_string(s: &str, opts: &EscapeOptions) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        let rep = decide(ch, chars.peek().copied(), opts);
        write_escaped(rep, opts, &mut out);
    }
    let mut result = if opts.should_wrap() {
        let quote = opts.quotes.as_char();
        let mut wrapped = String::with_capacity(out.len() + 2);
        wrapped.push(quote);
        wrapped.push_str(&out);
        wrapped.push(quote);
        wrapped
    } else {
        out
    };
    if opts.quotes == Quotes::Backtick {
        // A raw `${` inside a template literal would start a substitution.
        result = result.replace("${", "\\${");
    }
    if opts.is_script_context {
        result = neutralize_script_breakouts(&result, opts.json);
    }
    result
}

fn encode_array(items: &[JsValue], opts: &EscapeOptions, depth: usize) -> Result<String> {
    if items.is_empty() {
        return Ok("[]".to_string());
    }
    let inline = opts.inline;
    let mut child = opts.clone();
    child.wrap = Some(true);
    child.map_entries = false;
    child.inline = opts.map_entries;
    if !inline {
        child.indent_level += 1;
    }
    let mut rendered = Vec::with_capacity(items.len());
    for item in items {
        rendered.push(encode(item, &child, depth + 1)?);
    }
    if inline {
        return Ok(format!("[{}]", rendered.join(", ")));
    }
    if opts.compact {
        return Ok(format!("[{}]", rendered.join(",")));
    }
    let pad = child.current_indent();
    let mut out = String::from("[\n");
    for (i, item) in rendered.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        out.push_str(&pad);
        out.push_str(item);
    }
    out.push('\n');
    out.push_str(&opts.current_indent());
    out.push(']');
    Ok(out)
}

fn encode_object(map: &JsMap, opts: &EscapeOptions, depth: usize) -> Result<String> {
    if map.is_empty() {
        return Ok("{}".to_string());
    }
    let mut child = opts.clone();
    child.wrap = Some(true);
    child.indent_level += 1;
    let pad = child.current_indent();
    let mut rendered = Vec::with_capacity(map.len());
    for (key, value) in map.iter() {
        let mut entry = String::new();
        if !opts.compact {
            entry.push_str(&pad);
        }
        entry.push_str(&encode_string(key, &child));
        entry.push(':');
        if !opts.compact {
            entry.push(' ');
        }
        entry.push_str(&encode(value, &child, depth + 1)?);
        rendered.push(entry);
    }
    if opts.compact {
        Ok(format!("{{{}}}", rendered.join(",")))
    } else {
        Ok(format!(
            "{{\n{}\n{}}}",
            rendered.join(",\n"),
            opts.current_indent()
        ))
    }
}

fn encode_map(entries: &[(JsValue, JsValue)], opts: &EscapeOptions, depth: usize) -> Result<String> {
    if entries.is_empty() {
        return Ok("new Map()".to_string());
    }
    let pairs: Vec<JsValue> = entries
        .iter()
        .map(|(k, v)| JsValue::Array(vec![k.clone(), v.clone()]))
        .collect();
    let mut inner = opts.clone();
    if !opts.compact {
        inner.map_entries = true;
        inner.inline = false;
    }
    Ok(format!("new Map({})", encode_array(&pairs, &inner, depth)?))
}

fn encode_set(items: &[JsValue], opts: &EscapeOptions, depth: usize) -> Result<String> {
    if items.is_empty() {
        return Ok("new Set()".to_string());
    }
    Ok(format!("new Set({})", encode_array(items, opts, depth)?))
}

fn encode_number(n: &Number, opts: &EscapeOptions) -> String {
    if opts.json {
        // Strict JSON: decimal only, `null` for values without a JSON form.
        return match n {
            Number::Integer(i) => i.to_string(),
            Number::Float(f) if f.is_finite() => n.to_string(),
            _ => "null".to_string(),
        };
    }
    match n {
        Number::Integer(i) => encode_integer(*i, opts),
        _ => n.to_string(),
    }
}

fn encode_integer(i: i64, opts: &EscapeOptions) -> String {
    let magnitude = i.unsigned_abs();
    let sign = if i < 0 { "-" } else { "" };
    match opts.numbers {
        NumberBase::Decimal => i.to_string(),
        NumberBase::Hexadecimal => {
            if opts.lowercase_hex {
                format!("{}0x{:x}", sign, magnitude)
            } else {
                format!("{}0x{:X}", sign, magnitude)
            }
        }
        NumberBase::Binary => format!("{}0b{:b}", sign, magnitude),
        NumberBase::Octal => format!("{}0o{:o}", sign, magnitude),
    }
}

fn encode_bigint(i: &BigInt, opts: &EscapeOptions) -> String {
    if opts.json {
        // BigInt has no JSON representation.
        return "null".to_string();
    }
    let sign = if i.sign() == Sign::Minus { "-" } else { "" };
    match opts.numbers {
        NumberBase::Decimal => format!("{}n", i),
        NumberBase::Hexadecimal => {
            let digits = i.magnitude().to_str_radix(16);
            if opts.lowercase_hex {
                format!("{}0x{}n", sign, digits)
            } else {
                format!("{}0x{}n", sign, digits.to_uppercase())
            }
        }
        NumberBase::Binary => format!("{}0b{}n", sign, i.magnitude().to_str_radix(2)),
        NumberBase::Octal => format!("{}0o{}n", sign, i.magnitude().to_str_radix(8)),
    }
}

fn encode_date(dt: &chrono::DateTime<chrono::Utc>, opts: &EscapeOptions) -> String {
    let stamp = dt.to_rfc3339_opts(SecondsFormat::Millis, true);
    if opts.json {
        format!("\"{}\"", stamp)
    } else {
        format!("new Date(\"{}\")", stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(value: &JsValue, opts: EscapeOptions) -> String {
        encode(value, &opts, 0).unwrap()
    }

    #[test]
    fn test_depth_limit_reported() {
        let mut value = JsValue::Array(vec![]);
        for _ in 0..10 {
            value = JsValue::Array(vec![value]);
        }
        let opts = EscapeOptions::new().with_max_depth(4);
        match encode(&value, &opts, 0) {
            Err(Error::DepthLimit { limit }) => assert_eq!(limit, 4),
            other => panic!("expected depth limit error, got {:?}", other),
        }
    }

    #[test]
    fn test_integer_bases() {
        let v = JsValue::from(0x42);
        assert_eq!(enc(&v, EscapeOptions::new()), "66");
        assert_eq!(
            enc(&v, EscapeOptions::new().with_numbers(NumberBase::Hexadecimal)),
            "0x42"
        );
        assert_eq!(
            enc(&v, EscapeOptions::new().with_numbers(NumberBase::Binary)),
            "0b1000010"
        );
        assert_eq!(
            enc(&v, EscapeOptions::new().with_numbers(NumberBase::Octal)),
            "0o102"
        );
    }

    #[test]
    fn test_negative_integer_base_prefix() {
        let v = JsValue::from(-0x42);
        assert_eq!(
            enc(&v, EscapeOptions::new().with_numbers(NumberBase::Hexadecimal)),
            "-0x42"
        );
        assert_eq!(
            enc(&v, EscapeOptions::new().with_numbers(NumberBase::Binary)),
            "-0b1000010"
        );
    }

    #[test]
    fn test_float_ignores_base() {
        let v = JsValue::from(3.5);
        assert_eq!(
            enc(&v, EscapeOptions::new().with_numbers(NumberBase::Hexadecimal)),
            "3.5"
        );
    }

    #[test]
    fn test_specials_in_and_out_of_json() {
        assert_eq!(enc(&JsValue::Number(Number::NaN), EscapeOptions::new()), "NaN");
        assert_eq!(
            enc(&JsValue::Number(Number::Infinity), EscapeOptions::new()),
            "Infinity"
        );
        assert_eq!(enc(&JsValue::Number(Number::NaN), EscapeOptions::json()), "null");
        assert_eq!(
            enc(&JsValue::Number(Number::Infinity), EscapeOptions::json()),
            "null"
        );
    }

    #[test]
    fn test_bigint_literals() {
        let v = JsValue::BigInt(BigInt::from(255));
        assert_eq!(enc(&v, EscapeOptions::new()), "255n");
        assert_eq!(
            enc(&v, EscapeOptions::new().with_numbers(NumberBase::Hexadecimal)),
            "0xFFn"
        );
        assert_eq!(
            enc(
                &v,
                EscapeOptions::new()
                    .with_numbers(NumberBase::Hexadecimal)
                    .with_lowercase_hex(true)
            ),
            "0xffn"
        );
        assert_eq!(
            enc(&JsValue::BigInt(BigInt::from(-255)), EscapeOptions::new().with_numbers(NumberBase::Hexadecimal)),
            "-0xFFn"
        );
        assert_eq!(enc(&v, EscapeOptions::json()), "null");
    }

    #[test]
    fn test_date_constructor_notation() {
        use chrono::TimeZone;
        let dt = chrono::Utc.with_ymd_and_hms(2001, 9, 9, 1, 46, 40).unwrap();
        let v = JsValue::Date(dt);
        assert_eq!(
            enc(&v, EscapeOptions::new()),
            "new Date(\"2001-09-09T01:46:40.000Z\")"
        );
        assert_eq!(enc(&v, EscapeOptions::json()), "\"2001-09-09T01:46:40.000Z\"");
    }

    #[test]
    fn test_undefined_and_unsupported() {
        assert_eq!(enc(&JsValue::Undefined, EscapeOptions::new()), "undefined");
        assert_eq!(enc(&JsValue::Undefined, EscapeOptions::json()), "null");
        let v = JsValue::Unsupported("function zomg() { return 'desu'; }".to_string());
        assert_eq!(
            enc(&v, EscapeOptions::new()),
            "function zomg() { return 'desu'; }"
        );
        assert_eq!(enc(&v, EscapeOptions::json()), "null");
    }
}
