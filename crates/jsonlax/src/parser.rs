use std::sync::LazyLock;

use regex::Regex;

use crate::{
    value::{Object, Value},
    ParseError, MAX_NESTING_DEPTH,
};

/// The number grammar: optional negation, an integer part without leading
/// zeros, then optional fraction and exponent parts. Validated against the
/// whole greedily consumed candidate, hence the anchors.
static NUMBER_GRAMMAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?\z").expect("valid regex")
});

/// Drops the maximal leading run of space, tab, and newline characters.
///
/// Carriage return is deliberately not treated as whitespace.
fn skip_whitespace(input: &str) -> &str {
    input.trim_start_matches([' ', '\t', '\n'])
}

/// Parses a quoted string. The caller guarantees `input` starts with `'` or
/// `"`; whichever quote opened the string is the only character that can
/// close it, so a double-quoted string may contain bare single quotes and
/// vice versa.
///
/// A backslash copies the following character into the output verbatim —
/// escape sequences are passed through, not interpreted, so `\n` yields a
/// literal `n`.
fn parse_string(input: &str) -> Result<(String, &str), ParseError> {
    let mut chars = input.char_indices();
    let Some((_, delimiter)) = chars.next() else {
        return Err(ParseError::EmptyInput);
    };
    let mut buffer = String::new();
    while let Some((index, c)) = chars.next() {
        if c == delimiter {
            return Ok((buffer, &input[index + c.len_utf8()..]));
        }
        if c == '\\' {
            match chars.next() {
                Some((_, escaped)) => buffer.push(escaped),
                None => {
                    return Err(ParseError::UnterminatedString {
                        input: input.to_string(),
                    })
                }
            }
        } else {
            buffer.push(c);
        }
    }
    Err(ParseError::UnterminatedString {
        input: input.to_string(),
    })
}

/// Parses a number. The caller guarantees `input` starts with `-` or a digit.
///
/// Greedily consumes the maximal prefix of characters that could belong to a
/// number, then validates that candidate against [`NUMBER_GRAMMAR`] as a
/// whole. Anything after the candidate is left as remainder.
fn parse_number(input: &str) -> Result<(f64, &str), ParseError> {
    let end = input
        .find(|c: char| !matches!(c, '0'..='9' | '.' | 'e' | 'E' | '+' | '-'))
        .unwrap_or(input.len());
    let candidate = &input[..end];
    if !NUMBER_GRAMMAR.is_match(candidate) {
        return Err(ParseError::MalformedNumber {
            input: input.to_string(),
            candidate: candidate.to_string(),
        });
    }
    let number = candidate
        .parse::<f64>()
        .map_err(|_| ParseError::MalformedNumber {
            input: input.to_string(),
            candidate: candidate.to_string(),
        })?;
    Ok((number, &input[end..]))
}

/// Parses an object. The caller guarantees `input` starts with `{` and has
/// already accounted for the nesting depth of this object.
fn parse_object(input: &str, depth: usize) -> Result<(Object, &str), ParseError> {
    let mut entries: Vec<(String, Value)> = Vec::new();
    let mut remaining = &input[1..];
    loop {
        remaining = skip_whitespace(remaining);
        let Some(c) = remaining.chars().next() else {
            return Err(ParseError::UnterminatedObject {
                input: input.to_string(),
            });
        };
        if c == '}' {
            return Ok((Object::from(entries), &remaining[1..]));
        }
        let c = if entries.is_empty() {
            c
        } else if c == ',' {
            remaining = skip_whitespace(&remaining[1..]);
            match remaining.chars().next() {
                Some(c) => c,
                None => {
                    return Err(ParseError::UnterminatedObject {
                        input: input.to_string(),
                    })
                }
            }
        } else {
            return Err(ParseError::MissingCommaInObject {
                input: input.to_string(),
                remaining: remaining.to_string(),
            });
        };
        if c != '"' && c != '\'' {
            return Err(ParseError::MissingKeyString {
                input: input.to_string(),
                remaining: remaining.to_string(),
            });
        }
        let (key, rest) = parse_string(remaining)?;
        remaining = skip_whitespace(rest);
        match remaining.chars().next() {
            Some(':') => {}
            Some(_) => {
                return Err(ParseError::MissingKeyValueSeparator {
                    input: input.to_string(),
                })
            }
            None => {
                return Err(ParseError::UnterminatedObject {
                    input: input.to_string(),
                })
            }
        }
        remaining = skip_whitespace(&remaining[1..]);
        let (value, rest) = parse_value(remaining, depth)?;
        entries.push((key, value));
        remaining = rest;
    }
}

/// Parses an array. The caller guarantees `input` starts with `[` and has
/// already accounted for the nesting depth of this array.
fn parse_array(input: &str, depth: usize) -> Result<(Vec<Value>, &str), ParseError> {
    let mut elements: Vec<Value> = Vec::new();
    let mut remaining = &input[1..];
    loop {
        remaining = skip_whitespace(remaining);
        let Some(c) = remaining.chars().next() else {
            return Err(ParseError::UnterminatedArray {
                input: input.to_string(),
            });
        };
        if c == ']' {
            return Ok((elements, &remaining[1..]));
        }
        if !elements.is_empty() {
            if c == ',' {
                remaining = skip_whitespace(&remaining[1..]);
                if remaining.is_empty() {
                    return Err(ParseError::UnterminatedArray {
                        input: input.to_string(),
                    });
                }
            } else {
                return Err(ParseError::MissingCommaInArray {
                    input: input.to_string(),
                    remaining: remaining.to_string(),
                });
            }
        }
        let (element, rest) = parse_value(remaining, depth)?;
        elements.push(element);
        remaining = rest;
    }
}

/// Dispatches on the first character of `input` and parses one value,
/// returning it together with the unconsumed remainder.
///
/// `depth` counts how many composite values enclose this one; crossing
/// [`MAX_NESTING_DEPTH`] fails instead of recursing further.
pub(crate) fn parse_value(input: &str, depth: usize) -> Result<(Value, &str), ParseError> {
    let Some(first) = input.chars().next() else {
        return Err(ParseError::EmptyInput);
    };
    match first {
        '{' => {
            if depth >= MAX_NESTING_DEPTH {
                return Err(ParseError::NestingTooDeep {
                    input: input.to_string(),
                });
            }
            let (object, remaining) = parse_object(input, depth + 1)?;
            Ok((Value::Object(object), remaining))
        }
        '[' => {
            if depth >= MAX_NESTING_DEPTH {
                return Err(ParseError::NestingTooDeep {
                    input: input.to_string(),
                });
            }
            let (elements, remaining) = parse_array(input, depth + 1)?;
            Ok((Value::Array(elements), remaining))
        }
        '\'' | '"' => {
            let (string, remaining) = parse_string(input)?;
            Ok((Value::String(string), remaining))
        }
        '-' | '0'..='9' => {
            let (number, remaining) = parse_number(input)?;
            Ok((Value::Number(number), remaining))
        }
        _ => {
            if let Some(remaining) = input.strip_prefix("true") {
                Ok((Value::Bool(true), remaining))
            } else if let Some(remaining) = input.strip_prefix("false") {
                Ok((Value::Bool(false), remaining))
            } else {
                Err(ParseError::InvalidBeginCharacter {
                    input: input.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{parse_number, parse_string, parse_value, skip_whitespace};
    use crate::{parse, parse_partial, ParseError, Value, MAX_NESTING_DEPTH};

    #[test_case("  1", "1"; "spaces")]
    #[test_case("\t\n 1", "1"; "tabs and newlines")]
    #[test_case("1  ", "1  "; "only leading whitespace")]
    #[test_case("\r1", "\r1"; "carriage return is not whitespace")]
    #[test_case("", ""; "empty input")]
    fn whitespace_skipping(input: &str, expected: &str) {
        assert_eq!(skip_whitespace(input), expected);
    }

    #[test_case("'abcd'", "abcd", ""; "single-quoted")]
    #[test_case("\"abcd\"", "abcd", ""; "double-quoted")]
    #[test_case("'abcd\"\"'", "abcd\"\"", ""; "double quotes inside single-quoted")]
    #[test_case("\"abcd''''\"", "abcd''''", ""; "single quotes inside double-quoted")]
    #[test_case("'\\\\'", "\\", ""; "escaped backslash")]
    #[test_case("\"\\\"\"", "\"", ""; "escaped delimiter")]
    #[test_case("'\\n'", "n", ""; "escapes pass through uninterpreted")]
    #[test_case("''rest", "", "rest"; "empty string with remainder")]
    #[test_case("'a'}", "a", "}"; "closing brace as remainder")]
    fn string_accepts(input: &str, expected: &str, remaining: &str) {
        assert_eq!(parse_string(input), Ok((expected.to_string(), remaining)));
    }

    #[test_case("'abcd"; "no closing quote")]
    #[test_case("\"abcd'"; "mismatched closing quote")]
    #[test_case("'abcd\\"; "input ends on a backslash")]
    fn string_rejects(input: &str) {
        assert_eq!(
            parse_string(input),
            Err(ParseError::UnterminatedString {
                input: input.to_string(),
            })
        );
    }

    #[test_case("0", 0.0, ""; "zero")]
    #[test_case("1", 1.0, ""; "integer")]
    #[test_case("-1", -1.0, ""; "negative integer")]
    #[test_case("-0", 0.0, ""; "negative zero")]
    #[test_case("1.5", 1.5, ""; "fraction")]
    #[test_case("12.25", 12.25, ""; "multi-digit fraction")]
    #[test_case("1e3", 1000.0, ""; "exponent")]
    #[test_case("1E3", 1000.0, ""; "uppercase exponent")]
    #[test_case("1e+3", 1000.0, ""; "positive exponent sign")]
    #[test_case("2.5e-1", 0.25, ""; "negative exponent sign")]
    #[test_case("1.7E0050", 1.7e50, ""; "zero-padded exponent")]
    #[test_case("1]", 1.0, "]"; "remainder after number")]
    #[test_case("1, 2", 1.0, ", 2"; "comma stops the candidate")]
    fn number_accepts(input: &str, expected: f64, remaining: &str) {
        assert_eq!(parse_number(input), Ok((expected, remaining)));
    }

    #[test_case("1.1.1", "1.1.1"; "multiple dots")]
    #[test_case("--1", "--1"; "multiple negations")]
    #[test_case("-", "-"; "lone negation")]
    #[test_case("01", "01"; "leading zero")]
    #[test_case("1.", "1."; "fraction without digits")]
    #[test_case("1e", "1e"; "exponent without digits")]
    #[test_case("1e+", "1e+"; "signed exponent without digits")]
    #[test_case("1+2", "1+2"; "greedy candidate swallows the plus")]
    #[test_case("1e5-3", "1e5-3"; "greedy candidate swallows the minus")]
    fn number_rejects(input: &str, candidate: &str) {
        assert_eq!(
            parse_number(input),
            Err(ParseError::MalformedNumber {
                input: input.to_string(),
                candidate: candidate.to_string(),
            })
        );
    }

    #[test]
    fn dispatcher_routes_on_first_character() {
        assert_eq!(
            parse_value("true", 0),
            Ok((Value::Bool(true), ""))
        );
        assert_eq!(parse_value("false!", 0), Ok((Value::Bool(false), "!")));
        assert_eq!(parse_value("truex", 0), Ok((Value::Bool(true), "x")));
        assert_eq!(
            parse_value("'x'", 0),
            Ok((Value::String("x".to_string()), ""))
        );
        assert_eq!(parse_value("1]", 0), Ok((Value::Number(1.0), "]")));
    }

    #[test_case("null"; "null is not part of the dialect")]
    #[test_case("tru"; "truncated literal")]
    #[test_case("+1"; "leading plus")]
    #[test_case(".5"; "leading dot")]
    #[test_case(" 1"; "leading whitespace is not skipped by the dispatcher")]
    fn dispatcher_rejects(input: &str) {
        assert_eq!(
            parse_value(input, 0),
            Err(ParseError::InvalidBeginCharacter {
                input: input.to_string(),
            })
        );
    }

    #[test]
    fn dispatcher_rejects_empty_input() {
        assert_eq!(parse_value("", 0), Err(ParseError::EmptyInput));
    }

    #[test_case("[1 1]", "1]"; "missing comma")]
    #[test_case("[1, 2 3]", "3]"; "missing comma after the second element")]
    fn array_missing_comma(input: &str, remaining: &str) {
        assert_eq!(
            parse(input),
            Err(ParseError::MissingCommaInArray {
                input: input.to_string(),
                remaining: remaining.to_string(),
            })
        );
    }

    #[test_case("["; "opening bracket only")]
    #[test_case("[1"; "after the first element")]
    #[test_case("[1,"; "after a comma")]
    #[test_case("[1, 2"; "after an element")]
    fn array_unterminated(input: &str) {
        assert_eq!(
            parse(input),
            Err(ParseError::UnterminatedArray {
                input: input.to_string(),
            })
        );
    }

    #[test_case("{"; "opening brace only")]
    #[test_case("{'a': 1"; "after the first entry")]
    #[test_case("{'a': 1,"; "after a comma")]
    #[test_case("{'a'"; "before the separator")]
    fn object_unterminated(input: &str) {
        assert_eq!(
            parse(input),
            Err(ParseError::UnterminatedObject {
                input: input.to_string(),
            })
        );
    }

    #[test]
    fn object_missing_comma() {
        assert_eq!(
            parse("{'a': 1 'b': 2}"),
            Err(ParseError::MissingCommaInObject {
                input: "{'a': 1 'b': 2}".to_string(),
                remaining: "'b': 2}".to_string(),
            })
        );
    }

    #[test_case("{a: 1}", "a: 1}"; "bare identifier as key")]
    #[test_case("{1: 1}", "1: 1}"; "number as key")]
    #[test_case("{'a': 1, b: 2}", "b: 2}"; "second key unquoted")]
    fn object_missing_key_string(input: &str, remaining: &str) {
        assert_eq!(
            parse(input),
            Err(ParseError::MissingKeyString {
                input: input.to_string(),
                remaining: remaining.to_string(),
            })
        );
    }

    #[test]
    fn object_missing_separator() {
        assert_eq!(
            parse("{'a' 1}"),
            Err(ParseError::MissingKeyValueSeparator {
                input: "{'a' 1}".to_string(),
            })
        );
    }

    #[test]
    fn child_errors_propagate_unchanged() {
        assert_eq!(
            parse("[1.1.1]"),
            Err(ParseError::MalformedNumber {
                input: "1.1.1]".to_string(),
                candidate: "1.1.1".to_string(),
            })
        );
        assert_eq!(
            parse("{'a': 'b}"),
            Err(ParseError::UnterminatedString {
                input: "'b}".to_string(),
            })
        );
    }

    #[test]
    fn nesting_limit_is_enforced() {
        let input = "[".repeat(MAX_NESTING_DEPTH + 1);
        let error = parse(&input).expect_err("nested past the limit");
        assert!(matches!(error, ParseError::NestingTooDeep { .. }));
    }

    #[test]
    fn nesting_below_the_limit_parses() {
        let mut input = "[".repeat(MAX_NESTING_DEPTH);
        input.push_str(&"]".repeat(MAX_NESTING_DEPTH));
        let (value, remaining) = parse_partial(&input).expect("within the limit");
        assert!(matches!(value, Value::Array(_)));
        assert_eq!(remaining, "");
    }
}
