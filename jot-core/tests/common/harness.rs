//! Fixture runner and structural invariant checks

use jot_core::{tokenize, ByteView, ParseError, ParseErrorCode, Token, TokenArena, TokenKind};

use crate::common::{Gen, TestCase};

const DEFAULT_CAPACITY: usize = 64;

/// Outcome of one fixture case, with enough context to debug a failure
pub struct CaseResult {
    pub passed: bool,
    pub input: Vec<u8>,
    pub errors: Vec<String>,
}

impl CaseResult {
    fn new(input: Vec<u8>, errors: Vec<String>) -> Self {
        Self {
            passed: errors.is_empty(),
            input,
            errors,
        }
    }

    pub fn print_failure(&self, label: &str) {
        eprintln!("FAIL {}", label);
        eprintln!("  input: {:?}", String::from_utf8_lossy(&self.input));
        for error in &self.errors {
            eprintln!("  {}", error);
        }
    }
}

/// Parse into a fresh arena and clone the tokens out
pub fn parse(input: &[u8], capacity: usize) -> Result<Vec<Token>, ParseError> {
    let mut arena = TokenArena::with_capacity(capacity);
    tokenize(ByteView::new(input), &mut arena)?;
    Ok(arena.tokens().to_vec())
}

fn kind_name(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Object => "object",
        TokenKind::Array => "array",
        TokenKind::String => "string",
        TokenKind::Primitive => "primitive",
    }
}

fn code_name(code: ParseErrorCode) -> &'static str {
    match code {
        ParseErrorCode::UnmatchedBracket => "unmatched_bracket",
        ParseErrorCode::UnterminatedContainer => "unterminated_container",
        ParseErrorCode::UnterminatedString => "unterminated_string",
        ParseErrorCode::InvalidEscapeSequence => "invalid_escape_sequence",
        ParseErrorCode::InvalidPrimitiveCharacter => "invalid_primitive_character",
        ParseErrorCode::CapacityExceeded => "capacity_exceeded",
    }
}

fn format_token(token: &Token) -> String {
    format!(
        "{} {}..{} size={} parent={}",
        kind_name(token.kind),
        token.start,
        token.end,
        token.size,
        token.parent.map(|p| p.index() as i64).unwrap_or(-1),
    )
}

fn format_token_shape(token: &Token) -> String {
    format!(
        "{} size={} parent={}",
        kind_name(token.kind),
        token.size,
        token.parent.map(|p| p.index() as i64).unwrap_or(-1),
    )
}

fn compare(expected: &[String], actual: &[String], errors: &mut Vec<String>) {
    if expected.len() != actual.len() {
        errors.push(format!(
            "token count mismatch: expected {}, got {}",
            expected.len(),
            actual.len()
        ));
    }
    for (i, (exp, act)) in expected.iter().zip(actual.iter()).enumerate() {
        if exp != act {
            errors.push(format!("token {}: expected `{}`, got `{}`", i, exp, act));
        }
    }
}

/// Run a fixture case exactly as written: spans, sizes, parents, and
/// error offsets must all match.
pub fn run_case(case: &TestCase) -> CaseResult {
    let input = case.json.as_bytes().to_vec();
    let capacity = case.capacity.unwrap_or(DEFAULT_CAPACITY);
    let mut errors = Vec::new();

    match (&case.error, parse(&input, capacity)) {
        (Some(expected), Ok(tokens)) => {
            errors.push(format!(
                "expected {} failure, parsed {} tokens",
                expected,
                tokens.len()
            ));
        }
        (Some(expected), Err(err)) => {
            if code_name(err.code) != expected {
                errors.push(format!(
                    "expected {} failure, got {}",
                    expected,
                    code_name(err.code)
                ));
            }
            if let Some(offset) = case.offset {
                if err.offset != offset {
                    errors.push(format!(
                        "expected failure at byte {}, got byte {}",
                        offset, err.offset
                    ));
                }
            }
        }
        (None, Err(err)) => {
            errors.push(format!("unexpected failure: {}", err));
        }
        (None, Ok(tokens)) => {
            let expected: Vec<String> = case.tokens.iter().map(|t| t.format()).collect();
            let actual: Vec<String> = tokens.iter().map(format_token).collect();
            compare(&expected, &actual, &mut errors);
        }
    }

    CaseResult::new(input, errors)
}

/// Re-run a case with stochastic whitespace between tokens. Spans and
/// error offsets move; kinds, sizes, and parent links must not.
pub fn run_case_with_whitespace(case: &TestCase, gen: &mut Gen) -> CaseResult {
    let input = inject_whitespace(case.json.as_bytes(), gen);
    let capacity = case.capacity.unwrap_or(DEFAULT_CAPACITY);
    let mut errors = Vec::new();

    match (&case.error, parse(&input, capacity)) {
        (Some(expected), Ok(tokens)) => {
            errors.push(format!(
                "expected {} failure, parsed {} tokens",
                expected,
                tokens.len()
            ));
        }
        (Some(expected), Err(err)) => {
            if code_name(err.code) != expected {
                errors.push(format!(
                    "expected {} failure, got {}",
                    expected,
                    code_name(err.code)
                ));
            }
        }
        (None, Err(err)) => {
            errors.push(format!("unexpected failure: {}", err));
        }
        (None, Ok(tokens)) => {
            let expected: Vec<String> = case.tokens.iter().map(|t| t.format_shape()).collect();
            let actual: Vec<String> = tokens.iter().map(format_token_shape).collect();
            compare(&expected, &actual, &mut errors);
        }
    }

    CaseResult::new(input, errors)
}

/// Rewrite a document with extra whitespace after every structural byte.
/// String interiors are left alone.
pub fn inject_whitespace(json: &[u8], gen: &mut Gen) -> Vec<u8> {
    let mut out = gen.whitespace();
    let mut in_string = false;
    let mut escaped = false;

    for &byte in json {
        out.push(byte);
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
                out.extend(gen.whitespace());
            }
        } else if byte == b'"' {
            in_string = true;
        } else if matches!(byte, b'{' | b'}' | b'[' | b']' | b',' | b':') {
            out.extend(gen.whitespace());
        }
    }

    out.extend(gen.whitespace());
    out
}

/// Structural invariants every successful parse must satisfy
pub fn assert_token_invariants(input: &[u8], tokens: &[Token]) {
    for (i, token) in tokens.iter().enumerate() {
        assert!(token.is_closed(), "token {} left open", i);
        assert!(token.end >= token.start, "token {} span reversed", i);
        assert!(
            token.end as usize <= input.len(),
            "token {} spans past the input",
            i
        );

        if let Some(parent) = token.parent {
            assert!(
                parent.index() < i,
                "token {} points forward to parent {}",
                i,
                parent.index()
            );
            let enclosing = &tokens[parent.index()];
            if enclosing.kind.is_container() {
                assert!(
                    token.start > enclosing.start && token.end < enclosing.end,
                    "token {} escapes container {}",
                    i,
                    parent.index()
                );
            }
        }

        let children = tokens
            .iter()
            .filter(|t| t.parent.map(|p| p.index()) == Some(i))
            .count();
        assert_eq!(
            token.size as usize, children,
            "token {} size disagrees with child count",
            i
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inject_whitespace_preserves_structure() {
        let mut gen = Gen::new(3);
        let doc = br#"{"a":[1,"x,y"],"b\"":null}"#;
        let padded = inject_whitespace(doc, &mut gen);

        let original = parse(doc, 16).unwrap();
        let varied = parse(&padded, 16).unwrap();
        assert_eq!(original.len(), varied.len());
        for (a, b) in original.iter().zip(varied.iter()) {
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.size, b.size);
            assert_eq!(
                a.parent.map(|p| p.index()),
                b.parent.map(|p| p.index())
            );
        }
    }
}
