use super::{ParseError, TypeExpr, parse_type};

fn ok(source: &str) -> TypeExpr {
    parse_type(source).unwrap_or_else(|e| panic!("expected `{source}` to parse, got {e}"))
}

fn err(source: &str) -> ParseError {
    match parse_type(source) {
        Ok(expr) => panic!("expected `{source}` to fail, got {expr}"),
        Err(e) => e,
    }
}

#[test]
fn plain_name() {
    assert_eq!(ok("typeA"), TypeExpr::new("typeA"));
}

#[test]
fn single_param() {
    assert_eq!(
        ok("typeA[typeB]"),
        TypeExpr::new("typeA").param(TypeExpr::new("typeB"))
    );
}

#[test]
fn nested_params() {
    let expected = TypeExpr::new("typeB")
        .param(TypeExpr::new("typeC"))
        .param(TypeExpr::new("typeD").param(TypeExpr::new("typeE")));
    assert_eq!(ok("typeB[typeC, typeD[typeE]]"), expected);
}

#[test]
fn whitespace_is_insignificant_around_delimiters() {
    assert_eq!(ok("  map [ key ,value ]  "), ok("map[key, value]"));
}

#[test]
fn whitespace_ends_a_name() {
    assert_eq!(
        err("typeB typeC"),
        ParseError::ExtraCharacters {
            offset: 6,
            rest: "typeC".into()
        }
    );
}

#[test]
fn whitespace_inside_param_name() {
    assert_eq!(
        err("a[b c]"),
        ParseError::ExtraCharacters {
            offset: 4,
            rest: "c]".into()
        }
    );
    assert_eq!(
        err("list[ big  int ]"),
        ParseError::ExtraCharacters {
            offset: 11,
            rest: "int ]".into()
        }
    );
}

#[test]
fn symbols_and_digits() {
    assert_eq!(ok("*").name, "*");
    assert_eq!(ok("list[1]").params[0].name, "1");
}

#[test]
fn deep_nesting() {
    let depth = 2_000;
    let source = format!("{}x{}", "a[".repeat(depth), "]".repeat(depth));
    let mut expr = &ok(&source);
    let mut seen = 0;
    while let Some(inner) = expr.params.first() {
        expr = inner;
        seen += 1;
    }
    assert_eq!(seen, depth);
    assert_eq!(expr.name, "x");
}

#[test]
fn deterministic() {
    let source = "typeB[typeC, typeD[typeE]]";
    assert_eq!(parse_type(source), parse_type(source));
    assert_eq!(parse_type("typeB["), parse_type("typeB["));
}

#[test]
fn empty_input() {
    assert_eq!(err(""), ParseError::MissingTypeName { offset: 0 });
    assert_eq!(err("   "), ParseError::MissingTypeName { offset: 3 });
}

#[test]
fn leading_bracket() {
    assert_eq!(err("[a]"), ParseError::MissingTypeName { offset: 0 });
}

#[test]
fn empty_params() {
    assert_eq!(err("a[]"), ParseError::MissingTypeName { offset: 2 });
}

#[test]
fn empty_between_comma_and_bracket() {
    assert_eq!(err("a[b,]"), ParseError::MissingTypeName { offset: 4 });
    assert_eq!(err("a[b, ]"), ParseError::MissingTypeName { offset: 5 });
}

#[test]
fn empty_between_commas() {
    assert_eq!(err("a[b,,c]"), ParseError::MissingTypeName { offset: 4 });
}

#[test]
fn unclosed_bracket() {
    assert_eq!(err("typeB["), ParseError::LeftBracket { offset: 5 });
    assert_eq!(err("a[b"), ParseError::LeftBracket { offset: 1 });
    assert_eq!(err("a[b,"), ParseError::LeftBracket { offset: 1 });
}

#[test]
fn unclosed_reports_innermost_bracket() {
    assert_eq!(err("a[b[c"), ParseError::LeftBracket { offset: 3 });
    assert_eq!(err("a[b[c]"), ParseError::LeftBracket { offset: 1 });
}

#[test]
fn unmatched_right_bracket() {
    assert_eq!(err("a]"), ParseError::RightBracket { offset: 1 });
    assert_eq!(err("a[b]]"), ParseError::RightBracket { offset: 4 });
    assert_eq!(err("]"), ParseError::RightBracket { offset: 0 });
}

#[test]
fn comma_outside_brackets() {
    assert_eq!(
        err("a, b"),
        ParseError::ExtraCharacters {
            offset: 1,
            rest: ", b".into()
        }
    );
}

#[test]
fn trailing_name_after_params() {
    assert_eq!(
        err("a[b]c"),
        ParseError::ExtraCharacters {
            offset: 4,
            rest: "c".into()
        }
    );
}

#[test]
fn second_param_list() {
    assert_eq!(
        err("a[b][c]"),
        ParseError::ExtraCharacters {
            offset: 4,
            rest: "[c]".into()
        }
    );
    assert_eq!(
        err("x[a[b][c]]"),
        ParseError::ExtraCharacters {
            offset: 6,
            rest: "[c]]".into()
        }
    );
}

#[test]
fn error_display() {
    insta::assert_snapshot!(err("typeB[").to_string(), @"unmatched left bracket at offset 5");
    insta::assert_snapshot!(err("a]").to_string(), @"unmatched right bracket at offset 1");
    insta::assert_snapshot!(err("a[]").to_string(), @"missing type name at offset 2");
    insta::assert_snapshot!(err("a b[c] d").to_string(), @"extra characters at offset 2: 'b[c] d'");
}

#[test]
fn error_ranges() {
    let e = err("a[b]cd");
    assert_eq!(e.range(), rowan::TextRange::new(4.into(), 6.into()));

    let e = err("typeB[");
    assert_eq!(e.range(), rowan::TextRange::empty(5.into()));
}

#[test]
fn error_serializes_with_kind_tag() {
    let json = serde_json::to_string(&err("typeB[")).unwrap();
    assert_eq!(json, r#"{"kind":"left_bracket","offset":5}"#);
}
