use super::lexer::{TokenKind, lex, token_text};

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn simple_name() {
    assert_eq!(kinds("typeA"), vec![TokenKind::Name]);
}

#[test]
fn delimiters() {
    use TokenKind::*;
    assert_eq!(
        kinds("a[b, c]"),
        vec![Name, BracketOpen, Name, Comma, Whitespace, Name, BracketClose]
    );
}

#[test]
fn whitespace_runs_coalesce() {
    use TokenKind::*;
    assert_eq!(kinds(" \t a  "), vec![Whitespace, Name, Whitespace]);
}

#[test]
fn symbols_are_names() {
    let source = "*";
    let tokens = lex(source);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Name);
    assert_eq!(token_text(source, &tokens[0]), "*");
}

#[test]
fn non_ascii_names() {
    let source = "größe[ü]";
    let tokens = lex(source);
    assert_eq!(token_text(source, &tokens[0]), "größe");
    assert_eq!(token_text(source, &tokens[2]), "ü");
}

#[test]
fn spans_cover_input() {
    let source = "map[ key , value ]";
    let tokens = lex(source);
    let rebuilt: String = tokens.iter().map(|t| token_text(source, t)).collect();
    assert_eq!(rebuilt, source);
}

#[test]
fn empty_input() {
    assert!(lex("").is_empty());
}
