//! Integration tests for the definition lexer

use wayfarer_language::{Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .into_iter()
        .map(|t| t.kind)
        .filter(|k| !k.is_trivia())
        .collect()
}

#[test]
fn whole_location_clause() {
    let tokens = kinds(r#"location cell "Cell" "Damp" item key "A key" 5 n gate # north"#);
    assert_eq!(
        tokens,
        vec![
            TokenKind::Word("location".into()),
            TokenKind::Word("cell".into()),
            TokenKind::String("Cell".into()),
            TokenKind::String("Damp".into()),
            TokenKind::Word("item".into()),
            TokenKind::Word("key".into()),
            TokenKind::String("A key".into()),
            TokenKind::Int(5),
            TokenKind::Word("n".into()),
            TokenKind::Word("gate".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lines_are_tracked_across_comments() {
    let tokens = Lexer::tokenize_all("# heading\n\ngame\n  \"T\"");
    let game = tokens.iter().find(|t| t.is_word("game")).unwrap();
    assert_eq!(game.line(), 3);
    let title = tokens.iter().find(|t| matches!(t.kind, TokenKind::String(_))).unwrap();
    assert_eq!(title.line(), 4);
}

#[test]
fn errors_are_tokens() {
    let tokens = kinds("game @ \"open");
    assert!(matches!(tokens[1], TokenKind::Error(_)));
    assert!(matches!(tokens[2], TokenKind::Error(_)));
    assert_eq!(tokens.last(), Some(&TokenKind::Eof));
}
