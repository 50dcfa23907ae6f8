//! Indentation tokenizer tests

use crate::frontend::lexer::{
    dump, tokenize, IndentTokenizer, ReplaySource, Token, TokenKind,
};
use crate::util::span::Position;

fn structural_depths(tokens: &[Token]) -> Vec<i32> {
    let mut depth = 0;
    let mut depths = Vec::new();
    for token in tokens {
        match token.kind {
            TokenKind::Indent => depth += 1,
            TokenKind::Dedent => depth -= 1,
            _ => continue,
        }
        depths.push(depth);
    }
    depths
}

#[test]
fn test_flat_program_has_no_structural_tokens() {
    let tokens = tokenize("a = 1\nb = 2");
    assert_eq!(dump(&tokens), "ID(a) ASS NUMBER(1) LF ID(b) ASS NUMBER(2)");
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn test_if_block_then_dedent() {
    let tokens = tokenize("if 42:\n    print(\"x\")\nprint()");
    assert_eq!(
        dump(&tokens),
        "IF NUMBER(42) COLON LF INDENT ID(print) LPAREN STRING(x) RPAREN LF \
         DEDENT ID(print) LPAREN RPAREN"
    );
}

#[test]
fn test_structural_tokens_have_empty_lexeme() {
    let tokens = tokenize("if 1:\n    x = 1\n");
    for token in tokens.iter().filter(|t| t.kind.is_structural()) {
        assert!(token.text.is_empty());
    }
}

#[test]
fn test_depths_up_and_down() {
    let source = "a\nif 1:\n    b\n    if 2:\n        c\n    d\ne\n";
    let tokens = tokenize(source);
    assert_eq!(structural_depths(&tokens), vec![1, 2, 1, 0]);
    assert_eq!(
        dump(&tokens),
        "ID(a) LF IF NUMBER(1) COLON LF INDENT ID(b) LF IF NUMBER(2) COLON LF \
         INDENT ID(c) LF DEDENT ID(d) LF DEDENT ID(e) LF"
    );
}

#[test]
fn test_dedent_precedes_triggering_token() {
    let tokens = tokenize("if 1:\n    if 2:\n        x\ny");
    let tail: Vec<_> = tokens.iter().rev().take(4).map(|t| t.kind).collect();
    assert_eq!(
        tail,
        vec![
            TokenKind::Eof,
            TokenKind::Identifier,
            TokenKind::Dedent,
            TokenKind::Dedent,
        ]
    );
}

#[test]
fn test_eof_drains_open_blocks_after_line_break() {
    let tokens = tokenize("while 1:\n    while 2:\n        x\n");
    let n = tokens.len();
    assert_eq!(tokens[n - 3].kind, TokenKind::Dedent);
    assert_eq!(tokens[n - 2].kind, TokenKind::Dedent);
    assert_eq!(tokens[n - 1].kind, TokenKind::Eof);
}

#[test]
fn test_eof_drains_open_blocks_without_line_break() {
    let tokens = tokenize("if 1:\n    x = 2");
    assert_eq!(structural_depths(&tokens), vec![1, 0]);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn test_width_not_multiple_of_four_truncates() {
    // 6 columns is one level, 3 columns is level zero
    let tokens = tokenize("if 1:\n      x\n   y\n");
    assert_eq!(structural_depths(&tokens), vec![1, 0]);
    assert_eq!(
        dump(&tokens),
        "IF NUMBER(1) COLON LF INDENT ID(x) LF DEDENT ID(y) LF"
    );
}

#[test]
fn test_jump_of_several_levels() {
    let tokens = tokenize("a\n            b\n    c\n");
    assert_eq!(structural_depths(&tokens), vec![1, 2, 3, 2, 1, 0]);
}

#[test]
fn test_same_level_marker_is_discarded() {
    let tokens = tokenize("if 1:\n    a\n    b\n");
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Leading));
    assert_eq!(structural_depths(&tokens), vec![1, 0]);
}

#[test]
fn test_blank_lines_inside_block_do_not_dedent() {
    let tokens = tokenize("if 1:\n    a\n\n    b\n");
    assert_eq!(
        dump(&tokens),
        "IF NUMBER(1) COLON LF INDENT ID(a) LF LF ID(b) LF DEDENT"
    );
}

#[test]
fn test_indented_first_line_opens_a_block() {
    let tokens = tokenize("    x\n");
    assert_eq!(dump(&tokens), "INDENT ID(x) LF DEDENT");
}

#[test]
fn test_dedent_location_is_triggering_token() {
    let tokens = tokenize("if 1:\n    a\nb");
    let dedent = tokens.iter().find(|t| t.kind == TokenKind::Dedent).unwrap();
    assert_eq!(dedent.location, Position::with_offset(3, 1, 12));
}

#[test]
fn test_eof_repeats_after_end() {
    let mut lexer = crate::frontend::lexer::lexer("if 1:\n    a");
    let mut last = lexer.next_token();
    while last.kind != TokenKind::Eof {
        last = lexer.next_token();
    }
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.level(), 0);
}

#[test]
fn test_iterator_stops_after_eof() {
    let count = crate::frontend::lexer::lexer("a\nb").count();
    assert_eq!(count, 4);
}

#[test]
fn test_replay_source_drives_tokenizer() {
    let at = Position::new(1, 1);
    let raw = vec![
        Token::new(TokenKind::Identifier, "a", at),
        Token::new(TokenKind::LineBreak, "\n", at),
        Token::new(TokenKind::Leading, "8", Position::new(2, 1)),
        Token::new(TokenKind::Identifier, "b", Position::new(2, 9)),
    ];
    let tokens: Vec<Token> = IndentTokenizer::new(ReplaySource::new(raw)).collect();
    assert_eq!(dump(&tokens), "ID(a) LF INDENT INDENT ID(b) DEDENT DEDENT");
    assert_eq!(tokens.last().unwrap().location, Position::new(2, 9));
}

#[test]
fn test_same_level_marker_before_end_of_input_drains() {
    let at = Position::new(1, 1);
    let raw = vec![
        Token::new(TokenKind::Identifier, "a", at),
        Token::new(TokenKind::LineBreak, "\n", at),
        Token::new(TokenKind::Leading, "4", Position::new(2, 1)),
        Token::new(TokenKind::Identifier, "b", Position::new(2, 5)),
        Token::new(TokenKind::LineBreak, "\n", Position::new(2, 6)),
        Token::new(TokenKind::Leading, "4", Position::new(3, 1)),
    ];
    let tokens: Vec<Token> = IndentTokenizer::new(ReplaySource::new(raw)).collect();
    assert_eq!(dump(&tokens), "ID(a) LF INDENT ID(b) LF DEDENT");
    assert_eq!(structural_depths(&tokens), vec![1, 0]);
    assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_same_level_marker_keeps_following_token() {
    let at = Position::new(1, 1);
    let raw = vec![
        Token::new(TokenKind::Leading, "4", at),
        Token::new(TokenKind::Identifier, "a", Position::new(1, 5)),
        Token::new(TokenKind::LineBreak, "\n", Position::new(1, 6)),
        Token::new(TokenKind::Leading, "4", Position::new(2, 1)),
        Token::new(TokenKind::Identifier, "b", Position::new(2, 5)),
        Token::new(TokenKind::LineBreak, "\n", Position::new(2, 6)),
    ];
    let tokens: Vec<Token> = IndentTokenizer::new(ReplaySource::new(raw)).collect();
    assert_eq!(dump(&tokens), "INDENT ID(a) LF ID(b) LF DEDENT");
}

#[test]
fn test_marker_not_after_line_break_passes_through() {
    let at = Position::new(1, 1);
    let raw = vec![
        Token::new(TokenKind::Identifier, "a", at),
        Token::new(TokenKind::Leading, "4", at),
    ];
    let tokens: Vec<Token> = IndentTokenizer::new(ReplaySource::new(raw)).collect();
    assert_eq!(dump(&tokens), "ID(a) LEADING(4)");
}
