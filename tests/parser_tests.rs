use kartuli::lexer;
use kartuli::parser::ast::{BinaryOp, Expr, Stmt};
use kartuli::parser::{ParseError, Parser};
use kartuli::symbols::{Symbol, SymbolError};

fn parse(source: &str) -> Vec<Stmt> {
    let tokens = lexer::lex(source).expect("lex should succeed");
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program().expect("parse should succeed");
    program.statements
}

fn parse_err(source: &str) -> ParseError {
    let tokens = lexer::lex(source).expect("lex should succeed");
    let mut parser = Parser::new(tokens);
    parser
        .parse_program()
        .expect_err("parse should fail")
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

#[test]
fn parses_declaration() {
    let statements = parse("აი ა = 5;");
    assert_eq!(
        statements,
        vec![Stmt::Declaration {
            name: "ა".to_string(),
            value: Expr::Number(5),
        }]
    );
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let statements = parse("აი ა = 2 + 3 * 4;");
    match &statements[0] {
        Stmt::Declaration { value, .. } => {
            let expected = binary(
                BinaryOp::Add,
                Expr::Number(2),
                binary(BinaryOp::Multiply, Expr::Number(3), Expr::Number(4)),
            );
            assert_eq!(value, &expected);
        }
        _ => panic!("expected declaration"),
    }
}

#[test]
fn parentheses_override_precedence() {
    let statements = parse("აი ა = (2 + 3) * 4;");
    match &statements[0] {
        Stmt::Declaration { value, .. } => {
            let expected = binary(
                BinaryOp::Multiply,
                binary(BinaryOp::Add, Expr::Number(2), Expr::Number(3)),
                Expr::Number(4),
            );
            assert_eq!(value, &expected);
        }
        _ => panic!("expected declaration"),
    }
}

#[test]
fn subtraction_is_left_associative() {
    let statements = parse("აი ა = 10 - 4 - 3;");
    match &statements[0] {
        Stmt::Declaration { value, .. } => {
            let expected = binary(
                BinaryOp::Subtract,
                binary(BinaryOp::Subtract, Expr::Number(10), Expr::Number(4)),
                Expr::Number(3),
            );
            assert_eq!(value, &expected);
        }
        _ => panic!("expected declaration"),
    }
}

#[test]
fn parses_if_else_branches() {
    let statements = parse(
        "აი ა = 1; თუ (ა >= 10) { ა = 2; } თუარა { ა = 3; }",
    );
    match &statements[1] {
        Stmt::If {
            condition,
            true_branch,
            false_branch,
        } => {
            assert!(matches!(
                condition,
                Expr::Binary {
                    op: BinaryOp::GreaterEqual,
                    ..
                }
            ));
            assert_eq!(true_branch.len(), 1);
            assert_eq!(false_branch.len(), 1);
        }
        _ => panic!("expected if statement"),
    }
}

#[test]
fn if_without_else_has_empty_false_branch() {
    let statements = parse("აი ა = 1; თუ (ა < 2) { ა = 5; }");
    match &statements[1] {
        Stmt::If { false_branch, .. } => assert!(false_branch.is_empty()),
        _ => panic!("expected if statement"),
    }
}

#[test]
fn condition_does_not_chain_comparisons() {
    let err = parse_err("თუ (1 < 2 < 3) { }");
    match err {
        ParseError::Syntax { expected, found, .. } => {
            assert!(expected.contains(")"));
            assert_eq!(found, "'<'");
        }
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn parses_print_statement() {
    let statements = parse("აი ა = 1; დაბეჭდე(ა + 2);");
    match &statements[1] {
        Stmt::Print { expr } => {
            assert!(matches!(expr, Expr::Binary { op: BinaryOp::Add, .. }));
        }
        _ => panic!("expected print statement"),
    }
}

#[test]
fn parses_function_declaration() {
    let statements = parse("ფუნქცია ჯამი(ა, ბ) { დაბეჭდე(ა + ბ); }");
    match &statements[0] {
        Stmt::Function { name, params, body } => {
            assert_eq!(name, "ჯამი");
            assert_eq!(params, &vec!["ა".to_string(), "ბ".to_string()]);
            assert_eq!(body.len(), 1);
        }
        _ => panic!("expected function declaration"),
    }
}

#[test]
fn function_and_parameters_share_flat_namespace() {
    let tokens = lexer::lex("ფუნქცია ჯამი(ა, ბ) { დაბეჭდე(ა + ბ); }")
        .expect("lex should succeed");
    let mut parser = Parser::new(tokens);
    parser.parse_program().expect("parse should succeed");

    let symbols = parser.symbols();
    assert!(matches!(
        symbols.lookup("ჯამი"),
        Ok(Symbol::Function { params }) if params.len() == 2
    ));
    assert!(matches!(symbols.lookup("ა"), Ok(Symbol::Parameter)));
    assert!(matches!(symbols.lookup("ბ"), Ok(Symbol::Parameter)));
}

#[test]
fn declaration_records_symbol() {
    let tokens = lexer::lex("აი ა = 5;").expect("lex should succeed");
    let mut parser = Parser::new(tokens);
    parser.parse_program().expect("parse should succeed");
    assert!(parser.symbols().contains("ა"));
}

#[test]
fn assignment_updates_recorded_value() {
    let tokens = lexer::lex("აი ა = 1; ა = 2;").expect("lex should succeed");
    let mut parser = Parser::new(tokens);
    parser.parse_program().expect("parse should succeed");
    assert_eq!(
        parser.symbols().lookup("ა"),
        Ok(&Symbol::Variable(Expr::Number(2)))
    );
}

#[test]
fn rejects_duplicate_declaration() {
    let err = parse_err("აი ა = 1; აი ა = 2;");
    match err {
        ParseError::Semantic { source, .. } => {
            assert_eq!(
                source,
                SymbolError::DuplicateDeclaration {
                    name: "ა".to_string()
                }
            );
        }
        other => panic!("expected semantic error, got {:?}", other),
    }
}

#[test]
fn rejects_assignment_to_undeclared_name() {
    let err = parse_err("ა = 1;");
    match err {
        ParseError::Semantic { source, .. } => {
            assert_eq!(
                source,
                SymbolError::UndeclaredSymbol {
                    name: "ა".to_string()
                }
            );
        }
        other => panic!("expected semantic error, got {:?}", other),
    }
}

#[test]
fn rejects_reference_before_declaration() {
    let err = parse_err("აი ა = ბ + 1;");
    assert!(matches!(
        err,
        ParseError::Semantic {
            source: SymbolError::UndeclaredSymbol { .. },
            ..
        }
    ));
}

#[test]
fn strict_mode_reports_expected_and_found() {
    let err = parse_err("აი ა 5;");
    match err {
        ParseError::Syntax {
            expected,
            found,
            line,
            column,
        } => {
            assert!(expected.contains("'='"));
            assert_eq!(found, "'5'");
            assert_eq!(line, 1);
            assert_eq!(column, 6);
        }
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn missing_closing_brace_is_an_error_not_a_stall() {
    let err = parse_err("თუ (1 < 2) { აი ა = 1;");
    match err {
        ParseError::Syntax { found, .. } => assert_eq!(found, "end of input"),
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn unrecognized_statement_becomes_unknown_and_consumes_one_token() {
    let statements = parse("5 ;");
    assert_eq!(statements.len(), 2);
    assert!(matches!(&statements[0], Stmt::Unknown(token) if token.lexeme == "5"));
    assert!(matches!(&statements[1], Stmt::Unknown(token) if token.lexeme == ";"));
}

#[test]
fn stray_else_keyword_becomes_unknown() {
    let statements = parse("თუარა");
    assert!(matches!(&statements[0], Stmt::Unknown(token) if token.lexeme == "თუარა"));
}

#[test]
fn statement_loop_terminates_on_junk_input() {
    // Every iteration consumes at least one token, so the statement count
    // is bounded by the token count.
    let source = ", , , , , , , ,";
    let token_count = lexer::lex(source).expect("lex should succeed").len();
    let statements = parse(source);
    assert_eq!(statements.len(), token_count);
}
