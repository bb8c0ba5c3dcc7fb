#[cfg(test)]
/// Parser unit tests.
///
/// These tests focus on correctness of specific syntactic forms, on operator grouping, and on the parser’s
/// error recovery behavior (later statements still parse, no cascaded errors).
mod tests {
    use super::*;

    fn parse_str(source: &str) -> ParseOutput {
        parse_source(source)
    }

    fn parse_ok(source: &str) -> Program {
        let output = parse_str(source);
        assert!(output.errors.is_empty(), "unexpected errors for {source:?}: {:?}", output.errors);
        output.program
    }

    fn messages(source: &str) -> Vec<String> {
        parse_str(source).errors.into_iter().map(|e| e.message).collect()
    }

    /// Render the expression of a single `{{ ... }}` statement in fully parenthesised form.
    fn grouped(expr_source: &str) -> String {
        let program = parse_ok(&format!("{{{{ {expr_source} }}}}"));
        match &program.statements[0].node {
            Statement::Output(expr) => expr.node.to_string(),
            other => panic!("expected output statement, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_set() {
        let program = parse_ok("{% set x = 5 %}");
        assert_eq!(program.statements.len(), 1);
        match &program.statements[0].node {
            Statement::Set(set) => {
                assert_eq!(set.name.node, "x");
                assert_eq!(set.value.node, Expr::Int(5));
            }
            other => panic!("expected set, got {other:?}"),
        }
    }

    #[test]
    fn test_operator_grouping() {
        assert_eq!(grouped("a + b * c"), "(a + (b * c))");
        assert_eq!(grouped("a * b + c"), "((a * b) + c)");
        assert_eq!(grouped("a - b - c"), "((a - b) - c)");
        assert_eq!(grouped("a + b == c < d"), "((a + b) == (c < d))");
        assert_eq!(grouped("-a * b"), "((-a) * b)");
        assert_eq!(grouped("!x == y"), "((!x) == y)");
        assert_eq!(grouped("(a + b) * c"), "((a + b) * c)");
    }

    #[test]
    fn test_attribute_chain_then_filter() {
        assert_eq!(grouped("a.b.c | f"), "(a.b.c | f)");
        assert_eq!(grouped("x | f | g"), "((x | f) | g)");
        assert_eq!(grouped("a + b | f"), "(a + (b | f))");

        let program = parse_ok("{{ a.b.c | f }}");
        let Statement::Output(expr) = &program.statements[0].node else {
            panic!("expected output statement");
        };
        let Expr::Filter(input, filter) = &expr.node else {
            panic!("expected filter, got {:?}", expr.node);
        };
        assert_eq!(filter, "f");
        assert!(matches!(&input.node, Expr::Attribute(object, attr) if attr == "c"
            && matches!(&object.node, Expr::Attribute(_, b) if b == "b")));
    }

    #[test]
    fn test_prefix_binds_tighter_than_attribute() {
        assert_eq!(grouped("-a.b"), "(-a).b");
    }

    #[test]
    fn test_literals() {
        assert_eq!(grouped("'hi'"), "\"hi\"");
        assert_eq!(grouped("true"), "true");
        assert_eq!(grouped("false"), "false");
        assert_eq!(grouped("null"), "null");
        assert_eq!(grouped("42"), "42");
    }

    #[test]
    fn test_parse_if_elif_else() {
        let program = parse_ok("{% if a %}1{% elif b %}2{% elif c %}3{% else %}4{% endif %}");
        assert_eq!(program.statements.len(), 1);
        let Statement::If(stmt) = &program.statements[0].node else {
            panic!("expected if");
        };
        assert_eq!(stmt.condition.node, Expr::Ident("a".into()));
        assert_eq!(stmt.consequence.statements.len(), 1);
        assert_eq!(stmt.elseifs.len(), 2);
        assert_eq!(stmt.elseifs[1].condition.node, Expr::Ident("c".into()));
        assert_eq!(stmt.alternative.as_ref().map(|b| b.statements.len()), Some(1));
    }

    #[test]
    fn test_tags_after_endif_are_not_absorbed() {
        let program = parse_ok("{% if a %}x{% endif %}{% set y = 1 %}{% if b %}{% endif %}");
        assert_eq!(program.statements.len(), 3);
        let Statement::If(first) = &program.statements[0].node else {
            panic!("expected if");
        };
        assert!(first.elseifs.is_empty());
        assert!(first.alternative.is_none());
        assert!(matches!(program.statements[1].node, Statement::Set(_)));
        assert!(matches!(program.statements[2].node, Statement::If(_)));
    }

    #[test]
    fn test_parse_for_with_nested_if() {
        let program = parse_ok("{% for item in items %}{% if item.ok %}{{ item }}{% endif %}{% endfor %}");
        let Statement::For(stmt) = &program.statements[0].node else {
            panic!("expected for");
        };
        assert_eq!(stmt.iterator.node, "item");
        assert_eq!(stmt.sequence.node, Expr::Ident("items".into()));
        assert_eq!(stmt.body.statements.len(), 1);
        assert!(matches!(stmt.body.statements[0].node, Statement::If(_)));
    }

    #[test]
    fn test_parse_named_and_anonymous_blocks() {
        let program = parse_ok("{% block header %}{{ title }}{% endblock %}{% block %}{% endblock %}");
        let Statement::Block(named) = &program.statements[0].node else {
            panic!("expected block");
        };
        assert_eq!(named.name.as_ref().map(|n| n.node.as_str()), Some("header"));
        assert_eq!(named.body.statements.len(), 1);
        let Statement::Block(anonymous) = &program.statements[1].node else {
            panic!("expected block");
        };
        assert!(anonymous.name.is_none());
        assert!(anonymous.body.is_empty());
    }

    #[test]
    fn test_bare_text_becomes_expression_statements() {
        let program = parse_ok("Hello {{ name }} world");
        assert_eq!(program.statements.len(), 3);
        assert!(matches!(&program.statements[0].node, Statement::Expr(e) if e.node == Expr::Ident("Hello".into())));
        assert!(matches!(program.statements[1].node, Statement::Output(_)));
        assert!(matches!(program.statements[2].node, Statement::Expr(_)));
    }

    #[test]
    fn test_spans_point_at_originating_tokens() {
        let program = parse_ok("{% set x = 1 %}\n  {{ y }}");
        assert_eq!(program.statements[0].span, Span::new(1, 1));
        let Statement::Set(set) = &program.statements[0].node else {
            panic!("expected set");
        };
        assert_eq!(set.name.span, Span::new(1, 8));
        let Statement::Output(expr) = &program.statements[1].node else {
            panic!("expected output");
        };
        assert_eq!(program.statements[1].span, Span::new(2, 3));
        assert_eq!(expr.span, Span::new(2, 6));
    }

    // ------------------------------------------------------------------------
    // Errors and recovery
    // ------------------------------------------------------------------------

    #[test]
    fn test_set_errors_are_distinct() {
        assert_eq!(messages("{% set = 1 %}"), vec!["expected next token to be IDENT, got = instead"]);
        assert_eq!(messages("{% set x 1 %}"), vec!["expected next token to be =, got INT instead"]);
        assert_eq!(messages("{% set x = %}"), vec!["no prefix parse function for %} found"]);
        assert_eq!(messages("{% set x = 1"), vec!["expected next token to be %}, got EOF instead"]);
    }

    #[test]
    fn test_integer_overflow() {
        assert_eq!(
            messages("{{ 99999999999999999999 }}"),
            vec!["could not parse \"99999999999999999999\" as integer"]
        );
    }

    #[test]
    fn test_illegal_token_has_no_prefix_parse() {
        let output = parse_str("{{ a , b }}");
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].message, "expected next token to be }}, got ILLEGAL instead");
        assert_eq!((output.errors[0].line, output.errors[0].column), (1, 6));
    }

    #[test]
    fn test_stray_terminator_tag() {
        assert_eq!(messages("{% endfor %}"), vec!["unexpected 'endfor' tag with no open block"]);
        assert_eq!(messages("{% else %}"), vec!["unexpected 'else' tag with no open block"]);
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            messages("{% include x %}"),
            vec!["unknown tag: expected a statement keyword, got IDENT instead"]
        );
    }

    #[test]
    fn test_mismatched_end_tag() {
        assert_eq!(
            messages("{% if true %}{% endfor %}"),
            vec!["expected next token to be endif, got endfor instead"]
        );
    }

    #[test]
    fn test_missing_end_tag_reports_eof() {
        let output = parse_str("{% for x in xs %}{{ x }}");
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].message, "expected next token to be {%, got EOF instead");
        assert!(output.program.statements.is_empty());
    }

    #[test]
    fn test_recovery_continues_with_next_statement() {
        let output = parse_str("{% set = 1 %}{{ ok }}{% set y = 2 %}");
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.program.statements.len(), 2);
        assert!(matches!(output.program.statements[0].node, Statement::Output(_)));
        assert!(matches!(output.program.statements[1].node, Statement::Set(_)));
    }

    #[test]
    fn test_recovery_inside_block_body_keeps_siblings() {
        let output = parse_str("{% if a %}{{ }}{{ b }}{% set = %}{{ c }}{% endif %}");
        assert_eq!(output.errors.len(), 2, "{:?}", output.errors);
        let Statement::If(stmt) = &output.program.statements[0].node else {
            panic!("expected if");
        };
        assert_eq!(stmt.consequence.statements.len(), 2);
    }

    #[test]
    fn test_stray_close_delimiter_does_not_cascade() {
        let output = parse_str("}} {{ a }}");
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].message, "no prefix parse function for }} found");
        assert_eq!(output.program.statements.len(), 1);
    }

    #[test]
    fn test_empty_and_garbage_inputs_terminate() {
        assert!(parse_ok("").statements.is_empty());
        for source in ["{%", "{{", "%}", "{% if", "((((", "{% for %}", "\u{0}\u{1}{", "{{ a. }}", "{{ a | 1 }}"] {
            let output = parse_str(source);
            assert!(!output.errors.is_empty(), "expected errors for {source:?}");
        }
    }

    #[test]
    fn test_parse_without_trailing_eof_token() {
        let mut tokens = lexer::lex("{{ a }}");
        tokens.pop();
        let output = parse(&tokens);
        assert!(output.is_ok());
        assert_eq!(output.program.statements.len(), 1);
        assert!(parse(&[]).into_result().is_ok_and(|p| p.statements.is_empty()));
    }
}
