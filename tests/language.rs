use std::{cell::RefCell, io::Write, rc::Rc};

use gsc::{
    error::{ProgramError, RuntimeError},
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Token, scan},
        parser::core::parse_program,
        value::Value,
    },
    run,
};

/// A clonable in-memory sink for capturing print output.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("program output is UTF-8")
    }
}

fn run_program(source: &str) -> (String, Result<(), ProgramError>) {
    let buffer = SharedBuffer::default();
    let mut interpreter = Interpreter::with_output(Box::new(buffer.clone()));
    let result = run(source, &mut interpreter);
    (buffer.contents(), result)
}

fn assert_prints(source: &str, expected: &[&str]) {
    let (output, result) = run_program(source);
    if let Err(e) = result {
        panic!("Script failed:\n{source}\nError: {e}");
    }
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, expected, "output mismatch for:\n{source}");
}

fn assert_runtime_error(source: &str) -> RuntimeError {
    match run_program(source).1 {
        Err(ProgramError::Runtime(error)) => error,
        Err(other) => panic!("Expected a runtime error, got: {other}"),
        Ok(()) => panic!("Script succeeded but was expected to fail:\n{source}"),
    }
}

fn assert_parse_error_count(source: &str, expected: usize) {
    match run_program(source).1 {
        Err(ProgramError::Invalid { parse, .. }) => {
            assert_eq!(parse.len(), expected, "parse errors for:\n{source}\n{parse:?}");
        },
        Err(other) => panic!("Expected parse errors, got: {other}"),
        Ok(()) => panic!("Script parsed but was expected to fail:\n{source}"),
    }
}

#[test]
fn literals_and_arithmetic() {
    assert_prints("print 1 + 1;", &["2"]);
    assert_prints("print 10 - 4 + 1;", &["7"]);
    assert_prints("print 3 * 4 / 2;", &["6"]);
    assert_prints("print 2.5 + 0.25;", &["2.75"]);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_prints("print 1 + 2 * 3;", &["7"]);
    assert_prints("print (1 + 2) * 3;", &["9"]);
}

#[test]
fn subtraction_is_left_associative() {
    assert_prints("print 8 - 4 - 2;", &["2"]);
    assert_prints("print 16 / 4 / 2;", &["2"]);
}

#[test]
fn unary_operators() {
    assert_prints("print -3;", &["-3"]);
    assert_prints("print --3;", &["3"]);
    assert_prints("print !true;", &["false"]);
    assert_prints("print !nil;", &["true"]);
    assert_prints("print -(1 + 2);", &["-3"]);
}

#[test]
fn string_concatenation() {
    assert_prints(r#"print "a" + "b";"#, &["ab"]);
    assert_prints(r#"print "" + "x" + "";"#, &["x"]);
}

#[test]
fn display_conversion() {
    assert_prints("print 2.0;", &["2"]);
    assert_prints("print 0.5;", &["0.5"]);
    assert_prints("print true; print false;", &["true", "false"]);
    assert_prints("print nil;", &["nil"]);
    assert_prints(r#"print "quoted";"#, &["quoted"]);
}

#[test]
fn comparisons_and_equality() {
    assert_prints("print 1 < 2;", &["true"]);
    assert_prints("print 2 <= 2;", &["true"]);
    assert_prints("print 1 > 2;", &["false"]);
    assert_prints("print 2 >= 3;", &["false"]);
    assert_prints("print 1 == 1;", &["true"]);
    assert_prints("print 1 != 1;", &["false"]);
    assert_prints(r#"print "a" == "a";"#, &["true"]);
    assert_prints("print nil == nil;", &["true"]);
}

#[test]
fn equality_never_coerces_types() {
    assert_prints(r#"print 1 == "1";"#, &["false"]);
    assert_prints("print nil == false;", &["false"]);
    assert_prints(r#"print "" == false;"#, &["false"]);
}

#[test]
fn truthiness_of_zero_and_empty_string() {
    assert_prints(r#"if (0) print "zero is truthy";"#, &["zero is truthy"]);
    assert_prints(r#"if ("") print "empty is truthy";"#, &["empty is truthy"]);
    assert_prints(r#"if (nil) print "unreachable"; else print "nil is falsy";"#,
                  &["nil is falsy"]);
}

#[test]
fn logical_operators_return_operands() {
    assert_prints("print 1 and 2;", &["2"]);
    assert_prints("print nil and 2;", &["nil"]);
    assert_prints("print 1 or 2;", &["1"]);
    assert_prints("print false or 2;", &["2"]);
}

#[test]
fn short_circuit_skips_the_right_operand() {
    // The right operands would raise type and undefined-variable errors if
    // they were ever evaluated.
    assert_prints(r#"print false and ("a" - 1);"#, &["false"]);
    assert_prints("print true or missing;", &["true"]);
}

#[test]
fn division_by_zero_follows_ieee_semantics() {
    assert_prints("print 1 / 0;", &["inf"]);
    assert_prints("print -1 / 0;", &["-inf"]);
    assert_prints("print 0 / 0;", &["NaN"]);
}

#[test]
fn var_without_initializer_is_nil() {
    assert_prints("var x; print x;", &["nil"]);
}

#[test]
fn redeclaration_in_the_same_scope_overwrites() {
    assert_prints("var x = 1; var x = 2; print x;", &["2"]);
}

#[test]
fn assignment_is_an_expression() {
    assert_prints("var x = 1; print x = 2; print x;", &["2", "2"]);
    assert_prints("var a; var b; a = b = 3; print a; print b;", &["3", "3"]);
}

#[test]
fn inner_declaration_shadows_without_mutating() {
    assert_prints("var x = 1; { var x = 2; print x; } print x;", &["2", "1"]);
}

#[test]
fn assignment_crosses_block_boundaries() {
    assert_prints("var x = 1; { x = 2; } print x;", &["2"]);
}

#[test]
fn nested_blocks_resolve_to_nearest_binding() {
    assert_prints("var x = 1; { var x = 2; { print x; x = 3; } print x; } print x;",
                  &["2", "3", "1"]);
}

#[test]
fn if_and_dangling_else() {
    assert_prints("if (1 < 2) print 1; else print 2;", &["1"]);
    assert_prints("if (1 > 2) print 1; else print 2;", &["2"]);
    assert_prints("if (1 > 2) print 1;", &[]);
    // The else binds to the nearest preceding if.
    assert_prints("if (true) if (false) print 1; else print 2;", &["2"]);
}

#[test]
fn while_loop_counts_up_and_terminates() {
    assert_prints("var i = 0; while (i < 3) { print i; i = i + 1; }",
                  &["0", "1", "2"]);
}

#[test]
fn while_with_falsy_condition_never_runs() {
    assert_prints(r#"while (false) print "unreachable"; print "done";"#, &["done"]);
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_prints("// a comment\nprint 1; // trailing\n\nprint 2;", &["1", "2"]);
}

#[test]
fn undefined_variable_read_is_a_runtime_error() {
    let error = assert_runtime_error("print y;");
    assert!(matches!(error, RuntimeError::UndefinedVariable { ref name, line: 1 } if name == "y"),
            "unexpected error: {error:?}");
}

#[test]
fn undefined_variable_assignment_is_a_runtime_error() {
    let error = assert_runtime_error("var x = 1;\ny = 2;");
    assert!(matches!(error, RuntimeError::UndefinedVariable { ref name, line: 2 } if name == "y"),
            "unexpected error: {error:?}");
}

#[test]
fn numeric_operators_reject_mixed_operands() {
    let error = assert_runtime_error(r#"print "a" - 1;"#);
    assert!(matches!(error, RuntimeError::OperandsMustBeNumbers { .. }),
            "unexpected error: {error:?}");

    let error = assert_runtime_error(r#"print "a" < "b";"#);
    assert!(matches!(error, RuntimeError::OperandsMustBeNumbers { .. }),
            "unexpected error: {error:?}");
}

#[test]
fn addition_requires_two_numbers_or_two_strings() {
    let error = assert_runtime_error(r#"print "a" + 1;"#);
    assert!(matches!(error, RuntimeError::InvalidAdditionOperands { .. }),
            "unexpected error: {error:?}");
}

#[test]
fn unary_minus_requires_a_number() {
    let error = assert_runtime_error(r#"print -"a";"#);
    assert!(matches!(error, RuntimeError::OperandMustBeNumber { .. }),
            "unexpected error: {error:?}");
}

#[test]
fn runtime_error_aborts_remaining_statements() {
    let (output, result) = run_program("print 1; print missing; print 2;");
    assert!(matches!(result, Err(ProgramError::Runtime(_))));
    assert_eq!(output.lines().collect::<Vec<_>>(), ["1"]);
}

#[test]
fn scopes_unwind_when_an_error_escapes_a_block() {
    let buffer = SharedBuffer::default();
    let mut interpreter = Interpreter::with_output(Box::new(buffer.clone()));

    let result = run("var x = 1; { var x = 2; { missing; } }", &mut interpreter);

    assert!(matches!(result, Err(ProgramError::Runtime(_))));
    assert_eq!(interpreter.environment.depth(), 1);
    assert_eq!(interpreter.environment.get("x", 1).unwrap(), Value::Number(1.0));
}

#[test]
fn an_error_inside_a_loop_body_stops_the_loop() {
    let (output, result) = run_program("var i = 0; while (i < 5) { print i; i = i + missing; }");
    assert!(matches!(result, Err(ProgramError::Runtime(_))));
    assert_eq!(output.lines().collect::<Vec<_>>(), ["0"]);
}

#[test]
fn two_independent_syntax_errors_are_both_reported() {
    assert_parse_error_count("print ;\nprint 1;\nvar = 3;", 2);
}

#[test]
fn invalid_assignment_target_is_a_parse_error() {
    assert_parse_error_count("1 = 2;", 1);
    assert_parse_error_count("(a) = 2;", 1);
}

#[test]
fn nothing_executes_when_the_source_has_parse_errors() {
    let (output, result) = run_program("print 1;\nprint ;\n");
    assert!(matches!(result, Err(ProgramError::Invalid { .. })));
    assert_eq!(output, "");
}

#[test]
fn lexical_errors_are_batched_and_scanning_continues() {
    let (tokens, errors) = scan("var x @ = 1;\n~\n");
    assert_eq!(errors.len(), 2);

    // The bad characters are dropped, everything else still tokenizes.
    assert!(tokens.contains(&(Token::Var, 1)));
    assert!(tokens.contains(&(Token::Number(1.0), 1)));
    assert_eq!(tokens.last().unwrap().0, Token::Eof);
}

#[test]
fn unterminated_string_is_a_lexical_error() {
    let (_, errors) = scan("var greeting = \"hello");
    assert_eq!(errors.len(), 1);

    let (_, result) = run_program("print \"unclosed;");
    assert!(matches!(result, Err(ProgramError::Invalid { ref lex, .. }) if lex.len() == 1));
}

#[test]
fn line_numbers_survive_the_pipeline() {
    let error = assert_runtime_error("var x = 1;\nvar y = 2;\nprint missing;");
    assert_eq!(error.line_number(), 3);
}

#[test]
fn parsing_is_deterministic() {
    let (tokens, errors) = scan("var x = 1 + 2 * 3; while (x > 0) { x = x - 1; print x; }");
    assert!(errors.is_empty());

    let (first, first_errors) = parse_program(&mut tokens.iter().peekable());
    let (second, second_errors) = parse_program(&mut tokens.iter().peekable());

    assert!(first_errors.is_empty() && second_errors.is_empty());
    assert_eq!(first, second);
}

#[test]
fn syntax_trees_render_as_prefix_form() {
    let (tokens, _) = scan("-123 * (45.67);");
    let (statements, errors) = parse_program(&mut tokens.iter().peekable());

    assert!(errors.is_empty());
    assert_eq!(statements[0].to_string(), "(expr (* (- 123) (group 45.67)))");
}

#[test]
fn globals_persist_across_runs_of_one_interpreter() {
    let buffer = SharedBuffer::default();
    let mut interpreter = Interpreter::with_output(Box::new(buffer.clone()));

    run("var counter = 1;", &mut interpreter).unwrap();
    run("counter = counter + 1;", &mut interpreter).unwrap();
    run("print counter;", &mut interpreter).unwrap();

    assert_eq!(buffer.contents(), "2\n");
}

#[test]
fn hosts_can_preseed_global_bindings() {
    let buffer = SharedBuffer::default();
    let mut interpreter = Interpreter::with_output(Box::new(buffer.clone()));
    interpreter.environment.declare_global("answer", Value::Number(42.0));

    run("print answer;", &mut interpreter).unwrap();

    assert_eq!(buffer.contents(), "42\n");
}
