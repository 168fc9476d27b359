use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use exprcalc::{
    Options, calculate,
    error::{Error, LexError, ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            core::Environment,
            function::{BUILTIN_FUNCTIONS, builtin},
        },
        value::Value,
    },
    parse,
};

fn simplified(src: &str) -> String {
    parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
              .simplify()
              .unwrap_or_else(|e| panic!("Failed to simplify {src:?}: {e}"))
              .to_string()
}

fn eval_in(env: &mut Environment, src: &str) -> Result<Value, RuntimeError> {
    parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
              .evaluate(env)
}

fn evaluate(src: &str) -> f64 {
    let mut env = Environment::new();
    match eval_in(&mut env, src) {
        Ok(Value::Number(n)) => n,
        other => panic!("Expression {src:?} did not evaluate to a number: {other:?}"),
    }
}

fn assert_runtime_failure(src: &str, expected: &RuntimeError) {
    let mut env = Environment::new();
    match eval_in(&mut env, src) {
        Err(e) => assert_eq!(&e, expected, "wrong error for {src:?}"),
        Ok(v) => panic!("Expression {src:?} evaluated to {v} but was expected to fail"),
    }
}

fn assert_parse_failure(src: &str, expected: &ParseError) {
    match parse(src) {
        Err(e) => assert_eq!(&e, expected, "wrong error for {src:?}"),
        Ok(expr) => panic!("Parsed {src:?} as {expr} but was expected to fail"),
    }
}

#[test]
fn constant_folding() {
    assert_eq!(simplified("2+3*4"), "14");
    assert_eq!(simplified("(2+3)*4"), "20");
    assert_eq!(simplified("7 / 2"), "3.5");
    assert_eq!(simplified("2 ** 10"), "1024");
    assert_eq!(simplified("-(3)"), "-3");
    assert_eq!(simplified("0.1 + 0.2 == 0.3"), "1");
    assert_eq!(simplified("3 > 2"), "1");
    assert_eq!(simplified("2 >= 3"), "0");
    assert_eq!(simplified("1 > 1 - 0.000000000001"), "1");
    assert_eq!(simplified("1 == 1 - 0.000000000001"), "1");
}

#[test]
fn like_terms_merge() {
    assert_eq!(simplified("x+x"), "(2 * x)");
    assert_eq!(simplified("3*x + x*4"), "(7 * x)");
    assert_eq!(simplified("5*x - 2*x"), "(3 * x)");
    assert_eq!(simplified("x - x"), "0");
    assert_eq!(simplified("2*x - x"), "x");
    assert_eq!(simplified("x + y"), "(x + y)");
}

#[test]
fn like_powers_merge() {
    assert_eq!(simplified("d*d^2"), "(d ^ 3)");
    assert_eq!(simplified("x*x"), "(x ^ 2)");
    assert_eq!(simplified("x**2 * x**3"), "(x ^ 5)");
    assert_eq!(simplified("x * y^2"), "(x * (y ^ 2))");
}

#[test]
fn constant_factors_accumulate() {
    assert_eq!(simplified("x*7*8"), "(56 * x)");
    assert_eq!(simplified("2*(3*y)"), "(6 * y)");
    assert_eq!(simplified("x * 1"), "x");
    assert_eq!(simplified("0 * x"), "0");
    assert_eq!(simplified("x * -1"), "-x");
}

#[test]
fn identities() {
    assert_eq!(simplified("x + 0"), "x");
    assert_eq!(simplified("0 + x"), "x");
    assert_eq!(simplified("x - 0"), "x");
    assert_eq!(simplified("0 - x"), "-x");
    assert_eq!(simplified("x / 1"), "x");
    assert_eq!(simplified("0 / x"), "(0 / x)");
    assert_eq!(simplified("x ^ 0"), "1");
    assert_eq!(simplified("x ^ 1"), "x");
    assert_eq!(simplified("0 ^ x"), "0");
    assert_eq!(simplified("x % 1"), "0");
    assert_eq!(simplified("0 % x"), "0");
}

#[test]
fn double_negations_cancel() {
    assert_eq!(simplified("-(-x)"), "x");
    assert_eq!(simplified("--x"), "x");
    assert_eq!(simplified("!!x"), "x");
    assert_eq!(simplified("!-x"), "!-x");
}

#[test]
fn calls_and_assignments_only_simplify_their_children() {
    assert_eq!(simplified("sin(x + x)"), "sin((2 * x))");
    assert_eq!(simplified("x = 2 + 3"), "x = 5");
    assert_eq!(simplified("foo(1 + 1, y)"), "foo(2, y)");
}

#[test]
fn conditionals_fold_on_constant_conditions() {
    assert_eq!(simplified("1 ? 10 : 20"), "10");
    assert_eq!(simplified("0 ? 10 : 20"), "20");
    assert_eq!(simplified("1 ? x : 1/0"), "x");
    assert_eq!(simplified("c ? x + x : 3 - 3"), "c ? (2 * x) : 0");
}

#[test]
fn conditional_with_symbolic_condition_fails_on_a_failing_branch() {
    assert_eq!(parse("c ? 1/0 : 2").unwrap().simplify(), Err(RuntimeError::DivisionByZero));
    assert_eq!(parse("c ? 2 : 3 % 0").unwrap().simplify(), Err(RuntimeError::ModuloByZero));

    let mut env = Environment::new();
    let expr = parse("c ? 1/0 : 2").unwrap();
    env.set_variable("c", 0.0);
    assert_eq!(env.eval(&expr), Ok(Value::Number(2.0)));
    env.set_variable("c", 1.0);
    assert_eq!(env.eval(&expr), Err(RuntimeError::DivisionByZero));
}

#[test]
fn division_by_zero() {
    assert_runtime_failure("5/0", &RuntimeError::DivisionByZero);
    assert_eq!(parse("5/0").unwrap().simplify(), Err(RuntimeError::DivisionByZero));
    assert_runtime_failure("5 % 0", &RuntimeError::ModuloByZero);
    assert_eq!(parse("x + 5 % (2 - 2)").unwrap().simplify(),
               Err(RuntimeError::ModuloByZero));
}

#[test]
fn division_guard_uses_tolerance() {
    assert_runtime_failure("1 / 0.1^10", &RuntimeError::DivisionByZero);
    assert_abs_diff_eq!(evaluate("1 / 0.1^8"), 1e8, epsilon = 1e-3);
}

#[test]
fn undefined_variables_stay_symbolic() {
    assert_runtime_failure("y+1", &RuntimeError::UndefinedVariable { name: "y".to_string() });
    assert_eq!(simplified("y+1"), "(y + 1)");

    let mut env = Environment::new();
    assert_eq!(eval_in(&mut env, "y"), Ok(Value::Symbol("y".to_string())));
    assert_runtime_failure("-y", &RuntimeError::UndefinedVariable { name: "y".to_string() });
    assert_runtime_failure("sqrt(y)", &RuntimeError::UndefinedVariable { name: "y".to_string() });
    assert_runtime_failure("y ? 1 : 2", &RuntimeError::UndefinedVariable { name: "y".to_string() });
}

#[test]
fn assignment_mutates_the_environment() {
    let mut env = Environment::new();
    assert_eq!(eval_in(&mut env, "x=5"), Ok(Value::Number(5.0)));
    assert_eq!(eval_in(&mut env, "x+1"), Ok(Value::Number(6.0)));

    assert_eq!(eval_in(&mut env, "(y = 3) * 2"), Ok(Value::Number(6.0)));
    assert_eq!(env.variable("y"), Some(3.0));

    assert_eq!(eval_in(&mut env, "a = b = 4"), Ok(Value::Number(4.0)));
    assert_eq!(env.variable("a"), Some(4.0));
    assert_eq!(env.variable("b"), Some(4.0));
}

#[test]
fn assigning_a_symbol_fails_and_binds_nothing() {
    let mut env = Environment::new();
    assert_eq!(eval_in(&mut env, "x = y"),
               Err(RuntimeError::AssignUndefined { name:   "x".to_string(),
                                                   symbol: "y".to_string(), }));
    assert_eq!(env.variable("x"), None);
}

#[test]
fn conditionals_only_evaluate_the_selected_branch() {
    assert_eq!(evaluate("1 ? 2 : nope(3)"), 2.0);
    assert_eq!(evaluate("0 ? y : 3"), 3.0);
    assert_eq!(evaluate("0 ? 1 : 0 ? 2 : 3"), 3.0);
    assert_eq!(evaluate("0.000000000001 ? 1 : 2"), 2.0);

    let mut env = Environment::new();
    eval_in(&mut env, "a = -4").unwrap();
    assert_eq!(eval_in(&mut env, "a > 1 ? a : -a"), Ok(Value::Number(4.0)));
}

#[test]
fn logical_and_comparison_operators() {
    assert_eq!(evaluate("0 || 2"), 1.0);
    assert_eq!(evaluate("1 && 0"), 0.0);
    assert_eq!(evaluate("!0"), 1.0);
    assert_eq!(evaluate("!5"), 0.0);
    assert_eq!(evaluate("3 != 3"), 0.0);
    assert_eq!(evaluate("1 < 2 && 2 <= 2"), 1.0);
    assert_eq!(evaluate("0.1 + 0.2 == 0.3"), 1.0);
    assert_eq!(evaluate("1 == 1 + 0.000000000001"), 1.0);
    assert_eq!(evaluate("1 <= 1 - 0.000000000001"), 0.0);
    assert_eq!(evaluate("1 != 1 - 0.000000000001"), 0.0);
}

#[test]
fn builtins_and_constants() {
    assert_abs_diff_eq!(evaluate("pi"), PI);
    assert_abs_diff_eq!(evaluate("sqrt(16)"), 4.0);
    assert_abs_diff_eq!(evaluate("abs(-3)"), 3.0);
    assert_abs_diff_eq!(evaluate("log(1000)"), 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(evaluate("ln(e)"), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(evaluate("exp(ln(2))"), 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(evaluate("sin(pi)"), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(evaluate("cos(0) + tan(0)"), 1.0);
}

#[test]
fn every_listed_builtin_resolves() {
    assert_eq!(BUILTIN_FUNCTIONS, ["sin", "cos", "tan", "sqrt", "abs", "log", "ln", "exp"]);
    for name in BUILTIN_FUNCTIONS {
        assert!(builtin(name).is_some(), "{name} is listed but not callable");
    }
}

#[test]
fn call_errors() {
    assert_runtime_failure("nope(1)", &RuntimeError::UndefinedFunction { name: "nope".to_string() });
    assert_runtime_failure("sin(1, 2)",
                           &RuntimeError::ArgumentCountMismatch { name:     "sin".to_string(),
                                                                  expected: 1,
                                                                  found:    2, });
    assert_runtime_failure("sin()",
                           &RuntimeError::ArgumentCountMismatch { name:     "sin".to_string(),
                                                                  expected: 1,
                                                                  found:    0, });
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(parse("2^3^2").unwrap().to_string(), "(2 ^ (3 ^ 2))");
    assert_eq!(parse("1 - 2 - 3").unwrap().to_string(), "((1 - 2) - 3)");
    assert_eq!(parse("1 + 2 * 3 ^ 4").unwrap().to_string(), "(1 + (2 * (3 ^ 4)))");
    assert_eq!(parse("a || b && c == d < e").unwrap().to_string(),
               "(a || (b && (c == (d < e))))");
    assert_eq!(parse("-x ^ 2").unwrap().to_string(), "(-x ^ 2)");
    assert_eq!(parse("a > 1 ? a : -a").unwrap().to_string(), "(a > 1) ? a : -a");
    assert_eq!(parse("0 ? 1 : 0 ? 2 : 3").unwrap().to_string(), "0 ? 1 : 0 ? 2 : 3");
    assert_eq!(parse("x = 2 + 3").unwrap().to_string(), "x = (2 + 3)");
    assert_eq!(parse("f()").unwrap().to_string(), "f()");
}

#[test]
fn parse_errors() {
    assert_parse_failure("", &ParseError::EmptyExpression);
    assert_parse_failure("   ", &ParseError::EmptyExpression);
    assert_parse_failure("(1 + 2", &ParseError::ExpectedClosingParen { position: 6 });
    assert_parse_failure("sin(1 2)", &ParseError::ExpectedClosingParen { position: 6 });
    assert_parse_failure("1 ? 2", &ParseError::ExpectedColon { position: 5 });
    assert_parse_failure("1 ? 2 3", &ParseError::ExpectedColon { position: 6 });
    assert_parse_failure("? 1",
                         &ParseError::UnexpectedToken { token:    "?".to_string(),
                                                        position: 0, });
    assert_parse_failure("1 +", &ParseError::UnexpectedEndOfInput);
    assert_parse_failure("1 2",
                         &ParseError::UnexpectedTrailingTokens { token:    "2".to_string(),
                                                                 position: 2, });
    assert_parse_failure("1 = 2", &ParseError::InvalidAssignmentTarget { position: 2 });
}

#[test]
fn lex_errors_abort_parsing() {
    assert_parse_failure("a & b",
                         &ParseError::Lex(LexError::UnexpectedCharacter { character: '&',
                                                                          position:  2, }));
    assert!(matches!(parse("1 + ."), Err(ParseError::Lex(LexError::InvalidNumber { .. }))));
}

#[test]
fn environment_starts_with_constants() {
    let mut env = Environment::new();
    let names: Vec<&str> = env.variables().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["e", "pi"]);

    env.set_variable("a", 1.0);
    let names: Vec<&str> = env.variables().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a", "e", "pi"]);
}

#[test]
fn calculate_reports_symbolic_results_without_failing() {
    let mut env = Environment::new();

    let calc = calculate("y + y", &mut env, Options::default()).unwrap();
    assert_eq!(calc.expr.to_string(), "(2 * y)");
    assert_eq!(calc.value, Err(RuntimeError::UndefinedVariable { name: "y".to_string() }));

    let calc = calculate("x + x", &mut env, Options { simplify: false }).unwrap();
    assert_eq!(calc.expr.to_string(), "(x + x)");

    assert_eq!(calculate("1/0", &mut env, Options::default()),
               Err(Error::Runtime(RuntimeError::DivisionByZero)));
    assert!(matches!(calculate("(", &mut env, Options::default()), Err(Error::Parse(_))));
}

#[test]
fn errors_read_as_messages() {
    let e = Error::from(ParseError::ExpectedClosingParen { position: 6 });
    assert_eq!(e.to_string(),
               "Error at position 6: Expected closing parenthesis ')' but none found.");
    assert_eq!(Error::from(RuntimeError::DivisionByZero).to_string(), "Division by zero.");
}
