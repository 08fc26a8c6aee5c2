//! Black-box tests driving the crate's public API end to end: source text
//! in, a runtime [`Value`] out.

use monkey_lang::evaluator;
use monkey_lang::lexer::Lexer;
use monkey_lang::object::{Environment, Value};
use monkey_lang::parser::Parser;

fn eval(input: &str) -> Value {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer, input);
    let program = parser.parse_program();
    assert!(
        parser.errors().is_empty(),
        "unexpected parse errors for {input:?}: {:?}",
        parser.errors()
    );
    let env = Environment::new();
    evaluator::eval(&program, &env)
}

#[test]
fn seed_scenarios_from_the_spec() {
    assert!(matches!(
        eval("(5 + 10 * 2 + 15 / 3) * 2 + -10"),
        Value::Number(n) if n == 50.0
    ));

    assert!(matches!(
        eval("if (10 > 1) { if (10 > 1) { return 10; } return 1; }"),
        Value::Number(n) if n == 10.0
    ));

    assert!(matches!(
        eval("let newAdder = fn(x) { fn(y) { x + y }; }; let addTwo = newAdder(2); addTwo(2);"),
        Value::Number(n) if n == 4.0
    ));

    assert!(matches!(
        eval(r#""Hello" + " " + "World!""#),
        Value::String(s) if s == "Hello World!"
    ));

    assert!(matches!(eval("len([2, 3 + 4])"), Value::Number(n) if n == 2.0));

    assert!(matches!(eval(r#"{"foo": 5}["bar"]"#), Value::Nil));

    assert!(matches!(
        eval("5 + true;"),
        Value::Error(m) if m == "type mismatch: NUMBER + BOOLEAN"
    ));

    assert!(matches!(
        eval(r#"{"name": "Monkey"}[fn(x){x}];"#),
        Value::Error(m) if m == "unusable as hash key: FUNCTION"
    ));
}

#[test]
fn boundary_behaviors() {
    assert!(matches!(eval("[1, 2, 3][3]"), Value::Nil));
    assert!(matches!(eval("[1, 2, 3][-1]"), Value::Nil));
    assert!(matches!(eval(r#"{"a": 1}["b"]"#), Value::Nil));
    assert!(matches!(eval(r#"len("")"#), Value::Number(n) if n == 0.0));
    assert!(matches!(eval("len([])"), Value::Number(n) if n == 0.0));
}

#[test]
fn truthiness_zero_is_truthy() {
    assert!(matches!(eval("if (0) { 1 } else { 2 }"), Value::Number(n) if n == 1.0));
    assert!(matches!(eval("!0"), Value::Boolean(false)));
    assert!(matches!(eval("!!5"), Value::Boolean(true)));
}

#[test]
fn closures_from_distinct_calls_capture_distinct_frames() {
    let value = eval(
        r#"
        let newAdder = fn(x) { fn(y) { x + y } };
        let addTwo = newAdder(2);
        let addTen = newAdder(10);
        addTwo(3) + addTen(3);
        "#,
    );
    assert!(matches!(value, Value::Number(n) if n == 18.0));
}

#[test]
fn hash_literal_with_expression_keys_and_values() {
    let value = eval(
        r#"
        let two = "two";
        {
            "one": 10 - 9,
            two: 1 + 1,
            "thr" + "ee": 6 / 2,
            4: 4,
            true: 5,
            false: 6
        }["thr" + "ee"]
        "#,
    );
    assert!(matches!(value, Value::Number(n) if n == 3.0));
}

#[test]
fn array_builtins_compose() {
    let value = eval("let a = [1, 2, 3]; let a = push(a, 4); last(a);");
    assert!(matches!(value, Value::Number(n) if n == 4.0));
    assert!(matches!(eval("first([])"), Value::Nil));
}

#[test]
fn error_messages_are_exact() {
    assert!(matches!(
        eval("-true"),
        Value::Error(m) if m == "unknown operator: -BOOLEAN"
    ));
    assert!(matches!(
        eval(r#""a" - "b""#),
        Value::Error(m) if m == "unknown operator: STRING - STRING"
    ));
    assert!(matches!(
        eval("foobar"),
        Value::Error(m) if m == "identifier not found: foobar"
    ));
    assert!(matches!(
        eval("len(1, 2)"),
        Value::Error(m) if m == "wrong number of argument. got=2, want=1"
    ));
}
