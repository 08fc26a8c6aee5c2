//! The recursive tree-walking evaluator.
//!
//! `eval` is the single entry point: every node kind funnels through one
//! of `eval_statement`/`eval_expression`/`eval_block`, and every one of
//! those checks its sub-results for [`Value::Error`] before doing
//! anything with them. That check-and-propagate is the evaluator's only
//! error-handling mechanism — there is no host-level `Result` in this
//! module, because the interpreter's own error value already is one.

mod builtins;

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{BlockStatement, Expression, Program, Statement};
use crate::object::{hash_key, Environment, Value};

type Env = Rc<RefCell<Environment>>;

/// Evaluates a whole program in `env`, unwrapping any top-level `return`.
pub fn eval(program: &Program, env: &Env) -> Value {
    let mut result = Value::Nil;

    for statement in &program.statements {
        result = eval_statement(statement, env);

        match result {
            Value::Return(value) => return *value,
            Value::Error(_) => return result,
            _ => {}
        }
    }

    result
}

/// Evaluates a block's statements, leaving `Return`/`Error` wrapped so
/// they bubble through enclosing `if` expressions to the nearest
/// function or program boundary.
fn eval_block(block: &BlockStatement, env: &Env) -> Value {
    let mut result = Value::Nil;

    for statement in &block.statements {
        result = eval_statement(statement, env);

        if matches!(result, Value::Return(_) | Value::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_statement(statement: &Statement, env: &Env) -> Value {
    match statement {
        Statement::Expression(stmt) => eval_expression(&stmt.expression, env),
        Statement::Block(block) => eval_block(block, env),
        Statement::Let(stmt) => {
            let value = match &stmt.value {
                Some(expr) => eval_expression(expr, env),
                None => Value::Undefined,
            };
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(stmt.name.name.clone(), value.clone());
            value
        }
        Statement::Return(stmt) => {
            let value = match &stmt.value {
                Some(expr) => eval_expression(expr, env),
                None => Value::Nil,
            };
            if value.is_error() {
                return value;
            }
            Value::Return(Box::new(value))
        }
    }
}

fn eval_expression(expression: &Expression, env: &Env) -> Value {
    match expression {
        Expression::Number(lit) => Value::Number(lit.value),
        Expression::Str(lit) => Value::String(lit.value.clone()),
        Expression::Boolean(lit) => Value::Boolean(lit.value),
        Expression::Identifier(ident) => eval_identifier(&ident.name, env),
        Expression::Prefix(expr) => {
            let right = eval_expression(&expr.right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(&expr.operator, right)
        }
        Expression::Infix(expr) => {
            let left = eval_expression(&expr.left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(&expr.right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(&expr.operator, left, right)
        }
        Expression::If(expr) => eval_if_expression(expr, env),
        Expression::Function(lit) => Value::Function {
            params: Rc::new(lit.params.clone()),
            body: Rc::new(lit.body.clone()),
            env: env.clone(),
        },
        Expression::Call(expr) => {
            let function = eval_expression(&expr.function, env);
            if function.is_error() {
                return function;
            }
            let args = match eval_expressions(&expr.arguments, env) {
                Ok(args) => args,
                Err(err) => return err,
            };
            apply_function(function, args)
        }
        Expression::Array(lit) => match eval_expressions(&lit.elements, env) {
            Ok(items) => Value::Array(items),
            Err(err) => err,
        },
        Expression::Hash(lit) => eval_hash_literal(lit, env),
        Expression::Index(expr) => {
            let left = eval_expression(&expr.left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(&expr.index, env);
            if index.is_error() {
                return index;
            }
            eval_index_expression(left, index)
        }
    }
}

fn eval_identifier(name: &str, env: &Env) -> Value {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(value) = builtins::lookup(name) {
        return value;
    }
    Value::Error(format!("identifier not found: {name}"))
}

/// Evaluates a list of expressions left-to-right, stopping at (and
/// returning) the first error.
fn eval_expressions(exprs: &[Expression], env: &Env) -> Result<Vec<Value>, Value> {
    let mut values = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let value = eval_expression(expr, env);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }
    Ok(values)
}

fn eval_prefix_expression(operator: &str, right: Value) -> Value {
    match operator {
        "!" => Value::Boolean(!right.is_truthy()),
        "-" => match right {
            Value::Number(n) => Value::Number(-n),
            other => Value::Error(format!("unknown operator: -{}", other.type_name())),
        },
        _ => Value::Error(format!("unknown operator: {operator}{}", right.type_name())),
    }
}

fn eval_infix_expression(operator: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Number(l), Value::Number(r)) => eval_number_infix(operator, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(operator, l, r),
        (Value::Boolean(l), Value::Boolean(r)) => eval_boolean_infix(operator, *l, *r),
        _ if left.type_name() != right.type_name() => Value::Error(format!(
            "type mismatch: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
        _ => Value::Error(format!(
            "unknown operator: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
    }
}

fn eval_number_infix(operator: &str, left: f64, right: f64) -> Value {
    match operator {
        "+" => Value::Number(left + right),
        "-" => Value::Number(left - right),
        "*" => Value::Number(left * right),
        "/" => Value::Number(left / right),
        "<" => Value::Boolean(left < right),
        ">" => Value::Boolean(left > right),
        "==" => Value::Boolean(left == right),
        "!=" => Value::Boolean(left != right),
        _ => Value::Error(format!("unknown operator: NUMBER {operator} NUMBER")),
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Value {
    match operator {
        "+" => Value::String(format!("{left}{right}")),
        _ => Value::Error(format!("unknown operator: STRING {operator} STRING")),
    }
}

fn eval_boolean_infix(operator: &str, left: bool, right: bool) -> Value {
    match operator {
        "==" => Value::Boolean(left == right),
        "!=" => Value::Boolean(left != right),
        _ => Value::Error(format!("unknown operator: BOOLEAN {operator} BOOLEAN")),
    }
}

fn eval_if_expression(expr: &crate::ast::IfExpression, env: &Env) -> Value {
    let condition = eval_expression(&expr.condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block(&expr.consequence, env)
    } else if let Some(alternative) = &expr.alternative {
        eval_block(alternative, env)
    } else {
        Value::Nil
    }
}

fn eval_index_expression(left: Value, index: Value) -> Value {
    match (&left, &index) {
        (Value::Array(items), Value::Number(n)) => {
            let idx = *n as i64;
            if idx < 0 || idx as usize >= items.len() {
                Value::Nil
            } else {
                items[idx as usize].clone()
            }
        }
        (Value::Hash(pairs), _) => match hash_key(&index) {
            Some(key) => pairs
                .get(&key)
                .map(|(_, v)| v.clone())
                .unwrap_or(Value::Nil),
            None => Value::Error(format!("unusable as hash key: {}", index.type_name())),
        },
        _ => Value::Error(format!("index operator not supported: {}", left.type_name())),
    }
}

fn eval_hash_literal(lit: &crate::ast::HashLiteral, env: &Env) -> Value {
    let mut pairs = std::collections::HashMap::new();

    for (key_expr, value_expr) in &lit.pairs {
        let key = eval_expression(key_expr, env);
        if key.is_error() {
            return key;
        }
        let Some(key_str) = hash_key(&key) else {
            return Value::Error(format!("unusable as hash key: {}", key.type_name()));
        };

        let value = eval_expression(value_expr, env);
        if value.is_error() {
            return value;
        }

        pairs.insert(key_str, (key, value));
    }

    Value::Hash(pairs)
}

fn apply_function(function: Value, args: Vec<Value>) -> Value {
    match function {
        Value::Function { params, body, env } => {
            if args.len() != params.len() {
                return Value::Error(format!(
                    "wrong number of argument. got={}, want={}",
                    args.len(),
                    params.len()
                ));
            }

            let call_env = Environment::enclosed(env);
            for (param, arg) in params.iter().zip(args) {
                call_env.borrow_mut().set(param.name.clone(), arg);
            }

            match eval_block(&body, &call_env) {
                Value::Return(value) => *value,
                other => other,
            }
        }
        Value::BuiltinFunction(_, f) => f(&args),
        other => Value::Error(format!("not a function {}", other.type_name())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn eval_source(input: &str) -> Value {
        let lexer = Lexer::new(input);
        let mut parser = Parser::new(lexer, input);
        let program = parser.parse_program();
        assert!(parser.errors().is_empty(), "{:?}", parser.errors());
        let env = Environment::new();
        eval(&program, &env)
    }

    #[test]
    fn test_arithmetic_precedence() {
        let value = eval_source("(5 + 10 * 2 + 15 / 3) * 2 + -10");
        assert!(matches!(value, Value::Number(n) if n == 50.0));
    }

    #[test]
    fn test_nested_return_unwraps_at_function_boundary() {
        let value = eval_source("if (10 > 1) { if (10 > 1) { return 10; } return 1; }");
        assert!(matches!(value, Value::Number(n) if n == 10.0));
    }

    #[test]
    fn test_closures_capture_definition_environment() {
        let value = eval_source(
            "let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(2);",
        );
        assert!(matches!(value, Value::Number(n) if n == 4.0));
    }

    #[test]
    fn test_string_concatenation() {
        let value = eval_source(r#""Hello" + " " + "World!""#);
        assert!(matches!(value, Value::String(s) if s == "Hello World!"));
    }

    #[test]
    fn test_len_builtin_on_array_literal() {
        let value = eval_source("len([2, 3 + 4])");
        assert!(matches!(value, Value::Number(n) if n == 2.0));
    }

    #[test]
    fn test_missing_hash_key_is_nil() {
        let value = eval_source(r#"{"foo": 5}["bar"]"#);
        assert!(matches!(value, Value::Nil));
    }

    #[test]
    fn test_number_plus_boolean_is_type_mismatch() {
        let value = eval_source("5 + true;");
        assert!(matches!(value, Value::Error(m) if m == "type mismatch: NUMBER + BOOLEAN"));
    }

    #[test]
    fn test_function_as_hash_key_is_unusable() {
        let value = eval_source(r#"{"name": "Monkey"}[fn(x){x}];"#);
        assert!(matches!(value, Value::Error(m) if m == "unusable as hash key: FUNCTION"));
    }

    #[test]
    fn test_out_of_range_array_index_is_nil() {
        assert!(matches!(eval_source("[1, 2, 3][5]"), Value::Nil));
        assert!(matches!(eval_source("[1, 2, 3][-1]"), Value::Nil));
    }

    #[test]
    fn test_truthiness() {
        assert!(matches!(eval_source("!0"), Value::Boolean(false)));
        assert!(matches!(eval_source("!!5"), Value::Boolean(true)));
        let value = eval_source("let x = fn() { if (false) { return 1; } }; x();");
        assert!(matches!(value, Value::Nil));
    }

    #[test]
    fn test_identifier_not_found() {
        let value = eval_source("foobar;");
        assert!(matches!(value, Value::Error(m) if m == "identifier not found: foobar"));
    }

    #[test]
    fn test_calling_non_function_is_error() {
        let value = eval_source("let x = 5; x();");
        assert!(matches!(value, Value::Error(m) if m == "not a function NUMBER"));
    }

    #[test]
    fn test_pi_constant() {
        let value = eval_source("PI");
        assert!(matches!(value, Value::Number(n) if n == 3.14));
    }
}
