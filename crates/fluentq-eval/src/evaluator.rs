//! Expression evaluation against a variable environment

use crate::accessor::{get_field, get_index};
use crate::environment::Environment;
use crate::error::{EvalError, EvalResult};
use crate::operators::{apply_binary, negate};
use crate::registry::FunctionRegistry;
use crate::value::Value;
use fluentq_ast::{BinaryOp, Expr, FunctionCallExpr, Literal, UnaryOp};

/// Evaluates parsed where expressions
///
/// Identifiers resolve against the environment passed to [`evaluate`];
/// function calls resolve against the registry the evaluator was built
/// with. Unresolved identifiers and functions are errors, never nulls.
///
/// [`evaluate`]: Evaluator::evaluate
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    functions: FunctionRegistry,
}

impl Evaluator {
    /// Create an evaluator with no custom functions
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator with the given function registry
    pub fn with_functions(functions: FunctionRegistry) -> Self {
        Self { functions }
    }

    /// The evaluator's function registry
    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    /// Evaluate an expression against an environment
    pub fn evaluate(&self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        match expr {
            Expr::Literal(literal) => Ok(eval_literal(literal)),
            Expr::Identifier(name) => env
                .get(name)
                .cloned()
                .ok_or_else(|| EvalError::undefined_identifier(name)),
            Expr::Property(property) => {
                let object = self.evaluate(&property.object, env)?;
                get_field(&object, &property.name)
            }
            Expr::Index(index) => {
                let object = self.evaluate(&index.object, env)?;
                let position = self.evaluate(&index.index, env)?;
                let position = position
                    .as_int()
                    .ok_or_else(|| EvalError::type_mismatch("integer", position.kind()))?;
                get_index(&object, position)
            }
            Expr::List(elements) => {
                let values = elements
                    .iter()
                    .map(|element| self.evaluate(element, env))
                    .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::List(values))
            }
            Expr::Unary(unary) => {
                let operand = self.evaluate(&unary.operand, env)?;
                match unary.op {
                    UnaryOp::Not => Ok(Value::Bool(!operand.is_truthy())),
                    UnaryOp::Negate => negate(&operand),
                }
            }
            Expr::Binary(binary) => match binary.op {
                // Logical operators short-circuit on truthiness
                BinaryOp::And => {
                    if !self.evaluate(&binary.left, env)?.is_truthy() {
                        return Ok(Value::Bool(false));
                    }
                    Ok(Value::Bool(self.evaluate(&binary.right, env)?.is_truthy()))
                }
                BinaryOp::Or => {
                    if self.evaluate(&binary.left, env)?.is_truthy() {
                        return Ok(Value::Bool(true));
                    }
                    Ok(Value::Bool(self.evaluate(&binary.right, env)?.is_truthy()))
                }
                op => {
                    let left = self.evaluate(&binary.left, env)?;
                    let right = self.evaluate(&binary.right, env)?;
                    apply_binary(op, &left, &right)
                }
            },
            Expr::FunctionCall(call) => self.eval_function_call(call, env),
        }
    }

    fn eval_function_call(&self, call: &FunctionCallExpr, env: &Environment) -> EvalResult<Value> {
        let args = call
            .args
            .iter()
            .map(|arg| self.evaluate(arg, env))
            .collect::<EvalResult<Vec<_>>>()?;

        let function = self
            .functions
            .get(&call.name)
            .ok_or_else(|| EvalError::undefined_function(&call.name))?;

        function.call(&args)
    }
}

fn eval_literal(literal: &Literal) -> Value {
    match literal {
        Literal::Null => Value::Null,
        Literal::Bool(b) => Value::Bool(*b),
        Literal::Int(i) => Value::Int(*i),
        Literal::Float(f) => Value::Float(*f),
        Literal::String(s) => Value::String(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::WhereFunction;
    use crate::value::Object;
    use fluentq_parser::parse_expression;
    use pretty_assertions::assert_eq;

    fn env_with(name: &str, value: Value) -> Environment {
        Environment::from([(name.to_string(), value)])
    }

    fn eval(source: &str, env: &Environment) -> EvalResult<Value> {
        let expr = parse_expression(source).expect("expression should parse");
        Evaluator::new().evaluate(&expr, env)
    }

    #[test]
    fn resolves_identifiers_and_properties() {
        let city = Object::new()
            .with_field("name", "Lyon")
            .with_field("minimalAge", 21)
            .into_value();
        let env = env_with("city", city);

        assert_eq!(
            eval(r#"city.name == "Lyon""#, &env).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            eval("city.minimalAge + 1", &env).unwrap(),
            Value::Int(22)
        );
    }

    #[test]
    fn undefined_identifier_is_an_error() {
        let env = Environment::new();
        assert_eq!(
            eval("city.name", &env),
            Err(EvalError::undefined_identifier("city"))
        );
    }

    #[test]
    fn logical_operators_short_circuit() {
        // The right side would fail on an undefined identifier if reached
        let env = env_with("age", Value::Int(30));
        assert_eq!(
            eval("age > 40 and missing > 1", &env).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            eval("age > 20 or missing > 1", &env).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn custom_functions_dispatch_through_the_registry() {
        let mut functions = FunctionRegistry::new();
        functions.register(WhereFunction::new("double", |args| {
            let n = args
                .first()
                .and_then(Value::as_int)
                .ok_or_else(|| EvalError::invalid_argument("double", "expected an integer"))?;
            Ok(Value::Int(n * 2))
        }));

        let evaluator = Evaluator::with_functions(functions);
        let expr = parse_expression("double(age) == 60").unwrap();
        let env = env_with("age", Value::Int(30));

        assert_eq!(evaluator.evaluate(&expr, &env).unwrap(), Value::Bool(true));
    }

    #[test]
    fn unknown_function_is_an_error() {
        let env = Environment::new();
        assert_eq!(
            eval("missing(1)", &env),
            Err(EvalError::undefined_function("missing"))
        );
    }

    #[test]
    fn membership_and_negation() {
        let env = env_with("name", Value::from("Hubert"));
        assert_eq!(
            eval(r#"name in ["Hubert", "Alex"]"#, &env).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            eval(r#"not (name in ["Bob"])"#, &env).unwrap(),
            Value::Bool(true)
        );
    }
}
