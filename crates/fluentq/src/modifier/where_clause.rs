//! The where modifier: expression-based filtering

use crate::context::QueryContext;
use crate::error::QueryResult;
use crate::modifier::Modifier;
use fluentq_eval::{Environment, Evaluator, FunctionRegistry, Value};
use fluentq_parser::parse_expression;

/// Order-preserving filter driven by a where expression
///
/// The expression source is kept as written and parsed when the modifier
/// is applied. The evaluator is built at construction time from the
/// function registry snapshot the query handed over: functions registered
/// afterwards are not visible to this instance.
#[derive(Debug)]
pub(crate) struct Where {
    source_alias: String,
    expression: String,
    environment: Environment,
    evaluator: Evaluator,
}

impl Where {
    pub(crate) fn new(
        source_alias: String,
        expression: String,
        environment: Environment,
        functions: FunctionRegistry,
    ) -> Self {
        Self {
            source_alias,
            expression,
            environment,
            evaluator: Evaluator::with_functions(functions),
        }
    }
}

impl Modifier for Where {
    fn apply(&self, source: Vec<Value>, context: &QueryContext) -> QueryResult<Vec<Value>> {
        let expression = parse_expression(&self.expression)?;

        let mut kept = Vec::new();
        for item in source {
            // Ancestor bindings first, static variables over them, the
            // item's own alias binding last
            let mut environment = context.environment(&item);
            environment.extend(self.environment.clone());
            environment.insert(self.source_alias.clone(), item.clone());

            if self.evaluator.evaluate(&expression, &environment)?.is_truthy() {
                kept.push(item);
            }
        }

        Ok(kept)
    }
}
