use exprcalc::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::{evaluator::core::Environment, value::Value},
};
use proptest::prelude::*;

// Integer leaves and `+ - *` keep every intermediate value exact, so
// reassociating constant factors cannot flip an exact ordering comparison.
fn leaf() -> impl Strategy<Value = Expr> {
    prop_oneof![(0..10i32).prop_map(|n| Expr::Number(f64::from(n))),
                prop::sample::select(vec!["x", "y", "z"]).prop_map(|name| Expr::variable(name)),]
}

fn arithmetic() -> impl Strategy<Value = BinaryOperator> {
    prop::sample::select(vec![BinaryOperator::Add, BinaryOperator::Sub, BinaryOperator::Mul])
}

fn comparison() -> impl Strategy<Value = BinaryOperator> {
    prop::sample::select(vec![BinaryOperator::Greater,
                              BinaryOperator::Less,
                              BinaryOperator::GreaterEqual,
                              BinaryOperator::LessEqual,
                              BinaryOperator::Equal,
                              BinaryOperator::NotEqual])
}

// `!` only appears on conditions, whose values are already 0 or 1.
fn condition(operand: BoxedStrategy<Expr>) -> impl Strategy<Value = Expr> {
    let compare = (comparison(), operand.clone(), operand).prop_map(|(op, l, r)| {
                                                                Expr::binary(op, l, r)
                                                            })
                                                            .boxed();
    let logical = prop::sample::select(vec![BinaryOperator::And, BinaryOperator::Or]);

    prop_oneof![compare.clone(),
                compare.clone()
                       .prop_map(|c| Expr::unary(UnaryOperator::Not, c)),
                (logical, compare.clone(), compare).prop_map(|(op, l, r)| {
                                                       Expr::binary(op, l, r)
                                                   }),]
}

fn expr() -> impl Strategy<Value = Expr> {
    leaf().prop_recursive(3, 24, 3, |inner| {
              prop_oneof![(arithmetic(), inner.clone(), inner.clone()).prop_map(|(op, l, r)| {
                                                                     Expr::binary(op, l, r)
                                                                 }),
                          inner.clone()
                               .prop_map(|e| Expr::unary(UnaryOperator::Negate, e)),
                          (condition(inner.clone()), inner.clone(), inner).prop_map(
                              |(c, t, e)| Expr::Conditional { condition:   Box::new(c),
                                                              then_branch: Box::new(t),
                                                              else_branch: Box::new(e), }
                          ),]
          })
}

fn env_with(x: i32, y: i32, z: i32) -> Environment {
    let mut env = Environment::new();
    env.set_variable("x", f64::from(x));
    env.set_variable("y", f64::from(y));
    env.set_variable("z", f64::from(z));
    env
}

proptest! {
    #[test]
    fn simplify_is_idempotent(e in expr()) {
        let once = e.simplify().unwrap();
        prop_assert_eq!(once.simplify().unwrap(), once);
    }

    #[test]
    fn simplify_preserves_values(e in expr(), x in -5..=5i32, y in -5..=5i32, z in -5..=5i32) {
        let mut env = env_with(x, y, z);
        let simplified = e.simplify().unwrap();

        if let Ok(Value::Number(expected)) = env.eval(&e) {
            let actual = env.eval(&simplified);
            prop_assert!(matches!(actual, Ok(Value::Number(_))),
                         "{} simplified to {} which evaluates to {:?}", e, simplified, actual);
            if let Ok(Value::Number(actual)) = actual {
                prop_assert!((expected - actual).abs() <= 1e-9 * expected.abs().max(1.0),
                             "{} = {} but {} = {}", e, expected, simplified, actual);
            }
        }
    }
}
