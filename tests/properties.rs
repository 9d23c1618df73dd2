//! Property-based tests for the conversion, building and evaluation stages.

use std::{iter::Peekable, str::Chars};

use infixtree::{
    config::{Config, NumericMode},
    pipeline::{calculator::Calculator, value::Number},
};
use proptest::prelude::*;

/// Independent recursive-descent evaluator used as an oracle.
///
/// Grammar:
/// ```text
///     expr   := term (('+' | '-') term)*
///     term   := factor (('*' | '/') factor)*
///     factor := digits | '(' expr ')'
/// ```
struct Oracle<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Oracle<'_> {
    fn evaluate(source: &str) -> f64 {
        let mut oracle = Oracle { chars: source.chars().peekable() };
        let value = oracle.expr();
        assert!(oracle.peek().is_none(), "oracle did not consume '{source}'");
        value
    }

    fn peek(&mut self) -> Option<char> {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
        self.chars.peek().copied()
    }

    fn expr(&mut self) -> f64 {
        let mut value = self.term();
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.chars.next();
            let rhs = self.term();
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        value
    }

    fn term(&mut self) -> f64 {
        let mut value = self.factor();
        while let Some(op @ ('*' | '/')) = self.peek() {
            self.chars.next();
            let rhs = self.factor();
            value = if op == '*' { value * rhs } else { value / rhs };
        }
        value
    }

    fn factor(&mut self) -> f64 {
        if self.peek() == Some('(') {
            self.chars.next();
            let value = self.expr();
            assert_eq!(self.peek(), Some(')'));
            self.chars.next();
            return value;
        }

        let mut digits = String::new();
        while let Some(c) = self.chars.next_if(char::is_ascii_digit) {
            digits.push(c);
        }
        digits.parse().expect("oracle expected a number")
    }
}

// Strategy for generating well-formed infix expressions
fn expression() -> impl Strategy<Value = String> {
    let leaf = (0u32..100).prop_map(|n| n.to_string());

    leaf.prop_recursive(5, 48, 2, |inner| {
            prop_oneof![
                (inner.clone(), prop::sample::select(vec!['+', '-', '*', '/']), inner.clone(), any::<bool>())
                    .prop_map(|(left, op, right, spaced)| {
                        if spaced {
                            format!("{left} {op} {right}")
                        } else {
                            format!("{left}{op}{right}")
                        }
                    }),
                inner.prop_map(|e| format!("({e})")),
            ]
        })
}

fn same_real(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

proptest! {
    #[test]
    fn pipeline_agrees_with_recursive_descent(source in expression()) {
        let calculator = Calculator::new(Config::new(NumericMode::Floating));

        let postfix = calculator.convert(&source).unwrap();
        let tree = calculator.build(&postfix).unwrap();
        let Number::Real(value) = calculator.evaluate(&tree).unwrap() else {
            panic!("floating mode produced an integer");
        };

        let expected = Oracle::evaluate(&source);
        prop_assert!(same_real(value, expected), "{source}: {value} != {expected}");
    }

    #[test]
    fn tree_shape_matches_postfix_tokens(source in expression()) {
        let calculator = Calculator::new(Config::default());

        let postfix = calculator.convert(&source).unwrap();
        let tree = calculator.build(&postfix).unwrap();

        let (literals, operators): (Vec<&str>, Vec<&str>) =
            postfix.split_whitespace()
                   .partition(|token| token.starts_with(|c: char| c.is_ascii_digit()));

        prop_assert_eq!(tree.leaf_count(), literals.len());
        prop_assert_eq!(tree.internal_count(), operators.len());
        prop_assert!(!postfix.contains("  ") && postfix.trim() == postfix);
    }

    #[test]
    fn integer_division_truncates(a in 0i64..10_000, b in 1i64..10_000) {
        let calculator = Calculator::new(Config::new(NumericMode::Integer));
        let tree = calculator.build(&calculator.convert(&format!("{a}/{b}")).unwrap()).unwrap();

        prop_assert_eq!(calculator.evaluate(&tree).unwrap(), Number::Integer(a / b));
    }

    #[test]
    fn sqrt_of_a_square_is_its_root(n in 0u32..1000) {
        let calculator = Calculator::new(Config::default());
        let tree = calculator.build(&calculator.convert(&format!("sqrt({n}*{n})")).unwrap()).unwrap();

        prop_assert_eq!(calculator.evaluate(&tree).unwrap(), Number::Real(f64::from(n)));
    }
}
