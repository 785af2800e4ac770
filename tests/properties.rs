//! Property-based tests for parsing, evaluation and folding.

use exprtree::{Binding, Config, Slot, compile, compile_with, interpret};
use proptest::prelude::*;

fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

// Fully parenthesized arithmetic paired with its value computed in Rust.
// Power chains and sign prefixes are written bare inside their parentheses so
// that `-a^b`, `(-a)^b` and `a^b^c` are all exercised.
fn arithmetic() -> impl Strategy<Value = (String, f64)> {
    let leaf = (0u32..10).prop_map(|n| (n.to_string(), f64::from(n)));
    leaf.prop_recursive(4, 32, 3, |inner| {
            prop_oneof![(inner.clone(), prop::sample::select(vec!['+', '-', '*', '/', '%', '^']), inner.clone())
                            .prop_map(|((left, a), op, (right, b))| {
                                let value = match op {
                                    '+' => a + b,
                                    '-' => a - b,
                                    '*' => a * b,
                                    '/' => a / b,
                                    '%' => a % b,
                                    _ => a.powf(b),
                                };
                                (format!("({left} {op} {right})"), value)
                            }),
                        inner.clone().prop_map(|(source, value)| (format!("(-({source}))"), -value)),
                        (inner.clone(), inner.clone())
                            .prop_map(|((base, a), (exponent, b))| (format!("(-{base}^{exponent})"), -a.powf(b))),
                        (inner.clone(), inner.clone())
                            .prop_map(|((base, a), (exponent, b))| (format!("((-{base})^{exponent})"), (-a).powf(b))),
                        (inner.clone(), inner.clone(), inner)
                            .prop_map(|((x, a), (y, b), (z, c))| (format!("({x}^{y}^{z})"), a.powf(b.powf(c)))),]
        })
}

// Expressions over `x` mixing operators and builtins
fn formula() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0u32..10).prop_map(|n| n.to_string()), Just("x".to_owned()), Just("pi".to_owned())];
    leaf.prop_recursive(4, 32, 2, |inner| {
            prop_oneof![(inner.clone(), prop::sample::select(vec!["+", "-", "*", "/", "^", "%"]), inner.clone())
                            .prop_map(|(left, op, right)| format!("({left}) {op} ({right})")),
                        (prop::sample::select(vec!["sin", "sqrt", "abs", "-", "floor"]), inner.clone())
                            .prop_map(|(function, arg)| format!("{function}({arg})")),
                        (inner.clone(), inner).prop_map(|(a, b)| format!("(pow({a}, {b}), atan2({b}, {a}))")),]
        })
}

proptest! {
    #[test]
    fn evaluation_matches_rust_arithmetic((source, expected) in arithmetic()) {
        let value = interpret(&source).map_err(|e| TestCaseError::fail(format!("{source}: {e}")))?;
        prop_assert!(same_value(value, expected), "{} gave {}, expected {}", source, value, expected);

        let tree = compile(&source, &[]).map_err(|e| TestCaseError::fail(format!("{source}: {e}")))?;
        prop_assert!(same_value(tree.eval(), value));
    }

    #[test]
    fn folding_does_not_change_values(source in formula(), x in -10.0f64..10.0) {
        let slot = Slot::new(x);
        let bindings = [Binding::variable("x", &slot)];
        let unoptimized = Config { optimize: false, ..Config::default() };

        let folded = compile(&source, &bindings).map_err(|e| TestCaseError::fail(format!("{source}: {e}")))?;
        let plain = compile_with(&source, &bindings, &unoptimized)
            .map_err(|e| TestCaseError::fail(format!("{source}: {e}")))?;

        prop_assert!(folded.node_count() <= plain.node_count());
        prop_assert!(same_value(folded.eval(), plain.eval()), "{} differs after folding", source);
    }

    #[test]
    fn error_offsets_stay_within_the_input(source in "[ -~]{0,24}") {
        if let Err(e) = interpret(&source) {
            prop_assert!(e.offset() >= 1);
            prop_assert!(e.offset() <= source.chars().count().max(1), "{}: {}", source, e);
        }
    }
}
