use std::{
    sync::{
        Arc,
        atomic::{AtomicU32, Ordering},
    },
    thread,
};

use exprtree::{
    Binding, Closure, Function, ParseError, Slot, compile, evaluate, free,
    interpreter::evaluator::function::core::Opaque,
};

fn assert_failure(src: &str, offset: usize) -> ParseError {
    match compile(src, &[]) {
        Ok(tree) => panic!("Expression {src:?} compiled but was expected to fail: {}", tree.dump()),
        Err(e) => {
            assert_eq!(e.offset(), offset, "wrong offset for {src:?}: {e}");
            e
        },
    }
}

fn sum3(a: f64, b: f64, c: f64) -> f64 {
    a + b + c
}

fn sum4(a: f64, b: f64, c: f64, d: f64) -> f64 {
    a + b + c + d
}

fn sum5(a: f64, b: f64, c: f64, d: f64, e: f64) -> f64 {
    a + b + c + d + e
}

fn sum6(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> f64 {
    a + b + c + d + e + f
}

fn sum7(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64, g: f64) -> f64 {
    a + b + c + d + e + f + g
}

fn double(x: f64) -> f64 {
    x * 2.0
}

fn scale(context: &Opaque, x: f64) -> f64 {
    context.downcast_ref::<f64>().map_or(f64::NAN, |factor| x * factor)
}

fn lerp(context: &Opaque, a: f64, b: f64) -> f64 {
    context.downcast_ref::<f64>().map_or(f64::NAN, |t| a + (b - a) * t)
}

fn tick(context: &Opaque) -> f64 {
    context.downcast_ref::<AtomicU32>()
           .map_or(f64::NAN, |count| f64::from(count.fetch_add(1, Ordering::Relaxed) + 1))
}

#[test]
fn error_offsets_point_past_the_offending_token() {
    assert!(matches!(assert_failure("3+", 2), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(assert_failure("", 1), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(assert_failure("1)", 2), ParseError::TrailingInput { .. }));
    assert!(matches!(assert_failure("(1", 2), ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(assert_failure("1**1", 3), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_failure("1^^5", 3), ParseError::UnexpectedToken { .. }));
    assert!(matches!(assert_failure("1*2(+4", 4), ParseError::TrailingInput { .. }));
    assert!(matches!(assert_failure("1 2", 3), ParseError::TrailingInput { .. }));
    assert!(matches!(assert_failure("2e", 2), ParseError::TrailingInput { .. }));
    assert!(matches!(assert_failure("sin", 3), ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn unknown_identifiers_report_their_start() {
    let error = assert_failure("a+5", 1);
    assert_eq!(error,
               ParseError::UnknownIdentifier { name:   "a".to_owned(),
                                               offset: 1, });

    assert_failure("foo(1,2)", 1);
    assert_failure("1 + foo", 5);
}

#[test]
fn unexpected_characters_are_lexical_errors() {
    assert!(matches!(assert_failure("1 $ 2", 3),
                     ParseError::UnexpectedCharacter { character: '$', .. }));
    assert!(matches!(assert_failure("(1 + #", 6),
                     ParseError::UnexpectedCharacter { character: '#', .. }));
}

#[test]
fn offsets_count_characters_not_bytes() {
    assert_failure("1+é", 3);
}

#[test]
fn arity_mismatches_fail_to_compile() {
    assert!(matches!(assert_failure("pow(1)", 6),
                     ParseError::ArgumentCountMismatch { expected: 2, .. }));
    assert!(matches!(assert_failure("pow(1,2,3)", 8),
                     ParseError::ArgumentCountMismatch { expected: 2, .. }));
    assert!(matches!(assert_failure("pow 1", 5), ParseError::ExpectedOpenParen { .. }));
    assert!(matches!(assert_failure("pow(1,2", 7), ParseError::ExpectedClosingParen { .. }));
    assert!(matches!(assert_failure("pi(1)", 4),
                     ParseError::ArgumentCountMismatch { expected: 0, .. }));
    assert!(matches!(assert_failure("pi(", 3), ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn error_messages_carry_the_offset() {
    let error = assert_failure("3+", 2);
    assert_eq!(error.to_string(), "Error at offset 2: Unexpected end of input.");

    let error = assert_failure("pow(1)", 6);
    assert_eq!(error.to_string(), "Error at offset 6: 'pow' expects 2 argument(s).");
}

#[test]
fn variables_are_read_at_evaluation_time() {
    let x = Slot::new(1.0);
    let tree = compile("x * 10", &[Binding::variable("x", &x)]).unwrap();
    assert_eq!(tree.eval(), 10.0);

    x.set(2.5);
    assert_eq!(tree.eval(), 25.0);
}

#[test]
fn bindings_shadow_builtins() {
    let pi = Slot::new(3.0);
    let tree = compile("pi * 2", &[Binding::variable("pi", &pi)]).unwrap();
    assert_eq!(tree.eval(), 6.0);

    let tree = compile("sin 4", &[Binding::function("sin", Function::Arity1(double))]).unwrap();
    assert_eq!(tree.eval(), 8.0);
}

#[test]
fn first_duplicate_binding_wins() {
    let (a, b) = (Slot::new(1.0), Slot::new(2.0));
    let bindings = [Binding::variable("x", &a), Binding::variable("x", &b)];
    assert_eq!(compile("x", &bindings).unwrap().eval(), 1.0);
}

#[test]
fn variables_with_underscores_and_digits() {
    let slot = Slot::new(4.0);
    let tree = compile("sqrt(speed_2)", &[Binding::variable("speed_2", &slot)]).unwrap();
    assert_eq!(tree.eval(), 2.0);
}

#[test]
fn host_functions_of_every_arity() {
    let bindings = [Binding::function("sum3", Function::Arity3(sum3)),
                    Binding::function("sum4", Function::Arity4(sum4)),
                    Binding::function("sum5", Function::Arity5(sum5)),
                    Binding::function("sum6", Function::Arity6(sum6)),
                    Binding::function("sum7", Function::Arity7(sum7))];

    assert_eq!(compile("sum3(1, 2, 3)", &bindings).unwrap().eval(), 6.0);
    assert_eq!(compile("sum4(1, 2, 3, 4)", &bindings).unwrap().eval(), 10.0);
    assert_eq!(compile("sum5(1, 2, 3, 4, 5)", &bindings).unwrap().eval(), 15.0);
    assert_eq!(compile("sum6(1, 2, 3, 4, 5, 6)", &bindings).unwrap().eval(), 21.0);
    assert_eq!(compile("sum7(1, 2, 3, 4, 5, 6, 7)", &bindings).unwrap().eval(), 28.0);
    assert_eq!(compile("sum3(1+1, 2*2, -3)", &bindings).unwrap().eval(), 3.0);

    let error = compile("sum3(1, 2)", &bindings).unwrap_err();
    assert!(matches!(error, ParseError::ArgumentCountMismatch { expected: 3, .. }));
}

#[test]
fn closures_receive_their_context() {
    let bindings = [Binding::closure("scale", Closure::Arity1(scale), Arc::new(3.0)),
                    Binding::closure("lerp", Closure::Arity2(lerp), Arc::new(0.25))];

    assert_eq!(compile("scale 2", &bindings).unwrap().eval(), 6.0);
    assert_eq!(compile("lerp(0, 8)", &bindings).unwrap().eval(), 2.0);
}

#[test]
fn impure_closures_run_on_every_evaluation() {
    let counter = Arc::new(AtomicU32::new(0));
    let bindings = [Binding::closure("tick", Closure::Arity0(tick), counter.clone())];

    let tree = compile("tick + tick()", &bindings).unwrap();
    assert_eq!(tree.eval(), 3.0);
    assert_eq!(tree.eval(), 7.0);
    assert_eq!(counter.load(Ordering::Relaxed), 4);
}

#[test]
fn trees_evaluate_concurrently() {
    let x = Slot::new(3.0);
    let bindings = [Binding::variable("x", &x)];
    let tree = compile("x^2 + sin(0)", &bindings).unwrap();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..1000 {
                    assert_eq!(tree.eval(), 9.0);
                }
            });
        }
    });

    x.set(4.0);
    assert_eq!(tree.eval(), 16.0);
}

#[test]
fn absent_trees() {
    assert!(evaluate(None).is_nan());
    free(None);

    let tree = compile("1 + 2", &[]).ok();
    assert_eq!(evaluate(tree.as_ref()), 3.0);
    free(tree);
}
