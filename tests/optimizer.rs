use exprtree::{
    Binding, Config, Expr, Function, Slot, compile, compile_with,
    interpreter::evaluator::function::builtin::{BUILTINS, find_builtin},
};

const UNOPTIMIZED: Config = Config { pow_associativity: exprtree::PowAssociativity::RightToLeft,
                                     natural_log:       false,
                                     optimize:          false, };

fn double(x: f64) -> f64 {
    x * 2.0
}

fn nodes(src: &str, bindings: &[Binding]) -> usize {
    compile(src, bindings).unwrap_or_else(|e| panic!("Expression {src:?} failed: {e}"))
                          .node_count()
}

#[test]
fn constant_expressions_collapse_to_one_node() {
    let tree = compile("1+2*3", &[]).unwrap();
    assert!(matches!(tree, Expr::Constant(value) if value == 7.0));

    let tree = compile_with("1+2*3", &[], &UNOPTIMIZED).unwrap();
    assert_eq!(tree.node_count(), 5);
    assert_eq!(tree.eval(), 7.0);

    assert_eq!(nodes("sqrt(pow(3, 2) + 16) * pi", &[]), 1);
}

#[test]
fn subtrees_around_variables_are_folded() {
    let x = Slot::new(1.0);
    let bindings = [Binding::variable("x", &x)];

    assert_eq!(nodes("x + 2*3", &bindings), 3);
    assert_eq!(nodes("sin(x) * (1 + 1)", &bindings), 4);
    assert_eq!(nodes("x", &bindings), 1);
}

#[test]
fn operators_are_not_reassociated() {
    let x = Slot::new(1.0);
    let bindings = [Binding::variable("x", &x)];

    assert_eq!(nodes("x + 2 + 3", &bindings), 5);
    assert_eq!(nodes("x + (2 + 3)", &bindings), 3);
}

#[test]
fn impure_calls_are_kept() {
    let impure = [Binding::function("double", Function::Arity1(double))];
    let pure = [Binding::function("double", Function::Arity1(double)).pure()];

    assert_eq!(nodes("double 4", &impure), 2);
    assert_eq!(nodes("double(1 + 3) + 2*3", &impure), 4);
    assert_eq!(nodes("double 4", &pure), 1);
    assert_eq!(compile("double(1 + 3) + 2*3", &impure).unwrap().eval(), 14.0);
}

#[test]
fn folding_preserves_non_finite_values() {
    let tree = compile("1/0 - 1/0", &[]).unwrap();
    assert!(tree.is_constant());
    assert!(tree.eval().is_nan());
}

#[test]
fn dump_renders_one_node_per_line() {
    let tree = compile_with("1+2", &[], &UNOPTIMIZED).unwrap();
    assert_eq!(tree.dump().to_string(), "f2 +\n 1.000000\n 2.000000\n");

    let tree = compile_with("sin -1", &[], &UNOPTIMIZED).unwrap();
    assert_eq!(tree.dump().to_string(), "f1 sin\n f1 neg\n  1.000000\n");

    let tree = compile("1+2", &[]).unwrap();
    assert_eq!(tree.dump().to_string(), "3.000000\n");

    let tree = compile_with("pi", &[], &UNOPTIMIZED).unwrap();
    assert_eq!(tree.dump().to_string(), "f0 pi\n");
}

#[test]
fn call_nodes_expose_their_parts() {
    let tree = compile_with("atan2(1, 2)", &[], &UNOPTIMIZED).unwrap();
    let Expr::Call(call) = &tree else {
        panic!("expected a call, found {}", tree.dump());
    };

    assert_eq!(call.callee().to_string(), "atan2");
    assert_eq!(call.callee().arity(), 2);
    assert_eq!(call.args().len(), 2);
    assert!(call.is_pure());
}

#[test]
fn builtin_table_is_sorted() {
    assert!(BUILTINS.windows(2).all(|pair| pair[0].name < pair[1].name));

    for builtin in BUILTINS {
        let found = find_builtin(builtin.name).unwrap();
        assert_eq!(found.name, builtin.name);
        assert!(found.pure);
    }
}
