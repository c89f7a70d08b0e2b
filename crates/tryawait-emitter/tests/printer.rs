use super::*;
use crate::test_fixtures::TreeBuilder;

#[test]
fn test_print_statements() {
    let mut builder = TreeBuilder::new();
    let call = builder.call_named("log", &["a", "b"]);
    let stmt = builder.stmt(call);
    let one = builder.string("one");
    let decl = builder.const_decl("name", one);
    let empty = builder.ret(NodeIndex::NONE);
    let func = builder.function_decl("noop", &[], vec![empty], false, false);
    let unit = builder.finish(vec![stmt, decl, func]);

    assert_eq!(
        print_unit(&unit),
        "log(a, b);\nconst name = \"one\";\nfunction noop() {\n    return;\n}\n"
    );
}

#[test]
fn test_print_escapes_string_literals() {
    let mut builder = TreeBuilder::new();
    let text = builder.string("say \"hi\"\\\n");
    let unit = builder.finish(Vec::new());

    assert_eq!(
        Printer::new(&unit.arena).print_node(text),
        r#""say \"hi\"\\\n""#
    );
}

#[test]
fn test_print_functions() {
    let mut builder = TreeBuilder::new();
    let empty_gen = builder.function_expr(&[], Vec::new(), false, true);
    let async_method = builder.method("next", Vec::new(), true, true);
    let object = builder.object(Vec::new());
    let arrow = builder.arrow(&["x"], object, true);
    let unit = builder.finish(Vec::new());

    let print = |idx| Printer::new(&unit.arena).print_node(idx);
    assert_eq!(print(empty_gen), "function* () { }");
    assert_eq!(print(async_method), "async *next() { }");
    assert_eq!(print(arrow), "async (x) => ({})");
}

#[test]
fn test_print_try_expressions() {
    let mut builder = TreeBuilder::new();
    let awaited = builder.try_await_call("load");
    let call = builder.call_named("next", &[]);
    let yielded = builder.try_expr(call, false, true);
    let unit = builder.finish(Vec::new());

    let print = |idx| Printer::new(&unit.arena).print_node(idx);
    assert_eq!(print(awaited), "try await load()");
    assert_eq!(print(yielded), "try yield next()");
}

#[test]
fn test_print_imports() {
    let mut builder = TreeBuilder::new();
    let plain = builder.import("helper", "lib");
    let mut unit = builder.finish(vec![plain]);
    unit.add_named("wrap", "runtime-lib").expect("add_named");

    assert_eq!(
        print_unit(&unit),
        "import { helper } from \"lib\";\nimport { wrap as _wrap } from \"runtime-lib\";\n"
    );
}

#[test]
fn test_helpers_print_before_statements() {
    let mut builder = TreeBuilder::new();
    let call = builder.call_named("run", &[]);
    let stmt = builder.stmt(call);
    let mut unit = builder.finish(vec![stmt]);
    unit.add_helper("tryAwait").expect("add_helper");

    let output = print_unit(&unit);
    assert!(output.starts_with("function _tryAwait(value) {\n"));
    assert!(output.ends_with("}\nrun();\n"));
}
