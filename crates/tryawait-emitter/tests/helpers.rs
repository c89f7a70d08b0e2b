use super::*;
use crate::test_fixtures::{TreeBuilder, imports};

fn unit_with_import() -> CompilationUnit {
    let mut builder = TreeBuilder::new();
    let existing = builder.import("helper", "lib");
    let call = builder.call_named("helper", &[]);
    let stmt = builder.stmt(call);
    builder.finish(vec![existing, stmt])
}

#[test]
fn test_add_named_inserts_after_leading_imports() {
    let mut unit = unit_with_import();
    let reference = unit.add_named("wrap", "runtime-lib").expect("add_named");

    assert_eq!(unit.arena.identifier_text(reference), Some("_wrap"));
    assert_eq!(
        imports(&unit),
        vec![
            ("helper".to_string(), "helper".to_string(), "lib".to_string()),
            ("wrap".to_string(), "_wrap".to_string(), "runtime-lib".to_string()),
        ]
    );
    // Import went in as the second statement, before the call.
    let second = unit.statements()[1];
    assert_eq!(
        unit.arena.get(second).map(|node| node.kind),
        Some(syntax_kind_ext::IMPORT_DECLARATION)
    );
    assert_eq!(unit.arena.parent(second), unit.root);
}

#[test]
fn test_add_named_does_not_deduplicate() {
    let mut unit = unit_with_import();
    let first = unit.add_named("wrap", "runtime-lib").expect("first");
    let second = unit.add_named("wrap", "runtime-lib").expect("second");

    assert_ne!(first, second);
    assert_eq!(unit.arena.identifier_text(second), Some("_wrap2"));
    assert_eq!(imports(&unit).len(), 3);
}

#[test]
fn test_add_helper_registers_once() {
    let mut unit = unit_with_import();
    let first = unit.add_helper("tryAwait").expect("first");
    let second = unit.add_helper("tryAwait").expect("second");

    assert_ne!(first, second);
    assert_eq!(unit.arena.identifier_text(first), Some("_tryAwait"));
    assert_eq!(unit.arena.identifier_text(second), Some("_tryAwait"));
    assert_eq!(unit.helpers.len(), 1);
    assert_eq!(unit.helpers.local_name("tryAwait"), Some("_tryAwait"));
    // Shared helpers never touch the import list.
    assert_eq!(imports(&unit).len(), 1);
}

#[test]
fn test_add_helper_unknown_name() {
    let mut unit = unit_with_import();
    let err = unit.add_helper("doesNotExist").expect_err("unknown helper");
    assert_eq!(err, TransformError::UnknownHelper("doesNotExist".to_string()));
    assert!(unit.helpers.is_empty());
}

#[test]
fn test_lookup_helper() {
    let helper = lookup_helper("tryAwait").expect("built-in helper");
    assert!(helper.text.contains("{name}"));
    assert!(lookup_helper("asyncToGenerator").is_none());
}

#[test]
fn test_clone_reference() {
    let mut unit = unit_with_import();
    let reference = unit.add_named("wrap", "runtime-lib").expect("add_named");
    let clone = unit.clone_reference(reference).expect("clone");

    assert_ne!(clone, reference);
    assert_eq!(unit.arena.identifier_text(clone), Some("_wrap"));
    assert_eq!(
        unit.clone_reference(NodeIndex::NONE),
        Err(TransformError::MissingNode(NodeIndex::NONE))
    );
}
