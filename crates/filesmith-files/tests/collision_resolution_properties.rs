//! Property-based tests for collision resolution

use filesmith_console::ScriptedConsole;
use filesmith_files::{CollisionResolver, TemplateWriter};

/// Property: a path that does not exist is returned unchanged and the
/// user is never prompted.
#[test]
fn prop_free_path_returned_unchanged() {
    let resolver = CollisionResolver::new();
    let temp_dir = tempfile::tempdir().unwrap();

    for name in ["demo.py", "notes.tex", "prog.c", "prog.cpp", "App.java"] {
        let path = temp_dir.path().join(name);
        let mut console = ScriptedConsole::default();

        let resolved = resolver.resolve(path.clone(), &mut console).unwrap();

        assert_eq!(resolved, path, "free path should pass through untouched");
        assert_eq!(
            console.remaining_inputs(),
            0,
            "no scripted input should be needed"
        );
        assert!(console.transcript().is_empty(), "no notice should be printed");
    }
}

/// Property: the resolved path never exists at the moment of return.
#[test]
fn prop_resolved_path_does_not_exist() {
    let resolver = CollisionResolver::new();
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("report.tex"), "v1").unwrap();
    std::fs::write(temp_dir.path().join("draft.tex"), "v2").unwrap();

    let mut console = ScriptedConsole::new(["draft", "final"]);
    let resolved = resolver
        .resolve(temp_dir.path().join("report.tex"), &mut console)
        .unwrap();

    assert!(!resolved.exists(), "resolved path must not exist");
    assert_eq!(resolved, temp_dir.path().join("final.tex"));
}

/// Property: the original suffix survives any chain of renames.
#[test]
fn prop_suffix_preserved_across_renames() {
    let resolver = CollisionResolver::new();
    let temp_dir = tempfile::tempdir().unwrap();
    for name in ["a.java", "b.java", "c.java"] {
        std::fs::write(temp_dir.path().join(name), "taken").unwrap();
    }

    let mut console = ScriptedConsole::new(["b", "c", "Winner"]);
    let resolved = resolver
        .resolve(temp_dir.path().join("a.java"), &mut console)
        .unwrap();

    assert_eq!(
        resolved.extension().and_then(|e| e.to_str()),
        Some("java"),
        "suffix should survive every rename"
    );
    assert_eq!(resolved, temp_dir.path().join("Winner.java"));
}

/// Property: exactly one collision notice is printed per existing path
/// encountered.
#[test]
fn prop_one_notice_per_collision() {
    let resolver = CollisionResolver::new();
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("x.py"), "").unwrap();
    std::fs::write(temp_dir.path().join("y.py"), "").unwrap();
    std::fs::write(temp_dir.path().join("z.py"), "").unwrap();

    let mut console = ScriptedConsole::new(["y", "z", "w"]);
    resolver
        .resolve(temp_dir.path().join("x.py"), &mut console)
        .unwrap();

    assert_eq!(
        console.transcript().matches("already exists.").count(),
        3,
        "three collisions should produce three notices"
    );
}

/// Property: blank replacement names never produce a candidate; the
/// prompt repeats until a usable name arrives.
#[test]
fn prop_blank_names_never_resolve() {
    let resolver = CollisionResolver::new();
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("demo.cpp"), "").unwrap();

    let mut console = ScriptedConsole::new(["", "  ", "", "fresh"]);
    let resolved = resolver
        .resolve(temp_dir.path().join("demo.cpp"), &mut console)
        .unwrap();

    assert_eq!(resolved, temp_dir.path().join("fresh.cpp"));
    assert_eq!(
        console
            .transcript()
            .matches("Filename should not be blank.")
            .count(),
        3,
        "each blank answer should be rejected"
    );
}

/// Property: a resolved path is immediately writable, and writing it does
/// not disturb the colliding file.
#[test]
fn prop_resolved_path_is_writable() {
    let resolver = CollisionResolver::new();
    let writer = TemplateWriter::new();
    let temp_dir = tempfile::tempdir().unwrap();
    let original = temp_dir.path().join("demo.py");
    std::fs::write(&original, "original body").unwrap();

    let mut console = ScriptedConsole::new(["copy"]);
    let resolved = resolver.resolve(original.clone(), &mut console).unwrap();

    let created = tokio_test::block_on(writer.write(&resolved, "new body")).unwrap();

    assert_eq!(created.path, resolved);
    assert_eq!(std::fs::read_to_string(&resolved).unwrap(), "new body");
    assert_eq!(
        std::fs::read_to_string(&original).unwrap(),
        "original body",
        "the colliding file must be left alone"
    );
}
