#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tempfile::TempDir;
use y3c_xtask::commands::docgen::{example_sources, render_example_docs_from};

fn write_source(sources_dir: &Path, name: &str) {
    fs::write(sources_dir.join(name), "// example source\n").unwrap();
}

fn write_example_script(binaries_dir: &Path, name: &str, body: &str) {
    let path = binaries_dir.join(format!("y3c-example-{name}"));
    fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn setup() -> (TempDir, TempDir) {
    let sources = TempDir::new().unwrap();
    let build = TempDir::new().unwrap();
    fs::create_dir(build.path().join("examples")).unwrap();
    (sources, build)
}

#[test]
fn blocks_appear_in_sorted_source_order() {
    let (sources, build) = setup();
    let binaries = build.path().join("examples");
    for name in ["b", "a", "c"] {
        write_source(sources.path(), &format!("{name}.cc"));
        write_example_script(&binaries, name, &format!("echo {name}\n"));
    }

    render_example_docs_from(sources.path(), build.path()).unwrap();

    let dox = fs::read_to_string(build.path().join("examples.dox")).unwrap();
    let a = dox.find("\\example a.cc").unwrap();
    let b = dox.find("\\example b.cc").unwrap();
    let c = dox.find("\\example c.cc").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn captured_output_is_quoted_line_by_line() {
    let (sources, build) = setup();
    write_source(sources.path(), "greet.cc");
    write_example_script(
        &build.path().join("examples"),
        "greet",
        "echo hello\necho world\n",
    );

    render_example_docs_from(sources.path(), build.path()).unwrap();

    let dox = fs::read_to_string(build.path().join("examples.dox")).unwrap();
    assert_eq!(
        dox,
        "/*!\n\
         \\example greet.cc\n\
         > example output:\n\
         > ```\n\
         > hello\n\
         > world\n\
         > \n\
         > ```\n\
         */\n"
    );
}

#[test]
fn stdout_and_stderr_interleave_in_production_order() {
    let (sources, build) = setup();
    write_source(sources.path(), "mixed.cc");
    write_example_script(
        &build.path().join("examples"),
        "mixed",
        "echo to-stdout\necho to-stderr >&2\necho to-stdout-again\n",
    );

    render_example_docs_from(sources.path(), build.path()).unwrap();

    let dox = fs::read_to_string(build.path().join("examples.dox")).unwrap();
    assert!(dox.contains("> to-stdout\n> to-stderr\n> to-stdout-again\n"));
}

#[test]
fn nonzero_exit_does_not_abort_the_run() {
    let (sources, build) = setup();
    let binaries = build.path().join("examples");
    write_source(sources.path(), "fails.cc");
    write_example_script(&binaries, "fails", "echo boom >&2\nexit 3\n");
    write_source(sources.path(), "ok.cc");
    write_example_script(&binaries, "ok", "echo fine\n");

    render_example_docs_from(sources.path(), build.path()).unwrap();

    let dox = fs::read_to_string(build.path().join("examples.dox")).unwrap();
    assert!(dox.contains("\\example fails.cc"));
    assert!(dox.contains("> boom\n"));
    assert!(dox.contains("\\example ok.cc"));
    assert!(dox.contains("> fine\n"));
}

#[test]
fn missing_binary_aborts_the_whole_run() {
    let (sources, build) = setup();
    write_source(sources.path(), "ghost.cc");

    let err = render_example_docs_from(sources.path(), build.path()).unwrap_err();
    assert!(err.to_string().contains("y3c-example-ghost"));
}

#[test]
fn reruns_produce_byte_identical_output() {
    let (sources, build) = setup();
    let binaries = build.path().join("examples");
    for name in ["first", "second"] {
        write_source(sources.path(), &format!("{name}.cc"));
        write_example_script(&binaries, name, &format!("echo {name} output\n"));
    }

    render_example_docs_from(sources.path(), build.path()).unwrap();
    let first = fs::read(build.path().join("examples.dox")).unwrap();
    render_example_docs_from(sources.path(), build.path()).unwrap();
    let second = fs::read(build.path().join("examples.dox")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn only_cc_entries_are_enumerated() {
    let sources = TempDir::new().unwrap();
    write_source(sources.path(), "b.cc");
    write_source(sources.path(), "a.cc");
    fs::write(sources.path().join("README.md"), "not a source\n").unwrap();
    fs::write(sources.path().join("helper.h"), "// header\n").unwrap();

    let names = example_sources(sources.path()).unwrap();
    assert_eq!(names, ["a.cc", "b.cc"]);
}

#[test]
fn empty_source_set_still_writes_an_empty_dox() {
    let (sources, build) = setup();

    render_example_docs_from(sources.path(), build.path()).unwrap();

    let dox = fs::read(build.path().join("examples.dox")).unwrap();
    assert!(dox.is_empty());
}
