use crate::utils;
use crate::{Context, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write, pipe};
use std::path::Path;
use std::process::{Command, Stdio};

/// Suffix of example source files listed in the documentation.
const SOURCE_SUFFIX: &str = ".cc";
/// Prefix of the compiled example binaries produced by the build.
const BINARY_PREFIX: &str = "y3c-example-";
/// Example sources live here, relative to the library source root.
const SOURCES_DIR: &str = "examples";
/// Aggregated output consumed by the Doxygen run.
const OUTPUT_NAME: &str = "examples.dox";

/// Runs every compiled example and renders its output into `examples.dox`.
///
/// Example sources are enumerated from `examples/` under the current working
/// directory (the library source root); binaries are expected under
/// `<build_dir>/examples/`. See [`render_example_docs_from`].
///
/// # Errors
///
/// Returns an error if the sources directory cannot be read, a binary cannot
/// be launched, or the output file cannot be written.
pub fn render_example_docs(build_dir: &Path) -> Result<()> {
    render_example_docs_from(Path::new(SOURCES_DIR), build_dir)
}

/// Runs every compiled example found for the sources in `sources_dir` and
/// writes one Doxygen block per example to `<build_dir>/examples.dox`.
///
/// Sources are the `*.cc` entries of `sources_dir`, processed in sorted name
/// order. The binary for `<name>.cc` is `<build_dir>/examples/y3c-example-<name>`.
/// Each binary runs with no arguments and no input; stdout and stderr are
/// captured as a single interleaved stream. A non-zero exit status is not an
/// error, so examples may demonstrate failure output. The output file is
/// truncated at the start of the run and written block by block, so an abort
/// mid-run leaves it incomplete.
///
/// # Errors
///
/// Returns an error if:
/// - `sources_dir` cannot be read
/// - A binary is missing or fails to launch
/// - `examples.dox` cannot be created or written
pub fn render_example_docs_from(sources_dir: &Path, build_dir: &Path) -> Result<()> {
    utils::print_header("Rendering example output documentation...");

    let sources = example_sources(sources_dir)?;

    if sources.is_empty() {
        utils::print_warning("⚠ No example sources found");
    }

    let binaries_dir = build_dir.join("examples");
    let dox_path = build_dir.join(OUTPUT_NAME);
    let file = File::create(&dox_path)
        .with_context(|| format!("Failed to create {}", dox_path.display()))?;
    let mut out = BufWriter::new(file);

    for name in &sources {
        let Some(stem) = name.strip_suffix(SOURCE_SUFFIX) else {
            continue;
        };

        utils::print_step("Running", name);

        let binary = binaries_dir.join(format!("{BINARY_PREFIX}{stem}"));
        let output = capture_combined_output(&binary)?;
        write_example_block(&mut out, name, &output)
            .with_context(|| format!("Failed to write {}", dox_path.display()))?;

        utils::print_step_success(name);
    }

    out.flush()
        .with_context(|| format!("Failed to write {}", dox_path.display()))?;

    utils::print_success("✓ Example documentation rendered!");
    Ok(())
}

/// Returns the sorted `*.cc` entry names of `dir`.
///
/// # Errors
///
/// Returns an error if the directory or one of its entries cannot be read.
pub fn example_sources(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to read example sources in {}", dir.display()))?
    {
        let entry = entry?;
        if let Some(name) = entry.file_name().to_str()
            && name.ends_with(SOURCE_SUFFIX)
        {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Runs `binary` to completion and returns everything it wrote to stdout and
/// stderr as one stream, in the order it was produced.
///
/// Both streams share a single pipe so the interleaving the binary produced
/// is preserved. The pipe is drained to EOF before waiting, so a chatty
/// example cannot deadlock on a full pipe. The exit status is deliberately
/// not checked.
fn capture_combined_output(binary: &Path) -> Result<String> {
    let (mut reader, writer) = pipe()?;

    let mut child = Command::new(binary)
        .stdin(Stdio::null())
        .stdout(writer.try_clone()?)
        .stderr(writer)
        .spawn()
        .with_context(|| format!("Failed to launch example binary {}", binary.display()))?;

    // The parent's write ends go out of scope with the spawn statement,
    // so EOF arrives once the child closes its side.
    let mut raw = Vec::new();
    reader
        .read_to_end(&mut raw)
        .with_context(|| format!("Failed to capture output of {}", binary.display()))?;

    child
        .wait()
        .with_context(|| format!("Failed to wait for {}", binary.display()))?;

    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Writes one Doxygen comment block for `source_name`: the `\example` tag,
/// a header line, and the captured `output` split on `\n` inside a fenced
/// quote, each line prefixed with `> `.
///
/// Output ending in a newline yields a final empty quoted line, and the
/// block for a silent binary still contains one.
fn write_example_block(out: &mut impl Write, source_name: &str, output: &str) -> io::Result<()> {
    writeln!(out, "/*!")?;
    writeln!(out, "\\example {source_name}")?;
    writeln!(out, "> example output:")?;
    writeln!(out, "> ```")?;
    for line in output.split('\n') {
        writeln!(out, "> {line}")?;
    }
    writeln!(out, "> ```")?;
    writeln!(out, "*/")?;
    Ok(())
}
