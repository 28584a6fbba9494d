//! Reading documents from files or stdin and writing results to files or stdout.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Path argument meaning stdin.
pub const STDIN: &str = "-";

/// Read a whole document from `path`, or from stdin when `path` is `-`.
pub fn read_input(path: &str) -> anyhow::Result<String> {
    if path == STDIN {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("cannot read input file: {path}"))
}

/// Where `--output` points once a directory target is expanded.
///
/// An existing directory gets `default_name` appended; anything else is
/// used as the file path itself.
pub fn output_path(output: &Path, default_name: &str) -> PathBuf {
    if output.is_dir() {
        output.join(default_name)
    } else {
        output.to_path_buf()
    }
}

/// Write `contents` to the output file, or to stdout when none is given.
///
/// `default_name` names the file when the output is a directory.
pub fn write_output(
    output: Option<&Path>,
    default_name: &str,
    contents: &str,
) -> anyhow::Result<()> {
    let target = output.map(|o| output_path(o, default_name));

    let mut writer: Box<dyn Write> = if let Some(path) = &target {
        Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("cannot create output file: {}", path.display()))?,
        )
    } else {
        Box::new(std::io::stdout().lock())
    };

    writer.write_all(contents.as_bytes())?;
    if !contents.ends_with('\n') {
        writeln!(writer)?;
    }
    writer.flush()?;

    if let Some(path) = &target {
        eprintln!("Wrote {}", path.display());
    }

    Ok(())
}
