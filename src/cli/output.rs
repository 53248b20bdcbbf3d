use std::io::{self, BufWriter, Stdout, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// Destination of the result table. Rows meant for a file are staged in a temporary file in the
/// same directory, which replaces the requested path only after a successful run.
pub enum Output {
    Stdout(BufWriter<Stdout>),
    File { path: PathBuf, staged: BufWriter<NamedTempFile> },
}

impl Output {
    pub fn stdout() -> Self {
        Output::Stdout(BufWriter::new(io::stdout()))
    }

    pub fn file(path: PathBuf) -> Result<Self> {
        let dir = match path.parent() {
            Some(x) if !x.as_os_str().is_empty() => x,
            _ => Path::new("."),
        };
        let staged = tempfile::Builder::new()
            .prefix(".contigfeat-")
            .suffix(".tsv")
            .tempfile_in(dir)
            .with_context(|| format!("Failed to create a temporary output file in {}", dir.display()))?;
        Ok(Output::File { path, staged: BufWriter::new(staged) })
    }

    /// Flush all rows. A staged file is moved to the requested path.
    pub fn finish(self) -> Result<()> {
        match self {
            Output::Stdout(mut stdout) => stdout.flush().context("Failed to write results to stdout"),
            Output::File { path, staged } => {
                let staged = staged
                    .into_inner()
                    .map_err(|x| x.into_error())
                    .context("Failed to write results to the output TSV file")?;
                staged.persist(&path).with_context(|| format!("Failed to save results to {}", path.display()))?;
                Ok(())
            }
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(x) => x.write(buf),
            Output::File { staged, .. } => staged.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(x) => x.flush(),
            Output::File { staged, .. } => staged.flush(),
        }
    }
}
