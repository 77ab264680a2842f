use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Opens the animation destination: the named file, or stdout when no path
/// is given. The writer is buffered; callers flush it when done.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
