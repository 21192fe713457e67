use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::input::InputError;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz")) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Calls `f` with each trimmed, non-empty line and its 1-based number.
pub fn for_each_line<F>(path: &Path, mut f: F) -> Result<(), InputError>
where
    F: FnMut(usize, &str) -> Result<(), InputError>,
{
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    let mut line_no = 0usize;
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        f(line_no, line)?;
    }
    Ok(())
}
