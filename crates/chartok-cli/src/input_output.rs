//! Line-oriented transcript streams for `cat`.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, ErrorKind, Write},
};

/// Map `-` to standard io.
fn squash_standard_io(path: &Option<String>) -> Option<&str> {
    match path.as_deref() {
        Some("-") | None => None,
        Some(p) => Some(p),
    }
}

/// Transcript input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input transcript; "-" may be used to indicate stdin.
    #[arg(long)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open the input as a stream of UTF-8 lines.
    pub fn open_lines(&self) -> io::Result<TranscriptLines<Box<dyn BufRead>>> {
        Ok(match squash_standard_io(&self.input) {
            None => {
                let reader: Box<dyn BufRead> = Box::new(BufReader::new(io::stdin().lock()));
                TranscriptLines::new(reader, "<stdin>")
            }
            Some(p) => {
                let reader: Box<dyn BufRead> = Box::new(BufReader::new(File::open(p)?));
                TranscriptLines::new(reader, p)
            }
        })
    }
}

/// Transcript output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output transcript; "-" may be used to indicate stdout.
    #[arg(long)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open the output as a line writer.
    pub fn open_writer(&self) -> io::Result<TranscriptWriter<Box<dyn Write>>> {
        let inner: Box<dyn Write> = match squash_standard_io(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(io::stdout().lock())),
        };
        Ok(TranscriptWriter::new(inner))
    }
}

/// Iterator over transcript lines, without their `\n` / `\r\n` terminators.
///
/// Invalid UTF-8 is an [`ErrorKind::InvalidData`] error naming the source
/// and the 1-based line number.
pub struct TranscriptLines<R: BufRead> {
    reader: R,
    source: String,
    line_no: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> TranscriptLines<R> {
    /// Wrap `reader`; `source` names it in errors.
    pub fn new<S: Into<String>>(
        reader: R,
        source: S,
    ) -> Self {
        Self {
            reader,
            source: source.into(),
            line_no: 0,
            buf: Vec::new(),
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }

        match std::str::from_utf8(&self.buf) {
            Ok(line) => Ok(Some(line.to_string())),
            Err(e) => Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("{}:{}: invalid UTF-8: {e}", self.source, self.line_no),
            )),
        }
    }
}

impl<R: BufRead> Iterator for TranscriptLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

/// Writes one transcript line at a time, flushing after each.
pub struct TranscriptWriter<W: Write> {
    inner: W,
    lines: usize,
}

impl<W: Write> TranscriptWriter<W> {
    /// Wrap `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner, lines: 0 }
    }

    /// Write `line` plus a newline, then flush.
    pub fn write_line(
        &mut self,
        line: &str,
    ) -> io::Result<()> {
        writeln!(self.inner, "{line}")?;
        self.inner.flush()?;
        self.lines += 1;
        Ok(())
    }

    /// The number of lines written.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Unwrap the inner writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn lines_of(bytes: &[u8]) -> Vec<io::Result<String>> {
        TranscriptLines::new(Cursor::new(bytes.to_vec()), "test.txt").collect()
    }

    #[test]
    fn test_transcript_lines() {
        let lines: Vec<String> = lines_of(b"ab cd\r\n<NOISE> x\n\nlast")
            .into_iter()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(lines, vec!["ab cd", "<NOISE> x", "", "last"]);

        assert!(lines_of(b"").is_empty());
    }

    #[test]
    fn test_transcript_lines_invalid_utf8() {
        let mut lines = lines_of(b"ok\ncaf\xe9\nafter\n").into_iter();
        assert_eq!(lines.next().unwrap().unwrap(), "ok");

        let err = lines.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert!(err.to_string().starts_with("test.txt:2: invalid UTF-8"));

        // The stream continues past a bad line.
        assert_eq!(lines.next().unwrap().unwrap(), "after");
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_transcript_writer() {
        let mut writer = TranscriptWriter::new(Vec::new());
        writer.write_line("a b <space>").unwrap();
        writer.write_line("").unwrap();
        assert_eq!(writer.lines(), 2);
        assert_eq!(writer.into_inner(), b"a b <space>\n\n".to_vec());
    }

    #[test]
    fn test_squash_standard_io() {
        assert_eq!(squash_standard_io(&None), None);
        assert_eq!(squash_standard_io(&Some("-".to_string())), None);
        assert_eq!(squash_standard_io(&Some("out.txt".to_string())), Some("out.txt"));
    }
}
