//! File-like access to a NEXUS document.
//!
//! A [`NexusFile`] is opened in one [`Mode`] and is then either a reader or a
//! writer:
//!
//! - readers parse the whole source on first access, cache the result and
//!   hand entries out through a cursor ([`NexusFile::read_entry`] or the
//!   `Iterator` impl);
//! - writers buffer entries in a [`MatrixWriter`] and only write the complete
//!   document to the sink on [`NexusFile::close`].
//!
//! The source or sink is released on every exit path: `close` drops it, and
//! dropping an unclosed document closes it (errors are logged, not raised).
//! [`NexusFile::with_open`] closes explicitly and reports close errors.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};

use crate::model::{Dimensions, Entry};
use crate::nexus::{
    normalize_line_endings, parse_nexus_str, MatrixWriter, NexusData, NexusError, NexusResult,
};

/// How a document is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Read an existing file (`r`)
    Read,
    /// Read from in-memory text (`s`)
    Str,
    /// Read from an already-open reader (`f`)
    Handle,
    /// Append a document to a file, creating it if needed (`a`)
    Append,
    /// Create or truncate a file (`w`)
    Write,
}

impl Mode {
    /// Returns true for the modes that read entries.
    pub fn is_readable(self) -> bool {
        matches!(self, Mode::Read | Mode::Str | Mode::Handle)
    }

    /// Returns true for the modes that write entries.
    pub fn is_writable(self) -> bool {
        matches!(self, Mode::Append | Mode::Write)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Read => write!(f, "r"),
            Mode::Str => write!(f, "s"),
            Mode::Handle => write!(f, "f"),
            Mode::Append => write!(f, "a"),
            Mode::Write => write!(f, "w"),
        }
    }
}

impl FromStr for Mode {
    type Err = NexusError;

    /// File modes only look at the first letter (`"rb"` is read, `"w+"` is
    /// write); `s` and `f` must be given exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" => return Ok(Mode::Str),
            "f" => return Ok(Mode::Handle),
            _ => {}
        }
        match s.chars().next() {
            Some('r') => Ok(Mode::Read),
            Some('a') => Ok(Mode::Append),
            Some('w') => Ok(Mode::Write),
            _ => Err(NexusError::InvalidMode(s.to_string())),
        }
    }
}

/// Parse state of a reading document.
enum ReadState {
    /// Source not consumed yet
    Unparsed(Box<dyn Read>),
    /// Source consumed and parsed; `cursor` is the next entry to hand out
    Parsed { data: NexusData, cursor: usize },
    /// Reading or parsing failed; no entries are exposed
    Failed,
}

enum Inner {
    Reading(ReadState),
    Writing {
        sink: Box<dyn Write>,
        session: MatrixWriter,
    },
    Closed,
}

/// A NEXUS document opened for reading or writing.
pub struct NexusFile {
    mode: Mode,
    inner: Inner,
    dimensions: Dimensions,
    /// Set once the iterator has yielded an error
    fused: bool,
}

impl fmt::Debug for NexusFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &self.inner {
            Inner::Reading(ReadState::Unparsed(_)) => "unparsed",
            Inner::Reading(ReadState::Parsed { .. }) => "parsed",
            Inner::Reading(ReadState::Failed) => "failed",
            Inner::Writing { .. } => "writing",
            Inner::Closed => "closed",
        };
        f.debug_struct("NexusFile")
            .field("mode", &self.mode)
            .field("state", &state)
            .field("dimensions", &self.dimensions())
            .finish()
    }
}

impl NexusFile {
    fn reading(mode: Mode, source: Box<dyn Read>) -> Self {
        Self {
            mode,
            inner: Inner::Reading(ReadState::Unparsed(source)),
            dimensions: Dimensions::default(),
            fused: false,
        }
    }

    fn writing(mode: Mode, sink: Box<dyn Write>) -> Self {
        Self {
            mode,
            inner: Inner::Writing {
                sink,
                session: MatrixWriter::new(),
            },
            dimensions: Dimensions::default(),
            fused: false,
        }
    }

    /// Opens a file in [`Mode::Read`], [`Mode::Append`] or [`Mode::Write`].
    ///
    /// # Errors
    ///
    /// [`Mode::Str`] and [`Mode::Handle`] have no file to open and are
    /// rejected with [`NexusError::NotSupported`]; use
    /// [`NexusFile::from_text`] or [`NexusFile::from_reader`]. Reading a missing file is an
    /// I/O error.
    pub fn open<P: AsRef<Path>>(path: P, mode: Mode) -> NexusResult<Self> {
        let path = path.as_ref();
        debug!("opening {} in '{}' mode", path.display(), mode);
        match mode {
            Mode::Read => {
                let file = File::open(path)?;
                Ok(Self::reading(mode, Box::new(BufReader::new(file))))
            }
            Mode::Append => {
                let file = OpenOptions::new().append(true).create(true).open(path)?;
                Ok(Self::writing(mode, Box::new(BufWriter::new(file))))
            }
            Mode::Write => {
                let file = File::create(path)?;
                Ok(Self::writing(mode, Box::new(BufWriter::new(file))))
            }
            Mode::Str => Err(NexusError::NotSupported(
                "mode 's' has no file to open, use NexusFile::from_text".to_string(),
            )),
            Mode::Handle => Err(NexusError::NotSupported(
                "mode 'f' has no file to open, use NexusFile::from_reader".to_string(),
            )),
        }
    }

    /// Opens a document from a file name or raw text and a mode selector.
    ///
    /// With mode `"s"` the target is the document text itself; the file
    /// modes treat it as a path. `"f"` needs a reader, see
    /// [`NexusFile::from_reader`].
    pub fn open_with_mode(target: &str, mode: &str) -> NexusResult<Self> {
        match mode.parse::<Mode>()? {
            Mode::Str => Ok(Self::from_text(target)),
            mode => Self::open(target, mode),
        }
    }

    /// Reads a document from in-memory text.
    pub fn from_text(text: impl Into<String>) -> Self {
        let bytes = text.into().into_bytes();
        Self::reading(Mode::Str, Box::new(io::Cursor::new(bytes)))
    }

    /// Reads a document from an already-open reader.
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Self::reading(Mode::Handle, Box::new(reader))
    }

    /// Writes a document to an arbitrary sink on close.
    pub fn to_writer<W: Write + 'static>(writer: W) -> Self {
        Self::writing(Mode::Write, Box::new(writer))
    }

    /// Opens a file, runs `f` on it and closes it on every path.
    ///
    /// If `f` fails its error is returned and the close is best-effort;
    /// otherwise a failing close is reported.
    pub fn with_open<P, T, F>(path: P, mode: Mode, f: F) -> NexusResult<T>
    where
        P: AsRef<Path>,
        F: FnOnce(&mut NexusFile) -> NexusResult<T>,
    {
        let mut file = Self::open(path, mode)?;
        match f(&mut file) {
            Ok(value) => {
                file.close()?;
                Ok(value)
            }
            Err(e) => {
                if let Err(close_err) = file.close() {
                    debug!("close after error also failed: {}", close_err);
                }
                Err(e)
            }
        }
    }

    /// The mode the document was opened in.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns true once [`NexusFile::close`] has run.
    pub fn is_closed(&self) -> bool {
        matches!(self.inner, Inner::Closed)
    }

    /// Known dimensions.
    ///
    /// Readers report the header values once parsed (nothing before the
    /// first read); writers report the running entry count and the length
    /// fixed by the first entry.
    pub fn dimensions(&self) -> Dimensions {
        match &self.inner {
            Inner::Writing { session, .. } => session.dimensions(),
            _ => self.dimensions,
        }
    }

    /// Number of taxa, see [`NexusFile::dimensions`].
    pub fn ntax(&self) -> Option<usize> {
        self.dimensions().ntax
    }

    /// Number of characters, see [`NexusFile::dimensions`].
    pub fn nchar(&self) -> Option<usize> {
        self.dimensions().nchar
    }

    fn ensure_parsed(&mut self) -> NexusResult<()> {
        if self.is_closed() {
            return Err(NexusError::Closed);
        }
        if !self.mode.is_readable() {
            return Err(NexusError::NotReadable(self.mode.to_string()));
        }
        let Inner::Reading(state) = &mut self.inner else {
            return Err(NexusError::NotReadable(self.mode.to_string()));
        };

        // Failed stays in place if loading errors out
        *state = match std::mem::replace(state, ReadState::Failed) {
            ReadState::Unparsed(source) => {
                let data = load(source)?;
                self.dimensions = data.dimensions;
                ReadState::Parsed { data, cursor: 0 }
            }
            other => other,
        };

        match state {
            ReadState::Failed => Err(NexusError::PreviousParseFailed),
            _ => Ok(()),
        }
    }

    /// Returns the next entry, or `None` once all entries have been read.
    ///
    /// The first call reads and parses the whole source.
    pub fn read_entry(&mut self) -> NexusResult<Option<Entry>> {
        self.ensure_parsed()?;
        match &mut self.inner {
            Inner::Reading(ReadState::Parsed { data, cursor }) => {
                let entry = data.entries.get(*cursor).cloned();
                if entry.is_some() {
                    *cursor += 1;
                }
                Ok(entry)
            }
            _ => Err(NexusError::PreviousParseFailed),
        }
    }

    /// Returns all entries not read yet.
    pub fn read_entries(&mut self) -> NexusResult<Vec<Entry>> {
        let mut entries = Vec::new();
        while let Some(entry) = self.read_entry()? {
            entries.push(entry);
        }
        Ok(entries)
    }

    /// Same as [`NexusFile::read_entries`].
    pub fn read(&mut self) -> NexusResult<Vec<Entry>> {
        self.read_entries()
    }

    fn session(&mut self) -> NexusResult<&mut MatrixWriter> {
        if !self.is_closed() && !self.mode.is_writable() {
            return Err(NexusError::NotWritable(self.mode.to_string()));
        }
        match &mut self.inner {
            Inner::Writing { session, .. } => Ok(session),
            Inner::Reading(_) => Err(NexusError::NotWritable(self.mode.to_string())),
            Inner::Closed => Err(NexusError::Closed),
        }
    }

    /// Buffers an entry with the default wrapping.
    pub fn write(&mut self, entry: &Entry) -> NexusResult<()> {
        self.session()?.write(entry)
    }

    /// Buffers an entry wrapped at `wrap_at` columns with `endline` terminators.
    pub fn write_wrapped(&mut self, entry: &Entry, wrap_at: usize, endline: &str) -> NexusResult<()> {
        self.session()?.write_wrapped(entry, wrap_at, endline)
    }

    /// Buffers several entries with the default wrapping.
    pub fn write_entries<'a>(&mut self, entries: impl IntoIterator<Item = &'a Entry>) -> NexusResult<()> {
        self.session()?.write_entries(entries)
    }

    /// Flushes the underlying sink. Buffered entries are only written on close.
    pub fn flush(&mut self) -> NexusResult<()> {
        if let Inner::Writing { sink, .. } = &mut self.inner {
            sink.flush()?;
        }
        Ok(())
    }

    /// Closes the document, writing the buffered document for writers.
    ///
    /// The document stays in a closed state: later reads and writes fail
    /// with [`NexusError::Closed`] and closing twice is a no-op. `Drop` calls
    /// this too. The source or sink is released even when this fails.
    ///
    /// # Errors
    ///
    /// A writer whose session saw a write error fails with
    /// [`NexusError::SessionPoisoned`] and writes nothing.
    pub fn close(&mut self) -> NexusResult<()> {
        match std::mem::replace(&mut self.inner, Inner::Closed) {
            Inner::Writing { mut sink, session } => {
                self.dimensions = session.dimensions();
                let document = session.finish()?;
                sink.write_all(document.as_bytes())?;
                sink.flush()?;
                Ok(())
            }
            Inner::Reading(_) | Inner::Closed => Ok(()),
        }
    }
}

/// Reads the whole source, releases it and parses the content.
fn load(mut source: Box<dyn Read>) -> NexusResult<NexusData> {
    let mut content = String::new();
    source.read_to_string(&mut content)?;
    drop(source);
    parse_nexus_str(&normalize_line_endings(&content))
}

impl Iterator for NexusFile {
    type Item = NexusResult<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        match self.read_entry() {
            Ok(entry) => entry.map(Ok),
            Err(e) => {
                self.fused = true;
                Some(Err(e))
            }
        }
    }
}

impl Drop for NexusFile {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("NEXUS document dropped without a clean close: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const SIMPLE_TEXT: &str = "
#NEXUS
Begin data;
Dimensions ntax=4 nchar=15;
Format datatype=dna symbols=\"ACTG\" missing=? gap=-;
Matrix
Species1   atgctagctagctcg
Species2   atgcta??tag-tag
Species3   atgttagctag-tgg
Species4   atgttagctag-tag
 ;
End;
";

    fn test_data(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test_data")
            .join(name)
    }

    fn assert_simple_entries(entries: &[Entry]) {
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].name, "Species1");
        assert_eq!(entries[0].len(), 15);
        assert_eq!(entries[1].name, "Species2");
        assert_eq!(entries[1].len(), 15);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("r".parse::<Mode>().unwrap(), Mode::Read);
        assert_eq!("rb".parse::<Mode>().unwrap(), Mode::Read);
        assert_eq!("s".parse::<Mode>().unwrap(), Mode::Str);
        assert_eq!("f".parse::<Mode>().unwrap(), Mode::Handle);
        assert_eq!("a".parse::<Mode>().unwrap(), Mode::Append);
        assert_eq!("w+".parse::<Mode>().unwrap(), Mode::Write);
        assert!(matches!("q".parse::<Mode>(), Err(NexusError::InvalidMode(_))));
        assert!(matches!("".parse::<Mode>(), Err(NexusError::InvalidMode(_))));
        assert!(matches!("sx".parse::<Mode>(), Err(NexusError::InvalidMode(_))));

        assert!(Mode::Handle.is_readable());
        assert!(!Mode::Handle.is_writable());
        assert!(Mode::Append.is_writable());
    }

    #[test]
    fn test_mode_accessor() {
        let f = NexusFile::from_text(SIMPLE_TEXT);
        assert_eq!(f.mode(), Mode::Str);
        assert_eq!(f.mode().to_string(), "s");

        let f = NexusFile::open(test_data("simple.nexus"), Mode::Read).unwrap();
        assert_eq!(f.mode(), Mode::Read);
    }

    #[test]
    fn test_open_with_mode() {
        let mut f = NexusFile::open_with_mode(SIMPLE_TEXT, "s").unwrap();
        assert_simple_entries(&f.read_entries().unwrap());

        assert!(matches!(
            NexusFile::open_with_mode(SIMPLE_TEXT, "q"),
            Err(NexusError::InvalidMode(_))
        ));
        match NexusFile::open_with_mode("whatever", "f") {
            Err(NexusError::NotSupported(message)) => assert!(message.contains("from_reader")),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            NexusFile::open("whatever", Mode::Str),
            Err(NexusError::NotSupported(_))
        ));
    }

    #[test]
    fn test_read_from_string() {
        let mut f = NexusFile::from_text(SIMPLE_TEXT);
        assert_eq!(f.ntax(), None);
        let entries = f.read_entries().unwrap();
        f.close().unwrap();
        assert_simple_entries(&entries);
        assert_eq!(f.dimensions(), Dimensions::new(4, 15));
    }

    #[test]
    fn test_read_from_file() {
        let mut f = NexusFile::open(test_data("simple.nexus"), Mode::Read).unwrap();
        let entries = f.read().unwrap();
        f.close().unwrap();
        assert_simple_entries(&entries);
    }

    #[test]
    fn test_read_from_file_handle() {
        let fh = File::open(test_data("simple.nexus")).unwrap();
        let mut f = NexusFile::from_reader(fh);
        assert_eq!(f.mode(), Mode::Handle);
        assert_simple_entries(&f.read_entries().unwrap());
    }

    #[test]
    fn test_read_from_multiline_file() {
        let mut f = NexusFile::open(test_data("multiline.nexus"), Mode::Read).unwrap();
        let entries = f.read().unwrap();
        f.close().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Species1");
        assert_eq!(entries[0].len(), 30);
        assert_eq!(entries[1].name, "Species2");
        assert_eq!(entries[1].len(), 30);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let result = NexusFile::open(dir.path().join("missing.nexus"), Mode::Read);
        assert!(matches!(result, Err(NexusError::Io(_))));
    }

    #[test]
    fn test_iterate() {
        let mut count = 0;
        for entry in NexusFile::from_text(SIMPLE_TEXT) {
            assert!(!entry.unwrap().name.is_empty());
            count += 1;
        }
        assert_eq!(count, 4);

        let entries: NexusResult<Vec<Entry>> =
            NexusFile::open(test_data("simple.nexus"), Mode::Read).unwrap().collect();
        assert_simple_entries(&entries.unwrap());
    }

    #[test]
    fn test_cursor_advances_once() {
        let mut f = NexusFile::from_text(SIMPLE_TEXT);
        assert_eq!(f.read_entry().unwrap().unwrap().name, "Species1");
        let rest = f.read_entries().unwrap();
        assert_eq!(rest.len(), 3);
        assert_eq!(rest[0].name, "Species2");
        assert_eq!(f.read_entry().unwrap(), None);
        assert_eq!(f.read_entry().unwrap(), None);
        assert!(f.read_entries().unwrap().is_empty());
    }

    #[test]
    fn test_line_endings_normalized() {
        let windows = SIMPLE_TEXT.replace('\n', "\r\n");
        let mut f = NexusFile::from_reader(io::Cursor::new(windows.into_bytes()));
        let entries = f.read_entries().unwrap();
        assert_eq!(entries[3].sequence, "atgttagctag-tag");
    }

    #[test]
    fn test_parse_error_is_sticky() {
        let mut f = NexusFile::from_text(">seq1\nACGT\n");
        assert!(matches!(f.read_entry(), Err(NexusError::NotNexus)));
        assert!(matches!(f.read_entry(), Err(NexusError::PreviousParseFailed)));
        assert_eq!(f.ntax(), None);
    }

    #[test]
    fn test_iterator_fuses_after_error() {
        let text = "#NEXUS\nBEGIN DATA;\nDIMENSIONS NTAX=2 NCHAR=4;\nFORMAT INTERLEAVE;\nMATRIX\na AC\nb AC\n\na GT\nb GT\n;\nEND;\n";
        let mut f = NexusFile::from_text(text);
        assert!(matches!(f.next(), Some(Err(NexusError::NotSupported(_)))));
        assert!(f.next().is_none());
    }

    #[test]
    fn test_bad_value_to_write() {
        let dir = tempdir().unwrap();
        let mut f = NexusFile::open(dir.path().join("out.nexus"), Mode::Append).unwrap();
        assert!(matches!(
            f.write(&Entry::new("", "AGCT")),
            Err(NexusError::IncompleteEntry("name"))
        ));
        // The session is unusable after a failed write
        assert!(matches!(f.close(), Err(NexusError::SessionPoisoned)));
        assert!(f.is_closed());
        assert_eq!(fs::read_to_string(dir.path().join("out.nexus")).unwrap(), "");
    }

    #[test]
    fn test_basic_multi_entry_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.nexus");
        let entries = vec![Entry::new("a", "A"), Entry::new("g", "G")];

        let mut f = NexusFile::open(&path, Mode::Write).unwrap();
        f.write_entries(&entries).unwrap();
        assert_eq!(f.dimensions(), Dimensions::new(2, 1));
        f.close().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "#NEXUS\nBEGIN Data;\n  Dimensions ntax=2 nchar=1;\n  Format Datatype=DNA missing=? gap=-;\nMatrix\n\na  A\ng  G\n;\nEND;\n"
        );
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round_trip.nexus");
        let original = NexusFile::from_text(SIMPLE_TEXT).read_entries().unwrap();

        NexusFile::with_open(&path, Mode::Write, |f| {
            for entry in &original {
                f.write_wrapped(entry, 16, "\n")?;
            }
            Ok(())
        })
        .unwrap();

        let read_back = NexusFile::with_open(&path, Mode::Read, |f| f.read_entries()).unwrap();
        assert_eq!(read_back, original);
    }

    #[test]
    fn test_write_length_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mismatch.nexus");
        let result = NexusFile::with_open(&path, Mode::Write, |f| {
            f.write(&Entry::new("a", "ACGT"))?;
            f.write(&Entry::new("b", "ACGTA"))
        });
        assert!(matches!(result, Err(NexusError::SequenceLengthMismatch { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_append_mode_keeps_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("appended.nexus");
        fs::write(&path, "[existing]\n").unwrap();

        let mut f = NexusFile::open(&path, Mode::Append).unwrap();
        f.write(&Entry::new("a", "ACGT")).unwrap();
        f.close().unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[existing]\n#NEXUS\n"));
        assert!(content.ends_with("a  ACGT\n;\nEND;\n"));
    }

    #[test]
    fn test_drop_closes_writer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dropped.nexus");
        {
            let mut f = NexusFile::open(&path, Mode::Write).unwrap();
            f.write(&Entry::new("a", "ACGT")).unwrap();
        }
        let mut f = NexusFile::open(&path, Mode::Read).unwrap();
        assert_eq!(f.read_entries().unwrap(), vec![Entry::new("a", "ACGT")]);
    }

    #[test]
    fn test_wrong_direction() {
        let mut reader = NexusFile::from_text(SIMPLE_TEXT);
        assert!(matches!(
            reader.write(&Entry::new("a", "ACGT")),
            Err(NexusError::NotWritable(_))
        ));

        let dir = tempdir().unwrap();
        let mut writer = NexusFile::open(dir.path().join("w.nexus"), Mode::Write).unwrap();
        assert!(matches!(writer.read_entry(), Err(NexusError::NotReadable(_))));
        assert!(writer.next().is_some());
        assert!(writer.next().is_none());
    }

    #[test]
    fn test_closed_document() {
        let mut f = NexusFile::from_text(SIMPLE_TEXT);
        f.close().unwrap();
        assert!(f.is_closed());
        assert!(matches!(f.read_entry(), Err(NexusError::Closed)));
        f.close().unwrap();
    }

    #[test]
    fn test_close_twice_writes_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("twice.nexus");
        let mut f = NexusFile::open(&path, Mode::Write).unwrap();
        f.write(&Entry::new("a", "ACGT")).unwrap();
        f.close().unwrap();
        f.close().unwrap();
        assert!(f.is_closed());
        assert!(matches!(
            f.write(&Entry::new("b", "ACGT")),
            Err(NexusError::Closed)
        ));
        drop(f);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.matches("#NEXUS").count(), 1);
        assert_eq!(parse_nexus_str(&written).unwrap().entries.len(), 1);
    }
}
