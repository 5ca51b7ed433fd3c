//! CSV encoder for record collections.
//!
//! The [`Encoder`] wraps a `csv::Writer` and turns a slice of
//! [`Record`](crate::Record) values into a header row followed by one data
//! row per element, with RFC 4180 quoting handled by the csv crate.

use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::error::EncodeError;
use crate::schema::Record;

/// CSV encoder for a homogeneous collection of records.
///
/// The `Encoder` derives column headers once from the record type's field
/// declarations (serialization alias if present, else field name), then
/// writes one row of stringified cells per element. All delimiter and quote
/// escaping follows RFC 4180 and is delegated to the underlying csv crate:
/// a cell containing `,`, `"`, `\r`, or `\n` is quoted, embedded `"` is
/// doubled, and rows end with `\n`.
///
/// The header row and each data row are flushed individually, so the sink
/// sees partial progress even when a later record fails. The encoder holds
/// no state across calls beyond the wrapped sink; one `encode` call owns the
/// sink for its duration and callers must serialize concurrent use.
///
/// # Example
///
/// ```
/// use csvenc::Encoder;
///
/// struct Book {
///     title: String,
///     pages: u32,
/// }
///
/// csvenc::record!(Book {
///     title as "title": text,
///     pages as "pages": uint,
/// });
///
/// let mut encoder = Encoder::new(Vec::new());
/// encoder.encode(&[Book { title: "Dune".to_string(), pages: 412 }])?;
/// let out = encoder.into_inner()?;
/// assert_eq!(out, b"title,pages\nDune,412\n");
/// # Ok::<(), csvenc::EncodeError>(())
/// ```
pub struct Encoder<W: Write> {
    /// The underlying CSV writer wrapping the caller's sink.
    writer: Writer<W>,
}

impl<W: Write> Encoder<W> {
    /// Creates an encoder over the given sink.
    ///
    /// Nothing is validated or written at construction time; the header row
    /// is only produced by [`encode`](Encoder::encode) once a non-empty
    /// collection arrives.
    pub fn new(sink: W) -> Self {
        Self {
            writer: Writer::from_writer(sink),
        }
    }

    /// Encodes a collection of records as CSV: one header row, then one data
    /// row per element, each flushed as soon as it is complete.
    ///
    /// An empty slice is a no-op success: nothing is written, not even the
    /// header row. Element-level handles work through the blanket `Record`
    /// impls, so `&[R]`, `&[&R]`, and `&[Box<R>]` all encode identically.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::UnsupportedType`] when a field has no CSV
    /// stringification rule, and propagates csv/I/O failures from the sink
    /// verbatim. The first error aborts the call; rows flushed for strictly
    /// preceding records remain in the sink, and no later rows are
    /// attempted.
    pub fn encode<R: Record>(&mut self, records: &[R]) -> Result<(), EncodeError> {
        if records.is_empty() {
            debug!("empty record collection, nothing written");
            return Ok(());
        }

        let fields = R::fields();
        debug!(
            rows = records.len(),
            columns = fields.len(),
            "encoding record collection"
        );

        self.writer.write_record(fields.iter().map(|f| f.header()))?;
        self.writer.flush()?;

        for (row, record) in records.iter().enumerate() {
            let mut cells: Vec<Cow<'_, str>> = Vec::with_capacity(fields.len());
            for (index, field) in fields.iter().enumerate() {
                let value = record.field(index).ok_or(EncodeError::UnsupportedType {
                    row,
                    field: field.name,
                })?;
                cells.push(value.render());
            }
            self.writer.write_record(cells.iter().map(|c| c.as_bytes()))?;
            self.writer.flush()?;
        }

        debug!(rows = records.len(), "record collection encoded");
        Ok(())
    }

    /// Flushes any buffered output to the sink.
    pub fn flush(&mut self) -> Result<(), EncodeError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes remaining output and returns the underlying sink.
    pub fn into_inner(self) -> Result<W, EncodeError> {
        self.writer
            .into_inner()
            .map_err(|e| EncodeError::Io(e.into_error()))
    }
}

impl Encoder<File> {
    /// Creates an encoder writing to a file at the given path.
    ///
    /// The file is created (or truncated) immediately; the header row is
    /// still deferred to the first non-empty [`encode`](Encoder::encode)
    /// call.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, EncodeError> {
        Ok(Self {
            writer: Writer::from_path(path)?,
        })
    }
}
