//! Binary encoding of distribution tables.
//!
//! # Layout
//!
//! All integers and floats are little-endian.
//!
//! ```text
//! <label>.phi.bin                  <label>.theta.bin
//! ┌──────────────────────────┐     ┌──────────────────────────┐
//! │ u64 num_topics           │     │ u64 num_docs             │
//! │ u64 num_words            │     │ u64 num_topics           │
//! ├──────────────────────────┤     ├──────────────────────────┤
//! │ num_topics multinomials  │     │ num_docs multinomials    │
//! │ over [0, num_words)      │     │ over [0, num_topics)     │
//! └──────────────────────────┘     └──────────────────────────┘
//! ```
//!
//! Each multinomial record is self-describing (`u64 len` + `len` f64
//! values, see [`Multinomial`]). The theta header carries `num_topics` only
//! for symmetry with the phi header; readers consume and keep it but need
//! only the record count.
//!
//! Decoding reads the header first, then exactly the declared number of
//! records. A stream that ends earlier fails with
//! [`PersistenceError::Truncated`]; a partial table is never returned.
//! Row normalization is not validated at load time.

use std::io::{Read, Write};

use crate::persistence::error::{PersistenceError, PersistenceResult};
use crate::progress::Progress;
use crate::stats::{DocTopicTable, Multinomial, TopicTermTable};

/// Encode a topic-term table. Rows are written in topic id order.
pub fn write_topic_term<W: Write>(
    writer: &mut W,
    table: &TopicTermTable,
) -> PersistenceResult<()> {
    write_u64(writer, table.topics.len() as u64)?;
    write_u64(writer, table.num_words)?;
    for row in &table.topics {
        row.write_to(writer)?;
    }
    Ok(())
}

/// Encode a document-topic table. Rows are written in document id order.
pub fn write_doc_topic<W: Write>(
    writer: &mut W,
    table: &DocTopicTable,
) -> PersistenceResult<()> {
    write_u64(writer, table.docs.len() as u64)?;
    write_u64(writer, table.num_topics)?;
    for row in &table.docs {
        row.write_to(writer)?;
    }
    Ok(())
}

/// Decode a topic-term table. `file` identifies the stream in errors.
pub fn read_topic_term<R: Read>(
    reader: &mut R,
    file: &str,
    progress: Option<&dyn Progress>,
) -> PersistenceResult<TopicTermTable> {
    let num_topics = read_header_u64(reader, file)?;
    let num_words = read_header_u64(reader, file)?;
    let topics = read_rows(reader, file, num_topics, progress)?;
    Ok(TopicTermTable { num_words, topics })
}

/// Decode a document-topic table. `file` identifies the stream in errors.
pub fn read_doc_topic<R: Read>(
    reader: &mut R,
    file: &str,
    progress: Option<&dyn Progress>,
) -> PersistenceResult<DocTopicTable> {
    let num_docs = read_header_u64(reader, file)?;
    let num_topics = read_header_u64(reader, file)?;
    let docs = read_rows(reader, file, num_docs, progress)?;
    Ok(DocTopicTable { num_topics, docs })
}

fn write_u64<W: Write>(writer: &mut W, value: u64) -> PersistenceResult<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

fn read_header_u64<R: Read>(reader: &mut R, file: &str) -> PersistenceResult<u64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            PersistenceError::Format {
                file: file.to_string(),
                message: "stream too short for table header".to_string(),
            }
        } else {
            PersistenceError::Io(e)
        }
    })?;
    Ok(u64::from_le_bytes(buf))
}

fn read_rows<R: Read>(
    reader: &mut R,
    file: &str,
    expected: u64,
    progress: Option<&dyn Progress>,
) -> PersistenceResult<Vec<Multinomial>> {
    let mut rows = Vec::with_capacity(usize::try_from(expected).unwrap_or(0).min(1 << 20));
    for read in 0..expected {
        let row = Multinomial::read_from(reader).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                PersistenceError::Truncated {
                    file: file.to_string(),
                    read,
                    expected,
                }
            } else {
                PersistenceError::Io(e)
            }
        })?;
        rows.push(row);
        if let Some(p) = progress {
            p.record(read + 1, expected);
        }
    }
    Ok(rows)
}
