//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one object per document with its sentences
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// Sentences of one input document
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Input file, or `<stdin>`
    pub source: String,
    /// Sentences in input order
    pub sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceData {
    /// Position of the sentence within its document
    pub index: usize,
    /// The sentence text
    pub text: String,
    /// Length of the sentence in characters
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_source(&mut self, source: &str) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            sentences: Vec::new(),
        });
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &str, index: usize) -> Result<()> {
        if self.documents.is_empty() {
            self.begin_source("")?;
        }
        if let Some(document) = self.documents.last_mut() {
            document.sentences.push(SentenceData {
                index,
                text: sentence.to_string(),
                length: sentence.chars().count(),
            });
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
