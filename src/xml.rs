//! Streaming XML writer.
//!
//! Writes straight through to the underlying sink and keeps only the stack of
//! open element names, which is enough to reject unbalanced trees.

use crate::error::{PackError, Result};
use std::io::Write;

struct Frame {
    name: &'static str,
    has_children: bool,
}

pub struct XmlWriter<W: Write> {
    out: W,
    stack: Vec<Frame>,
    indent: Option<usize>,
    written: bool,
}

impl<W: Write> XmlWriter<W> {
    /// Compact writer: no whitespace between elements.
    pub fn new(out: W) -> Self {
        Self::with_indent(out, None)
    }

    /// Writer that puts each element on its own line, `indent` spaces per level.
    /// Elements holding only text stay on one line.
    pub fn with_indent(out: W, indent: Option<usize>) -> Self {
        Self {
            out,
            stack: Vec::new(),
            indent,
            written: false,
        }
    }

    pub fn start_document(&mut self) -> Result<()> {
        self.out
            .write_all(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        self.written = true;
        Ok(())
    }

    pub fn start_element(&mut self, name: &'static str) -> Result<()> {
        if let Some(parent) = self.stack.last_mut() {
            parent.has_children = true;
        }
        if self.written {
            self.newline(self.stack.len())?;
        }
        write!(self.out, "<{}>", name)?;
        self.stack.push(Frame {
            name,
            has_children: false,
        });
        self.written = true;
        Ok(())
    }

    pub fn characters(&mut self, text: &str) -> Result<()> {
        if self.stack.is_empty() {
            return Err(PackError::NoOpenElement);
        }
        if let Some(ch) = text.chars().find(|&c| !is_xml_char(c)) {
            return Err(PackError::InvalidChar { ch });
        }
        self.out.write_all(escape(text).as_bytes())?;
        Ok(())
    }

    pub fn end_element(&mut self) -> Result<()> {
        let frame = self.stack.pop().ok_or(PackError::NoOpenElement)?;
        if frame.has_children {
            self.newline(self.stack.len())?;
        }
        write!(self.out, "</{}>", frame.name)?;
        Ok(())
    }

    /// `<name>text</name>`
    pub fn text_element(&mut self, name: &'static str, text: &str) -> Result<()> {
        self.start_element(name)?;
        self.characters(text)?;
        self.end_element()
    }

    /// Check that every element was closed, flush, and hand the sink back.
    pub fn finish(mut self) -> Result<W> {
        if !self.stack.is_empty() {
            return Err(PackError::Unbalanced {
                open: self.stack.iter().map(|f| f.name).collect(),
            });
        }
        if self.indent.is_some() && self.written {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn newline(&mut self, depth: usize) -> Result<()> {
        if let Some(width) = self.indent {
            write!(self.out, "\n{:1$}", "", width * depth)?;
        }
        Ok(())
    }
}

/// Whether `c` may appear in an XML 1.0 document at all.
pub fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
        || c >= '\u{10000}'
}

/// Escape character data.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
