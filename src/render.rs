//! Document writer — serialize built records as the packed XML document.
//!
//! Records are fully built before this module sees them, so a dropped method
//! never leaves a half-written `method` element behind.

use crate::error::Result;
use crate::model::*;
use crate::record;
use crate::schema::Element;
use crate::xml::XmlWriter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriterOptions {
    /// Spaces per nesting level; `None` writes compact output.
    pub indent: Option<usize>,
}

/// Build records for `entries` and write the document to the file at `path`.
///
/// The file is only created once every record has been built. On failure the
/// file content is undefined and must not be used.
pub fn pack_methods(
    path: &Path,
    entries: &[MethodEntry],
    options: WriterOptions,
) -> Result<Document> {
    let doc = record::build_document(entries)?;
    let file = File::create(path)?;
    write_document(BufWriter::new(file), &doc, options)?;
    Ok(doc)
}

/// Build records for `entries` and write the document to `out`.
pub fn pack_to_writer<W: Write>(
    out: W,
    entries: &[MethodEntry],
    options: WriterOptions,
) -> Result<Document> {
    let doc = record::build_document(entries)?;
    write_document(out, &doc, options)?;
    Ok(doc)
}

/// Serialize an already built document.
pub fn write_document<W: Write>(out: W, doc: &Document, options: WriterOptions) -> Result<W> {
    let mut w = XmlWriter::with_indent(out, options.indent);
    w.start_document()?;
    w.start_element(Element::Methods.as_str())?;
    for method in &doc.methods {
        write_method(&mut w, method)?;
        tracing::debug!(method = %method.description.name, "wrote method");
    }
    w.end_element()?;
    w.finish()
}

/// Serialize a document into a string.
pub fn render_string(doc: &Document, options: WriterOptions) -> Result<String> {
    let bytes = write_document(Vec::new(), doc, options)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn write_method<W: Write>(w: &mut XmlWriter<W>, method: &MethodRecord) -> Result<()> {
    w.start_element(Element::Method.as_str())?;
    if let Some(ref doc) = method.documentation {
        write_documentation(w, doc)?;
    }
    write_description(w, &method.description)?;
    if let Some(ref contract) = method.contract {
        write_contract(w, contract)?;
    }
    w.end_element()
}

fn write_documentation<W: Write>(w: &mut XmlWriter<W>, doc: &DocumentationBlock) -> Result<()> {
    w.start_element(Element::JavaDoc.as_str())?;
    for segment in &doc.segments {
        w.text_element(Element::from(segment.tag).as_str(), &segment.text)?;
    }
    w.end_element()
}

fn write_description<W: Write>(w: &mut XmlWriter<W>, desc: &MethodDescription) -> Result<()> {
    w.start_element(Element::Description.as_str())?;
    w.text_element(Element::Name.as_str(), &desc.name)?;
    w.text_element(Element::Type.as_str(), desc.return_type.name())?;
    w.start_element(Element::Parameters.as_str())?;
    for param in &desc.parameters {
        w.start_element(Element::Param.as_str())?;
        w.text_element(Element::Type.as_str(), param.ty.name())?;
        w.text_element(Element::Name.as_str(), &param.name)?;
        w.end_element()?;
    }
    w.end_element()?;
    w.text_element(Element::Owner.as_str(), desc.owner.name())?;
    w.end_element()
}

fn write_contract<W: Write>(w: &mut XmlWriter<W>, contract: &Contract) -> Result<()> {
    w.start_element(Element::Contract.as_str())?;
    write_predicates(w, Element::Enters, Element::Enter, &contract.enter)?;
    write_predicates(w, Element::Exits, Element::Exit, &contract.exit)?;
    w.start_element(Element::ExitIds.as_str())?;
    for group in &contract.exits_by_id {
        w.text_element(Element::ExitId.as_str(), &group.id.to_string())?;
        write_predicates(w, Element::Exits, Element::Exit, &group.exits)?;
    }
    w.end_element()?;
    w.end_element()
}

fn write_predicates<W: Write>(
    w: &mut XmlWriter<W>,
    container: Element,
    item: Element,
    predicates: &[String],
) -> Result<()> {
    w.start_element(container.as_str())?;
    for predicate in predicates {
        w.text_element(item.as_str(), predicate)?;
    }
    w.end_element()
}
