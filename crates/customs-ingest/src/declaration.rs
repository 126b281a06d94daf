use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::Event;

use customs_model::ImportError;
use customs_model::columns::{ITEM_NO, TAX_BASE, TAX_DECLARED, TAX_RATE};

/// KDV (value-added tax) code in the `Vergi` list. When several taxes
/// attach to one item, the KDV entry populates the tax columns.
const KDV_TAX_CODE: &str = "40";

/// Container elements whose text never becomes a header field.
const CONTAINER_TAGS: &[&str] = &[
    "BeyannameBilgi",
    "kalem",
    "Vergiler",
    "Vergi",
    "Dokumanlar",
    "Dokuman",
    "Sorular_cevaplar",
    "Soru_Cevap",
    "firma",
    "Ozetbeyan",
];

/// One parsed declaration document, flattened to line-item rows.
#[derive(Debug, Clone)]
pub struct DeclarationFile {
    pub path: PathBuf,
    /// Column order as derived from the document.
    pub columns: Vec<String>,
    /// One map of field values per line item.
    pub rows: Vec<BTreeMap<String, String>>,
}

impl DeclarationFile {
    pub fn item_count(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Default)]
struct ParsedDocument {
    header: Vec<(String, String)>,
    items: Vec<Vec<(String, String)>>,
    taxes: Vec<BTreeMap<String, String>>,
}

/// Parses one declaration XML file.
///
/// Unreadable files and malformed XML produce an [`ImportError`] scoped
/// to this file; a folder import keeps going with the remaining files.
pub fn read_declaration(path: &Path) -> Result<DeclarationFile, ImportError> {
    let content = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = parse_document(&content).map_err(|message| ImportError::Xml {
        path: path.to_path_buf(),
        message,
    })?;
    if parsed.items.is_empty() {
        return Err(ImportError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(assemble(path, parsed))
}

fn parse_document(content: &str) -> Result<ParsedDocument, String> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut doc = ParsedDocument::default();
    let mut stack: Vec<String> = Vec::new();
    let mut kalem_depth = 0usize;
    let mut vergi_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                if name == "kalem" {
                    kalem_depth += 1;
                    doc.items.push(Vec::new());
                } else if name == "Vergi" {
                    vergi_depth += 1;
                    doc.taxes.push(BTreeMap::new());
                }
                stack.push(name);
            }
            Ok(Event::End(_)) => {
                if let Some(name) = stack.pop() {
                    if name == "kalem" {
                        kalem_depth = kalem_depth.saturating_sub(1);
                    } else if name == "Vergi" {
                        vergi_depth = vergi_depth.saturating_sub(1);
                    }
                }
            }
            Ok(Event::Text(text)) => {
                let value = text
                    .xml_content()
                    .map_err(|err| err.to_string())?
                    .trim()
                    .to_string();
                if value.is_empty() {
                    continue;
                }
                let Some(tag) = stack.last() else { continue };
                if CONTAINER_TAGS.contains(&tag.as_str()) {
                    continue;
                }
                if vergi_depth > 0 {
                    if let Some(tax) = doc.taxes.last_mut() {
                        tax.insert(tag.clone(), value);
                    }
                } else if kalem_depth > 0 {
                    if let Some(item) = doc.items.last_mut() {
                        item.push((tag.clone(), value));
                    }
                } else if stack.len() >= 2
                    && stack[stack.len() - 2] == "BeyannameBilgi"
                    && !doc.header.iter().any(|(name, _)| name == tag)
                {
                    doc.header.push((tag.clone(), value));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(err.to_string()),
        }
    }
    Ok(doc)
}

fn assemble(path: &Path, doc: ParsedDocument) -> DeclarationFile {
    let mut columns: Vec<String> = vec![ITEM_NO.to_string()];
    let mut rows: Vec<BTreeMap<String, String>> = Vec::new();

    for (idx, item) in doc.items.iter().enumerate() {
        let item_no = (idx + 1).to_string();
        let mut row = BTreeMap::new();
        row.insert(ITEM_NO.to_string(), item_no.clone());

        // A tag repeated within one kalem keeps its first value. The
        // synthetic item number is seeded before the item fields, so a
        // literal Kalem_No tag in the document never displaces it.
        for (tag, value) in item {
            if !columns.iter().any(|column| column == tag) {
                columns.push(tag.clone());
            }
            row.entry(tag.clone()).or_insert_with(|| value.clone());
        }

        if let Some(tax) = item_tax(&doc.taxes, &item_no) {
            for (column, source_tag) in [
                (TAX_RATE, "Oran"),
                (TAX_BASE, "Vergi_matrahi"),
                (TAX_DECLARED, "Miktar"),
            ] {
                if let Some(value) = tax.get(source_tag) {
                    if !columns.iter().any(|existing| existing == column) {
                        columns.push(column.to_string());
                    }
                    row.insert(column.to_string(), value.clone());
                }
            }
        }

        // Header fields broadcast onto every item, item fields winning.
        for (tag, value) in &doc.header {
            if !columns.iter().any(|column| column == tag) {
                columns.push(tag.clone());
            }
            row.entry(tag.clone()).or_insert_with(|| value.clone());
        }

        rows.push(row);
    }

    tracing::debug!(
        path = %path.display(),
        items = rows.len(),
        taxes = doc.taxes.len(),
        "parsed declaration"
    );

    DeclarationFile {
        path: path.to_path_buf(),
        columns,
        rows,
    }
}

/// The tax entry for one line item: the KDV entry when present,
/// otherwise the first entry attached to the item.
fn item_tax<'a>(
    taxes: &'a [BTreeMap<String, String>],
    item_no: &str,
) -> Option<&'a BTreeMap<String, String>> {
    let mut first = None;
    for tax in taxes {
        if tax.get("Kalem_no").map(String::as_str) != Some(item_no) {
            continue;
        }
        if tax.get("Kod").map(String::as_str) == Some(KDV_TAX_CODE) {
            return Some(tax);
        }
        if first.is_none() {
            first = Some(tax);
        }
    }
    first
}
