//! Builds small PDFs with one text string per page.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::path::Path;

/// Create a PDF whose pages each show one line of ASCII text.
pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    build_pdf(pages.iter().map(|text| text_operations(text)).collect())
}

/// Like [`pdf_with_pages`], but page `unreadable` (1-indexed) selects its
/// font with a number instead of a name, so its text cannot be extracted.
pub fn pdf_with_unreadable_page(pages: &[&str], unreadable: u32) -> Vec<u8> {
    build_pdf(
        pages
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let mut operations = text_operations(text);
                if i as u32 + 1 == unreadable {
                    operations[1] = Operation::new("Tf", vec![1.into(), 12.into()]);
                }
                operations
            })
            .collect(),
    )
}

fn text_operations(text: &str) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![72.into(), 720.into()]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]
}

fn build_pdf(pages: Vec<Vec<Operation>>) -> Vec<u8> {
    let page_count = pages.len();
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count as i64,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

/// Write a generated PDF to `path`.
pub fn write_pdf(path: &Path, pages: &[&str]) {
    std::fs::write(path, pdf_with_pages(pages)).unwrap();
}
