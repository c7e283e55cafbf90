//! PDF fixtures for CLI integration tests, built in-process with lopdf.

#![allow(dead_code)]

use std::path::Path;

use lopdf::{Object, Stream, dictionary};

/// A 2x2 table drawn with explicit black lines, cells `A | B` / `C | D`.
pub const GRID_CONTENT: &[u8] = b"
    1 w
    100 700 m 300 700 l S
    100 680 m 300 680 l S
    100 660 m 300 660 l S
    100 700 m 100 660 l S
    200 700 m 200 660 l S
    300 700 m 300 660 l S
    BT /F1 10 Tf 110 685 Td (A) Tj ET
    BT /F1 10 Tf 210 685 Td (B) Tj ET
    BT /F1 10 Tf 110 665 Td (C) Tj ET
    BT /F1 10 Tf 210 665 Td (D) Tj ET
";

/// A single line of text, no vector graphics.
pub const TEXT_ONLY_CONTENT: &[u8] = b"BT /F1 12 Tf 72 720 Td (Account Summary) Tj ET";

/// Build a PDF with one Letter-size page per content stream.
pub fn pdf_with_pages(contents: &[&[u8]]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let media_box = vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(612),
        Object::Integer(792),
    ];

    let mut page_ids = Vec::new();
    for content in contents {
        let stream = Stream::new(dictionary! {}, content.to_vec());
        let content_id = doc.add_object(stream);

        let resources = dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(font_id) },
        };

        let page_dict = dictionary! {
            "Type" => "Page",
            "MediaBox" => media_box.clone(),
            "Contents" => Object::Reference(content_id),
            "Resources" => resources,
        };
        page_ids.push(doc.add_object(page_dict));
    }

    let kids: Vec<Object> = page_ids.iter().map(|id| Object::Reference(*id)).collect();
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(contents.len() as i64),
    };
    let pages_id = doc.add_object(pages_dict);

    for &pid in &page_ids {
        if let Ok(page_obj) = doc.get_object_mut(pid) {
            if let Ok(dict) = page_obj.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
    }

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

pub fn grid_pdf() -> Vec<u8> {
    pdf_with_pages(&[GRID_CONTENT])
}

pub fn text_only_pdf() -> Vec<u8> {
    pdf_with_pages(&[TEXT_ONLY_CONTENT])
}

/// Write `bytes` to `dir/name`, creating parent directories.
pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, bytes).unwrap();
}
