use std::path::Path;

use statement_tables::{TablesResult, extract_tables_from_pdf, output_path};

use crate::cli::{MarkerArgs, OutputFormat};
use crate::shared::{extract_options, report_error};

pub fn run(file: &Path, marker: &MarkerArgs, format: &OutputFormat) -> Result<(), i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let result =
        extract_tables_from_pdf(file, &extract_options(marker)).map_err(|e| report_error(&e))?;

    match format {
        OutputFormat::Text => write_text(&result),
        OutputFormat::Json => write_json(&result),
    }
}

fn write_text(result: &TablesResult) -> Result<(), i32> {
    println!("table\tpage\ttier\trows\tcols\tx0\ttop\tx1\tbottom");
    for (i, table) in result.tables.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{:.2}\t{:.2}\t{:.2}\t{:.2}",
            i + 1,
            table.page + 1,
            table.tier,
            table.rows.len(),
            table.column_count(),
            table.bbox.x0,
            table.bbox.top,
            table.bbox.x1,
            table.bbox.bottom,
        );
    }
    Ok(())
}

fn write_json(result: &TablesResult) -> Result<(), i32> {
    let tables: Vec<serde_json::Value> = result
        .tables
        .iter()
        .map(|table| {
            serde_json::json!({
                "page": table.page + 1,
                "tier": table.tier.as_str(),
                "rows": table.rows.len(),
                "cols": table.column_count(),
                "bbox": {
                    "x0": table.bbox.x0,
                    "top": table.bbox.top,
                    "x1": table.bbox.x1,
                    "bottom": table.bbox.bottom,
                },
            })
        })
        .collect();

    let doc = serde_json::json!({
        "source": result.source.display().to_string(),
        "output": output_path(&result.source).display().to_string(),
        "total_rows": result.row_count(),
        "tables": tables,
    });

    let json_str = serde_json::to_string(&doc).map_err(|e| {
        eprintln!("Error: failed to serialize JSON: {e}");
        1
    })?;
    println!("{json_str}");
    Ok(())
}
