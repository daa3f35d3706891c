use billhash_core::error::BillhashError;
use billhash_core::model::ParagraphRecord;
use billhash_core::IndexOptions;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    input_files: Vec<PathBuf>,
    options: &IndexOptions,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), BillhashError> {
    let records = index_all(&input_files, options)?;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(&records)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Indexed {} paragraph(s) from {} file(s), written to {}",
                records.len(),
                input_files.len(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(&records)?,
            _ => output::table::print_records(&records),
        },
    }

    Ok(())
}

/// Index documents in parallel, one worker per document.
///
/// Records come back grouped by input file in the order given. Any failing
/// document fails the whole call.
pub fn index_all<P: AsRef<Path> + Sync>(
    input_files: &[P],
    options: &IndexOptions,
) -> Result<Vec<ParagraphRecord>, BillhashError> {
    let per_file = input_files
        .par_iter()
        .map(|path| billhash_core::index_file(path.as_ref(), options))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(per_file.into_iter().flatten().collect())
}
