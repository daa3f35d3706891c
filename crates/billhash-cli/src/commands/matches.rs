use billhash_core::error::BillhashError;
use billhash_core::fingerprint::{parse_fingerprint_list, Fingerprint};
use billhash_core::DocumentSchema;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    shas: Vec<String>,
    sha_file: Option<PathBuf>,
    schema: &DocumentSchema,
    output_format: &str,
) -> Result<(), BillhashError> {
    let mut targets: HashSet<Fingerprint> = shas
        .iter()
        .map(|s| s.trim().parse::<Fingerprint>())
        .collect::<Result<_, BillhashError>>()?;

    if let Some(path) = sha_file {
        let list = std::fs::read_to_string(&path)?;
        targets.extend(parse_fingerprint_list(&list)?);
    }

    if targets.is_empty() {
        log::warn!("no target fingerprints given; nothing can match");
    }

    let matches = billhash_core::match_file(&input_file, &targets, schema)?;

    match output_format {
        "json" => output::json::print(&matches)?,
        _ => output::table::print_matches(&matches),
    }

    Ok(())
}
