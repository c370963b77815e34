use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CatalogError;
use crate::grouping::group_records;
use crate::render::render_row;
use crate::source::read_records;
use crate::template::{page_footer, page_header, DEFAULT_TITLE};
use crate::types::Group;

/// Where to read purchases from and where to write the catalog
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub title: String,
    pub quiet: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("itch_purchases.csv"),
            output_path: PathBuf::from("itch_catalog.html"),
            title: DEFAULT_TITLE.to_string(),
            quiet: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub records: usize,
    pub rows: usize,
    pub output: PathBuf,
}

/// Full page: header, one row per group (already in key order), footer
fn build_document(groups: &[Group], title: &str) -> String {
    let rows: Vec<String> = groups.iter().map(render_row).collect();

    let mut html = page_header(title);
    html.push_str(&rows.join("\n"));
    html.push_str(&page_footer());
    html
}

fn write_document(path: &Path, html: &str) -> Result<(), CatalogError> {
    fs::write(path, html).map_err(|e| CatalogError::output(path, e))
}

/// Read, group, render and write the catalog in one pass
pub fn run_generate(config: &CatalogConfig) -> Result<GenerateSummary, CatalogError> {
    if !config.quiet {
        println!("Reading purchases from {}...", config.input_path.display());
    }
    let records = read_records(&config.input_path)?;
    let record_count = records.len();
    if !config.quiet {
        println!("Loaded {} records", record_count);
    }

    let groups = group_records(records);
    if !config.quiet {
        println!("Grouped into {} catalog rows", groups.len());
    }

    let html = build_document(&groups, &config.title);
    write_document(&config.output_path, &html)?;

    Ok(GenerateSummary {
        records: record_count,
        rows: groups.len(),
        output: config.output_path.clone(),
    })
}
