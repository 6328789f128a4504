//! Corpus cleaning pre-pass.
//!
//! Normalizes every raw file, strips the leading download/English widget
//! lines, and mirrors the collection into two trees under the output
//! root: `cleaned/` for files with enough content left and `discarded/`
//! for the rest. Discarded files keep their pre-strip text so they can be
//! audited. A per-category CSV report is written alongside.
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::categories::Categories;
use crate::error::Error;
use crate::filtering::{Filter, MinContent};
use crate::io::writer::write_mirrored;
use crate::io::{find_text_files, infer_category, read_text_lossy};
use crate::pipelines::pipeline::Pipeline;
use crate::stats::{write_cleaning_report, CleaningStats};
use crate::transformers::{normalize, strip_noise_header};

#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub input_root: PathBuf,
    pub output_root: PathBuf,
    pub min_chars: usize,
    pub extensions: Vec<String>,
    pub include_uncategorized: bool,
    pub report_csv: String,
}

pub struct CleanCorpus {
    config: CleanConfig,
}

impl CleanCorpus {
    pub fn new(config: CleanConfig) -> Self {
        Self { config }
    }

    fn print_summary(
        &self,
        cleaned_root: &Path,
        discarded_root: &Path,
        report_path: &Path,
        stats: &HashMap<String, CleaningStats>,
    ) {
        let processed: u64 = stats.values().map(|s| s.processed).sum();
        println!("\n=== Cleaning completed ===");
        println!("Input root:       {}", self.config.input_root.display());
        println!("Output root:      {}", self.config.output_root.display());
        println!("Cleaned folder:   {}", cleaned_root.display());
        println!("Discarded folder: {}", discarded_root.display());
        println!("Report CSV:       {}", report_path.display());
        println!("Total processed files: {}", processed);

        let mut codes: Vec<&String> = stats.keys().collect();
        codes.sort_by_key(|c| c.to_lowercase());
        for code in codes {
            let s = &stats[code];
            println!(
                "- {}: processed={} cleaned={} discarded={} unreadable={} removed_lines_total={}",
                code, s.processed, s.cleaned, s.discarded, s.unreadable, s.removed_lines_total
            );
        }
    }
}

impl Pipeline<()> for CleanCorpus {
    fn run(&self) -> Result<(), Error> {
        let cfg = &self.config;
        let cleaned_root = cfg.output_root.join("cleaned");
        let discarded_root = cfg.output_root.join("discarded");
        std::fs::create_dir_all(&cleaned_root)?;
        std::fs::create_dir_all(&discarded_root)?;

        let files = find_text_files(&cfg.input_root, &cfg.extensions)?;
        info!("clean: {} candidate files under {:?}", files.len(), cfg.input_root);

        let sufficient = MinContent::with_min_chars(cfg.min_chars);
        let mut stats: HashMap<String, CleaningStats> = HashMap::new();

        for path in files {
            let category = infer_category(&cfg.input_root, &path);
            if !cfg.include_uncategorized && !Categories::is_known(&category) {
                debug!("skipping uncategorized file {:?}", path);
                continue;
            }
            let cat_stats = stats.entry(category).or_default();
            cat_stats.processed += 1;

            let raw = match read_text_lossy(&path) {
                Ok(raw) => raw,
                Err(e) => {
                    error!("skipping unreadable file {:?}: {:?}", path, e);
                    cat_stats.unreadable += 1;
                    continue;
                }
            };

            let raw = normalize(&raw);
            let (cleaned, removed_lines) = strip_noise_header(&raw);
            cat_stats.removed_lines_total += removed_lines as u64;

            let rel = path.strip_prefix(&cfg.input_root).unwrap_or(&path);
            if sufficient.detect(cleaned.as_str()) {
                write_mirrored(&cleaned_root, rel, &cleaned)?;
                cat_stats.cleaned += 1;
            } else {
                // keep the pre-strip text for audit, not the emptied one
                write_mirrored(&discarded_root, rel, &raw)?;
                cat_stats.discarded += 1;
            }
        }

        let report_path = cfg.output_root.join(&cfg.report_csv);
        write_cleaning_report(&report_path, &stats)?;
        info!("clean: report written to {:?}", report_path);

        self.print_summary(&cleaned_root, &discarded_root, &report_path, &stats);
        Ok(())
    }
}
