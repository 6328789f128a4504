//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use qanoon_prep::categories::{parse_label_overrides, parse_list, parse_overrides, Categories};
use qanoon_prep::error::Error;
use qanoon_prep::filtering::ContentThresholds;
use qanoon_prep::pipelines::clean::CleanConfig;
use qanoon_prep::pipelines::prep::PrepareConfig;

#[derive(Debug, StructOpt)]
#[structopt(name = "qanoon-prep", about = "qanoon.om corpus preparation tool.")]
/// Holds every command that is callable by the `qanoon-prep` command.
pub enum QanoonPrep {
    #[structopt(about = "Clean the raw collection (strip download/English header lines)")]
    Clean(Clean),
    #[structopt(about = "Prepare CPT train/val JSONL from a cleaned collection")]
    Prepare(Prepare),
}

#[derive(Debug, StructOpt)]
/// Clean command and parameters.
pub struct Clean {
    #[structopt(parse(from_os_str), help = "raw collection root (contains category subfolders)")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "output_root",
        default_value = "./output_cleaning",
        help = "output root, receives cleaned/ and discarded/ trees"
    )]
    pub dst: PathBuf,
    #[structopt(
        long = "min_chars",
        default_value = "50",
        help = "minimum non-whitespace characters required to keep a file"
    )]
    pub min_chars: usize,
    #[structopt(
        long = "extensions",
        default_value = ".txt,.text",
        help = "comma-separated extensions to process"
    )]
    pub extensions: String,
    #[structopt(
        long = "include_uncategorized",
        help = "process files whose top-level folder is not a known category"
    )]
    pub include_uncategorized: bool,
    #[structopt(
        long = "report_csv",
        default_value = "cleaning_report.csv",
        help = "per-category stats CSV, written inside the output root"
    )]
    pub report_csv: String,
}

impl Clean {
    pub fn into_config(self) -> CleanConfig {
        CleanConfig {
            input_root: self.src,
            output_root: self.dst,
            min_chars: self.min_chars,
            extensions: parse_list(&self.extensions),
            include_uncategorized: self.include_uncategorized,
            report_csv: self.report_csv,
        }
    }
}

#[derive(Debug, StructOpt)]
/// Prepare command and parameters.
pub struct Prepare {
    #[structopt(parse(from_os_str), help = "cleaned collection root (contains category subfolders)")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "output_dir",
        default_value = "./cpt_data",
        help = "directory receiving the JSONL files and the stats CSV"
    )]
    pub dst: PathBuf,
    #[structopt(long = "train_name", default_value = "train.jsonl")]
    pub train_name: String,
    #[structopt(long = "val_name", default_value = "val.jsonl")]
    pub val_name: String,
    #[structopt(
        long = "keep_categories",
        default_value = "FATWA,RD,AD",
        help = "comma-separated top-level folders to include"
    )]
    pub keep_categories: String,
    #[structopt(
        long = "category_labels",
        default_value = "",
        help = "label overrides like AD=قرار إداري,RD=مرسوم سلطاني"
    )]
    pub category_labels: String,
    #[structopt(
        long = "max_chars",
        default_value = "6500",
        help = "maximum characters per chunk"
    )]
    pub max_chars: usize,
    #[structopt(
        long = "overlap_chars",
        default_value = "500",
        help = "characters repeated between consecutive chunks"
    )]
    pub overlap_chars: usize,
    #[structopt(
        long = "use_article_split",
        help = "try splitting on المادة/مادة headings first"
    )]
    pub use_article_split: bool,
    #[structopt(
        long = "article_categories",
        default_value = "RD,FATWA,AD",
        help = "categories where article-style structure is expected"
    )]
    pub article_categories: String,
    #[structopt(
        long = "min_chars_default",
        default_value = "250",
        help = "discard files with fewer non-whitespace characters than this"
    )]
    pub min_chars_default: usize,
    #[structopt(
        long = "min_chars_overrides",
        default_value = "AD=300,RD=200,FATWA=500",
        help = "per-category min chars, e.g. AD=300,RD=200"
    )]
    pub min_chars_overrides: String,
    #[structopt(
        long = "extensions",
        default_value = ".txt,.text",
        help = "comma-separated extensions to process"
    )]
    pub extensions: String,
    #[structopt(
        long = "val_ratio",
        default_value = "0.01",
        help = "fraction of chunks kept for validation"
    )]
    pub val_ratio: f64,
    #[structopt(long = "seed", default_value = "42", help = "random seed")]
    pub seed: u64,
    #[structopt(
        long = "max_chunks_per_doc",
        default_value = "50",
        help = "cap on chunks kept per document, 0 disables"
    )]
    pub max_chunks_per_doc: usize,
    #[structopt(
        long = "include_header",
        help = "prefix each chunk with the metadata header lines"
    )]
    pub include_header: bool,
    #[structopt(long = "stats_csv", default_value = "prep_stats.csv")]
    pub stats_csv: String,
    #[structopt(long = "dry_run", help = "compute stats only, write no JSONL")]
    pub dry_run: bool,
}

impl Prepare {
    /// Resolve CLI strings into the pipeline configuration. Malformed
    /// override strings are configuration mistakes and fail the run here.
    pub fn into_config(self) -> Result<PrepareConfig, Error> {
        let categories = Categories::new(
            parse_list(&self.keep_categories),
            parse_label_overrides(&self.category_labels)?,
        );
        let thresholds = ContentThresholds::new(
            self.min_chars_default,
            parse_overrides(&self.min_chars_overrides)?,
        );

        Ok(PrepareConfig {
            input_root: self.src,
            output_dir: self.dst,
            train_name: self.train_name,
            val_name: self.val_name,
            extensions: parse_list(&self.extensions),
            categories,
            thresholds,
            max_chars: self.max_chars,
            overlap_chars: self.overlap_chars,
            use_article_split: self.use_article_split,
            article_categories: parse_list(&self.article_categories).into_iter().collect(),
            max_chunks_per_doc: self.max_chunks_per_doc,
            val_ratio: self.val_ratio,
            seed: self.seed,
            include_header: self.include_header,
            stats_csv: self.stats_csv,
            dry_run: self.dry_run,
        })
    }
}
