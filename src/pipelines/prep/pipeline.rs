//! CPT dataset preparation pipeline.
//!
//! Walks the cleaned corpus and turns it into train/validation JSONL for
//! continued pretraining.
//!
//! # Processing
//! 1. Each file is read permissively and normalized (line endings,
//!    invisible marks, whitespace runs).
//! 1. Leftover download-widget lines are stripped from the head (a no-op
//!    on an already cleaned corpus, the stripper is idempotent).
//! 1. Files without enough non-whitespace content for their category are
//!    discarded.
//! 1. The text is segmented by legal-article headings where the category
//!    expects them, then chunked paragraph-wise with overlap.
//! 1. Chunks are capped per document, rendered into records, pooled,
//!    shuffled and split into train/validation.
//!
//! One document is fully processed before the next is read; the only
//! shared resource is the seeded rng, consumed in traversal order
//! (capping draws first, one final shuffle last) so a fixed seed
//! reproduces the datasets byte for byte.
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use itertools::Itertools;
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assembling::{shuffle_split, Dataset, Record};
use crate::categories::Categories;
use crate::chunking::{cap_chunks, split_by_articles, ParagraphChunker};
use crate::error::Error;
use crate::filtering::{ContentThresholds, Filter};
use crate::io::writer::JsonlWriter;
use crate::io::{find_text_files, infer_category, read_text_lossy, rel_posix};
use crate::pipelines::pipeline::Pipeline;
use crate::stats::{write_prep_report, CategoryStats};
use crate::transformers::{Normalize, StripNoiseHeader, Transform};

use super::types::{Chunk, Document};

/// Everything the prepare pipeline needs, resolved and validated at
/// startup from the CLI arguments.
#[derive(Debug, Clone)]
pub struct PrepareConfig {
    pub input_root: PathBuf,
    pub output_dir: PathBuf,
    pub train_name: String,
    pub val_name: String,
    pub extensions: Vec<String>,
    pub categories: Categories,
    pub thresholds: ContentThresholds,
    pub max_chars: usize,
    pub overlap_chars: usize,
    pub use_article_split: bool,
    pub article_categories: HashSet<String>,
    pub max_chunks_per_doc: usize,
    pub val_ratio: f64,
    pub seed: u64,
    pub include_header: bool,
    pub stats_csv: String,
    pub dry_run: bool,
}

pub struct PrepareCpt {
    config: PrepareConfig,
}

impl PrepareCpt {
    pub fn new(config: PrepareConfig) -> Self {
        Self { config }
    }

    /// Chunk one kept document: article segmentation when the category
    /// expects it, paragraph chunking otherwise or as fallback.
    fn chunk_document(&self, doc: &Document, chunker: &ParagraphChunker) -> Vec<String> {
        if self.config.use_article_split
            && self.config.article_categories.contains(doc.category())
        {
            if let Some(spans) = split_by_articles(doc.content()) {
                return chunker.chunk_spans(&spans);
            }
        }
        chunker.chunk(doc.content())
    }

    fn print_summary(&self, stats: &HashMap<String, CategoryStats>, dataset: &Dataset) {
        println!("\n=== CPT prep summary ===");
        println!("Input root: {}", self.config.input_root.display());
        println!(
            "Keep categories: {}",
            self.config.categories.keep_codes().iter().join(", ")
        );
        println!(
            "max_chars={}, overlap_chars={}, use_article_split={}",
            self.config.max_chars, self.config.overlap_chars, self.config.use_article_split
        );
        println!(
            "Records (chunks): total={} train={} val={}",
            dataset.len(),
            dataset.train().len(),
            dataset.validation().len()
        );
        for code in self.config.categories.keep_codes() {
            if let Some(s) = stats.get(code) {
                println!(
                    "- {}: files_seen={} kept={} discarded={} unreadable={} chunks={} capped_away={}",
                    code,
                    s.files_seen,
                    s.files_kept,
                    s.files_discarded,
                    s.files_unreadable,
                    s.chunks_written,
                    s.chunks_capped_away
                );
            }
        }
    }
}

impl Pipeline<()> for PrepareCpt {
    fn run(&self) -> Result<(), Error> {
        let cfg = &self.config;
        let files = find_text_files(&cfg.input_root, &cfg.extensions)?;
        info!("prepare: {} candidate files under {:?}", files.len(), cfg.input_root);

        let chunker = ParagraphChunker::new(cfg.max_chars, cfg.overlap_chars);
        let mut rng = StdRng::seed_from_u64(cfg.seed);
        // every kept category gets counters up front, so categories that
        // see no files still show up in the report with zero rows
        let mut stats: HashMap<String, CategoryStats> = cfg
            .categories
            .keep_codes()
            .iter()
            .map(|code| (code.clone(), CategoryStats::default()))
            .collect();
        let mut records: Vec<Record> = Vec::new();

        for path in files {
            let category = infer_category(&cfg.input_root, &path);
            if !cfg.categories.keeps(&category) {
                continue;
            }
            let cat_stats = stats.entry(category.clone()).or_default();
            cat_stats.files_seen += 1;

            let raw = match read_text_lossy(&path) {
                Ok(raw) => raw,
                Err(e) => {
                    error!("skipping unreadable file {:?}: {:?}", path, e);
                    cat_stats.files_unreadable += 1;
                    continue;
                }
            };

            let doc = Document::new(category.clone(), rel_posix(&cfg.input_root, &path), raw);
            let doc = Normalize.transform_own(doc);
            let doc = StripNoiseHeader.transform_own(doc);

            if !cfg.thresholds.filter_for(&category).detect(doc.content()) {
                debug!("discarding {:?}: not enough content", path);
                cat_stats.files_discarded += 1;
                continue;
            }
            cat_stats.files_kept += 1;

            let bodies = self.chunk_document(&doc, &chunker);
            let (bodies, dropped) = cap_chunks(bodies, cfg.max_chunks_per_doc, &mut rng);
            cat_stats.chunks_capped_away += dropped as u64;
            cat_stats.chunks_written += bodies.len() as u64;

            let total = bodies.len();
            for (i, body) in bodies.into_iter().enumerate() {
                let chunk = Chunk::new(body, i + 1, total);
                records.push(Record::new(chunk.render(
                    &doc,
                    &cfg.categories,
                    cfg.include_header,
                )));
            }
        }

        let dataset = shuffle_split(records, cfg.val_ratio, &mut rng);

        std::fs::create_dir_all(&cfg.output_dir)?;
        let stats_path = cfg.output_dir.join(&cfg.stats_csv);
        write_prep_report(&stats_path, &cfg.categories, &stats)?;
        info!("prepare: stats written to {:?}", stats_path);

        self.print_summary(&stats, &dataset);

        if cfg.dry_run {
            println!("\nDry-run mode: JSONL files were NOT written.");
            return Ok(());
        }

        let train_path = cfg.output_dir.join(&cfg.train_name);
        let val_path = cfg.output_dir.join(&cfg.val_name);
        JsonlWriter::create(&train_path)?.write_all(dataset.train())?;
        JsonlWriter::create(&val_path)?.write_all(dataset.validation())?;
        println!("Train JSONL: {}", train_path.display());
        println!("Val JSONL:   {}", val_path.display());

        Ok(())
    }
}
