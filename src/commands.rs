use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::{Config, get_config_dir, show_config};
use crate::knowledge::KnowledgeBase;
use crate::search::SearchOptions;

const PREVIEW_CHARS: usize = 160;

/// Resolve the configuration directory, defaulting to `~/.edu-knowledge`
#[inline]
pub fn resolve_config_dir(config_dir: Option<PathBuf>) -> Result<PathBuf> {
    match config_dir {
        Some(dir) => Ok(dir),
        None => Ok(get_config_dir()?),
    }
}

/// Load configuration and build the knowledge base from its corpus
#[inline]
pub fn open_knowledge_base(config_dir: Option<PathBuf>) -> Result<(Config, KnowledgeBase)> {
    let config_dir = resolve_config_dir(config_dir)?;
    let config = Config::load(&config_dir)?;
    let (knowledge, report) =
        KnowledgeBase::from_config(&config).context("Failed to load knowledge corpus")?;

    info!(
        "Loaded {} documents from {} files ({} skipped, seed corpus: {})",
        report.documents_loaded, report.files_read, report.documents_skipped, report.used_seed
    );

    Ok((config, knowledge))
}

/// Search the knowledge base and print ranked passages
#[inline]
pub fn run_search(
    knowledge: &KnowledgeBase,
    query: &str,
    options: &SearchOptions,
    json: bool,
) -> Result<()> {
    let results = knowledge.search(query, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No passages matched '{}'.", query);
        return Ok(());
    }

    println!("Results for '{}' ({} found):", query, results.len());
    println!();

    for (rank, result) in results.iter().enumerate() {
        println!(
            "{}. {} [{}] score {:.3}",
            rank + 1,
            result.passage.title,
            result.passage.category,
            result.score
        );
        println!("   {}", preview(&result.passage.content));
        for highlight in &result.highlights {
            println!(
                "   • '{}' x{} at {:?}",
                highlight.term, highlight.count, highlight.offsets
            );
        }
        println!();
    }

    Ok(())
}

/// Print every category in the corpus
#[inline]
pub fn list_categories(knowledge: &KnowledgeBase) -> Result<()> {
    let mut categories = knowledge.categories()?;
    categories.sort();

    if categories.is_empty() {
        println!("No categories found.");
        return Ok(());
    }

    println!("Categories ({} total):", categories.len());
    for category in categories {
        println!("  {}", category);
    }

    Ok(())
}

/// Print the passages of one category
#[inline]
pub fn list_passages(knowledge: &KnowledgeBase, category: &str, strict: bool) -> Result<()> {
    let passages = if strict {
        knowledge.require_category(category)?
    } else {
        knowledge.passages_by_category(category)?
    };

    if passages.is_empty() {
        println!("No passages in category '{}'.", category);
        return Ok(());
    }

    println!("Passages in '{}' ({} total):", category, passages.len());
    println!();
    for passage in &passages {
        println!("📄 {} #{} ({})", passage.title, passage.index, passage.id);
        if !passage.tags.is_empty() {
            println!("   Tags: {}", passage.tags.join(", "));
        }
        println!("   {}", preview(&passage.content));
    }

    Ok(())
}

/// Print corpus statistics
#[inline]
pub fn show_stats(knowledge: &KnowledgeBase) -> Result<()> {
    let stats = knowledge.stats()?;

    println!("Knowledge base statistics:");
    println!("  Documents: {}", stats.document_count);
    println!("  Passages: {}", stats.passage_count);
    println!("  Categories: {}", stats.category_count);
    println!(
        "  Avg passages per document: {:.2}",
        stats.avg_passages_per_document
    );

    Ok(())
}

/// Print the assembled answer context for a question
#[inline]
pub fn run_answer(knowledge: &KnowledgeBase, question: &str, context: &[String]) -> Result<()> {
    let answer = knowledge.answer(question, context)?;

    if !answer.has_relevant_info {
        println!("No relevant passages found for '{}'.", question);
    } else {
        println!("Sources:");
        for result in &answer.search_results {
            println!("  - {} (score {:.3})", result.passage.title, result.score);
        }
    }

    if !answer.context_text.is_empty() {
        println!();
        println!("{}", answer.context_text);
    }

    Ok(())
}

/// Show the effective configuration, saving it first unless `show` is set
#[inline]
pub fn configure(config_dir: Option<PathBuf>, show: bool) -> Result<()> {
    let config_dir = resolve_config_dir(config_dir)?;
    let config = Config::load(&config_dir)?;

    if !show {
        config.save()?;
        println!("Configuration written to {}", config.config_file_path().display());
        println!();
    }

    show_config(&config)
}

fn preview(content: &str) -> String {
    let mut preview: String = content.chars().take(PREVIEW_CHARS).collect();
    if content.chars().count() > PREVIEW_CHARS {
        preview.push('…');
    }
    preview.replace('\n', " ")
}
