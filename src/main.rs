use std::path::PathBuf;

use clap::{Parser, Subcommand};
use edu_knowledge::Result;
use edu_knowledge::commands::{
    configure, list_categories, list_passages, open_knowledge_base, run_answer, run_search,
    show_stats,
};

#[derive(Parser)]
#[command(name = "edu-knowledge")]
#[command(about = "Lexical knowledge retrieval over educational documents")]
#[command(version)]
struct Cli {
    /// Configuration directory (defaults to ~/.edu-knowledge)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search passages by free-text query
    Search {
        query: String,
        /// Only search passages of this category
        #[arg(long)]
        category: Option<String>,
        /// Maximum number of results
        #[arg(long)]
        limit: Option<usize>,
        /// Minimum similarity score between 0 and 1
        #[arg(long)]
        min_score: Option<f64>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// List all categories
    Categories,
    /// List passages of a category
    Passages {
        category: String,
        /// Fail when the category has no passages
        #[arg(long)]
        strict: bool,
    },
    /// Show corpus statistics
    Stats,
    /// Assemble answer context for a question
    Answer {
        question: String,
        /// Extra context line appended after the passages (repeatable)
        #[arg(long = "context")]
        context: Vec<String>,
    },
    /// Write default configuration, or show the current one
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Commands::Config { show } = cli.command {
        configure(cli.config_dir, show)?;
        return Ok(());
    }

    let (config, knowledge) = open_knowledge_base(cli.config_dir)?;

    match cli.command {
        Commands::Search {
            query,
            category,
            limit,
            min_score,
            json,
        } => {
            let mut options = config.search_options();
            options.category = category;
            if let Some(limit) = limit {
                options.max_results = limit;
            }
            if let Some(min_score) = min_score {
                options.min_score = min_score;
            }
            run_search(&knowledge, &query, &options, json)?;
        }
        Commands::Categories => {
            list_categories(&knowledge)?;
        }
        Commands::Passages { category, strict } => {
            list_passages(&knowledge, &category, strict)?;
        }
        Commands::Stats => {
            show_stats(&knowledge)?;
        }
        Commands::Answer { question, context } => {
            run_answer(&knowledge, &question, &context)?;
        }
        Commands::Config { .. } => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn cli_parsing() {
        let cli = Cli::try_parse_from(["edu-knowledge", "categories"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            assert!(matches!(parsed.command, Commands::Categories));
        }
    }

    #[test]
    fn search_with_options() {
        let cli = Cli::try_parse_from([
            "edu-knowledge",
            "search",
            "türev",
            "--category",
            "math",
            "--limit",
            "3",
            "--min-score",
            "0.2",
        ]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            if let Commands::Search {
                query,
                category,
                limit,
                min_score,
                json,
            } = parsed.command
            {
                assert_eq!(query, "türev");
                assert_eq!(category, Some("math".to_string()));
                assert_eq!(limit, Some(3));
                assert_eq!(min_score, Some(0.2));
                assert!(!json);
            } else {
                panic!("expected search command");
            }
        }
    }

    #[test]
    fn answer_with_repeated_context() {
        let cli = Cli::try_parse_from([
            "edu-knowledge",
            "answer",
            "What is a limit?",
            "--context",
            "first",
            "--context",
            "second",
        ]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            if let Commands::Answer { question, context } = parsed.command {
                assert_eq!(question, "What is a limit?");
                assert_eq!(context, vec!["first", "second"]);
            } else {
                panic!("expected answer command");
            }
        }
    }

    #[test]
    fn global_config_dir() {
        let cli = Cli::try_parse_from(["edu-knowledge", "stats", "--config-dir", "/tmp/kb"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            assert_eq!(parsed.config_dir, Some(PathBuf::from("/tmp/kb")));
        }
    }

    #[test]
    fn config_show_flag() {
        let cli = Cli::try_parse_from(["edu-knowledge", "config", "--show"]);
        assert!(cli.is_ok());

        if let Ok(parsed) = cli {
            if let Commands::Config { show } = parsed.command {
                assert!(show);
            }
        }
    }

    #[test]
    fn search_requires_query() {
        let cli = Cli::try_parse_from(["edu-knowledge", "search"]);
        assert!(cli.is_err());

        if let Err(err) = cli {
            assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        }
    }

    #[test]
    fn invalid_command() {
        let cli = Cli::try_parse_from(["edu-knowledge", "invalid"]);
        assert!(cli.is_err());

        if let Err(err) = cli {
            assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        }
    }
}
