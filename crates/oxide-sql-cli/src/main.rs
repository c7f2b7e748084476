//! oxide-sql CLI
//!
//! Parses SQL statements and prints the resulting syntax tree, or the
//! diagnostics raised while building it.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{debug, warn, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_sql_lalr::{parse_with, CountingAllocator, Parsed, ParserConfig, StackLimit};

/// Parse SQL statements with the LALR(1) grammar.
#[derive(Parser, Debug)]
#[command(name = "oxide-sql")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQL statements, one per argument. Read from stdin when neither
    /// statements nor files are given.
    statements: Vec<String>,

    /// Files holding one statement each.
    #[arg(short, long = "file")]
    files: Vec<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Log every shift and reduce the engine makes.
    #[arg(long, env = "OXIDE_SQL_TRACE")]
    trace: bool,

    /// Use a fixed parser stack of this many entries instead of a
    /// growable one.
    #[arg(long, env = "OXIDE_SQL_STACK_LIMIT")]
    stack_limit: Option<usize>,

    /// Longest compound SELECT chain accepted without complaint.
    #[arg(long, default_value_t = 500)]
    compound_limit: usize,

    /// Only report diagnostics, do not print the syntax tree.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.trace {
            Level::TRACE
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    fn parser_config(&self) -> ParserConfig {
        let mut config =
            ParserConfig::default().with_compound_select_limit(self.compound_limit);
        if let Some(limit) = self.stack_limit {
            config = config.with_stack_limit(StackLimit::Fixed(limit));
        }
        if self.trace {
            config = config.with_trace("sql> ");
        }
        config
    }

    /// Every statement to parse, labelled for reporting.
    fn inputs(&self) -> anyhow::Result<Vec<(String, String)>> {
        let mut inputs: Vec<_> = self
            .statements
            .iter()
            .enumerate()
            .map(|(i, sql)| (format!("argument {}", i + 1), sql.clone()))
            .collect();
        for path in &self.files {
            let sql = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            inputs.push((path.display().to_string(), sql));
        }
        if inputs.is_empty() {
            let mut sql = String::new();
            std::io::stdin()
                .read_to_string(&mut sql)
                .context("Failed to read stdin")?;
            inputs.push(("stdin".to_string(), sql));
        }
        Ok(inputs)
    }
}

/// Parses one statement, checking that the tree is fully released.
fn parse_one(sql: &str, config: ParserConfig) -> anyhow::Result<Parsed> {
    let counter = Arc::new(CountingAllocator::new());
    let result = parse_with(sql, config, counter.clone());
    debug!(nodes = counter.total(), live = counter.live(), "parse finished");
    Ok(result?)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = cli.parser_config();
    let mut failed = 0;
    for (label, sql) in cli.inputs()? {
        debug!(input = %label, "parsing");
        let parsed = match parse_one(&sql, config.clone()) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("{label}: {e:#}");
                failed += 1;
                continue;
            }
        };
        for diagnostic in &parsed.diagnostics {
            let text = diagnostic.span.text(&sql);
            warn!("{label}: {} (at {text:?})", diagnostic.message);
        }
        if !cli.quiet {
            println!("{:#?}", parsed.command);
        }
    }

    if failed > 0 {
        bail!("{failed} statement(s) failed to parse");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["oxide-sql", "SELECT 1"]).unwrap();
        assert_eq!(cli.statements, vec!["SELECT 1".to_string()]);
        assert!(cli.files.is_empty());
        assert_eq!(cli.log_level(), Level::INFO);
        assert_eq!(cli.parser_config(), ParserConfig::default());
    }

    #[test]
    fn test_verbose_and_trace_levels() {
        let cli = Cli::try_parse_from(["oxide-sql", "-v", "SELECT 1"]).unwrap();
        assert_eq!(cli.log_level(), Level::DEBUG);
        assert!(cli.parser_config().trace.is_none());

        let cli = Cli::try_parse_from(["oxide-sql", "--trace", "SELECT 1"]).unwrap();
        assert_eq!(cli.log_level(), Level::TRACE);
        assert_eq!(cli.parser_config().trace.as_deref(), Some("sql> "));
    }

    #[test]
    fn test_limits() {
        let cli = Cli::try_parse_from([
            "oxide-sql",
            "--stack-limit",
            "50",
            "--compound-limit",
            "3",
            "SELECT 1",
        ])
        .unwrap();
        let config = cli.parser_config();
        assert_eq!(config.stack_limit, StackLimit::Fixed(50));
        assert_eq!(config.compound_select_limit, 3);
    }

    #[test]
    fn test_rejects_bad_limit() {
        assert!(Cli::try_parse_from(["oxide-sql", "--stack-limit", "many"]).is_err());
    }

    #[test]
    fn test_inputs_from_files() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "DELETE FROM t WHERE a = 1").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from(["oxide-sql", "SELECT 1", "-f", &path]).unwrap();
        let inputs = cli.inputs().unwrap();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0], ("argument 1".to_string(), "SELECT 1".to_string()));
        assert_eq!(inputs[1].0, path);
        assert_eq!(inputs[1].1, "DELETE FROM t WHERE a = 1");
    }

    #[test]
    fn test_missing_file() {
        let cli = Cli::try_parse_from(["oxide-sql", "-f", "/nonexistent/query.sql"]).unwrap();
        let err = cli.inputs().unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }

    #[test]
    fn test_parse_one() {
        let parsed = parse_one("SELECT a FROM t", ParserConfig::default()).unwrap();
        assert!(parsed.command.statement.is_some());

        let err = parse_one("SELECT (1", ParserConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "unexpected end of input");
    }
}
