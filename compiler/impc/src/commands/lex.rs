//! `impc lex`: scan files and print their tokens.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use imp_lexer_core::{
    tokenize_path, InvalidTokenPolicy, ScanConfig, ScanError, Token, Trie, TrieError,
    DEFAULT_BLOCK_MULTIPLIER,
};
use rayon::prelude::*;

use super::describe_error;

/// Options for `impc lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub paths: Vec<PathBuf>,
    /// `--block-size=N`. Also scales the default capacity.
    pub block_size: Option<usize>,
    /// `--capacity=N`.
    pub capacity: Option<usize>,
    /// `--invalid=abort|emit`.
    pub on_invalid: InvalidTokenPolicy,
    /// `--reserved=w1,w2,...` replaces the standard vocabulary.
    pub reserved: Option<Vec<String>>,
    /// `--jobs=N`; `None` uses every core.
    pub jobs: Option<usize>,
}

impl LexOptions {
    pub fn scan_config(&self) -> ScanConfig {
        let defaults = ScanConfig::default();
        let block_size = self.block_size.unwrap_or(defaults.block_size);
        let buffer_capacity = match (self.capacity, self.block_size) {
            (Some(capacity), _) => capacity,
            (None, Some(block)) => block.saturating_mul(DEFAULT_BLOCK_MULTIPLIER),
            (None, None) => defaults.buffer_capacity,
        };
        ScanConfig {
            block_size,
            buffer_capacity,
            on_invalid: self.on_invalid,
        }
    }

    pub fn trie(&self) -> Result<Trie, TrieError> {
        match &self.reserved {
            Some(words) => {
                let words: Vec<&str> = words.iter().map(String::as_str).collect();
                Trie::build(&words)
            }
            None => Ok(Trie::standard()),
        }
    }
}

fn parse_count(flag: &str, value: &str) -> Result<usize, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} expects a non-negative integer, got '{value}'"))
}

/// Parse the arguments following `impc lex`.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, String> {
    let mut options = LexOptions::default();

    for arg in args {
        if let Some(n) = arg.strip_prefix("--block-size=") {
            options.block_size = Some(parse_count("--block-size", n)?);
        } else if let Some(n) = arg.strip_prefix("--capacity=") {
            options.capacity = Some(parse_count("--capacity", n)?);
        } else if let Some(policy) = arg.strip_prefix("--invalid=") {
            options.on_invalid = InvalidTokenPolicy::from_name(policy)
                .ok_or_else(|| format!("unknown --invalid policy '{policy}', options: abort, emit"))?;
        } else if let Some(words) = arg.strip_prefix("--reserved=") {
            options.reserved = Some(
                words
                    .split(',')
                    .filter(|w| !w.is_empty())
                    .map(str::to_owned)
                    .collect(),
            );
        } else if let Some(jobs) = arg.strip_prefix("--jobs=") {
            options.jobs = if jobs == "auto" {
                None
            } else {
                Some(parse_count("--jobs", jobs)?.max(1))
            };
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else {
            options.paths.push(PathBuf::from(arg));
        }
    }

    if options.paths.is_empty() {
        return Err("missing file path".to_owned());
    }
    Ok(options)
}

/// Outcome of scanning one file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: Result<Vec<Token>, ScanError>,
}

fn scan_one(path: &Path, trie: &Trie, config: &ScanConfig) -> FileReport {
    FileReport {
        path: path.to_path_buf(),
        result: tokenize_path(path, trie, config),
    }
}

/// Scan every path, in parallel when there is more than one.
///
/// Each scan owns its buffer; all of them share `trie`. Reports come back
/// in the order of `paths`.
pub fn scan_files(
    paths: &[PathBuf],
    trie: &Trie,
    config: &ScanConfig,
    jobs: Option<usize>,
) -> Vec<FileReport> {
    let sequential = || {
        paths
            .iter()
            .map(|path| scan_one(path, trie, config))
            .collect::<Vec<_>>()
    };

    if paths.len() < 2 || jobs == Some(1) {
        return sequential();
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = jobs {
        builder = builder.num_threads(n);
    }
    builder
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                paths
                    .par_iter()
                    .map(|path| scan_one(path, trie, config))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), scanning sequentially");
            sequential()
        })
}

/// Token text with line breaks and tabs made visible.
fn visible_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// Print the tokens of one successful scan.
pub fn render_report(path: &Path, tokens: &[Token], out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Tokens for '{}' ({} tokens):",
        path.display(),
        tokens.len()
    )?;
    if tokens.is_empty() {
        writeln!(out, "No tokens were returned.")?;
    }
    for token in tokens {
        writeln!(
            out,
            "  Type: {}, Value: {}",
            token.kind(),
            visible_text(token.text())
        )?;
    }
    Ok(())
}

/// Run `impc lex`. Returns `false` if any file failed.
pub fn lex_files(options: &LexOptions) -> bool {
    let config = options.scan_config();
    if let Err(e) = config.validate() {
        eprintln!("{}", describe_error(&ScanError::from(e)));
        return false;
    }
    let trie = match options.trie() {
        Ok(trie) => trie,
        Err(e) => {
            eprintln!("{}", describe_error(&ScanError::from(e)));
            return false;
        }
    };

    let reports = scan_files(&options.paths, &trie, &config, options.jobs);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut ok = true;
    for report in &reports {
        match &report.result {
            Ok(tokens) => {
                if let Err(e) = render_report(&report.path, tokens, &mut out) {
                    eprintln!("error: failed to write output: {e}");
                    return false;
                }
            }
            Err(err) => {
                ok = false;
                let _ = out.flush();
                eprintln!("{} ({})", describe_error(err), report.path.display());
            }
        }
    }
    ok
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
