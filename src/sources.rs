use anyhow::{Context, Result};
use csv::ReaderBuilder;
use log::error;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli_args::CommandLineArgs;

/// Gathers the URLs to process from CLI arguments, source files, and, when
/// neither yields anything, an interactive prompt.
pub struct UrlSources {
    pub urls: Vec<String>,
}

impl UrlSources {
    pub fn new(cli_args: &CommandLineArgs) -> Result<Self> {
        let mut sources = UrlSources { urls: Vec::new() };

        sources.urls.extend(cli_args.urls.clone());
        for file_path in &cli_args.src_files {
            sources.urls.extend(urls_from_file(file_path)?);
        }

        if sources.urls.is_empty() {
            sources.prompt_for_input()?;
        }

        Ok(sources)
    }

    fn prompt_for_input(&mut self) -> Result<()> {
        println!("Enter/paste the URL(s) to clean, comma-separated:");
        io::stdout().flush()?;

        self.urls = read_urls_from(&mut io::stdin().lock())?;
        Ok(())
    }
}

/// Reads one non-empty, comma-separated line of URLs from `reader`. A closed
/// stream (0 bytes read) ends the prompt with an empty batch instead of
/// retrying forever.
fn read_urls_from(reader: &mut impl BufRead) -> Result<Vec<String>> {
    let mut input = String::new();
    loop {
        input.clear();
        if reader.read_line(&mut input)? == 0 {
            return Ok(Vec::new());
        }

        let user_in = input.trim();
        if user_in.is_empty() {
            error!("No input provided. Try again.");
            continue;
        }

        return Ok(user_in
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect());
    }
}

/// Reads URLs from a CSV file, one or more per record. Missing files are
/// skipped with an error log rather than aborting the batch.
pub fn urls_from_file(file_path: &str) -> Result<Vec<String>> {
    let path = Path::new(file_path);
    if !path.exists() {
        error!("File '{}' not found. Skipping...", file_path);
        return Ok(Vec::new());
    }

    let file =
        File::open(path).with_context(|| format!("Failed to open source file: {}", file_path))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    let mut result = Vec::new();

    for record in reader.records() {
        let record = record.with_context(|| format!("Failed to read record in {}", file_path))?;
        for field in record.iter() {
            let candidate = field.trim();
            if !candidate.is_empty() {
                result.push(candidate.to_string());
            }
        }
    }

    Ok(result)
}
