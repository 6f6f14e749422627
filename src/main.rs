use anyhow::Result;
use log::{info, warn};
use std::time::Instant;
use url::Url;

use linkscrub::cli_args::CommandLineArgs;
use linkscrub::sources::UrlSources;
use linkscrub::UrlReport;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let start_time = Instant::now();
    info!("linkscrub v{} starting up...", env!("CARGO_PKG_VERSION"));

    let cli_args = CommandLineArgs::parse_args();

    let all_urls = fetch_urls(&cli_args)?;
    info!("Found {} URL(s) to process", all_urls.len());

    let reports = build_reports(&all_urls);

    if cli_args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if cli_args.check {
        print_check_results(&reports);
    } else {
        for report in &reports {
            println!("{}", report.cleaned);
        }
    }

    log_summary(&reports, start_time);
    Ok(())
}

fn fetch_urls(cli_args: &CommandLineArgs) -> Result<Vec<String>> {
    let sources = UrlSources::new(cli_args)?;
    Ok(sources
        .urls
        .into_iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect())
}

fn build_reports(all_urls: &[String]) -> Vec<UrlReport> {
    let mut reports = Vec::with_capacity(all_urls.len());
    for url in all_urls {
        if Url::parse(url).is_err() {
            warn!(
                "'{}' is not a parseable URL. Passing through unchanged.",
                url
            );
        }
        reports.push(UrlReport::for_url(url));
    }
    reports
}

fn print_check_results(reports: &[UrlReport]) {
    for report in reports {
        if report.tracking_params.is_empty() {
            println!("{}: no tracking parameters", report.original);
        } else {
            println!("{}: {}", report.original, report.tracking_params.join(", "));
        }
    }
}

fn log_summary(reports: &[UrlReport], start_time: Instant) {
    let cleaned_count = reports.iter().filter(|r| r.was_cleaned()).count();
    let untouched_count = reports.len() - cleaned_count;

    info!(
        "Cleaned {} URL(s), left {} unchanged, in {:.2}ms",
        cleaned_count,
        untouched_count,
        start_time.elapsed().as_secs_f64() * 1000.0
    );
}
