use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineArgs {
    #[arg(help = "URLs to clean")]
    pub urls: Vec<String>,

    #[arg(
        long = "src-files",
        value_delimiter = ',',
        help = "Comma-separated list of CSV file paths containing URLs"
    )]
    pub src_files: Vec<String>,

    #[arg(
        long,
        help = "Report which tracking parameters each URL carries instead of rewriting it"
    )]
    pub check: bool,

    #[arg(long, help = "Emit results as a JSON array of per-URL reports")]
    pub json: bool,
}

impl CommandLineArgs {
    pub fn parse_args() -> Self {
        let args = CommandLineArgs::parse();

        info!("Parsed {} URL(s) from arguments", args.urls.len());
        info!("Parsed {} file(s) from --src-files", args.src_files.len());
        if args.check {
            info!("Check mode enabled: URLs will be inspected, not rewritten");
        }

        args
    }
}
