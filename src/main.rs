use std::path::PathBuf;

use clap::Parser;
use mdsite::site::{self, BuildReport};
use mdsite::{Config, ErrorPolicy, SiteError};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mdsite", version)]
#[command(about = "Convert a tree of Markdown files into a static HTML site")]
struct Cli {
    /// Prefix for root-relative links, e.g. "/my-project/" (overrides site.base_path)
    base_path: Option<String>,

    /// Config file; defaults apply if it does not exist
    #[arg(short, long, default_value = "mdsite.toml")]
    config: PathBuf,

    /// Markdown source directory
    #[arg(long)]
    content: Option<PathBuf>,

    /// Static asset directory copied into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Page template file
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip pages that fail to render instead of stopping
    #[arg(long)]
    skip_invalid: bool,

    /// Log each generated page
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        let site = &mut config.site;
        if let Some(base_path) = self.base_path {
            site.base_path = base_path;
        }
        if let Some(content) = self.content {
            site.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            site.static_dir = static_dir;
        }
        if let Some(template) = self.template {
            site.template = template;
        }
        if let Some(output) = self.output {
            site.output_dir = output;
        }
        if self.skip_invalid {
            config.build.on_error = ErrorPolicy::Skip;
        }
    }
}

fn run(cli: Cli) -> Result<(Config, BuildReport), SiteError> {
    let mut config = Config::load(&cli.config)?;
    cli.apply(&mut config);
    let report = site::generate_site(&config)?;
    Ok((config, report))
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(cli) {
        Ok((config, report)) => {
            print!(
                "Generated {} pages into {}",
                report.generated,
                config.site.output_dir.display()
            );
            if report.skipped > 0 {
                print!(" ({} skipped)", report.skipped);
            }
            println!();
        }
        Err(e) => {
            eprintln!("Error: {}", error_chain(&e));
            std::process::exit(1);
        }
    }
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
