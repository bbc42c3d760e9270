use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{
    DelimiterPolicy, ParseOptions, SiteLayout, build_site, extract_title, markdown_to_html_with,
};
use std::path::{Path, PathBuf};

/// Build a static HTML site from a directory of markdown pages
#[derive(Parser, Debug)]
#[command(name = "markdown-sitegen", version)]
struct Cli {
    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the whole site into the output directory
    Build {
        /// Config file, defaults to ./sitegen.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Prefix for root-relative links, overrides the config file
        #[arg(short, long)]
        basepath: Option<String>,
        /// Fail pages with unclosed inline delimiters
        #[arg(long)]
        strict: bool,
    },
    /// Convert one markdown file and print the HTML to stdout
    Render {
        file: PathBuf,
        #[arg(long)]
        strict: bool,
    },
    /// Write a default config file
    Init {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Build {
            config,
            basepath,
            strict,
        } => build(config, basepath, strict),
        Command::Render { file, strict } => render(&file, strict),
        Command::Init { config } => init(config),
    }
}

fn build(config_path: Option<PathBuf>, basepath: Option<String>, strict: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::config_path);
    let mut config = match Config::load_from_path(&config_path)? {
        Some(config) => {
            log::info!("Using config {}", config_path.display());
            config
        }
        None => {
            log::info!(
                "No config at {}, using defaults",
                config_path.display()
            );
            Config::default()
        }
    };
    if let Some(basepath) = basepath {
        config.basepath = basepath;
    }
    config.strict_delimiters |= strict;

    let layout = site_layout(&config);
    let report = build_site(&layout)
        .with_context(|| format!("Failed to build site into {}", layout.output_dir.display()))?;

    if !report.is_success() {
        for failure in &report.failures {
            log::error!("{}: {}", failure.source, failure.error);
        }
        bail!("{} page(s) failed to build", report.failures.len());
    }
    Ok(())
}

fn render(file: &Path, strict: bool) -> Result<()> {
    let markdown = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let html = markdown_to_html_with(&markdown, &parse_options(strict))
        .with_context(|| format!("Failed to convert {}", file.display()))?;

    match extract_title(&markdown) {
        Ok(title) => log::info!("Title: {title}"),
        Err(e) => log::warn!("{}: {e}", file.display()),
    }
    println!("{html}");
    Ok(())
}

fn init(config_path: Option<PathBuf>) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::config_path);
    if config_path.exists() {
        bail!("Config file {} already exists", config_path.display());
    }
    Config::default().save_to_path(&config_path)?;
    log::info!("Wrote {}", config_path.display());
    Ok(())
}

fn parse_options(strict: bool) -> ParseOptions {
    if strict {
        ParseOptions::strict()
    } else {
        ParseOptions::default()
    }
}

fn site_layout(config: &Config) -> SiteLayout {
    SiteLayout {
        content_dir: config.content_dir.clone(),
        static_dir: Some(config.static_dir.clone()),
        output_dir: config.output_dir.clone(),
        template_path: config.template_path.clone(),
        basepath: config.normalized_basepath(),
        parse: parse_options(config.strict_delimiters),
    }
}
