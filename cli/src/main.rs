//! unipynb CLI - Jupyter notebook output extraction tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unipynb::{
    extract, extract_with_stats, to_json, Dashboard, DashboardConfig, JsonFormat, NotebookParser,
};

#[derive(Parser)]
#[command(name = "unipynb")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract Jupyter notebook outputs as HTML fragments", long_about = None)]
struct Cli {
    /// Input notebook file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the HTML fragments of a notebook
    Extract {
        /// Input notebook file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output fragments as a JSON array
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,
    },

    /// Show notebook information
    Info {
        /// Input notebook file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the dashboard pages
    Pages {
        /// Dashboard configuration file (JSON)
        #[arg(short, long, value_name = "FILE", env = "UNIPYNB_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Render one dashboard page as HTML
    Page {
        /// Page name (e.g. "Data Analysis")
        #[arg(value_name = "NAME")]
        name: String,

        /// Dashboard configuration file (JSON)
        #[arg(short, long, value_name = "FILE", env = "UNIPYNB_CONFIG")]
        config: Option<PathBuf>,

        /// Directory notebook paths are resolved against
        #[arg(short, long, value_name = "DIR", env = "UNIPYNB_BASE_DIR")]
        base: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render every dashboard page to an output directory
    Build {
        /// Dashboard configuration file (JSON)
        #[arg(short, long, value_name = "FILE", env = "UNIPYNB_CONFIG")]
        config: Option<PathBuf>,

        /// Directory notebook paths are resolved against
        #[arg(short, long, value_name = "DIR", env = "UNIPYNB_BASE_DIR")]
        base: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "dashboard")]
        output: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract {
            input,
            output,
            json,
            compact,
        }) => cmd_extract(&input, output.as_deref(), json, compact),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Pages { config }) => cmd_pages(config.as_deref()),
        Some(Commands::Page {
            name,
            config,
            base,
            output,
        }) => cmd_page(&name, config.as_deref(), base.as_deref(), output.as_deref()),
        Some(Commands::Build {
            config,
            base,
            output,
        }) => cmd_build(config.as_deref(), base.as_deref(), &output),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: extract if input is provided
            if let Some(input) = cli.input {
                cmd_extract(&input, None, false, false)
            } else {
                println!("{}", "Usage: unipynb <FILE>".yellow());
                println!("       unipynb --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_dashboard(
    config: Option<&Path>,
    base: Option<&Path>,
) -> Result<Dashboard, Box<dyn std::error::Error>> {
    let mut config = match config {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::default(),
    };

    if let Some(dir) = base {
        config = config.with_base_dir(dir);
    }

    Ok(Dashboard::new(config)?)
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    json: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let fragments = extract(input)?;
    log::info!("Extracted {} fragments from {}", fragments.len(), input.display());

    let content = if json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        to_json(&fragments, format)?
    } else {
        fragments
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    };

    write_or_print(output, &content)
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let parser = NotebookParser::open(input)?;
    let notebook = parser.parse()?;
    let result = extract_with_stats(&notebook);
    let stats = &result.stats;

    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("{}", "Notebook Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), parser.format());
    if let Some(kernel) = notebook.kernel_name() {
        println!("{}: {}", "Kernel".bold(), kernel);
    }
    if let Some(language) = notebook.language() {
        println!("{}: {}", "Language".bold(), language);
    }

    println!();
    println!("{}", "Output Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Cells".bold(), stats.cell_count);
    println!("{}: {}", "Code cells".bold(), stats.code_cell_count);
    println!("{}: {}", "Executed cells".bold(), stats.executed_cell_count);
    println!("{}: {}", "Outputs".bold(), stats.output_count);
    println!("{}: {}", "Skipped outputs".bold(), stats.skipped_output_count);
    println!("{}: {}", "HTML fragments".bold(), stats.html_count);
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!("{}: {}", "Text results".bold(), stats.text_count);

    Ok(())
}

fn cmd_pages(config: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = load_dashboard(config, None)?;
    let config = dashboard.config();

    println!("{}", dashboard.title().cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let count = config.pages.len();
    for (i, page) in config.pages.iter().enumerate() {
        let branch = if i + 1 == count { "└─" } else { "├─" };
        println!(
            "  {} {} {}",
            branch.dimmed(),
            page.name.bold(),
            config.resolve_path(page).display().to_string().dimmed()
        );
    }

    Ok(())
}

fn cmd_page(
    name: &str,
    config: Option<&Path>,
    base: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = load_dashboard(config, base)?;
    let html = dashboard.render_html(name)?;
    write_or_print(output, &html)
}

fn cmd_build(
    config: Option<&Path>,
    base: Option<&Path>,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let dashboard = load_dashboard(config, base)?;
    let pages = &dashboard.config().pages;

    fs::create_dir_all(output)?;

    let pb = ProgressBar::new(pages.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    let mut written = Vec::with_capacity(pages.len());
    for page in pages {
        pb.set_message(format!("Rendering {}...", page.name));
        let html = dashboard.render_html(&page.name)?;
        let filename = format!("{}.html", page.slug());
        fs::write(output.join(&filename), &html)?;
        written.push(filename);
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    let count = written.len();
    for (i, filename) in written.iter().enumerate() {
        let branch = if i + 1 == count { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), filename);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unipynb".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Jupyter notebook output extraction tool");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unipynb".dimmed());
    println!("License: MIT");
}
