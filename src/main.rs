use clap::{Parser, Subcommand};
use simple_folio::contact::ContactSubmission;
use simple_folio::content::ContentLoader;
use simple_folio::gallery::{self, FilterSelection};
use simple_folio::{config, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simple-folio")]
#[command(about = "Static site generator for personal portfolios")]
#[command(long_about = "\
Static site generator for personal portfolios

Three YAML files describe who you are and what you built. The generator turns
them into an About page, a filterable project gallery, and a contact page.

Content structure:

  content/
  ├── config.toml                  # Site config (optional)
  ├── assets/                      # Copied to the output root (resume PDF, favicon)
  └── data/
      ├── profile.yaml             # Mapping: tagline, experience, skills, contact...
      ├── achievements.yaml        # List: year, issuer, title
      └── projects.yaml            # List: name, category, technologies, maturity...

Every field is optional. Missing text renders as empty, missing lists as
empty lists, and a non-numeric maturity as 0.

Run 'simple-folio gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Produce the HTML site from the content directory
    Build,
    /// Validate content without building
    Check,
    /// List the categories and technologies projects can be filtered by
    Facets,
    /// Show the projects matching a filter selection
    Filter {
        /// Category to include (repeatable, any-of)
        #[arg(long = "category")]
        categories: Vec<String>,
        /// Technology every project must use (repeatable, all-of)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Case-insensitive text matched against name, summary, and highlights
        #[arg(long)]
        search: Option<String>,
        /// Print the matching projects as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a contact form submission locally
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let content = ContentLoader::for_content_root(&cli.source).load_all()?;

            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::generate(&content, &site_config, &cli.source, &cli.output)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            config::load_config(&cli.source)?;
            let loader = ContentLoader::for_content_root(&cli.source);
            let content = loader.load_all()?;
            let facets = gallery::derive_facets(&content.projects);
            output::print_check_output(&content, &facets, &loader, &cli.source);
            println!("==> Content is valid");
        }
        Command::Facets => {
            let projects = ContentLoader::for_content_root(&cli.source).projects()?;
            output::print_facets_output(&gallery::derive_facets(&projects));
        }
        Command::Filter {
            categories,
            tags,
            search,
            json,
        } => {
            let projects = ContentLoader::for_content_root(&cli.source).projects()?;
            let selection = FilterSelection {
                categories: categories.into_iter().collect(),
                tags: tags.into_iter().collect(),
                search_term: search.unwrap_or_default(),
            };
            let visible = gallery::filter(&projects, &selection);
            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                output::print_filter_output(&selection, &visible, projects.len());
            }
        }
        Command::Contact {
            name,
            email,
            message,
        } => {
            match ContactSubmission::new(name, email, message).validate() {
                Ok(confirmation) => output::print_contact_output(&confirmation),
                Err(err) => {
                    output::print_contact_error(&err);
                    std::process::exit(1);
                }
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
