//! CLI entry point for blog-kit

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_kit::commands::list::ListOptions;
use blog_kit::commands::theme::ThemeAction;
use blog_kit::theme::{RevealOrigin, Theme};

#[derive(Parser)]
#[command(name = "blog-kit")]
#[command(version)]
#[command(about = "Frontmatter, reading time, table of contents and theme utilities for a static blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts or tags
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only posts with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Page to show, 1-based
        #[arg(short, long)]
        page: Option<usize>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single post
    Show {
        /// Post id
        id: String,

        /// Render the body to HTML
        #[arg(long)]
        html: bool,
    },

    /// Print the table of contents of a post
    Toc {
        /// Post id
        id: String,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Read or change the light/dark theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeCommand>,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand)]
enum ThemeCommand {
    /// Print the current theme
    Get,

    /// Switch to the other theme
    Toggle {
        /// Reveal animation origin, x coordinate
        #[arg(short, long, requires = "y", allow_negative_numbers = true)]
        x: Option<f64>,

        /// Reveal animation origin, y coordinate
        #[arg(short, long, requires = "x", allow_negative_numbers = true)]
        y: Option<f64>,
    },

    /// Force a theme (light, dark)
    Set { theme: Theme },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_kit=debug,info"
    } else {
        "blog_kit=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List {
            r#type,
            tag,
            page,
            json,
        } => {
            let blog = blog_kit::Blog::new(&base_dir)?;
            tracing::debug!("Listing {} from {:?}", r#type, blog.content_dir);
            let options = ListOptions { tag, page, json };
            blog_kit::commands::list::run(&blog, &r#type, &options)?;
        }

        Commands::Show { id, html } => {
            let blog = blog_kit::Blog::new(&base_dir)?;
            blog_kit::commands::show::run(&blog, &id, html)?;
        }

        Commands::Toc { id, json } => {
            let blog = blog_kit::Blog::new(&base_dir)?;
            blog_kit::commands::toc::run(&blog, &id, json)?;
        }

        Commands::Theme { action } => {
            let blog = blog_kit::Blog::new(&base_dir)?;
            let action = match action.unwrap_or(ThemeCommand::Get) {
                ThemeCommand::Get => ThemeAction::Get,
                ThemeCommand::Toggle { x, y } => {
                    ThemeAction::Toggle(x.zip(y).map(|(x, y)| RevealOrigin::new(x, y)))
                }
                ThemeCommand::Set { theme } => ThemeAction::Set(theme),
            };
            blog_kit::commands::theme::run(&blog, action)?;
        }

        Commands::Version => {
            println!("blog-kit version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
