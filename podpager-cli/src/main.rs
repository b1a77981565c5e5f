use clap::{Parser, Subcommand};
use podpager_core::{
    NavButton, PagerError, PodcastPager, default_listing_path, format_controls, format_entry,
    format_page_summary, load_listing,
};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "podpager")]
#[command(about = "Browse a podcast listing five podcasts at a time")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of the listing
    Show {
        /// Listing JSON file or podmaker TOML config (defaults to the listing
        /// in the data directory)
        #[arg(short, long)]
        listing: Option<PathBuf>,
        /// Page to show, 1-indexed
        #[arg(short, long, default_value = "1")]
        page: usize,
    },
    /// Click through the page controls and print the state after each click
    Browse {
        #[arg(short, long)]
        listing: Option<PathBuf>,
        /// Clicks to replay: `prev`, `next` or a page number
        actions: Vec<Action>,
    },
    /// Write the paginated page as HTML
    Render {
        #[arg(short, long)]
        listing: Option<PathBuf>,
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the listing as JSON, e.g. to turn a podmaker config into a listing
    Export {
        #[arg(short, long)]
        listing: Option<PathBuf>,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Prev,
    Next,
    Page(usize),
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prev" | "previous" | "p" => Ok(Action::Prev),
            "next" | "n" => Ok(Action::Next),
            other => other
                .parse::<usize>()
                .map(Action::Page)
                .map_err(|_| format!("expected 'prev', 'next' or a page number, got '{}'", s)),
        }
    }
}

fn listing_path(listing: Option<PathBuf>) -> Result<PathBuf, PagerError> {
    let path = match listing {
        Some(path) => path,
        None => default_listing_path()?,
    };
    log::info!("Using listing {}", path.display());
    Ok(path)
}

fn open_pager(listing: Option<PathBuf>) -> Result<PodcastPager, PagerError> {
    PodcastPager::from_path(&listing_path(listing)?)
}

fn print_page(pager: &PodcastPager) {
    let snapshot = pager.snapshot();
    if let Some(title) = &pager.listing().title {
        println!("{}", title);
    }
    println!("{}", format_page_summary(&snapshot));
    for (offset, entry) in pager.current_entries().iter().enumerate() {
        println!("  {}. {}", snapshot.visible.start + offset + 1, format_entry(entry));
    }
    println!("{}", format_controls(&snapshot));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { listing, page } => {
            let mut pager = match open_pager(listing) {
                Ok(pager) => pager,
                Err(e) => {
                    eprintln!("Failed to open listing: {}", e);
                    std::process::exit(1);
                }
            };
            pager.go_to_page(page);
            print_page(&pager);
        }
        Commands::Browse { listing, actions } => {
            let mut pager = match open_pager(listing) {
                Ok(pager) => pager,
                Err(e) => {
                    eprintln!("Failed to open listing: {}", e);
                    std::process::exit(1);
                }
            };
            print_page(&pager);

            for action in actions {
                let target = match action {
                    Action::Prev => Some(pager.nav_control(NavButton::Previous)),
                    Action::Next => Some(pager.nav_control(NavButton::Next)),
                    Action::Page(page) => pager.page_control(page),
                };
                let Some(target) = target else {
                    eprintln!("No control for {:?}, skipping", action);
                    continue;
                };
                println!();
                println!("> {:?}", action);
                pager.click(target);
                print_page(&pager);
            }
        }
        Commands::Render {
            listing,
            page,
            output,
        } => {
            let mut pager = open_pager(listing)?;
            pager.go_to_page(page);
            let html = pager.to_html();
            match output {
                Some(path) => {
                    std::fs::write(&path, html)?;
                    println!("Page saved to: {}", path.display());
                }
                None => print!("{}", html),
            }
        }
        Commands::Export { listing, output } => {
            let listing = load_listing(&listing_path(listing)?)?;
            let json = listing.to_json()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!("Exported {} podcasts to: {}", listing.len(), path.display());
                }
                None => println!("{}", json),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions() {
        assert!(matches!(Action::from_str("next"), Ok(Action::Next)));
        assert!(matches!(Action::from_str("PREV"), Ok(Action::Prev)));
        assert!(matches!(Action::from_str("3"), Ok(Action::Page(3))));
        assert!(Action::from_str("sideways").is_err());
    }

    #[test]
    fn cli_accepts_browse_actions() {
        let cli = Cli::try_parse_from(["podpager", "browse", "-l", "x.json", "next", "2", "prev"])
            .unwrap();
        match cli.command {
            Commands::Browse { listing, actions } => {
                assert_eq!(listing, Some(PathBuf::from("x.json")));
                assert_eq!(actions.len(), 3);
            }
            _ => panic!("expected browse"),
        }
    }

    #[test]
    fn cli_accepts_export_from_config() {
        let cli = Cli::try_parse_from([
            "podpager",
            "export",
            "--listing",
            "podmaker.toml",
            "-o",
            "listing.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Export { listing, output } => {
                assert_eq!(listing, Some(PathBuf::from("podmaker.toml")));
                assert_eq!(output, Some(PathBuf::from("listing.json")));
            }
            _ => panic!("expected export"),
        }
    }
}
