//! Command-line front for poking at the gallery data layer: fetches one
//! page or one item and prints a plain-text summary.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use stock_gallery::gallery;
use stock_gallery::{Config, PexelsClient};

#[derive(Debug, Parser)]
#[command(name = "stock-gallery", about = "Browse Pexels photos and videos")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Curated photos, or a topic search
    Photos {
        topic: Option<String>,
        /// 1-based page number
        #[arg(long)]
        page: Option<String>,
    },
    /// Popular videos, or a topic search
    Videos {
        topic: Option<String>,
        #[arg(long)]
        page: Option<String>,
    },
    /// One photo by id
    Photo { id: u64 },
    /// One video by id
    Video { id: u64 },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let client = PexelsClient::new(&config);

    let cli = Cli::parse();
    let found = match cli.command {
        Command::Photos { topic, page } => {
            match gallery::photo_gallery(&client, topic.as_deref(), page.as_deref()).await {
                Some(result) => {
                    println!(
                        "page {} of {} results",
                        result.page.page, result.page.total_results
                    );
                    for photo in &result.page.photos {
                        let placeholder = if photo.blurred_data_url.is_some() {
                            "placeholder ready"
                        } else {
                            "no placeholder"
                        };
                        println!(
                            "  #{} {} by {} ({placeholder})",
                            photo.id, photo.alt, photo.photographer
                        );
                    }
                    print_links(&result.links);
                    true
                }
                None => false,
            }
        }
        Command::Videos { topic, page } => {
            match gallery::video_gallery(&client, topic.as_deref(), page.as_deref()).await {
                Some(result) => {
                    println!(
                        "page {} of {} results",
                        result.page.page, result.page.total_results
                    );
                    for video in &result.page.videos {
                        println!(
                            "  #{} {}x{} {}s by {}",
                            video.id, video.width, video.height, video.duration, video.user.name
                        );
                    }
                    print_links(&result.links);
                    true
                }
                None => false,
            }
        }
        Command::Photo { id } => match gallery::photo_details(&client, id).await {
            Some(photo) => {
                println!("#{} {} by {}", photo.id, photo.alt, photo.photographer);
                println!("  {}", photo.src.large2x);
                true
            }
            None => false,
        },
        Command::Video { id } => match gallery::video_details(&client, id).await {
            Some(details) => {
                println!("#{} {}", details.video.id, details.title);
                println!("  by {}", details.video.user.name);
                for file in &details.video.video_files {
                    println!("  [{}] {}", file.quality, file.link);
                }
                true
            }
            None => false,
        },
    };

    if !found {
        println!("Nothing found.");
        std::process::exit(1);
    }
}

fn print_links(links: &stock_gallery::pagination::PageLinks) {
    match (links.prev_page, links.next_page) {
        (Some(prev), Some(next)) => println!("<< page {prev} | page {next} >>"),
        (Some(prev), None) => println!("<< page {prev}"),
        (None, Some(next)) => println!("page {next} >>"),
        (None, None) => {}
    }
}
