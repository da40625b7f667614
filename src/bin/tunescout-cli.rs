use clap::{Parser, Subcommand};
use tunescout::{DisplayStatus, SearchSession, TrackLookupApi, TrackListing};

#[derive(Parser)]
#[command(name = "tunescout-cli")]
#[command(about = "CLI for tunescout - iTunes album search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog for albums
    Search {
        /// Search query
        query: String,
    },
    /// List the tracks of an album
    Tracks {
        /// Album collection id
        collection_id: u64,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { query } => {
            let mut session = SearchSession::new();
            session.search(&query).await;
            print_search(&session);
        }
        Commands::Tracks { collection_id } => {
            let api = TrackLookupApi::new();
            let listing = TrackListing::from_lookup(api.tracks(collection_id).await);
            print_tracks(&listing);
        }
    }
}

fn print_search(session: &SearchSession) {
    match session.status() {
        DisplayStatus::Idle => println!("Start your search"),
        DisplayStatus::NoResults => println!("No results"),
        DisplayStatus::Error(message) => println!("{}", message),
        DisplayStatus::HasResults => {
            for (index, album) in session.albums().iter().enumerate() {
                let explicit = if album.is_explicit() { " [explicit]" } else { "" };
                let id = album
                    .collection_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{}. {} — {} ({}, {}) {}{} (id: {})",
                    index + 1,
                    album.artist_name,
                    album.collection_name,
                    album.release_date_label(),
                    album.primary_genre_name,
                    album.price_label(),
                    explicit,
                    id
                );
            }
        }
    }
}

fn print_tracks(listing: &TrackListing) {
    if let Some(message) = listing.error() {
        println!("{}", message);
        return;
    }

    println!("Tracks count: {}", listing.track_count());
    for (index, track) in listing.tracks().iter().enumerate() {
        let name = track.track_name.as_deref().unwrap_or("Unknown track");
        println!("{}. {}", index + 1, name);
    }
}
