use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use spotweb::{AlbumType, ClientConfig, Market, SpotifyApi};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spotweb-cli")]
#[command(about = "Inspect Spotify albums", long_about = None)]
struct Cli {
    /// OAuth access token (can also be set via SPOTIFY_ACCESS_TOKEN env var)
    #[arg(long, env = "SPOTIFY_ACCESS_TOKEN", hide_env_values = true)]
    token: String,

    /// API base URL
    #[arg(long, env = "SPOTIFY_API_BASE_URL", default_value = spotweb::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "SPOTIFY_TIMEOUT_SECS", default_value_t = 30)]
    timeout: u64,

    /// Market (ISO 3166-1 alpha-2 code) to request content for
    #[arg(short, long, env = "SPOTIFY_MARKET")]
    market: Option<Market>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a full album
    Album {
        /// Album ID
        id: String,
    },
    /// List one page of an album's tracks
    Tracks {
        /// Album ID
        id: String,

        #[arg(short, long, default_value_t = 50)]
        limit: u32,

        #[arg(short, long, default_value_t = 0)]
        offset: u32,
    },
    /// List one page of an artist's albums
    ArtistAlbums {
        /// Artist ID
        id: String,

        /// Album groups to include
        #[arg(short, long, value_enum)]
        group: Vec<Group>,

        #[arg(short, long, default_value_t = 20)]
        limit: u32,

        #[arg(short, long, default_value_t = 0)]
        offset: u32,

        /// Fetch the full album for each entry
        #[arg(long)]
        full: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Group {
    Album,
    Single,
    Compilation,
    AppearsOn,
}

impl From<Group> for AlbumType {
    fn from(g: Group) -> Self {
        match g {
            Group::Album => AlbumType::Album,
            Group::Single => AlbumType::Single,
            Group::Compilation => AlbumType::Compilation,
            Group::AppearsOn => AlbumType::AppearsOn,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let mut config = ClientConfig::new(cli.token);
    config.base_url = cli.base_url;
    config.timeout = Duration::from_secs(cli.timeout);
    let api = SpotifyApi::new(config)?;
    let market = cli.market;

    match cli.command {
        Commands::Album { id } => match api.get_album(&id, market).await? {
            Some(album) => {
                let release = album
                    .release()?
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                println!("{} - {}", album.artists_string(", "), album.name);
                println!("   Type: {}", album.album_kind()?);
                println!("   Released: {}", release);
                println!("   Label: {}", album.label);
                println!("   Popularity: {}", album.popularity);
                println!("   Tracks: {}", album.total_tracks);
                for (kind, value) in album.external_id_pairs() {
                    println!("   {}: {}", kind.to_uppercase(), value);
                }
                for text in album.copyright_texts() {
                    println!("   © {}", text);
                }
            }
            None => println!("Album {} not found", id),
        },
        Commands::Tracks { id, limit, offset } => {
            match api.get_album_tracks(&id, market, limit, offset).await? {
                Some(page) => {
                    for track in &page.items {
                        println!(
                            "{}-{:02}. {} - {} [{}]",
                            track.disc_number,
                            track.track_number,
                            track.artists_string(", "),
                            track.name,
                            track.duration_formatted()
                        );
                    }
                    println!(
                        "({}..{} of {})",
                        page.offset,
                        page.offset as usize + page.items.len(),
                        page.total
                    );
                }
                None => println!("Album {} not found", id),
            }
        }
        Commands::ArtistAlbums {
            id,
            group,
            limit,
            offset,
            full,
        } => {
            let groups: Vec<AlbumType> = group.into_iter().map(Into::into).collect();
            let Some(page) = api
                .get_artist_albums(&id, &groups, market, limit, offset)
                .await?
            else {
                println!("Artist {} not found", id);
                return Ok(());
            };

            for (i, simplified) in page.items.iter().enumerate() {
                let group = simplified
                    .album_group_kind()?
                    .map(|g| g.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{}. {} [{}] (ID: {})",
                    offset as usize + i + 1,
                    simplified.name,
                    group,
                    simplified.id
                );

                if full {
                    match simplified.full_album(&api, market).await? {
                        Some(album) => println!(
                            "   Label: {}, popularity {}",
                            album.label, album.popularity
                        ),
                        None => println!("   (full album unavailable)"),
                    }
                }
            }
        }
    }

    Ok(())
}
