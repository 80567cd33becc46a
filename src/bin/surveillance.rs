use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use surveillance_station::dto::{
    DownloadRecordingRequest, ListBookmarksRequest, ListLicensePlateEventsRequest,
    UpdateDeviceLocationRequest,
};
use surveillance_station::{Config, SurveillanceApiClient};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "surveillance")]
#[command(about = "Surveillance Station command line client", long_about = None)]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List cameras
    Cameras {
        #[arg(short, long)]
        keyword: Option<String>,
    },
    /// Show detailed info for comma separated camera ids
    CameraInfo {
        cam_ids: String,
        /// Include digital input/output lines
        #[arg(long)]
        didos: bool,
    },
    /// Run a PTZ action on a camera
    Ptz { cam_id: String, action: String },
    /// Take a snapshot and write the JPEG to a file
    Snapshot {
        cam_id: String,
        out: PathBuf,
        /// 0: high quality, 1: balanced
        #[arg(short, long, default_value = "0")]
        profile: i32,
        /// Also keep the snapshot on the server
        #[arg(long)]
        save: bool,
    },
    /// Download a recording window to a file
    Recording {
        cam_id: String,
        start: String,
        end: String,
        out: PathBuf,
    },
    /// List bookmarks for comma separated camera ids
    Bookmarks {
        cam_ids: String,
        #[arg(short, long)]
        keyword: Option<String>,
    },
    /// List the license plate database
    Plates {
        #[arg(short, long)]
        keyword: Option<String>,
    },
    /// List license plate events
    PlateEvents {
        #[arg(long)]
        cam_ids: Option<String>,
        #[arg(short, long, default_value = "100")]
        limit: u32,
    },
    /// Move a device on the map
    Locate {
        device_id: String,
        #[arg(long)]
        lat: Option<f64>,
        #[arg(long)]
        lon: Option<f64>,
    },
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    tokio::runtime::Runtime::new()?.block_on(run(cli))
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_path(&cli.config)?;
    let settings = &config.surveillance;
    let mut client = SurveillanceApiClient::from_config(settings)?;

    let logged_in = if client.session_token().is_some() {
        false
    } else {
        match (settings.account.as_deref(), settings.password.as_deref()) {
            (Some(account), Some(password)) => {
                client.login(account, password).await?;
                true
            }
            _ => bail!("config needs either sid or account and password"),
        }
    };

    let outcome = execute(&client, cli.command).await;

    if logged_in {
        client.logout().await?;
    }
    outcome
}

async fn execute(client: &SurveillanceApiClient, command: Commands) -> Result<()> {
    match command {
        Commands::Cameras { keyword } => {
            let list = client.list_cameras(keyword.as_deref()).await?;
            println!("{} camera(s)", list.total);
            for camera in list.cameras {
                println!(
                    "{:>4}  {:<24} {}",
                    camera.cam_id,
                    camera.name,
                    camera.ip.unwrap_or_default()
                );
            }
        }
        Commands::CameraInfo { cam_ids, didos } => {
            for camera in client.get_camera_info(&cam_ids, didos).await? {
                println!("{camera:#?}");
            }
        }
        Commands::Ptz { cam_id, action } => {
            client.perform_ptz(&cam_id, &action).await?;
            info!("PTZ {} sent to camera {}", action, cam_id);
        }
        Commands::Snapshot {
            cam_id,
            out,
            profile,
            save,
        } => {
            let jpeg = client
                .take_and_download_snapshot(&cam_id, profile, save, None)
                .await?;
            tokio::fs::write(&out, &jpeg).await?;
            info!("Wrote {} bytes to {}", jpeg.len(), out.display());
        }
        Commands::Recording {
            cam_id,
            start,
            end,
            out,
        } => {
            let request = DownloadRecordingRequest::new(&cam_id, &start, &end);
            let bytes = client.download_recording(&request).await?;
            tokio::fs::write(&out, &bytes).await?;
            info!("Wrote {} bytes to {}", bytes.len(), out.display());
        }
        Commands::Bookmarks { cam_ids, keyword } => {
            let request = ListBookmarksRequest {
                cam_ids: &cam_ids,
                keyword: keyword.as_deref(),
                ..Default::default()
            };
            let list = client.list_bookmarks(&request).await?;
            for bookmark in list.bookmarks {
                println!(
                    "{:>6}  cam {:<4} {}  {}",
                    bookmark.bookmark_id, bookmark.cam_id, bookmark.start_time, bookmark.name
                );
            }
        }
        Commands::Plates { keyword } => {
            let list = client.list_license_plates(keyword.as_deref()).await?;
            println!("{} plate(s)", list.total);
            for plate in list.license_plates {
                println!(
                    "{:<12} type {}  {}",
                    plate.plate_number,
                    plate.plate_type,
                    plate.description.unwrap_or_default()
                );
            }
        }
        Commands::PlateEvents { cam_ids, limit } => {
            let request = ListLicensePlateEventsRequest {
                cam_ids: cam_ids.as_deref(),
                limit,
                ..Default::default()
            };
            let list = client.list_license_plate_events(&request).await?;
            println!("{} event(s)", list.total);
            for event in list.events {
                println!(
                    "{:>6}  {:<12} cam {:<4} {}",
                    event.event_id,
                    event.plate_number,
                    event.cam_id,
                    event.start_time.unwrap_or_default()
                );
            }
        }
        Commands::Locate { device_id, lat, lon } => {
            let request = UpdateDeviceLocationRequest {
                device_id: &device_id,
                latitude: lat,
                longitude: lon,
                ..Default::default()
            };
            let item = client.update_device_location(&request).await?;
            println!("{item:#?}");
        }
    }
    Ok(())
}
