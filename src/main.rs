use clap::Parser;
use color_eyre::eyre::eyre;
use poi_ingest::poi_ingestor::DEFAULT_MAX_PHOTO_BYTES;
use poi_ingest::utils::list_photos_walkdir_filtered;
use poi_ingest::{
    ExifBackend, IngestOutcome, PhotoInput, PoiIngestError, PoiIngestor, UploadLimits,
    UploadSession,
};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Turn photos into draft points of interest and print them as JSON.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Photo files or folders to ingest.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Largest accepted photo, in MiB.
    #[arg(long, default_value_t = DEFAULT_MAX_PHOTO_BYTES / (1024 * 1024))]
    max_mb: u64,

    /// Skip the nearest-place lookup.
    #[arg(long)]
    no_geocode: bool,

    /// Take the visit date from the file name when EXIF has none.
    #[arg(long)]
    filename_dates: bool,

    /// Read EXIF with exiftool, optionally at the given path.
    #[arg(long, num_args = 0..=1, value_name = "PATH")]
    exiftool: Option<Option<PathBuf>>,

    /// Also descend into hidden folders.
    #[arg(long)]
    include_hidden: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut files = Vec::new();
    for path in &args.paths {
        files.extend(list_photos_walkdir_filtered(path, args.include_hidden)?);
    }
    if files.is_empty() {
        return Err(eyre!("no photos found"));
    }
    info!("Found {} photos", files.len());

    let limits = UploadLimits::with_max_megabytes(args.max_mb);
    let mut photos = Vec::with_capacity(files.len());
    let mut skipped = 0;
    for path in &files {
        match PhotoInput::from_path_checked(path, &limits) {
            Ok(photo) => photos.push(photo),
            Err(PoiIngestError::Ingest(e)) => {
                warn!("{e}");
                skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    let backend = match args.exiftool {
        Some(executable) => ExifBackend::ExifTool(executable),
        None => ExifBackend::Kamadak,
    };
    let ingestor = PoiIngestor::builder()
        .backend(backend)
        .limits(limits)
        .reverse_geocode(!args.no_geocode)
        .filename_date_fallback(args.filename_dates)
        .build();

    let mut session = UploadSession::new();
    let outcomes = ingestor.ingest_batch(&mut session, photos);
    let rejected = skipped
        + outcomes
            .iter()
            .filter(|o| matches!(o, IngestOutcome::Rejected(_)))
            .count();

    println!("{}", serde_json::to_string_pretty(session.candidates())?);
    info!(
        added = session.len(),
        rejected,
        unplaced = session.needs_placement().count(),
        "Done"
    );

    Ok(())
}
