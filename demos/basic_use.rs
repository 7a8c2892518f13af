use poi_ingest::{PhotoInput, PoiIngestor, UploadSession};
use std::path::Path;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let path = Path::new("assets/sunset.jpg");
    let ingestor = PoiIngestor::builder().build();
    let mut session = UploadSession::new();

    let sequence = ingestor.ingest_one(&mut session, PhotoInput::from_path(path)?)?;
    if let Some(candidate) = session.get_mut(sequence) {
        if let Some(notice) = candidate.placement_notice() {
            println!("{notice}");
        }
        candidate.add_tag("sunset")?;
    }

    println!("{}", serde_json::to_string_pretty(session.candidates())?);
    for (sequence, result) in session.submit_all("demo-map", false) {
        match result {
            Ok(submission) => println!("#{sequence}: {}", serde_json::to_string(&submission)?),
            Err(e) => println!("#{sequence}: {e}"),
        }
    }

    Ok(())
}
