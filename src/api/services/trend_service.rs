use crate::api::messages;
use crate::api::services::character_service::failure_message;
use crate::modules::trend::{compute_trend, render_trend, Snapshot};
use crate::utils::client::GameApi;
use crate::utils::dates::snapshot_dates;
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Fetches today plus the seven previous days, one request at a time.
///
/// A failed request leaves its slot empty instead of aborting the run.
pub async fn fetch_week(
    api: &dyn GameApi,
    character_id: &str,
    now: DateTime<Utc>,
    interval: Duration,
) -> Vec<Option<Snapshot>> {
    let mut snapshots = Vec::new();

    for (slot, date) in snapshot_dates(now).into_iter().enumerate() {
        tokio::time::sleep(interval).await;
        match api.get_snapshot(character_id, date).await {
            Ok(snapshot) => snapshots.push(Some(snapshot)),
            Err(e) => {
                debug!(slot, ?date, error = %e, "Snapshot fetch failed");
                snapshots.push(None);
            }
        }
    }

    snapshots
}

/// Renders the seven-day report, or the canned reply explaining why it failed.
pub async fn experience_report(
    api: &dyn GameApi,
    name: &str,
    now: DateTime<Utc>,
    interval: Duration,
) -> Result<String, &'static str> {
    let character_id = api.lookup_character_id(name).await.map_err(|e| {
        warn!(character = name, error = %e, "Character lookup failed");
        failure_message(&e)
    })?;

    let snapshots = fetch_week(api, &character_id, now, interval).await;
    let trend = compute_trend(&snapshots, now).map_err(|e| {
        warn!(character = name, error = %e, "Not enough snapshots for a trend");
        messages::INSUFFICIENT_DATA
    })?;

    Ok(render_trend(&trend))
}

/// Configured image files, resolved against `base_dir`, that exist on disk.
pub fn existing_images(base_dir: &Path, images: &[String]) -> Vec<PathBuf> {
    images
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| base_dir.join(name))
        .filter(|path| path.is_file())
        .collect()
}

pub fn pick_image(base_dir: &Path, images: &[String]) -> Option<PathBuf> {
    existing_images(base_dir, images)
        .choose(&mut rand::thread_rng())
        .cloned()
}
