//! Command handlers for the vcm binary
//!
//! Each handler opens its own database pool; the store file is only
//! touched once the command's arguments have been validated.

pub mod genre;
pub mod list;
pub mod style;
pub mod sync;

use vcm_common::db::releases::Release;

/// Print releases as two aligned columns (artist, title)
pub(crate) fn print_releases(releases: &[Release]) {
    if releases.is_empty() {
        println!("No matching releases");
        return;
    }

    let width = releases
        .iter()
        .map(|release| artist_label(release).len())
        .max()
        .unwrap_or(0);

    for release in releases {
        println!("  {:<width$}  {}", artist_label(release), release.title);
    }
}

fn artist_label(release: &Release) -> &str {
    release.artist.as_deref().unwrap_or("-")
}
