//! Raw release normalization
//!
//! Maps the loosely shaped Discogs payload into the internal release
//! representation consumed by the reconciler. Pure, no side effects.

use crate::services::discogs::RawRelease;

/// Internal release representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimplifiedRelease {
    pub id: i64,
    pub title: String,
    pub artist: Option<String>,
    pub genres: Vec<String>,
    pub styles: Vec<String>,
}

/// Reduce a raw collection record to the fields the store keeps
///
/// The artist is the first credited artist when the list is
/// non-empty, otherwise unset. Genre and style lists pass through as
/// provided (an absent list arrives here already decoded as empty).
pub fn normalize(raw: RawRelease) -> SimplifiedRelease {
    let information = raw.basic_information;
    let artist = information.artists.into_iter().next().map(|a| a.name);

    SimplifiedRelease {
        id: raw.id,
        title: information.title,
        artist,
        genres: information.genres,
        styles: information.styles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::discogs::{BasicInformation, RawArtist};

    fn raw(artists: Vec<RawArtist>, genres: Vec<String>, styles: Vec<String>) -> RawRelease {
        RawRelease {
            id: 7,
            basic_information: BasicInformation {
                title: "Some Record".to_string(),
                artists,
                genres,
                styles,
            },
        }
    }

    #[test]
    fn test_normalize_takes_first_artist() {
        let release = normalize(raw(
            vec![
                RawArtist { name: "Lead".to_string() },
                RawArtist { name: "Feature".to_string() },
            ],
            vec!["Rock".to_string()],
            vec!["Punk".to_string()],
        ));

        assert_eq!(release.id, 7);
        assert_eq!(release.title, "Some Record");
        assert_eq!(release.artist.as_deref(), Some("Lead"));
        assert_eq!(release.genres, vec!["Rock"]);
        assert_eq!(release.styles, vec!["Punk"]);
    }

    #[test]
    fn test_normalize_without_artists_leaves_artist_unset() {
        let release = normalize(raw(vec![], vec![], vec![]));

        assert_eq!(release.artist, None);
        assert!(release.genres.is_empty());
        assert!(release.styles.is_empty());
    }
}
