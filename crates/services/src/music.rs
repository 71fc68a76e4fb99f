use std::path::{Path, PathBuf};

use serenade_core::model::PageId;
use tracing::{info, warn};

use crate::media::{EmbeddedMedia, MediaResolver};

/// Which song a page wants, matched by filename substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackRole {
    /// Plays through intro, quiz and gallery.
    Main,
    /// Plays under the proposal.
    Proposal,
}

impl TrackRole {
    #[must_use]
    pub fn for_page(page: PageId) -> Self {
        match page {
            PageId::Proposal => TrackRole::Proposal,
            PageId::Intro | PageId::Quiz | PageId::Gallery => TrackRole::Main,
        }
    }

    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            TrackRole::Main => &["Alceu", "alceu", "Belle"],
            TrackRole::Proposal => &["Roberta", "roberta", "Janeiro"],
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            TrackRole::Main => TrackRole::Proposal,
            TrackRole::Proposal => TrackRole::Main,
        }
    }

    fn matches(self, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        self.keywords().iter().any(|keyword| name.contains(keyword))
    }
}

/// Pick the track for `page` from `files`: the page's own role first, the
/// other role as a fallback. Among several files of one role the last one
/// in listing order wins. Main-role matching wins when a file name carries
/// keywords of both roles.
#[must_use]
pub fn pick_track(files: &[PathBuf], page: PageId) -> Option<&Path> {
    let last_with = |role: TrackRole| {
        files.iter().map(PathBuf::as_path).rev().find(|path| match role {
            TrackRole::Main => role.matches(path),
            TrackRole::Proposal => role.matches(path) && !TrackRole::Main.matches(path),
        })
    };
    let role = TrackRole::for_page(page);
    last_with(role).or_else(|| last_with(role.other()))
}

#[derive(Debug, Clone)]
pub struct MusicService {
    resolver: MediaResolver,
    music_dir: PathBuf,
}

impl MusicService {
    #[must_use]
    pub fn new(resolver: MediaResolver, music_dir: impl Into<PathBuf>) -> Self {
        Self {
            resolver,
            music_dir: music_dir.into(),
        }
    }

    /// The embedded song for `page`, or `None` when no file matches or the
    /// chosen file cannot be read.
    #[must_use]
    pub fn track_for_page(&self, page: PageId) -> Option<EmbeddedMedia> {
        let files = self.resolver.list_music(&self.music_dir);
        let path = pick_track(&files, page)?;
        match self.resolver.encode(path) {
            Ok(track) => {
                info!(page = %page, track = %track.file_name(), "music selected");
                Some(track)
            }
            Err(err) => {
                warn!(page = %page, error = %err, "music track unavailable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn proposal_prefers_janeiro_track() {
        let files = paths(&[
            "music/Alceu Valença - La Belle de Jour.mp3",
            "music/Roberta Campos - De Janeiro a Janeiro.mp3",
        ]);
        assert_eq!(
            pick_track(&files, PageId::Proposal),
            Some(Path::new("music/Roberta Campos - De Janeiro a Janeiro.mp3"))
        );
        for page in [PageId::Intro, PageId::Quiz, PageId::Gallery] {
            assert_eq!(
                pick_track(&files, page),
                Some(Path::new("music/Alceu Valença - La Belle de Jour.mp3"))
            );
        }
    }

    #[test]
    fn falls_back_to_the_other_role() {
        let only_main = paths(&["music/alceu.mp3"]);
        assert_eq!(
            pick_track(&only_main, PageId::Proposal),
            Some(Path::new("music/alceu.mp3"))
        );

        let only_proposal = paths(&["music/janeiro.ogg", "music/Janeiro.mp3"]);
        assert_eq!(
            pick_track(&only_proposal, PageId::Intro),
            Some(Path::new("music/Janeiro.mp3"))
        );
    }

    #[test]
    fn last_listed_track_of_a_role_wins() {
        let files = paths(&[
            "music/01 Alceu - Anunciação.mp3",
            "music/02 Belle de Jour.mp3",
            "music/03 Roberta - Abrigo.mp3",
            "music/04 De Janeiro a Janeiro.mp3",
        ]);
        assert_eq!(
            pick_track(&files, PageId::Gallery),
            Some(Path::new("music/02 Belle de Jour.mp3"))
        );
        assert_eq!(
            pick_track(&files, PageId::Proposal),
            Some(Path::new("music/04 De Janeiro a Janeiro.mp3"))
        );
    }

    #[test]
    fn unrelated_files_pick_nothing() {
        let files = paths(&["music/random.mp3"]);
        assert_eq!(pick_track(&files, PageId::Gallery), None);
        assert_eq!(pick_track(&[], PageId::Gallery), None);
    }
}
