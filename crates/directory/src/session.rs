//! Mutable "current" state owned by the front end.
//!
//! The pipeline functions are pure. `Session` holds the last loaded
//! institutions, the reference position and the filters, and derives the
//! visible list from scratch whenever one of them changes.
//!
//! Resolving a reference position (geocoding, device location) is slow and
//! may overlap with a newer request. Each request takes a [`LocateTicket`];
//! only the most recent ticket may install its result.

use crate::error::Result;
use crate::filter::{filter, LevelFilter, SectorFilter};
use crate::institution::Institution;
use crate::loader::load;
use crate::ranking::rank;
use crate::summary::{summarize, ResultSummary};
use schoolfinder_geo::ReferencePosition;
use tracing::debug;

/// Identifies one in-flight reference-position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocateTicket(u64);

/// Current institutions, reference position and filters.
#[derive(Debug, Clone, Default)]
pub struct Session {
    loaded: Vec<Institution>,
    ranked: Option<Vec<Institution>>,
    reference: Option<ReferencePosition>,
    level: LevelFilter,
    sector: SectorFilter,
    generation: u64,
}

impl Session {
    /// An empty session with no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method to set the initial filters
    #[must_use]
    pub fn with_filters(mut self, level: LevelFilter, sector: SectorFilter) -> Self {
        self.level = level;
        self.sector = sector;
        self
    }

    /// Replace the institutions with the content of a new file.
    ///
    /// On error the previous institutions are kept.
    pub fn load_text(&mut self, text: &str) -> Result<usize> {
        let institutions = load(text)?;
        Ok(self.replace_institutions(institutions))
    }

    /// Replace the institutions with an already normalized list.
    pub fn replace_institutions(&mut self, institutions: Vec<Institution>) -> usize {
        self.loaded = institutions;
        self.ranked = self.reference.as_ref().map(|r| rank(&self.loaded, r));
        self.loaded.len()
    }

    /// Install a new reference position and re-rank everything.
    ///
    /// Any request still in flight becomes stale.
    pub fn set_reference(&mut self, reference: ReferencePosition) {
        self.generation += 1;
        self.install_reference(reference);
    }

    /// Start a reference-position request.
    pub fn begin_locate(&mut self) -> LocateTicket {
        self.generation += 1;
        LocateTicket(self.generation)
    }

    /// Finish a request. Returns false, leaving the session untouched, when
    /// a newer request was started in the meantime.
    pub fn complete_locate(&mut self, ticket: LocateTicket, reference: ReferencePosition) -> bool {
        if ticket.0 != self.generation {
            debug!(
                ticket = ticket.0,
                current = self.generation,
                "Discarding superseded position"
            );
            return false;
        }
        self.install_reference(reference);
        true
    }

    /// Change the filters.
    pub fn set_filters(&mut self, level: LevelFilter, sector: SectorFilter) {
        self.level = level;
        self.sector = sector;
    }

    /// Institutions as loaded, without distances.
    pub fn institutions(&self) -> &[Institution] {
        &self.loaded
    }

    /// Current reference position.
    pub fn reference(&self) -> Option<&ReferencePosition> {
        self.reference.as_ref()
    }

    /// Current filters.
    pub fn filters(&self) -> (LevelFilter, SectorFilter) {
        (self.level, self.sector)
    }

    /// The list to display: ranked when a reference is set, then filtered.
    pub fn view(&self) -> Vec<Institution> {
        let base = self.ranked.as_deref().unwrap_or(&self.loaded);
        filter(base, self.level, self.sector)
    }

    /// Figures for the current view.
    pub fn summary(&self) -> ResultSummary {
        summarize(&self.view())
    }

    fn install_reference(&mut self, reference: ReferencePosition) {
        self.ranked = Some(rank(&self.loaded, &reference));
        self.reference = Some(reference);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectoryError;

    const FILE: &str = "nom;lat;lon;type
Collège Nord;45.10;5.0;public
Lycée Centre;45.00;5.0;privé
Collège Sud;44.95;5.0;privé sous contrat";

    fn names(list: &[Institution]) -> Vec<&str> {
        list.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn test_view_without_reference_keeps_file_order() {
        let mut session = Session::new();
        assert_eq!(session.load_text(FILE).unwrap(), 3);

        let view = session.view();
        assert_eq!(names(&view), vec!["Collège Nord", "Lycée Centre", "Collège Sud"]);
        assert!(view.iter().all(|i| i.distance.is_none()));
    }

    #[test]
    fn test_reference_change_reranks_from_scratch() {
        let mut session = Session::new();
        session.load_text(FILE).unwrap();

        session.set_reference(ReferencePosition::at(45.0, 5.0));
        assert_eq!(names(&session.view()), vec!["Lycée Centre", "Collège Sud", "Collège Nord"]);

        session.set_reference(ReferencePosition::at(45.2, 5.0));
        assert_eq!(names(&session.view()), vec!["Collège Nord", "Lycée Centre", "Collège Sud"]);
        assert_eq!(session.institutions()[0].distance, None);
    }

    #[test]
    fn test_filters_apply_to_ranked_view() {
        let mut session = Session::new().with_filters(LevelFilter::College, SectorFilter::Private);
        session.load_text(FILE).unwrap();
        session.set_reference(ReferencePosition::at(45.0, 5.0));

        let view = session.view();
        assert_eq!(names(&view), vec!["Collège Sud"]);
        assert!(view[0].distance.is_some());

        session.set_filters(LevelFilter::All, SectorFilter::All);
        assert_eq!(session.view().len(), 3);
        assert_eq!(session.summary().total, 3);
    }

    #[test]
    fn test_reload_keeps_reference() {
        let mut session = Session::new();
        session.set_reference(ReferencePosition::at(45.0, 5.0));
        session.load_text(FILE).unwrap();
        assert_eq!(session.view()[0].distance, Some(0.0));
    }

    #[test]
    fn test_failed_load_keeps_previous_institutions() {
        let mut session = Session::new();
        session.load_text(FILE).unwrap();
        assert_eq!(session.load_text("nom;lat\n"), Err(DirectoryError::NoValidData));
        assert_eq!(session.institutions().len(), 3);
    }

    #[test]
    fn test_last_locate_request_wins() {
        let mut session = Session::new();
        session.load_text(FILE).unwrap();

        let slow = session.begin_locate();
        let fast = session.begin_locate();

        assert!(session.complete_locate(fast, ReferencePosition::at(45.2, 5.0)));
        assert!(!session.complete_locate(slow, ReferencePosition::at(44.0, 5.0)));
        assert_eq!(session.reference(), Some(&ReferencePosition::at(45.2, 5.0)));
    }

    #[test]
    fn test_direct_reference_supersedes_pending_request() {
        let mut session = Session::new();
        let pending = session.begin_locate();
        session.set_reference(ReferencePosition::at(45.0, 5.0));

        assert!(!session.complete_locate(pending, ReferencePosition::at(10.0, 10.0)));
        assert_eq!(session.reference().unwrap().latitude, 45.0);
    }
}
