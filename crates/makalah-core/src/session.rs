//! Generation session state
//!
//! A session owns the current `{metadata, content, document}` triple and
//! admits one generation cycle at a time. Duplicate submissions made while a
//! cycle is in flight are refused rather than queued. A committed cycle
//! replaces the triple as a whole; readers holding the previous one keep a
//! consistent snapshot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use makalah_ast::{AssembledDocument, ContentTree, PaperMetadata};

use crate::assembler::assemble;

/// Result of one generation cycle
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPaper {
    pub metadata: PaperMetadata,
    pub content: ContentTree,
    pub document: AssembledDocument,
}

impl GeneratedPaper {
    /// Assemble the document for a metadata/content pair
    pub fn new(metadata: PaperMetadata, content: ContentTree) -> Self {
        let document = assemble(&metadata, &content);
        Self {
            metadata,
            content,
            document,
        }
    }
}

/// Shared session holding the latest generated paper
#[derive(Debug, Default)]
pub struct PaperSession {
    in_flight: AtomicBool,
    current: RwLock<Option<Arc<GeneratedPaper>>>,
}

/// An admitted generation cycle; dropping it releases the session
#[derive(Debug)]
pub struct Cycle<'a> {
    session: &'a PaperSession,
}

impl PaperSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a new cycle, or `None` while another one is in flight
    pub fn try_begin(&self) -> Option<Cycle<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Cycle { session: self })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Snapshot of the latest committed paper
    pub fn current(&self) -> Option<Arc<GeneratedPaper>> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Drop the current paper (start over)
    pub fn reset(&self) {
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }

    fn replace(&self, paper: Arc<GeneratedPaper>) {
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(paper);
    }
}

impl Cycle<'_> {
    /// Assemble and publish the cycle's result, ending the cycle
    pub fn commit(self, metadata: PaperMetadata, content: ContentTree) -> Arc<GeneratedPaper> {
        let paper = Arc::new(GeneratedPaper::new(metadata, content));
        self.session.replace(Arc::clone(&paper));
        log::debug!(
            "committed paper '{}' ({} blocks)",
            paper.document.title,
            paper.document.len()
        );
        paper
    }
}

impl Drop for Cycle<'_> {
    fn drop(&mut self) {
        self.session.in_flight.store(false, Ordering::Release);
    }
}
