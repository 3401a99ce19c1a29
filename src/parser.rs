//! Single-entry parser facade.
//!
//! Holds the vocabulary snapshot and the direction table so callers submit
//! raw messages without managing indexes or [`ScanState`] directly. The
//! vocabulary is an immutable `Arc` snapshot: [`Parser::swap_vocab`] replaces
//! it atomically, and in-flight parses keep the snapshot they started with.

use crate::index::{direction_index, DirectionIndex, VocabIndex};
use crate::scan::scan_message;
use crate::types::Listing;
use log::{debug, info};
use std::sync::{Arc, Mutex};

/// Auction-message parser.
///
/// Use [`Parser::parse_auction`] to extract listings from one message.
/// Safe to share across threads; parses never block each other beyond the
/// snapshot clone.
#[derive(Debug)]
pub struct Parser {
    vocab: Mutex<Arc<VocabIndex>>,
    directions: DirectionIndex,
}

impl Parser {
    /// Creates a parser over the given vocabulary.
    pub fn new(vocab: VocabIndex) -> Self {
        info!("parser created vocab_entries={}", vocab.len());
        Self {
            vocab: Mutex::new(Arc::new(vocab)),
            directions: direction_index(),
        }
    }

    /// Extracts the ordered listing sequence from one auction message.
    ///
    /// Lowercases the message, then runs the scan against the current
    /// vocabulary snapshot. Pure per call: same message + same snapshot
    /// always produce the same listings.
    pub fn parse_auction(&self, message: &str) -> Vec<Listing> {
        let vocab = self.vocab_snapshot();
        let lowered = message.to_lowercase();
        let listings = scan_message(&vocab, &self.directions, &lowered);
        info!(
            "auction parsed chars={} listings={}",
            lowered.chars().count(),
            listings.len()
        );
        for listing in &listings {
            debug!(
                "listing item_id={} is_selling={} price={:?}",
                listing.item_id.0, listing.is_selling, listing.price
            );
        }
        listings
    }

    /// The vocabulary snapshot parses currently run against.
    pub fn vocab_snapshot(&self) -> Arc<VocabIndex> {
        self.vocab.lock().expect("lock").clone()
    }

    /// Replaces the vocabulary. Subsequent parses see the new index;
    /// in-flight parses finish on the snapshot they took.
    pub fn swap_vocab(&self, vocab: VocabIndex) {
        info!("vocab swapped vocab_entries={}", vocab.len());
        *self.vocab.lock().expect("lock") = Arc::new(vocab);
    }
}
