//! Listing extraction automaton.
//!
//! [`scan_message`] runs one message through a single left-to-right pass:
//! each character lands in a scan buffer, the buffer is normalized against
//! decorative punctuation, and a fixed rule order decides whether to close the
//! open listing, attach a price, abandon the token, commit a direction
//! keyword, or commit an item. Commitment fires on a unique exact key match,
//! so an item whose name is a strict prefix of another always resolves to the
//! shorter name first (greedy shortest-first; deliberate, see DESIGN.md).

use crate::index::{DirectionIndex, VocabIndex};
use crate::price;
use crate::types::Listing;

/// Transient per-message scan state. Create fresh for each message; the
/// indexes are the only state shared across parses.
#[derive(Debug)]
pub struct ScanState {
    buffer: String,
    /// Sticky across the whole message; selling until a keyword says otherwise.
    selling: bool,
    /// Index into `listings` of the listing still eligible for a price.
    open: Option<usize>,
    listings: Vec<Listing>,
}

impl ScanState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            selling: true,
            open: None,
            listings: Vec::new(),
        }
    }

    /// Consumes one character of the message (already lowercased upstream).
    pub fn step(&mut self, ch: char, vocab: &VocabIndex, directions: &DirectionIndex) {
        self.buffer.push(ch);
        self.clean(vocab, directions);

        // Listing-closing rule: once the buffer stops being a price token the
        // open listing is done. A listing that already got a price gives the
        // buffer back to the just-appended character so a new token can start
        // mid-buffer; an unpriced one leaves the buffer accumulating.
        if let Some(open) = self.open {
            if !price::is_price(&self.buffer) {
                self.open = None;
                if self.listings[open].price.is_some() {
                    self.buffer.clear();
                    self.buffer.push(ch);
                }
            }
        }

        // Price-attachment rule: the buffer is still a valid price token here,
        // re-parsed every step so trailing digits extend the attached value.
        // Attach only on a successful parse; an empty amount or an overflow
        // leaves the previous attachment alone.
        if let Some(open) = self.open {
            if let Some(price) = price::parse_price(&self.buffer) {
                self.listings[open].price = Some(price);
            }
            return;
        }

        // No-match rule: the token cannot become anything; start over.
        if !vocab.has_prefix(&self.buffer) && !directions.has_prefix(&self.buffer) {
            self.buffer.clear();
            self.open = None;
            return;
        }

        // Direction-commit rule: unique exact keyword match flips the sticky
        // direction for the rest of the message.
        if let Some(selling) = directions.get(&self.buffer) {
            self.selling = selling;
            self.buffer.clear();
            self.open = None;
            return;
        }

        // Item-commit rule: unique exact name match opens a new listing.
        if let Some(item_id) = vocab.get(&self.buffer) {
            self.listings.push(Listing::unpriced(item_id, self.selling));
            self.open = Some(self.listings.len() - 1);
            self.buffer.clear();
        }

        // Otherwise: partial or ambiguous prefix; keep accumulating.
    }

    /// Punctuation normalizer: a buffer that could still match something, or
    /// that is a valid price token, stays as-is. Anything else loses its
    /// maximal leading run of non-word, non-digit characters. Tolerates chat
    /// decoration such as `*=WTB=*` or `=Ale`.
    fn clean(&mut self, vocab: &VocabIndex, directions: &DirectionIndex) {
        if vocab.has_prefix(&self.buffer)
            || directions.has_prefix(&self.buffer)
            || price::is_price(&self.buffer)
        {
            return;
        }
        match self.buffer.find(|c: char| c.is_alphanumeric() || c == '_') {
            Some(0) => {}
            Some(first_word) => {
                self.buffer.drain(..first_word);
            }
            None => self.buffer.clear(),
        }
    }

    /// Ends the scan. Whatever listing is still open stays in the output with
    /// the price it last had; there is no finalization beyond returning.
    pub fn finish(self) -> Vec<Listing> {
        self.listings
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}

/// Scans one lowercased message into its ordered listing sequence. Pure
/// function of the message and the index snapshots.
pub fn scan_message(vocab: &VocabIndex, directions: &DirectionIndex, message: &str) -> Vec<Listing> {
    let mut state = ScanState::new();
    for ch in message.chars() {
        state.step(ch, vocab, directions);
    }
    state.finish()
}
