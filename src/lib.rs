//! # Tunnel Auction Parser
//!
//! Extracts structured trade listings (item, direction, price) from
//! free-form, noisily punctuated auction chat. The core is a single-pass,
//! character-driven automaton over two prefix indexes (item vocabulary and
//! trade-direction keywords) and a price grammar.
//!
//! ## Entry point
//!
//! Use [`Parser`] as the single entry point: build a [`VocabIndex`] from the
//! catalog, create with [`Parser::new`], then call [`Parser::parse_auction`]
//! per message.
//!
//! ## Example
//!
//! ```rust
//! use tunnel_auction_parser::{ItemId, Parser, VocabIndex};
//!
//! let vocab = VocabIndex::from_catalog(vec![
//!     (ItemId(17), "Ale".to_string()),
//!     (ItemId(13), "Cloak of Shadows".to_string()),
//! ])
//! .unwrap();
//! let parser = Parser::new(vocab);
//! let listings = parser.parse_auction("*=WTS=* Ale 1.2k");
//! assert_eq!(listings.len(), 1);
//! assert_eq!(listings[0].item_id, ItemId(17));
//! assert_eq!(listings[0].price, Some(1200));
//! ```
//!
//! ## Lower-level API
//!
//! You can also use [`scan_message`] or drive a [`ScanState`] character by
//! character if you manage the index snapshots yourself.

pub mod api;
pub mod catalog;
pub mod gen;
pub mod index;
pub mod line;
pub mod parser;
pub mod price;
pub mod scan;
pub mod sink;
pub mod timestamp;
pub mod types;

pub use gen::{replay_into_parser, GeneratedAuction, Generator, GeneratorConfig};
pub use index::{direction_index, DirectionIndex, PrefixIndex, VocabIndex};
pub use line::{split_line, AuctionLine};
pub use parser::Parser;
pub use price::{is_price, parse_price};
pub use scan::{scan_message, ScanState};
pub use sink::{InMemorySink, ListingRecord, ListingSink, StdoutSink};
pub use types::{ItemId, Listing};
