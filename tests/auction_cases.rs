//! End-to-end parser cases: the auction-message corpus the system was built
//! against, message in, expected listings out.

use tunnel_auction_parser::{ItemId, Listing, Parser, VocabIndex};

fn test_parser() -> Parser {
    Parser::new(
        VocabIndex::from_catalog(vec![
            (ItemId(13), "Cloak of Shadows".to_string()),
            (ItemId(17), "Ale".to_string()),
        ])
        .unwrap(),
    )
}

fn listing(id: u64, is_selling: bool, price: Option<u64>) -> Listing {
    Listing {
        item_id: ItemId(id),
        is_selling,
        price,
    }
}

#[test]
fn auction_case_table() {
    let cases: Vec<(&str, Vec<Listing>)> = vec![
        // Messages without prices
        ("Ale", vec![listing(17, true, None)]),
        (
            "Cloak of Shadows, Ale",
            vec![listing(13, true, None), listing(17, true, None)],
        ),
        ("WTS Ale", vec![listing(17, true, None)]),
        ("WTB Ale", vec![listing(17, false, None)]),
        (
            "WTS Cloak of Shadows WTB Ale",
            vec![listing(13, true, None), listing(17, false, None)],
        ),
        (
            "WTS Cloak of ShadowsAle",
            vec![listing(13, true, None), listing(17, true, None)],
        ),
        (
            "WTB Cloak of ShadowsAle",
            vec![listing(13, false, None), listing(17, false, None)],
        ),
        // Messages with prices
        ("Ale 123", vec![listing(17, true, Some(123))]),
        ("Ale 123pp", vec![listing(17, true, Some(123))]),
        ("Ale 1k", vec![listing(17, true, Some(1000))]),
        ("Ale 1.2", vec![listing(17, true, Some(1200))]),
        ("Ale 1.2k", vec![listing(17, true, Some(1200))]),
        (
            "Ale 1.2k Cloak of Shadows",
            vec![listing(17, true, Some(1200)), listing(13, true, None)],
        ),
        (
            "Ale 1.2k Cloak of Shadows 375",
            vec![listing(17, true, Some(1200)), listing(13, true, Some(375))],
        ),
        // Messages with fancy punctuation
        ("*=WTB=* Ale 123", vec![listing(17, false, Some(123))]),
        ("=Ale 123", vec![listing(17, true, Some(123))]),
        (
            "=Ale=Cloak of Shadows",
            vec![listing(17, true, None), listing(13, true, None)],
        ),
        ("Ale: 123", vec![listing(17, true, Some(123))]),
        ("Ale- 123", vec![listing(17, true, Some(123))]),
        ("Ale << 123", vec![listing(17, true, Some(123))]),
        ("Ale (123)", vec![listing(17, true, Some(123))]),
        (
            "Ale: 123|Cloak of Shadows",
            vec![listing(17, true, Some(123)), listing(13, true, None)],
        ),
    ];

    let parser = test_parser();
    for (message, expected) in cases {
        let actual = parser.parse_auction(message);
        assert_eq!(
            actual, expected,
            "auction: {:?}, expected: {:?}, actual: {:?}",
            message, expected, actual
        );
    }
}

#[test]
fn out_of_vocabulary_messages_yield_no_listings() {
    let parser = test_parser();
    assert!(parser.parse_auction("anyone selling a jboots pst").is_empty());
    assert!(parser.parse_auction("").is_empty());
}

#[test]
fn reparsing_is_idempotent() {
    let parser = test_parser();
    for message in ["Ale 1.2k Cloak of Shadows 375", "*=WTB=* Ale 123", "no match here"] {
        assert_eq!(parser.parse_auction(message), parser.parse_auction(message));
    }
}

#[test]
fn splitting_then_parsing_a_full_log_line() {
    let parser = test_parser();
    let line = "[Sun Jan 01 13:45:35 2017] Toon auctions, 'WTB Ale 123'";
    let parts = tunnel_auction_parser::split_line(line).unwrap();
    assert_eq!(parts.timestamp, "Jan 01 13:45:35 2017");
    assert_eq!(parts.speaker, "Toon");
    assert_eq!(
        parser.parse_auction(&parts.message),
        vec![listing(17, false, Some(123))]
    );
}
