// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use huntrs::domain::services::extraction_service::LeaderboardExtractor;

use crate::integration::helpers::LEADERBOARD_HTML;

#[test]
fn test_fixture_extraction() {
    let extractor = LeaderboardExtractor::new().unwrap();

    let products = extractor.extract_records(LEADERBOARD_HTML);

    let summary: Vec<_> = products
        .iter()
        .map(|p| (p.index, p.title.as_str(), p.votes))
        .collect();
    assert_eq!(
        summary,
        vec![
            (1, "Orbit Notes", 512),
            (3, "Crème Brûlée AI", 0),
            (4, "Shipyard 2.0!", 0),
        ]
    );
}

#[test]
fn test_repeated_extraction_is_stable() {
    let extractor = LeaderboardExtractor::new().unwrap();

    let first = extractor.extract_records(LEADERBOARD_HTML);
    let second = extractor.extract_records(LEADERBOARD_HTML);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.index, b.index);
        assert_eq!(a.title, b.title);
        assert_eq!(a.description, b.description);
        assert_eq!(a.product_url, b.product_url);
        assert_eq!(a.tags, b.tags);
    }
}

#[test]
fn test_non_leaderboard_markup_yields_nothing() {
    let extractor = LeaderboardExtractor::new().unwrap();

    assert!(extractor.extract_records("").is_empty());
    assert!(extractor
        .extract_records("<html><body><p>Access denied</p></body></html>")
        .is_empty());
    assert!(extractor.extract_records("<section><div").is_empty());
}
