use report_core::search::{SearchIndex, SearchOutcome, SEARCH_NO_MATCHES, SEARCH_PROMPT};
use report_core::transcript::Transcript;
use report_core::SiteConfig;

fn index(raw: &str) -> SearchIndex {
    let config = SiteConfig::default();
    let header = config.header_regex().expect("header regex");
    SearchIndex::new(Transcript::parse(raw, &header), &config)
}

fn hits(outcome: SearchOutcome) -> Vec<report_core::search::SearchHit> {
    match outcome {
        SearchOutcome::Hits(hits) => hits,
        other => panic!("expected hits, got {other:?}"),
    }
}

#[test]
fn blank_query_shows_prompt() {
    let idx = index("MOUNTY YARNS 1\nanything");
    for q in ["", "   ", "\t\n"] {
        let outcome = idx.search(q);
        assert_eq!(outcome, SearchOutcome::Prompt);
        assert_eq!(outcome.message(), Some(SEARCH_PROMPT));
    }
}

#[test]
fn missing_transcript_is_unavailable() {
    let idx = SearchIndex::empty(&SiteConfig::default());
    assert_eq!(idx.search("bail"), SearchOutcome::Unavailable);
    assert_eq!(idx.search(" "), SearchOutcome::Prompt);
}

#[test]
fn finds_elder_case_insensitively() {
    let raw = "MOUNTY YARNS 1\nCover page\u{0C}MOUNTY YARNS 2\n...the Elder spoke of bail conditions...";
    let found = hits(index(raw).search("elder"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].page, 2);
    assert!(found[0].snippet.contains("Elder"));
    assert!(found[0].highlighted().contains("<strong>Elder</strong>"));
}

#[test]
fn unmatched_query_reports_no_matches() {
    let outcome = index("just some text").search("zebra");
    assert_eq!(outcome, SearchOutcome::NoMatches);
    assert_eq!(outcome.message(), Some(SEARCH_NO_MATCHES));
}

#[test]
fn regex_characters_are_searched_literally() {
    assert_eq!(index("plain text").search(".*"), SearchOutcome::NoMatches);
    let found = hits(index("costs (a+b) [rough]").search("(a+b)"));
    assert_eq!(found[0].snippet, "costs (a+b) [rough]");
}

#[test]
fn results_are_capped_and_in_page_order() {
    let raw = (1..=15)
        .map(|n| format!("MOUNTY YARNS {n}\npage {n} mentions bail"))
        .collect::<Vec<_>>()
        .join("\u{0C}");
    let found = hits(index(&raw).search("BAIL"));
    assert_eq!(found.len(), 10);
    let pages: Vec<u32> = found.iter().map(|h| h.page).collect();
    assert_eq!(pages, (1..=10).collect::<Vec<_>>());
}

#[test]
fn snippet_window_is_clamped_and_whitespace_collapsed() {
    let before = "a".repeat(100);
    let after = "b".repeat(200);
    let raw = format!("{before}  \n\n EDUCATION {after}");
    let found = hits(index(&raw).search("education"));
    let snippet = &found[0].snippet;
    // 80 chars before the match, the match, then 120 more.
    assert!(snippet.starts_with(&format!("{} EDUCATION b", "a".repeat(75))));
    assert_eq!(snippet.chars().count(), 80 + 9 + 120 - 4);

    let short = hits(index("Elder at the start").search("elder"));
    assert_eq!(short[0].snippet, "Elder at the start");
}

#[test]
fn only_first_occurrence_anchors_the_snippet_but_all_are_emphasized() {
    let found = hits(index("bail then bail again").search("bail"));
    assert_eq!(
        found[0].highlighted(),
        "<strong>bail</strong> then <strong>bail</strong> again"
    );
}

#[test]
fn empty_pages_are_skipped() {
    let found = hits(index("\u{0C}MOUNTY YARNS 2\u{0C}bail here").search("bail"));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].page, 3);
}

#[test]
fn huge_snippet_window_from_config_is_clamped() {
    let config = SiteConfig::from_json(
        r#"{ "snippet_before": 18446744073709551615, "snippet_after": 18446744073709551615 }"#,
    )
    .expect("config validates");
    let header = config.header_regex().expect("header regex");
    let idx = SearchIndex::new(
        Transcript::parse("...the Elder spoke of bail conditions...", &header),
        &config,
    );
    let found = hits(idx.search("elder"));
    assert_eq!(found[0].snippet, "...the Elder spoke of bail conditions...");
}

#[test]
fn long_non_ascii_query_is_found() {
    let query = "é".repeat(200_000);
    let raw = format!("before {} after", query.to_uppercase());
    let found = hits(index(&raw).search(&query));
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].page, 1);
    assert!(found[0].snippet.starts_with("before É"));
}
