//! Edge case tests for chatscan
//!
//! These tests cover malformed, ambiguous and adversarial transcripts
//! that might not be covered by regular unit and integration tests.

use chatscan::event::{Author, HourBucket, MEDIA_OMITTED, SYSTEM_NOTICE};
use chatscan::prelude::*;

// =========================================================================
// Empty and headerless input
// =========================================================================

#[test]
fn test_empty_input() {
    let t = parse_transcript("");
    assert!(t.is_empty());
    assert!(t.issues().is_empty());
    assert!(!t.is_unrecognized());
}

#[test]
fn test_whitespace_only_input() {
    let t = parse_transcript("  \n\n\t\n");
    assert!(t.is_empty());
    assert!(t.issues().is_empty());
}

#[test]
fn test_headerless_input_is_unrecognized() {
    let text = "just some notes\nnothing that looks like a chat\n";
    let t = parse_transcript(text);

    assert!(t.is_empty());
    assert!(t.is_unrecognized());
    assert_eq!(t.issues(), &[ParseIssue::UnrecognizedFormat]);
    assert_eq!(t.dropped_prefix(), text.len());
}

#[test]
fn test_other_date_conventions_not_recognized() {
    // Four-digit years and bracketed iOS headers are not this format
    assert!(parse_transcript("15/01/2024, 9:05 pm - Alice: Hi\n").is_unrecognized());
    assert!(parse_transcript("[15/01/24, 9:05:00 PM] Alice: Hi\n").is_unrecognized());
    assert!(parse_transcript("15/01/24, 123:05 pm - Alice: Hi\n").is_unrecognized());
}

// =========================================================================
// Segment boundaries
// =========================================================================

#[test]
fn test_prefix_before_first_header_dropped() {
    let t = parse_transcript("garbage line\n15/01/24, 9:05 pm - Alice: Hi\n");
    assert_eq!(t.len(), 1);
    assert_eq!(t.dropped_prefix(), "garbage line\n".len());
    assert_eq!(t.events()[0].text(), "Hi\n");
}

#[test]
fn test_last_segment_without_trailing_newline() {
    let t = parse_transcript("15/01/24, 9:05 pm - Alice: Hi\n15/01/24, 9:06 pm - Bob: Bye");
    assert_eq!(t.len(), 2);
    assert_eq!(t.events()[1].text(), "Bye");
}

#[test]
fn test_multiline_message_kept_whole() {
    let t = parse_transcript(
        "15/01/24, 9:05 pm - Alice: first\nsecond\n\nfourth\n15/01/24, 9:06 pm - Bob: ok\n",
    );
    assert_eq!(t.len(), 2);
    assert_eq!(t.events()[0].text(), "first\nsecond\n\nfourth\n");
}

#[test]
fn test_fake_header_inside_body_splits() {
    let t = parse_transcript("15/01/24, 9:05 pm - Alice: look 15/01/24, 9:06 pm - Bob: fake\n");

    assert_eq!(t.len(), 2);
    assert_eq!(t.events()[0].user(), "Alice");
    assert_eq!(t.events()[0].text(), "look ");
    assert_eq!(t.events()[1].user(), "Bob");
    assert_eq!(t.events()[1].text(), "fake\n");
}

#[test]
fn test_event_count_equals_header_count() {
    let text = "15/01/24, 9:05 pm - A: x\n\
                15/01/24, 9:06 pm - \n\
                15/01/24, 9:07 pm - B joined\n\
                31/02/24, 9:08 pm - C: y\n";
    let headers = chatscan::parsing::scan_headers(text, HeaderStyle::TwelveHour);
    assert_eq!(parse_transcript(text).len(), headers.len());
}

// =========================================================================
// Author extraction
// =========================================================================

#[test]
fn test_multiple_colons_split_at_first() {
    let t = parse_transcript("15/01/24, 9:05 pm - Alice: call me: now\n");
    assert_eq!(t.events()[0].author, Author::user("Alice"));
    assert_eq!(t.events()[0].text(), "call me: now\n");
}

#[test]
fn test_colon_in_display_name() {
    let t = parse_transcript("15/01/24, 9:05 pm - Dr. Who: The Doctor: hello\n");
    assert_eq!(t.events()[0].user(), "Dr. Who");
    assert_eq!(t.events()[0].text(), "The Doctor: hello\n");
}

#[test]
fn test_colon_without_space_is_notice() {
    let t = parse_transcript("15/01/24, 9:05 pm - Alice:no space\n");
    assert!(t.events()[0].is_system_notice());
    assert_eq!(t.events()[0].user(), SYSTEM_NOTICE);
    assert_eq!(t.events()[0].text(), "Alice:no space\n");
}

#[test]
fn test_system_notices() {
    let t = parse_transcript(
        "15/01/24, 9:05 pm - Messages and calls are end-to-end encrypted.\n\
         15/01/24, 9:06 pm - Bob added Carol\n\
         15/01/24, 9:07 pm - Missed voice call\n",
    );
    assert_eq!(t.system_notice_count(), 3);
    assert!(t.authors().is_empty());
    assert_eq!(t.events()[2].text(), "Missed voice call\n");
}

#[test]
fn test_unicode_names() {
    let t = parse_transcript(
        "15/01/24, 9:05 pm - Иван Петров: Привет\n\
         15/01/24, 9:06 pm - 村上: こんにちは\n\
         15/01/24, 9:07 pm - +91 98765 43210: hi\n\
         15/01/24, 9:08 pm - 🔥Fire🔥: 🎉\n",
    );
    assert_eq!(t.authors(), vec!["Иван Петров", "村上", "+91 98765 43210", "🔥Fire🔥"]);
}

// =========================================================================
// Malformed segments
// =========================================================================

#[test]
fn test_empty_body_is_malformed_notice() {
    let t = parse_transcript("15/01/24, 9:05 pm - \n15/01/24, 9:06 pm - Bob: hi\n");

    assert_eq!(t.len(), 2);
    assert!(t.events()[0].is_system_notice());
    assert_eq!(t.events()[0].text(), "");
    assert_eq!(t.issues(), &[ParseIssue::MalformedSegment { index: 0 }]);
}

#[test]
fn test_adjacent_headers() {
    let t = parse_transcript("15/01/24, 9:05 pm - 15/01/24, 9:06 pm - Bob: hi\n");
    assert_eq!(t.len(), 2);
    assert_eq!(t.events()[0].text(), "");
    assert_eq!(t.events()[1].user(), "Bob");
}

// =========================================================================
// Timestamps
// =========================================================================

#[test]
fn test_impossible_dates_are_retained() {
    let t = parse_transcript(
        "15/01/24, 9:05 pm - Alice: ok\n\
         32/13/99, 25:99 pm - Bob: bad\n\
         29/02/23, 9:06 pm - Carol: not a leap year\n\
         15/01/24, 13:05 pm - Dan: no such hour\n\
         29/02/24, 9:07 pm - Eve: leap day\n",
    );

    assert_eq!(t.len(), 5);
    assert_eq!(t.undated_count(), 3);
    assert!(t.events()[0].calendar().is_some());
    assert!(t.events()[4].calendar().is_some());

    let undated: Vec<usize> = t
        .issues()
        .iter()
        .filter_map(|issue| match issue {
            ParseIssue::UnparsableTimestamp { index, .. } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(undated, vec![1, 2, 3]);

    let error = t.events()[1].timestamp_error().unwrap();
    assert!(error.to_string().contains("32/13/99"));
}

#[test]
fn test_meridiem_variants() {
    let t = parse_transcript(
        "15/01/24, 9:05 PM - A: upper\n\
         15/01/24, 9:06\u{202F}pm - B: narrow no-break space\n\
         15/01/24, 09:07 am - C: padded hour\n",
    );
    assert_eq!(t.len(), 3);
    assert_eq!(t.undated_count(), 0);
    assert_eq!(t.events()[0].calendar().unwrap().hour, 21);
    assert_eq!(t.events()[1].calendar().unwrap().hour, 21);
    assert_eq!(t.events()[2].calendar().unwrap().hour, 9);
}

#[test]
fn test_two_digit_years() {
    let t = parse_transcript("15/01/24, 9:05 pm - A: x\n15/01/99, 9:05 pm - B: y\n");
    assert_eq!(t.events()[0].calendar().unwrap().year, 2024);
    assert_eq!(t.events()[1].calendar().unwrap().year, 1999);
}

#[test]
fn test_hour_bucket_boundaries() {
    let t = parse_transcript(
        "15/01/24, 12:00 am - A: midnight\n\
         15/01/24, 12:30 pm - A: noon\n\
         15/01/24, 11:59 pm - A: late\n\
         15/01/24, 1:00 pm - A: afternoon\n",
    );
    let labels: Vec<&str> = t
        .events()
        .iter()
        .map(|e| e.calendar().unwrap().hour_bucket.label())
        .collect();
    assert_eq!(labels, vec!["00-1", "12-13", "23-00", "13-14"]);

    assert_eq!(HourBucket::from_hour(23).unwrap().label(), "23-00");
    assert_eq!(HourBucket::from_hour(0).unwrap().label(), "00-1");
    assert_eq!(HourBucket::all().count(), 24);
}

// =========================================================================
// Media marker
// =========================================================================

#[test]
fn test_media_marker_exact() {
    let t = parse_transcript(
        "15/01/24, 9:05 pm - Alice: <Media omitted>\n\
         15/01/24, 9:06 pm - Bob: <Media omitted> but more\n\
         15/01/24, 9:07 pm - Carol: <Media omitted>",
    );
    assert_eq!(t.events()[0].text(), MEDIA_OMITTED);
    assert!(t.events()[0].is_media_omitted());
    assert!(!t.events()[1].is_media_omitted());
    // No trailing newline at end of file
    assert!(!t.events()[2].is_media_omitted());

    let summary = fetch_stats(&t.view(&Selector::overall()));
    assert_eq!(summary.media, 1);
}

// =========================================================================
// Analysis on degenerate views
// =========================================================================

#[test]
fn test_analysis_on_empty_view() {
    let t = parse_transcript("");
    let view = t.view(&Selector::overall());

    assert_eq!(fetch_stats(&view), Default::default());
    assert!(most_busy_users(&view, 5).shares.is_empty());
    assert!(monthly_timeline(&view).is_empty());
    assert!(weekday_activity(&view).is_empty());
    assert!(activity_heatmap(&view).peak().is_none());
    assert!(most_common_words(&view, &WordList::default(), 20).is_empty());
    assert!(search(&view, "x").is_empty());
    assert!(culprit(&[]).is_none());
}

#[test]
fn test_unknown_user_selects_nothing() {
    let t = parse_transcript("15/01/24, 9:05 pm - Alice: Hi\n");
    assert!(t.view(&Selector::user("Mallory")).is_empty());
}

#[test]
fn test_empty_flag_list_flags_nothing() {
    let t = parse_transcript("15/01/24, 9:05 pm - Alice: anything at all\n");
    let flagger = Flagger::new(&WordList::default()).unwrap();
    assert!(flagger.flag(&t.view(&Selector::overall())).is_empty());
}

#[test]
fn test_flag_words_respect_word_boundaries() {
    let t = parse_transcript(
        "15/01/24, 9:05 pm - Alice: cashew nuts\n15/01/24, 9:06 pm - Bob: CASH only\n",
    );
    let flagger = Flagger::new(&WordList::parse("cash")).unwrap();
    let flags = flagger.flag(&t.view(&Selector::overall()));

    assert_eq!(flags.len(), 1);
    assert_eq!(flags[0].author, "Bob");
    assert_eq!(flags[0].word, "CASH");
}

#[test]
fn test_very_long_message() {
    let body = "x".repeat(100 * 1024);
    let t = parse_transcript(&format!("15/01/24, 9:05 pm - Alice: {body}\n"));
    assert_eq!(t.events()[0].text().len(), body.len() + 1);
}
