//! Example: Using chatscan as a library
//!
//! This example demonstrates how to use chatscan in your own projects.
//!
//! Run with: cargo run --example library_usage

use chatscan::core::{cloud_corpus, daily_timeline};
use chatscan::prelude::*;

const CHAT: &str = "WhatsApp Chat with Weekend plans\n\
15/01/24, 9:05 pm - Messages and calls are end-to-end encrypted.\n\
15/01/24, 9:05 pm - Alice: Hello everyone 😀\n\
15/01/24, 9:06 pm - Bob: are we meeting tomorrow: yes or no?\n\
15/01/24, 9:07 pm - Alice: <Media omitted>\n\
16/01/24, 8:30 am - Carol: yes!\n\
bring the cash for tickets\n\
31/04/24, 10:00 am - Bob: this one has an impossible date\n\
16/01/24, 11:45 pm - Bob left\n";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatscan Library Usage Examples ===\n");

    // Example 1: Parse a transcript
    println!("1. Parsing a transcript:");
    let transcript = parse_transcript(CHAT);

    for event in transcript.events() {
        let when = event
            .timestamp()
            .map_or_else(|| "undated".to_string(), |t| t.to_string());
        let text = event.text().trim_end().replace('\n', " | ");
        println!("   [{}] {}: {}", when, event.user(), text);
    }
    println!(
        "   ({} events, {} bytes skipped before the first header)",
        transcript.len(),
        transcript.dropped_prefix()
    );

    // Example 2: Parse diagnostics
    println!("\n2. Parse diagnostics:");
    for issue in transcript.issues() {
        println!("   {}", issue);
    }

    // Example 3: Calendar fields
    println!("\n3. Derived calendar fields:");
    if let Some(cal) = transcript.events()[4].calendar() {
        println!(
            "   {} {} {} {}, {:02}:{:02}, bucket {}",
            cal.weekday_name, cal.day, cal.month, cal.year, cal.hour, cal.minute, cal.hour_bucket
        );
    }

    // Example 4: Statistics over a view
    println!("\n4. Statistics:");
    let everyone = transcript.view(&Selector::overall());
    let summary = fetch_stats(&everyone);
    println!(
        "   {} messages, {} words, {} media, {} links",
        summary.messages, summary.words, summary.media, summary.links
    );
    for share in most_busy_users(&everyone, 3).shares {
        println!("   {:<20} {:>5.2}%", share.user, share.percent);
    }

    // Example 5: Per-user and date-scoped views
    println!("\n5. Scoped views:");
    let bob = transcript.view(&Selector::user("Bob"));
    println!("   Bob: {} messages", bob.len());
    let jan_16 = Selector::overall()
        .with_date_from("2024-01-16")?
        .with_date_to("2024-01-16")?;
    println!("   16 Jan: {} messages", transcript.view(&jan_16).len());

    // Example 6: Timelines and activity
    println!("\n6. Timelines:");
    for point in monthly_timeline(&everyone) {
        println!("   {}: {}", point.label, point.count);
    }
    for point in daily_timeline(&everyone) {
        println!("   {}: {}", point.date, point.count);
    }
    println!("   Weekdays: {:?}", weekday_activity(&everyone));

    // Example 7: Words and emoji
    println!("\n7. Words:");
    let stop_words = WordList::parse("the\nfor\nor\n");
    println!("   Top words: {:?}", most_common_words(&everyone, &stop_words, 5));
    println!("   Cloud corpus: {}", cloud_corpus(&everyone, &stop_words));
    println!("   Emoji: {:?}", emoji_counts(&everyone));

    // Example 8: Search and flagging
    println!("\n8. Search and flags:");
    for event in search(&everyone, "YES") {
        println!("   found in {}'s message", event.user());
    }
    let flagger = Flagger::new(&WordList::sensitive_defaults())?;
    let flags = flagger.flag(&everyone);
    for flag in &flags {
        println!("   #{} {} used '{}'", flag.index, flag.author, flag.word);
    }
    if let Some(author) = culprit(&flags) {
        println!("   Most flagged: {}", author);
    }

    // Example 9: Serialization
    println!("\n9. Event table as JSON Lines:");
    let alice = transcript.view(&Selector::user("Alice"));
    print!("{}", to_jsonl(&alice, &OutputConfig::new().with_calendar())?);

    println!("\n=== Examples complete! ===");
    Ok(())
}
