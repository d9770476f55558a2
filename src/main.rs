//! # chatscan CLI
//!
//! Command-line interface for the chatscan library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chatscan::ChatscanError;
use chatscan::cli::Args;
use chatscan::core::{
    Flagger, OutputConfig, View, WordList, activity_heatmap, culprit, daily_timeline,
    emoji_counts, fetch_stats, month_activity, monthly_timeline, most_busy_users,
    most_common_words, search, weekday_activity,
};
use chatscan::format::{OutputFormat, write_to_format};
use chatscan::parser::TranscriptParser;
use chatscan::parsing::weekday_name;

/// Longest message excerpt printed in search hits and flags.
const EXCERPT_CHARS: usize = 60;

fn main() {
    let args = <Args as ClapParser>::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| args.log_level().into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatscanError> {
    let total_start = Instant::now();
    let output_path = args.output_path();
    let lib_format: OutputFormat = args.format.into();
    let selector = args.selector()?;
    let analysis = args.analysis_config();

    // Word lists are read before parsing so a bad path fails fast
    let stop_words = match args.stop_words {
        Some(ref path) => WordList::load(Path::new(path))?,
        None => WordList::default(),
    };
    let flag_words = load_flag_words(args)?;

    println!("🔎 chatscan v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", lib_format);
    println!(
        "👤 User:    {}",
        selector.user.as_deref().unwrap_or(chatscan::core::filter::OVERALL)
    );
    if let Some(ref after) = args.after {
        println!("📅 After:   {}", after);
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:  {}", before);
    }
    println!();

    let parser = TranscriptParser::with_config(args.transcript_config());
    let parse_start = Instant::now();
    let transcript = parser.parse(Path::new(&args.input))?;
    println!(
        "⏳ Parsed {} events ({} headers, {:.2}s)",
        transcript.len(),
        transcript.header_style(),
        parse_start.elapsed().as_secs_f64()
    );
    if transcript.is_unrecognized() {
        println!("⚠️  No transcript header found; nothing to analyze");
    }

    let view = transcript.view(&selector);
    println!("   {} events in scope", view.len());
    println!();

    print_summary(&view);
    if selector.user.is_none() {
        print_busy_users(&view, analysis.top_users);
    }
    print_timelines(&view);
    print_activity(&view);
    print_words(&view, &stop_words, analysis.top_words);

    if let Some(ref term) = args.search {
        print_search(&view, term);
    }
    if !flag_words.is_empty() {
        print_flags(&view, &Flagger::new(&flag_words)?);
    }

    print_diagnostics(&transcript);

    println!("💾 Writing {}...", lib_format);
    write_to_format(&view, &output_path, lib_format, &OutputConfig::full())?;

    println!();
    println!("✅ Done! Event table saved to {}", output_path);
    println!(
        "⚡ Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Merges every `--bad-words` file and, with `--sensitive`, the built-in list.
fn load_flag_words(args: &Args) -> Result<WordList, ChatscanError> {
    let mut lists = Vec::with_capacity(args.bad_words.len() + 1);
    for path in &args.bad_words {
        lists.push(WordList::load(Path::new(path))?);
    }
    if args.sensitive {
        lists.push(WordList::sensitive_defaults());
    }
    Ok(WordList::from_words(lists.iter().flat_map(WordList::iter)))
}

fn print_summary(view: &View<'_>) {
    let summary = fetch_stats(view);
    println!("📊 Summary:");
    println!("   Messages:  {}", summary.messages);
    println!("   Words:     {}", summary.words);
    println!("   Media:     {}", summary.media);
    println!("   Links:     {}", summary.links);
    println!();
}

fn print_busy_users(view: &View<'_>, n: usize) {
    let busy = most_busy_users(view, n);
    if busy.shares.is_empty() {
        return;
    }
    println!("👥 Most busy users:");
    for share in busy.shares.iter().take(n) {
        println!(
            "   {:<24} {:>6}  {:>6.2}%",
            share.user, share.count, share.percent
        );
    }
    println!();
}

fn print_timelines(view: &View<'_>) {
    let monthly = monthly_timeline(view);
    if monthly.is_empty() {
        return;
    }
    println!("🗓️  Monthly timeline:");
    for point in &monthly {
        println!("   {:<16} {:>6}", point.label, point.count);
    }
    println!();

    let daily = daily_timeline(view);
    if let (Some(first), Some(last)) = (daily.first(), daily.last()) {
        let busiest = daily.iter().max_by_key(|p| p.count).map(|p| (p.date, p.count));
        println!(
            "📆 Daily timeline: {} active days from {} to {}",
            daily.len(),
            first.date,
            last.date
        );
        if let Some((date, count)) = busiest {
            println!("   Busiest day: {} ({} messages)", date, count);
        }
        println!();
    }
}

fn print_activity(view: &View<'_>) {
    let weekdays = weekday_activity(view);
    if weekdays.is_empty() {
        return;
    }
    println!("📈 Activity map:");
    println!("   Busiest days:   {}", join_counts(&weekdays));
    println!("   Busiest months: {}", join_counts(&month_activity(view)));

    let heatmap = activity_heatmap(view);
    if let Some((day, bucket, count)) = heatmap.peak() {
        println!(
            "   Peak slot:      {} {} ({} messages)",
            weekday_name(day),
            bucket,
            count
        );
    }
    println!();
}

fn print_words(view: &View<'_>, stop_words: &WordList, n: usize) {
    let words = most_common_words(view, stop_words, n);
    if !words.is_empty() {
        println!("💬 Most common words:");
        for (word, count) in &words {
            println!("   {:<20} {:>6}", word, count);
        }
        println!();
    }

    let emoji = emoji_counts(view);
    if !emoji.is_empty() {
        let shown: Vec<String> = emoji
            .iter()
            .take(n)
            .map(|(e, count)| format!("{e} {count}"))
            .collect();
        println!("😀 Emoji: {}", shown.join("  "));
        println!();
    }
}

fn print_search(view: &View<'_>, term: &str) {
    let hits = search(view, term);
    println!("🔍 Search \"{}\": {} matches", term, hits.len());
    for event in hits {
        println!("   {}: {}", event.user(), excerpt(event.text()));
    }
    println!();
}

fn print_flags(view: &View<'_>, flagger: &Flagger) {
    let flags = flagger.flag(view);
    println!("🚩 Flagged messages: {}", flags.len());
    for flag in &flags {
        println!(
            "   #{} {} [{}]: {}",
            flag.index,
            flag.author,
            flag.word,
            excerpt(&flag.text)
        );
    }
    if let Some(author) = culprit(&flags) {
        println!("   Most flagged: {}", author);
    }
    println!();
}

fn print_diagnostics(transcript: &chatscan::Transcript) {
    let undated = transcript.undated_count();
    if undated > 0 {
        println!("⚠️  {} events could not be dated", undated);
    }
    if transcript.dropped_prefix() > 0 {
        println!(
            "⚠️  {} bytes before the first header were skipped",
            transcript.dropped_prefix()
        );
    }
    for issue in transcript.issues() {
        tracing::debug!(%issue, "parse issue");
    }
}

fn join_counts(entries: &[(&'static str, usize)]) -> String {
    entries
        .iter()
        .map(|(name, count)| format!("{name} {count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn excerpt(text: &str) -> String {
    let line = text.trim_end();
    if line.chars().count() <= EXCERPT_CHARS {
        return line.replace('\n', " ");
    }
    let cut: String = line.chars().take(EXCERPT_CHARS).collect();
    format!("{}…", cut.replace('\n', " "))
}
