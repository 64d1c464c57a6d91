//! # chatscope CLI
//!
//! Command-line interface for the chatscope library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatscope::cli::Args;
use chatscope::format::{OutputFormat, write_to_format};
use chatscope::report::ReportSummary;
use chatscope::stats::{
    activity_heatmap, busiest_users, emoji_counts, month_activity, monthly_timeline,
    most_common_words, overview, sentiment_counts, week_activity,
};
use chatscope::{ChatParser, ChatscopeError, ParsedMessage, ParserConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatscopeError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Print header
    println!("💬 chatscope v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);

    let mut config = ParserConfig::new();
    if let Some(format) = args.timestamp_format {
        config = config.with_timestamp_format(format.into());
    }
    let parser = ChatParser::with_config(config);

    let content = fs::read_to_string(&args.input)?;

    let Some(format) = parser.resolve_format(&content) else {
        println!();
        println!("⚠️  No recognizable timestamps found. Is this a WhatsApp export?");
        println!("   Try pinning the layout with --timestamp-format.");
        return Ok(());
    };

    let auto_detected = args.timestamp_format.is_none();
    println!(
        "🕒 Format:  {}{}",
        format,
        if auto_detected { " (auto-detected)" } else { "" }
    );
    if let Some(ref user) = args.user {
        println!("👤 User:    {}", user);
    }
    println!();

    println!("⏳ Parsing chat export...");
    let parse_start = Instant::now();
    let records = parser.parse_str(&content)?;
    let parse_time = parse_start.elapsed();
    println!(
        "   Found {} records ({:.2}s)",
        records.len(),
        parse_time.as_secs_f64()
    );

    if records.is_empty() {
        println!();
        println!("⚠️  No records found in {}", args.input);
        return Ok(());
    }

    let user = args.user.as_deref();

    if let Some(ref output) = args.output {
        let format: OutputFormat = match args.export {
            Some(format) => format.into(),
            None => OutputFormat::from_path(output)?,
        };
        println!();
        println!("💾 Writing {}...", format);
        let write_start = Instant::now();
        write_to_format(&records, output, format)?;
        println!(
            "   Saved {} records to {} ({:.2}s)",
            records.len(),
            output,
            write_start.elapsed().as_secs_f64()
        );
    }

    if args.report {
        let summary = ReportSummary::build(&records, user, args.top);
        println!();
        println!("{}", summary.to_json()?);
        return Ok(());
    }

    print_overview(&records, user);

    if args.stats {
        print_dashboard(&records, user, args.top);
    }

    // Performance stats
    let total_time = total_start.elapsed();
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let recs_per_sec = records.len() as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} records/sec", recs_per_sec);

    Ok(())
}

/// Prints the always-on overview and sentiment sections.
fn print_overview(records: &[ParsedMessage], user: Option<&str>) {
    let totals = overview(records, user);
    println!();
    println!("📊 Overview:");
    println!("   Messages:  {}", totals.messages);
    println!("   Words:     {}", totals.words);
    println!("   Media:     {}", totals.media);
    println!("   Links:     {}", totals.links);

    let tally = sentiment_counts(records, user);
    println!();
    println!("🎭 Sentiment:");
    println!("   Positive:  {}", tally.positive);
    println!("   Negative:  {}", tally.negative);
    println!("   Neutral:   {}", tally.neutral);
}

/// Prints the full statistics dashboard behind `--stats`.
fn print_dashboard(records: &[ParsedMessage], user: Option<&str>, top: usize) {
    if user.is_none() {
        let users = busiest_users(records, top);
        if !users.is_empty() {
            println!();
            println!("🏆 Busiest users:");
            for (i, entry) in users.iter().enumerate() {
                println!(
                    "   {:>2}. {:<20} {:>6} ({:.2}%)",
                    i + 1,
                    entry.user,
                    entry.count,
                    entry.share
                );
            }
        }
    }

    let words = most_common_words(records, user, top);
    if !words.is_empty() {
        println!();
        println!("🔤 Most common words:");
        for (i, (word, count)) in words.iter().enumerate() {
            println!("   {:>2}. {:<20} {:>6}", i + 1, word, count);
        }
    }

    let emojis = emoji_counts(records, user, top);
    if !emojis.is_empty() {
        println!();
        println!("😀 Top emojis:");
        for (i, (emoji, count)) in emojis.iter().enumerate() {
            println!("   {:>2}. {:<4} {:>6}", i + 1, emoji, count);
        }
    }

    let by_weekday = week_activity(records, user);
    if !by_weekday.is_empty() {
        println!();
        println!("📅 Messages by weekday:");
        for (day, count) in &by_weekday {
            println!("   {:<12} {:>6}", day, count);
        }
    }

    let by_month = month_activity(records, user);
    if !by_month.is_empty() {
        println!();
        println!("🗓️  Messages by month:");
        for (month, count) in &by_month {
            println!("   {:<12} {:>6}", month, count);
        }
    }

    let timeline = monthly_timeline(records, user);
    if !timeline.is_empty() {
        println!();
        println!("📈 Monthly timeline:");
        for bucket in &timeline {
            println!("   {:<16} {:>6}", bucket.label(), bucket.count);
        }
    }

    let grid = activity_heatmap(records, user);
    if let Some((day, period, count)) = grid.busiest_slot() {
        println!();
        println!("🔥 Busiest slot: {} {} ({} records)", day, period, count);
    }
}
