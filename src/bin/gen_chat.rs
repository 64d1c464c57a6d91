//! Synthetic WhatsApp export generator for benchmarks and manual testing.
//!
//! Usage: cargo run --bin gen_chat --features gen-chat -- [records] [output] [layout]
//! Example: cargo run --bin gen_chat --features gen-chat -- 100000 big_chat.txt day-first

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

use chatscope::TimestampFormat;

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Carol",
    "Дмитрий",
    "Мария",
    "村上春樹",
    "ليلى",
    "José",
    "🔥Max🔥",
];

const PHRASES: &[&str] = &[
    "see you tomorrow",
    "that was an amazing trip, loved every minute",
    "running late, sorry",
    "what a terrible day at work",
    "can you send the photos",
    "happy birthday!!",
    "no way, that is awful news",
    "lunch at the usual place?",
    "thanks a lot, you are the best",
    "ок, договорились",
    "明日また話しましょう",
    "not sure that will work",
    "great idea, let's do it",
    "ugh, traffic is horrible again",
    "good morning everyone",
];

const EMOJIS: &[&str] = &[
    "😂", "❤️", "👍", "🎉", "😭", "🤔", "🙏", "🔥", "😅", "🥳",
];

const LINKS: &[&str] = &[
    "https://example.com/article",
    "https://youtu.be/dQw4w9WgXcQ",
    "www.wikipedia.org",
    "https://github.com/rust-lang/rust",
];

// None of these may contain ": ", or the parser would read them as
// an author line instead of a notification.
const NOTIFICATIONS: &[&str] = &[
    "Messages and calls are end-to-end encrypted. No one outside of this chat can read or listen to them.",
    "Alice created group \"Weekend plans\"",
    "Alice added Bob",
    "Bob changed the subject from \"Weekend plans\" to \"Road trip\"",
    "Carol joined using this group's invite link",
    "Bob left",
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10_000);

    let output = args.get(2).map(|s| s.as_str()).unwrap_or("test_chat.txt");

    let layout: TimestampFormat = match args
        .get(3)
        .map(|s| s.as_str())
        .unwrap_or("month-first")
        .parse()
    {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!("🧪 Chat export generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Records: {}", count);
    println!("   Output:  {}", output);
    println!("   Layout:  {}", layout);
    println!();

    generate(count, output, layout);
}

fn strftime(layout: TimestampFormat) -> &'static str {
    match layout {
        TimestampFormat::MonthFirst => "%m/%d/%y, %H:%M",
        TimestampFormat::MonthFirstAmPm => "%m/%d/%y, %I:%M %p",
        TimestampFormat::DayFirst => "%d/%m/%y, %H:%M",
    }
}

fn generate(count: usize, output: &str, layout: TimestampFormat) {
    let file = File::create(output).expect("Failed to create output file");
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer

    let mut rng = rand::thread_rng();
    let pattern = strftime(layout);

    // Minute-resolution clock marching forward from a fixed origin, the
    // way timestamps appear in a real export.
    let mut clock = NaiveDate::from_ymd_opt(2023, 1, 1)
        .expect("valid date")
        .and_hms_opt(9, 0, 0)
        .expect("valid time");

    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;

    for i in 0..count {
        clock = clock + Duration::minutes(rng.gen_range(0..=45));
        let stamp = clock.format(pattern);

        let line = match i % 17 {
            0..=9 => {
                let sender = SENDERS.choose(&mut rng).unwrap();
                let phrase = PHRASES.choose(&mut rng).unwrap();
                format!("{} - {}: {}\n", stamp, sender, phrase)
            }
            10 | 11 => {
                let sender = SENDERS.choose(&mut rng).unwrap();
                let phrase = PHRASES.choose(&mut rng).unwrap();
                let emoji = EMOJIS.choose(&mut rng).unwrap();
                format!("{} - {}: {} {}\n", stamp, sender, phrase, emoji)
            }
            12 => {
                let sender = SENDERS.choose(&mut rng).unwrap();
                let link = LINKS.choose(&mut rng).unwrap();
                format!("{} - {}: check this out {}\n", stamp, sender, link)
            }
            13 => {
                let sender = SENDERS.choose(&mut rng).unwrap();
                format!("{} - {}: <Media omitted>\n", stamp, sender)
            }
            14 => {
                let sender = SENDERS.choose(&mut rng).unwrap();
                format!(
                    "{} - {}: first thought\nsecond thought on its own line\nand a third\n",
                    stamp, sender
                )
            }
            15 => {
                let notification = NOTIFICATIONS.choose(&mut rng).unwrap();
                format!("{} - {}\n", stamp, notification)
            }
            _ => {
                let sender = SENDERS.choose(&mut rng).unwrap();
                format!("{} - {}: ok\n", stamp, sender)
            }
        };

        bytes_written += line.len();
        writer.write_all(line.as_bytes()).unwrap();

        if (i + 1) % 10_000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let rps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} records/s)",
                i + 1,
                count,
                mb,
                rps
            );
        }
    }

    writer.flush().unwrap();

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n✅ Done!");
    println!("   Size: {:.2} MB", mb);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} records/s",
        count as f64 / elapsed.as_secs_f64()
    );
}
