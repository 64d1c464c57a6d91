//! Integration tests for the statistics collectors.
//!
//! The unit tests inside `src/stats/` pin each collector to small fixtures.
//! These tests run the collectors together over a larger hand-built chat and
//! check the contracts that hold across them: deterministic ordering, exact
//! user filtering, and totals that agree with each other.

use chatscope::record::{
    GROUP_NOTIFICATION, MEDIA_OMITTED, ParsedMessage, Sentiment, period_label,
};
use chatscope::stats::{
    UserActivity, activity_heatmap, busiest_users, daily_timeline, emoji_counts, month_activity,
    monthly_timeline, most_common_words, overview, sentiment_by_user, sentiment_counts,
    week_activity,
};
use chrono::{NaiveDate, TimeZone, Utc};

fn record(
    user: &str,
    message: &str,
    sentiment: Sentiment,
    (year, month, day, hour, minute): (i32, u32, u32, u32, u32),
) -> ParsedMessage {
    let date = Utc
        .with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap();
    ParsedMessage::from_parts(user, message, sentiment, date)
}

/// A ski-trip planning chat spanning December 2022 through February 2023:
/// three authors plus one notification, one media placeholder, and a message
/// carrying two links. All December/January records fall on Mondays.
fn trip_chat() -> Vec<ParsedMessage> {
    vec![
        record(
            GROUP_NOTIFICATION,
            "Alice created group \"Ski trip\"",
            Sentiment::Neutral,
            (2022, 12, 26, 9, 5),
        ),
        record(
            "Alice",
            "thinking about a ski weekend",
            Sentiment::Neutral,
            (2022, 12, 26, 10, 15),
        ),
        record("Bob", "great idea", Sentiment::Positive, (2022, 12, 26, 10, 20)),
        record(
            "Alice",
            "check https://snow.example.com and www.cabins.example.com",
            Sentiment::Neutral,
            (2023, 1, 2, 10, 15),
        ),
        record("Bob", MEDIA_OMITTED, Sentiment::Neutral, (2023, 1, 2, 10, 17)),
        record("Carol", "that cabin looks perfect", Sentiment::Positive, (2023, 1, 2, 19, 40)),
        record(
            "Bob",
            "booked it, see everyone friday",
            Sentiment::Positive,
            (2023, 1, 6, 21, 5),
        ),
        record("Carol", "my boots broke", Sentiment::Negative, (2023, 2, 14, 8, 30)),
        record("Alice", "happy to lend mine", Sentiment::Positive, (2023, 2, 14, 8, 45)),
    ]
}

// ============================================================================
// Overview
// ============================================================================

mod overview_tests {
    use super::*;

    #[test]
    fn test_totals_over_the_whole_chat() {
        let stats = overview(&trip_chat(), None);

        assert_eq!(stats.messages, 9);
        assert_eq!(stats.words, 34);
        assert_eq!(stats.media, 1);
        assert_eq!(stats.links, 2);
    }

    #[test]
    fn test_every_link_occurrence_counts() {
        let records = vec![record(
            "Alice",
            "see https://a.example.com or https://b.example.com or www.c.example.com",
            Sentiment::Neutral,
            (2023, 1, 2, 10, 0),
        )];

        assert_eq!(overview(&records, None).links, 3);
    }

    #[test]
    fn test_media_requires_the_exact_placeholder() {
        let records = vec![
            record("Bob", MEDIA_OMITTED, Sentiment::Neutral, (2023, 1, 2, 10, 0)),
            record("Bob", "photo: <Media omitted>", Sentiment::Neutral, (2023, 1, 2, 10, 1)),
        ];

        assert_eq!(overview(&records, None).media, 1);
    }

    #[test]
    fn test_user_filter_scopes_every_total() {
        let stats = overview(&trip_chat(), Some("Alice"));

        assert_eq!(stats.messages, 3);
        assert_eq!(stats.words, 13);
        assert_eq!(stats.media, 0);
        assert_eq!(stats.links, 2);
    }

    #[test]
    fn test_user_filter_is_case_sensitive() {
        let stats = overview(&trip_chat(), Some("alice"));

        assert_eq!(stats.messages, 0);
        assert_eq!(stats.words, 0);
    }
}

// ============================================================================
// Timelines
// ============================================================================

mod timeline_tests {
    use super::*;

    #[test]
    fn test_monthly_timeline_is_chronological_across_years() {
        let months = monthly_timeline(&trip_chat(), None);

        let labels: Vec<String> = months.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["December-2022", "January-2023", "February-2023"]);

        let counts: Vec<usize> = months.iter().map(|m| m.count).collect();
        assert_eq!(counts, vec![3, 4, 2]);
    }

    #[test]
    fn test_daily_timeline_buckets_by_calendar_day() {
        let days = daily_timeline(&trip_chat(), None);

        assert_eq!(days.len(), 4);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2022, 12, 26).unwrap());
        assert_eq!(days[0].count, 3);
        assert_eq!(days[3].date, NaiveDate::from_ymd_opt(2023, 2, 14).unwrap());
        assert_eq!(days[3].count, 2);
    }

    #[test]
    fn test_timeline_user_filter() {
        let months = monthly_timeline(&trip_chat(), Some("Carol"));

        assert_eq!(months.len(), 2);
        assert_eq!(months[0].label(), "January-2023");
        assert_eq!(months[0].count, 1);
        assert_eq!(months[1].label(), "February-2023");
        assert_eq!(months[1].count, 1);
    }

    #[test]
    fn test_empty_records_produce_no_buckets() {
        assert!(monthly_timeline(&[], None).is_empty());
        assert!(daily_timeline(&[], None).is_empty());
    }
}

// ============================================================================
// Weekday and month activity
// ============================================================================

mod activity_tests {
    use super::*;

    #[test]
    fn test_week_activity_orders_by_count_then_name() {
        let days = week_activity(&trip_chat(), None);

        assert_eq!(
            days,
            vec![
                ("Monday".to_string(), 6),
                ("Tuesday".to_string(), 2),
                ("Friday".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_week_activity_tie_breaks_alphabetically() {
        let records = vec![
            record("Alice", "hi", Sentiment::Neutral, (2023, 1, 2, 10, 0)),
            record("Bob", "hi", Sentiment::Neutral, (2023, 1, 6, 10, 0)),
        ];

        let days = week_activity(&records, None);
        assert_eq!(days, vec![("Friday".to_string(), 1), ("Monday".to_string(), 1)]);
    }

    #[test]
    fn test_month_activity_on_the_whole_chat() {
        let months = month_activity(&trip_chat(), None);

        assert_eq!(
            months,
            vec![
                ("January".to_string(), 4),
                ("December".to_string(), 3),
                ("February".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_month_activity_pools_the_same_month_across_years() {
        let records = vec![
            record("Alice", "hi", Sentiment::Neutral, (2022, 1, 10, 10, 0)),
            record("Alice", "hi again", Sentiment::Neutral, (2023, 1, 2, 10, 0)),
            record("Bob", "hello", Sentiment::Neutral, (2023, 3, 6, 10, 0)),
        ];

        let months = month_activity(&records, None);
        assert_eq!(months, vec![("January".to_string(), 2), ("March".to_string(), 1)]);
    }
}

// ============================================================================
// Weekday-by-hour heatmap
// ============================================================================

mod heatmap_tests {
    use super::*;

    #[test]
    fn test_grid_shape_is_fixed_even_for_empty_input() {
        let grid = activity_heatmap(&[], None);

        let expected_periods: Vec<String> = (0..24).map(period_label).collect();
        assert_eq!(grid.periods, expected_periods);
        assert_eq!(grid.periods[0], "00-1");
        assert_eq!(grid.periods[9], "9-10");
        assert_eq!(grid.periods[23], "23-00");

        assert_eq!(grid.rows.len(), 7);
        assert_eq!(grid.rows[0].0, "Monday");
        assert_eq!(grid.rows[6].0, "Sunday");
        assert!(grid.rows.iter().all(|(_, counts)| counts.len() == 24));
        assert!(grid.rows.iter().all(|(_, counts)| counts.iter().all(|&c| c == 0)));
    }

    #[test]
    fn test_counts_land_in_the_right_slot() {
        let grid = activity_heatmap(&trip_chat(), None);

        // Rows are Monday-first; columns are parallel to `periods`.
        assert_eq!(grid.rows[0].1[10], 3);
        assert_eq!(grid.rows[0].1[9], 1);
        assert_eq!(grid.rows[0].1[19], 1);
        assert_eq!(grid.rows[1].1[8], 2);
        assert_eq!(grid.rows[4].1[21], 1);
        assert_eq!(grid.rows[3].1[0], 0);
    }

    #[test]
    fn test_busiest_slot_and_total() {
        let grid = activity_heatmap(&trip_chat(), None);

        assert_eq!(grid.busiest_slot(), Some(("Monday", "10-11", 3)));
        assert_eq!(grid.total(), 9);
    }

    #[test]
    fn test_busiest_slot_tie_takes_the_earliest_row() {
        let records = vec![
            record("Alice", "hi", Sentiment::Neutral, (2023, 1, 2, 9, 0)),
            record("Bob", "hi", Sentiment::Neutral, (2023, 1, 3, 8, 0)),
        ];

        let grid = activity_heatmap(&records, None);
        assert_eq!(grid.busiest_slot(), Some(("Monday", "9-10", 1)));
    }

    #[test]
    fn test_empty_grid_has_no_busiest_slot() {
        let grid = activity_heatmap(&[], None);

        assert_eq!(grid.busiest_slot(), None);
        assert_eq!(grid.total(), 0);
    }

    #[test]
    fn test_user_filter() {
        let grid = activity_heatmap(&trip_chat(), Some("Bob"));
        assert_eq!(grid.total(), 3);
    }
}

// ============================================================================
// Busiest users
// ============================================================================

mod users_tests {
    use super::*;

    #[test]
    fn test_ranking_counts_and_shares() {
        let users = busiest_users(&trip_chat(), 10);

        assert_eq!(
            users,
            vec![
                UserActivity { user: "Alice".to_string(), count: 3, share: 33.33 },
                UserActivity { user: "Bob".to_string(), count: 3, share: 33.33 },
                UserActivity { user: "Carol".to_string(), count: 2, share: 22.22 },
                UserActivity { user: GROUP_NOTIFICATION.to_string(), count: 1, share: 11.11 },
            ]
        );
    }

    #[test]
    fn test_shares_stay_relative_to_the_whole_chat_when_truncated() {
        let users = busiest_users(&trip_chat(), 1);

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].user, "Alice");
        assert_eq!(users[0].share, 33.33);
    }

    #[test]
    fn test_single_author_owns_the_chat() {
        let records = vec![
            record("Alice", "one", Sentiment::Neutral, (2023, 1, 2, 10, 0)),
            record("Alice", "two", Sentiment::Neutral, (2023, 1, 2, 10, 1)),
        ];

        let users = busiest_users(&records, 5);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].count, 2);
        assert_eq!(users[0].share, 100.0);
    }

    #[test]
    fn test_top_zero_and_empty_records() {
        assert!(busiest_users(&trip_chat(), 0).is_empty());
        assert!(busiest_users(&[], 10).is_empty());
    }
}

// ============================================================================
// Word ranking
// ============================================================================

mod words_tests {
    use super::*;

    #[test]
    fn test_ranking_counts_and_ties() {
        let records = vec![
            record(
                "Alice",
                "pizza friday? pizza sounds perfect",
                Sentiment::Positive,
                (2023, 1, 2, 10, 0),
            ),
            record("Bob", "pizza it is", Sentiment::Neutral, (2023, 1, 2, 10, 1)),
        ];

        let words = most_common_words(&records, None, 10);
        assert_eq!(
            words,
            vec![
                ("pizza".to_string(), 3),
                ("friday?".to_string(), 1),
                ("perfect".to_string(), 1),
                ("sounds".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_punctuation_keeps_a_token_off_the_stop_list() {
        let words = most_common_words(&trip_chat(), None, 50);

        // "it," survives; the bare stop word "it" would not.
        assert!(words.contains(&("it,".to_string(), 1)));
        assert!(!words.iter().any(|(w, _)| w == "it"));
        assert!(!words.iter().any(|(w, _)| w == "and" || w == "my" || w == "to"));
    }

    #[test]
    fn test_notifications_and_media_contribute_no_words() {
        let words = most_common_words(&trip_chat(), None, 50);

        assert!(!words.iter().any(|(w, _)| w == "created" || w == "alice"));
        assert!(!words.iter().any(|(w, _)| w.contains("media") || w.contains("omitted")));
    }

    #[test]
    fn test_user_filter_orders_singletons_alphabetically() {
        let words = most_common_words(&trip_chat(), Some("Alice"), 50);

        let expected: Vec<(String, usize)> = [
            "check",
            "happy",
            "https://snow.example.com",
            "lend",
            "mine",
            "ski",
            "thinking",
            "weekend",
            "www.cabins.example.com",
        ]
        .iter()
        .map(|w| ((*w).to_string(), 1))
        .collect();

        assert_eq!(words, expected);
    }

    #[test]
    fn test_top_truncates() {
        assert_eq!(most_common_words(&trip_chat(), None, 3).len(), 3);
    }
}

// ============================================================================
// Emoji ranking
// ============================================================================

mod emoji_tests {
    use super::*;

    fn movie_chat() -> Vec<ParsedMessage> {
        vec![
            record("Alice", "movie night 🍿🍿🎬", Sentiment::Positive, (2023, 1, 2, 20, 0)),
            record("Bob", "🍿 count me in 😀", Sentiment::Positive, (2023, 1, 2, 20, 5)),
        ]
    }

    #[test]
    fn test_every_occurrence_counts_and_ties_order_by_scalar() {
        let counts = emoji_counts(&movie_chat(), None, 10);

        assert_eq!(
            counts,
            vec![
                ("🍿".to_string(), 3),
                ("🎬".to_string(), 1),
                ("😀".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_family_glyph_tallies_as_components() {
        let records = vec![record(
            "Alice",
            "our crew 👨\u{200d}👩\u{200d}👦",
            Sentiment::Positive,
            (2023, 1, 2, 10, 0),
        )];

        let counts = emoji_counts(&records, None, 10);
        assert_eq!(
            counts,
            vec![
                ("👦".to_string(), 1),
                ("👨".to_string(), 1),
                ("👩".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_user_filter_and_truncation() {
        let bob = emoji_counts(&movie_chat(), Some("Bob"), 10);
        assert_eq!(bob, vec![("🍿".to_string(), 1), ("😀".to_string(), 1)]);

        let top = emoji_counts(&movie_chat(), None, 1);
        assert_eq!(top, vec![("🍿".to_string(), 3)]);
    }

    #[test]
    fn test_chat_without_emoji() {
        assert!(emoji_counts(&trip_chat(), None, 10).is_empty());
    }
}

// ============================================================================
// Sentiment
// ============================================================================

mod sentiment_tests {
    use super::*;

    #[test]
    fn test_tally_over_the_whole_chat() {
        let tally = sentiment_counts(&trip_chat(), None);

        assert_eq!(tally.positive, 4);
        assert_eq!(tally.negative, 1);
        assert_eq!(tally.neutral, 4);
        assert_eq!(tally.total(), 9);
    }

    #[test]
    fn test_tally_user_filter() {
        let tally = sentiment_counts(&trip_chat(), Some("Alice"));

        assert_eq!(tally.positive, 1);
        assert_eq!(tally.negative, 0);
        assert_eq!(tally.neutral, 2);
    }

    #[test]
    fn test_by_user_ranks_per_label() {
        let chat = trip_chat();

        let positive = sentiment_by_user(&chat, Sentiment::Positive);
        assert_eq!(
            positive,
            vec![
                ("Bob".to_string(), 2),
                ("Alice".to_string(), 1),
                ("Carol".to_string(), 1),
            ]
        );

        let negative = sentiment_by_user(&chat, Sentiment::Negative);
        assert_eq!(negative, vec![("Carol".to_string(), 1)]);
    }

    #[test]
    fn test_by_user_includes_the_notification_sentinel() {
        let neutral = sentiment_by_user(&trip_chat(), Sentiment::Neutral);

        assert_eq!(neutral[0], ("Alice".to_string(), 2));
        assert!(neutral.contains(&(GROUP_NOTIFICATION.to_string(), 1)));
    }

    #[test]
    fn test_by_user_totals_agree_with_the_tally() {
        let chat = trip_chat();
        let tally = sentiment_counts(&chat, None);

        for &label in Sentiment::all() {
            let sum: usize = sentiment_by_user(&chat, label).iter().map(|(_, n)| n).sum();
            assert_eq!(sum, tally.count(label));
        }
    }
}

// ============================================================================
// Cross-collector consistency
// ============================================================================

mod consistency_tests {
    use super::*;

    #[test]
    fn test_every_collector_agrees_on_the_record_count() {
        let chat = trip_chat();
        let total = chat.len();

        assert_eq!(overview(&chat, None).messages, total);
        assert_eq!(activity_heatmap(&chat, None).total(), total);
        assert_eq!(sentiment_counts(&chat, None).total(), total);

        let daily: usize = daily_timeline(&chat, None).iter().map(|d| d.count).sum();
        assert_eq!(daily, total);

        let monthly: usize = monthly_timeline(&chat, None).iter().map(|m| m.count).sum();
        assert_eq!(monthly, total);

        let weekdays: usize = week_activity(&chat, None).iter().map(|(_, n)| n).sum();
        assert_eq!(weekdays, total);

        let users: usize = busiest_users(&chat, 10).iter().map(|u| u.count).sum();
        assert_eq!(users, total);
    }

    #[test]
    fn test_user_filtered_views_agree() {
        let chat = trip_chat();

        for user in ["Alice", "Bob", "Carol"] {
            let messages = overview(&chat, Some(user)).messages;
            assert_eq!(activity_heatmap(&chat, Some(user)).total(), messages);
            assert_eq!(sentiment_counts(&chat, Some(user)).total(), messages);
        }
    }
}
