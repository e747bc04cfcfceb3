#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::market::PRODUCTS;
use super::news::ARTICLES;
use super::*;
use crate::models::Amount;
use crate::store::Ledger;

// ── Market ────────────────────────────────────────────────────

#[test]
fn test_search_everything() {
    assert_eq!(Product::search("", ALL).len(), PRODUCTS.len());
    assert_eq!(Product::search("  ", "").len(), PRODUCTS.len());
}

#[test]
fn test_search_title_case_insensitive() {
    let hits = Product::search("DENIM", ALL);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}

#[test]
fn test_search_matches_description() {
    let hits: Vec<u32> = Product::search("vintage", ALL).iter().map(|p| p.id).collect();
    assert_eq!(hits, vec![1, 6]);
}

#[test]
fn test_search_by_category() {
    let hits: Vec<u32> = Product::search("", "Electronics").iter().map(|p| p.id).collect();
    assert_eq!(hits, vec![2, 5]);
    assert!(Product::search("headset", "Clothing").is_empty());
    assert!(Product::search("", "Other").is_empty());
}

#[test]
fn test_find_product() {
    let product = Product::find(3).unwrap();
    assert_eq!(product.title, "Skateboard Deck");
    assert_eq!(product.price(), dec!(30));
    assert!(Product::find(99).is_none());
}

// ── News ──────────────────────────────────────────────────────

#[test]
fn test_news_all_categories() {
    assert_eq!(Article::by_category(ALL).len(), ARTICLES.len());
}

#[test]
fn test_news_filter() {
    let crypto = Article::by_category("Crypto");
    assert_eq!(crypto.len(), 1);
    assert_eq!(crypto[0].source, "Crypto News");
    assert!(Article::by_category("Sports").is_empty());
}

#[test]
fn test_headlines() {
    let titles: Vec<&str> = Article::headlines(3).map(|a| a.title).collect();
    assert_eq!(titles.len(), 3);
    assert_eq!(titles[0], ARTICLES[0].title);
}

// ── Challenges ────────────────────────────────────────────────

#[test]
fn test_leaderboard_sorted_by_points() {
    assert!(LEADERBOARD.windows(2).all(|w| w[0].points > w[1].points));
    assert!(LEADERBOARD.windows(2).all(|w| w[0].rank + 1 == w[1].rank));
}

#[test]
fn test_rank_badges() {
    assert_eq!(rank_badge(1), "♛");
    assert_eq!(rank_badge(4), "#4");
}

#[test]
fn test_challenge_progress_is_percent() {
    assert!(CHALLENGES.iter().all(|c| c.progress <= 100));
}

// ── Category cycling ──────────────────────────────────────────

#[test]
fn test_cycle_categories() {
    assert_eq!(cycle(PRODUCT_CATEGORIES, ALL, true), "Clothing");
    assert_eq!(cycle(PRODUCT_CATEGORIES, "Other", true), ALL);
    assert_eq!(cycle(PRODUCT_CATEGORIES, ALL, false), "Other");
    assert_eq!(cycle(NEWS_CATEGORIES, "unknown", true), "Personal Finance");
    assert_eq!(cycle(&[], "x", true), ALL);
}

// ── Achievements ──────────────────────────────────────────────

#[test]
fn test_achievements_for_seeded_ledger() {
    let list = achievements(&Ledger::seeded());
    let earned: Vec<&str> = list.iter().filter(|a| a.earned).map(|a| a.title).collect();
    assert_eq!(earned, vec!["First Goal Created"]);
    assert_eq!(list.len(), 6);
}

#[test]
fn test_goal_achiever_unlocks() {
    let ledger = Ledger::seeded();
    let headset = ledger.goals()[0].id;
    let ledger = ledger.contribute(headset, Amount::new(dec!(75)).unwrap());
    let list = achievements(&ledger);
    assert!(list.iter().any(|a| a.title == "Goal Achiever" && a.earned));
}

#[test]
fn test_empty_ledger_earns_nothing() {
    assert!(achievements(&Ledger::new()).iter().all(|a| !a.earned));
}
