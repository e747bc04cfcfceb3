//! Fixed content shown next to the ledger: the peer marketplace, the news feed,
//! challenges and the leaderboard, achievements and dashboard tips.

mod achievements;
mod challenges;
mod market;
mod news;

pub(crate) use achievements::achievements;
pub(crate) use challenges::{rank_badge, Challenge, CHALLENGES, LEADERBOARD};
pub(crate) use market::{Product, PRODUCT_CATEGORIES};
pub(crate) use news::{Article, NEWS_CATEGORIES};

pub(crate) const INSIGHTS: &[&str] = &[
    "Great job! You're spending 20% less than last month",
    "Consider setting aside $10 more for your gaming headset goal",
    "Your food expenses are trending up - maybe try meal prep?",
];

/// Label used for "no category filter" in the category pickers.
pub(crate) const ALL: &str = "all";

/// Step through a category list, wrapping at both ends.
pub(crate) fn cycle<'a>(categories: &[&'a str], current: &str, forward: bool) -> &'a str {
    let len = categories.len();
    if len == 0 {
        return ALL;
    }
    let idx = categories.iter().position(|c| *c == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % len
    } else if idx == 0 {
        len - 1
    } else {
        idx - 1
    };
    categories[next]
}

#[cfg(test)]
mod tests;
