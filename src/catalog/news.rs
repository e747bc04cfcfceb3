use super::ALL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Article {
    pub(crate) id: u32,
    pub(crate) title: &'static str,
    pub(crate) summary: &'static str,
    pub(crate) category: &'static str,
    pub(crate) read_minutes: u32,
    pub(crate) published: &'static str,
    pub(crate) source: &'static str,
}

pub(crate) const NEWS_CATEGORIES: &[&str] = &[
    ALL,
    "Personal Finance",
    "Investing",
    "Crypto",
    "Technology",
    "Entrepreneurship",
    "Market News",
];

pub(crate) const ARTICLES: &[Article] = &[
    Article {
        id: 1,
        title: "Teen Savings Accounts: Everything You Need to Know",
        summary: "Learn about the best savings accounts for teenagers and how to maximize your money.",
        category: "Personal Finance",
        read_minutes: 5,
        published: "2 hours ago",
        source: "Finance Today",
    },
    Article {
        id: 2,
        title: "Stock Market Basics: A Beginner's Guide",
        summary: "Understanding the fundamentals of stock market investing for young adults.",
        category: "Investing",
        read_minutes: 8,
        published: "4 hours ago",
        source: "Investment Weekly",
    },
    Article {
        id: 3,
        title: "Cryptocurrency Trends: What Teens Should Know",
        summary: "The latest developments in cryptocurrency and what it means for young investors.",
        category: "Crypto",
        read_minutes: 6,
        published: "6 hours ago",
        source: "Crypto News",
    },
    Article {
        id: 4,
        title: "Budgeting Apps That Actually Work for Students",
        summary: "A comprehensive review of the best budgeting apps designed for student life.",
        category: "Technology",
        read_minutes: 7,
        published: "8 hours ago",
        source: "Tech Finance",
    },
    Article {
        id: 5,
        title: "Side Hustles That Pay: Ideas for Teen Entrepreneurs",
        summary: "Creative ways for teenagers to earn extra money while balancing school.",
        category: "Entrepreneurship",
        read_minutes: 10,
        published: "12 hours ago",
        source: "Young Money",
    },
    Article {
        id: 6,
        title: "Market Update: Tech Stocks Surge Amid AI Boom",
        summary: "Technology stocks continue to rise as artificial intelligence drives innovation.",
        category: "Market News",
        read_minutes: 4,
        published: "1 day ago",
        source: "Market Watch",
    },
];

impl Article {
    /// Articles in `category`, newest first. The first entry is the featured story.
    pub(crate) fn by_category(category: &str) -> Vec<&'static Article> {
        ARTICLES
            .iter()
            .filter(|a| category.is_empty() || category == ALL || a.category == category)
            .collect()
    }

    pub(crate) fn headlines(count: usize) -> impl Iterator<Item = &'static Article> {
        ARTICLES.iter().take(count)
    }
}
