#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Challenge {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) participants: u32,
    pub(crate) time_left: &'static str,
    pub(crate) prize: &'static str,
    pub(crate) my_rank: u32,
    /// Percent, 0-100.
    pub(crate) progress: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LeaderboardEntry {
    pub(crate) rank: u32,
    pub(crate) name: &'static str,
    pub(crate) points: u32,
}

pub(crate) const CHALLENGES: &[Challenge] = &[
    Challenge {
        title: "Most Saved This Month",
        description: "Save the most money compared to your spending",
        participants: 24,
        time_left: "12 days",
        prize: "$50 Gift Card",
        my_rank: 3,
        progress: 75,
    },
    Challenge {
        title: "Expense Tracker Champion",
        description: "Log expenses every day for a week",
        participants: 18,
        time_left: "3 days",
        prize: "$25 Cash",
        my_rank: 1,
        progress: 85,
    },
    Challenge {
        title: "Goal Achiever",
        description: "Complete any savings goal this month",
        participants: 31,
        time_left: "18 days",
        prize: "Premium Features",
        my_rank: 7,
        progress: 45,
    },
];

pub(crate) const LEADERBOARD: &[LeaderboardEntry] = &[
    LeaderboardEntry {
        rank: 1,
        name: "Alex Johnson",
        points: 1250,
    },
    LeaderboardEntry {
        rank: 2,
        name: "Sarah Kim",
        points: 1180,
    },
    LeaderboardEntry {
        rank: 3,
        name: "Mike Chen",
        points: 1050,
    },
    LeaderboardEntry {
        rank: 4,
        name: "Emma Davis",
        points: 980,
    },
    LeaderboardEntry {
        rank: 5,
        name: "Jordan Lee",
        points: 920,
    },
];

/// Badge shown in front of a leaderboard rank.
pub(crate) fn rank_badge(rank: u32) -> String {
    match rank {
        1 => "♛".to_string(),
        2 => "◆".to_string(),
        3 => "●".to_string(),
        n => format!("#{n}"),
    }
}
