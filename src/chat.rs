//! Scripted money-tips assistant. Every message gets a canned reply after a
//! delay; replies are plain deadlines that the event loop polls with `tick`.

use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::config::{ChatConfig, ReplyOrdering};

pub(crate) const GREETING: &str = "Hi! I'm your Lagom AI assistant. I can help you with budgeting advice, spending tips, and financial planning. What would you like to know?";

pub(crate) const RESPONSES: &[&str] = &[
    "That's a great question! Based on your spending patterns, I'd recommend setting aside 20% of your income for savings.",
    "I notice you've been spending quite a bit on entertainment lately. Consider setting a monthly limit to help reach your goals faster.",
    "Your budgeting is looking good! You're on track to reach your savings goal by the deadline.",
    "Here's a tip: Try the 50/30/20 rule - 50% for needs, 30% for wants, and 20% for savings.",
    "I can see you're doing well with tracking expenses. Keep it up! Consistency is key to financial success.",
    "Consider looking into high-yield savings accounts to make your money work harder for you.",
    "Your spending on food has increased this month. Maybe try meal prepping to save money?",
    "Great job on reaching your weekly savings target! Small consistent steps lead to big results.",
];

pub(crate) const QUICK_QUESTIONS: &[&str] = &[
    "How can I save more money?",
    "What's a good budget for a teenager?",
    "Should I invest my savings?",
    "How do I track my expenses better?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub(crate) struct ChatMessage {
    pub(crate) id: u64,
    pub(crate) sender: Sender,
    pub(crate) content: String,
    pub(crate) sent_at: NaiveDateTime,
    /// For assistant replies, the user message being answered.
    pub(crate) in_reply_to: Option<u64>,
}

#[derive(Debug)]
struct PendingReply {
    question_id: u64,
    due: Instant,
    content: &'static str,
}

pub(crate) struct Assistant {
    messages: Vec<ChatMessage>,
    pending: VecDeque<PendingReply>,
    rng: StdRng,
    delay: Duration,
    jitter_ms: u64,
    ordering: ReplyOrdering,
    next_id: u64,
}

impl Assistant {
    pub(crate) fn new(config: &ChatConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut assistant = Self {
            messages: Vec::new(),
            pending: VecDeque::new(),
            rng,
            delay: Duration::from_millis(config.reply_delay_ms),
            jitter_ms: config.reply_jitter_ms,
            ordering: config.ordering,
            next_id: 1,
        };
        assistant.push(Sender::Assistant, GREETING.to_string(), None);
        assistant
    }

    pub(crate) fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub(crate) fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    pub(crate) fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Post a user message and schedule its reply. Blank input is ignored.
    pub(crate) fn send(&mut self, text: &str, now: Instant) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.push(Sender::User, text.to_string(), None);

        let jitter = if self.jitter_ms > 0 {
            Duration::from_millis(self.rng.gen_range(0..=self.jitter_ms))
        } else {
            Duration::ZERO
        };
        let content = RESPONSES.choose(&mut self.rng).copied().unwrap_or(GREETING);
        self.pending.push_back(PendingReply {
            question_id: id,
            due: now + self.delay + jitter,
            content,
        });
        tracing::debug!(id, pending = self.pending.len(), "chat reply scheduled");
        Some(id)
    }

    /// Deliver every reply that is due at `now`. Returns how many were delivered.
    pub(crate) fn tick(&mut self, now: Instant) -> usize {
        let ready: Vec<PendingReply> = match self.ordering {
            ReplyOrdering::SendOrder => {
                let mut ready = Vec::new();
                while self.pending.front().is_some_and(|p| p.due <= now) {
                    if let Some(reply) = self.pending.pop_front() {
                        ready.push(reply);
                    }
                }
                ready
            }
            ReplyOrdering::Completion => {
                let (mut ready, waiting): (Vec<_>, Vec<_>) =
                    self.pending.drain(..).partition(|p| p.due <= now);
                ready.sort_by_key(|p| p.due);
                self.pending = waiting.into();
                ready
            }
        };

        let delivered = ready.len();
        for reply in ready {
            self.push(
                Sender::Assistant,
                reply.content.to_string(),
                Some(reply.question_id),
            );
        }
        if delivered > 0 {
            tracing::debug!(delivered, pending = self.pending.len(), "chat replies delivered");
        }
        delivered
    }

    /// When the next reply can be delivered, for sizing the event-loop poll.
    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        match self.ordering {
            ReplyOrdering::SendOrder => self.pending.front().map(|p| p.due),
            ReplyOrdering::Completion => self.pending.iter().map(|p| p.due).min(),
        }
    }

    /// Drop every scheduled reply. Returns how many were dropped.
    pub(crate) fn cancel_pending(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        if dropped > 0 {
            tracing::info!(dropped, "pending chat replies cancelled");
        }
        dropped
    }

    fn push(&mut self, sender: Sender, content: String, in_reply_to: Option<u64>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            sender,
            content,
            sent_at: Local::now().naive_local(),
            in_reply_to,
        });
        id
    }
}

#[cfg(test)]
#[path = "chat_tests.rs"]
mod chat_tests;
