use anyhow::Result;
use chrono::Local;
use std::io::Write;

use crate::catalog::{rank_badge, Article, Product, LEADERBOARD};
use crate::store::Stores;
use crate::ui::util::{describe_days_left, format_amount, format_signed, progress_bar, truncate};

pub(crate) fn as_cli(args: &[String], stores: &Stores) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(args, stores, &mut out)
}

fn dispatch(args: &[String], stores: &Stores, out: &mut impl Write) -> Result<()> {
    let Some(command) = args.get(1) else {
        print_usage(out)?;
        return Ok(());
    };
    let rest = args.get(2..).unwrap_or_default();
    tracing::debug!(command = %command, "cli command");

    match command.as_str() {
        "summary" | "s" => cli_summary(stores, out),
        "goals" | "g" => cli_goals(stores, out),
        "market" | "m" => cli_market(rest, out),
        "news" | "n" => cli_news(rest, out),
        "leaderboard" | "l" => cli_leaderboard(out),
        "--help" | "-h" | "help" => print_usage(out),
        "--version" | "-V" | "version" => {
            writeln!(out, "lagom {}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        other => {
            print_usage(out)?;
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Lagom - pocket money, savings goals and money tips")?;
    writeln!(out)?;
    writeln!(out, "Usage: lagom [command]")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  (none)                        Launch interactive TUI")?;
    writeln!(out, "  summary                       Balance, totals and spending by category")?;
    writeln!(out, "  goals                         Savings goals and their progress")?;
    writeln!(out, "  market [query]                Browse Lagom Business listings")?;
    writeln!(out, "    --category <name>           Only listings in this category")?;
    writeln!(out, "  news                          Latest financial news")?;
    writeln!(out, "    --category <name>           Only articles in this category")?;
    writeln!(out, "  leaderboard                   Challenge leaderboard")?;
    writeln!(out, "  --help, -h                    Show this help")?;
    writeln!(out, "  --version, -V                 Show version")?;
    Ok(())
}

/// Value following `--flag`, if present.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// Positional words with any `--flag value` pairs removed.
fn positional(args: &[String]) -> Vec<&str> {
    let mut words = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg.starts_with("--") {
            iter.next();
        } else {
            words.push(arg.as_str());
        }
    }
    words
}

fn cli_summary(stores: &Stores, out: &mut impl Write) -> Result<()> {
    let ledger = stores.ledger.snapshot();

    writeln!(out, "Lagom summary")?;
    writeln!(out, "{}", "─".repeat(40))?;
    writeln!(out, "  Balance:    {}", format_amount(ledger.balance()))?;
    writeln!(out, "  Income:     {}", format_amount(ledger.total_income()))?;
    writeln!(out, "  Expenses:   {}", format_amount(ledger.total_expenses()))?;
    writeln!(out, "  Total Txns: {}", ledger.transaction_count())?;
    writeln!(
        out,
        "  Goals:      {} of {} completed",
        ledger.completed_goals(),
        ledger.goals().len()
    )?;

    let spending = ledger.spending_by_category();
    if !spending.is_empty() {
        writeln!(out)?;
        writeln!(out, "Spending by Category:")?;
        for (name, amount) in &spending {
            writeln!(out, "  {name:<24} {}", format_amount(*amount))?;
        }
    }

    if !ledger.transactions().is_empty() {
        writeln!(out)?;
        writeln!(out, "Recent:")?;
        for t in ledger.transactions().iter().take(5) {
            writeln!(
                out,
                "  {}  {:<28} {:>10}",
                t.occurred_at.format("%Y-%m-%d"),
                truncate(&t.description, 28),
                format_signed(t.signed_amount())
            )?;
        }
    }
    Ok(())
}

fn cli_goals(stores: &Stores, out: &mut impl Write) -> Result<()> {
    let goals = stores.ledger.snapshot().goals();
    if goals.is_empty() {
        writeln!(out, "No savings goals")?;
        return Ok(());
    }

    let today = Local::now().date_naive();
    for goal in goals {
        let pct = goal.progress_percent();
        writeln!(
            out,
            "{:<24} {} {:>3.0}%  {} / {}  {}",
            truncate(&goal.title, 24),
            progress_bar(pct, 20),
            pct,
            format_amount(goal.current_amount),
            format_amount(goal.target_amount.value()),
            describe_days_left(goal.days_left(today)),
        )?;
    }
    Ok(())
}

fn cli_market(args: &[String], out: &mut impl Write) -> Result<()> {
    let query = positional(args).join(" ");
    let category = flag_value(args, "--category").unwrap_or_default();
    let products = Product::search(&query, category);
    if products.is_empty() {
        writeln!(out, "No listings match")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<4} {:<26} {:>8} {:<10} Seller",
        "ID", "Item", "Price", "Condition"
    )?;
    writeln!(out, "{}", "─".repeat(62))?;
    for p in products {
        writeln!(
            out,
            "{:<4} {:<26} {:>8} {:<10} {}",
            p.id,
            truncate(p.title, 26),
            format_amount(p.price()),
            p.condition,
            p.seller
        )?;
    }
    Ok(())
}

fn cli_news(args: &[String], out: &mut impl Write) -> Result<()> {
    let category = flag_value(args, "--category").unwrap_or(crate::catalog::ALL);
    let articles = Article::by_category(category);
    if articles.is_empty() {
        writeln!(out, "No articles in {category}")?;
        return Ok(());
    }
    for a in articles {
        writeln!(out, "{}", a.title)?;
        writeln!(
            out,
            "  {} · {} · {} min read · {}",
            a.category, a.source, a.read_minutes, a.published
        )?;
    }
    Ok(())
}

fn cli_leaderboard(out: &mut impl Write) -> Result<()> {
    for entry in LEADERBOARD {
        writeln!(
            out,
            "{:>3}  {:<18} {:>5} pts",
            rank_badge(entry.rank),
            entry.name,
            entry.points
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
