use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Dollar amount with thousands separators. Whole amounts drop the cents:
/// `1234` → `"$1,234"`, `4.5` → `"$4.50"`, `-15` → `"-$15"`.
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs().round_dp(2);
    let text = if abs.fract().is_zero() {
        format!("{}", abs.trunc())
    } else {
        format!("{abs:.2}")
    };
    let (whole, cents) = match text.split_once('.') {
        Some((w, c)) => (w, Some(c)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if val < Decimal::ZERO { "-" } else { "" };
    match cents {
        Some(c) => format!("{sign}${grouped}.{c}"),
        None => format!("{sign}${grouped}"),
    }
}

/// `+$50` for money in, `-$15` for money out.
pub(crate) fn format_signed(val: Decimal) -> String {
    if val >= Decimal::ZERO {
        format!("+{}", format_amount(val))
    } else {
        format_amount(val)
    }
}

/// At most `max` characters, ending in "…" when cut.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    match max {
        0 => String::new(),
        _ => {
            let mut out: String = s.chars().take(max - 1).collect();
            out.push('…');
            out
        }
    }
}

/// Text progress bar for a 0-100 percentage.
pub(crate) fn progress_bar(percent: Decimal, width: usize) -> String {
    let pct = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let filled = (pct * Decimal::from(width) / Decimal::ONE_HUNDRED)
        .floor()
        .to_usize()
        .unwrap_or(0)
        .min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "12 days left", "Due today" or "3 days overdue".
pub(crate) fn describe_days_left(days: i64) -> String {
    match days {
        0 => "Due today".to_string(),
        1 => "1 day left".to_string(),
        d if d > 0 => format!("{d} days left"),
        -1 => "1 day overdue".to_string(),
        d => format!("{} days overdue", -d),
    }
}

/// Move a list cursor by `delta` rows and keep it inside a `page`-row window.
pub(crate) fn move_cursor(index: &mut usize, scroll: &mut usize, len: usize, page: usize, delta: isize) {
    if len == 0 {
        *index = 0;
        *scroll = 0;
        return;
    }
    let target = index.saturating_add_signed(delta).min(len - 1);
    *index = target;
    follow_cursor(*index, scroll, page);
}

/// Put the cursor on the first (`to_end == false`) or last row.
pub(crate) fn jump_cursor(index: &mut usize, scroll: &mut usize, len: usize, page: usize, to_end: bool) {
    *index = if to_end { len.saturating_sub(1) } else { 0 };
    follow_cursor(*index, scroll, page);
}

fn follow_cursor(index: usize, scroll: &mut usize, page: usize) {
    let page = page.max(1);
    if index < *scroll {
        *scroll = index;
    } else if index >= *scroll + page {
        *scroll = index + 1 - page;
    }
}
