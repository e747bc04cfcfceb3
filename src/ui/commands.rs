use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Instant;

use chrono::Local;
use rust_decimal::Decimal;

use super::app::{App, InputMode, PendingAction, Screen, CONTRIBUTION_PRESETS};
use super::util::format_amount;
use crate::error::FormError;
use crate::forms::{self, GoalForm, LoginForm, ProfileForm, SignupForm, TransactionForm};
use crate::models::{Amount, TransactionKind};
use crate::routes::Route;
use crate::store::GoalUpdate;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit Lagom", cmd_quit, r);
    register_command!("quit", "Quit Lagom", cmd_quit, r);
    register_command!(
        "login",
        "Sign in (e.g. :login sam@example.com secret)",
        cmd_login,
        r
    );
    register_command!(
        "signup",
        "Create an account (e.g. :signup sam@example.com secret Sam Lee)",
        cmd_signup,
        r
    );
    register_command!("logout", "Sign out", cmd_logout, r);
    register_command!("d", "Go to Dashboard", cmd_dashboard, r);
    register_command!("dashboard", "Go to Dashboard", cmd_dashboard, r);
    register_command!("e", "Go to Expenses", cmd_expenses, r);
    register_command!("expenses", "Go to Expenses", cmd_expenses, r);
    register_command!("g", "Go to Goals", cmd_goals, r);
    register_command!("goals", "Go to Goals", cmd_goals, r);
    register_command!("b", "Go to Lagom Business", cmd_business, r);
    register_command!("business", "Go to Lagom Business", cmd_business, r);
    register_command!("challenges", "Go to Challenges", cmd_challenges, r);
    register_command!("n", "Go to News", cmd_news, r);
    register_command!("news", "Go to News", cmd_news, r);
    register_command!("chat", "Go to AI Chat", cmd_chat, r);
    register_command!("p", "Go to Profile", cmd_profile, r);
    register_command!("profile", "Go to Profile", cmd_profile, r);
    register_command!("go", "Open a path (e.g. :go /business/product/2)", cmd_go, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "income",
        "Log income (e.g. :income 20 Job | Babysitting)",
        cmd_income,
        r
    );
    register_command!(
        "i",
        "Log income (e.g. :i 20 Job | Babysitting)",
        cmd_income,
        r
    );
    register_command!(
        "expense",
        "Log an expense (e.g. :expense 4.50 Food | Bubble tea)",
        cmd_expense,
        r
    );
    register_command!(
        "x",
        "Log an expense (e.g. :x 4.50 Food | Bubble tea)",
        cmd_expense,
        r
    );
    register_command!(
        "goal",
        "Create a goal (e.g. :goal 300 2024-08-01 Travel | Beach trip)",
        cmd_goal,
        r
    );
    register_command!(
        "contribute",
        "Add to the selected goal (e.g. :contribute 15)",
        cmd_contribute,
        r
    );
    register_command!(
        "edit-goal",
        "Edit the selected goal (e.g. :edit-goal target 200)",
        cmd_edit_goal,
        r
    );
    register_command!("undo", "Undo the last ledger change", cmd_undo, r);
    register_command!("redo", "Redo the last undone change", cmd_redo, r);
    register_command!(
        "search",
        "Search the marketplace (e.g. :search headset)",
        cmd_search,
        r
    );
    register_command!("s", "Search the marketplace (e.g. :s headset)", cmd_search, r);
    register_command!("open", "Open a listing (e.g. :open 3)", cmd_open, r);
    register_command!("message", "Message the seller of the open listing", cmd_message, r);
    register_command!(
        "ask",
        "Ask the assistant (e.g. :ask should I invest?)",
        cmd_ask,
        r
    );
    register_command!(
        "cancel-replies",
        "Drop the assistant's pending replies",
        cmd_cancel_replies,
        r
    );
    register_command!("edit-profile", "Open the profile editor", cmd_edit_profile, r);
    register_command!("name", "Set name in the profile editor", cmd_name, r);
    register_command!("email", "Set email in the profile editor", cmd_email, r);
    register_command!("save", "Save the profile editor", cmd_save, r);
    register_command!("cancel", "Close the profile editor", cmd_cancel, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        tracing::debug!(command = cmd_name, "running command");
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Split `head | tail` command arguments.
fn split_pipe(args: &str) -> (&str, &str) {
    match args.split_once('|') {
        Some((head, tail)) => (head.trim(), tail.trim()),
        None => (args.trim(), ""),
    }
}

/// Ledger commands need a session, like the views they belong to.
fn require_session(app: &mut App) -> bool {
    if app.stores.auth.is_authenticated() {
        true
    } else {
        app.navigate(Route::Auth);
        app.set_status("Please sign in first: :login <email> <password>");
        false
    }
}

// ── Shared actions (also bound to keys) ──────────────────────

pub(crate) fn contribute_selected(app: &mut App, amount: Amount) {
    let Some(goal) = app.selected_goal() else {
        app.set_status("No goal selected. Create one with :goal");
        return;
    };
    let id = goal.id;
    let title = goal.title.clone();
    let changed = app.stores.ledger.apply(|l| l.contribute(id, amount));
    if changed {
        let reached = app.ledger().goal(id).is_some_and(|g| g.is_complete());
        let mut msg = format!(
            "Progress updated! Added {} to \"{title}\".",
            format_amount(amount.value())
        );
        if reached {
            msg.push_str(" Goal reached!");
        }
        app.set_status(msg);
    } else {
        app.set_status(format!("\"{title}\" is already fully funded"));
    }
}

pub(crate) fn send_chat(app: &mut App, text: &str) {
    if app.assistant.send(text, Instant::now()).is_none() {
        app.set_status("Type a message first");
    }
}

pub(crate) fn request_logout(app: &mut App) {
    if !app.stores.auth.is_authenticated() {
        app.set_status("Not signed in");
        return;
    }
    app.pending_action = Some(PendingAction::Logout);
    app.confirm_message = "Log out of Lagom?".into();
    app.input_mode = InputMode::Confirm;
}

pub(crate) fn request_cancel_replies(app: &mut App) {
    let count = app.assistant.pending_count();
    if count == 0 {
        app.set_status("No replies pending");
        return;
    }
    app.pending_action = Some(PendingAction::CancelReplies { count });
    app.confirm_message = format!("Drop {count} pending assistant {}?", replies(count));
    app.input_mode = InputMode::Confirm;
}

fn replies(count: usize) -> &'static str {
    if count == 1 {
        "reply"
    } else {
        "replies"
    }
}

pub(crate) fn confirm_pending(app: &mut App) {
    if let Some(action) = app.pending_action.take() {
        match action {
            PendingAction::Logout => {
                app.stores.auth.logout();
                app.profile_draft = None;
                app.assistant.cancel_pending();
                app.navigate(Route::Auth);
                app.set_status("Signed out. See you soon!");
            }
            PendingAction::CancelReplies { .. } => {
                let dropped = app.assistant.cancel_pending();
                app.set_status(format!("Dropped {dropped} pending {}", replies(dropped)));
            }
        }
    }
    app.input_mode = InputMode::Normal;
    app.confirm_message.clear();
}

pub(crate) fn toggle_profile_edit(app: &mut App) {
    if app.profile_draft.is_some() {
        app.profile_draft = None;
        app.set_status("Edit cancelled");
        return;
    }
    match app.stores.auth.current_user() {
        Some(user) => {
            app.profile_draft = Some(ProfileForm {
                name: user.name.clone(),
                email: user.email.clone(),
            });
            app.screen = Screen::Profile;
            app.set_status("Editing profile: :name <name>, :email <email>, :save or :cancel");
        }
        None => {
            require_session(app);
        }
    }
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_login(args: &str, app: &mut App) -> anyhow::Result<()> {
    let mut words = args.split_whitespace();
    let form = LoginForm {
        email: words.next().unwrap_or("").to_string(),
        password: words.next().unwrap_or("").to_string(),
    };
    match form.validate() {
        Ok(creds) => {
            let name = app.stores.auth.login(&creds.email, &creds.password).name.clone();
            app.navigate(Route::Dashboard);
            app.set_status(format!("Welcome back, {name}!"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_signup(args: &str, app: &mut App) -> anyhow::Result<()> {
    let mut words = args.split_whitespace();
    let email = words.next().unwrap_or("").to_string();
    let password = words.next().unwrap_or("").to_string();
    let name = words.collect::<Vec<_>>().join(" ");
    let form = SignupForm {
        name,
        email,
        password,
    };
    match form.validate() {
        Ok((name, creds)) => {
            app.stores.auth.signup(&name, &creds.email, &creds.password);
            app.navigate(Route::Dashboard);
            app.set_status(format!("Welcome to Lagom, {name}!"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_logout(_args: &str, app: &mut App) -> anyhow::Result<()> {
    request_logout(app);
    Ok(())
}

fn cmd_dashboard(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.navigate(Route::Dashboard);
    Ok(())
}

fn cmd_expenses(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.navigate(Route::Expenses);
    Ok(())
}

fn cmd_goals(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.navigate(Route::Goals);
    Ok(())
}

fn cmd_business(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.navigate(Route::Business);
    Ok(())
}

fn cmd_challenges(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.navigate(Route::Challenges);
    Ok(())
}

fn cmd_news(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.navigate(Route::News);
    Ok(())
}

fn cmd_chat(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.navigate(Route::Chat);
    Ok(())
}

fn cmd_profile(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.navigate(Route::Profile);
    Ok(())
}

fn cmd_go(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :go <path>  (e.g. :go /goals)");
        return Ok(());
    }
    app.navigate(Route::parse(args));
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_income(args: &str, app: &mut App) -> anyhow::Result<()> {
    add_transaction(TransactionKind::Income, args, app);
    Ok(())
}

fn cmd_expense(args: &str, app: &mut App) -> anyhow::Result<()> {
    add_transaction(TransactionKind::Expense, args, app);
    Ok(())
}

fn add_transaction(kind: TransactionKind, args: &str, app: &mut App) {
    if !require_session(app) {
        return;
    }
    let (head, description) = split_pipe(args);
    let mut words = head.split_whitespace();
    let amount = words.next().unwrap_or("").to_string();
    let category = words.collect::<Vec<_>>().join(" ");
    let form = TransactionForm {
        kind: kind.as_str().to_string(),
        amount,
        category,
        description: description.to_string(),
    };

    match form.validate(Local::now().naive_local()) {
        Ok(new) => {
            let msg = format!(
                "Transaction added! {} of {} recorded.",
                new.kind,
                format_amount(new.amount.value())
            );
            app.stores.ledger.apply(|l| l.add_transaction(new));
            app.transaction_index = 0;
            app.transaction_scroll = 0;
            app.set_status(msg);
        }
        Err(e) => app.set_status(e.to_string()),
    }
}

fn cmd_goal(args: &str, app: &mut App) -> anyhow::Result<()> {
    if !require_session(app) {
        return Ok(());
    }
    let (head, title) = split_pipe(args);
    let mut words = head.split_whitespace();
    let form = GoalForm {
        target_amount: words.next().unwrap_or("").to_string(),
        deadline: words.next().unwrap_or("").to_string(),
        category: words.collect::<Vec<_>>().join(" "),
        title: title.to_string(),
    };

    match form.validate() {
        Ok(new) => {
            let msg = format!("Goal created! Your goal \"{}\" has been added.", new.title);
            app.stores.ledger.apply(|l| l.add_goal(new));
            app.goal_index = 0;
            app.set_status(msg);
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_contribute(args: &str, app: &mut App) -> anyhow::Result<()> {
    if !require_session(app) {
        return Ok(());
    }
    let amount = if args.is_empty() {
        Amount::new(Decimal::from(app.contribution_preset()))
    } else {
        Amount::parse(args)
    };
    match amount {
        Ok(amount) => contribute_selected(app, amount),
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_edit_goal(args: &str, app: &mut App) -> anyhow::Result<()> {
    if !require_session(app) {
        return Ok(());
    }
    let Some(goal) = app.selected_goal() else {
        app.set_status("No goal selected. Create one with :goal");
        return Ok(());
    };
    let id = goal.id;

    let mut parts = args.splitn(2, ' ');
    let field = parts.next().unwrap_or("");
    let value = parts.next().unwrap_or("").trim();

    let update = match parse_goal_update(field, value) {
        Ok(Some(update)) => update,
        Ok(None) => {
            app.set_status("Usage: :edit-goal <title|target|saved|deadline|category> <value>");
            return Ok(());
        }
        Err(e) => {
            app.set_status(e.to_string());
            return Ok(());
        }
    };

    if app.stores.ledger.apply(|l| l.update_goal(id, &update)) {
        app.set_status(format!("Goal updated: {field}"));
    } else {
        app.set_status("Nothing changed");
    }
    Ok(())
}

fn parse_goal_update(field: &str, value: &str) -> Result<Option<GoalUpdate>, FormError> {
    let mut update = GoalUpdate::default();
    match field {
        "title" => {
            if value.is_empty() {
                return Err(FormError::MissingField("title"));
            }
            update.title = Some(value.to_string());
        }
        "target" => update.target_amount = Some(Amount::parse(value)?),
        "saved" => {
            let saved = Decimal::from_str(value.trim_start_matches('$'))
                .map_err(|_| FormError::InvalidAmount(value.to_string()))?;
            update.current_amount = Some(saved);
        }
        "deadline" => update.deadline = Some(forms::parse_date(value)?),
        "category" => {
            if value.is_empty() {
                return Err(FormError::MissingField("category"));
            }
            update.category = Some(value.to_string());
        }
        _ => return Ok(None),
    }
    Ok(Some(update))
}

fn cmd_undo(_args: &str, app: &mut App) -> anyhow::Result<()> {
    if !require_session(app) {
        return Ok(());
    }
    if app.stores.ledger.undo() {
        app.clamp_cursors();
        app.set_status("Undid last change");
    } else {
        app.set_status("Nothing to undo");
    }
    Ok(())
}

fn cmd_redo(_args: &str, app: &mut App) -> anyhow::Result<()> {
    if !require_session(app) {
        return Ok(());
    }
    if app.stores.ledger.redo() {
        app.clamp_cursors();
        app.set_status("Redid change");
    } else {
        app.set_status("Nothing to redo");
    }
    Ok(())
}

fn cmd_search(args: &str, app: &mut App) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.product_index = 0;
    if app.navigate(Route::Business) == Route::Business {
        let count = app.visible_products().len();
        app.set_status(format!("{count} listing(s) match '{args}'"));
    }
    Ok(())
}

fn cmd_open(args: &str, app: &mut App) -> anyhow::Result<()> {
    match args.parse::<u32>() {
        Ok(id) => {
            app.navigate(Route::Product(id));
        }
        Err(_) => app.set_status("Usage: :open <listing id>"),
    }
    Ok(())
}

fn cmd_message(_args: &str, app: &mut App) -> anyhow::Result<()> {
    match app.open_product.and_then(crate::catalog::Product::find) {
        Some(product) if app.screen == Screen::Business => {
            tracing::info!(product = product.id, seller = product.seller, "seller messaged");
            app.set_status(format!(
                "Message sent! Your message to {} has been sent.",
                product.seller
            ));
        }
        _ => app.set_status("Open a listing first (Enter on Business, or :open <id>)"),
    }
    Ok(())
}

fn cmd_ask(args: &str, app: &mut App) -> anyhow::Result<()> {
    if app.navigate(Route::Chat) == Route::Chat {
        send_chat(app, args);
    }
    Ok(())
}

fn cmd_cancel_replies(_args: &str, app: &mut App) -> anyhow::Result<()> {
    request_cancel_replies(app);
    Ok(())
}

fn cmd_edit_profile(_args: &str, app: &mut App) -> anyhow::Result<()> {
    if app.profile_draft.is_none() {
        toggle_profile_edit(app);
    }
    Ok(())
}

fn cmd_name(args: &str, app: &mut App) -> anyhow::Result<()> {
    match app.profile_draft.as_mut() {
        Some(draft) => {
            draft.name = args.to_string();
            app.set_status(format!("Name: {args} (unsaved)"));
        }
        None => app.set_status("Open the profile editor first (e on Profile)"),
    }
    Ok(())
}

fn cmd_email(args: &str, app: &mut App) -> anyhow::Result<()> {
    match app.profile_draft.as_mut() {
        Some(draft) => {
            draft.email = args.to_string();
            app.set_status(format!("Email: {args} (unsaved)"));
        }
        None => app.set_status("Open the profile editor first (e on Profile)"),
    }
    Ok(())
}

fn cmd_save(_args: &str, app: &mut App) -> anyhow::Result<()> {
    let Some(draft) = app.profile_draft.clone() else {
        app.set_status("Nothing to save");
        return Ok(());
    };
    match draft.validate() {
        Ok((name, email)) => {
            if app.stores.auth.update_profile(&name, &email) {
                app.profile_draft = None;
                app.set_status("Profile updated! Your profile has been successfully updated.");
            } else {
                app.profile_draft = None;
                require_session(app);
            }
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_cancel(_args: &str, app: &mut App) -> anyhow::Result<()> {
    if app.profile_draft.take().is_some() {
        app.set_status("Edit cancelled");
    }
    Ok(())
}

/// Cycle the quick-contribution amount shown on the Goals screen.
pub(crate) fn cycle_preset(app: &mut App, forward: bool) {
    let len = CONTRIBUTION_PRESETS.len();
    app.preset_index = if forward {
        (app.preset_index + 1) % len
    } else if app.preset_index == 0 {
        len - 1
    } else {
        app.preset_index - 1
    };
    app.set_status(format!("Quick add: ${}", app.contribution_preset()));
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
