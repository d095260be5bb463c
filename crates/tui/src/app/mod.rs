use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyEvent};
use uuid::Uuid;

use api_types::{
    chat::{ChatExtraction, ChatReply},
    summary::Summary,
    transaction::{Transaction, TransactionKind},
};

use crate::{
    client::{Client, ClientError},
    config::AppConfig,
    error::{AppError, Result},
    i18n::Lang,
    local_state::{LocalState, ThemeMode},
    session, ui,
    ui::components::money::format_amount,
};

/// Column threshold for the responsive sidebar. Below it the toggle
/// shows/hides the sidebar entirely; at or above it the toggle collapses it
/// in place to an icon rail.
pub const SIDEBAR_BREAKPOINT: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Transactions,
    Add,
    Chat,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::Transactions,
        Section::Add,
        Section::Chat,
    ];

    /// Translation key of the sidebar label.
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Dashboard => "nav_dashboard",
            Self::Transactions => "nav_transactions",
            Self::Add => "add_transaction",
            Self::Chat => "ai_assistant",
        }
    }

    /// Single-glyph label for the collapsed icon rail.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dashboard => "◧",
            Self::Transactions => "≡",
            Self::Add => "+",
            Self::Chat => "✉",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Dashboard => Self::Transactions,
            Self::Transactions => Self::Add,
            Self::Add => Self::Chat,
            Self::Chat => Self::Dashboard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Income,
    Expense,
}

impl ListFilter {
    pub fn kind(self) -> Option<TransactionKind> {
        match self {
            Self::All => None,
            Self::Income => Some(TransactionKind::Income),
            Self::Expense => Some(TransactionKind::Expense),
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::All => "filter_all",
            Self::Income => "filter_income",
            Self::Expense => "filter_expense",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::All => Self::Income,
            Self::Income => Self::Expense,
            Self::Expense => Self::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddField {
    Kind,
    Amount,
    Category,
    Date,
    Note,
}

impl AddField {
    fn next(self) -> Self {
        match self {
            Self::Kind => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Date,
            Self::Date => Self::Note,
            Self::Note => Self::Kind,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Kind => Self::Note,
            Self::Amount => Self::Kind,
            Self::Category => Self::Amount,
            Self::Date => Self::Category,
            Self::Note => Self::Date,
        }
    }
}

#[derive(Debug)]
pub struct AddFormState {
    pub kind: TransactionKind,
    pub amount: String,
    pub category: String,
    pub date: String,
    pub note: String,
    pub focus: AddField,
    /// Blocking error shown until the next edit or submit. The form itself
    /// is preserved so the user can retry.
    pub message: Option<String>,
}

impl AddFormState {
    fn new() -> Self {
        Self {
            kind: TransactionKind::Expense,
            amount: String::new(),
            category: String::new(),
            date: Local::now().date_naive().to_string(),
            note: String::new(),
            focus: AddField::Kind,
            message: None,
        }
    }

    /// Clears the form after a successful submit; the date comes back as
    /// today's local date.
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn active_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            AddField::Kind => None,
            AddField::Amount => Some(&mut self.amount),
            AddField::Category => Some(&mut self.category),
            AddField::Date => Some(&mut self.date),
            AddField::Note => Some(&mut self.note),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Bot,
}

#[derive(Debug)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
}

/// Append-only transcript, in memory only; it does not survive a restart.
#[derive(Debug, Default)]
pub struct ChatState {
    pub transcript: Vec<ChatMessage>,
    pub input: String,
}

impl ChatState {
    fn push(&mut self, sender: ChatSender, text: String) {
        self.transcript.push(ChatMessage { sender, text });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

#[derive(Debug)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
}

/// Makes "last issued wins" hold for refreshes: every fetch cycle takes a
/// sequence number, and a completed cycle is applied only if nothing newer
/// has been applied in the meantime.
#[derive(Debug, Default)]
pub struct RefreshGate {
    issued: u64,
    applied: u64,
}

impl RefreshGate {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn try_apply(&mut self, seq: u64) -> bool {
        if seq > self.applied {
            self.applied = seq;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Default)]
pub struct TransactionsState {
    /// Server order is kept as-is; no client-side sort.
    pub items: Vec<Transaction>,
    pub selected: usize,
    pub error: Option<String>,
}

impl TransactionsState {
    fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.items.len() - 1);
    }

    fn select_prev(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = self.selected.saturating_sub(1);
    }

    fn selected_id(&self) -> Option<Uuid> {
        self.items.get(self.selected).map(|tx| tx.id)
    }
}

#[derive(Debug)]
pub struct AppState {
    pub section: Section,
    pub summary: Option<Summary>,
    pub summary_error: Option<String>,
    pub transactions: TransactionsState,
    pub filter: ListFilter,
    pub add_form: AddFormState,
    pub chat: ChatState,
    pub language: Lang,
    pub theme: ThemeMode,
    pub sidebar_collapsed: bool,
    /// Slide state used below [`SIDEBAR_BREAKPOINT`].
    pub sidebar_visible: bool,
    pub confirm_delete: Option<Uuid>,
    pub toast: Option<ToastState>,
    pub viewport_width: u16,
}

pub struct App {
    client: Client,
    state_path: String,
    gate: RefreshGate,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Client::new(&config.base_url, session::session_id())?;
        let prefs = LocalState::load(&config.state_path)?;

        let state = AppState {
            section: Section::Dashboard,
            summary: None,
            summary_error: None,
            transactions: TransactionsState::default(),
            filter: ListFilter::All,
            add_form: AddFormState::new(),
            chat: ChatState::default(),
            language: prefs.language,
            theme: prefs.theme,
            sidebar_collapsed: prefs.sidebar_collapsed,
            sidebar_visible: false,
            confirm_delete: None,
            toast: None,
            viewport_width: 0,
        };

        Ok(Self {
            client,
            state_path: config.state_path,
            gate: RefreshGate::default(),
            state,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        ui::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        self.refresh().await;

        while !self.should_quit {
            self.state.viewport_width = terminal.size()?.width;
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key).await?,
                    Event::Resize(width, _) => self.state.viewport_width = width,
                    _ => {}
                }
            }
        }

        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        use crate::ui::keymap::{AppAction, map_key};

        match map_key(key) {
            AppAction::Quit => self.should_quit = true,
            AppAction::Cancel => self.handle_cancel(),
            AppAction::NextField => {
                if self.state.section == Section::Add {
                    self.state.add_form.focus = self.state.add_form.focus.next();
                } else {
                    self.state.section = self.state.section.next();
                }
            }
            AppAction::Submit => self.handle_submit().await,
            AppAction::Backspace => self.handle_backspace(),
            AppAction::Up => match self.state.section {
                Section::Transactions => self.state.transactions.select_prev(),
                Section::Add => self.state.add_form.focus = self.state.add_form.focus.prev(),
                _ => {}
            },
            AppAction::Down => match self.state.section {
                Section::Transactions => self.state.transactions.select_next(),
                Section::Add => self.state.add_form.focus = self.state.add_form.focus.next(),
                _ => {}
            },
            AppAction::Left | AppAction::Right => {
                if self.state.section == Section::Add
                    && self.state.add_form.focus == AddField::Kind
                {
                    self.state.add_form.kind = match self.state.add_form.kind {
                        TransactionKind::Income => TransactionKind::Expense,
                        TransactionKind::Expense => TransactionKind::Income,
                    };
                }
            }
            AppAction::Delete => {
                if self.state.section == Section::Transactions {
                    self.request_delete();
                }
            }
            AppAction::ToggleLanguage => self.toggle_language(),
            AppAction::ToggleTheme => self.toggle_theme(),
            AppAction::ToggleSidebar => self.toggle_sidebar(),
            AppAction::Refresh => self.refresh().await,
            AppAction::Input(ch) => self.handle_input(ch).await,
            AppAction::None => {}
        }

        Ok(())
    }

    fn handle_cancel(&mut self) {
        if self.state.confirm_delete.take().is_some() {
            return;
        }
        if self.state.toast.take().is_some() {
            return;
        }
        if self.state.add_form.message.take().is_some() {
            return;
        }
        if self.state.viewport_width < SIDEBAR_BREAKPOINT && self.state.sidebar_visible {
            self.state.sidebar_visible = false;
        }
    }

    async fn handle_submit(&mut self) {
        if self.state.confirm_delete.is_some() {
            self.delete_confirmed().await;
            return;
        }

        match self.state.section {
            Section::Add => self.submit_add().await,
            Section::Chat => self.submit_chat().await,
            Section::Transactions => self.request_delete(),
            Section::Dashboard => {}
        }
    }

    fn handle_backspace(&mut self) {
        match self.state.section {
            Section::Add => {
                self.state.add_form.message = None;
                if let Some(field) = self.state.add_form.active_field_mut() {
                    field.pop();
                }
            }
            Section::Chat => {
                self.state.chat.input.pop();
            }
            _ => {}
        }
    }

    async fn handle_input(&mut self, ch: char) {
        // A pending confirmation captures y/n first.
        if self.state.confirm_delete.is_some() {
            match ch {
                'y' | 'Y' => self.delete_confirmed().await,
                'n' | 'N' | 'q' => self.state.confirm_delete = None,
                _ => {}
            }
            return;
        }

        match self.state.section {
            Section::Add => {
                self.state.add_form.message = None;
                if self.state.add_form.focus == AddField::Kind {
                    match ch {
                        'i' | 'I' => self.state.add_form.kind = TransactionKind::Income,
                        'e' | 'E' => self.state.add_form.kind = TransactionKind::Expense,
                        _ => {}
                    }
                } else if let Some(field) = self.state.add_form.active_field_mut() {
                    field.push(ch);
                }
            }
            Section::Chat => self.state.chat.input.push(ch),
            Section::Dashboard | Section::Transactions => self.handle_command_key(ch).await,
        }
    }

    async fn handle_command_key(&mut self, ch: char) {
        match ch {
            'q' => self.should_quit = true,
            'd' | 'D' => self.state.section = Section::Dashboard,
            't' | 'T' => self.state.section = Section::Transactions,
            'a' | 'A' => self.state.section = Section::Add,
            'c' | 'C' => self.state.section = Section::Chat,
            'r' | 'R' => self.refresh().await,
            'j' | 'J' => {
                if self.state.section == Section::Transactions {
                    self.state.transactions.select_next();
                }
            }
            'k' | 'K' => {
                if self.state.section == Section::Transactions {
                    self.state.transactions.select_prev();
                }
            }
            'f' | 'F' => {
                if self.state.section == Section::Transactions {
                    self.state.filter = self.state.filter.next();
                    self.load_transactions().await;
                }
            }
            'x' | 'X' => {
                if self.state.section == Section::Transactions {
                    self.request_delete();
                }
            }
            _ => {}
        }
    }

    /// Re-fetches summary and transactions in one cycle. Every mutation
    /// funnels through here; there is no incremental update.
    async fn refresh(&mut self) {
        let seq = self.gate.issue();
        let summary = self.client.summary().await;
        let transactions = self
            .client
            .transactions(self.state.filter.kind(), None, None)
            .await;

        if !self.gate.try_apply(seq) {
            return;
        }
        self.apply_summary(summary);
        self.apply_transactions(transactions);
    }

    /// Transactions only; the list filter does not touch the summary.
    async fn load_transactions(&mut self) {
        let seq = self.gate.issue();
        let transactions = self
            .client
            .transactions(self.state.filter.kind(), None, None)
            .await;

        if !self.gate.try_apply(seq) {
            return;
        }
        self.apply_transactions(transactions);
    }

    fn apply_summary(&mut self, result: std::result::Result<Summary, ClientError>) {
        match result {
            Ok(summary) => {
                self.state.summary = Some(summary);
                self.state.summary_error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "summary fetch failed");
                self.state.summary_error = Some(err.to_string());
            }
        }
    }

    fn apply_transactions(
        &mut self,
        result: std::result::Result<Vec<Transaction>, ClientError>,
    ) {
        match result {
            Ok(items) => {
                self.state.transactions.selected = self
                    .state
                    .transactions
                    .selected
                    .min(items.len().saturating_sub(1));
                self.state.transactions.items = items;
                self.state.transactions.error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, "transactions fetch failed");
                self.state.transactions.error = Some(err.to_string());
            }
        }
    }

    async fn submit_add(&mut self) {
        let amount = match parse_amount(&self.state.add_form.amount) {
            Ok(amount) => amount,
            Err(message) => {
                self.state.add_form.message = Some(message.to_string());
                return;
            }
        };
        let date = match parse_date(&self.state.add_form.date) {
            Ok(date) => date,
            Err(message) => {
                self.state.add_form.message = Some(message.to_string());
                return;
            }
        };

        let note = self.state.add_form.note.trim();
        let transaction = Transaction {
            id: Uuid::new_v4(),
            kind: self.state.add_form.kind,
            amount,
            category: self.state.add_form.category.trim().to_string(),
            date,
            note: (!note.is_empty()).then(|| note.to_string()),
        };

        match self.client.create_transaction(&transaction).await {
            Ok(()) => {
                self.state.add_form.reset();
                self.refresh().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "add transaction failed");
                // Generic alert, form preserved for retry.
                self.state.add_form.message = Some("Error adding transaction".to_string());
            }
        }
    }

    async fn submit_chat(&mut self) {
        let text = self.state.chat.input.trim().to_string();
        if text.is_empty() {
            return;
        }
        self.state.chat.push(ChatSender::User, text.clone());
        self.state.chat.input.clear();

        let result = self.client.chat(&text).await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, "chat add failed");
        }

        let followup = chat_followup(&result);
        self.state.chat.push(ChatSender::Bot, followup.reply);
        if followup.refresh {
            self.refresh().await;
        }
    }

    fn request_delete(&mut self) {
        self.state.confirm_delete = self.state.transactions.selected_id();
    }

    /// Deletes the confirmed id and applies the follow-up policy.
    async fn delete_confirmed(&mut self) {
        let Some(id) = self.state.confirm_delete.take() else {
            return;
        };

        let result = self.client.delete_transaction(id).await;
        if let Err(err) = &result {
            tracing::warn!(error = %err, %id, "delete failed");
        }

        let followup = delete_followup(&result);
        if let Some(toast) = followup.toast {
            self.state.toast = Some(toast);
        }
        if followup.refresh {
            self.refresh().await;
        }
    }

    fn toggle_language(&mut self) {
        self.state.language = self.state.language.toggled();
        self.persist_prefs();
    }

    fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggled();
        self.persist_prefs();
    }

    fn toggle_sidebar(&mut self) {
        if self.state.viewport_width < SIDEBAR_BREAKPOINT {
            // Narrow layout: slide in/out, not persisted.
            self.state.sidebar_visible = !self.state.sidebar_visible;
        } else {
            self.state.sidebar_collapsed = !self.state.sidebar_collapsed;
            self.persist_prefs();
        }
    }

    fn persist_prefs(&self) {
        let prefs = LocalState {
            language: self.state.language,
            theme: self.state.theme,
            sidebar_collapsed: self.state.sidebar_collapsed,
        };
        if let Err(err) = prefs.save(&self.state_path) {
            tracing::warn!(error = %err, "failed to persist UI preferences");
        }
    }
}

/// Client-side amount policy: must parse as a finite number strictly
/// greater than zero. Negative amounts never reach the server.
fn parse_amount(raw: &str) -> std::result::Result<f64, &'static str> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| "Enter a valid amount.")?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be greater than zero.");
    }
    Ok(amount)
}

fn parse_date(raw: &str) -> std::result::Result<chrono::NaiveDate, &'static str> {
    chrono::NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| "Enter a valid date (YYYY-MM-DD).")
}

/// What happens after a delete attempt. A failure surfaces as an error
/// toast; the refresh cycle runs regardless of the outcome, so the list
/// always reconverges with the server.
struct DeleteFollowup {
    toast: Option<ToastState>,
    refresh: bool,
}

fn delete_followup(result: &std::result::Result<(), ClientError>) -> DeleteFollowup {
    DeleteFollowup {
        toast: result.as_ref().err().map(|err| ToastState {
            message: format!("Delete failed: {err}"),
            level: ToastLevel::Error,
        }),
        refresh: true,
    }
}

/// What happens after a chat send: a success appends a confirmation and
/// re-fetches everything (the server has already saved the transaction); a
/// failure appends the error and leaves the current data alone.
struct ChatFollowup {
    reply: String,
    refresh: bool,
}

fn chat_followup(result: &std::result::Result<ChatReply, ClientError>) -> ChatFollowup {
    match result {
        Ok(reply) => ChatFollowup {
            reply: chat_confirmation(&reply.data),
            refresh: true,
        },
        Err(err) => ChatFollowup {
            reply: format!("❌ Error: {err}"),
            refresh: false,
        },
    }
}

/// Transcript confirmation for a successful chat add.
fn chat_confirmation(extraction: &ChatExtraction) -> String {
    format!(
        "✅ Added: {} of ৳{} for {}",
        extraction.kind.as_str(),
        format_amount(extraction.amount),
        extraction.category
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_gate_applies_in_issue_order() {
        let mut gate = RefreshGate::default();
        let first = gate.issue();
        let second = gate.issue();

        assert!(gate.try_apply(second));
        // The earlier cycle finished late; its result is discarded.
        assert!(!gate.try_apply(first));
    }

    #[test]
    fn refresh_gate_applies_sequential_cycles() {
        let mut gate = RefreshGate::default();
        let first = gate.issue();
        assert!(gate.try_apply(first));
        let second = gate.issue();
        assert!(gate.try_apply(second));
    }

    #[test]
    fn negative_amounts_are_rejected_client_side() {
        assert!(parse_amount("-10").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("nan").is_err());
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn positive_amounts_parse() {
        assert_eq!(parse_amount("500"), Ok(500.0));
        assert_eq!(parse_amount(" 12.50 "), Ok(12.5));
    }

    #[test]
    fn date_field_must_be_iso() {
        assert!(parse_date("2025-08-25").is_ok());
        assert!(parse_date("25/08/2025").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn chat_confirmation_format() {
        let extraction = ChatExtraction {
            id: None,
            kind: TransactionKind::Expense,
            amount: 500.0,
            category: "Food".to_string(),
            date: None,
            note: None,
        };
        assert_eq!(
            chat_confirmation(&extraction),
            "✅ Added: expense of ৳500 for Food"
        );
    }

    #[test]
    fn failed_delete_toasts_and_still_refreshes() {
        let followup = delete_followup(&Err(ClientError::Status(404)));

        assert!(followup.refresh);
        let toast = followup.toast.unwrap();
        assert_eq!(toast.level, ToastLevel::Error);
        assert!(toast.message.starts_with("Delete failed"));
    }

    #[test]
    fn successful_delete_refreshes_without_a_toast() {
        let followup = delete_followup(&Ok(()));

        assert!(followup.refresh);
        assert!(followup.toast.is_none());
    }

    #[test]
    fn chat_success_confirms_and_refreshes() {
        let reply = ChatReply {
            message: None,
            data: ChatExtraction {
                id: None,
                kind: TransactionKind::Expense,
                amount: 500.0,
                category: "Food".to_string(),
                date: None,
                note: None,
            },
        };

        let followup = chat_followup(&Ok(reply));
        assert!(followup.refresh);
        assert_eq!(followup.reply, "✅ Added: expense of ৳500 for Food");
    }

    #[test]
    fn chat_failure_reports_without_refreshing() {
        let rejected = ClientError::Rejected("could not understand that".to_string());

        let followup = chat_followup(&Err(rejected));
        assert!(!followup.refresh);
        assert_eq!(followup.reply, "❌ Error: could not understand that");
    }

    #[test]
    fn filter_cycles_through_all_income_expense() {
        assert_eq!(ListFilter::All.next(), ListFilter::Income);
        assert_eq!(ListFilter::Income.next(), ListFilter::Expense);
        assert_eq!(ListFilter::Expense.next(), ListFilter::All);
        assert_eq!(ListFilter::Income.kind(), Some(TransactionKind::Income));
        assert_eq!(ListFilter::All.kind(), None);
    }

    #[test]
    fn form_reset_restores_today() {
        let mut form = AddFormState::new();
        form.amount.push_str("42");
        form.category.push_str("Food");
        form.date = "2020-01-01".to_string();
        form.reset();

        assert!(form.amount.is_empty());
        assert!(form.category.is_empty());
        assert_eq!(form.date, Local::now().date_naive().to_string());
    }

    #[test]
    fn selection_survives_a_shrinking_list() {
        let mut state = TransactionsState {
            items: Vec::new(),
            selected: 5,
            error: None,
        };
        state.select_next();
        state.select_prev();
        assert_eq!(state.selected, 5); // no-ops on an empty list
        assert_eq!(state.selected_id(), None);
    }
}
