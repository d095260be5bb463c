use serde::{Deserialize, Serialize};

/// The closed set of UI languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lang {
    #[default]
    En,
    Bn,
}

impl Lang {
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Bn,
            Self::Bn => Self::En,
        }
    }

    /// Short indicator shown on the language switch.
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Bn => "বাং",
        }
    }
}

/// Looks up a translation key.
///
/// Unknown keys return `None`; callers skip them silently, so a missing
/// entry never produces fallback text or an error. The `chat_welcome` value
/// is the only one carrying inline markup (a line break); everything else is
/// plain text.
pub fn lookup(lang: Lang, key: &str) -> Option<&'static str> {
    match lang {
        Lang::En => lookup_en(key),
        Lang::Bn => lookup_bn(key),
    }
}

fn lookup_en(key: &str) -> Option<&'static str> {
    let text = match key {
        "nav_dashboard" => "Dashboard",
        "nav_transactions" => "Transactions",
        "dashboard_overview" => "Dashboard",
        "total_income" => "Total Income",
        "total_expense" => "Total Expense",
        "current_balance" => "Current Balance",
        "expense_breakdown" => "Expense Breakdown",
        "monthly_overview" => "Monthly Overview",
        "daily_activity" => "Daily Activity",
        "yearly_overview" => "Yearly Overview",
        "add_transaction" => "Add Transaction",
        "opt_expense" => "Expense",
        "opt_income" => "Income",
        "btn_add_transaction" => "Add Transaction",
        "recent_history" => "Recent History",
        "filter_all" => "All",
        "filter_income" => "Income",
        "filter_expense" => "Expense",
        "ai_assistant" => "AI Assistant",
        "chat_welcome" => "Hi! I can help you track expenses.\nTry: \"Spent 500 for lunch\"",
        "placeholder_amount" => "Amount (৳)",
        "placeholder_category" => "Category (e.g. Food, Salary)",
        "placeholder_note" => "Note (optional)",
        "placeholder_chat" => "Type here...",
        _ => return None,
    };
    Some(text)
}

fn lookup_bn(key: &str) -> Option<&'static str> {
    let text = match key {
        "nav_dashboard" => "ড্যাশবোর্ড",
        "nav_transactions" => "লেনদেন",
        "dashboard_overview" => "ড্যাশবোর্ড",
        "total_income" => "মোট আয়",
        "total_expense" => "মোট ব্যয়",
        "current_balance" => "বর্তমান ব্যালেন্স",
        "expense_breakdown" => "ব্যয়ের বিবরণ",
        "monthly_overview" => "মাসিক পর্যালোচনা",
        "daily_activity" => "দৈনিক কার্যকলাপ",
        "yearly_overview" => "বাৎসরিক পর্যালোচনা",
        "add_transaction" => "লেনদেন যোগ করুন",
        "opt_expense" => "ব্যয়",
        "opt_income" => "আয়",
        "btn_add_transaction" => "যোগ করুন",
        "recent_history" => "সাম্প্রতিক ইতিহাস",
        "filter_all" => "সব",
        "filter_income" => "আয়",
        "filter_expense" => "ব্যয়",
        "ai_assistant" => "এআই অ্যাসিস্ট্যান্ট",
        "chat_welcome" => {
            "আমি আপনাকে খরচ ট্র্যাক করতে সাহায্য করতে পারি।\nলিখুন: \"দুপুরের খাবারের জন্য ৫০০ টাকা খরচ\""
        }
        "placeholder_amount" => "পরিমাণ (৳)",
        "placeholder_category" => "ক্যাটাগরি (যেমন: খাবার, বেতন)",
        "placeholder_note" => "নোট (ঐচ্ছিক)",
        "placeholder_chat" => "এখানে লিখুন...",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[&str] = &[
        "nav_dashboard",
        "nav_transactions",
        "dashboard_overview",
        "total_income",
        "total_expense",
        "current_balance",
        "expense_breakdown",
        "monthly_overview",
        "daily_activity",
        "yearly_overview",
        "add_transaction",
        "opt_expense",
        "opt_income",
        "btn_add_transaction",
        "recent_history",
        "filter_all",
        "filter_income",
        "filter_expense",
        "ai_assistant",
        "chat_welcome",
        "placeholder_amount",
        "placeholder_category",
        "placeholder_note",
        "placeholder_chat",
    ];

    #[test]
    fn every_key_exists_in_both_languages() {
        for key in KEYS {
            assert!(lookup(Lang::En, key).is_some(), "missing en: {key}");
            assert!(lookup(Lang::Bn, key).is_some(), "missing bn: {key}");
        }
    }

    #[test]
    fn toggle_roundtrip_restores_original_text() {
        // en -> bn -> en must reproduce exactly the original string for
        // every tagged element.
        for key in KEYS {
            let original = lookup(Lang::En, key);
            let toggled = Lang::En.toggled();
            assert_eq!(toggled, Lang::Bn);
            let restored = lookup(toggled.toggled(), key);
            assert_eq!(original, restored);
        }
    }

    #[test]
    fn unknown_keys_are_skipped() {
        assert_eq!(lookup(Lang::En, "no_such_key"), None);
        assert_eq!(lookup(Lang::Bn, "no_such_key"), None);
    }
}
