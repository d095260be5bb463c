pub mod card;
pub mod charts;
pub mod money;
pub mod sidebar;
pub mod toast;
