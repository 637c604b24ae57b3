use crate::cli::output;

pub const MENU_TITLE: &str = "EXPENSE TRACKER";
pub const CHOICE_PROMPT: &str = "Choice: ";

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuItem {
    AddExpense,
    ListExpenses,
    DeleteExpense,
    UpdateExpense,
    MonthlyTotal,
    FilterByCategory,
    Exit,
}

impl MainMenuItem {
    pub const ALL: [MainMenuItem; 7] = [
        MainMenuItem::AddExpense,
        MainMenuItem::ListExpenses,
        MainMenuItem::DeleteExpense,
        MainMenuItem::UpdateExpense,
        MainMenuItem::MonthlyTotal,
        MainMenuItem::FilterByCategory,
        MainMenuItem::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MainMenuItem::AddExpense => "Add Expense",
            MainMenuItem::ListExpenses => "View Expenses",
            MainMenuItem::DeleteExpense => "Delete Expense",
            MainMenuItem::UpdateExpense => "Update Expense",
            MainMenuItem::MonthlyTotal => "Monthly Total",
            MainMenuItem::FilterByCategory => "View Expenses by Category",
            MainMenuItem::Exit => "Exit",
        }
    }

    /// 1-based number shown next to the entry.
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|item| *item == self)
            .map_or(0, |idx| idx + 1)
    }

    pub fn from_choice(choice: &str) -> Option<Self> {
        let number: usize = choice.trim().parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }
}

pub fn render() {
    output::section(MENU_TITLE);
    for item in MainMenuItem::ALL {
        output::line(format!("{} - {}", item.number(), item.label()));
    }
}
