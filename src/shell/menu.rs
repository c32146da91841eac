use std::fmt;

/// Commands offered by the main menu, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Deposit,
    Withdraw,
    Show,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Create,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::Show,
        MenuChoice::Exit,
    ];

    pub fn from_number(number: i32) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::Create),
            2 => Some(MenuChoice::Deposit),
            3 => Some(MenuChoice::Withdraw),
            4 => Some(MenuChoice::Show),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    pub fn number(self) -> i32 {
        match self {
            MenuChoice::Create => 1,
            MenuChoice::Deposit => 2,
            MenuChoice::Withdraw => 3,
            MenuChoice::Show => 4,
            MenuChoice::Exit => 5,
        }
    }

    /// Whether the command can change the accounts store.
    pub fn is_mutating(self) -> bool {
        matches!(
            self,
            MenuChoice::Create | MenuChoice::Deposit | MenuChoice::Withdraw
        )
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuChoice::Create => "Create Account",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::Show => "Show Accounts",
            MenuChoice::Exit => "Exit",
        };
        write!(f, "{}. {}", self.number(), label)
    }
}
