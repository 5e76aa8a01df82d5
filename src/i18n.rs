use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// Somali
    So,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::So => "so",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en" => Some(Language::En),
            "so" => Some(Language::So),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The closed set of user-facing phrases. The ledger core never picks a
/// language; presentation code resolves a phrase and passes the resulting
/// text in (e.g. as an entry description).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    Dashboard,
    Customers,
    Reports,
    AddCustomer,
    Name,
    PhoneNumber,
    InitialDebt,
    Debt,
    Payment,
    Outstanding,
    Income,
    ActiveCustomers,
    RecentActivity,
    Search,
    Welcome,
    Merchant,
    TransactionHistory,
    Login,
    Logout,
}

pub const ALL_PHRASES: [Phrase; 19] = [
    Phrase::Dashboard,
    Phrase::Customers,
    Phrase::Reports,
    Phrase::AddCustomer,
    Phrase::Name,
    Phrase::PhoneNumber,
    Phrase::InitialDebt,
    Phrase::Debt,
    Phrase::Payment,
    Phrase::Outstanding,
    Phrase::Income,
    Phrase::ActiveCustomers,
    Phrase::RecentActivity,
    Phrase::Search,
    Phrase::Welcome,
    Phrase::Merchant,
    Phrase::TransactionHistory,
    Phrase::Login,
    Phrase::Logout,
];

/// Resolve a phrase in the given language.
pub fn text(lang: Language, phrase: Phrase) -> &'static str {
    match lang {
        Language::En => match phrase {
            Phrase::Dashboard => "Dashboard",
            Phrase::Customers => "Customers",
            Phrase::Reports => "Reports",
            Phrase::AddCustomer => "Add Customer",
            Phrase::Name => "Full Name",
            Phrase::PhoneNumber => "Phone Number",
            Phrase::InitialDebt => "Initial debt",
            Phrase::Debt => "Debt",
            Phrase::Payment => "Payment",
            Phrase::Outstanding => "Outstanding debt",
            Phrase::Income => "Income",
            Phrase::ActiveCustomers => "Active customers",
            Phrase::RecentActivity => "Recent activity",
            Phrase::Search => "Search customers",
            Phrase::Welcome => "Welcome back",
            Phrase::Merchant => "Merchant",
            Phrase::TransactionHistory => "Transaction history",
            Phrase::Login => "Log In",
            Phrase::Logout => "Log Out",
        },
        Language::So => match phrase {
            Phrase::Dashboard => "Guud ahaan",
            Phrase::Customers => "Macaamiisha",
            Phrase::Reports => "Warbixinada",
            Phrase::AddCustomer => "Ku dar Macmiil",
            Phrase::Name => "Magaca Buuxa",
            Phrase::PhoneNumber => "Taleefanka",
            Phrase::InitialDebt => "Deyn bilow ah",
            Phrase::Debt => "Deyn",
            Phrase::Payment => "Bixin",
            Phrase::Outstanding => "Deynta maqan",
            Phrase::Income => "Lacagta soo gashay",
            Phrase::ActiveCustomers => "Macaamiisha firfircoon",
            Phrase::RecentActivity => "Dhaqdhaqaaqii ugu dambeeyay",
            Phrase::Search => "Raadi macmiil",
            Phrase::Welcome => "Ku soo dhawaaw",
            Phrase::Merchant => "Ganacsade",
            Phrase::TransactionHistory => "Taariikhda dhaqdhaqaaqa",
            Phrase::Login => "Soo Gal",
            Phrase::Logout => "Ka Bax",
        },
    }
}
