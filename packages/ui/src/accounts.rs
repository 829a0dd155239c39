use dioxus::prelude::*;

/// One row of the account summary.
#[derive(Clone, Debug, PartialEq)]
pub struct Account {
    pub title: &'static str,
    pub amount: &'static str,
    pub description: &'static str,
}

/// Demo accounts shown on the profile page.
pub const DEMO_ACCOUNTS: [Account; 3] = [
    Account {
        title: "Argent Bank Checking (x8349)",
        amount: "$2,082.79",
        description: "Available Balance",
    },
    Account {
        title: "Argent Bank Savings (x6712)",
        amount: "$10,928.42",
        description: "Available Balance",
    },
    Account {
        title: "Argent Bank Credit Card (x8349)",
        amount: "$184.30",
        description: "Current Balance",
    },
];

#[component]
pub fn AccountList() -> Element {
    rsx! {
        for account in DEMO_ACCOUNTS.iter() {
            section {
                key: "{account.title}",
                class: "account",
                div {
                    class: "account-content-wrapper",
                    h3 { class: "account-title", "{account.title}" }
                    p { class: "account-amount", "{account.amount}" }
                    p { class: "account-amount-description", "{account.description}" }
                }
                div {
                    class: "account-content-wrapper cta",
                    button { class: "transaction-button", "View transactions" }
                }
            }
        }
    }
}
