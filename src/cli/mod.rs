use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::application::{AppError, AuthGate, LedgerService};
use crate::domain::{format_cents, parse_cents, Customer, EntryKind};
use crate::i18n::{text, Language, Phrase};
use crate::io::Exporter;
use crate::storage::{PreferenceStore, Preferences};

/// DeenBile - Merchant Debt Ledger
#[derive(Parser)]
#[command(name = "deenbile")]
#[command(about = "A customer debt ledger for small merchants, run as a terminal session")]
#[command(version)]
pub struct Cli {
    /// Preferences file (language and logo survive between sessions)
    #[arg(short, long, default_value = "deenbile-prefs.json")]
    pub preferences: String,

    /// Override the display language for this session (en|so)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Seed the session with sample customers
    #[arg(long)]
    pub demo: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let preference_store = PreferenceStore::new(&self.preferences);
        let mut preferences = preference_store.load()?;

        if let Some(lang) = &self.language {
            match Language::from_str(lang) {
                Some(lang) => preferences.language = lang,
                None => anyhow::bail!("Unsupported language: {lang} (expected en|so)"),
            }
        }

        let mut session = Session {
            service: LedgerService::new(),
            gate: AuthGate::new(),
            preference_store,
            preferences,
        };
        if self.demo {
            session.seed_demo()?;
        }

        let stdin = io::stdin();
        session.run(&mut stdin.lock().lines())
    }
}

/// One merchant sitting at the ledger. The ledger lives exactly as long as
/// the session; only the preferences outlive it.
struct Session {
    service: LedgerService,
    gate: AuthGate,
    preference_store: PreferenceStore,
    preferences: Preferences,
}

enum Outcome {
    Continue,
    Logout,
    Quit,
}

impl Session {
    fn run<L>(&mut self, lines: &mut L) -> Result<()>
    where
        L: Iterator<Item = io::Result<String>>,
    {
        loop {
            if !self.login(lines)? {
                return Ok(());
            }

            println!(
                "{}, {}. Type 'help' for commands.",
                self.t(Phrase::Welcome),
                self.t(Phrase::Merchant)
            );

            loop {
                print_prompt("deenbile> ")?;
                let Some(line) = next_line(lines)? else {
                    return Ok(());
                };
                match self.dispatch(line.trim(), lines)? {
                    Outcome::Continue => {}
                    Outcome::Logout => {
                        self.gate.logout();
                        break;
                    }
                    Outcome::Quit => return Ok(()),
                }
            }
        }
    }

    /// Prompt for a PIN until the gate opens. Returns false on end of input.
    fn login<L>(&mut self, lines: &mut L) -> Result<bool>
    where
        L: Iterator<Item = io::Result<String>>,
    {
        println!("{} - DeenBile", self.t(Phrase::Login));
        loop {
            print_prompt("PIN: ")?;
            let Some(pin) = next_line(lines)? else {
                return Ok(false);
            };
            match self.gate.login(&pin) {
                Ok(()) => return Ok(true),
                Err(err) => println!("{err}"),
            }
        }
    }

    fn dispatch<L>(&mut self, line: &str, lines: &mut L) -> Result<Outcome>
    where
        L: Iterator<Item = io::Result<String>>,
    {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Outcome::Continue);
        };
        let rest: Vec<&str> = words.collect();

        match command {
            "help" => self.cmd_help(),
            "list" => self.cmd_list(join(&rest)),
            "show" => self.cmd_show(join(&rest)),
            "add" => self.cmd_add(lines)?,
            "debt" => self.cmd_record(EntryKind::Debt, &rest),
            "pay" => self.cmd_record(EntryKind::Payment, &rest),
            "delete" => self.cmd_delete(join(&rest)),
            "report" => self.cmd_report(),
            "check" => self.cmd_check(),
            "export" => self.cmd_export(&rest)?,
            "lang" => self.cmd_lang(&rest)?,
            "logo" => self.cmd_logo(&rest)?,
            "logout" => return Ok(Outcome::Logout),
            "quit" | "exit" => return Ok(Outcome::Quit),
            other => println!("Unknown command '{other}'. Type 'help'."),
        }
        Ok(Outcome::Continue)
    }

    fn cmd_help(&self) {
        println!("Commands:");
        println!("  list [search]            {}", self.t(Phrase::Customers));
        println!("  show <customer>          {}", self.t(Phrase::TransactionHistory));
        println!("  add                      {}", self.t(Phrase::AddCustomer));
        println!("  debt <customer> <amount> [description]");
        println!("  pay <customer> <amount> [description]");
        println!("  delete <customer>");
        println!("  report                   {}", self.t(Phrase::Reports));
        println!("  check                    verify ledger integrity");
        println!("  export <entries|customers|json> <path>");
        println!("  lang <en|so>             set display language");
        println!("  logo <value|clear>       set shop logo reference");
        println!("  logout | quit");
    }

    fn cmd_list(&self, search: Option<String>) {
        let customers = self.service.list_customers(search.as_deref());
        if customers.is_empty() {
            println!("No customers found.");
            return;
        }
        for customer in &customers {
            println!(
                "  {:<3} {:<24} {:<14} {:>10}",
                customer.initials,
                customer.name,
                customer.phone,
                format_cents(customer.total_debt)
            );
        }
    }

    fn cmd_show(&self, term: Option<String>) {
        let Some(term) = term else {
            println!("Usage: show <customer>");
            return;
        };
        let Some(customer) = self.resolve(&term) else {
            return;
        };

        println!("{} ({})", customer.name, customer.phone);
        println!(
            "{}: {}",
            self.t(Phrase::Outstanding),
            format_cents(customer.total_debt)
        );
        println!("{}:", self.t(Phrase::TransactionHistory));
        if customer.entries.is_empty() {
            println!("  (none)");
        }
        for entry in &customer.entries {
            let sign = match entry.kind {
                EntryKind::Debt => "+",
                EntryKind::Payment => "-",
            };
            println!(
                "  {}  {}{:>10}  {}",
                entry.recorded_at.format("%Y-%m-%d %H:%M"),
                sign,
                format_cents(entry.amount),
                entry.description
            );
        }
    }

    /// Interactive add: prompts for name, phone and initial debt, mirroring
    /// the three-field form. A blank or non-numeric debt counts as zero.
    fn cmd_add<L>(&mut self, lines: &mut L) -> Result<()>
    where
        L: Iterator<Item = io::Result<String>>,
    {
        print_prompt(&format!("{}: ", self.t(Phrase::Name)))?;
        let Some(name) = next_line(lines)? else {
            return Ok(());
        };
        print_prompt(&format!("{}: ", self.t(Phrase::PhoneNumber)))?;
        let Some(phone) = next_line(lines)? else {
            return Ok(());
        };
        print_prompt(&format!("{}: ", self.t(Phrase::InitialDebt)))?;
        let Some(raw_debt) = next_line(lines)? else {
            return Ok(());
        };

        let seed_debt = parse_cents(&raw_debt).unwrap_or(0).max(0);
        let seed_description = self.t(Phrase::InitialDebt);
        match self
            .service
            .create_customer(&name, &phone, seed_debt, seed_description)
        {
            Ok(customer) => println!(
                "Added {} ({})  {}",
                customer.name,
                customer.initials,
                format_cents(customer.total_debt)
            ),
            Err(err) => println!("{err}"),
        }
        Ok(())
    }

    fn cmd_record(&mut self, kind: EntryKind, args: &[&str]) {
        let [term, raw_amount, description @ ..] = args else {
            println!("Usage: {} <customer> <amount> [description]", kind.as_str());
            return;
        };
        let amount = match parse_cents(raw_amount) {
            Ok(amount) => amount,
            Err(err) => {
                println!("{}", AppError::InvalidAmount(err.to_string()));
                return;
            }
        };
        let Some(customer) = self.resolve(term) else {
            return;
        };

        let description = if description.is_empty() {
            match kind {
                EntryKind::Debt => self.t(Phrase::Debt).to_string(),
                EntryKind::Payment => self.t(Phrase::Payment).to_string(),
            }
        } else {
            description.join(" ")
        };

        match self
            .service
            .record_entry(customer.id, kind, amount, &description)
        {
            Ok(updated) => println!(
                "{} -> {}",
                updated.name,
                format_cents(updated.total_debt)
            ),
            Err(err) => println!("{err}"),
        }
    }

    fn cmd_delete(&mut self, term: Option<String>) {
        let Some(term) = term else {
            println!("Usage: delete <customer>");
            return;
        };
        let Some(customer) = self.resolve(&term) else {
            return;
        };
        self.service.delete_customer(customer.id);
        println!("Deleted {}.", customer.name);
    }

    fn cmd_report(&self) {
        let overview = self.service.overview();
        println!(
            "{}: {}",
            self.t(Phrase::Outstanding),
            format_cents(overview.outstanding_debt)
        );
        println!("{}: {}", self.t(Phrase::Income), format_cents(overview.income));
        println!(
            "{}: {}",
            self.t(Phrase::ActiveCustomers),
            overview.active_customers
        );
        if let Some(top) = &overview.top_debtor {
            println!("Top: {} ({})", top.name, format_cents(top.total_debt));
        }

        println!("{}:", self.t(Phrase::RecentActivity));
        let entries = self.service.recent_entries(Some(10));
        if entries.is_empty() {
            println!("  (none)");
        }
        for entry in &entries {
            let sign = match entry.kind {
                EntryKind::Debt => "+",
                EntryKind::Payment => "-",
            };
            println!(
                "  {}  {:<24} {}{}",
                entry.recorded_at.format("%Y-%m-%d %H:%M"),
                entry.customer_name,
                sign,
                format_cents(entry.amount)
            );
        }
    }

    fn cmd_check(&self) {
        let report = self.service.check_integrity();
        if report.is_consistent() {
            println!(
                "Ledger consistent: {} customers, {} entries.",
                report.customer_count, report.entry_count
            );
            return;
        }
        for mismatch in &report.mismatched_balances {
            println!(
                "Balance mismatch for {}: stored {} derived {}",
                mismatch.customer_name,
                format_cents(mismatch.stored),
                format_cents(mismatch.derived)
            );
        }
        if report.duplicate_ids > 0 {
            println!("Duplicate ids: {}", report.duplicate_ids);
        }
        if report.foreign_entries > 0 {
            println!("Entries on the wrong customer: {}", report.foreign_entries);
        }
        if report.negative_amounts > 0 {
            println!("Negative amounts: {}", report.negative_amounts);
        }
    }

    fn cmd_export(&self, args: &[&str]) -> Result<()> {
        let [what, path] = args else {
            println!("Usage: export <entries|customers|json> <path>");
            return Ok(());
        };
        let exporter = Exporter::new(&self.service);
        let file = std::fs::File::create(path)?;
        match *what {
            "entries" => {
                let count = exporter.export_entries_csv(file)?;
                println!("Exported {count} entries to {path}");
            }
            "customers" => {
                let count = exporter.export_customers_csv(file)?;
                println!("Exported {count} customers to {path}");
            }
            "json" => {
                exporter.export_snapshot_json(file)?;
                println!("Exported ledger snapshot to {path}");
            }
            other => println!("Unknown export target '{other}'."),
        }
        Ok(())
    }

    fn cmd_lang(&mut self, args: &[&str]) -> Result<()> {
        let [lang] = args else {
            println!("Language: {}", self.preferences.language);
            return Ok(());
        };
        match Language::from_str(lang) {
            Some(lang) => {
                self.preferences.language = lang;
                self.preference_store.save(&self.preferences)?;
                println!("Language set to {lang}.");
            }
            None => println!("Unsupported language '{lang}' (expected en|so)."),
        }
        Ok(())
    }

    fn cmd_logo(&mut self, args: &[&str]) -> Result<()> {
        match args {
            [] => match &self.preferences.logo {
                Some(logo) => println!("Logo: {logo}"),
                None => println!("No logo set."),
            },
            ["clear"] => {
                self.preferences.logo = None;
                self.preference_store.save(&self.preferences)?;
                println!("Logo cleared.");
            }
            [value] => {
                self.preferences.logo = Some((*value).to_string());
                self.preference_store.save(&self.preferences)?;
                println!("Logo updated.");
            }
            _ => println!("Usage: logo <value|clear>"),
        }
        Ok(())
    }

    /// Find one customer by name/phone substring. Ambiguous terms list the
    /// candidates instead of guessing.
    fn resolve(&self, term: &str) -> Option<Customer> {
        let mut matches = self.service.list_customers(Some(term));
        match matches.len() {
            0 => {
                println!("No customer matches '{term}'.");
                None
            }
            1 => matches.pop(),
            _ => {
                println!("'{term}' is ambiguous:");
                for customer in &matches {
                    println!("  {} ({})", customer.name, customer.phone);
                }
                None
            }
        }
    }

    fn seed_demo(&mut self) -> Result<(), AppError> {
        let seed_description = self.t(Phrase::InitialDebt);
        for (name, phone, debt) in [
            ("Jaamac Diiriye", "0612001122", 7550),
            ("Fartuun Ali", "0615998877", 120000),
            ("Ahmed Mohamed", "0615123456", 45000),
        ] {
            self.service
                .create_customer(name, phone, debt, seed_description)?;
        }
        Ok(())
    }

    fn t(&self, phrase: Phrase) -> &'static str {
        text(self.preferences.language, phrase)
    }
}

fn join(words: &[&str]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn next_line<L>(lines: &mut L) -> Result<Option<String>>
where
    L: Iterator<Item = io::Result<String>>,
{
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

fn print_prompt(prompt: &str) -> Result<()> {
    print!("{prompt}");
    io::stdout().flush()?;
    Ok(())
}
