use deenbile::application::LedgerService;
use deenbile::domain::EntryKind;

mod common;
use common::{find, sample_service};

#[test]
fn test_aggregate_debt_over_sample_book() {
    let service = sample_service();
    // 450 + 1200 + 75.50
    assert_eq!(service.aggregate_debt(), 172550);
}

#[test]
fn test_aggregate_debt_counts_credit_balances() {
    let mut service = sample_service();
    let jaamac = find(&service, "Jaamac");
    service
        .record_entry(jaamac.id, EntryKind::Payment, 10050, "Payment")
        .unwrap();

    // Jaamac is now at -25.00 credit, which offsets the total.
    assert_eq!(service.aggregate_debt(), 172550 - 7550 - 2500);
}

#[test]
fn test_overview_totals() {
    let mut service = sample_service();
    let ahmed = find(&service, "Ahmed");
    service
        .record_entry(ahmed.id, EntryKind::Payment, 12000, "Payment")
        .unwrap();
    service
        .record_entry(ahmed.id, EntryKind::Payment, 4500, "Payment")
        .unwrap();

    let overview = service.overview();
    assert_eq!(overview.outstanding_debt, 172550 - 16500);
    assert_eq!(overview.income, 16500);
    assert_eq!(overview.active_customers, 3);

    let top = overview.top_debtor.unwrap();
    assert_eq!(top.name, "Fartuun Ali");
    assert_eq!(top.total_debt, 120000);
}

#[test]
fn test_overview_on_empty_ledger() {
    let service = LedgerService::new();
    let overview = service.overview();
    assert_eq!(overview.outstanding_debt, 0);
    assert_eq!(overview.income, 0);
    assert_eq!(overview.active_customers, 0);
    assert!(overview.top_debtor.is_none());
}

#[test]
fn test_recent_entries_merges_all_customers() {
    let mut service = sample_service();
    let ahmed = find(&service, "Ahmed");
    let fartuun = find(&service, "Fartuun");
    service
        .record_entry(ahmed.id, EntryKind::Payment, 1000, "Payment")
        .unwrap();
    service
        .record_entry(fartuun.id, EntryKind::Debt, 2000, "Debt")
        .unwrap();

    let feed = service.recent_entries(None);
    // 3 seed entries + 2 recorded.
    assert_eq!(feed.len(), 5);
    assert!(feed.windows(2).all(|w| w[0].recorded_at >= w[1].recorded_at));
    // The most recent movement leads the feed.
    assert_eq!(feed[0].customer_id, fartuun.id);
    assert_eq!(feed[0].amount, 2000);
}

#[test]
fn test_recent_entries_limit() {
    let service = sample_service();
    assert_eq!(service.recent_entries(Some(2)).len(), 2);
    assert_eq!(service.recent_entries(Some(0)).len(), 0);
    assert_eq!(service.recent_entries(Some(100)).len(), 3);
}

#[test]
fn test_integrity_holds_through_a_session() {
    let mut service = sample_service();
    let ahmed = find(&service, "Ahmed");
    let fartuun = find(&service, "Fartuun");

    service
        .record_entry(ahmed.id, EntryKind::Payment, 45000, "Payment")
        .unwrap();
    service
        .record_entry(fartuun.id, EntryKind::Debt, 300, "Debt")
        .unwrap();
    service.delete_customer(ahmed.id);
    service
        .create_customer("Ayaan Warsame", "0615443322", 9900, "Initial debt")
        .unwrap();

    let report = service.check_integrity();
    assert!(report.is_consistent());
    assert_eq!(report.customer_count, 3);
    assert_eq!(report.entry_count, 4);
}
