// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use deenbile::application::LedgerService;
use deenbile::domain::Customer;

/// The three customers the sample shop opens with.
pub fn sample_service() -> LedgerService {
    let mut service = LedgerService::new();
    service
        .create_customer("Ahmed Mohamed", "0615123456", 45000, "Initial debt")
        .unwrap();
    service
        .create_customer("Fartuun Ali", "0615998877", 120000, "Initial debt")
        .unwrap();
    service
        .create_customer("Jaamac Diiriye", "0612001122", 7550, "Initial debt")
        .unwrap();
    service
}

/// Look up a sample customer by (unique) name fragment.
pub fn find(service: &LedgerService, fragment: &str) -> Customer {
    let mut matches = service.list_customers(Some(fragment));
    assert_eq!(matches.len(), 1, "expected one customer matching {fragment}");
    matches.pop().unwrap()
}
