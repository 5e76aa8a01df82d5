use super::AppError;

/// The authentication gate in front of the ledger: a single boolean the
/// presentation layer flips before any ledger command is reachable. The
/// ledger itself performs no credential checks, and there is no real
/// credential storage behind this; any well-formed 4-digit PIN opens it.
#[derive(Debug, Default)]
pub struct AuthGate {
    authenticated: bool,
}

impl AuthGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Open the gate. The PIN must be exactly four ASCII digits.
    pub fn login(&mut self, pin: &str) -> Result<(), AppError> {
        let pin = pin.trim();
        if pin.len() != 4 || !pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::InvalidPin);
        }
        self.authenticated = true;
        Ok(())
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_starts_closed() {
        assert!(!AuthGate::new().is_authenticated());
    }

    #[test]
    fn test_login_accepts_four_digits() {
        let mut gate = AuthGate::new();
        gate.login("0412").unwrap();
        assert!(gate.is_authenticated());
    }

    #[test]
    fn test_login_rejects_bad_pins() {
        let mut gate = AuthGate::new();
        for pin in ["", "12", "12345", "12a4", "one2"] {
            assert!(matches!(gate.login(pin), Err(AppError::InvalidPin)), "{pin:?}");
            assert!(!gate.is_authenticated());
        }
    }

    #[test]
    fn test_logout_closes_gate() {
        let mut gate = AuthGate::new();
        gate.login("1234").unwrap();
        gate.logout();
        assert!(!gate.is_authenticated());
    }
}
