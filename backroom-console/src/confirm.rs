//! Delete confirmation capability
//!
//! Destructive screen actions are gated behind [`Confirm`] so the decision
//! comes from the embedding shell (a dialog, a TUI prompt) and tests can
//! script it.

/// A yes/no decision supplied by the caller.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Confirms everything. For tests and non-interactive tooling.
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Declines everything.
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_confirmers() {
        let yes = |_: &str| true;
        assert!(yes.confirm("Delete this client?"));

        let only_clients = |prompt: &str| prompt.contains("client");
        assert!(only_clients.confirm("Delete this client?"));
        assert!(!only_clients.confirm("Delete this order?"));
    }

    #[test]
    fn fixed_confirmers() {
        assert!(AlwaysConfirm.confirm("x"));
        assert!(!NeverConfirm.confirm("x"));
    }
}
