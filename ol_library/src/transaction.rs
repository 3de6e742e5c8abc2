use guid_create::GUID;

/// Identifier attached to every log line produced while handling one command
pub type TransactionId = String;

pub fn gen_tid() -> TransactionId {
    GUID::rand().to_string().to_lowercase().replace('-', "")
}

lazy_static::lazy_static! {
  pub static ref TEST_TID: TransactionId = "TestTest".to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tids_are_compact_and_unique() {
        let a = gen_tid();
        let b = gen_tid();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(!a.contains('-'));
        assert_eq!(a, a.to_lowercase());
    }
}
