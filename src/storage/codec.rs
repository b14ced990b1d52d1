use crate::domain::Ledger;

use super::StoreError;

/// Serialize a ledger into the bytes written to the store.
pub fn encode(ledger: &Ledger) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(ledger).map_err(StoreError::Encode)
}

/// Decode stored bytes. A zero-length blob is the empty ledger.
pub fn decode(bytes: &[u8]) -> Result<Ledger, StoreError> {
    if bytes.is_empty() {
        return Ok(Ledger::new());
    }
    serde_json::from_slice(bytes).map_err(StoreError::Decode)
}
