//! Seam between registry logic and the encrypted-computation service.
//!
//! Registry code only ever holds [`Handle`]s. Plaintexts live with the
//! service; the program can combine handles, hand out read access, and ask
//! the service's gateway to decrypt a result, which arrives later through
//! `fulfill_decryption`.

use anchor_lang::prelude::*;
use crate::errors::RegistryError;

pub mod coprocessor;
#[cfg(test)]
pub mod mock;

pub use coprocessor::Coprocessor;

pub const MAX_CIPHERTEXT_LEN: usize = 256;

/// Opaque reference to an encrypted value held by the service.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Handle(pub [u8; 32]);

impl Handle {
    pub const LEN: usize = 32;
}

/// Ciphertext submitted by a caller, encrypted client-side to the service key.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug)]
pub struct EncryptedInput {
    pub ciphertext: Vec<u8>,
}

impl EncryptedInput {
    pub fn validate(&self) -> Result<()> {
        require!(!self.ciphertext.is_empty(), RegistryError::EmptyCiphertext);
        require!(
            self.ciphertext.len() <= MAX_CIPHERTEXT_LEN,
            RegistryError::CiphertextTooLong
        );
        Ok(())
    }
}

pub trait FheBackend {
    /// Registers a caller ciphertext and returns the handle bound to `owner`.
    fn ingest(&mut self, input: &EncryptedInput, owner: &Pubkey) -> Result<Handle>;

    /// Encrypted equality; the returned handle holds a boolean.
    fn eq(&mut self, lhs: &Handle, rhs: &Handle) -> Result<Handle>;

    fn allow(&mut self, handle: &Handle, principal: &Pubkey) -> Result<()>;

    /// Queues decryption of a boolean handle. The gateway answers with
    /// `fulfill_decryption(request_id, ..)`.
    fn request_decryption(&mut self, handle: &Handle, request_id: u64) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_err;

    #[test]
    fn empty_ciphertext_is_rejected() {
        let input = EncryptedInput { ciphertext: vec![] };
        assert_err(input.validate(), RegistryError::EmptyCiphertext);
    }

    #[test]
    fn oversized_ciphertext_is_rejected() {
        let input = EncryptedInput { ciphertext: vec![7; MAX_CIPHERTEXT_LEN + 1] };
        assert_err(input.validate(), RegistryError::CiphertextTooLong);

        let input = EncryptedInput { ciphertext: vec![7; MAX_CIPHERTEXT_LEN] };
        assert!(input.validate().is_ok());
    }
}
