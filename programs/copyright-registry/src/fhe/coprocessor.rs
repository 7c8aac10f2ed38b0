use anchor_lang::prelude::*;
use sha2::{Digest, Sha256};
use crate::events::{DecryptionRequested, HandleAllowed};
use super::{EncryptedInput, FheBackend, Handle};

const INPUT_TAG: &[u8] = b"fhe-input";
const EQ_TAG: &[u8] = b"fhe-eq";

/// On-chain backend. Handles are SHA-256 digests of the operation tag and its
/// operands; the off-chain service replays the same derivation when it
/// evaluates the ciphertexts, and follows grants and decryption requests
/// through the emitted events.
pub struct Coprocessor {
    program_id: Pubkey,
}

impl Coprocessor {
    pub fn new(program_id: Pubkey) -> Self {
        Self { program_id }
    }

    fn derive(&self, tag: &[u8], operands: &[&[u8]]) -> Handle {
        let mut hasher = Sha256::new();
        hasher.update(tag);
        hasher.update(self.program_id.as_ref());
        for operand in operands {
            hasher.update((operand.len() as u32).to_le_bytes());
            hasher.update(operand);
        }
        Handle(hasher.finalize().into())
    }
}

impl FheBackend for Coprocessor {
    fn ingest(&mut self, input: &EncryptedInput, owner: &Pubkey) -> Result<Handle> {
        input.validate()?;
        Ok(self.derive(INPUT_TAG, &[owner.as_ref(), &input.ciphertext]))
    }

    fn eq(&mut self, lhs: &Handle, rhs: &Handle) -> Result<Handle> {
        Ok(self.derive(EQ_TAG, &[&lhs.0, &rhs.0]))
    }

    fn allow(&mut self, handle: &Handle, principal: &Pubkey) -> Result<()> {
        emit!(HandleAllowed {
            handle: *handle,
            principal: *principal,
        });
        Ok(())
    }

    fn request_decryption(&mut self, handle: &Handle, request_id: u64) -> Result<()> {
        emit!(DecryptionRequested {
            request_id,
            handle: *handle,
        });
        Ok(())
    }
}
