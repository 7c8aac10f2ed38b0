use std::collections::HashMap;

use anchor_lang::prelude::*;
use crate::errors::RegistryError;
use super::{EncryptedInput, FheBackend, Handle};

#[derive(Clone, Debug, PartialEq)]
enum Plain {
    Bytes(Vec<u8>),
    Bool(bool),
}

/// In-memory service: ciphertexts are taken as plaintext so tests can
/// evaluate comparisons and play the gateway.
#[derive(Default)]
pub struct MockFhe {
    issued: u64,
    plaintexts: HashMap<Handle, Plain>,
    grants: Vec<(Handle, Pubkey)>,
    requests: Vec<(u64, Handle)>,
}

pub fn encrypt_u64(value: u64) -> EncryptedInput {
    EncryptedInput { ciphertext: value.to_le_bytes().to_vec() }
}

impl MockFhe {
    fn issue(&mut self, plain: Plain) -> Handle {
        self.issued += 1;
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&self.issued.to_le_bytes());
        let handle = Handle(bytes);
        self.plaintexts.insert(handle, plain);
        handle
    }

    pub fn is_allowed(&self, handle: &Handle, principal: &Pubkey) -> bool {
        self.grants.iter().any(|(h, p)| h == handle && p == principal)
    }

    pub fn decrypt_bool(&self, handle: &Handle) -> Option<bool> {
        match self.plaintexts.get(handle) {
            Some(Plain::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    /// Drains queued decryption requests in submission order.
    pub fn take_requests(&mut self) -> Vec<(u64, Handle)> {
        std::mem::take(&mut self.requests)
    }
}

impl FheBackend for MockFhe {
    fn ingest(&mut self, input: &EncryptedInput, _owner: &Pubkey) -> Result<Handle> {
        input.validate()?;
        Ok(self.issue(Plain::Bytes(input.ciphertext.clone())))
    }

    fn eq(&mut self, lhs: &Handle, rhs: &Handle) -> Result<Handle> {
        let left = self.plaintexts.get(lhs).ok_or(RegistryError::HandleMismatch)?;
        let right = self.plaintexts.get(rhs).ok_or(RegistryError::HandleMismatch)?;
        let equal = left == right;
        Ok(self.issue(Plain::Bool(equal)))
    }

    fn allow(&mut self, handle: &Handle, principal: &Pubkey) -> Result<()> {
        self.grants.push((*handle, *principal));
        Ok(())
    }

    fn request_decryption(&mut self, handle: &Handle, request_id: u64) -> Result<()> {
        self.requests.push((request_id, *handle));
        Ok(())
    }
}
