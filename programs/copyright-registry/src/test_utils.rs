use std::collections::BTreeSet;
use std::fmt::Debug;

use anchor_lang::prelude::*;
use anchor_lang::Bumps;
use crate::state::{Registry, REGISTRY_SEED, WORK_SEED};

pub fn assert_err<T, E>(result: Result<T>, expected: E)
where
    E: Into<anchor_lang::error::Error> + Debug,
{
    match result {
        Ok(_) => panic!("expected {expected:?}, got Ok"),
        Err(err) => assert_eq!(err, expected.into()),
    }
}

/// Backing storage for one account handed to an instruction.
pub struct TestAccount {
    pub key: Pubkey,
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
    pub is_signer: bool,
    pub is_writable: bool,
    pub executable: bool,
}

impl TestAccount {
    /// A program-owned account holding `account`.
    pub fn program<T: AccountSerialize>(key: Pubkey, account: &T) -> Self {
        let mut data = Vec::new();
        account.try_serialize(&mut data).unwrap();
        Self {
            key,
            owner: crate::ID,
            lamports: 1_000_000,
            data,
            is_signer: false,
            is_writable: true,
            executable: false,
        }
    }

    /// Nothing at `key` yet.
    pub fn empty(key: Pubkey) -> Self {
        Self {
            key,
            owner: System::id(),
            lamports: 0,
            data: Vec::new(),
            is_signer: false,
            is_writable: true,
            executable: false,
        }
    }

    pub fn signer(key: Pubkey) -> Self {
        Self {
            is_signer: true,
            lamports: 1_000_000_000,
            ..Self::empty(key)
        }
    }

    pub fn system_program() -> Self {
        Self {
            is_writable: false,
            executable: true,
            ..Self::empty(System::id())
        }
    }

    pub fn info(&mut self) -> AccountInfo<'_> {
        AccountInfo::new(
            &self.key,
            self.is_signer,
            self.is_writable,
            &mut self.lamports,
            &mut self.data,
            &self.owner,
            self.executable,
            0,
        )
    }

    pub fn decode<T: AccountDeserialize>(&self) -> T {
        T::try_deserialize(&mut &self.data[..]).unwrap()
    }
}

/// The registry singleton at its PDA, with the bump filled in.
pub fn registry_account(registry: Registry) -> TestAccount {
    let (key, bump) = Pubkey::find_program_address(&[REGISTRY_SEED], &crate::ID);
    TestAccount::program(key, &Registry { bump, ..registry })
}

pub fn work_address(work_id: u64) -> Pubkey {
    Pubkey::find_program_address(&[WORK_SEED, work_id.to_le_bytes().as_ref()], &crate::ID).0
}

/// Runs an instruction the way the entrypoint does: validates `accounts`
/// into `T`, calls `handler`, then persists the typed accounts.
/// `ix_data` is the borsh-encoded argument list, without discriminator.
pub fn run<'info, T, R>(
    accounts: &'info [AccountInfo<'info>],
    ix_data: &[u8],
    handler: impl FnOnce(Context<'_, '_, '_, 'info, T>) -> Result<R>,
) -> Result<R>
where
    T: Accounts<'info, T::Bumps> + AccountsExit<'info> + Bumps,
    T::Bumps: Default,
{
    let mut remaining = accounts;
    let mut bumps = T::Bumps::default();
    let mut reallocs = BTreeSet::new();
    let mut validated = T::try_accounts(&crate::ID, &mut remaining, ix_data, &mut bumps, &mut reallocs)?;
    let result = handler(Context::new(&crate::ID, &mut validated, remaining, bumps))?;
    validated.exit(&crate::ID)?;
    Ok(result)
}
