//! Loading and persisting program accounts that may not exist yet.
//!
//! Works, disputes and profiles are addressed by ids the caller supplies, so
//! a missing account is an ordinary input error rather than an account
//! layer failure. These helpers decode such accounts inside the handler,
//! after the caller's authority has been checked.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};
use crate::errors::RegistryError;
use crate::state::{AuthorProfile, Dispute, Registry, Work};

/// Decodes `info` as `T`. Accounts not owned by this program, or without
/// data, read as `None`.
pub fn load_optional<T: AccountDeserialize>(info: &AccountInfo, program_id: &Pubkey) -> Result<Option<T>> {
    if info.owner != program_id || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map(Some)
}

/// Writes `account` (discriminator included) into `info`.
pub fn store<T: AccountSerialize>(info: &AccountInfo, account: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    account.try_serialize(&mut writer)
}

/// An address that never registered has no profile account; it reads as an
/// empty, unregistered profile.
pub fn load_profile(info: &AccountInfo, program_id: &Pubkey) -> Result<AuthorProfile> {
    Ok(load_optional(info, program_id)?.unwrap_or_default())
}

/// Profile of `author`, which must sit at the author's PDA.
pub fn load_author_profile(info: &AccountInfo, program_id: &Pubkey, author: &Pubkey) -> Result<AuthorProfile> {
    let (expected, _) = AuthorProfile::address(author, program_id);
    require_keys_eq!(*info.key, expected, anchor_lang::error::ErrorCode::ConstraintSeeds);
    load_profile(info, program_id)
}

pub fn load_work(info: &AccountInfo, program_id: &Pubkey, registry: &Registry, work_id: u64) -> Result<Work> {
    registry.check_work_id(work_id)?;
    let work: Work = load_optional(info, program_id)?.ok_or(RegistryError::InvalidWorkId)?;
    Ok(work)
}

pub fn load_dispute(info: &AccountInfo, program_id: &Pubkey, work: &Work, dispute_index: u32) -> Result<Dispute> {
    work.check_dispute_index(dispute_index)?;
    let dispute: Dispute = load_optional(info, program_id)?.ok_or(RegistryError::InvalidDisputeIndex)?;
    Ok(dispute)
}

/// Allocates `space` bytes at the PDA `target`, owned by this program and
/// rent-exempt, paid by `payer`. A target that already holds lamports is
/// topped up, allocated and assigned instead of created.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system: &AccountInfo<'info>,
    program_id: &Pubkey,
    space: usize,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let rent = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                &[signer_seeds],
            ),
            rent,
            space as u64,
            program_id,
        );
    }

    let top_up = rent.saturating_sub(current);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            top_up,
        )?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            system.clone(),
            Allocate { account_to_allocate: target.clone() },
            &[signer_seeds],
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            system.clone(),
            Assign { account_to_assign: target.clone() },
            &[signer_seeds],
        ),
        program_id,
    )
}

/// Grows a program account to `space` bytes, moving the extra rent from
/// `payer`. Never shrinks.
pub fn grow_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system: &AccountInfo<'info>,
    space: usize,
) -> Result<()> {
    if target.data_len() >= space {
        return Ok(());
    }

    let rent = Rent::get()?.minimum_balance(space);
    let top_up = rent.saturating_sub(target.lamports());
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            top_up,
        )?;
    }
    target.resize(space)?;
    Ok(())
}
