use anchor_lang::prelude::*;
use crate::state::{AuthorProfile, Registry, Work, AUTHOR_SEED, REGISTRY_SEED, WORK_SEED};
use crate::fhe::{Coprocessor, EncryptedInput, FheBackend};
use crate::events::WorkRegistered;
use crate::errors::RegistryError;
use crate::utils::{grow_account, load_profile, store};

#[derive(Accounts)]
pub struct RegisterWork<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: An address without a profile reads as unregistered. The
    /// account grows by one work id per registration.
    #[account(
        mut,
        seeds = [AUTHOR_SEED, author.key().as_ref()],
        bump
    )]
    pub author_profile: UncheckedAccount<'info>,

    #[account(
        init,
        seeds = [WORK_SEED, registry.next_work_id().to_le_bytes().as_ref()],
        bump,
        payer = author,
        space = Work::LEN
    )]
    pub work: Account<'info, Work>,

    #[account(mut)]
    pub author: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn apply_register_work<F: FheBackend>(
    fhe: &mut F,
    registry_key: &Pubkey,
    registry: &mut Registry,
    profile: &mut AuthorProfile,
    work: &mut Work,
    content_hash: &EncryptedInput,
    title: String,
    category: String,
    now: i64,
    bump: u8,
) -> Result<u64> {
    // Guards (nothing is written until all of them pass)
    profile.ensure_registered()?;
    Work::validate_metadata(&title, &category)?;
    content_hash.validate()?;

    let work_id = registry.work_counter.checked_add(1).ok_or(RegistryError::MathOverflow)?;
    let work_count = profile.work_count.checked_add(1).ok_or(RegistryError::MathOverflow)?;
    let registrant = profile.authority;

    let handle = fhe.ingest(content_hash, &registrant)?;
    fhe.allow(&handle, registry_key)?;
    fhe.allow(&handle, &registrant)?;

    work.work_id = work_id;
    work.registrant = registrant;
    work.encrypted_content_hash = handle;
    work.title = title;
    work.category = category;
    work.timestamp = now;
    work.verified = false;
    work.dispute_count = 0;
    work.bump = bump;

    profile.work_ids.push(work_id);
    profile.work_count = work_count;
    registry.work_counter = work_id;

    Ok(work_id)
}

pub fn process_register_work(
    ctx: Context<RegisterWork>,
    content_hash: EncryptedInput,
    title: String,
    category: String,
) -> Result<u64> {
    let mut profile = load_profile(&ctx.accounts.author_profile, ctx.program_id)?;

    let clock = Clock::get()?;
    let registry_key = ctx.accounts.registry.key();
    let mut fhe = Coprocessor::new(*ctx.program_id);

    let work_id = apply_register_work(
        &mut fhe,
        &registry_key,
        &mut ctx.accounts.registry,
        &mut profile,
        &mut ctx.accounts.work,
        &content_hash,
        title,
        category,
        clock.unix_timestamp,
        ctx.bumps.work,
    )?;

    let profile_info = ctx.accounts.author_profile.to_account_info();
    grow_account(
        &ctx.accounts.author.to_account_info(),
        &profile_info,
        &ctx.accounts.system_program.to_account_info(),
        AuthorProfile::space(profile.work_ids.len()),
    )?;
    store(&profile_info, &profile)?;

    let work = &ctx.accounts.work;
    emit!(WorkRegistered {
        work_id,
        registrant: work.registrant,
        title: work.title.clone(),
        timestamp: work.timestamp,
    });

    Ok(work_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fhe::mock::{encrypt_u64, MockFhe};
    use crate::test_utils::assert_err;

    fn registered(author: Pubkey) -> AuthorProfile {
        AuthorProfile { authority: author, registered: true, ..Default::default() }
    }

    #[test]
    fn assigns_sequential_ids() {
        let mut fhe = MockFhe::default();
        let registry_key = Pubkey::new_unique();
        let author = Pubkey::new_unique();
        let mut registry = Registry::default();
        let mut profile = registered(author);

        let mut first = Work::default();
        let id = apply_register_work(
            &mut fhe, &registry_key, &mut registry, &mut profile, &mut first,
            &encrypt_u64(42), "Sunrise".into(), "Music".into(), 10, 1,
        )
        .unwrap();
        assert_eq!(id, 1);

        let mut second = Work::default();
        let id = apply_register_work(
            &mut fhe, &registry_key, &mut registry, &mut profile, &mut second,
            &encrypt_u64(43), "Sunset".into(), "Music".into(), 11, 1,
        )
        .unwrap();
        assert_eq!(id, 2);

        assert_eq!(registry.work_counter, 2);
        assert_eq!(profile.work_count, 2);
        assert_eq!(profile.work_ids, vec![1, 2]);
        assert_eq!(first.registrant, author);
        assert_eq!(first.title, "Sunrise");
        assert!(!first.verified);
        assert!(fhe.is_allowed(&first.encrypted_content_hash, &registry_key));
        assert!(fhe.is_allowed(&first.encrypted_content_hash, &author));
    }

    #[test]
    fn rejects_unregistered_author_without_side_effects() {
        let mut fhe = MockFhe::default();
        let mut registry = Registry::default();
        let mut profile = AuthorProfile::default();
        let mut work = Work::default();

        assert_err(
            apply_register_work(
                &mut fhe, &Pubkey::new_unique(), &mut registry, &mut profile, &mut work,
                &encrypt_u64(42), "Sunrise".into(), "Music".into(), 10, 1,
            ),
            RegistryError::AuthorNotRegistered,
        );
        assert_eq!(registry.work_counter, 0);
        assert!(profile.work_ids.is_empty());
        assert_eq!(work.work_id, 0);
    }

    #[test]
    fn rejects_missing_metadata() {
        let mut fhe = MockFhe::default();
        let author = Pubkey::new_unique();
        let mut registry = Registry::default();
        let mut profile = registered(author);
        let mut work = Work::default();

        assert_err(
            apply_register_work(
                &mut fhe, &Pubkey::new_unique(), &mut registry, &mut profile, &mut work,
                &encrypt_u64(42), String::new(), "Music".into(), 10, 1,
            ),
            RegistryError::TitleRequired,
        );
        assert_err(
            apply_register_work(
                &mut fhe, &Pubkey::new_unique(), &mut registry, &mut profile, &mut work,
                &encrypt_u64(42), "Sunrise".into(), String::new(), 10, 1,
            ),
            RegistryError::CategoryRequired,
        );
        assert_eq!(registry.work_counter, 0);
        assert_eq!(profile.work_count, 0);
    }

    #[test]
    fn work_list_is_unbounded() {
        let mut fhe = MockFhe::default();
        let registry_key = Pubkey::new_unique();
        let author = Pubkey::new_unique();
        let mut registry = Registry::default();
        let mut profile = registered(author);

        for expected in 1..=100u64 {
            let mut work = Work::default();
            let id = apply_register_work(
                &mut fhe, &registry_key, &mut registry, &mut profile, &mut work,
                &encrypt_u64(expected), "Sunrise".into(), "Music".into(), 10, 1,
            )
            .unwrap();
            assert_eq!(id, expected);
        }

        assert_eq!(profile.work_count, 100);
        assert_eq!(profile.work_ids, (1..=100).collect::<Vec<u64>>());

        let mut data = Vec::new();
        profile.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), AuthorProfile::space(100));
    }
}
