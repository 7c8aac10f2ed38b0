use anchor_lang::prelude::*;
use crate::state::{DisputeInfo, Registry, DISPUTE_SEED, REGISTRY_SEED, WORK_SEED};
use crate::utils::{load_dispute, load_work};

#[derive(Accounts)]
#[instruction(work_id: u64, dispute_index: u32)]
pub struct DisputeView<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: Decoded by `load_work`; nothing at this address means an unknown id.
    #[account(
        seeds = [WORK_SEED, work_id.to_le_bytes().as_ref()],
        bump
    )]
    pub work: UncheckedAccount<'info>,

    /// CHECK: Decoded by `load_dispute`; nothing at this address means an unknown index.
    #[account(
        seeds = [DISPUTE_SEED, work_id.to_le_bytes().as_ref(), dispute_index.to_le_bytes().as_ref()],
        bump
    )]
    pub dispute: UncheckedAccount<'info>,
}

pub fn process_get_dispute_info(
    ctx: Context<DisputeView>,
    work_id: u64,
    dispute_index: u32,
) -> Result<DisputeInfo> {
    let accounts = &ctx.accounts;
    let work = load_work(&accounts.work, ctx.program_id, &accounts.registry, work_id)?;
    let dispute = load_dispute(&accounts.dispute, ctx.program_id, &work, dispute_index)?;
    Ok(dispute.info())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RegistryError;
    use crate::state::{Dispute, Work};
    use crate::test_utils::{assert_err, registry_account, run, work_address, TestAccount};

    fn args(work_id: u64, dispute_index: u32) -> Vec<u8> {
        let mut data = work_id.to_le_bytes().to_vec();
        data.extend_from_slice(&dispute_index.to_le_bytes());
        data
    }

    fn get_info(accounts: [&mut TestAccount; 3], work_id: u64, dispute_index: u32) -> Result<DisputeInfo> {
        let [registry, work, dispute] = accounts;
        let infos = [registry.info(), work.info(), dispute.info()];
        run::<DisputeView, _>(&infos, &args(work_id, dispute_index), |ctx| {
            process_get_dispute_info(ctx, work_id, dispute_index)
        })
    }

    #[test]
    fn reads_a_filed_dispute() {
        let challenger = Pubkey::new_unique();
        let stored = Dispute { work_id: 1, challenger, timestamp: 50, pending_request: Some(0), ..Default::default() };
        let mut registry = registry_account(Registry { work_counter: 1, ..Default::default() });
        let mut work = TestAccount::program(work_address(1), &Work { work_id: 1, dispute_count: 1, ..Default::default() });
        let mut dispute = TestAccount::program(Dispute::address(1, 0, &crate::ID).0, &stored);

        let info = get_info([&mut registry, &mut work, &mut dispute], 1, 0).unwrap();
        assert_eq!(info.challenger, challenger);
        assert_eq!(info.timestamp, 50);
        assert!(info.pending);
        assert!(!info.resolved);
        assert_eq!(info.winner, None);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut registry = registry_account(Registry { work_counter: 1, ..Default::default() });
        let mut work = TestAccount::program(work_address(1), &Work { work_id: 1, dispute_count: 1, ..Default::default() });
        let mut missing_dispute = TestAccount::empty(Dispute::address(1, 5, &crate::ID).0);
        assert_err(
            get_info([&mut registry, &mut work, &mut missing_dispute], 1, 5),
            RegistryError::InvalidDisputeIndex,
        );

        let mut missing_work = TestAccount::empty(work_address(2));
        let mut dispute = TestAccount::empty(Dispute::address(2, 0, &crate::ID).0);
        assert_err(
            get_info([&mut registry, &mut missing_work, &mut dispute], 2, 0),
            RegistryError::InvalidWorkId,
        );
    }
}
