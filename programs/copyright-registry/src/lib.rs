use anchor_lang::prelude::*;

pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod fhe;
pub mod utils;

#[cfg(test)]
mod test_utils;

use instructions::*;
use fhe::{EncryptedInput, Handle};
use state::{AuthorStats, DisputeInfo, WinnerPolicy, WorkInfo};

declare_id!("EJ6fuARnZuxiFBEo4uK34fQoWH6Fxzmm84zmkf3XqAje");

#[program]
pub mod copyright_registry {
    use super::*;

    pub fn initialize_registry(ctx: Context<InitRegistry>, gateway: Pubkey, policy: WinnerPolicy) -> Result<()> {
        instructions::admin::init_registry::process_init_registry(ctx, gateway, policy)
    }

    pub fn register_author(ctx: Context<RegisterAuthor>, author_id: EncryptedInput) -> Result<()> {
        instructions::author::register_author::process_register_author(ctx, author_id)
    }

    pub fn register_work(
        ctx: Context<RegisterWork>,
        content_hash: EncryptedInput,
        title: String,
        category: String,
    ) -> Result<u64> {
        instructions::work::register_work::process_register_work(ctx, content_hash, title, category)
    }

    pub fn mark_work_as_verified(ctx: Context<MarkWorkAsVerified>, work_id: u64) -> Result<()> {
        instructions::admin::mark_work_verified::process_mark_work_as_verified(ctx, work_id)
    }

    pub fn file_dispute(
        ctx: Context<FileDispute>,
        work_id: u64,
        challenger_content_hash: EncryptedInput,
    ) -> Result<u32> {
        instructions::dispute::file_dispute::process_file_dispute(ctx, work_id, challenger_content_hash)
    }

    pub fn resolve_dispute(ctx: Context<ResolveDispute>, work_id: u64, dispute_index: u32) -> Result<u64> {
        instructions::dispute::resolve_dispute::process_resolve_dispute(ctx, work_id, dispute_index)
    }

    pub fn fulfill_decryption(
        ctx: Context<FulfillDecryption>,
        request_id: u64,
        result_handle: Handle,
        matched: bool,
    ) -> Result<()> {
        instructions::gateway::fulfill_decryption::process_fulfill_decryption(ctx, request_id, result_handle, matched)
    }

    pub fn update_gateway(ctx: Context<RegistryAdmin>, new_gateway: Pubkey) -> Result<()> {
        instructions::admin::update_gateway::process_update_gateway(ctx, new_gateway)
    }

    pub fn update_winner_policy(ctx: Context<RegistryAdmin>, policy: WinnerPolicy) -> Result<()> {
        instructions::admin::update_winner_policy::process_update_winner_policy(ctx, policy)
    }

    pub fn is_registered_author(ctx: Context<AuthorView>, address: Pubkey) -> Result<bool> {
        instructions::views::author_views::process_is_registered_author(ctx, address)
    }

    pub fn get_author_stats(ctx: Context<AuthorView>, address: Pubkey) -> Result<AuthorStats> {
        instructions::views::author_views::process_get_author_stats(ctx, address)
    }

    pub fn get_author_works(ctx: Context<AuthorView>, address: Pubkey) -> Result<Vec<u64>> {
        instructions::views::author_views::process_get_author_works(ctx, address)
    }

    pub fn get_work_info(ctx: Context<WorkView>, work_id: u64) -> Result<WorkInfo> {
        instructions::views::work_views::process_get_work_info(ctx, work_id)
    }

    pub fn get_dispute_info(ctx: Context<DisputeView>, work_id: u64, dispute_index: u32) -> Result<DisputeInfo> {
        instructions::views::dispute_views::process_get_dispute_info(ctx, work_id, dispute_index)
    }

    pub fn get_dispute_count(ctx: Context<WorkView>, work_id: u64) -> Result<u32> {
        instructions::views::work_views::process_get_dispute_count(ctx, work_id)
    }

    pub fn get_total_works(ctx: Context<RegistryView>) -> Result<u64> {
        instructions::views::work_views::process_get_total_works(ctx)
    }
}
