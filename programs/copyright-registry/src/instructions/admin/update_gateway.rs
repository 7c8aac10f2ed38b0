use anchor_lang::prelude::*;
use crate::events::GatewayUpdated;
use super::RegistryAdmin;

pub fn process_update_gateway(ctx: Context<RegistryAdmin>, new_gateway: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.assert_owner(&ctx.accounts.owner.key())?;

    let old_gateway = registry.gateway;
    registry.gateway = new_gateway;

    msg!("Decryption gateway rotated to {}", new_gateway);
    emit!(GatewayUpdated {
        old_gateway,
        new_gateway,
    });

    Ok(())
}
