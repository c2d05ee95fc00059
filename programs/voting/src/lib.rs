pub mod constants;
pub mod contexts;
pub mod error;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use contexts::*;
pub use error::*;
pub use state::*;

declare_id!("FpG37KtdxDC6GyZUGcdWcdm1RP1vr8mvR79ChdWs3LTU");

/// On-chain polls with one vote per wallet.
///
/// A creator publishes a poll with 2-10 options and a voting window; any
/// wallet may vote exactly once while the poll is open. Uniqueness is not a
/// lookup: each vote allocates a PDA derived from (poll, voter), so a
/// second vote collides at allocation and the whole transaction fails.
///
/// Architecture:
/// - Poll PDAs keyed by a sequence id from a singleton counter
/// - VoteRecord PDAs as the allocation-collision uniqueness primitive
/// - Lifecycle: Pending -> Open -> Expired by the clock, Closed by the creator
#[program]
pub mod voting {
    use super::*;

    /// Create a poll. `poll_id` must echo the current counter value so the
    /// client can pre-derive the poll address.
    pub fn initialize_poll(
        ctx: Context<InitializePoll>,
        poll_id: u64,
        title: String,
        description: String,
        options: Vec<String>,
        start_time: i64,
        end_time: i64,
    ) -> Result<()> {
        instructions::initialize_poll::handler(
            ctx,
            poll_id,
            title,
            description,
            options,
            start_time,
            end_time,
        )
    }

    /// Cast a vote on an open poll (one per wallet, enforced by PDA init)
    pub fn vote(ctx: Context<Vote>, poll_id: u64, option_index: u8) -> Result<()> {
        instructions::vote::handler(ctx, poll_id, option_index)
    }

    /// Close a poll early (creator only, one-way)
    pub fn close_poll(ctx: Context<ClosePoll>, poll_id: u64) -> Result<()> {
        instructions::close_poll::handler(ctx, poll_id)
    }
}
