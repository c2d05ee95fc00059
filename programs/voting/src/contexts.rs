use anchor_lang::prelude::*;

use crate::{constants::*, error::VotingError, state::*};

/// Create a new poll and advance the shared counter
#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct InitializePoll<'info> {
    /// Pays for the new accounts and becomes the poll's creator
    #[account(mut)]
    pub creator: Signer<'info>,

    /// Poll PDA keyed by poll_id; init fails if the id was already used
    #[account(
        init,
        payer = creator,
        space = 8 + Poll::INIT_SPACE,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: Account<'info, Poll>,

    /// Singleton id counter, created lazily on the first poll
    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + PollCounter::INIT_SPACE,
        seeds = [POLL_COUNTER_SEED],
        bump
    )]
    pub poll_counter: Account<'info, PollCounter>,

    pub system_program: Program<'info, System>,
}

/// Cast a vote on an open poll
#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct Vote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump = poll.bump
    )]
    pub poll: Account<'info, Poll>,

    /// Vote-uniqueness PDA. `init` at the (poll, voter)-derived address is
    /// the sole double-vote defense: a second vote by the same wallet
    /// collides here and the whole transaction fails before any tallying.
    #[account(
        init,
        payer = voter,
        space = 8 + VoteRecord::INIT_SPACE,
        seeds = [VOTE_RECORD_SEED, poll.key().as_ref(), voter.key().as_ref()],
        bump
    )]
    pub vote_record: Account<'info, VoteRecord>,

    pub system_program: Program<'info, System>,
}

/// Close a poll (creator only)
#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct ClosePoll<'info> {
    pub creator: Signer<'info>,

    /// Signer must match the recorded creator; this constraint runs before
    /// the handler, so a non-creator is rejected even on a closed poll
    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump = poll.bump,
        constraint = poll.creator == creator.key() @ VotingError::Unauthorized
    )]
    pub poll: Account<'info, Poll>,
}
