use anchor_lang::prelude::*;

use crate::{contexts::Vote, state::VoteCast};

/// Tally one vote and pin the voter's uniqueness record.
///
/// By the time this body runs, the account constraints have already
/// resolved the two runtime-enforced preconditions: the poll exists at its
/// derived address, and the vote_record PDA was freshly allocated (a repeat
/// voter fails there with the system's account-in-use error). What is left
/// is the window, the option bounds and the tally, all atomic with the
/// allocation because they share one transaction.
pub fn handler(ctx: Context<Vote>, _poll_id: u64, option_index: u8) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let poll = &mut ctx.accounts.poll;
    poll.record_vote(option_index, now)?;

    let vote_record = &mut ctx.accounts.vote_record;
    vote_record.voter = ctx.accounts.voter.key();
    vote_record.poll_id = poll.poll_id;
    vote_record.option_index = option_index;
    vote_record.timestamp = now;
    vote_record.bump = ctx.bumps.vote_record;

    emit!(VoteCast {
        poll_id: poll.poll_id,
        voter: vote_record.voter,
        option_index,
        total_votes: poll.total_votes,
        timestamp: now,
    });

    msg!(
        "Vote recorded: poll {}, option {}, voter {}",
        poll.poll_id,
        option_index,
        vote_record.voter
    );

    Ok(())
}
