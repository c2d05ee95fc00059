use anchor_lang::prelude::*;

use crate::{contexts::ClosePoll, state::PollClosed};

/// Flip the poll to Closed. The creator-only check lives on the accounts
/// struct, so it fires before the AlreadyClosed check here.
pub fn handler(ctx: Context<ClosePoll>, _poll_id: u64) -> Result<()> {
    let clock = Clock::get()?;

    let poll = &mut ctx.accounts.poll;
    poll.mark_closed()?;

    emit!(PollClosed {
        poll_id: poll.poll_id,
        total_votes: poll.total_votes,
        timestamp: clock.unix_timestamp,
    });

    msg!("Poll {} closed by creator", poll.poll_id);

    Ok(())
}
