use anchor_lang::prelude::*;

use crate::{
    constants::*,
    contexts::InitializePoll,
    error::VotingError,
    state::PollCreated,
};

/// Bounds checks on the caller-supplied poll shape.
///
/// Pure so the precondition matrix is unit-testable without a runtime.
pub fn validate_poll_inputs(
    title: &str,
    description: &str,
    options: &[String],
    start_time: i64,
    end_time: i64,
    now: i64,
) -> Result<()> {
    require!(title.len() <= MAX_TITLE_LENGTH, VotingError::TitleTooLong);
    require!(
        description.len() <= MAX_DESCRIPTION_LENGTH,
        VotingError::DescriptionTooLong
    );
    require!(options.len() >= MIN_OPTIONS, VotingError::NotEnoughOptions);
    require!(options.len() <= MAX_OPTIONS, VotingError::TooManyOptions);
    for option in options {
        require!(option.len() <= MAX_OPTION_LENGTH, VotingError::OptionTooLong);
    }
    require!(start_time < end_time, VotingError::InvalidTimeRange);
    // A poll that would be born already expired is useless
    require!(end_time > now, VotingError::InvalidTimeRange);

    Ok(())
}

pub fn handler(
    ctx: Context<InitializePoll>,
    poll_id: u64,
    title: String,
    description: String,
    options: Vec<String>,
    start_time: i64,
    end_time: i64,
) -> Result<()> {
    let clock = Clock::get()?;

    validate_poll_inputs(
        &title,
        &description,
        &options,
        start_time,
        end_time,
        clock.unix_timestamp,
    )?;

    // The counter is the single source of ids. The caller echoes the id so
    // it can pre-derive the poll address, and must echo it correctly.
    let poll_counter = &mut ctx.accounts.poll_counter;
    require!(poll_id == poll_counter.count, VotingError::InvalidPollId);

    let poll = &mut ctx.accounts.poll;
    poll.poll_id = poll_id;
    poll.creator = ctx.accounts.creator.key();
    poll.title = title;
    poll.description = description;
    poll.votes = vec![0; options.len()];
    poll.options = options;
    poll.start_time = start_time;
    poll.end_time = end_time;
    poll.is_active = true;
    poll.total_votes = 0;
    poll.bump = ctx.bumps.poll;

    // count == 0 only on the transaction that init_if_needed zero-allocated
    // the counter, so the bump is written exactly once, at creation
    if poll_counter.count == 0 {
        poll_counter.bump = ctx.bumps.poll_counter;
    }
    poll_counter.count = poll_counter
        .count
        .checked_add(1)
        .ok_or(VotingError::ArithmeticOverflow)?;

    emit!(PollCreated {
        poll_id,
        creator: poll.creator,
        option_count: poll.options.len() as u8,
        start_time,
        end_time,
    });

    msg!("Poll {} created by {}", poll.poll_id, poll.creator);

    Ok(())
}
