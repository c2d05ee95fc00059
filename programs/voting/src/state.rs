use anchor_lang::prelude::*;

use crate::{constants::*, error::VotingError};

// ============================================================================
// POLL - One account per published poll
// ============================================================================

#[account]
#[derive(InitSpace)]
pub struct Poll {
    /// Sequence number assigned from the poll counter; part of the PDA seeds
    pub poll_id: u64,

    /// Wallet that created the poll; the only one allowed to close it
    pub creator: Pubkey,

    #[max_len(MAX_TITLE_LENGTH)]
    pub title: String,

    #[max_len(MAX_DESCRIPTION_LENGTH)]
    pub description: String,

    /// Ordered option labels, immutable after creation
    #[max_len(MAX_OPTIONS, MAX_OPTION_LENGTH)]
    pub options: Vec<String>,

    /// One counter per option, same length as `options`
    #[max_len(MAX_OPTIONS)]
    pub votes: Vec<u64>,

    /// Voting window (unix timestamps), start_time < end_time
    pub start_time: i64,

    pub end_time: i64,

    /// Flips to false exactly once, via close_poll
    pub is_active: bool,

    /// Always equals the sum of `votes`
    pub total_votes: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

/// Where a poll sits in its lifecycle at a given instant.
///
/// Time alone moves Pending -> Open -> Expired; only the creator's
/// close_poll reaches Closed, which is terminal. Votes land only in Open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollStatus {
    Pending,
    Open,
    Expired,
    Closed,
}

impl Poll {
    pub fn pda(poll_id: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[POLL_SEED, &poll_id.to_le_bytes()], &crate::ID)
    }

    pub fn status(&self, now: i64) -> PollStatus {
        if !self.is_active {
            PollStatus::Closed
        } else if now < self.start_time {
            PollStatus::Pending
        } else if now > self.end_time {
            PollStatus::Expired
        } else {
            PollStatus::Open
        }
    }

    /// Tally one vote for `option_index` at time `now`.
    ///
    /// Closed, not-yet-started and expired polls all reject with
    /// `PollNotActive`; callers cannot tell which from this error alone.
    /// That collapse is intentional, not an oversight.
    pub fn record_vote(&mut self, option_index: u8, now: i64) -> Result<()> {
        require!(self.status(now) == PollStatus::Open, VotingError::PollNotActive);
        require!(
            (option_index as usize) < self.options.len(),
            VotingError::InvalidOptionIndex
        );

        let slot = &mut self.votes[option_index as usize];
        *slot = slot
            .checked_add(1)
            .ok_or(VotingError::ArithmeticOverflow)?;
        self.total_votes = self
            .total_votes
            .checked_add(1)
            .ok_or(VotingError::ArithmeticOverflow)?;

        Ok(())
    }

    /// One-way transition to Closed; rejects (not ignores) a second close.
    ///
    /// Named `mark_closed` rather than `close`: on an `Account<Poll>` a bare
    /// `.close()` resolves to `AccountsClose::close(sol_destination)` from
    /// the Anchor prelude, not to this method.
    pub fn mark_closed(&mut self) -> Result<()> {
        require!(self.is_active, VotingError::AlreadyClosed);
        self.is_active = false;
        Ok(())
    }
}

// ============================================================================
// VOTE RECORD - At most one per (poll, voter) pair
// ============================================================================

#[account]
#[derive(InitSpace)]
pub struct VoteRecord {
    /// Wallet that cast this vote
    pub voter: Pubkey,

    /// Poll voted on
    pub poll_id: u64,

    /// Chosen option, valid against the poll's options at write time
    pub option_index: u8,

    /// Unix timestamp of the vote
    pub timestamp: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl VoteRecord {
    /// The vote-uniqueness address. Creating the account here fails once
    /// the address is occupied, which is the whole double-vote defense.
    pub fn pda(poll: &Pubkey, voter: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[VOTE_RECORD_SEED, poll.as_ref(), voter.as_ref()],
            &crate::ID,
        )
    }
}

// ============================================================================
// POLL COUNTER - Singleton source of poll ids
// ============================================================================

#[account]
#[derive(InitSpace)]
pub struct PollCounter {
    /// Next poll_id to assign; every id ever assigned is < count
    pub count: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl PollCounter {
    pub fn pda() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[POLL_COUNTER_SEED], &crate::ID)
    }
}

// ============================================================================
// EVENTS - Emitted for off-chain indexing
// ============================================================================

#[event]
pub struct PollCreated {
    pub poll_id: u64,
    pub creator: Pubkey,
    pub option_count: u8,
    pub start_time: i64,
    pub end_time: i64,
}

#[event]
pub struct VoteCast {
    pub poll_id: u64,
    pub voter: Pubkey,
    pub option_index: u8,
    pub total_votes: u64,
    pub timestamp: i64,
}

#[event]
pub struct PollClosed {
    pub poll_id: u64,
    pub total_votes: u64,
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_000;
    const END: i64 = START + 86_400;

    fn language_poll() -> Poll {
        let options = vec![
            "Rust".to_string(),
            "TypeScript".to_string(),
            "Python".to_string(),
            "Go".to_string(),
        ];
        Poll {
            poll_id: 0,
            creator: Pubkey::new_unique(),
            title: "Favorite Programming Language".to_string(),
            description: "Vote for your favorite programming language".to_string(),
            votes: vec![0; options.len()],
            options,
            start_time: START,
            end_time: END,
            is_active: true,
            total_votes: 0,
            bump: 255,
        }
    }

    #[test]
    fn status_follows_the_clock() {
        let poll = language_poll();
        assert_eq!(poll.status(START - 1), PollStatus::Pending);
        assert_eq!(poll.status(START), PollStatus::Open);
        assert_eq!(poll.status(END), PollStatus::Open);
        assert_eq!(poll.status(END + 1), PollStatus::Expired);
    }

    #[test]
    fn closed_wins_over_any_window_position() {
        let mut poll = language_poll();
        poll.mark_closed().unwrap();
        for now in [START - 1, START, END, END + 1] {
            assert_eq!(poll.status(now), PollStatus::Closed);
        }
    }

    #[test]
    fn record_vote_keeps_the_tally_invariant() {
        let mut poll = language_poll();
        poll.record_vote(0, START).unwrap();
        assert_eq!(poll.votes, vec![1, 0, 0, 0]);
        assert_eq!(poll.total_votes, 1);

        poll.record_vote(2, START + 10).unwrap();
        poll.record_vote(0, END).unwrap();
        assert_eq!(poll.votes, vec![2, 0, 1, 0]);
        assert_eq!(poll.total_votes, poll.votes.iter().sum::<u64>());
    }

    #[test]
    fn votes_outside_the_window_never_mutate_state() {
        let mut poll = language_poll();
        for now in [START - 1, END + 1] {
            let err = poll.record_vote(0, now).unwrap_err();
            assert_eq!(err, VotingError::PollNotActive.into());
            assert_eq!(poll.votes, vec![0, 0, 0, 0]);
            assert_eq!(poll.total_votes, 0);
        }
    }

    #[test]
    fn out_of_range_option_is_rejected_regardless_of_state() {
        let mut poll = language_poll();
        let err = poll.record_vote(99, START).unwrap_err();
        assert_eq!(err, VotingError::InvalidOptionIndex.into());
        assert_eq!(poll.total_votes, 0);

        // Window check still comes first outside the window
        let err = poll.record_vote(99, END + 1).unwrap_err();
        assert_eq!(err, VotingError::PollNotActive.into());
    }

    #[test]
    fn close_is_one_way_and_rejects_a_second_close() {
        let mut poll = language_poll();
        poll.mark_closed().unwrap();
        assert!(!poll.is_active);

        let err = poll.record_vote(0, START).unwrap_err();
        assert_eq!(err, VotingError::PollNotActive.into());

        let err = poll.mark_closed().unwrap_err();
        assert_eq!(err, VotingError::AlreadyClosed.into());
        assert!(!poll.is_active);
    }

    #[test]
    fn sequential_poll_ids_derive_distinct_addresses() {
        let (a, _) = Poll::pda(0);
        let (b, _) = Poll::pda(1);
        assert_ne!(a, b);
        // Derivation is deterministic
        assert_eq!(Poll::pda(0), Poll::pda(0));
    }

    #[test]
    fn vote_record_address_is_unique_per_poll_voter_pair() {
        let (poll_a, _) = Poll::pda(0);
        let (poll_b, _) = Poll::pda(1);
        let voter_a = Pubkey::new_unique();
        let voter_b = Pubkey::new_unique();

        // Same pair always lands on the same address
        assert_eq!(
            VoteRecord::pda(&poll_a, &voter_a),
            VoteRecord::pda(&poll_a, &voter_a)
        );

        // Any change to the pair moves the address
        assert_ne!(
            VoteRecord::pda(&poll_a, &voter_a).0,
            VoteRecord::pda(&poll_a, &voter_b).0
        );
        assert_ne!(
            VoteRecord::pda(&poll_a, &voter_a).0,
            VoteRecord::pda(&poll_b, &voter_a).0
        );
    }

    #[test]
    fn namespaces_never_collide() {
        let (poll, _) = Poll::pda(0);
        let (counter, _) = PollCounter::pda();
        assert_ne!(poll, counter);
    }
}
