use anchor_lang::prelude::*;

/// Failure taxonomy for the three state transitions.
///
/// Two classes are deliberately carried by the runtime instead of this enum:
/// a duplicate vote or duplicate poll_id surfaces as the system's
/// "account already in use" error when the PDA `init` collides, and a
/// missing poll surfaces as `AccountNotInitialized`.
#[error_code]
pub enum VotingError {
    #[msg("Poll title is too long")]
    TitleTooLong,

    #[msg("Poll description is too long")]
    DescriptionTooLong,

    #[msg("Option text is too long")]
    OptionTooLong,

    #[msg("Too many options. Maximum is 10")]
    TooManyOptions,

    #[msg("Not enough options. Minimum is 2")]
    NotEnoughOptions,

    #[msg("Start time must precede end time, and end time must be in the future")]
    InvalidTimeRange,

    #[msg("poll_id must equal the current poll counter value")]
    InvalidPollId,

    #[msg("Invalid option index")]
    InvalidOptionIndex,

    #[msg("Poll is not open for voting (closed, expired, or not yet started)")]
    PollNotActive,

    #[msg("Only the poll creator can close the poll")]
    Unauthorized,

    #[msg("Poll is already closed")]
    AlreadyClosed,

    #[msg("Arithmetic overflow in vote counter")]
    ArithmeticOverflow,
}
