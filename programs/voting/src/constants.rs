// ============================================================================
// SEEDS FOR PDA DERIVATION
// ============================================================================

pub const POLL_SEED: &[u8] = b"poll";

pub const VOTE_RECORD_SEED: &[u8] = b"vote_record";

pub const POLL_COUNTER_SEED: &[u8] = b"poll_counter";

// ============================================================================
// POLL BOUNDS
// ============================================================================

/// Maximum byte length of a poll title
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum byte length of a poll description
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Maximum byte length of a single option
pub const MAX_OPTION_LENGTH: usize = 50;

/// A poll needs at least two options to be a choice
pub const MIN_OPTIONS: usize = 2;

pub const MAX_OPTIONS: usize = 10;
