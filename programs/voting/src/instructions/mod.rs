pub mod close_poll;
pub mod initialize_poll;
pub mod vote;
