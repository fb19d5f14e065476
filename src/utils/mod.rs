pub mod poll_distribution;
