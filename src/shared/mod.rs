//! Shared runtime plumbing used by the command-line front end

pub mod logger;
