//! CLI subcommand implementations

pub(crate) mod completion;
pub(crate) mod platforms;
pub(crate) mod resolve;
pub(crate) mod rules;
