// Interface adapters: wire protocol, HTTP clients and the command line surface.

pub mod cli;
pub mod clients;
pub mod protocol;
pub mod state;
