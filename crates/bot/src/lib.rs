pub mod command;
pub mod di;
pub mod handler;
pub mod poller;
pub mod service;
pub mod state;

#[cfg(test)]
mod testing;
