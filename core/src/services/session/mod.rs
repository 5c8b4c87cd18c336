//! Session orchestration service.

mod service;

#[cfg(test)]
mod tests;

pub use service::SessionService;
