pub mod docintel;
pub mod mapping;
pub mod poller;
