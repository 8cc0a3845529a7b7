mod context;
pub mod generate;
pub mod history;
pub mod roster;
pub mod version;
