pub mod outcome;

pub use outcome::LoginOutcome;
