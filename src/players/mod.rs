// Players module - Contains all move chooser implementations
//
// Each chooser decides moves for a Player in its own way

pub mod human;
pub mod random;
pub mod scripted;

// Re-export chooser implementations for ease of use
pub use self::human::HumanChooser;
pub use self::random::RandomChooser;
pub use self::scripted::ScriptedChooser;
