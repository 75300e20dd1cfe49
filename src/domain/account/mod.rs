pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{Account, Habit, HabitFrequency, SudokuPuzzle};
pub use errors::AccountError;
pub use ports::AccountRepository;
pub use services::AccountService;
pub use value_objects::{DataField, Email};
