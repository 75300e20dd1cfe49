use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::value_objects::DataField;

/// How often a habit is expected to be completed.
///
/// Serialized as its ordinal number (0, 1, 2) to match the wire contract
/// the game clients parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitFrequency {
  Daily,
  Weekly,
  Monthly,
}

impl HabitFrequency {
  /// Maps an ordinal back to a frequency, if it names one.
  pub fn from_ordinal(ordinal: u8) -> Option<Self> {
    match ordinal {
      0 => Some(Self::Daily),
      1 => Some(Self::Weekly),
      2 => Some(Self::Monthly),
      _ => None,
    }
  }

  /// The ordinal used on the wire.
  pub fn ordinal(self) -> u8 {
    self as u8
  }
}

impl Serialize for HabitFrequency {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(self.ordinal())
  }
}

impl<'de> Deserialize<'de> for HabitFrequency {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let ordinal = u8::deserialize(deserializer)?;
    Self::from_ordinal(ordinal)
      .ok_or_else(|| de::Error::custom(format!("unknown habit frequency ordinal {ordinal}")))
  }
}

/// A single tracked habit belonging to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
  /// Identifier unique within the owning account
  pub id: u32,
  /// Display text for the habit
  pub name: String,
  /// Expected completion cadence
  pub frequency: HabitFrequency,
  /// Whether the habit has been completed in the current period
  pub is_complete: bool,
}

impl Habit {
  /// Creates a new, not-yet-completed habit.
  pub fn new(id: u32, name: impl Into<String>, frequency: HabitFrequency) -> Self {
    Self {
      id,
      name: name.into(),
      frequency,
      is_complete: false,
    }
  }
}

/// The sudoku board an account is currently playing.
///
/// An opaque record of the puzzle state; generating and solving puzzles is
/// the sudoku subsystem's job, not this crate's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudokuPuzzle {
  /// Current cell values, row-major, 0 meaning empty
  pub numbers: [[u8; 9]; 9],
  /// Which cells were given and may not be overwritten
  pub number_locks: [[bool; 9]; 9],
}

impl SudokuPuzzle {
  pub fn new(numbers: [[u8; 9]; 9], number_locks: [[bool; 9]; 9]) -> Self {
    Self {
      numbers,
      number_locks,
    }
  }
}

/// A registered user account.
///
/// Created on successful registration and mutated by gameplay operations;
/// accounts are never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
  /// Unique key identifying the account
  pub username: String,
  /// Login password (plain text; hashing is out of scope for this core)
  pub password: String,
  /// Contact email supplied at registration
  pub email: String,
  /// Coin balance earned through gameplay
  pub coins: u32,
  /// The puzzle currently in progress, if any
  pub sudoku_puzzle: Option<SudokuPuzzle>,
  /// Habits the user is tracking
  pub habits: Vec<Habit>,
}

impl Account {
  /// Creates a fresh account with no coins, no puzzle, and no habits.
  pub fn new(username: String, password: String, email: String) -> Self {
    Self {
      username,
      password,
      email,
      coins: 0,
      sudoku_puzzle: None,
      habits: Vec::new(),
    }
  }

  /// Adds coins to the balance.
  pub fn award_coins(&mut self, amount: u32) {
    self.coins = self.coins.saturating_add(amount);
  }

  /// Replaces the puzzle in progress.
  pub fn assign_puzzle(&mut self, puzzle: SudokuPuzzle) {
    self.sudoku_puzzle = Some(puzzle);
  }

  /// Appends a habit to the tracked list.
  pub fn add_habit(&mut self, habit: Habit) {
    self.habits.push(habit);
  }

  /// Projects a single retrievable attribute into its JSON value,
  /// applying the documented defaults (coins 0, puzzle null, habits []).
  pub fn field_value(&self, field: DataField) -> Result<serde_json::Value, serde_json::Error> {
    let value = match field {
      DataField::Username => serde_json::Value::String(self.username.clone()),
      DataField::Email => serde_json::Value::String(self.email.clone()),
      DataField::Coins => serde_json::Value::from(self.coins),
      DataField::SudokuPuzzle => serde_json::to_value(&self.sudoku_puzzle)?,
      DataField::Habits => serde_json::to_value(&self.habits)?,
    };
    Ok(value)
  }
}
