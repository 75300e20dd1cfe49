/// The supported request kinds.
///
/// Each operation carries a fixed, ordered required-field contract; the
/// order is part of the contract because missing-field error messages
/// list fields in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  RegisterUser,
  Login,
  RetrieveData,
}

impl Operation {
  pub const ALL: [Operation; 3] = [
    Operation::RegisterUser,
    Operation::Login,
    Operation::RetrieveData,
  ];

  /// Maps a `request_type` value to an operation, if it names one.
  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "register_user" => Some(Self::RegisterUser),
      "login" => Some(Self::Login),
      "retrieve_data" => Some(Self::RetrieveData),
      _ => None,
    }
  }

  /// The wire name of this operation.
  pub const fn name(self) -> &'static str {
    match self {
      Self::RegisterUser => "register_user",
      Self::Login => "login",
      Self::RetrieveData => "retrieve_data",
    }
  }

  /// The fields a request of this kind must carry, in declared order.
  pub const fn required_fields(self) -> &'static [&'static str] {
    match self {
      Self::RegisterUser => &["username", "password", "email"],
      Self::Login => &["username", "password"],
      Self::RetrieveData => &["authentication_token", "fields"],
    }
  }
}
