//! Records crossing the persistence boundary.

/// Input parameters of `CheckGuessAndUpdateScore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEntity {
    pub tech_index: u32,
    pub guessed_name: String,
    pub player_name: String,
}

/// Output parameters of `CheckGuessAndUpdateScore`, as read back from the session.
///
/// Both columns are nullable on the database side: an index that matches no technology leaves
/// `tech_name` unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessRecord {
    pub is_correct: Option<bool>,
    pub tech_name: Option<String>,
}
