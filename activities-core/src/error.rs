/// Errors produced by directory mutations.
///
/// The Display text of each variant is surfaced verbatim to API
/// callers as the `detail` field, so the wording here is part of the
/// wire contract ("already signed up" in particular).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DirectoryError {
    /// The activity name does not exist in the directory.
    #[error("activity '{name}' not found")]
    UnknownActivity { name: String },

    /// The email is already on the activity's participant list.
    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { email: String, activity: String },

    /// The email is not on the activity's participant list.
    #[error("{email} is not signed up for {activity}")]
    NotRegistered { email: String, activity: String },
}
