use std::error::Error;

/// Base trait for all application errors
pub trait OpexError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether the error was caused by user-editable input (settings or
    /// option files) rather than the environment
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type OpexResult<T> = Result<T, Box<dyn OpexError>>;

/// Render names the way every list-valued error message shows them: `['a', 'b']`.
pub fn quoted_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let quoted: Vec<String> = items
        .into_iter()
        .map(|item| format!("'{}'", item.as_ref()))
        .collect();
    format!("[{}]", quoted.join(", "))
}
