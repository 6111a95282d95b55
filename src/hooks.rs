/// Lifecycle of a fetched resource, from component mount to rendered
/// data. Held in component state and driven by the fetch hook.
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    /// No request has been issued yet
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    /// The fetched value, once one has arrived
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }
}
