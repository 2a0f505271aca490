//! Navigation-related state types.

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Home,
    AddAddress,
}

/// Specifying navigation requests that can be deferred.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum NavigationAction {
    /// Return to the previous view.
    Back,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::AddAddress => "Add a new Address",
        }
    }
}
