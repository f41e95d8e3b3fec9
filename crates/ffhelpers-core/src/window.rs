/// A boxed error type for platform operations.
///
/// Platform calls fail for many unrelated reasons (a window vanished, a
/// buffer was too small, the shell refused a launch). None of the helpers
/// recover from them differently, so a boxed error is enough.
pub type HelperResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Platform-agnostic window trait.
///
/// Each platform crate (e.g. `ffhelpers-windows`) provides its own
/// implementation. The census logic only ever needs these three queries.
pub trait Window {
    /// Returns the window title.
    fn title(&self) -> HelperResult<String>;

    /// Returns the window class name.
    fn class(&self) -> HelperResult<String>;

    /// Returns the id of the process that created the window.
    fn process_id(&self) -> u32;
}
