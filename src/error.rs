/// Result type for application actions.
pub(crate) type Result<T> = std::result::Result<T, AppError>;

/// Error codes for the start-up of the benchmark. Nothing fails once the loop is running.
#[derive(Debug, PartialEq)]
pub enum AppError {
    Sdl(String),      // SDL context or video subsystem failed to initialize.
    Window(String),   // Window could not be created.
    Renderer(String), // Renderer could not be created or configured.
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Sdl(why) => write!(f, "SDL Error: {why}"),
            AppError::Window(why) => write!(f, "Window Error: {why}"),
            AppError::Renderer(why) => write!(f, "Renderer Error: {why}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<sdl3::Error> for AppError {
    fn from(value: sdl3::Error) -> Self {
        AppError::Sdl(value.to_string())
    }
}

/// Renderer creation and configuration report through this type.
impl From<sdl3::IntegerOrSdlError> for AppError {
    fn from(value: sdl3::IntegerOrSdlError) -> Self {
        AppError::Renderer(value.to_string())
    }
}
