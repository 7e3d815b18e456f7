//! User-facing strings

pub const SIGN_IN_HEADER: &str = "Sign In";
pub const USERNAME_LABEL: &str = "Username";
pub const USERNAME_PLACEHOLDER: &str = "Example";
pub const PASSWORD_LABEL: &str = "Password";
pub const PASSWORD_PLACEHOLDER: &str = "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}";

pub const INCORRECT_INPUTS_MESSAGE: &str = "Incorrect inputs";

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";
pub const GENERIC_ERROR_DESCRIPTION: &str = "An unexpected error occurred. Please try again later.";

pub const NO_PAGE_MESSAGE: &str = "No page found";
pub const NO_PAGE_DESCRIPTION: &str = "The page you are looking for does not exist.";

pub const MISSING_PARAMS_MESSAGE: &str = "No parameters found";
pub const MISSING_PARAMS_DESCRIPTION: &str =
    "This page must be opened with a client_id and redirect_uri.";

pub const SPINNER_ALT: &str = "Loading";
