mod error;
mod login;

pub use error::ErrorPage;
pub use login::LoginPage;
