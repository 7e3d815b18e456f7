mod announcement;
mod button;
mod form_card;
mod labeled_input;
mod layout;
mod spinner;

pub use announcement::Announcement;
pub use button::SubmitButton;
pub use form_card::FormCard;
pub use labeled_input::LabeledInput;
pub use layout::CenteredLayout;
pub use spinner::Spinner;
