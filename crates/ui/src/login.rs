//! Staff login screen — email + password entry against a hard-coded pair.
//!
//! There is no session or token model; a real deployment would delegate to
//! an identity provider. The check here gates the terminal UI, nothing more.

use heapless::String;

use crate::input::InputEvent;
use crate::screen::{Screen, ScreenRequest};

/// The accepted credential pair.
pub const STAFF_EMAIL: &str = "admin@restaurant.sg";
/// See [`STAFF_EMAIL`].
pub const STAFF_PASSWORD: &str = "admin123";

/// Which text field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    /// Email field.
    #[default]
    Email,
    /// Password field (rendered masked).
    Password,
}

/// Validation outcome shown as an inline banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginError {
    /// Email field is empty.
    EmptyEmail,
    /// Password field is empty.
    EmptyPassword,
    /// Both fields present but the pair does not match.
    BadCredentials,
}

impl LoginError {
    /// Banner text for this error.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            LoginError::EmptyEmail => "Please enter your email",
            LoginError::EmptyPassword => "Please enter your password",
            LoginError::BadCredentials => "Invalid email or password",
        }
    }
}

/// Login screen state.
#[derive(Debug, Default)]
pub struct LoginScreen {
    /// Email entry buffer.
    pub email: String<64>,
    /// Password entry buffer.
    pub password: String<32>,
    /// Focused field.
    pub focus: LoginField,
    /// Current validation error, cleared on the next keystroke.
    pub error: Option<LoginError>,
}

impl LoginScreen {
    /// Create an empty login form focused on the email field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one input event. Returns a navigation request on successful
    /// login.
    pub fn handle(&mut self, event: InputEvent) -> Option<ScreenRequest> {
        match event {
            InputEvent::Up | InputEvent::Down => {
                self.focus = match self.focus {
                    LoginField::Email => LoginField::Password,
                    LoginField::Password => LoginField::Email,
                };
                None
            }
            InputEvent::Char(c) => {
                self.error = None;
                // Silently drop characters past the buffer capacity.
                match self.focus {
                    LoginField::Email => self.email.push(c).ok(),
                    LoginField::Password => self.password.push(c).ok(),
                };
                None
            }
            InputEvent::Digit(d) => {
                self.handle(InputEvent::Char(digit_char(d)))
            }
            InputEvent::Backspace => {
                self.error = None;
                match self.focus {
                    LoginField::Email => self.email.pop(),
                    LoginField::Password => self.password.pop(),
                };
                None
            }
            InputEvent::Select => self.submit(),
            _ => None,
        }
    }

    /// Presence checks, then the credential-equality check.
    fn submit(&mut self) -> Option<ScreenRequest> {
        if self.email.is_empty() {
            self.error = Some(LoginError::EmptyEmail);
            return None;
        }
        if self.password.is_empty() {
            self.error = Some(LoginError::EmptyPassword);
            return None;
        }
        if self.email.as_str() == STAFF_EMAIL && self.password.as_str() == STAFF_PASSWORD {
            self.error = None;
            // Category becomes the new root; Back cannot reach the login
            // form again once the staff member is in.
            return Some(ScreenRequest::ResetTo(Screen::Category));
        }
        self.error = Some(LoginError::BadCredentials);
        None
    }
}

fn digit_char(d: u8) -> char {
    char::from(b'0'.saturating_add(d.min(9)))
}
