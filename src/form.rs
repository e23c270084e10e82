//! Sign-in / sign-up form model.
//!
//! The form is the only writer of [`FocusState`]. Every user intent arrives
//! as a [`FormInput`] event so the bevy_ui front end and headless tests drive
//! the form through the same path. Nothing here authenticates anyone:
//! submitting only appends the captured values to [`SubmissionLog`].
use std::fmt;

use bevy::ecs::prelude::On;
use bevy::input::keyboard::Key;
use bevy::prelude::*;
use log::info;

use crate::focus::{FocusState, PasswordFocusChanged};

/// Copy shown under the password field while it is focused.
pub const PRIVACY_HINT: &str = "The characters are looking away for your privacy";
/// Copy shown over the character scene while the password is focused.
pub const PRIVACY_OVERLAY: &str = "Characters looking away...";
/// Glyph used to mask each password character.
pub const MASK_GLYPH: char = '•';

/// Whether the form signs an existing user in or registers a new one.
#[derive(Reflect, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AuthMode {
    /// Existing account.
    #[default]
    SignIn,
    /// New account.
    SignUp,
}

impl AuthMode {
    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    /// Card heading.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::SignIn => "Welcome back",
            Self::SignUp => "Create account",
        }
    }

    /// Line under the heading.
    #[must_use]
    pub const fn subheading(self) -> &'static str {
        match self {
            Self::SignIn => "Enter your credentials to access your account",
            Self::SignUp => "Enter your details to get started",
        }
    }

    /// Submit button label.
    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Create Account",
        }
    }

    /// Prompt before the mode switch button.
    #[must_use]
    pub const fn switch_prompt(self) -> &'static str {
        match self {
            Self::SignIn => "Don't have an account?",
            Self::SignUp => "Already have an account?",
        }
    }

    /// Label of the mode switch button.
    #[must_use]
    pub const fn switch_action(self) -> &'static str {
        match self {
            Self::SignIn => "Sign up",
            Self::SignUp => "Sign in",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignIn => f.write_str("Login"),
            Self::SignUp => f.write_str("Register"),
        }
    }
}

/// Editable inputs on the card.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Full name, sign-up only.
    Name,
    /// Email address.
    Email,
    /// Password.
    Password,
}

impl FormField {
    /// Label rendered above the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }

    /// Placeholder rendered while the input is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "John Doe",
            Self::Email => "you@example.com",
            Self::Password => "••••••••",
        }
    }
}

const SIGN_IN_FIELDS: &[FormField] = &[FormField::Email, FormField::Password];
const SIGN_UP_FIELDS: &[FormField] = &[FormField::Name, FormField::Email, FormField::Password];

/// Third-party sign-in buttons. They are decorative and only log.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialProvider {
    /// "Continue with Google".
    Google,
    /// "Continue with GitHub".
    GitHub,
}

impl SocialProvider {
    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::GitHub => "GitHub",
        }
    }
}

/// Values captured by one submit.
#[derive(Clone, PartialEq, Eq)]
pub struct Submission {
    /// Mode the form was in.
    pub mode: AuthMode,
    /// Email as typed.
    pub email: String,
    /// Full name, captured in sign-up mode only.
    pub name: Option<String>,
    /// Password as typed.
    pub password: String,
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("mode", &self.mode)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Every submission made during this run, oldest first.
#[derive(Resource, Debug, Default, Deref)]
pub struct SubmissionLog(pub Vec<Submission>);

/// State of the auth card.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    mode: AuthMode,
    email: String,
    password: String,
    name: String,
    show_password: bool,
    focused: Option<FormField>,
}

impl AuthForm {
    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Currently focused field.
    #[must_use]
    pub const fn focused(&self) -> Option<FormField> {
        self.focused
    }

    /// Whether the password is rendered in clear text.
    #[must_use]
    pub const fn shows_password(&self) -> bool {
        self.show_password
    }

    /// Fields rendered in the current mode, top to bottom.
    #[must_use]
    pub const fn visible_fields(&self) -> &'static [FormField] {
        match self.mode {
            AuthMode::SignIn => SIGN_IN_FIELDS,
            AuthMode::SignUp => SIGN_UP_FIELDS,
        }
    }

    /// Whether `field` is rendered in the current mode.
    #[must_use]
    pub fn is_visible(&self, field: FormField) -> bool {
        self.visible_fields().contains(&field)
    }

    /// "Forgot password?" is offered in sign-in mode only.
    #[must_use]
    pub const fn shows_forgot_password(&self) -> bool {
        matches!(self.mode, AuthMode::SignIn)
    }

    /// Raw value of `field`.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    /// Text to render for `field`, masking the password unless revealed.
    #[must_use]
    pub fn display_value(&self, field: FormField) -> String {
        if field == FormField::Password && !self.show_password {
            return std::iter::repeat(MASK_GLYPH)
                .take(self.password.chars().count())
                .collect();
        }
        self.value(field).to_owned()
    }

    /// Switches between sign-in and sign-up. Typed values are kept.
    ///
    /// Focus on a field that the new mode hides is dropped.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        if self.focused.is_some_and(|field| !self.is_visible(field)) {
            self.focused = None;
        }
    }

    /// Toggles clear-text password display.
    pub const fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Focuses `field`, returning the password focus edge if one occurred.
    ///
    /// Hidden fields cannot take focus.
    ///
    /// # Examples
    ///
    /// ```
    /// use lookaway::form::{AuthForm, FormField};
    ///
    /// let mut form = AuthForm::default();
    /// assert!(form.focus(FormField::Password).is_some_and(|edge| edge.focused));
    /// assert!(form.focus(FormField::Password).is_none());
    /// assert!(form.focus(FormField::Email).is_some_and(|edge| !edge.focused));
    /// ```
    pub fn focus(&mut self, field: FormField) -> Option<PasswordFocusChanged> {
        if !self.is_visible(field) {
            return None;
        }
        self.set_focus(Some(field))
    }

    /// Clears focus, returning the password focus edge if one occurred.
    pub fn blur(&mut self) -> Option<PasswordFocusChanged> {
        self.set_focus(None)
    }

    /// Moves focus to the next visible field, wrapping around.
    pub fn focus_next(&mut self) -> Option<PasswordFocusChanged> {
        let fields = self.visible_fields();
        let next = self
            .focused
            .and_then(|current| fields.iter().position(|field| *field == current))
            .map_or(0, |index| (index + 1) % fields.len());
        let field = fields.get(next).copied();
        self.set_focus(field)
    }

    /// Appends `text` to the focused field, dropping control characters.
    pub fn insert_text(&mut self, text: &str) {
        let Some(field) = self.focused else {
            return;
        };
        let target = self.value_mut(field);
        target.extend(text.chars().filter(|c| !c.is_control()));
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused {
            self.value_mut(field).pop();
        }
    }

    /// Captures the current values. The form itself is left untouched.
    #[must_use]
    pub fn submission(&self) -> Submission {
        Submission {
            mode: self.mode,
            email: self.email.clone(),
            name: matches!(self.mode, AuthMode::SignUp).then(|| self.name.clone()),
            password: self.password.clone(),
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
        }
    }

    fn set_focus(&mut self, field: Option<FormField>) -> Option<PasswordFocusChanged> {
        let was_password = self.focused == Some(FormField::Password);
        let is_password = field == Some(FormField::Password);
        self.focused = field;
        (was_password != is_password).then_some(PasswordFocusChanged {
            focused: is_password,
        })
    }
}

/// A user intent directed at the form.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub enum FormInput {
    /// Focus a field, e.g. by clicking it.
    Focus(FormField),
    /// Drop focus, e.g. by clicking outside any input.
    Blur,
    /// Move focus to the next visible field (Tab).
    FocusNext,
    /// Type text into the focused field.
    Type(String),
    /// Delete the last character of the focused field.
    Backspace,
    /// Switch between sign-in and sign-up.
    ToggleMode,
    /// Show or hide the password.
    TogglePasswordVisibility,
    /// Submit the form.
    Submit,
    /// "Forgot password?" was pressed.
    ForgotPassword,
    /// A social sign-in button was pressed.
    Social(SocialProvider),
}

impl FormInput {
    /// Maps a pressed logical key to the form intent it stands for.
    ///
    /// # Examples
    ///
    /// ```
    /// use bevy::input::keyboard::Key;
    /// use lookaway::form::FormInput;
    ///
    /// assert_eq!(FormInput::from_key(&Key::Tab), Some(FormInput::FocusNext));
    /// assert_eq!(FormInput::from_key(&Key::F1), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Tab => Some(Self::FocusNext),
            Key::Backspace => Some(Self::Backspace),
            Key::Enter => Some(Self::Submit),
            Key::Escape => Some(Self::Blur),
            Key::Space => Some(Self::Type(" ".to_owned())),
            Key::Character(text) => Some(Self::Type(text.to_string())),
            _ => None,
        }
    }
}

/// Applies a [`FormInput`] to the form.
///
/// Password focus edges update [`FocusState`] immediately, so the next
/// controller frame sees them, and are re-raised as
/// [`PasswordFocusChanged`] for other listeners.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
pub fn handle_form_input(
    event: On<FormInput>,
    mut commands: Commands,
    mut form: ResMut<AuthForm>,
    mut focus: ResMut<FocusState>,
    mut log: ResMut<SubmissionLog>,
) {
    let edge = match event.event() {
        FormInput::Focus(field) => form.focus(*field),
        FormInput::Blur => form.blur(),
        FormInput::FocusNext => form.focus_next(),
        FormInput::Type(text) => {
            form.insert_text(text);
            None
        }
        FormInput::Backspace => {
            form.backspace();
            None
        }
        FormInput::ToggleMode => {
            form.toggle_mode();
            None
        }
        FormInput::TogglePasswordVisibility => {
            form.toggle_password_visibility();
            None
        }
        FormInput::Submit => {
            let submission = form.submission();
            info!("{} submitted for {:?}", submission.mode, submission.email);
            log.0.push(submission);
            None
        }
        FormInput::ForgotPassword => {
            info!("password reset requested; no recovery flow is wired");
            None
        }
        FormInput::Social(provider) => {
            info!("{} sign-in requested; no provider is wired", provider.label());
            None
        }
    };

    if let Some(change) = edge {
        focus.set_password_focused(change.focused);
        commands.trigger(change);
    }
}

/// Installs the form resources and its input observer.
#[derive(Debug, Default)]
pub struct AuthFormPlugin;

impl Plugin for AuthFormPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AuthForm>();
        app.init_resource::<SubmissionLog>();
        app.init_resource::<FocusState>();
        app.add_observer(handle_form_input);
    }
}
