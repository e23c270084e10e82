//! End-to-end form behaviour driven through `FormInput` events.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use lookaway::form::{SocialProvider, PRIVACY_HINT};
use lookaway::{
    AuthForm, AuthMode, FocusState, FormField, FormInput, PasswordFocusChanged, SubmissionLog,
};
use test_utils::app::headless_app;

#[derive(Resource, Debug, Default)]
struct FocusEdges(Vec<bool>);

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must take On<T> by value."
)]
fn record_edge(event: On<PasswordFocusChanged>, mut edges: ResMut<FocusEdges>) {
    edges.0.push(event.event().focused);
}

fn app_recording_edges() -> App {
    let mut app = headless_app();
    app.init_resource::<FocusEdges>();
    app.add_observer(record_edge);
    app
}

fn send(app: &mut App, inputs: impl IntoIterator<Item = FormInput>) {
    for input in inputs {
        app.world_mut().trigger(input);
    }
    app.world_mut().flush();
}

fn type_into(field: FormField, text: &str) -> [FormInput; 2] {
    [FormInput::Focus(field), FormInput::Type(text.to_owned())]
}

#[test]
fn sign_up_records_name_email_and_password() {
    let mut app = app_recording_edges();
    send(&mut app, [FormInput::ToggleMode]);
    send(&mut app, type_into(FormField::Name, "Grace Hopper"));
    send(&mut app, type_into(FormField::Email, "grace@example.com"));
    send(&mut app, type_into(FormField::Password, "cobol"));
    send(&mut app, [FormInput::Submit]);
    app.update();

    let log = app.world().resource::<SubmissionLog>();
    let submission = log.last().cloned().unwrap_or_else(|| panic!("nothing submitted"));
    assert_eq!(submission.mode, AuthMode::SignUp);
    assert_eq!(submission.name.as_deref(), Some("Grace Hopper"));
    assert_eq!(submission.email, "grace@example.com");
    assert_eq!(submission.password, "cobol");
    assert!(!format!("{submission:?}").contains("cobol"));
}

#[test]
fn focus_edges_fire_only_when_password_focus_flips() {
    let mut app = app_recording_edges();
    send(
        &mut app,
        [
            FormInput::Focus(FormField::Email),
            FormInput::Focus(FormField::Password),
            FormInput::Focus(FormField::Password),
            FormInput::TogglePasswordVisibility,
            FormInput::Type("abc".to_owned()),
            FormInput::FocusNext,
            FormInput::Blur,
        ],
    );

    assert_eq!(app.world().resource::<FocusEdges>().0, vec![true, false]);
    assert!(!app.world().resource::<FocusState>().is_password_focused());
}

#[test]
fn switching_modes_keeps_typed_values_and_drops_hidden_focus() {
    let mut app = app_recording_edges();
    send(&mut app, [FormInput::ToggleMode]);
    send(&mut app, type_into(FormField::Name, "Ada"));
    send(&mut app, [FormInput::ToggleMode]);

    let form = app.world().resource::<AuthForm>();
    assert_eq!(form.mode(), AuthMode::SignIn);
    assert_eq!(form.focused(), None);
    assert_eq!(form.value(FormField::Name), "Ada");
    assert!(form.shows_forgot_password());
}

#[test]
fn decorative_actions_change_nothing() {
    let mut app = app_recording_edges();
    let before = app.world().resource::<AuthForm>().clone();
    send(
        &mut app,
        [
            FormInput::ForgotPassword,
            FormInput::Social(SocialProvider::Google),
            FormInput::Social(SocialProvider::GitHub),
        ],
    );

    assert_eq!(app.world().resource::<AuthForm>(), &before);
    assert!(app.world().resource::<SubmissionLog>().is_empty());
}

#[test]
fn privacy_hint_reads_as_designed() {
    assert_eq!(PRIVACY_HINT, "The characters are looking away for your privacy");
}
