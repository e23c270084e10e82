//! bevy_ui front end for the auth card.
//!
//! The card is rebuilt only in content, never in structure: every node is
//! spawned once at startup and `refresh_card` rewrites texts, colours and
//! `Display` whenever [`AuthForm`] or [`FocusState`] change. All input is
//! forwarded as [`FormInput`] events.
use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::input::keyboard::KeyboardInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy_ecs::system::SystemParam;

use crate::focus::FocusState;
use crate::form::{
    AuthForm, AuthMode, FormField, FormInput, SocialProvider, PRIVACY_HINT, PRIVACY_OVERLAY,
};

const CARD_BACKGROUND: Color = Color::srgb(0.09, 0.09, 0.12);
const INPUT_BACKGROUND: Color = Color::srgb(0.14, 0.14, 0.18);
const INPUT_FOCUSED: Color = Color::srgb(0.2, 0.2, 0.28);
const BUTTON_BACKGROUND: Color = Color::srgb(0.42, 0.36, 0.91);
const TEXT: Color = Color::srgb(0.95, 0.95, 0.97);
const MUTED: Color = Color::srgb(0.55, 0.55, 0.62);

/// Static copy that depends on the current [`AuthMode`].
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopySlot {
    /// Card heading.
    Heading,
    /// Line under the heading.
    Subheading,
    /// Submit button label.
    Submit,
    /// Prompt before the mode switch.
    SwitchPrompt,
    /// Mode switch button label.
    SwitchAction,
}

impl CopySlot {
    /// Text shown in this slot for `mode`.
    #[must_use]
    pub const fn text(self, mode: AuthMode) -> &'static str {
        match self {
            Self::Heading => mode.heading(),
            Self::Subheading => mode.subheading(),
            Self::Submit => mode.submit_label(),
            Self::SwitchPrompt => mode.switch_prompt(),
            Self::SwitchAction => mode.switch_action(),
        }
    }
}

/// A clickable element and the intent it raises.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct UiAction(pub FormInput);

/// Row wrapping a field's label and input. Hidden when the mode hides the
/// field.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRow(pub FormField);

/// Input box of a field.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInput(pub FormField);

/// Text inside a field's input box.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldText(pub FormField);

/// "Forgot password?" link, sign-in only.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForgotPasswordLink;

/// Label of the show/hide password button.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLabel;

/// Copy that is only shown while the password is focused.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrivacyCopy;

/// Builds the auth card and wires its input.
#[derive(Debug, Default)]
pub struct AuthUiPlugin;

impl Plugin for AuthUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_card);
        app.add_systems(
            Update,
            (forward_clicks, forward_keys, refresh_card).chain(),
        );
    }
}

fn label(text: &str, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

fn column(gap: f32) -> Node {
    Node {
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(gap),
        ..default()
    }
}

fn button_node() -> Node {
    Node {
        padding: UiRect::axes(Val::Px(14.0), Val::Px(10.0)),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

fn spawn_card(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::FlexEnd,
                align_items: AlignItems::Center,
                ..default()
            },
            Name::new("AuthScreen"),
        ))
        .with_children(|screen| {
            screen.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(32.0),
                    bottom: Val::Px(32.0),
                    display: Display::None,
                    ..default()
                },
                label(PRIVACY_OVERLAY, 18.0, MUTED),
                PrivacyCopy,
            ));
            screen
                .spawn((
                    Node {
                        width: Val::Px(380.0),
                        margin: UiRect::right(Val::Percent(8.0)),
                        padding: UiRect::all(Val::Px(28.0)),
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(16.0),
                        ..default()
                    },
                    BackgroundColor(CARD_BACKGROUND),
                    Name::new("AuthCard"),
                ))
                .with_children(spawn_card_contents);
        });
}

fn spawn_card_contents(card: &mut ChildSpawnerCommands) {
    let mode = AuthMode::default();
    card.spawn((label(CopySlot::Heading.text(mode), 28.0, TEXT), CopySlot::Heading));
    card.spawn((
        label(CopySlot::Subheading.text(mode), 14.0, MUTED),
        CopySlot::Subheading,
    ));

    for field in [FormField::Name, FormField::Email, FormField::Password] {
        card.spawn((column(6.0), FieldRow(field)))
            .with_children(|row| {
                row.spawn(label(field.label(), 14.0, TEXT));
                row.spawn((
                    Node {
                        padding: UiRect::all(Val::Px(10.0)),
                        column_gap: Val::Px(8.0),
                        justify_content: JustifyContent::SpaceBetween,
                        ..default()
                    },
                    BackgroundColor(INPUT_BACKGROUND),
                    Button,
                    FieldInput(field),
                    UiAction(FormInput::Focus(field)),
                ))
                .with_children(|input| {
                    input.spawn((label(field.placeholder(), 16.0, MUTED), FieldText(field)));
                });
                if field == FormField::Password {
                    row.spawn((button_node(), Button, UiAction(FormInput::TogglePasswordVisibility)))
                        .with_children(|reveal| {
                            reveal.spawn((label("Show", 13.0, MUTED), RevealLabel));
                        });
                    row.spawn((
                        Node {
                            display: Display::None,
                            ..default()
                        },
                        label(PRIVACY_HINT, 12.0, MUTED),
                        PrivacyCopy,
                    ));
                }
            });
    }

    card.spawn((
        button_node(),
        Button,
        UiAction(FormInput::ForgotPassword),
        ForgotPasswordLink,
    ))
    .with_children(|link| {
        link.spawn(label("Forgot password?", 13.0, MUTED));
    });

    card.spawn((
        button_node(),
        BackgroundColor(BUTTON_BACKGROUND),
        Button,
        UiAction(FormInput::Submit),
    ))
    .with_children(|submit| {
        submit.spawn((label(CopySlot::Submit.text(mode), 16.0, TEXT), CopySlot::Submit));
    });

    card.spawn(Node {
        column_gap: Val::Px(8.0),
        ..default()
    })
    .with_children(|socials| {
        for provider in [SocialProvider::Google, SocialProvider::GitHub] {
            socials
                .spawn((
                    button_node(),
                    BackgroundColor(INPUT_BACKGROUND),
                    Button,
                    UiAction(FormInput::Social(provider)),
                ))
                .with_children(|button| {
                    button.spawn(label(provider.label(), 14.0, TEXT));
                });
        }
    });

    card.spawn(Node {
        column_gap: Val::Px(6.0),
        align_items: AlignItems::Center,
        ..default()
    })
    .with_children(|switch| {
        switch.spawn((
            label(CopySlot::SwitchPrompt.text(mode), 13.0, MUTED),
            CopySlot::SwitchPrompt,
        ));
        switch
            .spawn((button_node(), Button, UiAction(FormInput::ToggleMode)))
            .with_children(|action| {
                action.spawn((
                    label(CopySlot::SwitchAction.text(mode), 13.0, TEXT),
                    CopySlot::SwitchAction,
                ));
            });
    });
}

/// Raises the intent of a pressed element, or blurs when the click landed
/// outside every element.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn forward_clicks(
    mut commands: Commands,
    mouse: Res<ButtonInput<MouseButton>>,
    actions: Query<(&Interaction, &UiAction), Changed<Interaction>>,
    hovered: Query<&Interaction, With<UiAction>>,
) {
    let mut pressed = false;
    for (interaction, action) in &actions {
        if *interaction == Interaction::Pressed {
            commands.trigger(action.0.clone());
            pressed = true;
        }
    }
    let over_element = hovered.iter().any(|i| *i != Interaction::None);
    if !pressed && !over_element && mouse.just_pressed(MouseButton::Left) {
        commands.trigger(FormInput::Blur);
    }
}

fn forward_keys(mut commands: Commands, mut keys: MessageReader<KeyboardInput>) {
    for key in keys.read() {
        if key.state != ButtonState::Pressed {
            continue;
        }
        if let Some(input) = FormInput::from_key(&key.logical_key) {
            commands.trigger(input);
        }
    }
}

/// Nodes whose `Display` follows the form and focus state.
#[derive(SystemParam)]
pub struct CardLayout<'w, 's> {
    rows: Query<
        'w,
        's,
        (&'static FieldRow, &'static mut Node),
        (Without<ForgotPasswordLink>, Without<PrivacyCopy>),
    >,
    forgot: Query<'w, 's, &'static mut Node, (With<ForgotPasswordLink>, Without<PrivacyCopy>)>,
    privacy: Query<'w, 's, &'static mut Node, With<PrivacyCopy>>,
}

/// Rewrites card content from the form and focus state.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
fn refresh_card(
    form: Res<AuthForm>,
    focus: Res<FocusState>,
    mut copy: Query<(&CopySlot, &mut Text)>,
    mut fields: Query<(&FieldText, &mut Text, &mut TextColor), Without<CopySlot>>,
    mut reveal: Query<&mut Text, (With<RevealLabel>, Without<CopySlot>, Without<FieldText>)>,
    mut inputs: Query<(&FieldInput, &mut BackgroundColor)>,
    mut layout: CardLayout,
) {
    if !form.is_changed() && !focus.is_changed() {
        return;
    }
    let mode = form.mode();

    for (slot, mut text) in &mut copy {
        text.0 = slot.text(mode).to_owned();
    }
    for (field, mut text, mut color) in &mut fields {
        let value = form.display_value(field.0);
        if value.is_empty() {
            text.0 = field.0.placeholder().to_owned();
            color.0 = MUTED;
        } else {
            text.0 = value;
            color.0 = TEXT;
        }
    }
    for mut text in &mut reveal {
        text.0 = if form.shows_password() { "Hide" } else { "Show" }.to_owned();
    }
    for (input, mut background) in &mut inputs {
        background.0 = if form.focused() == Some(input.0) {
            INPUT_FOCUSED
        } else {
            INPUT_BACKGROUND
        };
    }
    for (row, mut node) in &mut layout.rows {
        node.display = shown(form.is_visible(row.0));
    }
    for mut node in &mut layout.forgot {
        node.display = shown(form.shows_forgot_password());
    }
    for mut node in &mut layout.privacy {
        node.display = shown(focus.is_password_focused());
    }
}

const fn shown(visible: bool) -> Display {
    if visible {
        Display::Flex
    } else {
        Display::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    // Without the UI render plugin the card nodes exist but are never drawn.
    assert_impl_all!(bevy::ui_render::UiRenderPlugin: Plugin);

    #[rstest]
    #[case::sign_in(AuthMode::SignIn, "Welcome back", "Sign In")]
    #[case::sign_up(AuthMode::SignUp, "Create account", "Create Account")]
    fn copy_slots_follow_mode(#[case] mode: AuthMode, #[case] heading: &str, #[case] submit: &str) {
        assert_eq!(CopySlot::Heading.text(mode), heading);
        assert_eq!(CopySlot::Submit.text(mode), submit);
    }

    #[test]
    fn hidden_elements_use_display_none() {
        assert_eq!(shown(false), Display::None);
        assert_eq!(shown(true), Display::Flex);
    }
}
