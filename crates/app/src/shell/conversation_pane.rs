use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{
    ActiveTheme, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};

use mica_storage::{ChannelId, MessageId, Presence};

use crate::shell::events::{BackRequested, DetailToggled, FeedToggled, MessageSubmitted};

const HEADER_HEIGHT: f32 = 56.0;
const BUBBLE_MAX_WIDTH: f32 = 420.0;

/// One rendered message bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub id: MessageId,
    pub author_name: String,
    pub content: String,
    pub mine: bool,
    pub age_label: String,
}

/// Everything the pane needs to draw a resolved conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSnapshot {
    pub channel_id: ChannelId,
    pub title: String,
    pub status_line: String,
    pub avatar_initial: char,
    pub presence: Option<Presence>,
    pub messages: Vec<MessageView>,
}

/// Center pane: header, message history, and composer.
///
/// A selection whose channel record has not resolved yet renders a loading
/// placeholder instead of failing; the record may still be on its way.
pub struct ConversationPane {
    input_state: Entity<InputState>,
    snapshot: Option<ConversationSnapshot>,
    has_selection: bool,
    desktop: bool,
    detail_open: bool,
    feed_collapsed: bool,
    feed_unread: usize,
}

impl EventEmitter<MessageSubmitted> for ConversationPane {}
impl EventEmitter<BackRequested> for ConversationPane {}
impl EventEmitter<DetailToggled> for ConversationPane {}
impl EventEmitter<FeedToggled> for ConversationPane {}

impl ConversationPane {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let input_state = cx.new(|cx| {
            InputState::new(window, cx)
                .placeholder("Type a message...")
                .clean_on_escape()
        });

        cx.subscribe_in(
            &input_state,
            window,
            |this, _, event: &InputEvent, window, cx| {
                if let InputEvent::PressEnter { secondary } = event
                    && !secondary
                {
                    this.handle_submit(window, cx);
                }
            },
        )
        .detach();

        Self {
            input_state,
            snapshot: None,
            has_selection: false,
            desktop: true,
            detail_open: false,
            feed_collapsed: false,
            feed_unread: 0,
        }
    }

    pub fn set_view(
        &mut self,
        snapshot: Option<ConversationSnapshot>,
        has_selection: bool,
        cx: &mut Context<Self>,
    ) {
        self.snapshot = snapshot;
        self.has_selection = has_selection;
        cx.notify();
    }

    /// Header chrome depends on shell-level state the pane does not own.
    pub fn set_chrome(
        &mut self,
        desktop: bool,
        detail_open: bool,
        feed_collapsed: bool,
        feed_unread: usize,
        cx: &mut Context<Self>,
    ) {
        self.desktop = desktop;
        self.detail_open = detail_open;
        self.feed_collapsed = feed_collapsed;
        self.feed_unread = feed_unread;
        cx.notify();
    }

    fn handle_submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.snapshot.is_none() {
            return;
        }

        let content = self.input_state.read(cx).value().to_string();
        if content.trim().is_empty() {
            return;
        }

        cx.emit(MessageSubmitted {
            content: content.trim().to_string(),
        });
        self.input_state.update(cx, |state, cx| {
            state.set_value("", window, cx);
        });
    }

    fn render_centered_hint(&self, message: &'static str, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();

        v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .px_4()
            .child(
                Label::new(message)
                    .text_sm()
                    .text_color(theme.foreground.opacity(0.55)),
            )
            .into_any_element()
    }

    /// Renders for every selection, resolved or not. Narrow windows hide the
    /// list pane while a selection exists, so the back control here is the
    /// only route out of an unresolved record.
    fn render_header(
        &self,
        snapshot: Option<&ConversationSnapshot>,
        cx: &Context<Self>,
    ) -> AnyElement {
        let theme = cx.theme();
        let show_feed_dot = self.feed_collapsed && self.feed_unread > 0;
        let resolved = snapshot.is_some();

        h_flex()
            .w_full()
            .h(px(HEADER_HEIGHT))
            .flex_shrink_0()
            .items_center()
            .gap_2()
            .px_3()
            .border_b_1()
            .border_color(theme.border)
            .when(!self.desktop, |el| {
                el.child(
                    Button::new("conversation-back")
                        .ghost()
                        .small()
                        .child("Back")
                        .on_click(cx.listener(|_, _, _window, cx| {
                            cx.emit(BackRequested);
                        })),
                )
            })
            .map(|el| {
                let Some(snapshot) = snapshot else {
                    return el.child(
                        Label::new("Loading...")
                            .text_sm()
                            .text_color(theme.foreground.opacity(0.55)),
                    );
                };

                el.child(
                    div()
                        .size(px(32.))
                        .flex_shrink_0()
                        .rounded_full()
                        .bg(theme.muted)
                        .border_1()
                        .border_color(theme.border)
                        .flex()
                        .items_center()
                        .justify_center()
                        .child(Label::new(snapshot.avatar_initial.to_string()).text_sm()),
                )
                .child(
                    v_flex()
                        .flex_1()
                        .min_w_0()
                        .child(
                            div()
                                .w_full()
                                .truncate()
                                .child(Label::new(snapshot.title.clone()).text_sm()),
                        )
                        .child(
                            Label::new(snapshot.status_line.clone())
                                .text_xs()
                                .text_color(theme.foreground.opacity(0.55)),
                        ),
                )
            })
            .when(self.desktop && resolved, |el| {
                el.child(
                    div()
                        .relative()
                        .child(
                            Button::new("conversation-activity")
                                .ghost()
                                .small()
                                .child("Activity")
                                .on_click(cx.listener(|_, _, _window, cx| {
                                    cx.emit(FeedToggled);
                                })),
                        )
                        .when(show_feed_dot, |el| {
                            el.child(
                                div()
                                    .absolute()
                                    .top_0()
                                    .right_0()
                                    .size(px(8.))
                                    .rounded_full()
                                    .bg(theme.danger),
                            )
                        }),
                )
                .child({
                    let button = Button::new("conversation-details")
                        .small()
                        .icon(IconName::CircleUser);
                    let button = if self.detail_open {
                        button.primary()
                    } else {
                        button.ghost()
                    };

                    button.on_click(cx.listener(|_, _, _window, cx| {
                        cx.emit(DetailToggled);
                    }))
                })
            })
            .into_any_element()
    }

    fn render_messages(&self, snapshot: &ConversationSnapshot, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();

        if snapshot.messages.is_empty() {
            return self.render_centered_hint("No messages yet. Say hello!", cx);
        }

        v_flex()
            .id("conversation-messages")
            .flex_1()
            .min_h_0()
            .w_full()
            .overflow_y_scroll()
            .gap_2()
            .p_3()
            .children(snapshot.messages.iter().map(|message| {
                let alignment = if message.mine {
                    h_flex().w_full().justify_end()
                } else {
                    h_flex().w_full().justify_start()
                };

                let bubble = v_flex()
                    .max_w(px(BUBBLE_MAX_WIDTH))
                    .gap_0p5()
                    .px_3()
                    .py_2()
                    .rounded_lg()
                    .map(|el| {
                        if message.mine {
                            el.bg(theme.primary).text_color(theme.background)
                        } else {
                            el.bg(theme.muted).text_color(theme.foreground)
                        }
                    })
                    .child(div().text_sm().child(message.content.clone()))
                    .child(
                        h_flex().justify_end().child(
                            div()
                                .text_xs()
                                .opacity(0.7)
                                .child(message.age_label.clone()),
                        ),
                    );

                alignment.child(bubble)
            }))
            .into_any_element()
    }

    fn render_composer(&self, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();

        v_flex()
            .w_full()
            .flex_shrink_0()
            .gap_2()
            .p_3()
            .border_t_1()
            .border_color(theme.border)
            .child(
                h_flex()
                    .w_full()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .flex_1()
                            .min_w_0()
                            .px_3()
                            .py_2()
                            .rounded_lg()
                            .border_1()
                            .border_color(theme.border)
                            .bg(theme.background)
                            .child(Input::new(&self.input_state).w_full()),
                    )
                    .child(
                        Button::new("conversation-send")
                            .small()
                            .primary()
                            .icon(IconName::ArrowUp)
                            .child("Send")
                            .on_click(cx.listener(|this, _, window, cx| {
                                this.handle_submit(window, cx);
                            })),
                    ),
            )
            .into_any_element()
    }
}

impl Render for ConversationPane {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        let body = match body_kind(self.has_selection, self.snapshot.is_some()) {
            PaneBody::SelectPrompt => self.render_centered_hint("Select a conversation", cx),
            PaneBody::Conversation | PaneBody::UnresolvedWithHeader => {
                let snapshot = self.snapshot.clone();

                v_flex()
                    .size_full()
                    .min_h_0()
                    .child(self.render_header(snapshot.as_ref(), cx))
                    .map(|el| match &snapshot {
                        Some(snapshot) => el
                            .child(self.render_messages(snapshot, cx))
                            .child(self.render_composer(cx)),
                        // Selected channel has no record yet; the header above
                        // keeps back navigation reachable while we wait.
                        None => {
                            el.child(self.render_centered_hint("Loading conversation...", cx))
                        }
                    })
                    .into_any_element()
            }
        };

        v_flex()
            .size_full()
            .min_w_0()
            .overflow_hidden()
            .bg(theme.background)
            .child(body)
    }
}

/// Body variant for one render of the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PaneBody {
    /// Nothing selected; prompt the user to pick a conversation.
    SelectPrompt,
    /// A selection exists but its channel record has not resolved. The
    /// header (and its back control) must still render, or a narrow window
    /// would have no way to leave the loading state.
    UnresolvedWithHeader,
    Conversation,
}

fn body_kind(has_selection: bool, resolved: bool) -> PaneBody {
    if !has_selection {
        PaneBody::SelectPrompt
    } else if resolved {
        PaneBody::Conversation
    } else {
        PaneBody::UnresolvedWithHeader
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_selection_still_gets_header_chrome() {
        assert_eq!(body_kind(true, false), PaneBody::UnresolvedWithHeader);
    }

    #[test]
    fn body_kind_covers_the_remaining_states() {
        assert_eq!(body_kind(false, false), PaneBody::SelectPrompt);
        assert_eq!(body_kind(false, true), PaneBody::SelectPrompt);
        assert_eq!(body_kind(true, true), PaneBody::Conversation);
    }
}
