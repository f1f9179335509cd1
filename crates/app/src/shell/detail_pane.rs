use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{
    ActiveTheme, Icon, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};

use mica_storage::Presence;

use crate::shell::events::{DetailClosed, PinToggled};

/// The counterpart shown in the detail pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSubject {
    pub username: String,
    pub status_line: String,
    pub avatar_initial: char,
    pub presence: Presence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Media,
    Files,
    Links,
}

impl DetailTab {
    const ALL: [Self; 3] = [Self::Media, Self::Files, Self::Links];

    fn label(self) -> &'static str {
        match self {
            Self::Media => "Media",
            Self::Files => "Files",
            Self::Links => "Links",
        }
    }
}

/// Third pane variant: details for the selected conversation's counterpart.
///
/// The shell only mounts this pane when the counterpart record resolved, so
/// `subject` being `None` is a transient frame at worst.
pub struct DetailPane {
    subject: Option<DetailSubject>,
    pinned: bool,
    active_tab: DetailTab,
}

impl EventEmitter<DetailClosed> for DetailPane {}
impl EventEmitter<PinToggled> for DetailPane {}

impl DetailPane {
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self {
            subject: None,
            pinned: false,
            active_tab: DetailTab::Media,
        }
    }

    pub fn set_subject(&mut self, subject: Option<DetailSubject>, cx: &mut Context<Self>) {
        self.subject = subject;
        cx.notify();
    }

    pub fn set_pinned(&mut self, pinned: bool, cx: &mut Context<Self>) {
        self.pinned = pinned;
        cx.notify();
    }

    fn render_header(&self, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();
        let pin_label = if self.pinned { "Unpin" } else { "Pin" };

        h_flex()
            .w_full()
            .items_center()
            .justify_between()
            .px_3()
            .py_2()
            .border_b_1()
            .border_color(theme.border)
            .child(Label::new("Details").text_sm())
            .child(
                h_flex()
                    .items_center()
                    .gap_1()
                    .child({
                        let button = Button::new("detail-pin").small().child(pin_label);
                        let button = if self.pinned {
                            button.primary()
                        } else {
                            button.ghost()
                        };

                        button.on_click(cx.listener(|_, _, _window, cx| {
                            cx.emit(PinToggled);
                        }))
                    })
                    .child(
                        Button::new("detail-close")
                            .ghost()
                            .small()
                            .icon(IconName::Close)
                            .on_click(cx.listener(|_, _, _window, cx| {
                                cx.emit(DetailClosed);
                            })),
                    ),
            )
            .into_any_element()
    }

    fn render_subject(&self, subject: &DetailSubject, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();

        v_flex()
            .w_full()
            .items_center()
            .gap_2()
            .px_3()
            .py_4()
            .child(
                div()
                    .relative()
                    .size(px(64.))
                    .child(
                        div()
                            .size_full()
                            .rounded_full()
                            .bg(theme.muted)
                            .border_1()
                            .border_color(theme.border)
                            .flex()
                            .items_center()
                            .justify_center()
                            .child(Label::new(subject.avatar_initial.to_string()).text_lg()),
                    )
                    .child(
                        div()
                            .absolute()
                            .bottom_0()
                            .right_0()
                            .size(px(14.))
                            .rounded_full()
                            .border_2()
                            .border_color(theme.background)
                            .bg(presence_color(subject.presence)),
                    ),
            )
            .child(Label::new(subject.username.clone()).text_base())
            .child(
                Label::new(subject.status_line.clone())
                    .text_xs()
                    .text_color(theme.foreground.opacity(0.55)),
            )
            .into_any_element()
    }

    fn render_tabs(&self, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();
        let active = self.active_tab;

        h_flex()
            .w_full()
            .items_center()
            .gap_1()
            .px_3()
            .py_1()
            .border_b_1()
            .border_color(theme.border)
            .children(DetailTab::ALL.into_iter().map(|tab| {
                let selected = tab == active;

                div()
                    .id(tab.label())
                    .flex_1()
                    .px_2()
                    .py_1()
                    .rounded_md()
                    .cursor_pointer()
                    .when(selected, |el| el.bg(theme.muted))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(
                        Label::new(tab.label())
                            .text_xs()
                            .when(!selected, |label| {
                                label.text_color(theme.foreground.opacity(0.55))
                            }),
                    )
                    .on_click(cx.listener(move |this, _, _window, cx| {
                        this.active_tab = tab;
                        cx.notify();
                    }))
            }))
            .into_any_element()
    }

    fn render_tab_body(&self, cx: &Context<Self>) -> AnyElement {
        let theme = cx.theme();
        let (icon, hint) = match self.active_tab {
            DetailTab::Media => (IconName::Folder, "No shared media yet"),
            DetailTab::Files => (IconName::File, "No shared files yet"),
            DetailTab::Links => (IconName::Web, "No shared links yet"),
        };

        v_flex()
            .flex_1()
            .min_h_0()
            .items_center()
            .justify_center()
            .gap_2()
            .px_3()
            .child(
                Icon::new(icon)
                    .size(px(24.))
                    .text_color(theme.foreground.opacity(0.35)),
            )
            .child(
                Label::new(hint)
                    .text_xs()
                    .text_color(theme.foreground.opacity(0.55)),
            )
            .into_any_element()
    }
}

impl Render for DetailPane {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        let body = match self.subject.clone() {
            Some(subject) => v_flex()
                .size_full()
                .min_h_0()
                .child(self.render_header(cx))
                .child(self.render_subject(&subject, cx))
                .child(self.render_tabs(cx))
                .child(self.render_tab_body(cx))
                .into_any_element(),
            None => v_flex()
                .size_full()
                .items_center()
                .justify_center()
                .child(
                    Label::new("Loading details...")
                        .text_sm()
                        .text_color(theme.foreground.opacity(0.55)),
                )
                .into_any_element(),
        };

        v_flex()
            .size_full()
            .min_w_0()
            .overflow_hidden()
            .bg(theme.background)
            .child(body)
    }
}

fn presence_color(presence: Presence) -> Rgba {
    match presence {
        Presence::Online => rgb(0x22c55e),
        Presence::Away => rgb(0xeab308),
        Presence::Offline => rgb(0x9ca3af),
    }
}
