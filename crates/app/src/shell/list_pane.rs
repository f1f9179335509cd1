use std::rc::Rc;

use gpui::*;
use gpui_component::{
    ActiveTheme, Sizable, VirtualListScrollHandle,
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    list::ListItem,
    v_flex, v_virtual_list,
};

use mica_storage::{ChannelId, Presence};

use crate::shell::events::ConversationSelected;

const CONVERSATION_ROW_HEIGHT: f32 = 64.0;
const AVATAR_SIZE: f32 = 36.0;

/// One row of the conversation list, already flattened for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationEntry {
    pub id: ChannelId,
    pub name: String,
    pub avatar_initial: char,
    pub presence: Presence,
    pub preview: String,
    pub age_label: String,
    pub unread_count: u32,
}

/// Left pane: searchable conversation list.
///
/// Holds a snapshot pushed down by the shell rather than reading the store
/// itself, so selection and unread counts always match what the other panes
/// are showing.
pub struct ConversationListPane {
    search_input: Entity<InputState>,
    search_query: String,
    entries: Vec<ConversationEntry>,
    selected: Option<ChannelId>,
    visible_entries: Vec<ConversationEntry>,
    item_sizes: Rc<Vec<Size<Pixels>>>,
    scroll_handle: VirtualListScrollHandle,
}

impl EventEmitter<ConversationSelected> for ConversationListPane {}

impl ConversationListPane {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let search_input =
            cx.new(|cx| InputState::new(window, cx).placeholder("Search conversations..."));

        cx.subscribe_in(
            &search_input,
            window,
            |this, _, _event: &InputEvent, _window, cx| {
                this.search_query = this.search_input.read(cx).value().to_string();
                this.rebuild_visible_entries();
                cx.notify();
            },
        )
        .detach();

        Self {
            search_input,
            search_query: String::new(),
            entries: Vec::new(),
            selected: None,
            visible_entries: Vec::new(),
            item_sizes: Rc::new(Vec::new()),
            scroll_handle: VirtualListScrollHandle::new(),
        }
    }

    pub fn set_entries(
        &mut self,
        entries: Vec<ConversationEntry>,
        selected: Option<ChannelId>,
        cx: &mut Context<Self>,
    ) {
        self.entries = entries;
        self.selected = selected;
        self.rebuild_visible_entries();
        cx.notify();
    }

    fn rebuild_visible_entries(&mut self) {
        let normalized_query = self.search_query.trim().to_ascii_lowercase();

        self.visible_entries = self
            .entries
            .iter()
            .filter(|entry| matches_query(entry, &normalized_query))
            .cloned()
            .collect();

        self.item_sizes = Rc::new(
            self.visible_entries
                .iter()
                .map(|_| size(px(0.), px(CONVERSATION_ROW_HEIGHT)))
                .collect(),
        );
    }

    fn render_search(&mut self, _cx: &mut Context<Self>) -> impl IntoElement {
        h_flex()
            .w_full()
            .min_w_0()
            .px_3()
            .pt(px(8.))
            .pb_2()
            .child(Input::new(&self.search_input).w_full().small())
    }

    fn render_empty_state(&mut self, cx: &mut Context<Self>) -> AnyElement {
        let theme = cx.theme();
        let message = if self.entries.is_empty() {
            "No conversations yet"
        } else {
            "No conversations match your search"
        };

        v_flex()
            .flex_1()
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

    fn render_rows(&mut self, cx: &mut Context<Self>) -> AnyElement {
        if self.visible_entries.is_empty() {
            return self.render_empty_state(cx);
        }

        let selected = self.selected.clone();
        let item_sizes = self.item_sizes.clone();
        let entries = self.visible_entries.clone();

        v_flex()
            .flex_1()
            .min_h_0()
            .child(
                v_virtual_list(
                    cx.entity().clone(),
                    "conversation-list",
                    item_sizes,
                    move |_this, visible_range, _scroll_handle, cx| {
                        visible_range
                            .map(|index| {
                                let entry = &entries[index];
                                render_row(entry, index, selected.as_ref() == Some(&entry.id), cx)
                            })
                            .collect()
                    },
                )
                .w_full()
                .flex_1()
                .track_scroll(&self.scroll_handle),
            )
            .into_any_element()
    }
}

impl Render for ConversationListPane {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = cx.theme();

        v_flex()
            .size_full()
            .min_w_0()
            .overflow_hidden()
            .bg(theme.background)
            .child(self.render_search(cx))
            .child(self.render_rows(cx))
    }
}

fn render_row(
    entry: &ConversationEntry,
    index: usize,
    is_selected: bool,
    cx: &mut Context<ConversationListPane>,
) -> AnyElement {
    let theme = cx.theme();
    let channel_id = entry.id.clone();

    div()
        .w_full()
        .h(px(CONVERSATION_ROW_HEIGHT))
        .px_2()
        .child(
            ListItem::new(("conversation", index))
                .w_full()
                .h_full()
                .px_2()
                .py_2()
                .rounded_md()
                .selected(is_selected)
                .on_click(cx.listener(move |_this, _event: &ClickEvent, _window, cx| {
                    cx.emit(ConversationSelected {
                        channel_id: channel_id.clone(),
                    });
                    cx.notify();
                }))
                .child(
                    h_flex()
                        .w_full()
                        .items_center()
                        .gap_2()
                        .child(render_avatar(entry, cx))
                        .child(
                            v_flex()
                                .flex_1()
                                .min_w_0()
                                .gap_0p5()
                                .child(
                                    div()
                                        .w_full()
                                        .truncate()
                                        .child(Label::new(entry.name.clone()).text_sm()),
                                )
                                .child(div().w_full().truncate().child(
                                    Label::new(entry.preview.clone()).text_xs().text_color(
                                        theme.foreground.opacity(0.6),
                                    ),
                                )),
                        )
                        .child(
                            v_flex()
                                .items_end()
                                .gap_1()
                                .child(
                                    Label::new(entry.age_label.clone())
                                        .text_xs()
                                        .text_color(theme.foreground.opacity(0.5)),
                                )
                                .child(render_unread_badge(entry.unread_count, cx)),
                        ),
                ),
        )
        .into_any_element()
}

fn render_avatar(entry: &ConversationEntry, cx: &Context<ConversationListPane>) -> AnyElement {
    let theme = cx.theme();

    div()
        .relative()
        .size(px(AVATAR_SIZE))
        .flex_shrink_0()
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
                .child(
                    Label::new(entry.avatar_initial.to_string())
                        .text_sm()
                        .text_color(theme.foreground),
                ),
        )
        .child(
            div()
                .absolute()
                .bottom_0()
                .right_0()
                .size(px(10.))
                .rounded_full()
                .border_1()
                .border_color(theme.background)
                .bg(presence_color(entry.presence)),
        )
        .into_any_element()
}

fn render_unread_badge(unread_count: u32, cx: &Context<ConversationListPane>) -> AnyElement {
    if unread_count == 0 {
        return div().h(px(16.)).into_any_element();
    }

    let theme = cx.theme();

    div()
        .min_w(px(16.))
        .h(px(16.))
        .px_1()
        .rounded_full()
        .bg(theme.primary)
        .flex()
        .items_center()
        .justify_center()
        .child(
            Label::new(unread_count.to_string())
                .text_xs()
                .text_color(theme.background),
        )
        .into_any_element()
}

fn presence_color(presence: Presence) -> Rgba {
    match presence {
        Presence::Online => rgb(0x22c55e),
        Presence::Away => rgb(0xeab308),
        Presence::Offline => rgb(0x9ca3af),
    }
}

fn matches_query(entry: &ConversationEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    entry.name.to_ascii_lowercase().contains(query)
        || entry.preview.to_ascii_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, preview: &str) -> ConversationEntry {
        ConversationEntry {
            id: ChannelId::new("dm_1"),
            name: name.to_string(),
            avatar_initial: 'A',
            presence: Presence::Online,
            preview: preview.to_string(),
            age_label: "5m".to_string(),
            unread_count: 0,
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query(&entry("Alice Wonderland", "hello"), ""));
    }

    #[test]
    fn queries_match_names_and_previews_case_insensitively() {
        let row = entry("Alice Wonderland", "Ping me when you are.");

        assert!(matches_query(&row, "alice"));
        assert!(matches_query(&row, "ping me"));
        assert!(!matches_query(&row, "bob"));
    }
}
