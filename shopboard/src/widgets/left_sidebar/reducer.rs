use iced::Task;
use shopboard_core::{
    LayoutIntent, NavigationIntent, PointerTarget, SwipeIntent,
};

use super::event::{LeftSidebarEffect, LeftSidebarEvent, LeftSidebarIntent};
use super::state::LeftSidebarState;

/// Reduce a left sidebar intent into state updates and effect events.
pub(crate) fn reduce(
    state: &mut LeftSidebarState,
    event: LeftSidebarIntent,
) -> Task<LeftSidebarEvent> {
    match event {
        LeftSidebarIntent::ViewportChanged(viewport) => {
            state.layout_mut().recompute(&viewport);
            Task::none()
        },
        LeftSidebarIntent::Toggle => apply(state, LayoutIntent::Toggle),
        LeftSidebarIntent::Open => apply(state, LayoutIntent::Open),
        LeftSidebarIntent::BackdropPressed => {
            apply(state, LayoutIntent::Close)
        },
        LeftSidebarIntent::Escape => apply(state, LayoutIntent::Escape),
        LeftSidebarIntent::PointerDown { position, top } => {
            match state.layout().pointer_target(position.x, position.y, top) {
                PointerTarget::Header => Task::none(),
                target => {
                    let inside = target == PointerTarget::Drawer;
                    apply(state, LayoutIntent::PointerDown { inside })
                },
            }
        },
        LeftSidebarIntent::Swipe(SwipeIntent::OpenDrawer) => {
            apply(state, LayoutIntent::Open)
        },
        LeftSidebarIntent::Swipe(SwipeIntent::CloseDrawer) => {
            apply(state, LayoutIntent::Close)
        },
        LeftSidebarIntent::ItemPressed(id) => item_pressed(state, id),
        LeftSidebarIntent::SubItemPressed { parent, id } => {
            sub_item_pressed(state, &parent, &id)
        },
        LeftSidebarIntent::TabSelected(tab) => {
            state.set_tab(tab);
            Task::none()
        },
    }
}

fn apply(
    state: &mut LeftSidebarState,
    intent: LayoutIntent,
) -> Task<LeftSidebarEvent> {
    state.layout_mut().apply(intent);
    Task::none()
}

fn item_pressed(
    state: &mut LeftSidebarState,
    id: String,
) -> Task<LeftSidebarEvent> {
    let has_sub_items =
        state.entry(&id).is_some_and(|entry| entry.has_sub_items());

    if state.layout().presentation().icon_only {
        state.layout_mut().toggle_peek();
        state.expand(&id);
    } else if has_sub_items {
        state.toggle_expanded(&id);
    }

    navigate(NavigationIntent::SelectMenuItem(id))
}

fn sub_item_pressed(
    state: &mut LeftSidebarState,
    parent: &str,
    id: &str,
) -> Task<LeftSidebarEvent> {
    let Some(intent) = state.entry(parent).and_then(|entry| {
        entry
            .sub_items
            .iter()
            .find(|sub| sub.id == id)
            .map(|sub| sub.intent(parent))
    }) else {
        log::warn!("unknown sub menu item {parent}/{id}");
        return Task::none();
    };

    if state.layout().is_peek_expanded() {
        state.layout_mut().toggle_peek();
    }
    if state.layout().state().is_drawer_mode {
        state.layout_mut().apply(LayoutIntent::Close);
    }

    navigate(intent)
}

fn navigate(intent: NavigationIntent) -> Task<LeftSidebarEvent> {
    Task::done(LeftSidebarEvent::Effect(LeftSidebarEffect::Navigate(intent)))
}
