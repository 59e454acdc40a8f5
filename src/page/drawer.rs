use log::{debug, warn};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// Inline `overflow` for `<body>`: page scrolling is locked while the drawer is open.
    pub fn body_overflow(self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

fn set_body_overflow(value: &str) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        warn!("No document body to lock scrolling on");
        return;
    };
    if let Err(e) = body.style().set_property("overflow", value) {
        warn!("Failed to set body overflow: {:?}", e);
    }
}

#[derive(Properties, PartialEq)]
pub struct MobileNavProps {
    pub links: &'static [(&'static str, &'static str)],
}

#[function_component(MobileNav)]
pub fn mobile_nav(props: &MobileNavProps) -> Html {
    let drawer = use_state_eq(DrawerState::default);
    let node = use_node_ref();

    {
        // Toggle button and panel share this node, so a click on either is not "outside".
        let drawer = drawer.clone();
        use_click_away(node.clone(), move |_: Event| {
            drawer.set(DrawerState::default());
        });
    }

    {
        use_effect_with_deps(
            move |state: &DrawerState| {
                debug!("Mobile drawer open: {}", state.is_open());
                set_body_overflow(state.body_overflow());
                || ()
            },
            *drawer,
        );
    }

    let toggle = {
        let drawer = drawer.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            drawer.set(drawer.toggled());
        })
    };

    let close = {
        let drawer = drawer.clone();
        Callback::from(move |_: MouseEvent| {
            drawer.set(drawer.closed());
        })
    };

    let active = drawer.is_open().then(|| "active");

    html! {
        <div class="mobile-menu" ref={node}>
            <button id="mobile-menu-toggle" class={classes!("mobile-menu-toggle", active)}
                aria-label="Toggle navigation" aria-expanded={drawer.is_open().to_string()} onclick={toggle}>
                <span></span>
                <span></span>
                <span></span>
            </button>
            <nav id="mobile-nav" class={classes!("mobile-nav", active)}>
                { for props.links.iter().map(|(href, label)| html! {
                    <a href={*href} class="mobile-nav-link" onclick={close.clone()}>{*label}</a>
                })}
            </nav>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed_with_scroll_enabled() {
        let drawer = DrawerState::default();
        assert!(!drawer.is_open());
        assert_eq!(drawer.body_overflow(), "");
    }

    #[test]
    fn test_toggle_opens_and_locks_scroll() {
        let drawer = DrawerState::default().toggled();
        assert!(drawer.is_open());
        assert_eq!(drawer.body_overflow(), "hidden");
        assert!(!drawer.toggled().is_open());
    }

    #[test]
    fn test_close_restores_scroll() {
        let drawer = DrawerState::default().toggled().closed();
        assert!(!drawer.is_open());
        assert_eq!(drawer.body_overflow(), "");
        assert_eq!(DrawerState::default().closed(), DrawerState::default());
    }
}
