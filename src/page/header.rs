use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::HEADER_SCROLL_THRESHOLD;
use crate::page::drawer::MobileNav;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#opportunity", "Opportunity"),
    ("#testimonials", "Testimonials"),
    ("#faq", "FAQ"),
    ("#register", "Register"),
];

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

#[function_component(Header)]
pub fn header() -> Html {
    let (_, scroll_y) = use_window_scroll();

    html! {
        <header class={classes!("header", is_scrolled(scroll_y).then(|| "scrolled"))}>
            <div class="header-content">
                <a href="#top" class="logo">{"DeAgro"}</a>
                <nav class="desktop-nav">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    })}
                </nav>
                <MobileNav links={NAV_LINKS} />
            </div>
        </header>
    }
}
