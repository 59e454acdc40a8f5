use gloo_timers::callback::Timeout;
use log::{info, warn};
use url::Url;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};
use yew::prelude::*;

use crate::config::LINK_HYGIENE_DELAY_MS;

pub const NEW_TAB_ATTRIBUTES: [(&str, &str); 2] = [("target", "_blank"), ("rel", "noopener")];

/// True for `mailto:` links and absolute http(s) links pointing at another host.
pub fn opens_in_new_tab(href: &str, page_host: &str) -> bool {
    let Ok(url) = Url::parse(href.trim()) else {
        // relative links never leave the page
        return false;
    };
    match url.scheme() {
        "mailto" => true,
        "http" | "https" => url
            .host_str()
            .map_or(false, |host| !host.eq_ignore_ascii_case(page_host)),
        _ => false,
    }
}

/// Sets both new-tab attributes, stopping at the first one that fails.
pub fn apply_new_tab<E>(mut set: impl FnMut(&str, &str) -> Result<(), E>) -> Result<(), E> {
    NEW_TAB_ATTRIBUTES.iter().try_for_each(|(name, value)| set(name, value))
}

/// Gives every outbound anchor `target="_blank" rel="noopener"`. Returns how many were changed.
pub fn harden_links(document: &Document, page_host: &str) -> usize {
    let anchors = match document.query_selector_all("a[href]") {
        Ok(list) => list,
        Err(e) => {
            warn!("Could not list page links: {:?}", e);
            return 0;
        }
    };

    let mut hardened = 0;
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        if !opens_in_new_tab(&href, page_host) {
            continue;
        }
        match apply_new_tab(|name, value| anchor.set_attribute(name, value)) {
            Ok(_) => hardened += 1,
            Err(e) => warn!("Could not harden link to {}: {:?}", href, e),
        }
    }
    hardened
}

/// Runs the link pass once, shortly after the page has mounted.
#[hook]
pub fn use_link_hygiene() {
    use_effect_with_deps(
        move |_| {
            let timeout = Timeout::new(LINK_HYGIENE_DELAY_MS, || {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let host = window.location().hostname().unwrap_or_default();
                if let Some(document) = window.document() {
                    let count = harden_links(&document, &host);
                    info!("Configured {} external links to open in a new tab", count);
                }
            });
            move || drop(timeout)
        },
        (),
    );
}
