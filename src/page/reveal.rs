use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Waiting,
    Shown,
}

impl Reveal {
    /// Once shown an element stays shown, whatever the observer reports later.
    pub fn observe(self, intersecting: bool, ratio: f64) -> Self {
        match self {
            Reveal::Shown => Reveal::Shown,
            Reveal::Waiting if intersecting && ratio >= REVEAL_THRESHOLD => Reveal::Shown,
            Reveal::Waiting => Reveal::Waiting,
        }
    }
}

fn default_animation() -> AttrValue {
    AttrValue::Static("fade-in")
}

#[derive(Properties, PartialEq)]
pub struct RevealOnScrollProps {
    #[prop_or_else(default_animation)]
    pub animation: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealOnScrollProps) -> Html {
    let reveal = use_state_eq(|| Reveal::Waiting);
    let node = use_node_ref();

    {
        let reveal = reveal.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let mut active: Option<(IntersectionObserver, ObserverCallback)> = None;

                if let Some(element) = node.cast::<Element>() {
                    let setter = reveal.clone();
                    let callback: ObserverCallback = Closure::wrap(Box::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                let next = Reveal::Waiting
                                    .observe(entry.is_intersecting(), entry.intersection_ratio());
                                if next == Reveal::Shown {
                                    setter.set(next);
                                    observer.unobserve(&entry.target());
                                }
                            }
                        },
                    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let init = IntersectionObserverInit::new();
                    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

                    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                        Ok(observer) => {
                            observer.observe(&element);
                            active = Some((observer, callback));
                        }
                        Err(e) => {
                            warn!("IntersectionObserver unavailable, revealing immediately: {:?}", e);
                            reveal.set(Reveal::Shown);
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = active {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let animation = (*reveal == Reveal::Shown).then(|| props.animation.to_string());

    html! {
        <div ref={node} class={classes!("animate-on-scroll", props.class.clone(), animation)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_keeps_waiting() {
        assert_eq!(Reveal::Waiting.observe(true, 0.05), Reveal::Waiting);
        assert_eq!(Reveal::Waiting.observe(false, 0.0), Reveal::Waiting);
    }

    #[test]
    fn test_ten_percent_visible_reveals() {
        assert_eq!(Reveal::Waiting.observe(true, 0.1), Reveal::Shown);
        assert_eq!(Reveal::Waiting.observe(true, 1.0), Reveal::Shown);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let shown = Reveal::Waiting.observe(true, 0.5);
        assert_eq!(shown.observe(false, 0.0), Reveal::Shown);
    }
}
