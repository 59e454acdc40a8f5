use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::TESTIMONIAL_INTERVAL_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    current: usize,
    len: usize,
}

pub enum SlideAction {
    Advance,
    Show(usize),
}

impl SliderState {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn apply(self, action: SlideAction) -> Self {
        if self.len == 0 {
            return self;
        }
        let current = match action {
            SlideAction::Advance => (self.current + 1) % self.len,
            SlideAction::Show(index) if index < self.len => index,
            SlideAction::Show(_) => self.current,
        };
        Self { current, ..self }
    }
}

impl Reducible for SliderState {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "DeAgro gave us exposure to real, productive land with reporting we could actually follow.",
        author: "Mariana Lopes",
        role: "Family Office Partner",
    },
    Testimonial {
        quote: "The carbon credit component turned a solid agricultural return into an excellent one.",
        author: "Thomas Keller",
        role: "Private Investor",
    },
    Testimonial {
        quote: "Clear structure, responsive advisors and projects we are proud to be part of.",
        author: "Ahmed Al Mansoori",
        role: "Managing Director, Agri Fund",
    },
];

#[function_component(TestimonialSlider)]
pub fn testimonial_slider() -> Html {
    let slider = use_reducer(|| SliderState::new(TESTIMONIALS.len()));

    {
        let slider = slider.dispatcher();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(TESTIMONIAL_INTERVAL_MS, move || {
                    slider.dispatch(SlideAction::Advance);
                });
                move || drop(interval)
            },
            (),
        );
    }

    html! {
        <div class="testimonials">
            <div class="testimonial-slider">
                { for TESTIMONIALS.iter().enumerate().map(|(i, t)| {
                    let shown = i == slider.current();
                    html! {
                        <div class={classes!("testimonial-card", shown.then(|| "active"))}
                            style={if shown { "display: block;" } else { "display: none;" }}>
                            <p class="testimonial-quote">{t.quote}</p>
                            <p class="testimonial-author">{t.author}</p>
                            <p class="testimonial-role">{t.role}</p>
                        </div>
                    }
                })}
            </div>
            <div class="testimonial-indicators">
                { for (0..TESTIMONIALS.len()).map(|i| {
                    let onclick = {
                        let slider = slider.dispatcher();
                        Callback::from(move |_: MouseEvent| slider.dispatch(SlideAction::Show(i)))
                    };
                    html! {
                        <button class={classes!("indicator", (i == slider.current()).then(|| "active"))}
                            aria-label={format!("Show testimonial {}", i + 1)} onclick={onclick} />
                    }
                })}
            </div>
        </div>
    }
}
