use web_sys::MouseEvent;
use yew::prelude::*;

/// Which FAQ item is expanded, if any. Opening one item closes the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn toggled(self, index: usize) -> Self {
        if self.open == Some(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }

    pub fn is_open(self, index: usize) -> bool {
        self.open == Some(index)
    }
}

const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "What is DeAgro?",
        "DeAgro connects investors with regenerative agriculture projects, combining land productivity with verifiable environmental returns.",
    ),
    (
        "What is the minimum investment?",
        "Registrations start from $50,000. Smaller tickets can be discussed with an advisor on a case-by-case basis.",
    ),
    (
        "How are returns generated?",
        "Returns come from crop production, land appreciation and the sale of certified carbon credits produced by the projects.",
    ),
    (
        "What happens after I register?",
        "An investment advisor reviews your profile and contacts you to walk through the current opportunities and next steps.",
    ),
    (
        "Is my information shared with third parties?",
        "No. Your details are only used by the DeAgro team to follow up on your registration.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    // Only `click` is handled: touch taps synthesize it too, so nothing fires twice.
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "active"))}>
            <button class="faq-question" aria-expanded={props.open.to_string()} onclick={toggle}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(FaqAccordion)]
pub fn faq_accordion() -> Html {
    let accordion = use_state_eq(AccordionState::default);

    html! {
        <div class="faq-list">
            { for FAQ_ITEMS.iter().enumerate().map(|(i, (question, answer))| {
                let on_toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |_: ()| accordion.set(accordion.toggled(i)))
                };
                html! {
                    <FaqItem question={*question} answer={*answer} open={accordion.is_open(i)} on_toggle={on_toggle} />
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_count(state: AccordionState) -> usize {
        (0..FAQ_ITEMS.len()).filter(|&i| state.is_open(i)).count()
    }

    #[test]
    fn test_all_closed_initially() {
        assert_eq!(open_count(AccordionState::default()), 0);
    }

    #[test]
    fn test_opening_second_closes_first() {
        let state = AccordionState::default().toggled(0);
        assert!(state.is_open(0));
        let state = state.toggled(1);
        assert!(!state.is_open(0));
        assert!(state.is_open(1));
        assert_eq!(open_count(state), 1);
    }

    #[test]
    fn test_clicking_open_item_closes_it() {
        let state = AccordionState::default().toggled(2).toggled(2);
        assert_eq!(open_count(state), 0);
    }

    #[test]
    fn test_never_more_than_one_open() {
        let mut state = AccordionState::default();
        for i in [0, 3, 1, 1, 4, 2, 0] {
            state = state.toggled(i);
            assert!(open_count(state) <= 1);
        }
    }
}
