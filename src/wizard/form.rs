use log::{debug, error, info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use super::error::SubmissionError;
use super::state::{Phase, SubmitRoute, WizardState};
use super::steps::{FieldKind, FieldSpec, StepSpec, LEAD_STEPS};
use super::submit::{submit_lead, SubmissionReceipt};

pub enum LeadFormMsg {
    SetValue(&'static str, String),
    ToggleChoice {
        name: &'static str,
        option: &'static str,
        checked: bool,
    },
    Next,
    Back,
    Submit,
    Finished(Result<SubmissionReceipt, SubmissionError>),
}

fn default_endpoint() -> AttrValue {
    AttrValue::Static(config::get_form_endpoint())
}

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    #[prop_or_else(default_endpoint)]
    pub endpoint: AttrValue,
}

pub struct LeadForm {
    state: WizardState,
}

impl Component for LeadForm {
    type Message = LeadFormMsg;
    type Properties = LeadFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        info!("Lead form ready, posting to {}", ctx.props().endpoint.as_str());
        Self {
            state: WizardState::new(LEAD_STEPS),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LeadFormMsg::SetValue(name, value) => {
                self.state.set_value(name, value);
                true
            }
            LeadFormMsg::ToggleChoice { name, option, checked } => {
                self.state.toggle_choice(name, option, checked);
                true
            }
            LeadFormMsg::Next => {
                match self.state.next() {
                    Ok(index) => debug!("Lead form moved to step {}", index),
                    Err(e) => debug!("Lead form stays on step {}: {}", self.state.current_index(), e),
                }
                true
            }
            LeadFormMsg::Back => {
                if let Err(e) = self.state.back() {
                    warn!("Ignoring back navigation: {}", e);
                }
                true
            }
            LeadFormMsg::Submit => {
                // Enter inside an earlier step submits the form; the state treats it as Next.
                match self.state.submit(config::SUBMISSION_SUBJECT) {
                    Ok(SubmitRoute::Advanced(index)) => debug!("Lead form moved to step {}", index),
                    Ok(SubmitRoute::Send(payload)) => {
                        info!("Submitting lead form");
                        debug!(
                            "Payload has {} fields, interests: {}",
                            payload.fields().len(),
                            payload.interests().unwrap_or("none")
                        );
                        let endpoint = ctx.props().endpoint.as_str().to_string();
                        ctx.link().send_future(async move {
                            LeadFormMsg::Finished(submit_lead(&endpoint, &payload).await)
                        });
                    }
                    Err(e) => debug!("Lead form not submitted: {}", e),
                }
                true
            }
            LeadFormMsg::Finished(Ok(receipt)) => {
                if receipt.ok == Some(false) {
                    warn!("Endpoint accepted the submission but reported ok=false");
                }
                if let Some(next) = receipt.next.as_deref() {
                    debug!("Endpoint suggested redirect to {}", next);
                }
                self.state.finish(Ok(receipt), &mut rand::thread_rng());
                if let Phase::Submitted(reference) = self.state.phase() {
                    info!("Lead form submitted, reference {}", reference);
                }
                true
            }
            LeadFormMsg::Finished(Err(e)) => {
                error!("Detailed error: {}", e);
                self.state.finish(Err(e), &mut rand::thread_rng());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if let Phase::Submitted(reference) = self.state.phase() {
            return html! {
                <div id="multi-step-form" class="multi-step-form">
                    <style>{FORM_STYLE}</style>
                    <div class="form-success">
                        <div class="success-icon">{"✓"}</div>
                        <h3>{"Thank You for Your Interest!"}</h3>
                        <p>{"Your registration has been successfully submitted. One of our investment advisors will contact you soon to discuss the next steps."}</p>
                        <p class="success-reference">
                            {"Your reference number: "}<strong>{reference.to_string()}</strong>
                        </p>
                    </div>
                </div>
            };
        }

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            LeadFormMsg::Submit
        });

        html! {
            <form id="multi-step-form" class="multi-step-form" action={ctx.props().endpoint.clone()} method="POST" onsubmit={onsubmit}>
                <style>{FORM_STYLE}</style>
                <div class="form-progress">
                    { for self.state.steps().iter().zip(self.state.progress()).enumerate().map(|(i, (step, reached))| html! {
                        <div class={classes!("progress-step", reached.then(|| "active"))}>
                            <span class="progress-number">{(i + 1).to_string()}</span>
                            <span class="progress-title">{step.title}</span>
                        </div>
                    })}
                </div>
                { for self.state.steps().iter().enumerate().map(|(i, step)| self.render_step(ctx, i, step)) }
            </form>
        }
    }
}

impl LeadForm {
    fn render_step(&self, ctx: &Context<Self>, index: usize, step: &'static StepSpec) -> Html {
        let active = index == self.state.current_index();
        let last = index + 1 == self.state.steps().len();

        html! {
            <div class={classes!("form-step", active.then(|| "active"))} data-step={step.id}>
                <h3>{step.title}</h3>
                { for step.fields.iter().map(|field| self.render_field(ctx, field)) }
                if last {
                    { self.render_error() }
                }
                <div class="form-buttons">
                    if index > 0 {
                        <button type="button" class="prev-step" onclick={ctx.link().callback(|_| LeadFormMsg::Back)}>
                            {"Back"}
                        </button>
                    }
                    if last {
                        <button type="submit" class="submit-form" disabled={self.state.is_busy()}>
                            {self.state.submit_label()}
                        </button>
                    } else {
                        <button type="button" class="next-step" onclick={ctx.link().callback(|_| LeadFormMsg::Next)}>
                            {"Next"}
                        </button>
                    }
                </div>
            </div>
        }
    }

    fn render_field(&self, ctx: &Context<Self>, field: &'static FieldSpec) -> Html {
        let name = field.name;
        let values = self.state.values();
        let invalid = self.state.is_invalid(name).then(|| "invalid");

        let control = match field.kind {
            FieldKind::Text | FieldKind::Email | FieldKind::Tel => {
                let input_type = match field.kind {
                    FieldKind::Email => "email",
                    FieldKind::Tel => "tel",
                    _ => "text",
                };
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    LeadFormMsg::SetValue(name, input.value())
                });
                html! {
                    <input type={input_type} id={name} name={name} class={classes!(invalid)}
                        value={values.get(name).to_string()} oninput={oninput} />
                }
            }
            FieldKind::TextArea => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    LeadFormMsg::SetValue(name, input.value())
                });
                html! {
                    <textarea id={name} name={name} rows="4" class={classes!(invalid)}
                        value={values.get(name).to_string()} oninput={oninput} />
                }
            }
            FieldKind::Select(options) => {
                let onchange = ctx.link().callback(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    LeadFormMsg::SetValue(name, select.value())
                });
                let current = values.get(name);
                html! {
                    <select id={name} name={name} class={classes!(invalid)} onchange={onchange}>
                        <option value="" selected={current.is_empty()}>{"Select..."}</option>
                        { for options.iter().map(|option| html! {
                            <option value={*option} selected={current == *option}>{*option}</option>
                        })}
                    </select>
                }
            }
            FieldKind::Choices(options) => html! {
                <div class={classes!("checkbox-group", invalid)}>
                    { for options.iter().copied().map(|option| {
                        let onchange = ctx.link().callback(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            LeadFormMsg::ToggleChoice { name, option, checked: input.checked() }
                        });
                        html! {
                            <label class="checkbox-label">
                                <input type="checkbox" name={name} value={option}
                                    checked={values.is_chosen(name, option)} onchange={onchange} />
                                {option}
                            </label>
                        }
                    })}
                </div>
            },
            FieldKind::Checkbox => {
                let onchange = ctx.link().callback(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let value = if input.checked() { "yes" } else { "" };
                    LeadFormMsg::SetValue(name, value.to_string())
                });
                return html! {
                    <div class="form-group">
                        <label class={classes!("checkbox-label", invalid)}>
                            <input type="checkbox" id={name} name={name} value="yes"
                                checked={!values.get(name).is_empty()} onchange={onchange} />
                            {field.label}
                        </label>
                    </div>
                };
            }
        };

        html! {
            <div class="form-group">
                <label for={name}>
                    {field.label}
                    if field.required {
                        <span class="required-mark">{" *"}</span>
                    }
                </label>
                {control}
            </div>
        }
    }

    fn render_error(&self) -> Html {
        let Some(err) = self.state.error() else {
            return html! {};
        };
        let mailto = format!("mailto:{}", config::CONTACT_EMAIL);
        html! {
            <div class="error-message" role="alert">
                <strong>{"Submission Error:"}</strong><br />
                {err.kind().message()}<br />
                <small>
                    {"Please contact us directly at "}
                    <a href={mailto} target="_blank" rel="noopener">{config::CONTACT_EMAIL}</a>
                </small><br />
                <small class="error-details">{format!("Error details: {}", err)}</small>
            </div>
        }
    }
}

const FORM_STYLE: &str = r#"
    .form-step { display: none; }
    .form-step.active { display: block; }
    .form-progress { display: flex; justify-content: space-between; margin-bottom: 2rem; }
    .progress-step { opacity: 0.4; transition: opacity 0.3s ease; }
    .progress-step.active { opacity: 1; }
    .multi-step-form .invalid { border-color: #dc3545; }
    .checkbox-label.invalid { color: #dc3545; }
    .error-message {
        color: #dc3545;
        text-align: center;
        margin-top: 1rem;
        padding: 0.5rem;
        background: rgba(220, 53, 69, 0.1);
        border-radius: 4px;
        border: 1px solid rgba(220, 53, 69, 0.3);
    }
    .error-message .error-details { color: #666; }
    .form-success { text-align: center; }
    .success-icon { font-size: 3rem; color: #28a745; }
"#;
