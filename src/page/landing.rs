use yew::prelude::*;

use crate::config;
use crate::page::faq::FaqAccordion;
use crate::page::header::Header;
use crate::page::reveal::RevealOnScroll;
use crate::page::testimonials::TestimonialSlider;
use crate::wizard::form::LeadForm;

#[function_component(Landing)]
pub fn landing() -> Html {
    let mailto = format!("mailto:{}", config::CONTACT_EMAIL);

    html! {
        <div class="landing-page" id="top">
            <Header />

            <section class="hero">
                <RevealOnScroll animation="fade-in">
                    <h1>{"Invest in the Future of Regenerative Agriculture"}</h1>
                    <p class="hero-subtitle">
                        {"Productive land, measurable impact and carbon credits in a single portfolio."}
                    </p>
                    <a href="#register" class="hero-cta">{"Register Your Interest"}</a>
                </RevealOnScroll>
            </section>

            <section class="about" id="about">
                <RevealOnScroll animation="slide-up">
                    <h2>{"About DeAgro"}</h2>
                    <p>{"We structure investments in regenerative farms across South America, with independent monitoring of soil, yield and emissions."}</p>
                </RevealOnScroll>
            </section>

            <section class="opportunity" id="opportunity">
                <RevealOnScroll animation="slide-up" class="opportunity-grid">
                    <div class="opportunity-card">
                        <h3>{"Land"}</h3>
                        <p>{"Direct participation in appreciating agricultural land."}</p>
                    </div>
                    <div class="opportunity-card">
                        <h3>{"Production"}</h3>
                        <p>{"Recurring revenue from certified sustainable crops."}</p>
                    </div>
                    <div class="opportunity-card">
                        <h3>{"Carbon"}</h3>
                        <p>{"Verified credits issued under the "}<a href="https://verra.org">{"Verra"}</a>{" standard."}</p>
                    </div>
                </RevealOnScroll>
            </section>

            <section class="testimonials-section" id="testimonials">
                <h2>{"What Our Investors Say"}</h2>
                <TestimonialSlider />
            </section>

            <section class="faq" id="faq">
                <h2>{"Frequently Asked Questions"}</h2>
                <FaqAccordion />
            </section>

            <section class="register" id="register">
                <h2>{"Investor Registration"}</h2>
                <LeadForm />
            </section>

            <footer class="footer">
                <p>
                    {"Questions? Write to "}
                    <a href={mailto}>{config::CONTACT_EMAIL}</a>
                </p>
                <p>
                    <a href="https://www.linkedin.com/company/deagro">{"LinkedIn"}</a>
                    {" · "}
                    <a href="/privacy.html">{"Privacy"}</a>
                </p>
            </footer>
        </div>
    }
}
