use yew::prelude::*;
use log::info;

mod config;
mod wizard {
    pub mod error;
    pub mod form;
    pub mod payload;
    pub mod reference;
    pub mod state;
    pub mod steps;
    pub mod submit;
}
mod page {
    pub mod drawer;
    pub mod faq;
    pub mod header;
    pub mod landing;
    pub mod links;
    pub mod reveal;
    pub mod testimonials;
}

use page::landing::Landing;
use page::links::use_link_hygiene;


#[function_component]
fn App() -> Html {
    use_link_hygiene();

    html! {
        <Landing />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
