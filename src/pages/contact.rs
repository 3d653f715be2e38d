use log::info;
use yew::prelude::*;

use crate::components::icons::SvgIcon;
use crate::config;
use crate::content::{CONTACT_DETAILS, SERVICE_OPTIONS};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let action = config::form_action().map(AttrValue::Static);
    let method = action.as_ref().map(|_| AttrValue::Static("post"));

    // Leaves the browser's default submission in place.
    let on_submit = Callback::from(|_: SubmitEvent| {
        info!("Contact form submitted");
    });

    html! {
        <form class="contact-form" action={action} method={method} onsubmit={on_submit}>
            <div class="field">
                <label for="contact-name">{"Name"}</label>
                <input id="contact-name" name="name" type="text" placeholder="Your Name" />
            </div>
            <div class="field">
                <label for="contact-service">{"Service Needed"}</label>
                <select id="contact-service" name="service">
                    { for SERVICE_OPTIONS.iter().map(|option| html! {
                        <option key={option.to_string()} value={*option}>{*option}</option>
                    }) }
                </select>
            </div>
            <div class="field">
                <label for="contact-message">{"Message"}</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="4"
                    placeholder="Tell us about your project..."
                ></textarea>
            </div>
            <button type="submit">{"Send Message"}</button>
        </form>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="contact">
            <style>
                {r#"
                    .contact {
                        padding: 5rem 0;
                        background: #f8fafc;
                        border-top: 1px solid #e2e8f0;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }
                    .contact-intro {
                        color: #475569;
                        margin: 1.5rem 0 2rem;
                    }
                    .contact-detail {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .contact-detail-icon {
                        display: flex;
                        padding: 0.75rem;
                        border-radius: 9999px;
                        background: #dbeafe;
                        color: #2563eb;
                    }
                    .contact-detail h4 {
                        margin: 0;
                        font-weight: 700;
                        color: #0f172a;
                    }
                    .contact-detail p {
                        margin: 0.25rem 0 0;
                        color: #475569;
                    }
                    .contact-form {
                        background: #fff;
                        padding: 2rem;
                        border-radius: 2px;
                        border-top: 4px solid #3b82f6;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    }
                    .contact-form .field { margin-bottom: 1rem; }
                    .contact-form label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #334155;
                        margin-bottom: 0.25rem;
                    }
                    .contact-form input,
                    .contact-form select,
                    .contact-form textarea {
                        width: 100%;
                        padding: 0.75rem;
                        font: inherit;
                        background: #f8fafc;
                        border: 1px solid #e2e8f0;
                        border-radius: 2px;
                        transition: border-color 0.2s;
                    }
                    .contact-form input:focus,
                    .contact-form select:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #3b82f6;
                    }
                    .contact-form button {
                        width: 100%;
                        padding: 0.75rem;
                        border: none;
                        border-radius: 2px;
                        background: #1d4ed8;
                        color: #fff;
                        font-weight: 700;
                        cursor: pointer;
                        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                        transition: all 0.2s;
                    }
                    .contact-form button:hover { background: #2563eb; }
                    .contact-form button:active { transform: translateY(4px); }
                    @media (min-width: 768px) {
                        .contact-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                "#}
            </style>
            <div class="container">
                <div class="contact-grid">
                    <div>
                        <h2 class="section-title">{"Get A Quote"}</h2>
                        <p class="contact-intro">
                            {"Ready to start your project? Contact Straight Edge today for modern designs and the best prices in town."}
                        </p>
                        { for CONTACT_DETAILS.iter().map(|detail| html! {
                            <div key={detail.heading.to_string()} class="contact-detail">
                                <div class="contact-detail-icon">
                                    <SvgIcon icon={detail.icon} size={20} />
                                </div>
                                <div>
                                    <h4>{detail.heading}</h4>
                                    <p>{detail.value}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}
