//! "Get In Touch" contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `ContactFormState` for the lifetime of the mounted form. Submits
//! through `HttpContactTransport` and reports outcomes to the shared toast
//! queue. Empty fields are blocked by the inputs' `required` attribute and
//! over-long ones by `maxlength` before the submit handler runs.

use leptos::prelude::*;

use crate::state::contact::{ContactField, ContactFormState};
use crate::state::toast::ToastQueue;

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let transport = crate::net::api::HttpContactTransport::default();
            let outcome = crate::state::contact::submit(&form, &transport, &toasts).await;
            log::debug!("contact submit finished: {outcome:?}");
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, toasts);
        }
    };

    let field_value = move |field: ContactField| form.with(|s| s.value(field).to_owned());
    let on_field_input = move |field: ContactField| {
        move |ev: leptos::ev::Event| form.update(|s| s.update_field(field, &event_target_value(&ev)))
    };
    let submitting = move || form.with(|s| s.submitting);

    view! {
        <section class="contact">
            <div class="contact__intro">
                <h2 class="contact__title">"Get In Touch"</h2>
                <p class="contact__subtitle">"Have a question or want to collaborate? Drop me a message!"</p>
            </div>
            <div class="card contact__card">
                <div class="card__header">
                    <h3 class="card__title">"✉ Contact Form"</h3>
                    <p class="card__description">"Share your thoughts and ideas with me"</p>
                </div>
                <form class="contact__form" on:submit=on_submit>
                    <label class="contact__label">
                        <span>"👤 Full Name"</span>
                        <input
                            class="contact__input"
                            type="text"
                            name=ContactField::Name.input_name()
                            maxlength=ContactField::Name.max_chars().to_string()
                            required
                            placeholder="Ex: Vasini Singh"
                            prop:value=move || field_value(ContactField::Name)
                            on:input=on_field_input(ContactField::Name)
                        />
                    </label>
                    <label class="contact__label">
                        <span>"📧 Email Address"</span>
                        <input
                            class="contact__input"
                            type="email"
                            name=ContactField::Email.input_name()
                            maxlength=ContactField::Email.max_chars().to_string()
                            required
                            placeholder="Ex: vasinisingh01@gmail.com"
                            prop:value=move || field_value(ContactField::Email)
                            on:input=on_field_input(ContactField::Email)
                        />
                    </label>
                    <label class="contact__label">
                        <span>"💬 Your Message"</span>
                        <textarea
                            class="contact__input contact__input--message"
                            name=ContactField::Message.input_name()
                            maxlength=ContactField::Message.max_chars().to_string()
                            required
                            rows="5"
                            placeholder="Write your thoughts here..."
                            prop:value=move || field_value(ContactField::Message)
                            on:input=on_field_input(ContactField::Message)
                        ></textarea>
                    </label>
                    <button class="button button--primary contact__submit" type="submit" disabled=submitting>
                        {move || if submitting() { "Sending..." } else { "Send Message" }}
                    </button>
                </form>
            </div>
        </section>
    }
}
