//! Site footer.

use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span class="footer__name">{format!("© {}", PROFILE.name)}</span>
            <a class="footer__link" href=PROFILE.linkedin.href target="_blank" rel="noopener noreferrer">
                {PROFILE.linkedin.label}
            </a>
        </footer>
    }
}
