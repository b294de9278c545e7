//! Top navigation bar with a collapsible mobile menu.

use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Navbar() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="/">{PROFILE.name}</a>
                <div class="navbar__links">
                    <a class="navbar__link" href="/aboutme">"About Me"</a>
                </div>
                <button
                    class="navbar__menu-button"
                    type="button"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="navbar__sheet">
                    <a class="navbar__sheet-link" href="/aboutme" on:click=move |_| menu_open.set(false)>
                        "About Me"
                    </a>
                </div>
            </Show>
        </nav>
        <div class="navbar__spacer" aria-hidden="true"></div>
    }
}
