//! Home page highlight cards.

use leptos::prelude::*;

use crate::content::Highlight;

#[component]
pub fn HighlightCard(highlight: Highlight) -> impl IntoView {
    view! {
        <div class=format!("highlight-card {}", highlight.icon.class_modifier())>
            <span class="highlight-card__icon" aria-hidden="true">{highlight.icon.glyph()}</span>
            <h3 class="highlight-card__title">{highlight.title}</h3>
            <p class="highlight-card__description">{highlight.description}</p>
        </div>
    }
}
