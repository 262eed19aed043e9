//! Static feature overview.

use leptos::prelude::*;

const FEATURES: &[&str] = &[
    "Social media and print presets with the right pixel sizes",
    "Custom resizing in pixels, percent, or physical units with DPI control",
    "JPEG, PNG, and WebP output with adjustable quality",
    "Optional crop-to-fill and metadata removal",
    "Batch processing with a single ZIP download",
    "Base64 encoding and decoding of images",
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page about-page">
            <h1>"About"</h1>
            <p>"Image Processor prepares images for the web and for print without installing anything."</p>
            <ul class="about-page__features">
                {FEATURES.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
            </ul>
        </div>
    }
}
