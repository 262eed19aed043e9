//! Options form bound to `DashboardState::options`.
//!
//! DESIGN
//! ======
//! Every control writes straight into the shared record through
//! `dashboard.update`, and every visibility rule is read back from
//! `ProcessingOptions` helpers so the form holds no state of its own.

#[cfg(test)]
#[path = "resize_options_test.rs"]
mod resize_options_test;

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;
use crate::state::options::{
    Background, OutputFormat, Preset, ProcessingOptions, ResizeUnit, display_positive, parse_positive,
};

/// Caption shown next to the preset selector.
pub fn preset_caption(preset: Preset) -> String {
    match preset.dimensions() {
        Some((w, h)) if preset.is_print() => format!("{w} × {h} px at 300 DPI"),
        Some((w, h)) => format!("{w} × {h} px"),
        None => "Custom size".to_owned(),
    }
}

pub fn quality_label(quality: u8) -> String {
    format!("Quality: {quality}")
}

#[component]
pub fn ResizeOptions() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let options = Memo::new(move |_| dashboard.with(|d| d.options.clone()));
    let edit = move |f: &dyn Fn(&mut ProcessingOptions)| dashboard.update(|d| f(&mut d.options));

    view! {
        <section class="options">
            <h3>"Options"</h3>

            <label class="options__field">
                <span>"Preset"</span>
                <select
                    prop:value=move || options.get().preset.key()
                    on:change=move |ev| {
                        let preset = Preset::from_key(&event_target_value(&ev)).unwrap_or_default();
                        edit(&|o| o.preset = preset);
                    }
                >
                    {Preset::ALL
                        .into_iter()
                        .map(|p| view! { <option value=p.key()>{p.label()}</option> })
                        .collect_view()}
                </select>
                <small>{move || preset_caption(options.get().preset)}</small>
            </label>

            <Show when=move || options.get().shows_resize_inputs()>
                <div class="options__row">
                    <label class="options__field">
                        <span>"Width"</span>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || display_positive(options.get().resize.width)
                            on:input=move |ev| {
                                let width = parse_positive(&event_target_value(&ev));
                                edit(&|o| o.resize.width = width);
                            }
                        />
                    </label>
                    <label class="options__field">
                        <span>"Height"</span>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || display_positive(options.get().resize.height)
                            on:input=move |ev| {
                                let height = parse_positive(&event_target_value(&ev));
                                edit(&|o| o.resize.height = height);
                            }
                        />
                    </label>
                    <label class="options__field">
                        <span>"Unit"</span>
                        <select
                            prop:value=move || options.get().resize.unit.key()
                            on:change=move |ev| {
                                let unit = ResizeUnit::from_key(&event_target_value(&ev)).unwrap_or_default();
                                edit(&|o| o.resize.unit = unit);
                            }
                        >
                            {ResizeUnit::ALL
                                .into_iter()
                                .map(|u| view! { <option value=u.key()>{u.key()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="options__check">
                        <input
                            type="checkbox"
                            prop:checked=move || options.get().resize.lock_aspect
                            on:change=move |ev| {
                                let locked = event_target_checked(&ev);
                                edit(&|o| o.resize.lock_aspect = locked);
                            }
                        />
                        <span>"Lock aspect ratio"</span>
                    </label>
                </div>
            </Show>

            <Show when=move || options.get().shows_dpi_input()>
                <label class="options__field">
                    <span>"DPI"</span>
                    <input
                        type="number"
                        min="1"
                        placeholder="300"
                        prop:value=move || display_positive(options.get().dpi)
                        on:input=move |ev| {
                            let dpi = parse_positive(&event_target_value(&ev));
                            edit(&|o| o.dpi = dpi);
                        }
                    />
                </label>
            </Show>
            <p class="options__hint">{move || format!("Effective DPI: {}", options.get().effective_dpi())}</p>

            <label class="options__field">
                <span>"Format"</span>
                <select
                    prop:value=move || options.get().format.key()
                    on:change=move |ev| {
                        let format = OutputFormat::from_key(&event_target_value(&ev)).unwrap_or_default();
                        edit(&|o| o.set_format(format));
                    }
                >
                    {OutputFormat::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.key()>{f.label()}</option> })
                        .collect_view()}
                </select>
            </label>

            <label class="options__field">
                <span>{move || quality_label(options.get().quality)}</span>
                <input
                    type="range"
                    min="1"
                    max="100"
                    prop:value=move || options.get().quality.to_string()
                    on:input=move |ev| {
                        if let Ok(q) = event_target_value(&ev).parse::<i64>() {
                            edit(&|o| o.set_quality(q));
                        }
                    }
                />
            </label>

            <label class="options__field">
                <span>"Background"</span>
                <select
                    prop:value=move || options.get().background.key()
                    prop:disabled=move || options.get().background_locked()
                    on:change=move |ev| {
                        let background = Background::from_key(&event_target_value(&ev)).unwrap_or_default();
                        edit(&|o| o.background = background);
                    }
                >
                    {Background::ALL
                        .into_iter()
                        .map(|b| view! { <option value=b.key()>{b.label()}</option> })
                        .collect_view()}
                </select>
            </label>

            <label class="options__check">
                <input
                    type="checkbox"
                    prop:checked=move || options.get().crop
                    on:change=move |ev| {
                        let crop = event_target_checked(&ev);
                        edit(&|o| o.crop = crop);
                    }
                />
                <span>"Crop to fill"</span>
            </label>
            <label class="options__check">
                <input
                    type="checkbox"
                    prop:checked=move || options.get().remove_metadata
                    on:change=move |ev| {
                        let strip = event_target_checked(&ev);
                        edit(&|o| o.remove_metadata = strip);
                    }
                />
                <span>"Remove metadata"</span>
            </label>

            <ul class="options__notes">
                {move || {
                    options
                        .get()
                        .notes()
                        .into_iter()
                        .map(|note| view! { <li>{note}</li> })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}
