//! Book upload panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only writer of cross-panel book readiness: it flips the shared
//! uploading flag around the request and reports the outcome upward through
//! `on_book_uploaded`.

use leptos::prelude::*;

use crate::components::form_group::FormGroup;
use crate::components::response_box::{ResponseBox, banner_signal};
use crate::components::spinner::{Spinner, SpinnerSize};
use crate::state::banner::Banner;
use crate::state::upload::{SelectedFile, UploadForm};

#[component]
pub fn BookUpload(
    is_uploading: Signal<bool>,
    set_uploading: Callback<bool>,
    on_book_uploaded: Callback<bool>,
) -> impl IntoView {
    let form = RwSignal::new(UploadForm::default());
    let file_input = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    let pending_file = StoredValue::new_local(None::<web_sys::File>);

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let file = event_target::<web_sys::HtmlInputElement>(&ev)
                .files()
                .and_then(|files| files.get(0));
            let selected = file.as_ref().map(|f| SelectedFile::new(f.name(), f.type_()));
            let mut kept = false;
            form.update(|f| kept = f.select_file(selected));
            pending_file.set_value(if kept { file } else { None });
            if !kept {
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
            form.update(|f| {
                f.select_file(None::<SelectedFile>);
            });
        }
    };

    let on_upload = move |_: leptos::ev::MouseEvent| {
        if is_uploading.get_untracked() {
            return;
        }
        if let Err(message) = form.with_untracked(UploadForm::validate) {
            form.update(|f| f.banner = Some(Banner::error(message)));
            return;
        }

        set_uploading.run(true);
        form.update(UploadForm::begin_submit);

        #[cfg(feature = "hydrate")]
        {
            let user_id = form.with_untracked(|f| f.user_id.clone());
            let Some(file) = pending_file.get_value() else {
                form.update(|f| {
                    f.select_file(None);
                });
                set_uploading.run(false);
                return;
            };
            leptos::task::spawn_local(async move {
                let result = crate::net::api::upload_book(&user_id, &file).await;
                if let Err(e) = &result {
                    leptos::logging::warn!("book upload failed: {e}");
                }
                let mut ready = false;
                form.update(|f| ready = f.finish_submit(result));
                if ready {
                    pending_file.set_value(None);
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                }
                on_book_uploaded.run(ready);
                set_uploading.run(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            form.update(|f| {
                let _ = f.finish_submit(Err(crate::net::api::ApiError::Unavailable));
            });
            on_book_uploaded.run(false);
            set_uploading.run(false);
        }
    };

    let banner = banner_signal(form, |f| f.banner.clone());
    let on_banner_close = Callback::new(move |()| form.update(|f| f.banner = None));

    view! {
        <section class="panel">
            <header class="panel__header">
                <span class="panel__icon" aria-hidden="true">"📖"</span>
                <h2 class="panel__title">"Upload and Process a Book"</h2>
            </header>

            <div class="panel__body">
                <FormGroup label="User ID" required=true>
                    <input
                        class="panel__input"
                        type="text"
                        placeholder="Enter your user ID"
                        prop:value=move || form.with(|f| f.user_id.clone())
                        on:input=move |ev| form.update(|f| f.user_id = event_target_value(&ev))
                        disabled=move || is_uploading.get()
                    />
                </FormGroup>

                <FormGroup label="PDF Upload" required=true>
                    <input
                        class="panel__input panel__input--file"
                        type="file"
                        accept=".pdf"
                        node_ref=file_input
                        on:change=on_file_change
                        disabled=move || is_uploading.get()
                    />
                    {move || {
                        form.with(|f| f.file.as_ref().map(|file| file.name.clone()))
                            .map(|name| view! { <p class="panel__hint panel__hint--ok">"✓ Selected: " {name}</p> })
                    }}
                </FormGroup>

                <button
                    class="btn btn--primary panel__submit"
                    on:click=on_upload
                    disabled=move || !form.with(UploadForm::is_valid) || is_uploading.get()
                >
                    <Show
                        when=move || is_uploading.get()
                        fallback=|| view! { <span>"Upload and Process Book"</span> }
                    >
                        <Spinner size=SpinnerSize::Small text="Uploading and Processing..."/>
                    </Show>
                </button>

                <ResponseBox banner=banner on_close=on_banner_close/>
            </div>
        </section>
    }
}
