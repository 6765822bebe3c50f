//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::book_upload::BookUpload;
use crate::components::exercise_generation::ExerciseGeneration;
use crate::components::qa_section::QaSection;
use crate::components::status_indicator::StatusIndicator;
use crate::state::book::{BookState, DEMO_USER_ID};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the cross-panel `BookState` and lays out the three panels. The upload
/// panel changes it only through the callbacks passed down here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let book = RwSignal::new(BookState::default());
    provide_context(book);

    let has_book = Signal::derive(move || book.with(|b| b.has_book));
    let is_uploading = Signal::derive(move || book.with(|b| b.is_uploading));
    let status = Signal::derive(move || book.with(BookState::status));

    let set_uploading = Callback::new(move |uploading: bool| book.update(|b| b.set_uploading(uploading)));
    let on_book_uploaded = Callback::new(move |ready: bool| {
        leptos::logging::log!("book upload finished: ready={ready}");
        book.update(|b| b.set_has_book(ready));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/qurricular.css"/>
        <Title text="Qurricular Data Entry"/>

        <main class="app">
            <header class="app__header">
                <div class="app__brand">
                    <img class="app__logo" src="/Qurricular.svg" alt="Qurricular"/>
                    <div>
                        <h1 class="app__title">"Qurricular Data Entry"</h1>
                        <p class="app__subtitle">
                            "Upload books, generate exercises, and get answers with AI assistance"
                        </p>
                    </div>
                </div>
                <StatusIndicator status=status/>
            </header>

            <div class="app__panels">
                <BookUpload
                    is_uploading=is_uploading
                    set_uploading=set_uploading
                    on_book_uploaded=on_book_uploaded
                />
                <ExerciseGeneration has_book=has_book user_id=DEMO_USER_ID/>
                <QaSection has_book=has_book user_id=DEMO_USER_ID/>
            </div>
        </main>
    }
}
