use dioxus::prelude::*;

use crate::views::SurveyView;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Encuesta" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Algo salió mal" }
                        pre { "{errors:?}" }
                    }
                },
                SurveyView {}
            }
        }
    }
}
