use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::AppContext;
use crate::views::QuizView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let bank = ctx.bank();
    let title = bank.title().to_string();
    let subtitle = bank.subtitle().map(str::to_string);

    rsx! {
        document::Title { "{title}" }
        div { class: "container",
            header { class: "quiz-header",
                h1 { "{title}" }
                if let Some(subtitle) = subtitle {
                    p { "{subtitle}" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
