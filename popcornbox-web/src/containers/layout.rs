use crate::containers::header::Header;
use crate::routes::MainRoute;
use web_sys::window;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current_route: MainRoute,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    // data-theme drives the DaisyUI palette
    use_effect_with((), |()| {
        if let Some(html_element) = window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            let _ = html_element.set_attribute("data-theme", "dark");
        }
        || {}
    });

    html! {
    <>
        <Header current_route={Some(props.current_route)} />
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class={classes!("flex-grow", "p-4", "transition-all", "duration-300")}>
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <div>
                    <p>{"PopcornBox · Powered by Rust, Yew and DaisyUI"}</p>
                </div>
            </footer>
        </div>
    </>
    }
}
