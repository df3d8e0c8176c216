use crate::app::App;

mod app;
mod components;

fn main() {
    // The cover-letter page server-renders a form with hidden fields and a
    // dedicated mount point inside it; standalone pages fall back to the body.
    let mount = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("editor-root"));

    match mount {
        Some(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        None => {
            yew::Renderer::<App>::new().render();
        }
    }
}
